//! Tafel Arena entry point
//!
//! Runs the arena headless: an autopilot plays a fixed number of runs against
//! a recording surface and logs the results.
//!
//! Usage: `tafel-arena [config.json] [runs]`

use glam::Vec2;

use tafel_arena::consts::{FRAME_DT_MS, MAX_WEAPON_DAMAGE};
use tafel_arena::largest_divisor_up_to;
use tafel_arena::platform::{InputState, Key, MouseButton};
use tafel_arena::renderer::RecordingSurface;
use tafel_arena::sim::ArenaState;
use tafel_arena::{Arena, ArenaConfig, ConfigError};

const DEFAULT_RUNS: u32 = 3;
/// Hard stop so a hero that never dies cannot hang the driver
const MAX_FRAMES_PER_RUN: u32 = 60 * 60 * 5;
/// Enemies closer than this push the autopilot away
const EVADE_DISTANCE: f32 = 250.0;

/// Plays the arena by holding fire on the nearest enemy with the best divisor
#[derive(Debug, Default)]
struct Autopilot {
    input: InputState,
    selected: Option<Key>,
}

impl Autopilot {
    fn digit_key(damage: i32) -> Key {
        // The `0` key selects 10
        let digit = if damage >= MAX_WEAPON_DAMAGE { 0 } else { damage };
        Key::Digit(u8::try_from(digit).unwrap_or(1))
    }

    fn select(&mut self, key: Key) {
        if self.selected == Some(key) {
            return;
        }
        if let Some(old) = self.selected.replace(key) {
            self.input.release_key(old);
        }
        self.input.press_key(key);
    }

    fn hold(&mut self, key: Key, held: bool) {
        if held {
            self.input.press_key(key);
        } else {
            self.input.release_key(key);
        }
    }

    /// Update held controls from the current state
    fn plan(&mut self, state: &ArenaState) {
        if state.is_game_over() {
            // A fresh click continues
            self.input.release_button(MouseButton::Primary);
            self.input.press_button(MouseButton::Primary);
            return;
        }

        let hero = state.hero.mover().centered();
        let nearest = state
            .enemies
            .iter()
            .filter(|e| !e.is_dead())
            .min_by(|a, b| {
                let da = a.mover().centered().distance_squared(hero);
                let db = b.mover().centered().distance_squared(hero);
                da.total_cmp(&db)
            });

        let Some(enemy) = nearest else {
            self.input.release_button(MouseButton::Primary);
            return;
        };

        let target = enemy.mover().centered();
        let damage = largest_divisor_up_to(enemy.health(), MAX_WEAPON_DAMAGE);
        self.select(Self::digit_key(damage));
        self.input.move_cursor(target);
        self.input.press_button(MouseButton::Primary);

        let away = if hero.distance(target) < EVADE_DISTANCE {
            hero - target
        } else {
            Vec2::ZERO
        };
        self.hold(Key::Left, away.x < 0.0);
        self.hold(Key::Right, away.x > 0.0);
        self.hold(Key::Up, away.y < 0.0);
        self.hold(Key::Down, away.y > 0.0);
    }
}

fn parse_args() -> Result<(ArenaConfig, u32), ConfigError> {
    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(path) => ArenaConfig::load(&path)?,
        None => ArenaConfig::default(),
    };
    let runs = match args.next() {
        Some(raw) => raw.parse().map_err(|_| ConfigError::OutOfRange {
            field: "runs",
            value: raw.clone(),
        })?,
        None => DEFAULT_RUNS,
    };
    Ok((config, runs))
}

fn main() -> Result<(), ConfigError> {
    env_logger::init();
    log::info!("Tafel Arena (headless) starting...");

    let (config, runs) = parse_args()?;
    let mut arena = Arena::new(&config)?;
    let mut pilot = Autopilot::default();
    let mut surface = RecordingSurface::new();

    for run in 1..=runs {
        let mut frames = 0;
        while !arena.is_game_over() && frames < MAX_FRAMES_PER_RUN {
            pilot.plan(arena.state());
            arena.process_input(&mut pilot.input);
            arena.update(FRAME_DT_MS);
            arena.render(&mut surface);
            frames += 1;
        }

        let state = arena.state();
        log::info!(
            "Run {run}: score {} after {:.1}s, {} enemies on field, high score {}",
            state.score,
            frames as f32 * FRAME_DT_MS / 1000.0,
            state.enemies.len(),
            state.high_score.best()
        );

        if run < runs {
            // A run cut off by the frame limit ends here
            if !arena.is_game_over() {
                let hero = &mut arena.state_mut().hero;
                let health = hero.mover().health();
                hero.take_damage(health);
                arena.update(FRAME_DT_MS);
            }
            pilot.plan(arena.state());
            arena.process_input(&mut pilot.input);
        }
    }

    log::info!("Best score: {}", arena.state().high_score.best());
    Ok(())
}
