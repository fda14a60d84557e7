//! Driver-facing arena
//!
//! The host calls `process_input`, `update` and `render` once per frame, in
//! that order. The arena translates collaborator queries into a `FrameInput`
//! and hands everything else to the simulation.

use crate::platform::{InputSource, Key, MouseButton};
use crate::renderer::{DrawSurface, draw_arena};
use crate::settings::{ArenaConfig, ConfigError};
use crate::sim::{ArenaState, FrameInput, GamePhase, MoveIntent, apply_input, tick};

/// Keys that count as continue/restart and as fire
const ACTION_KEYS: [Key; 2] = [Key::Space, Key::Enter];

/// Weapon damage selected by a number key (`0` selects 10)
pub fn damage_for_digit(digit: u8) -> i32 {
    if digit == 0 { 10 } else { i32::from(digit) }
}

impl FrameInput {
    /// Read one frame of input. Edge queries are consumed here, once per frame.
    pub fn read(source: &mut dyn InputSource) -> Self {
        let mut weapon_damage = None;
        for digit in 0..=9 {
            if source.was_key_pressed(Key::Digit(digit)) {
                weapon_damage = Some(damage_for_digit(digit));
            }
        }

        let clicked = source.was_mouse_button_pressed(MouseButton::Primary);
        let mut key_pressed = false;
        for key in ACTION_KEYS {
            key_pressed |= source.was_key_pressed(key);
        }
        let restart = clicked || key_pressed || weapon_damage.is_some();

        let fire = source.is_mouse_button_held(MouseButton::Primary)
            || ACTION_KEYS.iter().any(|&k| source.is_key_held(k))
            || Key::DIGITS.iter().any(|&k| source.is_key_held(k));

        let held = |a: Key, b: Key| source.is_key_held(a) || source.is_key_held(b);
        let movement = MoveIntent {
            up: held(Key::Up, Key::W),
            down: held(Key::Down, Key::S),
            left: held(Key::Left, Key::A),
            right: held(Key::Right, Key::D),
        };

        Self {
            restart,
            fire,
            aim: source.cursor_position(),
            movement,
            weapon_damage,
        }
    }
}

/// The game: owns the simulation state for the process lifetime
#[derive(Debug, Clone)]
pub struct Arena {
    state: ArenaState,
}

impl Arena {
    pub fn new(config: &ArenaConfig) -> Result<Self, ConfigError> {
        let state = ArenaState::new(config)?;
        log::info!(
            "Arena {}x{} ready with {} enemies",
            state.boundary.x,
            state.boundary.y,
            state.enemies.len()
        );
        Ok(Self { state })
    }

    pub fn state(&self) -> &ArenaState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut ArenaState {
        &mut self.state
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    pub fn is_game_over(&self) -> bool {
        self.state.is_game_over()
    }

    /// Read the input collaborator and apply it
    pub fn process_input(&mut self, input: &mut dyn InputSource) {
        let frame = FrameInput::read(input);
        apply_input(&mut self.state, &frame);
    }

    /// Advance the simulation by `dt` milliseconds. Always true.
    pub fn update(&mut self, dt: f32) -> bool {
        tick(&mut self.state, dt)
    }

    pub fn render(&self, surface: &mut dyn DrawSurface) {
        draw_arena(&self.state, surface);
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec2;

    use super::*;
    use crate::consts::FRAME_DT_MS;
    use crate::platform::InputState;
    use crate::renderer::RecordingSurface;
    use crate::settings::HeroConfig;

    fn arena() -> Arena {
        Arena::new(&ArenaConfig {
            hero: HeroConfig {
                health: 3,
                ..Default::default()
            },
            ..Default::default()
        })
        .unwrap()
    }

    fn frame(arena: &mut Arena, input: &mut InputState, surface: &mut RecordingSurface) -> bool {
        arena.process_input(input);
        let running = arena.update(FRAME_DT_MS);
        arena.render(surface);
        running
    }

    #[test]
    fn test_digit_mapping() {
        assert_eq!(damage_for_digit(0), 10);
        assert_eq!(damage_for_digit(1), 1);
        assert_eq!(damage_for_digit(9), 9);
    }

    #[test]
    fn test_frame_input_reads_controls() {
        let mut input = InputState::new();
        input.press_key(Key::W);
        input.press_key(Key::Right);
        input.press_key(Key::Digit(4));
        input.move_cursor(Vec2::new(5.0, 6.0));

        let frame = FrameInput::read(&mut input);
        assert!(frame.movement.up && frame.movement.right);
        assert!(!frame.movement.down && !frame.movement.left);
        assert_eq!(frame.weapon_damage, Some(4));
        assert!(frame.restart);
        assert!(frame.fire);
        assert_eq!(frame.aim, Vec2::new(5.0, 6.0));

        // Held digit keeps firing but is not a new selection
        let frame = FrameInput::read(&mut input);
        assert_eq!(frame.weapon_damage, None);
        assert!(!frame.restart);
        assert!(frame.fire);
    }

    #[test]
    fn test_end_to_end_game_over_and_restart() {
        let mut arena = arena();
        let mut input = InputState::new();
        let mut surface = RecordingSurface::new();
        let start_count = arena.state().enemies.len();
        assert!(arena.state().hero.mover().health() > 0);

        assert!(frame(&mut arena, &mut input, &mut surface));
        assert!(frame(&mut arena, &mut input, &mut surface));

        arena.state_mut().score = 9;
        while !arena.state().hero.is_dead() {
            let state = arena.state_mut();
            let enemy = state.enemies[0].clone();
            enemy.on_hero_collision(&mut state.hero);
        }

        assert!(frame(&mut arena, &mut input, &mut surface));
        assert_eq!(arena.phase(), GamePhase::GameOver);
        assert!(surface.texts().any(|t| t == "NEW HIGHSCORE!"));

        let frozen: Vec<Vec2> = arena.state().enemies.iter().map(|e| e.mover().pos()).collect();
        assert!(frame(&mut arena, &mut input, &mut surface));
        let now: Vec<Vec2> = arena.state().enemies.iter().map(|e| e.mover().pos()).collect();
        assert_eq!(frozen, now);

        input.press_button(MouseButton::Primary);
        frame(&mut arena, &mut input, &mut surface);
        assert_eq!(arena.phase(), GamePhase::Playing);
        assert_eq!(arena.state().score, 0);
        assert_eq!(arena.state().enemies.len(), start_count);
        assert_eq!(arena.state().high_score.best(), 9);
    }

    #[test]
    fn test_held_button_fires_at_cursor() {
        let mut arena = Arena::new(&ArenaConfig {
            enemies_at_start: 1,
            ..Default::default()
        })
        .unwrap();
        let mut input = InputState::new();
        let mut surface = RecordingSurface::new();

        // First frame arms the weapon
        frame(&mut arena, &mut input, &mut surface);

        let target = Vec2::new(1000.0, 360.0);
        {
            let enemy = &mut arena.state_mut().enemies[0];
            enemy.mover_mut().entity.center_on(target);
            enemy.mover_mut().set_health(7);
        }
        input.press_button(MouseButton::Primary);
        input.move_cursor(target);
        input.press_key(Key::Digit(7));

        frame(&mut arena, &mut input, &mut surface);
        assert_eq!(arena.state().hero.weapon().damage(), 7);
        assert!(arena.state().enemies.is_empty());
        assert!(arena.state().score > 0);
        assert_eq!(surface.count_lines(), 1);
    }
}
