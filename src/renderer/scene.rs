//! Arena scene: entities, tracers, HUD and the game over overlay

use glam::Vec2;

use super::{Color, DrawSurface, RED, SHADE, TextAlign, TextStyle, WHITE, YELLOW};
use crate::sim::{ArenaState, Entity};

const HUD_MARGIN: f32 = 60.0;
const TRACER_WIDTH: f32 = 2.0;

/// Number drawn under an entity (enemy health, hero weapon damage)
fn draw_stat(surface: &mut dyn DrawSurface, entity: &Entity, value: i32, color: Color) {
    let center = entity.centered();
    let pos = Vec2::new(center.x, center.y + entity.sprite().size().y - 5.0);
    surface.draw_text(
        &value.to_string(),
        pos,
        TextStyle::mono(TextAlign::Center, 60.0, color),
    );
}

fn draw_entity(surface: &mut dyn DrawSurface, entity: &Entity) {
    surface.draw_sprite(entity.sprite().handle, entity.pos, entity.scale);
}

/// Draw one frame of the arena
pub fn draw_arena(state: &ArenaState, surface: &mut dyn DrawSurface) {
    surface.clear();

    let hero = state.hero.mover();
    draw_entity(surface, &hero.entity);
    for tracer in state.hero.weapon().tracers() {
        surface.draw_line(tracer.from, tracer.to, RED, TRACER_WIDTH);
    }
    draw_stat(surface, &hero.entity, state.hero.weapon().damage(), YELLOW);

    for enemy in &state.enemies {
        draw_entity(surface, &enemy.mover().entity);
        draw_stat(surface, &enemy.mover().entity, enemy.health(), WHITE);
    }

    let new_high_score = state.high_score.is_new();
    let (title, title_color, label, label_color) = if new_high_score {
        ("NEW HIGHSCORE!", YELLOW, "highscore:", YELLOW)
    } else {
        ("GAME OVER", RED, "score:", WHITE)
    };

    let size = state.boundary;
    surface.draw_text(
        &format!("score: {}", state.score),
        Vec2::new(HUD_MARGIN, HUD_MARGIN),
        TextStyle::mono(TextAlign::Left, 40.0, title_color),
    );
    surface.draw_text(
        &format!("highscore: {}", state.high_score.best()),
        Vec2::new(size.x - HUD_MARGIN, HUD_MARGIN),
        TextStyle::mono(TextAlign::Right, 40.0, RED),
    );

    if !state.is_game_over() {
        return;
    }

    let mid = size / 2.0;
    surface.fill_rect(Vec2::ZERO, size, SHADE);
    surface.draw_text(
        title,
        mid - Vec2::new(0.0, 120.0),
        TextStyle::mono(TextAlign::Center, 120.0, title_color),
    );
    surface.draw_text(
        label,
        mid - Vec2::new(0.0, 60.0),
        TextStyle::mono(TextAlign::Center, 60.0, label_color),
    );
    surface.draw_text(
        &state.score.to_string(),
        mid + Vec2::new(0.0, 60.0),
        TextStyle::mono(TextAlign::Center, 120.0, label_color),
    );
    surface.draw_text(
        "(click to retry)",
        mid + Vec2::new(0.0, 120.0),
        TextStyle::mono(TextAlign::Center, 40.0, RED),
    );
}
