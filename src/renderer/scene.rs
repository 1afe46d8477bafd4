//! Scene composition: entities, HUD and banners

use glam::Vec2;

use super::{Canvas, colors};
use crate::consts::LASER_LENGTH;
use crate::sim::{Asteroid, Banner, GameState, Projectile, Ship, WeaponKind};

/// HP bar placement
const HP_BAR_MIN: Vec2 = Vec2::new(10.0, 35.0);
const HP_BAR_SIZE: Vec2 = Vec2::new(200.0, 20.0);
const LABEL_SIZE: f32 = 20.0;
const BANNER_SIZE: f32 = 40.0;

/// Blink period for the destroyed ship (seconds)
const BLINK_PERIOD: f32 = 0.4;

/// Draw one complete frame
pub fn draw_frame(state: &GameState, canvas: &mut dyn Canvas, show_hud: bool) {
    canvas.clear(colors::BACKGROUND);

    if show_hud {
        draw_hud(state, canvas);
    }

    for projectile in &state.projectiles {
        draw_projectile(projectile, canvas);
    }
    for asteroid in &state.asteroids {
        draw_asteroid(asteroid, canvas);
    }
    draw_ship(&state.ship, state.time, canvas);

    for banner in state.banners() {
        let color = match banner {
            Banner::Victory => colors::VICTORY,
            Banner::Defeat => colors::DEFEAT,
        };
        let text = banner.message();
        let width = canvas.measure_text(text, BANNER_SIZE);
        let pos = Vec2::new(
            (state.extent.width - width) * 0.5,
            (state.extent.height - BANNER_SIZE) * 0.5,
        );
        canvas.draw_text(text, pos, BANNER_SIZE, color);
    }
}

pub fn draw_asteroid(asteroid: &Asteroid, canvas: &mut dyn Canvas) {
    canvas.draw_poly(
        asteroid.position(),
        asteroid.shape.sides(),
        asteroid.radius(),
        asteroid.draw_rotation(),
        colors::ASTEROID,
    );
}

pub fn draw_projectile(projectile: &Projectile, canvas: &mut dyn Canvas) {
    let pos = projectile.position();
    match projectile.weapon {
        WeaponKind::Laser => canvas.draw_rect(
            Vec2::new(pos.x - 2.0, pos.y - LASER_LENGTH),
            Vec2::new(4.0, LASER_LENGTH),
            colors::LASER,
        ),
        WeaponKind::Bullet => canvas.draw_circle(pos, 5.0, colors::BULLET),
        WeaponKind::Triple => canvas.draw_circle(pos, 4.0, colors::BULLET),
    }
}

/// The ship is an upward triangle; once destroyed it blinks
pub fn draw_ship(ship: &Ship, time: f32, canvas: &mut dyn Canvas) {
    if !ship.alive && time.rem_euclid(BLINK_PERIOD) > BLINK_PERIOD * 0.5 {
        return;
    }
    canvas.draw_poly(ship.position(), 3, ship.radius, -90.0, colors::SHIP);
}

fn draw_hud(state: &GameState, canvas: &mut dyn Canvas) {
    let fill = Vec2::new(HP_BAR_SIZE.x * state.ship.health_fraction(), HP_BAR_SIZE.y);
    canvas.draw_rect(HP_BAR_MIN, HP_BAR_SIZE, colors::HP_BACK);
    canvas.draw_rect(HP_BAR_MIN, fill, colors::HP_FILL);
    canvas.draw_rect_lines(HP_BAR_MIN, HP_BAR_SIZE, colors::HP_FRAME);

    canvas.draw_text(
        &format!("Weapon: {}", state.fire.weapon.as_str()),
        Vec2::new(10.0, 60.0),
        LABEL_SIZE,
        colors::WEAPON_LABEL,
    );
    canvas.draw_text(
        &format!("Score: {}", state.score),
        Vec2::new(10.0, 90.0),
        LABEL_SIZE,
        colors::SCORE_LABEL,
    );
}
