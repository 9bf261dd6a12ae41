//! Heads-up display: life bar, kill count, weapon level and speed.

use crate::geometry::clamp;
use crate::render::{Renderer, SpriteId};

const BAR_X: i32 = 46;
const BAR_Y: i32 = 4;
const BAR_WIDTH: i32 = 80;
const BAR_SEGMENT: i32 = 8;
const GLYPH_WIDTH: i32 = 8;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HudStats {
    pub life: i32,
    pub max_life: i32,
    pub kills: u32,
    pub weapon_level: u32,
    pub speed: f32,
    pub max_speed: f32,
}

/// Filled width of the life bar in pixels.
pub fn life_bar_fill(life: i32, max_life: i32) -> i32 {
    let ratio = life.max(0) as f32 / max_life.max(1) as f32;
    (BAR_WIDTH as f32 * ratio) as i32
}

/// Speed relative to the cap, in tenths.
pub fn speed_readout(speed: f32, max_speed: f32) -> i32 {
    (clamp(speed / max_speed.max(f32::EPSILON), 0.0, 9.9) * 10.0) as i32
}

pub fn draw_hud(out: &mut dyn Renderer, stats: &HudStats, screen_w: i32) {
    out.text(4, 2, "LIFE");
    out.blit(38, BAR_Y, SpriteId::HudHeart);
    for x in (0..BAR_WIDTH).step_by(BAR_SEGMENT as usize) {
        out.blit(BAR_X + x, BAR_Y, SpriteId::BarEmpty);
    }
    for x in (0..life_bar_fill(stats.life, stats.max_life)).step_by(BAR_SEGMENT as usize) {
        out.blit(BAR_X + x, BAR_Y, SpriteId::BarFull);
    }

    let kills = format!("KILLS:{}", stats.kills);
    let kills_x = screen_w - GLYPH_WIDTH * kills.len() as i32 - 4;
    out.text(kills_x, 2, &kills);

    let (px, py) = (4, 16);
    out.blit(px, py, SpriteId::HudPower);
    out.text(px + 8, py - 2, &format!("P:{}", stats.weapon_level));
    out.blit(px + 40, py, SpriteId::HudSpeed);
    let speed = speed_readout(stats.speed, stats.max_speed);
    out.text(px + 48, py - 2, &format!("S:{speed}"));
}
