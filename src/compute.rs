//! Pure weapon math.
//!
//! Every function here takes configuration plus the player's progression
//! and returns numbers; nothing is mutated. The stateful weapon code in
//! `game::weapons` calls into these so the scaling rules can be tested on
//! their own.

use crate::audio::CHARGE_TIERS;
use crate::config::{BombConfig, CannonConfig, FlameConfig, LaserConfig, MissileConfig};
use crate::geometry::{lerp, Vec2};

// ── Cannon / missile / bomb ──────────────────────────────────────────────────

/// Cooldown after a cannon volley, never below one frame.
pub fn cannon_cooldown(cfg: &CannonConfig, level: u32) -> u32 {
    cfg.cooldown_frames.saturating_sub(level.saturating_sub(1)).max(1)
}

/// Parallel shots per volley: one more every two levels, at most three.
pub fn cannon_shot_count(level: u32) -> usize {
    (1 + level.saturating_sub(1) as usize / 2).min(3)
}

/// Vertical offset of shot `index` within a volley. The centre shot flies
/// straight; side shots sit above and below it.
pub fn cannon_spread_offset(index: usize) -> f32 {
    match index {
        0 => 0.0,
        1 => -1.2,
        _ => 1.2,
    }
}

pub fn missile_cooldown(cfg: &MissileConfig, level: u32) -> u32 {
    let reduction = level.saturating_sub(1).saturating_mul(cfg.cooldown_reduction_per_level);
    cfg.cooldown_frames
        .saturating_sub(reduction)
        .max(cfg.min_cooldown_frames)
}

/// Damage bonus shared by missiles and bombs: +1 every two levels.
pub fn level_damage_bonus(level: u32) -> i32 {
    (level.saturating_sub(1) / 2) as i32
}

pub fn bomb_radius(cfg: &BombConfig, level: u32, maxed: bool) -> f32 {
    if maxed {
        return cfg.max_radius;
    }
    let grown = cfg.radius + level.saturating_sub(1) as f32 * cfg.radius_increase_per_level;
    grown.min(cfg.max_radius)
}

pub fn bomb_size(big: bool) -> f32 {
    if big {
        8.0
    } else {
        4.0
    }
}

// ── Homing ───────────────────────────────────────────────────────────────────

/// Turn `vel` towards `target` by blending the current heading with the
/// desired one at `turn_rate`, keeping the speed magnitude. Returns `vel`
/// unchanged when the target is practically on top of the projectile.
pub fn steer_toward(vel: Vec2, from: Vec2, target: Vec2, turn_rate: f32) -> Vec2 {
    let delta = target - from;
    if delta.x.abs() + delta.y.abs() <= 0.1 {
        return vel;
    }
    let desired = delta.normalized();
    let current = vel.normalized();
    let heading = current.lerp(desired, turn_rate).normalized();
    heading * vel.length()
}

// ── Charge ───────────────────────────────────────────────────────────────────

/// Charge frames over max, clamped to `[0, 1]`.
pub fn charge_ratio(charge_frames: u32, max_frames: u32) -> f32 {
    (charge_frames.min(max_frames.max(1)) as f32 / max_frames.max(1) as f32).clamp(0.0, 1.0)
}

/// Pitch tier of the laser charge cue, `0..CHARGE_TIERS`.
pub fn charge_tier(ratio: f32) -> u8 {
    let top = CHARGE_TIERS - 1;
    ((ratio * top as f32) as u32).min(top) as u8
}

/// Frames until the charge cue repeats: 10 when empty down to 3 when full.
pub fn charge_sfx_interval(ratio: f32) -> u32 {
    lerp(10.0, 3.0, ratio) as u32
}

/// Interpolate between `min` and `max`, landing exactly on `max` once the
/// ratio saturates.
fn charged(min: i32, max: i32, ratio: f32) -> i32 {
    if ratio >= 1.0 {
        max
    } else {
        lerp(min as f32, max as f32, ratio) as i32
    }
}

// ── Laser ────────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BeamStats {
    pub length: i32,
    pub width: i32,
    pub damage: i32,
    pub duration: i32,
}

/// Level-scaled baseline of the laser, before any charge.
pub fn laser_baseline(cfg: &LaserConfig, level: u32) -> BeamStats {
    let steps = level.saturating_sub(1) as i32;
    BeamStats {
        length: (cfg.beam_length + steps * cfg.beam_length_increase_per_level)
            .min(cfg.max_beam_length),
        width: (cfg.beam_width + steps * cfg.beam_width_increase_per_level)
            .min(cfg.max_beam_width),
        damage: cfg.damage,
        duration: cfg.base_duration_frames + steps * cfg.duration_increase_per_level,
    }
}

/// Beam released after charging for `charge_frames`.
pub fn laser_stats(cfg: &LaserConfig, level: u32, charge_frames: u32, maxed: bool) -> BeamStats {
    let ratio = charge_ratio(charge_frames, cfg.charge_max_frames);
    let base = laser_baseline(cfg, level);
    let max_duration = base.duration + cfg.charge_bonus_duration;
    BeamStats {
        length: charged(base.length, cfg.max_beam_length, ratio),
        width: charged(base.width, cfg.max_beam_width, ratio),
        damage: if maxed { cfg.max_damage } else { cfg.damage },
        duration: charged(base.duration, max_duration, ratio),
    }
}

// ── Flame ────────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FlameStats {
    pub length: i32,
    pub width: i32,
    pub damage: i32,
}

/// Flame size for the current ramp. Without the upgrade the ramp is always
/// empty and no bonus applies.
pub fn flame_stats(cfg: &FlameConfig, upgraded: bool, charge_frames: u32) -> FlameStats {
    let (bonus_len, bonus_w, bonus_damage, ratio) = if upgraded {
        (
            cfg.upgrade_base_bonus_range,
            cfg.upgrade_base_bonus_width,
            cfg.upgrade_base_bonus_damage,
            charge_ratio(charge_frames, cfg.charge_max_frames),
        )
    } else {
        (0, 0, 0, 0.0)
    };
    let min_len = (cfg.range + bonus_len).min(cfg.max_range);
    let min_w = (cfg.width + bonus_w).min(cfg.max_width);
    FlameStats {
        length: charged(min_len, cfg.max_range, ratio),
        width: charged(min_w, cfg.max_width, ratio),
        damage: cfg.damage + bonus_damage,
    }
}
