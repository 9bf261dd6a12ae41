//! Items, particles and the beam jitter the draw pass reads.

use rand::Rng;

use super::GameState;

/// Beam and flame overlays are laid out in segments of this many pixels.
pub const FX_SEGMENT: i32 = 8;
const LASER_FX_REFRESH: u32 = 3;
const FLAME_FX_REFRESH: u32 = 2;
const LASER_BRANCH_CHANCE: f64 = 0.20;
const ITEM_DESPAWN_X: f32 = -16.0;

/// One segment of the laser's lightning overlay.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LaserSpark {
    pub dy: i32,
    pub variant: u8,
    /// -1, 0 or 1: direction of a side branch, if any.
    pub branch: i8,
}

/// One segment of the flame stream.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FlameLick {
    pub dy: i32,
    pub variant: u8,
}

pub(super) fn segment_count(length: i32) -> usize {
    ((length.max(1) + FX_SEGMENT - 1) / FX_SEGMENT).max(1) as usize
}

impl GameState {
    pub fn laser_fx(&self) -> &[LaserSpark] {
        &self.laser_fx
    }

    pub fn flame_fx(&self) -> &[FlameLick] {
        &self.flame_fx
    }

    pub(super) fn update_items(&mut self) {
        for it in self.items.iter_mut().filter(|it| it.active) {
            it.lifetime -= 1;
            it.pos += it.vel;
            if it.lifetime <= 0 || it.pos.x < ITEM_DESPAWN_X {
                it.active = false;
            }
        }
    }

    pub(super) fn update_particles(&mut self) {
        for fx in self.particles.iter_mut() {
            fx.lifetime -= 1;
            fx.pos += fx.vel;
            if fx.lifetime <= 0 {
                fx.active = false;
            }
        }
    }

    /// Re-roll the lightning overlay every few frames while the beam is out.
    pub(super) fn refresh_laser_fx(&mut self) {
        let count = segment_count(self.laser.length);
        if self.laser_fx.len() != count {
            self.laser_fx.clear();
            self.laser_fx.resize(count, LaserSpark::default());
            self.laser_fx_refresh = 0;
        }
        self.laser_fx_refresh = self.laser_fx_refresh.saturating_sub(1);
        if self.laser_fx_refresh > 0 {
            return;
        }
        self.laser_fx_refresh = LASER_FX_REFRESH;

        let amp = self.laser.width.max(1);
        for (i, spark) in self.laser_fx.iter_mut().enumerate() {
            spark.dy = self.rng.gen_range(-amp..=amp);
            spark.variant = self.rng.gen_range(0..=1);
            spark.branch = if self.rng.gen_bool(LASER_BRANCH_CHANCE) {
                if i % 2 == 0 {
                    -1
                } else {
                    1
                }
            } else {
                0
            };
        }
    }

    pub(super) fn refresh_flame_fx(&mut self) {
        let count = segment_count(self.flame.length);
        if self.flame_fx.len() != count {
            self.flame_fx.clear();
            self.flame_fx.resize(count, FlameLick::default());
            self.flame_fx_refresh = 0;
        }
        self.flame_fx_refresh = self.flame_fx_refresh.saturating_sub(1);
        if self.flame_fx_refresh > 0 {
            return;
        }
        self.flame_fx_refresh = FLAME_FX_REFRESH;

        let amp = (self.flame.width / 3).max(1);
        for lick in self.flame_fx.iter_mut() {
            lick.dy = self.rng.gen_range(-amp..=amp);
            lick.variant = self.rng.gen_range(0..=1);
        }
    }
}
