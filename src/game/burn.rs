//! Burning status effect.
//!
//! A burning enemy counts its burn down every frame and takes a damage tick
//! whenever its tick counter runs out. Each tick that does not kill it
//! spreads the fire to every other active enemy within the spread radius
//! that is not already burning, at half duration.

use super::GameState;
use crate::audio::AudioSink;

impl GameState {
    pub(super) fn update_burning(&mut self, audio: &mut dyn AudioSink) {
        let burn = &self.cfg.weapons.flame.burn;
        let tick_interval = burn.tick_interval_frames.max(1);
        let damage = burn.damage;
        let spread_r2 = burn.spread_radius * burn.spread_radius;
        let spread_duration = (burn.duration_frames / 2).max(1);

        for i in 0..self.enemies.len() {
            let e = &mut self.enemies[i];
            if !e.active || e.burn_timer <= 0 {
                continue;
            }
            e.burn_timer -= 1;
            e.burn_tick -= 1;
            if e.burn_tick > 0 {
                continue;
            }
            e.burn_tick = tick_interval;
            e.hp -= damage;
            if e.hp <= 0 {
                self.kill_enemy(i, audio);
                continue;
            }

            let source = e.pos;
            for (j, other) in self.enemies.iter_mut().enumerate() {
                if j == i || !other.active || other.burn_timer > 0 {
                    continue;
                }
                if (other.pos - source).length_squared() <= spread_r2 {
                    other.burn_timer = spread_duration;
                    other.burn_tick = tick_interval;
                }
            }
        }
    }
}
