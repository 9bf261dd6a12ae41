//! Enemy AI step: one movement pattern per enemy, evaluated every frame.

use super::GameState;
use crate::entities::{Owner, Pattern, Projectile, ProjectileKind};
use crate::geometry::Vec2;

const DASH_FACTOR: f32 = 1.8;
const FORMATION_FACTOR: f32 = 1.2;
/// Drift factor once a stop-and-shoot enemy has parked.
const PARKED_FACTOR: f32 = 0.3;
/// Frames a stop-and-shoot enemy drifts in before parking.
const PARK_AFTER: u32 = 40;
/// Degrees of oscillation phase advanced per frame.
const WAVE_PHASE_STEP: f32 = 4.0;
const WAVE_AMPLITUDE: f32 = 0.5;
const DESPAWN_MARGIN: f32 = 24.0;

impl GameState {
    pub(super) fn update_enemies(&mut self) {
        let burn_slowdown = self.cfg.weapons.flame.burn.speed_multiplier;
        let shot_cfg = &self.cfg.enemies;

        for i in 0..self.enemies.len() {
            let e = &mut self.enemies[i];
            if !e.active {
                continue;
            }
            e.timer += 1;
            let speed_mul = if e.is_burning() { burn_slowdown } else { 1.0 };
            let mut fire_from = None;

            match e.pattern {
                Pattern::Straight => e.pos.x += e.vel.x * speed_mul,
                Pattern::Dash => e.pos.x += e.vel.x * DASH_FACTOR * speed_mul,
                Pattern::Sine | Pattern::Wave => {
                    let phase = (e.timer as f32 * WAVE_PHASE_STEP).to_radians();
                    e.pos.x += e.vel.x * speed_mul;
                    e.pos.y += phase.sin() * WAVE_AMPLITUDE * speed_mul;
                }
                Pattern::StopShoot => {
                    if e.timer < PARK_AFTER {
                        e.pos.x += e.vel.x * speed_mul;
                    } else {
                        e.pos.x += e.vel.x * PARKED_FACTOR * speed_mul;
                        e.shoot_cooldown = e.shoot_cooldown.saturating_sub(1);
                        if e.shoot_cooldown == 0 {
                            e.shoot_cooldown = shot_cfg.shoot_cooldown_frames;
                            fire_from = Some(Vec2::new(e.pos.x, e.pos.y + 3.0));
                        }
                    }
                }
                Pattern::Formation => e.pos.x += e.vel.x * FORMATION_FACTOR * speed_mul,
            }

            if e.pos.x < -DESPAWN_MARGIN
                || e.pos.y < -DESPAWN_MARGIN
                || e.pos.y > self.height + DESPAWN_MARGIN
            {
                e.active = false;
            }

            if let Some(pos) = fire_from {
                self.enemy_shots.spawn(Projectile {
                    active: true,
                    kind: ProjectileKind::EnemyShot,
                    owner: Owner::Enemy,
                    pos,
                    vel: Vec2::new(-shot_cfg.shot_speed, 0.0),
                    w: 2.0,
                    h: 2.0,
                    damage: shot_cfg.shot_damage,
                    lifetime: shot_cfg.shot_lifetime_frames,
                    radius: 0.0,
                });
            }
        }
    }
}
