//! Player weapons: cooldowns and firing for the three projectile weapons,
//! the charge-and-release laser, the held flamethrower, and per-frame
//! projectile flight including homing.

use tracing::trace;

use super::{GameEvent, GameState};
use crate::audio::{AudioSink, Sound, CH_CHARGE, CH_FLAME, CH_SFX};
use crate::compute::{
    bomb_radius, bomb_size, cannon_cooldown, cannon_shot_count, cannon_spread_offset,
    charge_ratio, charge_sfx_interval, charge_tier, flame_stats, laser_stats, level_damage_bonus,
    missile_cooldown, steer_toward,
};
use crate::entities::{Owner, Projectile, ProjectileKind};
use crate::geometry::Vec2;
use crate::input::{Action, InputSnapshot};

/// Offset from the ship's top-left to where beams and cannon shots leave.
const MUZZLE: Vec2 = Vec2::new(14.0, 8.0);
/// Launch point for missiles and bombs, under the wing.
const LAUNCHER: Vec2 = Vec2::new(10.0, 12.0);
/// Player shots further than this outside the field are dropped.
const FIELD_MARGIN: f32 = 24.0;

/// Laser charge in progress.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LaserCharge {
    pub charging: bool,
    pub frames: u32,
    /// Frames until the charge cue plays again.
    pub sfx_timer: u32,
}

impl GameState {
    pub(super) fn update_player_shooting(
        &mut self,
        input: &InputSnapshot,
        audio: &mut dyn AudioSink,
    ) {
        let level = self.player.weapon_level;

        if input.is_held(Action::FireCannon) && self.player.cooldown_cannon == 0 {
            self.fire_cannon(level, audio);
        }
        if input.is_held(Action::FireMissile) && self.player.cooldown_missile == 0 {
            self.fire_missile(level, audio);
        }
        if input.is_held(Action::FireBomb) && self.player.cooldown_bomb == 0 {
            self.fire_bomb(level, audio);
        }
        self.update_laser_charge(input.is_held(Action::FireLaser), level, audio);
        self.update_flame_trigger(input.is_held(Action::FireFlame), audio);
    }

    fn fire_cannon(&mut self, level: u32, audio: &mut dyn AudioSink) {
        let cfg = &self.cfg.weapons.cannon;
        self.player.cooldown_cannon = cannon_cooldown(cfg, level);
        audio.play(CH_SFX, Sound::Cannon, false);
        for i in 0..cannon_shot_count(level) {
            let dy = cannon_spread_offset(i);
            self.projectiles.spawn(Projectile {
                active: true,
                kind: ProjectileKind::Cannon,
                owner: Owner::Player,
                pos: Vec2::new(self.player.pos.x + MUZZLE.x, self.player.pos.y + 7.0 + dy),
                vel: Vec2::new(cfg.speed, dy * 0.3),
                w: 2.0,
                h: 2.0,
                damage: cfg.damage,
                lifetime: cfg.lifetime_frames,
                radius: 0.0,
            });
        }
    }

    fn fire_missile(&mut self, level: u32, audio: &mut dyn AudioSink) {
        let cfg = &self.cfg.weapons.missile;
        self.player.cooldown_missile = missile_cooldown(cfg, level);
        audio.play(CH_SFX, Sound::Missile, false);
        let missile = Projectile {
            active: true,
            kind: ProjectileKind::Missile,
            owner: Owner::Player,
            pos: self.player.pos + LAUNCHER,
            vel: Vec2::new(cfg.speed, 0.0),
            w: 4.0,
            h: 3.0,
            damage: cfg.damage + level_damage_bonus(level),
            lifetime: cfg.lifetime_frames,
            radius: 0.0,
        };
        self.projectiles.spawn(missile);
    }

    fn fire_bomb(&mut self, level: u32, audio: &mut dyn AudioSink) {
        let cfg = &self.cfg.weapons.bomb;
        self.player.cooldown_bomb = cfg.cooldown_frames;
        audio.play(CH_SFX, Sound::Bomb, false);
        let size = bomb_size(self.player.bomb_big);
        let bomb = Projectile {
            active: true,
            kind: ProjectileKind::Bomb,
            owner: Owner::Player,
            pos: self.player.pos + LAUNCHER,
            vel: Vec2::new(cfg.speed, 1.0),
            w: size,
            h: size,
            damage: cfg.damage + level_damage_bonus(level),
            lifetime: cfg.lifetime_frames,
            radius: bomb_radius(cfg, level, self.player.bomb_radius_maxed),
        };
        self.projectiles.spawn(bomb);
    }

    // ── Laser ────────────────────────────────────────────────────────────────

    /// Charge while held, fire on release. Any frame where the laser cannot
    /// fire (beam still out, or cooling down) aborts the charge.
    fn update_laser_charge(&mut self, held: bool, level: u32, audio: &mut dyn AudioSink) {
        if self.laser.active || self.player.cooldown_laser > 0 {
            self.cancel_laser_charge(audio);
            return;
        }
        if held {
            let max_frames = self.cfg.weapons.laser.charge_max_frames;
            let charge = &mut self.laser_charge;
            if !charge.charging {
                *charge = LaserCharge {
                    charging: true,
                    ..LaserCharge::default()
                };
            }
            charge.frames = (charge.frames + 1).min(max_frames);
            charge.sfx_timer = charge.sfx_timer.saturating_sub(1);
            if charge.sfx_timer == 0 {
                let ratio = charge_ratio(charge.frames, max_frames);
                audio.play(CH_CHARGE, Sound::LaserCharge(charge_tier(ratio)), false);
                charge.sfx_timer = charge_sfx_interval(ratio);
            }
        } else if self.laser_charge.charging {
            audio.stop(CH_CHARGE);
            self.fire_laser(level, audio);
            self.laser_charge = LaserCharge::default();
        }
    }

    /// Let go of every held weapon: the flame goes out and any laser charge
    /// is dropped, silencing both looping cues. A beam already fired keeps
    /// running.
    pub fn release_held_weapons(&mut self, audio: &mut dyn AudioSink) {
        if self.flame.active {
            self.flame.active = false;
            audio.stop(CH_FLAME);
        }
        self.flame_charge_frames = 0;
        self.cancel_laser_charge(audio);
    }

    fn cancel_laser_charge(&mut self, audio: &mut dyn AudioSink) {
        if self.laser_charge.charging {
            audio.stop(CH_CHARGE);
        }
        self.laser_charge = LaserCharge::default();
    }

    fn fire_laser(&mut self, level: u32, audio: &mut dyn AudioSink) {
        let cfg = &self.cfg.weapons.laser;
        let stats = laser_stats(cfg, level, self.laser_charge.frames, self.player.laser_maxed);
        self.player.cooldown_laser = cfg.cooldown_frames;
        audio.play(CH_SFX, Sound::Laser, false);

        let anchor = self.player.pos + MUZZLE;
        self.laser.active = true;
        self.laser.x = anchor.x;
        self.laser.y = anchor.y;
        self.laser.length = stats.length;
        self.laser.width = stats.width;
        self.laser.damage = stats.damage;
        self.laser.duration = stats.duration;
        self.laser.tick.interval = cfg.tick_interval_frames;
        self.laser.tick.reset();

        trace!(
            charge = self.laser_charge.frames,
            length = stats.length,
            duration = stats.duration,
            "laser fired"
        );
        self.events.push(GameEvent::LaserFired {
            length: stats.length,
            width: stats.width,
            duration: stats.duration,
        });
    }

    /// Beam follows the ship and damages everything it overlaps once per
    /// tick interval.
    pub(super) fn update_laser(&mut self, audio: &mut dyn AudioSink) {
        if !self.laser.active {
            self.laser_fx.clear();
            return;
        }
        let anchor = self.player.pos + MUZZLE;
        self.laser.x = anchor.x;
        self.laser.y = anchor.y;
        self.refresh_laser_fx();

        if self.laser.can_tick() {
            self.laser.tick.consume();
            let beam = self.laser.rect();
            for i in 0..self.enemies.len() {
                let e = &mut self.enemies[i];
                if !e.active || !beam.intersects(&e.rect()) {
                    continue;
                }
                e.hp -= self.laser.damage;
                if e.hp <= 0 {
                    self.kill_enemy(i, audio);
                }
            }
        }
        self.laser.step();
    }

    // ── Flame ────────────────────────────────────────────────────────────────

    /// Held flame. Suppressed while the laser beam is out; releasing or
    /// being suppressed stops the looping cue.
    fn update_flame_trigger(&mut self, held: bool, audio: &mut dyn AudioSink) {
        if !held || self.laser.active {
            if self.flame.active {
                self.flame.active = false;
                audio.stop(CH_FLAME);
            }
            self.flame_charge_frames = 0;
            return;
        }
        if !self.flame.active {
            self.flame.active = true;
            audio.play(CH_FLAME, Sound::FlameLoop, true);
        }
        let cfg = &self.cfg.weapons.flame;
        self.flame_charge_frames = if self.player.flame_upgraded {
            (self.flame_charge_frames + 1).min(cfg.charge_max_frames.max(1))
        } else {
            0
        };
        let stats = flame_stats(cfg, self.player.flame_upgraded, self.flame_charge_frames);
        self.flame.length = stats.length;
        self.flame.width = stats.width;
        self.flame.damage = stats.damage;
        self.flame.tick.interval = cfg.tick_interval_frames;
    }

    /// Flame damage tick: hurts and ignites everything inside the stream.
    pub(super) fn update_flame(&mut self, audio: &mut dyn AudioSink) {
        if !self.flame.active {
            self.flame_fx.clear();
            return;
        }
        let anchor = self.player.pos + MUZZLE;
        self.flame.x = anchor.x;
        self.flame.y = anchor.y;

        if self.flame.can_tick() {
            self.flame.tick.consume();
            let stream = self.flame.rect();
            let duration = self.cfg.weapons.flame.burn.duration_frames;
            for i in 0..self.enemies.len() {
                let e = &mut self.enemies[i];
                if !e.active || !stream.intersects(&e.rect()) {
                    continue;
                }
                e.hp -= self.flame.damage;
                e.ignite(duration);
                if e.hp <= 0 {
                    self.kill_enemy(i, audio);
                }
            }
        }
        self.flame.step();
        self.refresh_flame_fx();
    }

    /// True once the upgraded flame has ramped all the way.
    pub fn flame_fully_charged(&self) -> bool {
        self.player.flame_upgraded
            && self.flame_charge_frames >= self.cfg.weapons.flame.charge_max_frames
    }

    // ── Projectile flight ────────────────────────────────────────────────────

    pub(super) fn update_projectiles(&mut self, audio: &mut dyn AudioSink) {
        let missile_turn = self.cfg.weapons.missile.turn_rate;
        let bomb_turn = self.cfg.weapons.bomb.homing_turn_rate;

        for i in 0..self.projectiles.capacity() {
            let mut p = *self.projectiles.slot(i);
            if !p.active {
                continue;
            }
            p.lifetime -= 1;
            if p.lifetime <= 0 {
                p.active = false;
                *self.projectiles.slot_mut(i) = p;
                if p.kind == ProjectileKind::Bomb {
                    self.explode_bomb(&p, audio);
                }
                continue;
            }

            let turn_rate = match p.kind {
                ProjectileKind::Missile => Some(missile_turn),
                ProjectileKind::Bomb if self.player.bomb_homing => Some(bomb_turn),
                _ => None,
            };
            if let Some(rate) = turn_rate {
                if let Some(target) = self.nearest_enemy(p.pos) {
                    p.vel = steer_toward(p.vel, p.pos, target, rate);
                }
            }

            p.pos += p.vel;
            if p.pos.x > self.width + FIELD_MARGIN
                || p.pos.y < -FIELD_MARGIN
                || p.pos.y > self.height + FIELD_MARGIN
            {
                p.active = false;
            }
            *self.projectiles.slot_mut(i) = p;
        }

        for shot in self.enemy_shots.iter_mut() {
            shot.lifetime -= 1;
            if shot.lifetime <= 0 {
                shot.active = false;
                continue;
            }
            shot.pos += shot.vel;
            if shot.pos.x < -FIELD_MARGIN {
                shot.active = false;
            }
        }
    }
}
