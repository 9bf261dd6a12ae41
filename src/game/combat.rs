//! Collision resolution and its consequences: damage, kills, drops, bomb
//! blasts and item pickups.

use tracing::trace;

use super::{GameEvent, GameState};
use crate::audio::{AudioSink, Sound, CH_SFX};
use crate::drops::roll_drop;
use crate::entities::{Item, ItemKind, Owner, Projectile, ProjectileKind};
use crate::geometry::Vec2;

const EXPLOSION_SPEED: f32 = 1.2;
const EXPLOSION_LIFETIME: i32 = 18;
/// Angle step between explosion particles, in degrees.
const EXPLOSION_SPREAD_DEG: u32 = 37;
const KILL_PARTICLES: usize = 5;
const HIT_PARTICLES: usize = 6;
const BOMB_PARTICLES: usize = 10;

impl GameState {
    /// Runs after everything has moved this frame.
    pub(super) fn handle_collisions(&mut self, audio: &mut dyn AudioSink) {
        let player_rect = self.player.rect();
        let inv_frames = self.cfg.player.invincible_frames;

        // Ramming always destroys the enemy, whatever its hp.
        let contact_damage = self.cfg.player.contact_damage;
        for i in 0..self.enemies.len() {
            let e = &self.enemies[i];
            if !e.active || !player_rect.intersects(&e.rect()) {
                continue;
            }
            self.damage_player(contact_damage, inv_frames);
            self.enemies[i].hp = 0;
            self.kill_enemy(i, audio);
        }

        // Enemy shots are spent on contact even if the player is immune.
        for i in 0..self.enemy_shots.capacity() {
            let shot = *self.enemy_shots.slot(i);
            if !shot.active || !player_rect.intersects(&shot.rect()) {
                continue;
            }
            self.damage_player(shot.damage, inv_frames);
            self.enemy_shots.slot_mut(i).active = false;
        }

        for pi in 0..self.projectiles.capacity() {
            let p = *self.projectiles.slot(pi);
            if !p.active || p.owner != Owner::Player {
                continue;
            }
            let shot_rect = p.rect();
            let Some(ei) = self
                .enemies
                .iter()
                .position(|e| e.active && shot_rect.intersects(&e.rect()))
            else {
                continue;
            };

            self.projectiles.slot_mut(pi).active = false;
            if p.kind == ProjectileKind::Bomb {
                self.explode_bomb(&p, audio);
                continue;
            }
            let e = &mut self.enemies[ei];
            e.hp -= p.damage;
            if e.hp <= 0 {
                self.kill_enemy(ei, audio);
            }
        }

        for i in 0..self.items.len() {
            let item = self.items[i];
            if !item.active || !player_rect.intersects(&item.rect()) {
                continue;
            }
            self.items[i].active = false;
            self.apply_item(item.kind, audio);
        }
    }

    fn damage_player(&mut self, amount: i32, inv_frames: u32) {
        if self.player.apply_damage(amount, inv_frames) {
            let center = self.player.center();
            self.spawn_explosion(center, HIT_PARTICLES);
            self.events.push(GameEvent::PlayerDamaged { amount });
        }
    }

    /// The single kill path: score, explosion, and a possible drop. Calling
    /// it on an already inactive enemy does nothing.
    pub(super) fn kill_enemy(&mut self, index: usize, audio: &mut dyn AudioSink) {
        let e = &mut self.enemies[index];
        if !e.active {
            return;
        }
        e.active = false;
        let (kind, score, pos, center) = (e.kind, e.score, e.pos, e.center());

        self.kills += score;
        audio.play(CH_SFX, Sound::Explosion, false);
        self.spawn_explosion(center, KILL_PARTICLES);
        self.events.push(GameEvent::EnemyKilled { kind, score });

        if let Some(drop) = roll_drop(&mut self.rng, self.cfg.items.drop_chance) {
            self.items.push(Item::new(drop, pos, self.cfg.items.lifetime_frames));
            self.events.push(GameEvent::ItemDropped { kind: drop });
        }
    }

    /// Radial damage around the bomb's position.
    pub(super) fn explode_bomb(&mut self, bomb: &Projectile, audio: &mut dyn AudioSink) {
        let radius = bomb.radius.max(1.0);
        let center = bomb.pos;
        audio.play(CH_SFX, Sound::Explosion, false);
        self.spawn_explosion(center, BOMB_PARTICLES);
        self.events.push(GameEvent::BombExploded { radius });
        trace!(x = center.x, y = center.y, radius, "bomb detonated");

        let r2 = radius * radius;
        for i in 0..self.enemies.len() {
            let e = &mut self.enemies[i];
            if !e.active || (e.pos - center).length_squared() > r2 {
                continue;
            }
            e.hp -= bomb.damage;
            if e.hp <= 0 {
                self.kill_enemy(i, audio);
            }
        }
    }

    /// Pickup effects overwrite player state immediately.
    pub(super) fn apply_item(&mut self, kind: ItemKind, audio: &mut dyn AudioSink) {
        let items = &self.cfg.items;
        match kind {
            ItemKind::Heal => self.player.heal(items.heal_amount),
            ItemKind::Power => {
                self.player
                    .power_up(items.power_amount, self.cfg.weapons.max_level);
                self.player.grant_upgrades();
            }
            ItemKind::Speed => self.player.speed_up(items.speed_amount),
        }
        audio.play(CH_SFX, Sound::Pickup, false);
        self.events.push(GameEvent::ItemCollected { kind });
    }

    /// Ring of particles flying outwards from `center`.
    pub(super) fn spawn_explosion(&mut self, center: Vec2, count: usize) {
        for i in 0..count {
            let angle = ((i as u32 * EXPLOSION_SPREAD_DEG) % 360) as f32;
            let (sin, cos) = angle.to_radians().sin_cos();
            let vel = Vec2::new(cos, sin) * EXPLOSION_SPEED;
            self.spawn_particle(center, vel, EXPLOSION_LIFETIME);
        }
    }
}
