//! Game entity records: plain data plus the few behaviours that only touch
//! the entity itself.

use crate::geometry::{clamp, Rect, Vec2};
use crate::pool::Poolable;

// ── Kinds ────────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShipKind {
    Propeller,
    Jet,
    Fighter,
    Ufo,
}

impl ShipKind {
    pub const ALL: [ShipKind; 4] = [
        ShipKind::Propeller,
        ShipKind::Jet,
        ShipKind::Fighter,
        ShipKind::Ufo,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ShipKind::Propeller => "propeller",
            ShipKind::Jet => "jet",
            ShipKind::Fighter => "fighter",
            ShipKind::Ufo => "ufo",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EnemyKind {
    Drone,
    Fighter,
    Turret,
}

impl EnemyKind {
    pub fn hp(self) -> i32 {
        match self {
            EnemyKind::Drone => 2,
            EnemyKind::Fighter => 3,
            EnemyKind::Turret => 4,
        }
    }

    /// Kill-score awarded when destroyed.
    pub fn score(self) -> u32 {
        match self {
            EnemyKind::Drone | EnemyKind::Fighter => 1,
            EnemyKind::Turret => 2,
        }
    }

    pub fn size(self) -> (f32, f32) {
        (12.0, 8.0)
    }
}

/// Movement pattern, evaluated once per frame by the enemy AI step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Pattern {
    Straight,
    Dash,
    Sine,
    Wave,
    StopShoot,
    Formation,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ProjectileKind {
    Cannon,
    Missile,
    Bomb,
    EnemyShot,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Owner {
    Player,
    Enemy,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ItemKind {
    Heal,
    Power,
    Speed,
}

// ── Player ───────────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct Player {
    pub ship: ShipKind,
    pub pos: Vec2,
    pub w: f32,
    pub h: f32,
    pub life: i32,
    pub max_life: i32,
    /// Frames of damage immunity left.
    pub invincible: u32,
    pub speed: f32,
    pub max_speed: f32,
    pub weapon_level: u32,
    pub laser_maxed: bool,
    pub bomb_radius_maxed: bool,
    pub bomb_homing: bool,
    pub bomb_big: bool,
    pub flame_upgraded: bool,
    pub cooldown_cannon: u32,
    pub cooldown_missile: u32,
    pub cooldown_bomb: u32,
    pub cooldown_laser: u32,
}

impl Player {
    pub fn new(ship: ShipKind, pos: Vec2, max_life: i32, speed: f32, max_speed: f32) -> Self {
        let max_life = max_life.max(1);
        Self {
            ship,
            pos,
            w: 16.0,
            h: 16.0,
            life: max_life,
            max_life,
            invincible: 0,
            speed,
            max_speed,
            weapon_level: 1,
            laser_maxed: false,
            bomb_radius_maxed: false,
            bomb_homing: false,
            bomb_big: false,
            flame_upgraded: false,
            cooldown_cannon: 0,
            cooldown_missile: 0,
            cooldown_bomb: 0,
            cooldown_laser: 0,
        }
    }

    /// Hitbox inset from the sprite so grazes do not count.
    pub fn rect(&self) -> Rect {
        Rect::new(self.pos.x + 3.0, self.pos.y + 3.0, self.w - 6.0, self.h - 6.0)
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.pos.x + self.w / 2.0, self.pos.y + self.h / 2.0)
    }

    /// Returns whether damage was taken. While invincible this is a no-op
    /// and the immunity window is not refreshed.
    pub fn apply_damage(&mut self, amount: i32, invincible_frames: u32) -> bool {
        if self.invincible > 0 {
            return false;
        }
        self.life = clamp(self.life - amount, 0, self.max_life);
        self.invincible = invincible_frames;
        true
    }

    pub fn heal(&mut self, amount: i32) {
        self.life = clamp(self.life + amount, 0, self.max_life);
    }

    pub fn power_up(&mut self, amount: u32, max_level: u32) {
        self.weapon_level = clamp(self.weapon_level.saturating_add(amount), 1, max_level.max(1));
    }

    /// Grants every weapon upgrade at once; there is a single upgrade tier.
    pub fn grant_upgrades(&mut self) {
        self.laser_maxed = true;
        self.bomb_radius_maxed = true;
        self.bomb_homing = true;
        self.bomb_big = true;
        self.flame_upgraded = true;
    }

    pub fn speed_up(&mut self, amount: f32) {
        self.speed = clamp(self.speed + amount, 0.2, self.max_speed);
    }

    pub fn step_cooldowns(&mut self) {
        self.cooldown_cannon = self.cooldown_cannon.saturating_sub(1);
        self.cooldown_missile = self.cooldown_missile.saturating_sub(1);
        self.cooldown_bomb = self.cooldown_bomb.saturating_sub(1);
        self.cooldown_laser = self.cooldown_laser.saturating_sub(1);
        self.invincible = self.invincible.saturating_sub(1);
    }

    pub fn is_dead(&self) -> bool {
        self.life <= 0
    }
}

// ── Enemy ────────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug)]
pub struct Enemy {
    pub active: bool,
    pub kind: EnemyKind,
    pub pattern: Pattern,
    pub pos: Vec2,
    pub vel: Vec2,
    pub hp: i32,
    /// Frames since spawn; drives oscillation and the stop-and-shoot phase.
    pub timer: u32,
    pub w: f32,
    pub h: f32,
    pub score: u32,
    pub shoot_cooldown: u32,
    pub burn_timer: i32,
    pub burn_tick: i32,
}

impl Enemy {
    pub fn new(
        kind: EnemyKind,
        pattern: Pattern,
        pos: Vec2,
        vel: Vec2,
        shoot_cooldown: u32,
    ) -> Self {
        let (w, h) = kind.size();
        Self {
            active: true,
            kind,
            pattern,
            pos,
            vel,
            hp: kind.hp(),
            timer: 0,
            w,
            h,
            score: kind.score(),
            shoot_cooldown,
            burn_timer: 0,
            burn_tick: 0,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, self.w, self.h)
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.pos.x + self.w / 2.0, self.pos.y + self.h / 2.0)
    }

    pub fn is_burning(&self) -> bool {
        self.burn_timer > 0
    }

    /// Set on fire by direct flame contact: a fresh burn lasts `duration`
    /// and ticks immediately, a running one is topped up to at least half.
    pub fn ignite(&mut self, duration: i32) {
        if self.burn_timer <= 0 {
            self.burn_timer = duration;
            self.burn_tick = 0;
        } else {
            self.burn_timer = self.burn_timer.max(duration / 2);
        }
    }
}

// ── Projectiles ──────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug)]
pub struct Projectile {
    pub active: bool,
    pub kind: ProjectileKind,
    pub owner: Owner,
    pub pos: Vec2,
    pub vel: Vec2,
    pub w: f32,
    pub h: f32,
    pub damage: i32,
    /// Frames left before expiry.
    pub lifetime: i32,
    /// Blast radius, bombs only.
    pub radius: f32,
}

impl Projectile {
    pub fn rect(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, self.w, self.h)
    }
}

impl Default for Projectile {
    fn default() -> Self {
        Self {
            active: false,
            kind: ProjectileKind::Cannon,
            owner: Owner::Player,
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            w: 2.0,
            h: 2.0,
            damage: 1,
            lifetime: 0,
            radius: 0.0,
        }
    }
}

impl Poolable for Projectile {
    fn is_active(&self) -> bool {
        self.active
    }
}

/// Countdown gate for continuous weapons: damage is applied at most once
/// every `interval` frames, however often the beam is updated.
#[derive(Clone, Copy, Debug, Default)]
pub struct TickGate {
    pub interval: i32,
    remaining: i32,
}

impl TickGate {
    pub fn new(interval: i32) -> Self {
        Self {
            interval,
            remaining: 0,
        }
    }

    pub fn ready(&self) -> bool {
        self.remaining <= 0
    }

    pub fn consume(&mut self) {
        self.remaining = self.interval;
    }

    pub fn step(&mut self) {
        self.remaining -= 1;
    }

    pub fn reset(&mut self) {
        self.remaining = 0;
    }
}

/// Player laser. Anchored at the ship's nose and extending rightwards.
#[derive(Clone, Copy, Debug, Default)]
pub struct LaserBeam {
    pub active: bool,
    pub x: f32,
    pub y: f32,
    pub length: i32,
    pub width: i32,
    pub damage: i32,
    /// Frames left while firing.
    pub duration: i32,
    pub tick: TickGate,
}

impl LaserBeam {
    pub fn rect(&self) -> Rect {
        let width = self.width as f32;
        Rect::new(self.x, self.y - width / 2.0, self.length as f32, width)
    }

    pub fn can_tick(&self) -> bool {
        self.active && self.tick.ready()
    }

    pub fn step(&mut self) {
        if !self.active {
            return;
        }
        self.duration -= 1;
        self.tick.step();
        if self.duration <= 0 {
            self.active = false;
        }
    }
}

/// Player flamethrower stream; lives as long as the trigger is held.
#[derive(Clone, Copy, Debug, Default)]
pub struct FlameStream {
    pub active: bool,
    pub x: f32,
    pub y: f32,
    pub length: i32,
    pub width: i32,
    pub damage: i32,
    pub tick: TickGate,
}

impl FlameStream {
    pub fn rect(&self) -> Rect {
        let width = self.width as f32;
        Rect::new(self.x, self.y - width / 2.0, self.length as f32, width)
    }

    pub fn can_tick(&self) -> bool {
        self.active && self.tick.ready()
    }

    pub fn step(&mut self) {
        if self.active {
            self.tick.step();
        }
    }
}

// ── Items & particles ────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug)]
pub struct Item {
    pub active: bool,
    pub kind: ItemKind,
    pub pos: Vec2,
    pub vel: Vec2,
    pub w: f32,
    pub h: f32,
    pub lifetime: i32,
}

impl Item {
    pub fn new(kind: ItemKind, pos: Vec2, lifetime: i32) -> Self {
        Self {
            active: true,
            kind,
            pos,
            vel: Vec2::new(-0.8, 0.2),
            w: 4.0,
            h: 4.0,
            lifetime,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, self.w, self.h)
    }
}

/// Cosmetic only; never collides.
#[derive(Clone, Copy, Debug, Default)]
pub struct Particle {
    pub active: bool,
    pub pos: Vec2,
    pub vel: Vec2,
    pub lifetime: i32,
}

impl Poolable for Particle {
    fn is_active(&self) -> bool {
        self.active
    }
}
