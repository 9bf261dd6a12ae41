//! The in-play simulation aggregate.
//!
//! [`GameState`] exclusively owns every entity collection and pool for the
//! lifetime of one run. [`GameState::tick`] advances it by exactly one fixed
//! step; the stage order inside a tick is fixed because later stages read
//! what earlier ones wrote in the same frame.
//!
//! Enemies and items live in plain vectors that are only ever appended to
//! mid-frame. Dead entries are flagged inactive and compacted every
//! [`CLEANUP_INTERVAL`] frames so indices stay valid within a frame.

mod burn;
mod combat;
mod effects;
mod enemies;
mod weapons;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::audio::AudioSink;
use crate::config::GameConfig;
use crate::entities::{
    Enemy, EnemyKind, FlameStream, Item, ItemKind, LaserBeam, Particle, Player, Projectile,
    ShipKind, TickGate,
};
use crate::geometry::{clamp, Vec2};
use crate::input::{Action, InputSnapshot};
use crate::pool::Pool;
use crate::spawner::Spawner;
use crate::stage::Stage;

pub use effects::{FlameLick, LaserSpark, FX_SEGMENT};
pub use weapons::LaserCharge;

pub const PLAYER_SHOT_CAPACITY: usize = 128;
pub const ENEMY_SHOT_CAPACITY: usize = 64;
pub const PARTICLE_CAPACITY: usize = 160;
/// Frames between compactions of the enemy and item lists.
pub const CLEANUP_INTERVAL: u32 = 45;

const ENEMY_RESERVE: usize = 64;
const ITEM_RESERVE: usize = 32;
const EVENT_RESERVE: usize = 32;

/// Something that happened during the last tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GameEvent {
    EnemyKilled { kind: EnemyKind, score: u32 },
    PlayerDamaged { amount: i32 },
    ItemDropped { kind: ItemKind },
    ItemCollected { kind: ItemKind },
    BombExploded { radius: f32 },
    LaserFired { length: i32, width: i32, duration: i32 },
    SectionChanged { index: usize },
}

pub struct GameState {
    cfg: GameConfig,
    pub width: f32,
    pub height: f32,
    pub rng: StdRng,
    pub stage: Stage,
    pub spawner: Spawner,
    pub player: Player,
    /// Accumulated kill score.
    pub kills: u32,
    pub enemies: Vec<Enemy>,
    pub items: Vec<Item>,
    pub projectiles: Pool<Projectile>,
    pub enemy_shots: Pool<Projectile>,
    pub particles: Pool<Particle>,
    pub laser: LaserBeam,
    pub flame: FlameStream,
    laser_charge: LaserCharge,
    flame_charge_frames: u32,
    laser_fx: Vec<LaserSpark>,
    laser_fx_refresh: u32,
    flame_fx: Vec<FlameLick>,
    flame_fx_refresh: u32,
    cleanup_tick: u32,
    frame: u64,
    events: Vec<GameEvent>,
}

impl GameState {
    /// Build a fresh run. All randomness flows from `seed`.
    pub fn new(cfg: GameConfig, ship: ShipKind, seed: u64) -> Self {
        let width = cfg.window.width as f32;
        let height = cfg.window.height as f32;
        let start = Vec2::new(24.0, (cfg.window.height / 2) as f32 - 8.0);
        let player = Player::new(
            ship,
            start,
            cfg.player.max_life,
            cfg.player.base_speed,
            cfg.player.max_speed,
        );
        let laser = LaserBeam {
            length: cfg.weapons.laser.beam_length,
            width: cfg.weapons.laser.beam_width,
            damage: cfg.weapons.laser.damage,
            tick: TickGate::new(cfg.weapons.laser.tick_interval_frames),
            ..LaserBeam::default()
        };
        let flame = FlameStream {
            length: cfg.weapons.flame.range,
            width: cfg.weapons.flame.width,
            damage: cfg.weapons.flame.damage,
            tick: TickGate::new(cfg.weapons.flame.tick_interval_frames),
            ..FlameStream::default()
        };

        let laser_fx =
            Vec::with_capacity(effects::segment_count(cfg.weapons.laser.max_beam_length));
        let flame_fx = Vec::with_capacity(effects::segment_count(cfg.weapons.flame.max_range));

        Self {
            stage: Stage::new(&cfg.stage),
            spawner: Spawner::new(
                cfg.window.width,
                cfg.window.height,
                cfg.enemies.shoot_cooldown_frames,
            ),
            cfg,
            width,
            height,
            rng: StdRng::seed_from_u64(seed),
            player,
            kills: 0,
            enemies: Vec::with_capacity(ENEMY_RESERVE),
            items: Vec::with_capacity(ITEM_RESERVE),
            projectiles: Pool::new(PLAYER_SHOT_CAPACITY),
            enemy_shots: Pool::new(ENEMY_SHOT_CAPACITY),
            particles: Pool::new(PARTICLE_CAPACITY),
            laser,
            flame,
            laser_charge: LaserCharge::default(),
            flame_charge_frames: 0,
            laser_fx,
            laser_fx_refresh: 0,
            flame_fx,
            flame_fx_refresh: 0,
            cleanup_tick: 0,
            frame: 0,
            events: Vec::with_capacity(EVENT_RESERVE),
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.cfg
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Events produced by the most recent [`GameState::tick`].
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    pub fn laser_charge(&self) -> &LaserCharge {
        &self.laser_charge
    }

    pub fn flame_charge_frames(&self) -> u32 {
        self.flame_charge_frames
    }

    pub fn is_over(&self) -> bool {
        self.player.is_dead()
    }

    /// Insert an enemy directly, bypassing the spawner.
    pub fn spawn_enemy(&mut self, enemy: Enemy) {
        self.enemies.push(enemy);
    }

    pub fn active_enemies(&self) -> impl Iterator<Item = &Enemy> {
        self.enemies.iter().filter(|e| e.active)
    }

    // ── Frame step ───────────────────────────────────────────────────────────

    /// Advance the simulation by one fixed step.
    pub fn tick(&mut self, input: &InputSnapshot, audio: &mut dyn AudioSink) {
        self.events.clear();
        self.frame += 1;

        self.player.step_cooldowns();
        if self.stage.update() {
            let index = self.stage.section_index();
            self.events.push(GameEvent::SectionChanged { index });
        }
        self.move_player(input);

        let section = self.stage.current_section();
        let (rate, theme) = (section.spawn_rate, section.theme);
        self.spawner.update(&mut self.rng, rate, theme, &mut self.enemies);

        self.update_player_shooting(input, audio);
        self.update_enemies();
        self.update_projectiles(audio);
        self.update_laser(audio);
        self.update_flame(audio);
        self.update_burning(audio);
        self.update_items();
        self.update_particles();
        self.handle_collisions(audio);

        self.cleanup_tick += 1;
        if self.cleanup_tick >= CLEANUP_INTERVAL {
            self.cleanup_tick = 0;
            self.enemies.retain(|e| e.active);
            self.items.retain(|it| it.active);
        }
    }

    fn move_player(&mut self, input: &InputSnapshot) {
        let axis = |neg: Action, pos: Action| {
            (input.is_held(pos) as i32 - input.is_held(neg) as i32) as f32
        };
        let dx = axis(Action::Left, Action::Right);
        let dy = axis(Action::Up, Action::Down);
        let p = &mut self.player;
        p.pos.x = clamp(p.pos.x + dx * p.speed, 0.0, self.width - p.w);
        p.pos.y = clamp(p.pos.y + dy * p.speed, 0.0, self.height - p.h);
    }

    /// Nearest active enemy to `from`, by top-left corner.
    fn nearest_enemy(&self, from: Vec2) -> Option<Vec2> {
        self.active_enemies()
            .map(|e| (e.pos, (e.pos - from).length_squared()))
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(pos, _)| pos)
    }

    fn spawn_particle(&mut self, pos: Vec2, vel: Vec2, lifetime: i32) {
        self.particles.spawn(Particle {
            active: true,
            pos,
            vel,
            lifetime,
        });
    }
}
