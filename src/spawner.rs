//! Enemy spawning.
//!
//! Every frame the spawner either launches a themed formation (rarely, on
//! its own cooldown) or rolls the section's spawn rate for a single enemy
//! drawn from the section's weighted table. New enemies appear just past the
//! right edge.

use rand::Rng;

use crate::entities::{Enemy, EnemyKind, Pattern};
use crate::geometry::Vec2;
use crate::stage::Theme;

/// Frames between formations.
pub const FORMATION_COOLDOWN: u32 = 120;
/// Formation chance relative to the section spawn rate.
const FORMATION_RATE_FACTOR: f32 = 0.12;
const SPAWN_MARGIN: f32 = 10.0;
const ENTRY_VELOCITY: Vec2 = Vec2::new(-1.4, 0.0);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SpawnSpec {
    pub kind: EnemyKind,
    pub pattern: Pattern,
}

const fn spec(kind: EnemyKind, pattern: Pattern) -> SpawnSpec {
    SpawnSpec { kind, pattern }
}

/// Weighted pick for the section: each entry is (cumulative threshold, spec)
/// and the last entry catches the remainder.
pub fn choose_enemy(theme: Theme, r: f32) -> SpawnSpec {
    use EnemyKind::*;
    use Pattern::*;

    let table: [(f32, SpawnSpec); 3] = match theme {
        Theme::Moon => [
            (0.65, spec(Drone, Straight)),
            (0.88, spec(Fighter, Sine)),
            (1.0, spec(Turret, StopShoot)),
        ],
        Theme::Space => [
            (0.55, spec(Fighter, Sine)),
            (0.80, spec(Drone, Dash)),
            (1.0, spec(Turret, StopShoot)),
        ],
        Theme::Planet1 => [
            (0.45, spec(Drone, Wave)),
            (0.78, spec(Fighter, Sine)),
            (1.0, spec(Turret, StopShoot)),
        ],
        Theme::Planet2 => [
            (0.35, spec(Drone, Dash)),
            (0.70, spec(Fighter, Sine)),
            (1.0, spec(Turret, StopShoot)),
        ],
    };
    table
        .iter()
        .find(|(threshold, _)| r < *threshold)
        .map(|(_, s)| *s)
        .unwrap_or(table[2].1)
}

/// Members of a formation, top-left to bottom-right.
pub fn formation_kinds(theme: Theme) -> [EnemyKind; 3] {
    match theme {
        Theme::Moon => [EnemyKind::Drone, EnemyKind::Drone, EnemyKind::Drone],
        _ => [EnemyKind::Drone, EnemyKind::Fighter, EnemyKind::Drone],
    }
}

#[derive(Clone, Debug)]
pub struct Spawner {
    width: f32,
    height: i32,
    formation_timer: u32,
    shoot_cooldown: u32,
}

impl Spawner {
    pub fn new(screen_w: u32, screen_h: u32, shoot_cooldown: u32) -> Self {
        Self {
            width: screen_w as f32,
            height: screen_h as i32,
            formation_timer: 0,
            shoot_cooldown,
        }
    }

    pub fn formation_timer(&self) -> u32 {
        self.formation_timer
    }

    /// Run one frame of spawning, appending to `enemies`. Returns how many
    /// enemies were added.
    pub fn update(
        &mut self,
        rng: &mut impl Rng,
        spawn_rate: f32,
        theme: Theme,
        enemies: &mut Vec<Enemy>,
    ) -> usize {
        self.formation_timer = self.formation_timer.saturating_sub(1);
        if self.formation_timer == 0 && rng.gen::<f32>() < spawn_rate * FORMATION_RATE_FACTOR {
            self.formation_timer = FORMATION_COOLDOWN;
            return self.spawn_formation(rng, theme, enemies);
        }
        if rng.gen::<f32>() >= spawn_rate {
            return 0;
        }
        let chosen = choose_enemy(theme, rng.gen::<f32>());
        let x = self.width + SPAWN_MARGIN;
        let y = rng.gen_range(8..=(self.height - 32).max(8)) as f32;
        enemies.push(self.create_enemy(chosen, x, y));
        1
    }

    pub fn create_enemy(&self, spec: SpawnSpec, x: f32, y: f32) -> Enemy {
        Enemy::new(
            spec.kind,
            spec.pattern,
            Vec2::new(x, y),
            ENTRY_VELOCITY,
            self.shoot_cooldown,
        )
    }

    fn spawn_formation(&self, rng: &mut impl Rng, theme: Theme, enemies: &mut Vec<Enemy>) -> usize {
        let base_y = rng.gen_range(12..=(self.height - 48).max(12)) as f32;
        let kinds = formation_kinds(theme);
        for (i, kind) in kinds.iter().enumerate() {
            let x = self.width + SPAWN_MARGIN + i as f32 * 20.0;
            let y = base_y + i as f32 * 10.0;
            enemies.push(self.create_enemy(spec(*kind, Pattern::Formation), x, y));
        }
        kinds.len()
    }
}
