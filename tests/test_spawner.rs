use rand::rngs::StdRng;
use rand::SeedableRng;

use scroll_shooter::config::{SectionConfig, StageConfig};
use scroll_shooter::drops::{drop_kind_for, roll_drop};
use scroll_shooter::entities::{EnemyKind, ItemKind, Pattern};
use scroll_shooter::render::{RecordingRenderer, SpriteId};
use scroll_shooter::spawner::*;
use scroll_shooter::stage::{Stage, Theme};

fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

// ── Spawner ───────────────────────────────────────────────────────────────────

#[test]
fn weighted_table_boundaries() {
    assert_eq!(choose_enemy(Theme::Moon, 0.0).kind, EnemyKind::Drone);
    assert_eq!(choose_enemy(Theme::Moon, 0.64).pattern, Pattern::Straight);
    assert_eq!(choose_enemy(Theme::Moon, 0.65).pattern, Pattern::Sine);
    assert_eq!(choose_enemy(Theme::Moon, 0.99).kind, EnemyKind::Turret);
    assert_eq!(choose_enemy(Theme::Space, 0.60).pattern, Pattern::Dash);
    assert_eq!(choose_enemy(Theme::Planet1, 0.10).pattern, Pattern::Wave);
    assert_eq!(choose_enemy(Theme::Planet2, 0.99).pattern, Pattern::StopShoot);
}

#[test]
fn zero_rate_never_spawns() {
    let mut rng = seeded_rng();
    let mut spawner = Spawner::new(256, 144, 60);
    let mut enemies = Vec::new();
    for _ in 0..1000 {
        spawner.update(&mut rng, 0.0, Theme::Moon, &mut enemies);
    }
    assert!(enemies.is_empty());
}

#[test]
fn spawns_enter_past_right_edge_within_height() {
    let mut rng = seeded_rng();
    let mut spawner = Spawner::new(256, 144, 60);
    let mut enemies = Vec::new();
    for _ in 0..500 {
        spawner.update(&mut rng, 0.5, Theme::Space, &mut enemies);
    }
    assert!(!enemies.is_empty());
    for e in &enemies {
        assert!(e.pos.x > 256.0);
        assert!(e.pos.y >= 8.0 && e.pos.y <= 144.0 - 32.0 + 20.0);
        assert!(e.vel.x < 0.0);
        assert_eq!(e.shoot_cooldown, 60);
    }
}

#[test]
fn formations_respect_their_cooldown() {
    let mut rng = seeded_rng();
    let mut spawner = Spawner::new(256, 144, 60);
    let mut enemies = Vec::new();
    let mut last_formation: Option<u32> = None;
    for frame in 0..2000u32 {
        let before = enemies.len();
        spawner.update(&mut rng, 1.0, Theme::Planet2, &mut enemies);
        let added = &enemies[before..];
        if added.iter().any(|e| e.pattern == Pattern::Formation) {
            assert_eq!(added.len(), 3);
            if let Some(prev) = last_formation {
                assert!(frame - prev >= FORMATION_COOLDOWN);
            }
            last_formation = Some(frame);
            assert_eq!(spawner.formation_timer(), FORMATION_COOLDOWN);
        }
    }
    assert!(last_formation.is_some());
}

#[test]
fn formation_members_follow_theme() {
    assert_eq!(formation_kinds(Theme::Moon), [EnemyKind::Drone; 3]);
    assert_eq!(formation_kinds(Theme::Space)[1], EnemyKind::Fighter);
}

// ── Stage ─────────────────────────────────────────────────────────────────────

fn short_stage() -> StageConfig {
    let section = |name: &str| SectionConfig {
        name: name.to_string(),
        distance: 10.0,
        spawn_rate: 0.1,
    };
    StageConfig {
        scroll_speed: 2.0,
        sections: vec![section("moon"), section("planet1")],
    }
}

#[test]
fn sections_advance_and_wrap() {
    let mut stage = Stage::new(&short_stage());
    assert_eq!(stage.current_section().theme, Theme::Moon);

    let changes: Vec<bool> = (0..10).map(|_| stage.update()).collect();
    assert_eq!(changes.iter().filter(|c| **c).count(), 2);
    assert!(changes[4], "10 units at 2 per frame");
    assert_eq!(stage.section_index(), 0, "wrapped back to the first section");
    assert_eq!(stage.scroll_x(), 20.0);
}

#[test]
fn empty_section_list_falls_back_to_moon() {
    let stage = Stage::new(&StageConfig {
        scroll_speed: 1.0,
        sections: Vec::new(),
    });
    assert_eq!(stage.current_section().theme, Theme::Moon);
}

#[test]
fn unknown_section_names_use_hardest_table() {
    assert_eq!(Theme::from_name("asteroids"), Theme::Planet2);
    assert_eq!(Theme::from_name("space"), Theme::Space);
}

#[test]
fn backdrop_covers_the_screen_in_both_layers() {
    let stage = Stage::new(&short_stage());
    let mut out = RecordingRenderer::default();
    stage.draw_background(&mut out, 256, 144);
    let far = out.count(SpriteId::Backdrop {
        theme: Theme::Moon,
        near: false,
    });
    let near = out.count(SpriteId::Backdrop {
        theme: Theme::Moon,
        near: true,
    });
    assert_eq!(far, 8 * 5);
    assert!(near > 0);
}

// ── Drops ─────────────────────────────────────────────────────────────────────

#[test]
fn drop_table_boundaries() {
    assert_eq!(drop_kind_for(0.0), ItemKind::Heal);
    assert_eq!(drop_kind_for(0.3999), ItemKind::Heal);
    assert_eq!(drop_kind_for(0.40), ItemKind::Power);
    assert_eq!(drop_kind_for(0.7799), ItemKind::Power);
    assert_eq!(drop_kind_for(0.78), ItemKind::Speed);
    assert_eq!(drop_kind_for(0.999), ItemKind::Speed);
}

#[test]
fn drop_chance_extremes() {
    let mut rng = seeded_rng();
    assert!((0..500).all(|_| roll_drop(&mut rng, 0.0).is_none()));
    assert!((0..500).all(|_| roll_drop(&mut rng, 1.0).is_some()));
}

#[test]
fn drop_mix_roughly_matches_weights() {
    let mut rng = seeded_rng();
    let mut heal = 0;
    let n = 10_000;
    for _ in 0..n {
        if roll_drop(&mut rng, 1.0) == Some(ItemKind::Heal) {
            heal += 1;
        }
    }
    let share = heal as f32 / n as f32;
    assert!((share - 0.40).abs() < 0.03, "heal share {share}");
}
