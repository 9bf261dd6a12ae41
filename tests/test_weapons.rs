use scroll_shooter::audio::{AudioCommand, RecordingAudio, Sound, CH_CHARGE, CH_FLAME};
use scroll_shooter::compute::{laser_baseline, laser_stats};
use scroll_shooter::config::GameConfig;
use scroll_shooter::entities::*;
use scroll_shooter::game::{GameEvent, GameState};
use scroll_shooter::geometry::Vec2;
use scroll_shooter::input::{Action, InputSnapshot};

fn quiet_state() -> GameState {
    let mut cfg = GameConfig::default();
    for section in &mut cfg.stage.sections {
        section.spawn_rate = 0.0;
    }
    cfg.items.drop_chance = 0.0;
    GameState::new(cfg, ShipKind::Fighter, 3)
}

fn idle() -> InputSnapshot {
    InputSnapshot::default()
}

fn holding(action: Action) -> InputSnapshot {
    InputSnapshot::default().with_held(action)
}

fn laser_fired(state: &GameState) -> Option<GameEvent> {
    state
        .events()
        .iter()
        .copied()
        .find(|e| matches!(e, GameEvent::LaserFired { .. }))
}

// ── Laser ─────────────────────────────────────────────────────────────────────

#[test]
fn full_charge_releases_a_maxed_beam() {
    let mut state = quiet_state();
    let mut audio = RecordingAudio::default();
    let cfg = state.config().weapons.laser.clone();

    for _ in 0..cfg.charge_max_frames + 10 {
        state.tick(&holding(Action::FireLaser), &mut audio);
        assert!(laser_fired(&state).is_none());
    }
    assert_eq!(state.laser_charge().frames, cfg.charge_max_frames);
    state.tick(&idle(), &mut audio);

    let stats = laser_stats(&cfg, 1, cfg.charge_max_frames, false);
    assert_eq!(
        laser_fired(&state),
        Some(GameEvent::LaserFired {
            length: stats.length,
            width: stats.width,
            duration: stats.duration,
        })
    );
    assert!(state.laser.active);
    assert_eq!(state.player.cooldown_laser, cfg.cooldown_frames);
    assert_eq!(audio.played(Sound::Laser), 1);
    assert!(audio.stopped(CH_CHARGE) >= 1);
}

#[test]
fn charge_cue_climbs_through_tiers() {
    let mut state = quiet_state();
    let mut audio = RecordingAudio::default();
    for _ in 0..60 {
        state.tick(&holding(Action::FireLaser), &mut audio);
    }
    let tiers: Vec<u8> = audio
        .commands
        .iter()
        .filter_map(|c| match c {
            AudioCommand::Play {
                channel,
                sound: Sound::LaserCharge(tier),
                ..
            } if *channel == CH_CHARGE => Some(*tier),
            _ => None,
        })
        .collect();
    assert_eq!(tiers.first(), Some(&0));
    assert!(tiers.windows(2).all(|w| w[0] <= w[1]));
    assert_eq!(tiers.last(), Some(&5));
}

#[test]
fn tap_fires_a_baseline_beam() {
    let mut state = quiet_state();
    let mut audio = RecordingAudio::default();
    let cfg = state.config().weapons.laser.clone();
    state.tick(&holding(Action::FireLaser), &mut audio);
    state.tick(&idle(), &mut audio);

    let base = laser_baseline(&cfg, 1);
    match laser_fired(&state) {
        Some(GameEvent::LaserFired { length, width, .. }) => {
            assert!(length >= base.length && length < base.length + 3);
            assert_eq!(width, base.width);
        }
        other => panic!("expected a laser, got {other:?}"),
    }
}

#[test]
fn laser_damages_once_per_tick_interval() {
    let mut state = quiet_state();
    let mut audio = RecordingAudio::default();
    state.spawn_enemy(Enemy::new(
        EnemyKind::Turret,
        Pattern::Straight,
        Vec2::new(100.0, 68.0),
        Vec2::ZERO,
        60,
    ));

    state.tick(&holding(Action::FireLaser), &mut audio);
    state.tick(&idle(), &mut audio);
    assert!(state.laser.active);
    assert_eq!(state.enemies[0].hp, 3, "first tick lands on the release frame");

    for _ in 0..30 {
        state.tick(&idle(), &mut audio);
    }
    assert!(!state.laser.active);
    // 14-frame beam with a 6-frame tick: frames 0, 6 and 12.
    assert_eq!(state.enemies[0].hp, 1);
    assert!(state.enemies[0].active);
}

#[test]
fn charge_is_cancelled_while_cooling_down() {
    let mut state = quiet_state();
    let mut audio = RecordingAudio::default();
    state.player.cooldown_laser = 10;
    for _ in 0..5 {
        state.tick(&holding(Action::FireLaser), &mut audio);
    }
    assert!(!state.laser_charge().charging);
    state.tick(&idle(), &mut audio);
    assert!(laser_fired(&state).is_none());
}

// ── Flame ─────────────────────────────────────────────────────────────────────

#[test]
fn flame_loops_while_held_and_stops_on_release() {
    let mut state = quiet_state();
    let mut audio = RecordingAudio::default();
    for _ in 0..10 {
        state.tick(&holding(Action::FireFlame), &mut audio);
    }
    assert!(state.flame.active);
    assert_eq!(audio.played(Sound::FlameLoop), 1);
    assert!(audio.commands.contains(&AudioCommand::Play {
        channel: CH_FLAME,
        sound: Sound::FlameLoop,
        looped: true,
    }));

    state.tick(&idle(), &mut audio);
    assert!(!state.flame.active);
    assert_eq!(audio.stopped(CH_FLAME), 1);
    assert_eq!(state.flame_charge_frames(), 0);
    assert!(state.flame_fx().is_empty());
}

#[test]
fn laser_suppresses_flame() {
    let mut state = quiet_state();
    let mut audio = RecordingAudio::default();
    state.tick(&holding(Action::FireLaser), &mut audio);
    state.tick(&idle(), &mut audio);
    assert!(state.laser.active);

    state.tick(&holding(Action::FireFlame), &mut audio);
    assert!(!state.flame.active);
    assert_eq!(audio.played(Sound::FlameLoop), 0);
}

#[test]
fn flame_ignites_what_it_touches() {
    let mut state = quiet_state();
    let mut audio = RecordingAudio::default();
    state.spawn_enemy(Enemy::new(
        EnemyKind::Turret,
        Pattern::Straight,
        Vec2::new(60.0, 68.0),
        Vec2::ZERO,
        60,
    ));
    state.tick(&holding(Action::FireFlame), &mut audio);
    assert!(state.enemies[0].is_burning());
    assert!(state.enemies[0].hp < 4);
}

#[test]
fn upgraded_flame_turns_blue_when_fully_ramped() {
    let mut state = quiet_state();
    let mut audio = RecordingAudio::default();
    state.player.grant_upgrades();
    let max = state.config().weapons.flame.charge_max_frames;
    for _ in 0..max - 1 {
        state.tick(&holding(Action::FireFlame), &mut audio);
    }
    assert!(!state.flame_fully_charged());
    state.tick(&holding(Action::FireFlame), &mut audio);
    assert!(state.flame_fully_charged());
    assert_eq!(state.flame_charge_frames(), max);
    assert_eq!(state.flame.length, state.config().weapons.flame.max_range);
}

// ── Missiles and bombs ────────────────────────────────────────────────────────

fn first_shot(state: &GameState, kind: ProjectileKind) -> Projectile {
    *state
        .projectiles
        .iter()
        .find(|p| p.kind == kind)
        .expect("projectile in flight")
}

#[test]
fn missile_flies_straight_without_targets() {
    let mut state = quiet_state();
    let mut audio = RecordingAudio::default();
    state.tick(&holding(Action::FireMissile), &mut audio);
    for _ in 0..20 {
        state.tick(&idle(), &mut audio);
    }
    let m = first_shot(&state, ProjectileKind::Missile);
    assert_eq!(m.vel, Vec2::new(3.0, 0.0));
    assert_eq!(m.pos.y, state.player.pos.y + 12.0);
}

#[test]
fn missile_homes_on_nearest_enemy() {
    let mut state = quiet_state();
    let mut audio = RecordingAudio::default();
    state.spawn_enemy(Enemy::new(
        EnemyKind::Turret,
        Pattern::Straight,
        Vec2::new(200.0, 130.0),
        Vec2::ZERO,
        60,
    ));
    state.tick(&holding(Action::FireMissile), &mut audio);
    for _ in 0..5 {
        state.tick(&idle(), &mut audio);
    }
    let m = first_shot(&state, ProjectileKind::Missile);
    assert!(m.vel.y > 0.0);
    assert!((m.vel.length() - 3.0).abs() < 1e-3);
}

#[test]
fn bombs_only_home_after_upgrade() {
    let mut state = quiet_state();
    let mut audio = RecordingAudio::default();
    state.spawn_enemy(Enemy::new(
        EnemyKind::Turret,
        Pattern::Straight,
        Vec2::new(200.0, 10.0),
        Vec2::ZERO,
        60,
    ));
    state.tick(&holding(Action::FireBomb), &mut audio);
    let plain = first_shot(&state, ProjectileKind::Bomb);
    assert_eq!(plain.vel, Vec2::new(2.4, 1.0));
    assert_eq!(plain.w, 4.0);

    let mut state = quiet_state();
    state.spawn_enemy(Enemy::new(
        EnemyKind::Turret,
        Pattern::Straight,
        Vec2::new(200.0, 10.0),
        Vec2::ZERO,
        60,
    ));
    state.player.grant_upgrades();
    state.tick(&holding(Action::FireBomb), &mut audio);
    let homing = first_shot(&state, ProjectileKind::Bomb);
    assert!(homing.vel.y < 1.0);
    assert_eq!(homing.w, 8.0);
    assert_eq!(homing.radius, 36.0);
}

#[test]
fn cannon_volley_widens_with_level() {
    let mut state = quiet_state();
    let mut audio = RecordingAudio::default();
    state.player.weapon_level = 5;
    state.tick(&holding(Action::FireCannon), &mut audio);
    assert_eq!(state.projectiles.active_count(), 3);

    let mut ys: Vec<f32> = state.projectiles.iter().map(|p| p.pos.y).collect();
    ys.sort_by(f32::total_cmp);
    ys.dedup();
    assert_eq!(ys.len(), 3, "no two shots share a lane");
}
