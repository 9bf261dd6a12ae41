use scroll_shooter::audio::RecordingAudio;
use scroll_shooter::config::GameConfig;
use scroll_shooter::entities::*;
use scroll_shooter::game::GameState;
use scroll_shooter::geometry::Vec2;
use scroll_shooter::input::InputSnapshot;

fn quiet_state() -> GameState {
    let mut cfg = GameConfig::default();
    for section in &mut cfg.stage.sections {
        section.spawn_rate = 0.0;
    }
    cfg.items.drop_chance = 0.0;
    GameState::new(cfg, ShipKind::Propeller, 5)
}

fn enemy(pattern: Pattern, x: f32, y: f32, shoot_cooldown: u32) -> Enemy {
    Enemy::new(
        EnemyKind::Turret,
        pattern,
        Vec2::new(x, y),
        Vec2::new(-1.0, 0.0),
        shoot_cooldown,
    )
}

fn idle(state: &mut GameState, frames: usize, audio: &mut RecordingAudio) {
    for _ in 0..frames {
        state.tick(&InputSnapshot::default(), audio);
    }
}

fn close(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-2
}

// ── Patterns ──────────────────────────────────────────────────────────────────

#[test]
fn patterns_scale_their_drift() {
    let mut state = quiet_state();
    let mut audio = RecordingAudio::default();
    state.spawn_enemy(enemy(Pattern::Straight, 200.0, 10.0, 60));
    state.spawn_enemy(enemy(Pattern::Dash, 200.0, 50.0, 60));
    state.spawn_enemy(enemy(Pattern::Formation, 200.0, 110.0, 60));

    idle(&mut state, 10, &mut audio);

    let xs: Vec<f32> = state.enemies.iter().map(|e| e.pos.x).collect();
    assert!(close(xs[0], 190.0), "straight at {}", xs[0]);
    assert!(close(xs[1], 182.0), "dash at {}", xs[1]);
    assert!(close(xs[2], 188.0), "formation at {}", xs[2]);
}

#[test]
fn sine_and_wave_oscillate_over_a_full_period() {
    let mut state = quiet_state();
    let mut audio = RecordingAudio::default();
    state.spawn_enemy(enemy(Pattern::Sine, 250.0, 40.0, 60));
    state.spawn_enemy(enemy(Pattern::Wave, 250.0, 100.0, 60));

    idle(&mut state, 20, &mut audio);
    assert!(state.enemies[0].pos.y > 40.0);
    assert!(state.enemies[1].pos.y > 100.0);
    assert!(close(state.enemies[0].pos.x, 230.0));

    // 4 degrees a frame: 90 frames is one whole swing.
    idle(&mut state, 70, &mut audio);
    assert!(close(state.enemies[0].pos.y, 40.0));
    assert!(close(state.enemies[1].pos.y, 100.0));
}

#[test]
fn burning_enemies_slow_down() {
    let mut state = quiet_state();
    let mut audio = RecordingAudio::default();
    let mut burning = enemy(Pattern::Straight, 200.0, 10.0, 60);
    // Long tick so no burn damage or spread lands during the test.
    burning.burn_timer = 100;
    burning.burn_tick = 100;
    state.spawn_enemy(burning);
    state.spawn_enemy(enemy(Pattern::Straight, 200.0, 120.0, 60));

    idle(&mut state, 10, &mut audio);

    let multiplier = state.config().weapons.flame.burn.speed_multiplier;
    assert!(close(state.enemies[0].pos.x, 200.0 - 10.0 * multiplier));
    assert!(close(state.enemies[1].pos.x, 190.0));
    assert_eq!(state.enemies[0].hp, 4);
    assert!(!state.enemies[1].is_burning());
}

// ── Stop and shoot ────────────────────────────────────────────────────────────

#[test]
fn stop_shoot_parks_then_fires_left_on_its_cooldown() {
    let mut state = quiet_state();
    let mut audio = RecordingAudio::default();
    state.spawn_enemy(enemy(Pattern::StopShoot, 200.0, 20.0, 5));

    idle(&mut state, 39, &mut audio);
    assert!(close(state.enemies[0].pos.x, 161.0));
    assert_eq!(state.enemy_shots.active_count(), 0);

    // Parked from frame 40; the cooldown of 5 runs out on frame 44.
    idle(&mut state, 4, &mut audio);
    assert_eq!(state.enemy_shots.active_count(), 0);
    idle(&mut state, 1, &mut audio);
    assert_eq!(state.enemy_shots.active_count(), 1);
    assert!(close(state.enemies[0].pos.x, 161.0 - 5.0 * 0.3));

    let shot = *state.enemy_shots.iter().next().expect("enemy shot in flight");
    let shots = state.config().enemies.clone();
    assert_eq!(shot.owner, Owner::Enemy);
    assert_eq!(shot.vel, Vec2::new(-shots.shot_speed, 0.0));
    assert_eq!(shot.damage, shots.shot_damage);
    assert_eq!(state.enemies[0].shoot_cooldown, shots.shoot_cooldown_frames);

    idle(&mut state, 20, &mut audio);
    assert_eq!(state.enemy_shots.active_count(), 1, "next shot waits a full cooldown");
}

// ── Despawn ───────────────────────────────────────────────────────────────────

#[test]
fn enemies_leaving_the_field_are_deactivated() {
    let mut state = quiet_state();
    let mut audio = RecordingAudio::default();
    let height = state.height;
    state.spawn_enemy(enemy(Pattern::Straight, -23.5, 40.0, 60));
    state.spawn_enemy(enemy(Pattern::Straight, 200.0, -30.0, 60));
    state.spawn_enemy(enemy(Pattern::Straight, 200.0, height + 30.0, 60));
    state.spawn_enemy(enemy(Pattern::Straight, -10.0, 100.0, 60));

    idle(&mut state, 1, &mut audio);

    let active: Vec<bool> = state.enemies.iter().map(|e| e.active).collect();
    assert_eq!(active, vec![false, false, false, true]);
    assert_eq!(state.kills, 0, "leaving the field scores nothing");
}
