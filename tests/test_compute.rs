use scroll_shooter::compute::*;
use scroll_shooter::config::WeaponsConfig;
use scroll_shooter::geometry::Vec2;

fn weapons() -> WeaponsConfig {
    WeaponsConfig::default()
}

// ── Cannon ────────────────────────────────────────────────────────────────────

#[test]
fn cannon_cooldown_shrinks_per_level_but_never_below_one() {
    let cfg = weapons().cannon;
    assert_eq!(cannon_cooldown(&cfg, 1), 8);
    assert_eq!(cannon_cooldown(&cfg, 3), 6);
    assert_eq!(cannon_cooldown(&cfg, 8), 1);
    assert_eq!(cannon_cooldown(&cfg, 50), 1);
}

#[test]
fn cannon_gains_a_shot_every_two_levels_up_to_three() {
    assert_eq!(cannon_shot_count(1), 1);
    assert_eq!(cannon_shot_count(2), 1);
    assert_eq!(cannon_shot_count(3), 2);
    assert_eq!(cannon_shot_count(5), 3);
    assert_eq!(cannon_shot_count(50), 3);
}

#[test]
fn cannon_side_shots_are_distinct_from_centre() {
    assert_eq!(cannon_spread_offset(0), 0.0);
    assert!(cannon_spread_offset(1) < 0.0);
    assert!(cannon_spread_offset(2) > 0.0);
}

// ── Missile / bomb ────────────────────────────────────────────────────────────

#[test]
fn missile_cooldown_floors_at_minimum() {
    let cfg = weapons().missile;
    assert_eq!(missile_cooldown(&cfg, 1), 18);
    assert_eq!(missile_cooldown(&cfg, 3), 14);
    assert_eq!(missile_cooldown(&cfg, 20), 8);
}

#[test]
fn damage_bonus_every_two_levels() {
    assert_eq!(level_damage_bonus(1), 0);
    assert_eq!(level_damage_bonus(2), 0);
    assert_eq!(level_damage_bonus(3), 1);
    assert_eq!(level_damage_bonus(10), 4);
}

#[test]
fn bomb_radius_grows_and_caps() {
    let cfg = weapons().bomb;
    assert_eq!(bomb_radius(&cfg, 1, false), 18.0);
    assert_eq!(bomb_radius(&cfg, 3, false), 24.0);
    assert_eq!(bomb_radius(&cfg, 30, false), 36.0);
    assert_eq!(bomb_radius(&cfg, 1, true), 36.0);
}

#[test]
fn big_bombs_are_twice_the_size() {
    assert_eq!(bomb_size(false) * 2.0, bomb_size(true));
}

// ── Homing ────────────────────────────────────────────────────────────────────

#[test]
fn steering_keeps_speed() {
    let vel = Vec2::new(3.0, 0.0);
    let steered = steer_toward(vel, Vec2::new(0.0, 0.0), Vec2::new(10.0, 40.0), 0.12);
    assert!((steered.length() - 3.0).abs() < 1e-4);
    assert!(steered.y > 0.0, "turned towards a target below");
}

#[test]
fn steering_ignores_target_on_top_of_projectile() {
    let vel = Vec2::new(3.0, 0.0);
    let from = Vec2::new(50.0, 50.0);
    let target = Vec2::new(50.05, 50.04);
    assert_eq!(steer_toward(vel, from, target, 0.5), vel);
}

#[test]
fn full_turn_rate_points_straight_at_target() {
    let steered = steer_toward(Vec2::new(2.0, 0.0), Vec2::ZERO, Vec2::new(0.0, 10.0), 1.0);
    assert!(steered.x.abs() < 1e-4);
    assert!((steered.y - 2.0).abs() < 1e-4);
}

// ── Charge ────────────────────────────────────────────────────────────────────

#[test]
fn charge_ratio_saturates() {
    assert_eq!(charge_ratio(0, 45), 0.0);
    assert_eq!(charge_ratio(45, 45), 1.0);
    assert_eq!(charge_ratio(90, 45), 1.0);
    assert_eq!(charge_ratio(3, 0), 1.0);
}

#[test]
fn charge_tiers_span_six_pitches() {
    assert_eq!(charge_tier(0.0), 0);
    assert_eq!(charge_tier(0.5), 2);
    assert_eq!(charge_tier(1.0), 5);
    assert_eq!(charge_tier(2.0), 5);
}

#[test]
fn charge_cue_speeds_up_with_charge() {
    assert_eq!(charge_sfx_interval(0.0), 10);
    assert_eq!(charge_sfx_interval(1.0), 3);
    assert!(charge_sfx_interval(0.5) < 10);
}

// ── Laser ─────────────────────────────────────────────────────────────────────

#[test]
fn uncharged_laser_equals_level_baseline() {
    let cfg = weapons().laser;
    for level in [1, 2, 5, 20] {
        assert_eq!(laser_stats(&cfg, level, 0, false), laser_baseline(&cfg, level));
    }
}

#[test]
fn fully_charged_laser_hits_every_ceiling() {
    let cfg = weapons().laser;
    let stats = laser_stats(&cfg, 1, cfg.charge_max_frames, true);
    assert_eq!(stats.length, cfg.max_beam_length);
    assert_eq!(stats.width, cfg.max_beam_width);
    assert_eq!(stats.damage, cfg.max_damage);
    assert_eq!(
        stats.duration,
        cfg.base_duration_frames + cfg.charge_bonus_duration
    );
    // Overcharging changes nothing.
    assert_eq!(laser_stats(&cfg, 1, cfg.charge_max_frames * 3, true), stats);
}

#[test]
fn laser_baseline_scales_with_level_and_caps() {
    let cfg = weapons().laser;
    let l1 = laser_baseline(&cfg, 1);
    let l3 = laser_baseline(&cfg, 3);
    assert_eq!(l1.length, 140);
    assert_eq!(l3.length, 160);
    assert_eq!(l3.width, 6);
    assert_eq!(l3.duration, 18);
    assert_eq!(laser_baseline(&cfg, 40).length, cfg.max_beam_length);
    assert_eq!(laser_baseline(&cfg, 40).width, cfg.max_beam_width);
}

#[test]
fn half_charge_lands_between_baseline_and_ceiling() {
    let cfg = weapons().laser;
    let base = laser_baseline(&cfg, 1);
    let half = laser_stats(&cfg, 1, cfg.charge_max_frames / 2, false);
    assert!(half.length > base.length && half.length < cfg.max_beam_length);
    assert_eq!(half.damage, cfg.damage);
}

// ── Flame ─────────────────────────────────────────────────────────────────────

#[test]
fn flame_without_upgrade_ignores_charge() {
    let cfg = weapons().flame;
    let stats = flame_stats(&cfg, false, 999);
    assert_eq!(stats.length, cfg.range);
    assert_eq!(stats.width, cfg.width);
    assert_eq!(stats.damage, cfg.damage);
}

#[test]
fn upgraded_flame_ramps_to_maximum() {
    let cfg = weapons().flame;
    let start = flame_stats(&cfg, true, 0);
    assert_eq!(start.length, cfg.range + cfg.upgrade_base_bonus_range);
    assert_eq!(start.width, cfg.width + cfg.upgrade_base_bonus_width);

    let full = flame_stats(&cfg, true, cfg.charge_max_frames);
    assert_eq!(full.length, cfg.max_range);
    assert_eq!(full.width, cfg.max_width);
}
