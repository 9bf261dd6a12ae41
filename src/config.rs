//! Runtime tuning loaded from `config/game.toml`.
//!
//! [`GameConfig`] mirrors every tunable number of the game. Each table is
//! `#[serde(default)]`, so a TOML file may override any subset of keys and
//! everything it leaves out keeps the built-in value. Input bindings merge
//! per action; list values (the stage sections) replace the default list.
//!
//! The simulation must run with zero external configuration, so
//! [`load_config`] never fails: problems become warnings and defaults.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::ConfigError;

pub const DEFAULT_CONFIG_PATH: &str = "config/game.toml";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub window: WindowConfig,
    pub debug: DebugConfig,
    pub input: BTreeMap<String, KeyList>,
    pub player: PlayerConfig,
    pub weapons: WeaponsConfig,
    pub enemies: EnemiesConfig,
    pub items: ItemsConfig,
    pub stage: StageConfig,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            debug: DebugConfig::default(),
            input: default_bindings(),
            player: PlayerConfig::default(),
            weapons: WeaponsConfig::default(),
            enemies: EnemiesConfig::default(),
            items: ItemsConfig::default(),
            stage: StageConfig::default(),
        }
    }
}

// ── Window / debug ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
    pub fps: u32,
    pub title: String,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 256,
            height: 144,
            fps: 60,
            title: "Side-Scrolling Shooter".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DebugConfig {
    pub enabled: bool,
}

// ── Input ────────────────────────────────────────────────────────────────────

/// One key name or a list of key names bound to an action.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum KeyList {
    One(String),
    Many(Vec<String>),
}

impl KeyList {
    pub fn names(&self) -> Vec<&str> {
        match self {
            KeyList::One(name) => vec![name.as_str()],
            KeyList::Many(names) => names.iter().map(String::as_str).collect(),
        }
    }
}

fn keys(names: &[&str]) -> KeyList {
    KeyList::Many(names.iter().map(|n| n.to_string()).collect())
}

pub fn default_bindings() -> BTreeMap<String, KeyList> {
    let table: [(&str, KeyList); 13] = [
        ("up", keys(&["W", "UP", "GAMEPAD1_BUTTON_DPAD_UP"])),
        ("down", keys(&["S", "DOWN", "GAMEPAD1_BUTTON_DPAD_DOWN"])),
        ("left", keys(&["A", "LEFT", "GAMEPAD1_BUTTON_DPAD_LEFT"])),
        ("right", keys(&["D", "RIGHT", "GAMEPAD1_BUTTON_DPAD_RIGHT"])),
        ("confirm", keys(&["J", "Z", "GAMEPAD1_BUTTON_A"])),
        ("back", keys(&["O", "X", "GAMEPAD1_BUTTON_BACK"])),
        ("pause", KeyList::One("RETURN".to_string())),
        ("fire_cannon", keys(&["J", "Z", "GAMEPAD1_BUTTON_A"])),
        ("fire_missile", keys(&["K", "X", "GAMEPAD1_BUTTON_B"])),
        ("fire_bomb", keys(&["L", "C", "GAMEPAD1_BUTTON_X"])),
        ("fire_laser", keys(&["U", "V", "GAMEPAD1_BUTTON_Y"])),
        ("fire_flame", keys(&["I", "B", "GAMEPAD1_BUTTON_START"])),
        ("toggle_debug", KeyList::One("TAB".to_string())),
    ];
    table
        .into_iter()
        .map(|(action, list)| (action.to_string(), list))
        .collect()
}

// ── Player ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    pub max_life: i32,
    pub invincible_frames: u32,
    pub base_speed: f32,
    pub max_speed: f32,
    /// Damage taken when ramming an enemy.
    pub contact_damage: i32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            max_life: 100,
            invincible_frames: 60,
            base_speed: 1.6,
            max_speed: 3.2,
            contact_damage: 20,
        }
    }
}

// ── Weapons ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WeaponsConfig {
    pub max_level: u32,
    pub cannon: CannonConfig,
    pub missile: MissileConfig,
    pub bomb: BombConfig,
    pub laser: LaserConfig,
    pub flame: FlameConfig,
}

impl Default for WeaponsConfig {
    fn default() -> Self {
        Self {
            max_level: 50,
            cannon: CannonConfig::default(),
            missile: MissileConfig::default(),
            bomb: BombConfig::default(),
            laser: LaserConfig::default(),
            flame: FlameConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CannonConfig {
    pub cooldown_frames: u32,
    pub damage: i32,
    pub speed: f32,
    pub lifetime_frames: i32,
}

impl Default for CannonConfig {
    fn default() -> Self {
        Self {
            cooldown_frames: 8,
            damage: 1,
            speed: 4.0,
            lifetime_frames: 60,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MissileConfig {
    pub cooldown_frames: u32,
    pub cooldown_reduction_per_level: u32,
    pub min_cooldown_frames: u32,
    pub damage: i32,
    pub speed: f32,
    pub turn_rate: f32,
    pub lifetime_frames: i32,
}

impl Default for MissileConfig {
    fn default() -> Self {
        Self {
            cooldown_frames: 18,
            cooldown_reduction_per_level: 2,
            min_cooldown_frames: 8,
            damage: 2,
            speed: 3.0,
            turn_rate: 0.12,
            lifetime_frames: 120,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BombConfig {
    pub cooldown_frames: u32,
    pub damage: i32,
    pub speed: f32,
    pub radius: f32,
    pub radius_increase_per_level: f32,
    pub max_radius: f32,
    pub homing_turn_rate: f32,
    pub lifetime_frames: i32,
}

impl Default for BombConfig {
    fn default() -> Self {
        Self {
            cooldown_frames: 28,
            damage: 3,
            speed: 2.4,
            radius: 18.0,
            radius_increase_per_level: 3.0,
            max_radius: 36.0,
            homing_turn_rate: 0.10,
            lifetime_frames: 90,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LaserConfig {
    pub cooldown_frames: u32,
    pub damage: i32,
    pub max_damage: i32,
    pub beam_length: i32,
    pub beam_length_increase_per_level: i32,
    pub max_beam_length: i32,
    pub beam_width: i32,
    pub beam_width_increase_per_level: i32,
    pub max_beam_width: i32,
    pub tick_interval_frames: i32,
    pub charge_max_frames: u32,
    pub charge_bonus_duration: i32,
    pub base_duration_frames: i32,
    pub duration_increase_per_level: i32,
}

impl Default for LaserConfig {
    fn default() -> Self {
        Self {
            cooldown_frames: 40,
            damage: 1,
            max_damage: 8,
            beam_length: 140,
            beam_length_increase_per_level: 10,
            max_beam_length: 220,
            beam_width: 4,
            beam_width_increase_per_level: 1,
            max_beam_width: 10,
            tick_interval_frames: 6,
            charge_max_frames: 45,
            charge_bonus_duration: 22,
            base_duration_frames: 14,
            duration_increase_per_level: 2,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FlameConfig {
    pub range: i32,
    pub width: i32,
    pub damage: i32,
    pub tick_interval_frames: i32,
    pub charge_max_frames: u32,
    pub max_range: i32,
    pub max_width: i32,
    pub upgrade_base_bonus_range: i32,
    pub upgrade_base_bonus_width: i32,
    pub upgrade_base_bonus_damage: i32,
    pub burn: BurnConfig,
}

impl Default for FlameConfig {
    fn default() -> Self {
        Self {
            range: 70,
            width: 16,
            damage: 1,
            tick_interval_frames: 3,
            charge_max_frames: 45,
            max_range: 140,
            max_width: 28,
            upgrade_base_bonus_range: 20,
            upgrade_base_bonus_width: 6,
            upgrade_base_bonus_damage: 0,
            burn: BurnConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BurnConfig {
    pub duration_frames: i32,
    pub damage: i32,
    pub tick_interval_frames: i32,
    pub spread_radius: f32,
    pub speed_multiplier: f32,
}

impl Default for BurnConfig {
    fn default() -> Self {
        Self {
            duration_frames: 120,
            damage: 1,
            tick_interval_frames: 10,
            spread_radius: 22.0,
            speed_multiplier: 0.55,
        }
    }
}

// ── Enemies / items ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EnemiesConfig {
    pub shot_damage: i32,
    pub shot_speed: f32,
    pub shot_lifetime_frames: i32,
    pub shoot_cooldown_frames: u32,
}

impl Default for EnemiesConfig {
    fn default() -> Self {
        Self {
            shot_damage: 10,
            shot_speed: 2.4,
            shot_lifetime_frames: 120,
            shoot_cooldown_frames: 60,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ItemsConfig {
    pub drop_chance: f32,
    pub heal_amount: i32,
    pub power_amount: u32,
    pub speed_amount: f32,
    pub lifetime_frames: i32,
}

impl Default for ItemsConfig {
    fn default() -> Self {
        Self {
            drop_chance: 0.22,
            heal_amount: 25,
            power_amount: 1,
            speed_amount: 0.2,
            lifetime_frames: 360,
        }
    }
}

// ── Stage ────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StageConfig {
    pub scroll_speed: f32,
    pub sections: Vec<SectionConfig>,
}

impl Default for StageConfig {
    fn default() -> Self {
        let section = |name: &str, spawn_rate: f32| SectionConfig {
            name: name.to_string(),
            distance: 900.0,
            spawn_rate,
        };
        Self {
            scroll_speed: 1.2,
            sections: vec![
                section("moon", 0.06),
                section("space", 0.08),
                section("planet1", 0.10),
                section("planet2", 0.12),
            ],
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SectionConfig {
    pub name: String,
    pub distance: f32,
    pub spawn_rate: f32,
}

impl Default for SectionConfig {
    fn default() -> Self {
        Self {
            name: "moon".to_string(),
            distance: 900.0,
            spawn_rate: 0.06,
        }
    }
}

// ── Loading ──────────────────────────────────────────────────────────────────

/// Outcome of [`load_config`]: always a usable configuration.
#[derive(Debug, Clone)]
pub struct ConfigResult {
    pub config: GameConfig,
    pub loaded_from: Option<PathBuf>,
    pub warnings: Vec<String>,
}

/// Parse a configuration document, filling every omitted key from defaults.
pub fn parse_config(text: &str) -> Result<GameConfig, toml::de::Error> {
    let mut config: GameConfig = toml::from_str(text)?;
    for (action, list) in default_bindings() {
        config.input.entry(action).or_insert(list);
    }
    Ok(config)
}

pub fn read_config(path: &Path) -> Result<GameConfig, ConfigError> {
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_config(&text).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Load `path`, falling back to the built-in defaults on any problem.
pub fn load_config(path: impl AsRef<Path>) -> ConfigResult {
    let path = path.as_ref();
    if !path.exists() {
        return ConfigResult {
            config: GameConfig::default(),
            loaded_from: None,
            warnings: vec![format!("config not found: {}", path.display())],
        };
    }
    match read_config(path) {
        Ok(config) => ConfigResult {
            config,
            loaded_from: Some(path.to_path_buf()),
            warnings: Vec::new(),
        },
        Err(e) => ConfigResult {
            config: GameConfig::default(),
            loaded_from: None,
            warnings: vec![format!("{e}; using defaults")],
        },
    }
}
