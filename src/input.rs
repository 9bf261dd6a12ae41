//! Named actions, key bindings and the per-frame input snapshot.
//!
//! Front-ends only report which physical keys are down. [`InputTracker`]
//! folds that into an [`InputSnapshot`] of logical actions, where several
//! keys bound to one action are OR-ed together.

use std::collections::BTreeMap;

use crate::config::KeyList;

// ── Actions ──────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Action {
    Up,
    Down,
    Left,
    Right,
    Confirm,
    Back,
    Pause,
    FireCannon,
    FireMissile,
    FireBomb,
    FireLaser,
    FireFlame,
    ToggleDebug,
}

pub const ACTION_COUNT: usize = 13;

impl Action {
    pub const ALL: [Action; ACTION_COUNT] = [
        Action::Up,
        Action::Down,
        Action::Left,
        Action::Right,
        Action::Confirm,
        Action::Back,
        Action::Pause,
        Action::FireCannon,
        Action::FireMissile,
        Action::FireBomb,
        Action::FireLaser,
        Action::FireFlame,
        Action::ToggleDebug,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Action::Up => "up",
            Action::Down => "down",
            Action::Left => "left",
            Action::Right => "right",
            Action::Confirm => "confirm",
            Action::Back => "back",
            Action::Pause => "pause",
            Action::FireCannon => "fire_cannon",
            Action::FireMissile => "fire_missile",
            Action::FireBomb => "fire_bomb",
            Action::FireLaser => "fire_laser",
            Action::FireFlame => "fire_flame",
            Action::ToggleDebug => "toggle_debug",
        }
    }

    pub fn from_name(name: &str) -> Option<Action> {
        Action::ALL.into_iter().find(|a| a.name() == name)
    }

    fn index(self) -> usize {
        self as usize
    }
}

// ── Keys ─────────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GamepadButton {
    A,
    B,
    X,
    Y,
    Back,
    Start,
    DpadUp,
    DpadDown,
    DpadLeft,
    DpadRight,
}

/// A physical key or button, named the way configuration files spell them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    /// Letters are stored upper-case.
    Char(char),
    Up,
    Down,
    Left,
    Right,
    Return,
    Space,
    Tab,
    Escape,
    Backspace,
    Gamepad(GamepadButton),
}

impl Key {
    /// Parse a key name such as `"J"`, `"key_up"` or `"GAMEPAD1_BUTTON_A"`.
    pub fn from_name(name: &str) -> Option<Key> {
        let upper = name.trim().to_ascii_uppercase();
        let normalized = upper.strip_prefix("KEY_").unwrap_or(&upper);

        if let Some(button) = normalized.strip_prefix("GAMEPAD1_BUTTON_") {
            let button = match button {
                "A" => GamepadButton::A,
                "B" => GamepadButton::B,
                "X" => GamepadButton::X,
                "Y" => GamepadButton::Y,
                "BACK" => GamepadButton::Back,
                "START" => GamepadButton::Start,
                "DPAD_UP" => GamepadButton::DpadUp,
                "DPAD_DOWN" => GamepadButton::DpadDown,
                "DPAD_LEFT" => GamepadButton::DpadLeft,
                "DPAD_RIGHT" => GamepadButton::DpadRight,
                _ => return None,
            };
            return Some(Key::Gamepad(button));
        }

        let mut chars = normalized.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            if c.is_ascii_alphanumeric() {
                return Some(Key::Char(c));
            }
        }

        match normalized {
            "UP" => Some(Key::Up),
            "DOWN" => Some(Key::Down),
            "LEFT" => Some(Key::Left),
            "RIGHT" => Some(Key::Right),
            "RETURN" | "ENTER" => Some(Key::Return),
            "SPACE" => Some(Key::Space),
            "TAB" => Some(Key::Tab),
            "ESCAPE" => Some(Key::Escape),
            "BACKSPACE" => Some(Key::Backspace),
            _ => None,
        }
    }
}

// ── Snapshot ─────────────────────────────────────────────────────────────────

/// Immutable view of all actions for one frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InputSnapshot {
    held: [bool; ACTION_COUNT],
    pressed: [bool; ACTION_COUNT],
}

impl InputSnapshot {
    pub fn is_held(&self, action: Action) -> bool {
        self.held[action.index()]
    }

    pub fn is_pressed(&self, action: Action) -> bool {
        self.pressed[action.index()]
    }

    /// Builder used by scripted drivers and tests.
    pub fn with_held(mut self, action: Action) -> Self {
        self.held[action.index()] = true;
        self
    }

    /// Marks the action both held and pressed, as on its first frame down.
    pub fn with_pressed(mut self, action: Action) -> Self {
        self.held[action.index()] = true;
        self.pressed[action.index()] = true;
        self
    }
}

// ── Bindings ─────────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
struct Binding {
    action: Action,
    key: Key,
}

/// Resolved action → key bindings plus any non-fatal problems found while
/// resolving them.
#[derive(Clone, Debug, Default)]
pub struct InputMap {
    bindings: Vec<Binding>,
    warnings: Vec<String>,
}

impl InputMap {
    pub fn from_config(table: &BTreeMap<String, KeyList>) -> Self {
        let mut map = InputMap::default();
        for (action_name, list) in table {
            let Some(action) = Action::from_name(action_name) else {
                map.warnings.push(format!("unknown input action: {action_name}"));
                continue;
            };
            for key_name in list.names() {
                match Key::from_name(key_name) {
                    Some(key) => map.bindings.push(Binding { action, key }),
                    None => map.warnings.push(format!(
                        "invalid key for {action_name}: {key_name} (unknown key name)"
                    )),
                }
            }
        }
        map
    }

    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    pub fn keys_for(&self, action: Action) -> impl Iterator<Item = Key> + '_ {
        self.bindings
            .iter()
            .filter(move |b| b.action == action)
            .map(|b| b.key)
    }
}

/// Turns per-frame key state into action snapshots with edge detection.
#[derive(Clone, Debug)]
pub struct InputTracker {
    map: InputMap,
    /// Key state per binding on the previous frame.
    was_down: Vec<bool>,
}

impl InputTracker {
    pub fn new(map: InputMap) -> Self {
        let was_down = vec![false; map.bindings.len()];
        Self { map, was_down }
    }

    /// Sample every bound key once and build this frame's snapshot.
    pub fn update(&mut self, is_down: impl Fn(Key) -> bool) -> InputSnapshot {
        let mut snapshot = InputSnapshot::default();
        for (binding, was_down) in self.map.bindings.iter().zip(self.was_down.iter_mut()) {
            let down = is_down(binding.key);
            let i = binding.action.index();
            snapshot.held[i] |= down;
            snapshot.pressed[i] |= down && !*was_down;
            *was_down = down;
        }
        snapshot
    }
}
