//! Draw-call surface.
//!
//! Scenes describe a frame as a list of sprite blits and text runs. What a
//! sprite looks like is up to the front-end; the simulation only names it.

use crate::entities::{EnemyKind, ItemKind, ProjectileKind, ShipKind};
use crate::stage::Theme;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SpriteId {
    Ship(ShipKind),
    Enemy(EnemyKind),
    Item(ItemKind),
    Shot(ProjectileKind),
    LaserSegment,
    LaserSpark { variant: u8 },
    LaserBranch,
    Flame { blue: bool, variant: u8 },
    Burning { variant: u8 },
    Explosion,
    /// Scrolling backdrop tile; `near` is the fast parallax layer.
    Backdrop { theme: Theme, near: bool },
    HudHeart,
    HudPower,
    HudSpeed,
    BarEmpty,
    BarFull,
    DebugMarker,
}

pub trait Renderer {
    /// Clear the whole frame.
    fn clear(&mut self);
    fn blit(&mut self, x: i32, y: i32, sprite: SpriteId);
    fn text(&mut self, x: i32, y: i32, text: &str);
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DrawCall {
    Clear,
    Blit { x: i32, y: i32, sprite: SpriteId },
    Text { x: i32, y: i32, text: String },
}

/// Keeps every draw call; lets tests inspect a frame.
#[derive(Clone, Debug, Default)]
pub struct RecordingRenderer {
    pub calls: Vec<DrawCall>,
}

impl RecordingRenderer {
    pub fn count(&self, sprite: SpriteId) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, DrawCall::Blit { sprite: s, .. } if *s == sprite))
            .count()
    }

    pub fn has_text(&self, needle: &str) -> bool {
        self.calls
            .iter()
            .any(|c| matches!(c, DrawCall::Text { text, .. } if text.contains(needle)))
    }
}

impl Renderer for RecordingRenderer {
    fn clear(&mut self) {
        self.calls.push(DrawCall::Clear);
    }

    fn blit(&mut self, x: i32, y: i32, sprite: SpriteId) {
        self.calls.push(DrawCall::Blit { x, y, sprite });
    }

    fn text(&mut self, x: i32, y: i32, text: &str) {
        self.calls.push(DrawCall::Text {
            x,
            y,
            text: text.to_string(),
        });
    }
}
