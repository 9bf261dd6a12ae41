//! Stage progression: scroll position and the cyclic list of sections.

use tracing::debug;

use crate::config::StageConfig;
use crate::render::{Renderer, SpriteId};

/// Visual and spawn theme of a section, derived from its name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Theme {
    Moon,
    Space,
    Planet1,
    Planet2,
}

impl Theme {
    /// Unknown section names use the last (hardest) table.
    pub fn from_name(name: &str) -> Theme {
        match name {
            "moon" => Theme::Moon,
            "space" => Theme::Space,
            "planet1" => Theme::Planet1,
            _ => Theme::Planet2,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct StageSection {
    pub name: String,
    pub theme: Theme,
    pub distance: f32,
    pub spawn_rate: f32,
}

#[derive(Clone, Debug)]
pub struct Stage {
    pub scroll_speed: f32,
    sections: Vec<StageSection>,
    section_index: usize,
    section_progress: f32,
    scroll_x: f32,
}

const BACKDROP_TILE: i32 = 32;
const FAR_PARALLAX: f32 = 0.3;

impl Stage {
    pub fn new(cfg: &StageConfig) -> Self {
        let mut sections: Vec<StageSection> = cfg
            .sections
            .iter()
            .map(|s| StageSection {
                name: s.name.clone(),
                theme: Theme::from_name(&s.name),
                distance: s.distance,
                spawn_rate: s.spawn_rate,
            })
            .collect();
        if sections.is_empty() {
            sections.push(StageSection {
                name: "moon".to_string(),
                theme: Theme::Moon,
                distance: 900.0,
                spawn_rate: 0.06,
            });
        }
        Self {
            scroll_speed: cfg.scroll_speed,
            sections,
            section_index: 0,
            section_progress: 0.0,
            scroll_x: 0.0,
        }
    }

    pub fn current_section(&self) -> &StageSection {
        &self.sections[self.section_index]
    }

    pub fn section_index(&self) -> usize {
        self.section_index
    }

    pub fn scroll_x(&self) -> f32 {
        self.scroll_x
    }

    /// Advance one frame. Returns `true` when a new section begins.
    pub fn update(&mut self) -> bool {
        self.scroll_x += self.scroll_speed;
        self.section_progress += self.scroll_speed;
        if self.section_progress < self.current_section().distance {
            return false;
        }
        self.section_progress = 0.0;
        self.section_index = (self.section_index + 1) % self.sections.len();
        debug!(section = %self.current_section().name, "entering section");
        true
    }

    /// Two wrapped backdrop layers scrolling at different speeds.
    pub fn draw_background(&self, out: &mut dyn Renderer, screen_w: i32, screen_h: i32) {
        let theme = self.current_section().theme;
        for (near, factor) in [(false, FAR_PARALLAX), (true, 1.0)] {
            let offset = (self.scroll_x * factor) as i32 % BACKDROP_TILE;
            let mut y = if near { BACKDROP_TILE / 2 } else { 0 };
            while y < screen_h {
                let mut x = -offset;
                while x < screen_w {
                    out.blit(x, y, SpriteId::Backdrop { theme, near });
                    x += BACKDROP_TILE;
                }
                y += BACKDROP_TILE;
            }
        }
    }
}
