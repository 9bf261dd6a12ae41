/// Terminal rendering layer; all screen output lives here.
///
/// [`TerminalCanvas`] receives the library's draw calls in world pixels,
/// scales them down to terminal cells and keeps one glyph per cell. Nothing
/// reaches the terminal until [`TerminalCanvas::present`] queues the frame.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    QueueableCommand,
};
use scroll_shooter::entities::{EnemyKind, ItemKind, ProjectileKind};
use scroll_shooter::render::{Renderer, SpriteId};
use scroll_shooter::stage::Theme;

// ── Colour palette ────────────────────────────────────────────────────────────

const C_PLAYER: Color = Color::White;
const C_DRONE: Color = Color::Green;
const C_FIGHTER: Color = Color::Red;
const C_TURRET: Color = Color::Magenta;
const C_SHOT_PLAYER: Color = Color::Cyan;
const C_SHOT_ENEMY: Color = Color::Magenta;
const C_MISSILE: Color = Color::Yellow;
const C_BOMB: Color = Color::DarkYellow;
const C_LASER: Color = Color::Cyan;
const C_SPARK: Color = Color::White;
const C_FLAME: Color = Color::DarkYellow;
const C_FLAME_BLUE: Color = Color::Blue;
const C_BURN: Color = Color::Red;
const C_EXPLOSION: Color = Color::Yellow;
const C_HUD: Color = Color::White;
const C_LIFE: Color = Color::Red;
const C_BAR_EMPTY: Color = Color::DarkGrey;
const C_DEBUG: Color = Color::Green;

#[derive(Clone, Copy, PartialEq)]
struct Cell {
    glyph: char,
    color: Color,
}

const BLANK: Cell = Cell {
    glyph: ' ',
    color: Color::Reset,
};

/// Fixed-size cell grid standing in for the game's pixel framebuffer.
pub struct TerminalCanvas {
    world_w: i32,
    world_h: i32,
    cols: u16,
    rows: u16,
    cells: Vec<Cell>,
}

impl TerminalCanvas {
    pub fn new(world_w: i32, world_h: i32, cols: u16, rows: u16) -> Self {
        Self {
            world_w: world_w.max(1),
            world_h: world_h.max(1),
            cols,
            rows,
            cells: vec![BLANK; cols as usize * rows as usize],
        }
    }

    /// Follow terminal resizes; the next frame starts blank.
    pub fn resize(&mut self, cols: u16, rows: u16) {
        if (cols, rows) != (self.cols, self.rows) {
            self.cols = cols;
            self.rows = rows;
            self.cells = vec![BLANK; cols as usize * rows as usize];
        }
    }

    fn to_cell(&self, x: i32, y: i32) -> Option<(u16, u16)> {
        let cx = x * self.cols as i32 / self.world_w;
        let cy = y * self.rows as i32 / self.world_h;
        let inside = (0..self.cols as i32).contains(&cx) && (0..self.rows as i32).contains(&cy);
        inside.then_some((cx as u16, cy as u16))
    }

    fn put(&mut self, col: u16, row: u16, cell: Cell) {
        let i = row as usize * self.cols as usize + col as usize;
        if let Some(slot) = self.cells.get_mut(i) {
            *slot = cell;
        }
    }

    /// Queue the whole grid and flush.
    pub fn present<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        for row in 0..self.rows {
            out.queue(cursor::MoveTo(0, row))?;
            let start = row as usize * self.cols as usize;
            let line = &self.cells[start..start + self.cols as usize];
            let mut color = None;
            for cell in line {
                if color != Some(cell.color) {
                    out.queue(style::SetForegroundColor(cell.color))?;
                    color = Some(cell.color);
                }
                out.queue(Print(cell.glyph))?;
            }
        }
        out.queue(style::ResetColor)?;
        out.flush()?;
        Ok(())
    }
}

impl Renderer for TerminalCanvas {
    fn clear(&mut self) {
        self.cells.fill(BLANK);
    }

    fn blit(&mut self, x: i32, y: i32, sprite: SpriteId) {
        let Some((col, row)) = self.to_cell(x, y) else {
            return;
        };
        let (glyph, color) = glyph_for(sprite);
        // Backdrop dots never cover anything already drawn.
        if matches!(sprite, SpriteId::Backdrop { .. })
            && self.cells[row as usize * self.cols as usize + col as usize] != BLANK
        {
            return;
        }
        self.put(col, row, Cell { glyph, color });
    }

    fn text(&mut self, x: i32, y: i32, text: &str) {
        let Some((col, row)) = self.to_cell(x.max(0), y.max(0)) else {
            return;
        };
        for (i, glyph) in text.chars().enumerate() {
            let c = col as usize + i;
            if c >= self.cols as usize {
                break;
            }
            self.put(c as u16, row, Cell { glyph, color: C_HUD });
        }
    }
}

// ── Sprite glyphs ─────────────────────────────────────────────────────────────

fn glyph_for(sprite: SpriteId) -> (char, Color) {
    match sprite {
        SpriteId::Ship(_) => ('►', C_PLAYER),
        SpriteId::Enemy(EnemyKind::Drone) => ('◄', C_DRONE),
        SpriteId::Enemy(EnemyKind::Fighter) => ('«', C_FIGHTER),
        SpriteId::Enemy(EnemyKind::Turret) => ('▣', C_TURRET),
        SpriteId::Item(ItemKind::Heal) => ('♥', Color::Magenta),
        SpriteId::Item(ItemKind::Power) => ('★', Color::Yellow),
        SpriteId::Item(ItemKind::Speed) => ('»', Color::Cyan),
        SpriteId::Shot(ProjectileKind::Cannon) => ('-', C_SHOT_PLAYER),
        SpriteId::Shot(ProjectileKind::Missile) => ('→', C_MISSILE),
        SpriteId::Shot(ProjectileKind::Bomb) => ('●', C_BOMB),
        SpriteId::Shot(ProjectileKind::EnemyShot) => ('•', C_SHOT_ENEMY),
        SpriteId::LaserSegment => ('═', C_LASER),
        SpriteId::LaserSpark { variant } => (if variant == 0 { '~' } else { '≈' }, C_SPARK),
        SpriteId::LaserBranch => ('╱', C_LASER),
        SpriteId::Flame { blue, variant } => {
            let glyph = if variant == 0 { '≋' } else { '∿' };
            (glyph, if blue { C_FLAME_BLUE } else { C_FLAME })
        }
        SpriteId::Burning { variant } => (if variant == 0 { '^' } else { '\'' }, C_BURN),
        SpriteId::Explosion => ('*', C_EXPLOSION),
        SpriteId::Backdrop { theme, near } => {
            let glyph = if near { '.' } else { '·' };
            (glyph, backdrop_color(theme))
        }
        SpriteId::HudHeart => ('♥', C_LIFE),
        SpriteId::HudPower => ('P', Color::Yellow),
        SpriteId::HudSpeed => ('»', Color::Cyan),
        SpriteId::BarEmpty => ('░', C_BAR_EMPTY),
        SpriteId::BarFull => ('█', C_LIFE),
        SpriteId::DebugMarker => ('+', C_DEBUG),
    }
}

fn backdrop_color(theme: Theme) -> Color {
    match theme {
        Theme::Moon => Color::Grey,
        Theme::Space => Color::DarkBlue,
        Theme::Planet1 => Color::DarkGreen,
        Theme::Planet2 => Color::DarkRed,
    }
}
