use crate::audio::{AudioSink, Sound, CH_SFX};
use crate::entities::ShipKind;
use crate::input::{Action, InputSnapshot};
use crate::render::{Renderer, SpriteId};
use crate::scene::{Scene, Transition};

const SHIP_SPACING: i32 = 32;

/// Ship selection. Left and right cycle through the four hulls.
pub struct TitleScene {
    title: String,
    width: i32,
    height: i32,
    selected: usize,
}

impl TitleScene {
    pub fn new(title: &str, width: i32, height: i32) -> Self {
        Self {
            title: title.to_string(),
            width,
            height,
            selected: 0,
        }
    }

    pub fn selected(&self) -> ShipKind {
        ShipKind::ALL[self.selected]
    }
}

impl Scene for TitleScene {
    fn name(&self) -> &'static str {
        "title"
    }

    fn update(&mut self, input: &InputSnapshot, audio: &mut dyn AudioSink) -> Transition {
        let n = ShipKind::ALL.len();
        if input.is_pressed(Action::Left) {
            self.selected = (self.selected + n - 1) % n;
            audio.play(CH_SFX, Sound::Select, false);
        } else if input.is_pressed(Action::Right) {
            self.selected = (self.selected + 1) % n;
            audio.play(CH_SFX, Sound::Select, false);
        }

        if input.is_pressed(Action::Confirm) {
            audio.play(CH_SFX, Sound::Confirm, false);
            return Transition::StartGame {
                ship: self.selected(),
            };
        }
        Transition::Stay
    }

    fn draw(&self, out: &mut dyn Renderer, _debug: bool) {
        out.clear();
        let cx = self.width / 2;
        let cy = self.height / 2;
        out.text(cx - self.title.len() as i32 * 4, cy - 40, &self.title);

        let row_w = SHIP_SPACING * ShipKind::ALL.len() as i32;
        let x0 = cx - row_w / 2 + 8;
        for (i, ship) in ShipKind::ALL.into_iter().enumerate() {
            let x = x0 + i as i32 * SHIP_SPACING;
            out.blit(x, cy - 8, SpriteId::Ship(ship));
            if i == self.selected {
                out.text(x + 4, cy + 12, "^");
            }
        }

        let name = self.selected().name().to_ascii_uppercase();
        out.text(cx - name.len() as i32 * 4, cy + 24, &name);
        out.text(cx - 56, cy + 40, "PRESS CONFIRM");
    }
}
