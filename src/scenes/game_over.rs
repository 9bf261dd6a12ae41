use tracing::info;

use crate::audio::{AudioSink, Sound, CH_SFX};
use crate::entities::ShipKind;
use crate::input::{Action, InputSnapshot};
use crate::render::Renderer;
use crate::scene::{Scene, Transition};

pub struct GameOverScene {
    kills: u32,
    ship: ShipKind,
    width: i32,
    height: i32,
}

impl GameOverScene {
    pub fn new(kills: u32, ship: ShipKind, width: i32, height: i32) -> Self {
        Self {
            kills,
            ship,
            width,
            height,
        }
    }

    pub fn kills(&self) -> u32 {
        self.kills
    }
}

impl Scene for GameOverScene {
    fn name(&self) -> &'static str {
        "game_over"
    }

    fn on_enter(&mut self, _audio: &mut dyn AudioSink) {
        info!(kills = self.kills, ship = self.ship.name(), "game over");
    }

    fn update(&mut self, input: &InputSnapshot, audio: &mut dyn AudioSink) -> Transition {
        if input.is_pressed(Action::Confirm) {
            audio.play(CH_SFX, Sound::Confirm, false);
            return Transition::StartGame { ship: self.ship };
        }
        if input.is_pressed(Action::Back) {
            audio.play(CH_SFX, Sound::Select, false);
            return Transition::Title;
        }
        Transition::Stay
    }

    fn draw(&self, out: &mut dyn Renderer, _debug: bool) {
        out.clear();
        let cx = self.width / 2;
        let cy = self.height / 2;
        out.text(cx - 36, cy - 24, "GAME OVER");
        let kills = format!("KILLS:{}", self.kills);
        out.text(cx - kills.len() as i32 * 4, cy - 8, &kills);
        out.text(cx - 52, cy + 16, "CONFIRM: RETRY");
        out.text(cx - 44, cy + 28, "BACK: TITLE");
    }
}
