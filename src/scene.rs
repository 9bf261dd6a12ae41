//! Scene contract and the manager that swaps scenes.
//!
//! Scenes never switch themselves. `update` returns a [`Transition`] request
//! and the owner decides what to build next.

use tracing::info;

use crate::audio::AudioSink;
use crate::entities::ShipKind;
use crate::input::InputSnapshot;
use crate::render::Renderer;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    Stay,
    Title,
    StartGame { ship: ShipKind },
    GameOver { kills: u32, ship: ShipKind },
}

pub trait Scene {
    fn name(&self) -> &'static str;

    fn on_enter(&mut self, _audio: &mut dyn AudioSink) {}

    fn on_exit(&mut self, _audio: &mut dyn AudioSink) {}

    fn update(&mut self, input: &InputSnapshot, audio: &mut dyn AudioSink) -> Transition;

    fn draw(&self, out: &mut dyn Renderer, debug: bool);
}

pub struct SceneManager {
    scene: Box<dyn Scene>,
}

impl SceneManager {
    pub fn new(mut scene: Box<dyn Scene>, audio: &mut dyn AudioSink) -> Self {
        scene.on_enter(audio);
        Self { scene }
    }

    pub fn current(&self) -> &dyn Scene {
        self.scene.as_ref()
    }

    /// Exit the current scene and enter `next`.
    pub fn change(&mut self, mut next: Box<dyn Scene>, audio: &mut dyn AudioSink) {
        self.scene.on_exit(audio);
        info!(from = self.scene.name(), to = next.name(), "scene change");
        next.on_enter(audio);
        self.scene = next;
    }

    pub fn update(&mut self, input: &InputSnapshot, audio: &mut dyn AudioSink) -> Transition {
        self.scene.update(input, audio)
    }

    pub fn draw(&self, out: &mut dyn Renderer, debug: bool) {
        self.scene.draw(out, debug);
    }
}
