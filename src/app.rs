//! Top-level orchestrator. Owns input tracking, the debug toggle and the
//! active scene, and applies the transitions scenes ask for.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, warn};

use crate::audio::AudioSink;
use crate::config::GameConfig;
use crate::entities::ShipKind;
use crate::input::{Action, InputMap, InputSnapshot, InputTracker, Key};
use crate::render::Renderer;
use crate::scene::{Scene, SceneManager, Transition};
use crate::scenes::{GameOverScene, GameScene, TitleScene};

pub struct App {
    cfg: GameConfig,
    input: InputTracker,
    /// Seeds every run so a whole session replays from one seed.
    rng: StdRng,
    debug: bool,
    scenes: SceneManager,
}

impl App {
    pub fn new(cfg: GameConfig, seed: u64, audio: &mut dyn AudioSink) -> Self {
        let map = InputMap::from_config(&cfg.input);
        for w in map.warnings() {
            warn!("{w}");
        }
        let title = TitleScene::new(&cfg.window.title, width(&cfg), height(&cfg));
        Self {
            input: InputTracker::new(map),
            rng: StdRng::seed_from_u64(seed),
            debug: cfg.debug.enabled,
            scenes: SceneManager::new(Box::new(title), audio),
            cfg,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.cfg
    }

    pub fn debug(&self) -> bool {
        self.debug
    }

    pub fn scene(&self) -> &dyn Scene {
        self.scenes.current()
    }

    /// Sample keys, then run one update with the resulting snapshot.
    pub fn update(&mut self, is_down: impl Fn(Key) -> bool, audio: &mut dyn AudioSink) {
        let snapshot = self.input.update(is_down);
        self.step(&snapshot, audio);
    }

    /// Run one update from an already built snapshot.
    pub fn step(&mut self, input: &InputSnapshot, audio: &mut dyn AudioSink) {
        if input.is_pressed(Action::ToggleDebug) {
            self.debug = !self.debug;
            debug!(enabled = self.debug, "debug overlay toggled");
        }
        let transition = self.scenes.update(input, audio);
        self.apply(transition, audio);
    }

    pub fn draw(&self, out: &mut dyn Renderer) {
        self.scenes.draw(out, self.debug);
    }

    fn apply(&mut self, transition: Transition, audio: &mut dyn AudioSink) {
        let (w, h) = (width(&self.cfg), height(&self.cfg));
        let next: Box<dyn Scene> = match transition {
            Transition::Stay => return,
            Transition::Title => Box::new(TitleScene::new(&self.cfg.window.title, w, h)),
            Transition::StartGame { ship } => self.new_game(ship),
            Transition::GameOver { kills, ship } => Box::new(GameOverScene::new(kills, ship, w, h)),
        };
        self.scenes.change(next, audio);
    }

    fn new_game(&mut self, ship: ShipKind) -> Box<dyn Scene> {
        let seed: u64 = self.rng.gen();
        debug!(seed, "seeding run");
        Box::new(GameScene::new(self.cfg.clone(), ship, seed))
    }
}

fn width(cfg: &GameConfig) -> i32 {
    cfg.window.width as i32
}

fn height(cfg: &GameConfig) -> i32 {
    cfg.window.height as i32
}
