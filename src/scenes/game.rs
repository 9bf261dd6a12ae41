use tracing::info;

use crate::audio::{AudioSink, Sound, CH_CHARGE, CH_FLAME, CH_SFX};
use crate::config::GameConfig;
use crate::entities::ShipKind;
use crate::game::{GameState, FX_SEGMENT};
use crate::hud::{draw_hud, HudStats};
use crate::input::{Action, InputSnapshot};
use crate::render::{Renderer, SpriteId};
use crate::scene::{Scene, Transition};

/// Frames per on/off phase of the invincibility blink.
const BLINK_PHASE: u32 = 4;
const BURN_FLICKER: u64 = 4;
const BRANCH_OFFSET: i32 = 6;

/// One run of play. Wraps [`GameState`] and reports when the player dies.
pub struct GameScene {
    state: GameState,
    paused: bool,
    finished: bool,
}

impl GameScene {
    pub fn new(cfg: GameConfig, ship: ShipKind, seed: u64) -> Self {
        Self {
            state: GameState::new(cfg, ship, seed),
            paused: false,
            finished: false,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    fn draw_player(&self, out: &mut dyn Renderer) {
        let p = &self.state.player;
        if p.invincible > 0 && (p.invincible / BLINK_PHASE) % 2 == 0 {
            return;
        }
        out.blit(p.pos.x as i32, p.pos.y as i32, SpriteId::Ship(p.ship));
    }

    fn draw_laser(&self, out: &mut dyn Renderer) {
        let beam = &self.state.laser;
        if !beam.active {
            return;
        }
        let (x0, y) = (beam.x as i32, beam.y as i32 - FX_SEGMENT / 2);
        for (i, spark) in self.state.laser_fx().iter().enumerate() {
            let x = x0 + i as i32 * FX_SEGMENT;
            out.blit(x, y, SpriteId::LaserSegment);
            out.blit(x, y + spark.dy, SpriteId::LaserSpark { variant: spark.variant });
            if spark.branch != 0 {
                let by = y + spark.dy + spark.branch as i32 * BRANCH_OFFSET;
                out.blit(x, by, SpriteId::LaserBranch);
            }
        }
    }

    fn draw_flame(&self, out: &mut dyn Renderer) {
        let flame = &self.state.flame;
        if !flame.active {
            return;
        }
        let blue = self.state.flame_fully_charged();
        let (x0, y) = (flame.x as i32, flame.y as i32 - FX_SEGMENT / 2);
        for (i, lick) in self.state.flame_fx().iter().enumerate() {
            let sprite = SpriteId::Flame {
                blue,
                variant: lick.variant,
            };
            out.blit(x0 + i as i32 * FX_SEGMENT, y + lick.dy, sprite);
        }
    }

    fn draw_debug(&self, out: &mut dyn Renderer) {
        let r = self.state.player.rect();
        out.blit(r.x as i32, r.y as i32, SpriteId::DebugMarker);
        out.blit((r.x + r.w) as i32 - 1, (r.y + r.h) as i32 - 1, SpriteId::DebugMarker);
        let info = format!(
            "F:{} E:{} S:{}",
            self.state.frame(),
            self.state.active_enemies().count(),
            self.state.projectiles.active_count(),
        );
        out.text(4, self.state.height as i32 - 10, &info);
    }
}

impl Scene for GameScene {
    fn name(&self) -> &'static str {
        "game"
    }

    fn on_enter(&mut self, _audio: &mut dyn AudioSink) {
        info!(ship = self.state.player.ship.name(), "run started");
    }

    fn on_exit(&mut self, audio: &mut dyn AudioSink) {
        audio.stop(CH_CHARGE);
        audio.stop(CH_FLAME);
    }

    fn update(&mut self, input: &InputSnapshot, audio: &mut dyn AudioSink) -> Transition {
        if self.finished {
            return Transition::Stay;
        }
        if input.is_pressed(Action::Pause) {
            self.paused = !self.paused;
            if self.paused {
                self.state.release_held_weapons(audio);
            }
        }
        if self.paused {
            return Transition::Stay;
        }

        self.state.tick(input, audio);

        if self.state.is_over() {
            self.finished = true;
            audio.play(CH_SFX, Sound::GameOver, false);
            return Transition::GameOver {
                kills: self.state.kills,
                ship: self.state.player.ship,
            };
        }
        Transition::Stay
    }

    fn draw(&self, out: &mut dyn Renderer, debug: bool) {
        let s = &self.state;
        let (w, h) = (s.width as i32, s.height as i32);
        out.clear();
        s.stage.draw_background(out, w, h);

        for e in s.active_enemies() {
            out.blit(e.pos.x as i32, e.pos.y as i32, SpriteId::Enemy(e.kind));
        }
        for it in s.items.iter().filter(|it| it.active) {
            out.blit(it.pos.x as i32, it.pos.y as i32, SpriteId::Item(it.kind));
        }
        self.draw_player(out);
        for p in s.projectiles.iter().chain(s.enemy_shots.iter()) {
            out.blit(p.pos.x as i32, p.pos.y as i32, SpriteId::Shot(p.kind));
        }
        self.draw_laser(out);
        self.draw_flame(out);

        let flicker = ((s.frame() / BURN_FLICKER) % 2) as u8;
        for e in s.active_enemies().filter(|e| e.is_burning()) {
            out.blit(e.pos.x as i32, e.pos.y as i32 - 4, SpriteId::Burning { variant: flicker });
        }
        for fx in s.particles.iter() {
            out.blit(fx.pos.x as i32, fx.pos.y as i32, SpriteId::Explosion);
        }

        let p = &s.player;
        let stats = HudStats {
            life: p.life,
            max_life: p.max_life,
            kills: s.kills,
            weapon_level: p.weapon_level,
            speed: p.speed,
            max_speed: p.max_speed,
        };
        draw_hud(out, &stats, w);

        if debug {
            self.draw_debug(out);
        }
        if self.paused {
            out.text(w / 2 - 24, h / 2 - 4, "PAUSED");
        }
    }
}
