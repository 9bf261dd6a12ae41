//! Fire-and-forget audio surface.
//!
//! The simulation never reads anything back from audio; it only asks for a
//! sound on a channel, optionally looping, or for a channel to stop.

use tracing::trace;

/// Channel for one-shot effects.
pub const CH_SFX: u8 = 0;
/// Channel for the laser charge whine.
pub const CH_CHARGE: u8 = 1;
/// Channel for the looping flame cue.
pub const CH_FLAME: u8 = 2;

/// Number of discrete laser charge pitches.
pub const CHARGE_TIERS: u32 = 6;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sound {
    Select,
    Confirm,
    Cannon,
    Missile,
    Bomb,
    Laser,
    Explosion,
    Pickup,
    GameOver,
    /// Laser charge pitch, `0..CHARGE_TIERS`.
    LaserCharge(u8),
    FlameLoop,
}

impl Sound {
    /// Numeric sound bank slot.
    pub fn id(self) -> u8 {
        match self {
            Sound::Select => 0,
            Sound::Confirm => 1,
            Sound::Cannon => 2,
            Sound::Missile => 3,
            Sound::Bomb => 4,
            Sound::Laser => 5,
            Sound::Explosion => 6,
            Sound::Pickup => 7,
            Sound::GameOver => 8,
            Sound::LaserCharge(tier) => 9 + tier.min(CHARGE_TIERS as u8 - 1),
            Sound::FlameLoop => 15,
        }
    }
}

pub trait AudioSink {
    fn play(&mut self, channel: u8, sound: Sound, looped: bool);
    fn stop(&mut self, channel: u8);
}

/// Discards every request.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullAudio;

impl AudioSink for NullAudio {
    fn play(&mut self, _channel: u8, _sound: Sound, _looped: bool) {}
    fn stop(&mut self, _channel: u8) {}
}

/// Emits each request as a trace event; used by the terminal front-end,
/// which has no mixer.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingAudio;

impl AudioSink for TracingAudio {
    fn play(&mut self, channel: u8, sound: Sound, looped: bool) {
        trace!(channel, sound = sound.id(), looped, "play");
    }

    fn stop(&mut self, channel: u8) {
        trace!(channel, "stop");
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AudioCommand {
    Play {
        channel: u8,
        sound: Sound,
        looped: bool,
    },
    Stop {
        channel: u8,
    },
}

/// Keeps every request in order, for tests and replays.
#[derive(Clone, Debug, Default)]
pub struct RecordingAudio {
    pub commands: Vec<AudioCommand>,
}

impl RecordingAudio {
    pub fn played(&self, sound: Sound) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, AudioCommand::Play { sound: s, .. } if *s == sound))
            .count()
    }

    pub fn stopped(&self, channel: u8) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, AudioCommand::Stop { channel: ch } if *ch == channel))
            .count()
    }
}

impl AudioSink for RecordingAudio {
    fn play(&mut self, channel: u8, sound: Sound, looped: bool) {
        self.commands.push(AudioCommand::Play {
            channel,
            sound,
            looped,
        });
    }

    fn stop(&mut self, channel: u8) {
        self.commands.push(AudioCommand::Stop { channel });
    }
}
