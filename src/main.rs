mod display;

use std::collections::HashMap;
use std::fs::File;
use std::io::{stdout, BufWriter, Write};
use std::path::PathBuf;
use std::sync::{mpsc, Mutex};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::Context;
use clap::Parser;
use crossterm::{
    cursor,
    event::{
        self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, KeyboardEnhancementFlags,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    terminal, ExecutableCommand,
};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use scroll_shooter::app::App;
use scroll_shooter::audio::TracingAudio;
use scroll_shooter::config::{load_config, DEFAULT_CONFIG_PATH};
use scroll_shooter::input::Key;

use display::TerminalCanvas;

/// A key counts as held if its last press or repeat arrived within this many
/// frames. Terminals without release events only ever send repeated
/// presses, so the window has to outlast the OS key-repeat interval.
const HOLD_WINDOW: u64 = 8;

#[derive(Parser)]
#[command(name = "scroll-shooter")]
#[command(about = "Side-scrolling arcade shooter in the terminal")]
struct Args {
    /// TOML configuration file
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Session seed; every run's randomness derives from it
    #[arg(long)]
    seed: Option<u64>,

    /// Start with the debug overlay on
    #[arg(long)]
    debug: bool,

    /// Write logs here instead of stderr
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn init_logging(log_file: Option<&PathBuf>) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("cannot create log file {}", path.display()))?;
            builder.with_ansi(false).with_writer(Mutex::new(file)).init();
        }
        None => builder.with_writer(std::io::stderr).init(),
    }
    Ok(())
}

/// Map a terminal key code onto the names bindings use.
fn map_key(code: KeyCode) -> Option<Key> {
    match code {
        KeyCode::Char(' ') => Some(Key::Space),
        KeyCode::Char(c) if c.is_ascii_alphanumeric() => Some(Key::Char(c.to_ascii_uppercase())),
        KeyCode::Up => Some(Key::Up),
        KeyCode::Down => Some(Key::Down),
        KeyCode::Left => Some(Key::Left),
        KeyCode::Right => Some(Key::Right),
        KeyCode::Enter => Some(Key::Return),
        KeyCode::Tab => Some(Key::Tab),
        KeyCode::Backspace => Some(Key::Backspace),
        _ => None,
    }
}

fn is_held(key_frame: &HashMap<Key, u64>, key: Key, frame: u64) -> bool {
    key_frame
        .get(&key)
        .map(|&last| frame.saturating_sub(last) <= HOLD_WINDOW)
        .unwrap_or(false)
}

// ── Frame loop ────────────────────────────────────────────────────────────────

/// Runs until Esc or Ctrl-C.
///
/// Input model: `key_frame` records the frame each key was last pressed or
/// repeated. Terminals that report release events drop the key at once;
/// others let it expire after [`HOLD_WINDOW`] frames of silence.
fn run<W: Write>(out: &mut W, app: &mut App, rx: &mpsc::Receiver<Event>) -> anyhow::Result<()> {
    let window = &app.config().window;
    let frame_time = Duration::from_secs_f64(1.0 / window.fps.max(1) as f64);
    let (cols, rows) = terminal::size()?;
    let mut canvas = TerminalCanvas::new(window.width as i32, window.height as i32, cols, rows);
    let mut audio = TracingAudio;
    let mut key_frame: HashMap<Key, u64> = HashMap::new();
    let mut frame: u64 = 0;

    loop {
        let frame_start = Instant::now();
        frame += 1;

        while let Ok(ev) = rx.try_recv() {
            match ev {
                Event::Key(KeyEvent {
                    code,
                    kind,
                    modifiers,
                    ..
                }) => {
                    let ctrl_c =
                        code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL);
                    if code == KeyCode::Esc || ctrl_c {
                        return Ok(());
                    }
                    let Some(key) = map_key(code) else {
                        continue;
                    };
                    match kind {
                        KeyEventKind::Press | KeyEventKind::Repeat => {
                            key_frame.insert(key, frame);
                        }
                        KeyEventKind::Release => {
                            key_frame.remove(&key);
                        }
                    }
                }
                Event::Resize(cols, rows) => canvas.resize(cols, rows),
                _ => {}
            }
        }

        app.update(|key| is_held(&key_frame, key, frame), &mut audio);
        app.draw(&mut canvas);
        canvas.present(out)?;

        let elapsed = frame_start.elapsed();
        if elapsed < frame_time {
            thread::sleep(frame_time - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.log_file.as_ref())?;

    let loaded = load_config(&args.config);
    for w in &loaded.warnings {
        warn!("{w}");
    }
    let mut cfg = loaded.config;
    cfg.debug.enabled |= args.debug;

    let seed = args.seed.unwrap_or_else(rand::random);
    info!(seed, config = ?loaded.loaded_from, "starting");
    // Built before raw mode so binding warnings still reach a normal screen.
    let mut app = App::new(cfg, seed, &mut TracingAudio);

    let mut out = BufWriter::new(stdout());
    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    // Key release events where the terminal supports them (kitty protocol).
    let keyboard_enhanced = out
        .execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))
        .is_ok();

    // Blocking reads live on their own thread so the frame loop never waits.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || {
        while let Ok(ev) = event::read() {
            if tx.send(ev).is_err() {
                break;
            }
        }
    });

    let result = run(&mut out, &mut app, &rx);

    // Always restore the terminal
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    result
}
