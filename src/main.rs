use std::io::{stdout, BufWriter};
use std::path::PathBuf;
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::{
    cursor,
    event::{self, Event, KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags},
    terminal, ExecutableCommand,
};
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;

use cat_walk::compute::{handle_command, new_game, tick, Flow};
use cat_walk::config::Config;
use cat_walk::display::{self, Canvas, StartScreenFx};
use cat_walk::input::KeyTracker;
use cat_walk::logging;
use cat_walk::sprite::PlayerSprite;

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Runs until the player quits. Input arrives on `rx` from a dedicated
/// reader thread so the frame clock never blocks on the terminal.
fn game_loop<W: std::io::Write>(
    out: &mut W,
    rx: &mpsc::Receiver<Event>,
    config: &Config,
    sprite: &PlayerSprite,
) -> Result<()> {
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let frame_time = Duration::from_secs(1) / config.fps;

    let mut state = new_game(&mut rng);
    let fx = StartScreenFx::new(&mut rng);
    let mut keys = KeyTracker::new();
    let (cols, rows) = terminal::size()?;
    let mut canvas = Canvas::new(cols, rows);
    let mut frame: u64 = 0;

    loop {
        let frame_start = Instant::now();
        frame += 1;

        // ── Drain pending input (non-blocking) ───────────────────────────────
        while let Ok(ev) = rx.try_recv() {
            match ev {
                Event::Key(key) => {
                    if let Some(command) = keys.record(&key, frame) {
                        if handle_command(&mut state, command, &mut rng) == Flow::Quit {
                            return Ok(());
                        }
                    }
                }
                Event::Resize(cols, rows) => canvas = Canvas::new(cols, rows),
                _ => {}
            }
        }

        tick(&mut state, &keys.held(frame), &mut rng);

        display::render(out, &mut canvas, &state, sprite, &fx, frame)?;

        let elapsed = frame_start.elapsed();
        if elapsed < frame_time {
            thread::sleep(frame_time - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let config_path = std::env::args_os().nth(1).map(PathBuf::from);
    let config = Config::resolve(config_path.as_deref())?;
    let log_target = logging::init(&config.log_file);
    info!("starting with {:?}, logging to {:?}", config, log_target);

    let sprite = PlayerSprite::load_or_placeholder(&config.player_image);

    let mut out = BufWriter::new(stdout());
    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    // Key-release events let held movement stop immediately on terminals
    // that support the kitty protocol; others fall back to repeat timing.
    let keyboard_enhanced = out
        .execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))
        .is_ok();

    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || {
        while let Ok(ev) = event::read() {
            if tx.send(ev).is_err() {
                break; // receiver dropped → program exiting
            }
        }
    });

    let result = game_loop(&mut out, &rx, &config, &sprite);

    // Always restore the terminal
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    result
}
