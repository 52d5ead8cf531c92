mod app;
mod event;
mod ui;

use std::fs::File;
use std::io;
use std::path::PathBuf;

use crossterm::{
    event::{KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags},
    execute,
    style::Print,
    terminal::{
        disable_raw_mode, enable_raw_mode, supports_keyboard_enhancement, EnterAlternateScreen,
        LeaveAlternateScreen,
    },
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use app::App;
use event::{Event, EventHandler};

// ~60 FPS, one simulation step per frame
const TICK_RATE_MS: u64 = 16;

fn main() -> io::Result<()> {
    init_logging();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    // Key release events need the keyboard enhancement protocol
    let release_events = matches!(supports_keyboard_enhancement(), Ok(true));
    if release_events {
        execute!(
            stdout,
            PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
        )?;
    }
    log::info!("Starting, key release events {}", if release_events { "on" } else { "off" });

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let mut app = App::new(release_events);
    let event_handler = EventHandler::new(TICK_RATE_MS);

    // Main loop
    loop {
        terminal.draw(|frame| ui::render(frame, &app))?;

        match event_handler.next()? {
            Event::Tick => app.on_tick(),
            Event::Key(key) => app.on_key(key),
        }

        // Impact sound
        if app.take_bells() > 0 {
            execute!(terminal.backend_mut(), Print('\x07'))?;
        }

        if app.should_quit {
            break;
        }
    }

    // Restore terminal
    if release_events {
        execute!(terminal.backend_mut(), PopKeyboardEnhancementFlags)?;
    }
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    log::info!("Exiting");

    Ok(())
}

/// Logs go to a file so they don't tear up the screen. `RUST_LOG` picks the level.
fn init_logging() {
    let Ok(file) = File::create(log_path()) else { return };
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init();
}

fn log_path() -> PathBuf {
    // Next to the executable
    if let Ok(exe) = std::env::current_exe() {
        if let Some(dir) = exe.parent() {
            return dir.join("breakout.log");
        }
    }
    PathBuf::from("breakout.log")
}
