mod ui;

use clap::{error::ErrorKind, CommandFactory, Parser};
use crossterm::{
    cursor::Show,
    event::{
        KeyCode, KeyEvent, KeyboardEnhancementFlags, PopKeyboardEnhancementFlags,
        PushKeyboardEnhancementFlags,
    },
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, supports_keyboard_enhancement, EnterAlternateScreen,
        LeaveAlternateScreen,
    },
    tty::IsTty,
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use speedkey::{
    config::{Config, ConfigStore, FileConfigStore},
    input, logging,
    runtime::{AppEvent, CrosstermEventSource, FixedTicker, Runner},
    RawKeyEvent, Session, SessionPhase,
};
use std::{
    error::Error,
    io::{self, stdin, Stdout, Write},
    path::PathBuf,
    time::{Duration, Instant},
};

const TICK_RATE_MS: u64 = 50;

/// reflex typing trainer: hit the key on screen before the clock runs out
#[derive(Parser, Debug, Clone)]
#[clap(
    version,
    about,
    long_about = "A 60 second reflex drill: one key at a time is shown, press it as fast as you can. Correct and wrong presses are scored and you get an accuracy figure and a rank at the end."
)]
pub struct Cli {
    /// tracing filter used when RUST_LOG is unset, e.g. "speedkey=debug"
    #[clap(long)]
    log_level: Option<String>,

    /// write logs to this file instead of the default state directory
    #[clap(long)]
    log_file: Option<PathBuf>,

    /// do not ask the terminal to report lone modifier presses (SHIFT/CTRL/ALT targets become unreachable)
    #[clap(long)]
    no_keyboard_enhancement: bool,

    /// save the effective settings as the new defaults
    #[clap(long)]
    save_config: bool,
}

impl Cli {
    /// Overlay command line flags on the stored config
    fn apply(&self, mut config: Config) -> Config {
        if let Some(level) = &self.log_level {
            config.log_level = level.clone();
        }
        if let Some(path) = &self.log_file {
            config.log_file = Some(path.clone());
        }
        if self.no_keyboard_enhancement {
            config.keyboard_enhancement = false;
        }
        config
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Quit,
}

#[derive(Debug)]
pub struct App {
    pub session: Session,
    /// Whether the terminal reports lone modifier presses
    pub keyboard_enhanced: bool,
}

impl App {
    pub fn new(keyboard_enhanced: bool) -> Self {
        Self::with_session(Session::new(), keyboard_enhanced)
    }

    pub fn with_session(session: Session, keyboard_enhanced: bool) -> Self {
        Self {
            session,
            keyboard_enhanced,
        }
    }

    /// Route a terminal key event: front-end controls first, then the round
    pub fn on_key(&mut self, key: &KeyEvent, now: Instant) -> Control {
        if !input::is_keydown(key) {
            return Control::Continue;
        }
        if input::is_quit(key) {
            return Control::Quit;
        }

        let result = match self.session.phase() {
            SessionPhase::Start if key.code == KeyCode::Enter => self.session.start(now),
            SessionPhase::Playing => {
                self.session.handle_key(&RawKeyEvent::from(key), now);
                Ok(())
            }
            SessionPhase::GameOver if key.code == KeyCode::Enter => self.session.restart(),
            _ => Ok(()),
        };

        if let Err(err) = result {
            tracing::error!(%err, "key routing hit an invalid transition");
        }
        Control::Continue
    }

    /// Fire due timers; must run before the key of the same step is routed
    pub fn on_tick(&mut self, now: Instant) {
        if let Err(err) = self.session.poll(now) {
            tracing::error!(%err, "round timer hit an invalid transition");
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    if !stdin().is_tty() {
        let mut cmd = Cli::command();
        cmd.error(ErrorKind::Io, "stdin must be a tty").exit();
    }

    let store = FileConfigStore::new();
    let config = cli.apply(store.load());
    if cli.save_config {
        store.save(&config)?;
    }

    if let Some(path) = config.log_path() {
        // the terminal is still in cooked mode here, so a plain line is visible
        if let Err(err) = logging::init_logging(&path, &config.log_level) {
            eprintln!("speedkey: logging disabled, cannot open {}: {err}", path.display());
        }
    }

    enable_raw_mode()?;

    let mut stdout = io::stdout();
    let mut keyboard_enhanced = false;
    let result = match execute!(stdout, EnterAlternateScreen) {
        Ok(()) => {
            keyboard_enhanced =
                config.keyboard_enhancement && enable_keyboard_enhancement(&mut stdout);
            run_tui(stdout, keyboard_enhanced)
        }
        Err(err) => Err(err.into()),
    };

    let restored = restore_terminal(&mut io::stdout(), keyboard_enhanced);
    result?;
    restored?;
    Ok(())
}

fn run_tui(stdout: Stdout, keyboard_enhanced: bool) -> Result<(), Box<dyn Error>> {
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    let mut app = App::new(keyboard_enhanced);
    start_tui(&mut terminal, &mut app)
}

/// Undo every terminal mode change. All steps run; the first failure is returned.
fn restore_terminal<W: Write>(out: &mut W, keyboard_enhanced: bool) -> io::Result<()> {
    let mut steps = Vec::with_capacity(4);
    if keyboard_enhanced {
        steps.push(execute!(out, PopKeyboardEnhancementFlags));
    }
    steps.push(disable_raw_mode());
    steps.push(execute!(out, LeaveAlternateScreen));
    steps.push(execute!(out, Show));
    steps.into_iter().collect()
}

fn enable_keyboard_enhancement<W: Write>(out: &mut W) -> bool {
    match supports_keyboard_enhancement() {
        Ok(true) => {
            let flags = KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES
                | KeyboardEnhancementFlags::REPORT_ALL_KEYS_AS_ESCAPE_CODES
                | KeyboardEnhancementFlags::REPORT_EVENT_TYPES;
            match execute!(out, PushKeyboardEnhancementFlags(flags)) {
                Ok(()) => true,
                Err(err) => {
                    tracing::warn!(%err, "could not enable keyboard enhancement");
                    false
                }
            }
        }
        Ok(false) => {
            tracing::warn!("terminal does not support keyboard enhancement; modifier targets cannot be hit");
            false
        }
        Err(err) => {
            tracing::warn!(%err, "keyboard enhancement query failed");
            false
        }
    }
}

fn start_tui<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<(), Box<dyn Error>> {
    let runner = Runner::new(
        CrosstermEventSource::new(),
        FixedTicker::new(Duration::from_millis(TICK_RATE_MS)),
    );

    terminal.draw(|f| ui::draw(app, f))?;

    loop {
        let event = runner.step_until(app.session.next_deadline(), Instant::now());
        let now = Instant::now();

        // timers first, so a key landing after the final tick is rejected
        app.on_tick(now);

        if let AppEvent::Key(key) = event {
            if app.on_key(&key, now) == Control::Quit {
                break;
            }
        }

        terminal.draw(|f| ui::draw(app, f))?;
    }

    Ok(())
}
