use clap::Parser;
use color_eyre::Result;
use ratatui::DefaultTerminal;
use ratatui::crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use ratatui::crossterm::execute;
use ratatui::crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use std::io::stdout;

use flowercheck::check::worker::spawn_worker;
use flowercheck::check::{ApiStatus, QueryClient, Verdict};
use flowercheck::config::{self, ConfigResult};
use flowercheck::notification::Notice;
use flowercheck::recent::{FileStore, KeyValueStore, MemoryStore, RecentChecksCache};
use flowercheck::results::format_verdict;
use flowercheck::{App, Config, FlowerCheckError};

/// Check whether flowers are safe for cats and dogs
#[derive(Parser, Debug)]
#[command(
    version,
    about = "Check whether flowers are safe for cats and dogs"
)]
struct Args {
    /// Flower to check once and exit (opens the interactive checker if omitted)
    flower: Option<String>,

    /// Base URL of the flower safety API (overrides config and FLOWERCHECK_API_URL)
    #[arg(long, value_name = "URL")]
    api_url: Option<String>,

    /// Print recently checked flowers, newest first, and exit
    #[arg(long, conflicts_with_all = ["flower", "health"])]
    recent: bool,

    /// Probe the API and exit
    #[arg(long, conflicts_with = "flower")]
    health: bool,
}

fn main() -> Result<()> {
    // Writes to /tmp/flowercheck-debug.log at DEBUG level
    #[cfg(debug_assertions)]
    init_debug_logger();

    color_eyre::install()?;

    // Load config early so every mode sees the same base URL
    let mut config_result = config::load_config();

    let args = Args::parse();
    config_result
        .config
        .apply_api_url_override(args.api_url.as_deref());

    if args.recent {
        for entry in open_recent().entries() {
            println!("{}", entry);
        }
        return Ok(());
    }

    if args.health || args.flower.is_some() {
        if let Some(warning) = &config_result.warning {
            eprintln!("Warning: {}", warning);
        }
    }

    if args.health {
        match run_health(&config_result.config) {
            Ok(status) => println!("{}: {}", status.status, status.message),
            Err(e) => exit_with_error(&e),
        }
        return Ok(());
    }

    if let Some(flower) = args.flower {
        let mut recent = open_recent();
        match run_once(&flower, &config_result.config, &mut recent) {
            Ok(verdict) => println!("{}", format_verdict(&verdict)),
            Err(e) => exit_with_error(&e),
        }
        return Ok(());
    }

    let terminal = init_terminal()?;
    let app = App::new(open_recent());
    let result = run(terminal, app, config_result);

    restore_terminal()?;
    result?;

    #[cfg(debug_assertions)]
    log::debug!("=== FLOWERCHECK DEBUG SESSION ENDED ===");

    Ok(())
}

#[cfg(debug_assertions)]
fn init_debug_logger() {
    use std::io::Write;

    let log_file = match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open("/tmp/flowercheck-debug.log")
    {
        Ok(file) => file,
        Err(_) => return,
    };

    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Debug)
        .target(env_logger::Target::Pipe(Box::new(log_file)))
        .format(|buf, record| {
            use std::time::SystemTime;
            let datetime: chrono::DateTime<chrono::Local> = SystemTime::now().into();
            writeln!(
                buf,
                "[{}] [{}] {}",
                datetime.format("%Y-%m-%dT%H:%M:%S%.3f"),
                record.level(),
                record.args()
            )
        })
        .init();

    log::debug!("=== FLOWERCHECK DEBUG SESSION STARTED ===");
}

/// Recent checks backed by the data directory, or kept in memory when
/// there is no data directory
fn open_recent() -> RecentChecksCache {
    let store: Box<dyn KeyValueStore> = match FileStore::open_default() {
        Some(store) => Box::new(store),
        None => {
            log::warn!("No data directory found, recent checks will not persist");
            Box::new(MemoryStore::new())
        }
    };
    RecentChecksCache::load(store)
}

fn exit_with_error(error: &FlowerCheckError) -> ! {
    eprintln!("Error: {}", error);
    std::process::exit(1);
}

fn current_thread_runtime() -> Result<tokio::runtime::Runtime, FlowerCheckError> {
    Ok(tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?)
}

/// Check a single flower and record it on success
fn run_once(
    flower: &str,
    config: &Config,
    recent: &mut RecentChecksCache,
) -> Result<Verdict, FlowerCheckError> {
    if flower.trim().is_empty() {
        return Err(FlowerCheckError::EmptyFlowerName);
    }

    let client = QueryClient::from_config(&config.api)?;
    let verdict = current_thread_runtime()?.block_on(client.check(flower))?;
    recent.record(&verdict.flower);
    Ok(verdict)
}

fn run_health(config: &Config) -> Result<ApiStatus, FlowerCheckError> {
    let client = QueryClient::from_config(&config.api)?;
    Ok(current_thread_runtime()?.block_on(client.health())?)
}

/// Initialize terminal with raw mode, alternate screen, and bracketed paste
fn init_terminal() -> Result<DefaultTerminal> {
    let hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = execute!(stdout(), DisableBracketedPaste, LeaveAlternateScreen);
        let _ = disable_raw_mode();
        hook(info);
    }));

    enable_raw_mode()?;

    // If any subsequent operations fail, ensure raw mode is disabled
    if let Err(e) = execute!(stdout(), EnterAlternateScreen, EnableBracketedPaste) {
        let _ = disable_raw_mode();
        return Err(e.into());
    }

    match ratatui::Terminal::new(ratatui::backend::CrosstermBackend::new(stdout())) {
        Ok(terminal) => Ok(terminal),
        Err(e) => {
            let _ = execute!(stdout(), DisableBracketedPaste, LeaveAlternateScreen);
            let _ = disable_raw_mode();
            Err(e.into())
        }
    }
}

/// Restore terminal to normal state
fn restore_terminal() -> Result<()> {
    let _ = execute!(stdout(), DisableBracketedPaste, LeaveAlternateScreen);
    disable_raw_mode()?;
    Ok(())
}

fn run(mut terminal: DefaultTerminal, mut app: App, config_result: ConfigResult) -> Result<()> {
    if let Some(warning) = config_result.warning {
        app.notification.raise(Notice::ConfigProblem(warning));
    }

    setup_check_worker(&mut app, &config_result.config);

    loop {
        if app.should_render() {
            terminal.draw(|frame| app.render(frame))?;
            app.clear_dirty();
        }

        app.handle_events()?;

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}

/// Set up the check worker thread and channels
fn setup_check_worker(app: &mut App, config: &Config) {
    let (request_tx, request_rx) = std::sync::mpsc::channel();
    let (response_tx, response_rx) = std::sync::mpsc::channel();
    app.set_channels(request_tx, response_rx);

    #[cfg(debug_assertions)]
    log::debug!("Check worker targeting {}", config.api.base_url);

    spawn_worker(QueryClient::from_config(&config.api), request_rx, response_tx);
}
