use crossterm::event::{self, Event};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use delve::build_info;
use delve::core::config::GameConfig;
use delve::core::constants::RENDER_FRAME_MS;
use delve::core::game_state::GameState;
use delve::input::{handle_game_input, InputResult};
use delve::ui::draw_ui;
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs::File;
use std::io::{self, Stdout};
use std::sync::Mutex;
use std::time::{Duration, Instant};
use tracing_subscriber::EnvFilter;

/// Log filter variable; logging is off unless it is set.
const LOG_ENV: &str = "DELVE_LOG";
const LOG_FILE: &str = "delve.log";

fn print_usage() {
    println!("Delve - Terminal Dungeon Crawler\n");
    println!("Usage: delve [options]\n");
    println!("Options:");
    println!("  --seed <N>  Use a fixed seed for the whole run");
    println!("  --version   Show version information");
    println!("  --help      Show this help message");
    println!("\nSet {LOG_ENV}=debug to write a trace to {LOG_FILE}.");
}

/// Parses the command line. Exits the process for --help, --version and bad input.
fn parse_seed() -> Option<u64> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let mut seed = None;
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--version" | "-v" => {
                println!("{}", build_info::version_line());
                std::process::exit(0);
            }
            "--help" | "-h" => {
                print_usage();
                std::process::exit(0);
            }
            "--seed" => match iter.next().and_then(|s| s.parse::<u64>().ok()) {
                Some(value) => seed = Some(value),
                None => {
                    eprintln!("--seed needs a non-negative integer.");
                    std::process::exit(1);
                }
            },
            other => {
                eprintln!("Unknown argument: {}\n", other);
                print_usage();
                std::process::exit(1);
            }
        }
    }

    seed
}

/// Installs a file logger when `DELVE_LOG` is set. Once the UI is up the
/// terminal belongs to it, so log records only ever go to the file.
fn init_logging() -> io::Result<()> {
    let Ok(directives) = std::env::var(LOG_ENV) else {
        return Ok(());
    };

    let filter = EnvFilter::try_new(&directives).unwrap_or_else(|_| EnvFilter::new("info"));
    let file = File::create(LOG_FILE)?;

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init();
    if let Err(e) = installed {
        // Raw mode is not on yet, so stderr is still ours
        eprintln!("Logging disabled: {e}");
    }
    Ok(())
}

fn main() -> io::Result<()> {
    let seed = parse_seed();
    init_logging()?;

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    tracing::info!(?seed, version = build_info::PKG_VERSION, "starting");

    let mut state = GameState::new(GameConfig::default(), &mut rng).map_err(io::Error::other)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut state, &mut rng);

    // Cleanup terminal, even when the loop failed
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        tracing::error!(error = %e, "game loop failed");
    }
    result
}

/// Render clock and input pump. Turns only happen inside `handle_game_input`.
fn run(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    state: &mut GameState,
    rng: &mut StdRng,
) -> io::Result<()> {
    let frame_time = Duration::from_millis(RENDER_FRAME_MS);
    let mut last_frame = Instant::now();

    loop {
        let now = Instant::now();
        state.frame(now.duration_since(last_frame).as_secs_f64());
        last_frame = now;

        terminal.draw(|frame| draw_ui(frame, state))?;

        if event::poll(frame_time)? {
            if let Event::Key(key) = event::read()? {
                match handle_game_input(key, state, rng).map_err(io::Error::other)? {
                    InputResult::Quit => break,
                    InputResult::Continue => {}
                }
            }
        }
    }

    tracing::info!(
        floor = state.floor_level(),
        level = state.player.level,
        "quit"
    );
    Ok(())
}
