use std::io;
use std::path::PathBuf;

use clap::Parser;
use color_eyre::Result;
use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::execute;
use ratatui::DefaultTerminal;

use eat_your_feelings::App;
use eat_your_feelings::config::{
    BACKEND_URL_ENV, ConfigResult, ResolverMode, apply_backend_override, load_config,
    load_config_from_path,
};
use eat_your_feelings::once::{degraded_notice, format_resolution, resolve_once};
use eat_your_feelings::resolver::Resolver;

/// Tell it how you feel, get a snack, a recipe and a roast
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Suggestion strategy (defaults to remote when a backend URL is known)
    #[arg(long, value_enum)]
    mode: Option<ResolverMode>,

    /// Base URL of the suggestion backend (overrides EYF_BACKEND_URL)
    #[arg(long, value_name = "URL")]
    backend_url: Option<String>,

    /// Config file to use instead of ~/.config/eat-your-feelings/config.toml
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Resolve a single mood, print the suggestion and exit
    #[arg(long, value_name = "MOOD")]
    once: Option<String>,
}

fn main() -> Result<()> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;

    #[cfg(debug_assertions)]
    init_logging();

    let args = Args::parse();

    let ConfigResult {
        mut config,
        warning,
    } = match &args.config {
        Some(path) => load_config_from_path(path),
        None => load_config(),
    };

    // CLI flag > environment > config file
    apply_backend_override(&mut config, std::env::var(BACKEND_URL_ENV).ok());
    apply_backend_override(&mut config, args.backend_url.clone());
    if let Some(mode) = args.mode {
        config.resolver.mode = Some(mode);
    }

    if let Some(mood) = &args.once {
        if let Some(warning) = &warning {
            eprintln!("{}", warning);
        }
        config.resolver.simulated_delay_ms = 0;
        let resolver = Resolver::from_config(&config.resolver).unwrap_or_else(|e| {
            eprintln!("{}. Using local suggestions.", e);
            Resolver::local(&config.resolver)
        });
        let resolution = resolve_once(resolver, mood)?;
        if let Some(notice) = degraded_notice(&resolution) {
            eprintln!("{}", notice);
        }
        print!("{}", format_resolution(&resolution));
        return Ok(());
    }

    let mut app = App::new(&config);
    if let Some(warning) = warning
        && app.notification.current().is_none()
    {
        app.notification.show_warning(&warning);
    }

    // Initialize terminal (handles raw mode, alternate screen, etc.)
    let terminal = ratatui::init();
    // Pasted moods arrive as one event instead of a burst of keys
    let _ = execute!(io::stdout(), EnableBracketedPaste);

    let result = run(terminal, app);

    let _ = execute!(io::stdout(), DisableBracketedPaste);
    // Restore terminal (automatic cleanup)
    ratatui::restore();

    result
}

fn run(mut terminal: DefaultTerminal, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|frame| app.render(frame))?;

        app.handle_events()?;

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}

/// File logger for debug builds; the terminal belongs to the UI
#[cfg(debug_assertions)]
fn init_logging() {
    use std::io::Write;

    let path = std::env::temp_dir().join("eat-your-feelings.log");
    let Ok(file) = std::fs::File::create(&path) else {
        return;
    };

    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .format(|buf, record| {
            writeln!(
                buf,
                "{} [{}] {}: {}",
                chrono::Local::now().format("%H:%M:%S%.3f"),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .try_init();
}
