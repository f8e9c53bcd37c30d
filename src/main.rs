mod app;
mod board;
mod cli;
mod command;
mod config;
mod consts;
mod game;
mod util;
use crate::app::App;
use crate::cli::{Cli, RunArgs};
use crate::config::{Config, ConfigError};
use anyhow::Context;
use std::io::ErrorKind;
use std::path::Path;
use std::process::ExitCode;
use std::sync::Mutex;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> ExitCode {
    match Cli::from_env() {
        Ok(Cli::Run(args)) => match run(args) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("gridsnake: {e:?}");
                ExitCode::from(2)
            }
        },
        Ok(Cli::Help) => {
            print!("{}", Cli::USAGE);
            ExitCode::SUCCESS
        }
        Ok(Cli::Version) => {
            println!("gridsnake {}", env!("CARGO_PKG_VERSION"));
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("gridsnake: {e}\n\n{}", Cli::USAGE);
            ExitCode::from(2)
        }
    }
}

fn run(args: RunArgs) -> anyhow::Result<()> {
    let config = load_config(args.config.as_deref())?;
    if let Some(path) = args.log {
        init_logging(&path)?;
    }
    info!(
        width = config.grid.width(),
        height = config.grid.height(),
        cell_size = config.grid.cell_size(),
        pixels = ?config.grid.pixel_size(),
        tick_period = ?config.tick_period,
        "Starting gridsnake"
    );
    let terminal = ratatui::init();
    let r = App::new(config).run(terminal);
    ratatui::restore();
    match r {
        Err(e) if e.kind() == ErrorKind::BrokenPipe => Ok(()),
        r => r.context("terminal I/O failed"),
    }
}

fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    if let Some(path) = path {
        return Config::load(path, false)
            .with_context(|| format!("failed to load configuration from {}", path.display()));
    }
    match Config::default_path() {
        Ok(path) => Config::load(&path, true)
            .with_context(|| format!("failed to load configuration from {}", path.display())),
        Err(ConfigError::NoPath) => Ok(Config::default()),
        Err(e) => Err(e.into()),
    }
}

/// Send log messages at or above the level given by `RUST_LOG` (default:
/// [`consts::DEFAULT_LOG_FILTER`]) to the file at `path`.  Without `--log`,
/// nothing is logged, as the terminal is taken up by the game.
fn init_logging(path: &Path) -> anyhow::Result<()> {
    let file = fs_err::File::create(path)?;
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(consts::DEFAULT_LOG_FILTER));
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .with(filter)
        .try_init()
        .context("failed to install log subscriber")?;
    Ok(())
}
