mod app;
mod args;
mod clock;
mod command;
mod config;
mod consts;
mod game;
mod input;
mod logging;
mod surface;
mod util;
use crate::app::{App, Context, Ending};
use crate::args::Arguments;
use crate::config::Config;
use crate::input::TerminalEvents;
use anyhow::Context as _;
use std::io::{self, ErrorKind};
use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => match e.downcast_ref::<io::Error>() {
            Some(ioe) if ioe.kind() == ErrorKind::BrokenPipe => ExitCode::SUCCESS,
            _ => {
                eprintln!("snake-arcade: {e:?}");
                ExitCode::from(2)
            }
        },
    }
}

fn run() -> anyhow::Result<()> {
    let config_path = match Arguments::from_env()? {
        Arguments::Run { config } => config,
        Arguments::Help => {
            print!("{}", args::USAGE);
            return Ok(());
        }
        Arguments::Version => {
            println!("snake-arcade {}", env!("CARGO_PKG_VERSION"));
            return Ok(());
        }
    };
    let config = match config_path {
        Some(path) => Config::load(&path, false)
            .with_context(|| format!("failed to load configuration from {}", path.display()))?,
        None => Config::load(&Config::default_path()?, true)?,
    };
    logging::init(config.log_file.as_deref(), &config.log_level)?;
    tracing::info!(?config, "Loaded configuration");
    let app = App::new(&config, rand::rng());
    let terminal = ratatui::try_init().context("failed to initialize terminal")?;
    let mut ctx = Context::new(terminal, TerminalEvents, app.options());
    let r = app.run(&mut ctx);
    ratatui::restore();
    match r? {
        Ending::GameOver => tracing::info!("Exiting after game over"),
        Ending::Quit => tracing::info!("Exiting at player's request"),
    }
    Ok(())
}
