mod app;
mod cli;
mod clock;
mod command;
mod config;
mod consts;
mod game;
mod highscore;
mod sound;
mod util;
mod view;
use crate::app::App;
use crate::cli::{Arguments, Mode, HELP};
use crate::config::Config;
use crate::game::Game;
use crate::highscore::HighScore;
use anyhow::Context;
use log::info;
use simplelog::WriteLogger;
use std::io::{self, ErrorKind};
use std::process::ExitCode;

fn main() -> ExitCode {
    match Mode::from_parser(lexopt::Parser::from_env()) {
        Ok(Mode::Run(args)) => exit(run(&args)),
        Ok(Mode::Help) => {
            print!("{HELP}");
            ExitCode::SUCCESS
        }
        Ok(Mode::Version) => {
            println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("gridsnake: {e}");
            eprintln!("Run `gridsnake --help` for usage.");
            ExitCode::from(2)
        }
    }
}

fn run(args: &Arguments) -> anyhow::Result<()> {
    let config = args.load_config().context("failed to load configuration")?;
    init_logging(&config).context("failed to set up logging")?;
    info!("Starting {} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
    let grid = args.grid(&config).context("invalid grid size")?;
    let high_score = HighScore::load(config.score_store());
    let game = Game::new(grid, config.game.base_speed, high_score);
    let terminal = ratatui::init();
    let r = App::new(game, config.chime()).run(terminal);
    ratatui::restore();
    info!("Exiting");
    r.map_err(Into::into)
}

/// Send log messages to the configured log file, if any
fn init_logging(config: &Config) -> anyhow::Result<()> {
    let Some(path) = config.log_file() else {
        return Ok(());
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs_err::create_dir_all(parent)?;
    }
    let file = fs_err::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)?;
    WriteLogger::init(
        config.files.log_level,
        simplelog::Config::default(),
        file,
    )?;
    Ok(())
}

fn exit(r: anyhow::Result<()>) -> ExitCode {
    match r {
        Ok(()) => ExitCode::SUCCESS,
        Err(e)
            if e.downcast_ref::<io::Error>()
                .is_some_and(|e| e.kind() == ErrorKind::BrokenPipe) =>
        {
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("gridsnake: {e:#}");
            ExitCode::from(2)
        }
    }
}
