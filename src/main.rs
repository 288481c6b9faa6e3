use std::{io, process};

use clap::Parser;
use console::Term;
use log::{error, info};
use worklog::{App, Cli, Commands, Config, EntryStorage, Result};

pub fn initialize_logger(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp_secs()
        .format_module_path(true)
        .init();

    info!("Logger initialized");
}

fn run(cli: Cli) -> Result<()> {
    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(database) = cli.database {
        config.database_path = database;
    }

    let storage = EntryStorage::open(&config.database_path)?;
    let clear_screen = config.clear_screen && Term::stdout().is_term();
    let stdin = io::stdin();
    let mut app = App::new(storage, config, stdin.lock(), io::stdout())
        .with_screen_clearing(clear_screen);
    app.run(cli.command.unwrap_or(Commands::Menu))
}

fn main() {
    let cli = Cli::parse();
    initialize_logger(cli.verbose);

    info!("Application starting up");

    if let Err(e) = run(cli) {
        error!("{}", e);
        eprintln!("Error: {}", e);
        process::exit(1);
    }

    info!("Application shutting down");
}
