use clap::Parser;
use colored::*;
use eyre::{Context, Result, eyre};
use log::{LevelFilter, debug, info};

use mediator_demo::cli::{Cli, Command};
use mediator_demo::config::Config;
use mediator_demo::{Client, ConcreteMediator, Console, DEFAULT_SCENARIO, EventId};

fn setup_logging(cli_log_level: Option<&str>, config_log_level: Option<&str>) -> Result<()> {
    // Priority: CLI --log-level > config file > RUST_LOG > warn
    let mut builder = env_logger::Builder::from_default_env();
    match cli_log_level.or(config_log_level) {
        Some(level) => {
            let level: LevelFilter = level.parse().map_err(|_| eyre!("Unknown log level: {}", level))?;
            builder.filter_level(level);
        }
        None if std::env::var_os("RUST_LOG").is_none() => {
            builder.filter_level(LevelFilter::Warn);
        }
        None => {}
    }
    builder.target(env_logger::Target::Stderr).try_init()?;
    Ok(())
}

fn print_rules() {
    for event in EventId::ALL {
        let reactions = ConcreteMediator::reactions(event);
        let targets = if reactions.is_empty() {
            "(no reaction)".dimmed().to_string()
        } else {
            reactions
                .iter()
                .map(|r| r.to_string().yellow().to_string())
                .collect::<Vec<_>>()
                .join(", ")
        };
        println!("{} {} {}", event.to_string().cyan(), "->".dimmed(), targets);
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;
    setup_logging(cli.log_level.as_deref(), config.log_level.as_deref()).context("Failed to setup logging")?;

    info!("mediator-demo starting");
    debug!("main: config={:?}", config);

    match cli.command {
        // The bare command always replays the fixed transcript
        None => {
            Client::wire(Console::stdout()).run(&DEFAULT_SCENARIO)?;
        }
        Some(Command::Run { events }) => {
            let events = if events.is_empty() { config.scenario } else { events };
            Client::wire(Console::stdout()).run(&events)?;
        }
        Some(Command::Rules) => print_rules(),
    }

    Ok(())
}
