#![warn(clippy::perf)]
#![warn(clippy::unwrap_used)]

use std::process::ExitCode;

use clap::Parser;
use poise::serenity_prelude::{self as serenity, GatewayIntents};
use thisslime::TracingError;
use tracing::info;

mod cli;
use cli::{Cli, Command};

/// Chat commands and the custom word flow.
mod commands;

mod errors;

mod framework;
use framework::{config::ConfigSetup, data::PoiseData};

mod games;
mod utils;
mod words;

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    framework::logging::init_tracing();
    info!("release {}", env!("CARGO_PKG_VERSION"));

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            err.trace();
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), errors::Error> {
    if cli.subcommand() == Command::Config {
        println!("{}", framework::config::effective_toml(&cli)?);
        return Ok(());
    }

    let config = ConfigSetup::load(&cli)?;

    if let Some(flavor_text) = config.logs.flavor_text() {
        info!("{flavor_text}")
    }

    let token = config.token().to_owned();
    let data = PoiseData::new(config.finish())?;

    let framework = framework::poise::build(data);

    let intents = GatewayIntents::non_privileged() | GatewayIntents::MESSAGE_CONTENT;
    let mut client = serenity::Client::builder(token, intents)
        .framework(framework)
        .await
        .map_err(errors::Error::Client)?;

    client.start().await.map_err(errors::Error::Client)
}
