//! voxctl - CLI companion for the Victory AI voice-agent platform

use clap::Parser;

mod auth;
mod cli;
mod client;
mod config;
mod error;
mod output;
mod session;

use cli::{Cli, Commands, GlobalOptions, register::RegisterArgs};
use error::Result;

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    let mut logger = env_logger::Builder::from_default_env();
    if cli.debug {
        logger.filter_level(log::LevelFilter::Debug);
    }
    logger.init();

    let opts = GlobalOptions::from_cli(&cli);

    match cli.command {
        Commands::Login { email, password } => cli::login::run(&opts, email, password).await,
        Commands::Register {
            email,
            password,
            username,
            first_name,
            last_name,
        } => {
            cli::register::run(
                &opts,
                RegisterArgs {
                    email,
                    password,
                    username,
                    first_name,
                    last_name,
                },
            )
            .await
        }
        Commands::Logout => cli::logout::run(&opts),
        Commands::Whoami => cli::whoami::run(&opts),
        Commands::Status => cli::status::run(&opts),
        Commands::Deploy { workflow } => cli::deploy::run(&opts, workflow).await,
    }
}
