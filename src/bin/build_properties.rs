use clap::Parser;
use fabric_props::config::Config;
use fabric_props::tasks::{build_properties, TaskResult};
use fabric_props::utils::constants::{APP_VERSION, PROPERTIES_FILE};
use fabric_props::utils::net::create_reqwest;
use log::{debug, error};
use std::process::ExitCode;

/// Writes gradle.properties with the newest yarn mappings and
/// fabric-loom release for a Minecraft version
#[derive(Debug, Parser)]
#[command(name = "build-properties", version)]
struct Cli {
    /// Target Minecraft version (e.g. 1.20.1)
    minecraft_version: String,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    fabric_props::init_env();
    debug!("build-properties (Version: {APP_VERSION})");

    match run(&cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: &Cli) -> TaskResult<()> {
    let config = Config::from_env();
    let client = create_reqwest()?;
    build_properties(&client, &config, &cli.minecraft_version, PROPERTIES_FILE).await?;
    Ok(())
}
