use clap::Parser;
use fabric_props::config::Config;
use fabric_props::tasks::{dev_run, RunOptions, TaskResult};
use fabric_props::utils::constants::APP_VERSION;
use fabric_props::utils::net::create_reqwest;
use log::{debug, error};
use std::process::ExitCode;

/// Writes a minimal gradle.properties for a Minecraft version
/// and then runs `gradle run`
#[derive(Debug, Parser)]
#[command(name = "dev-run", version)]
struct Cli {
    /// Target Minecraft version (e.g. 1.20.1)
    minecraft_version: String,
    /// Show the output of gradle while it runs
    #[arg(long)]
    stream_output: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    fabric_props::init_env();
    debug!("dev-run (Version: {APP_VERSION})");

    // The exit status of gradle itself is only logged
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
    let options = RunOptions {
        stream_output: cli.stream_output,
        ..RunOptions::default()
    };
    dev_run(&client, &config, &cli.minecraft_version, ".", &options).await?;
    Ok(())
}
