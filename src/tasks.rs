use crate::config::Config;
use crate::models::errors::VersionsError;
use crate::models::versions::ResolvedVersions;
use crate::properties::GradleProperties;
use crate::utils::cmd::{run_build, CommandError};
use crate::utils::constants::{BUILD_COMMAND, GRADLE_JVM_ARGS, PROPERTIES_FILE};
use crate::utils::versions::{get_loom_version, get_yarn_mappings};
use log::{info, warn};
use std::io;
use std::path::Path;
use std::process::ExitStatus;
use thiserror::Error;
use tokio::try_join;

pub type TaskResult<T> = Result<T, TaskError>;

#[derive(Debug, Error)]
pub enum TaskError {
    #[error("Failed to create http client: {0}")]
    Client(#[from] reqwest::Error),
    #[error("{0}")]
    Versions(#[from] VersionsError),
    #[error("Failed to write properties: {0}")]
    Properties(#[from] io::Error),
    #[error("Failed to run build: {0}")]
    Command(#[from] CommandError),
}

/// Options for the build started by [`dev_run`]
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub command: String,
    /// Forward the output of the build to the logger
    pub stream_output: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            command: BUILD_COMMAND.to_string(),
            stream_output: false,
        }
    }
}

/// Resolves the yarn mappings and fabric-loom versions for
/// `minecraft_version` and writes the full gradle.properties to `output`.
/// Nothing is written unless both versions resolve.
pub async fn build_properties(
    client: &reqwest::Client,
    config: &Config,
    minecraft_version: &str,
    output: impl AsRef<Path>,
) -> TaskResult<ResolvedVersions> {
    info!("Resolving versions for Minecraft {minecraft_version}");

    let (yarn_mappings, fabric_loom_version) = try_join!(
        get_yarn_mappings(client, &config.yarn_versions_url, minecraft_version),
        get_loom_version(client, &config.loom_metadata_url)
    )?;

    info!("Yarn mappings: {yarn_mappings}, Fabric Loom: {fabric_loom_version}");

    let versions = ResolvedVersions {
        minecraft_version: minecraft_version.to_string(),
        yarn_mappings,
        fabric_loom_version: Some(fabric_loom_version),
    };

    let mut properties = GradleProperties::from(&versions);
    properties.push("org.gradle.jvmargs", GRADLE_JVM_ARGS);
    properties.write(output).await?;

    Ok(versions)
}

/// Writes the minimal gradle.properties into `working_dir` and then runs
/// the build there, waiting for it to finish. Neither happens when the
/// mappings can't be resolved.
pub async fn dev_run(
    client: &reqwest::Client,
    config: &Config,
    minecraft_version: &str,
    working_dir: impl AsRef<Path>,
    options: &RunOptions,
) -> TaskResult<ExitStatus> {
    let working_dir = working_dir.as_ref();

    let yarn_mappings =
        get_yarn_mappings(client, &config.yarn_versions_url, minecraft_version).await?;
    info!("Yarn mappings: {yarn_mappings}");

    let versions = ResolvedVersions {
        minecraft_version: minecraft_version.to_string(),
        yarn_mappings,
        fabric_loom_version: None,
    };
    GradleProperties::from(&versions)
        .write(working_dir.join(PROPERTIES_FILE))
        .await?;

    info!("Running \"{}\"", options.command);
    let status = run_build(&options.command, working_dir, options.stream_output).await?;

    if status.success() {
        info!("Gradle done.");
    } else {
        match status.code() {
            Some(code) => warn!("Gradle done. (exit code {code})"),
            None => warn!("Gradle done. (terminated by signal)"),
        }
    }

    Ok(status)
}
