use futures::try_join;
use log::{debug, error, info, warn};
use std::io;
use std::path::Path;
use std::process::{ExitStatus, Stdio};
use thiserror::Error;
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio::process::Command;

#[derive(Debug, Error)]
pub enum CommandError {
    #[error(transparent)]
    IO(#[from] io::Error),
    #[error("Missing command")]
    MissingCommand,
}

/// Runs the provided `command` through the platform shell inside
/// `working_dir` and waits for it to exit. When `stream_output` is
/// set the output of the command is forwarded to the logger, otherwise
/// it is discarded.
pub async fn run_build(
    command: &str,
    working_dir: impl AsRef<Path>,
    stream_output: bool,
) -> Result<ExitStatus, CommandError> {
    let command_line = command.trim();
    if command_line.is_empty() {
        return Err(CommandError::MissingCommand);
    }

    let mut command = shell_command(command_line);
    command.current_dir(working_dir);
    command.stdin(Stdio::null());

    debug!("Starting build command: {command_line}");

    let status = if stream_output {
        piped_command(command).await?
    } else {
        command.stdout(Stdio::null());
        command.stderr(Stdio::null());
        command.spawn()?.wait().await?
    };

    Ok(status)
}

/// Wraps the command line in the shell for the current platform
fn shell_command(command_line: &str) -> Command {
    #[cfg(target_family = "windows")]
    let (shell, flag) = ("cmd", "/C");
    #[cfg(not(target_family = "windows"))]
    let (shell, flag) = ("sh", "-c");

    let mut command = Command::new(shell);
    command.args([flag, command_line]);
    command
}

pub async fn piped_command(mut command: Command) -> io::Result<ExitStatus> {
    command.stdout(Stdio::piped());
    command.stderr(Stdio::piped());

    let mut child = command.spawn()?;

    let mut stdout_pipe = child.stdout.take();
    let mut stderr_pipe = child.stderr.take();

    let a_fut = pipe_lines(false, &mut stdout_pipe);
    let b_fut = pipe_lines(true, &mut stderr_pipe);

    let (status, _, _) = try_join!(child.wait(), a_fut, b_fut)?;

    Ok(status)
}

/// Logs each line read from `io` until EOF. Lines are read as raw bytes
/// so output that isn't valid UTF-8 is still drained from the pipe.
async fn pipe_lines<A: AsyncRead + Unpin>(error: bool, io: &mut Option<A>) -> io::Result<()> {
    let io = match io {
        Some(value) => value,
        None => return Ok(()),
    };
    let mut reader = BufReader::new(io);
    let mut buf = Vec::new();

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf).await? == 0 {
            break;
        }

        let line = String::from_utf8_lossy(&buf);
        let line = line.trim_end_matches(['\r', '\n']);
        match line_level(line) {
            LineLevel::Error => error!("{line}"),
            LineLevel::Warn => warn!("{line}"),
            LineLevel::Info if error => error!("{line}"),
            LineLevel::Info => info!("{line}"),
        }
    }

    Ok(())
}

#[derive(Debug, PartialEq, Eq)]
enum LineLevel {
    Info,
    Warn,
    Error,
}

/// Guesses the severity of a line of gradle output
fn line_level(line: &str) -> LineLevel {
    let trimmed = line.trim_start();
    if trimmed.starts_with("FAILURE:")
        || trimmed.starts_with("BUILD FAILED")
        || trimmed.starts_with("Exception in thread")
        || trimmed.contains("error:")
    {
        LineLevel::Error
    } else if trimmed.contains("warning:") || trimmed.starts_with("Deprecated") {
        LineLevel::Warn
    } else {
        LineLevel::Info
    }
}
