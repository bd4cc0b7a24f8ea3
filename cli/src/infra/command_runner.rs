//! Infrastructure implementation of the `CommandRunner` port.
//!
//! `TokioCommandRunner` is the production implementation that uses tokio
//! for async process execution.

use anyhow::{Context, Result};

use crate::application::ports::CommandRunner;

/// Production `CommandRunner` - spawns the program with inherited stdio
/// and waits for it to exit.
///
/// Login sessions are interactive and run until the user leaves them, so
/// no timeout is applied.
#[derive(Debug, Default)]
pub struct TokioCommandRunner;

impl TokioCommandRunner {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl CommandRunner for TokioCommandRunner {
    async fn run_status(&self, program: &str, args: &[&str]) -> Result<std::process::ExitStatus> {
        tracing::debug!(program, ?args, "spawning interactive command");
        let mut child = tokio::process::Command::new(program)
            .args(args)
            .kill_on_drop(true)
            .spawn()
            .with_context(|| format!("failed to spawn {program}"))?;

        child
            .wait()
            .await
            .with_context(|| format!("waiting for {program}"))
    }
}
