//! Validate → execute → format for a single command string.

mod executor;
mod outcome;
pub mod tokenize;

pub use executor::{CommandExecutor, DEFAULT_MAX_OUTPUT_BYTES, ExecutionResult, ProcessExecutor};
pub use outcome::{NO_OUTPUT_MESSAGE, Outcome, TIMEOUT_MESSAGE};

use crate::config::RunnerConfig;
use crate::error::RunnerError;
use crate::security::{AllowList, base_verb};
use directories::UserDirs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{info, warn};

/// Wall-clock budget for a single command.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Runs allow-listed commands in the user's home directory.
///
/// Cheap to clone; every field is shared read-only state.
#[derive(Clone)]
pub struct CommandRunner {
    allow_list: Arc<AllowList>,
    executor: Arc<dyn CommandExecutor>,
    home_dir: Option<PathBuf>,
    timeout: Duration,
}

impl CommandRunner {
    pub fn new(allow_list: AllowList) -> Self {
        Self {
            allow_list: Arc::new(allow_list),
            executor: Arc::new(ProcessExecutor::default()),
            home_dir: UserDirs::new().map(|dirs| dirs.home_dir().to_path_buf()),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    pub fn from_config(config: &RunnerConfig) -> Self {
        Self::new(AllowList::new(config.allowed_commands.iter().cloned()))
            .with_timeout(Duration::from_secs(config.timeout_secs))
            .with_executor(Arc::new(ProcessExecutor::new(config.max_output_bytes)))
    }

    pub fn with_executor(mut self, executor: Arc<dyn CommandExecutor>) -> Self {
        self.executor = executor;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Pin the working directory explicitly instead of resolving `$HOME`.
    pub fn with_home_dir(mut self, home_dir: impl Into<PathBuf>) -> Self {
        self.home_dir = Some(home_dir.into());
        self
    }

    pub fn allow_list(&self) -> &AllowList {
        &self.allow_list
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn home_dir(&self) -> Option<&Path> {
        self.home_dir.as_deref()
    }

    /// Run `command` and render the response text. Never fails.
    pub async fn run(&self, command: &str) -> String {
        self.evaluate(command).await.to_string()
    }

    /// Run `command` and return the typed outcome that [`Self::run`] renders.
    pub async fn evaluate(&self, command: &str) -> Outcome {
        let verb = base_verb(command);
        if !self.allow_list.contains(verb) {
            warn!(verb = %verb, "command.rejected");
            return Outcome::Rejected {
                verb: verb.to_string(),
            };
        }

        let started = Instant::now();
        let outcome = match self.execute(command).await {
            Ok(result) => Outcome::from(result),
            Err(e) => {
                warn!(verb = %verb, error = %e, "command.fault");
                Outcome::Fault {
                    message: e.to_string(),
                }
            }
        };
        let ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
        info!(verb = %verb, outcome = outcome.kind(), duration_ms = ms, "command.finished");
        outcome
    }

    async fn execute(&self, command: &str) -> Result<ExecutionResult, RunnerError> {
        let argv = tokenize::split(command)?;

        // The verb check ran on raw text; re-check the program actually launched.
        match argv.first() {
            Some(program) if self.allow_list.contains(program) => {}
            Some(program) => return Err(RunnerError::NotAllowed(program.clone())),
            None => return Err(RunnerError::NotAllowed(String::new())),
        }

        let cwd = self
            .home_dir
            .as_deref()
            .ok_or(RunnerError::HomeDirUnavailable)?;
        self.executor.execute(&argv, cwd, self.timeout).await
    }
}
