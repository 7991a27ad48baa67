use crate::error::RunnerError;
use std::future::Future;
use std::path::Path;
use std::pin::Pin;
use std::process::{ExitStatus, Stdio};
use std::time::Duration;
use tokio::io::{AsyncRead, AsyncReadExt};
use tokio::process::Command;
use tokio::task::JoinHandle;

/// Maximum captured size per stream (1 MB).
pub const DEFAULT_MAX_OUTPUT_BYTES: usize = 1_048_576;

const READ_CHUNK_BYTES: usize = 8192;

/// What a finished (or killed) child left behind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionResult {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
    pub timed_out: bool,
}

/// Process seam used by [`super::CommandRunner`].
///
/// `argv[0]` is the program; the rest are passed verbatim as arguments.
/// Implementations must never hand `argv` to a shell.
pub trait CommandExecutor: Send + Sync {
    fn execute<'a>(
        &'a self,
        argv: &'a [String],
        cwd: &'a Path,
        timeout: Duration,
    ) -> Pin<Box<dyn Future<Output = Result<ExecutionResult, RunnerError>> + Send + 'a>>;
}

/// Spawns a real child process with piped stdout/stderr and a wall-clock deadline.
pub struct ProcessExecutor {
    max_output_bytes: usize,
}

impl ProcessExecutor {
    pub const fn new(max_output_bytes: usize) -> Self {
        Self { max_output_bytes }
    }
}

impl Default for ProcessExecutor {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_OUTPUT_BYTES)
    }
}

impl CommandExecutor for ProcessExecutor {
    fn execute<'a>(
        &'a self,
        argv: &'a [String],
        cwd: &'a Path,
        timeout: Duration,
    ) -> Pin<Box<dyn Future<Output = Result<ExecutionResult, RunnerError>> + Send + 'a>> {
        Box::pin(async move {
            let Some((program, args)) = argv.split_first() else {
                return Err(RunnerError::NotAllowed(String::new()));
            };

            let mut command = Command::new(program);
            command
                .args(args)
                .current_dir(cwd)
                .stdin(Stdio::null())
                .stdout(Stdio::piped())
                .stderr(Stdio::piped())
                .kill_on_drop(true);
            // Own process group, so a timeout reaches everything the child started.
            #[cfg(unix)]
            command.process_group(0);

            let mut child = command.spawn().map_err(|source| RunnerError::Spawn {
                program: program.clone(),
                source,
            })?;
            // Captured now: `id()` is gone once the child has been waited on.
            let group = child.id();

            let limit = self.max_output_bytes;
            let mut stdout_task = child
                .stdout
                .take()
                .map(|pipe| tokio::spawn(read_capped(pipe, limit)));
            let mut stderr_task = child
                .stderr
                .take()
                .map(|pipe| tokio::spawn(read_capped(pipe, limit)));

            // Both the exit and the pipe drain count against the deadline: a
            // grandchild holding the pipes open must not stall the caller.
            let finished = tokio::time::timeout(timeout, async {
                let status = child.wait().await.map_err(RunnerError::Wait)?;
                let stdout = join_capture(stdout_task.as_mut()).await;
                let stderr = join_capture(stderr_task.as_mut()).await;
                Ok::<_, RunnerError>((status, stdout, stderr))
            })
            .await;

            match finished {
                Ok(Ok((status, stdout, stderr))) => Ok(ExecutionResult {
                    exit_code: exit_code(status),
                    stdout,
                    stderr,
                    timed_out: false,
                }),
                Ok(Err(e)) => Err(e),
                Err(_) => {
                    tracing::warn!(
                        program = %program,
                        timeout_secs = timeout.as_secs(),
                        "command.timeout: killing child"
                    );
                    for task in [stdout_task.as_ref(), stderr_task.as_ref()]
                        .into_iter()
                        .flatten()
                    {
                        task.abort();
                    }
                    if let Some(pgid) = group {
                        kill_process_group(pgid);
                    }
                    child.start_kill().ok();
                    let status = child.wait().await.map_err(RunnerError::Wait)?;
                    Ok(ExecutionResult {
                        exit_code: exit_code(status),
                        stdout: String::new(),
                        stderr: String::new(),
                        timed_out: true,
                    })
                }
            }
        })
    }
}

/// Captured bytes from one stream, capped at the configured limit.
struct Capture {
    bytes: Vec<u8>,
    truncated: bool,
}

impl Capture {
    fn into_text(self, limit: usize) -> String {
        let mut text = String::from_utf8_lossy(&self.bytes).into_owned();
        if self.truncated {
            text.push_str(&format!("\n... [output truncated at {limit} bytes]"));
        }
        text
    }
}

/// Drain `reader` to EOF, keeping at most `limit` bytes.
///
/// Everything past the limit is still read and discarded so the child never
/// blocks on a full pipe.
async fn read_capped<R>(mut reader: R, limit: usize) -> String
where
    R: AsyncRead + Unpin,
{
    let mut capture = Capture {
        bytes: Vec::new(),
        truncated: false,
    };
    let mut chunk = [0u8; READ_CHUNK_BYTES];
    loop {
        match reader.read(&mut chunk).await {
            Ok(0) => break,
            Ok(n) => {
                let room = limit.saturating_sub(capture.bytes.len());
                if n > room {
                    capture.truncated = true;
                }
                capture.bytes.extend_from_slice(&chunk[..n.min(room)]);
            }
            Err(e) => {
                tracing::debug!(error = %e, "command.capture: read failed");
                break;
            }
        }
    }
    capture.into_text(limit)
}

async fn join_capture(task: Option<&mut JoinHandle<String>>) -> String {
    match task {
        Some(handle) => handle.await.unwrap_or_default(),
        None => String::new(),
    }
}

/// SIGKILL every process in the group led by `pgid`.
#[cfg(unix)]
fn kill_process_group(pgid: u32) {
    use nix::sys::signal::{Signal, killpg};
    use nix::unistd::Pid;

    let Ok(raw) = i32::try_from(pgid) else {
        return;
    };
    if let Err(e) = killpg(Pid::from_raw(raw), Signal::SIGKILL) {
        tracing::debug!(pgid, error = %e, "command.timeout: killpg failed");
    }
}

#[cfg(not(unix))]
fn kill_process_group(_pgid: u32) {}

/// Exit code, or the negated signal number for a child killed by a signal.
fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return -signal;
        }
    }
    -1
}
