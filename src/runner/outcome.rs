use super::executor::ExecutionResult;
use std::fmt;

pub const NO_OUTPUT_MESSAGE: &str = "Command executed successfully with no output.";
pub const TIMEOUT_MESSAGE: &str = "Command timed out. Execution took too long.";

/// Terminal state of a single `run` invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Base verb not in the allow-list; nothing was executed.
    Rejected { verb: String },
    /// Exit code 0.
    Success { stdout: String },
    NonZeroExit { code: i32, stderr: String },
    /// Deadline elapsed; the child was killed and reaped.
    TimedOut,
    /// Parse, spawn or wait failure.
    Fault { message: String },
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Short label for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Rejected { .. } => "rejected",
            Self::Success { .. } => "success",
            Self::NonZeroExit { .. } => "nonzero_exit",
            Self::TimedOut => "timeout",
            Self::Fault { .. } => "fault",
        }
    }
}

impl From<ExecutionResult> for Outcome {
    fn from(result: ExecutionResult) -> Self {
        if result.timed_out {
            Self::TimedOut
        } else if result.exit_code == 0 {
            Self::Success {
                stdout: result.stdout,
            }
        } else {
            Self::NonZeroExit {
                code: result.exit_code,
                stderr: result.stderr,
            }
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rejected { verb } => {
                write!(f, "Command '{verb}' is not in the list of allowed commands.")
            }
            Self::Success { stdout } if stdout.is_empty() => f.write_str(NO_OUTPUT_MESSAGE),
            Self::Success { stdout } => f.write_str(stdout),
            Self::NonZeroExit { code, stderr } => write!(f, "Error (Exit Code {code}):\n{stderr}"),
            Self::TimedOut => f.write_str(TIMEOUT_MESSAGE),
            Self::Fault { message } => write!(f, "An error occurred: {message}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(exit_code: i32, stdout: &str, stderr: &str, timed_out: bool) -> ExecutionResult {
        ExecutionResult {
            exit_code,
            stdout: stdout.into(),
            stderr: stderr.into(),
            timed_out,
        }
    }

    #[test]
    fn success_returns_stdout_verbatim() {
        let outcome = Outcome::from(result(0, "  a b\n\n", "ignored", false));
        assert_eq!(outcome.to_string(), "  a b\n\n");
        assert!(outcome.is_success());
    }

    #[test]
    fn empty_stdout_uses_fixed_message() {
        let outcome = Outcome::from(result(0, "", "warning", false));
        assert_eq!(outcome.to_string(), NO_OUTPUT_MESSAGE);
    }

    #[test]
    fn nonzero_exit_reports_code_and_stderr() {
        let outcome = Outcome::from(result(2, "partial", "no such file\n", false));
        assert_eq!(outcome.to_string(), "Error (Exit Code 2):\nno such file\n");
        assert_eq!(outcome.kind(), "nonzero_exit");
    }

    #[test]
    fn timeout_wins_over_exit_code() {
        let outcome = Outcome::from(result(-9, "", "", true));
        assert_eq!(outcome, Outcome::TimedOut);
        assert_eq!(outcome.to_string(), TIMEOUT_MESSAGE);
    }

    #[test]
    fn rejection_names_the_verb() {
        let outcome = Outcome::Rejected { verb: "rm".into() };
        assert_eq!(
            outcome.to_string(),
            "Command 'rm' is not in the list of allowed commands."
        );
    }

    #[test]
    fn fault_includes_description() {
        let outcome = Outcome::Fault {
            message: "No closing quotation".into(),
        };
        assert_eq!(outcome.to_string(), "An error occurred: No closing quotation");
    }
}
