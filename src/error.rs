use thiserror::Error;

// ─── Tokenizer errors ────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenizeError {
    #[error("No closing quotation")]
    UnterminatedQuote,

    #[error("No escaped character")]
    TrailingEscape,
}

// ─── Runner errors ───────────────────────────────────────────────────────────

/// Failures between "the verb is allowed" and "the child exited".
#[derive(Debug, Error)]
pub enum RunnerError {
    #[error("{0}")]
    Parse(#[from] TokenizeError),

    #[error("could not determine the home directory")]
    HomeDirUnavailable,

    #[error("refusing to execute '{0}': not in the allow-list")]
    NotAllowed(String),

    #[error("{program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed while waiting for child process: {0}")]
    Wait(#[source] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spawn_error_names_program() {
        let err = RunnerError::Spawn {
            program: "ls".into(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "No such file or directory"),
        };
        assert_eq!(err.to_string(), "ls: No such file or directory");
    }

    #[test]
    fn parse_error_is_transparent() {
        let err = RunnerError::from(TokenizeError::UnterminatedQuote);
        assert_eq!(err.to_string(), "No closing quotation");
    }
}
