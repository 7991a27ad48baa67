/// Verbs permitted when no `[runner] allowed_commands` override is configured.
#[must_use]
pub fn default_allowed_commands() -> Vec<String> {
    vec![
        "ls".into(),
        "pwd".into(),
        "whoami".into(),
        "date".into(),
        "cal".into(),
        "echo".into(),
        "cat".into(),
        "head".into(),
        "tail".into(),
        "grep".into(),
        "wc".into(),
        "find".into(),
    ]
}
