use std::collections::BTreeSet;

use super::default_allowed_commands;

/// Extract the base verb: the first whitespace-delimited word of the raw input.
///
/// The lookup runs on the raw text before any quote handling, so `"ls"` or
/// `ls;` are distinct verbs and never match a plain `ls` entry. Empty and
/// whitespace-only input yields `""`.
pub fn base_verb(command: &str) -> &str {
    command.split_whitespace().next().unwrap_or("")
}

/// Immutable set of verbs that may be passed to process execution.
///
/// Built once at startup and shared behind an `Arc`; there is no mutation API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllowList {
    verbs: BTreeSet<String>,
}

impl AllowList {
    pub fn new<I, S>(verbs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            verbs: verbs.into_iter().map(Into::into).collect(),
        }
    }

    /// Exact, case-sensitive membership check.
    pub fn contains(&self, verb: &str) -> bool {
        !verb.is_empty() && self.verbs.contains(verb)
    }

    pub fn len(&self) -> usize {
        self.verbs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.verbs.is_empty()
    }

    /// Verbs in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.verbs.iter().map(String::as_str)
    }

    /// Comma-separated listing, used for the form placeholder.
    pub fn describe(&self) -> String {
        self.iter().collect::<Vec<_>>().join(", ")
    }
}

impl Default for AllowList {
    fn default() -> Self {
        Self::new(default_allowed_commands())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_verb_takes_first_word() {
        assert_eq!(base_verb("ls -la /tmp"), "ls");
        assert_eq!(base_verb("   echo   hi  "), "echo");
    }

    #[test]
    fn base_verb_of_empty_input_is_empty() {
        assert_eq!(base_verb(""), "");
        assert_eq!(base_verb("  \t \n "), "");
    }

    #[test]
    fn base_verb_keeps_shell_metacharacters_attached() {
        assert_eq!(base_verb("ls; rm -rf /"), "ls;");
        assert_eq!(base_verb("ls|wc"), "ls|wc");
        assert_eq!(base_verb("\"ls\" -la"), "\"ls\"");
    }

    #[test]
    fn default_list_contains_the_harmless_utilities() {
        let list = AllowList::default();
        for verb in [
            "ls", "pwd", "whoami", "date", "cal", "echo", "cat", "head", "tail", "grep", "wc",
            "find",
        ] {
            assert!(list.contains(verb), "{verb} should be allowed");
        }
        assert_eq!(list.len(), 12);
    }

    #[test]
    fn lookup_is_exact_and_case_sensitive() {
        let list = AllowList::default();
        assert!(!list.contains("LS"));
        assert!(!list.contains("/bin/ls"));
        assert!(!list.contains("ls;"));
        assert!(!list.contains("rm"));
        assert!(!list.contains(""));
    }

    #[test]
    fn custom_list_replaces_defaults() {
        let list = AllowList::new(["uptime", "echo"]);
        assert!(list.contains("uptime"));
        assert!(!list.contains("ls"));
        assert_eq!(list.describe(), "echo, uptime");
    }
}
