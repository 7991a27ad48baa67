//! POSIX shell-style word splitting.
//!
//! Only quoting and escaping are honoured. Nothing is expanded: `$VAR`, `~`,
//! globs and command substitution stay literal, and `;`, `|`, `&`, `>` are
//! ordinary characters inside a word.

use crate::error::TokenizeError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Unquoted,
    Single,
    Double,
}

/// Split `input` into argv words.
///
/// - Single quotes preserve every character literally.
/// - Inside double quotes a backslash only escapes `"` and `\`; before any
///   other character it is kept.
/// - Outside quotes a backslash escapes the next character.
/// - Quoted and unquoted pieces that touch form one word, and `''` / `""`
///   produce an empty word.
pub fn split(input: &str) -> Result<Vec<String>, TokenizeError> {
    let mut words = Vec::new();
    let mut current = String::new();
    // Tracks whether a word has started, so empty quotes still yield a word.
    let mut in_word = false;
    let mut state = State::Unquoted;
    let mut chars = input.chars();

    while let Some(ch) = chars.next() {
        match state {
            State::Single => {
                if ch == '\'' {
                    state = State::Unquoted;
                } else {
                    current.push(ch);
                }
            }
            State::Double => match ch {
                '"' => state = State::Unquoted,
                '\\' => {
                    let next = chars.next().ok_or(TokenizeError::TrailingEscape)?;
                    if !matches!(next, '"' | '\\') {
                        current.push('\\');
                    }
                    current.push(next);
                }
                _ => current.push(ch),
            },
            State::Unquoted => match ch {
                '\'' => {
                    state = State::Single;
                    in_word = true;
                }
                '"' => {
                    state = State::Double;
                    in_word = true;
                }
                '\\' => {
                    let next = chars.next().ok_or(TokenizeError::TrailingEscape)?;
                    current.push(next);
                    in_word = true;
                }
                ' ' | '\t' | '\r' | '\n' => {
                    if in_word {
                        words.push(std::mem::take(&mut current));
                        in_word = false;
                    }
                }
                _ => {
                    current.push(ch);
                    in_word = true;
                }
            },
        }
    }

    if state != State::Unquoted {
        return Err(TokenizeError::UnterminatedQuote);
    }
    if in_word {
        words.push(current);
    }

    Ok(words)
}
