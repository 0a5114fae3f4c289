//! Token sequence handling with explicit consumption tracking.
//!
//! A [`TokenSeq`] wraps an immutable token vector together with a visited
//! bitmap. Parsing marks matched tokens as consumed instead of mutating the
//! vector, which keeps index stability for later scans and makes the set of
//! tokens left over for a chained parent handler an explicit query.

use crate::error::CodecError;

/// An ordered sequence of option tokens with per-token consumption state.
#[derive(Debug, Clone, Default)]
pub struct TokenSeq {
    items: Vec<String>,
    consumed: Vec<bool>,
}

impl TokenSeq {
    /// Creates a token sequence from owned tokens.
    #[must_use]
    pub fn new(items: Vec<String>) -> Self {
        let consumed = vec![false; items.len()];
        Self { items, consumed }
    }

    /// Creates a token sequence from string slices.
    #[must_use]
    pub fn from_slice(items: &[&str]) -> Self {
        Self::new(items.iter().map(|s| (*s).to_string()).collect())
    }

    /// Returns the total number of tokens, consumed or not.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the sequence holds no tokens at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the index of the first unconsumed occurrence of `-flag`.
    fn find_flag(&self, flag: &str) -> Option<usize> {
        self.items
            .iter()
            .enumerate()
            .find(|&(i, token)| {
                !self.consumed[i]
                    && token.len() == flag.len() + 1
                    && token.starts_with('-')
                    && &token[1..] == flag
            })
            .map(|(i, _)| i)
    }

    /// Takes the value of the first unconsumed occurrence of `-flag`.
    ///
    /// Both the flag token and its value token are marked consumed, so a
    /// repeated call for the same flag finds the next occurrence and a scan
    /// for a different flag never sees them. Returns `Ok(None)` when no
    /// unconsumed occurrence exists.
    ///
    /// # Errors
    /// Returns [`CodecError::MissingValue`] if the flag is the last token.
    pub fn take_value(&mut self, flag: &str) -> Result<Option<String>, CodecError> {
        let Some(idx) = self.find_flag(flag) else {
            return Ok(None);
        };
        if idx + 1 >= self.items.len() {
            return Err(CodecError::MissingValue {
                flag: flag.to_string(),
            });
        }
        self.consumed[idx] = true;
        self.consumed[idx + 1] = true;
        Ok(Some(self.items[idx + 1].clone()))
    }

    /// Takes a bare boolean flag.
    ///
    /// Returns true and marks the token consumed if an unconsumed `-flag`
    /// occurrence exists, false otherwise.
    pub fn take_flag(&mut self, flag: &str) -> bool {
        if let Some(idx) = self.find_flag(flag) {
            self.consumed[idx] = true;
            true
        } else {
            false
        }
    }

    /// Returns the unconsumed tokens in their original order.
    #[must_use]
    pub fn remaining(&self) -> Vec<String> {
        self.items
            .iter()
            .enumerate()
            .filter(|&(i, _)| !self.consumed[i])
            .map(|(_, token)| token.clone())
            .collect()
    }

    /// Returns the number of tokens not yet consumed.
    #[must_use]
    pub fn remaining_len(&self) -> usize {
        self.consumed.iter().filter(|c| !**c).count()
    }
}

impl From<Vec<String>> for TokenSeq {
    fn from(items: Vec<String>) -> Self {
        Self::new(items)
    }
}

/// Splits a command-line string into tokens.
///
/// Whitespace separates tokens. Double quotes group a region into a single
/// token; a backslash escapes the next character inside or outside quotes.
///
/// # Errors
/// Returns [`CodecError::UnbalancedQuote`] if the string ends inside a
/// quoted region or after a trailing backslash.
pub fn split_command_line(cmdline: &str) -> Result<Vec<String>, CodecError> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_token = false;
    let mut in_quote = false;
    let mut chars = cmdline.chars();

    while let Some(c) = chars.next() {
        match c {
            '\\' => {
                let Some(escaped) = chars.next() else {
                    return Err(CodecError::UnbalancedQuote {
                        cmdline: cmdline.to_string(),
                    });
                };
                current.push(escaped);
                in_token = true;
            }
            '"' => {
                in_quote = !in_quote;
                in_token = true;
            }
            c if c.is_whitespace() && !in_quote => {
                if in_token {
                    tokens.push(std::mem::take(&mut current));
                    in_token = false;
                }
            }
            c => {
                current.push(c);
                in_token = true;
            }
        }
    }

    if in_quote {
        return Err(CodecError::UnbalancedQuote {
            cmdline: cmdline.to_string(),
        });
    }
    if in_token {
        tokens.push(current);
    }

    Ok(tokens)
}

/// Joins tokens into a command-line string.
///
/// Tokens containing whitespace, quotes, backslashes, or nothing at all are
/// wrapped in double quotes with embedded quotes and backslashes escaped.
/// The result splits back into the original tokens.
#[must_use]
pub fn join_command_line(tokens: &[String]) -> String {
    let mut result = String::new();
    for token in tokens {
        if !result.is_empty() {
            result.push(' ');
        }
        if needs_quoting(token) {
            result.push('"');
            for c in token.chars() {
                if c == '"' || c == '\\' {
                    result.push('\\');
                }
                result.push(c);
            }
            result.push('"');
        } else {
            result.push_str(token);
        }
    }
    result
}

/// Returns true if a token must be quoted to survive a split/join round trip.
fn needs_quoting(token: &str) -> bool {
    token.is_empty() || token.chars().any(|c| c.is_whitespace() || c == '"' || c == '\\')
}
