//! Trading post identity and name matching.

use serde::Serialize;
use std::fmt;

/// A trading post identified by a hierarchical location path, e.g.
/// `["Stanton", "Crusader", "Port Olisar"]`.
///
/// Equality and hashing use the full path. Posts whose path mentions
/// `"Hidden"` are flagged so ingestion can skip them by default.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Port {
    path: Vec<String>,
    hidden: bool,
}

impl Port {
    pub fn new(path: Vec<String>) -> Self {
        let hidden = path.iter().any(|segment| segment.contains("Hidden"));

        Self { path, hidden }
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    /// Identity key: the path rendered as a string.
    pub fn key(&self) -> String {
        self.to_string()
    }

    /// The terminal path segment, the name a human would type.
    pub fn name(&self) -> &str {
        self.path.last().map(String::as_str).unwrap_or("")
    }

    /// Match a human-entered query against the terminal path segment.
    ///
    /// Matching is partial, case-insensitive, and punctuation-insensitive.
    /// The query may contain comma-separated tokens, which must occur in
    /// the name in the given order: `"port,olisar"` matches `Port Olisar`.
    pub fn matches_name(&self, query: &str) -> bool {
        let name = searchable(self.name());

        let mut rest = name.as_str();
        for token in query.split(',') {
            let token = searchable(token);
            match rest.find(&token) {
                Some(at) => rest = &rest[at + token.len()..],
                None => return false,
            }
        }

        true
    }
}

/// Lowercase and strip everything but letters and digits.
fn searchable(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}

impl fmt::Display for Port {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path.join(" > "))
    }
}
