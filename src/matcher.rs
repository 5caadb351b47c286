//! Value decoding and substring matching shared by the Secret and ConfigMap scans

use thiserror::Error;

/// Largest byte payload that is decoded for comparison
pub const MAX_DATA_SIZE: usize = 10_000;

/// Reason a byte payload was not turned into text
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// Payload is larger than the allowed size
    #[error("value size ({size} bytes) exceeds limit ({limit} bytes)")]
    Oversized { size: usize, limit: usize },
    /// Payload is not valid UTF-8
    #[error("value is not valid UTF-8")]
    NotUtf8,
}

/// Decode a byte payload into text.
///
/// The size ceiling is checked before UTF-8 validity.
pub fn decode(bytes: &[u8], max_size: usize) -> Result<&str, DecodeError> {
    if bytes.len() > max_size {
        return Err(DecodeError::Oversized {
            size: bytes.len(),
            limit: max_size,
        });
    }

    std::str::from_utf8(bytes).map_err(|_| DecodeError::NotUtf8)
}

/// Whether `pattern` occurs in `candidate`, optionally ignoring case
pub fn matches(candidate: &str, pattern: &str, case_sensitive: bool) -> bool {
    if case_sensitive {
        candidate.contains(pattern)
    } else {
        candidate.to_lowercase().contains(&pattern.to_lowercase())
    }
}

/// A search pattern folded once for repeated comparisons
#[derive(Debug, Clone)]
pub struct Matcher {
    pattern: String,
    case_sensitive: bool,
}

impl Matcher {
    /// Create a matcher for `pattern`
    pub fn new(pattern: &str, case_sensitive: bool) -> Self {
        let pattern = if case_sensitive {
            pattern.to_string()
        } else {
            pattern.to_lowercase()
        };

        Self {
            pattern,
            case_sensitive,
        }
    }

    /// Pattern as compared, lower-cased unless case sensitive
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Whether comparisons keep case
    pub fn case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    /// Whether the pattern occurs in `candidate`
    pub fn is_match(&self, candidate: &str) -> bool {
        if self.case_sensitive {
            candidate.contains(&self.pattern)
        } else {
            candidate.to_lowercase().contains(&self.pattern)
        }
    }
}
