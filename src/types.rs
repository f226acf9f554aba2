use std::convert::Infallible;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::parse::parse_path;

/// One parsed unit of a path: an object-field access or an array-index access.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum PathToken {
    Key(String),
    Index(usize),
}

impl PathToken {
    /// The object field this token addresses during mutation. Index tokens
    /// mutate the field named by their decimal spelling; arrays are never
    /// traversed by index when assigning or removing.
    pub(crate) fn field_name(&self) -> String {
        match self {
            PathToken::Key(key) => key.clone(),
            PathToken::Index(index) => index.to_string(),
        }
    }
}

/// A parsed dot/bracket path addressing a location inside a JSON value.
///
/// Paths are immutable once parsed and can be resolved against any number of
/// values. The grammar is lenient and total: a fragment the grammar cannot
/// make sense of becomes a literal key token, so parsing never fails. The
/// bare path `.` (or the empty string) addresses the root value itself.
///
/// ## Example
///
/// ```rust
/// use dotjson::{JsonPath, PathToken};
///
/// let path = JsonPath::from(".keys[0].name");
/// assert_eq!(
///     path.tokens(),
///     &[
///         PathToken::Key("keys".to_string()),
///         PathToken::Index(0),
///         PathToken::Key("name".to_string()),
///     ]
/// );
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct JsonPath {
    tokens: Vec<PathToken>,
}

impl JsonPath {
    pub fn new(tokens: Vec<PathToken>) -> Self {
        JsonPath { tokens }
    }

    /// Returns the tokens of the parsed path.
    pub fn tokens(&self) -> &[PathToken] {
        &self.tokens
    }

    /// True for the root path (`.` or the empty string).
    pub fn is_root(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl From<&str> for JsonPath {
    fn from(input: &str) -> Self {
        parse_path(input)
    }
}

impl FromStr for JsonPath {
    type Err = Infallible;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        Ok(parse_path(input))
    }
}

impl fmt::Display for JsonPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.tokens.is_empty() {
            return f.write_str(".");
        }
        for token in &self.tokens {
            match token {
                PathToken::Key(key) => write!(f, ".{key}")?,
                PathToken::Index(index) => write!(f, "[{index}]")?,
            }
        }
        Ok(())
    }
}

/// Everything that can go wrong while operating on a document. Each variant
/// is terminal for the invocation; the CLI reports it on stderr and exits
/// non-zero.
#[derive(Debug, Error)]
pub enum Error {
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid JSON in {}: {source}", .path.display())]
    Document {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Invalid JSON value: {0}")]
    Value(serde_json::Error),

    #[error("Path {0} is not an array")]
    NotAnArray(JsonPath),

    #[error("Failed to serialize document: {0}")]
    Serialize(serde_json::Error),

    #[error("Failed to save {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}
