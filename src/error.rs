//! Error types for user.js parsing and profile operations
//!
//! All public functions in the library return [`Result<T, Error>`].

use std::path::PathBuf;

/// Errors that can occur while loading, writing or installing preferences
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Lexer error during tokenization
    #[error("Lexer error at line {line}, column {column}: {message}")]
    Lexer {
        line: usize,
        column: usize,
        message: String,
    },

    /// Parser error: the input does not match `user_pref(name, value);`
    #[error("Parser error at line {line}, column {column}: {message}")]
    Parser {
        line: usize,
        column: usize,
        message: String,
    },

    /// A key was declared twice while loading in strict mode
    #[error("Duplicate preference '{key}' at line {line} (first declared at line {first_line})")]
    DuplicateKey {
        key: String,
        first_line: usize,
        line: usize,
    },

    /// I/O error during file operations
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Profile not found
    #[error("Profile '{name}' not found in {directory}")]
    ProfileNotFound { name: String, directory: PathBuf },

    /// Profile name matched more than one directory
    #[error("Multiple profiles match '{name}': {candidates}")]
    AmbiguousProfile { name: String, candidates: String },

    /// Invalid profiles directory or profile directory
    #[error("Invalid profile directory: {0}")]
    InvalidProfileDirectory(PathBuf),

    /// profiles.ini parsing error
    #[error("Failed to parse profiles.ini: {0}")]
    ProfilesIniParse(String),

    /// Invalid glob pattern in query
    #[error("Invalid glob pattern: {0}")]
    InvalidGlobPattern(String),

    /// Refused to replace an existing user.js
    #[error("{0} already exists")]
    UserJsExists(PathBuf),

    /// Unknown preset name
    #[error("Unknown preset '{0}'. Expected 'minimum' or 'full'")]
    UnknownPreset(String),
}

impl Error {
    /// Whether this error comes from malformed input text
    pub fn is_parse_error(&self) -> bool {
        matches!(self, Error::Lexer { .. } | Error::Parser { .. })
    }
}

/// Result type alias for convenience
///
/// # Example
///
/// ```rust
/// use perf_prefs::{load_prefs, LoadOptions, Result};
///
/// fn count(content: &str) -> Result<usize> {
///     let prefs = load_prefs(content, &LoadOptions::default())?;
///     Ok(prefs.len())
/// }
/// # assert_eq!(count("user_pref(\"a.b\", 1);").unwrap(), 1);
/// ```
pub type Result<T> = std::result::Result<T, Error>;
