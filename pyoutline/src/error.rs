//! Error types for pyoutline
//!
//! Parse failures are recovered per file by the driver; nothing in the core
//! aborts a run over a single bad input.

use thiserror::Error as ThisError;

/// Result type alias for outline operations
pub type Result<T> = std::result::Result<T, OutlineError>;

/// Error types for outline operations
#[derive(Debug, ThisError)]
#[non_exhaustive]
pub enum OutlineError {
    /// Source text is not syntactically well-formed Python
    #[error("{0}")]
    Syntax(String),

    /// The Python grammar could not be loaded into the parser
    #[error("grammar error: {0}")]
    Grammar(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Directory walk or ignore-file error
    #[error("walk error: {0}")]
    Walk(String),

    /// Report serialization error
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl OutlineError {
    /// Create a syntax error
    pub fn syntax(message: impl Into<String>) -> Self {
        OutlineError::Syntax(message.into())
    }

    /// Create a grammar error
    pub fn grammar(message: impl Into<String>) -> Self {
        OutlineError::Grammar(message.into())
    }

    /// Create a walk error
    pub fn walk(message: impl Into<String>) -> Self {
        OutlineError::Walk(message.into())
    }
}
