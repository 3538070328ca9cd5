//! Error types for dxfgrab

use std::io;
use thiserror::Error;

/// Main error type for dxfgrab operations
#[derive(Debug, Error)]
pub enum DxfError {
    /// IO error occurred while reading the stream or file
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The tag stream violates the DXF grammar
    ///
    /// Raised for missing paired coordinate tags, unterminated app-data,
    /// trailing tags after extended data and unparsable literals.
    #[error("DXF structure error: {message}{}", line_suffix(.line))]
    Structure {
        /// What went wrong
        message: String,
        /// 1-based line number of the offending tag, when known
        line: Option<usize>,
    },

    /// Unknown text encoding requested
    #[error("Encoding error: {0}")]
    Encoding(String),
}

fn line_suffix(line: &Option<usize>) -> String {
    match line {
        Some(line) => format!(" (line {line})"),
        None => String::new(),
    }
}

impl DxfError {
    /// Create a structure error pointing at a source line
    pub fn structure_at(message: impl Into<String>, line: usize) -> Self {
        DxfError::Structure {
            message: message.into(),
            line: Some(line),
        }
    }

    /// Create a structure error without line information
    pub fn structure(message: impl Into<String>) -> Self {
        DxfError::Structure {
            message: message.into(),
            line: None,
        }
    }

    /// Line number carried by a structure error
    pub fn line(&self) -> Option<usize> {
        match self {
            DxfError::Structure { line, .. } => *line,
            _ => None,
        }
    }
}

/// Result type alias for dxfgrab operations
pub type Result<T> = std::result::Result<T, DxfError>;
