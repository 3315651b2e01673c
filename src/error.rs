//! Error types for quote computation.

use std::path::PathBuf;
use thiserror::Error;

/// Error codes for quote processing, used as process exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Rate file not found (-1)
    FileNotFound = -1,
    /// Rate file unreadable (-2)
    BadRateFile = -2,
    /// Input out of range (-3)
    InvalidInput = -3,
    /// Label width not positive (E100)
    InvalidWidth = 100,
    /// No cylinder satisfies the gap range (E200)
    NoCylinder = 200,
}

/// Main error type for quoting.
#[derive(Debug, Error)]
pub enum QuoteError {
    #[error("Error: Label width must be > 0 (got {width})")]
    InvalidWidth { width: f64 },

    #[error("No cylinder found ({z_min}-{z_max} teeth) for W={width:.3}mm with G={gap_min:.1}-{gap_max:.1}mm")]
    NoCylinder {
        width: f64,
        z_min: u32,
        z_max: u32,
        gap_min: f64,
        gap_max: f64,
    },

    #[error("Invalid value for '{field}': expected {expected}, got '{value}'")]
    InvalidValue {
        field: String,
        expected: String,
        value: String,
    },

    #[error("Unknown material: {name}")]
    UnknownMaterial { name: String },

    #[error("Unknown tool type: {name} (expected none, semirotary or rotary)")]
    UnknownTool { name: String },

    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid rate file: {0}")]
    Json(#[from] serde_json::Error),
}

impl QuoteError {
    /// Get the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            QuoteError::InvalidWidth { .. } => ErrorCode::InvalidWidth,
            QuoteError::NoCylinder { .. } => ErrorCode::NoCylinder,
            QuoteError::InvalidValue { .. } => ErrorCode::InvalidInput,
            QuoteError::UnknownMaterial { .. } => ErrorCode::InvalidInput,
            QuoteError::UnknownTool { .. } => ErrorCode::InvalidInput,
            QuoteError::FileNotFound { .. } => ErrorCode::FileNotFound,
            QuoteError::Io(_) => ErrorCode::FileNotFound,
            QuoteError::Json(_) => ErrorCode::BadRateFile,
        }
    }

    /// Get the numeric error code value.
    pub fn code_value(&self) -> i32 {
        self.code() as i32
    }

    /// Whether this is a user-facing warning rather than a fault.
    ///
    /// A label size with no feasible cylinder is a legitimate answer, not a
    /// broken input.
    pub fn is_warning(&self) -> bool {
        matches!(self, QuoteError::NoCylinder { .. })
    }
}

/// Result type alias for quote operations.
pub type Result<T> = std::result::Result<T, QuoteError>;
