//! Error types for cliniclog.
//!
//! Domain errors (`NotFound`, `Full`, validation failures) are recovered by the
//! menu loop and shown to the clerk. Configuration and I/O errors are fatal
//! and surface from `main`.

use thiserror::Error;

use crate::record::Field;

/// The main error type for cliniclog operations.
#[derive(Error, Debug)]
pub enum Error {
    // === Record Store Errors ===
    /// No occupied slot carries the requested SR-Code.
    #[error("SR-Code '{code}' does not exist")]
    NotFound {
        /// The SR-Code that was looked up.
        code: String,
    },

    /// Every slot in the table is occupied.
    #[error("record table is full (capacity {capacity})")]
    Full {
        /// Number of slots in the table.
        capacity: usize,
    },

    // === Validation Errors ===
    /// A field value is longer than the field allows.
    #[error("{field} is too long: {actual} characters (maximum {max})")]
    FieldTooLong {
        /// The offending field.
        field: Field,
        /// Maximum number of characters allowed.
        max: usize,
        /// Number of characters supplied.
        actual: usize,
    },

    /// A record was submitted without an SR-Code.
    #[error("SR-Code must not be empty")]
    EmptyCode,

    // === Configuration Errors ===
    /// Failed to load configuration.
    #[error("failed to load configuration: {0}")]
    ConfigLoad(Box<figment::Error>),

    /// Configuration validation failed.
    #[error("invalid configuration: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    // === I/O Errors ===
    /// Reading from or writing to the terminal failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized Result type for cliniclog operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::ConfigLoad(Box::new(err))
    }
}

impl Error {
    /// Create a not-found error for the given SR-Code.
    #[must_use]
    pub fn not_found(code: impl Into<String>) -> Self {
        Self::NotFound { code: code.into() }
    }

    /// Check if this error means the SR-Code was absent.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this error means the table had no free slot.
    #[must_use]
    pub fn is_full(&self) -> bool {
        matches!(self, Self::Full { .. })
    }

    /// Check if this error is a rejected field value.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::FieldTooLong { .. } | Self::EmptyCode)
    }
}
