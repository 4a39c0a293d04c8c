//! Error types for cybershield.
//!
//! This module defines all error types used throughout the cybershield crate,
//! providing detailed context for debugging and user-friendly error messages.

use std::path::PathBuf;
use thiserror::Error;

use crate::case::CaseStatus;
use crate::validate::{ContactRejection, Rejection};

/// The main error type for cybershield operations.
#[derive(Error, Debug)]
pub enum Error {
    // === Storage Errors ===
    /// Failed to open or create the case database.
    #[error("failed to open case database at {path}: {source}")]
    DatabaseOpen {
        /// Path to the database file.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: rusqlite::Error,
    },

    /// A database query failed.
    #[error("database query failed: {0}")]
    DatabaseQuery(#[from] rusqlite::Error),

    /// Failed to run database migrations.
    #[error("database migration failed: {message}")]
    DatabaseMigration {
        /// Description of what went wrong.
        message: String,
    },

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

    // === Submission Errors ===
    /// A report submission was rejected by the validation gate.
    #[error("report rejected: {0}")]
    Rejected(Rejection),

    /// A contact message was rejected by the validation gate.
    #[error("message rejected: {0}")]
    ContactRejected(ContactRejection),

    // === Case Errors ===
    /// A supplied case identifier does not have the `CS-` + 6 digit shape.
    #[error("not a valid case ID: {input}")]
    InvalidCaseId {
        /// The input that failed to parse.
        input: String,
    },

    /// A status change was requested that the case lifecycle does not allow.
    #[error("invalid status transition: {from} -> {to}")]
    InvalidTransition {
        /// Status the case currently has.
        from: CaseStatus,
        /// Status that was requested.
        to: CaseStatus,
    },

    /// Minting a fresh case identifier kept colliding with stored cases.
    #[error("could not mint an unused case ID after {attempts} attempts")]
    IdSpaceExhausted {
        /// Number of draws that were tried.
        attempts: usize,
    },

    // === Network Errors ===
    /// The contact endpoint could not be reached or returned a failure.
    #[error("contact endpoint error: {0}")]
    Network(#[from] reqwest::Error),

    // === I/O Errors ===
    /// File system operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to create a required directory.
    #[error("failed to create directory {path}: {source}")]
    DirectoryCreate {
        /// Path that couldn't be created.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    // === Serialization Errors ===
    /// JSON serialization/deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for cybershield operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::ConfigLoad(Box::new(err))
    }
}

impl From<Rejection> for Error {
    fn from(rejection: Rejection) -> Self {
        Self::Rejected(rejection)
    }
}

impl From<ContactRejection> for Error {
    fn from(rejection: ContactRejection) -> Self {
        Self::ContactRejected(rejection)
    }
}

impl Error {
    /// Create an invalid-case-id error.
    #[must_use]
    pub fn invalid_case_id(input: impl Into<String>) -> Self {
        Self::InvalidCaseId {
            input: input.into(),
        }
    }

    /// Check if this error is a validation rejection (report or contact path).
    #[must_use]
    pub fn is_rejection(&self) -> bool {
        matches!(self, Self::Rejected(_) | Self::ContactRejected(_))
    }

    /// Check if this error came from the contact network path.
    ///
    /// Network failures are retryable from the user's point of view; nothing
    /// was persisted and the same message can simply be sent again.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Network(_))
    }
}
