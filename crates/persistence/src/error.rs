// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use profit_master_domain::DomainError;

/// Errors that can occur during persistence operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersistenceError {
    /// A database error occurred.
    DatabaseError(String),
    /// Database connection failed.
    DatabaseConnectionFailed(String),
    /// Database migration failed.
    MigrationFailed(String),
    /// Query execution failed.
    QueryFailed(String),
    /// The requested audit event was not found.
    EventNotFound(i64),
    /// A stored row could not be converted back into a domain value.
    ReconstructionError(String),
    /// Serialization/deserialization error.
    SerializationError(String),
    /// Initialization error.
    InitializationError(String),
    /// Foreign key enforcement is not enabled.
    ForeignKeyEnforcementNotEnabled,
    /// A run status already exists for the profit year.
    RunAlreadyExists(u16),
    /// No run status exists for the profit year.
    NothingToRevert(u16),
    /// The ledger bulk insert failed; no entries were written.
    BulkWriteFailed {
        /// The profit year being written.
        profit_year: u16,
        /// The number of entries in the batch.
        rows: usize,
        /// The underlying database error.
        reason: String,
    },
    /// A cross-year balance update failed; the whole run was rolled back.
    SynchronizationFailed {
        /// The profit year being synchronized.
        profit_year: u16,
        /// The number of ledger entries in the run.
        ledger_rows: usize,
        /// The synchronization step that failed.
        step: String,
        /// The underlying database error.
        reason: String,
    },
    /// The requested resource was not found.
    NotFound(String),
}

impl std::fmt::Display for PersistenceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DatabaseError(msg) => write!(f, "Database error: {msg}"),
            Self::DatabaseConnectionFailed(msg) => {
                write!(f, "Database connection failed: {msg}")
            }
            Self::MigrationFailed(msg) => write!(f, "Migration failed: {msg}"),
            Self::QueryFailed(msg) => write!(f, "Query failed: {msg}"),
            Self::EventNotFound(id) => write!(f, "Event not found: {id}"),
            Self::ReconstructionError(msg) => write!(f, "Stored data is invalid: {msg}"),
            Self::SerializationError(msg) => write!(f, "Serialization error: {msg}"),
            Self::InitializationError(msg) => write!(f, "Initialization error: {msg}"),
            Self::ForeignKeyEnforcementNotEnabled => {
                write!(f, "Foreign key enforcement is not enabled")
            }
            Self::RunAlreadyExists(year) => {
                write!(f, "Master update has already run for profit year {year}")
            }
            Self::NothingToRevert(year) => {
                write!(f, "No master update exists to revert for profit year {year}")
            }
            Self::BulkWriteFailed {
                profit_year,
                rows,
                reason,
            } => write!(
                f,
                "Failed to write {rows} ledger entries for profit year {profit_year}: {reason}"
            ),
            Self::SynchronizationFailed {
                profit_year,
                ledger_rows,
                step,
                reason,
            } => write!(
                f,
                "Balance synchronization step '{step}' failed for profit year {profit_year} \
                 ({ledger_rows} ledger entries): {reason}"
            ),
            Self::NotFound(msg) => write!(f, "Not found: {msg}"),
        }
    }
}

impl std::error::Error for PersistenceError {}

impl From<diesel::result::Error> for PersistenceError {
    fn from(err: diesel::result::Error) -> Self {
        match err {
            diesel::result::Error::NotFound => Self::NotFound("Record not found".to_string()),
            _ => Self::DatabaseError(err.to_string()),
        }
    }
}

impl From<diesel::ConnectionError> for PersistenceError {
    fn from(err: diesel::ConnectionError) -> Self {
        Self::DatabaseConnectionFailed(err.to_string())
    }
}

impl From<serde_json::Error> for PersistenceError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError(err.to_string())
    }
}

impl From<DomainError> for PersistenceError {
    fn from(err: DomainError) -> Self {
        Self::ReconstructionError(err.to_string())
    }
}
