// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use profit_master::CoreError;
use profit_master_domain::DomainError;
use profit_master_persistence::PersistenceError;

use crate::parameters::ParameterError;

/// Authentication and authorization errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Authentication failed.
    AuthenticationFailed {
        /// The reason authentication failed.
        reason: String,
    },
    /// Authorization failed.
    Unauthorized {
        /// The action that was attempted.
        action: String,
        /// The role required for this action.
        required_role: String,
    },
}

impl std::fmt::Display for AuthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AuthenticationFailed { reason } => {
                write!(f, "Authentication failed: {reason}")
            }
            Self::Unauthorized {
                action,
                required_role,
            } => {
                write!(f, "Unauthorized: '{action}' requires {required_role} role")
            }
        }
    }
}

impl std::error::Error for AuthError {}

/// API-level errors.
///
/// These are distinct from domain/core errors and represent the API contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Authentication failed.
    AuthenticationFailed {
        /// The reason authentication failed.
        reason: String,
    },
    /// Authorization failed - the actor does not have permission.
    Unauthorized {
        /// The action that was attempted.
        action: String,
        /// The role required for this action.
        required_role: String,
    },
    /// A precondition for the requested operation does not hold.
    InvalidPrecondition {
        /// The precondition that failed.
        rule: String,
        /// A human-readable description of the failure.
        message: String,
    },
    /// No master update exists to revert.
    NothingToRevert {
        /// The profit year that was requested.
        profit_year: u16,
    },
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A requested resource was not found.
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// An internal error occurred.
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AuthenticationFailed { reason } => {
                write!(f, "Authentication failed: {reason}")
            }
            Self::Unauthorized {
                action,
                required_role,
            } => {
                write!(f, "Unauthorized: '{action}' requires {required_role} role")
            }
            Self::InvalidPrecondition { rule, message } => {
                write!(f, "Precondition failed ({rule}): {message}")
            }
            Self::NothingToRevert { profit_year } => {
                write!(
                    f,
                    "No master update exists to revert for profit year {profit_year}"
                )
            }
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::ResourceNotFound {
                resource_type,
                message,
            } => {
                write!(f, "{resource_type} not found: {message}")
            }
            Self::Internal { message } => {
                write!(f, "Internal error: {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::AuthenticationFailed { reason } => Self::AuthenticationFailed { reason },
            AuthError::Unauthorized {
                action,
                required_role,
            } => Self::Unauthorized {
                action,
                required_role,
            },
        }
    }
}

impl From<ParameterError> for ApiError {
    fn from(err: ParameterError) -> Self {
        Self::InvalidInput {
            field: String::from(err.field()),
            message: err.to_string(),
        }
    }
}

fn already_run(profit_year: u16) -> ApiError {
    ApiError::InvalidPrecondition {
        rule: String::from("single_run_per_year"),
        message: format!("Master update has already run for profit year {profit_year}"),
    }
}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked directly.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    match err {
        DomainError::YearLockViolation {
            profit_year,
            wall_clock_year,
        } => ApiError::InvalidPrecondition {
            rule: String::from("year_lock"),
            message: format!(
                "Profit year {profit_year} can only be updated during {}, not {wall_clock_year}",
                i32::from(profit_year) + 1
            ),
        },
        DomainError::RunAlreadyExists(year) => already_run(year),
        DomainError::NothingToRevert(profit_year) => ApiError::NothingToRevert { profit_year },
        DomainError::FrozenSnapshotMissing { profit_year } => ApiError::InvalidPrecondition {
            rule: String::from("frozen_snapshot_required"),
            message: format!(
                "Demographics must be frozen for profit year {profit_year} before the master update"
            ),
        },
        DomainError::FrozenSnapshotMismatch {
            profit_year,
            frozen_year,
        } => ApiError::InvalidPrecondition {
            rule: String::from("frozen_snapshot_year"),
            message: format!(
                "The active freeze is for {frozen_year}, \
                 but the master update targets {profit_year}"
            ),
        },
        DomainError::MissingClassification { profit_code } => ApiError::Internal {
            message: format!("Profit code {profit_code} is not in the classification table"),
        },
        DomainError::UnsupportedClassification {
            profit_code,
            comment_type,
        } => ApiError::InvalidInput {
            field: String::from("candidates"),
            message: format!(
                "Profit code {profit_code} with comment type {} \
                 is not written by the master update",
                comment_type.map_or_else(|| String::from("none"), |c| c.to_string())
            ),
        },
        DomainError::UnknownCommentType(id) => ApiError::InvalidInput {
            field: String::from("comment_type"),
            message: format!("Unknown comment type: {id}"),
        },
        DomainError::UnknownZeroContributionReason(id) => ApiError::InvalidInput {
            field: String::from("zero_contribution_reason"),
            message: format!("Unknown zero contribution reason: {id}"),
        },
        DomainError::InvalidProfitYear(msg) => ApiError::InvalidInput {
            field: String::from("profit_year"),
            message: msg,
        },
        DomainError::InvalidPersonKey(msg) => ApiError::InvalidInput {
            field: String::from("ssn"),
            message: msg,
        },
        DomainError::InvalidMoney { field, reason }
        | DomainError::InvalidPercentage { field, reason } => ApiError::InvalidInput {
            field,
            message: reason,
        },
    }
}

/// Translates a core error into an API error.
///
/// This translation is explicit and ensures core errors are not leaked directly.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    match err {
        CoreError::DomainViolation(domain_err) => translate_domain_error(domain_err),
        CoreError::Internal(msg) => ApiError::Internal {
            message: format!("Internal error: {msg}"),
        },
    }
}

/// Translates a persistence error into an API error.
///
/// Storage-level conflicts found inside the transaction map to the same
/// errors the preconditions report; everything else is internal.
#[must_use]
pub fn translate_persistence_error(err: PersistenceError) -> ApiError {
    match err {
        PersistenceError::RunAlreadyExists(year) => already_run(year),
        PersistenceError::NothingToRevert(profit_year) => ApiError::NothingToRevert { profit_year },
        PersistenceError::EventNotFound(event_id) => ApiError::ResourceNotFound {
            resource_type: String::from("Audit event"),
            message: format!("Audit event {event_id} does not exist"),
        },
        PersistenceError::NotFound(msg) => ApiError::ResourceNotFound {
            resource_type: String::from("Record"),
            message: msg,
        },
        other => ApiError::Internal {
            message: other.to_string(),
        },
    }
}
