// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The requested profit year is not the year immediately preceding the wall-clock year.
    YearLockViolation {
        /// The profit year that was requested.
        profit_year: u16,
        /// The wall-clock year at the time of the request.
        wall_clock_year: i32,
    },
    /// A master update has already been applied for the profit year.
    RunAlreadyExists(u16),
    /// No master update has been applied for the profit year.
    NothingToRevert(u16),
    /// No active frozen demographic snapshot exists.
    FrozenSnapshotMissing {
        /// The profit year the snapshot was required for.
        profit_year: u16,
    },
    /// The active frozen snapshot belongs to a different profit year.
    FrozenSnapshotMismatch {
        /// The profit year being updated.
        profit_year: u16,
        /// The year of the active snapshot.
        frozen_year: u16,
    },
    /// A candidate references a profit code that is not in the classification table.
    MissingClassification {
        /// The unknown profit code.
        profit_code: u8,
    },
    /// A candidate carries a classification the revert filter cannot remove.
    UnsupportedClassification {
        /// The profit code.
        profit_code: u8,
        /// The comment type, if any.
        comment_type: Option<u8>,
    },
    /// A comment type id is not known.
    UnknownCommentType(u8),
    /// A zero contribution reason id is not known.
    UnknownZeroContributionReason(u8),
    /// Invalid profit year value.
    InvalidProfitYear(String),
    /// Invalid person key (SSN).
    InvalidPersonKey(String),
    /// A monetary amount is not representable as whole cents.
    InvalidMoney {
        /// The field that failed validation.
        field: String,
        /// Description of the validation error.
        reason: String,
    },
    /// A percentage is out of range.
    InvalidPercentage {
        /// The field that failed validation.
        field: String,
        /// Description of the validation error.
        reason: String,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::YearLockViolation {
                profit_year,
                wall_clock_year,
            } => write!(
                f,
                "Profit year {profit_year} cannot be updated in {wall_clock_year}; only {} is open",
                wall_clock_year - 1
            ),
            Self::RunAlreadyExists(year) => {
                write!(f, "Master update has already run for profit year {year}")
            }
            Self::NothingToRevert(year) => {
                write!(f, "No master update exists to revert for profit year {year}")
            }
            Self::FrozenSnapshotMissing { profit_year } => write!(
                f,
                "No active frozen demographic snapshot exists for profit year {profit_year}"
            ),
            Self::FrozenSnapshotMismatch {
                profit_year,
                frozen_year,
            } => write!(
                f,
                "Active frozen snapshot is for year {frozen_year}, not profit year {profit_year}"
            ),
            Self::MissingClassification { profit_code } => {
                write!(f, "Profit code {profit_code} is not defined")
            }
            Self::UnsupportedClassification {
                profit_code,
                comment_type,
            } => match comment_type {
                Some(comment) => write!(
                    f,
                    "Profit code {profit_code} with comment type {comment} \
                     cannot be written by a master update"
                ),
                None => write!(
                    f,
                    "Profit code {profit_code} without a comment type \
                     cannot be written by a master update"
                ),
            },
            Self::UnknownCommentType(id) => write!(f, "Unknown comment type: {id}"),
            Self::UnknownZeroContributionReason(id) => {
                write!(f, "Unknown zero contribution reason: {id}")
            }
            Self::InvalidProfitYear(msg) => write!(f, "Invalid profit year: {msg}"),
            Self::InvalidPersonKey(msg) => write!(f, "Invalid person key: {msg}"),
            Self::InvalidMoney { field, reason } => {
                write!(f, "Invalid amount for {field}: {reason}")
            }
            Self::InvalidPercentage { field, reason } => {
                write!(f, "Invalid percentage for {field}: {reason}")
            }
        }
    }
}

impl std::error::Error for DomainError {}
