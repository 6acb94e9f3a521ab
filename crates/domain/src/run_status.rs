// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Per-year master update bookkeeping.
//!
//! A profit year is either not yet updated or updated exactly once. The
//! `RunStatus` row is the only evidence of the latter and is what makes
//! apply and revert idempotent.

use crate::error::DomainError;
use crate::types::{BadgeNumber, Money, Percentage, ProfitYear};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// A one-off manual correction applied to a single badge during the run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BadgeAdjustment {
    /// The adjusted employee.
    pub badge: BadgeNumber,
    /// Contribution adjustment.
    pub contribution: Money,
    /// Earnings adjustment.
    pub earnings: Money,
    /// Incoming forfeiture adjustment.
    pub incoming_forfeiture: Money,
}

/// The parameters a master update was run with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunParameters {
    /// Contribution percentage.
    pub contribution_percent: Percentage,
    /// Incoming forfeiture percentage.
    pub incoming_forfeit_percent: Percentage,
    /// Earnings percentage.
    pub earnings_percent: Percentage,
    /// Secondary earnings percentage.
    pub secondary_earnings_percent: Percentage,
    /// Maximum contribution any participant may receive.
    pub max_allowed_contribution: Money,
    /// First badge adjustment.
    pub adjustment: Option<BadgeAdjustment>,
    /// Second badge adjustment.
    pub secondary_adjustment: Option<BadgeAdjustment>,
}

/// Aggregate counts produced by a master update.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunEffect {
    /// Distinct employees that received ledger entries.
    pub employees_affected: u32,
    /// Distinct beneficiaries that received ledger entries.
    pub beneficiaries_affected: u32,
    /// Running balance rows touched by both synchronization steps.
    pub balance_rows_affected: u64,
    /// Ledger entries written.
    pub transactions_created: u64,
}

/// The record that a profit year has been updated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunStatus {
    /// The updated profit year.
    pub profit_year: ProfitYear,
    /// The parameters the run used.
    pub parameters: RunParameters,
    /// What the run changed.
    pub effect: RunEffect,
    /// Who ran the update.
    pub ran_by: String,
    /// When the update ran.
    #[serde(with = "time::serde::rfc3339")]
    pub ran_at: OffsetDateTime,
}

/// Whether a master update has been applied for a profit year.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum YearUpdateState {
    /// No update has been applied.
    NotRun,
    /// An update has been applied and is recorded by the status.
    Applied(Box<RunStatus>),
}

impl YearUpdateState {
    /// Builds the state from an optional stored run status.
    #[must_use]
    pub fn from_run_status(status: Option<RunStatus>) -> Self {
        status.map_or(Self::NotRun, |s| Self::Applied(Box::new(s)))
    }

    /// Returns the string representation of the state.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::NotRun => "not_run",
            Self::Applied(_) => "applied",
        }
    }

    /// Returns the run status if one has been recorded.
    #[must_use]
    pub fn run_status(&self) -> Option<&RunStatus> {
        match self {
            Self::NotRun => None,
            Self::Applied(status) => Some(status),
        }
    }

    /// Requires that no update has been applied.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::RunAlreadyExists` if an update has been applied.
    pub const fn require_not_run(&self, profit_year: ProfitYear) -> Result<(), DomainError> {
        match self {
            Self::NotRun => Ok(()),
            Self::Applied(_) => Err(DomainError::RunAlreadyExists(profit_year.year())),
        }
    }

    /// Requires that an update has been applied.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::NothingToRevert` if no update has been applied.
    pub fn require_applied(&self, profit_year: ProfitYear) -> Result<&RunStatus, DomainError> {
        self.run_status()
            .ok_or(DomainError::NothingToRevert(profit_year.year()))
    }
}

/// A frozen point-in-time copy of demographic data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrozenSnapshot {
    /// The profit year the demographics were frozen for.
    pub profit_year: ProfitYear,
    /// Whether this is the active snapshot.
    pub is_active: bool,
    /// Who froze the demographics.
    pub frozen_by: String,
    /// The point in time the demographics reflect.
    #[serde(with = "time::serde::rfc3339")]
    pub as_of: OffsetDateTime,
    /// When the freeze was recorded.
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}
