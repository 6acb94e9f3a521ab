// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod classification;
mod error;
mod ledger;
mod materialize;
mod run_status;
mod types;
mod validation;
mod year;

#[cfg(test)]
mod tests;

pub use classification::{
    CommentTypeId, MASTER_UPDATE_CLASSIFICATIONS, ProfitCodeDefinition, ProfitCodeFrequency,
    ProfitCodeId, ProfitCodeTable, ZeroContributionReason, is_etva_earnings,
    is_master_update_classification,
};
pub use error::DomainError;
pub use ledger::{CandidateRecord, LedgerEntry};
pub use materialize::{YEAR_END_MONTH, materialize_ledger_entries, years_of_service_credit};
pub use run_status::{
    BadgeAdjustment, FrozenSnapshot, RunEffect, RunParameters, RunStatus, YearUpdateState,
};
pub use types::{BadgeNumber, Money, Percentage, ProfitYear, Ssn};
pub use validation::{
    check_apply_preconditions, check_revert_preconditions, validate_freeze_year,
    validate_profit_year,
};
pub use year::YearPair;
