// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::run_status::{FrozenSnapshot, RunStatus, YearUpdateState};
use crate::types::ProfitYear;
use crate::year::YearPair;

/// Validates that a profit year is a reasonable calendar year.
///
/// # Errors
///
/// Returns an error if the year is not between 1900 and 2200.
pub fn validate_profit_year(year: u16) -> Result<(), DomainError> {
    if !(1900..=2200).contains(&year) {
        return Err(DomainError::InvalidProfitYear(format!(
            "Profit year must be between 1900 and 2200, got {year}"
        )));
    }
    Ok(())
}

/// Checks everything that must hold before a master update may run.
///
/// Checks run in a fixed order: year lock, run status, frozen snapshot.
///
/// # Arguments
///
/// * `profit_year` - The year to update
/// * `wall_clock_year` - The current calendar year
/// * `state` - The stored update state for `profit_year`
/// * `frozen` - The active frozen demographic snapshot, if any
///
/// # Errors
///
/// Returns an error if:
/// - `profit_year` is not the year before `wall_clock_year`
/// - An update has already been applied for `profit_year`
/// - No frozen snapshot is active
/// - The active snapshot is for a different year
pub fn check_apply_preconditions(
    profit_year: ProfitYear,
    wall_clock_year: i32,
    state: &YearUpdateState,
    frozen: Option<&FrozenSnapshot>,
) -> Result<YearPair, DomainError> {
    let years: YearPair = YearPair::for_update(profit_year, wall_clock_year)?;
    state.require_not_run(profit_year)?;

    let snapshot: &FrozenSnapshot = frozen.ok_or(DomainError::FrozenSnapshotMissing {
        profit_year: profit_year.year(),
    })?;
    if snapshot.profit_year != profit_year {
        return Err(DomainError::FrozenSnapshotMismatch {
            profit_year: profit_year.year(),
            frozen_year: snapshot.profit_year.year(),
        });
    }

    Ok(years)
}

/// Checks everything that must hold before a master update may be reverted.
///
/// # Errors
///
/// Returns an error if:
/// - `profit_year` is not the year before `wall_clock_year`
/// - No update has been applied for `profit_year`
pub fn check_revert_preconditions(
    profit_year: ProfitYear,
    wall_clock_year: i32,
    state: &YearUpdateState,
) -> Result<(YearPair, &RunStatus), DomainError> {
    let years: YearPair = YearPair::for_update(profit_year, wall_clock_year)?;
    let status: &RunStatus = state.require_applied(profit_year)?;
    Ok((years, status))
}

/// Validates that demographics may be frozen for a profit year.
///
/// Only the wall-clock year and the year before it may be frozen.
///
/// # Errors
///
/// Returns an error if the year is outside that window.
pub fn validate_freeze_year(
    profit_year: ProfitYear,
    wall_clock_year: i32,
) -> Result<(), DomainError> {
    let year: i32 = i32::from(profit_year.year());
    if year != wall_clock_year && year != wall_clock_year - 1 {
        return Err(DomainError::InvalidProfitYear(format!(
            "Demographics can only be frozen for {} or {wall_clock_year}, got {year}",
            wall_clock_year - 1
        )));
    }
    Ok(())
}
