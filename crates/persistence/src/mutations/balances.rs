// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Running balance mutations.
//!
//! The master update never creates balance rows; it only adjusts the ETVA
//! of rows loaded beforehand by the payroll import.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use profit_master_domain::{Money, ProfitYear, Ssn, YearPair};
use tracing::{debug, error};

use crate::backend::{EtvaDirection, PersistenceBackend};
use crate::diesel_schema::running_balances;
use crate::error::PersistenceError;

/// Step name reported when the year-rollover copy fails.
pub const CARRY_STEP: &str = "carry_etva_to_profit_year";

backend_fn! {
/// Loads a person's ETVA balance for a year.
///
/// # Errors
///
/// Returns an error if the amount has fractional cents or the insert fails
/// (for example when the row already exists).
pub fn insert_running_balance(
    conn: &mut _,
    ssn: Ssn,
    profit_year: ProfitYear,
    etva: Money,
) -> Result<(), PersistenceError> {
    diesel::insert_into(running_balances::table)
        .values((
            running_balances::ssn.eq(ssn.value()),
            running_balances::profit_year.eq(i32::from(profit_year.year())),
            running_balances::etva_cents.eq(etva.cents()?),
        ))
        .execute(conn)?;

    debug!(
        ssn = ssn.value(),
        profit_year = profit_year.year(),
        "Loaded running balance"
    );
    Ok(())
}
}

fn sync_error(
    years: YearPair,
    ledger_rows: usize,
    step: &str,
    err: &PersistenceError,
) -> PersistenceError {
    error!(
        profit_year = years.profit_year().year(),
        ledger_rows,
        step,
        error = %err,
        "ETVA balance synchronization failed"
    );
    PersistenceError::SynchronizationFailed {
        profit_year: years.profit_year().year(),
        ledger_rows,
        step: step.to_string(),
        reason: err.to_string(),
    }
}

/// Propagates a profit year's ETVA earnings into both years' balances.
///
/// Adds each person's summed earnings to their current-year ETVA, then
/// copies the result onto their profit-year row.
///
/// # Returns
///
/// The total balance rows touched by both steps.
///
/// # Errors
///
/// Returns `PersistenceError::SynchronizationFailed` naming the failed step.
pub fn synchronize_etva<C: PersistenceBackend>(
    conn: &mut C,
    years: YearPair,
    ledger_rows: usize,
) -> Result<u64, PersistenceError> {
    let direction: EtvaDirection = EtvaDirection::Add;
    let bumped: usize = conn
        .adjust_current_year_etva(years, direction)
        .map_err(|e| sync_error(years, ledger_rows, direction.step_name(), &e))?;
    let carried: usize = conn
        .carry_etva_to_profit_year(years)
        .map_err(|e| sync_error(years, ledger_rows, CARRY_STEP, &e))?;

    Ok(u64::try_from(bumped + carried).unwrap_or(u64::MAX))
}

/// Removes a profit year's ETVA earnings from the current-year balances.
///
/// Must run before the ledger entries are deleted. The profit-year ETVA
/// copied during the update is left as it is.
///
/// # Errors
///
/// Returns `PersistenceError::SynchronizationFailed` if the update fails.
pub fn reverse_etva<C: PersistenceBackend>(
    conn: &mut C,
    years: YearPair,
    ledger_rows: usize,
) -> Result<u64, PersistenceError> {
    let direction: EtvaDirection = EtvaDirection::Subtract;
    let adjusted: usize = conn
        .adjust_current_year_etva(years, direction)
        .map_err(|e| sync_error(years, ledger_rows, direction.step_name(), &e))?;

    Ok(u64::try_from(adjusted).unwrap_or(u64::MAX))
}
