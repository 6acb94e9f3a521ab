// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Run status queries.
//!
//! A profit year has at most one run status row. Its presence is what
//! marks the year as updated.

use std::str::FromStr;

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use num_traits::ToPrimitive;
use profit_master_domain::{
    BadgeAdjustment, BadgeNumber, Money, Percentage, ProfitYear, RunEffect, RunParameters,
    RunStatus,
};
use rust_decimal::Decimal;

use crate::data_models::{i64_to_count, parse_timestamp, profit_year_from_column};
use crate::diesel_schema::run_statuses;
use crate::error::PersistenceError;

/// Diesel Queryable struct for run status rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = run_statuses)]
struct RunStatusRow {
    profit_year: i32,
    contribution_percent: String,
    incoming_forfeit_percent: String,
    earnings_percent: String,
    secondary_earnings_percent: String,
    max_allowed_contribution_cents: i64,
    adjusted_badge: Option<i32>,
    adjust_contribution_cents: Option<i64>,
    adjust_earnings_cents: Option<i64>,
    adjust_incoming_forfeit_cents: Option<i64>,
    secondary_adjusted_badge: Option<i32>,
    secondary_adjust_contribution_cents: Option<i64>,
    secondary_adjust_earnings_cents: Option<i64>,
    secondary_adjust_incoming_forfeit_cents: Option<i64>,
    employees_affected: i32,
    beneficiaries_affected: i32,
    balance_rows_affected: i64,
    transactions_created: i64,
    ran_by: String,
    ran_at: String,
}

fn parse_percentage(field: &str, value: &str) -> Result<Percentage, PersistenceError> {
    let decimal: Decimal = Decimal::from_str(value).map_err(|e| {
        PersistenceError::ReconstructionError(format!("{field} '{value}': {e}"))
    })?;
    Ok(Percentage::new(field, decimal)?)
}

fn rebuild_adjustment(
    badge: Option<i32>,
    contribution: Option<i64>,
    earnings: Option<i64>,
    incoming_forfeiture: Option<i64>,
) -> Result<Option<BadgeAdjustment>, PersistenceError> {
    let Some(badge) = badge else {
        return Ok(None);
    };
    let badge: u32 = badge
        .to_u32()
        .ok_or_else(|| PersistenceError::ReconstructionError(format!("badge {badge}")))?;
    Ok(Some(BadgeAdjustment {
        badge: BadgeNumber::new(badge),
        contribution: Money::from_cents(contribution.unwrap_or(0)),
        earnings: Money::from_cents(earnings.unwrap_or(0)),
        incoming_forfeiture: Money::from_cents(incoming_forfeiture.unwrap_or(0)),
    }))
}

impl RunStatusRow {
    fn into_status(self) -> Result<RunStatus, PersistenceError> {
        let parameters: RunParameters = RunParameters {
            contribution_percent: parse_percentage(
                "contribution_percent",
                &self.contribution_percent,
            )?,
            incoming_forfeit_percent: parse_percentage(
                "incoming_forfeit_percent",
                &self.incoming_forfeit_percent,
            )?,
            earnings_percent: parse_percentage("earnings_percent", &self.earnings_percent)?,
            secondary_earnings_percent: parse_percentage(
                "secondary_earnings_percent",
                &self.secondary_earnings_percent,
            )?,
            max_allowed_contribution: Money::from_cents(self.max_allowed_contribution_cents),
            adjustment: rebuild_adjustment(
                self.adjusted_badge,
                self.adjust_contribution_cents,
                self.adjust_earnings_cents,
                self.adjust_incoming_forfeit_cents,
            )?,
            secondary_adjustment: rebuild_adjustment(
                self.secondary_adjusted_badge,
                self.secondary_adjust_contribution_cents,
                self.secondary_adjust_earnings_cents,
                self.secondary_adjust_incoming_forfeit_cents,
            )?,
        };

        let effect: RunEffect = RunEffect {
            employees_affected: self.employees_affected.to_u32().ok_or_else(|| {
                PersistenceError::ReconstructionError(String::from("negative employee count"))
            })?,
            beneficiaries_affected: self.beneficiaries_affected.to_u32().ok_or_else(|| {
                PersistenceError::ReconstructionError(String::from("negative beneficiary count"))
            })?,
            balance_rows_affected: i64_to_count(self.balance_rows_affected)?,
            transactions_created: i64_to_count(self.transactions_created)?,
        };

        Ok(RunStatus {
            profit_year: profit_year_from_column(self.profit_year)?,
            parameters,
            effect,
            ran_by: self.ran_by,
            ran_at: parse_timestamp(&self.ran_at)?,
        })
    }
}

backend_fn! {
/// Retrieves the run status recorded for a profit year, if any.
///
/// # Errors
///
/// Returns an error if the query fails or the stored row is invalid.
pub fn get_run_status(
    conn: &mut _,
    profit_year: ProfitYear,
) -> Result<Option<RunStatus>, PersistenceError> {
    let row: Option<RunStatusRow> = run_statuses::table
        .filter(run_statuses::profit_year.eq(i32::from(profit_year.year())))
        .select(RunStatusRow::as_select())
        .first::<RunStatusRow>(conn)
        .optional()?;

    row.map(RunStatusRow::into_status).transpose()
}
}
