// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Ledger entry queries.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use num_traits::ToPrimitive;
use profit_master_domain::{
    CommentTypeId, LedgerEntry, Money, ProfitCodeId, ProfitYear, Ssn, ZeroContributionReason,
};

use crate::data_models::{i64_to_count, profit_year_from_column};
use crate::diesel_schema::ledger_entries;
use crate::error::PersistenceError;

/// Diesel Queryable struct for ledger entry rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = ledger_entries)]
struct LedgerEntryRow {
    ssn: i32,
    profit_year: i32,
    profit_year_iteration: i32,
    profit_code_id: i32,
    contribution_cents: i64,
    earnings_cents: i64,
    forfeiture_cents: i64,
    zero_contribution_reason_id: Option<i32>,
    comment_type_id: Option<i32>,
    remark: Option<String>,
    years_of_service_credit: i32,
    month_to_date: i32,
    year_to_date: i32,
}

fn small_column<T>(
    name: &str,
    value: i32,
    convert: impl Fn(&i32) -> Option<T>,
) -> Result<T, PersistenceError> {
    convert(&value).ok_or_else(|| PersistenceError::ReconstructionError(format!("{name} {value}")))
}

impl LedgerEntryRow {
    fn into_entry(self) -> Result<LedgerEntry, PersistenceError> {
        let profit_code: u8 =
            small_column("profit code", self.profit_code_id, ToPrimitive::to_u8)?;
        let zero_contribution_reason: Option<ZeroContributionReason> = self
            .zero_contribution_reason_id
            .map(|id| {
                let id: u8 = small_column("zero contribution reason", id, ToPrimitive::to_u8)?;
                Ok::<_, PersistenceError>(ZeroContributionReason::new(id)?)
            })
            .transpose()?;
        let comment_type: Option<CommentTypeId> = self
            .comment_type_id
            .map(|id| {
                let id: u8 = small_column("comment type", id, ToPrimitive::to_u8)?;
                Ok::<_, PersistenceError>(CommentTypeId::new(id)?)
            })
            .transpose()?;

        Ok(LedgerEntry {
            ssn: Ssn::new(self.ssn)?,
            profit_year: profit_year_from_column(self.profit_year)?,
            profit_year_iteration: small_column(
                "profit year iteration",
                self.profit_year_iteration,
                ToPrimitive::to_u8,
            )?,
            profit_code: ProfitCodeId::new(profit_code),
            contribution: Money::from_cents(self.contribution_cents),
            earnings: Money::from_cents(self.earnings_cents),
            forfeiture: Money::from_cents(self.forfeiture_cents),
            zero_contribution_reason,
            comment_type,
            remark: self.remark,
            years_of_service_credit: small_column(
                "years of service credit",
                self.years_of_service_credit,
                ToPrimitive::to_u8,
            )?,
            month_to_date: small_column(
                "month to date",
                self.month_to_date,
                ToPrimitive::to_u8,
            )?,
            year_to_date: small_column("year to date", self.year_to_date, ToPrimitive::to_u16)?,
        })
    }
}

backend_fn! {
/// Lists the ledger entries of a profit year in insertion order.
///
/// # Errors
///
/// Returns an error if the query fails or a stored row is invalid.
pub fn list_ledger_entries(
    conn: &mut _,
    profit_year: ProfitYear,
) -> Result<Vec<LedgerEntry>, PersistenceError> {
    let rows: Vec<LedgerEntryRow> = ledger_entries::table
        .filter(ledger_entries::profit_year.eq(i32::from(profit_year.year())))
        .order(ledger_entries::ledger_entry_id.asc())
        .select(LedgerEntryRow::as_select())
        .load::<LedgerEntryRow>(conn)?;

    rows.into_iter().map(LedgerEntryRow::into_entry).collect()
}
}

backend_fn! {
/// Counts the ledger entries of a profit year.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn count_ledger_entries(
    conn: &mut _,
    profit_year: ProfitYear,
) -> Result<u64, PersistenceError> {
    let count: i64 = ledger_entries::table
        .filter(ledger_entries::profit_year.eq(i32::from(profit_year.year())))
        .count()
        .get_result(conn)?;

    i64_to_count(count)
}
}
