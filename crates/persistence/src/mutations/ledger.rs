// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Ledger entry mutations.
//!
//! Entries are written only by an applied master update and removed only by
//! its revert, which deletes exactly the classifications the update writes.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use profit_master_domain::{CommentTypeId, LedgerEntry, ProfitCodeId, ProfitYear};
use tracing::{debug, info};

use crate::data_models::NewLedgerEntry;
use crate::diesel_schema::ledger_entries;
use crate::error::PersistenceError;

/// Rows per multi-row `INSERT` statement.
///
/// Each row binds 14 parameters; 2000 rows stays well below the `SQLite`
/// limit of 32766 host parameters and the `MySQL` limit of 65535.
pub const LEDGER_INSERT_CHUNK_ROWS: usize = 2000;

backend_fn! {
/// Inserts ledger entries with multi-row `INSERT` statements.
///
/// Must run inside the caller's transaction: a failure in any chunk leaves
/// nothing behind once the transaction rolls back.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `entries` - The entries to insert, in order
/// * `created_at` - The RFC 3339 timestamp recorded on every row
///
/// # Returns
///
/// The number of rows written.
///
/// # Errors
///
/// Returns `PersistenceError::BulkWriteFailed` if any statement fails.
pub fn bulk_insert_ledger_entries(
    conn: &mut _,
    entries: &[LedgerEntry],
    created_at: &str,
) -> Result<usize, PersistenceError> {
    let Some(first) = entries.first() else {
        return Ok(0);
    };
    let profit_year: u16 = first.profit_year.year();
    let bulk_error = |reason: String| PersistenceError::BulkWriteFailed {
        profit_year,
        rows: entries.len(),
        reason,
    };

    let rows: Vec<NewLedgerEntry> = entries
        .iter()
        .map(|entry| NewLedgerEntry::from_entry(entry, created_at))
        .collect::<Result<_, _>>()
        .map_err(|e| bulk_error(e.to_string()))?;

    let mut written: usize = 0;
    for chunk in rows.chunks(LEDGER_INSERT_CHUNK_ROWS) {
        written += diesel::insert_into(ledger_entries::table)
            .values(chunk)
            .execute(conn)
            .map_err(|e| bulk_error(e.to_string()))?;
        debug!(profit_year, written, "Inserted ledger entry chunk");
    }

    info!(profit_year, rows = written, "Bulk inserted ledger entries");
    Ok(written)
}
}

backend_fn! {
/// Deletes the ledger entries a master update writes for a profit year.
///
/// Matches contributions with no comment, `V-Only`, or `>64 & >5 100%`,
/// and 100% vested earnings with the `100% Earnings` comment. Entries of
/// any other classification in the year are untouched.
///
/// # Errors
///
/// Returns an error if the delete fails.
pub fn delete_master_update_entries(
    conn: &mut _,
    profit_year: ProfitYear,
) -> Result<usize, PersistenceError> {
    let year: i32 = i32::from(profit_year.year());
    let contributions: i32 = i32::from(ProfitCodeId::INCOMING_CONTRIBUTIONS.value());
    let vested_earnings: i32 =
        i32::from(ProfitCodeId::INCOMING_100_PERCENT_VESTED_EARNINGS.value());
    let contribution_comments: [i32; 2] = [
        i32::from(CommentTypeId::V_ONLY.value()),
        i32::from(CommentTypeId::OVER_64_AND_OVER_5_YEARS.value()),
    ];
    let earnings_comment: i32 = i32::from(CommentTypeId::ONE_HUNDRED_PERCENT_EARNINGS.value());

    let contribution_filter = ledger_entries::profit_code_id.eq(contributions).and(
        ledger_entries::comment_type_id.is_null().or(ledger_entries::comment_type_id
            .assume_not_null()
            .eq_any(contribution_comments)),
    );
    let earnings_filter = ledger_entries::profit_code_id
        .eq(vested_earnings)
        .and(ledger_entries::comment_type_id.assume_not_null().eq(earnings_comment));

    let deleted: usize = diesel::delete(
        ledger_entries::table
            .filter(ledger_entries::profit_year.eq(year))
            .filter(contribution_filter.or(earnings_filter)),
    )
    .execute(conn)?;

    info!(profit_year = year, deleted, "Deleted master update ledger entries");
    Ok(deleted)
}
}
