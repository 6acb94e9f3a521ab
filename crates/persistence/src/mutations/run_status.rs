// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Run status mutations.

use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use diesel::{MysqlConnection, SqliteConnection};
use profit_master_domain::{ProfitYear, RunStatus};
use tracing::info;

use crate::backend::PersistenceBackend;
use crate::data_models::NewRunStatus;
use crate::diesel_schema::run_statuses;
use crate::error::PersistenceError;

backend_fn! {
/// Records that a profit year has been updated.
///
/// # Returns
///
/// The run status ID assigned by the database.
///
/// # Errors
///
/// Returns `PersistenceError::RunAlreadyExists` if the year already has a
/// run status, or another error if the insert fails.
pub fn insert_run_status(conn: &mut _, status: &RunStatus) -> Result<i64, PersistenceError> {
    let year: u16 = status.profit_year.year();
    let row: NewRunStatus = NewRunStatus::from_status(status)?;

    diesel::insert_into(run_statuses::table)
        .values(&row)
        .execute(conn)
        .map_err(|e| match e {
            DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                PersistenceError::RunAlreadyExists(year)
            }
            other => PersistenceError::from(other),
        })?;

    let run_status_id: i64 = conn.get_last_insert_rowid()?;
    info!(profit_year = year, run_status_id, "Recorded run status");
    Ok(run_status_id)
}
}

backend_fn! {
/// Deletes the run status of a profit year.
///
/// # Errors
///
/// Returns `PersistenceError::NothingToRevert` if the year has no run
/// status, or another error if the delete fails.
pub fn delete_run_status(conn: &mut _, profit_year: ProfitYear) -> Result<(), PersistenceError> {
    let deleted: usize = diesel::delete(
        run_statuses::table.filter(run_statuses::profit_year.eq(i32::from(profit_year.year()))),
    )
    .execute(conn)?;

    if deleted == 0 {
        return Err(PersistenceError::NothingToRevert(profit_year.year()));
    }

    info!(profit_year = profit_year.year(), "Deleted run status");
    Ok(())
}
}
