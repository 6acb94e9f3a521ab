// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Frozen demographic snapshot queries.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use profit_master_domain::FrozenSnapshot;

use crate::data_models::{parse_timestamp, profit_year_from_column};
use crate::diesel_schema::frozen_states;
use crate::error::PersistenceError;

#[derive(Queryable, Selectable)]
#[diesel(table_name = frozen_states)]
struct FrozenStateRow {
    profit_year: i32,
    is_active: i32,
    frozen_by: String,
    as_of: String,
    created_at: String,
}

backend_fn! {
/// Retrieves the active frozen snapshot, if any.
///
/// Should more than one row be marked active, the most recently
/// recorded one wins.
///
/// # Errors
///
/// Returns an error if the query fails or the stored row is invalid.
pub fn get_active_frozen_snapshot(
    conn: &mut _,
) -> Result<Option<FrozenSnapshot>, PersistenceError> {
    let row: Option<FrozenStateRow> = frozen_states::table
        .filter(frozen_states::is_active.eq(1))
        .order(frozen_states::frozen_state_id.desc())
        .select(FrozenStateRow::as_select())
        .first::<FrozenStateRow>(conn)
        .optional()?;

    row.map(|row| {
        Ok(FrozenSnapshot {
            profit_year: profit_year_from_column(row.profit_year)?,
            is_active: row.is_active != 0,
            frozen_by: row.frozen_by,
            as_of: parse_timestamp(&row.as_of)?,
            created_at: parse_timestamp(&row.created_at)?,
        })
    })
    .transpose()
}
}
