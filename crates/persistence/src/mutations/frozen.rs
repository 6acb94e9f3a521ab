// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Frozen demographic snapshot mutations.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use profit_master_domain::FrozenSnapshot;
use tracing::info;

use crate::backend::PersistenceBackend;
use crate::data_models::NewFrozenState;
use crate::diesel_schema::frozen_states;
use crate::error::PersistenceError;

backend_fn! {
/// Records a new active frozen snapshot, deactivating all earlier ones.
///
/// # Returns
///
/// The frozen state ID assigned by the database.
///
/// # Errors
///
/// Returns an error if either statement fails; neither takes effect.
pub fn record_frozen_snapshot(
    conn: &mut _,
    snapshot: &FrozenSnapshot,
) -> Result<i64, PersistenceError> {
    let row: NewFrozenState = NewFrozenState::from_snapshot(snapshot)?;

    conn.transaction::<_, PersistenceError, _>(|conn| {
        let deactivated: usize = diesel::update(
            frozen_states::table.filter(frozen_states::is_active.eq(1)),
        )
        .set(frozen_states::is_active.eq(0))
        .execute(conn)?;

        diesel::insert_into(frozen_states::table)
            .values(&row)
            .execute(conn)?;
        let frozen_state_id: i64 = conn.get_last_insert_rowid()?;

        info!(
            profit_year = snapshot.profit_year.year(),
            frozen_state_id,
            deactivated,
            "Froze demographics"
        );
        Ok(frozen_state_id)
    })
}
}
