// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Running balance queries.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use profit_master_domain::{Money, ProfitYear, Ssn};

use crate::data_models::money_from_column;
use crate::diesel_schema::running_balances;
use crate::error::PersistenceError;

backend_fn! {
/// Retrieves a person's ETVA balance for a year, if a balance row exists.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn get_running_balance(
    conn: &mut _,
    ssn: Ssn,
    profit_year: ProfitYear,
) -> Result<Option<Money>, PersistenceError> {
    let cents: Option<i64> = running_balances::table
        .filter(running_balances::ssn.eq(ssn.value()))
        .filter(running_balances::profit_year.eq(i32::from(profit_year.year())))
        .select(running_balances::etva_cents)
        .first::<i64>(conn)
        .optional()?;

    Ok(cents.map(money_from_column))
}
}
