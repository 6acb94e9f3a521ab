// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Profit code lookup table queries.

use std::str::FromStr;

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use num_traits::ToPrimitive;
use profit_master_domain::{
    ProfitCodeDefinition, ProfitCodeFrequency, ProfitCodeId, ProfitCodeTable,
};

use crate::diesel_schema::profit_codes;
use crate::error::PersistenceError;

backend_fn! {
/// Loads the profit code classification table.
///
/// # Errors
///
/// Returns an error if the query fails or a stored code is invalid.
pub fn get_profit_code_table(conn: &mut _) -> Result<ProfitCodeTable, PersistenceError> {
    let rows: Vec<(i32, String, String)> = profit_codes::table
        .order(profit_codes::profit_code_id.asc())
        .select((
            profit_codes::profit_code_id,
            profit_codes::definition,
            profit_codes::frequency,
        ))
        .load::<(i32, String, String)>(conn)?;

    let definitions: Vec<ProfitCodeDefinition> = rows
        .into_iter()
        .map(|(id, definition, frequency)| {
            let id: u8 = id.to_u8().ok_or_else(|| {
                PersistenceError::ReconstructionError(format!("profit code {id}"))
            })?;
            let frequency: ProfitCodeFrequency = ProfitCodeFrequency::from_str(&frequency)
                .map_err(PersistenceError::ReconstructionError)?;
            Ok(ProfitCodeDefinition {
                id: ProfitCodeId::new(id),
                definition,
                frequency,
            })
        })
        .collect::<Result<_, PersistenceError>>()?;

    Ok(ProfitCodeTable::new(definitions))
}
}
