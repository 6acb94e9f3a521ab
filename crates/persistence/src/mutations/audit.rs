// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Audit event persistence.
//!
//! This module contains backend-agnostic mutations for persisting audit
//! events. Inserts use Diesel DSL, with the last-insert-id lookup abstracted
//! via the `PersistenceBackend` trait.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use profit_master_audit::AuditEvent;

use crate::backend::PersistenceBackend;
use crate::data_models::{ActionData, ActorData, CauseData, NewAuditEvent, StateSnapshotData};
use crate::diesel_schema;
use crate::error::PersistenceError;

backend_fn! {
/// Persists an audit event.
///
/// # Arguments
///
/// * `conn` - The active database connection
/// * `event` - The audit event to persist
/// * `created_at` - The RFC 3339 timestamp of the event
///
/// # Returns
///
/// The event ID assigned by the database.
///
/// # Errors
///
/// Returns an error if persistence or serialization fails.
pub fn persist_audit_event(
    conn: &mut _,
    event: &AuditEvent,
    created_at: &str,
) -> Result<i64, PersistenceError> {
    let actor_data: ActorData = ActorData {
        id: event.actor.id.clone(),
        actor_type: event.actor.actor_type.clone(),
    };

    let cause_data: CauseData = CauseData {
        id: event.cause.id.clone(),
        description: event.cause.description.clone(),
    };

    let action_data: ActionData = ActionData {
        name: event.action.name.clone(),
        details: event.action.details.clone(),
    };

    let before_data: StateSnapshotData = StateSnapshotData {
        data: event.before.data.clone(),
    };

    let after_data: StateSnapshotData = StateSnapshotData {
        data: event.after.data.clone(),
    };

    let row: NewAuditEvent = NewAuditEvent {
        profit_year: i32::from(event.profit_year.year()),
        actor_json: serde_json::to_string(&actor_data)?,
        cause_json: serde_json::to_string(&cause_data)?,
        action_json: serde_json::to_string(&action_data)?,
        before_snapshot_json: serde_json::to_string(&before_data)?,
        after_snapshot_json: serde_json::to_string(&after_data)?,
        created_at: created_at.to_string(),
    };

    diesel::insert_into(diesel_schema::audit_events::table)
        .values(&row)
        .execute(conn)?;

    let event_id: i64 = conn.get_last_insert_rowid()?;

    Ok(event_id)
}
}
