// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::prelude::*;
use num_traits::ToPrimitive;
use profit_master_domain::{
    BadgeAdjustment, FrozenSnapshot, LedgerEntry, Money, ProfitYear, RunStatus,
};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

use crate::diesel_schema::{audit_events, frozen_states, ledger_entries, run_statuses};
use crate::error::PersistenceError;

/// Serializable representation of an Actor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActorData {
    pub id: String,
    pub actor_type: String,
}

/// Serializable representation of a Cause.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CauseData {
    pub id: String,
    pub description: String,
}

/// Serializable representation of an Action.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionData {
    pub name: String,
    pub details: Option<String>,
}

/// Serializable representation of a `StateSnapshot`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StateSnapshotData {
    pub data: String,
}

/// Formats a timestamp for storage.
pub fn format_timestamp(timestamp: OffsetDateTime) -> Result<String, PersistenceError> {
    timestamp
        .format(&Rfc3339)
        .map_err(|e| PersistenceError::SerializationError(e.to_string()))
}

/// Parses a stored timestamp.
pub fn parse_timestamp(value: &str) -> Result<OffsetDateTime, PersistenceError> {
    OffsetDateTime::parse(value, &Rfc3339)
        .map_err(|e| PersistenceError::ReconstructionError(format!("timestamp '{value}': {e}")))
}

/// Converts a count into a signed 64-bit column value.
pub fn count_to_i64(count: u64) -> Result<i64, PersistenceError> {
    count
        .to_i64()
        .ok_or_else(|| PersistenceError::SerializationError(format!("count {count} is too large")))
}

/// Converts a 64-bit column value back into a count.
pub fn i64_to_count(value: i64) -> Result<u64, PersistenceError> {
    value
        .to_u64()
        .ok_or_else(|| PersistenceError::ReconstructionError(format!("negative count {value}")))
}

/// Insertable ledger row.
///
/// The identity column is assigned by the database and deliberately absent.
/// `None` values are bound as `NULL` so multi-row inserts stay a single
/// statement on `SQLite`.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = ledger_entries)]
#[diesel(treat_none_as_default_value = false)]
pub struct NewLedgerEntry {
    pub ssn: i32,
    pub profit_year: i32,
    pub profit_year_iteration: i32,
    pub profit_code_id: i32,
    pub contribution_cents: i64,
    pub earnings_cents: i64,
    pub forfeiture_cents: i64,
    pub zero_contribution_reason_id: Option<i32>,
    pub comment_type_id: Option<i32>,
    pub remark: Option<String>,
    pub years_of_service_credit: i32,
    pub month_to_date: i32,
    pub year_to_date: i32,
    pub created_at: String,
}

impl NewLedgerEntry {
    /// Maps a ledger entry onto its storage columns.
    pub fn from_entry(entry: &LedgerEntry, created_at: &str) -> Result<Self, PersistenceError> {
        Ok(Self {
            ssn: entry.ssn.value(),
            profit_year: i32::from(entry.profit_year.year()),
            profit_year_iteration: i32::from(entry.profit_year_iteration),
            profit_code_id: i32::from(entry.profit_code.value()),
            contribution_cents: entry.contribution.cents()?,
            earnings_cents: entry.earnings.cents()?,
            forfeiture_cents: entry.forfeiture.cents()?,
            zero_contribution_reason_id: entry
                .zero_contribution_reason
                .map(|reason| i32::from(reason.value())),
            comment_type_id: entry.comment_type.map(|comment| i32::from(comment.value())),
            remark: entry.remark.clone(),
            years_of_service_credit: i32::from(entry.years_of_service_credit),
            month_to_date: i32::from(entry.month_to_date),
            year_to_date: i32::from(entry.year_to_date),
            created_at: created_at.to_string(),
        })
    }
}

/// Insertable run status row.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = run_statuses)]
pub struct NewRunStatus {
    pub profit_year: i32,
    pub contribution_percent: String,
    pub incoming_forfeit_percent: String,
    pub earnings_percent: String,
    pub secondary_earnings_percent: String,
    pub max_allowed_contribution_cents: i64,
    pub adjusted_badge: Option<i32>,
    pub adjust_contribution_cents: Option<i64>,
    pub adjust_earnings_cents: Option<i64>,
    pub adjust_incoming_forfeit_cents: Option<i64>,
    pub secondary_adjusted_badge: Option<i32>,
    pub secondary_adjust_contribution_cents: Option<i64>,
    pub secondary_adjust_earnings_cents: Option<i64>,
    pub secondary_adjust_incoming_forfeit_cents: Option<i64>,
    pub employees_affected: i32,
    pub beneficiaries_affected: i32,
    pub balance_rows_affected: i64,
    pub transactions_created: i64,
    pub ran_by: String,
    pub ran_at: String,
}

/// Storage columns for one badge adjustment.
type AdjustmentColumns = (Option<i32>, Option<i64>, Option<i64>, Option<i64>);

fn adjustment_columns(
    adjustment: Option<&BadgeAdjustment>,
) -> Result<AdjustmentColumns, PersistenceError> {
    let Some(adjustment) = adjustment else {
        return Ok((None, None, None, None));
    };
    let badge: i32 = adjustment.badge.value().to_i32().ok_or_else(|| {
        PersistenceError::SerializationError(format!(
            "badge {} is too large",
            adjustment.badge.value()
        ))
    })?;
    Ok((
        Some(badge),
        Some(adjustment.contribution.cents()?),
        Some(adjustment.earnings.cents()?),
        Some(adjustment.incoming_forfeiture.cents()?),
    ))
}

impl NewRunStatus {
    /// Maps a run status onto its storage columns.
    pub fn from_status(status: &RunStatus) -> Result<Self, PersistenceError> {
        let parameters = &status.parameters;
        let (
            adjusted_badge,
            adjust_contribution_cents,
            adjust_earnings_cents,
            adjust_incoming_forfeit_cents,
        ) = adjustment_columns(parameters.adjustment.as_ref())?;
        let (
            secondary_adjusted_badge,
            secondary_adjust_contribution_cents,
            secondary_adjust_earnings_cents,
            secondary_adjust_incoming_forfeit_cents,
        ) = adjustment_columns(parameters.secondary_adjustment.as_ref())?;

        Ok(Self {
            profit_year: i32::from(status.profit_year.year()),
            contribution_percent: parameters.contribution_percent.to_string(),
            incoming_forfeit_percent: parameters.incoming_forfeit_percent.to_string(),
            earnings_percent: parameters.earnings_percent.to_string(),
            secondary_earnings_percent: parameters.secondary_earnings_percent.to_string(),
            max_allowed_contribution_cents: parameters.max_allowed_contribution.cents()?,
            adjusted_badge,
            adjust_contribution_cents,
            adjust_earnings_cents,
            adjust_incoming_forfeit_cents,
            secondary_adjusted_badge,
            secondary_adjust_contribution_cents,
            secondary_adjust_earnings_cents,
            secondary_adjust_incoming_forfeit_cents,
            employees_affected: status.effect.employees_affected.to_i32().ok_or_else(|| {
                PersistenceError::SerializationError(String::from("employee count is too large"))
            })?,
            beneficiaries_affected: status.effect.beneficiaries_affected.to_i32().ok_or_else(|| {
                PersistenceError::SerializationError(String::from("beneficiary count is too large"))
            })?,
            balance_rows_affected: count_to_i64(status.effect.balance_rows_affected)?,
            transactions_created: count_to_i64(status.effect.transactions_created)?,
            ran_by: status.ran_by.clone(),
            ran_at: format_timestamp(status.ran_at)?,
        })
    }
}

/// Insertable frozen state row.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = frozen_states)]
pub struct NewFrozenState {
    pub profit_year: i32,
    pub is_active: i32,
    pub frozen_by: String,
    pub as_of: String,
    pub created_at: String,
}

impl NewFrozenState {
    /// Maps a frozen snapshot onto its storage columns.
    pub fn from_snapshot(snapshot: &FrozenSnapshot) -> Result<Self, PersistenceError> {
        Ok(Self {
            profit_year: i32::from(snapshot.profit_year.year()),
            is_active: i32::from(snapshot.is_active),
            frozen_by: snapshot.frozen_by.clone(),
            as_of: format_timestamp(snapshot.as_of)?,
            created_at: format_timestamp(snapshot.created_at)?,
        })
    }
}

/// Insertable audit event row.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = audit_events)]
pub struct NewAuditEvent {
    pub profit_year: i32,
    pub actor_json: String,
    pub cause_json: String,
    pub action_json: String,
    pub before_snapshot_json: String,
    pub after_snapshot_json: String,
    pub created_at: String,
}

/// Converts a stored year column into a `ProfitYear`.
pub fn profit_year_from_column(value: i32) -> Result<ProfitYear, PersistenceError> {
    u16::try_from(value)
        .map(ProfitYear::new)
        .map_err(|_| PersistenceError::ReconstructionError(format!("profit year {value}")))
}

/// Converts a stored cents column into `Money`.
#[must_use]
pub fn money_from_column(cents: i64) -> Money {
    Money::from_cents(cents)
}
