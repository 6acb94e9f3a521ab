// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Master update orchestration.
//!
//! Carries out an `UpdatePlan` produced by the core crate. Each plan runs
//! in one transaction together with its audit event: either every step
//! lands or none does.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use num_traits::ToPrimitive;
use profit_master::{ApplyPlan, RevertPlan, TransitionResult, UpdatePlan};
use profit_master_audit::AuditEvent;
use profit_master_domain::{ProfitYear, RunStatus};
use tracing::{debug, info};

use crate::data_models::format_timestamp;
use crate::error::PersistenceError;
use crate::mutations::audit::{persist_audit_event_mysql, persist_audit_event_sqlite};
use crate::mutations::balances::{reverse_etva, synchronize_etva};
use crate::mutations::ledger::{
    bulk_insert_ledger_entries_mysql, bulk_insert_ledger_entries_sqlite,
    delete_master_update_entries_mysql, delete_master_update_entries_sqlite,
};
use crate::mutations::run_status::{
    delete_run_status_mysql, delete_run_status_sqlite, insert_run_status_mysql,
    insert_run_status_sqlite,
};
use crate::queries::run_status::{get_run_status_mysql, get_run_status_sqlite};

/// What an applied master update wrote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplyOutcome {
    /// The audit event ID.
    pub event_id: i64,
    /// The recorded run status, including the final counts.
    pub run_status: RunStatus,
}

/// What a reverted master update removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevertOutcome {
    /// The audit event ID.
    pub event_id: i64,
    /// Ledger entries deleted.
    pub transactions_removed: u64,
    /// Current-year balance rows adjusted.
    pub balance_rows_affected: u64,
    /// The run status that was deleted.
    pub reverted: RunStatus,
}

/// Result of persisting a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersistTransitionResult {
    /// A master update was applied.
    Applied(ApplyOutcome),
    /// A master update was reverted.
    Reverted(RevertOutcome),
}

fn count_of(rows: usize) -> u64 {
    rows.to_u64().unwrap_or(u64::MAX)
}

/// Persists a transition result in one transaction - `SQLite` version.
///
/// # Errors
///
/// Returns an error if any step fails; the transaction is rolled back.
pub fn persist_transition_sqlite(
    conn: &mut SqliteConnection,
    result: &TransitionResult,
) -> Result<PersistTransitionResult, PersistenceError> {
    conn.transaction::<_, PersistenceError, _>(|conn| match &result.plan {
        UpdatePlan::Apply(plan) => persist_apply_sqlite(conn, plan, &result.audit_event)
            .map(PersistTransitionResult::Applied),
        UpdatePlan::Revert(plan) => persist_revert_sqlite(conn, plan, &result.audit_event)
            .map(PersistTransitionResult::Reverted),
    })
}

/// Persists a transition result in one transaction - `MySQL` version.
///
/// # Errors
///
/// Returns an error if any step fails; the transaction is rolled back.
pub fn persist_transition_mysql(
    conn: &mut MysqlConnection,
    result: &TransitionResult,
) -> Result<PersistTransitionResult, PersistenceError> {
    conn.transaction::<_, PersistenceError, _>(|conn| match &result.plan {
        UpdatePlan::Apply(plan) => persist_apply_mysql(conn, plan, &result.audit_event)
            .map(PersistTransitionResult::Applied),
        UpdatePlan::Revert(plan) => persist_revert_mysql(conn, plan, &result.audit_event)
            .map(PersistTransitionResult::Reverted),
    })
}

/// Applies a master update - `SQLite` version.
///
/// Must be called inside a transaction.
///
/// # Errors
///
/// Returns `PersistenceError::RunAlreadyExists` if the year was updated
/// since the plan was made, `BulkWriteFailed` or `SynchronizationFailed`
/// if a step fails, or another error if recording the run fails.
pub fn persist_apply_sqlite(
    conn: &mut SqliteConnection,
    plan: &ApplyPlan,
    audit_event: &AuditEvent,
) -> Result<ApplyOutcome, PersistenceError> {
    let profit_year: u16 = plan.years.profit_year().year();
    if get_run_status_sqlite(conn, plan.years.profit_year())?.is_some() {
        return Err(PersistenceError::RunAlreadyExists(profit_year));
    }

    let created_at: String = format_timestamp(plan.ran_at)?;
    let written: usize = bulk_insert_ledger_entries_sqlite(conn, &plan.entries, &created_at)?;
    let balance_rows_affected: u64 = synchronize_etva(conn, plan.years, written)?;
    debug!(profit_year, balance_rows_affected, "Synchronized ETVA balances");

    let run_status: RunStatus = plan.run_status(balance_rows_affected, count_of(written));
    insert_run_status_sqlite(conn, &run_status)?;
    let event_id: i64 = persist_audit_event_sqlite(conn, audit_event, &created_at)?;

    info!(
        profit_year,
        event_id,
        transactions_created = written,
        balance_rows_affected,
        "Applied master update"
    );
    Ok(ApplyOutcome {
        event_id,
        run_status,
    })
}

/// Applies a master update - `MySQL` version.
///
/// Must be called inside a transaction.
///
/// # Errors
///
/// Returns `PersistenceError::RunAlreadyExists` if the year was updated
/// since the plan was made, `BulkWriteFailed` or `SynchronizationFailed`
/// if a step fails, or another error if recording the run fails.
pub fn persist_apply_mysql(
    conn: &mut MysqlConnection,
    plan: &ApplyPlan,
    audit_event: &AuditEvent,
) -> Result<ApplyOutcome, PersistenceError> {
    let profit_year: u16 = plan.years.profit_year().year();
    if get_run_status_mysql(conn, plan.years.profit_year())?.is_some() {
        return Err(PersistenceError::RunAlreadyExists(profit_year));
    }

    let created_at: String = format_timestamp(plan.ran_at)?;
    let written: usize = bulk_insert_ledger_entries_mysql(conn, &plan.entries, &created_at)?;
    let balance_rows_affected: u64 = synchronize_etva(conn, plan.years, written)?;
    debug!(profit_year, balance_rows_affected, "Synchronized ETVA balances");

    let run_status: RunStatus = plan.run_status(balance_rows_affected, count_of(written));
    insert_run_status_mysql(conn, &run_status)?;
    let event_id: i64 = persist_audit_event_mysql(conn, audit_event, &created_at)?;

    info!(
        profit_year,
        event_id,
        transactions_created = written,
        balance_rows_affected,
        "Applied master update"
    );
    Ok(ApplyOutcome {
        event_id,
        run_status,
    })
}

/// Reverts a master update - `SQLite` version.
///
/// The ETVA earnings are subtracted while the entries still exist, then the
/// entries and the run status are deleted.
///
/// Must be called inside a transaction.
///
/// # Errors
///
/// Returns `PersistenceError::NothingToRevert` if the run status is gone,
/// or another error if a step fails.
pub fn persist_revert_sqlite(
    conn: &mut SqliteConnection,
    plan: &RevertPlan,
    audit_event: &AuditEvent,
) -> Result<RevertOutcome, PersistenceError> {
    let profit_year: ProfitYear = plan.years.profit_year();
    let Some(reverted) = get_run_status_sqlite(conn, profit_year)? else {
        return Err(PersistenceError::NothingToRevert(profit_year.year()));
    };
    let ledger_rows: usize = reverted
        .effect
        .transactions_created
        .to_usize()
        .unwrap_or(usize::MAX);

    let balance_rows_affected: u64 = reverse_etva(conn, plan.years, ledger_rows)?;
    let removed: usize = delete_master_update_entries_sqlite(conn, profit_year)?;
    delete_run_status_sqlite(conn, profit_year)?;

    let created_at: String = format_timestamp(plan.reverted_at)?;
    let event_id: i64 = persist_audit_event_sqlite(conn, audit_event, &created_at)?;

    info!(
        profit_year = profit_year.year(),
        event_id,
        transactions_removed = removed,
        balance_rows_affected,
        "Reverted master update"
    );
    Ok(RevertOutcome {
        event_id,
        transactions_removed: count_of(removed),
        balance_rows_affected,
        reverted,
    })
}

/// Reverts a master update - `MySQL` version.
///
/// The ETVA earnings are subtracted while the entries still exist, then the
/// entries and the run status are deleted.
///
/// Must be called inside a transaction.
///
/// # Errors
///
/// Returns `PersistenceError::NothingToRevert` if the run status is gone,
/// or another error if a step fails.
pub fn persist_revert_mysql(
    conn: &mut MysqlConnection,
    plan: &RevertPlan,
    audit_event: &AuditEvent,
) -> Result<RevertOutcome, PersistenceError> {
    let profit_year: ProfitYear = plan.years.profit_year();
    let Some(reverted) = get_run_status_mysql(conn, profit_year)? else {
        return Err(PersistenceError::NothingToRevert(profit_year.year()));
    };
    let ledger_rows: usize = reverted
        .effect
        .transactions_created
        .to_usize()
        .unwrap_or(usize::MAX);

    let balance_rows_affected: u64 = reverse_etva(conn, plan.years, ledger_rows)?;
    let removed: usize = delete_master_update_entries_mysql(conn, profit_year)?;
    delete_run_status_mysql(conn, profit_year)?;

    let created_at: String = format_timestamp(plan.reverted_at)?;
    let event_id: i64 = persist_audit_event_mysql(conn, audit_event, &created_at)?;

    info!(
        profit_year = profit_year.year(),
        event_id,
        transactions_removed = removed,
        balance_rows_affected,
        "Reverted master update"
    );
    Ok(RevertOutcome {
        event_id,
        transactions_removed: count_of(removed),
        balance_rows_affected,
        reverted,
    })
}
