// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use profit_master_audit::{AuditEvent, StateSnapshot};
use profit_master_domain::{
    FrozenSnapshot, LedgerEntry, ProfitCodeTable, ProfitYear, RunEffect, RunParameters, RunStatus,
    YearPair, YearUpdateState,
};
use time::OffsetDateTime;

/// Everything a transition needs to know about the stored world.
///
/// The caller loads this for the command's profit year; planning never
/// touches storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateContext {
    /// The profit year the context was loaded for.
    pub profit_year: ProfitYear,
    /// The current wall-clock time.
    pub now: OffsetDateTime,
    /// Whether the year has already been updated.
    pub state: YearUpdateState,
    /// The active frozen demographic snapshot, if any.
    pub frozen: Option<FrozenSnapshot>,
    /// The profit code classification table.
    pub profit_codes: ProfitCodeTable,
}

impl UpdateContext {
    /// Converts the context state to a snapshot for audit purposes.
    #[must_use]
    pub fn to_snapshot(&self) -> StateSnapshot {
        StateSnapshot::new(format!(
            "profit_year={},state={}",
            self.profit_year.year(),
            self.state.as_str()
        ))
    }
}

/// A fully validated plan to apply a master update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplyPlan {
    /// The profit year and the year that receives carried balances.
    pub years: YearPair,
    /// The ledger entries to write, in candidate order.
    pub entries: Vec<LedgerEntry>,
    /// The run parameters to record.
    pub parameters: RunParameters,
    /// Distinct employees among the candidates.
    pub employees_affected: u32,
    /// Distinct beneficiaries among the candidates.
    pub beneficiaries_affected: u32,
    /// Who requested the update.
    pub ran_by: String,
    /// When the update was requested.
    pub ran_at: OffsetDateTime,
}

impl ApplyPlan {
    /// Builds the run status to record once balances have been synchronized.
    #[must_use]
    pub fn run_status(&self, balance_rows_affected: u64, transactions_created: u64) -> RunStatus {
        RunStatus {
            profit_year: self.years.profit_year(),
            parameters: self.parameters.clone(),
            effect: RunEffect {
                employees_affected: self.employees_affected,
                beneficiaries_affected: self.beneficiaries_affected,
                balance_rows_affected,
                transactions_created,
            },
            ran_by: self.ran_by.clone(),
            ran_at: self.ran_at,
        }
    }
}

/// A fully validated plan to revert a master update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevertPlan {
    /// The profit year and the year whose balances are rolled back.
    pub years: YearPair,
    /// The run status being reverted.
    pub reverted: RunStatus,
    /// Who requested the revert.
    pub reverted_by: String,
    /// When the revert was requested.
    pub reverted_at: OffsetDateTime,
}

/// The storage work a transition requires.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdatePlan {
    /// Write entries, synchronize balances, record the run.
    Apply(ApplyPlan),
    /// Roll back balances, delete entries, delete the run.
    Revert(RevertPlan),
}

/// The result of a successful transition.
///
/// Transitions are atomic: persistence either carries out the whole plan
/// and records the audit event, or changes nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionResult {
    /// The storage work to perform.
    pub plan: UpdatePlan,
    /// The audit event recording this transition.
    pub audit_event: AuditEvent,
}
