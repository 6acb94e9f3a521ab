// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::collections::HashSet;

use crate::command::Command;
use crate::error::CoreError;
use crate::state::{ApplyPlan, RevertPlan, TransitionResult, UpdateContext, UpdatePlan};
use profit_master_audit::{Action, Actor, AuditEvent, Cause, StateSnapshot};
use profit_master_domain::{
    CandidateRecord, LedgerEntry, ProfitYear, RunStatus, Ssn, YearPair, check_apply_preconditions,
    check_revert_preconditions, materialize_ledger_entries, validate_profit_year,
};

/// Applies a command to the update context, producing a plan and an audit event.
///
/// # Arguments
///
/// * `context` - The stored state for the command's profit year (immutable)
/// * `command` - The command to apply
/// * `actor` - The actor performing this action
/// * `cause` - The cause or reason for this action
///
/// # Returns
///
/// * `Ok(TransitionResult)` containing the plan and audit event
/// * `Err(CoreError)` if the command is invalid
///
/// # Errors
///
/// Returns an error if:
/// - The context was loaded for a different profit year
/// - Any precondition of the update or revert fails
/// - A candidate record cannot be materialized
pub fn apply(
    context: &UpdateContext,
    command: Command,
    actor: Actor,
    cause: Cause,
) -> Result<TransitionResult, CoreError> {
    let profit_year: ProfitYear = command.profit_year();
    validate_profit_year(profit_year.year())?;
    if context.profit_year != profit_year {
        return Err(CoreError::Internal(format!(
            "context loaded for profit year {} but command targets {profit_year}",
            context.profit_year
        )));
    }

    let action_name: &'static str = command.action_name();
    let before: StateSnapshot = context.to_snapshot();

    match command {
        Command::ApplyMasterUpdate {
            profit_year,
            parameters,
            candidates,
        } => {
            let years: YearPair = check_apply_preconditions(
                profit_year,
                context.now.year(),
                &context.state,
                context.frozen.as_ref(),
            )?;

            let entries: Vec<LedgerEntry> =
                materialize_ledger_entries(profit_year, &candidates, &context.profit_codes)?;

            let employees_affected: u32 = count_distinct(&candidates, true)?;
            let beneficiaries_affected: u32 = count_distinct(&candidates, false)?;

            let after: StateSnapshot = StateSnapshot::new(format!(
                "profit_year={},state=applied,ledger_entries={}",
                profit_year.year(),
                entries.len()
            ));
            let action: Action = Action::new(
                String::from(action_name),
                Some(format!(
                    "Applied {} ledger entries for {employees_affected} employees \
                     and {beneficiaries_affected} beneficiaries",
                    entries.len()
                )),
            );

            let plan: ApplyPlan = ApplyPlan {
                years,
                entries,
                parameters,
                employees_affected,
                beneficiaries_affected,
                ran_by: actor.id.clone(),
                ran_at: context.now,
            };
            let audit_event: AuditEvent =
                AuditEvent::new(actor, cause, action, before, after, profit_year);

            Ok(TransitionResult {
                plan: UpdatePlan::Apply(plan),
                audit_event,
            })
        }
        Command::RevertMasterUpdate { profit_year } => {
            let (years, status): (YearPair, &RunStatus) =
                check_revert_preconditions(profit_year, context.now.year(), &context.state)?;

            let after: StateSnapshot = StateSnapshot::new(format!(
                "profit_year={},state=not_run",
                profit_year.year()
            ));
            let action: Action = Action::new(
                String::from(action_name),
                Some(format!(
                    "Reverted master update run by {} ({} ledger entries)",
                    status.ran_by, status.effect.transactions_created
                )),
            );

            let plan: RevertPlan = RevertPlan {
                years,
                reverted: status.clone(),
                reverted_by: actor.id.clone(),
                reverted_at: context.now,
            };
            let audit_event: AuditEvent =
                AuditEvent::new(actor, cause, action, before, after, profit_year);

            Ok(TransitionResult {
                plan: UpdatePlan::Revert(plan),
                audit_event,
            })
        }
    }
}

/// Counts distinct people among employee or beneficiary candidates.
fn count_distinct(candidates: &[CandidateRecord], is_employee: bool) -> Result<u32, CoreError> {
    let people: HashSet<Ssn> = candidates
        .iter()
        .filter(|c| c.is_employee == is_employee)
        .map(|c| c.ssn)
        .collect();
    u32::try_from(people.len())
        .map_err(|_| CoreError::Internal(format!("{} people exceed the count range", people.len())))
}
