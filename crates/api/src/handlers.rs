// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API handlers for the master update.
//!
//! Each handler authorizes the actor, loads the update context, lets the
//! core plan the transition, and hands the plan to persistence. The wall
//! clock is passed in so year-lock checks are deterministic under test.

use profit_master::{Command, TransitionResult, UpdateContext, apply};
use profit_master_audit::{Actor, AuditEvent, Cause};
use profit_master_domain::{
    CandidateRecord, FrozenSnapshot, ProfitYear, RunParameters, RunStatus,
    check_apply_preconditions, validate_freeze_year, validate_profit_year,
};
use profit_master_persistence::{PersistTransitionResult, Persistence};
use time::OffsetDateTime;
use tracing::info;

use crate::auth::{AuthenticatedActor, AuthorizationService};
use crate::error::{
    ApiError, translate_core_error, translate_domain_error, translate_persistence_error,
};
use crate::parameters::parse_run_parameters;
use crate::request_response::{
    AuditEventView, AuditTimelineResponse, FreezeRequest, FreezeResponse,
    ProfitMasterRevertRequest, ProfitMasterRevertResponse, ProfitMasterStatusResponse,
    ProfitMasterUpdateRequest, ProfitMasterUpdateResponse, RunParametersView,
    StageProfitShareEditRequest, StageProfitShareEditResponse,
};
use crate::source::{ProfitShareEditSource, StagedProfitShareEdit};

fn checked_profit_year(year: u16) -> Result<ProfitYear, ApiError> {
    validate_profit_year(year).map_err(translate_domain_error)?;
    Ok(ProfitYear::new(year))
}

/// Loads everything the core needs to plan a transition for a year.
fn load_update_context(
    persistence: &mut Persistence,
    profit_year: ProfitYear,
    now: OffsetDateTime,
) -> Result<UpdateContext, ApiError> {
    Ok(UpdateContext {
        profit_year,
        now,
        state: persistence
            .get_year_update_state(profit_year)
            .map_err(translate_persistence_error)?,
        frozen: persistence
            .get_active_frozen_snapshot()
            .map_err(translate_persistence_error)?,
        profit_codes: persistence
            .get_profit_code_table()
            .map_err(translate_persistence_error)?,
    })
}

fn unexpected_outcome(operation: &str) -> ApiError {
    ApiError::Internal {
        message: format!("Persistence returned the wrong outcome for {operation}"),
    }
}

/// Applies the master update for a profit year.
///
/// # Arguments
///
/// * `persistence` - The persistence layer
/// * `source` - Supplies the profit share edit candidates
/// * `request` - The update request
/// * `authenticated_actor` - The authenticated actor performing this action
/// * `cause` - The cause or reason for this action
/// * `now` - The current wall-clock time
///
/// # Errors
///
/// Returns an error if:
/// - The actor is an Auditor
/// - A parameter is invalid
/// - The year is not the year before `now`, has already been updated, or
///   has no matching frozen snapshot
/// - Nothing has been staged for the year
/// - A candidate cannot be materialized
/// - The bulk write or balance synchronization fails
pub fn apply_master_update<S: ProfitShareEditSource + ?Sized>(
    persistence: &mut Persistence,
    source: &S,
    request: &ProfitMasterUpdateRequest,
    authenticated_actor: &AuthenticatedActor,
    cause: Cause,
    now: OffsetDateTime,
) -> Result<ProfitMasterUpdateResponse, ApiError> {
    AuthorizationService::authorize_apply_master_update(authenticated_actor)?;

    let profit_year: ProfitYear = checked_profit_year(request.profit_year)?;
    let parameters: RunParameters = parse_run_parameters(request)?;
    let context: UpdateContext = load_update_context(persistence, profit_year, now)?;
    // Guard runs before the staging lookup.
    check_apply_preconditions(
        profit_year,
        now.year(),
        &context.state,
        context.frozen.as_ref(),
    )
    .map_err(translate_domain_error)?;
    let candidates: Vec<CandidateRecord> = source.candidates(profit_year, &parameters)?;

    let actor: Actor = authenticated_actor.to_audit_actor();
    let command: Command = Command::ApplyMasterUpdate {
        profit_year,
        parameters,
        candidates,
    };
    let transition: TransitionResult =
        apply(&context, command, actor, cause).map_err(translate_core_error)?;

    let PersistTransitionResult::Applied(outcome) = persistence
        .persist_transition(&transition)
        .map_err(translate_persistence_error)?
    else {
        return Err(unexpected_outcome("apply_master_update"));
    };

    let status: RunStatus = outcome.run_status;
    info!(
        profit_year = request.profit_year,
        event_id = outcome.event_id,
        transactions_created = status.effect.transactions_created,
        actor = %authenticated_actor.id,
        "Master update applied"
    );

    Ok(ProfitMasterUpdateResponse {
        event_id: outcome.event_id,
        profit_year: status.profit_year.year(),
        employees_affected: status.effect.employees_affected,
        beneficiaries_affected: status.effect.beneficiaries_affected,
        balance_rows_affected: status.effect.balance_rows_affected,
        transactions_created: status.effect.transactions_created,
        updated_at: status.ran_at,
        updated_by: status.ran_by,
        parameters: RunParametersView::from(&status.parameters),
    })
}

/// Reverts the master update of a profit year.
///
/// # Errors
///
/// Returns an error if:
/// - The actor is an Auditor
/// - The year is not the year before `now`
/// - No update has been applied for the year
/// - A storage step fails
pub fn revert_master_update(
    persistence: &mut Persistence,
    request: &ProfitMasterRevertRequest,
    authenticated_actor: &AuthenticatedActor,
    cause: Cause,
    now: OffsetDateTime,
) -> Result<ProfitMasterRevertResponse, ApiError> {
    AuthorizationService::authorize_revert_master_update(authenticated_actor)?;

    let profit_year: ProfitYear = checked_profit_year(request.profit_year)?;
    let context: UpdateContext = load_update_context(persistence, profit_year, now)?;

    let actor: Actor = authenticated_actor.to_audit_actor();
    let command: Command = Command::RevertMasterUpdate { profit_year };
    let transition: TransitionResult =
        apply(&context, command, actor, cause).map_err(translate_core_error)?;

    let PersistTransitionResult::Reverted(outcome) = persistence
        .persist_transition(&transition)
        .map_err(translate_persistence_error)?
    else {
        return Err(unexpected_outcome("revert_master_update"));
    };

    info!(
        profit_year = request.profit_year,
        event_id = outcome.event_id,
        transactions_removed = outcome.transactions_removed,
        actor = %authenticated_actor.id,
        "Master update reverted"
    );

    Ok(ProfitMasterRevertResponse {
        event_id: outcome.event_id,
        profit_year: request.profit_year,
        employees_affected: outcome.reverted.effect.employees_affected,
        beneficiaries_affected: outcome.reverted.effect.beneficiaries_affected,
        transactions_removed: outcome.transactions_removed,
        balance_rows_affected: outcome.balance_rows_affected,
        reverted_at: now,
        reverted_by: authenticated_actor.id.clone(),
    })
}

/// Retrieves the recorded run of a profit year.
///
/// # Errors
///
/// Returns `ApiError::ResourceNotFound` if the year has not been updated.
pub fn get_master_update_status(
    persistence: &mut Persistence,
    profit_year: u16,
    authenticated_actor: &AuthenticatedActor,
) -> Result<ProfitMasterStatusResponse, ApiError> {
    AuthorizationService::authorize_read(authenticated_actor)?;

    let year: ProfitYear = checked_profit_year(profit_year)?;
    let status: RunStatus = persistence
        .get_run_status(year)
        .map_err(translate_persistence_error)?
        .ok_or_else(|| ApiError::ResourceNotFound {
            resource_type: String::from("Master update"),
            message: format!("No master update has run for profit year {profit_year}"),
        })?;

    Ok(ProfitMasterStatusResponse::from(&status))
}

/// Freezes demographics for a profit year.
///
/// Any earlier freeze is deactivated.
///
/// # Errors
///
/// Returns an error if:
/// - The actor is an Auditor
/// - The year is neither the wall-clock year nor the year before it
/// - Persistence fails
pub fn freeze_profit_year(
    persistence: &mut Persistence,
    request: &FreezeRequest,
    authenticated_actor: &AuthenticatedActor,
    now: OffsetDateTime,
) -> Result<FreezeResponse, ApiError> {
    AuthorizationService::authorize_freeze(authenticated_actor)?;

    let profit_year: ProfitYear = checked_profit_year(request.profit_year)?;
    validate_freeze_year(profit_year, now.year()).map_err(translate_domain_error)?;

    let snapshot: FrozenSnapshot = FrozenSnapshot {
        profit_year,
        is_active: true,
        frozen_by: authenticated_actor.id.clone(),
        as_of: request.as_of,
        created_at: now,
    };
    let frozen_state_id: i64 = persistence
        .freeze_profit_year(&snapshot)
        .map_err(translate_persistence_error)?;

    Ok(FreezeResponse {
        frozen_state_id,
        profit_year: request.profit_year,
        as_of: snapshot.as_of,
        frozen_by: snapshot.frozen_by,
        created_at: snapshot.created_at,
    })
}

/// Stages the profit share edit results of a profit year.
///
/// # Errors
///
/// Returns an error if the actor is an Auditor or the year is invalid.
pub fn stage_profit_share_edit(
    staging: &mut StagedProfitShareEdit,
    request: StageProfitShareEditRequest,
    authenticated_actor: &AuthenticatedActor,
) -> Result<StageProfitShareEditResponse, ApiError> {
    AuthorizationService::authorize_stage_profit_share_edit(authenticated_actor)?;

    let profit_year: ProfitYear = checked_profit_year(request.profit_year)?;
    let staged: usize = staging.stage(profit_year, request.candidates);

    Ok(StageProfitShareEditResponse {
        profit_year: request.profit_year,
        staged,
    })
}

fn audit_event_view(event: AuditEvent) -> AuditEventView {
    AuditEventView {
        event_id: event.event_id,
        actor_id: event.actor.id,
        actor_type: event.actor.actor_type,
        action: event.action.name,
        details: event.action.details,
        cause: event.cause.description,
        before: event.before.data,
        after: event.after.data,
    }
}

/// Retrieves the audit timeline of a profit year, oldest first.
///
/// # Errors
///
/// Returns an error if the year is invalid or events cannot be read.
pub fn get_audit_timeline(
    persistence: &mut Persistence,
    profit_year: u16,
    authenticated_actor: &AuthenticatedActor,
) -> Result<AuditTimelineResponse, ApiError> {
    AuthorizationService::authorize_read(authenticated_actor)?;

    let year: ProfitYear = checked_profit_year(profit_year)?;
    let events: Vec<AuditEvent> = persistence
        .get_audit_timeline(year)
        .map_err(translate_persistence_error)?;

    Ok(AuditTimelineResponse {
        profit_year,
        events: events.into_iter().map(audit_event_view).collect(),
    })
}
