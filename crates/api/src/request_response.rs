// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.
//!
//! Amounts and percentages travel as decimal strings.

use profit_master_domain::{BadgeAdjustment, CandidateRecord, RunParameters, RunStatus};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// A one-off adjustment to a single badge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BadgeAdjustmentRequest {
    /// The adjusted badge number.
    pub badge: u32,
    /// Contribution adjustment.
    pub contribution: Decimal,
    /// Earnings adjustment.
    pub earnings: Decimal,
    /// Incoming forfeiture adjustment.
    pub incoming_forfeiture: Decimal,
}

impl From<&BadgeAdjustment> for BadgeAdjustmentRequest {
    fn from(adjustment: &BadgeAdjustment) -> Self {
        Self {
            badge: adjustment.badge.value(),
            contribution: adjustment.contribution.amount(),
            earnings: adjustment.earnings.amount(),
            incoming_forfeiture: adjustment.incoming_forfeiture.amount(),
        }
    }
}

/// API request to apply the master update for a profit year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfitMasterUpdateRequest {
    /// The profit year being closed.
    pub profit_year: u16,
    /// Contribution percentage.
    pub contribution_percent: Decimal,
    /// Incoming forfeiture percentage.
    pub incoming_forfeit_percent: Decimal,
    /// Earnings percentage.
    pub earnings_percent: Decimal,
    /// Secondary earnings percentage.
    pub secondary_earnings_percent: Decimal,
    /// Maximum contribution any participant may receive.
    pub max_allowed_contribution: Decimal,
    /// First badge adjustment.
    #[serde(default)]
    pub adjustment: Option<BadgeAdjustmentRequest>,
    /// Second badge adjustment.
    #[serde(default)]
    pub secondary_adjustment: Option<BadgeAdjustmentRequest>,
}

/// The parameters a run used, echoed back to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunParametersView {
    /// Contribution percentage.
    pub contribution_percent: Decimal,
    /// Incoming forfeiture percentage.
    pub incoming_forfeit_percent: Decimal,
    /// Earnings percentage.
    pub earnings_percent: Decimal,
    /// Secondary earnings percentage.
    pub secondary_earnings_percent: Decimal,
    /// Maximum contribution any participant may receive.
    pub max_allowed_contribution: Decimal,
    /// First badge adjustment.
    pub adjustment: Option<BadgeAdjustmentRequest>,
    /// Second badge adjustment.
    pub secondary_adjustment: Option<BadgeAdjustmentRequest>,
}

impl From<&RunParameters> for RunParametersView {
    fn from(parameters: &RunParameters) -> Self {
        Self {
            contribution_percent: parameters.contribution_percent.value(),
            incoming_forfeit_percent: parameters.incoming_forfeit_percent.value(),
            earnings_percent: parameters.earnings_percent.value(),
            secondary_earnings_percent: parameters.secondary_earnings_percent.value(),
            max_allowed_contribution: parameters.max_allowed_contribution.amount(),
            adjustment: parameters.adjustment.as_ref().map(BadgeAdjustmentRequest::from),
            secondary_adjustment: parameters
                .secondary_adjustment
                .as_ref()
                .map(BadgeAdjustmentRequest::from),
        }
    }
}

/// API response for a successful master update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfitMasterUpdateResponse {
    /// The audit event recording the update.
    pub event_id: i64,
    /// The updated profit year.
    pub profit_year: u16,
    /// Distinct employees that received ledger entries.
    pub employees_affected: u32,
    /// Distinct beneficiaries that received ledger entries.
    pub beneficiaries_affected: u32,
    /// Running balance rows touched by synchronization.
    pub balance_rows_affected: u64,
    /// Ledger entries written.
    pub transactions_created: u64,
    /// When the update ran.
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
    /// Who ran the update.
    pub updated_by: String,
    /// The parameters the update used.
    pub parameters: RunParametersView,
}

/// API request to revert the master update of a profit year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfitMasterRevertRequest {
    /// The profit year to revert.
    pub profit_year: u16,
}

/// API response for a successful revert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfitMasterRevertResponse {
    /// The audit event recording the revert.
    pub event_id: i64,
    /// The reverted profit year.
    pub profit_year: u16,
    /// Employees affected by the reverted run.
    pub employees_affected: u32,
    /// Beneficiaries affected by the reverted run.
    pub beneficiaries_affected: u32,
    /// Ledger entries deleted.
    pub transactions_removed: u64,
    /// Current-year balance rows adjusted.
    pub balance_rows_affected: u64,
    /// When the revert ran.
    #[serde(with = "time::serde::rfc3339")]
    pub reverted_at: OffsetDateTime,
    /// Who ran the revert.
    pub reverted_by: String,
}

/// API response describing the recorded run of a profit year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfitMasterStatusResponse {
    /// The profit year.
    pub profit_year: u16,
    /// Distinct employees that received ledger entries.
    pub employees_affected: u32,
    /// Distinct beneficiaries that received ledger entries.
    pub beneficiaries_affected: u32,
    /// Running balance rows touched by synchronization.
    pub balance_rows_affected: u64,
    /// Ledger entries written.
    pub transactions_created: u64,
    /// When the update ran.
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
    /// Who ran the update.
    pub updated_by: String,
    /// The parameters the update used.
    pub parameters: RunParametersView,
}

impl From<&RunStatus> for ProfitMasterStatusResponse {
    fn from(status: &RunStatus) -> Self {
        Self {
            profit_year: status.profit_year.year(),
            employees_affected: status.effect.employees_affected,
            beneficiaries_affected: status.effect.beneficiaries_affected,
            balance_rows_affected: status.effect.balance_rows_affected,
            transactions_created: status.effect.transactions_created,
            updated_at: status.ran_at,
            updated_by: status.ran_by.clone(),
            parameters: RunParametersView::from(&status.parameters),
        }
    }
}

/// API request to freeze demographics for a profit year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FreezeRequest {
    /// The profit year to freeze.
    pub profit_year: u16,
    /// The point in time the frozen demographics reflect.
    #[serde(with = "time::serde::rfc3339")]
    pub as_of: OffsetDateTime,
}

/// API response for a successful freeze.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FreezeResponse {
    /// The frozen state identifier.
    pub frozen_state_id: i64,
    /// The frozen profit year.
    pub profit_year: u16,
    /// The point in time the frozen demographics reflect.
    #[serde(with = "time::serde::rfc3339")]
    pub as_of: OffsetDateTime,
    /// Who froze the demographics.
    pub frozen_by: String,
    /// When the freeze was recorded.
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

/// API request to stage the profit share edit results of a profit year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageProfitShareEditRequest {
    /// The profit year the candidates were computed for.
    pub profit_year: u16,
    /// The computed candidate records.
    pub candidates: Vec<CandidateRecord>,
}

/// API response for a staged profit share edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageProfitShareEditResponse {
    /// The profit year.
    pub profit_year: u16,
    /// The number of staged candidate records.
    pub staged: usize,
}

/// A single entry of the audit timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditEventView {
    /// The audit event identifier.
    pub event_id: Option<i64>,
    /// Who performed the action.
    pub actor_id: String,
    /// The actor's role.
    pub actor_type: String,
    /// The action name.
    pub action: String,
    /// Action details.
    pub details: Option<String>,
    /// Why the action was performed.
    pub cause: String,
    /// State before the action.
    pub before: String,
    /// State after the action.
    pub after: String,
}

/// API response listing the audit timeline of a profit year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTimelineResponse {
    /// The profit year.
    pub profit_year: u16,
    /// Events, oldest first.
    pub events: Vec<AuditEventView>,
}
