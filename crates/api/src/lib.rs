// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API boundary for the Profit Master update engine.
//!
//! Translates request DTOs into core commands, enforces role-based
//! authorization, and maps domain, core and persistence errors onto the
//! `ApiError` contract. Transport concerns live in the server crate.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

mod auth;
mod error;
mod handlers;
mod parameters;
mod request_response;
mod source;

#[cfg(test)]
mod tests;

pub use auth::{AuthenticatedActor, AuthorizationService, Role};
pub use error::{
    ApiError, AuthError, translate_core_error, translate_domain_error,
    translate_persistence_error,
};
pub use handlers::{
    apply_master_update, freeze_profit_year, get_audit_timeline, get_master_update_status,
    revert_master_update, stage_profit_share_edit,
};
pub use parameters::{ParameterError, parse_run_parameters};
pub use request_response::{
    AuditEventView, AuditTimelineResponse, BadgeAdjustmentRequest, FreezeRequest, FreezeResponse,
    ProfitMasterRevertRequest, ProfitMasterRevertResponse, ProfitMasterStatusResponse,
    ProfitMasterUpdateRequest, ProfitMasterUpdateResponse, RunParametersView,
    StageProfitShareEditRequest, StageProfitShareEditResponse,
};
pub use source::{ProfitShareEditSource, StagedProfitShareEdit};
