// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Authorization types and services.

use profit_master_audit::Actor;

use crate::error::AuthError;

/// Actor roles for authorization.
///
/// Roles determine what actions an authenticated actor may perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// Administrator role: full authority over the year-end run.
    Administrator,
    /// Finance manager role: operators who run the year-end close.
    ///
    /// Finance managers may:
    /// - freeze demographics
    /// - stage the profit share edit
    /// - apply and revert the master update
    FinanceManager,
    /// Auditor role: read-only access to run status and audit history.
    Auditor,
}

impl Role {
    /// Returns the string representation used for audit records.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Administrator => "administrator",
            Self::FinanceManager => "finance_manager",
            Self::Auditor => "auditor",
        }
    }

    /// Whether the role may change ledger or balance state.
    #[must_use]
    pub const fn can_run_year_end(&self) -> bool {
        matches!(self, Self::Administrator | Self::FinanceManager)
    }
}

impl std::str::FromStr for Role {
    type Err = AuthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "administrator" => Ok(Self::Administrator),
            "finance_manager" | "financemanager" => Ok(Self::FinanceManager),
            "auditor" => Ok(Self::Auditor),
            _ => Err(AuthError::AuthenticationFailed {
                reason: format!("Unknown role: {s}"),
            }),
        }
    }
}

/// An authenticated actor with an associated role.
///
/// This represents an operator who has been authenticated upstream and
/// has permission to perform certain actions based on their role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedActor {
    /// The unique identifier for this actor.
    pub id: String,
    /// The role assigned to this actor.
    pub role: Role,
}

impl AuthenticatedActor {
    /// Creates a new authenticated actor.
    ///
    /// # Arguments
    ///
    /// * `id` - The unique identifier for this actor
    /// * `role` - The role assigned to this actor
    #[must_use]
    pub const fn new(id: String, role: Role) -> Self {
        Self { id, role }
    }

    /// Converts this authenticated actor into an audit Actor.
    #[must_use]
    pub fn to_audit_actor(&self) -> Actor {
        Actor::new(self.id.clone(), String::from(self.role.as_str()))
    }
}

/// Authorization service for enforcing role-based access control.
pub struct AuthorizationService;

impl AuthorizationService {
    fn require_year_end_role(actor: &AuthenticatedActor, action: &str) -> Result<(), AuthError> {
        if actor.role.can_run_year_end() {
            Ok(())
        } else {
            Err(AuthError::Unauthorized {
                action: String::from(action),
                required_role: String::from("Administrator or FinanceManager"),
            })
        }
    }

    /// Checks if an actor is authorized to apply the master update.
    ///
    /// # Errors
    ///
    /// Returns an error if the actor is an Auditor.
    pub fn authorize_apply_master_update(actor: &AuthenticatedActor) -> Result<(), AuthError> {
        Self::require_year_end_role(actor, "apply_master_update")
    }

    /// Checks if an actor is authorized to revert the master update.
    ///
    /// # Errors
    ///
    /// Returns an error if the actor is an Auditor.
    pub fn authorize_revert_master_update(actor: &AuthenticatedActor) -> Result<(), AuthError> {
        Self::require_year_end_role(actor, "revert_master_update")
    }

    /// Checks if an actor is authorized to freeze demographics.
    ///
    /// # Errors
    ///
    /// Returns an error if the actor is an Auditor.
    pub fn authorize_freeze(actor: &AuthenticatedActor) -> Result<(), AuthError> {
        Self::require_year_end_role(actor, "freeze_profit_year")
    }

    /// Checks if an actor is authorized to stage a profit share edit.
    ///
    /// # Errors
    ///
    /// Returns an error if the actor is an Auditor.
    pub fn authorize_stage_profit_share_edit(actor: &AuthenticatedActor) -> Result<(), AuthError> {
        Self::require_year_end_role(actor, "stage_profit_share_edit")
    }

    /// Checks if an actor is authorized to read run status and audit history.
    ///
    /// Every role may read.
    ///
    /// # Errors
    ///
    /// Never fails; the signature matches the other checks.
    pub const fn authorize_read(_actor: &AuthenticatedActor) -> Result<(), AuthError> {
        Ok(())
    }
}
