// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Backend-agnostic mutation modules.
//!
//! This module contains all state-changing operations for the persistence layer.
//! Most mutations use Diesel DSL and are backend-agnostic; balance updates
//! that need backend-specific SQL go through the `PersistenceBackend` trait.
//!
//! ## Module Organization
//!
//! - `audit` - Audit event persistence
//! - `balances` - Running balance loading and ETVA synchronization
//! - `frozen` - Frozen demographic snapshots
//! - `ledger` - Bulk ledger writes and the targeted revert delete
//! - `master_update` - High-level orchestration (`persist_transition`)
//! - `run_status` - Run status insert and delete

pub mod audit;
pub mod balances;
pub mod frozen;
pub mod ledger;
pub mod master_update;
pub mod run_status;

// Re-export backend-specific mutation functions used by lib.rs
pub use balances::{insert_running_balance_mysql, insert_running_balance_sqlite};
pub use frozen::{record_frozen_snapshot_mysql, record_frozen_snapshot_sqlite};
pub use master_update::{
    ApplyOutcome, PersistTransitionResult, RevertOutcome, persist_transition_mysql,
    persist_transition_sqlite,
};
