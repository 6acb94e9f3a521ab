// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Query modules for persistence layer.
//!
//! This module contains all read-only queries for the persistence layer.
//!
//! ## Module Organization
//!
//! - `audit` - Audit event queries
//! - `balances` - Running balance lookups
//! - `classification` - Profit code lookup table
//! - `frozen` - Frozen demographic snapshot lookups
//! - `ledger` - Ledger entry listings and counts
//! - `run_status` - Per-year run status lookups
//!
//! ## Backend-Specific Functions
//!
//! All query functions are generated in backend-specific monomorphic versions:
//! - Functions suffixed with `_sqlite` for `SQLite`
//! - Functions suffixed with `_mysql` for `MySQL`/`MariaDB`
//!
//! The `Persistence` adapter in `lib.rs` dispatches to the appropriate version
//! based on the active backend connection.

pub mod audit;
pub mod balances;
pub mod classification;
pub mod frozen;
pub mod ledger;
pub mod run_status;

// Re-export backend-specific query functions used by lib.rs
pub use audit::{
    get_audit_event_mysql, get_audit_event_sqlite, get_audit_timeline_mysql,
    get_audit_timeline_sqlite,
};
pub use balances::{get_running_balance_mysql, get_running_balance_sqlite};
pub use classification::{get_profit_code_table_mysql, get_profit_code_table_sqlite};
pub use frozen::{get_active_frozen_snapshot_mysql, get_active_frozen_snapshot_sqlite};
pub use ledger::{
    count_ledger_entries_mysql, count_ledger_entries_sqlite, list_ledger_entries_mysql,
    list_ledger_entries_sqlite,
};
pub use run_status::{get_run_status_mysql, get_run_status_sqlite};
