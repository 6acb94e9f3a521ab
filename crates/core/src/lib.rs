// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Pure planning for the Profit Master year-end update.
//!
//! Nothing in this crate touches storage. Given the stored state of a
//! profit year and a command, `apply` either rejects the command or returns
//! the exact ledger and balance work persistence must carry out, together
//! with the audit event that records it.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod apply;
mod command;
mod error;
mod state;

#[cfg(test)]
mod tests;

pub use apply::apply;
pub use command::Command;
pub use error::CoreError;
pub use state::{ApplyPlan, RevertPlan, TransitionResult, UpdateContext, UpdatePlan};
