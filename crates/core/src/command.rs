// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use profit_master_domain::{CandidateRecord, ProfitYear, RunParameters};

/// A command represents user or system intent as data only.
///
/// Commands are the only way to request a year-end change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Write the profit share edit results for a year into the ledger.
    ApplyMasterUpdate {
        /// The profit year being closed.
        profit_year: ProfitYear,
        /// The parameters the edit was computed with.
        parameters: RunParameters,
        /// The computed candidate records.
        candidates: Vec<CandidateRecord>,
    },
    /// Undo a previously applied master update.
    RevertMasterUpdate {
        /// The profit year to revert.
        profit_year: ProfitYear,
    },
}

impl Command {
    /// Returns the profit year the command targets.
    #[must_use]
    pub const fn profit_year(&self) -> ProfitYear {
        match self {
            Self::ApplyMasterUpdate { profit_year, .. }
            | Self::RevertMasterUpdate { profit_year } => *profit_year,
        }
    }

    /// Returns the audit action name for the command.
    #[must_use]
    pub const fn action_name(&self) -> &'static str {
        match self {
            Self::ApplyMasterUpdate { .. } => "ApplyMasterUpdate",
            Self::RevertMasterUpdate { .. } => "RevertMasterUpdate",
        }
    }
}
