// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Candidate record sources.
//!
//! The profit share edit that computes candidates runs outside this crate.
//! The master update only consumes its output.

use std::collections::HashMap;

use profit_master_domain::{CandidateRecord, ProfitYear, RunParameters};

use crate::error::ApiError;

/// Supplies the computed candidate records for a master update.
pub trait ProfitShareEditSource {
    /// Returns the candidates for a profit year, in ledger write order.
    ///
    /// # Errors
    ///
    /// Returns an error if no candidates are available for the year.
    fn candidates(
        &self,
        profit_year: ProfitYear,
        parameters: &RunParameters,
    ) -> Result<Vec<CandidateRecord>, ApiError>;
}

/// Candidate records staged by an upstream profit share edit run.
#[derive(Debug, Clone, Default)]
pub struct StagedProfitShareEdit {
    staged: HashMap<ProfitYear, Vec<CandidateRecord>>,
}

impl StagedProfitShareEdit {
    /// Creates an empty staging area.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stages the candidates of a profit year, replacing earlier ones.
    ///
    /// Returns the number of staged records.
    pub fn stage(&mut self, profit_year: ProfitYear, candidates: Vec<CandidateRecord>) -> usize {
        let count: usize = candidates.len();
        self.staged.insert(profit_year, candidates);
        count
    }

    /// Returns the number of candidates staged for a profit year.
    #[must_use]
    pub fn staged_count(&self, profit_year: ProfitYear) -> Option<usize> {
        self.staged.get(&profit_year).map(Vec::len)
    }
}

impl ProfitShareEditSource for StagedProfitShareEdit {
    fn candidates(
        &self,
        profit_year: ProfitYear,
        _parameters: &RunParameters,
    ) -> Result<Vec<CandidateRecord>, ApiError> {
        self.staged
            .get(&profit_year)
            .cloned()
            .ok_or_else(|| ApiError::ResourceNotFound {
                resource_type: String::from("Profit share edit"),
                message: format!(
                    "No profit share edit has been staged for profit year {profit_year}"
                ),
            })
    }
}
