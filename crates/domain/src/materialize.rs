// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Candidate to ledger entry materialization.

use crate::classification::{
    CommentTypeId, ProfitCodeId, ProfitCodeTable, ZeroContributionReason,
    is_master_update_classification,
};
use crate::error::DomainError;
use crate::ledger::{CandidateRecord, LedgerEntry};
use crate::types::{Money, ProfitYear};

/// Month marker stamped on every year-end ledger entry.
pub const YEAR_END_MONTH: u8 = 12;

/// Computes the years-of-service credit for a ledger entry.
///
/// Credit is granted only on incoming-contribution rows, and only when money
/// was contributed or the zero-contribution reason itself earns credit.
#[must_use]
pub fn years_of_service_credit(
    profit_code: ProfitCodeId,
    contribution: Money,
    zero_contribution_reason: Option<ZeroContributionReason>,
) -> u8 {
    if profit_code != ProfitCodeId::INCOMING_CONTRIBUTIONS {
        return 0;
    }
    let credited_by_reason: bool =
        zero_contribution_reason.is_some_and(|reason| reason.earns_service_credit());
    u8::from(!contribution.is_zero() || credited_by_reason)
}

/// Converts candidate records into ledger entries for a profit year.
///
/// Output order matches input order.
///
/// # Arguments
///
/// * `profit_year` - The profit year the entries are booked in
/// * `candidates` - The candidate records
/// * `profit_codes` - The profit code classification table
///
/// # Errors
///
/// Returns an error if:
/// - A candidate references a profit code that is not in the table
/// - A candidate carries a classification a revert could not remove
pub fn materialize_ledger_entries(
    profit_year: ProfitYear,
    candidates: &[CandidateRecord],
    profit_codes: &ProfitCodeTable,
) -> Result<Vec<LedgerEntry>, DomainError> {
    candidates
        .iter()
        .map(|candidate| materialize_one(profit_year, candidate, profit_codes))
        .collect()
}

fn materialize_one(
    profit_year: ProfitYear,
    candidate: &CandidateRecord,
    profit_codes: &ProfitCodeTable,
) -> Result<LedgerEntry, DomainError> {
    profit_codes.lookup(candidate.profit_code)?;
    check_classification(candidate.profit_code, candidate.comment_type)?;

    Ok(LedgerEntry {
        ssn: candidate.ssn,
        profit_year,
        profit_year_iteration: candidate.year_extension,
        profit_code: candidate.profit_code,
        contribution: candidate.contribution,
        earnings: candidate.earnings,
        forfeiture: candidate.forfeiture,
        zero_contribution_reason: candidate.zero_contribution_reason,
        comment_type: candidate.comment_type,
        remark: candidate.remark.clone(),
        years_of_service_credit: years_of_service_credit(
            candidate.profit_code,
            candidate.contribution,
            candidate.zero_contribution_reason,
        ),
        month_to_date: YEAR_END_MONTH,
        year_to_date: profit_year.year(),
    })
}

fn check_classification(
    profit_code: ProfitCodeId,
    comment_type: Option<CommentTypeId>,
) -> Result<(), DomainError> {
    if is_master_update_classification(profit_code, comment_type) {
        Ok(())
    } else {
        Err(DomainError::UnsupportedClassification {
            profit_code: profit_code.value(),
            comment_type: comment_type.map(|c| c.value()),
        })
    }
}
