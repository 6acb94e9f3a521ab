// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::classification::{CommentTypeId, ProfitCodeId, ZeroContributionReason};
use crate::types::{Money, ProfitYear, Ssn};
use serde::{Deserialize, Serialize};

/// A computed record produced by the profit share edit.
///
/// Candidates are input only; they become ledger entries once materialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateRecord {
    /// The person the record belongs to.
    pub ssn: Ssn,
    /// True for employees, false for beneficiaries.
    pub is_employee: bool,
    /// Badge number for employees; absent for beneficiaries.
    pub badge_number: Option<u32>,
    /// Display name of the person.
    pub name: String,
    /// The profit code.
    pub profit_code: ProfitCodeId,
    /// Contribution amount.
    pub contribution: Money,
    /// Earnings amount.
    pub earnings: Money,
    /// Forfeiture amount.
    pub forfeiture: Money,
    /// Zero contribution reason, if any.
    pub zero_contribution_reason: Option<ZeroContributionReason>,
    /// Comment type, if any.
    pub comment_type: Option<CommentTypeId>,
    /// Free-form remark.
    pub remark: Option<String>,
    /// Year iteration; non-zero when the record extends a prior year.
    pub year_extension: u8,
}

/// A permanent profit-sharing ledger row.
///
/// The storage identity is assigned by the database and is not part of this type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerEntry {
    /// The person the entry belongs to.
    pub ssn: Ssn,
    /// The profit year the entry is booked in.
    pub profit_year: ProfitYear,
    /// Year iteration.
    pub profit_year_iteration: u8,
    /// The profit code.
    pub profit_code: ProfitCodeId,
    /// Contribution amount.
    pub contribution: Money,
    /// Earnings amount.
    pub earnings: Money,
    /// Forfeiture amount.
    pub forfeiture: Money,
    /// Zero contribution reason, if any.
    pub zero_contribution_reason: Option<ZeroContributionReason>,
    /// Comment type, if any.
    pub comment_type: Option<CommentTypeId>,
    /// Free-form remark.
    pub remark: Option<String>,
    /// Years of service credit granted by this entry (0 or 1).
    pub years_of_service_credit: u8,
    /// Month-to-date marker; year-end rows are always month 12.
    pub month_to_date: u8,
    /// Year-to-date marker; equals the profit year.
    pub year_to_date: u16,
}
