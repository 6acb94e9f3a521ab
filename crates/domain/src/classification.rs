// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Ledger entry classifications.
//!
//! Every ledger entry carries a profit code (what kind of money movement it
//! records) and an optional comment type (why it happened). A master update
//! writes only a handful of combinations, and a revert removes exactly those.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A profit code identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProfitCodeId(u8);

impl ProfitCodeId {
    /// Incoming contributions, forfeitures, earnings.
    pub const INCOMING_CONTRIBUTIONS: Self = Self(0);
    /// Outgoing payments (not rollover or direct payments), partial withdrawal.
    pub const OUTGOING_PAYMENTS_PARTIAL_WITHDRAWAL: Self = Self(1);
    /// Outgoing forfeitures.
    pub const OUTGOING_FORFEITURES: Self = Self(2);
    /// Outgoing direct payments or rollover payments.
    pub const OUTGOING_DIRECT_PAYMENTS: Self = Self(3);
    /// Outgoing transfer to beneficiary or QDRO.
    pub const OUTGOING_XFER_BENEFICIARY: Self = Self(5);
    /// Incoming QDRO beneficiary allocation.
    pub const INCOMING_QDRO_BENEFICIARY: Self = Self(6);
    /// Incoming "100% vested" earnings.
    pub const INCOMING_100_PERCENT_VESTED_EARNINGS: Self = Self(8);
    /// Outgoing payment from the 100% vesting amount (ETVA).
    pub const OUTGOING_100_PERCENT_VESTED_PAYMENT: Self = Self(9);

    /// Creates a new `ProfitCodeId`.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Returns the raw identifier.
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.0
    }
}

impl std::fmt::Display for ProfitCodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// How often a profit code may be written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfitCodeFrequency {
    /// Written only by the year-end run.
    YearEndOnly,
    /// Written multiple times during the year.
    MultipleTimes,
}

impl ProfitCodeFrequency {
    /// Returns the string representation used for persistence.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::YearEndOnly => "year_end_only",
            Self::MultipleTimes => "multiple_times",
        }
    }
}

impl std::str::FromStr for ProfitCodeFrequency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "year_end_only" => Ok(Self::YearEndOnly),
            "multiple_times" => Ok(Self::MultipleTimes),
            _ => Err(format!("Unknown profit code frequency: {s}")),
        }
    }
}

/// A row of the profit code classification table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfitCodeDefinition {
    /// The profit code.
    pub id: ProfitCodeId,
    /// Human-readable definition.
    pub definition: String,
    /// How often the code may be written.
    pub frequency: ProfitCodeFrequency,
}

/// The profit code classification table.
///
/// Loaded from storage; candidates referencing a code absent from the table
/// are rejected by the materializer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfitCodeTable {
    codes: BTreeMap<ProfitCodeId, ProfitCodeDefinition>,
}

impl ProfitCodeTable {
    /// Creates a table from a list of definitions.
    #[must_use]
    pub fn new(definitions: Vec<ProfitCodeDefinition>) -> Self {
        Self {
            codes: definitions.into_iter().map(|d| (d.id, d)).collect(),
        }
    }

    /// Looks up a profit code.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::MissingClassification` if the code is not defined.
    pub fn lookup(&self, id: ProfitCodeId) -> Result<&ProfitCodeDefinition, DomainError> {
        self.codes
            .get(&id)
            .ok_or(DomainError::MissingClassification {
                profit_code: id.value(),
            })
    }

    /// Returns the number of defined codes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// Returns true if the table has no codes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}

/// A comment type identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct CommentTypeId(u8);

impl CommentTypeId {
    /// Vesting-only record.
    pub const V_ONLY: Self = Self(5);
    /// Earnings that are 100% vested (ETVA).
    pub const ONE_HUNDRED_PERCENT_EARNINGS: Self = Self(23);
    /// Over 64 with more than five years of contributions, 100% vested.
    pub const OVER_64_AND_OVER_5_YEARS: Self = Self(24);

    /// The highest defined comment type id.
    pub const MAX: u8 = 28;

    /// Creates a new `CommentTypeId`.
    ///
    /// # Errors
    ///
    /// Returns an error if the id is not a defined comment type.
    pub fn new(id: u8) -> Result<Self, DomainError> {
        if !(1..=Self::MAX).contains(&id) {
            return Err(DomainError::UnknownCommentType(id));
        }
        Ok(Self(id))
    }

    /// Returns the raw identifier.
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.0
    }

    /// Returns the display name of the comment type.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self.0 {
            1 => "Transfer Out",
            2 => "Transfer In",
            3 => "QDRO Out",
            4 => "QDRO In",
            5 => "V-Only",
            6 => "Forfeit",
            7 => "Un-Forfeit",
            8 => "Class Action",
            9 => "Voided",
            10 => "Hardship",
            11 => "Distribution",
            12 => "Payoff",
            13 => "Dirpay",
            14 => "Rollover",
            15 => "Roth IRA",
            16 => "> 64 - 1 Year Vested",
            17 => "> 64 - 2 Year Vested",
            18 => "> 64 - 3 Year Vested",
            19 => "Military",
            20 => "Other",
            21 => "Rev",
            22 => "Unrev",
            23 => "100% Earnings",
            24 => ">64 & >5 100%",
            25 => "Forfeit Class Action",
            26 => "Forfeit Administrative",
            27 => "Administrative - taking money from under 21",
            _ => "Forfeiture adjustment for Class Action",
        }
    }
}

impl TryFrom<u8> for CommentTypeId {
    type Error = DomainError;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        Self::new(id)
    }
}

impl From<CommentTypeId> for u8 {
    fn from(id: CommentTypeId) -> Self {
        id.0
    }
}

/// Reason a participant received no contribution but still earns credit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct ZeroContributionReason(u8);

impl ZeroContributionReason {
    /// Normal.
    pub const NORMAL: Self = Self(0);
    /// Age 18, 19 or 20 with more than 1000 hours.
    pub const UNDER_21_WITH_OVER_1000_HOURS: Self = Self(1);
    /// Terminated with more than 1000 hours; gets the year vested.
    pub const TERMINATED_WITH_OVER_1000_HOURS: Self = Self(2);
    /// Age 65 or older with first contribution at least five years ago; 100% vested.
    pub const SIXTY_FIVE_AND_OVER_FIVE_YEARS: Self = Self(6);
    /// Turned 64; 100% vested on birthday.
    pub const SIXTY_FOUR_VESTED_ON_BIRTHDAY: Self = Self(7);

    /// Creates a new `ZeroContributionReason`.
    ///
    /// # Errors
    ///
    /// Returns an error if the id is not a defined reason.
    pub const fn new(id: u8) -> Result<Self, DomainError> {
        if id > 7 {
            return Err(DomainError::UnknownZeroContributionReason(id));
        }
        Ok(Self(id))
    }

    /// Returns the raw identifier.
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.0
    }

    /// Returns true if this reason earns a year of service credit on its own.
    #[must_use]
    pub const fn earns_service_credit(&self) -> bool {
        self.0 == Self::UNDER_21_WITH_OVER_1000_HOURS.0
            || self.0 == Self::TERMINATED_WITH_OVER_1000_HOURS.0
    }
}

impl TryFrom<u8> for ZeroContributionReason {
    type Error = DomainError;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        Self::new(id)
    }
}

impl From<ZeroContributionReason> for u8 {
    fn from(reason: ZeroContributionReason) -> Self {
        reason.0
    }
}

/// The (profit code, comment type) pairs a master update writes.
///
/// Revert deletes exactly these pairs for the target year, so nothing else
/// may be materialized.
pub const MASTER_UPDATE_CLASSIFICATIONS: [(ProfitCodeId, Option<CommentTypeId>); 4] = [
    (ProfitCodeId::INCOMING_CONTRIBUTIONS, None),
    (
        ProfitCodeId::INCOMING_CONTRIBUTIONS,
        Some(CommentTypeId::V_ONLY),
    ),
    (
        ProfitCodeId::INCOMING_CONTRIBUTIONS,
        Some(CommentTypeId::OVER_64_AND_OVER_5_YEARS),
    ),
    (
        ProfitCodeId::INCOMING_100_PERCENT_VESTED_EARNINGS,
        Some(CommentTypeId::ONE_HUNDRED_PERCENT_EARNINGS),
    ),
];

/// Returns true if a master update may write this classification.
#[must_use]
pub fn is_master_update_classification(
    profit_code: ProfitCodeId,
    comment_type: Option<CommentTypeId>,
) -> bool {
    MASTER_UPDATE_CLASSIFICATIONS
        .iter()
        .any(|(code, comment)| *code == profit_code && *comment == comment_type)
}

/// Returns true if an entry carries the ETVA earnings classification.
///
/// These entries drive the cross-year balance synchronization.
#[must_use]
pub fn is_etva_earnings(profit_code: ProfitCodeId, comment_type: Option<CommentTypeId>) -> bool {
    profit_code == ProfitCodeId::INCOMING_100_PERCENT_VESTED_EARNINGS
        && comment_type == Some(CommentTypeId::ONE_HUNDRED_PERCENT_EARNINGS)
}
