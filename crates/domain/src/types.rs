// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

/// A fiscal profit-sharing year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProfitYear {
    year: u16,
}

impl ProfitYear {
    /// Creates a new `ProfitYear`.
    ///
    /// # Arguments
    ///
    /// * `year` - The year value
    #[must_use]
    pub const fn new(year: u16) -> Self {
        Self { year }
    }

    /// Returns the year value.
    #[must_use]
    pub const fn year(&self) -> u16 {
        self.year
    }

    /// Returns the year that follows this one, if it is representable.
    #[must_use]
    pub const fn next(&self) -> Option<Self> {
        match self.year.checked_add(1) {
            Some(year) => Some(Self { year }),
            None => None,
        }
    }
}

impl std::fmt::Display for ProfitYear {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.year)
    }
}

/// The stable person key shared by ledger entries and running balances.
///
/// Employees and beneficiaries are both keyed by SSN.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub struct Ssn(i32);

impl Ssn {
    /// Creates a new `Ssn`.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is not a positive nine-digit-or-shorter number.
    pub fn new(value: i32) -> Result<Self, DomainError> {
        if !(1..=999_999_999).contains(&value) {
            return Err(DomainError::InvalidPersonKey(format!(
                "SSN must be between 1 and 999999999, got {value}"
            )));
        }
        Ok(Self(value))
    }

    /// Returns the raw SSN value.
    #[must_use]
    pub const fn value(&self) -> i32 {
        self.0
    }
}

impl TryFrom<i32> for Ssn {
    type Error = DomainError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Ssn> for i32 {
    fn from(ssn: Ssn) -> Self {
        ssn.0
    }
}

/// A monetary amount with at most two fractional digits.
///
/// Amounts are persisted as whole cents.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Money(Decimal);

impl Money {
    /// The zero amount.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Creates a new `Money` value for a named field.
    ///
    /// # Arguments
    ///
    /// * `field` - The field name, used in error messages
    /// * `amount` - The decimal amount
    ///
    /// # Errors
    ///
    /// Returns an error if the amount has more than two fractional digits.
    pub fn new(field: &str, amount: Decimal) -> Result<Self, DomainError> {
        if amount.round_dp(2) != amount {
            return Err(DomainError::InvalidMoney {
                field: field.to_string(),
                reason: format!("{amount} has more than two decimal places"),
            });
        }
        Ok(Self(amount))
    }

    /// Creates a `Money` value from whole cents.
    #[must_use]
    pub fn from_cents(cents: i64) -> Self {
        Self(Decimal::new(cents, 2))
    }

    /// Returns the amount as whole cents.
    ///
    /// # Errors
    ///
    /// Returns an error if the amount does not fit in an `i64` cent count.
    pub fn cents(&self) -> Result<i64, DomainError> {
        self.0
            .checked_mul(Decimal::ONE_HUNDRED)
            .and_then(|cents| cents.to_i64())
            .ok_or_else(|| DomainError::InvalidMoney {
                field: String::from("amount"),
                reason: format!("{} is too large", self.0),
            })
    }

    /// Returns the decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Returns true if the amount is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl TryFrom<Decimal> for Money {
    type Error = DomainError;

    fn try_from(amount: Decimal) -> Result<Self, Self::Error> {
        Self::new("amount", amount)
    }
}

impl From<Money> for Decimal {
    fn from(money: Money) -> Self {
        money.0
    }
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

/// A run percentage between 0 and 100 with at most six fractional digits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Percentage(Decimal);

impl Percentage {
    /// The largest number of fractional digits a percentage may carry.
    pub const MAX_SCALE: u32 = 6;

    /// Creates a new `Percentage` for a named field.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is negative, greater than 100, or
    /// carries more than six fractional digits.
    pub fn new(field: &str, value: Decimal) -> Result<Self, DomainError> {
        if value.is_sign_negative() && !value.is_zero() {
            return Err(DomainError::InvalidPercentage {
                field: field.to_string(),
                reason: format!("{value} is negative"),
            });
        }
        if value > Decimal::ONE_HUNDRED {
            return Err(DomainError::InvalidPercentage {
                field: field.to_string(),
                reason: format!("{value} is greater than 100"),
            });
        }
        if value.round_dp(Self::MAX_SCALE) != value {
            return Err(DomainError::InvalidPercentage {
                field: field.to_string(),
                reason: format!("{value} has more than {} decimal places", Self::MAX_SCALE),
            });
        }
        Ok(Self(value))
    }

    /// Returns the decimal value.
    #[must_use]
    pub const fn value(&self) -> Decimal {
        self.0
    }
}

impl TryFrom<Decimal> for Percentage {
    type Error = DomainError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new("percentage", value)
    }
}

impl From<Percentage> for Decimal {
    fn from(percentage: Percentage) -> Self {
        percentage.0
    }
}

impl std::fmt::Display for Percentage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.normalize())
    }
}

/// An employee badge number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BadgeNumber(u32);

impl BadgeNumber {
    /// Creates a new `BadgeNumber`.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Returns the raw badge number.
    #[must_use]
    pub const fn value(&self) -> u32 {
        self.0
    }
}
