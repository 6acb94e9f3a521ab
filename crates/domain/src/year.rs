// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::types::ProfitYear;

/// The two fiscal years a master update touches.
///
/// `current_year` is always `profit_year + 1`; the only way to build a pair
/// is through a constructor that enforces it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearPair {
    profit_year: ProfitYear,
    current_year: ProfitYear,
}

impl YearPair {
    /// Builds the year pair for an update or revert requested at `wall_clock_year`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::YearLockViolation` unless `profit_year` is
    /// exactly the year before `wall_clock_year`.
    pub fn for_update(profit_year: ProfitYear, wall_clock_year: i32) -> Result<Self, DomainError> {
        if i32::from(profit_year.year()) != wall_clock_year - 1 {
            return Err(DomainError::YearLockViolation {
                profit_year: profit_year.year(),
                wall_clock_year,
            });
        }
        Self::consecutive(profit_year)
    }

    /// Builds the pair `(profit_year, profit_year + 1)`.
    ///
    /// # Errors
    ///
    /// Returns an error if `profit_year + 1` is not representable.
    pub fn consecutive(profit_year: ProfitYear) -> Result<Self, DomainError> {
        let current_year: ProfitYear = profit_year.next().ok_or_else(|| {
            DomainError::InvalidProfitYear(format!("{profit_year} has no following year"))
        })?;
        Ok(Self {
            profit_year,
            current_year,
        })
    }

    /// The fiscal year being closed.
    #[must_use]
    pub const fn profit_year(&self) -> ProfitYear {
        self.profit_year
    }

    /// The fiscal year that receives the carried-forward balance.
    #[must_use]
    pub const fn current_year(&self) -> ProfitYear {
        self.current_year
    }
}
