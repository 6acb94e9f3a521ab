// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Run parameter validation.
//!
//! Converts the decimal inputs of an update request into domain values.

use profit_master_domain::{BadgeAdjustment, BadgeNumber, Money, Percentage, RunParameters};
use rust_decimal::Decimal;
use thiserror::Error;

use crate::request_response::{BadgeAdjustmentRequest, ProfitMasterUpdateRequest};

/// Run parameter errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParameterError {
    /// A percentage is negative, above 100, or too precise.
    #[error("{field} must be between 0 and 100 with at most 6 decimal places, got {value}")]
    InvalidPercentage { field: String, value: Decimal },

    /// An amount has fractional cents.
    #[error("{field} must have at most 2 decimal places, got {value}")]
    InvalidAmount { field: String, value: Decimal },

    /// The maximum allowed contribution is negative.
    #[error("max_allowed_contribution must not be negative, got {value}")]
    NegativeMaximum { value: Decimal },

    /// An adjustment names badge zero.
    #[error("{field} must name a badge number greater than zero")]
    InvalidBadge { field: String },
}

impl ParameterError {
    /// Returns the request field the error refers to.
    #[must_use]
    pub fn field(&self) -> &str {
        match self {
            Self::InvalidPercentage { field, .. }
            | Self::InvalidAmount { field, .. }
            | Self::InvalidBadge { field } => field,
            Self::NegativeMaximum { .. } => "max_allowed_contribution",
        }
    }
}

fn percentage(field: &str, value: Decimal) -> Result<Percentage, ParameterError> {
    Percentage::new(field, value).map_err(|_| ParameterError::InvalidPercentage {
        field: String::from(field),
        value,
    })
}

fn amount(field: &str, value: Decimal) -> Result<Money, ParameterError> {
    Money::new(field, value).map_err(|_| ParameterError::InvalidAmount {
        field: String::from(field),
        value,
    })
}

fn adjustment(
    field: &str,
    request: Option<&BadgeAdjustmentRequest>,
) -> Result<Option<BadgeAdjustment>, ParameterError> {
    let Some(request) = request else {
        return Ok(None);
    };
    if request.badge == 0 {
        return Err(ParameterError::InvalidBadge {
            field: String::from(field),
        });
    }
    Ok(Some(BadgeAdjustment {
        badge: BadgeNumber::new(request.badge),
        contribution: amount(&format!("{field}.contribution"), request.contribution)?,
        earnings: amount(&format!("{field}.earnings"), request.earnings)?,
        incoming_forfeiture: amount(
            &format!("{field}.incoming_forfeiture"),
            request.incoming_forfeiture,
        )?,
    }))
}

/// Validates the parameters of an update request.
///
/// # Errors
///
/// Returns the first invalid field found, in request order.
pub fn parse_run_parameters(
    request: &ProfitMasterUpdateRequest,
) -> Result<RunParameters, ParameterError> {
    let contribution_percent: Percentage =
        percentage("contribution_percent", request.contribution_percent)?;
    let incoming_forfeit_percent: Percentage =
        percentage("incoming_forfeit_percent", request.incoming_forfeit_percent)?;
    let earnings_percent: Percentage = percentage("earnings_percent", request.earnings_percent)?;
    let secondary_earnings_percent: Percentage = percentage(
        "secondary_earnings_percent",
        request.secondary_earnings_percent,
    )?;

    if request.max_allowed_contribution < Decimal::ZERO {
        return Err(ParameterError::NegativeMaximum {
            value: request.max_allowed_contribution,
        });
    }
    let max_allowed_contribution: Money =
        amount("max_allowed_contribution", request.max_allowed_contribution)?;

    Ok(RunParameters {
        contribution_percent,
        incoming_forfeit_percent,
        earnings_percent,
        secondary_earnings_percent,
        max_allowed_contribution,
        adjustment: adjustment("adjustment", request.adjustment.as_ref())?,
        secondary_adjustment: adjustment(
            "secondary_adjustment",
            request.secondary_adjustment.as_ref(),
        )?,
    })
}
