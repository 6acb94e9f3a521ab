// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::UpdateContext;
use profit_master_audit::{Actor, Cause};
use profit_master_domain::{
    CandidateRecord, CommentTypeId, FrozenSnapshot, Money, Percentage, ProfitCodeDefinition,
    ProfitCodeFrequency, ProfitCodeId, ProfitCodeTable, ProfitYear, RunEffect, RunParameters,
    RunStatus, Ssn, YearUpdateState,
};
use rust_decimal::Decimal;
use time::macros::datetime;

pub fn create_test_actor() -> Actor {
    Actor::new(String::from("fm-001"), String::from("user"))
}

pub fn create_test_cause() -> Cause {
    Cause::new(String::from("req-456"), String::from("Year-end run"))
}

pub fn create_test_profit_codes() -> ProfitCodeTable {
    ProfitCodeTable::new(vec![
        ProfitCodeDefinition {
            id: ProfitCodeId::INCOMING_CONTRIBUTIONS,
            definition: String::from("Incoming contributions, forfeitures, earnings"),
            frequency: ProfitCodeFrequency::YearEndOnly,
        },
        ProfitCodeDefinition {
            id: ProfitCodeId::INCOMING_100_PERCENT_VESTED_EARNINGS,
            definition: String::from("Incoming \"100% vested\" earnings"),
            frequency: ProfitCodeFrequency::YearEndOnly,
        },
    ])
}

pub fn create_test_parameters() -> RunParameters {
    RunParameters {
        contribution_percent: Percentage::new("contribution_percent", Decimal::new(15, 0)).unwrap(),
        incoming_forfeit_percent: Percentage::new("incoming_forfeit_percent", Decimal::new(125, 2))
            .unwrap(),
        earnings_percent: Percentage::new("earnings_percent", Decimal::new(5, 0)).unwrap(),
        secondary_earnings_percent: Percentage::new("secondary_earnings_percent", Decimal::ZERO)
            .unwrap(),
        max_allowed_contribution: Money::from_cents(5_700_000),
        adjustment: None,
        secondary_adjustment: None,
    }
}

pub fn create_test_frozen_snapshot(year: u16) -> FrozenSnapshot {
    FrozenSnapshot {
        profit_year: ProfitYear::new(year),
        is_active: true,
        frozen_by: String::from("fm-001"),
        as_of: datetime!(2025-01-03 00:00 UTC),
        created_at: datetime!(2025-01-03 08:00 UTC),
    }
}

pub fn create_test_context(state: YearUpdateState) -> UpdateContext {
    UpdateContext {
        profit_year: ProfitYear::new(2024),
        now: datetime!(2025-01-15 14:30 UTC),
        state,
        frozen: Some(create_test_frozen_snapshot(2024)),
        profit_codes: create_test_profit_codes(),
    }
}

pub fn create_test_employee(ssn: i32, contribution_cents: i64) -> CandidateRecord {
    CandidateRecord {
        ssn: Ssn::new(ssn).unwrap(),
        is_employee: true,
        badge_number: Some(700_100),
        name: format!("Employee {ssn}"),
        profit_code: ProfitCodeId::INCOMING_CONTRIBUTIONS,
        contribution: Money::from_cents(contribution_cents),
        earnings: Money::from_cents(2_000),
        forfeiture: Money::ZERO,
        zero_contribution_reason: None,
        comment_type: None,
        remark: None,
        year_extension: 0,
    }
}

pub fn create_test_etva_earnings(ssn: i32, earnings_cents: i64) -> CandidateRecord {
    CandidateRecord {
        ssn: Ssn::new(ssn).unwrap(),
        is_employee: true,
        badge_number: Some(700_200),
        name: format!("Employee {ssn}"),
        profit_code: ProfitCodeId::INCOMING_100_PERCENT_VESTED_EARNINGS,
        contribution: Money::ZERO,
        earnings: Money::from_cents(earnings_cents),
        forfeiture: Money::ZERO,
        zero_contribution_reason: None,
        comment_type: Some(CommentTypeId::ONE_HUNDRED_PERCENT_EARNINGS),
        remark: Some(String::from("100% Earnings")),
        year_extension: 0,
    }
}

pub fn create_test_beneficiary(ssn: i32) -> CandidateRecord {
    CandidateRecord {
        ssn: Ssn::new(ssn).unwrap(),
        is_employee: false,
        badge_number: None,
        name: format!("Beneficiary {ssn}"),
        profit_code: ProfitCodeId::INCOMING_100_PERCENT_VESTED_EARNINGS,
        contribution: Money::ZERO,
        earnings: Money::from_cents(500),
        forfeiture: Money::ZERO,
        zero_contribution_reason: None,
        comment_type: Some(CommentTypeId::ONE_HUNDRED_PERCENT_EARNINGS),
        remark: None,
        year_extension: 0,
    }
}

pub fn create_test_run_status() -> RunStatus {
    RunStatus {
        profit_year: ProfitYear::new(2024),
        parameters: create_test_parameters(),
        effect: RunEffect {
            employees_affected: 8,
            beneficiaries_affected: 2,
            balance_rows_affected: 6,
            transactions_created: 10,
        },
        ran_by: String::from("fm-001"),
        ran_at: datetime!(2025-01-10 09:00 UTC),
    }
}
