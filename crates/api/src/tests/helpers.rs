// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use profit_master_audit::Cause;
use profit_master_domain::{
    CandidateRecord, CommentTypeId, Money, ProfitCodeId, ProfitYear, Ssn,
};
use profit_master_persistence::Persistence;
use rust_decimal::Decimal;
use time::OffsetDateTime;
use time::macros::datetime;

use crate::{
    AuthenticatedActor, FreezeRequest, ProfitMasterUpdateRequest, Role, StagedProfitShareEdit,
    freeze_profit_year,
};

pub const TEST_PROFIT_YEAR: u16 = 2024;
pub const TEST_CURRENT_YEAR: u16 = 2025;

pub fn create_test_admin() -> AuthenticatedActor {
    AuthenticatedActor::new(String::from("admin-123"), Role::Administrator)
}

pub fn create_test_finance_manager() -> AuthenticatedActor {
    AuthenticatedActor::new(String::from("fm-456"), Role::FinanceManager)
}

pub fn create_test_auditor() -> AuthenticatedActor {
    AuthenticatedActor::new(String::from("auditor-789"), Role::Auditor)
}

pub fn create_test_cause() -> Cause {
    Cause::new(String::from("api-req-456"), String::from("Year-end close"))
}

/// Mid-January of the year after the test profit year.
pub fn create_test_now() -> OffsetDateTime {
    datetime!(2025-01-15 14:30 UTC)
}

pub fn create_valid_request() -> ProfitMasterUpdateRequest {
    ProfitMasterUpdateRequest {
        profit_year: TEST_PROFIT_YEAR,
        contribution_percent: Decimal::new(15, 0),
        incoming_forfeit_percent: Decimal::new(125, 2),
        earnings_percent: Decimal::new(5, 0),
        secondary_earnings_percent: Decimal::ZERO,
        max_allowed_contribution: Decimal::new(5_700_000, 2),
        adjustment: None,
        secondary_adjustment: None,
    }
}

pub fn create_test_contribution(ssn: i32) -> CandidateRecord {
    CandidateRecord {
        ssn: Ssn::new(ssn).unwrap(),
        is_employee: true,
        badge_number: Some(700_000),
        name: format!("Employee {ssn}"),
        profit_code: ProfitCodeId::INCOMING_CONTRIBUTIONS,
        contribution: Money::from_cents(250_000),
        earnings: Money::from_cents(1_500),
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
        badge_number: Some(700_100),
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

/// Ten candidates: seven contributions and ETVA earnings of 100.00, 50.00
/// and 25.00.
pub fn create_test_candidates() -> Vec<CandidateRecord> {
    let mut candidates: Vec<CandidateRecord> =
        (1..=7).map(|n| create_test_contribution(100_000_000 + n)).collect();
    candidates.push(create_test_etva_earnings(200_000_001, 10_000));
    candidates.push(create_test_etva_earnings(200_000_002, 5_000));
    candidates.push(create_test_etva_earnings(200_000_003, 2_500));
    candidates
}

pub fn create_test_staging() -> StagedProfitShareEdit {
    let mut staging: StagedProfitShareEdit = StagedProfitShareEdit::new();
    staging.stage(ProfitYear::new(TEST_PROFIT_YEAR), create_test_candidates());
    staging
}

/// Creates persistence with the profit year frozen and ETVA balances of
/// 900.00 (profit year) and 1000.00 (current year) for the three ETVA
/// earners.
pub fn create_test_persistence() -> Persistence {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();
    freeze_profit_year(
        &mut persistence,
        &FreezeRequest {
            profit_year: TEST_PROFIT_YEAR,
            as_of: datetime!(2025-01-03 00:00 UTC),
        },
        &create_test_finance_manager(),
        datetime!(2025-01-03 08:00 UTC),
    )
    .unwrap();

    for ssn in [200_000_001, 200_000_002, 200_000_003] {
        let ssn: Ssn = Ssn::new(ssn).unwrap();
        persistence
            .insert_running_balance(
                ssn,
                ProfitYear::new(TEST_PROFIT_YEAR),
                Money::from_cents(90_000),
            )
            .unwrap();
        persistence
            .insert_running_balance(
                ssn,
                ProfitYear::new(TEST_CURRENT_YEAR),
                Money::from_cents(100_000),
            )
            .unwrap();
    }
    persistence
}

pub fn etva_cents(persistence: &mut Persistence, ssn: i32, year: u16) -> i64 {
    persistence
        .get_running_balance(Ssn::new(ssn).unwrap(), ProfitYear::new(year))
        .unwrap()
        .unwrap()
        .cents()
        .unwrap()
}
