// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]

mod frozen_tests;
mod initialization_tests;
mod master_update_tests;

use profit_master::{Command, TransitionResult, UpdateContext, apply};
use profit_master_audit::{Actor, Cause};
use profit_master_domain::{
    CandidateRecord, CommentTypeId, FrozenSnapshot, Money, Percentage, ProfitCodeId, ProfitYear,
    RunParameters, Ssn,
};
use rust_decimal::Decimal;
use time::OffsetDateTime;
use time::macros::datetime;

use crate::{PersistTransitionResult, Persistence};

/// The profit year every scenario closes.
pub const TEST_PROFIT_YEAR: u16 = 2024;

/// The year that receives the carried balances.
pub const TEST_CURRENT_YEAR: u16 = 2025;

pub fn create_test_actor() -> Actor {
    Actor::new(String::from("fm-001"), String::from("user"))
}

pub fn create_test_cause() -> Cause {
    Cause::new(String::from("test-cause"), String::from("Year-end run"))
}

/// A wall-clock time inside the year after the test profit year.
pub fn create_test_now() -> OffsetDateTime {
    datetime!(2025-01-15 14:30 UTC)
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

/// A contribution entry for an employee.
pub fn create_test_contribution(ssn: i32, contribution_cents: i64) -> CandidateRecord {
    CandidateRecord {
        ssn: Ssn::new(ssn).unwrap(),
        is_employee: true,
        badge_number: Some(700_000),
        name: format!("Employee {ssn}"),
        profit_code: ProfitCodeId::INCOMING_CONTRIBUTIONS,
        contribution: Money::from_cents(contribution_cents),
        earnings: Money::from_cents(1_500),
        forfeiture: Money::ZERO,
        zero_contribution_reason: None,
        comment_type: None,
        remark: None,
        year_extension: 0,
    }
}

/// A 100% vested earnings entry, the classification that moves ETVA.
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

/// Ten candidates: seven contributions and three ETVA earnings of
/// 100.00, 50.00 and 25.00.
pub fn create_test_candidates() -> Vec<CandidateRecord> {
    let mut candidates: Vec<CandidateRecord> = (1..=7)
        .map(|n| create_test_contribution(100_000_000 + n, 250_000))
        .collect();
    candidates.push(create_test_etva_earnings(200_000_001, 10_000));
    candidates.push(create_test_etva_earnings(200_000_002, 5_000));
    candidates.push(create_test_etva_earnings(200_000_003, 2_500));
    candidates
}

/// Creates an in-memory persistence with an active freeze for the test year.
pub fn create_test_persistence() -> Persistence {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();
    persistence
        .freeze_profit_year(&create_test_frozen_snapshot(TEST_PROFIT_YEAR))
        .unwrap();
    persistence
}

/// Loads balances for a person in both scenario years.
pub fn seed_balances(
    persistence: &mut Persistence,
    ssn: i32,
    prior_cents: i64,
    current_cents: i64,
) {
    let ssn: Ssn = Ssn::new(ssn).unwrap();
    persistence
        .insert_running_balance(
            ssn,
            ProfitYear::new(TEST_PROFIT_YEAR),
            Money::from_cents(prior_cents),
        )
        .unwrap();
    persistence
        .insert_running_balance(
            ssn,
            ProfitYear::new(TEST_CURRENT_YEAR),
            Money::from_cents(current_cents),
        )
        .unwrap();
}

pub fn balance_cents(persistence: &mut Persistence, ssn: i32, year: u16) -> Option<i64> {
    persistence
        .get_running_balance(Ssn::new(ssn).unwrap(), ProfitYear::new(year))
        .unwrap()
        .map(|money| money.cents().unwrap())
}

/// Loads the update context for the test profit year from storage.
pub fn load_test_context(persistence: &mut Persistence) -> UpdateContext {
    let profit_year: ProfitYear = ProfitYear::new(TEST_PROFIT_YEAR);
    UpdateContext {
        profit_year,
        now: create_test_now(),
        state: persistence.get_year_update_state(profit_year).unwrap(),
        frozen: persistence.get_active_frozen_snapshot().unwrap(),
        profit_codes: persistence.get_profit_code_table().unwrap(),
    }
}

pub fn plan_apply(
    persistence: &mut Persistence,
    candidates: Vec<CandidateRecord>,
) -> TransitionResult {
    let context: UpdateContext = load_test_context(persistence);
    let command: Command = Command::ApplyMasterUpdate {
        profit_year: ProfitYear::new(TEST_PROFIT_YEAR),
        parameters: create_test_parameters(),
        candidates,
    };
    apply(&context, command, create_test_actor(), create_test_cause()).unwrap()
}

pub fn plan_revert(persistence: &mut Persistence) -> TransitionResult {
    let context: UpdateContext = load_test_context(persistence);
    let command: Command = Command::RevertMasterUpdate {
        profit_year: ProfitYear::new(TEST_PROFIT_YEAR),
    };
    apply(&context, command, create_test_actor(), create_test_cause()).unwrap()
}

/// Plans and persists a master update.
pub fn apply_update(
    persistence: &mut Persistence,
    candidates: Vec<CandidateRecord>,
) -> PersistTransitionResult {
    let result: TransitionResult = plan_apply(persistence, candidates);
    persistence.persist_transition(&result).unwrap()
}

/// Plans and persists a revert.
pub fn revert_update(persistence: &mut Persistence) -> PersistTransitionResult {
    let result: TransitionResult = plan_revert(persistence);
    persistence.persist_transition(&result).unwrap()
}
