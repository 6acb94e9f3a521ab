// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use profit_master::TransitionResult;
use profit_master_domain::{LedgerEntry, ProfitYear, RunStatus, YearUpdateState};

use super::{
    TEST_CURRENT_YEAR, TEST_PROFIT_YEAR, apply_update, balance_cents, create_test_candidates,
    create_test_parameters, create_test_persistence, plan_apply, plan_revert, revert_update,
    seed_balances,
};
use crate::{ApplyOutcome, PersistTransitionResult, Persistence, PersistenceError, RevertOutcome};

fn expect_applied(result: PersistTransitionResult) -> ApplyOutcome {
    match result {
        PersistTransitionResult::Applied(outcome) => outcome,
        PersistTransitionResult::Reverted(_) => panic!("Expected an applied update"),
    }
}

fn expect_reverted(result: PersistTransitionResult) -> RevertOutcome {
    match result {
        PersistTransitionResult::Reverted(outcome) => outcome,
        PersistTransitionResult::Applied(_) => panic!("Expected a revert"),
    }
}

fn seed_scenario_balances(persistence: &mut Persistence) {
    seed_balances(persistence, 200_000_001, 90_000, 100_000);
    seed_balances(persistence, 200_000_002, 90_000, 100_000);
    seed_balances(persistence, 200_000_003, 90_000, 100_000);
}

#[test]
fn test_apply_writes_entries_and_synchronizes_balances() {
    let mut persistence: Persistence = create_test_persistence();
    seed_scenario_balances(&mut persistence);

    let outcome: ApplyOutcome =
        expect_applied(apply_update(&mut persistence, create_test_candidates()));

    assert_eq!(outcome.run_status.effect.transactions_created, 10);
    assert_eq!(outcome.run_status.effect.employees_affected, 10);
    assert_eq!(outcome.run_status.effect.beneficiaries_affected, 0);
    // Three forward bumps plus three rollover copies.
    assert_eq!(outcome.run_status.effect.balance_rows_affected, 6);

    assert_eq!(
        persistence
            .count_ledger_entries(ProfitYear::new(TEST_PROFIT_YEAR))
            .unwrap(),
        10
    );

    let current_total: i64 = [200_000_001, 200_000_002, 200_000_003]
        .iter()
        .map(|ssn| balance_cents(&mut persistence, *ssn, TEST_CURRENT_YEAR).unwrap())
        .sum();
    assert_eq!(current_total, 300_000 + 17_500);

    assert_eq!(
        balance_cents(&mut persistence, 200_000_001, TEST_CURRENT_YEAR),
        Some(110_000)
    );
    for ssn in [200_000_001, 200_000_002, 200_000_003] {
        assert_eq!(
            balance_cents(&mut persistence, ssn, TEST_PROFIT_YEAR),
            balance_cents(&mut persistence, ssn, TEST_CURRENT_YEAR),
            "profit-year ETVA must equal current-year ETVA after rollover"
        );
    }
}

#[test]
fn test_apply_records_run_status_with_parameters() {
    let mut persistence: Persistence = create_test_persistence();
    seed_scenario_balances(&mut persistence);

    let outcome: ApplyOutcome =
        expect_applied(apply_update(&mut persistence, create_test_candidates()));

    let stored: RunStatus = persistence
        .get_run_status(ProfitYear::new(TEST_PROFIT_YEAR))
        .unwrap()
        .expect("Run status must be recorded");
    assert_eq!(stored, outcome.run_status);
    assert_eq!(stored.parameters, create_test_parameters());
    assert_eq!(stored.ran_by, "fm-001");
}

#[test]
fn test_ledger_entries_preserve_candidate_order_and_derived_fields() {
    let mut persistence: Persistence = create_test_persistence();

    apply_update(&mut persistence, create_test_candidates());

    let entries: Vec<LedgerEntry> = persistence
        .list_ledger_entries(ProfitYear::new(TEST_PROFIT_YEAR))
        .unwrap();
    assert_eq!(entries.len(), 10);
    assert_eq!(entries[0].ssn.value(), 100_000_001);
    assert_eq!(entries[9].ssn.value(), 200_000_003);
    assert!(entries.iter().all(|e| e.month_to_date == 12));
    assert!(entries.iter().all(|e| e.year_to_date == TEST_PROFIT_YEAR));
    assert_eq!(entries[0].years_of_service_credit, 1);
    assert_eq!(entries[9].years_of_service_credit, 0);
    assert_eq!(entries[9].remark.as_deref(), Some("100% Earnings"));
}

#[test]
fn test_apply_twice_is_rejected_by_storage() {
    let mut persistence: Persistence = create_test_persistence();

    // Both plans are made while the year is still not run.
    let first: TransitionResult = plan_apply(&mut persistence, create_test_candidates());
    let second: TransitionResult = plan_apply(&mut persistence, create_test_candidates());

    persistence.persist_transition(&first).unwrap();
    let result: Result<PersistTransitionResult, PersistenceError> =
        persistence.persist_transition(&second);

    assert_eq!(
        result.unwrap_err(),
        PersistenceError::RunAlreadyExists(TEST_PROFIT_YEAR)
    );
    assert_eq!(
        persistence
            .count_ledger_entries(ProfitYear::new(TEST_PROFIT_YEAR))
            .unwrap(),
        10,
        "The rejected update must not write entries"
    );
}

#[test]
fn test_revert_without_apply_reports_nothing_to_revert() {
    let mut persistence: Persistence = create_test_persistence();
    seed_scenario_balances(&mut persistence);
    apply_update(&mut persistence, create_test_candidates());

    // Plan a revert, then remove the run out from under it.
    let stale: TransitionResult = plan_revert(&mut persistence);
    revert_update(&mut persistence);
    let result: Result<PersistTransitionResult, PersistenceError> =
        persistence.persist_transition(&stale);

    assert_eq!(
        result.unwrap_err(),
        PersistenceError::NothingToRevert(TEST_PROFIT_YEAR)
    );
    assert_eq!(
        balance_cents(&mut persistence, 200_000_001, TEST_CURRENT_YEAR),
        Some(100_000),
        "A rejected revert must not adjust balances"
    );
}

#[test]
fn test_round_trip_restores_current_year_and_removes_entries() {
    let mut persistence: Persistence = create_test_persistence();
    seed_scenario_balances(&mut persistence);

    apply_update(&mut persistence, create_test_candidates());
    let outcome: RevertOutcome = expect_reverted(revert_update(&mut persistence));

    assert_eq!(outcome.transactions_removed, 10);
    assert_eq!(outcome.balance_rows_affected, 3);
    assert_eq!(outcome.reverted.effect.employees_affected, 10);

    for ssn in [200_000_001, 200_000_002, 200_000_003] {
        assert_eq!(
            balance_cents(&mut persistence, ssn, TEST_CURRENT_YEAR),
            Some(100_000)
        );
    }
    assert_eq!(
        persistence
            .count_ledger_entries(ProfitYear::new(TEST_PROFIT_YEAR))
            .unwrap(),
        0
    );
    assert_eq!(
        persistence
            .get_year_update_state(ProfitYear::new(TEST_PROFIT_YEAR))
            .unwrap(),
        YearUpdateState::NotRun
    );
}

#[test]
fn test_revert_leaves_profit_year_etva_as_copied() {
    let mut persistence: Persistence = create_test_persistence();
    seed_scenario_balances(&mut persistence);

    apply_update(&mut persistence, create_test_candidates());
    revert_update(&mut persistence);

    assert_eq!(
        balance_cents(&mut persistence, 200_000_001, TEST_PROFIT_YEAR),
        Some(110_000)
    );
}

#[test]
fn test_year_can_be_applied_again_after_revert() {
    let mut persistence: Persistence = create_test_persistence();
    seed_scenario_balances(&mut persistence);

    apply_update(&mut persistence, create_test_candidates());
    revert_update(&mut persistence);
    let outcome: ApplyOutcome =
        expect_applied(apply_update(&mut persistence, create_test_candidates()));

    assert_eq!(outcome.run_status.effect.transactions_created, 10);
    assert_eq!(
        balance_cents(&mut persistence, 200_000_002, TEST_CURRENT_YEAR),
        Some(105_000)
    );
}
