// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use profit_master_domain::{FrozenSnapshot, ProfitYear};

use super::create_test_frozen_snapshot;
use crate::Persistence;

#[test]
fn test_no_active_snapshot_before_first_freeze() {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();

    let active: Option<FrozenSnapshot> = persistence.get_active_frozen_snapshot().unwrap();

    assert!(active.is_none());
}

#[test]
fn test_freeze_round_trips_snapshot() {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();
    let snapshot: FrozenSnapshot = create_test_frozen_snapshot(2024);

    let frozen_state_id: i64 = persistence.freeze_profit_year(&snapshot).unwrap();

    assert!(frozen_state_id > 0);
    assert_eq!(
        persistence.get_active_frozen_snapshot().unwrap(),
        Some(snapshot)
    );
}

#[test]
fn test_new_freeze_replaces_the_active_snapshot() {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();
    let first_id: i64 = persistence
        .freeze_profit_year(&create_test_frozen_snapshot(2024))
        .unwrap();

    let second: FrozenSnapshot = create_test_frozen_snapshot(2025);
    let second_id: i64 = persistence.freeze_profit_year(&second).unwrap();

    assert!(second_id > first_id);
    let active: FrozenSnapshot = persistence.get_active_frozen_snapshot().unwrap().unwrap();
    assert_eq!(active.profit_year, ProfitYear::new(2025));
    assert!(active.is_active);
}

#[test]
fn test_refreezing_same_year_keeps_latest_as_of() {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();
    persistence
        .freeze_profit_year(&create_test_frozen_snapshot(2024))
        .unwrap();

    let mut later: FrozenSnapshot = create_test_frozen_snapshot(2024);
    later.as_of = time::macros::datetime!(2025-01-10 00:00 UTC);
    later.frozen_by = String::from("fm-002");
    persistence.freeze_profit_year(&later).unwrap();

    assert_eq!(
        persistence.get_active_frozen_snapshot().unwrap(),
        Some(later)
    );
}
