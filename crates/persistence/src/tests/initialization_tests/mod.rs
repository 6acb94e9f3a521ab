// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Backend initialization tests.
//!
//! Every other persistence test also relies on migrations and foreign key
//! enforcement through `Persistence::new_in_memory()`; these cover the
//! seeded reference data and isolation explicitly.

use profit_master_domain::{
    ProfitCodeFrequency, ProfitCodeId, ProfitCodeTable, ProfitYear, YearUpdateState,
};

use crate::{Persistence, PersistenceError};

#[test]
fn test_persistence_initialization() {
    let result: Result<Persistence, PersistenceError> = Persistence::new_in_memory();
    assert!(result.is_ok());
}

#[test]
fn test_foreign_key_enforcement_is_enabled() {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();
    assert!(persistence.verify_foreign_key_enforcement().is_ok());
}

#[test]
fn test_profit_code_table_is_seeded() {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();

    let table: ProfitCodeTable = persistence.get_profit_code_table().unwrap();

    assert_eq!(table.len(), 8);
    assert_eq!(
        table
            .lookup(ProfitCodeId::INCOMING_CONTRIBUTIONS)
            .unwrap()
            .frequency,
        ProfitCodeFrequency::YearEndOnly
    );
    assert_eq!(
        table
            .lookup(ProfitCodeId::OUTGOING_FORFEITURES)
            .unwrap()
            .frequency,
        ProfitCodeFrequency::MultipleTimes
    );
    assert!(table.lookup(ProfitCodeId::new(4)).is_err());
}

#[test]
fn test_fresh_database_has_no_runs() {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();

    let state: YearUpdateState = persistence
        .get_year_update_state(ProfitYear::new(2024))
        .unwrap();

    assert_eq!(state, YearUpdateState::NotRun);
}

#[test]
fn test_multiple_in_memory_instances_are_isolated() {
    let mut db1: Persistence = Persistence::new_in_memory().unwrap();
    let mut db2: Persistence = Persistence::new_in_memory().unwrap();

    db1.freeze_profit_year(&super::create_test_frozen_snapshot(2024))
        .unwrap();

    assert!(db1.get_active_frozen_snapshot().unwrap().is_some());
    assert!(
        db2.get_active_frozen_snapshot().unwrap().is_none(),
        "db2 must not see db1's freeze"
    );
}

#[test]
fn test_file_backed_database_persists_across_connections() {
    let dir: std::path::PathBuf = std::env::temp_dir().join(format!(
        "profit_master_init_test_{}",
        std::process::id()
    ));
    std::fs::create_dir_all(&dir).unwrap();
    let path: std::path::PathBuf = dir.join("profit_master.db");
    let _ = std::fs::remove_file(&path);

    {
        let mut first: Persistence = Persistence::new_with_file(&path).unwrap();
        first
            .freeze_profit_year(&super::create_test_frozen_snapshot(2024))
            .unwrap();
    }
    let mut second: Persistence = Persistence::new_with_file(&path).unwrap();

    assert!(second.get_active_frozen_snapshot().unwrap().is_some());
    let _ = std::fs::remove_dir_all(&dir);
}
