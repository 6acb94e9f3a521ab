// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Database backend-specific code.
//!
//! This module isolates backend-specific initialization, migration,
//! and helper functions that cannot be expressed in backend-agnostic
//! Diesel DSL.
//!
//! ## Backend Support
//!
//! - `sqlite` - `SQLite` backend (default for development and testing)
//! - `mysql` - MySQL/MariaDB backend (validated via opt-in tests)
//!
//! ## Backend-Specific Code
//!
//! Backend-specific code is limited to:
//!
//! - Connection initialization
//! - Migration execution
//! - Backend-specific configuration (e.g., PRAGMA, engine settings)
//! - Set-based running balance updates, which need correlated (`SQLite`)
//!   or joined (`MySQL`) `UPDATE` statements Diesel cannot express
//!
//! All other queries and mutations live in `queries/` and `mutations/`
//! and must work across all supported backends.

pub mod mysql;
pub mod sqlite;

use diesel::{Connection, MysqlConnection, SqliteConnection};
use profit_master_domain::YearPair;

use crate::error::PersistenceError;

/// Direction of an ETVA adjustment on the current-year balances.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EtvaDirection {
    /// Add the profit year's ETVA earnings (apply).
    Add,
    /// Subtract the profit year's ETVA earnings (revert).
    Subtract,
}

impl EtvaDirection {
    /// The SQL arithmetic operator for this direction.
    pub(crate) const fn operator(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
        }
    }

    /// Name used in logs and synchronization errors.
    pub const fn step_name(self) -> &'static str {
        match self {
            Self::Add => "add_current_year_etva",
            Self::Subtract => "subtract_current_year_etva",
        }
    }
}

/// Trait for backend-specific operations.
///
/// This trait provides a unified interface for operations that cannot be
/// expressed in backend-agnostic Diesel DSL, such as retrieving the last
/// inserted row ID or updating balances from an aggregate of ledger rows.
///
/// This trait is implemented for both `SqliteConnection` and `MysqlConnection`,
/// allowing query and mutation functions to be generic over backend type
/// while maintaining a single implementation.
pub trait PersistenceBackend: Connection {
    /// Retrieves the last inserted row ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    fn get_last_insert_rowid(&mut self) -> Result<i64, PersistenceError>;

    /// Verifies that foreign key enforcement is enabled.
    ///
    /// # Errors
    ///
    /// Returns an error if foreign key enforcement is not enabled.
    fn verify_foreign_key_enforcement(&mut self) -> Result<(), PersistenceError>;

    /// Adjusts each current-year ETVA balance by the sum of that person's
    /// 100% vested earnings entries in the profit year.
    ///
    /// People without a current-year balance row are left alone.
    ///
    /// # Errors
    ///
    /// Returns an error if the update fails.
    fn adjust_current_year_etva(
        &mut self,
        years: YearPair,
        direction: EtvaDirection,
    ) -> Result<usize, PersistenceError>;

    /// Copies each qualifying person's current-year ETVA balance onto their
    /// profit-year balance row.
    ///
    /// Only people with both balance rows are touched.
    ///
    /// # Errors
    ///
    /// Returns an error if the update fails.
    fn carry_etva_to_profit_year(&mut self, years: YearPair) -> Result<usize, PersistenceError>;
}

impl PersistenceBackend for SqliteConnection {
    fn get_last_insert_rowid(&mut self) -> Result<i64, PersistenceError> {
        sqlite::get_last_insert_rowid(self)
    }

    fn verify_foreign_key_enforcement(&mut self) -> Result<(), PersistenceError> {
        sqlite::verify_foreign_key_enforcement(self)
    }

    fn adjust_current_year_etva(
        &mut self,
        years: YearPair,
        direction: EtvaDirection,
    ) -> Result<usize, PersistenceError> {
        sqlite::adjust_current_year_etva(self, years, direction)
    }

    fn carry_etva_to_profit_year(&mut self, years: YearPair) -> Result<usize, PersistenceError> {
        sqlite::carry_etva_to_profit_year(self, years)
    }
}

impl PersistenceBackend for MysqlConnection {
    fn get_last_insert_rowid(&mut self) -> Result<i64, PersistenceError> {
        mysql::get_last_insert_rowid(self)
    }

    fn verify_foreign_key_enforcement(&mut self) -> Result<(), PersistenceError> {
        mysql::verify_foreign_key_enforcement(self)
    }

    fn adjust_current_year_etva(
        &mut self,
        years: YearPair,
        direction: EtvaDirection,
    ) -> Result<usize, PersistenceError> {
        mysql::adjust_current_year_etva(self, years, direction)
    }

    fn carry_etva_to_profit_year(&mut self, years: YearPair) -> Result<usize, PersistenceError> {
        mysql::carry_etva_to_profit_year(self, years)
    }
}
