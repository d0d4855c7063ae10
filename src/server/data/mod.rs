//! Database repository layer for all catalog entities.
//!
//! Repositories use SeaORM entity models internally and return domain models from
//! `server::model`. All queries, inserts, updates and deletes go through these
//! repositories; they report storage failures as `DbErr` and absence as `None`,
//! leaving the translation into catalog errors to the services.

use sea_orm::{DbErr, SqlErr};

pub mod association;
pub mod brand;
pub mod component;
pub mod image;
pub mod server;

/// Whether a write was rejected by a foreign key constraint.
///
/// SQLite enforces `ON DELETE RESTRICT` through an internal trigger, so a blocked
/// parent delete reports a trigger abort instead of a foreign key error code.
pub fn is_foreign_key_violation(err: &DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::ForeignKeyConstraintViolation(_)))
        || err.to_string().contains("FOREIGN KEY constraint failed")
}

#[cfg(test)]
mod test;
