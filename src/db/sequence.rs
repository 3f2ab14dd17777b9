//! Record code generation for KARTEI.
//!
//! Codes look like `EMP001` / `CUST042`: a collection prefix followed by a
//! zero-padded sequence number. Allocation must stay unique under
//! concurrent creations, so the counter advance happens in a single upsert
//! statement rather than a read-then-write pair.

use sqlx::SqlitePool;

use crate::{KarteiError, Result};

/// A record collection with its own code space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    /// Staff records (`EMP...`).
    Employees,
    /// Customer records (`CUST...`).
    Customers,
}

impl Collection {
    /// Code prefix for this collection.
    pub fn prefix(&self) -> &'static str {
        match self {
            Collection::Employees => "EMP",
            Collection::Customers => "CUST",
        }
    }

    /// Key identifying this collection in the record_sequences table.
    pub fn key(&self) -> &'static str {
        match self {
            Collection::Employees => "employees",
            Collection::Customers => "customers",
        }
    }
}

/// Format a record code from a prefix and sequence number.
///
/// The suffix is zero-padded to at least three digits and grows as needed
/// beyond 999.
pub fn format_code(prefix: &str, seq: i64) -> String {
    format!("{prefix}{seq:03}")
}

/// Allocates unique record codes, one sequence per collection.
pub struct CodeGenerator<'a> {
    pool: &'a SqlitePool,
}

impl<'a> CodeGenerator<'a> {
    /// Create a new CodeGenerator with the given database pool reference.
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Allocate the next code for a collection.
    ///
    /// The counter advance is a single statement, so two concurrent callers
    /// can never observe the same sequence number.
    pub async fn next_code(&self, collection: Collection) -> Result<String> {
        let seq: i64 = sqlx::query_scalar(
            "INSERT INTO record_sequences (collection, last_seq) VALUES (?, 1)
             ON CONFLICT(collection) DO UPDATE SET last_seq = last_seq + 1
             RETURNING last_seq",
        )
        .bind(collection.key())
        .fetch_one(self.pool)
        .await
        .map_err(|e| KarteiError::Storage(e.to_string()))?;

        Ok(format_code(collection.prefix(), seq))
    }
}

/// Check whether an error is a unique-constraint collision on a record code.
///
/// Used by the create paths to decide between retrying with a fresh code
/// and surfacing the conflict to the caller.
pub fn is_code_collision(err: &KarteiError) -> bool {
    matches!(err, KarteiError::Conflict(msg) if msg.contains("code"))
}
