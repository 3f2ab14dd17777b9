//! Database schema and migrations for KARTEI.
//!
//! This module contains all database migrations that will be applied
//! sequentially when the database is first opened or upgraded.

/// Database migrations.
///
/// Each migration is a SQL script that will be executed in order.
/// The schema_version table tracks which migrations have been applied.
pub const MIGRATIONS: &[&str] = &[
    // v1: Employees table
    r#"
-- Employees table for authentication and staff management
CREATE TABLE employees (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    code        TEXT NOT NULL UNIQUE,    -- human-readable record code, e.g. 'EMP001'
    name        TEXT NOT NULL,
    email       TEXT NOT NULL UNIQUE,
    phone       TEXT,
    role        TEXT NOT NULL DEFAULT 'standard',  -- 'admin', 'standard'
    password    TEXT NOT NULL,           -- Argon2 hash
    created_at  TEXT NOT NULL DEFAULT (datetime('now'))
);

CREATE INDEX idx_employees_role ON employees(role);
"#,
    // v2: Customers table
    r#"
-- Customers table; owner_id points at the employee that created the record
CREATE TABLE customers (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    code        TEXT NOT NULL UNIQUE,    -- human-readable record code, e.g. 'CUST001'
    name        TEXT NOT NULL,
    email       TEXT NOT NULL UNIQUE,
    phone       TEXT,
    owner_id    INTEGER REFERENCES employees(id) ON DELETE SET NULL,
    created_at  TEXT NOT NULL DEFAULT (datetime('now'))
);

CREATE INDEX idx_customers_owner_id ON customers(owner_id);
"#,
    // v3: Record code sequences, one row per collection
    r#"
-- Monotonic per-collection counters backing record code assignment.
-- Updated with a single upsert so allocation is atomic across writers.
CREATE TABLE record_sequences (
    collection  TEXT PRIMARY KEY,
    last_seq    INTEGER NOT NULL DEFAULT 0
);
"#,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_migrations_not_empty() {
        assert!(!MIGRATIONS.is_empty());
    }

    #[test]
    fn test_first_migration_contains_employees_table() {
        let first = MIGRATIONS[0];
        assert!(first.contains("CREATE TABLE employees"));
        assert!(first.contains("code"));
        assert!(first.contains("password"));
        assert!(first.contains("role"));
    }

    #[test]
    fn test_customers_migration_contains_customers_table() {
        let customers_migration = MIGRATIONS[1];
        assert!(customers_migration.contains("CREATE TABLE customers"));
        assert!(customers_migration.contains("owner_id"));
        assert!(customers_migration.contains("ON DELETE SET NULL"));
    }

    #[test]
    fn test_sequences_migration_contains_sequences_table() {
        let sequences_migration = MIGRATIONS[2];
        assert!(sequences_migration.contains("CREATE TABLE record_sequences"));
        assert!(sequences_migration.contains("collection"));
        assert!(sequences_migration.contains("last_seq"));
    }

    #[test]
    fn test_migrations_are_valid_sql() {
        for migration in MIGRATIONS {
            assert!(!migration.trim().is_empty());
            assert!(
                migration.contains("CREATE TABLE")
                    || migration.contains("ALTER TABLE")
                    || migration.contains("CREATE INDEX")
            );
        }
    }
}
