//! `SQLite` schema definitions for the case store.
//!
//! This module contains the SQL statements for creating and managing
//! the database schema.

/// SQL statement to create the cases table.
///
/// One row per case, keyed by the public case identifier. Evidence lists are
/// stored as JSON text so the whole record round-trips exactly, including
/// empty lists and an absent reporter name.
pub const CREATE_CASES_TABLE: &str = r"
CREATE TABLE IF NOT EXISTS cases (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    case_id TEXT NOT NULL UNIQUE,
    is_anonymous INTEGER NOT NULL,
    reporter_name TEXT,
    description TEXT NOT NULL,
    evidence_links TEXT NOT NULL,
    evidence_files TEXT NOT NULL,
    status TEXT NOT NULL,
    created_at TEXT NOT NULL,
    updated_at TEXT
)
";

/// SQL statement to create an index on `case_id` for lookups.
pub const CREATE_CASE_ID_INDEX: &str = r"
CREATE UNIQUE INDEX IF NOT EXISTS idx_cases_case_id ON cases(case_id)
";

/// SQL statement to create an index on `status` for filtering.
pub const CREATE_STATUS_INDEX: &str = r"
CREATE INDEX IF NOT EXISTS idx_cases_status ON cases(status)
";

/// SQL statement to create an index on `created_at` for ordered queries.
pub const CREATE_CREATED_INDEX: &str = r"
CREATE INDEX IF NOT EXISTS idx_cases_created ON cases(created_at DESC)
";

/// SQL statement to create the metadata table for storing key-value pairs.
pub const CREATE_METADATA_TABLE: &str = r"
CREATE TABLE IF NOT EXISTS metadata (
    key TEXT PRIMARY KEY,
    value TEXT NOT NULL
)
";

/// All schema creation statements in order.
pub const SCHEMA_STATEMENTS: &[&str] = &[
    CREATE_CASES_TABLE,
    CREATE_CASE_ID_INDEX,
    CREATE_STATUS_INDEX,
    CREATE_CREATED_INDEX,
    CREATE_METADATA_TABLE,
];
