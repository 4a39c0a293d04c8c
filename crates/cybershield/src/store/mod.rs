//! Storage layer for case records.
//!
//! This module provides `SQLite`-based persistent storage for submitted
//! cases, one row per case keyed by the public case identifier. Every
//! mutation touches a single row, so concurrent writers cannot clobber each
//! other's unrelated cases.

pub mod migrations;
pub mod schema;

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension};
use tracing::{debug, info};

use crate::case::{CaseRecord, CaseStatus, EvidenceFile};
use crate::error::{Error, Result};
use crate::id::CaseId;

/// Storage engine for case records.
///
/// Provides persistent storage using `SQLite` with support for:
/// - Appending newly submitted cases
/// - Lookup by case identifier
/// - Status transitions with an `updated_at` stamp
/// - Listing recent cases, newest first
#[derive(Debug)]
pub struct CaseStore {
    /// Path to the database file.
    path: PathBuf,
    /// Database connection.
    conn: Connection,
}

impl CaseStore {
    /// Open or create a case database at the given path.
    ///
    /// Creates the parent directories and database file if they don't exist.
    /// Initializes the schema if this is a new database.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or schema initialization fails.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        // Create parent directories if needed
        if let Some(parent) = path.parent() {
            if !parent.exists() {
                std::fs::create_dir_all(parent).map_err(|source| Error::DirectoryCreate {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
        }

        debug!("Opening case database at {}", path.display());
        let conn = Connection::open(&path).map_err(|source| Error::DatabaseOpen {
            path: path.clone(),
            source,
        })?;

        // Enable WAL mode for better concurrent read performance
        conn.execute_batch("PRAGMA journal_mode=WAL; PRAGMA synchronous=NORMAL;")?;

        // Initialize schema
        migrations::initialize_schema(&conn)?;

        info!("Case database opened at {}", path.display());
        Ok(Self { path, conn })
    }

    /// Create an in-memory store for testing.
    ///
    /// # Errors
    ///
    /// Returns an error if the in-memory database cannot be created.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().map_err(|source| Error::DatabaseOpen {
            path: PathBuf::from(":memory:"),
            source,
        })?;

        migrations::initialize_schema(&conn)?;

        Ok(Self {
            path: PathBuf::from(":memory:"),
            conn,
        })
    }

    /// Get the path to the database file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append a newly submitted case.
    ///
    /// Case identifiers are unique; inserting a record whose `id` already
    /// exists fails with a constraint error rather than replacing anything.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails (duplicate id, quota, I/O).
    pub fn append(&self, record: &CaseRecord) -> Result<()> {
        let links = serde_json::to_string(&record.evidence_links)?;
        let files = serde_json::to_string(&record.evidence_files)?;

        self.conn.execute(
            r"
            INSERT INTO cases (
                case_id, is_anonymous, reporter_name, description,
                evidence_links, evidence_files, status, created_at, updated_at
            )
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
            ",
            params![
                record.id.as_str(),
                record.is_anonymous,
                record.reporter_name,
                record.description,
                links,
                files,
                record.status.to_string(),
                record.created_at.to_rfc3339(),
                record.updated_at.map(|t| t.to_rfc3339()),
            ],
        )?;

        debug!("Appended case {}", record.id);
        Ok(())
    }

    /// Look up a case by its identifier.
    ///
    /// The match is exact on the normalized identifier; a miss is the
    /// ordinary `None` outcome, not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub fn find_by_id(&self, id: &CaseId) -> Result<Option<CaseRecord>> {
        let result = self
            .conn
            .query_row(
                r"
                SELECT case_id, is_anonymous, reporter_name, description,
                       evidence_links, evidence_files, status, created_at, updated_at
                FROM cases WHERE case_id = ?1
                ",
                [id.as_str()],
                Self::row_to_case,
            )
            .optional()?;
        Ok(result)
    }

    /// Set a case's status and stamp `updated_at`.
    ///
    /// Returns the updated record, or `None` (and performs no write) when no
    /// case has the given identifier. The store itself does not police which
    /// transitions are allowed; that is the service's job.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub fn update_status(&self, id: &CaseId, status: CaseStatus) -> Result<Option<CaseRecord>> {
        let updated_at = Utc::now().to_rfc3339();
        let affected = self.conn.execute(
            "UPDATE cases SET status = ?1, updated_at = ?2 WHERE case_id = ?3",
            params![status.to_string(), updated_at, id.as_str()],
        )?;

        if affected == 0 {
            return Ok(None);
        }

        debug!("Case {} moved to {}", id, status);
        self.find_by_id(id)
    }

    /// Get the most recently submitted cases, newest first.
    ///
    /// Ordering follows insertion order, which is reverse chronological.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub fn list_recent(&self, limit: usize) -> Result<Vec<CaseRecord>> {
        let mut stmt = self.conn.prepare(
            r"
            SELECT case_id, is_anonymous, reporter_name, description,
                   evidence_links, evidence_files, status, created_at, updated_at
            FROM cases ORDER BY id DESC LIMIT ?1
            ",
        )?;

        let limit_i64 = i64::try_from(limit).unwrap_or(i64::MAX);
        let cases = stmt
            .query_map([limit_i64], Self::row_to_case)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(cases)
    }

    /// Count total cases in storage.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub fn count(&self) -> Result<i64> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM cases", [], |row| row.get(0))?;
        Ok(count)
    }

    /// Get database statistics.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub fn stats(&self) -> Result<CaseStoreStats> {
        let total_cases = self.count()?;

        let oldest: Option<String> = self
            .conn
            .query_row(
                "SELECT created_at FROM cases ORDER BY created_at ASC LIMIT 1",
                [],
                |row| row.get(0),
            )
            .optional()?;

        let newest: Option<String> = self
            .conn
            .query_row(
                "SELECT created_at FROM cases ORDER BY created_at DESC LIMIT 1",
                [],
                |row| row.get(0),
            )
            .optional()?;

        let oldest_submission = oldest
            .and_then(|s| DateTime::parse_from_rfc3339(&s).ok())
            .map(|dt| dt.with_timezone(&Utc));
        let newest_submission = newest
            .and_then(|s| DateTime::parse_from_rfc3339(&s).ok())
            .map(|dt| dt.with_timezone(&Utc));

        // Get database file size
        let db_size_bytes = if self.path.to_string_lossy() == ":memory:" {
            0
        } else {
            std::fs::metadata(&self.path).map(|m| m.len()).unwrap_or(0)
        };

        Ok(CaseStoreStats {
            total_cases,
            oldest_submission,
            newest_submission,
            db_size_bytes,
        })
    }

    /// Convert a database row to a `CaseRecord`.
    fn row_to_case(row: &rusqlite::Row) -> rusqlite::Result<CaseRecord> {
        let case_id: String = row.get(0)?;
        let is_anonymous: bool = row.get(1)?;
        let reporter_name: Option<String> = row.get(2)?;
        let description: String = row.get(3)?;
        let links_json: String = row.get(4)?;
        let files_json: String = row.get(5)?;
        let status_str: String = row.get(6)?;
        let created_str: String = row.get(7)?;
        let updated_str: Option<String> = row.get(8)?;

        let evidence_links: Vec<String> = serde_json::from_str(&links_json).map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(4, rusqlite::types::Type::Text, Box::new(e))
        })?;
        let evidence_files: Vec<EvidenceFile> = serde_json::from_str(&files_json).map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(5, rusqlite::types::Type::Text, Box::new(e))
        })?;

        let status = CaseStatus::parse(&status_str).ok_or_else(|| {
            rusqlite::Error::FromSqlConversionFailure(
                6,
                rusqlite::types::Type::Text,
                format!("unknown case status: {status_str}").into(),
            )
        })?;

        let created_at = DateTime::parse_from_rfc3339(&created_str)
            .map_or_else(|_| Utc::now(), |dt| dt.with_timezone(&Utc));
        let updated_at = updated_str
            .and_then(|s| DateTime::parse_from_rfc3339(&s).ok())
            .map(|dt| dt.with_timezone(&Utc));

        Ok(CaseRecord {
            id: CaseId::from_stored(case_id),
            is_anonymous,
            reporter_name,
            description,
            evidence_links,
            evidence_files,
            created_at,
            updated_at,
            status,
        })
    }
}

/// Statistics about the case store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseStoreStats {
    /// Total number of cases stored.
    pub total_cases: i64,
    /// Submission time of the oldest case.
    pub oldest_submission: Option<DateTime<Utc>>,
    /// Submission time of the newest case.
    pub newest_submission: Option<DateTime<Utc>>,
    /// Size of the database file in bytes.
    pub db_size_bytes: u64,
}
