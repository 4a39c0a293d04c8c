//! Core case types for cybershield.
//!
//! This module defines the fundamental data structures for representing
//! submitted incident reports and their lifecycle.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::id::CaseId;

/// Name shown for a reporter who stayed anonymous or gave no name.
pub const ANONYMOUS_NAME: &str = "Anonymous";

/// Lifecycle status of a case.
///
/// A case starts as `Submitted`. The only transition reachable from the
/// reporting interface is escalation to police; moving a case to
/// `In Progress` or `Resolved` is an administrative action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CaseStatus {
    /// Report received, nothing has acted on it yet.
    Submitted,
    /// Reporter asked for the case to be escalated to police.
    Escalated,
    /// A handler has picked the case up.
    #[serde(rename = "In Progress")]
    InProgress,
    /// The case is closed. Terminal.
    Resolved,
}

impl CaseStatus {
    /// Parse a status from its display/storage string.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Submitted" => Some(Self::Submitted),
            "Escalated" => Some(Self::Escalated),
            "In Progress" => Some(Self::InProgress),
            "Resolved" => Some(Self::Resolved),
            _ => None,
        }
    }

    /// Check whether the lifecycle allows moving from this status to `next`.
    ///
    /// Allowed moves: `Submitted` to `Escalated` or `In Progress`, and either
    /// of those to `Resolved`. No transition is reversible and nothing leaves
    /// `Resolved`.
    #[must_use]
    pub fn can_transition_to(self, next: Self) -> bool {
        matches!(
            (self, next),
            (Self::Submitted, Self::Escalated | Self::InProgress)
                | (Self::Escalated | Self::InProgress, Self::Resolved)
        )
    }

    /// Check whether this status is terminal.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Resolved)
    }
}

impl std::fmt::Display for CaseStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Submitted => write!(f, "Submitted"),
            Self::Escalated => write!(f, "Escalated"),
            Self::InProgress => write!(f, "In Progress"),
            Self::Resolved => write!(f, "Resolved"),
        }
    }
}

/// A named piece of evidence attached to a report.
///
/// `reference` is an opaque local handle, such as a path on the reporter's
/// machine. It carries no durability promise; storing actual evidence content
/// requires an external blob store this tool does not provide.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvidenceFile {
    /// Display name of the file.
    pub name: String,
    /// Opaque local handle to the file content.
    pub reference: String,
}

impl EvidenceFile {
    /// Create an evidence file entry.
    #[must_use]
    pub fn new(name: impl Into<String>, reference: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            reference: reference.into(),
        }
    }
}

/// One submitted incident report.
///
/// The `id` is assigned at creation and never changes. `updated_at` is absent
/// until the first status transition and is stamped on every one thereafter,
/// so `created_at <= updated_at` always holds when both are present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseRecord {
    /// Unique case identifier (`CS-` followed by six digits).
    pub id: CaseId,

    /// Whether the reporter chose to stay anonymous.
    pub is_anonymous: bool,

    /// Name the reporter gave, if any. Not meaningful for display when
    /// `is_anonymous` is set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reporter_name: Option<String>,

    /// What happened, in the reporter's words.
    pub description: String,

    /// Evidence URLs, most recently added first.
    pub evidence_links: Vec<String>,

    /// Attached evidence files, insertion order preserved.
    pub evidence_files: Vec<EvidenceFile>,

    /// When the report was submitted.
    pub created_at: DateTime<Utc>,

    /// When the status last changed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,

    /// Where the case sits in its lifecycle.
    pub status: CaseStatus,
}

impl CaseRecord {
    /// Create a new case record with `Submitted` status.
    ///
    /// Sets `created_at` to now and leaves `updated_at` unset.
    #[must_use]
    pub fn new(
        id: CaseId,
        is_anonymous: bool,
        reporter_name: Option<String>,
        description: String,
        evidence_links: Vec<String>,
        evidence_files: Vec<EvidenceFile>,
    ) -> Self {
        Self {
            id,
            is_anonymous,
            reporter_name,
            description,
            evidence_links,
            evidence_files,
            created_at: Utc::now(),
            updated_at: None,
            status: CaseStatus::Submitted,
        }
    }

    /// The name to show for the reporter.
    ///
    /// Falls back to the `"Anonymous"` sentinel when the reporter asked for
    /// anonymity or gave no name.
    #[must_use]
    pub fn display_name(&self) -> &str {
        if self.is_anonymous {
            return ANONYMOUS_NAME;
        }
        self.reporter_name.as_deref().unwrap_or(ANONYMOUS_NAME)
    }

    /// Total number of evidence items (links plus files).
    #[must_use]
    pub fn evidence_count(&self) -> usize {
        self.evidence_links.len() + self.evidence_files.len()
    }
}
