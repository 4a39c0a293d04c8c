//! Case desk: the operations the reporting interface calls.
//!
//! [`CaseDesk`] ties the validation gate, identifier minting, and the case
//! store together. Every operation runs synchronously to completion; there is
//! no background work anywhere in the reporting path.

use tracing::{info, warn};

use crate::case::{CaseRecord, CaseStatus};
use crate::error::{Error, Result};
use crate::id::CaseId;
use crate::store::CaseStore;
use crate::validate::{validate_report, ReportDraft};

/// Default number of identifier draws before giving up.
///
/// At demo-scale store sizes a single draw collides about once in 900,000, so
/// even two draws are overkill; the bound exists so a pathologically full
/// store fails loudly instead of looping.
pub const DEFAULT_MINT_ATTEMPTS: usize = 16;

/// The front desk for incident reports.
#[derive(Debug)]
pub struct CaseDesk {
    store: CaseStore,
    mint_attempts: usize,
}

impl CaseDesk {
    /// Create a desk over the given store.
    #[must_use]
    pub fn new(store: CaseStore) -> Self {
        Self::with_mint_attempts(store, DEFAULT_MINT_ATTEMPTS)
    }

    /// Create a desk with a custom identifier-minting retry bound.
    #[must_use]
    pub fn with_mint_attempts(store: CaseStore, mint_attempts: usize) -> Self {
        Self {
            store,
            mint_attempts,
        }
    }

    /// Access the underlying store.
    #[must_use]
    pub fn store(&self) -> &CaseStore {
        &self.store
    }

    /// Submit an incident report.
    ///
    /// Runs the validation gate, mints an unused case identifier, and
    /// persists a new record with `Submitted` status. Nothing is written when
    /// validation rejects the draft.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Rejected`] when the draft fails validation,
    /// [`Error::IdSpaceExhausted`] when no unused identifier could be minted,
    /// or a storage error if the write fails.
    pub fn submit_report(&self, draft: ReportDraft) -> Result<CaseRecord> {
        if let Err(rejection) = validate_report(&draft) {
            warn!(reason = %rejection, "Report rejected");
            return Err(Error::Rejected(rejection));
        }

        let id = self.mint_id()?;
        let record = CaseRecord::new(
            id,
            draft.is_anonymous,
            draft.reporter_name,
            draft.description,
            draft.evidence_links,
            draft.evidence_files,
        );
        self.store.append(&record)?;

        info!(id = %record.id, "Report submitted");
        Ok(record)
    }

    /// Look up a case by identifier.
    ///
    /// # Errors
    ///
    /// Returns an error if the store lookup fails.
    pub fn track_case(&self, id: &CaseId) -> Result<Option<CaseRecord>> {
        self.store.find_by_id(id)
    }

    /// Escalate a submitted case to police.
    ///
    /// This is the one transition reachable from the reporting interface.
    /// Returns `None` when no case has the identifier.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidTransition`] when the case exists but is not
    /// in `Submitted` status, or a storage error if the write fails.
    pub fn escalate_case(&self, id: &CaseId) -> Result<Option<CaseRecord>> {
        self.set_status(id, CaseStatus::Escalated)
    }

    /// Move a case to a new status. Administrative path.
    ///
    /// Returns `None` when no case has the identifier; otherwise enforces the
    /// lifecycle before writing.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidTransition`] when the lifecycle forbids the
    /// move, or a storage error if the write fails.
    pub fn set_status(&self, id: &CaseId, status: CaseStatus) -> Result<Option<CaseRecord>> {
        let current = match self.store.find_by_id(id)? {
            Some(record) => record,
            None => return Ok(None),
        };

        if !current.status.can_transition_to(status) {
            return Err(Error::InvalidTransition {
                from: current.status,
                to: status,
            });
        }

        self.store.update_status(id, status)
    }

    /// List the most recently submitted cases, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the store query fails.
    pub fn list_recent(&self, limit: usize) -> Result<Vec<CaseRecord>> {
        self.store.list_recent(limit)
    }

    /// Draw case identifiers until one is unused in the store.
    fn mint_id(&self) -> Result<CaseId> {
        let mut rng = rand::thread_rng();
        for _ in 0..self.mint_attempts {
            let candidate = CaseId::generate(&mut rng);
            if self.store.find_by_id(&candidate)?.is_none() {
                return Ok(candidate);
            }
            warn!(id = %candidate, "Case ID collision, redrawing");
        }
        Err(Error::IdSpaceExhausted {
            attempts: self.mint_attempts,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_desk() -> CaseDesk {
        CaseDesk::new(CaseStore::open_in_memory().expect("failed to create test store"))
    }

    fn valid_draft() -> ReportDraft {
        ReportDraft {
            honeypot: String::new(),
            is_anonymous: false,
            reporter_name: Some("Rina".to_string()),
            description: "Someone is threatening me on Facebook with fake photos.".to_string(),
            evidence_links: Vec::new(),
            evidence_files: Vec::new(),
        }
    }

    #[test]
    fn test_submit_creates_submitted_record() {
        let desk = create_test_desk();
        let record = desk.submit_report(valid_draft()).unwrap();

        assert_eq!(record.status, CaseStatus::Submitted);
        assert!(record.updated_at.is_none());
        assert_eq!(record.display_name(), "Rina");

        // Generated id matches CS- followed by six digits.
        let id = record.id.as_str();
        assert!(id.starts_with("CS-"));
        assert_eq!(id.len(), 9);
        assert!(id[3..].chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_submit_then_track() {
        let desk = create_test_desk();
        let record = desk.submit_report(valid_draft()).unwrap();

        let tracked = desk.track_case(&record.id).unwrap();
        assert_eq!(tracked, Some(record));
    }

    #[test]
    fn test_track_unknown_id() {
        let desk = create_test_desk();
        let missing = desk
            .track_case(&CaseId::parse("CS-000000").unwrap())
            .unwrap();
        assert!(missing.is_none());
    }

    #[test]
    fn test_end_to_end_submit_escalate() {
        let desk = create_test_desk();
        let record = desk.submit_report(valid_draft()).unwrap();

        let escalated = desk.escalate_case(&record.id).unwrap().unwrap();
        assert_eq!(escalated.status, CaseStatus::Escalated);

        let updated_at = escalated.updated_at.expect("updated_at set by escalation");
        assert!(updated_at >= escalated.created_at);
    }

    #[test]
    fn test_escalate_unknown_id() {
        let desk = create_test_desk();
        desk.submit_report(valid_draft()).unwrap();

        let result = desk
            .escalate_case(&CaseId::parse("CS-000000").unwrap())
            .unwrap();
        assert!(result.is_none());
        assert_eq!(desk.store().count().unwrap(), 1);
    }

    #[test]
    fn test_escalate_twice_is_invalid() {
        let desk = create_test_desk();
        let record = desk.submit_report(valid_draft()).unwrap();

        desk.escalate_case(&record.id).unwrap();
        let second = desk.escalate_case(&record.id);
        assert!(matches!(
            second,
            Err(Error::InvalidTransition {
                from: CaseStatus::Escalated,
                to: CaseStatus::Escalated,
            })
        ));
    }

    #[test]
    fn test_rejected_submission_writes_nothing() {
        let desk = create_test_desk();
        let mut draft = valid_draft();
        draft.description = "short".to_string();

        let result = desk.submit_report(draft);
        assert!(matches!(
            result,
            Err(Error::Rejected(
                crate::validate::Rejection::DescriptionTooShort
            ))
        ));
        assert_eq!(desk.store().count().unwrap(), 0);
    }

    #[test]
    fn test_honeypot_submission_writes_nothing() {
        let desk = create_test_desk();
        let mut draft = valid_draft();
        draft.honeypot = "filled by a bot".to_string();

        let result = desk.submit_report(draft);
        assert!(matches!(
            result,
            Err(Error::Rejected(
                crate::validate::Rejection::AutomatedSubmission
            ))
        ));
        assert_eq!(desk.store().count().unwrap(), 0);
    }

    #[test]
    fn test_submitted_ids_are_distinct() {
        let desk = create_test_desk();
        let a = desk.submit_report(valid_draft()).unwrap();
        let b = desk.submit_report(valid_draft()).unwrap();
        let c = desk.submit_report(valid_draft()).unwrap();

        assert_ne!(a.id, b.id);
        assert_ne!(a.id, c.id);
        assert_ne!(b.id, c.id);
    }

    #[test]
    fn test_set_status_full_lifecycle() {
        let desk = create_test_desk();
        let record = desk.submit_report(valid_draft()).unwrap();

        let in_progress = desk
            .set_status(&record.id, CaseStatus::InProgress)
            .unwrap()
            .unwrap();
        assert_eq!(in_progress.status, CaseStatus::InProgress);

        let resolved = desk
            .set_status(&record.id, CaseStatus::Resolved)
            .unwrap()
            .unwrap();
        assert_eq!(resolved.status, CaseStatus::Resolved);

        // Terminal: nothing moves out of Resolved.
        let reopened = desk.set_status(&record.id, CaseStatus::Submitted);
        assert!(matches!(reopened, Err(Error::InvalidTransition { .. })));
    }

    #[test]
    fn test_set_status_unknown_id() {
        let desk = create_test_desk();
        let result = desk
            .set_status(
                &CaseId::parse("CS-000000").unwrap(),
                CaseStatus::InProgress,
            )
            .unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_list_recent_orders_newest_first() {
        let desk = create_test_desk();
        let a = desk.submit_report(valid_draft()).unwrap();
        let b = desk.submit_report(valid_draft()).unwrap();

        let recent = desk.list_recent(10).unwrap();
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].id, b.id);
        assert_eq!(recent[1].id, a.id);
    }

    #[test]
    fn test_anonymous_submission() {
        let desk = create_test_desk();
        let draft = ReportDraft {
            is_anonymous: true,
            reporter_name: None,
            ..valid_draft()
        };

        let record = desk.submit_report(draft).unwrap();
        assert!(record.is_anonymous);
        assert_eq!(record.display_name(), "Anonymous");
    }
}
