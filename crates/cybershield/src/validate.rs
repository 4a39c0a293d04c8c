//! Validation gate for incoming submissions.
//!
//! Both submission paths (incident report and contact message) run through a
//! pure validator before anything is persisted or sent. Rules are evaluated
//! in a fixed order and the first failure wins; validation itself has no side
//! effects.

use thiserror::Error;

use crate::case::EvidenceFile;

/// Longest reporter name accepted, in characters.
pub const MAX_REPORTER_NAME_CHARS: usize = 80;

/// Shortest incident description accepted after trimming, in characters.
pub const MIN_DESCRIPTION_CHARS: usize = 10;

/// Shortest contact message accepted after trimming, in characters.
pub const MIN_MESSAGE_CHARS: usize = 10;

/// Why a report submission was turned away.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Rejection {
    /// The honeypot field was filled in; no human should ever see it.
    #[error("automated submission suspected")]
    AutomatedSubmission,
    /// A non-anonymous reporter gave a name over the length limit.
    #[error("name too long")]
    NameTooLong,
    /// The trimmed description is under the minimum length.
    #[error("description too short")]
    DescriptionTooShort,
}

/// Why a contact message was turned away.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ContactRejection {
    /// The honeypot field was filled in.
    #[error("automated submission suspected")]
    AutomatedSubmission,
    /// The trimmed message is under the minimum length.
    #[error("message too short")]
    MessageTooShort,
    /// An email address was supplied but does not look like one.
    #[error("invalid email address")]
    InvalidEmail,
}

/// A candidate incident report, as collected from a form.
///
/// `honeypot` corresponds to a form field that is invisible to human users
/// and must stay empty; it exists only to trip automated submitters. It is
/// deliberately not exposed anywhere in the CLI.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportDraft {
    /// Hidden bot-trap field; any content here rejects the submission.
    pub honeypot: String,
    /// Whether the reporter wants to stay anonymous.
    pub is_anonymous: bool,
    /// Name the reporter gave, if any.
    pub reporter_name: Option<String>,
    /// What happened.
    pub description: String,
    /// Evidence URLs, most recently added first.
    pub evidence_links: Vec<String>,
    /// Attached evidence files.
    pub evidence_files: Vec<EvidenceFile>,
}

/// Check a report draft against the submission rules.
///
/// Rules in order, first failure wins: honeypot must be empty; a
/// non-anonymous name may not exceed [`MAX_REPORTER_NAME_CHARS`]; the
/// description must be at least [`MIN_DESCRIPTION_CHARS`] characters after
/// trimming.
///
/// # Errors
///
/// Returns the [`Rejection`] for the first rule that failed.
pub fn validate_report(draft: &ReportDraft) -> Result<(), Rejection> {
    if !draft.honeypot.is_empty() {
        return Err(Rejection::AutomatedSubmission);
    }

    if !draft.is_anonymous {
        if let Some(name) = &draft.reporter_name {
            if name.chars().count() > MAX_REPORTER_NAME_CHARS {
                return Err(Rejection::NameTooLong);
            }
        }
    }

    if draft.description.trim().chars().count() < MIN_DESCRIPTION_CHARS {
        return Err(Rejection::DescriptionTooShort);
    }

    Ok(())
}

/// Check a contact submission against the contact-form rules.
///
/// Rules in order: honeypot must be empty; the message must be at least
/// [`MIN_MESSAGE_CHARS`] characters after trimming; a non-empty email must
/// pass the shape check. An empty email is allowed and skips the check.
///
/// # Errors
///
/// Returns the [`ContactRejection`] for the first rule that failed.
pub fn validate_contact(honeypot: &str, email: &str, message: &str) -> Result<(), ContactRejection> {
    if !honeypot.is_empty() {
        return Err(ContactRejection::AutomatedSubmission);
    }

    if message.trim().chars().count() < MIN_MESSAGE_CHARS {
        return Err(ContactRejection::MessageTooShort);
    }

    if !email.is_empty() && !email_shape_ok(email) {
        return Err(ContactRejection::InvalidEmail);
    }

    Ok(())
}

/// Syntactic email check: an `@`, a `.` somewhere after it, no whitespace.
///
/// This is deliberately a shape check, not RFC validation; the contact
/// endpoint is the authority on deliverability.
fn email_shape_ok(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    match email.find('@') {
        Some(at) => email[at + 1..].contains('.'),
        None => false,
    }
}
