//! Case identifier type and generation.
//!
//! A case identifier is `CS-` followed by six ASCII digits. Identifiers are
//! drawn uniformly from `100000..=999999`, so a single draw has roughly a
//! 1-in-900,000 chance of colliding with any given existing case. A lone draw
//! is therefore NOT guaranteed unique; callers that persist cases should mint
//! through [`crate::CaseDesk`], which checks the store and redraws on
//! collision.

use std::sync::OnceLock;

use rand::Rng;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Smallest value of the numeric suffix.
pub const MIN_SUFFIX: u32 = 100_000;

/// Largest value of the numeric suffix.
pub const MAX_SUFFIX: u32 = 999_999;

fn id_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    // CS-000000 is a well-formed identifier even though generation never
    // produces a leading zero; it simply never matches a stored case.
    PATTERN.get_or_init(|| Regex::new(r"^CS-[0-9]{6}$").expect("case ID pattern is valid"))
}

/// A case identifier in its normalized form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CaseId(String);

impl CaseId {
    /// Parse user input into a case identifier.
    ///
    /// Trims surrounding whitespace and upper-cases the input before checking
    /// the shape, so `cs-123456` tracks the same case as `CS-123456`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidCaseId`] if the normalized input is not `CS-`
    /// followed by exactly six digits.
    pub fn parse(input: &str) -> Result<Self> {
        let normalized = input.trim().to_ascii_uppercase();
        if id_pattern().is_match(&normalized) {
            Ok(Self(normalized))
        } else {
            Err(Error::invalid_case_id(input))
        }
    }

    /// Draw a fresh candidate identifier.
    ///
    /// The draw is uniform over the full suffix range and performs no
    /// uniqueness check against any store.
    #[must_use]
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self(format!("CS-{}", rng.gen_range(MIN_SUFFIX..=MAX_SUFFIX)))
    }

    /// Rehydrate an identifier that was previously stored in normalized form.
    pub(crate) fn from_stored(raw: String) -> Self {
        Self(raw)
    }

    /// The identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CaseId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
