//! `cybershield` - Cyberbullying incident reporting and case tracking
//!
//! This library provides the core functionality behind the `cshield` tool:
//! validated incident submission, case identifiers, a durable case store with
//! a small status lifecycle, contact-form delivery, and the official
//! reporting directories for Bangladesh.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod case;
pub mod cli;
pub mod config;
pub mod contact;
pub mod error;
pub mod evidence;
pub mod id;
pub mod logging;
pub mod resources;
pub mod service;
pub mod store;
pub mod validate;

pub use case::{CaseRecord, CaseStatus, EvidenceFile};
pub use config::Config;
pub use contact::{ContactGateway, ContactMessage, ContactReceipt, HttpContactGateway};
pub use error::{Error, Result};
pub use id::CaseId;
pub use logging::init_logging;
pub use service::CaseDesk;
pub use store::{CaseStore, CaseStoreStats};
pub use validate::{ContactRejection, Rejection, ReportDraft};
