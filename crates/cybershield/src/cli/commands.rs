//! CLI command definitions.
//!
//! This module defines the structure of all CLI subcommands.

use std::path::PathBuf;

use clap::{Args, Subcommand, ValueEnum};

use crate::case::CaseStatus;

/// Submit command arguments.
///
/// There is intentionally no flag for the validation gate's honeypot field;
/// it must never be surfaced to users and the CLI always leaves it empty.
#[derive(Debug, Args)]
pub struct SubmitCommand {
    /// What happened, in your own words
    #[arg(short, long)]
    pub description: String,

    /// Your name (omit to stay unnamed)
    #[arg(short, long)]
    pub name: Option<String>,

    /// Submit anonymously; any name given is not shown
    #[arg(short, long)]
    pub anonymous: bool,

    /// Evidence URL (repeatable; give the newest first)
    #[arg(short = 'l', long = "link", value_name = "URL")]
    pub links: Vec<String>,

    /// Evidence file to reference (repeatable; the file itself is not copied)
    #[arg(short = 'e', long = "evidence", value_name = "FILE")]
    pub evidence: Vec<PathBuf>,

    /// Output as JSON
    #[arg(short, long)]
    pub json: bool,
}

/// Track command arguments.
#[derive(Debug, Args)]
pub struct TrackCommand {
    /// The case ID you were given (e.g. CS-123456)
    pub case_id: String,

    /// Output as JSON
    #[arg(short, long)]
    pub json: bool,
}

/// Escalate command arguments.
#[derive(Debug, Args)]
pub struct EscalateCommand {
    /// The case ID to escalate to police
    pub case_id: String,

    /// Output as JSON
    #[arg(short, long)]
    pub json: bool,
}

/// Set-status command arguments (administrative).
#[derive(Debug, Args)]
pub struct SetStatusCommand {
    /// The case ID to update
    pub case_id: String,

    /// The status to move the case to
    #[arg(value_enum)]
    pub status: CaseStatusArg,

    /// Output as JSON
    #[arg(short, long)]
    pub json: bool,
}

/// Recent command arguments.
#[derive(Debug, Args)]
pub struct RecentCommand {
    /// Maximum number of cases to list (defaults to the configured limit)
    #[arg(short, long)]
    pub limit: Option<usize>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,
}

/// Contact command arguments.
#[derive(Debug, Args)]
pub struct ContactCommand {
    /// Your name
    #[arg(long)]
    pub name: String,

    /// Your email address (optional)
    #[arg(long)]
    pub email: Option<String>,

    /// Your phone number (optional)
    #[arg(long)]
    pub phone: Option<String>,

    /// The message to send
    #[arg(short, long)]
    pub message: String,
}

/// Reference directory commands.
#[derive(Debug, Subcommand)]
pub enum ResourcesCommand {
    /// Official reporting hotlines for Bangladesh
    Hotlines {
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Abuse-reporting links for major platforms
    Platforms {
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Evidence-pack checklist
    Checklist,
}

/// Evidence tooling commands.
#[derive(Debug, Subcommand)]
pub enum EvidenceCommand {
    /// Print content fingerprints for evidence files
    Hash {
        /// Files to fingerprint
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
}

/// Status command arguments.
#[derive(Debug, Args)]
pub struct StatusCommand {
    /// Output as JSON
    #[arg(short, long)]
    pub json: bool,
}

/// Configuration commands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show {
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Show the configuration file path
    Path,

    /// Validate configuration
    Validate {
        /// Path to configuration file to validate
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
}

/// Case status argument for the administrative set-status command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CaseStatusArg {
    /// Freshly submitted
    Submitted,
    /// Escalated to police
    Escalated,
    /// Being handled
    InProgress,
    /// Closed
    Resolved,
}

impl From<CaseStatusArg> for CaseStatus {
    fn from(arg: CaseStatusArg) -> Self {
        match arg {
            CaseStatusArg::Submitted => Self::Submitted,
            CaseStatusArg::Escalated => Self::Escalated,
            CaseStatusArg::InProgress => Self::InProgress,
            CaseStatusArg::Resolved => Self::Resolved,
        }
    }
}

/// Output format for listing commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Plain text output
    #[default]
    Plain,
    /// Formatted table
    Table,
    /// JSON output
    Json,
}
