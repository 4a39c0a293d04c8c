//! Command-line interface for cybershield.
//!
//! This module provides the CLI structure and command handlers for the
//! `cshield` binary.

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use commands::{
    CaseStatusArg, ConfigCommand, ContactCommand, EscalateCommand, EvidenceCommand, OutputFormat,
    RecentCommand, ResourcesCommand, SetStatusCommand, StatusCommand, SubmitCommand, TrackCommand,
};

/// cshield - Report cyberbullying and track your case
///
/// A toolkit for submitting cyberbullying incident reports, tracking them by
/// case ID, escalating to police, and finding official reporting channels in
/// Bangladesh.
#[derive(Debug, Parser)]
#[command(name = "cshield")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to custom configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// The command to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Submit an incident report
    Submit(SubmitCommand),

    /// Look up a case by its ID
    Track(TrackCommand),

    /// Escalate a submitted case to police
    Escalate(EscalateCommand),

    /// Move a case to a new status (administrative)
    SetStatus(SetStatusCommand),

    /// List recently submitted cases
    Recent(RecentCommand),

    /// Send a message to the support team
    Contact(ContactCommand),

    /// Reporting hotlines, platform links, and the evidence checklist
    #[command(subcommand)]
    Resources(ResourcesCommand),

    /// Evidence tooling
    #[command(subcommand)]
    Evidence(EvidenceCommand),

    /// Show case database status
    Status(StatusCommand),

    /// View or validate configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

impl Cli {
    /// Get the verbosity level based on flags.
    #[must_use]
    pub fn verbosity(&self) -> crate::logging::Verbosity {
        if self.quiet {
            crate::logging::Verbosity::Quiet
        } else {
            match self.verbose {
                0 => crate::logging::Verbosity::Normal,
                1 => crate::logging::Verbosity::Verbose,
                _ => crate::logging::Verbosity::Trace,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_name() {
        let cli = Cli::command();
        assert_eq!(cli.get_name(), "cshield");
    }

    #[test]
    fn test_cli_verify() {
        // Verify the CLI structure is valid
        Cli::command().debug_assert();
    }

    #[test]
    fn test_verbosity_quiet() {
        let cli = Cli {
            config: None,
            verbose: 0,
            quiet: true,
            command: Command::Status(StatusCommand { json: false }),
        };
        assert_eq!(cli.verbosity(), crate::logging::Verbosity::Quiet);
    }

    #[test]
    fn test_verbosity_normal() {
        let cli = Cli {
            config: None,
            verbose: 0,
            quiet: false,
            command: Command::Status(StatusCommand { json: false }),
        };
        assert_eq!(cli.verbosity(), crate::logging::Verbosity::Normal);
    }

    #[test]
    fn test_verbosity_verbose_and_trace() {
        let cli = Cli {
            config: None,
            verbose: 1,
            quiet: false,
            command: Command::Status(StatusCommand { json: false }),
        };
        assert_eq!(cli.verbosity(), crate::logging::Verbosity::Verbose);

        let cli = Cli {
            config: None,
            verbose: 3,
            quiet: false,
            command: Command::Status(StatusCommand { json: false }),
        };
        assert_eq!(cli.verbosity(), crate::logging::Verbosity::Trace);
    }

    #[test]
    fn test_parse_submit() {
        let args = vec![
            "cshield",
            "submit",
            "-d",
            "Someone is threatening me on Facebook.",
            "--name",
            "Rina",
            "--link",
            "https://facebook.com/some-post",
        ];
        let cli = Cli::try_parse_from(args).unwrap();
        match cli.command {
            Command::Submit(cmd) => {
                assert_eq!(cmd.name.as_deref(), Some("Rina"));
                assert_eq!(cmd.links.len(), 1);
                assert!(!cmd.anonymous);
            }
            other => panic!("expected submit, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_submit_anonymous() {
        let args = vec!["cshield", "submit", "-d", "A long description here.", "-a"];
        let cli = Cli::try_parse_from(args).unwrap();
        assert!(matches!(
            cli.command,
            Command::Submit(SubmitCommand {
                anonymous: true,
                ..
            })
        ));
    }

    #[test]
    fn test_parse_track() {
        let args = vec!["cshield", "track", "CS-123456"];
        let cli = Cli::try_parse_from(args).unwrap();
        match cli.command {
            Command::Track(cmd) => assert_eq!(cmd.case_id, "CS-123456"),
            other => panic!("expected track, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_escalate() {
        let args = vec!["cshield", "escalate", "CS-123456"];
        let cli = Cli::try_parse_from(args).unwrap();
        assert!(matches!(cli.command, Command::Escalate(_)));
    }

    #[test]
    fn test_parse_set_status() {
        let args = vec!["cshield", "set-status", "CS-123456", "resolved"];
        let cli = Cli::try_parse_from(args).unwrap();
        match cli.command {
            Command::SetStatus(cmd) => {
                assert_eq!(cmd.status, CaseStatusArg::Resolved);
            }
            other => panic!("expected set-status, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_recent_with_limit() {
        let args = vec!["cshield", "recent", "--limit", "5", "--format", "json"];
        let cli = Cli::try_parse_from(args).unwrap();
        match cli.command {
            Command::Recent(cmd) => {
                assert_eq!(cmd.limit, Some(5));
                assert_eq!(cmd.format, OutputFormat::Json);
            }
            other => panic!("expected recent, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_contact() {
        let args = vec![
            "cshield",
            "contact",
            "--name",
            "Rina",
            "--message",
            "I need help with a takedown.",
        ];
        let cli = Cli::try_parse_from(args).unwrap();
        match cli.command {
            Command::Contact(cmd) => {
                assert_eq!(cmd.name, "Rina");
                assert!(cmd.email.is_none());
            }
            other => panic!("expected contact, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_resources_hotlines() {
        let args = vec!["cshield", "resources", "hotlines"];
        let cli = Cli::try_parse_from(args).unwrap();
        assert!(matches!(
            cli.command,
            Command::Resources(ResourcesCommand::Hotlines { json: false })
        ));
    }

    #[test]
    fn test_parse_evidence_hash() {
        let args = vec!["cshield", "evidence", "hash", "shot.png", "chat.zip"];
        let cli = Cli::try_parse_from(args).unwrap();
        match cli.command {
            Command::Evidence(EvidenceCommand::Hash { files }) => {
                assert_eq!(files.len(), 2);
            }
            other => panic!("expected evidence hash, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_evidence_hash_requires_files() {
        let args = vec!["cshield", "evidence", "hash"];
        assert!(Cli::try_parse_from(args).is_err());
    }

    #[test]
    fn test_parse_with_config() {
        let args = vec!["cshield", "-c", "/custom/config.toml", "status"];
        let cli = Cli::try_parse_from(args).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/custom/config.toml")));
    }

    #[test]
    fn test_parse_with_quiet() {
        let args = vec!["cshield", "-q", "status"];
        let cli = Cli::try_parse_from(args).unwrap();
        assert!(cli.quiet);
    }
}
