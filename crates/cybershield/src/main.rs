//! `cshield` - CLI for cybershield
//!
//! This binary provides the command-line interface for submitting incident
//! reports, tracking cases, and reaching official reporting channels.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use anyhow::Result;
use clap::Parser;

use cybershield::cli::{
    Cli, Command, ConfigCommand, ContactCommand, EscalateCommand, EvidenceCommand, OutputFormat,
    RecentCommand, ResourcesCommand, SetStatusCommand, StatusCommand, SubmitCommand, TrackCommand,
};
use cybershield::contact::ContactGateway;
use cybershield::resources::{EVIDENCE_CHECKLIST, HOTLINES, PLATFORM_LINKS};
use cybershield::validate::validate_contact;
use cybershield::{
    init_logging, CaseDesk, CaseId, CaseRecord, CaseStore, Config, ContactMessage, Error,
    EvidenceFile, HttpContactGateway, ReportDraft,
};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    init_logging(cli.verbosity());

    // Load configuration
    let config = Config::load_from(cli.config.clone())?;

    // Execute the command
    match cli.command {
        Command::Submit(cmd) => handle_submit(&config, cmd),
        Command::Track(cmd) => handle_track(&config, &cmd),
        Command::Escalate(cmd) => handle_escalate(&config, &cmd),
        Command::SetStatus(cmd) => handle_set_status(&config, &cmd),
        Command::Recent(cmd) => handle_recent(&config, &cmd),
        Command::Contact(cmd) => handle_contact(&config, cmd),
        Command::Resources(cmd) => handle_resources(&cmd),
        Command::Evidence(cmd) => handle_evidence(&cmd),
        Command::Status(cmd) => handle_status(&config, &cmd),
        Command::Config(cmd) => handle_config(&config, cmd),
    }
}

fn open_desk(config: &Config) -> Result<CaseDesk> {
    let store = CaseStore::open(config.database_path())?;
    Ok(CaseDesk::with_mint_attempts(
        store,
        config.tracker.id_mint_attempts,
    ))
}

/// Parse user input into a case ID, printing guidance on failure.
fn parse_case_id(input: &str) -> Option<CaseId> {
    match CaseId::parse(input) {
        Ok(id) => Some(id),
        Err(err) => {
            println!("{err}");
            println!("Case IDs look like CS-123456.");
            None
        }
    }
}

fn handle_submit(config: &Config, cmd: SubmitCommand) -> Result<()> {
    let desk = open_desk(config)?;

    let evidence_files = cmd
        .evidence
        .iter()
        .map(|path| {
            let name = path.file_name().map_or_else(
                || path.display().to_string(),
                |n| n.to_string_lossy().into_owned(),
            );
            // The reference is a local handle only; the file content is not
            // copied anywhere.
            EvidenceFile::new(name, path.display().to_string())
        })
        .collect();

    let draft = ReportDraft {
        honeypot: String::new(),
        is_anonymous: cmd.anonymous,
        reporter_name: cmd.name,
        description: cmd.description,
        evidence_links: cmd.links,
        evidence_files,
    };

    match desk.submit_report(draft) {
        Ok(record) => {
            if cmd.json {
                println!("{}", serde_json::to_string_pretty(&record)?);
            } else {
                println!("Report received.");
                println!("Case ID: {}", record.id);
                println!();
                println!("Keep this ID; you need it to track or escalate the case.");
            }
            Ok(())
        }
        Err(err) if err.is_rejection() => {
            println!("{err}");
            Ok(())
        }
        Err(err) => Err(err.into()),
    }
}

fn handle_track(config: &Config, cmd: &TrackCommand) -> Result<()> {
    let id = match parse_case_id(&cmd.case_id) {
        Some(id) => id,
        None => return Ok(()),
    };

    let desk = open_desk(config)?;
    match desk.track_case(&id)? {
        Some(record) => {
            if cmd.json {
                println!("{}", serde_json::to_string_pretty(&record)?);
            } else {
                print_case(&record);
            }
        }
        None => println!("No matching case found for {id}."),
    }
    Ok(())
}

fn handle_escalate(config: &Config, cmd: &EscalateCommand) -> Result<()> {
    let id = match parse_case_id(&cmd.case_id) {
        Some(id) => id,
        None => return Ok(()),
    };

    let desk = open_desk(config)?;
    match desk.escalate_case(&id) {
        Ok(Some(record)) => {
            if cmd.json {
                println!("{}", serde_json::to_string_pretty(&record)?);
            } else {
                println!("Case {id} escalated to police.");
                print_case(&record);
            }
            Ok(())
        }
        Ok(None) => {
            println!("No matching case found for {id}.");
            Ok(())
        }
        Err(Error::InvalidTransition { from, .. }) => {
            println!("Case {id} is already {from} and cannot be escalated.");
            Ok(())
        }
        Err(err) => Err(err.into()),
    }
}

fn handle_set_status(config: &Config, cmd: &SetStatusCommand) -> Result<()> {
    let id = match parse_case_id(&cmd.case_id) {
        Some(id) => id,
        None => return Ok(()),
    };

    let desk = open_desk(config)?;
    match desk.set_status(&id, cmd.status.into()) {
        Ok(Some(record)) => {
            if cmd.json {
                println!("{}", serde_json::to_string_pretty(&record)?);
            } else {
                println!("Case {id} is now {}.", record.status);
            }
            Ok(())
        }
        Ok(None) => {
            println!("No matching case found for {id}.");
            Ok(())
        }
        Err(err @ Error::InvalidTransition { .. }) => {
            println!("{err}");
            Ok(())
        }
        Err(err) => Err(err.into()),
    }
}

fn handle_recent(config: &Config, cmd: &RecentCommand) -> Result<()> {
    let desk = open_desk(config)?;
    let limit = cmd.limit.unwrap_or(config.tracker.recent_limit);
    let cases = desk.list_recent(limit)?;

    match cmd.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&cases)?);
        }
        OutputFormat::Table => {
            if cases.is_empty() {
                println!("No cases recorded yet.");
                return Ok(());
            }
            println!(
                "{:<10}  {:<12}  {:<17}  {:<20}  DESCRIPTION",
                "CASE ID", "STATUS", "SUBMITTED", "REPORTER"
            );
            for case in &cases {
                println!(
                    "{:<10}  {:<12}  {:<17}  {:<20}  {}",
                    case.id.as_str(),
                    case.status.to_string(),
                    case.created_at.format("%Y-%m-%d %H:%M").to_string(),
                    truncate_chars(case.display_name(), 20),
                    truncate_chars(&case.description, 48),
                );
            }
        }
        OutputFormat::Plain => {
            if cases.is_empty() {
                println!("No cases recorded yet.");
                return Ok(());
            }
            for case in &cases {
                print_case(case);
                println!();
            }
        }
    }
    Ok(())
}

fn handle_contact(config: &Config, cmd: ContactCommand) -> Result<()> {
    let email = cmd.email.unwrap_or_default();

    // The honeypot is a form-level trap; the CLI always submits it empty.
    if let Err(rejection) = validate_contact("", &email, &cmd.message) {
        println!("Message rejected: {rejection}");
        return Ok(());
    }

    let message = ContactMessage {
        name: cmd.name,
        email,
        phone: cmd.phone.unwrap_or_default(),
        message: cmd.message,
    };

    let gateway = HttpContactGateway::new(config.contact.endpoint.clone());
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    match runtime.block_on(gateway.deliver(&message)) {
        Ok(receipt) if receipt.ok => {
            println!("Message sent.");
            if let Some(ticket) = receipt.ticket_id {
                println!("Ticket: {ticket}");
            }
            Ok(())
        }
        Ok(_) => {
            println!("The support team could not accept the message. Please try again later.");
            Ok(())
        }
        Err(err) if err.is_retryable() => {
            println!("Could not reach the support team ({err}).");
            println!("Your message was not sent; please try again.");
            Ok(())
        }
        Err(err) => Err(err.into()),
    }
}

fn handle_resources(cmd: &ResourcesCommand) -> Result<()> {
    match cmd {
        ResourcesCommand::Hotlines { json } => {
            if *json {
                println!("{}", serde_json::to_string_pretty(HOTLINES)?);
            } else {
                println!("Official reporting channels (Bangladesh)");
                println!("----------------------------------------");
                for hotline in HOTLINES {
                    println!();
                    println!("{}", hotline.name);
                    println!("  Phone:   {}", hotline.phone);
                    if let Some(email) = hotline.email {
                        println!("  Email:   {email}");
                    }
                    println!("  Purpose: {}", hotline.purpose);
                }
                println!();
                println!("If the victim is a minor, say \"Child victim (under 18)\" when calling.");
            }
        }
        ResourcesCommand::Platforms { json } => {
            if *json {
                println!("{}", serde_json::to_string_pretty(PLATFORM_LINKS)?);
            } else {
                println!("Report abuse directly on the platform");
                println!("-------------------------------------");
                for link in PLATFORM_LINKS {
                    println!("{:<10}  {}", link.name, link.url);
                }
            }
        }
        ResourcesCommand::Checklist => {
            println!("Evidence pack checklist");
            println!("-----------------------");
            for item in EVIDENCE_CHECKLIST {
                println!("- {item}");
            }
        }
    }
    Ok(())
}

fn handle_evidence(cmd: &EvidenceCommand) -> Result<()> {
    match cmd {
        EvidenceCommand::Hash { files } => {
            for path in files {
                match cybershield::evidence::fingerprint_file(path) {
                    Ok(digest) => println!("{digest}  {}", path.display()),
                    Err(err) => println!("{}: {err}", path.display()),
                }
            }
        }
    }
    Ok(())
}

fn handle_status(config: &Config, cmd: &StatusCommand) -> Result<()> {
    let store = CaseStore::open(config.database_path())?;
    let stats = store.stats()?;

    if cmd.json {
        let status = serde_json::json!({
            "database_path": store.path(),
            "total_cases": stats.total_cases,
            "oldest_submission": stats.oldest_submission.map(|t| t.to_rfc3339()),
            "newest_submission": stats.newest_submission.map(|t| t.to_rfc3339()),
            "db_size_bytes": stats.db_size_bytes,
        });
        println!("{}", serde_json::to_string_pretty(&status)?);
    } else {
        println!("cshield status");
        println!("--------------");
        println!("Database:  {}", store.path().display());
        println!("Cases:     {}", stats.total_cases);
        match stats.newest_submission {
            Some(t) => println!("Newest:    {}", t.to_rfc3339()),
            None => println!("Newest:    -"),
        }
        match stats.oldest_submission {
            Some(t) => println!("Oldest:    {}", t.to_rfc3339()),
            None => println!("Oldest:    -"),
        }
        println!("Size:      {} bytes", stats.db_size_bytes);
    }
    Ok(())
}

fn handle_config(config: &Config, cmd: ConfigCommand) -> Result<()> {
    match cmd {
        ConfigCommand::Show { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(config)?);
            } else {
                println!("Current Configuration");
                println!("=====================");
                println!();
                println!("[Storage]");
                println!("  Database path:     {}", config.database_path().display());
                println!();
                println!("[Tracker]");
                println!("  Recent limit:      {}", config.tracker.recent_limit);
                println!("  ID mint attempts:  {}", config.tracker.id_mint_attempts);
                println!();
                println!("[Contact]");
                println!("  Endpoint:          {}", config.contact.endpoint);
            }
        }
        ConfigCommand::Path => {
            println!("{}", Config::default_config_path().display());
        }
        ConfigCommand::Validate { file } => {
            let path = file.unwrap_or_else(Config::default_config_path);
            println!("Validating configuration: {}", path.display());
            match Config::load_from(Some(path)) {
                Ok(_) => println!("Configuration is valid."),
                Err(e) => println!("Configuration error: {e}"),
            }
        }
    }
    Ok(())
}

fn print_case(record: &CaseRecord) {
    println!("Case {}", record.id);
    println!("  Status:     {}", record.status);
    println!("  Reporter:   {}", record.display_name());
    println!("  Submitted:  {}", record.created_at.to_rfc3339());
    if let Some(updated) = record.updated_at {
        println!("  Updated:    {}", updated.to_rfc3339());
    }
    println!("  Description:");
    for line in record.description.lines() {
        println!("    {line}");
    }
    if !record.evidence_links.is_empty() {
        println!("  Evidence links:");
        for link in &record.evidence_links {
            println!("    {link}");
        }
    }
    if !record.evidence_files.is_empty() {
        println!("  Evidence files:");
        for file in &record.evidence_files {
            println!("    {} ({})", file.name, file.reference);
        }
    }
}

/// Character-safe truncation for table cells.
fn truncate_chars(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{kept}...")
    }
}
