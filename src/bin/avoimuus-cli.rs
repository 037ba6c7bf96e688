//! AvoimuusExplorer CLI - terminal front end for the register data layer
//!
//! Usage:
//!   avoimuus-cli activities [--search <term>] [--term <id>]
//!   avoimuus-cli organizations [--search <term>]
//!   avoimuus-cli show <activity-id>
//!   avoimuus-cli export [--search <term>] [--output <path>]

use std::env;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use avoimuus_lib::api;
use avoimuus_lib::export::{ExportOutcome, EXPORT_FILENAME};
use avoimuus_lib::filter::{self, display_page};
use avoimuus_lib::view;
use avoimuus_lib::Explorer;

/// CLI command structure
#[derive(Debug)]
enum Command {
    Activities {
        search: String,
        term_id: Option<i64>,
    },
    Organizations {
        search: String,
    },
    Show {
        activity_id: i64,
    },
    Export {
        search: String,
        output: Option<PathBuf>,
    },
    Help,
    Version,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();

    match parse_args(&args) {
        Ok(cmd) => match run_command(cmd) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("Error: {:#}", e);
                ExitCode::FAILURE
            }
        },
        Err(e) => {
            eprintln!("Error: {}", e);
            print_help();
            ExitCode::FAILURE
        }
    }
}

fn flag_value(args: &[String], names: &[&str]) -> Option<String> {
    args.iter()
        .position(|a| names.contains(&a.as_str()))
        .and_then(|i| args.get(i + 1))
        .cloned()
}

fn parse_args(args: &[String]) -> Result<Command, String> {
    if args.len() < 2 {
        return Ok(Command::Help);
    }

    match args[1].as_str() {
        "help" | "--help" | "-h" => Ok(Command::Help),
        "version" | "--version" | "-V" => Ok(Command::Version),

        "activities" => {
            let search = flag_value(&args[2..], &["--search", "-s"]).unwrap_or_default();
            let term_id = match flag_value(&args[2..], &["--term", "-t"]) {
                Some(raw) => Some(
                    raw.parse()
                        .map_err(|_| format!("Invalid term id: {}", raw))?,
                ),
                None => None,
            };
            Ok(Command::Activities { search, term_id })
        }

        "organizations" => {
            let search = flag_value(&args[2..], &["--search", "-s"]).unwrap_or_default();
            Ok(Command::Organizations { search })
        }

        "show" => {
            let raw = args.get(2).ok_or("Missing activity id")?;
            let activity_id = raw
                .parse()
                .map_err(|_| format!("Invalid activity id: {}", raw))?;
            Ok(Command::Show { activity_id })
        }

        "export" => {
            let search = flag_value(&args[2..], &["--search", "-s"]).unwrap_or_default();
            let output = flag_value(&args[2..], &["--output", "-o"]).map(PathBuf::from);
            Ok(Command::Export { search, output })
        }

        _ => Err(format!("Unknown command: {}", args[1])),
    }
}

fn run_command(cmd: Command) -> anyhow::Result<()> {
    match cmd {
        Command::Help => {
            print_help();
            return Ok(());
        }
        Command::Version => {
            println!("avoimuus-cli {}", env!("CARGO_PKG_VERSION"));
            return Ok(());
        }
        _ => {}
    }

    let runtime = tokio::runtime::Runtime::new().context("failed to start async runtime")?;
    runtime.block_on(run_async(cmd))
}

async fn run_async(cmd: Command) -> anyhow::Result<()> {
    // The CLI always runs outside a host shell, so selection resolves to HTTP.
    let api = api::select_transport(None)?;
    let explorer = Explorer::new(Arc::clone(&api));

    match cmd {
        Command::Activities { search, term_id } => {
            let activities = match term_id {
                Some(id) => explorer.activities_by_term(id).await?,
                None => explorer.activities().await?,
            };
            let lookup = explorer.target_lookup().await?;

            let filtered = filter::filter_activities(&activities, &search);
            let page = display_page(&filtered);
            for activity in page.visible {
                print_card(&view::activity_card(activity, &lookup));
            }
            if page.remainder > 0 {
                println!(
                    "Näytetään {} / {} tulosta",
                    page.visible.len(),
                    filtered.len()
                );
            }
        }

        Command::Organizations { search } => {
            let organizations = explorer.organizations().await?;
            let filtered = filter::filter_organizations(&organizations, &search);
            let page = display_page(&filtered);
            for org in page.visible {
                let card = view::organization_card(org);
                println!("{} [{}]", card.company_name, card.company_id);
                if !card.main_industry.is_empty() {
                    println!("  Toimiala: {}", card.main_industry);
                }
                if let Some(snippet) = &card.description_snippet {
                    println!("  {}", snippet);
                }
                println!();
            }
            if page.remainder > 0 {
                println!(
                    "Näytetään {} / {} tulosta",
                    page.visible.len(),
                    filtered.len()
                );
            }
        }

        Command::Show { activity_id } => {
            let activities = explorer.activities().await?;
            let lookup = explorer.target_lookup().await?;
            let activity = activities
                .iter()
                .find(|a| a.id == activity_id)
                .ok_or_else(|| avoimuus_lib::AppError::activity_not_found(activity_id))?;
            print_details(&view::activity_details(activity, &lookup));
        }

        Command::Export { search, output } => {
            let path = output.unwrap_or_else(|| PathBuf::from(EXPORT_FILENAME));
            match explorer.export_activities(&search, &path).await? {
                ExportOutcome::Written { path, rows } => {
                    println!("Exported {} rows to {}", rows, path.display());
                }
                ExportOutcome::SkippedEmpty => {
                    println!("Nothing to export: no activities matched");
                }
            }
        }

        Command::Help | Command::Version => unreachable!("handled before runtime start"),
    }

    Ok(())
}

fn print_card(card: &view::ActivityCard) {
    println!("#{} {} ({})", card.id, card.company_name, card.date_label);
    for topic in &card.topics {
        if let Some(subject) = &topic.subject {
            println!("  {}", subject);
        }
        if let Some(title) = &topic.title {
            println!("  Aihe: {}", title);
        }
    }
    if !card.contacts.names.is_empty() {
        let mut line = card.contacts.names.join(", ");
        if card.contacts.more > 0 {
            line.push_str(&format!(" +{} muuta", card.contacts.more));
        }
        println!("  Kontaktit: {}", line);
    }
    println!();
}

fn print_details(details: &view::ActivityDetails) {
    println!("{}", details.company_name);
    println!("Y-tunnus: {}", details.company_id);
    println!("Ajankohta: {}", details.period_label);
    println!("Taloudellinen arvo: {}", details.amount_label);
    for topic in &details.topics {
        println!();
        if let Some(subject) = &topic.subject {
            println!("  {}", subject);
        }
        if let Some(title) = &topic.title {
            println!("  {}", title);
        }
        println!("  Tyyppi: {}", topic.type_label);
        for chip in &topic.chips {
            if chip.contact_methods.is_empty() {
                println!("    - {}", chip.label);
            } else {
                println!("    - {} ({})", chip.label, chip.contact_methods.join(", "));
            }
        }
    }
    if let Some(description) = &details.description {
        println!();
        println!("Lisätiedot:");
        println!("{}", description);
    }
}

fn print_help() {
    println!("avoimuus-cli - Finnish lobbying transparency register browser");
    println!();
    println!("USAGE:");
    println!("  avoimuus-cli activities [--search <term>] [--term <id>]");
    println!("  avoimuus-cli organizations [--search <term>]");
    println!("  avoimuus-cli show <activity-id>");
    println!("  avoimuus-cli export [--search <term>] [--output <path>]");
    println!("  avoimuus-cli help | version");
    println!();
    println!("ENVIRONMENT:");
    println!("  AVOIMUUS_API_BASE  Override the register API base URL");
}
