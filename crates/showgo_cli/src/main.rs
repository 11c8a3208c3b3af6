//! ShowGo command-line entry point.
//!
//! # Responsibility
//! - Build a store for this process, seeded per configuration.
//! - List, filter, show and add events against that store.

use clap::{Parser, Subcommand};
use log::info;
use showgo_core::{
    core_version, init_from_config, AppConfig, CategoryFilter, EventId, EventService, MemStore,
    NewEvent, KNOWN_CATEGORIES,
};
use std::error::Error;
use std::process::ExitCode;

mod output;

#[derive(Parser)]
#[command(name = "showgo")]
#[command(about = "Browse the ShowGo live music event listing", version)]
struct Cli {
    /// Log level (trace|debug|info|warn|error); overrides SHOWGO_LOG_LEVEL
    #[arg(long, global = true)]
    log_level: Option<String>,
    /// Absolute directory for rolling log files; overrides SHOWGO_LOG_DIR
    #[arg(long, global = true)]
    log_dir: Option<String>,
    /// Start with an empty store instead of the sample events
    #[arg(long, global = true)]
    no_seed: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List events ordered by creation time
    List {
        /// Only show this category ("All" shows everything)
        #[arg(long, default_value = "All")]
        category: CategoryFilter,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show one event by id
    Show {
        id: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the category choices
    Categories,
    /// Add an event, then print the full listing
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        description: String,
        #[arg(long)]
        location: String,
        #[arg(long)]
        venue: String,
        #[arg(long)]
        date: String,
        #[arg(long)]
        time: String,
        #[arg(long)]
        category: String,
        /// Repeatable
        #[arg(long = "tag")]
        tags: Vec<String>,
        #[arg(long)]
        image_url: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let config = load_config(&cli)?;
    init_from_config(&config)?;
    info!(
        "event=cli_start module=cli status=ok version={} seed={}",
        core_version(),
        config.seed_sample_events
    );

    let store = if config.seed_sample_events {
        MemStore::with_sample_events()
    } else {
        MemStore::new()
    };
    let service = EventService::new(&store);

    match cli.command {
        Commands::List { category, json } => {
            let events = service.list_events_in_category(&category);
            if json {
                println!("{}", serde_json::to_string_pretty(&events)?);
            } else if events.is_empty() {
                println!("{}", output::empty_listing_message(&category));
            } else {
                output::print_table(&events);
            }
        }
        Commands::Show { id, json } => {
            let event = EventId::parse_str(id.trim())
                .ok()
                .and_then(|event_id| service.get_event(event_id))
                .ok_or_else(|| format!("event not found: {id}"))?;
            if json {
                println!("{}", serde_json::to_string_pretty(&event)?);
            } else {
                println!("{}", output::format_detail(&event));
            }
        }
        Commands::Categories => {
            for category in KNOWN_CATEGORIES {
                println!("{category}");
            }
        }
        Commands::Add {
            name,
            description,
            location,
            venue,
            date,
            time,
            category,
            tags,
            image_url,
            json,
        } => {
            let input = NewEvent {
                name,
                description,
                location,
                venue,
                date,
                time,
                category,
                tags: Some(tags),
                image_url,
            };
            let created = service.create_event(input);
            eprintln!("created {}", created.id);

            let events = service.list_events();
            if json {
                println!("{}", serde_json::to_string_pretty(&events)?);
            } else {
                output::print_table(&events);
            }
        }
    }

    Ok(())
}

fn load_config(cli: &Cli) -> Result<AppConfig, Box<dyn Error>> {
    let mut config = AppConfig::from_env()?;
    config.apply_overrides(cli.log_level.as_deref(), cli.log_dir.as_deref(), cli.no_seed)?;
    Ok(config)
}
