//! CLI administration tool for the clinic records.
//!
//! Lists, creates and deletes records straight against the database, running
//! the same validators as the web forms.
//!
//! # Usage
//!
//! ```bash
//! # Check database connection
//! cargo run --bin admin -- db check
//!
//! # Record counts per collection
//! cargo run --bin admin -- stats
//!
//! # Print every pet
//! cargo run --bin admin -- list pets
//!
//! # Create a client interactively
//! cargo run --bin admin -- add clients
//!
//! # Delete a vet without confirmation
//! cargo run --bin admin -- delete vets 3 -y
//! ```
//!
//! # Environment Variables
//!
//! Same as the server: `DATABASE_URL` or the `DB_*` components.

use vet_clinic::application::services::RecordService;
use vet_clinic::config;
use vet_clinic::error::AppError;
use vet_clinic::state::AppState;
use vet_clinic::web::views::RecordView;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use colored::*;
use dialoguer::{Confirm, Input, Select};
use serde_json::{Map, Value};
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing clinic records.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Record collections.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum Kind {
    Clients,
    Providers,
    Products,
    Medicines,
    Pets,
    Vets,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },

    /// Show record counts
    Stats,

    /// Print all records of a collection
    List { kind: Kind },

    /// Create a record with interactive prompts
    Add { kind: Kind },

    /// Delete a record
    Delete {
        kind: Kind,

        id: i64,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,
}

/// Record subcommands dispatched per collection.
#[derive(Clone, Copy)]
enum RecordAction {
    List,
    Add,
    Delete { id: i64, yes: bool },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env()?;
    let pool = config.connect().await?;

    match cli.command {
        Commands::Db { action } => handle_db_action(action, &pool).await?,
        Commands::Stats => handle_stats(&state(&pool)).await?,
        Commands::List { kind } => handle_record_action(kind, RecordAction::List, &pool).await?,
        Commands::Add { kind } => handle_record_action(kind, RecordAction::Add, &pool).await?,
        Commands::Delete { kind, id, yes } => {
            handle_record_action(kind, RecordAction::Delete { id, yes }, &pool).await?
        }
    }

    Ok(())
}

fn state(pool: &PgPool) -> AppState {
    AppState::from_pool(Arc::new(pool.clone()))
}

/// Dispatches a record command to the service of its collection.
async fn handle_record_action(kind: Kind, action: RecordAction, pool: &PgPool) -> Result<()> {
    let state = state(pool);

    match kind {
        Kind::Clients => run_action(&state.clients, action).await,
        Kind::Providers => run_action(&state.providers, action).await,
        Kind::Products => run_action(&state.products, action).await,
        Kind::Medicines => run_action(&state.medicines, action).await,
        Kind::Pets => run_action(&state.pets, action).await,
        Kind::Vets => run_action(&state.vets, action).await,
    }
}

async fn run_action<R: RecordView>(service: &RecordService<R>, action: RecordAction) -> Result<()> {
    match action {
        RecordAction::List => list_records(service).await,
        RecordAction::Add => add_record(service).await,
        RecordAction::Delete { id, yes } => delete_record(service, id, yes).await,
    }
}

/// Prints every record of a collection as a table.
///
/// # Output Format
///
/// ```text
/// 📋 Mascotas
///
///   ID   Nombre               Raza                 Fecha de Nacimiento
///   ──────────────────────────────────────────────────────────────────
///   1    gatito               orange               2024-05-18
/// ```
async fn list_records<R: RecordView>(service: &RecordService<R>) -> Result<()> {
    println!("{}", format!("📋 {}", R::TITLE).bright_blue().bold());
    println!();

    let records = service
        .list()
        .await
        .with_context(|| format!("Failed to list {}", R::SLUG))?;

    if records.is_empty() {
        println!("  {}", R::EMPTY.yellow());
        println!();
        println!(
            "  Create one with: {} admin add {}",
            "cargo run --bin".bright_cyan(),
            R::SLUG
        );
        return Ok(());
    }

    let header: String = R::HEADERS
        .iter()
        .map(|header| format!("{:<20} ", header))
        .collect();
    println!(
        "  {:<4} {}",
        "ID".bright_white().bold(),
        header.trim_end().bright_white().bold()
    );
    println!("  {}", "─".repeat(5 + 21 * R::HEADERS.len()).bright_black());

    for record in &records {
        let cells: String = record
            .cells()
            .iter()
            .map(|cell| format!("{:<20} ", cell))
            .collect();
        println!(
            "  {:<4} {}",
            record.id().to_string().bright_black(),
            cells.trim_end().cyan()
        );
    }

    println!();
    println!(
        "  Total: {}",
        records.len().to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

/// Prompts for every field and saves the record through its validator.
///
/// Rejected fields are printed with their messages; nothing is written.
async fn add_record<R: RecordView>(service: &RecordService<R>) -> Result<()> {
    println!(
        "{}",
        format!("➕ Nuevo {}", R::SINGULAR).bright_blue().bold()
    );
    println!();

    let mut values = Map::new();

    for field in R::form_fields(&R::Form::default()) {
        let value = if field.is_select() {
            let options: Vec<&str> = field.options.iter().map(|option| option.value).collect();
            let index = Select::new()
                .with_prompt(field.label)
                .items(options.as_slice())
                .default(0)
                .interact()?;
            options[index].to_string()
        } else {
            Input::<String>::new()
                .with_prompt(field.label)
                .allow_empty(true)
                .interact_text()?
        };

        values.insert(field.name.to_string(), Value::String(value));
    }

    let form: R::Form = serde_json::from_value(Value::Object(values))
        .context("Failed to read submitted fields")?;

    match service.save(&form).await {
        Ok(record) => {
            println!();
            println!(
                "{}",
                format!("✅ {} #{} created", R::NAME, record.id())
                    .green()
                    .bold()
            );
            println!("{}", serde_json::to_string_pretty(&record)?.bright_black());
            println!();
            Ok(())
        }
        Err(AppError::Validation { fields, .. }) => {
            println!();
            println!("{}", "❌ Record rejected:".red().bold());
            for (field, message) in fields.iter() {
                println!("  {}: {}", field.bright_white(), message.red());
            }
            println!();
            Ok(())
        }
        Err(e) => Err(e).with_context(|| format!("Failed to create {}", R::NAME)),
    }
}

/// Deletes a record after showing it, with confirmation prompt.
///
/// # Safety
///
/// - Requires confirmation (default: No) unless `--yes` is passed
async fn delete_record<R: RecordView>(
    service: &RecordService<R>,
    id: i64,
    skip_confirm: bool,
) -> Result<()> {
    println!(
        "{}",
        format!("🗑️  Eliminar {}", R::SINGULAR).bright_blue().bold()
    );
    println!();

    let record = service
        .get(id)
        .await
        .with_context(|| format!("Failed to load {} #{}", R::NAME, id))?;

    for (header, cell) in R::HEADERS.iter().zip(record.cells()) {
        println!("  {:<20} {}", format!("{header}:"), cell.cyan());
    }
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt(format!("Delete {} #{}?", R::NAME, id))
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    service
        .delete(id)
        .await
        .with_context(|| format!("Failed to delete {} #{}", R::NAME, id))?;

    println!();
    println!("{}", "✅ Record deleted successfully!".green().bold());
    println!();

    Ok(())
}

/// Displays record counts per collection.
async fn handle_stats(state: &AppState) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let counts = state
        .record_counts()
        .await
        .context("Failed to count records")?;

    for (slug, count) in counts {
        println!(
            "  {:<12} {}",
            format!("{slug}:"),
            count.to_string().bright_green().bold()
        );
    }
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            let applied = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM _sqlx_migrations")
                .fetch_one(pool)
                .await;

            println!("  PostgreSQL: {}", version.bright_white());
            match applied {
                Ok(count) => println!("  Migrations: {}", count.to_string().bright_white()),
                Err(e) => println!("  Migrations: {}", migrations_unavailable(&e).yellow()),
            }
            println!();
        }
    }

    Ok(())
}

/// Shown instead of a migration count when `_sqlx_migrations` cannot be read.
fn migrations_unavailable(error: &sqlx::Error) -> String {
    match error {
        sqlx::Error::Database(db) if db.code().as_deref() == Some("42P01") => {
            "none applied (the server runs them on startup)".to_string()
        }
        other => format!("unavailable ({other})"),
    }
}
