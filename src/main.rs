use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use taskdeck::db::{SqliteStore, TaskStore};
use taskdeck::export::{write_export, ExportFormat};
use taskdeck::import::{import_tasks, ConflictDecision};
use taskdeck::models::Task;

#[derive(Parser)]
#[command(name = "tdk")]
#[command(about = "Task tracker with a SQLite store and CSV/TXT import-export")]
struct Cli {
    /// Path to the task database (defaults to the platform data directory)
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new task
    Create {
        name: String,

        /// Task category (Work, Personal, Other and Miscellaneous are the
        /// conventional ones, but any text is accepted)
        #[arg(short, long, default_value = "Work")]
        category: String,
    },
    /// List tasks, optionally filtered by category
    List {
        #[arg(short, long)]
        category: Option<String>,

        /// Print as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Mark a task as completed
    Done { id: i64 },
    /// Delete a task
    Delete { id: i64 },
    /// Import tasks from a comma-delimited file
    Import {
        file: PathBuf,

        /// How to handle records whose id already exists
        #[arg(long, value_enum, default_value_t = OnConflict::Merge)]
        on_conflict: OnConflict,
    },
    /// Export tasks to a file
    Export {
        file: PathBuf,

        #[arg(short, long, value_enum, default_value_t = Format::Csv)]
        format: Format,

        /// Export only this category
        #[arg(short, long)]
        category: Option<String>,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OnConflict {
    /// Insert conflicting records as new rows with fresh ids
    Merge,
    /// Overwrite the existing row at the conflicting id
    Replace,
    /// Skip conflicting records
    Cancel,
}

impl From<OnConflict> for ConflictDecision {
    fn from(value: OnConflict) -> Self {
        match value {
            OnConflict::Merge => ConflictDecision::MergeAsNew,
            OnConflict::Replace => ConflictDecision::Replace,
            OnConflict::Cancel => ConflictDecision::Cancel,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    Csv,
    Txt,
}

impl From<Format> for ExportFormat {
    fn from(value: Format) -> Self {
        match value {
            Format::Csv => ExportFormat::Csv,
            Format::Txt => ExportFormat::Txt,
        }
    }
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "taskdeck=info".into()),
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn open_store(db: Option<PathBuf>) -> anyhow::Result<SqliteStore> {
    let store = match db {
        Some(path) => SqliteStore::open(path)?,
        None => SqliteStore::open_default()?,
    };
    store.init()?;
    Ok(store)
}

fn print_table(tasks: &[Task]) {
    if tasks.is_empty() {
        println!("No tasks");
        return;
    }
    println!("{:<6} {:<30} {:<15} {}", "ID", "Task", "Category", "Done");
    for task in tasks {
        println!(
            "{:<6} {:<30} {:<15} {}",
            task.id,
            task.name,
            task.category,
            if task.completed { "yes" } else { "no" }
        );
    }
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let store = open_store(cli.db)?;

    match cli.command {
        Commands::Create { name, category } => {
            let id = store.create(&name, &category)?;
            println!("Created task {}", id);
        }
        Commands::List { category, json } => {
            let tasks = match category {
                Some(c) => store.list_by_category(&c)?,
                None => store.list_all()?,
            };
            if json {
                println!("{}", serde_json::to_string_pretty(&tasks)?);
            } else {
                print_table(&tasks);
            }
        }
        Commands::Done { id } => {
            if store.mark_completed(id)? {
                println!("Task {} marked completed", id);
            } else {
                println!("No task with id {}", id);
            }
        }
        Commands::Delete { id } => {
            if store.delete(id)? {
                println!("Deleted task {}", id);
            } else {
                println!("No task with id {}", id);
            }
        }
        Commands::Import { file, on_conflict } => {
            let reader = BufReader::new(File::open(&file)?);
            let decision = ConflictDecision::from(on_conflict);
            let report = import_tasks(&store, reader, |record| {
                tracing::info!(id = record.id, ?decision, "duplicate id in import");
                decision
            })?;
            println!(
                "Read {} lines: {} created, {} replaced, {} cancelled, {} skipped",
                report.lines,
                report.created,
                report.replaced,
                report.cancelled,
                report.skipped_short
            );
        }
        Commands::Export {
            file,
            format,
            category,
        } => {
            let tasks = match category {
                Some(c) => store.list_by_category(&c)?,
                None => store.list_all()?,
            };
            let out = File::create(&file)?;
            write_export(&tasks, format.into(), out)?;
            println!("Exported {} tasks to {}", tasks.len(), file.display());
        }
    }

    Ok(())
}
