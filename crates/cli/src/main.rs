use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use todo_read_core::{DEFAULT_LIMIT, DEFAULT_PAGE, ListTodosParams, SortField, SortOrder};
use todo_read_service::TodoQueryService;
use todo_read_storage::StorageBackend;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "todo-read")]
#[command(about = "Paginated read-side queries over a todo list", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the HTTP API
    Serve {
        #[arg(short, long, default_value = "8080")]
        port: u16,
        #[arg(short = 'H', long, default_value = "127.0.0.1")]
        host: String,
        /// JSON array of todo records for the in-memory store
        #[arg(long)]
        seed: Option<PathBuf>,
    },
    /// Run one list query and print the response as JSON
    List {
        #[arg(long, default_value_t = DEFAULT_PAGE, allow_negative_numbers = true)]
        page: i64,
        #[arg(short, long, default_value_t = DEFAULT_LIMIT, allow_negative_numbers = true)]
        limit: i64,
        #[arg(long)]
        status: Option<String>,
        #[arg(long, default_value_t = SortField::default().as_str().to_owned())]
        sort: String,
        #[arg(long, default_value_t = SortOrder::default().as_str().to_owned())]
        order: String,
        /// JSON array of todo records for the in-memory store
        #[arg(long)]
        seed: Option<PathBuf>,
    },
}

/// In-memory store when a seed file is given, PostgreSQL otherwise.
pub(crate) async fn open_backend(seed: Option<&Path>) -> Result<StorageBackend> {
    if let Some(path) = seed {
        return Ok(StorageBackend::new_memory_from_file(path)?);
    }
    open_postgres().await
}

#[cfg(feature = "postgres")]
async fn open_postgres() -> Result<StorageBackend> {
    Ok(StorageBackend::new_postgres_from_env().await?)
}

#[cfg(not(feature = "postgres"))]
async fn open_postgres() -> Result<StorageBackend> {
    anyhow::bail!("built without PostgreSQL support; pass --seed <file.json>")
}

pub(crate) fn query_service(backend: StorageBackend) -> TodoQueryService {
    TodoQueryService::new(Arc::new(backend))
}

#[tokio::main]
async fn main() -> Result<()> {
    // stdout carries `list` output
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { port, host, seed } => commands::serve::run(port, host, seed).await,
        Commands::List { page, limit, status, sort, order, seed } => {
            let params = ListTodosParams { page, limit, status, sort, order };
            commands::list::run(params, seed).await
        },
    }
}
