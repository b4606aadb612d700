use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use verbena_node_registry::FsNodeRegistry;
use verbena_purge::{PurgeOptions, purge_invalid_connections};
use verbena_sanitizer::TracingReporter;
use verbena_store::SqliteStore;

/// Verbena - workflow connection maintenance tools
#[derive(Parser)]
#[command(name = "verbena")]
#[command(version, about, long_about = None)]
struct Cli {
  #[command(subcommand)]
  command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
  /// Remove connections that target nodes unable to receive input
  PurgeConnections {
    /// Path to the sqlite database holding workflow rows
    #[arg(long)]
    db: PathBuf,

    /// Directory of node type descriptor manifests
    #[arg(long)]
    node_types: PathBuf,

    /// Skip workflows whose stored documents fail to parse instead of
    /// aborting the run
    #[arg(long)]
    skip_malformed: bool,
  },
}

fn main() -> Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
    .init();

  let cli = Cli::parse();

  match cli.command {
    Some(Commands::PurgeConnections {
      db,
      node_types,
      skip_malformed,
    }) => {
      purge_connections(db, node_types, skip_malformed)?;
    }
    None => {
      println!("verbena - use --help to see available commands");
    }
  }

  Ok(())
}

fn purge_connections(db: PathBuf, node_types: PathBuf, skip_malformed: bool) -> Result<()> {
  let rt = tokio::runtime::Runtime::new()?;
  rt.block_on(async { purge_connections_async(db, node_types, skip_malformed).await })
}

async fn purge_connections_async(
  db: PathBuf,
  node_types: PathBuf,
  skip_malformed: bool,
) -> Result<()> {
  let registry = FsNodeRegistry::new(&node_types)
    .load()
    .await
    .with_context(|| format!("failed to load node types from {}", node_types.display()))?;
  eprintln!("Loaded {} node types", registry.len());

  let store = SqliteStore::connect(&format!("sqlite:{}", db.display()))
    .await
    .with_context(|| format!("failed to open database {}", db.display()))?;

  let options = PurgeOptions { skip_malformed };
  let summary = purge_invalid_connections(&store, &registry, &TracingReporter, &options)
    .await
    .context("purge failed")?;

  eprintln!(
    "Scanned {} workflows: {} updated, {} unchanged, {} skipped",
    summary.scanned,
    summary.updated,
    summary.unchanged,
    summary.skipped.len()
  );
  for skipped in &summary.skipped {
    eprintln!("  skipped {}: {}", skipped.workflow_id, skipped.reason);
  }

  Ok(())
}
