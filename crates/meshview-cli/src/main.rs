//! Meshview CLI - Command-line interface for Meshview
//!
//! Loads a vocabulary from its data files and either serves it over
//! HTTP or answers lookups directly from the terminal.

use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use meshview_core::DataPaths;
use meshview_server::DEFAULT_PORT;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

#[derive(Parser)]
#[command(name = "meshview")]
#[command(author = "Meshview Contributors")]
#[command(version)]
#[command(about = "Parent/child lookups over a controlled vocabulary", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Where to find the vocabulary data files.
#[derive(Args, Debug)]
struct DataArgs {
    /// Directory holding children.json, parents.json and node_data.json
    #[arg(short, long, default_value = ".")]
    data: PathBuf,

    /// Override the children-of file
    #[arg(long)]
    children: Option<PathBuf>,

    /// Override the parents-of file
    #[arg(long)]
    parents: Option<PathBuf>,

    /// Override the node metadata file
    #[arg(long)]
    metadata: Option<PathBuf>,
}

impl DataArgs {
    fn paths(&self) -> DataPaths {
        let mut paths = DataPaths::in_dir(&self.data);
        if let Some(ref children) = self.children {
            paths = paths.with_children(children);
        }
        if let Some(ref parents) = self.parents {
            paths = paths.with_parents(parents);
        }
        if let Some(ref metadata) = self.metadata {
            paths = paths.with_metadata(metadata);
        }
        paths
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP lookup server
    Serve {
        #[command(flatten)]
        data: DataArgs,

        /// Port to listen on
        #[arg(short, long, default_value_t = DEFAULT_PORT)]
        port: u16,

        /// Headless mode: bind to 0.0.0.0 for remote access
        #[arg(long)]
        headless: bool,
    },

    /// Look up a single identifier
    Lookup {
        /// The identifier to resolve
        key: String,

        #[command(flatten)]
        data: DataArgs,

        /// Output the HTTP response body instead of formatted text
        #[arg(long)]
        json: bool,
    },

    /// Show vocabulary statistics
    Status {
        #[command(flatten)]
        data: DataArgs,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .with(tracing_subscriber::EnvFilter::new(filter))
        .init();

    let result = match cli.command {
        Commands::Serve {
            data,
            port,
            headless,
        } => commands::serve(&data.paths(), port, headless).await,
        Commands::Lookup { key, data, json } => commands::lookup(&data.paths(), &key, json),
        Commands::Status { data } => commands::status(&data.paths()),
    };

    if let Err(e) = result {
        eprintln!("{} {}", "error:".red().bold(), e);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_data_args_overrides() {
        let cli = Cli::parse_from([
            "meshview",
            "lookup",
            "D1",
            "--data",
            "vocab",
            "--parents",
            "other/up.json",
        ]);

        let Commands::Lookup { key, data, json } = cli.command else {
            panic!("expected lookup");
        };
        assert_eq!(key, "D1");
        assert!(!json);

        let paths = data.paths();
        assert_eq!(paths.children, Path::new("vocab").join("children.json"));
        assert_eq!(paths.parents, PathBuf::from("other/up.json"));
        assert_eq!(paths.metadata, Path::new("vocab").join("node_data.json"));
    }

    #[test]
    fn test_serve_defaults() {
        let cli = Cli::parse_from(["meshview", "serve"]);

        let Commands::Serve { port, headless, .. } = cli.command else {
            panic!("expected serve");
        };
        assert_eq!(port, 5000);
        assert!(!headless);
    }
}
