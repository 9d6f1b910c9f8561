//! CLI command implementations.

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use meshview_core::{load_all, DataPaths, Entry};
use meshview_graph::Vocabulary;
use meshview_server::{MeshServer, ServerConfig, NOT_FOUND_MESSAGE};
use std::io::{self, Write};
use std::net::SocketAddr;
use std::time::{Duration, Instant};
use tracing::debug;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// Load the vocabulary, showing a spinner while the files are parsed.
fn load_vocabulary(paths: &DataPaths) -> Result<Vocabulary> {
    debug!("Data paths: {:?}", paths);

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}")?);
    spinner.enable_steady_tick(Duration::from_millis(80));
    spinner.set_message("Loading vocabulary...");

    let start = Instant::now();
    let data = load_all(paths);
    spinner.finish_and_clear();

    let vocab = Vocabulary::from_data(data?);
    eprintln!(
        "{} Loaded {} descriptors in {}ms",
        "✓".green(),
        vocab.node_count().to_string().cyan(),
        start.elapsed().as_millis()
    );

    Ok(vocab)
}

/// Start the lookup server.
pub async fn serve(paths: &DataPaths, port: u16, headless: bool) -> Result<()> {
    let bind_addr = if headless { "0.0.0.0" } else { "127.0.0.1" };

    if headless {
        println!("{}", "Starting Meshview server in headless mode...".cyan());
    } else {
        println!("{}", "Starting Meshview server...".cyan());
    }

    let vocab = load_vocabulary(paths)?;

    let addr: SocketAddr = format!("{}:{}", bind_addr, port).parse()?;
    let server = MeshServer::new(vocab, ServerConfig { addr });
    let listener = server.bind().await?;
    let addr = listener.local_addr()?;

    println!("{} Listening on http://{}", "✓".green(), addr);
    println!("  Try {}", format!("curl http://{}/get/<id>", addr).cyan());
    if headless {
        println!("  Headless mode: accepting connections from any host");
    }
    println!("  Press {} to stop", "Ctrl+C".cyan());

    server.serve(listener).await?;

    Ok(())
}

/// Resolve a single identifier and print the result.
pub fn lookup(paths: &DataPaths, key: &str, json: bool) -> Result<()> {
    let vocab = load_vocabulary(paths)?;
    write_lookup(&vocab, key, json, &mut io::stdout().lock())
}

/// Writes the lookup result for `key`. With `json`, the output is the
/// same body the HTTP server would return.
fn write_lookup<W: Write>(
    vocab: &Vocabulary,
    key: &str,
    json: bool,
    out: &mut W,
) -> Result<()> {
    let view = match vocab.resolve(key) {
        Ok(view) => view,
        Err(err) => {
            if json {
                let body = serde_json::json!({ "error": NOT_FOUND_MESSAGE });
                writeln!(out, "{}", serde_json::to_string(&body)?)?;
            }
            return Err(err.into());
        }
    };

    if json {
        writeln!(out, "{}", serde_json::to_string(&view)?)?;
        return Ok(());
    }

    let central = &view.central[0];
    writeln!(out, "{} {}", central.id.yellow(), central.label.cyan().bold())?;
    if !central.scopenote.is_empty() {
        writeln!(out, "  {}", central.scopenote.dimmed())?;
    }

    write_section(out, "Parents", &view.parents)?;
    write_section(out, "Children", &view.children)?;

    Ok(())
}

fn write_section<W: Write>(out: &mut W, title: &str, entries: &[Entry]) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{} ({})", title.bold(), entries.len())?;
    if entries.is_empty() {
        writeln!(out, "  {}", "none".dimmed())?;
    }
    for entry in entries {
        writeln!(out, "  {} {}", entry.id.yellow(), entry.label)?;
    }
    Ok(())
}

/// Show vocabulary statistics.
pub fn status(paths: &DataPaths) -> Result<()> {
    let vocab = load_vocabulary(paths)?;
    let stats = vocab.stats();

    println!("{}", "Meshview Status".cyan().bold());
    println!();
    println!("  {} {}", "Descriptors:".dimmed(), stats.nodes);
    println!("  {} {}", "Child links:".dimmed(), stats.child_links);
    println!("  {} {}", "Parent links:".dimmed(), stats.parent_links);

    if stats.dangling_ids > 0 {
        println!(
            "  {} {} ids referenced without metadata",
            "⚠".yellow(),
            stats.dangling_ids
        );
    }

    Ok(())
}
