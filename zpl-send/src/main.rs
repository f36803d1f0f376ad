//! One-shot ZPL sender
//!
//! Connects to a network label printer, writes one ZPL job, closes the
//! connection and exits. Destination comes from a config file or
//! environment variables; the payload comes from a file argument or
//! stdin.
//!
//! ```text
//! PRINTER_HOST=10.50.10.92 zpl-send label.zpl
//! cat label.zpl | PRINTER_HOST=10.50.10.92 zpl-send
//! ```

mod config;

use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use tracing::{error, info};
use zpl_printer::{NetworkPrinter, Printer};

use config::Config;

#[tokio::main]
async fn main() -> ExitCode {
    dotenv::dotenv().ok();
    init_logger();

    if let Err(e) = run().await {
        error!("{e:#}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

async fn run() -> anyhow::Result<()> {
    let config = Config::load()?;
    let zpl = read_payload(&config)?;

    info!(
        "Sending {} bytes of ZPL to {}:{}",
        zpl.len(),
        config.host,
        config.port
    );

    let printer =
        NetworkPrinter::new(config.host.as_str(), config.port).with_timeout(config.timeout());

    printer.print(zpl.as_bytes()).await?;

    Ok(())
}

/// Read the ZPL payload: file argument, then the configured file, then
/// stdin.
fn read_payload(config: &Config) -> anyhow::Result<String> {
    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .or_else(|| config.zpl_file.clone());

    let zpl = match path {
        Some(path) => std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read ZPL file {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read ZPL from stdin")?;
            buf
        }
    };

    if zpl.trim().is_empty() {
        anyhow::bail!("empty ZPL payload");
    }

    Ok(zpl)
}

fn init_logger() {
    let level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into());

    tracing_subscriber::fmt()
        .with_max_level(level.parse().unwrap_or(tracing::Level::INFO))
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false)
        .init();
}
