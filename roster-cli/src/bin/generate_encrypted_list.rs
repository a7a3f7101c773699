use anyhow::{Context, Result};
use clap::Parser;
use roster_core::{encrypt, parse_csv};
use std::io::{self, Read};
use tracing_subscriber::EnvFilter;

/// Reads roster CSV from stdin, validates it and prints it encrypted
#[derive(Parser)]
#[command(name = "generate-encrypted-list")]
#[command(about = "Encrypt roster CSV from stdin for bundling with the app", long_about = None)]
#[command(version)]
struct Cli {
    /// Password used as the XOR key
    password: String,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {:?}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    println!("{}", encrypt_roster(io::stdin().lock(), &cli.password)?);
    Ok(())
}

/// Reads roster CSV from `reader` and returns it encrypted as base64.
///
/// The CSV must parse as a roster first; nothing the app couldn't import
/// gets encrypted.
fn encrypt_roster(mut reader: impl Read, password: &str) -> Result<String> {
    let mut input = String::new();
    reader
        .read_to_string(&mut input)
        .context("Failed to read CSV from stdin")?;
    let csv = input.lines().collect::<Vec<_>>().join("\n");

    let players = parse_csv(&csv)?;
    tracing::info!(players = players.len(), "validated roster");

    Ok(encrypt(&csv, password)?)
}
