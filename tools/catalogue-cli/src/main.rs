use anyhow::{bail, Context, Result};
use clap::Parser;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::PathBuf;

use transport_catalogue::prelude::*;

#[derive(Parser, Debug)]
#[command(
    name = "transport-catalogue",
    author,
    version,
    about = "Answer route and stop statistics requests",
    long_about = "Reads a count N followed by N base requests (`Stop X: lat, lng, Dm to Y, ...` \
                  and `Bus X: A > B > A` or `Bus X: A - B`), then a count M followed by M \
                  statistics requests (`Bus X`, `Stop X`), and prints one answer per request."
)]
struct Args {
    /// Input transcript (defaults to stdin)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Verbose output (show debug messages)
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(if args.verbose { "debug" } else { "info" }),
    )
    .format_timestamp(None)
    .init();

    let stdin = io::stdin();
    let mut reader: Box<dyn BufRead> = match &args.input {
        Some(path) => {
            if !path.exists() {
                bail!("Input file does not exist: {}", path.display());
            }
            log::info!("Input: {}", path.display());
            let file = File::open(path)
                .with_context(|| format!("Failed to open {}", path.display()))?;
            Box::new(BufReader::new(file))
        }
        None => Box::new(stdin.lock()),
    };

    let mut catalogue = TransportCatalogue::new();
    read_base_requests(&mut reader, &mut catalogue).context("Failed to read base requests")?;

    let stdout = io::stdout();
    let mut output = BufWriter::new(stdout.lock());
    process_stat_requests(&mut reader, &catalogue, &mut output)
        .context("Failed to answer statistics requests")?;
    output.flush().context("Failed to write answers")?;

    Ok(())
}
