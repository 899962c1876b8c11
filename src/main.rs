// src/main.rs
use std::process::exit;
use anyhow::Result;
use clap::Parser;
use tracing::{error, Level};

use wordforge::cli::{App, Args};
use wordforge::WordforgeError;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let level = if args.verbose {
        Level::DEBUG
    } else if args.quiet {
        Level::ERROR
    } else {
        Level::WARN
    };

    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let verbose = args.verbose;

    let app = match App::new(args) {
        Ok(app) => app,
        Err(e) => {
            error!("Failed to initialize application: {:#}", e);
            exit(1);
        }
    };

    if let Err(e) = app.run().await {
        if matches!(e.downcast_ref::<WordforgeError>(), Some(WordforgeError::Cancelled)) {
            error!("Operation cancelled by user");
        } else if verbose {
            error!("Error: {:?}", e);
        } else {
            error!("Error: {:#}", e);
        }
        exit(1);
    }

    Ok(())
}
