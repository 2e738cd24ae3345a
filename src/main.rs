use anyhow::Result;
use clap::Parser;
use std::path::Path;
use tracing::error;

use followergen::output::OUTPUT_FILE;
use followergen::utils::setup_logging;
use followergen::{generate_follower_data, Args};

fn main() -> Result<()> {
    let args = Args::parse();
    setup_logging(args.verbose);

    match generate_follower_data(Path::new(OUTPUT_FILE)) {
        Ok(summary) => {
            println!(
                "Created {} with {} entries",
                OUTPUT_FILE, summary.total_entries
            );
            Ok(())
        }
        Err(e) => {
            error!(action = "fail", component = "generator", error = %e, "Follower data generation failed");
            eprintln!("Error: {:#}", e);
            std::process::exit(1);
        }
    }
}
