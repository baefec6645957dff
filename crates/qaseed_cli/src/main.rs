//! Seeding command-line entry point.
//!
//! # Responsibility
//! - Parse the scale coefficient and operational flags.
//! - Bootstrap logging, open the store, run the pipeline, print the summary.
//!
//! # Invariants
//! - Any store error exits non-zero; partially seeded data is left in place.

use clap::Parser;
use qaseed_core::db::open_db;
use qaseed_core::{default_log_level, init_logging, run_seeded, LogProgress};
use rand::Rng;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(
    name = "qaseed",
    version,
    about = "Populate a question/answer database with synthetic data"
)]
struct Args {
    /// Scale coefficient driving all entity counts.
    coefficient: u64,

    /// SQLite database file to populate.
    #[arg(long, default_value = "qaseed.db")]
    db: PathBuf,

    /// Seed for reproducible generation. Drawn from OS entropy when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Directory for rolling log files. File logging is off when omitted.
    #[arg(long)]
    log_dir: Option<PathBuf>,

    /// Log level for file logging.
    #[arg(long, default_value_t = default_log_level().to_string())]
    log_level: String,
}

fn main() -> ExitCode {
    let args = Args::parse();

    if let Some(log_dir) = &args.log_dir {
        let Some(dir) = log_dir.to_str() else {
            eprintln!("qaseed: log directory must be valid UTF-8");
            return ExitCode::FAILURE;
        };
        if let Err(err) = init_logging(&args.log_level, dir) {
            eprintln!("qaseed: {err}");
            return ExitCode::FAILURE;
        }
    }

    let seed = args.seed.unwrap_or_else(|| rand::rng().random());

    let conn = match open_db(&args.db) {
        Ok(conn) => conn,
        Err(err) => {
            eprintln!("qaseed: failed to open `{}`: {err}", args.db.display());
            return ExitCode::FAILURE;
        }
    };

    println!(
        "Seeding `{}` with coefficient {} (seed {seed})",
        args.db.display(),
        args.coefficient
    );
    match run_seeded(&conn, args.coefficient, seed, &LogProgress) {
        Ok(summary) => {
            println!("Successfully created:");
            println!("- Users: {}", summary.users);
            println!("- Questions: {}", summary.questions);
            println!("- Answers: {}", summary.answers);
            println!("- Tags: {}", summary.tags);
            println!("- Question votes: {}", summary.question_votes);
            println!("- Answer votes: {}", summary.answer_votes);
            println!("- Total votes: {}", summary.total_votes());
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("qaseed: seeding failed: {err}");
            ExitCode::FAILURE
        }
    }
}
