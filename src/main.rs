//! retouch CLI - create files or update their timestamps

use anyhow::Context;
use clap::Parser;
use colored::Colorize;
use tracing::warn;

use retouch::batch::{self, BatchEvent, EXIT_USAGE};
use retouch::error::{FixSuggestion, TouchError};
use retouch::{parse_custom_time, TouchEngine, TouchOptions};

#[derive(Parser)]
#[command(name = "retouch")]
#[command(about = "Create files or update their access and modification times")]
#[command(version)]
struct Cli {
    /// Files to touch (`name_{1...3}.txt` expands to a numbered sequence)
    #[arg(required = true, value_name = "FILE")]
    files: Vec<String>,

    /// Change only the access time (wins over -m when both are given)
    #[arg(short = 'a', long = "access-time")]
    access_time: bool,

    /// Change only the modification time
    #[arg(short = 'm', long = "modification-time")]
    modification_time: bool,

    /// Do not create missing files
    #[arg(short = 'c', long)]
    no_create: bool,

    /// Same as --no-create
    #[arg(short = 'u', long)]
    update_only: bool,

    /// Use this local time instead of now
    #[arg(short = 't', long, value_name = "YYYYMMDDHHMM")]
    time: Option<String>,

    /// Report every action
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn options(&self) -> Result<TouchOptions, TouchError> {
        let custom_time = self.time.as_deref().map(parse_custom_time).transpose()?;
        Ok(TouchOptions {
            no_create: self.no_create || self.update_only,
            access_only: self.access_time,
            mod_only: self.modification_time,
            custom_time,
            verbose: self.verbose,
        })
    }
}

fn main() {
    if let Err(e) = init_logging() {
        eprintln!("{} {:#}", "Warning:".yellow(), e);
    }

    let cli = Cli::parse();
    std::process::exit(run(&cli));
}

fn init_logging() -> anyhow::Result<()> {
    // stderr only: stdout carries the verbose action lines
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))
        .context("Failed to initialize logging")
}

fn run(cli: &Cli) -> i32 {
    let options = match cli.options() {
        Ok(options) => options,
        Err(e) => {
            report_error(&e);
            return EXIT_USAGE;
        }
    };

    if options.access_only && options.mod_only {
        warn!("both --access-time and --modification-time given; only the access time is changed");
    }

    let engine = TouchEngine::system();
    let result = batch::run(&engine, cli.files.as_slice(), &options, |event| match event {
        BatchEvent::Touched(report) => {
            if options.verbose {
                for line in report.lines() {
                    println!("{} {}", "→".cyan(), line);
                }
            }
        }
        BatchEvent::Failed(err) => report_error(err),
    });

    match result {
        Ok(summary) => {
            if options.verbose && summary.processed() > 1 {
                println!(
                    "{} file(s) processed, {} failed",
                    summary.processed(),
                    summary.failed
                );
            }
            summary.exit_code()
        }
        Err(e) => {
            report_error(&e);
            EXIT_USAGE
        }
    }
}

fn report_error(e: &TouchError) {
    eprintln!("{} {}", "Error:".red().bold(), e);
    if let Some(suggestion) = e.fix_suggestion() {
        eprintln!("  {} {}", "Fix:".yellow(), suggestion);
    }
}
