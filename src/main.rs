use clap::Parser;
use figmd::application::{FileOutcome, RewriteService};
use figmd::cli::{format_record, format_summary, Cli, Commands};
use figmd::domain::{ExtensionSet, RewriteRequest, Target};
use figmd::error::FigmdError;
use figmd::infrastructure::{FileSystemStore, Prompt};
use std::io;
use std::time::Instant;
use tracing::info;

fn main() {
    let cli = Cli::parse();

    init_tracing(&cli);

    let result = run(cli);

    match result {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<(), FigmdError> {
    let store = FileSystemStore::new();
    let request = match cli.command {
        Some(Commands::File { path }) => RewriteRequest::file(path),
        Some(Commands::Dir { path, ext }) => {
            let extensions = ext
                .as_deref()
                .map(ExtensionSet::parse)
                .unwrap_or_default();
            RewriteRequest::directory(path, extensions)
        }
        None => Prompt::new(io::stdin().lock(), io::stdout().lock()).ask_request(&store)?,
    };

    let started = Instant::now();
    let service = RewriteService::new(store);
    let report = service.execute(&request)?;

    for record in &report.records {
        let line = format_record(record);
        match record.outcome {
            FileOutcome::Failed(_) => eprintln!("{}", line),
            _ => println!("{}", line),
        }
    }

    if let Target::Directory { .. } = request.target {
        println!();
        println!("{}", format_summary(&report));
    }

    info!(
        "Processed {} file(s) in {:?}",
        report.scanned_files(),
        started.elapsed()
    );

    Ok(())
}

fn init_tracing(cli: &Cli) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = match cli.verbose {
        0 if cli.quiet => EnvFilter::new("error"),
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(io::stderr)
                .with_target(cli.verbose >= 2),
        )
        .init();
}
