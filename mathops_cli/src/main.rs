use clap::Parser;
use mathops_core::{Config, ErrorSink, JsonlSink, NullSink, Repl, Result};
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "mathops")]
#[command(about = "Interactive calculator for basic math operations", long_about = None)]
struct Cli {
    /// Override the error log file location
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Disable error-event logging
    #[arg(long)]
    no_log: bool,
}

fn main() -> Result<()> {
    // Initialize logging
    mathops_core::logging::init();

    let cli = Cli::parse();

    let config = Config::load()?;
    let log_file = cli.log_file.unwrap_or_else(|| config.log.file.clone());

    let mut sink: Box<dyn ErrorSink> = if cli.no_log {
        Box::new(NullSink)
    } else {
        tracing::debug!("Recording error events to {:?}", log_file);
        Box::new(JsonlSink::new(log_file))
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    Repl::new(stdin.lock(), stdout.lock(), sink.as_mut()).run()
}
