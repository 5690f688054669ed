//! Script Inject Binary
//!
//! Runs the injector over the default pages directory and prints one line per file
//! followed by the tally. Takes no arguments.

use script_inject::logging::{init_logging, LoggingConfig};
use script_inject::report::{format_outcome_line, format_summary};
use script_inject::{Injector, InjectorConfig};
use std::io::IsTerminal;
use std::process;
use tracing::error;

fn main() {
    let color = std::io::stdout().is_terminal();

    let logging_config = LoggingConfig {
        color: std::io::stderr().is_terminal(),
        ..LoggingConfig::default()
    };
    if let Err(e) = init_logging(&logging_config) {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    let injector = match Injector::new(InjectorConfig::default()) {
        Ok(injector) => injector,
        Err(e) => {
            error!("Cannot start injection run: {}", e);
            eprintln!("{}", e);
            process::exit(1);
        }
    };

    let summary = match injector.run_with(|file, outcome| {
        println!("{}", format_outcome_line(file, outcome, color));
    }) {
        Ok(summary) => summary,
        Err(e) => {
            error!("Injection run aborted: {}", e);
            eprintln!("{}", e);
            process::exit(1);
        }
    };

    println!();
    println!("{}", format_summary(&summary, color));
}
