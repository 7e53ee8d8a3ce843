mod console;
mod render;

use std::io;

use anyhow::Result;
use clap::Parser;

use crate::application::Ledger;

pub use console::Console;
pub use render::{ReportFormat, Renderer};

/// Bankdesk - in-memory banking console
#[derive(Parser)]
#[command(name = "bankdesk")]
#[command(about = "Menu-driven console for customers, accounts, transactions and loans")]
#[command(version)]
pub struct Cli {
    /// Currency symbol printed in front of amounts
    #[arg(long, default_value = "₹")]
    pub currency: String,

    /// Start with empty books instead of the demo customers
    #[arg(long)]
    pub no_sample_data: bool,

    /// Output format for statistics and reports
    #[arg(long, value_enum, default_value_t = ReportFormat::Table)]
    pub report_format: ReportFormat,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        init_tracing(self.verbose);

        let mut ledger = Ledger::new();
        if !self.no_sample_data {
            ledger = ledger.with_sample_data();
            println!("Sample banking data initialized successfully!");
            println!("All amounts are shown in {}", self.currency);
        }

        tracing::debug!(counts = ?ledger.counts(), "ledger ready");

        let renderer = Renderer::new(self.currency, self.report_format);
        let mut console = Console::new(ledger, io::stdin().lock(), io::stdout().lock(), renderer);
        console.run()
    }
}

/// Log to stderr so the menus on stdout stay clean.
/// `RUST_LOG` wins over the verbosity flag.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["bankdesk"]);
        assert_eq!(cli.currency, "₹");
        assert!(!cli.no_sample_data);
        assert_eq!(cli.report_format, ReportFormat::Table);
        assert!(!cli.verbose);
    }

    #[test]
    fn test_flags() {
        let cli = Cli::parse_from([
            "bankdesk",
            "--currency",
            "$",
            "--no-sample-data",
            "--report-format",
            "json",
            "-v",
        ]);
        assert_eq!(cli.currency, "$");
        assert!(cli.no_sample_data);
        assert_eq!(cli.report_format, ReportFormat::Json);
        assert!(cli.verbose);
    }
}
