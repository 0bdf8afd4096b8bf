#![deny(missing_docs)]
//! <fullname>Lambda inventory</fullname>
//!
//! Enumerates the Lambda functions deployed in every region of
//! an account, finds when each one was last invoked from its
//! CloudWatch log streams, and reports them as a table and CSV.
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use indicatif::{ProgressBar, ProgressStyle};

/// `aggregator` drives the inventory pass over every region
pub mod aggregator;
pub use aggregator::{Aggregator, InactivityFilter};

/// `cli` holds the command line surface
pub mod cli;

mod cloudwatch_logs;

/// `credentials` includes helpers to load the AWS configuration
pub mod credentials;
pub use credentials::CredentialSource;

mod error;
pub use error::RuntimeError;

mod function_record;
pub use function_record::FunctionRecord;

mod lambda;

/// `provider` defines the interfaces to the cloud provider
pub mod provider;
pub use provider::AwsProvider;

mod regions;

/// `report` renders records into tables
pub mod report;
pub use report::{Report, Table};

/// `sinks` writes tables to the terminal and to CSV files
pub mod sinks;

/// `sort` orders records by a report column
pub mod sort;
pub use sort::SortKey;

#[cfg(test)]
mod test_util;

/// Options of one inventory run
#[derive(Clone, Debug, PartialEq)]
pub struct ReportOptions {
    /// Where the AWS credentials come from
    pub credentials: CredentialSource,
    /// Regions to inventory, every enabled region when empty
    pub regions: Vec<String>,
    /// Inactivity filter applied to every function
    pub filter: InactivityFilter,
    /// Report sort column
    pub sort_by: SortKey,
    /// Print the full table instead of the summary
    pub show_all: bool,
    /// Destination of the full table as CSV
    pub csv: Option<PathBuf>,
    /// Maximum regions, and log lookups per region, in flight
    pub concurrency: usize,
    /// Draw a progress bar on stderr
    pub show_progress: bool,
}

/// `generate_report` collects, sorts and renders the inventory of a provider
#[tracing::instrument(skip(provider, options, progress))]
pub async fn generate_report<P: provider::Provider>(
    provider: &P,
    options: &ReportOptions,
    now: DateTime<Utc>,
    progress: ProgressBar,
) -> Result<Report, RuntimeError> {
    let aggregator = Aggregator::new(
        provider,
        options.filter,
        options.concurrency,
        now,
        progress,
    );
    let records = aggregator.collect().await?;
    let records = sort::sort_records(records, options.sort_by);
    Ok(Report::new(&records, now))
}

/// `run` is the command line entry point: it inventories the account
/// and writes the report to the terminal and, optionally, to a CSV file
#[tracing::instrument(skip(options))]
pub async fn run(options: ReportOptions) -> Result<(), RuntimeError> {
    let config = credentials::load_config(&options.credentials).await;
    let provider = AwsProvider::new(config, options.regions.clone());

    let report = generate_report(&provider, &options, Utc::now(), progress_bar(&options)).await?;

    sinks::print_table(report.terminal_table(options.show_all));
    if let Some(path) = &options.csv {
        sinks::write_csv(path, &report.full)?;
    }

    Ok(())
}

fn progress_bar(options: &ReportOptions) -> ProgressBar {
    if !options.show_progress {
        return ProgressBar::hidden();
    }

    let progress = ProgressBar::new(0);
    if let Ok(style) = ProgressStyle::with_template("{bar:40} {pos}/{len} regions {msg}") {
        progress.set_style(style);
    }
    progress
}
