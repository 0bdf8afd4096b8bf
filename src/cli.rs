use std::{path::PathBuf, str::FromStr};

use clap::{builder::NonEmptyStringValueParser, ArgAction, Parser};

use crate::{
    aggregator::InactivityFilter, credentials::CredentialSource, sort::SortKey, ReportOptions,
};

/// Enumerates Lambda functions from every region with interesting metadata.
#[derive(Debug, Parser)]
#[command(name = "list-lambdas", version)]
pub struct Cli {
    /// Print all the information to the screen (default: print summarized information).
    #[arg(long = "all")]
    pub show_all: bool,

    /// CSV filename to output full table data.
    #[arg(long, value_name = "OUTPUT_FILENAME")]
    pub csv: Option<PathBuf>,

    /// AWS access key id. Must provide AWS secret access key as well (default: from local configuration).
    #[arg(long, value_name = "TOKEN_KEY_ID", requires = "token_secret")]
    pub token_key_id: Option<String>,

    /// AWS secret access key. Must provide AWS access key id as well (default: from local configuration).
    #[arg(long, value_name = "TOKEN_SECRET", requires = "token_key_id")]
    pub token_secret: Option<String>,

    /// AWS profile (default: "default" from local configuration).
    #[arg(long)]
    pub profile: Option<String>,

    /// Filter only Lambda functions with minimum days of inactivity.
    #[arg(long, default_value_t = 0, value_name = "MINIMUM_INACTIVE_DAYS")]
    pub inactive_days_filter: u32,

    /// Column name to sort by. Options: region, last-modified, last-invocation, runtime.
    #[arg(long, default_value = "region", value_parser = SortKey::from_str)]
    pub sort_by: SortKey,

    /// Only inventory this region. Can be repeated (default: every enabled region).
    #[arg(long = "region", value_name = "REGION", value_parser = NonEmptyStringValueParser::new())]
    pub regions: Vec<String>,

    /// Maximum number of regions, and of log lookups per region, queried at once.
    #[arg(long, default_value_t = 8, value_parser = clap::value_parser!(u16).range(1..=64))]
    pub concurrency: u16,

    /// Hide the progress bar.
    #[arg(long)]
    pub no_progress: bool,

    /// Increase log verbosity (-v info, -vv debug).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Maximum level for the log subscriber.
    pub fn log_level(&self) -> tracing::Level {
        match self.verbose {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            _ => tracing::Level::DEBUG,
        }
    }
}

impl From<Cli> for ReportOptions {
    fn from(cli: Cli) -> Self {
        ReportOptions {
            credentials: CredentialSource::select(cli.token_key_id, cli.token_secret, cli.profile),
            regions: cli.regions,
            filter: InactivityFilter {
                min_inactive_days: cli.inactive_days_filter,
            },
            sort_by: cli.sort_by,
            show_all: cli.show_all,
            csv: cli.csv,
            concurrency: usize::from(cli.concurrency),
            show_progress: !cli.no_progress,
        }
    }
}
