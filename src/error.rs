use thiserror::Error as ThisError;

/// Different errors that the application can raise
#[derive(Debug, ThisError)]
pub enum RuntimeError {
    /// Error returned when the sort column is not one of the known keys
    #[error("illegal column name: {0}")]
    IllegalSortKey(String),
    /// Error returned when the region catalog cannot be retrieved
    #[error("unable to list regions: {0}")]
    RegionCatalog(#[from] aws_sdk_ec2::Error),
    /// Error returned by the Lambda API while listing functions
    #[error("unexpected lambda error")]
    Lambda(#[from] aws_sdk_lambda::Error),
    /// Error returned by the CloudWatch Logs API
    #[error("unexpected cloudwatch logs error")]
    CloudWatchLogs(#[from] aws_sdk_cloudwatchlogs::Error),
    /// Error returned if a function record is missing an expected field
    #[error("missing function field {0}")]
    MissingField(String),
    /// Error returned while writing the CSV report
    #[error("unable to write csv report: {0}")]
    Csv(#[from] csv::Error),
    /// Error returned by the local filesystem
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}
