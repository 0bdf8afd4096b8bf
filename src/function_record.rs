use aws_sdk_lambda::model::FunctionConfiguration;
use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};

use crate::error::RuntimeError;

const LAST_MODIFIED_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f%z";
const LAST_MODIFIED_FALLBACK_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// `FunctionRecord` stores the reported information about one function
#[derive(Clone, Debug, PartialEq)]
pub struct FunctionRecord {
    /// Region the function was discovered in
    pub region: String,
    /// Function name, unique within its region
    pub name: String,
    /// Configured memory, in MB
    pub memory_mb: i32,
    /// Configured timeout, in seconds
    pub timeout_seconds: i32,
    /// Deployment package size, in bytes
    pub code_size_bytes: i64,
    /// Runtime identifier, empty for container image functions
    pub runtime: String,
    /// Free form description, empty when not set
    pub description: String,
    /// Last time the function configuration or code changed
    pub last_modified: Option<DateTime<Utc>>,
    /// Most recent log event, in epoch millis, `None` when no log data exists
    pub last_invocation: Option<i64>,
}

impl FunctionRecord {
    /// Build a record from the raw inventory data and the resolved activity.
    /// Fails when the configuration doesn't carry a function name.
    pub fn try_new(
        region: &str,
        config: FunctionConfiguration,
        last_invocation: Option<i64>,
    ) -> Result<FunctionRecord, RuntimeError> {
        let name = config
            .function_name
            .filter(|n| !n.is_empty())
            .ok_or_else(|| RuntimeError::MissingField("FunctionName".into()))?;

        Ok(FunctionRecord {
            region: region.to_owned(),
            name,
            memory_mb: config.memory_size.unwrap_or_default(),
            timeout_seconds: config.timeout.unwrap_or_default(),
            code_size_bytes: config.code_size,
            runtime: config
                .runtime
                .map(|r| r.as_str().to_owned())
                .unwrap_or_default(),
            description: config.description.unwrap_or_default(),
            last_modified: config.last_modified.as_deref().and_then(parse_last_modified),
            last_invocation,
        })
    }
}

/// Parse the inventory's modification timestamp, e.g. `2022-05-20T10:00:00.000+0000`.
/// Anything after the whole seconds is ignored when the offset can't be read.
pub fn parse_last_modified(value: &str) -> Option<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_str(value, LAST_MODIFIED_FORMAT) {
        return Some(parsed.with_timezone(&Utc));
    }

    let seconds = value.split('.').next()?;
    match NaiveDateTime::parse_from_str(seconds, LAST_MODIFIED_FALLBACK_FORMAT) {
        Ok(naive) => Some(Utc.from_utc_datetime(&naive)),
        Err(err) => {
            tracing::warn!(value, error = %err, "unable to parse last modified time");
            None
        }
    }
}
