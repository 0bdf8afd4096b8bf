use std::{fmt, str::FromStr};

use crate::{error::RuntimeError, function_record::FunctionRecord};

/// Column the report can be sorted by
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortKey {
    /// Region identifier
    #[default]
    Region,
    /// Last modification time
    LastModified,
    /// Last invocation time, functions without log data first
    LastInvocation,
    /// Runtime identifier, functions without a runtime first
    Runtime,
}

impl SortKey {
    /// Every accepted sort key, in the order they're documented.
    pub const ALL: [SortKey; 4] = [
        SortKey::Region,
        SortKey::LastModified,
        SortKey::LastInvocation,
        SortKey::Runtime,
    ];

    /// Name accepted on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Region => "region",
            SortKey::LastModified => "last-modified",
            SortKey::LastInvocation => "last-invocation",
            SortKey::Runtime => "runtime",
        }
    }
}

impl FromStr for SortKey {
    type Err = RuntimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| RuntimeError::IllegalSortKey(s.to_owned()))
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sort the records in ascending key order. The sort is stable, so ties
/// keep their discovery order.
pub fn sort_records(mut records: Vec<FunctionRecord>, key: SortKey) -> Vec<FunctionRecord> {
    match key {
        SortKey::Region => records.sort_by(|a, b| a.region.cmp(&b.region)),
        SortKey::LastModified => records.sort_by_key(|r| r.last_modified),
        SortKey::LastInvocation => records.sort_by_key(|r| r.last_invocation),
        SortKey::Runtime => records.sort_by(|a, b| a.runtime.cmp(&b.runtime)),
    }
    records
}
