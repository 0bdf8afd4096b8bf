use std::collections::HashSet;

use aws_sdk_lambda::model::FunctionConfiguration;
use chrono::{DateTime, TimeZone, Utc};
use futures_util::stream::{self, StreamExt};
use indicatif::ProgressBar;

use crate::{
    error::RuntimeError,
    function_record::FunctionRecord,
    provider::{Provider, RegionProvider},
};

/// Whole days elapsed between an epoch millis timestamp and `now`.
pub fn days_since(now: DateTime<Utc>, epoch_millis: i64) -> i64 {
    match Utc.timestamp_millis_opt(epoch_millis).single() {
        Some(then) => (now - then).num_days(),
        None => 0,
    }
}

/// Retention rule on the number of days since the last invocation.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct InactivityFilter {
    /// Minimum number of inactive days, 0 keeps everything
    pub min_inactive_days: u32,
}

impl InactivityFilter {
    /// Whether a function with this last invocation stays in the report.
    /// Unknown activity is always kept.
    pub fn retains(&self, last_invocation: Option<i64>, now: DateTime<Utc>) -> bool {
        match last_invocation {
            Some(millis) => days_since(now, millis) >= i64::from(self.min_inactive_days),
            None => true,
        }
    }
}

/// `Aggregator` runs one inventory pass over every region of a provider.
pub struct Aggregator<'a, P> {
    provider: &'a P,
    filter: InactivityFilter,
    concurrency: usize,
    now: DateTime<Utc>,
    progress: ProgressBar,
}

impl<'a, P: Provider> Aggregator<'a, P> {
    /// Initialize the aggregator. `concurrency` bounds both the regions and
    /// the log lookups in flight.
    pub fn new(
        provider: &'a P,
        filter: InactivityFilter,
        concurrency: usize,
        now: DateTime<Utc>,
        progress: ProgressBar,
    ) -> Aggregator<'a, P> {
        Aggregator {
            provider,
            filter,
            concurrency: concurrency.max(1),
            now,
            progress,
        }
    }

    /// Collect the records of every region, in region then discovery order.
    /// Only a failure to enumerate the regions is an error.
    #[tracing::instrument(skip(self))]
    pub async fn collect(&self) -> Result<Vec<FunctionRecord>, RuntimeError> {
        let regions = self.provider.regions().await?;
        tracing::info!(count = regions.len(), "inventorying regions");
        self.progress.set_length(regions.len() as u64);

        let per_region: Vec<Vec<FunctionRecord>> = stream::iter(regions)
            .map(|region| self.collect_region(region))
            .buffered(self.concurrency)
            .inspect(|_| self.progress.inc(1))
            .collect()
            .await;
        self.progress.finish_and_clear();

        let records: Vec<FunctionRecord> = per_region.into_iter().flatten().collect();
        tracing::info!(count = records.len(), "collected functions");
        Ok(records)
    }

    /// Collect the retained records of one region.
    /// A listing failure drops the whole region, the run carries on.
    #[tracing::instrument(skip(self))]
    async fn collect_region(&self, region: String) -> Vec<FunctionRecord> {
        let scope = self.provider.region(&region);
        let (region_ref, scope_ref) = (region.as_str(), &scope);

        let mut resolved = scope
            .functions()
            .map(move |item| async move {
                let config = item?;
                Ok::<_, RuntimeError>(self.resolve(region_ref, scope_ref, config).await)
            })
            .buffered(self.concurrency);

        let mut seen = HashSet::new();
        let mut records = Vec::new();
        while let Some(item) = resolved.next().await {
            match item {
                Ok(Some(record)) => {
                    if seen.insert(record.name.clone()) {
                        records.push(record);
                    } else {
                        tracing::debug!(function = %record.name, "skipping duplicate function");
                    }
                }
                Ok(None) => {}
                Err(err) => {
                    tracing::warn!(error = %err, "unable to list functions, skipping region");
                    return Vec::new();
                }
            }
        }

        self.progress
            .set_message(format!("{region}: {} functions", records.len()));
        records
    }

    /// Resolve the activity of one function and apply the filter.
    async fn resolve(
        &self,
        region: &str,
        scope: &P::Region,
        config: FunctionConfiguration,
    ) -> Option<FunctionRecord> {
        let name = match config.function_name() {
            Some(name) => name.to_owned(),
            None => {
                tracing::warn!("skipping function without a name");
                return None;
            }
        };

        let last_invocation = scope.last_invocation(&name).await;
        if !self.filter.retains(last_invocation, self.now) {
            tracing::debug!(function = %name, "filtered out as recently active");
            return None;
        }

        match FunctionRecord::try_new(region, config, last_invocation) {
            Ok(record) => Some(record),
            Err(err) => {
                tracing::warn!(function = %name, error = %err, "skipping function");
                None
            }
        }
    }
}
