//! Narrow interfaces to the cloud provider, and their AWS implementation.
#![allow(async_fn_in_trait)]

use aws_sdk_lambda::model::FunctionConfiguration;
use aws_types::{region::Region, SdkConfig};
use futures_util::stream::LocalBoxStream;

use crate::{cloudwatch_logs, error::RuntimeError, lambda, regions};

/// Account wide view: which regions to inventory, and a scoped view per region.
pub trait Provider {
    /// Provider view scoped to a single region.
    type Region: RegionProvider;

    /// Regions the function inventory service is available in.
    async fn regions(&self) -> Result<Vec<String>, RuntimeError>;

    /// Scope the provider to one region.
    fn region(&self, region: &str) -> Self::Region;
}

/// Inventory and activity queries for a single region.
pub trait RegionProvider {
    /// Lazily page through every function of the region.
    fn functions(&self) -> LocalBoxStream<'_, Result<FunctionConfiguration, RuntimeError>>;

    /// Most recent invocation in epoch millis, `None` when unknown.
    async fn last_invocation(&self, function_name: &str) -> Option<i64>;
}

/// `AwsProvider` derives regional Lambda and CloudWatch Logs clients
/// from one shared configuration.
pub struct AwsProvider {
    config: SdkConfig,
    regions: Vec<String>,
}

impl AwsProvider {
    /// Initialize the provider. A non empty `regions` list skips the region catalog.
    pub fn new(config: SdkConfig, regions: Vec<String>) -> AwsProvider {
        AwsProvider { config, regions }
    }
}

impl Provider for AwsProvider {
    type Region = AwsRegion;

    async fn regions(&self) -> Result<Vec<String>, RuntimeError> {
        if !self.regions.is_empty() {
            tracing::info!(regions = ?self.regions, "using regions from the command line");
            return Ok(self.regions.clone());
        }

        let client = aws_sdk_ec2::Client::new(&self.config);
        regions::list_regions(&client).await
    }

    fn region(&self, region: &str) -> AwsRegion {
        let lambda_config = aws_sdk_lambda::config::Builder::from(&self.config)
            .region(Region::new(region.to_owned()))
            .build();
        let logs_config = aws_sdk_cloudwatchlogs::config::Builder::from(&self.config)
            .region(Region::new(region.to_owned()))
            .build();

        AwsRegion {
            lambda: aws_sdk_lambda::Client::from_conf(lambda_config),
            logs: aws_sdk_cloudwatchlogs::Client::from_conf(logs_config),
        }
    }
}

/// Regional Lambda and CloudWatch Logs clients.
pub struct AwsRegion {
    lambda: aws_sdk_lambda::Client,
    logs: aws_sdk_cloudwatchlogs::Client,
}

impl RegionProvider for AwsRegion {
    fn functions(&self) -> LocalBoxStream<'_, Result<FunctionConfiguration, RuntimeError>> {
        lambda::list_functions(&self.lambda)
    }

    async fn last_invocation(&self, function_name: &str) -> Option<i64> {
        cloudwatch_logs::find_last_invocation(&self.logs, function_name).await
    }
}
