use aws_sdk_ec2::{Client, Error};

use crate::error::RuntimeError;

/// List the regions enabled for the account, sorted and de-duplicated.
/// A failure here is fatal: without regions there is nothing to inventory.
#[tracing::instrument(skip(client))]
pub async fn list_regions(client: &Client) -> Result<Vec<String>, RuntimeError> {
    tracing::info!("listing enabled regions");

    let output = client
        .describe_regions()
        .send()
        .await
        .map_err(Error::from)?;

    let mut regions: Vec<String> = output
        .regions
        .unwrap_or_default()
        .into_iter()
        .filter_map(|r| r.region_name)
        .filter(|name| !name.is_empty())
        .collect();
    regions.sort();
    regions.dedup();

    tracing::info!(count = regions.len(), "found regions");
    Ok(regions)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::test_util::*;
    use aws_sdk_ec2::{Client, Config};
    use aws_smithy_client::{erase::DynConnector, test_connection::TestConnection};
    use aws_smithy_http::body::SdkBody;

    #[tokio::test]
    async fn test_list_regions_sorted() -> Result<(), RuntimeError> {
        let conn = TestConnection::new(vec![(
            get_request_builder("ec2")
                .body(SdkBody::from("Action=DescribeRegions&Version=2016-11-15"))
                .unwrap(),
            http::Response::builder()
                .status(200)
                .body(SdkBody::from(
                    r#"<DescribeRegionsResponse xmlns="http://ec2.amazonaws.com/doc/2016-11-15/">
    <requestId>59dbff89-35bd-4eac-99ed-be587EXAMPLE</requestId>
    <regionInfo>
        <item>
            <regionName>us-west-2</regionName>
            <regionEndpoint>ec2.us-west-2.amazonaws.com</regionEndpoint>
        </item>
        <item>
            <regionName>eu-west-1</regionName>
            <regionEndpoint>ec2.eu-west-1.amazonaws.com</regionEndpoint>
        </item>
        <item>
            <regionName>us-east-1</regionName>
            <regionEndpoint>ec2.us-east-1.amazonaws.com</regionEndpoint>
        </item>
    </regionInfo>
</DescribeRegionsResponse>"#,
                ))
                .unwrap(),
        )]);
        let config = Config::new(&get_mock_config().await);
        let client = Client::from_conf_conn(config, DynConnector::new(conn.clone()));

        let regions = list_regions(&client).await?;
        assert_eq!(vec!["eu-west-1", "us-east-1", "us-west-2"], regions);

        Ok(())
    }

    #[tokio::test]
    async fn test_list_regions_failure_is_an_error() {
        let conn = TestConnection::new(vec![(
            get_request_builder("ec2").body(SdkBody::empty()).unwrap(),
            http::Response::builder()
                .status(403)
                .body(SdkBody::from(
                    r#"<Response><Errors><Error><Code>UnauthorizedOperation</Code><Message>You are not authorized to perform this operation.</Message></Error></Errors><RequestID>1234</RequestID></Response>"#,
                ))
                .unwrap(),
        )]);
        let config = Config::new(&get_mock_config().await);
        let client = Client::from_conf_conn(config, DynConnector::new(conn.clone()));

        let res = list_regions(&client).await;
        assert!(matches!(res, Err(RuntimeError::RegionCatalog(_))));
    }
}
