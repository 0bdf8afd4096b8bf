use aws_sdk_cloudwatchlogs::{model::OrderBy, Client, Error};

/// Log group Lambda writes a function's execution logs to.
pub fn log_group_name(function_name: &str) -> String {
    format!("/aws/lambda/{function_name}")
}

/// Find the most recent event timestamp, in epoch millis, across the
/// log streams of the function's log group.
///
/// Returns `None` when the log group doesn't exist, has no streams,
/// or cannot be queried. Missing logs are normal for many functions,
/// so no error reaches the caller.
#[tracing::instrument(skip(client))]
pub async fn find_last_invocation(client: &Client, function_name: &str) -> Option<i64> {
    let res = client
        .describe_log_streams()
        .log_group_name(log_group_name(function_name))
        .order_by(OrderBy::LastEventTime)
        .descending(true)
        .send()
        .await;

    let output = match res {
        Ok(output) => output,
        Err(sdk_err) => {
            let err = sdk_err.into();
            match err {
                Error::ResourceNotFoundException(_) => tracing::debug!("log group not found"),
                _ => tracing::warn!(error = %err, "unable to describe log streams"),
            }
            return None;
        }
    };

    // streams without an event still count, as the oldest possible one
    output
        .log_streams
        .unwrap_or_default()
        .iter()
        .map(|stream| stream.last_event_timestamp.unwrap_or(0))
        .max()
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::test_util::*;
    use aws_sdk_cloudwatchlogs::{Client, Config};
    use aws_smithy_client::{erase::DynConnector, test_connection::TestConnection};
    use aws_smithy_http::body::SdkBody;

    fn describe_request() -> http::Request<SdkBody> {
        get_request_builder("logs")
            .header("content-type", "application/x-amz-json-1.1")
            .header("x-amz-target", "Logs_20140328.DescribeLogStreams")
            .body(SdkBody::from(
                r#"{"logGroupName": "/aws/lambda/function", "orderBy": "LastEventTime", "descending": true}"#,
            ))
            .unwrap()
    }

    #[tokio::test]
    async fn test_find_last_invocation_takes_maximum() {
        let conn = TestConnection::new(vec![(
            describe_request(),
            http::Response::builder()
                .status(200)
                .body(SdkBody::from(r#"{"logStreams": [{"logStreamName": "a", "lastEventTimestamp": 1652000000000}, {"logStreamName": "b", "lastEventTimestamp": 1653000000000}, {"logStreamName": "c"}]}"#))
                .unwrap(),
        )]);
        let config = Config::new(&get_mock_config().await);
        let client = Client::from_conf_conn(config, DynConnector::new(conn.clone()));

        let last = find_last_invocation(&client, "function").await;
        assert_eq!(Some(1653000000000), last);
        conn.assert_requests_match(&vec![]);
    }

    #[tokio::test]
    async fn test_find_last_invocation_streams_without_events() {
        let conn = TestConnection::new(vec![(
            describe_request(),
            http::Response::builder()
                .status(200)
                .body(SdkBody::from(r#"{"logStreams": [{"logStreamName": "a"}]}"#))
                .unwrap(),
        )]);
        let config = Config::new(&get_mock_config().await);
        let client = Client::from_conf_conn(config, DynConnector::new(conn.clone()));

        // a stream exists, so this is a real (epoch zero) value and not unknown
        assert_eq!(Some(0), find_last_invocation(&client, "function").await);
    }

    #[tokio::test]
    async fn test_find_last_invocation_without_streams() {
        let conn = TestConnection::new(vec![(
            describe_request(),
            http::Response::builder()
                .status(200)
                .body(SdkBody::from(r#"{"logStreams": []}"#))
                .unwrap(),
        )]);
        let config = Config::new(&get_mock_config().await);
        let client = Client::from_conf_conn(config, DynConnector::new(conn.clone()));

        assert_eq!(None, find_last_invocation(&client, "function").await);
    }

    #[tokio::test]
    async fn test_find_last_invocation_missing_log_group() {
        let conn = TestConnection::new(vec![(
            describe_request(),
            http::Response::builder()
                .status(400)
                .body(SdkBody::from(r#"{"__type": "ResourceNotFoundException", "message": "The specified log group does not exist."}"#))
                .unwrap(),
        )]);
        let config = Config::new(&get_mock_config().await);
        let client = Client::from_conf_conn(config, DynConnector::new(conn.clone()));

        assert_eq!(None, find_last_invocation(&client, "function").await);
    }

    #[test]
    fn test_log_group_name() {
        assert_eq!("/aws/lambda/my-function", log_group_name("my-function"));
    }
}
