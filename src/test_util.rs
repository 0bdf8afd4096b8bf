use aws_types::{region::Region, Credentials, SdkConfig};

/// Configuration for mocking AWS SDK clients
pub async fn get_mock_config() -> SdkConfig {
    aws_config::from_env()
        .region(Region::new("us-west-1"))
        .credentials_provider(Credentials::new(
            "accesskey",
            "privatekey",
            None,
            None,
            "dummy",
        ))
        .load()
        .await
}

/// Base request builder for the AWS SDK calls
pub fn get_request_builder(service: &str) -> http::request::Builder {
    http::Request::builder().uri(format!("https://{service}.us-west-1.amazonaws.com/"))
}

/// Canned JSON response with the given status
pub fn json_response(status: u16, body: &str) -> http::Response<aws_smithy_http::body::SdkBody> {
    http::Response::builder()
        .status(status)
        .header("content-type", "application/json")
        .body(aws_smithy_http::body::SdkBody::from(body.to_owned()))
        .unwrap()
}
