use aws_sdk_lambda::{model::FunctionConfiguration, Client, Error};
use futures_util::stream::{LocalBoxStream, StreamExt};

use crate::error::RuntimeError;

/// Stream every function configuration of the client's region.
///
/// The stream walks the `NextMarker` cursor lazily, one page at a time,
/// and ends after the last page or after the first error.
pub fn list_functions(
    client: &Client,
) -> LocalBoxStream<'static, Result<FunctionConfiguration, RuntimeError>> {
    client
        .list_functions()
        .into_paginator()
        .items()
        .send()
        .map(|item| item.map_err(|err| RuntimeError::Lambda(Error::from(err))))
        .boxed_local()
}
