use aws_sdk_sagemakerruntime::primitives::Blob;
use env_defs::{ApiError, InferenceRequest};
use log::debug;

use crate::utils::classify_error;

/// Sends one request to the endpoint and returns the response body as text.
pub async fn invoke_endpoint(
    client: &aws_sdk_sagemakerruntime::Client,
    request: &InferenceRequest,
) -> Result<String, ApiError> {
    debug!(
        "Invoking endpoint {} with {} bytes of {}",
        request.endpoint_name,
        request.body.len(),
        request.content_type
    );

    let output = client
        .invoke_endpoint()
        .endpoint_name(&request.endpoint_name)
        .body(Blob::new(request.body.clone()))
        .content_type(&request.content_type)
        .accept(&request.accept)
        .send()
        .await
        .map_err(|e| classify_error("InvokeEndpoint", e))?;

    let body = output.body().ok_or_else(|| {
        ApiError::MalformedResponse(format!(
            "Endpoint {} returned no body",
            request.endpoint_name
        ))
    })?;

    String::from_utf8(body.as_ref().to_vec()).map_err(|e| {
        ApiError::MalformedResponse(format!(
            "Endpoint {} returned a non UTF-8 body: {}",
            request.endpoint_name, e
        ))
    })
}
