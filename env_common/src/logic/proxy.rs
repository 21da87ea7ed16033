use env_defs::{InferenceRequest, ProxyEvent, ProxyResponse};
use log::{error, info};
use serde_json::Value;

use crate::interface::InferenceApi;

pub const DEFAULT_CONTENT_TYPE: &str = "text/libsvm";

/// Forwards the `data` field of an API Gateway request to the endpoint and wraps the
/// raw prediction text.
pub async fn handle_proxy(
    inference: &dyn InferenceApi,
    endpoint_name: &str,
    event: &ProxyEvent,
) -> ProxyResponse {
    let content_type = event.header("Content-Type").unwrap_or(DEFAULT_CONTENT_TYPE);

    let payload = match extract_payload(event) {
        Ok(payload) => payload,
        Err(message) => return ProxyResponse::message(400, &message),
    };
    info!(
        "Invoking {} with {} bytes of {}",
        endpoint_name,
        payload.len(),
        content_type
    );

    let request = InferenceRequest::json_response(endpoint_name, payload.as_bytes(), content_type);
    match inference.invoke(&request).await {
        Ok(predictions) => ProxyResponse::predictions(&predictions),
        Err(e) => {
            error!("Invocation of {} failed: {}", endpoint_name, e);
            ProxyResponse::message(500, &e.to_string())
        }
    }
}

fn extract_payload(event: &ProxyEvent) -> Result<String, String> {
    let body = event
        .body
        .as_deref()
        .ok_or_else(|| "Request body is missing".to_string())?;
    let body: Value =
        serde_json::from_str(body).map_err(|e| format!("Request body is not JSON: {}", e))?;

    match body.get("data") {
        Some(Value::String(data)) => Ok(data.clone()),
        Some(Value::Null) | None => Err("Request body has no data field".to_string()),
        Some(other) => Ok(other.to_string()),
    }
}
