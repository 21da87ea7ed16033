use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use env_common::{resolve, AwsHandler, InferenceApi};
use env_defs::InferenceRequest;

use super::report_elapsed;

pub async fn handle_invoke(
    timeout: Duration,
    endpoint: &str,
    payload: &str,
    content_type: &str,
) -> Result<()> {
    let start = Instant::now();
    let handler = AwsHandler::load(timeout).await;

    let request = InferenceRequest::json_response(endpoint, payload.as_bytes(), content_type);
    let predictions = handler
        .invoke(&request)
        .await
        .with_context(|| format!("Failed to invoke endpoint {}", endpoint))?;

    println!("{}", predictions);
    report_elapsed("Invoke", start);
    Ok(())
}

pub async fn handle_resolve(timeout: Duration, function: &str, qualifier: &str) -> Result<()> {
    let start = Instant::now();
    let handler = AwsHandler::load(timeout).await;

    match resolve(&handler, function, qualifier).await? {
        Some(target) => println!("{}", serde_json::to_string_pretty(&target)?),
        None => println!("No deployment found for {}:{}", function, qualifier),
    }
    report_elapsed("Resolve", start);
    Ok(())
}
