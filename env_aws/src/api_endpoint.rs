use aws_sdk_sagemaker::types::DesiredWeightAndCapacity;
use env_defs::{ApiError, EndpointDescription, EndpointStatus};
use log::info;

use crate::utils::classify_error;

pub async fn describe_endpoint(
    client: &aws_sdk_sagemaker::Client,
    endpoint_name: &str,
) -> Result<EndpointDescription, ApiError> {
    let output = client
        .describe_endpoint()
        .endpoint_name(endpoint_name)
        .send()
        .await
        .map_err(|e| classify_error("DescribeEndpoint", e))?;

    let status = output.endpoint_status().ok_or_else(|| {
        ApiError::MalformedResponse(format!("Endpoint {} has no status", endpoint_name))
    })?;
    Ok(EndpointDescription {
        endpoint_name: endpoint_name.to_string(),
        status: EndpointStatus::from_name(status.as_str()),
        config_name: output.endpoint_config_name().unwrap_or_default().to_string(),
    })
}

fn capacity_request(variant_name: &str, desired_instance_count: i32) -> DesiredWeightAndCapacity {
    DesiredWeightAndCapacity::builder()
        .variant_name(variant_name)
        .desired_instance_count(desired_instance_count)
        .build()
}

pub async fn update_endpoint_capacity(
    client: &aws_sdk_sagemaker::Client,
    endpoint_name: &str,
    variant_name: &str,
    desired_instance_count: i32,
) -> Result<(), ApiError> {
    let capacity = capacity_request(variant_name, desired_instance_count);

    let output = client
        .update_endpoint_weights_and_capacities()
        .endpoint_name(endpoint_name)
        .desired_weights_and_capacities(capacity)
        .send()
        .await
        .map_err(|e| classify_error("UpdateEndpointWeightsAndCapacities", e))?;

    info!(
        "Requested {} instances for {}/{}: {:?}",
        desired_instance_count,
        endpoint_name,
        variant_name,
        output.endpoint_arn()
    );
    Ok(())
}

pub async fn delete_endpoint(
    client: &aws_sdk_sagemaker::Client,
    endpoint_name: &str,
) -> Result<(), ApiError> {
    client
        .delete_endpoint()
        .endpoint_name(endpoint_name)
        .send()
        .await
        .map_err(|e| classify_error("DeleteEndpoint", e))?;
    info!("Deleted endpoint {}", endpoint_name);
    Ok(())
}

pub async fn delete_endpoint_config(
    client: &aws_sdk_sagemaker::Client,
    config_name: &str,
) -> Result<(), ApiError> {
    client
        .delete_endpoint_config()
        .endpoint_config_name(config_name)
        .send()
        .await
        .map_err(|e| classify_error("DeleteEndpointConfig", e))?;
    info!("Deleted endpoint config {}", config_name);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_capacity_request_sets_only_instance_count() {
        let capacity = capacity_request("AllTraffic", 1);
        assert_eq!(capacity.variant_name(), Some("AllTraffic"));
        assert_eq!(capacity.desired_instance_count(), Some(1));
        assert_eq!(capacity.desired_weight(), None);
    }
}
