use std::sync::Arc;

use env_defs::{ApiError, DeploymentTarget, ValidationOutcome};
use log::{info, warn};

use crate::interface::EndpointApi;

/// Scales the previously live endpoint down once traffic has moved off it,
/// or removes it entirely when the cooldown capacity is zero.
pub struct TrafficCoordinator {
    endpoints: Arc<dyn EndpointApi>,
}

impl TrafficCoordinator {
    pub fn new(endpoints: Arc<dyn EndpointApi>) -> Self {
        TrafficCoordinator { endpoints }
    }

    pub async fn cooldown(
        &self,
        previous_live: Option<&DeploymentTarget>,
        target_instance_count: i32,
    ) -> ValidationOutcome {
        let previous = match previous_live {
            Some(previous) => previous,
            None => {
                info!("No previous deployment, nothing to cool down");
                return ValidationOutcome::Passed;
            }
        };

        if target_instance_count < 0 {
            return ValidationOutcome::failed(format!(
                "Invalid target instance count {}",
                target_instance_count
            ));
        }

        let description = match self.endpoints.describe_endpoint(&previous.endpoint_name).await {
            Ok(description) => description,
            Err(ApiError::NotFound(message)) => {
                info!(
                    "Endpoint {} already gone ({}), nothing to cool down",
                    previous.endpoint_name, message
                );
                return ValidationOutcome::Passed;
            }
            Err(e) => return ValidationOutcome::failed(e.to_string()),
        };

        if !description.status.is_in_service() {
            warn!(
                "Refusing to modify {} while it is {}",
                previous.endpoint_name, description.status
            );
            return ValidationOutcome::failed(format!(
                "Unable to update endpoint {}: not InService ({})",
                previous.endpoint_name, description.status
            ));
        }

        if target_instance_count == 0 {
            self.decommission(&previous.endpoint_name, &description.config_name)
                .await
        } else {
            self.drain(previous, target_instance_count).await
        }
    }

    async fn decommission(&self, endpoint_name: &str, config_name: &str) -> ValidationOutcome {
        info!("Decommissioning endpoint {} ({})", endpoint_name, config_name);

        // The config is removed even when the endpoint deletion fails
        let mut errors = vec![];
        if let Err(e) = self.endpoints.delete_endpoint(endpoint_name).await {
            record_unless_not_found(&mut errors, e);
        }
        if config_name.is_empty() {
            warn!("Endpoint {} reported no config to delete", endpoint_name);
        } else if let Err(e) = self.endpoints.delete_endpoint_config(config_name).await {
            record_unless_not_found(&mut errors, e);
        }

        if errors.is_empty() {
            ValidationOutcome::Passed
        } else {
            ValidationOutcome::failed(errors.join("; "))
        }
    }

    async fn drain(&self, previous: &DeploymentTarget, instance_count: i32) -> ValidationOutcome {
        info!(
            "Draining {}/{} to {} instances",
            previous.endpoint_name, previous.variant_name, instance_count
        );
        match self
            .endpoints
            .update_capacity(&previous.endpoint_name, &previous.variant_name, instance_count)
            .await
        {
            Ok(()) => ValidationOutcome::Passed,
            Err(ApiError::NotFound(message)) => {
                info!("Endpoint {} vanished during cooldown: {}", previous.endpoint_name, message);
                ValidationOutcome::Passed
            }
            Err(e) => ValidationOutcome::failed(e.to_string()),
        }
    }
}

fn record_unless_not_found(errors: &mut Vec<String>, error: ApiError) {
    if error.is_not_found() {
        info!("Already deleted: {}", error);
    } else {
        warn!("Deletion failed: {}", error);
        errors.push(error.to_string());
    }
}
