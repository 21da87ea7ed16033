use std::sync::Arc;

use env_defs::{DeploymentTarget, InferenceRequest, ValidationOutcome};
use env_utils::parse_scalar_prediction;
use log::{info, warn};

use crate::interface::{EndpointApi, InferenceApi};

/// One known-good record and the range of (rounded) predictions it may produce.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CanaryCheck {
    pub payload: Vec<u8>,
    pub content_type: String,
    pub lower: i64,
    pub upper: i64,
}

impl CanaryCheck {
    pub fn accepts(&self, prediction: f64) -> bool {
        let rounded = prediction.round();
        rounded >= self.lower as f64 && rounded <= self.upper as f64
    }
}

/// Smoke test for a candidate endpoint before traffic is shifted onto it.
pub struct CanaryValidator {
    inference: Arc<dyn InferenceApi>,
    endpoints: Arc<dyn EndpointApi>,
    check: CanaryCheck,
}

impl CanaryValidator {
    pub fn new(
        inference: Arc<dyn InferenceApi>,
        endpoints: Arc<dyn EndpointApi>,
        check: CanaryCheck,
    ) -> Self {
        CanaryValidator {
            inference,
            endpoints,
            check,
        }
    }

    pub async fn validate(
        &self,
        candidate: &DeploymentTarget,
        live: Option<&DeploymentTarget>,
    ) -> ValidationOutcome {
        if let Some(live) = live {
            if live.same_slot(candidate) {
                warn!(
                    "Candidate {}/{} is already live",
                    candidate.endpoint_name, candidate.variant_name
                );
                return ValidationOutcome::failed(format!(
                    "Deployment target same as live: {}/{}",
                    candidate.endpoint_name, candidate.variant_name
                ));
            }
        }

        match self.endpoints.describe_endpoint(&candidate.endpoint_name).await {
            Ok(description) if description.status.is_in_service() => {}
            Ok(description) => {
                return ValidationOutcome::failed(format!(
                    "Endpoint {} not InService ({})",
                    candidate.endpoint_name, description.status
                ))
            }
            Err(e) => return ValidationOutcome::failed(e.to_string()),
        }

        let request = InferenceRequest::json_response(
            &candidate.endpoint_name,
            &self.check.payload,
            &self.check.content_type,
        );
        let body = match self.inference.invoke(&request).await {
            Ok(body) => body,
            Err(e) => {
                warn!("Canary request to {} failed: {}", candidate.endpoint_name, e);
                return ValidationOutcome::failed(e.to_string());
            }
        };
        info!("Canary prediction from {}: {}", candidate.endpoint_name, body.trim());

        let prediction = match parse_scalar_prediction(&body) {
            Ok(prediction) => prediction,
            Err(e) => return ValidationOutcome::failed(e.to_string()),
        };

        if self.check.accepts(prediction) {
            ValidationOutcome::Passed
        } else {
            ValidationOutcome::failed(format!(
                "Prediction {} out of expected range [{}, {}]",
                prediction, self.check.lower, self.check.upper
            ))
        }
    }
}
