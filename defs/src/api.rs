use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Published configuration of a function at a given qualifier.
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct FunctionConfiguration {
    pub environment: HashMap<String, String>,
    pub version: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EndpointStatus {
    Creating,
    Updating,
    InService,
    Deleting,
    Failed,
    OutOfService,
    /// Any other transitional state the platform reports (rolling back, system updating, ...).
    Other(String),
}

impl EndpointStatus {
    pub fn from_name(name: &str) -> Self {
        match name {
            "Creating" => EndpointStatus::Creating,
            "Updating" => EndpointStatus::Updating,
            "InService" => EndpointStatus::InService,
            "Deleting" => EndpointStatus::Deleting,
            "Failed" => EndpointStatus::Failed,
            "OutOfService" => EndpointStatus::OutOfService,
            other => EndpointStatus::Other(other.to_string()),
        }
    }

    pub fn is_in_service(&self) -> bool {
        *self == EndpointStatus::InService
    }
}

impl std::fmt::Display for EndpointStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            EndpointStatus::Creating => "Creating",
            EndpointStatus::Updating => "Updating",
            EndpointStatus::InService => "InService",
            EndpointStatus::Deleting => "Deleting",
            EndpointStatus::Failed => "Failed",
            EndpointStatus::OutOfService => "OutOfService",
            EndpointStatus::Other(name) => name,
        };
        write!(f, "{}", name)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EndpointDescription {
    pub endpoint_name: String,
    pub status: EndpointStatus,
    pub config_name: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InferenceRequest {
    pub endpoint_name: String,
    pub body: Vec<u8>,
    pub content_type: String,
    pub accept: String,
}

impl InferenceRequest {
    pub fn json_response(endpoint_name: &str, body: &[u8], content_type: &str) -> Self {
        InferenceRequest {
            endpoint_name: endpoint_name.to_string(),
            body: body.to_vec(),
            content_type: content_type.to_string(),
            accept: "application/json".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_endpoint_status_from_name() {
        assert_eq!(EndpointStatus::from_name("InService"), EndpointStatus::InService);
        assert_eq!(
            EndpointStatus::from_name("RollingBack"),
            EndpointStatus::Other("RollingBack".to_string())
        );
        assert!(!EndpointStatus::from_name("RollingBack").is_in_service());
    }

    #[test]
    fn test_endpoint_status_display_round_trips_name() {
        for name in ["Creating", "Updating", "InService", "Deleting", "Failed", "OutOfService", "SystemUpdating"] {
            assert_eq!(EndpointStatus::from_name(name).to_string(), name);
        }
    }
}
