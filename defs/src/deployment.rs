use serde::{Deserialize, Serialize};

pub const DEFAULT_VARIANT_NAME: &str = "AllTraffic";

/// A named endpoint/variant pair together with the capacity it should run at.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
pub struct DeploymentTarget {
    pub endpoint_name: String,
    pub variant_name: String,
    pub function_version: i64,
    pub instance_count: i32,
}

impl DeploymentTarget {
    pub fn new(endpoint_name: &str, variant_name: &str) -> Self {
        DeploymentTarget {
            endpoint_name: endpoint_name.to_string(),
            variant_name: variant_name.to_string(),
            function_version: 0,
            instance_count: 1,
        }
    }

    /// Two targets occupy the same slot when they route to the same endpoint variant,
    /// regardless of version or capacity.
    pub fn same_slot(&self, other: &DeploymentTarget) -> bool {
        self.endpoint_name == other.endpoint_name && self.variant_name == other.variant_name
    }
}
