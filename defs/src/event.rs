use serde::{Deserialize, Serialize};

/// Correlation identifiers CodeDeploy hands to a lifecycle hook.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
pub struct LifecycleEvent {
    #[serde(rename = "DeploymentId")]
    pub deployment_id: String,
    #[serde(rename = "LifecycleEventHookExecutionId")]
    pub hook_execution_id: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LifecycleStatus {
    Succeeded,
    Failed,
}

impl LifecycleStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            LifecycleStatus::Succeeded => "Succeeded",
            LifecycleStatus::Failed => "Failed",
        }
    }
}

/// What a hook hands back to its caller once the status has been reported.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct HookResult {
    pub status_code: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl HookResult {
    pub fn ok() -> Self {
        HookResult {
            status_code: 200,
            message: None,
        }
    }

    pub fn rejected(message: &str) -> Self {
        HookResult {
            status_code: 400,
            message: Some(message.to_string()),
        }
    }

    pub fn error(message: &str) -> Self {
        HookResult {
            status_code: 500,
            message: Some(message.to_string()),
        }
    }
}
