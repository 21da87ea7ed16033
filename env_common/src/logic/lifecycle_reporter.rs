use std::sync::Arc;

use env_defs::{HookResult, LifecycleEvent, LifecycleStatus, ValidationOutcome};
use log::{error, info};

use crate::interface::LifecycleApi;

/// Tells the deployment orchestrator whether a hook passed, so it can continue or roll back.
pub struct LifecycleReporter {
    lifecycle: Arc<dyn LifecycleApi>,
}

impl LifecycleReporter {
    pub fn new(lifecycle: Arc<dyn LifecycleApi>) -> Self {
        LifecycleReporter { lifecycle }
    }

    pub async fn report(&self, event: &LifecycleEvent, outcome: &ValidationOutcome) -> HookResult {
        let status = match outcome {
            ValidationOutcome::Passed => LifecycleStatus::Succeeded,
            ValidationOutcome::Failed(_) => LifecycleStatus::Failed,
        };

        if let Err(e) = self.lifecycle.put_status(event, status).await {
            error!(
                "Unable to report {} for deployment {}: {}",
                status.as_str(),
                event.deployment_id,
                e
            );
            return HookResult::error(&e.to_string());
        }

        match outcome {
            ValidationOutcome::Passed => {
                info!("Deployment {} hook succeeded", event.deployment_id);
                HookResult::ok()
            }
            ValidationOutcome::Failed(reason) => {
                info!("Deployment {} hook failed: {}", event.deployment_id, reason);
                HookResult::rejected(reason)
            }
        }
    }
}
