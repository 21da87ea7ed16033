use aws_sdk_codedeploy::types::LifecycleEventStatus;
use env_defs::{ApiError, LifecycleEvent, LifecycleStatus};
use log::info;

use crate::utils::classify_error;

pub async fn put_lifecycle_status(
    client: &aws_sdk_codedeploy::Client,
    event: &LifecycleEvent,
    status: LifecycleStatus,
) -> Result<(), ApiError> {
    let sdk_status = match status {
        LifecycleStatus::Succeeded => LifecycleEventStatus::Succeeded,
        LifecycleStatus::Failed => LifecycleEventStatus::Failed,
    };

    let output = client
        .put_lifecycle_event_hook_execution_status()
        .deployment_id(&event.deployment_id)
        .lifecycle_event_hook_execution_id(&event.hook_execution_id)
        .status(sdk_status)
        .send()
        .await
        .map_err(|e| classify_error("PutLifecycleEventHookExecutionStatus", e))?;

    info!(
        "Reported {} for deployment {} (hook execution {:?})",
        status.as_str(),
        event.deployment_id,
        output.lifecycle_event_hook_execution_id()
    );
    Ok(())
}
