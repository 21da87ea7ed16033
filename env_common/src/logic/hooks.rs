use env_defs::{DeploymentTarget, HookResult, LifecycleEvent, ValidationOutcome};
use log::info;

use super::{resolve, CanaryCheck, CanaryValidator, LifecycleReporter, TrafficCoordinator};
use crate::interface::HookApis;

/// Where to find the deployment currently receiving traffic.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LiveLookup {
    pub function_name: String,
    pub qualifier: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PreTrafficSettings {
    pub candidate: DeploymentTarget,
    pub live_lookup: Option<LiveLookup>,
    pub check: CanaryCheck,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PreviousTarget {
    Explicit(DeploymentTarget),
    Resolve(LiveLookup),
    None,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PostTrafficSettings {
    pub candidate: DeploymentTarget,
    pub previous: PreviousTarget,
    pub target_instance_count: i32,
}

pub async fn run_pre_traffic(
    apis: &HookApis,
    settings: &PreTrafficSettings,
    event: &LifecycleEvent,
) -> HookResult {
    info!(
        "Pre-traffic hook for deployment {}: candidate {}/{} (version {})",
        event.deployment_id,
        settings.candidate.endpoint_name,
        settings.candidate.variant_name,
        settings.candidate.function_version
    );
    let outcome = pre_traffic_outcome(apis, settings).await;
    LifecycleReporter::new(apis.lifecycle.clone())
        .report(event, &outcome)
        .await
}

pub async fn run_post_traffic(
    apis: &HookApis,
    settings: &PostTrafficSettings,
    event: &LifecycleEvent,
) -> HookResult {
    info!(
        "Post-traffic hook for deployment {}: cooling down to {} instances",
        event.deployment_id, settings.target_instance_count
    );
    let outcome = post_traffic_outcome(apis, settings).await;
    LifecycleReporter::new(apis.lifecycle.clone())
        .report(event, &outcome)
        .await
}

async fn pre_traffic_outcome(apis: &HookApis, settings: &PreTrafficSettings) -> ValidationOutcome {
    let live = match &settings.live_lookup {
        Some(lookup) => {
            match resolve(apis.functions.as_ref(), &lookup.function_name, &lookup.qualifier).await
            {
                Ok(live) => live,
                Err(e) => return ValidationOutcome::failed(e.to_string()),
            }
        }
        None => None,
    };

    CanaryValidator::new(
        apis.inference.clone(),
        apis.endpoints.clone(),
        settings.check.clone(),
    )
    .validate(&settings.candidate, live.as_ref())
    .await
}

async fn post_traffic_outcome(
    apis: &HookApis,
    settings: &PostTrafficSettings,
) -> ValidationOutcome {
    let previous = match &settings.previous {
        PreviousTarget::Explicit(target) => Some(target.clone()),
        PreviousTarget::Resolve(lookup) => {
            match resolve(apis.functions.as_ref(), &lookup.function_name, &lookup.qualifier).await
            {
                Ok(previous) => previous,
                Err(e) => return ValidationOutcome::failed(e.to_string()),
            }
        }
        PreviousTarget::None => None,
    };

    // Never drain the endpoint traffic was just shifted onto
    if let Some(previous) = &previous {
        if previous.same_slot(&settings.candidate) {
            info!(
                "Previous deployment {}/{} is the candidate, nothing to cool down",
                previous.endpoint_name, previous.variant_name
            );
            return ValidationOutcome::Passed;
        }
    }

    TrafficCoordinator::new(apis.endpoints.clone())
        .cooldown(previous.as_ref(), settings.target_instance_count)
        .await
}
