use env_common::{
    handle_proxy, run_post_traffic, run_pre_traffic, HookApis, InferenceApi, LifecycleReporter,
    PostTrafficSettings, PreTrafficSettings,
};
use env_defs::{HookResult, LifecycleEvent, ProxyEvent, ProxyResponse, ValidationOutcome};
use env_utils::ConfigError;
use log::error;

use crate::config::{FromLookup, ProxyConfig};

pub async fn handle_pre_traffic<F>(apis: &HookApis, lookup: &F, event: &LifecycleEvent) -> HookResult
where
    F: Fn(&str) -> Option<String>,
{
    match PreTrafficSettings::from_lookup(lookup) {
        Ok(settings) => run_pre_traffic(apis, &settings, event).await,
        Err(e) => report_misconfiguration(apis, event, e).await,
    }
}

pub async fn handle_post_traffic<F>(
    apis: &HookApis,
    lookup: &F,
    event: &LifecycleEvent,
) -> HookResult
where
    F: Fn(&str) -> Option<String>,
{
    match PostTrafficSettings::from_lookup(lookup) {
        Ok(settings) => run_post_traffic(apis, &settings, event).await,
        Err(e) => report_misconfiguration(apis, event, e).await,
    }
}

// The deployment still has to hear back, otherwise it waits out the hook timeout
async fn report_misconfiguration(
    apis: &HookApis,
    event: &LifecycleEvent,
    e: ConfigError,
) -> HookResult {
    error!("Invalid hook configuration: {}", e);
    LifecycleReporter::new(apis.lifecycle.clone())
        .report(event, &ValidationOutcome::failed(e.to_string()))
        .await
}

pub async fn handle_invoke_endpoint<F>(
    inference: &dyn InferenceApi,
    lookup: &F,
    event: &ProxyEvent,
) -> ProxyResponse
where
    F: Fn(&str) -> Option<String>,
{
    match ProxyConfig::from_lookup(lookup) {
        Ok(config) => handle_proxy(inference, &config.endpoint_name, event).await,
        Err(e) => {
            error!("Invalid proxy configuration: {}", e);
            ProxyResponse::message(500, &e.to_string())
        }
    }
}
