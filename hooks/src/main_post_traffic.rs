use env_common::{AwsHandler, HookApis};
use env_defs::{HookResult, LifecycleEvent};
use env_utils::setup_logging;
use lambda_runtime::{service_fn, Error, LambdaEvent};
use lifecycle_hooks::{api_timeout_from_env, env_lookup, handle_post_traffic};
use log::{info, LevelFilter};

async fn func(apis: &HookApis, event: LambdaEvent<LifecycleEvent>) -> Result<HookResult, Error> {
    let (event, _context) = event.into_parts();
    info!(
        "Received post-traffic event for deployment {} (execution {})",
        event.deployment_id, event.hook_execution_id
    );

    let result = handle_post_traffic(apis, &env_lookup, &event).await;
    info!("Returning {:?}", result);
    Ok(result)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    setup_logging(LevelFilter::Info)?;

    let apis = AwsHandler::load(api_timeout_from_env()).await.into_hook_apis();

    let fun = service_fn(move |event: LambdaEvent<LifecycleEvent>| {
        let apis = apis.clone();
        async move { func(&apis, event).await }
    });
    lambda_runtime::run(fun).await?;

    Ok(())
}
