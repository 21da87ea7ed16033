use std::sync::Arc;

use env_common::AwsHandler;
use env_defs::{ProxyEvent, ProxyResponse};
use env_utils::setup_logging;
use lambda_runtime::{service_fn, Error, LambdaEvent};
use lifecycle_hooks::{api_timeout_from_env, env_lookup, handle_invoke_endpoint};
use log::LevelFilter;

async fn func(handler: &AwsHandler, event: LambdaEvent<ProxyEvent>) -> Result<ProxyResponse, Error> {
    let (event, _context) = event.into_parts();
    Ok(handle_invoke_endpoint(handler, &env_lookup, &event).await)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    setup_logging(LevelFilter::Info)?;

    let handler = Arc::new(AwsHandler::load(api_timeout_from_env()).await);

    let fun = service_fn(move |event: LambdaEvent<ProxyEvent>| {
        let handler = handler.clone();
        async move { func(&handler, event).await }
    });
    lambda_runtime::run(fun).await?;

    Ok(())
}
