use std::time::Duration;

use env_defs::{ApiError, FunctionConfiguration};
use log::info;

use crate::utils::{classify_error, get_aws_config};

/// One client per managed-service API, built from a single shared configuration.
#[derive(Clone, Debug)]
pub struct AwsClients {
    pub sagemaker: aws_sdk_sagemaker::Client,
    pub sagemaker_runtime: aws_sdk_sagemakerruntime::Client,
    pub lambda: aws_sdk_lambda::Client,
    pub codedeploy: aws_sdk_codedeploy::Client,
    pub s3: aws_sdk_s3::Client,
}

impl AwsClients {
    pub async fn load(operation_timeout: Duration) -> Self {
        let shared_config = get_aws_config(operation_timeout).await;
        info!(
            "Loaded AWS configuration for region {:?} (operation timeout {:?})",
            shared_config.region(),
            operation_timeout
        );
        AwsClients {
            sagemaker: aws_sdk_sagemaker::Client::new(&shared_config),
            sagemaker_runtime: aws_sdk_sagemakerruntime::Client::new(&shared_config),
            lambda: aws_sdk_lambda::Client::new(&shared_config),
            codedeploy: aws_sdk_codedeploy::Client::new(&shared_config),
            s3: aws_sdk_s3::Client::new(&shared_config),
        }
    }
}

pub async fn get_function_configuration(
    client: &aws_sdk_lambda::Client,
    function_name: &str,
    qualifier: &str,
) -> Result<FunctionConfiguration, ApiError> {
    let output = client
        .get_function_configuration()
        .function_name(function_name)
        .qualifier(qualifier)
        .send()
        .await
        .map_err(|e| classify_error("GetFunctionConfiguration", e))?;

    let environment = output
        .environment()
        .and_then(|env| env.variables())
        .cloned()
        .unwrap_or_default();

    Ok(FunctionConfiguration {
        environment,
        version: output.version().map(|v| v.to_string()),
    })
}
