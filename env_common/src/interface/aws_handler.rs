use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use env_aws::AwsClients;
use env_defs::{
    ApiError, EndpointDescription, FunctionConfiguration, InferenceRequest, LifecycleEvent,
    LifecycleStatus,
};

use super::{EndpointApi, FunctionApi, HookApis, InferenceApi, LifecycleApi, ProvisioningApi};

/// Every API surface backed by the AWS SDK.
#[derive(Clone, Debug)]
pub struct AwsHandler {
    clients: AwsClients,
}

impl AwsHandler {
    pub async fn load(operation_timeout: Duration) -> Self {
        AwsHandler {
            clients: AwsClients::load(operation_timeout).await,
        }
    }

    pub fn into_hook_apis(self) -> HookApis {
        let handler = Arc::new(self);
        HookApis {
            inference: handler.clone(),
            endpoints: handler.clone(),
            functions: handler.clone(),
            lifecycle: handler,
        }
    }
}

#[async_trait]
impl InferenceApi for AwsHandler {
    async fn invoke(&self, request: &InferenceRequest) -> Result<String, ApiError> {
        env_aws::invoke_endpoint(&self.clients.sagemaker_runtime, request).await
    }
}

#[async_trait]
impl EndpointApi for AwsHandler {
    async fn describe_endpoint(
        &self,
        endpoint_name: &str,
    ) -> Result<EndpointDescription, ApiError> {
        env_aws::describe_endpoint(&self.clients.sagemaker, endpoint_name).await
    }

    async fn update_capacity(
        &self,
        endpoint_name: &str,
        variant_name: &str,
        desired_instance_count: i32,
    ) -> Result<(), ApiError> {
        env_aws::update_endpoint_capacity(
            &self.clients.sagemaker,
            endpoint_name,
            variant_name,
            desired_instance_count,
        )
        .await
    }

    async fn delete_endpoint(&self, endpoint_name: &str) -> Result<(), ApiError> {
        env_aws::delete_endpoint(&self.clients.sagemaker, endpoint_name).await
    }

    async fn delete_endpoint_config(&self, config_name: &str) -> Result<(), ApiError> {
        env_aws::delete_endpoint_config(&self.clients.sagemaker, config_name).await
    }
}

#[async_trait]
impl FunctionApi for AwsHandler {
    async fn get_function_configuration(
        &self,
        function_name: &str,
        qualifier: &str,
    ) -> Result<FunctionConfiguration, ApiError> {
        env_aws::get_function_configuration(&self.clients.lambda, function_name, qualifier).await
    }
}

#[async_trait]
impl LifecycleApi for AwsHandler {
    async fn put_status(
        &self,
        event: &LifecycleEvent,
        status: LifecycleStatus,
    ) -> Result<(), ApiError> {
        env_aws::put_lifecycle_status(&self.clients.codedeploy, event, status).await
    }
}

#[async_trait]
impl ProvisioningApi for AwsHandler {
    async fn create_experiment(&self, name: &str, description: &str) -> Result<(), ApiError> {
        env_aws::create_experiment(&self.clients.sagemaker, name, description).await
    }

    async fn create_trial(
        &self,
        experiment_name: &str,
        trial_name: &str,
    ) -> Result<(), ApiError> {
        env_aws::create_trial(&self.clients.sagemaker, experiment_name, trial_name).await
    }

    async fn list_keys(&self, bucket: &str, prefix: &str) -> Result<Vec<String>, ApiError> {
        env_aws::list_keys(&self.clients.s3, bucket, prefix).await
    }

    async fn object_exists(&self, bucket: &str, key: &str) -> Result<bool, ApiError> {
        env_aws::object_exists(&self.clients.s3, bucket, key).await
    }

    async fn copy_object(
        &self,
        source_bucket: &str,
        source_key: &str,
        bucket: &str,
        key: &str,
    ) -> Result<(), ApiError> {
        env_aws::copy_object(&self.clients.s3, source_bucket, source_key, bucket, key).await
    }
}
