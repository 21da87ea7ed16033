use std::sync::Arc;

use async_trait::async_trait;
use env_defs::{
    ApiError, EndpointDescription, FunctionConfiguration, InferenceRequest, LifecycleEvent,
    LifecycleStatus,
};
#[cfg(test)]
use mockall::automock;

#[cfg_attr(test, automock)]
#[async_trait]
pub trait InferenceApi: Send + Sync {
    async fn invoke(&self, request: &InferenceRequest) -> Result<String, ApiError>;
}

#[async_trait]
pub trait EndpointApi: Send + Sync {
    async fn describe_endpoint(&self, endpoint_name: &str)
        -> Result<EndpointDescription, ApiError>;
    async fn update_capacity(
        &self,
        endpoint_name: &str,
        variant_name: &str,
        desired_instance_count: i32,
    ) -> Result<(), ApiError>;
    async fn delete_endpoint(&self, endpoint_name: &str) -> Result<(), ApiError>;
    async fn delete_endpoint_config(&self, config_name: &str) -> Result<(), ApiError>;
}

#[cfg_attr(test, automock)]
#[async_trait]
pub trait FunctionApi: Send + Sync {
    async fn get_function_configuration(
        &self,
        function_name: &str,
        qualifier: &str,
    ) -> Result<FunctionConfiguration, ApiError>;
}

#[cfg_attr(test, automock)]
#[async_trait]
pub trait LifecycleApi: Send + Sync {
    async fn put_status(
        &self,
        event: &LifecycleEvent,
        status: LifecycleStatus,
    ) -> Result<(), ApiError>;
}

#[async_trait]
pub trait ProvisioningApi: Send + Sync {
    async fn create_experiment(&self, name: &str, description: &str) -> Result<(), ApiError>;
    async fn create_trial(&self, experiment_name: &str, trial_name: &str)
        -> Result<(), ApiError>;
    async fn list_keys(&self, bucket: &str, prefix: &str) -> Result<Vec<String>, ApiError>;
    async fn object_exists(&self, bucket: &str, key: &str) -> Result<bool, ApiError>;
    async fn copy_object(
        &self,
        source_bucket: &str,
        source_key: &str,
        bucket: &str,
        key: &str,
    ) -> Result<(), ApiError>;
}

/// The API surfaces a lifecycle hook talks to.
#[derive(Clone)]
pub struct HookApis {
    pub inference: Arc<dyn InferenceApi>,
    pub endpoints: Arc<dyn EndpointApi>,
    pub functions: Arc<dyn FunctionApi>,
    pub lifecycle: Arc<dyn LifecycleApi>,
}
