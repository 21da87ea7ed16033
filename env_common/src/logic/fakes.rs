//! In-memory API doubles that record every call for ordering assertions.

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use async_trait::async_trait;
use env_defs::{
    ApiError, EndpointDescription, EndpointStatus, FunctionConfiguration, InferenceRequest,
    LifecycleEvent, LifecycleStatus,
};

use super::CanaryCheck;
use crate::interface::{EndpointApi, FunctionApi, InferenceApi, LifecycleApi, ProvisioningApi};

pub const SAMPLE_RECORD: &str = "1:1 2:0.555 3:0.435 4:0.145 5:0.9205 6:0.404 7:0.2275 8:0.255";

pub fn canary_check(lower: i64, upper: i64) -> CanaryCheck {
    CanaryCheck {
        payload: SAMPLE_RECORD.as_bytes().to_vec(),
        content_type: "text/libsvm".to_string(),
        lower,
        upper,
    }
}

pub fn lifecycle_event() -> LifecycleEvent {
    LifecycleEvent {
        deployment_id: "d-B8ECPZ0I1".to_string(),
        hook_execution_id: "XXXX".to_string(),
    }
}

pub struct FakeInference {
    response: Result<String, ApiError>,
    requests: Mutex<Vec<InferenceRequest>>,
}

impl FakeInference {
    pub fn responding(body: &str) -> Self {
        FakeInference {
            response: Ok(body.to_string()),
            requests: Mutex::new(vec![]),
        }
    }

    pub fn failing(error: ApiError) -> Self {
        FakeInference {
            response: Err(error),
            requests: Mutex::new(vec![]),
        }
    }

    pub fn requests(&self) -> Vec<InferenceRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl InferenceApi for FakeInference {
    async fn invoke(&self, request: &InferenceRequest) -> Result<String, ApiError> {
        self.requests.lock().unwrap().push(request.clone());
        self.response.clone()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EndpointCall {
    Describe(String),
    UpdateCapacity(String, String, i32),
    DeleteEndpoint(String),
    DeleteEndpointConfig(String),
}

pub struct FakeEndpoints {
    describe: Result<EndpointDescription, ApiError>,
    update_result: Result<(), ApiError>,
    delete_endpoint_result: Result<(), ApiError>,
    delete_config_result: Result<(), ApiError>,
    calls: Mutex<Vec<EndpointCall>>,
}

impl FakeEndpoints {
    pub fn with_status(endpoint_name: &str, status: EndpointStatus) -> Self {
        FakeEndpoints {
            describe: Ok(EndpointDescription {
                endpoint_name: endpoint_name.to_string(),
                status,
                config_name: format!("{}-config", endpoint_name),
            }),
            update_result: Ok(()),
            delete_endpoint_result: Ok(()),
            delete_config_result: Ok(()),
            calls: Mutex::new(vec![]),
        }
    }

    pub fn in_service(endpoint_name: &str) -> Self {
        Self::with_status(endpoint_name, EndpointStatus::InService)
    }

    pub fn describe_failing(error: ApiError) -> Self {
        FakeEndpoints {
            describe: Err(error),
            ..Self::in_service("unused")
        }
    }

    pub fn failing_update(mut self, error: ApiError) -> Self {
        self.update_result = Err(error);
        self
    }

    pub fn failing_delete_endpoint(mut self, error: ApiError) -> Self {
        self.delete_endpoint_result = Err(error);
        self
    }

    pub fn failing_delete_config(mut self, error: ApiError) -> Self {
        self.delete_config_result = Err(error);
        self
    }

    pub fn calls(&self) -> Vec<EndpointCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn mutating_calls(&self) -> Vec<EndpointCall> {
        self.calls()
            .into_iter()
            .filter(|call| !matches!(call, EndpointCall::Describe(_)))
            .collect()
    }

    fn record(&self, call: EndpointCall) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl EndpointApi for FakeEndpoints {
    async fn describe_endpoint(
        &self,
        endpoint_name: &str,
    ) -> Result<EndpointDescription, ApiError> {
        self.record(EndpointCall::Describe(endpoint_name.to_string()));
        self.describe.clone()
    }

    async fn update_capacity(
        &self,
        endpoint_name: &str,
        variant_name: &str,
        desired_instance_count: i32,
    ) -> Result<(), ApiError> {
        self.record(EndpointCall::UpdateCapacity(
            endpoint_name.to_string(),
            variant_name.to_string(),
            desired_instance_count,
        ));
        self.update_result.clone()
    }

    async fn delete_endpoint(&self, endpoint_name: &str) -> Result<(), ApiError> {
        self.record(EndpointCall::DeleteEndpoint(endpoint_name.to_string()));
        self.delete_endpoint_result.clone()
    }

    async fn delete_endpoint_config(&self, config_name: &str) -> Result<(), ApiError> {
        self.record(EndpointCall::DeleteEndpointConfig(config_name.to_string()));
        self.delete_config_result.clone()
    }
}

/// Function configurations keyed by qualifier; unknown qualifiers are not found.
#[derive(Default)]
pub struct FakeFunctions {
    configurations: HashMap<String, FunctionConfiguration>,
}

impl FakeFunctions {
    pub fn with_live(mut self, qualifier: &str, endpoint_name: &str, variant_name: &str) -> Self {
        let environment = [
            ("ENDPOINT_NAME".to_string(), endpoint_name.to_string()),
            ("VARIANT_NAME".to_string(), variant_name.to_string()),
        ]
        .into_iter()
        .collect();
        self.configurations.insert(
            qualifier.to_string(),
            FunctionConfiguration {
                environment,
                version: Some("1".to_string()),
            },
        );
        self
    }
}

#[async_trait]
impl FunctionApi for FakeFunctions {
    async fn get_function_configuration(
        &self,
        function_name: &str,
        qualifier: &str,
    ) -> Result<FunctionConfiguration, ApiError> {
        self.configurations.get(qualifier).cloned().ok_or_else(|| {
            ApiError::NotFound(format!("Function not found: {}:{}", function_name, qualifier))
        })
    }
}

pub struct FakeLifecycle {
    result: Result<(), ApiError>,
    reported: Mutex<Vec<(LifecycleEvent, LifecycleStatus)>>,
}

impl FakeLifecycle {
    pub fn accepting() -> Self {
        FakeLifecycle {
            result: Ok(()),
            reported: Mutex::new(vec![]),
        }
    }

    pub fn failing(error: ApiError) -> Self {
        FakeLifecycle {
            result: Err(error),
            reported: Mutex::new(vec![]),
        }
    }

    pub fn reported(&self) -> Vec<(LifecycleEvent, LifecycleStatus)> {
        self.reported.lock().unwrap().clone()
    }
}

#[async_trait]
impl LifecycleApi for FakeLifecycle {
    async fn put_status(
        &self,
        event: &LifecycleEvent,
        status: LifecycleStatus,
    ) -> Result<(), ApiError> {
        self.reported.lock().unwrap().push((event.clone(), status));
        self.result.clone()
    }
}

/// Buckets as sets of keys; experiments and trials as name sets.
#[derive(Default)]
pub struct FakeProvisioning {
    pub experiments: Mutex<HashSet<String>>,
    pub trials: Mutex<HashSet<String>>,
    pub objects: Mutex<HashSet<(String, String)>>,
    pub copies: Mutex<Vec<(String, String)>>,
    pub create_error: Option<ApiError>,
}

impl FakeProvisioning {
    pub fn with_object(self, bucket: &str, key: &str) -> Self {
        self.objects
            .lock()
            .unwrap()
            .insert((bucket.to_string(), key.to_string()));
        self
    }
}

#[async_trait]
impl ProvisioningApi for FakeProvisioning {
    async fn create_experiment(&self, name: &str, _description: &str) -> Result<(), ApiError> {
        if let Some(error) = &self.create_error {
            return Err(error.clone());
        }
        if !self.experiments.lock().unwrap().insert(name.to_string()) {
            return Err(ApiError::AlreadyExists(format!(
                "Experiment {} already exists",
                name
            )));
        }
        Ok(())
    }

    async fn create_trial(
        &self,
        _experiment_name: &str,
        trial_name: &str,
    ) -> Result<(), ApiError> {
        if !self.trials.lock().unwrap().insert(trial_name.to_string()) {
            return Err(ApiError::AlreadyExists(format!(
                "Trial {} already exists",
                trial_name
            )));
        }
        Ok(())
    }

    async fn list_keys(&self, bucket: &str, prefix: &str) -> Result<Vec<String>, ApiError> {
        let mut keys: Vec<String> = self
            .objects
            .lock()
            .unwrap()
            .iter()
            .filter(|(b, k)| b == bucket && k.starts_with(prefix))
            .map(|(_, k)| k.clone())
            .collect();
        keys.sort();
        Ok(keys)
    }

    async fn object_exists(&self, bucket: &str, key: &str) -> Result<bool, ApiError> {
        Ok(self
            .objects
            .lock()
            .unwrap()
            .contains(&(bucket.to_string(), key.to_string())))
    }

    async fn copy_object(
        &self,
        source_bucket: &str,
        source_key: &str,
        bucket: &str,
        key: &str,
    ) -> Result<(), ApiError> {
        self.copies.lock().unwrap().push((
            format!("{}/{}", source_bucket, source_key),
            format!("{}/{}", bucket, key),
        ));
        self.objects
            .lock()
            .unwrap()
            .insert((bucket.to_string(), key.to_string()));
        Ok(())
    }
}
