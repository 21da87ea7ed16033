mod aws_handler;
mod cloud_handlers;

pub use aws_handler::AwsHandler;
pub use cloud_handlers::{
    EndpointApi, FunctionApi, HookApis, InferenceApi, LifecycleApi, ProvisioningApi,
};

#[cfg(test)]
pub use cloud_handlers::{MockFunctionApi, MockInferenceApi, MockLifecycleApi};
