mod api;
mod deployment;
mod errors;
mod event;
mod outcome;
mod provisioning;
mod proxy;

pub use api::{EndpointDescription, EndpointStatus, FunctionConfiguration, InferenceRequest};
pub use deployment::{DeploymentTarget, DEFAULT_VARIANT_NAME};
pub use errors::ApiError;
pub use event::{HookResult, LifecycleEvent, LifecycleStatus};
pub use outcome::ValidationOutcome;
pub use provisioning::{CopySummary, ProvisionOutcome};
pub use proxy::{ProxyEvent, ProxyResponse};
