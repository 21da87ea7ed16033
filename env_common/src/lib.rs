pub mod errors;
pub mod interface;
pub mod logic;

pub use interface::{
    AwsHandler, EndpointApi, FunctionApi, HookApis, InferenceApi, LifecycleApi, ProvisioningApi,
};
pub use logic::{
    copy_prefix, ensure_experiment_and_trial, handle_proxy, resolve, run_post_traffic,
    run_pre_traffic, target_from_configuration, CanaryCheck, CanaryValidator, CopySpec,
    LifecycleReporter, LiveLookup, PostTrafficSettings, PreTrafficSettings, PreviousTarget,
    TrafficCoordinator, TrialProvisioning, DEFAULT_CONTENT_TYPE,
};
