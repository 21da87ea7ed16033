mod coordinator;
mod hooks;
mod lifecycle_reporter;
mod provisioning;
mod proxy;
mod resolver;
mod validator;

#[cfg(test)]
mod fakes;

pub use coordinator::TrafficCoordinator;
pub use hooks::{
    run_post_traffic, run_pre_traffic, LiveLookup, PostTrafficSettings, PreTrafficSettings,
    PreviousTarget,
};
pub use lifecycle_reporter::LifecycleReporter;
pub use provisioning::{copy_prefix, ensure_experiment_and_trial, CopySpec, TrialProvisioning};
pub use proxy::{handle_proxy, DEFAULT_CONTENT_TYPE};
pub use resolver::{resolve, target_from_configuration};
pub use validator::{CanaryCheck, CanaryValidator};
