mod api;
mod api_endpoint;
mod api_experiment;
mod api_inference;
mod api_status;
mod api_storage;
mod utils;

pub use api::{get_function_configuration, AwsClients};
pub use api_endpoint::{
    delete_endpoint, delete_endpoint_config, describe_endpoint, update_endpoint_capacity,
};
pub use api_experiment::{create_experiment, create_trial};
pub use api_inference::invoke_endpoint;
pub use api_status::put_lifecycle_status;
pub use api_storage::{copy_object, list_keys, object_exists};
pub use utils::{classify_error, get_aws_config};
