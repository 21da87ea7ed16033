mod config;
mod handlers;

pub use config::{api_timeout, api_timeout_from_env, env_lookup, FromLookup, ProxyConfig};
pub use handlers::{handle_invoke_endpoint, handle_post_traffic, handle_pre_traffic};
