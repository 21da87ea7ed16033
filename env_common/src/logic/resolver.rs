use env_defs::{DeploymentTarget, FunctionConfiguration, DEFAULT_VARIANT_NAME};
use log::info;

use crate::errors::ResolveError;
use crate::interface::FunctionApi;

const ENDPOINT_NAME_VAR: &str = "ENDPOINT_NAME";
const VARIANT_NAME_VAR: &str = "VARIANT_NAME";
const CURRENT_VERSION_VAR: &str = "CURRENT_VERSION";
const INSTANCE_COUNT_VAR: &str = "INSTANCE_COUNT";

/// Looks up the deployment a function qualifier currently points at.
///
/// A missing function or qualifier yields `Ok(None)`: there is no earlier deployment,
/// which is the normal state for a first rollout.
pub async fn resolve(
    functions: &dyn FunctionApi,
    function_name: &str,
    qualifier: &str,
) -> Result<Option<DeploymentTarget>, ResolveError> {
    let configuration = match functions
        .get_function_configuration(function_name, qualifier)
        .await
    {
        Ok(configuration) => configuration,
        Err(e) if e.is_not_found() => {
            info!(
                "No configuration for {}:{}, treating as first deployment ({})",
                function_name, qualifier, e
            );
            return Ok(None);
        }
        Err(e) => return Err(ResolveError::Api(e)),
    };

    let target = target_from_configuration(function_name, qualifier, &configuration)?;
    info!(
        "Resolved {}:{} to {}/{} (version {}, {} instances)",
        function_name,
        qualifier,
        target.endpoint_name,
        target.variant_name,
        target.function_version,
        target.instance_count
    );
    Ok(Some(target))
}

pub fn target_from_configuration(
    function_name: &str,
    qualifier: &str,
    configuration: &FunctionConfiguration,
) -> Result<DeploymentTarget, ResolveError> {
    let var = |name: &str| {
        configuration
            .environment
            .get(name)
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
    };
    let invalid = |name: &str, value: &str| {
        ResolveError::InvalidVariable(
            function_name.to_string(),
            qualifier.to_string(),
            name.to_string(),
            value.to_string(),
        )
    };

    let endpoint_name = var(ENDPOINT_NAME_VAR).ok_or_else(|| {
        ResolveError::MissingVariable(
            function_name.to_string(),
            qualifier.to_string(),
            ENDPOINT_NAME_VAR.to_string(),
        )
    })?;
    let variant_name = var(VARIANT_NAME_VAR).unwrap_or(DEFAULT_VARIANT_NAME);

    // Published versions are numeric; $LATEST falls back to the embedded version
    let function_version = match configuration
        .version
        .as_deref()
        .and_then(|v| v.parse::<i64>().ok())
    {
        Some(version) => version,
        None => match var(CURRENT_VERSION_VAR) {
            Some(raw) => raw
                .parse::<i64>()
                .map_err(|_| invalid(CURRENT_VERSION_VAR, raw))?,
            None => 0,
        },
    };

    let instance_count = match var(INSTANCE_COUNT_VAR) {
        Some(raw) => raw
            .parse::<i32>()
            .ok()
            .filter(|count| *count >= 0)
            .ok_or_else(|| invalid(INSTANCE_COUNT_VAR, raw))?,
        None => 1,
    };

    Ok(DeploymentTarget {
        endpoint_name: endpoint_name.to_string(),
        variant_name: variant_name.to_string(),
        function_version,
        instance_count,
    })
}
