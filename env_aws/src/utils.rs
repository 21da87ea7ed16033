use std::time::Duration;

use aws_config::retry::RetryConfig;
use aws_config::timeout::TimeoutConfig;
use aws_smithy_runtime_api::client::orchestrator::HttpResponse;
use aws_smithy_runtime_api::client::result::SdkError;
use aws_smithy_types::error::display::DisplayErrorContext;
use aws_smithy_types::error::metadata::ProvideErrorMetadata;
use env_defs::ApiError;

const NOT_FOUND_CODES: &[&str] = &[
    "ResourceNotFoundException",
    "NotFound",
    "NoSuchKey",
    "NoSuchBucket",
    "DeploymentDoesNotExistException",
];

/// Shared SDK configuration for every client. Retries are disabled: a retried
/// capacity update or deletion could be applied twice, so failures surface as-is.
pub async fn get_aws_config(operation_timeout: Duration) -> aws_config::SdkConfig {
    aws_config::from_env()
        .retry_config(RetryConfig::disabled())
        .timeout_config(
            TimeoutConfig::builder()
                .operation_timeout(operation_timeout)
                .build(),
        )
        .load()
        .await
}

pub fn classify_error<E>(operation: &str, err: SdkError<E, HttpResponse>) -> ApiError
where
    E: ProvideErrorMetadata + std::error::Error + Send + Sync + 'static,
{
    match &err {
        SdkError::TimeoutError(_) => ApiError::Timeout(format!("{} timed out", operation)),
        SdkError::ServiceError(context) => {
            let code = context.err().code().unwrap_or_default();
            let message = context
                .err()
                .message()
                .map(|m| m.to_string())
                .unwrap_or_else(|| format!("{} failed with {}", operation, code));
            if is_not_found(code, &message, context.raw().status().as_u16()) {
                ApiError::NotFound(message)
            } else if is_already_exists(code, &message) {
                ApiError::AlreadyExists(message)
            } else {
                ApiError::Service(message)
            }
        }
        _ => ApiError::Service(format!(
            "{} failed: {}",
            operation,
            DisplayErrorContext(&err)
        )),
    }
}

fn is_not_found(code: &str, message: &str, status: u16) -> bool {
    if NOT_FOUND_CODES.contains(&code) {
        return true;
    }
    // SageMaker reports missing endpoints as a validation error
    if code == "ValidationException" && message.contains("Could not find") {
        return true;
    }
    code.is_empty() && status == 404
}

fn is_already_exists(code: &str, message: &str) -> bool {
    code == "ResourceInUse" || (code == "ValidationException" && message.contains("already exists"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_not_found_codes() {
        assert!(is_not_found("ResourceNotFoundException", "Function not found", 404));
        assert!(is_not_found("NotFound", "", 404));
        assert!(!is_not_found("ThrottlingException", "Rate exceeded", 400));
    }

    #[test]
    fn test_is_not_found_sagemaker_validation() {
        assert!(is_not_found(
            "ValidationException",
            "Could not find endpoint \"e-blue\".",
            400
        ));
        assert!(!is_not_found(
            "ValidationException",
            "Cannot update in-progress endpoint",
            400
        ));
    }

    #[test]
    fn test_is_already_exists() {
        assert!(is_already_exists(
            "ValidationException",
            "Experiment with name mlops-stack already exists"
        ));
        assert!(is_already_exists("ResourceInUse", "Trial is in use"));
        assert!(!is_already_exists("ValidationException", "Invalid name"));
    }

    #[test]
    fn test_is_not_found_bare_404() {
        assert!(is_not_found("", "", 404));
        assert!(!is_not_found("", "", 500));
    }
}
