use env_defs::ApiError;

use crate::utils::classify_error;

pub async fn create_experiment(
    client: &aws_sdk_sagemaker::Client,
    experiment_name: &str,
    description: &str,
) -> Result<(), ApiError> {
    client
        .create_experiment()
        .experiment_name(experiment_name)
        .display_name(experiment_name)
        .description(description)
        .send()
        .await
        .map_err(|e| classify_error("CreateExperiment", e))?;
    Ok(())
}

pub async fn create_trial(
    client: &aws_sdk_sagemaker::Client,
    experiment_name: &str,
    trial_name: &str,
) -> Result<(), ApiError> {
    client
        .create_trial()
        .trial_name(trial_name)
        .display_name(trial_name)
        .experiment_name(experiment_name)
        .send()
        .await
        .map_err(|e| classify_error("CreateTrial", e))?;
    Ok(())
}
