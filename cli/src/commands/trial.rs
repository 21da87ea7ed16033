use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use env_common::{ensure_experiment_and_trial, AwsHandler};

use super::report_elapsed;

pub async fn handle_create_trial(timeout: Duration, experiment: &str, commit: &str) -> Result<()> {
    let start = Instant::now();
    let handler = AwsHandler::load(timeout).await;

    let result = ensure_experiment_and_trial(&handler, experiment, commit)
        .await
        .with_context(|| format!("Failed to create trial for experiment {}", experiment))?;

    println!("Experiment {}: {:?}", experiment, result.experiment);
    println!("Trial {}: {:?}", result.trial_name, result.trial);
    report_elapsed("Create trial", start);
    Ok(())
}
