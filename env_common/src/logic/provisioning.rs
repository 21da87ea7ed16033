use env_defs::{ApiError, CopySummary, ProvisionOutcome};
use env_utils::{rebase_key, trial_name_from_commit};
use log::info;
use serde::Serialize;

use crate::interface::ProvisioningApi;

const EXPERIMENT_DESCRIPTION: &str = "MLOps experiment";

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct TrialProvisioning {
    pub experiment: ProvisionOutcome,
    pub trial: ProvisionOutcome,
    pub trial_name: String,
}

/// Creates the experiment and a trial named after `commit`, tolerating either existing.
pub async fn ensure_experiment_and_trial(
    api: &dyn ProvisioningApi,
    experiment_name: &str,
    commit: &str,
) -> Result<TrialProvisioning, ApiError> {
    let trial_name = trial_name_from_commit(commit);

    let experiment = tolerate_existing(
        api.create_experiment(experiment_name, EXPERIMENT_DESCRIPTION)
            .await,
    )?;
    info!("Experiment {}: {:?}", experiment_name, experiment);

    let trial = tolerate_existing(api.create_trial(experiment_name, &trial_name).await)?;
    info!("Trial {}: {:?}", trial_name, trial);

    Ok(TrialProvisioning {
        experiment,
        trial,
        trial_name,
    })
}

fn tolerate_existing(result: Result<(), ApiError>) -> Result<ProvisionOutcome, ApiError> {
    match result {
        Ok(()) => Ok(ProvisionOutcome::Created),
        Err(e) if e.is_already_exists() => Ok(ProvisionOutcome::AlreadyExists),
        Err(e) => Err(e),
    }
}

/// A prefix-to-prefix object copy.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CopySpec {
    pub source_bucket: String,
    pub source_prefix: String,
    pub bucket: String,
    pub target_prefix: String,
    pub rename_extension: Option<(String, String)>,
}

impl CopySpec {
    /// Training data from a shared source bucket into `<prefix>/data/`.
    pub fn training_data(
        source_bucket: &str,
        source_prefix: &str,
        bucket: &str,
        prefix: &str,
    ) -> Self {
        CopySpec {
            source_bucket: source_bucket.to_string(),
            source_prefix: with_trailing_slash(source_prefix),
            bucket: bucket.to_string(),
            target_prefix: format!("{}/data/", prefix.trim_end_matches('/')),
            rename_extension: None,
        }
    }

    /// The validation split, re-keyed as CSV for monitoring baselines.
    pub fn monitoring_baseline(bucket: &str, prefix: &str) -> Self {
        let prefix = prefix.trim_end_matches('/');
        CopySpec {
            source_bucket: bucket.to_string(),
            source_prefix: format!("{}/data/val/", prefix),
            bucket: bucket.to_string(),
            target_prefix: format!("{}/monitoring/baselining/data/", prefix),
            rename_extension: Some((".part".to_string(), ".csv".to_string())),
        }
    }

    pub fn target_key(&self, source_key: &str) -> Option<String> {
        rebase_key(
            source_key,
            &self.source_prefix,
            &self.target_prefix,
            self.rename_extension
                .as_ref()
                .map(|(from, to)| (from.as_str(), to.as_str())),
        )
    }
}

fn with_trailing_slash(prefix: &str) -> String {
    if prefix.is_empty() || prefix.ends_with('/') {
        prefix.to_string()
    } else {
        format!("{}/", prefix)
    }
}

/// Copies every object under the source prefix whose target key does not exist yet.
pub async fn copy_prefix(
    api: &dyn ProvisioningApi,
    spec: &CopySpec,
) -> Result<CopySummary, ApiError> {
    let mut summary = CopySummary::default();

    for source_key in api.list_keys(&spec.source_bucket, &spec.source_prefix).await? {
        let target_key = match spec.target_key(&source_key) {
            Some(key) => key,
            None => continue,
        };

        if api.object_exists(&spec.bucket, &target_key).await? {
            info!("Already copied {}", target_key);
            summary.skipped.push(target_key);
            continue;
        }

        info!("Copying {} to {} ...", source_key, target_key);
        api.copy_object(&spec.source_bucket, &source_key, &spec.bucket, &target_key)
            .await?;
        summary.copied.push(target_key);
    }

    Ok(summary)
}
