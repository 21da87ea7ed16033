use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use env_common::{copy_prefix, AwsHandler, CopySpec};
use env_defs::CopySummary;
use log::info;

use super::report_elapsed;

pub async fn handle_prep_data(
    timeout: Duration,
    bucket: &str,
    prefix: &str,
    source_bucket: &str,
    source_prefix: &str,
) -> Result<()> {
    info!("Data prep started...");
    let spec = CopySpec::training_data(source_bucket, source_prefix, bucket, prefix);
    run_copy(timeout, &spec, "Data prep").await
}

pub async fn handle_prep_baseline(timeout: Duration, bucket: &str, prefix: &str) -> Result<()> {
    info!("Baseline prep started...");
    let spec = CopySpec::monitoring_baseline(bucket, prefix);
    run_copy(timeout, &spec, "Baseline prep").await
}

async fn run_copy(timeout: Duration, spec: &CopySpec, label: &str) -> Result<()> {
    let start = Instant::now();
    let handler = AwsHandler::load(timeout).await;

    let summary = copy_prefix(&handler, spec).await.with_context(|| {
        format!(
            "Failed to copy s3://{}/{} to s3://{}/{}",
            spec.source_bucket, spec.source_prefix, spec.bucket, spec.target_prefix
        )
    })?;

    print_summary(&summary);
    report_elapsed(label, start);
    Ok(())
}

fn print_summary(summary: &CopySummary) {
    for key in &summary.copied {
        println!("Copied {}", key);
    }
    for key in &summary.skipped {
        println!("Already copied {}", key);
    }
    println!(
        "{} copied, {} already present",
        summary.copied.len(),
        summary.skipped.len()
    );
}
