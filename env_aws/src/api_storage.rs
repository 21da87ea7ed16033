use env_defs::ApiError;
use log::debug;

use crate::utils::classify_error;

/// Lists every key under `prefix`, following continuation tokens.
pub async fn list_keys(
    client: &aws_sdk_s3::Client,
    bucket: &str,
    prefix: &str,
) -> Result<Vec<String>, ApiError> {
    let mut keys = vec![];
    let mut continuation_token: Option<String> = None;

    loop {
        let output = client
            .list_objects_v2()
            .bucket(bucket)
            .prefix(prefix)
            .set_continuation_token(continuation_token.take())
            .send()
            .await
            .map_err(|e| classify_error("ListObjectsV2", e))?;

        keys.extend(
            output
                .contents()
                .iter()
                .filter_map(|object| object.key().map(|k| k.to_string())),
        );

        match output.next_continuation_token() {
            Some(token) => continuation_token = Some(token.to_string()),
            None => break,
        }
    }

    debug!("Found {} objects under s3://{}/{}", keys.len(), bucket, prefix);
    Ok(keys)
}

pub async fn object_exists(
    client: &aws_sdk_s3::Client,
    bucket: &str,
    key: &str,
) -> Result<bool, ApiError> {
    match client.head_object().bucket(bucket).key(key).send().await {
        Ok(_) => Ok(true),
        Err(e) => match classify_error("HeadObject", e) {
            ApiError::NotFound(_) => Ok(false),
            other => Err(other),
        },
    }
}

pub async fn copy_object(
    client: &aws_sdk_s3::Client,
    source_bucket: &str,
    source_key: &str,
    bucket: &str,
    key: &str,
) -> Result<(), ApiError> {
    client
        .copy_object()
        .copy_source(format!("{}/{}", source_bucket, source_key))
        .bucket(bucket)
        .key(key)
        .send()
        .await
        .map_err(|e| classify_error("CopyObject", e))?;
    Ok(())
}
