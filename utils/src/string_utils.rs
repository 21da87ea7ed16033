/// Trials are named after the abbreviated commit hash.
pub fn trial_name_from_commit(commit: &str) -> String {
    commit.trim().chars().take(7).collect()
}

/// Moves `key` from under `from_prefix` to under `to_prefix`, optionally swapping a file
/// extension. Returns `None` for keys outside `from_prefix` or naming the prefix itself.
pub fn rebase_key(
    key: &str,
    from_prefix: &str,
    to_prefix: &str,
    rename_extension: Option<(&str, &str)>,
) -> Option<String> {
    let relative = key.strip_prefix(from_prefix)?;
    if relative.is_empty() || relative.ends_with('/') {
        return None;
    }

    let relative = match rename_extension {
        Some((from_ext, to_ext)) => match relative.strip_suffix(from_ext) {
            Some(stem) => format!("{}{}", stem, to_ext),
            None => relative.to_string(),
        },
        None => relative.to_string(),
    };

    Some(format!("{}{}", to_prefix, relative))
}
