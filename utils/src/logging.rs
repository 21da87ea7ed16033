use std::env;

use chrono::Local;
use log::LevelFilter;

/// Routes the `log` facade to stderr. `LOG_LEVEL` overrides `default_level`.
pub fn setup_logging(default_level: LevelFilter) -> Result<(), fern::InitError> {
    let level = match env::var("LOG_LEVEL").as_deref() {
        Ok("info") => LevelFilter::Info,
        Ok("debug") => LevelFilter::Debug,
        Ok("warn") => LevelFilter::Warn,
        Ok("error") => LevelFilter::Error,
        _ => default_level,
    };

    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "{}[{}] {}: {}",
                Local::now().format("[%Y-%m-%d][%H:%M:%S]"),
                record.target(),
                record.level(),
                message
            ))
        })
        .level(level)
        // The AWS SDK is chatty at info
        .level_for("aws_smithy_runtime", LevelFilter::Warn)
        .level_for("aws_config", LevelFilter::Warn)
        .chain(std::io::stderr())
        .apply()?;

    Ok(())
}
