use eyre::Result;
use log::LevelFilter;

/// `--log-level` wins over `RUST_LOG`; without either the level is `info`.
pub fn setup_logging(log_level: Option<LevelFilter>) -> Result<()> {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if let Some(level) = log_level {
        builder.filter_level(level);
    }

    builder
        .filter_module("alloy", LevelFilter::Warn)
        .filter_module("hyper", LevelFilter::Warn)
        .filter_module("hyper_util", LevelFilter::Warn)
        .filter_module("reqwest", LevelFilter::Warn)
        .format_timestamp_secs()
        .try_init()?;

    Ok(())
}
