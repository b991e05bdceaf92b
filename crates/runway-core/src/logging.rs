use tracing_subscriber::{
    fmt,
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

use crate::infrastructure::LoggingConfig;

pub const DEFAULT_LOG_FILTER: &str = "runway_core=info,runway_backend_api=info";

pub const VERBOSE_LOG_FILTER: &str = "runway_core=debug,runway_backend_api=debug";

/// Picks the filter directives: `RUST_LOG`, then `[logging].filter`, then the
/// verbose or default preset.
pub fn filter_directives(config: &LoggingConfig, env_filter: Option<&str>) -> String {
    if let Some(env) = env_filter.map(str::trim).filter(|s| !s.is_empty()) {
        return env.to_string();
    }

    match config.filter.as_deref().map(str::trim) {
        Some(filter) if !filter.is_empty() => filter.to_string(),
        _ if config.verbose => VERBOSE_LOG_FILTER.to_string(),
        _ => DEFAULT_LOG_FILTER.to_string(),
    }
}

pub fn build_filter(
    config: &LoggingConfig, env_filter: Option<&str>,
) -> anyhow::Result<EnvFilter> {
    let directives = filter_directives(config, env_filter);
    EnvFilter::try_new(&directives)
        .map_err(|e| anyhow::anyhow!("Invalid log filter '{}': {}", directives, e))
}

/// Installs the global subscriber. Fails instead of panicking when one is
/// already set, so embedding UIs can call it unconditionally.
pub fn init(config: &LoggingConfig) -> anyhow::Result<()> {
    let env_filter = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter = build_filter(config, env_filter.as_deref())?;

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(config.with_target).with_thread_ids(false))
        .try_init()?;

    tracing::debug!(verbose = config.verbose, "Logging initialized");
    Ok(())
}

pub fn init_default() -> anyhow::Result<()> {
    init(&LoggingConfig::default())
}
