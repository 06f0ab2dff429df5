//! Where the client finds its [`ClientConfig`].
//!
//! - **Web**: the API base URL is baked in at build time through
//!   `LESSONS_API_URL`; without it the page's own origin is used.
//! - **Desktop / native**: defaults, then `<config_dir>/lessons/lessons.toml`,
//!   then `LESSONS_*` environment variables with `__` between sections
//!   (`LESSONS_API__BASE_URL`, `LESSONS_SCHEDULE__END_HOUR`).
//!
//! A configuration that fails to load or validate is logged and replaced by
//! the defaults, so the app always starts.

use store::ClientConfig;

/// API location used when nothing else is configured on native targets.
pub const DEFAULT_API_URL: &str = "http://localhost:5000";

pub fn load_config() -> ClientConfig {
    #[cfg(target_arch = "wasm32")]
    {
        let base_url = option_env!("LESSONS_API_URL")
            .map(str::to_string)
            .or_else(page_origin)
            .unwrap_or_default();
        ClientConfig::new(base_url)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let path = dirs::config_dir().map(|dir| dir.join("lessons").join(ClientConfig::filename()));
        match read_config(path.as_deref()) {
            Ok(config) => config,
            Err(e) => {
                tracing::error!("Failed to load config, using defaults: {}", e);
                ClientConfig::new(DEFAULT_API_URL)
            }
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn page_origin() -> Option<String> {
    web_sys::window()?.location().origin().ok()
}

#[cfg(not(target_arch = "wasm32"))]
fn read_config(path: Option<&std::path::Path>) -> Result<ClientConfig, config::ConfigError> {
    use config::{Config, Environment, File, FileFormat};
    use store::schedule::{DEFAULT_END_HOUR, DEFAULT_START_HOUR};

    let mut builder = Config::builder()
        .set_default("api.base_url", DEFAULT_API_URL)?
        .set_default("schedule.start_hour", DEFAULT_START_HOUR)?
        .set_default("schedule.end_hour", DEFAULT_END_HOUR)?;
    if let Some(path) = path {
        builder = builder.add_source(File::from(path).format(FileFormat::Toml).required(false));
    }
    let config: ClientConfig = builder
        .add_source(
            Environment::with_prefix("LESSONS")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?
        .try_deserialize()?;

    config
        .validate()
        .map_err(|e| config::ConfigError::Message(e.to_string()))?;
    Ok(config)
}
