use log::warn;

use crate::config;

pub fn load_settings() -> config::Settings {
    settings_or_default(config::Settings::load())
}

/// Keep loaded settings only when they validate; config is optional, so any
/// failure falls back to defaults with a warning.
fn settings_or_default(loaded: Result<config::Settings, ::config::ConfigError>) -> config::Settings {
    match loaded {
        Ok(s) => match s.validate() {
            Ok(()) => s,
            Err(msg) => {
                warn!("invalid config, using defaults: {msg}");
                config::Settings::default()
            }
        },
        Err(e) => {
            warn!("failed to load config, using defaults: {e}");
            config::Settings::default()
        }
    }
}
