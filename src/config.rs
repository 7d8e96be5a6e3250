use crate::cli::Cli;
use clap::Parser;
use figment::{
    providers::{Env, Format, Serialized, Yaml},
    Figment,
};
use once_cell::sync::Lazy;
use serde::Deserialize;
use std::path::Path;
use tracing::Level;

const TRACE_LEVELS: [&'static str; 5] = ["TRACE", "DEBUG", "INFO", "WARN", "ERROR"];

pub static SETTINGS: Lazy<Settings> = Lazy::new(|| Settings::new());

// Settings are a singleton generated at runtime. All settings may be
// configured via environment variables. Example:
// API_BASE_URL="https://api.example.com" would set api_base_url to that value.
#[derive(Deserialize, Debug)]
pub struct Settings {
    #[serde(default = "default_trace_level")]
    trace_level: String,
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    #[serde(default = "default_api_timeout_sec")]
    pub api_timeout_sec: u64,
}

impl Settings {
    pub fn new() -> Self {
        let local_settings_yaml_file = ".env.local.yaml";
        let settings: Settings = match Path::new(local_settings_yaml_file).exists() {
            true => {
                println!(
                    "\n######################################\n\
                       ##   Found '.env.local.yaml' file,  ##\n\
                       ##   loading local configuration.   ##\n\
                       ######################################\n\
                    "
                );
                Figment::new()
                    .merge(Yaml::file(local_settings_yaml_file))
                    .merge(Env::raw())
                    .merge(Serialized::defaults(Cli::parse()))
                    .extract()
                    .unwrap()
            }
            false => Figment::new()
                .merge(Env::raw())
                .merge(Serialized::defaults(Cli::parse()))
                .extract()
                .unwrap(),
        };

        settings
    }

    pub fn get_trace_level(&self) -> Level {
        get_trace_level(&self.trace_level)
    }
}

fn get_trace_level(level_str: &str) -> Level {
    match level_str {
        level if level == TRACE_LEVELS[0] => Level::TRACE,
        level if level == TRACE_LEVELS[1] => Level::DEBUG,
        level if level == TRACE_LEVELS[2] => Level::INFO,
        level if level == TRACE_LEVELS[3] => Level::WARN,
        level if level == TRACE_LEVELS[4] => Level::ERROR,
        // Default trace level
        _ => Level::INFO,
    }
}

fn default_trace_level() -> String {
    "INFO".to_string()
}

fn default_api_base_url() -> String {
    "https://api.demonlist.org".to_string()
}

fn default_api_timeout_sec() -> u64 {
    5
}

#[cfg(test)]
mod tests {
    use super::get_trace_level;
    use tracing::Level;

    #[test]
    fn trace_level_parsing() {
        assert_eq!(get_trace_level("DEBUG"), Level::DEBUG);
        assert_eq!(get_trace_level("ERROR"), Level::ERROR);
        // Unknown levels fall back to INFO.
        assert_eq!(get_trace_level("VERBOSE"), Level::INFO);
    }
}
