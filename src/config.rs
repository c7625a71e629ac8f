use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub ranking: RankingSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 8000 }

#[derive(Debug, Clone, Deserialize)]
pub struct RankingSettings {
    /// Number of recommendations returned when the request omits `top_n`
    #[serde(default = "default_top_n")]
    pub default_top_n: usize,
    /// Upper bound applied to a requested `top_n`
    #[serde(default = "default_max_top_n")]
    pub max_top_n: usize,
    /// Budget for a single ranking call, enforced by the HTTP layer
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

impl Default for RankingSettings {
    fn default() -> Self {
        Self {
            default_top_n: default_top_n(),
            max_top_n: default_max_top_n(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

fn default_top_n() -> usize { 5 }
fn default_max_top_n() -> usize { 100 }
fn default_timeout_ms() -> u64 { 2000 }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub format: LogFormat,
}

/// Output format for the tracing subscriber
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// One JSON object per event
    #[default]
    Json,
    Pretty,
    Compact,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with MENTOR_MATCH__)
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., MENTOR_MATCH__SERVER__PORT -> server.port
            .add_source(env_source())
            .build()?
            .try_deserialize()
    }
}

fn env_source() -> Environment {
    Environment::with_prefix("MENTOR_MATCH")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_ranking() {
        let ranking = RankingSettings::default();
        assert_eq!(ranking.default_top_n, 5);
        assert_eq!(ranking.max_top_n, 100);
        assert_eq!(ranking.timeout_ms, 2000);
    }

    #[test]
    fn test_default_logging() {
        let logging = LoggingSettings::default();
        assert_eq!(logging.level, "info");
        assert_eq!(logging.format, LogFormat::Json);
    }

    #[test]
    fn test_log_format_parsing() {
        for (raw, expected) in [
            ("json", LogFormat::Json),
            ("pretty", LogFormat::Pretty),
            ("compact", LogFormat::Compact),
        ] {
            let settings: Settings = Config::builder()
                .set_override("logging.format", raw)
                .and_then(|b| b.build())
                .and_then(|c| c.try_deserialize())
                .expect("settings should deserialize");
            assert_eq!(settings.logging.format, expected);
        }
    }

    #[test]
    fn test_missing_sections_fall_back_to_defaults() {
        let settings: Settings = Config::builder()
            .set_override("server.port", 9100)
            .and_then(|b| b.build())
            .and_then(|c| c.try_deserialize())
            .expect("settings should deserialize");

        assert_eq!(settings.server.port, 9100);
        assert_eq!(settings.server.host, "0.0.0.0");
        assert_eq!(settings.ranking.default_top_n, 5);
        assert_eq!(settings.logging.format, LogFormat::Json);
    }
}
