use std::env;
use std::str::FromStr;

use crate::parse_or;

/// Output format of the console log layer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pretty" | "text" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown log format: {other}")),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub log_format: LogFormat,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            log_format: LogFormat::Pretty,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            host: lookup("HTTP_HOST").unwrap_or(defaults.host),
            // Accepts the ":8080" form as well as a bare port.
            port: lookup("HTTP_PORT")
                .and_then(|s| s.trim().trim_start_matches(':').parse().ok())
                .unwrap_or(defaults.port),
            log_format: parse_or(&lookup, "LOG_FORMAT", defaults.log_format),
        }
    }

    /// Socket address string to bind the listener to.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ServerConfig::from_lookup(lookup(&[]));
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.addr(), "0.0.0.0:8080");
    }

    #[test]
    fn test_port_with_colon_prefix() {
        let config = ServerConfig::from_lookup(lookup(&[("HTTP_PORT", ":9090")]));
        assert_eq!(config.port, 9090);
    }

    #[test]
    fn test_invalid_port_falls_back() {
        let config = ServerConfig::from_lookup(lookup(&[("HTTP_PORT", "http")]));
        assert_eq!(config.port, 8080);
    }

    #[test]
    fn test_json_log_format() {
        let config = ServerConfig::from_lookup(lookup(&[("LOG_FORMAT", "JSON")]));
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn test_custom_host() {
        let config = ServerConfig::from_lookup(lookup(&[("HTTP_HOST", "127.0.0.1")]));
        assert_eq!(config.addr(), "127.0.0.1:8080");
    }
}
