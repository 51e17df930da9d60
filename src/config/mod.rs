use std::env;

use crate::errors::AppError;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub host: String,
    pub port: u16,
}

impl Config {
    /// Reads `APP_HOST` and `APP_PORT`, falling back to 127.0.0.1:8080.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_vars(env::var("APP_HOST").ok(), env::var("APP_PORT").ok())
    }

    fn from_vars(host: Option<String>, port: Option<String>) -> Result<Self, AppError> {
        let host = host
            .filter(|host| !host.is_empty())
            .unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match port.filter(|port| !port.is_empty()) {
            Some(port) => port
                .parse()
                .map_err(|_| AppError::ConfigError(format!("APP_PORT must be a port number, got '{}'", port)))?,
            None => DEFAULT_PORT,
        };

        Ok(Config { host, port })
    }

    pub fn bind_address(&self) -> (String, u16) {
        (self.host.clone(), self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_unset() {
        let config = Config::from_vars(None, None).unwrap();
        assert_eq!(config, Config { host: "127.0.0.1".to_string(), port: 8080 });
    }

    #[test]
    fn reads_given_values() {
        let config = Config::from_vars(Some("0.0.0.0".to_string()), Some("3000".to_string())).unwrap();
        assert_eq!(config.bind_address(), ("0.0.0.0".to_string(), 3000));
    }

    #[test]
    fn empty_values_fall_back_to_defaults() {
        let config = Config::from_vars(Some(String::new()), Some(String::new())).unwrap();
        assert_eq!(config.bind_address(), ("127.0.0.1".to_string(), 8080));
    }

    #[test]
    fn rejects_bad_port() {
        let result = Config::from_vars(None, Some("eighty".to_string()));
        assert!(matches!(result, Err(AppError::ConfigError(_))));
    }
}
