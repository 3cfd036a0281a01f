// ⚙️ Configuration - Defaults, then environment, then command-line flags
//
// Environment variables:
//   FRIDGE_FILE     fridge CSV path
//   RECIPES_FILE    recipe JSON path
//   FRIDGE_HOST     server bind host        (default 0.0.0.0)
//   FRIDGE_PORT     server port             (default 8000)
//   FRIDGE_WEB_DIR  static web directory    (default web)

use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_WEB_DIR: &str = "web";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub fridge_path: Option<PathBuf>,
    pub recipes_path: Option<PathBuf>,
    pub host: String,
    pub port: u16,
    pub web_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            fridge_path: None,
            recipes_path: None,
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            web_dir: PathBuf::from(DEFAULT_WEB_DIR),
        }
    }
}

impl Config {
    /// Defaults overridden by the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`Config::from_env`] with an injectable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        if let Some(path) = lookup("FRIDGE_FILE") {
            config.fridge_path = Some(PathBuf::from(path));
        }
        if let Some(path) = lookup("RECIPES_FILE") {
            config.recipes_path = Some(PathBuf::from(path));
        }
        if let Some(host) = lookup("FRIDGE_HOST") {
            config.host = host;
        }
        if let Some(port) = lookup("FRIDGE_PORT") {
            config.port = port
                .trim()
                .parse()
                .with_context(|| format!("FRIDGE_PORT '{}' is not a valid port", port))?;
        }
        if let Some(dir) = lookup("FRIDGE_WEB_DIR") {
            config.web_dir = PathBuf::from(dir);
        }

        Ok(config)
    }

    /// Builder pattern: command-line flags win over the environment
    pub fn with_files(mut self, fridge: Option<PathBuf>, recipes: Option<PathBuf>) -> Self {
        if fridge.is_some() {
            self.fridge_path = fridge;
        }
        if recipes.is_some() {
            self.recipes_path = recipes;
        }
        self
    }

    /// Builder pattern: override the bind address
    pub fn with_address(mut self, host: Option<String>, port: Option<u16>) -> Self {
        if let Some(host) = host {
            self.host = host;
        }
        if let Some(port) = port {
            self.port = port;
        }
        self
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup(&[])).unwrap();

        assert_eq!(config, Config::default());
        assert_eq!(config.bind_address(), "0.0.0.0:8000");
    }

    #[test]
    fn test_environment_overrides() {
        let config = Config::from_lookup(lookup(&[
            ("FRIDGE_FILE", "fridge.csv"),
            ("RECIPES_FILE", "recipes.json"),
            ("FRIDGE_HOST", "127.0.0.1"),
            ("FRIDGE_PORT", "9000"),
        ]))
        .unwrap();

        assert_eq!(config.fridge_path, Some(PathBuf::from("fridge.csv")));
        assert_eq!(config.recipes_path, Some(PathBuf::from("recipes.json")));
        assert_eq!(config.bind_address(), "127.0.0.1:9000");
    }

    #[test]
    fn test_bad_port_is_an_error() {
        assert!(Config::from_lookup(lookup(&[("FRIDGE_PORT", "eighty")])).is_err());
    }

    #[test]
    fn test_flags_win_over_environment() {
        let config = Config::from_lookup(lookup(&[("FRIDGE_FILE", "env.csv"), ("FRIDGE_PORT", "9000")]))
            .unwrap()
            .with_files(Some(PathBuf::from("flag.csv")), None)
            .with_address(None, Some(7000));

        assert_eq!(config.fridge_path, Some(PathBuf::from("flag.csv")));
        assert_eq!(config.recipes_path, None);
        assert_eq!(config.port, 7000);
    }
}
