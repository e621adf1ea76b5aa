//! Environment configuration

use std::path::PathBuf;

use anyhow::{anyhow, Context};
use vocab_core::{Direction, MatchOptions};

/// Server settings read from the environment (and `.env`).
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Word list loaded before the server accepts requests.
    pub vocab_file: Option<PathBuf>,
    pub direction: Direction,
    pub match_options: MatchOptions,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            vocab_file: None,
            direction: Direction::default(),
            match_options: MatchOptions::default(),
        }
    }
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any key lookup; unset keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(host) = lookup("HOST") {
            config.host = host;
        }
        if let Some(port) = lookup("PORT") {
            config.port = port
                .parse()
                .with_context(|| format!("invalid PORT: {}", port))?;
        }
        if let Some(path) = lookup("VOCAB_FILE").filter(|p| !p.trim().is_empty()) {
            config.vocab_file = Some(PathBuf::from(path));
        }
        if let Some(direction) = lookup("VOCAB_DIRECTION") {
            config.direction = Direction::from_str(direction.trim())
                .ok_or_else(|| anyhow!("invalid VOCAB_DIRECTION: {}", direction))?;
        }
        if let Some(fold) = lookup("VOCAB_FOLD_ACCENTS") {
            config.match_options.fold_accents = parse_bool(&fold)
                .ok_or_else(|| anyhow!("invalid VOCAB_FOLD_ACCENTS: {}", fold))?;
        }

        Ok(config)
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.addr(), "0.0.0.0:3000");
        assert_eq!(config.direction, Direction::Random);
        assert!(config.match_options.fold_accents);
        assert!(config.vocab_file.is_none());
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup(&[
            ("HOST", "127.0.0.1"),
            ("PORT", "8080"),
            ("VOCAB_FILE", "words.txt"),
            ("VOCAB_DIRECTION", "target_to_source"),
            ("VOCAB_FOLD_ACCENTS", "off"),
        ]))
        .unwrap();
        assert_eq!(config.addr(), "127.0.0.1:8080");
        assert_eq!(config.vocab_file, Some(PathBuf::from("words.txt")));
        assert_eq!(config.direction, Direction::TargetToSource);
        assert!(!config.match_options.fold_accents);
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        assert!(Config::from_lookup(lookup(&[("PORT", "abc")])).is_err());
        assert!(Config::from_lookup(lookup(&[("VOCAB_DIRECTION", "both")])).is_err());
        assert!(Config::from_lookup(lookup(&[("VOCAB_FOLD_ACCENTS", "maybe")])).is_err());
    }
}
