use std::{env, path::PathBuf};
use tracing::warn;

pub const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeedSource {
    Builtin,
    Empty,
    File(PathBuf),
}

impl SeedSource {
    fn parse(raw: &str) -> Self {
        match raw.trim() {
            "" | "builtin" => SeedSource::Builtin,
            "empty" => SeedSource::Empty,
            path => SeedSource::File(PathBuf::from(path)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
    pub seed: SeedSource,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let port = match lookup("PORT") {
            Some(value) => value.trim().parse::<u16>().unwrap_or_else(|_| {
                warn!("ignoring invalid PORT '{value}', using {DEFAULT_PORT}");
                DEFAULT_PORT
            }),
            None => DEFAULT_PORT,
        };

        let seed = lookup("MOOD_SEED")
            .map(|value| SeedSource::parse(&value))
            .unwrap_or(SeedSource::Builtin);

        Self { port, seed }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_without_env() {
        let config = config_from(&[]);
        assert_eq!(config.port, 8080);
        assert_eq!(config.seed, SeedSource::Builtin);
    }

    #[test]
    fn reads_port_and_seed() {
        let config = config_from(&[("PORT", "9123"), ("MOOD_SEED", "empty")]);
        assert_eq!(config.port, 9123);
        assert_eq!(config.seed, SeedSource::Empty);

        let config = config_from(&[("MOOD_SEED", "data/seed.json")]);
        assert_eq!(config.seed, SeedSource::File(PathBuf::from("data/seed.json")));
    }

    #[test]
    fn invalid_port_falls_back() {
        assert_eq!(config_from(&[("PORT", "eighty")]).port, DEFAULT_PORT);
    }
}
