use std::collections::HashMap;

use crate::config::{Config, ConfigError, DEFAULT_COINGECKO_BASE_URL};

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| vars.get(key).cloned()
}

#[test]
fn test_defaults_when_unset() {
    let config = Config::from_lookup(lookup(&[])).unwrap();
    assert_eq!(config.coingecko_base_url, DEFAULT_COINGECKO_BASE_URL);
    assert_eq!(config.coingecko_api_key, None);
    assert_eq!(config.host, "0.0.0.0");
    assert_eq!(config.port, 3000);
    assert_eq!(config.simulation_seed, None);
}

#[test]
fn test_overrides_are_read() {
    let config = Config::from_lookup(lookup(&[
        ("COINGECKO_BASE_URL", "http://localhost:9000/api/"),
        ("COINGECKO_API_KEY", "CG-demo"),
        ("HOST", "127.0.0.1"),
        ("PORT", "8080"),
        ("SIMULATION_SEED", "42"),
    ]))
    .unwrap();
    assert_eq!(config.coingecko_base_url, "http://localhost:9000/api");
    assert_eq!(config.coingecko_api_key.as_deref(), Some("CG-demo"));
    assert_eq!(config.host, "127.0.0.1");
    assert_eq!(config.port, 8080);
    assert_eq!(config.simulation_seed, Some(42));
}

#[test]
fn test_blank_values_count_as_unset() {
    let config = Config::from_lookup(lookup(&[("COINGECKO_API_KEY", "  "), ("PORT", "")])).unwrap();
    assert_eq!(config.coingecko_api_key, None);
    assert_eq!(config.port, 3000);
}

#[test]
fn test_invalid_numbers_are_errors() {
    assert!(matches!(
        Config::from_lookup(lookup(&[("PORT", "http")])),
        Err(ConfigError::InvalidPort(_))
    ));
    assert!(matches!(
        Config::from_lookup(lookup(&[("SIMULATION_SEED", "-1")])),
        Err(ConfigError::InvalidSeed(_))
    ));
}
