use super::*;
use std::collections::HashMap;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn defaults_when_unset() {
    let cfg = ServerConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(cfg, ServerConfig::default());
    assert_eq!(cfg.bind_addr().to_string(), "0.0.0.0:3000");
}

#[test]
fn parses_host_and_port_overrides() {
    let cfg = ServerConfig::from_lookup(lookup(&[("HOST", "127.0.0.1"), ("PORT", "8080")])).unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.bind_addr().to_string(), "127.0.0.1:8080");
}

#[test]
fn accepts_ipv6_host() {
    let cfg = ServerConfig::from_lookup(lookup(&[("HOST", "::1"), ("PORT", "4000")])).unwrap();
    assert_eq!(cfg.bind_addr().to_string(), "[::1]:4000");
}

#[test]
fn blank_values_fall_back_to_defaults() {
    let cfg = ServerConfig::from_lookup(lookup(&[("HOST", "  "), ("PORT", "")])).unwrap();
    assert_eq!(cfg, ServerConfig::default());
}

#[test]
fn trims_surrounding_whitespace() {
    let cfg = ServerConfig::from_lookup(lookup(&[("PORT", " 9000 ")])).unwrap();
    assert_eq!(cfg.port, 9000);
}

#[test]
fn rejects_invalid_port() {
    let err = ServerConfig::from_lookup(lookup(&[("PORT", "http")])).unwrap_err();
    assert_eq!(err, ConfigError::InvalidPort("http".into()));

    let err = ServerConfig::from_lookup(lookup(&[("PORT", "70000")])).unwrap_err();
    assert_eq!(err, ConfigError::InvalidPort("70000".into()));
}

#[test]
fn rejects_invalid_host() {
    let err = ServerConfig::from_lookup(lookup(&[("HOST", "localhost")])).unwrap_err();
    assert_eq!(err, ConfigError::InvalidHost("localhost".into()));
    assert!(err.to_string().contains("localhost"));
}
