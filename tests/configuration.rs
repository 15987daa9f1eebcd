//! Tests for configuration system

use fitso::Config;

#[test]
fn test_config_loads_from_default_toml() {
    let config = Config::load(None).expect("Failed to load config");

    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.server.port, 8000);
    assert_eq!(config.database.url, "sqlite:fitso.db");
    assert_eq!(config.database.max_connections, 5);
    assert_eq!(config.observability.log_level, "info");
}

#[test]
fn test_config_has_all_required_fields() {
    let config = Config::load(None).expect("Failed to load config");

    assert!(!config.server.host.is_empty());
    assert!(config.server.port > 0);
    assert!(!config.database.url.is_empty());
    assert!(config.database.max_connections > 0);
    assert!(!config.observability.log_level.is_empty());
}

#[test]
fn test_loaded_config_passes_validation() {
    let config = Config::load(None).expect("Failed to load config");

    assert!(config.validate().is_ok());
}
