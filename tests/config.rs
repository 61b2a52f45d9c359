use heat_pump_savings::config::{self, Config};
use heat_pump_savings::savings::DEFAULT_GRID_CO2_FACTOR;

#[test]
fn defaults_describe_reference_site() {
    let cfg = Config::default();
    assert_eq!(cfg.grid_co2_factor_kg_per_kwh, DEFAULT_GRID_CO2_FACTOR);
    assert_eq!(cfg.model_constants().grid_co2_factor_kg_per_kwh, 0.82);
    assert_eq!(cfg.currency, "Rs");
    assert_eq!(cfg.default_cop, 3.5);
    assert!(cfg.fuel_db_path.is_none());
}

#[test]
fn partial_file_keeps_other_defaults() {
    let cfg: Config = toml::from_str("currency = \"EUR\"\ngrid_co2_factor_kg_per_kwh = 0.4\n").unwrap();
    assert_eq!(cfg.currency, "EUR");
    assert_eq!(cfg.model_constants().grid_co2_factor_kg_per_kwh, 0.4);
    assert_eq!(cfg.default_days_per_year, 330.0);
}

#[test]
fn save_then_load_returns_same_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    let cfg = Config {
        language: "ko".to_string(),
        fuel_db_path: Some(dir.path().join("fuels.csv")),
        ..Config::default()
    };
    cfg.save_to(&path).unwrap();
    assert_eq!(Config::load_from(&path).unwrap(), cfg);
}

#[test]
fn load_or_create_writes_defaults_when_missing() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("fresh.toml");
    assert!(!path.exists());
    let cfg = config::load_or_create(&path).unwrap();
    assert_eq!(cfg, Config::default());
    assert!(path.exists());
}

#[test]
fn broken_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "default_cop = \"high\"").unwrap();
    assert!(matches!(
        Config::load_from(&path),
        Err(config::ConfigError::Serde(_))
    ));
}
