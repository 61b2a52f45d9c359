use heat_pump_savings::app::{load_fuel_db, AppError, Session};
use heat_pump_savings::config::Config;
use heat_pump_savings::fuel_db::{FuelDatabase, FuelDbError};
use heat_pump_savings::i18n::Language;

fn write_config(dir: &std::path::Path, cfg: &Config) -> std::path::PathBuf {
    let path = dir.join("config.toml");
    cfg.save_to(&path).unwrap();
    path
}

#[test]
fn missing_configured_fuel_db_falls_back_to_built_in() {
    let dir = tempfile::tempdir().unwrap();
    let gone = dir.path().join("gone.csv");
    let cfg = Config {
        currency: "EUR".to_string(),
        fuel_db_path: Some(gone.clone()),
        ..Config::default()
    };
    let path = write_config(dir.path(), &cfg);

    let session = Session::open(Some(path.as_path()), None, Some("en")).unwrap();
    assert_eq!(session.fuels, FuelDatabase::built_in());
    // 읽어 온 설정은 그대로 유지된다.
    assert_eq!(session.config.currency, "EUR");
    assert_eq!(session.config.fuel_db_path, Some(gone));
    assert_eq!(Config::load_from(&path).unwrap(), cfg);
}

#[test]
fn explicit_fuel_db_path_must_exist() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_config(dir.path(), &Config::default());
    let missing = dir.path().join("missing.toml");

    assert!(matches!(
        Session::open(Some(path.as_path()), Some(missing.as_path()), Some("en")),
        Err(AppError::FuelDb(FuelDbError::Io(_)))
    ));
    assert!(matches!(
        load_fuel_db(&Config::default(), Some(missing.as_path())),
        Err(FuelDbError::Io(_))
    ));
}

#[test]
fn language_change_rebuilds_translator() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_config(dir.path(), &Config::default());
    let mut session = Session::open(Some(path.as_path()), None, Some("en")).unwrap();
    assert_eq!(session.tr.language(), Language::En);

    session.config.language = "ko".to_string();
    session.reload_translator();
    assert_eq!(session.tr.language(), Language::Ko);
}
