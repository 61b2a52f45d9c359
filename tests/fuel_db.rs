use heat_pump_savings::fuel_db::{FuelDatabase, FuelDbError, FuelKind};
use std::io::Write;

const CSV: &str = "\
Fuel,CV_default,Eff_default,Fuel_Cost,CO2_Emn/kg
Biomass,3200,72,9.5,1.7
Furnace Oil,10000,85,55,3.1
Electric,860,100,8,0.82
";

#[test]
fn built_in_table_has_six_fuels() {
    let db = FuelDatabase::built_in();
    assert_eq!(db.len(), 6);
    let lpg = db.get("lpg").expect("case-insensitive lookup");
    assert_eq!(lpg.kind, FuelKind::Lpg);
    assert_eq!(lpg.calorific_value_kcal_per_kg, 11500.0);
    assert!(db.get("electric").expect("alias").kind.is_electric());
}

#[test]
fn csv_upload_replaces_the_table() {
    let db = FuelDatabase::from_csv_reader(CSV.as_bytes()).expect("csv");
    assert_eq!(db.len(), 3);
    assert!(db.find("Coal").is_none());

    let biomass = db.get("Biomass").unwrap();
    assert_eq!(biomass.calorific_value_kcal_per_kg, 3200.0);
    assert_eq!(biomass.efficiency_pct, 72.0);

    let oil = db.get("furnace oil").unwrap();
    assert_eq!(oil.kind, FuelKind::Custom("Furnace Oil".to_string()));
    assert_eq!(oil.name(), "Furnace Oil");
    assert!(db.get("Electric (resistive)").unwrap().kind.is_electric());
}

#[test]
fn toml_table_loads() {
    let src = r#"
[[fuel]]
name = "Diesel"
calorific_value_kcal_per_kg = 10200.0
efficiency_pct = 88.0
unit_cost = 95.0
co2_factor_kg_per_kg = 3.2
"#;
    let db = FuelDatabase::from_toml_str(src).expect("toml");
    assert_eq!(db.fuels()[0].kind, FuelKind::Diesel);
    assert_eq!(db.fuels()[0].unit_cost, 95.0);
}

#[test]
fn malformed_tables_are_rejected() {
    let header_only = "Fuel,CV_default,Eff_default,Fuel_Cost,CO2_Emn/kg\n";
    assert!(matches!(
        FuelDatabase::from_csv_reader(header_only.as_bytes()),
        Err(FuelDbError::Empty)
    ));

    let dup = format!("{CSV}biomass,3000,70,10,1.8\n");
    assert!(matches!(
        FuelDatabase::from_csv_reader(dup.as_bytes()),
        Err(FuelDbError::Duplicate(name)) if name == "Biomass"
    ));

    let bad_eff = "Fuel,CV_default,Eff_default,Fuel_Cost,CO2_Emn/kg\nCoal,5000,0,10,2.5\n";
    assert!(matches!(
        FuelDatabase::from_csv_reader(bad_eff.as_bytes()),
        Err(FuelDbError::InvalidEntry { name, .. }) if name == "Coal"
    ));

    let not_a_number = "Fuel,CV_default,Eff_default,Fuel_Cost,CO2_Emn/kg\nCoal,lots,65,10,2.5\n";
    assert!(matches!(
        FuelDatabase::from_csv_reader(not_a_number.as_bytes()),
        Err(FuelDbError::Csv(_))
    ));
}

#[test]
fn unknown_fuel_names_the_request() {
    let err = FuelDatabase::built_in().get("  Hydrogen ").unwrap_err();
    assert!(matches!(&err, FuelDbError::UnknownFuel(name) if name == "Hydrogen"));
    assert_eq!(err.to_string(), "unknown fuel: Hydrogen");
}

#[test]
fn load_path_dispatches_on_extension() {
    let dir = tempfile::tempdir().unwrap();

    let csv_path = dir.path().join("fuels.CSV");
    std::fs::File::create(&csv_path)
        .unwrap()
        .write_all(CSV.as_bytes())
        .unwrap();
    assert_eq!(FuelDatabase::load_path(&csv_path).unwrap().len(), 3);

    let xlsx_path = dir.path().join("fuels.xlsx");
    std::fs::write(&xlsx_path, b"not really").unwrap();
    assert!(matches!(
        FuelDatabase::load_path(&xlsx_path),
        Err(FuelDbError::UnsupportedFormat(ext)) if ext == "xlsx"
    ));

    assert!(matches!(
        FuelDatabase::load_path(&dir.path().join("missing.toml")),
        Err(FuelDbError::Io(_))
    ));
}
