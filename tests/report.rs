use heat_pump_savings::fuel_db::FuelDatabase;
use heat_pump_savings::heating::HeatingMethod;
use heat_pump_savings::report::{
    export_csv, export_json, export_results_csv, export_results_to_path, export_to_path, round2,
    ExportError, ExportFormat, Record, RecordValue, Report,
};
use heat_pump_savings::savings::{calculate, CalculationInputs, CoolingRecovery, ModelConstants};

fn build(cooling: bool) -> Report {
    let fuel = FuelDatabase::built_in().get("Biomass").unwrap().clone();
    let mut inputs =
        CalculationInputs::new(HeatingMethod::DirectCapacity { capacity_kw: 462.0 }, fuel);
    inputs.labour_cost_per_day = 1500.0;
    if cooling {
        inputs.cooling = Some(CoolingRecovery::default());
    }
    let result = calculate(&inputs, &ModelConstants::default()).unwrap();
    Report::build(&inputs, &result, &ModelConstants::default(), "Rs")
}

fn assumption<'a>(report: &'a Report, label: &str) -> Option<&'a RecordValue> {
    report
        .assumptions
        .iter()
        .find(|r: &&Record| r.label == label)
        .map(|r| &r.value)
}

#[test]
fn rounds_half_away_from_zero_to_two_places() {
    assert_eq!(round2(1.005_000_1), 1.01);
    assert_eq!(round2(-2.456), -2.46);
    assert_eq!(RecordValue::number(132.004), RecordValue::Number(132.0));
    assert_eq!(RecordValue::number(5.0).to_string(), "5.00");
}

#[test]
fn fuel_cost_row_excludes_labour() {
    let report = build(false);
    let fuel_cost = report.result("Fuel Cost (Rs/year)").and_then(RecordValue::as_number);
    let labour = report
        .result("Boiler Labour Cost (Rs/year)")
        .and_then(RecordValue::as_number);
    assert_eq!(labour, Some(1500.0 * 330.0));
    let fuel_cost = fuel_cost.expect("fuel cost row");
    assert!(fuel_cost < report.summary.boiler_operating_cost_per_year);
    assert!(
        (report.summary.boiler_operating_cost_per_year - fuel_cost - 495_000.0).abs() < 0.02
    );
}

#[test]
fn disabled_cooling_rows_read_not_applicable() {
    let report = build(false);
    assert_eq!(
        report.result("Cooling (Disabled)"),
        Some(&RecordValue::text("N/A"))
    );
    assert_eq!(
        report.result("Cooling Cost (Rs/year)"),
        Some(&RecordValue::text("N/A"))
    );

    let cooled = build(true);
    assert!(cooled.result("Cooling (Disabled)").is_none());
    assert!(cooled
        .result("Cooling Capacity (kW)")
        .and_then(RecordValue::as_number)
        .is_some_and(|kw| kw > 0.0));
}

#[test]
fn summary_matches_rounded_results() {
    let report = build(true);
    let savings = report
        .result("Annual Savings (Rs/year)")
        .and_then(RecordValue::as_number)
        .unwrap();
    assert_eq!(report.summary.annual_savings_per_year, savings);
    assert_eq!(
        report.summary_headers()[0],
        "Annual Boiler Operating Cost (Rs/year)"
    );
    assert_eq!(report.summary.values().len(), 4);
}

#[test]
fn csv_export_has_section_column() {
    let report = build(false);
    let mut buf = Vec::new();
    export_csv(&report, &mut buf).unwrap();
    let text = String::from_utf8(buf).unwrap();
    let mut lines = text.lines();
    assert_eq!(lines.next(), Some("Section,Parameter,Value"));
    assert!(text.contains("Inputs,Fuel Type Selected,Biomass"));
    assert!(text.contains("Results,Cooling (Disabled),N/A"));

    let rows = text.lines().count() - 1;
    assert_eq!(
        rows,
        report.inputs.len() + report.assumptions.len() + report.results.len()
    );
}

#[test]
fn results_csv_uses_two_decimals() {
    let report = build(false);
    let mut buf = Vec::new();
    export_results_csv(&report, &mut buf).unwrap();
    let text = String::from_utf8(buf).unwrap();
    assert!(text.starts_with("Parameter,Value\n"));
    assert!(text.contains("HP Electricity (kW),132.00"));
}

#[test]
fn json_export_parses_back() {
    let report = build(false);
    let mut buf = Vec::new();
    export_json(&report, &mut buf).unwrap();
    let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
    assert_eq!(value["currency"], "Rs");
    assert_eq!(value["results"][0]["Parameter"], "Heating Capacity (kW)");
    assert_eq!(value["results"][0]["Value"], 462.0);
    assert_eq!(value["summary"]["co2_reduction_tons_per_year"], report.summary.co2_reduction_tons_per_year);
}

#[test]
fn export_to_path_picks_format_by_extension() {
    let dir = tempfile::tempdir().unwrap();
    let report = build(false);

    let json = dir.path().join("report.json");
    assert_eq!(export_to_path(&report, &json).unwrap(), ExportFormat::Json);
    assert!(std::fs::read_to_string(&json).unwrap().trim_start().starts_with('{'));

    let csv = dir.path().join("report.csv");
    assert_eq!(export_to_path(&report, &csv).unwrap(), ExportFormat::Csv);

    let xlsx = dir.path().join("report.xlsx");
    assert!(matches!(
        export_to_path(&report, &xlsx),
        Err(ExportError::UnsupportedFormat(_))
    ));
    assert!(!xlsx.exists());
}

#[test]
fn assumptions_list_grid_factor_and_chiller() {
    let plain = build(false);
    assert_eq!(
        assumption(&plain, "Grid CO₂ Factor (kg/kWh)"),
        Some(&RecordValue::Number(0.82))
    );
    assert_eq!(
        assumption(&plain, "Chiller Efficiency (ikW/TR)"),
        Some(&RecordValue::text("N/A"))
    );

    let cooled = build(true);
    assert_eq!(
        assumption(&cooled, "Chiller Efficiency (ikW/TR)"),
        Some(&RecordValue::Number(0.8))
    );

    let fuel = FuelDatabase::built_in().get("Coal").unwrap().clone();
    let inputs = CalculationInputs::new(HeatingMethod::DirectCapacity { capacity_kw: 100.0 }, fuel);
    let constants = ModelConstants {
        grid_co2_factor_kg_per_kwh: 0.4,
    };
    let result = calculate(&inputs, &constants).unwrap();
    let report = Report::build(&inputs, &result, &constants, "EUR");
    assert_eq!(
        assumption(&report, "Grid CO₂ Factor (kg/kWh)"),
        Some(&RecordValue::Number(0.4))
    );
}

#[test]
fn results_table_file_has_only_parameter_and_value() {
    let dir = tempfile::tempdir().unwrap();
    let report = build(true);

    let path = dir.path().join("heatpump_summary.csv");
    export_results_to_path(&report, &path).unwrap();
    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.starts_with("Parameter,Value\n"));
    assert!(!text.contains("Section"));
    assert_eq!(text.lines().count(), report.results.len() + 1);

    let json = dir.path().join("summary.json");
    assert!(matches!(
        export_results_to_path(&report, &json),
        Err(ExportError::UnsupportedFormat(_))
    ));
    assert!(!json.exists());
}
