//! 보일러 → 히트펌프 전환 시나리오 회귀 테스트.
use heat_pump_savings::errors::{Advisory, SavingsError};
use heat_pump_savings::fuel_db::{FuelDatabase, FuelKind};
use heat_pump_savings::heating::HeatingMethod;
use heat_pump_savings::savings::{
    calculate, CalculationInputs, CoolingRecovery, ModelConstants, OperatingSchedule,
};

fn assert_close(label: &str, actual: f64, expected: f64, rel_tol: f64) {
    let denom = expected.abs().max(1.0);
    let diff = (actual - expected).abs();
    assert!(
        diff <= rel_tol * denom,
        "{label} expected {expected:.6} got {actual:.6} (diff {diff:.6}, tol {rel_tol})"
    );
}

fn fuel(name: &str) -> heat_pump_savings::fuel_db::FuelProperties {
    FuelDatabase::built_in().get(name).expect("built-in fuel").clone()
}

fn scenario() -> CalculationInputs {
    CalculationInputs::new(
        HeatingMethod::DirectCapacity { capacity_kw: 462.0 },
        fuel("Biomass"),
    )
}

#[test]
fn biomass_462_kw_reference_scenario() {
    let r = calculate(&scenario(), &ModelConstants::default()).expect("calculate");

    assert_close("fuel kg/h", r.fuel_consumption_kg_per_hr, 189.08, 0.01);
    assert_close("fuel kg/year", r.fuel_consumption_kg_per_year, 1_497_746.0, 0.01);
    assert_close("hp kW", r.hp_electrical_input_kw, 132.0, 1e-12);
    assert_close("hp cost", r.hp_operating_cost_per_year, 132.0 * 24.0 * 330.0 * 5.5, 1e-12);

    // 세부 항목 사이의 관계
    assert_close(
        "fuel cost",
        r.fuel_cost_per_year,
        r.fuel_consumption_kg_per_year * 10.0,
        1e-12,
    );
    assert_eq!(r.labour_cost_per_year, 0.0);
    assert_eq!(r.connected_load_cost_per_year, 0.0);
    assert_eq!(r.boiler_operating_cost_per_year, r.fuel_cost_per_year);
    assert_close(
        "savings",
        r.total_savings_per_year,
        r.boiler_operating_cost_per_year - r.hp_operating_cost_per_year,
        1e-12,
    );
    assert_close("co2 fuel kg", r.co2_fuel_kg_per_year, r.fuel_consumption_kg_per_year * 1.8, 1e-12);
    assert_close(
        "co2 hp kg",
        r.co2_hp_kg_per_year,
        132.0 * 24.0 * 330.0 * 0.82,
        1e-12,
    );
    assert_close(
        "co2 reduction t",
        r.co2_reduction_tons_per_year,
        (r.co2_fuel_kg_per_year - r.co2_hp_kg_per_year) / 1000.0,
        1e-12,
    );
    assert!(!r.cooling_enabled);
    assert_eq!(r.cooling_cost_per_year, 0.0);
    assert!(r.advisories.is_empty());
}

#[test]
fn labour_and_connected_load_add_to_boiler_cost() {
    let mut inputs = scenario();
    inputs.labour_cost_per_day = 1000.0;
    inputs.boiler_connected_load_kw = 10.0;
    let r = calculate(&inputs, &ModelConstants::default()).expect("calculate");
    assert_close("labour", r.labour_cost_per_year, 330_000.0, 1e-12);
    assert_close("load", r.connected_load_cost_per_year, 10.0 * 24.0 * 330.0 * 5.5, 1e-12);
    assert_close(
        "boiler",
        r.boiler_operating_cost_per_year,
        r.fuel_cost_per_year + r.labour_cost_per_year + r.connected_load_cost_per_year,
        1e-12,
    );
}

#[test]
fn electric_resistive_uses_electricity_tariff() {
    let mut inputs = scenario();
    inputs.fuel = fuel("Electric (resistive)");
    inputs.electricity_cost = 7.25;
    assert!(inputs.fuel.kind.is_electric());
    let r = calculate(&inputs, &ModelConstants::default()).expect("calculate");
    assert_eq!(r.fuel_unit_cost, 7.25);
    assert_close("fuel cost", r.fuel_cost_per_year, r.fuel_consumption_kg_per_year * 7.25, 1e-12);
    // 860 kcal/kg, 100 % → kg/h 수치가 kW 와 같다.
    assert_close("kg/h", r.fuel_consumption_kg_per_hr, 462.0 * 3600.0 / (860.0 * 4.184), 1e-12);
}

#[test]
fn cooling_recovery_reduces_savings() {
    let mut inputs = scenario();
    inputs.cooling = Some(CoolingRecovery::default());
    let with = calculate(&inputs, &ModelConstants::default()).expect("with cooling");
    let without = calculate(&scenario(), &ModelConstants::default()).expect("without");

    assert!(with.cooling_enabled);
    assert_close("cooling kW", with.cooling_capacity_kw, 462.0 - 132.0, 1e-12);
    assert_close("cooling TR", with.cooling_capacity_tr, 330.0 / 3.516, 1e-12);
    assert_close("chiller kW", with.cooling_electrical_input_kw, 330.0 / 3.516 * 0.8, 1e-12);
    assert_close(
        "total hp cost",
        with.total_hp_cost_per_year,
        with.hp_operating_cost_per_year + with.cooling_cost_per_year,
        1e-12,
    );
    assert_close(
        "savings delta",
        without.total_savings_per_year - with.total_savings_per_year,
        with.cooling_cost_per_year,
        1e-9,
    );
    assert_close(
        "hp co2 incl cooling",
        with.total_hp_co2_tons_per_year,
        (with.co2_hp_kg_per_year + with.cooling_co2_kg_per_year) / 1000.0,
        1e-12,
    );
}

#[test]
fn cop_below_one_floors_cooling_and_advises() {
    let mut inputs = scenario();
    inputs.cop = 0.8;
    inputs.cooling = Some(CoolingRecovery::default());
    let r = calculate(&inputs, &ModelConstants::default()).expect("calculate");
    assert_eq!(r.cooling_capacity_kw, 0.0);
    assert_eq!(r.cooling_cost_per_year, 0.0);
    assert!(r.advisories.contains(&Advisory::CopBelowOne { cop: 0.8 }));
}

#[test]
fn zero_divisors_are_rejected_with_field_name() {
    let cases: [(&str, fn(&mut CalculationInputs)); 5] = [
        ("cop", |i: &mut CalculationInputs| i.cop = 0.0),
        ("efficiency_pct", |i: &mut CalculationInputs| i.fuel.efficiency_pct = 0.0),
        ("calorific_value_kcal_per_kg", |i: &mut CalculationInputs| {
            i.fuel.calorific_value_kcal_per_kg = 0.0
        }),
        ("hours_per_day", |i: &mut CalculationInputs| {
            i.schedule = OperatingSchedule::new(0.0, 330.0)
        }),
        ("days_per_year", |i: &mut CalculationInputs| {
            i.schedule = OperatingSchedule::new(24.0, 0.0)
        }),
    ];
    for (field, mutate) in cases {
        let mut inputs = scenario();
        mutate(&mut inputs);
        let err = calculate(&inputs, &ModelConstants::default()).unwrap_err();
        assert_eq!(err.field(), Some(field), "{err}");
    }
}

#[test]
fn out_of_range_schedule_and_efficiency_are_rejected() {
    let mut inputs = scenario();
    inputs.schedule = OperatingSchedule::new(25.0, 330.0);
    assert_eq!(
        calculate(&inputs, &ModelConstants::default()).unwrap_err().field(),
        Some("hours_per_day")
    );

    let mut inputs = scenario();
    inputs.schedule = OperatingSchedule::new(24.0, 366.0);
    assert_eq!(
        calculate(&inputs, &ModelConstants::default()).unwrap_err().field(),
        Some("days_per_year")
    );

    let mut inputs = scenario();
    inputs.fuel.efficiency_pct = 120.0;
    assert!(matches!(
        calculate(&inputs, &ModelConstants::default()),
        Err(SavingsError::InvalidInput { field: "efficiency_pct", .. })
    ));
}

#[test]
fn negative_costs_and_grid_factor_are_rejected() {
    let mut inputs = scenario();
    inputs.electricity_cost = -1.0;
    assert_eq!(
        calculate(&inputs, &ModelConstants::default()).unwrap_err().field(),
        Some("electricity_cost")
    );

    let constants = ModelConstants {
        grid_co2_factor_kg_per_kwh: -0.1,
    };
    assert_eq!(
        calculate(&scenario(), &constants).unwrap_err().field(),
        Some("grid_co2_factor_kg_per_kwh")
    );
}

#[test]
fn grid_factor_comes_from_constants() {
    let clean = ModelConstants {
        grid_co2_factor_kg_per_kwh: 0.0,
    };
    let r = calculate(&scenario(), &clean).expect("calculate");
    assert_eq!(r.co2_hp_kg_per_year, 0.0);
    assert_close("reduction", r.co2_reduction_tons_per_year, r.co2_fuel_tons_per_year, 1e-12);
}

#[test]
fn steam_scenario_carries_advisory_into_result() {
    let inputs = CalculationInputs::new(
        HeatingMethod::SteamFlow {
            steam_flow_kg_per_hr: 1000.0,
            steam_pressure_bar_abs: 15.0,
            condensate_temp_c: 95.0,
        },
        fuel("Diesel"),
    );
    let r = calculate(&inputs, &ModelConstants::default()).expect("calculate");
    assert_close(
        "duty",
        r.heating_capacity_kw,
        1000.0 * (2780.6 - 4.186 * 95.0) / 3600.0,
        1e-12,
    );
    assert!(r.advisories.contains(&Advisory::SteamPressureOutOfRange {
        requested_bar: 15.0,
        used_bar: 11.0,
    }));
}

#[test]
fn default_inputs_match_reference_form() {
    let d = CalculationInputs::default();
    assert_eq!(d.fuel.kind, FuelKind::Biomass);
    assert_eq!(d.cop, 3.5);
    assert_eq!(d.schedule.annual_hours(), 24.0 * 330.0);
    assert_eq!(d.electricity_cost, 5.5);
    assert!(!d.cooling_enabled());
}
