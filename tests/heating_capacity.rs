use heat_pump_savings::errors::{Advisory, SavingsError};
use heat_pump_savings::heating::{resolve_capacity, HeatingMethod, HeatingMethodKind};

fn assert_close(label: &str, actual: f64, expected: f64, tol: f64) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tol,
        "{label} expected {expected:.6} got {actual:.6} (diff {diff:.2e}, tol {tol})"
    );
}

#[test]
fn boiler_kcal_converts_with_860() {
    let r = resolve_capacity(&HeatingMethod::BoilerCapacity {
        boiler_kcal_per_hr: 100_000.0,
    })
    .expect("boiler capacity");
    assert_close("kW", r.capacity_kw, 116.28, 0.01);
    assert!(r.advisories.is_empty());
}

#[test]
fn direct_and_heater_pass_through() {
    let direct = resolve_capacity(&HeatingMethod::DirectCapacity { capacity_kw: 462.0 })
        .expect("direct");
    let heater =
        resolve_capacity(&HeatingMethod::ElectricHeater { rating_kw: 462.0 }).expect("heater");
    assert_eq!(direct.capacity_kw, 462.0);
    assert_eq!(heater.capacity_kw, 462.0);
    assert!(direct.steam.is_none());
}

#[test]
fn steam_flow_uses_table_and_sensible_condensate() {
    // 1000 kg/h, 1 bar(a), 95 °C → 1000 * (2674.9 - 4.186*95) / 3600
    let r = resolve_capacity(&HeatingMethod::SteamFlow {
        steam_flow_kg_per_hr: 1000.0,
        steam_pressure_bar_abs: 1.0,
        condensate_temp_c: 95.0,
    })
    .expect("steam");
    let expected = 1000.0 * (2674.9 - 4.186 * 95.0) / 3600.0;
    assert_close("kW", r.capacity_kw, expected, 1e-9);
    assert!(r.advisories.is_empty(), "{:?}", r.advisories);
    assert_eq!(r.steam.map(|s| s.used_bar), Some(1.0));
}

#[test]
fn steam_pressure_below_table_is_clamped_with_advisory() {
    let r = resolve_capacity(&HeatingMethod::SteamFlow {
        steam_flow_kg_per_hr: 500.0,
        steam_pressure_bar_abs: 0.5,
        condensate_temp_c: 60.0,
    })
    .expect("steam");
    assert!(r.advisories.contains(&Advisory::SteamPressureOutOfRange {
        requested_bar: 0.5,
        used_bar: 1.0,
    }));
}

#[test]
fn hot_condensate_raises_saturation_advisory() {
    let r = resolve_capacity(&HeatingMethod::SteamFlow {
        steam_flow_kg_per_hr: 1000.0,
        steam_pressure_bar_abs: 1.0,
        condensate_temp_c: 120.0,
    })
    .expect("steam");
    assert!(r
        .advisories
        .iter()
        .any(|a| matches!(a, Advisory::CondensateAboveSaturation { .. })));
}

#[test]
fn condensate_hotter_than_steam_enthalpy_is_rejected() {
    let err = resolve_capacity(&HeatingMethod::SteamFlow {
        steam_flow_kg_per_hr: 1000.0,
        steam_pressure_bar_abs: 5.0,
        condensate_temp_c: 700.0,
    })
    .unwrap_err();
    assert_eq!(err.field(), Some("condensate_temp_c"));
}

#[test]
fn negative_inputs_are_rejected() {
    let cases = [
        (
            HeatingMethod::DirectCapacity { capacity_kw: -1.0 },
            "capacity_kw",
        ),
        (HeatingMethod::ElectricHeater { rating_kw: -5.0 }, "rating_kw"),
        (
            HeatingMethod::BoilerCapacity {
                boiler_kcal_per_hr: -10.0,
            },
            "boiler_kcal_per_hr",
        ),
        (
            HeatingMethod::SteamFlow {
                steam_flow_kg_per_hr: -1.0,
                steam_pressure_bar_abs: 2.0,
                condensate_temp_c: 80.0,
            },
            "steam_flow_kg_per_hr",
        ),
        (
            HeatingMethod::SteamFlow {
                steam_flow_kg_per_hr: 100.0,
                steam_pressure_bar_abs: 0.0,
                condensate_temp_c: 80.0,
            },
            "steam_pressure_bar_abs",
        ),
    ];
    for (method, field) in cases {
        let err = resolve_capacity(&method).unwrap_err();
        assert_eq!(err.field(), Some(field), "{method:?}");
    }
}

#[test]
fn method_names_parse() {
    assert_eq!(
        "Steam Flow Rate".parse::<HeatingMethodKind>().unwrap(),
        HeatingMethodKind::SteamFlow
    );
    assert_eq!(
        "boiler".parse::<HeatingMethodKind>().unwrap(),
        HeatingMethodKind::BoilerCapacity
    );
    assert_eq!(
        "heat-pipe".parse::<HeatingMethodKind>(),
        Err(SavingsError::UnsupportedMethod("heat-pipe".into()))
    );
}

#[test]
fn every_label_parses_back_to_its_kind() {
    for kind in HeatingMethodKind::ALL {
        assert_eq!(kind.label().parse::<HeatingMethodKind>(), Ok(kind));
    }
}
