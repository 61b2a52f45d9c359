use heat_pump_savings::fuel_db::FuelDatabase;
use heat_pump_savings::heating::HeatingMethod;
use heat_pump_savings::savings::{
    calculate, CalculationInputs, CoolingRecovery, ModelConstants, OperatingSchedule,
};
use proptest::prelude::*;

fn inputs(capacity_kw: f64, cop: f64, hours: f64, days: f64, fuel_idx: usize) -> CalculationInputs {
    let db = FuelDatabase::built_in();
    let fuel = db.fuels()[fuel_idx % db.len()].clone();
    let mut i = CalculationInputs::new(HeatingMethod::DirectCapacity { capacity_kw }, fuel);
    i.cop = cop;
    i.schedule = OperatingSchedule::new(hours, days);
    i
}

proptest! {
    #[test]
    fn savings_strictly_increase_with_cop(
        capacity in 1.0f64..5000.0,
        cop in 0.5f64..8.0,
        bump in 0.01f64..3.0,
        hours in 1.0f64..24.0,
        days in 1.0f64..365.0,
        fuel in 0usize..6,
        cooling in any::<bool>(),
    ) {
        let k = ModelConstants::default();
        let mut low_inputs = inputs(capacity, cop, hours, days, fuel);
        let mut high_inputs = inputs(capacity, cop + bump, hours, days, fuel);
        if cooling {
            low_inputs.cooling = Some(CoolingRecovery::default());
            high_inputs.cooling = Some(CoolingRecovery::default());
        }
        let low = calculate(&low_inputs, &k).unwrap();
        let high = calculate(&high_inputs, &k).unwrap();
        prop_assert!(high.total_hp_cost_per_year < low.total_hp_cost_per_year);
        prop_assert!(high.total_savings_per_year > low.total_savings_per_year);
        prop_assert_eq!(high.boiler_operating_cost_per_year, low.boiler_operating_cost_per_year);
    }

    #[test]
    fn same_inputs_give_identical_results(
        capacity in 0.0f64..5000.0,
        cop in 0.5f64..8.0,
        fuel in 0usize..6,
    ) {
        let mut i = inputs(capacity, cop, 24.0, 330.0, fuel);
        i.cooling = Some(CoolingRecovery::default());
        let k = ModelConstants::default();
        prop_assert_eq!(calculate(&i, &k).unwrap(), calculate(&i, &k).unwrap());
    }

    #[test]
    fn cooling_is_never_negative_and_only_lowers_savings(
        capacity in 0.0f64..5000.0,
        cop in 0.2f64..8.0,
        ikw in 0.0f64..2.0,
        fuel in 0usize..6,
    ) {
        let k = ModelConstants::default();
        let plain = inputs(capacity, cop, 24.0, 330.0, fuel);
        let mut cooled = plain.clone();
        cooled.cooling = Some(CoolingRecovery { chiller_ikw_per_tr: ikw });

        let a = calculate(&plain, &k).unwrap();
        let b = calculate(&cooled, &k).unwrap();
        prop_assert!(b.cooling_capacity_kw >= 0.0);
        prop_assert!(b.cooling_cost_per_year >= 0.0);
        prop_assert!(b.total_savings_per_year <= a.total_savings_per_year);
        if cop <= 1.0 {
            prop_assert_eq!(b.cooling_capacity_kw, 0.0);
        }
    }

    #[test]
    fn annual_figures_scale_with_operating_hours(
        capacity in 1.0f64..5000.0,
        hours in 1.0f64..12.0,
        fuel in 0usize..6,
    ) {
        let k = ModelConstants::default();
        let half = calculate(&inputs(capacity, 3.5, hours, 330.0, fuel), &k).unwrap();
        let full = calculate(&inputs(capacity, 3.5, hours * 2.0, 330.0, fuel), &k).unwrap();
        let ratio = full.fuel_cost_per_year / half.fuel_cost_per_year;
        prop_assert!((ratio - 2.0).abs() < 1e-9);
        let schedule = OperatingSchedule::new(hours, 330.0);
        let expected = half.fuel_consumption_kg_per_hr * schedule.annual_hours();
        prop_assert!((half.fuel_consumption_kg_per_year - expected).abs() <= 1e-9 * expected.max(1.0));
    }
}
