//! 보일러 대비 히트펌프 전환 시 연간 운전비/CO₂ 비교 계산.
//!
//! `calculate`는 입력만으로 결과가 정해지는 순수 함수다. 같은 입력과 상수로 두 번
//! 호출하면 비트 단위로 같은 결과를 돌려준다.

pub mod boiler;
pub mod cooling;
pub mod heat_pump;
pub mod inputs;

pub use inputs::{CalculationInputs, CoolingRecovery, OperatingSchedule};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::errors::{require_non_negative, Advisory, SavingsResult};
use crate::heating;
use boiler::{boiler_operating_cost, BoilerCostInput};
use cooling::{cooling_recovery, CoolingRecoveryInput, CoolingRecoveryResult};
use heat_pump::{heat_pump_operating_cost, HeatPumpInput};

/// 계통 전력 CO₂ 배출계수 기본값 [kg CO₂/kWh].
pub const DEFAULT_GRID_CO2_FACTOR: f64 = 0.82;

/// 배포 환경(지역)마다 달라지는 모델 상수.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ModelConstants {
    pub grid_co2_factor_kg_per_kwh: f64,
}

impl Default for ModelConstants {
    fn default() -> Self {
        Self {
            grid_co2_factor_kg_per_kwh: DEFAULT_GRID_CO2_FACTOR,
        }
    }
}

/// 계산 결과. 반올림하지 않은 원값을 담는다.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalculationResult {
    /// 가열량 [kW]
    pub heating_capacity_kw: f64,
    /// 실제 적용된 연료 단가 (전기 히터는 전기 요금)
    pub fuel_unit_cost: f64,
    pub fuel_consumption_kg_per_hr: f64,
    pub fuel_consumption_kg_per_year: f64,
    pub fuel_cost_per_year: f64,
    pub labour_cost_per_year: f64,
    pub connected_load_cost_per_year: f64,
    pub boiler_operating_cost_per_year: f64,
    pub hp_electrical_input_kw: f64,
    pub hp_operating_cost_per_year: f64,
    pub cooling_enabled: bool,
    pub cooling_capacity_kw: f64,
    pub cooling_capacity_tr: f64,
    pub cooling_electrical_input_kw: f64,
    pub cooling_cost_per_year: f64,
    /// 히트펌프 + 냉각 전기료
    pub total_hp_cost_per_year: f64,
    pub co2_fuel_kg_per_year: f64,
    pub co2_hp_kg_per_year: f64,
    pub cooling_co2_kg_per_year: f64,
    pub co2_fuel_tons_per_year: f64,
    /// 히트펌프 단독 CO₂ [t/year]
    pub co2_hp_tons_per_year: f64,
    /// 히트펌프 + 냉각 CO₂ [t/year]
    pub total_hp_co2_tons_per_year: f64,
    pub total_savings_per_year: f64,
    pub co2_reduction_tons_per_year: f64,
    pub advisories: Vec<Advisory>,
}

impl CalculationResult {
    /// 히트펌프 + 냉각 CO₂ [kg/year]
    pub fn total_hp_co2_kg_per_year(&self) -> f64 {
        self.co2_hp_kg_per_year + self.cooling_co2_kg_per_year
    }
}

/// 입력을 검증한 뒤 가열량 환산, 보일러/히트펌프 운전비, 냉각 회수를 합산한다.
pub fn calculate(
    inputs: &CalculationInputs,
    constants: &ModelConstants,
) -> SavingsResult<CalculationResult> {
    inputs.validate()?;
    let grid_co2 =
        require_non_negative("grid_co2_factor_kg_per_kwh", constants.grid_co2_factor_kg_per_kwh)?;

    let resolved = heating::resolve_capacity(&inputs.heating_method)?;
    let heating_kw = resolved.capacity_kw;
    let mut advisories = resolved.advisories;
    let schedule = inputs.schedule;

    // 전기 히터는 같은 에너지원이므로 단가를 전기 요금으로 먼저 바꾼다.
    let fuel_unit_cost = inputs.fuel.effective_unit_cost(inputs.electricity_cost);

    let boiler = boiler_operating_cost(&BoilerCostInput {
        heating_kw,
        calorific_value_kcal_per_kg: inputs.fuel.calorific_value_kcal_per_kg,
        efficiency: inputs.fuel.efficiency_fraction(),
        fuel_unit_cost,
        co2_factor_kg_per_kg: inputs.fuel.co2_factor_kg_per_kg,
        hours_per_day: schedule.hours_per_day,
        days_per_year: schedule.days_per_year,
        labour_cost_per_day: inputs.labour_cost_per_day,
        connected_load_kw: inputs.boiler_connected_load_kw,
        electricity_cost: inputs.electricity_cost,
    });

    let hp = heat_pump_operating_cost(&HeatPumpInput {
        heating_kw,
        cop: inputs.cop,
        hours_per_day: schedule.hours_per_day,
        days_per_year: schedule.days_per_year,
        electricity_cost: inputs.electricity_cost,
        grid_co2_factor_kg_per_kwh: grid_co2,
    });
    if inputs.cop < 1.0 {
        warn!(cop = inputs.cop, "heat pump COP below 1");
        advisories.push(Advisory::CopBelowOne { cop: inputs.cop });
    }

    let cooling = match inputs.cooling {
        Some(cfg) => cooling_recovery(&CoolingRecoveryInput {
            heating_kw,
            hp_electrical_input_kw: hp.electrical_input_kw,
            chiller_ikw_per_tr: cfg.chiller_ikw_per_tr,
            hours_per_day: schedule.hours_per_day,
            days_per_year: schedule.days_per_year,
            electricity_cost: inputs.electricity_cost,
            grid_co2_factor_kg_per_kwh: grid_co2,
        }),
        None => CoolingRecoveryResult::default(),
    };

    let total_hp_cost = hp.operating_cost_per_year + cooling.cost_per_year;
    let total_hp_co2_kg = hp.co2_kg_per_year + cooling.co2_kg_per_year;
    let total_savings = boiler.operating_cost_per_year - total_hp_cost;
    let co2_reduction_kg = boiler.co2_kg_per_year - total_hp_co2_kg;

    debug!(
        heating_kw,
        boiler_cost = boiler.operating_cost_per_year,
        hp_cost = total_hp_cost,
        savings = total_savings,
        "calculation finished"
    );

    Ok(CalculationResult {
        heating_capacity_kw: heating_kw,
        fuel_unit_cost,
        fuel_consumption_kg_per_hr: boiler.fuel_kg_per_hr,
        fuel_consumption_kg_per_year: boiler.fuel_kg_per_year,
        fuel_cost_per_year: boiler.fuel_cost_per_year,
        labour_cost_per_year: boiler.labour_cost_per_year,
        connected_load_cost_per_year: boiler.connected_load_cost_per_year,
        boiler_operating_cost_per_year: boiler.operating_cost_per_year,
        hp_electrical_input_kw: hp.electrical_input_kw,
        hp_operating_cost_per_year: hp.operating_cost_per_year,
        cooling_enabled: inputs.cooling_enabled(),
        cooling_capacity_kw: cooling.capacity_kw,
        cooling_capacity_tr: cooling.capacity_tr,
        cooling_electrical_input_kw: cooling.electrical_input_kw,
        cooling_cost_per_year: cooling.cost_per_year,
        total_hp_cost_per_year: total_hp_cost,
        co2_fuel_kg_per_year: boiler.co2_kg_per_year,
        co2_hp_kg_per_year: hp.co2_kg_per_year,
        cooling_co2_kg_per_year: cooling.co2_kg_per_year,
        co2_fuel_tons_per_year: boiler.co2_kg_per_year / 1000.0,
        co2_hp_tons_per_year: hp.co2_kg_per_year / 1000.0,
        total_hp_co2_tons_per_year: total_hp_co2_kg / 1000.0,
        total_savings_per_year: total_savings,
        co2_reduction_tons_per_year: co2_reduction_kg / 1000.0,
        advisories,
    })
}
