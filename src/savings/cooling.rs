use crate::units::KW_PER_TR;

/// 냉각 회수(칠러 대체) 계산 입력.
#[derive(Debug, Clone)]
pub struct CoolingRecoveryInput {
    /// 가열량 [kW]
    pub heating_kw: f64,
    /// 히트펌프 소비 전력 [kW]
    pub hp_electrical_input_kw: f64,
    /// 칠러 효율 [ikW/TR]
    pub chiller_ikw_per_tr: f64,
    pub hours_per_day: f64,
    pub days_per_year: f64,
    /// 전기 요금 [통화/kWh]
    pub electricity_cost: f64,
    /// 계통 전력 배출계수 [kg CO₂/kWh]
    pub grid_co2_factor_kg_per_kwh: f64,
}

/// 냉각 회수 결과. 비활성 시 모든 값이 0이다.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CoolingRecoveryResult {
    /// 냉각 능력 [kW]
    pub capacity_kw: f64,
    /// 냉각 능력 [TR]
    pub capacity_tr: f64,
    /// 칠러 환산 전력 [kW]
    pub electrical_input_kw: f64,
    /// 전기료 [통화/year]
    pub cost_per_year: f64,
    /// CO₂ [kg/year]
    pub co2_kg_per_year: f64,
}

/// 히트펌프 흡열측(가열량 - 소비전력)을 냉각 능력으로 보고 칠러 환산 전력을 계산한다.
/// 냉각 능력은 0 미만이 되지 않는다(COP < 1).
pub fn cooling_recovery(input: &CoolingRecoveryInput) -> CoolingRecoveryResult {
    let capacity_kw = (input.heating_kw - input.hp_electrical_input_kw).max(0.0);
    let capacity_tr = capacity_kw / KW_PER_TR;
    let electrical_input_kw = capacity_tr * input.chiller_ikw_per_tr;
    let annual_kwh = electrical_input_kw * input.hours_per_day * input.days_per_year;
    CoolingRecoveryResult {
        capacity_kw,
        capacity_tr,
        electrical_input_kw,
        cost_per_year: annual_kwh * input.electricity_cost,
        co2_kg_per_year: annual_kwh * input.grid_co2_factor_kg_per_kwh,
    }
}
