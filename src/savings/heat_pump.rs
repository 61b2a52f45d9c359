/// 히트펌프 운전비 계산 입력.
#[derive(Debug, Clone)]
pub struct HeatPumpInput {
    /// 필요 가열량 [kW]
    pub heating_kw: f64,
    /// COP (> 0)
    pub cop: f64,
    pub hours_per_day: f64,
    pub days_per_year: f64,
    /// 전기 요금 [통화/kWh]
    pub electricity_cost: f64,
    /// 계통 전력 배출계수 [kg CO₂/kWh]
    pub grid_co2_factor_kg_per_kwh: f64,
}

/// 히트펌프 운전비 결과.
#[derive(Debug, Clone, PartialEq)]
pub struct HeatPumpResult {
    /// 소비 전력 [kW]
    pub electrical_input_kw: f64,
    /// 전기료 [통화/year]
    pub operating_cost_per_year: f64,
    /// 계통 전력 CO₂ [kg/year]
    pub co2_kg_per_year: f64,
}

/// 가열량/COP로 소비 전력을 구하고 연간 전기료와 CO₂를 계산한다.
pub fn heat_pump_operating_cost(input: &HeatPumpInput) -> HeatPumpResult {
    let electrical_input_kw = input.heating_kw / input.cop;
    let annual_kwh = electrical_input_kw * input.hours_per_day * input.days_per_year;
    HeatPumpResult {
        electrical_input_kw,
        operating_cost_per_year: annual_kwh * input.electricity_cost,
        co2_kg_per_year: annual_kwh * input.grid_co2_factor_kg_per_kwh,
    }
}
