use crate::units::KJ_PER_KCAL;

/// 연료 보일러 운전비 계산 입력.
#[derive(Debug, Clone)]
pub struct BoilerCostInput {
    /// 필요 가열량 [kW]
    pub heating_kw: f64,
    /// 연료 발열량 [kcal/kg]
    pub calorific_value_kcal_per_kg: f64,
    /// 보일러 효율 (0~1)
    pub efficiency: f64,
    /// 적용 연료 단가 [통화/kg]
    pub fuel_unit_cost: f64,
    /// 연료 CO₂ 배출계수 [kg/kg]
    pub co2_factor_kg_per_kg: f64,
    pub hours_per_day: f64,
    pub days_per_year: f64,
    /// 인건비 [통화/day]
    pub labour_cost_per_day: f64,
    /// 보조기기 전기 부하 [kW]
    pub connected_load_kw: f64,
    /// 전기 요금 [통화/kWh]
    pub electricity_cost: f64,
}

/// 연료 보일러 운전비 결과.
#[derive(Debug, Clone, PartialEq)]
pub struct BoilerCostResult {
    /// 연료 소비량 [kg/h]
    pub fuel_kg_per_hr: f64,
    /// 연료 소비량 [kg/year]
    pub fuel_kg_per_year: f64,
    /// 연료비 [통화/year]
    pub fuel_cost_per_year: f64,
    /// 인건비 [통화/year]
    pub labour_cost_per_year: f64,
    /// 보조기기 전기료 [통화/year]
    pub connected_load_cost_per_year: f64,
    /// 연료비 + 인건비 + 보조기기 전기료 [통화/year]
    pub operating_cost_per_year: f64,
    /// 연료 연소 CO₂ [kg/year]
    pub co2_kg_per_year: f64,
}

/// 가열량(kJ/s)을 발열량(kJ/kg)과 효율로 나눠 연료 소비량과 연간 운전비를 계산한다.
/// 분모(발열량, 효율)는 호출 전에 검증되어 있어야 한다.
pub fn boiler_operating_cost(input: &BoilerCostInput) -> BoilerCostResult {
    let required_kj_per_hr = input.heating_kw * 3600.0;
    let fuel_kg_per_hr =
        required_kj_per_hr / ((input.calorific_value_kcal_per_kg * KJ_PER_KCAL) * input.efficiency);
    let fuel_kg_per_year = fuel_kg_per_hr * input.hours_per_day * input.days_per_year;
    let fuel_cost_per_year = fuel_kg_per_year * input.fuel_unit_cost;
    let labour_cost_per_year = input.labour_cost_per_day * input.days_per_year;
    let connected_load_cost_per_year = input.connected_load_kw
        * input.hours_per_day
        * input.days_per_year
        * input.electricity_cost;

    BoilerCostResult {
        fuel_kg_per_hr,
        fuel_kg_per_year,
        fuel_cost_per_year,
        labour_cost_per_year,
        connected_load_cost_per_year,
        operating_cost_per_year: fuel_cost_per_year
            + labour_cost_per_year
            + connected_load_cost_per_year,
        co2_kg_per_year: fuel_kg_per_year * input.co2_factor_kg_per_kg,
    }
}
