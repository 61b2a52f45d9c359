use serde::{Deserialize, Serialize};

use crate::errors::{require_non_negative, require_positive, SavingsError, SavingsResult};
use crate::fuel_db::{FuelDatabase, FuelKind, FuelProperties};
use crate::heating::HeatingMethod;

/// 운전 스케줄.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OperatingSchedule {
    /// 하루 운전 시간 (0, 24]
    pub hours_per_day: f64,
    /// 연간 운전 일수 (0, 365]
    pub days_per_year: f64,
}

impl Default for OperatingSchedule {
    fn default() -> Self {
        Self {
            hours_per_day: 24.0,
            days_per_year: 330.0,
        }
    }
}

impl OperatingSchedule {
    pub fn new(hours_per_day: f64, days_per_year: f64) -> Self {
        Self {
            hours_per_day,
            days_per_year,
        }
    }

    /// 연간 운전 시간 [h/year]
    pub fn annual_hours(&self) -> f64 {
        self.hours_per_day * self.days_per_year
    }

    pub fn validate(&self) -> SavingsResult<()> {
        require_positive("hours_per_day", self.hours_per_day)?;
        if self.hours_per_day > 24.0 {
            return Err(SavingsError::invalid(
                "hours_per_day",
                self.hours_per_day,
                "cannot exceed 24 hours",
            ));
        }
        require_positive("days_per_year", self.days_per_year)?;
        if self.days_per_year > 365.0 {
            return Err(SavingsError::invalid(
                "days_per_year",
                self.days_per_year,
                "cannot exceed 365 days",
            ));
        }
        Ok(())
    }
}

/// 냉각 회수(칠러 대체) 설정.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CoolingRecovery {
    /// 칠러 효율 [ikW/TR]
    pub chiller_ikw_per_tr: f64,
}

impl Default for CoolingRecovery {
    fn default() -> Self {
        Self {
            chiller_ikw_per_tr: 0.8,
        }
    }
}

/// 한 번의 계산에 필요한 입력 전체. 매 실행마다 새로 구성한다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculationInputs {
    pub heating_method: HeatingMethod,
    /// 외기 온도 [°C]
    pub ambient_temp_c: f64,
    /// 온수 공급 온도 [°C]
    pub hot_water_temp_c: f64,
    /// 히트펌프 COP
    pub cop: f64,
    pub schedule: OperatingSchedule,
    pub fuel: FuelProperties,
    /// 전기 요금 [통화/kWh]
    pub electricity_cost: f64,
    /// 보일러 인건비 [통화/day]
    pub labour_cost_per_day: f64,
    /// 보일러 보조기기 전기 부하 [kW]
    pub boiler_connected_load_kw: f64,
    /// None이면 냉각 회수 비활성
    pub cooling: Option<CoolingRecovery>,
}

impl Default for CalculationInputs {
    fn default() -> Self {
        let fuel = FuelDatabase::built_in()
            .find(FuelKind::Biomass.display_name())
            .cloned()
            .unwrap_or_else(|| FuelProperties::new(FuelKind::Biomass, 3000.0, 70.0, 10.0, 1.8));
        Self::new(HeatingMethod::DirectCapacity { capacity_kw: 462.0 }, fuel)
    }
}

impl CalculationInputs {
    /// 가열 방식과 연료만 지정하고 나머지는 기본값(COP 3.5, 24h x 330일, 전기 5.5)으로 채운다.
    pub fn new(heating_method: HeatingMethod, fuel: FuelProperties) -> Self {
        Self {
            heating_method,
            ambient_temp_c: 30.0,
            hot_water_temp_c: 90.0,
            cop: 3.5,
            schedule: OperatingSchedule::default(),
            fuel,
            electricity_cost: 5.5,
            labour_cost_per_day: 0.0,
            boiler_connected_load_kw: 0.0,
            cooling: None,
        }
    }

    pub fn cooling_enabled(&self) -> bool {
        self.cooling.is_some()
    }

    /// 모델 진입 전에 분모와 스케줄, 비용 항목을 검증한다.
    pub fn validate(&self) -> SavingsResult<()> {
        require_positive("cop", self.cop)?;
        self.schedule.validate()?;

        require_positive(
            "calorific_value_kcal_per_kg",
            self.fuel.calorific_value_kcal_per_kg,
        )?;
        require_positive("efficiency_pct", self.fuel.efficiency_pct)?;
        if self.fuel.efficiency_pct > 100.0 {
            return Err(SavingsError::invalid(
                "efficiency_pct",
                self.fuel.efficiency_pct,
                "cannot exceed 100 %",
            ));
        }
        require_non_negative("fuel_unit_cost", self.fuel.unit_cost)?;
        require_non_negative("fuel_co2_factor", self.fuel.co2_factor_kg_per_kg)?;

        require_non_negative("electricity_cost", self.electricity_cost)?;
        require_non_negative("labour_cost_per_day", self.labour_cost_per_day)?;
        require_non_negative("boiler_connected_load_kw", self.boiler_connected_load_kw)?;
        if let Some(cooling) = self.cooling {
            require_non_negative("chiller_ikw_per_tr", cooling.chiller_ikw_per_tr)?;
        }

        for (field, value) in [
            ("ambient_temp_c", self.ambient_temp_c),
            ("hot_water_temp_c", self.hot_water_temp_c),
        ] {
            if !value.is_finite() {
                return Err(SavingsError::invalid(field, value, "must be a number"));
            }
        }
        Ok(())
    }
}
