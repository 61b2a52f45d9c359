//! 가열량 환산. 선택한 입력 방식(증기 유량, 직접 kW, 전기히터 kW, 보일러 kcal/h)을
//! 하나의 가열량[kW]으로 정규화한다.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::{debug, warn};

use crate::errors::{require_non_negative, Advisory, SavingsError, SavingsResult};
use crate::steam::{self, EnthalpyLookup, SteamTableError};
use crate::units::KCAL_PER_HOUR_PER_KW;

/// 물의 비열 [kJ/kg·K]. 응축수 현열 근사(h = cp·T)에 쓴다.
pub const WATER_CP_KJ_PER_KGK: f64 = 4.186;

/// 가열량 입력 방식과 그 파라미터.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "method", rename_all = "snake_case")]
pub enum HeatingMethod {
    /// 증기 유량 기준
    SteamFlow {
        /// 증기 유량 [kg/h]
        steam_flow_kg_per_hr: f64,
        /// 증기 입구 압력 [bar(abs)]
        steam_pressure_bar_abs: f64,
        /// 응축수 온도 [°C]
        condensate_temp_c: f64,
    },
    /// 필요 가열량 직접 입력 [kW]
    DirectCapacity { capacity_kw: f64 },
    /// 대체할 전기 히터 정격 [kW]
    ElectricHeater { rating_kw: f64 },
    /// 보일러 용량 [kcal/h]
    BoilerCapacity { boiler_kcal_per_hr: f64 },
}

/// 파라미터 없는 입력 방식 구분. 메뉴/콤보박스 선택지로 쓴다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HeatingMethodKind {
    SteamFlow,
    DirectCapacity,
    ElectricHeater,
    BoilerCapacity,
}

impl HeatingMethodKind {
    pub const ALL: [HeatingMethodKind; 4] = [
        HeatingMethodKind::SteamFlow,
        HeatingMethodKind::DirectCapacity,
        HeatingMethodKind::ElectricHeater,
        HeatingMethodKind::BoilerCapacity,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            HeatingMethodKind::SteamFlow => "Steam Flow Rate",
            HeatingMethodKind::DirectCapacity => "Heating Capacity (kW)",
            HeatingMethodKind::ElectricHeater => "Electric Heater (kW)",
            HeatingMethodKind::BoilerCapacity => "Boiler Capacity (kcal/hr)",
        }
    }
}

impl FromStr for HeatingMethodKind {
    type Err = SavingsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(kind) = Self::ALL
            .into_iter()
            .find(|k| k.label().eq_ignore_ascii_case(s.trim()))
        {
            return Ok(kind);
        }
        let key = s.trim().to_lowercase().replace(['_', ' '], "-");
        match key.as_str() {
            "steam" | "steam-flow" | "steam-flow-rate" => Ok(HeatingMethodKind::SteamFlow),
            "capacity" | "direct" | "direct-capacity" | "heating-capacity" => {
                Ok(HeatingMethodKind::DirectCapacity)
            }
            "electric" | "electric-heater" | "heater" => Ok(HeatingMethodKind::ElectricHeater),
            "boiler" | "boiler-capacity" | "boiler-kcal" => Ok(HeatingMethodKind::BoilerCapacity),
            _ => Err(SavingsError::UnsupportedMethod(s.trim().to_string())),
        }
    }
}

impl std::fmt::Display for HeatingMethodKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl HeatingMethod {
    pub fn kind(&self) -> HeatingMethodKind {
        match self {
            HeatingMethod::SteamFlow { .. } => HeatingMethodKind::SteamFlow,
            HeatingMethod::DirectCapacity { .. } => HeatingMethodKind::DirectCapacity,
            HeatingMethod::ElectricHeater { .. } => HeatingMethodKind::ElectricHeater,
            HeatingMethod::BoilerCapacity { .. } => HeatingMethodKind::BoilerCapacity,
        }
    }
}

/// 가열량 환산 결과.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedCapacity {
    /// 가열량 [kW]
    pub capacity_kw: f64,
    /// 증기 방식일 때의 증기표 조회 결과
    pub steam: Option<EnthalpyLookup>,
    pub advisories: Vec<Advisory>,
}

/// 입력 방식에 따라 가열량[kW]을 계산한다.
pub fn resolve_capacity(method: &HeatingMethod) -> SavingsResult<ResolvedCapacity> {
    let resolved = match *method {
        HeatingMethod::SteamFlow {
            steam_flow_kg_per_hr,
            steam_pressure_bar_abs,
            condensate_temp_c,
        } => steam_flow_capacity(steam_flow_kg_per_hr, steam_pressure_bar_abs, condensate_temp_c)?,
        HeatingMethod::DirectCapacity { capacity_kw } => {
            plain(require_non_negative("capacity_kw", capacity_kw)?)
        }
        HeatingMethod::ElectricHeater { rating_kw } => {
            plain(require_non_negative("rating_kw", rating_kw)?)
        }
        HeatingMethod::BoilerCapacity { boiler_kcal_per_hr } => {
            let kcal = require_non_negative("boiler_kcal_per_hr", boiler_kcal_per_hr)?;
            plain(kcal / KCAL_PER_HOUR_PER_KW)
        }
    };
    debug!(
        method = %method.kind(),
        capacity_kw = resolved.capacity_kw,
        "resolved heating capacity"
    );
    Ok(resolved)
}

fn plain(capacity_kw: f64) -> ResolvedCapacity {
    ResolvedCapacity {
        capacity_kw,
        steam: None,
        advisories: Vec::new(),
    }
}

fn steam_flow_capacity(
    flow_kg_per_hr: f64,
    pressure_bar_abs: f64,
    condensate_temp_c: f64,
) -> SavingsResult<ResolvedCapacity> {
    let flow = require_non_negative("steam_flow_kg_per_hr", flow_kg_per_hr)?;
    let temp = require_non_negative("condensate_temp_c", condensate_temp_c)?;
    let lookup = steam::saturated_vapor_enthalpy(pressure_bar_abs).map_err(|e| match e {
        SteamTableError::InvalidPressure(p) => {
            SavingsError::invalid("steam_pressure_bar_abs", p, "must be a positive number")
        }
        SteamTableError::MalformedTable => {
            SavingsError::invalid("steam_pressure_bar_abs", pressure_bar_abs, "steam table lookup failed")
        }
    })?;

    let h_liquid = WATER_CP_KJ_PER_KGK * temp;
    let h_vapor = lookup.vapor_enthalpy_kj_per_kg;
    if h_liquid > h_vapor {
        return Err(SavingsError::invalid(
            "condensate_temp_c",
            temp,
            "condensate enthalpy exceeds steam enthalpy",
        ));
    }
    let capacity_kw = flow * (h_vapor - h_liquid) / 3600.0;

    let mut advisories = Vec::new();
    if lookup.clamped {
        warn!(
            requested_bar = lookup.requested_bar,
            used_bar = lookup.used_bar,
            "steam pressure clamped to table range"
        );
        advisories.push(Advisory::SteamPressureOutOfRange {
            requested_bar: lookup.requested_bar,
            used_bar: lookup.used_bar,
        });
    }
    if let Ok(t_sat) = steam::if97::saturation_temp_c_from_pressure_bar_abs(pressure_bar_abs) {
        if temp >= t_sat {
            warn!(condensate_temp_c = temp, saturation_temp_c = t_sat, "condensate above saturation");
            advisories.push(Advisory::CondensateAboveSaturation {
                condensate_temp_c: temp,
                saturation_temp_c: t_sat,
            });
        }
    }
    Ok(ResolvedCapacity {
        capacity_kw,
        steam: Some(lookup),
        advisories,
    })
}
