use serde::{Deserialize, Serialize};

/// 1 kW 에 해당하는 kcal/h. 보일러 용량 환산의 관용값(860)을 그대로 쓴다.
pub const KCAL_PER_HOUR_PER_KW: f64 = 860.0;
/// 냉동톤(TR) 1 에 해당하는 kW.
pub const KW_PER_TR: f64 = 3.516;

/// 열량(일률) 단위. 내부 기준은 kW 이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PowerUnit {
    Watt,
    Kilowatt,
    KcalPerHour,
    TonRefrigeration,
    BtuPerHour,
}

fn to_kw(value: f64, unit: PowerUnit) -> f64 {
    match unit {
        PowerUnit::Watt => value / 1000.0,
        PowerUnit::Kilowatt => value,
        PowerUnit::KcalPerHour => value / KCAL_PER_HOUR_PER_KW,
        PowerUnit::TonRefrigeration => value * KW_PER_TR,
        PowerUnit::BtuPerHour => value / 3412.14,
    }
}

fn from_kw(value_kw: f64, unit: PowerUnit) -> f64 {
    match unit {
        PowerUnit::Watt => value_kw * 1000.0,
        PowerUnit::Kilowatt => value_kw,
        PowerUnit::KcalPerHour => value_kw * KCAL_PER_HOUR_PER_KW,
        PowerUnit::TonRefrigeration => value_kw / KW_PER_TR,
        PowerUnit::BtuPerHour => value_kw * 3412.14,
    }
}

/// 열량(일률)을 변환한다.
pub fn convert_power(value: f64, from: PowerUnit, to: PowerUnit) -> f64 {
    from_kw(to_kw(value, from), to)
}
