use serde::{Deserialize, Serialize};

/// 게이지/절대압을 구분한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PressureMode {
    Gauge,
    Absolute,
}

/// 압력 단위. 증기표 조회는 항상 bar(abs)로 환산해 수행한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PressureUnit {
    Bar,
    KiloPascal,
    MegaPascal,
    KgPerCm2,
    Psi,
}

const ATM_BAR: f64 = 1.01325;

impl PressureUnit {
    /// 사용자 입력 문자열을 단위로 해석한다.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "bar" => Some(PressureUnit::Bar),
            "kpa" => Some(PressureUnit::KiloPascal),
            "mpa" => Some(PressureUnit::MegaPascal),
            "kg/cm2" | "kgf/cm2" => Some(PressureUnit::KgPerCm2),
            "psi" => Some(PressureUnit::Psi),
            _ => None,
        }
    }
}

/// 입력 압력을 bar(abs)로 환산한다. 게이지 모드는 대기압(1.01325 bar)을 더한다.
pub fn to_bar_abs(value: f64, unit: PressureUnit, mode: PressureMode) -> f64 {
    let base = match unit {
        PressureUnit::Bar => value,
        PressureUnit::KiloPascal => value / 100.0,
        PressureUnit::MegaPascal => value * 10.0,
        PressureUnit::KgPerCm2 => value * 0.980665,
        PressureUnit::Psi => value * 0.0689476,
    };
    match mode {
        PressureMode::Gauge => base + ATM_BAR,
        PressureMode::Absolute => base,
    }
}
