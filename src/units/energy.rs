use serde::{Deserialize, Serialize};

/// 1 kcal 에 해당하는 kJ. 연료 발열량(kcal/kg)을 kJ/kg 로 바꿀 때 사용한다.
pub const KJ_PER_KCAL: f64 = 4.184;

/// 에너지 단위. 내부 기준은 킬로줄(kJ)이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnergyUnit {
    Kilojoule,
    KiloCalorie,
    KilowattHour,
    Btu,
}

fn to_kilojoule(value: f64, unit: EnergyUnit) -> f64 {
    match unit {
        EnergyUnit::Kilojoule => value,
        EnergyUnit::KiloCalorie => value * KJ_PER_KCAL,
        EnergyUnit::KilowattHour => value * 3600.0,
        EnergyUnit::Btu => value * 1.05506,
    }
}

fn from_kilojoule(value: f64, unit: EnergyUnit) -> f64 {
    match unit {
        EnergyUnit::Kilojoule => value,
        EnergyUnit::KiloCalorie => value / KJ_PER_KCAL,
        EnergyUnit::KilowattHour => value / 3600.0,
        EnergyUnit::Btu => value / 1.05506,
    }
}

/// 에너지를 변환한다.
pub fn convert_energy(value: f64, from: EnergyUnit, to: EnergyUnit) -> f64 {
    let kj = to_kilojoule(value, from);
    from_kilojoule(kj, to)
}
