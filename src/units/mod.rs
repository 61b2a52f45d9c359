//! 단위 정의 및 변환 모듈 모음.
//! 계산 모델은 kW, kJ, bar(abs), °C를 내부 기준으로 사용한다.

pub mod energy;
pub mod power;
pub mod pressure;
pub mod temperature;

pub use energy::{convert_energy, EnergyUnit, KJ_PER_KCAL};
pub use power::{convert_power, PowerUnit, KCAL_PER_HOUR_PER_KW, KW_PER_TR};
pub use pressure::{to_bar_abs, PressureMode, PressureUnit};
pub use temperature::{convert_temperature, TemperatureUnit};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boiler_kcal_per_hour_to_kw() {
        let kw = convert_power(100_000.0, PowerUnit::KcalPerHour, PowerUnit::Kilowatt);
        assert!((kw - 116.279).abs() < 1e-3);
        let tr = convert_power(KW_PER_TR, PowerUnit::Kilowatt, PowerUnit::TonRefrigeration);
        assert!((tr - 1.0).abs() < 1e-12);
    }

    #[test]
    fn gauge_pressure_adds_one_atmosphere() {
        let p = to_bar_abs(0.0, PressureUnit::Bar, PressureMode::Gauge);
        assert!((p - 1.01325).abs() < 1e-12);
        let p = to_bar_abs(500.0, PressureUnit::KiloPascal, PressureMode::Absolute);
        assert!((p - 5.0).abs() < 1e-12);
        assert_eq!(PressureUnit::parse(" PSI "), Some(PressureUnit::Psi));
        assert_eq!(PressureUnit::parse("torr"), None);
    }

    #[test]
    fn temperature_and_energy() {
        let f = convert_temperature(100.0, TemperatureUnit::Celsius, TemperatureUnit::Fahrenheit);
        assert!((f - 212.0).abs() < 1e-9);
        let kj = convert_energy(3000.0, EnergyUnit::KiloCalorie, EnergyUnit::Kilojoule);
        assert!((kj - 12_552.0).abs() < 1e-9);
    }
}
