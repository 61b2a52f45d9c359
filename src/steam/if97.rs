//! IAPWS-IF97 보조 계산. 포화온도는 Region 4 식으로 직접 풀고,
//! 포화 증기 엔탈피는 seuif97 크레이트의 Region 2 계산에 위임한다.
//! 입력 압력은 bar(abs), 온도는 °C.

use seuif97::{pt, OH};

const P4_STAR_MPA: f64 = 22.064;
const T4_STAR_K: f64 = 647.096;
const R4_N: [f64; 6] = [
    -7.859_517_83,
    1.844_082_59,
    -11.786_649_7,
    22.680_741_1,
    -15.961_871_9,
    1.801_225_02,
];

fn region4_sum(theta: f64) -> f64 {
    R4_N[0] * theta
        + R4_N[1] * theta.powf(1.5)
        + R4_N[2] * theta.powi(3)
        + R4_N[3] * theta.powf(3.5)
        + R4_N[4] * theta.powi(4)
        + R4_N[5] * theta.powf(7.5)
}

/// 포화압력(bar abs) - 입력 온도는 °C.
pub fn saturation_pressure_bar_abs_from_temp_c(t_c: f64) -> Result<f64, &'static str> {
    let t_k = t_c + 273.15;
    if t_k <= 0.0 || t_k > T4_STAR_K {
        return Err("IF97 Region4 range is 0~374 °C");
    }
    let theta = 1.0 - t_k / T4_STAR_K;
    let p_mpa = P4_STAR_MPA * ((T4_STAR_K / t_k) * region4_sum(theta)).exp();
    Ok(p_mpa * 10.0)
}

/// 포화온도(°C) - 입력 압력은 bar abs. 뉴턴 반복으로 Region 4 식을 역산한다.
pub fn saturation_temp_c_from_pressure_bar_abs(p_bar_abs: f64) -> Result<f64, &'static str> {
    if p_bar_abs.is_nan() || p_bar_abs <= 0.0 || p_bar_abs > P4_STAR_MPA * 10.0 {
        return Err("pressure must be within 0~220.64 bar(abs)");
    }
    let target = (p_bar_abs / 10.0 / P4_STAR_MPA).ln();
    let mut t_k = 373.15_f64;
    for _ in 0..30 {
        let theta = 1.0 - t_k / T4_STAR_K;
        let sum = region4_sum(theta);
        let f = (T4_STAR_K / t_k) * sum - target;
        let dsum_dtheta = R4_N[0]
            + 1.5 * R4_N[1] * theta.powf(0.5)
            + 3.0 * R4_N[2] * theta.powi(2)
            + 3.5 * R4_N[3] * theta.powf(2.5)
            + 4.0 * R4_N[4] * theta.powi(3)
            + 7.5 * R4_N[5] * theta.powf(6.5);
        let df_dt = -(T4_STAR_K / t_k.powi(2)) * sum - dsum_dtheta / t_k;
        let delta = f / df_dt;
        t_k -= delta;
        if delta.abs() < 1e-8 {
            break;
        }
    }
    Ok(t_k - 273.15)
}

/// 포화 증기 비엔탈피(kJ/kg). 포화온도에서 Region 2 식을 강제 적용한다.
/// 표 보간값과 비교하는 참고용이며 가열량 계산에는 쓰지 않는다.
pub fn saturated_vapor_enthalpy_kj_per_kg(p_bar_abs: f64) -> Result<f64, &'static str> {
    let t_sat = saturation_temp_c_from_pressure_bar_abs(p_bar_abs)?;
    let h = pt(p_bar_abs / 10.0, t_sat, (OH, 2));
    if h.is_nan() {
        return Err("IF97 calculation failed");
    }
    Ok(h)
}
