//! 계산 오류와 권고(advisory) 분류.
//!
//! 오류는 계산을 중단시키고 부분 결과를 남기지 않는다. 권고는 계산을 계속하되
//! 호출자에게 알려야 하는 상황(증기표 범위 밖 클램프 등)이다.

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub type SavingsResult<T> = Result<T, SavingsError>;

/// 계산 입력 검증 및 해석 오류.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SavingsError {
    /// 0 이하/음수/비유한 값 등 허용되지 않는 입력
    #[error("invalid input for '{field}': {value} ({reason})")]
    InvalidInput {
        field: &'static str,
        value: f64,
        reason: &'static str,
    },

    /// 해석할 수 없는 가열량 입력 방식 이름
    #[error("unsupported heating method: {0}")]
    UnsupportedMethod(String),
}

impl SavingsError {
    pub fn invalid(field: &'static str, value: f64, reason: &'static str) -> Self {
        SavingsError::InvalidInput {
            field,
            value,
            reason,
        }
    }

    /// 오류가 가리키는 입력 필드 이름. 입력 오류가 아니면 None.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            SavingsError::InvalidInput { field, .. } => Some(field),
            SavingsError::UnsupportedMethod(_) => None,
        }
    }
}

/// 0보다 큰 유한값만 허용한다(나눗셈 분모 등).
pub fn require_positive(field: &'static str, value: f64) -> SavingsResult<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(SavingsError::invalid(field, value, "must be a positive number"))
    }
}

/// 0 이상의 유한값만 허용한다.
pub fn require_non_negative(field: &'static str, value: f64) -> SavingsResult<f64> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(SavingsError::invalid(field, value, "must not be negative"))
    }
}

/// 계산은 계속되지만 결과 해석에 주의가 필요한 상황.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Advisory {
    /// 증기 압력이 기준표 범위 밖이라 끝값으로 클램프됨
    SteamPressureOutOfRange { requested_bar: f64, used_bar: f64 },
    /// 응축수 온도가 해당 압력의 포화온도 이상
    CondensateAboveSaturation {
        condensate_temp_c: f64,
        saturation_temp_c: f64,
    },
    /// COP < 1: 히트펌프 전력이 공급 열량보다 크고 냉각 회수량은 0으로 제한됨
    CopBelowOne { cop: f64 },
}

impl std::fmt::Display for Advisory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Advisory::SteamPressureOutOfRange {
                requested_bar,
                used_bar,
            } => write!(
                f,
                "steam pressure {requested_bar} bar(a) is outside the steam table; {used_bar} bar(a) was used"
            ),
            Advisory::CondensateAboveSaturation {
                condensate_temp_c,
                saturation_temp_c,
            } => write!(
                f,
                "condensate temperature {condensate_temp_c:.1} °C is at or above the saturation temperature {saturation_temp_c:.1} °C"
            ),
            Advisory::CopBelowOne { cop } => write!(
                f,
                "COP {cop} is below 1; cooling recovery is limited to zero"
            ),
        }
    }
}
