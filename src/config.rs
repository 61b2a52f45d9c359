use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

use crate::savings::{ModelConstants, DEFAULT_GRID_CO2_FACTOR};

/// 기본 설정 파일 이름.
pub const CONFIG_FILE: &str = "config.toml";

/// 애플리케이션 설정. 모든 필드에 기본값이 있어 일부만 적은 파일도 읽힌다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 언어 코드 (auto/ko/en)
    pub language: String,
    /// 비용 라벨에 쓰는 통화 표기
    pub currency: String,
    /// 계통 전력 CO₂ 배출계수 [kg/kWh]
    pub grid_co2_factor_kg_per_kwh: f64,
    /// 전기 요금 기본값 [통화/kWh]
    pub default_electricity_cost: f64,
    pub default_cop: f64,
    pub default_hours_per_day: f64,
    pub default_days_per_year: f64,
    /// 사용자 연료 DB 경로(CSV/TOML). 없으면 내장 테이블을 쓴다.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fuel_db_path: Option<PathBuf>,
    /// GUI 창 투명도(0.0~1.0)
    pub window_alpha: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: "auto".to_string(),
            currency: "Rs".to_string(),
            grid_co2_factor_kg_per_kwh: DEFAULT_GRID_CO2_FACTOR,
            default_electricity_cost: 5.5,
            default_cop: 3.5,
            default_hours_per_day: 24.0,
            default_days_per_year: 330.0,
            fuel_db_path: None,
            window_alpha: 1.0,
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 파일 입출력 오류
    #[error("파일 입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    /// TOML 역직렬화 오류
    #[error("설정 파싱 오류: {0}")]
    Serde(#[from] toml::de::Error),
    /// TOML 직렬화 오류
    #[error("설정 직렬화 오류: {0}")]
    Serialize(#[from] toml::ser::Error),
}

impl Config {
    /// 계산 모델에 넘길 상수.
    pub fn model_constants(&self) -> ModelConstants {
        ModelConstants {
            grid_co2_factor_kg_per_kwh: self.grid_co2_factor_kg_per_kwh,
        }
    }

    /// 지정 경로의 설정을 읽는다.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        let cfg: Config = toml::from_str(&content)?;
        debug!(path = %path.display(), "config loaded");
        Ok(cfg)
    }

    /// 지정 경로에 설정을 쓴다.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        info!(path = %path.display(), "config saved");
        Ok(())
    }
}

/// 경로의 설정을 로드하고, 파일이 없으면 기본값을 그 경로에 저장한 뒤 돌려준다.
pub fn load_or_create(path: &Path) -> Result<Config, ConfigError> {
    if path.exists() {
        Config::load_from(path)
    } else {
        let cfg = Config::default();
        cfg.save_to(path)?;
        Ok(cfg)
    }
}
