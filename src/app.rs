use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

use crate::config::{self, Config, ConfigError};
use crate::errors::SavingsError;
use crate::fuel_db::{FuelDatabase, FuelDbError, FuelProperties};
use crate::heating::HeatingMethod;
use crate::i18n::{self, Translator};
use crate::report::{ExportError, Report};
use crate::savings::{self, CalculationInputs, CalculationResult, OperatingSchedule};
use crate::steam::{self, if97, EnthalpyLookup, SteamTableError};
use crate::ui_cli::{self, MenuChoice};

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum AppError {
    /// 파일 입출력 오류
    #[error("입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    /// 설정 저장/로드 오류
    #[error("설정 오류: {0}")]
    Config(#[from] ConfigError),
    /// 계산 입력 오류
    #[error("계산 오류: {0}")]
    Savings(#[from] SavingsError),
    /// 연료 DB 오류
    #[error("연료 DB 오류: {0}")]
    FuelDb(#[from] FuelDbError),
    /// 내보내기 오류
    #[error("내보내기 오류: {0}")]
    Export(#[from] ExportError),
    /// 증기표 조회 오류
    #[error("증기표 오류: {0}")]
    SteamTable(#[from] SteamTableError),
    /// 입력 파일(TOML) 해석 오류
    #[error("입력 파일 오류: {0}")]
    InputsFile(#[from] toml::de::Error),
}

/// 한 번의 실행 동안 유지되는 설정, 연료 DB, 번역기 묶음.
#[derive(Debug, Clone)]
pub struct Session {
    pub config: Config,
    pub config_path: PathBuf,
    pub fuels: FuelDatabase,
    pub tr: Translator,
}

impl Session {
    /// 설정 파일을 읽고(없으면 생성) 연료 DB와 언어를 결정한다.
    /// `fuel_db`가 주어지면 설정의 `fuel_db_path`보다 우선한다.
    pub fn open(
        config_path: Option<&Path>,
        fuel_db: Option<&Path>,
        lang: Option<&str>,
    ) -> Result<Self, AppError> {
        let config_path = config_path
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from(config::CONFIG_FILE));
        let config = config::load_or_create(&config_path)?;
        let fuels = load_fuel_db(&config, fuel_db)?;
        let lang_code = i18n::resolve_language(lang, Some(&config.language));
        let tr = Translator::new_with_pack(&lang_code, None);
        Ok(Self {
            config,
            config_path,
            fuels,
            tr,
        })
    }

    /// 설정의 언어 코드로 번역기를 다시 만든다.
    pub fn reload_translator(&mut self) {
        let lang_code = i18n::resolve_language(None, Some(&self.config.language));
        self.tr = Translator::new_with_pack(&lang_code, None);
    }

    pub fn save_config(&self) -> Result<(), AppError> {
        self.config.save_to(&self.config_path)?;
        Ok(())
    }

    /// 설정의 기본값(COP, 운전 시간, 전기 요금)을 채운 입력을 만든다.
    pub fn default_inputs(&self, method: HeatingMethod, fuel: FuelProperties) -> CalculationInputs {
        let mut inputs = CalculationInputs::new(method, fuel);
        inputs.cop = self.config.default_cop;
        inputs.schedule = OperatingSchedule::new(
            self.config.default_hours_per_day,
            self.config.default_days_per_year,
        );
        inputs.electricity_cost = self.config.default_electricity_cost;
        inputs
    }

    /// 계산 후 보고서까지 만든다.
    pub fn evaluate(
        &self,
        inputs: &CalculationInputs,
    ) -> Result<(CalculationResult, Report), AppError> {
        let constants = self.config.model_constants();
        let result = savings::calculate(inputs, &constants)?;
        let report = Report::build(inputs, &result, &constants, &self.config.currency);
        Ok((result, report))
    }
}

/// 명시한 경로, 설정의 경로, 내장 테이블 순으로 연료 DB를 고른다.
/// 명시한 경로의 오류만 실패로 돌려주고, 설정에 남은 경로를 읽지 못하면 내장 테이블을 쓴다.
pub fn load_fuel_db(config: &Config, override_path: Option<&Path>) -> Result<FuelDatabase, FuelDbError> {
    if let Some(path) = override_path {
        return FuelDatabase::load_path(path);
    }
    match config.fuel_db_path.as_deref() {
        Some(path) => Ok(FuelDatabase::load_path(path).unwrap_or_else(|e| {
            warn!(path = %path.display(), error = %e, "configured fuel database unavailable, using built-in table");
            FuelDatabase::built_in()
        })),
        None => Ok(FuelDatabase::built_in()),
    }
}

/// TOML 입력 파일을 읽는다. 빠진 항목은 기본값으로 채운다.
pub fn load_inputs_file(path: &Path) -> Result<CalculationInputs, AppError> {
    let content = fs::read_to_string(path)?;
    let inputs: CalculationInputs = toml::from_str(&content)?;
    info!(path = %path.display(), method = %inputs.heating_method.kind(), "inputs file loaded");
    Ok(inputs)
}

/// 증기 압력 하나에 대한 조회 결과(증기표 + IF97 비교값).
#[derive(Debug, Clone, PartialEq)]
pub struct SteamLookupReport {
    pub table: EnthalpyLookup,
    pub if97_vapor_enthalpy_kj_per_kg: Option<f64>,
    pub saturation_temp_c: Option<f64>,
}

pub fn steam_lookup(pressure_bar_abs: f64) -> Result<SteamLookupReport, AppError> {
    let table = steam::saturated_vapor_enthalpy(pressure_bar_abs)?;
    let if97_vapor_enthalpy_kj_per_kg =
        match if97::saturated_vapor_enthalpy_kj_per_kg(pressure_bar_abs) {
            Ok(h) => Some(h),
            Err(reason) => {
                warn!(pressure_bar_abs, reason, "IF97 enthalpy unavailable");
                None
            }
        };
    let saturation_temp_c = if97::saturation_temp_c_from_pressure_bar_abs(pressure_bar_abs).ok();
    Ok(SteamLookupReport {
        table,
        if97_vapor_enthalpy_kj_per_kg,
        saturation_temp_c,
    })
}

/// CLI 애플리케이션의 메인 루프를 실행한다.
pub fn run(session: &mut Session) -> Result<(), AppError> {
    loop {
        let outcome = match ui_cli::main_menu(&session.tr)? {
            MenuChoice::Calculate => ui_cli::handle_calculate(session),
            MenuChoice::Fuels => {
                ui_cli::print_fuels(&session.fuels, &session.config.currency, &session.tr);
                Ok(())
            }
            MenuChoice::SteamLookup => ui_cli::handle_steam_lookup(&session.tr),
            MenuChoice::Settings => {
                ui_cli::handle_settings(session)?;
                session.save_config()
            }
            MenuChoice::Exit => {
                println!("{}", session.tr.t(i18n::keys::APP_EXIT));
                break;
            }
        };
        // 잘못된 입력 하나로 세션 전체를 끝내지 않는다.
        match outcome {
            Ok(()) => {}
            Err(AppError::Io(e)) => return Err(AppError::Io(e)),
            Err(e) => println!("{}: {e}", session.tr.t(i18n::keys::ERROR_PREFIX)),
        }
    }
    Ok(())
}
