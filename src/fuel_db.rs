//! 연료 물성 데이터베이스. 내장 6종 연료표를 기본으로 하고,
//! CSV/TOML 파일로 전체를 교체할 수 있다.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::io::Read;
use std::path::Path;
use thiserror::Error;
use tracing::info;

/// 연료 종류. 전기 히터 여부 판정은 이름 비교 대신 이 태그로 한다.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FuelKind {
    Biomass,
    Lpg,
    Png,
    Diesel,
    Coal,
    ElectricResistive,
    /// 사용자 DB에만 있는 연료
    Custom(String),
}

impl FuelKind {
    /// 이름을 대소문자 구분 없이 해석한다. 알 수 없는 이름은 `Custom`이 된다.
    pub fn from_name(name: &str) -> Self {
        let trimmed = name.trim();
        match trimmed.to_lowercase().as_str() {
            "biomass" => FuelKind::Biomass,
            "lpg" => FuelKind::Lpg,
            "png" => FuelKind::Png,
            "diesel" => FuelKind::Diesel,
            "coal" => FuelKind::Coal,
            "electric (resistive)" | "electric" | "electric-resistive" | "electric_resistive" => {
                FuelKind::ElectricResistive
            }
            _ => FuelKind::Custom(trimmed.to_string()),
        }
    }

    pub fn display_name(&self) -> &str {
        match self {
            FuelKind::Biomass => "Biomass",
            FuelKind::Lpg => "LPG",
            FuelKind::Png => "PNG",
            FuelKind::Diesel => "Diesel",
            FuelKind::Coal => "Coal",
            FuelKind::ElectricResistive => "Electric (resistive)",
            FuelKind::Custom(name) => name,
        }
    }

    /// 전기 저항 히터면 연료 단가 대신 전기 요금을 쓴다.
    pub fn is_electric(&self) -> bool {
        matches!(self, FuelKind::ElectricResistive)
    }
}

impl From<String> for FuelKind {
    fn from(value: String) -> Self {
        FuelKind::from_name(&value)
    }
}

impl From<FuelKind> for String {
    fn from(value: FuelKind) -> Self {
        value.display_name().to_string()
    }
}

impl std::fmt::Display for FuelKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// 연료 한 종의 물성.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FuelProperties {
    /// 연료 종류(이름)
    pub kind: FuelKind,
    /// 발열량 [kcal/kg]
    pub calorific_value_kcal_per_kg: f64,
    /// 보일러 효율 [%]
    pub efficiency_pct: f64,
    /// 연료 단가 [통화/kg] (전기는 통화/kWh)
    pub unit_cost: f64,
    /// CO₂ 배출계수 [kg CO₂/kg 연료]
    pub co2_factor_kg_per_kg: f64,
}

impl FuelProperties {
    pub fn new(
        kind: FuelKind,
        calorific_value_kcal_per_kg: f64,
        efficiency_pct: f64,
        unit_cost: f64,
        co2_factor_kg_per_kg: f64,
    ) -> Self {
        Self {
            kind,
            calorific_value_kcal_per_kg,
            efficiency_pct,
            unit_cost,
            co2_factor_kg_per_kg,
        }
    }

    pub fn name(&self) -> &str {
        self.kind.display_name()
    }

    pub fn efficiency_fraction(&self) -> f64 {
        self.efficiency_pct / 100.0
    }

    /// 계산에 실제로 적용할 단가. 전기 저항 히터는 전기 요금으로 대체한다.
    pub fn effective_unit_cost(&self, electricity_cost: f64) -> f64 {
        if self.kind.is_electric() {
            electricity_cost
        } else {
            self.unit_cost
        }
    }

    /// 물리적으로 말이 되는 값인지 확인하고, 문제가 있으면 이유를 돌려준다.
    pub fn check(&self) -> Result<(), &'static str> {
        if !self.calorific_value_kcal_per_kg.is_finite() || self.calorific_value_kcal_per_kg <= 0.0
        {
            return Err("calorific value must be positive");
        }
        if !self.efficiency_pct.is_finite()
            || self.efficiency_pct <= 0.0
            || self.efficiency_pct > 100.0
        {
            return Err("efficiency must be within (0, 100] %");
        }
        if !self.unit_cost.is_finite() || self.unit_cost < 0.0 {
            return Err("unit cost must not be negative");
        }
        if !self.co2_factor_kg_per_kg.is_finite() || self.co2_factor_kg_per_kg < 0.0 {
            return Err("CO2 factor must not be negative");
        }
        Ok(())
    }
}

/// 연료 DB 로드/조회 시 발생 가능한 오류.
#[derive(Debug, Error)]
pub enum FuelDbError {
    #[error("fuel database I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("fuel database CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("fuel database TOML error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("unsupported fuel database format: {0} (use .csv or .toml)")]
    UnsupportedFormat(String),
    #[error("fuel database is empty")]
    Empty,
    #[error("duplicate fuel name: {0}")]
    Duplicate(String),
    #[error("invalid fuel entry '{name}': {reason}")]
    InvalidEntry { name: String, reason: &'static str },
    #[error("unknown fuel: {0}")]
    UnknownFuel(String),
}

/// 업로드용 CSV 한 행. 헤더는 `Fuel,CV_default,Eff_default,Fuel_Cost,CO2_Emn/kg`.
#[derive(Debug, Deserialize, Serialize)]
struct FuelCsvRow {
    #[serde(rename = "Fuel")]
    fuel: String,
    #[serde(rename = "CV_default")]
    cv: f64,
    #[serde(rename = "Eff_default")]
    eff: f64,
    #[serde(rename = "Fuel_Cost")]
    cost: f64,
    #[serde(rename = "CO2_Emn/kg")]
    co2: f64,
}

#[derive(Debug, Deserialize)]
struct FuelTomlFile {
    fuel: Vec<FuelTomlEntry>,
}

#[derive(Debug, Deserialize)]
struct FuelTomlEntry {
    name: String,
    calorific_value_kcal_per_kg: f64,
    efficiency_pct: f64,
    unit_cost: f64,
    co2_factor_kg_per_kg: f64,
}

/// 조회 가능한 연료 목록. 생성 후에는 읽기 전용이다.
#[derive(Debug, Clone, PartialEq)]
pub struct FuelDatabase {
    fuels: Vec<FuelProperties>,
}

impl Default for FuelDatabase {
    fn default() -> Self {
        Self::built_in()
    }
}

impl FuelDatabase {
    /// 내장 기본 연료표.
    pub fn built_in() -> Self {
        Self {
            fuels: vec![
                fp(FuelKind::Biomass, 3000.0, 70.0, 10.0, 1.8),
                fp(FuelKind::Lpg, 11500.0, 90.0, 60.0, 3.0),
                fp(FuelKind::Png, 11500.0, 90.0, 60.0, 2.8),
                fp(FuelKind::Diesel, 10500.0, 85.0, 100.0, 3.2),
                fp(FuelKind::Coal, 5000.0, 65.0, 10.0, 2.5),
                fp(FuelKind::ElectricResistive, 860.0, 100.0, 8.0, 0.82),
            ],
        }
    }

    /// 검증을 거쳐 DB를 만든다. 비었거나 이름이 중복되면 오류.
    pub fn from_fuels(fuels: Vec<FuelProperties>) -> Result<Self, FuelDbError> {
        if fuels.is_empty() {
            return Err(FuelDbError::Empty);
        }
        let mut seen = HashSet::new();
        for fuel in &fuels {
            if !seen.insert(fuel.name().to_lowercase()) {
                return Err(FuelDbError::Duplicate(fuel.name().to_string()));
            }
            fuel.check().map_err(|reason| FuelDbError::InvalidEntry {
                name: fuel.name().to_string(),
                reason,
            })?;
        }
        Ok(Self { fuels })
    }

    /// 확장자(.csv/.toml)에 따라 파일에서 DB를 읽는다.
    pub fn load_path(path: &Path) -> Result<Self, FuelDbError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default()
            .to_lowercase();
        let db = match ext.as_str() {
            "csv" => Self::from_csv_reader(fs::File::open(path)?)?,
            "toml" => Self::from_toml_str(&fs::read_to_string(path)?)?,
            other => return Err(FuelDbError::UnsupportedFormat(other.to_string())),
        };
        info!(path = %path.display(), fuels = db.len(), "loaded fuel database");
        Ok(db)
    }

    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self, FuelDbError> {
        let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
        let mut fuels = Vec::new();
        for row in rdr.deserialize() {
            let row: FuelCsvRow = row?;
            fuels.push(fp(FuelKind::from_name(&row.fuel), row.cv, row.eff, row.cost, row.co2));
        }
        Self::from_fuels(fuels)
    }

    pub fn from_toml_str(src: &str) -> Result<Self, FuelDbError> {
        let file: FuelTomlFile = toml::from_str(src)?;
        let fuels = file
            .fuel
            .into_iter()
            .map(|e| {
                fp(
                    FuelKind::from_name(&e.name),
                    e.calorific_value_kcal_per_kg,
                    e.efficiency_pct,
                    e.unit_cost,
                    e.co2_factor_kg_per_kg,
                )
            })
            .collect();
        Self::from_fuels(fuels)
    }

    pub fn fuels(&self) -> &[FuelProperties] {
        &self.fuels
    }

    pub fn len(&self) -> usize {
        self.fuels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fuels.is_empty()
    }

    /// 이름(대소문자 무시)이나 별칭으로 연료를 찾는다.
    pub fn find(&self, name: &str) -> Option<&FuelProperties> {
        let kind = FuelKind::from_name(name);
        self.fuels.iter().find(|f| {
            f.kind == kind || f.name().eq_ignore_ascii_case(name.trim())
        })
    }

    pub fn get(&self, name: &str) -> Result<&FuelProperties, FuelDbError> {
        self.find(name)
            .ok_or_else(|| FuelDbError::UnknownFuel(name.trim().to_string()))
    }
}

fn fp(kind: FuelKind, cv: f64, eff: f64, cost: f64, co2: f64) -> FuelProperties {
    FuelProperties::new(kind, cv, eff, cost, co2)
}
