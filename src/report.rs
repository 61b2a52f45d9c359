//! 계산 결과를 표/내보내기용 레코드로 정리한다.
//!
//! 모든 수치는 여기서 처음으로 소수 둘째 자리까지 반올림된다. 계산 모델 쪽 값은
//! 반올림하지 않은 원값을 유지한다.

use serde::Serialize;
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;
use thiserror::Error;
use tracing::info;

use crate::savings::{CalculationInputs, CalculationResult, ModelConstants};

/// 소수 둘째 자리 반올림.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// 레코드 값. 숫자이거나 "N/A" 같은 텍스트.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RecordValue {
    Number(f64),
    Text(String),
}

impl RecordValue {
    pub fn number(value: f64) -> Self {
        RecordValue::Number(round2(value))
    }

    pub fn text(value: impl Into<String>) -> Self {
        RecordValue::Text(value.into())
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            RecordValue::Number(v) => Some(*v),
            RecordValue::Text(_) => None,
        }
    }
}

impl std::fmt::Display for RecordValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecordValue::Number(v) => write!(f, "{v:.2}"),
            RecordValue::Text(s) => f.write_str(s),
        }
    }
}

/// (항목, 값) 한 줄.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Record {
    #[serde(rename = "Parameter")]
    pub label: String,
    #[serde(rename = "Value")]
    pub value: RecordValue,
}

impl Record {
    fn number(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value: RecordValue::number(value),
        }
    }

    fn text(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: RecordValue::text(value),
        }
    }
}

/// 요약 4열 (보일러 비용, 히트펌프+냉각 비용, 절감액, CO₂ 감축량).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Summary {
    pub boiler_operating_cost_per_year: f64,
    pub heat_pump_operating_cost_per_year: f64,
    pub annual_savings_per_year: f64,
    pub co2_reduction_tons_per_year: f64,
}

impl Summary {
    pub fn from_result(result: &CalculationResult) -> Self {
        Self {
            boiler_operating_cost_per_year: round2(result.boiler_operating_cost_per_year),
            heat_pump_operating_cost_per_year: round2(result.total_hp_cost_per_year),
            annual_savings_per_year: round2(result.total_savings_per_year),
            co2_reduction_tons_per_year: round2(result.co2_reduction_tons_per_year),
        }
    }

    pub fn values(&self) -> [f64; 4] {
        [
            self.boiler_operating_cost_per_year,
            self.heat_pump_operating_cost_per_year,
            self.annual_savings_per_year,
            self.co2_reduction_tons_per_year,
        ]
    }
}

/// 내보내기 단위 보고서.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub currency: String,
    pub summary: Summary,
    pub inputs: Vec<Record>,
    pub assumptions: Vec<Record>,
    pub results: Vec<Record>,
    pub advisories: Vec<String>,
}

impl Report {
    /// 입력과 결과로 보고서를 만든다. `currency`는 라벨에만 쓰인다("Rs" 등).
    pub fn build(
        inputs: &CalculationInputs,
        result: &CalculationResult,
        constants: &ModelConstants,
        currency: &str,
    ) -> Self {
        let c = currency;
        let schedule = inputs.schedule;

        let input_rows = vec![
            Record::text("Heating method", inputs.heating_method.kind().label()),
            Record::number("Heating capacity (kW)", result.heating_capacity_kw),
            Record::number("Operating Hours/day", schedule.hours_per_day),
            Record::number("Operating Days/year", schedule.days_per_year),
            Record::text("Fuel Type Selected", inputs.fuel.name()),
            Record::number(format!("Boiler Labour Cost ({c}/day)"), inputs.labour_cost_per_day),
            Record::number("Boiler Connected Load (kW)", inputs.boiler_connected_load_kw),
            Record::number("Ambient (°C)", inputs.ambient_temp_c),
            Record::number("Hot Water (°C)", inputs.hot_water_temp_c),
        ];

        let mut assumption_rows = vec![
            Record::number(
                "Calorific Value (kcal/kg)",
                inputs.fuel.calorific_value_kcal_per_kg,
            ),
            Record::number("Boiler Efficiency (%)", inputs.fuel.efficiency_pct),
            Record::number(format!("Fuel Unit Cost ({c}/kg)"), result.fuel_unit_cost),
            Record::number(format!("Electricity Cost ({c}/kWh)"), inputs.electricity_cost),
            Record::number("Heat Pump COP", inputs.cop),
            Record::number(
                "Grid CO₂ Factor (kg/kWh)",
                constants.grid_co2_factor_kg_per_kwh,
            ),
        ];
        assumption_rows.push(match inputs.cooling {
            Some(cooling) => Record::number("Chiller Efficiency (ikW/TR)", cooling.chiller_ikw_per_tr),
            None => Record::text("Chiller Efficiency (ikW/TR)", "N/A"),
        });

        let mut result_rows = vec![
            Record::number("Heating Capacity (kW)", result.heating_capacity_kw),
            Record::number("Fuel Required (kg/year)", result.fuel_consumption_kg_per_year),
            Record::number(format!("Fuel Cost ({c}/year)"), result.fuel_cost_per_year),
            Record::number(
                format!("Boiler Labour Cost ({c}/year)"),
                result.labour_cost_per_year,
            ),
            Record::number(
                format!("Boiler Connected Load Electricity Cost ({c}/year)"),
                result.connected_load_cost_per_year,
            ),
            Record::number("HP Electricity (kW)", result.hp_electrical_input_kw),
            Record::number(
                format!("HP Operating Cost ({c}/year)"),
                result.hp_operating_cost_per_year,
            ),
        ];
        if result.cooling_enabled {
            result_rows.push(Record::number("Cooling Capacity (kW)", result.cooling_capacity_kw));
            result_rows.push(Record::number(
                format!("Cooling Cost ({c}/year)"),
                result.cooling_cost_per_year,
            ));
        } else {
            result_rows.push(Record::text("Cooling (Disabled)", "N/A"));
            result_rows.push(Record::text(format!("Cooling Cost ({c}/year)"), "N/A"));
        }
        result_rows.extend([
            Record::number(
                "Total Operating Cost (HP + Cooling)",
                result.total_hp_cost_per_year,
            ),
            Record::number(
                format!("Annual Savings ({c}/year)"),
                result.total_savings_per_year,
            ),
            Record::number("CO₂ (Fuel - ton/year)", result.co2_fuel_tons_per_year),
            Record::number(
                "CO₂ (HP + Cooling - ton/year)",
                result.total_hp_co2_tons_per_year,
            ),
            Record::number("CO₂ Reduction (ton/year)", result.co2_reduction_tons_per_year),
        ]);

        Self {
            currency: currency.to_string(),
            summary: Summary::from_result(result),
            inputs: input_rows,
            assumptions: assumption_rows,
            results: result_rows,
            advisories: result.advisories.iter().map(ToString::to_string).collect(),
        }
    }

    /// 요약 열 제목.
    pub fn summary_headers(&self) -> [String; 4] {
        let c = &self.currency;
        [
            format!("Annual Boiler Operating Cost ({c}/year)"),
            format!("Heat Pump Operating Cost ({c}/year)"),
            format!("Annual Savings ({c}/year)"),
            "Annual CO₂ Reduction (ton/year)".to_string(),
        ]
    }

    /// 섹션 이름과 레코드 묶음.
    pub fn sections(&self) -> [(&'static str, &[Record]); 3] {
        [
            ("Inputs", self.inputs.as_slice()),
            ("Assumptions", self.assumptions.as_slice()),
            ("Results", self.results.as_slice()),
        ]
    }

    /// 라벨로 결과 레코드를 찾는다.
    pub fn result(&self, label: &str) -> Option<&RecordValue> {
        self.results
            .iter()
            .find(|r| r.label == label)
            .map(|r| &r.value)
    }
}

/// 내보내기 오류.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unsupported export format '{0}' (use .csv or .json)")]
    UnsupportedFormat(String),
}

/// 파일 확장자로 고르는 내보내기 형식.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn from_path(path: &Path) -> Result<Self, ExportError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();
        match ext.as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "json" => Ok(ExportFormat::Json),
            _ => Err(ExportError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// 세 레코드 묶음을 `Section,Parameter,Value` CSV 하나로 쓴다.
pub fn export_csv<W: Write>(report: &Report, writer: W) -> Result<(), ExportError> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(["Section", "Parameter", "Value"])?;
    for (section, records) in report.sections() {
        for rec in records {
            let value = rec.value.to_string();
            wtr.write_record([section, rec.label.as_str(), value.as_str()])?;
        }
    }
    wtr.flush()?;
    Ok(())
}

/// 결과 표만 `Parameter,Value` CSV로 쓴다.
pub fn export_results_csv<W: Write>(report: &Report, writer: W) -> Result<(), ExportError> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(["Parameter", "Value"])?;
    for rec in &report.results {
        let value = rec.value.to_string();
        wtr.write_record([rec.label.as_str(), value.as_str()])?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn export_json<W: Write>(report: &Report, writer: W) -> Result<(), ExportError> {
    serde_json::to_writer_pretty(writer, report)?;
    Ok(())
}

/// 결과 표만 CSV 파일로 내보낸다(`heatpump_summary.csv`).
pub fn export_results_to_path(report: &Report, path: &Path) -> Result<(), ExportError> {
    if ExportFormat::from_path(path)? != ExportFormat::Csv {
        return Err(ExportError::UnsupportedFormat(path.display().to_string()));
    }
    export_results_csv(report, File::create(path)?)?;
    info!(path = %path.display(), "results table exported");
    Ok(())
}

/// 확장자(.csv/.json)에 맞춰 파일로 내보낸다.
pub fn export_to_path(report: &Report, path: &Path) -> Result<ExportFormat, ExportError> {
    let format = ExportFormat::from_path(path)?;
    let file = File::create(path)?;
    match format {
        ExportFormat::Csv => export_csv(report, file)?,
        ExportFormat::Json => export_json(report, file)?,
    }
    info!(path = %path.display(), ?format, "report exported");
    Ok(format)
}
