use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const APP_EXIT: &str = "general.app_exit";
    pub const APP_TITLE: &str = "general.app_title";

    pub const MAIN_MENU_CALCULATE: &str = "main_menu.calculate";
    pub const MAIN_MENU_FUELS: &str = "main_menu.fuels";
    pub const MAIN_MENU_STEAM: &str = "main_menu.steam";
    pub const MAIN_MENU_SETTINGS: &str = "main_menu.settings";
    pub const MAIN_MENU_EXIT: &str = "main_menu.exit";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";
    pub const ERROR_INVALID_NUMBER: &str = "error.invalid_number";

    pub const SECTION_HEATING: &str = "inputs.section_heating";
    pub const SECTION_TEMPERATURE_COP: &str = "inputs.section_temperature_cop";
    pub const SECTION_OPERATION_FUEL: &str = "inputs.section_operation_fuel";
    pub const SECTION_COOLING: &str = "inputs.section_cooling";
    pub const PROMPT_METHOD: &str = "prompt.method";
    pub const PROMPT_STEAM_FLOW: &str = "prompt.steam_flow";
    pub const PROMPT_STEAM_PRESSURE: &str = "prompt.steam_pressure";
    pub const PROMPT_CONDENSATE_TEMP: &str = "prompt.condensate_temp";
    pub const PROMPT_CAPACITY_KW: &str = "prompt.capacity_kw";
    pub const PROMPT_HEATER_KW: &str = "prompt.heater_kw";
    pub const PROMPT_BOILER_KCAL: &str = "prompt.boiler_kcal";
    pub const PROMPT_AMBIENT: &str = "prompt.ambient";
    pub const PROMPT_HOT_WATER: &str = "prompt.hot_water";
    pub const PROMPT_COP: &str = "prompt.cop";
    pub const PROMPT_HOURS: &str = "prompt.hours";
    pub const PROMPT_DAYS: &str = "prompt.days";
    pub const PROMPT_ELEC_COST: &str = "prompt.elec_cost";
    pub const PROMPT_FUEL: &str = "prompt.fuel";
    pub const PROMPT_LABOUR: &str = "prompt.labour";
    pub const PROMPT_CONNECTED_LOAD: &str = "prompt.connected_load";
    pub const PROMPT_ENABLE_COOLING: &str = "prompt.enable_cooling";
    pub const PROMPT_CHILLER_IKW_TR: &str = "prompt.chiller_ikw_tr";
    pub const PROMPT_EXPORT_PATH: &str = "prompt.export_path";
    pub const PROMPT_PRESSURE_VALUE: &str = "prompt.pressure_value";
    pub const PROMPT_PRESSURE_UNIT: &str = "prompt.pressure_unit";

    pub const RESULT_SUMMARY: &str = "result.summary";
    pub const RESULT_DETAILS: &str = "result.details";
    pub const RESULT_ADVISORIES: &str = "result.advisories";
    pub const RESULT_EXPORTED: &str = "result.exported";

    pub const FUELS_HEADING: &str = "fuels.heading";
    pub const STEAM_HEADING: &str = "steam.heading";
    pub const STEAM_TABLE_ENTHALPY: &str = "steam.table_enthalpy";
    pub const STEAM_IF97_ENTHALPY: &str = "steam.if97_enthalpy";
    pub const STEAM_SATURATION_T: &str = "steam.saturation_temperature";
    pub const STEAM_CLAMPED: &str = "steam.clamped";

    pub const SETTINGS_HEADING: &str = "settings.heading";
    pub const SETTINGS_GRID_CO2: &str = "settings.grid_co2";
    pub const SETTINGS_CURRENCY: &str = "settings.currency";
    pub const SETTINGS_LANGUAGE: &str = "settings.language";
    pub const SETTINGS_SAVED: &str = "settings.saved";

    pub const TAB_INPUTS: &str = "tab.inputs";
    pub const TAB_COOLING: &str = "tab.cooling";
    pub const TAB_RESULTS: &str = "tab.results";
    pub const CHART_COST: &str = "chart.cost";
    pub const CHART_CO2: &str = "chart.co2";
    pub const LABEL_BOILER: &str = "label.boiler";
    pub const LABEL_HEAT_PUMP: &str = "label.heat_pump";
    pub const BUTTON_EXPORT_CSV: &str = "button.export_csv";
    pub const BUTTON_EXPORT_JSON: &str = "button.export_json";
    pub const BUTTON_EXPORT_RESULTS_CSV: &str = "button.export_results_csv";
    pub const BUTTON_LOAD_FUEL_DB: &str = "button.load_fuel_db";
    pub const BUTTON_RESET_FUEL_DB: &str = "button.reset_fuel_db";
    pub const BUTTON_SETTINGS: &str = "button.settings";
    pub const BUTTON_SAVE: &str = "button.save";

    pub const HELP_CALCULATE: &str = "help.calculate";
    pub const HELP_STEAM: &str = "help.steam";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Ko,
    En,
}

impl Language {
    fn from_code(code: &str) -> Self {
        let c = code.to_lowercase();
        if c.starts_with("ko") {
            Language::Ko
        } else {
            Language::En
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Language::Ko => "ko",
            Language::En => "en",
        }
    }
}

/// 런타임 언어 번들을 제공한다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
    overrides: Option<HashMap<String, String>>,
}

impl Translator {
    /// 언어 코드(ko/en)에 따라 번역기를 생성한다. 알 수 없는 코드는 en으로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: None,
        }
    }

    /// 언어 코드 + 언어팩 디렉터리(locales/ 등)를 받아서 번역기를 생성한다.
    /// 디렉터리가 없거나 파일이 없으면 내장 문자열만 사용한다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&str>) -> Self {
        let overrides = pack_dir
            .and_then(|dir| load_overrides(dir, lang_code))
            .or_else(|| load_overrides("locales", lang_code));
        Self {
            lang: Language::from_code(lang_code),
            overrides,
        }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    pub fn language_code(&self) -> &'static str {
        self.lang.as_code()
    }

    /// 키를 조회해 문자열을 반환한다. 언어팩에 없으면 None.
    pub fn lookup(&self, key: &str) -> Option<&str> {
        self.overrides
            .as_ref()
            .and_then(|m| m.get(key))
            .map(String::as_str)
    }

    /// 번역을 가져온다. 한국어 번역이 없으면 영어 문자열을 폴백한다.
    pub fn t<'a>(&'a self, key: &str) -> &'a str {
        if let Some(v) = self.lookup(key) {
            return v;
        }
        match self.lang {
            Language::Ko => ko(key).unwrap_or_else(|| en(key)),
            Language::En => en(key),
        }
    }
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: Option<&str>, config_lang: Option<&str>) -> String {
    cli_arg
        .and_then(normalize_lang)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "en".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "auto" | "" => None,
        other if other.starts_with("ko") => Some("ko".into()),
        other if other.starts_with("en") => Some("en".into()),
        _ => None,
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match lang.as_str() {
        "ko" => Some("ko".into()),
        "en" => Some("en".into()),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(loc) = get_locale() {
        if let Some(lang) = normalize_locale_string(&loc) {
            return Some(lang);
        }
    }
    for var in ["LANG", "LC_ALL"] {
        if let Ok(lang) = std::env::var(var) {
            if let Some(code) = normalize_locale_string(&lang) {
                return Some(code);
            }
        }
    }
    None
}

/// TOML 기반 언어팩을 로드한다. 형식: key = "value" 또는 [section] 아래 key = "value".
fn load_overrides(dir: &str, lang: &str) -> Option<HashMap<String, String>> {
    let try_load = |code: &str| -> Option<HashMap<String, String>> {
        let path = Path::new(dir).join(format!("{code}.toml"));
        let content = fs::read_to_string(path).ok()?;
        parse_toml_to_map(&content)
    };

    // 1) full code (e.g., en-us)
    if let Some(map) = try_load(lang) {
        return Some(map);
    }
    // 2) base code (e.g., en)
    if let Some((base, _)) = lang.split_once(['-', '_']) {
        if let Some(map) = try_load(base) {
            return Some(map);
        }
    }
    None
}

pub(crate) fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    let value: toml::Value = toml::from_str(src).ok()?;
    let table = value.as_table()?;
    let mut map = HashMap::new();

    fn walk(prefix: &str, val: &toml::Value, out: &mut HashMap<String, String>) {
        match val {
            toml::Value::String(s) => {
                out.insert(prefix.to_string(), s.to_string());
            }
            toml::Value::Table(t) => {
                for (k, v) in t {
                    let key = if prefix.is_empty() {
                        k.clone()
                    } else {
                        format!("{prefix}.{k}")
                    };
                    walk(&key, v, out);
                }
            }
            _ => {}
        }
    }

    for (k, v) in table {
        walk(k, v, &mut map);
    }

    if map.is_empty() {
        None
    } else {
        Some(map)
    }
}

fn en(key: &str) -> &'static str {
    use keys::*;
    match key {
        ERROR_PREFIX => "Error",
        APP_EXIT => "Exiting application.",
        APP_TITLE => "HEAT PUMP SAVINGS CALCULATOR",
        MAIN_MENU_CALCULATE => "1) Calculate savings",
        MAIN_MENU_FUELS => "2) Fuel database",
        MAIN_MENU_STEAM => "3) Steam enthalpy lookup",
        MAIN_MENU_SETTINGS => "4) Settings",
        MAIN_MENU_EXIT => "0) Exit",
        PROMPT_MENU_SELECT => "Select menu: ",
        INVALID_SELECTION_RETRY => "Invalid input. Please try again.",
        ERROR_INVALID_NUMBER => "Please enter a number.",
        SECTION_HEATING => "1) Heating Capacity Input",
        SECTION_TEMPERATURE_COP => "2) Temperature & COP",
        SECTION_OPERATION_FUEL => "3) Operation & Fuel Selection",
        SECTION_COOLING => "Optional Cooling Benefit",
        PROMPT_METHOD => "Select method",
        PROMPT_STEAM_FLOW => "Steam flow (kg/hr)",
        PROMPT_STEAM_PRESSURE => "Steam Inlet Pressure (bar abs)",
        PROMPT_CONDENSATE_TEMP => "Condensate temp (°C)",
        PROMPT_CAPACITY_KW => "Heating capacity (kW)",
        PROMPT_HEATER_KW => "Electric heater rating (kW)",
        PROMPT_BOILER_KCAL => "Boiler capacity (kcal/hr)",
        PROMPT_AMBIENT => "Ambient (°C)",
        PROMPT_HOT_WATER => "Hot Water (°C)",
        PROMPT_COP => "Heat Pump COP",
        PROMPT_HOURS => "Hours/day",
        PROMPT_DAYS => "Days/year",
        PROMPT_ELEC_COST => "Electricity Cost (per kWh)",
        PROMPT_FUEL => "Fuel Type",
        PROMPT_LABOUR => "Boiler Labour Cost (per day)",
        PROMPT_CONNECTED_LOAD => "Boiler Connected Load (kW)",
        PROMPT_ENABLE_COOLING => "Enable Cooling Benefit?",
        PROMPT_CHILLER_IKW_TR => "Chiller Efficiency (ikW/TR)",
        PROMPT_EXPORT_PATH => "Export file (.csv/.json, enter to skip)",
        PROMPT_PRESSURE_VALUE => "Pressure value",
        PROMPT_PRESSURE_UNIT => "Pressure unit (bar, kPa, MPa, kg/cm2, psi)",
        RESULT_SUMMARY => "Summary",
        RESULT_DETAILS => "Detailed Results",
        RESULT_ADVISORIES => "Advisories",
        RESULT_EXPORTED => "Exported:",
        FUELS_HEADING => "Fuel database",
        STEAM_HEADING => "Saturated steam enthalpy",
        STEAM_TABLE_ENTHALPY => "Table vapor enthalpy:",
        STEAM_IF97_ENTHALPY => "IF97 vapor enthalpy:",
        STEAM_SATURATION_T => "Saturation temperature:",
        STEAM_CLAMPED => "outside table range, clamped to",
        SETTINGS_HEADING => "Settings",
        SETTINGS_GRID_CO2 => "Grid CO₂ factor (kg/kWh)",
        SETTINGS_CURRENCY => "Currency",
        SETTINGS_LANGUAGE => "Language (auto/ko/en)",
        SETTINGS_SAVED => "Settings saved.",
        TAB_INPUTS => "Inputs",
        TAB_COOLING => "Cooling Benefit",
        TAB_RESULTS => "Results & Export",
        CHART_COST => "Operating Cost Comparison",
        CHART_CO2 => "CO₂ Comparison (kg/year)",
        LABEL_BOILER => "Fuel Boiler",
        LABEL_HEAT_PUMP => "Heat Pump",
        BUTTON_EXPORT_CSV => "Download CSV",
        BUTTON_EXPORT_JSON => "Download JSON",
        BUTTON_EXPORT_RESULTS_CSV => "Download Results CSV",
        BUTTON_LOAD_FUEL_DB => "Upload fuel DB",
        BUTTON_RESET_FUEL_DB => "Use built-in fuels",
        BUTTON_SETTINGS => "Settings",
        BUTTON_SAVE => "Save",
        HELP_CALCULATE => "Help: press enter to accept the value in brackets.",
        HELP_STEAM => "Help: pressure is absolute unless you answer 'g' for gauge.",
        _ => "[missing translation]",
    }
}

fn ko(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "오류",
        APP_EXIT => "프로그램을 종료합니다.",
        APP_TITLE => "히트펌프 절감액 계산기",
        MAIN_MENU_CALCULATE => "1) 절감액 계산",
        MAIN_MENU_FUELS => "2) 연료 데이터베이스",
        MAIN_MENU_STEAM => "3) 증기 엔탈피 조회",
        MAIN_MENU_SETTINGS => "4) 설정",
        MAIN_MENU_EXIT => "0) 종료",
        PROMPT_MENU_SELECT => "메뉴 선택: ",
        INVALID_SELECTION_RETRY => "잘못된 입력입니다. 다시 선택하세요.",
        ERROR_INVALID_NUMBER => "숫자를 입력하세요.",
        SECTION_HEATING => "1) 가열량 입력",
        SECTION_TEMPERATURE_COP => "2) 온도 및 COP",
        SECTION_OPERATION_FUEL => "3) 운전 조건 및 연료 선택",
        SECTION_COOLING => "냉각 회수 (선택)",
        PROMPT_METHOD => "입력 방식 선택",
        PROMPT_STEAM_FLOW => "증기 유량 (kg/h)",
        PROMPT_STEAM_PRESSURE => "증기 입구 압력 (bar abs)",
        PROMPT_CONDENSATE_TEMP => "응축수 온도 (°C)",
        PROMPT_CAPACITY_KW => "가열량 (kW)",
        PROMPT_HEATER_KW => "전기 히터 정격 (kW)",
        PROMPT_BOILER_KCAL => "보일러 용량 (kcal/h)",
        PROMPT_AMBIENT => "외기 온도 (°C)",
        PROMPT_HOT_WATER => "온수 온도 (°C)",
        PROMPT_COP => "히트펌프 COP",
        PROMPT_HOURS => "일 운전시간 (h/day)",
        PROMPT_DAYS => "연 운전일수 (day/year)",
        PROMPT_ELEC_COST => "전기 요금 (kWh당)",
        PROMPT_FUEL => "연료 종류",
        PROMPT_LABOUR => "보일러 인건비 (일당)",
        PROMPT_CONNECTED_LOAD => "보일러 부속 전력 (kW)",
        PROMPT_ENABLE_COOLING => "냉각 회수 적용?",
        PROMPT_CHILLER_IKW_TR => "칠러 효율 (ikW/TR)",
        PROMPT_EXPORT_PATH => "내보낼 파일 (.csv/.json, 건너뛰려면 엔터)",
        PROMPT_PRESSURE_VALUE => "압력 값",
        PROMPT_PRESSURE_UNIT => "압력 단위 (bar, kPa, MPa, kg/cm2, psi)",
        RESULT_SUMMARY => "요약",
        RESULT_DETAILS => "상세 결과",
        RESULT_ADVISORIES => "주의 사항",
        RESULT_EXPORTED => "내보내기 완료:",
        FUELS_HEADING => "연료 데이터베이스",
        STEAM_HEADING => "포화 증기 엔탈피",
        STEAM_TABLE_ENTHALPY => "증기표 엔탈피:",
        STEAM_IF97_ENTHALPY => "IF97 엔탈피:",
        STEAM_SATURATION_T => "포화 온도:",
        STEAM_CLAMPED => "증기표 범위 밖이라 다음 값으로 제한:",
        SETTINGS_HEADING => "설정",
        SETTINGS_GRID_CO2 => "계통 전력 CO₂ 계수 (kg/kWh)",
        SETTINGS_CURRENCY => "통화 표기",
        SETTINGS_LANGUAGE => "언어 (auto/ko/en)",
        SETTINGS_SAVED => "설정을 저장했습니다.",
        TAB_INPUTS => "입력",
        TAB_COOLING => "냉각 회수",
        TAB_RESULTS => "결과 및 내보내기",
        CHART_COST => "운전비 비교",
        CHART_CO2 => "CO₂ 비교 (kg/year)",
        LABEL_BOILER => "연료 보일러",
        LABEL_HEAT_PUMP => "히트펌프",
        BUTTON_EXPORT_CSV => "CSV 저장",
        BUTTON_EXPORT_JSON => "JSON 저장",
        BUTTON_EXPORT_RESULTS_CSV => "결과표 CSV 저장",
        BUTTON_LOAD_FUEL_DB => "연료 DB 불러오기",
        BUTTON_RESET_FUEL_DB => "내장 연료 사용",
        BUTTON_SETTINGS => "설정",
        BUTTON_SAVE => "저장",
        HELP_CALCULATE => "도움말: 괄호 안 값을 쓰려면 엔터를 누르세요.",
        HELP_STEAM => "도움말: 게이지압이면 'g'를 입력하세요. 기본은 절대압입니다.",
        _ => return None,
    })
}
