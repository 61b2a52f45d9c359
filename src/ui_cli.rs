use std::io::{self, Write};
use std::path::Path;

use crate::app::{self, AppError, Session};
use crate::fuel_db::{FuelDatabase, FuelProperties};
use crate::heating::{HeatingMethod, HeatingMethodKind};
use crate::i18n::{keys, Translator};
use crate::report::{self, Report};
use crate::savings::{CalculationInputs, CoolingRecovery, OperatingSchedule};
use crate::units::{
    convert_energy, convert_power, convert_temperature, to_bar_abs, EnergyUnit, PowerUnit,
    PressureMode, PressureUnit, TemperatureUnit,
};

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Calculate,
    Fuels,
    SteamLookup,
    Settings,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu(tr: &Translator) -> Result<MenuChoice, AppError> {
    println!("\n=== {} ===", tr.t(keys::APP_TITLE));
    println!("{}", tr.t(keys::MAIN_MENU_CALCULATE));
    println!("{}", tr.t(keys::MAIN_MENU_FUELS));
    println!("{}", tr.t(keys::MAIN_MENU_STEAM));
    println!("{}", tr.t(keys::MAIN_MENU_SETTINGS));
    println!("{}", tr.t(keys::MAIN_MENU_EXIT));
    loop {
        let sel = read_line(tr.t(keys::PROMPT_MENU_SELECT))?;
        match sel.trim() {
            "1" => return Ok(MenuChoice::Calculate),
            "2" => return Ok(MenuChoice::Fuels),
            "3" => return Ok(MenuChoice::SteamLookup),
            "4" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

/// 대화형으로 입력을 받아 계산하고 결과를 출력한다.
pub fn handle_calculate(session: &Session) -> Result<(), AppError> {
    let tr = &session.tr;
    println!("{}", tr.t(keys::HELP_CALCULATE));

    println!("\n-- {} --", tr.t(keys::SECTION_HEATING));
    for (i, kind) in HeatingMethodKind::ALL.iter().enumerate() {
        println!("{}) {}", i + 1, kind.label());
    }
    let kind = read_choice(tr, tr.t(keys::PROMPT_METHOD), &HeatingMethodKind::ALL, 1)?;
    let method = match kind {
        HeatingMethodKind::SteamFlow => HeatingMethod::SteamFlow {
            steam_flow_kg_per_hr: read_f64_or(tr, tr.t(keys::PROMPT_STEAM_FLOW), 1000.0)?,
            steam_pressure_bar_abs: read_f64_or(tr, tr.t(keys::PROMPT_STEAM_PRESSURE), 1.0)?,
            condensate_temp_c: read_f64_or(tr, tr.t(keys::PROMPT_CONDENSATE_TEMP), 95.0)?,
        },
        HeatingMethodKind::DirectCapacity => HeatingMethod::DirectCapacity {
            capacity_kw: read_f64_or(tr, tr.t(keys::PROMPT_CAPACITY_KW), 462.0)?,
        },
        HeatingMethodKind::ElectricHeater => HeatingMethod::ElectricHeater {
            rating_kw: read_f64_or(tr, tr.t(keys::PROMPT_HEATER_KW), 462.0)?,
        },
        HeatingMethodKind::BoilerCapacity => HeatingMethod::BoilerCapacity {
            boiler_kcal_per_hr: read_f64_or(tr, tr.t(keys::PROMPT_BOILER_KCAL), 100000.0)?,
        },
    };

    // 연료는 아래에서 다시 고른다.
    let mut inputs = session.default_inputs(method, CalculationInputs::default().fuel);

    println!("\n-- {} --", tr.t(keys::SECTION_TEMPERATURE_COP));
    inputs.ambient_temp_c = read_f64_or(tr, tr.t(keys::PROMPT_AMBIENT), inputs.ambient_temp_c)?;
    inputs.hot_water_temp_c =
        read_f64_or(tr, tr.t(keys::PROMPT_HOT_WATER), inputs.hot_water_temp_c)?;
    inputs.cop = read_f64_or(tr, tr.t(keys::PROMPT_COP), inputs.cop)?;

    println!("\n-- {} --", tr.t(keys::SECTION_OPERATION_FUEL));
    inputs.schedule = OperatingSchedule::new(
        read_f64_or(tr, tr.t(keys::PROMPT_HOURS), inputs.schedule.hours_per_day)?,
        read_f64_or(tr, tr.t(keys::PROMPT_DAYS), inputs.schedule.days_per_year)?,
    );
    inputs.electricity_cost =
        read_f64_or(tr, tr.t(keys::PROMPT_ELEC_COST), inputs.electricity_cost)?;
    inputs.fuel = read_fuel(tr, &session.fuels)?;
    inputs.labour_cost_per_day = read_f64_or(tr, tr.t(keys::PROMPT_LABOUR), 0.0)?;
    inputs.boiler_connected_load_kw = read_f64_or(tr, tr.t(keys::PROMPT_CONNECTED_LOAD), 0.0)?;

    println!("\n-- {} --", tr.t(keys::SECTION_COOLING));
    if read_yes_no(tr.t(keys::PROMPT_ENABLE_COOLING), false)? {
        let default = CoolingRecovery::default().chiller_ikw_per_tr;
        inputs.cooling = Some(CoolingRecovery {
            chiller_ikw_per_tr: read_f64_or(tr, tr.t(keys::PROMPT_CHILLER_IKW_TR), default)?,
        });
    }

    let (result, report) = session.evaluate(&inputs)?;
    println!(
        "\n{}: {:.2} kW ({:.0} kcal/h)",
        tr.t(keys::PROMPT_CAPACITY_KW),
        result.heating_capacity_kw,
        convert_power(
            result.heating_capacity_kw,
            PowerUnit::Kilowatt,
            PowerUnit::KcalPerHour
        )
    );
    print_report(&report, tr);

    let path = read_line(&format!("{}: ", tr.t(keys::PROMPT_EXPORT_PATH)))?;
    let path = path.trim();
    if !path.is_empty() {
        report::export_to_path(&report, Path::new(path))?;
        println!("{} {path}", tr.t(keys::RESULT_EXPORTED));
    }
    Ok(())
}

/// 요약/상세 결과와 권고를 출력한다.
pub fn print_report(report: &Report, tr: &Translator) {
    println!("\n## {}", tr.t(keys::RESULT_SUMMARY));
    for (header, value) in report.summary_headers().iter().zip(report.summary.values()) {
        println!("  {header:<45} {value:>16.2}");
    }

    println!("\n## {}", tr.t(keys::RESULT_DETAILS));
    for rec in &report.results {
        println!("  {:<50} {:>16}", rec.label, rec.value.to_string());
    }

    if !report.advisories.is_empty() {
        println!("\n## {}", tr.t(keys::RESULT_ADVISORIES));
        for adv in &report.advisories {
            println!("  - {adv}");
        }
    }
}

/// 활성 연료 DB를 표로 출력한다.
pub fn print_fuels(fuels: &FuelDatabase, currency: &str, tr: &Translator) {
    println!("\n-- {} --", tr.t(keys::FUELS_HEADING));
    println!(
        "  {:<3} {:<22} {:>12} {:>12} {:>8} {:>12} {:>12}",
        "#", "Fuel", "CV kcal/kg", "CV kJ/kg", "Eff %", format!("Cost {currency}"), "CO2 kg/kg"
    );
    for (i, f) in fuels.fuels().iter().enumerate() {
        let cv_kj = convert_energy(
            f.calorific_value_kcal_per_kg,
            EnergyUnit::KiloCalorie,
            EnergyUnit::Kilojoule,
        );
        println!(
            "  {:<3} {:<22} {:>12.0} {:>12.0} {:>8.1} {:>12.2} {:>12.2}",
            i + 1,
            f.name(),
            f.calorific_value_kcal_per_kg,
            cv_kj,
            f.efficiency_pct,
            f.unit_cost,
            f.co2_factor_kg_per_kg
        );
    }
}

/// 압력 하나를 받아 증기표/IF97 값을 비교 출력한다.
pub fn handle_steam_lookup(tr: &Translator) -> Result<(), AppError> {
    println!("\n-- {} --", tr.t(keys::STEAM_HEADING));
    println!("{}", tr.t(keys::HELP_STEAM));
    let value = read_f64(tr, &format!("{}: ", tr.t(keys::PROMPT_PRESSURE_VALUE)))?;
    let unit = loop {
        let s = read_line(&format!("{} [bar]: ", tr.t(keys::PROMPT_PRESSURE_UNIT)))?;
        if s.trim().is_empty() {
            break PressureUnit::Bar;
        }
        match PressureUnit::parse(&s) {
            Some(u) => break u,
            None => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    };
    let mode = if read_line("abs/g [abs]: ")?.trim().eq_ignore_ascii_case("g") {
        PressureMode::Gauge
    } else {
        PressureMode::Absolute
    };
    print_steam_lookup(to_bar_abs(value, unit, mode), tr)
}

pub fn print_steam_lookup(pressure_bar_abs: f64, tr: &Translator) -> Result<(), AppError> {
    let lookup = app::steam_lookup(pressure_bar_abs)?;
    println!("  p = {:.4} bar(a)", pressure_bar_abs);
    println!(
        "  {} {:.1} kJ/kg",
        tr.t(keys::STEAM_TABLE_ENTHALPY),
        lookup.table.vapor_enthalpy_kj_per_kg
    );
    if lookup.table.clamped {
        println!(
            "  ({} {} bar(a))",
            tr.t(keys::STEAM_CLAMPED),
            lookup.table.used_bar
        );
    }
    if let Some(h) = lookup.if97_vapor_enthalpy_kj_per_kg {
        println!("  {} {:.1} kJ/kg", tr.t(keys::STEAM_IF97_ENTHALPY), h);
    }
    if let Some(t) = lookup.saturation_temp_c {
        let t_f = convert_temperature(t, TemperatureUnit::Celsius, TemperatureUnit::Fahrenheit);
        println!(
            "  {} {:.2} °C ({:.1} °F)",
            tr.t(keys::STEAM_SATURATION_T),
            t,
            t_f
        );
    }
    Ok(())
}

/// 설정 메뉴를 처리한다. 빈 입력은 현재 값을 유지한다.
pub fn handle_settings(session: &mut Session) -> Result<(), AppError> {
    let tr = session.tr.clone();
    let cfg = &mut session.config;
    println!("\n-- {} --", tr.t(keys::SETTINGS_HEADING));
    loop {
        let v = read_f64_or(&tr, tr.t(keys::SETTINGS_GRID_CO2), cfg.grid_co2_factor_kg_per_kwh)?;
        if v.is_finite() && v >= 0.0 {
            cfg.grid_co2_factor_kg_per_kwh = v;
            break;
        }
        println!("{}", tr.t(keys::INVALID_SELECTION_RETRY));
    }
    cfg.currency = read_string_or(tr.t(keys::SETTINGS_CURRENCY), &cfg.currency)?;
    cfg.language = read_string_or(tr.t(keys::SETTINGS_LANGUAGE), &cfg.language)?;
    session.reload_translator();
    println!("{}", session.tr.t(keys::SETTINGS_SAVED));
    Ok(())
}

fn read_fuel(tr: &Translator, fuels: &FuelDatabase) -> Result<FuelProperties, AppError> {
    for (i, f) in fuels.fuels().iter().enumerate() {
        println!("{}) {}", i + 1, f.name());
    }
    loop {
        let s = read_line(&format!("{} [1]: ", tr.t(keys::PROMPT_FUEL)))?;
        let s = s.trim();
        if s.is_empty() {
            return Ok(fuels.fuels()[0].clone());
        }
        if let Ok(n) = s.parse::<usize>() {
            if let Some(f) = n.checked_sub(1).and_then(|i| fuels.fuels().get(i)) {
                return Ok(f.clone());
            }
        } else if let Some(f) = fuels.find(s) {
            return Ok(f.clone());
        }
        println!("{}", tr.t(keys::INVALID_SELECTION_RETRY));
    }
}

fn read_choice<T: Copy>(
    tr: &Translator,
    prompt: &str,
    options: &[T],
    default: usize,
) -> Result<T, AppError> {
    loop {
        let s = read_line(&format!("{prompt} [{default}]: "))?;
        let n = if s.trim().is_empty() {
            Some(default)
        } else {
            s.trim().parse::<usize>().ok()
        };
        if let Some(opt) = n.and_then(|n| n.checked_sub(1)).and_then(|i| options.get(i)) {
            return Ok(*opt);
        }
        println!("{}", tr.t(keys::INVALID_SELECTION_RETRY));
    }
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut buf = String::new();
    io::stdin().read_line(&mut buf)?;
    Ok(buf)
}

fn read_f64(tr: &Translator, prompt: &str) -> Result<f64, AppError> {
    loop {
        let s = read_line(prompt)?;
        match s.trim().parse::<f64>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}

fn read_f64_or(tr: &Translator, label: &str, default: f64) -> Result<f64, AppError> {
    loop {
        let s = read_line(&format!("{label} [{default}]: "))?;
        let s = s.trim();
        if s.is_empty() {
            return Ok(default);
        }
        match s.parse::<f64>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}

fn read_string_or(label: &str, default: &str) -> Result<String, AppError> {
    let s = read_line(&format!("{label} [{default}]: "))?;
    let s = s.trim();
    Ok(if s.is_empty() {
        default.to_string()
    } else {
        s.to_string()
    })
}

fn read_yes_no(label: &str, default: bool) -> Result<bool, AppError> {
    let hint = if default { "Y/n" } else { "y/N" };
    let s = read_line(&format!("{label} [{hint}]: "))?;
    Ok(match s.trim().to_lowercase().as_str() {
        "y" | "yes" => true,
        "n" | "no" => false,
        _ => default,
    })
}
