#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

//! eframe/egui 기반 데스크톱 GUI 진입점.

use eframe::{egui, App, Frame};
use heat_pump_savings::{
    app::Session,
    fuel_db::FuelDatabase,
    heating::{HeatingMethod, HeatingMethodKind},
    i18n::{self, keys, Translator},
    report::{self, Report},
    savings::{CalculationInputs, CalculationResult, CoolingRecovery, OperatingSchedule},
    units::{convert_temperature, to_bar_abs, PressureMode, PressureUnit, TemperatureUnit},
};
use image::GenericImageView;
use rfd::FileDialog;
use std::{env, fs, path::Path, path::PathBuf};
use tracing::{error, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), eframe::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    // --lang xx / --lang=xx, --config path / --config=path
    let mut cli_lang: Option<String> = None;
    let mut cli_config: Option<PathBuf> = None;
    let args: Vec<String> = env::args().collect();
    let mut i = 1;
    while i < args.len() {
        let a = &args[i];
        if let Some(val) = a.strip_prefix("--lang=") {
            cli_lang = Some(val.to_string());
        } else if let Some(val) = a.strip_prefix("--config=") {
            cli_config = Some(PathBuf::from(val));
        } else if (a == "--lang" || a == "--config") && i + 1 < args.len() {
            if a == "--lang" {
                cli_lang = Some(args[i + 1].clone());
            } else {
                cli_config = Some(PathBuf::from(&args[i + 1]));
            }
            i += 1;
        }
        i += 1;
    }

    let session = match Session::open(cli_config.as_deref(), None, cli_lang.as_deref()) {
        Ok(s) => s,
        Err(e) => {
            error!("startup failed, falling back to defaults: {e}");
            let config = heat_pump_savings::config::Config::default();
            let lang = i18n::resolve_language(cli_lang.as_deref(), None);
            Session {
                config,
                config_path: cli_config
                    .unwrap_or_else(|| PathBuf::from(heat_pump_savings::config::CONFIG_FILE)),
                fuels: FuelDatabase::built_in(),
                tr: Translator::new(&lang),
            }
        }
    };

    let mut viewport = egui::ViewportBuilder::default()
        .with_inner_size(egui::vec2(1100.0, 760.0))
        .with_transparent(true);
    if let Some(icon) = load_app_icon() {
        viewport = viewport.with_icon(icon);
    }
    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };
    let title = session.tr.t(keys::APP_TITLE).to_string();
    eframe::run_native(
        &title,
        options,
        Box::new(move |cc| {
            if let Err(e) = setup_fonts(&cc.egui_ctx) {
                warn!("font setup: {e}");
            }
            Box::new(GuiApp::new(session))
        }),
    )
}

fn load_app_icon() -> Option<egui::IconData> {
    let search = ["heat_pump.png", "icon.png", "assets/icon.png", "../assets/icon.png"];
    let path = search.iter().find(|p| Path::new(*p).exists())?;
    let bytes = fs::read(path).ok()?;
    let img = image::load_from_memory(&bytes).ok()?;
    let rgba = img.to_rgba8();
    let (w, h) = img.dimensions();
    Some(egui::IconData {
        rgba: rgba.into_raw(),
        width: w,
        height: h,
    })
}

/// 공통: 바이너리 폰트 바이트를 egui에 등록.
fn apply_font_bytes(ctx: &egui::Context, bytes: Vec<u8>, name: &str) {
    let mut fonts = egui::FontDefinitions::default();
    let font_name = name.to_string();
    fonts
        .font_data
        .insert(font_name.clone(), egui::FontData::from_owned(bytes));
    fonts
        .families
        .entry(egui::FontFamily::Proportional)
        .or_default()
        .insert(0, font_name.clone());
    fonts
        .families
        .entry(egui::FontFamily::Monospace)
        .or_default()
        .insert(0, font_name);
    ctx.set_fonts(fonts);
}

/// 한글 표시용 폰트를 찾는다.
/// 1) assets/fonts/malgun.ttf
/// 2) Windows 시스템 폰트(맑은 고딕/굴림)
/// 모두 실패하면 기본 폰트를 유지하고 Err를 반환한다.
fn setup_fonts(ctx: &egui::Context) -> Result<(), String> {
    let asset_path = Path::new("assets/fonts/malgun.ttf");
    if asset_path.exists() {
        let bytes = fs::read(asset_path).map_err(|e| format!("Failed to read font file: {e}"))?;
        apply_font_bytes(ctx, bytes, "korean_font");
        return Ok(());
    }

    if let Some(windir) = env::var_os("WINDIR") {
        let fonts = Path::new(&windir).join("Fonts");
        for cand in ["malgun.ttf", "gulim.ttc"] {
            let p = fonts.join(cand);
            if p.exists() {
                let bytes = fs::read(&p)
                    .map_err(|e| format!("Failed to read system font ({}): {e}", p.display()))?;
                apply_font_bytes(ctx, bytes, "korean_font");
                return Ok(());
            }
        }
    }

    Err("Korean font not found; using the default font.".into())
}

/// 내보내기 대상: 전체 보고서(3섹션) 또는 결과표만.
#[derive(Clone, Copy)]
enum ExportKind {
    Report,
    ResultsTable,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Tab {
    Inputs,
    Cooling,
    Results,
}

struct GuiApp {
    session: Session,
    tab: Tab,
    // 가열량
    method: HeatingMethodKind,
    steam_flow: f64,
    steam_pressure: f64,
    steam_pressure_unit: PressureUnit,
    steam_pressure_mode: PressureMode,
    condensate_temp: f64,
    condensate_unit: TemperatureUnit,
    capacity_kw: f64,
    heater_kw: f64,
    boiler_kcal: f64,
    // 온도/COP
    ambient: f64,
    hot_water: f64,
    cop: f64,
    // 운전/연료
    hours: f64,
    days: f64,
    elec_cost: f64,
    fuel_idx: usize,
    labour: f64,
    connected_load: f64,
    // 냉각
    cooling_enabled: bool,
    chiller_ikw_tr: f64,
    // 결과
    outcome: Option<Result<(CalculationResult, Report), String>>,
    status: Option<String>,
    // 설정 창
    show_settings: bool,
    lang_input: String,
    currency_input: String,
    grid_co2_input: f64,
    window_alpha: f32,
}

impl GuiApp {
    fn new(session: Session) -> Self {
        let cfg = session.config.clone();
        let mut app = Self {
            session,
            tab: Tab::Inputs,
            method: HeatingMethodKind::DirectCapacity,
            steam_flow: 1000.0,
            steam_pressure: 1.0,
            steam_pressure_unit: PressureUnit::Bar,
            steam_pressure_mode: PressureMode::Absolute,
            condensate_temp: 95.0,
            condensate_unit: TemperatureUnit::Celsius,
            capacity_kw: 462.0,
            heater_kw: 462.0,
            boiler_kcal: 100000.0,
            ambient: 30.0,
            hot_water: 90.0,
            cop: cfg.default_cop,
            hours: cfg.default_hours_per_day,
            days: cfg.default_days_per_year,
            elec_cost: cfg.default_electricity_cost,
            fuel_idx: 0,
            labour: 0.0,
            connected_load: 0.0,
            cooling_enabled: false,
            chiller_ikw_tr: CoolingRecovery::default().chiller_ikw_per_tr,
            outcome: None,
            status: None,
            show_settings: false,
            lang_input: cfg.language.clone(),
            currency_input: cfg.currency.clone(),
            grid_co2_input: cfg.grid_co2_factor_kg_per_kwh,
            window_alpha: cfg.window_alpha,
        };
        app.recompute();
        app
    }

    fn tr(&self) -> &Translator {
        &self.session.tr
    }

    fn build_inputs(&self) -> CalculationInputs {
        let method = match self.method {
            HeatingMethodKind::SteamFlow => HeatingMethod::SteamFlow {
                steam_flow_kg_per_hr: self.steam_flow,
                steam_pressure_bar_abs: to_bar_abs(
                    self.steam_pressure,
                    self.steam_pressure_unit,
                    self.steam_pressure_mode,
                ),
                condensate_temp_c: convert_temperature(
                    self.condensate_temp,
                    self.condensate_unit,
                    TemperatureUnit::Celsius,
                ),
            },
            HeatingMethodKind::DirectCapacity => HeatingMethod::DirectCapacity {
                capacity_kw: self.capacity_kw,
            },
            HeatingMethodKind::ElectricHeater => HeatingMethod::ElectricHeater {
                rating_kw: self.heater_kw,
            },
            HeatingMethodKind::BoilerCapacity => HeatingMethod::BoilerCapacity {
                boiler_kcal_per_hr: self.boiler_kcal,
            },
        };
        let fuels = self.session.fuels.fuels();
        let fuel = fuels
            .get(self.fuel_idx)
            .or_else(|| fuels.first())
            .cloned()
            .unwrap_or_else(|| CalculationInputs::default().fuel);
        let mut inputs = CalculationInputs::new(method, fuel);
        inputs.ambient_temp_c = self.ambient;
        inputs.hot_water_temp_c = self.hot_water;
        inputs.cop = self.cop;
        inputs.schedule = OperatingSchedule::new(self.hours, self.days);
        inputs.electricity_cost = self.elec_cost;
        inputs.labour_cost_per_day = self.labour;
        inputs.boiler_connected_load_kw = self.connected_load;
        inputs.cooling = self.cooling_enabled.then_some(CoolingRecovery {
            chiller_ikw_per_tr: self.chiller_ikw_tr,
        });
        inputs
    }

    fn recompute(&mut self) {
        let inputs = self.build_inputs();
        self.outcome = Some(self.session.evaluate(&inputs).map_err(|e| e.to_string()));
    }

    fn ui_side_panel(&mut self, ui: &mut egui::Ui) {
        let tr = self.session.tr.clone();
        ui.heading(tr.t(keys::FUELS_HEADING));
        ui.add_space(4.0);
        if ui.button(tr.t(keys::BUTTON_LOAD_FUEL_DB)).clicked() {
            if let Some(path) = FileDialog::new()
                .add_filter("Fuel DB", &["csv", "toml"])
                .pick_file()
            {
                match FuelDatabase::load_path(&path) {
                    Ok(db) => {
                        self.session.fuels = db;
                        self.session.config.fuel_db_path = Some(path.clone());
                        self.fuel_idx = 0;
                        self.status = Some(path.display().to_string());
                    }
                    Err(e) => self.status = Some(format!("{}: {e}", tr.t(keys::ERROR_PREFIX))),
                }
            }
        }
        if ui.button(tr.t(keys::BUTTON_RESET_FUEL_DB)).clicked() {
            self.session.fuels = FuelDatabase::built_in();
            self.session.config.fuel_db_path = None;
            self.fuel_idx = 0;
        }
        ui.separator();
        egui::Grid::new("fuel_list")
            .striped(true)
            .num_columns(3)
            .show(ui, |ui| {
                ui.strong("Fuel");
                ui.strong("kcal/kg");
                ui.strong("η %");
                ui.end_row();
                for f in self.session.fuels.fuels() {
                    ui.label(f.name());
                    ui.label(format!("{:.0}", f.calorific_value_kcal_per_kg));
                    ui.label(format!("{:.0}", f.efficiency_pct));
                    ui.end_row();
                }
            });
        if let Some(msg) = &self.status {
            ui.separator();
            ui.label(egui::RichText::new(msg).small());
        }
    }

    fn ui_inputs(&mut self, ui: &mut egui::Ui) {
        let tr = self.session.tr.clone();
        ui.heading(tr.t(keys::SECTION_HEATING));
        egui::ComboBox::from_id_source("heating_method")
            .selected_text(self.method.label())
            .show_ui(ui, |ui| {
                for kind in HeatingMethodKind::ALL {
                    ui.selectable_value(&mut self.method, kind, kind.label());
                }
            });
        egui::Grid::new("heating_grid")
            .num_columns(2)
            .show(ui, |ui| match self.method {
                HeatingMethodKind::SteamFlow => {
                    ui.label(tr.t(keys::PROMPT_STEAM_FLOW));
                    ui.add(egui::DragValue::new(&mut self.steam_flow).speed(10.0));
                    ui.end_row();
                    ui.label(tr.t(keys::PROMPT_PRESSURE_VALUE));
                    ui.horizontal(|ui| {
                        ui.add(egui::DragValue::new(&mut self.steam_pressure).speed(0.1));
                        pressure_unit_combo(ui, &mut self.steam_pressure_unit);
                        ui.selectable_value(&mut self.steam_pressure_mode, PressureMode::Absolute, "abs");
                        ui.selectable_value(&mut self.steam_pressure_mode, PressureMode::Gauge, "g");
                    });
                    ui.end_row();
                    ui.label(tr.t(keys::PROMPT_CONDENSATE_TEMP));
                    ui.horizontal(|ui| {
                        ui.add(egui::DragValue::new(&mut self.condensate_temp).speed(1.0));
                        temperature_unit_combo(ui, &mut self.condensate_unit);
                    });
                    ui.end_row();
                }
                HeatingMethodKind::DirectCapacity => {
                    ui.label(tr.t(keys::PROMPT_CAPACITY_KW));
                    ui.add(egui::DragValue::new(&mut self.capacity_kw).speed(1.0));
                    ui.end_row();
                }
                HeatingMethodKind::ElectricHeater => {
                    ui.label(tr.t(keys::PROMPT_HEATER_KW));
                    ui.add(egui::DragValue::new(&mut self.heater_kw).speed(1.0));
                    ui.end_row();
                }
                HeatingMethodKind::BoilerCapacity => {
                    ui.label(tr.t(keys::PROMPT_BOILER_KCAL));
                    ui.add(egui::DragValue::new(&mut self.boiler_kcal).speed(100.0));
                    ui.end_row();
                }
            });

        ui.separator();
        ui.heading(tr.t(keys::SECTION_TEMPERATURE_COP));
        egui::Grid::new("temp_cop_grid").num_columns(2).show(ui, |ui| {
            ui.label(tr.t(keys::PROMPT_AMBIENT));
            ui.add(egui::DragValue::new(&mut self.ambient).speed(0.5));
            ui.end_row();
            ui.label(tr.t(keys::PROMPT_HOT_WATER));
            ui.add(egui::DragValue::new(&mut self.hot_water).speed(0.5));
            ui.end_row();
            ui.label(tr.t(keys::PROMPT_COP));
            ui.add(egui::DragValue::new(&mut self.cop).speed(0.05));
            ui.end_row();
        });

        ui.separator();
        ui.heading(tr.t(keys::SECTION_OPERATION_FUEL));
        let currency = self.session.config.currency.clone();
        let fuel_names: Vec<String> = self
            .session
            .fuels
            .fuels()
            .iter()
            .map(|f| f.name().to_string())
            .collect();
        egui::Grid::new("operation_grid").num_columns(2).show(ui, |ui| {
            ui.label(tr.t(keys::PROMPT_HOURS));
            ui.add(egui::DragValue::new(&mut self.hours).speed(0.5).clamp_range(0.0..=24.0));
            ui.end_row();
            ui.label(tr.t(keys::PROMPT_DAYS));
            ui.add(egui::DragValue::new(&mut self.days).speed(1.0).clamp_range(0.0..=365.0));
            ui.end_row();
            ui.label(format!("{} ({currency})", tr.t(keys::PROMPT_ELEC_COST)));
            ui.add(egui::DragValue::new(&mut self.elec_cost).speed(0.1));
            ui.end_row();
            ui.label(tr.t(keys::PROMPT_FUEL));
            let selected = fuel_names.get(self.fuel_idx).cloned().unwrap_or_default();
            egui::ComboBox::from_id_source("fuel_choice")
                .selected_text(selected)
                .show_ui(ui, |ui| {
                    for (i, name) in fuel_names.iter().enumerate() {
                        ui.selectable_value(&mut self.fuel_idx, i, name);
                    }
                });
            ui.end_row();
            ui.label(format!("{} ({currency})", tr.t(keys::PROMPT_LABOUR)));
            ui.add(egui::DragValue::new(&mut self.labour).speed(10.0));
            ui.end_row();
            ui.label(tr.t(keys::PROMPT_CONNECTED_LOAD));
            ui.add(egui::DragValue::new(&mut self.connected_load).speed(0.5));
            ui.end_row();
        });
    }

    fn ui_cooling(&mut self, ui: &mut egui::Ui) {
        let tr = self.session.tr.clone();
        ui.heading(tr.t(keys::SECTION_COOLING));
        ui.checkbox(&mut self.cooling_enabled, tr.t(keys::PROMPT_ENABLE_COOLING));
        if self.cooling_enabled {
            ui.horizontal(|ui| {
                ui.label(tr.t(keys::PROMPT_CHILLER_IKW_TR));
                ui.add(egui::DragValue::new(&mut self.chiller_ikw_tr).speed(0.01));
            });
        }
        if let Some(Ok((result, _))) = &self.outcome {
            if result.cooling_enabled {
                ui.separator();
                egui::Grid::new("cooling_grid").num_columns(2).show(ui, |ui| {
                    ui.label("Cooling Capacity (kW)");
                    ui.label(format!("{:.2}", result.cooling_capacity_kw));
                    ui.end_row();
                    ui.label("Cooling Capacity (TR)");
                    ui.label(format!("{:.2}", result.cooling_capacity_tr));
                    ui.end_row();
                    ui.label("Chiller Input (kW)");
                    ui.label(format!("{:.2}", result.cooling_electrical_input_kw));
                    ui.end_row();
                });
            }
        }
    }

    fn ui_results(&mut self, ui: &mut egui::Ui) {
        let tr = self.session.tr.clone();
        let (result, report) = match &self.outcome {
            Some(Ok(pair)) => pair.clone(),
            Some(Err(msg)) => {
                ui.colored_label(
                    egui::Color32::from_rgb(200, 60, 60),
                    format!("{}: {msg}", tr.t(keys::ERROR_PREFIX)),
                );
                return;
            }
            None => return,
        };

        ui.heading(tr.t(keys::RESULT_SUMMARY));
        egui::Grid::new("summary_grid")
            .striped(true)
            .num_columns(4)
            .show(ui, |ui| {
                for h in report.summary_headers() {
                    ui.strong(h);
                }
                ui.end_row();
                for v in report.summary.values() {
                    ui.label(format!("{v:.2}"));
                }
                ui.end_row();
            });

        ui.separator();
        ui.heading(tr.t(keys::RESULT_DETAILS));
        egui::Grid::new("detail_grid")
            .striped(true)
            .num_columns(2)
            .show(ui, |ui| {
                for rec in &report.results {
                    ui.label(rec.label.as_str());
                    ui.label(rec.value.to_string());
                    ui.end_row();
                }
            });

        if !report.advisories.is_empty() {
            ui.separator();
            ui.heading(tr.t(keys::RESULT_ADVISORIES));
            for adv in &report.advisories {
                ui.colored_label(egui::Color32::from_rgb(210, 150, 40), format!("• {adv}"));
            }
        }

        ui.separator();
        let labels = [tr.t(keys::LABEL_BOILER), tr.t(keys::LABEL_HEAT_PUMP)];
        ui.horizontal(|ui| {
            bar_chart(
                ui,
                &format!("{} ({}/year)", tr.t(keys::CHART_COST), report.currency),
                labels,
                [
                    result.boiler_operating_cost_per_year,
                    result.total_hp_cost_per_year,
                ],
            );
            bar_chart(
                ui,
                tr.t(keys::CHART_CO2),
                labels,
                [result.co2_fuel_kg_per_year, result.total_hp_co2_kg_per_year()],
            );
        });

        ui.separator();
        ui.horizontal(|ui| {
            if ui.button(tr.t(keys::BUTTON_EXPORT_CSV)).clicked() {
                self.export_dialog(&report, ExportKind::Report, "CSV", "csv", "heatpump_report.csv");
            }
            if ui.button(tr.t(keys::BUTTON_EXPORT_RESULTS_CSV)).clicked() {
                self.export_dialog(&report, ExportKind::ResultsTable, "CSV", "csv", "heatpump_summary.csv");
            }
            if ui.button(tr.t(keys::BUTTON_EXPORT_JSON)).clicked() {
                self.export_dialog(&report, ExportKind::Report, "JSON", "json", "heatpump_report.json");
            }
        });
    }

    fn export_dialog(
        &mut self,
        report: &Report,
        kind: ExportKind,
        filter: &str,
        ext: &str,
        file_name: &str,
    ) {
        let Some(path) = FileDialog::new()
            .add_filter(filter, &[ext])
            .set_file_name(file_name)
            .save_file()
        else {
            return;
        };
        let written = match kind {
            ExportKind::Report => report::export_to_path(report, &path).map(|_| ()),
            ExportKind::ResultsTable => report::export_results_to_path(report, &path),
        };
        self.status = Some(match written {
            Ok(()) => format!("{} {}", self.tr().t(keys::RESULT_EXPORTED), path.display()),
            Err(e) => format!("{}: {e}", self.tr().t(keys::ERROR_PREFIX)),
        });
    }

    fn ui_settings(&mut self, ctx: &egui::Context) {
        let tr = self.session.tr.clone();
        let mut open = self.show_settings;
        let mut save_clicked = false;
        egui::Window::new(tr.t(keys::SETTINGS_HEADING))
            .collapsible(false)
            .resizable(true)
            .open(&mut open)
            .show(ctx, |ui| {
                egui::Grid::new("settings_grid").num_columns(2).show(ui, |ui| {
                    ui.label(tr.t(keys::SETTINGS_LANGUAGE));
                    egui::ComboBox::from_id_source("lang_choice")
                        .selected_text(self.lang_input.as_str())
                        .show_ui(ui, |ui| {
                            ui.selectable_value(&mut self.lang_input, "auto".into(), "auto");
                            ui.selectable_value(&mut self.lang_input, "en".into(), "English");
                            ui.selectable_value(&mut self.lang_input, "ko".into(), "한국어");
                        });
                    ui.end_row();
                    ui.label(tr.t(keys::SETTINGS_CURRENCY));
                    ui.text_edit_singleline(&mut self.currency_input);
                    ui.end_row();
                    ui.label(tr.t(keys::SETTINGS_GRID_CO2));
                    ui.add(
                        egui::DragValue::new(&mut self.grid_co2_input)
                            .speed(0.01)
                            .clamp_range(0.0..=5.0),
                    );
                    ui.end_row();
                    ui.label("alpha");
                    ui.add(egui::Slider::new(&mut self.window_alpha, 0.3..=1.0));
                    ui.end_row();
                });
                if ui.button(tr.t(keys::BUTTON_SAVE)).clicked() {
                    save_clicked = true;
                }
            });
        self.show_settings = open;

        if save_clicked {
            let cfg = &mut self.session.config;
            cfg.language = self.lang_input.clone();
            cfg.currency = self.currency_input.trim().to_string();
            cfg.grid_co2_factor_kg_per_kwh = self.grid_co2_input;
            cfg.window_alpha = self.window_alpha;
            self.session.reload_translator();
            self.status = Some(match self.session.save_config() {
                Ok(()) => self.session.tr.t(keys::SETTINGS_SAVED).to_string(),
                Err(e) => format!("{}: {e}", self.session.tr.t(keys::ERROR_PREFIX)),
            });
        }
    }
}

impl App for GuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        let mut style = (*ctx.style()).clone();
        style.visuals.window_fill = style.visuals.window_fill.linear_multiply(self.window_alpha);
        style.visuals.panel_fill = style.visuals.panel_fill.linear_multiply(self.window_alpha);
        ctx.set_style(style);

        let tr = self.session.tr.clone();
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading(tr.t(keys::APP_TITLE));
                ui.separator();
                for (tab, key) in [
                    (Tab::Inputs, keys::TAB_INPUTS),
                    (Tab::Cooling, keys::TAB_COOLING),
                    (Tab::Results, keys::TAB_RESULTS),
                ] {
                    ui.selectable_value(&mut self.tab, tab, tr.t(key));
                }
                ui.separator();
                if ui.button(tr.t(keys::BUTTON_SETTINGS)).clicked() {
                    self.show_settings = true;
                }
            });
        });

        if self.show_settings {
            self.ui_settings(ctx);
        }

        egui::SidePanel::left("fuel_panel")
            .resizable(true)
            .default_width(220.0)
            .show(ctx, |ui| self.ui_side_panel(ui));

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false; 2])
                .show(ui, |ui| match self.tab {
                    Tab::Inputs => self.ui_inputs(ui),
                    Tab::Cooling => self.ui_cooling(ui),
                    Tab::Results => self.ui_results(ui),
                });
        });

        self.recompute();
    }
}

fn pressure_unit_combo(ui: &mut egui::Ui, unit: &mut PressureUnit) {
    egui::ComboBox::from_id_source("steam_p_unit")
        .selected_text(pressure_unit_label(*unit))
        .show_ui(ui, |ui| {
            for u in [
                PressureUnit::Bar,
                PressureUnit::KiloPascal,
                PressureUnit::MegaPascal,
                PressureUnit::KgPerCm2,
                PressureUnit::Psi,
            ] {
                ui.selectable_value(unit, u, pressure_unit_label(u));
            }
        });
}

fn pressure_unit_label(unit: PressureUnit) -> &'static str {
    match unit {
        PressureUnit::Bar => "bar",
        PressureUnit::KiloPascal => "kPa",
        PressureUnit::MegaPascal => "MPa",
        PressureUnit::KgPerCm2 => "kg/cm²",
        PressureUnit::Psi => "psi",
    }
}

fn temperature_unit_combo(ui: &mut egui::Ui, unit: &mut TemperatureUnit) {
    egui::ComboBox::from_id_source("condensate_t_unit")
        .selected_text(unit.symbol())
        .show_ui(ui, |ui| {
            for u in TemperatureUnit::ALL {
                ui.selectable_value(unit, u, u.symbol());
            }
        });
}

/// 막대 두 개짜리 비교 차트를 직접 그린다.
fn bar_chart(ui: &mut egui::Ui, title: &str, labels: [&str; 2], values: [f64; 2]) {
    ui.vertical(|ui| {
        ui.strong(title);
        let size = egui::vec2(320.0, 220.0);
        let (rect, _) = ui.allocate_exact_size(size, egui::Sense::hover());
        let painter = ui.painter_at(rect);
        let visuals = ui.visuals();
        painter.rect_filled(rect, 4.0, visuals.extreme_bg_color);

        let text_color = visuals.text_color();
        let max = values.iter().fold(0.0_f64, |m, v| m.max(v.abs()));
        let plot_top = rect.top() + 24.0;
        let plot_bottom = rect.bottom() - 24.0;
        let plot_h = plot_bottom - plot_top;
        let bar_w = rect.width() / 5.0;
        let colors = [
            egui::Color32::from_rgb(214, 120, 60),
            egui::Color32::from_rgb(70, 140, 210),
        ];
        for (i, (&label, &value)) in labels.iter().zip(values.iter()).enumerate() {
            let x_center = rect.left() + rect.width() * (0.3 + 0.4 * i as f32);
            let ratio = if max > 0.0 { (value.max(0.0) / max) as f32 } else { 0.0 };
            let bar = egui::Rect::from_min_max(
                egui::pos2(x_center - bar_w / 2.0, plot_bottom - plot_h * ratio),
                egui::pos2(x_center + bar_w / 2.0, plot_bottom),
            );
            painter.rect_filled(bar, 2.0, colors[i]);
            painter.text(
                egui::pos2(x_center, bar.top() - 2.0),
                egui::Align2::CENTER_BOTTOM,
                format!("{value:.0}"),
                egui::FontId::proportional(12.0),
                text_color,
            );
            painter.text(
                egui::pos2(x_center, plot_bottom + 4.0),
                egui::Align2::CENTER_TOP,
                label,
                egui::FontId::proportional(12.0),
                text_color,
            );
        }
    });
}
