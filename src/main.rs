use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use heat_pump_savings::app::{self, AppError, Session};
use heat_pump_savings::heating::{HeatingMethod, HeatingMethodKind};
use heat_pump_savings::i18n::keys;
use heat_pump_savings::report;
use heat_pump_savings::savings::{CalculationInputs, CoolingRecovery, OperatingSchedule};
use heat_pump_savings::ui_cli;
use heat_pump_savings::units::{to_bar_abs, PressureMode, PressureUnit};

#[derive(Parser)]
#[command(name = "heat_pump_savings_cli")]
#[command(about = "Heat pump savings calculator - boiler vs heat pump operating cost and CO2", long_about = None)]
struct Cli {
    /// Config file (created with defaults when missing)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Fuel database file (.csv or .toml)
    #[arg(long, global = true)]
    fuel_db: Option<PathBuf>,
    /// Language code (auto, en, ko)
    #[arg(long, global = true)]
    lang: Option<String>,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive menu (default)
    Interactive,
    /// Run one calculation from flags or an inputs file
    Calc(CalcArgs),
    /// List the active fuel database
    Fuels,
    /// Look up saturated steam enthalpy at a pressure
    Steam {
        /// Pressure value
        pressure: f64,
        /// Pressure unit (bar, kPa, MPa, kg/cm2, psi)
        #[arg(long, default_value = "bar", value_parser = parse_pressure_unit)]
        unit: PressureUnit,
        /// Treat the pressure as gauge
        #[arg(long)]
        gauge: bool,
    },
}

#[derive(Args)]
struct CalcArgs {
    /// Heating method: steam, capacity, electric, boiler
    #[arg(long, default_value = "capacity")]
    method: String,
    /// Steam flow (kg/hr)
    #[arg(long, default_value_t = 1000.0)]
    steam_flow: f64,
    /// Steam inlet pressure (bar abs)
    #[arg(long, default_value_t = 1.0)]
    steam_pressure: f64,
    /// Condensate temperature (°C)
    #[arg(long, default_value_t = 95.0)]
    condensate_temp: f64,
    /// Heating capacity or electric heater rating (kW)
    #[arg(long, default_value_t = 462.0)]
    capacity: f64,
    /// Boiler capacity (kcal/hr)
    #[arg(long, default_value_t = 100000.0)]
    boiler_kcal: f64,
    /// Fuel name from the active database
    #[arg(long, default_value = "Biomass")]
    fuel: String,
    /// Heat pump COP (config default when omitted)
    #[arg(long)]
    cop: Option<f64>,
    /// Operating hours per day
    #[arg(long)]
    hours: Option<f64>,
    /// Operating days per year
    #[arg(long)]
    days: Option<f64>,
    /// Electricity cost per kWh
    #[arg(long)]
    elec_cost: Option<f64>,
    /// Boiler labour cost per day
    #[arg(long, default_value_t = 0.0)]
    labour: f64,
    /// Boiler connected electrical load (kW)
    #[arg(long, default_value_t = 0.0)]
    connected_load: f64,
    /// Enables cooling recovery with this chiller efficiency (ikW/TR)
    #[arg(long)]
    cooling_ikw_per_tr: Option<f64>,
    /// Ambient temperature (°C)
    #[arg(long, default_value_t = 30.0)]
    ambient: f64,
    /// Hot water temperature (°C)
    #[arg(long, default_value_t = 90.0)]
    hot_water: f64,
    /// TOML inputs file; the other calculation flags are ignored when given
    #[arg(long)]
    inputs: Option<PathBuf>,
    /// Export the report (.csv or .json)
    #[arg(long)]
    export: Option<PathBuf>,
    /// Export only the results table as CSV (Parameter,Value)
    #[arg(long)]
    export_results: Option<PathBuf>,
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 CLI 애플리케이션을 실행한다.
fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(err) = try_run(cli) {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn try_run(cli: Cli) -> Result<(), AppError> {
    let mut session = Session::open(
        cli.config.as_deref(),
        cli.fuel_db.as_deref(),
        cli.lang.as_deref(),
    )?;
    match cli.command.unwrap_or(Commands::Interactive) {
        Commands::Interactive => app::run(&mut session),
        Commands::Calc(args) => cmd_calc(&session, &args),
        Commands::Fuels => {
            ui_cli::print_fuels(&session.fuels, &session.config.currency, &session.tr);
            Ok(())
        }
        Commands::Steam {
            pressure,
            unit,
            gauge,
        } => {
            let mode = if gauge {
                PressureMode::Gauge
            } else {
                PressureMode::Absolute
            };
            ui_cli::print_steam_lookup(to_bar_abs(pressure, unit, mode), &session.tr)
        }
    }
}

fn parse_pressure_unit(s: &str) -> Result<PressureUnit, String> {
    PressureUnit::parse(s).ok_or_else(|| format!("unknown pressure unit '{s}'"))
}

fn cmd_calc(session: &Session, args: &CalcArgs) -> Result<(), AppError> {
    let inputs = match &args.inputs {
        Some(path) => app::load_inputs_file(path)?,
        None => inputs_from_args(session, args)?,
    };
    let (_, report) = session.evaluate(&inputs)?;
    ui_cli::print_report(&report, &session.tr);
    if let Some(path) = &args.export {
        report::export_to_path(&report, path)?;
        println!("{} {}", session.tr.t(keys::RESULT_EXPORTED), path.display());
    }
    if let Some(path) = &args.export_results {
        report::export_results_to_path(&report, path)?;
        println!("{} {}", session.tr.t(keys::RESULT_EXPORTED), path.display());
    }
    Ok(())
}

fn inputs_from_args(session: &Session, args: &CalcArgs) -> Result<CalculationInputs, AppError> {
    let kind: HeatingMethodKind = args.method.parse()?;
    let method = match kind {
        HeatingMethodKind::SteamFlow => HeatingMethod::SteamFlow {
            steam_flow_kg_per_hr: args.steam_flow,
            steam_pressure_bar_abs: args.steam_pressure,
            condensate_temp_c: args.condensate_temp,
        },
        HeatingMethodKind::DirectCapacity => HeatingMethod::DirectCapacity {
            capacity_kw: args.capacity,
        },
        HeatingMethodKind::ElectricHeater => HeatingMethod::ElectricHeater {
            rating_kw: args.capacity,
        },
        HeatingMethodKind::BoilerCapacity => HeatingMethod::BoilerCapacity {
            boiler_kcal_per_hr: args.boiler_kcal,
        },
    };
    let fuel = session.fuels.get(&args.fuel)?.clone();

    let mut inputs = session.default_inputs(method, fuel);
    inputs.ambient_temp_c = args.ambient;
    inputs.hot_water_temp_c = args.hot_water;
    if let Some(cop) = args.cop {
        inputs.cop = cop;
    }
    inputs.schedule = OperatingSchedule::new(
        args.hours.unwrap_or(inputs.schedule.hours_per_day),
        args.days.unwrap_or(inputs.schedule.days_per_year),
    );
    if let Some(cost) = args.elec_cost {
        inputs.electricity_cost = cost;
    }
    inputs.labour_cost_per_day = args.labour;
    inputs.boiler_connected_load_kw = args.connected_load;
    inputs.cooling = args
        .cooling_ikw_per_tr
        .map(|chiller_ikw_per_tr| CoolingRecovery { chiller_ikw_per_tr });
    Ok(inputs)
}
