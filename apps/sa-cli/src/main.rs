use clap::{Parser, Subcommand};
use sa_atmosphere::report::{conditions_table, point_report, sweep_table};
use sa_atmosphere::{
    AtmosphereError, AtmosphereModel, AtmosphericProperties, FlightCondition, SweepDefinition,
    SweepError, SweepPolicy, SweepResult, SweepVariable, execute_altitude_sweep_par,
    execute_defined_speed_sweep,
};
use serde::Serialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Parser)]
#[command(name = "sa-cli")]
#[command(about = "stdatmo CLI - 1976 Standard Atmosphere calculator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Report every quantity at one altitude
    Point {
        /// Geometric altitude in meters
        altitude_m: f64,
        /// Airspeed in m/s (adds dynamic pressure and Mach)
        #[arg(short = 'u', long)]
        speed: Option<f64>,
        /// Reference length in m (adds Reynolds number, requires --speed)
        #[arg(short = 'l', long, requires = "speed")]
        length: Option<f64>,
        /// Print JSON instead of a text report
        #[arg(long)]
        json: bool,
    },
    /// Evaluate a linear altitude sweep
    Sweep {
        /// First altitude in meters
        #[arg(long)]
        start: f64,
        /// Last altitude in meters
        #[arg(long)]
        end: f64,
        /// Number of points, both ends included
        #[arg(long, default_value_t = 11)]
        points: usize,
        /// Skip altitudes above the model ceiling instead of failing
        #[arg(long)]
        skip_out_of_domain: bool,
        /// Print JSON instead of a table
        #[arg(long, conflicts_with = "output")]
        json: bool,
        /// Output CSV file path (optional, defaults to a table on stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Flight conditions over a stepped airspeed range at one altitude
    Speeds {
        /// Geometric altitude in meters
        altitude_m: f64,
        /// First airspeed in m/s
        #[arg(long)]
        start: f64,
        /// Airspeed bound in m/s (exclusive)
        #[arg(long)]
        end: f64,
        /// Airspeed step in m/s
        #[arg(long, default_value_t = 5.0)]
        step: f64,
        /// Reference length in m (adds Reynolds number)
        #[arg(short = 'l', long)]
        length: Option<f64>,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

#[derive(Error, Debug)]
enum CliError {
    #[error(transparent)]
    Atmosphere(#[from] AtmosphereError),

    #[error(transparent)]
    Sweep(#[from] SweepError),

    #[error("JSON encoding failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

type CliResult<T> = Result<T, CliError>;

fn main() -> CliResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let model = AtmosphereModel::new();

    match cli.command {
        Commands::Point {
            altitude_m,
            speed,
            length,
            json,
        } => cmd_point(&model, altitude_m, speed, length, json),
        Commands::Sweep {
            start,
            end,
            points,
            skip_out_of_domain,
            json,
            output,
        } => {
            let policy = if skip_out_of_domain {
                SweepPolicy::Skip
            } else {
                SweepPolicy::Abort
            };
            cmd_sweep(&model, start, end, points, policy, json, output.as_deref())
        }
        Commands::Speeds {
            altitude_m,
            start,
            end,
            step,
            length,
            json,
        } => cmd_speeds(&model, altitude_m, start, end, step, length, json),
    }
}

#[derive(Serialize)]
struct PointOutput {
    properties: AtmosphericProperties,
    condition: Option<FlightCondition>,
}

fn cmd_point(
    model: &AtmosphereModel,
    altitude_m: f64,
    speed: Option<f64>,
    length: Option<f64>,
    json: bool,
) -> CliResult<()> {
    let state = model.evaluate(altitude_m)?;
    tracing::debug!(%state, "evaluated point");

    if json {
        let condition = speed
            .map(|u| FlightCondition::at(&state, u, length))
            .transpose()?;
        let output = PointOutput {
            properties: state.properties(),
            condition,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        print!("{}", point_report(&state, speed, length)?);
    }
    Ok(())
}

fn cmd_sweep(
    model: &AtmosphereModel,
    start: f64,
    end: f64,
    points: usize,
    policy: SweepPolicy,
    json: bool,
    output: Option<&Path>,
) -> CliResult<()> {
    let sweep_def = SweepDefinition::linear(SweepVariable::Altitude, start, end, points)?;
    tracing::info!(%sweep_def, ?policy, "running altitude sweep");

    let result = execute_altitude_sweep_par(model, &sweep_def.generate_points(), policy)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else if let Some(path) = output {
        std::fs::write(path, sweep_csv(&result)).map_err(|source| CliError::Write {
            path: path.to_path_buf(),
            source,
        })?;
        println!(
            "✓ Exported {} of {} points to {}",
            result.num_successful,
            result.altitudes_m.len(),
            path.display()
        );
    } else {
        print!("{}", sweep_table(&result));
    }
    Ok(())
}

fn cmd_speeds(
    model: &AtmosphereModel,
    altitude_m: f64,
    start: f64,
    end: f64,
    step: f64,
    length: Option<f64>,
    json: bool,
) -> CliResult<()> {
    let sweep_def = SweepDefinition::stepped(SweepVariable::Speed, start, end, step)?;
    tracing::info!(altitude_m, %sweep_def, "running speed sweep");

    let conditions = execute_defined_speed_sweep(model, altitude_m, &sweep_def, length)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&conditions)?);
    } else {
        let rows: Vec<Option<FlightCondition>> = conditions.into_iter().map(Some).collect();
        print!("{}", conditions_table(&rows));
    }
    Ok(())
}

fn sweep_csv(result: &SweepResult) -> String {
    let mut csv = String::from(
        "altitude_m,geopotential_km,temperature_k,pressure_pa,density_kg_m3,sound_speed_mps,dynamic_viscosity_pa_s\n",
    );
    for state in result.successful_states() {
        csv.push_str(&format!(
            "{},{},{},{},{},{},{}\n",
            state.altitude_m(),
            state.geopotential_km(),
            state.temperature(),
            state.pressure(),
            state.density(),
            state.sound_speed(),
            state.dynamic_viscosity()
        ));
    }
    csv
}
