use clap::{Parser, Subcommand};
use ps_core::UnitSystem;
use ps_core::units::constants::ATMOSPHERIC_PSI;
use ps_project::{
    ActuatorDef, ActuatorKindDef, LoadDef, PortSegmentDef, Project, ProjectResult, RunDef,
};
use ps_sim::SimRecord;
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "ps-cli")]
#[command(about = "PistonSim CLI - linear piston actuator simulation", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a scenario file
    Validate {
        /// Path to the scenario YAML or JSON file
        scenario_path: PathBuf,
    },
    /// Run a scenario and export its trace
    Run {
        /// Path to the scenario YAML or JSON file
        scenario_path: PathBuf,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Run the reference dual-action scenario (120 psi vs atmosphere, 1 ms steps, 1 s)
    Demo {
        #[command(flatten)]
        output: OutputArgs,
    },
}

#[derive(clap::Args)]
struct OutputArgs {
    /// Output CSV file path (optional, defaults to stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// Report in in/psi instead of m/Pa
    #[arg(long)]
    imperial: bool,
    /// Print a JSON summary instead of the trace
    #[arg(long)]
    json: bool,
}

impl OutputArgs {
    fn units(&self) -> UnitSystem {
        if self.imperial {
            UnitSystem::Imperial
        } else {
            UnitSystem::Si
        }
    }
}

#[derive(Serialize)]
struct RunSummary<'a> {
    name: &'a str,
    units: UnitSystem,
    steps: usize,
    t_end_s: f64,
    final_position: f64,
    final_velocity: f64,
    final_ext_pressure: f64,
    final_ret_pressure: f64,
    extended_at_s: Option<f64>,
    retracted_at_s: Option<f64>,
    stop_contacts: usize,
}

impl<'a> RunSummary<'a> {
    fn new(name: &'a str, record: &SimRecord, units: UnitSystem) -> Option<Self> {
        let (t, last) = record.last()?;
        Some(Self {
            name,
            units,
            steps: record.steps,
            t_end_s: t,
            final_position: units.length_from_si(last.position),
            final_velocity: units.length_from_si(last.velocity),
            final_ext_pressure: units.pressure_from_si(last.ext_pressure),
            final_ret_pressure: units.pressure_from_si(last.ret_pressure),
            extended_at_s: record.events.extended_at,
            retracted_at_s: record.events.retracted_at,
            stop_contacts: record.events.contacts,
        })
    }
}

fn main() -> ProjectResult<()> {
    // Initialize tracing; the trace itself may go to stdout
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { scenario_path } => cmd_validate(&scenario_path),
        Commands::Run {
            scenario_path,
            output,
        } => {
            let project = ps_project::load(&scenario_path)?;
            cmd_run(&project, &output)
        }
        Commands::Demo { output } => cmd_run(&demo_project(), &output),
    }
}

fn cmd_validate(scenario_path: &Path) -> ProjectResult<()> {
    println!("Validating scenario: {}", scenario_path.display());
    let project = ps_project::load(scenario_path)?;
    ps_project::validate_project(&project)?;
    println!("✓ Scenario is valid: {}", project.name);
    Ok(())
}

fn cmd_run(project: &Project, output: &OutputArgs) -> ProjectResult<()> {
    let units = output.units();
    let started = Instant::now();
    let record = ps_project::run_project(project)?;
    tracing::info!(
        elapsed_ms = started.elapsed().as_millis() as u64,
        "run complete"
    );

    if output.json {
        if let Some(summary) = RunSummary::new(&project.name, &record, units) {
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
        return Ok(());
    }

    let csv = record.to_csv(units);
    if let Some(path) = &output.output {
        std::fs::write(path, csv)?;
        println!(
            "✓ Exported {} samples to {}",
            record.t.len(),
            path.display()
        );
        print_summary(project, &record, units);
    } else {
        print!("{}", csv);
    }

    Ok(())
}

fn print_summary(project: &Project, record: &SimRecord, units: UnitSystem) {
    let Some(summary) = RunSummary::new(&project.name, record, units) else {
        return;
    };
    let (len, vel, pres) = units.labels();
    println!(
        "{} ({} steps, t = {:.4} s)",
        summary.name, summary.steps, summary.t_end_s
    );
    println!("  position:     {:.6} {}", summary.final_position, len);
    println!("  velocity:     {:.6} {}", summary.final_velocity, vel);
    println!(
        "  pressures:    ext {:.4} {pres}, ret {:.4} {pres}",
        summary.final_ext_pressure, summary.final_ret_pressure
    );
    match summary.extended_at_s {
        Some(t) => println!("  full stroke:  {:.4} s", t),
        None => println!("  full stroke:  not reached"),
    }
    if let Some(t) = summary.retracted_at_s {
        println!("  retracted:    {:.4} s", t);
    }
}

/// Dual-action cylinder pushing 3 lbm against 0.1 lbf on 120 psi supply.
fn demo_project() -> Project {
    Project {
        version: ps_project::LATEST_VERSION,
        name: "Dual-action demo".to_string(),
        actuator: ActuatorDef {
            bore_diameter_in: 1.25,
            rod_diameter_in: 0.25,
            min_position_in: 0.5,
            max_position_in: 7.5,
            bore_mass_lb: 0.1,
            length_in: 8.0,
            starting_position_in: 0.5,
            flow_coefficient: 0.5,
            kind: ActuatorKindDef::DualAction,
        },
        load: LoadDef::Direct {
            force: 0.1,
            mass: 3.0,
        },
        units: UnitSystem::Imperial,
        ports: vec![PortSegmentDef {
            t_start_s: 0.0,
            ext_pressure: 120.0,
            ret_pressure: ATMOSPHERIC_PSI,
        }],
        run: RunDef {
            dt_s: 0.001,
            t_end_s: 1.0,
            record_every: 1,
            max_steps: 1_000_000,
        },
    }
}
