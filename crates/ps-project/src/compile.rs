//! Turn a scenario file into simulation objects and run it.

use crate::ProjectResult;
use crate::schema::{ActuatorDef, ActuatorKindDef, LoadDef, Project};
use ps_piston::{LinearTranslator, LoadContext, Piston, PistonParams, SpringReturn};
use ps_sim::{
    PistonPlant, PortSchedule, PortSegment, SimOptions, SimRecord, TranslatorPlant, run_sim,
};
use tracing::info;

pub fn piston_params(def: &ActuatorDef) -> PistonParams {
    PistonParams {
        bore_diameter: def.bore_diameter_in,
        rod_diameter: def.rod_diameter_in,
        min_position: def.min_position_in,
        max_position: def.max_position_in,
        bore_mass: def.bore_mass_lb,
        length: def.length_in,
        starting_position: def.starting_position_in,
        flow_coefficient: def.flow_coefficient,
    }
}

pub fn build_piston(def: &ActuatorDef) -> ProjectResult<Piston> {
    let params = piston_params(def);
    let piston = match def.kind {
        ActuatorKindDef::DualAction => Piston::dual_action(&params)?,
        ActuatorKindDef::SingleAction {
            spring_constant_n_per_m,
            spring_rest_force_n,
        } => Piston::single_action(
            &params,
            SpringReturn {
                spring_constant: spring_constant_n_per_m,
                rest_force: spring_rest_force_n,
            },
        )?,
    };
    Ok(piston)
}

pub fn build_schedule(project: &Project) -> ProjectResult<PortSchedule> {
    let segments = project
        .ports
        .iter()
        .map(|seg| PortSegment {
            t_start: seg.t_start_s,
            ext_pressure: seg.ext_pressure,
            ret_pressure: seg.ret_pressure,
        })
        .collect();
    Ok(PortSchedule::new(segments)?)
}

pub fn sim_options(project: &Project) -> SimOptions {
    SimOptions {
        dt: project.run.dt_s,
        t_end: project.run.t_end_s,
        max_steps: project.run.max_steps,
        record_every: project.run.record_every,
    }
}

/// Validate, build and run a scenario from its initial state.
pub fn run_project(project: &Project) -> ProjectResult<SimRecord> {
    crate::validate_project(project)?;

    let mut piston = build_piston(&project.actuator)?;
    let schedule = build_schedule(project)?;
    let opts = sim_options(project);

    info!(
        name = %project.name,
        kind = piston.kind().label(),
        "running scenario"
    );

    let record = match project.load {
        LoadDef::Direct { force, mass } => {
            let mut plant = PistonPlant::new(piston, schedule, force, mass, project.units)?;
            run_sim(&mut plant, &opts)?
        }
        LoadDef::Translator { mass, angle_deg } => {
            let load = LoadContext::new(mass, angle_deg.to_radians(), project.units)?;
            let mut plant = TranslatorPlant {
                translator: LinearTranslator::new(&mut piston, load),
                schedule,
                units: project.units,
            };
            run_sim(&mut plant, &opts)?
        }
    };

    Ok(record)
}
