//! Scenario validation logic.

use crate::schema::{ActuatorKindDef, LATEST_VERSION, LoadDef, Project};
use ps_piston::ActuatorConfig;

#[derive(thiserror::Error, Debug)]
pub enum ValidationError {
    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Invalid geometry: {reason}")]
    InvalidGeometry { reason: String },

    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },
}

fn invalid(field: &str, value: f64, reason: &str) -> ValidationError {
    ValidationError::InvalidValue {
        field: field.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

pub fn validate_project(project: &Project) -> Result<(), ValidationError> {
    if project.version == 0 || project.version > LATEST_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: project.version,
        });
    }

    let params = crate::compile::piston_params(&project.actuator);
    let config = ActuatorConfig::from_params(&params).map_err(|e| {
        ValidationError::InvalidGeometry {
            reason: e.to_string(),
        }
    })?;
    config
        .check_position(ps_core::imperial::in_to_m(params.starting_position))
        .map_err(|e| ValidationError::InvalidGeometry {
            reason: e.to_string(),
        })?;

    if let ActuatorKindDef::SingleAction {
        spring_constant_n_per_m,
        spring_rest_force_n,
    } = project.actuator.kind
    {
        if !spring_constant_n_per_m.is_finite() || spring_constant_n_per_m < 0.0 {
            return Err(invalid(
                "actuator.kind.spring_constant_n_per_m",
                spring_constant_n_per_m,
                "must be finite and non-negative",
            ));
        }
        if !spring_rest_force_n.is_finite() {
            return Err(invalid(
                "actuator.kind.spring_rest_force_n",
                spring_rest_force_n,
                "must be finite",
            ));
        }
    }

    match project.load {
        LoadDef::Direct { force, mass } => {
            if !force.is_finite() {
                return Err(invalid("load.force", force, "must be finite"));
            }
            if !mass.is_finite() || mass < 0.0 {
                return Err(invalid("load.mass", mass, "must be finite and non-negative"));
            }
        }
        LoadDef::Translator { mass, angle_deg } => {
            if !mass.is_finite() || mass < 0.0 {
                return Err(invalid("load.mass", mass, "must be finite and non-negative"));
            }
            if !angle_deg.is_finite() {
                return Err(invalid("load.angle_deg", angle_deg, "must be finite"));
            }
        }
    }

    if project.ports.is_empty() {
        return Err(ValidationError::InvalidValue {
            field: "ports".to_string(),
            value: "[]".to_string(),
            reason: "at least one segment is required".to_string(),
        });
    }
    for (i, seg) in project.ports.iter().enumerate() {
        for (name, v) in [
            ("t_start_s", seg.t_start_s),
            ("ext_pressure", seg.ext_pressure),
            ("ret_pressure", seg.ret_pressure),
        ] {
            if !v.is_finite() {
                return Err(invalid(&format!("ports[{i}].{name}"), v, "must be finite"));
            }
        }
        if i > 0 && seg.t_start_s <= project.ports[i - 1].t_start_s {
            return Err(invalid(
                &format!("ports[{i}].t_start_s"),
                seg.t_start_s,
                "start times must be strictly increasing",
            ));
        }
    }

    let run = &project.run;
    if !(run.dt_s > 0.0 && run.dt_s.is_finite()) {
        return Err(invalid("run.dt_s", run.dt_s, "must be positive"));
    }
    if !(run.t_end_s >= 0.0 && run.t_end_s.is_finite()) {
        return Err(invalid("run.t_end_s", run.t_end_s, "must be non-negative"));
    }
    if run.record_every == 0 {
        return Err(invalid("run.record_every", 0.0, "must be positive"));
    }
    if run.max_steps == 0 {
        return Err(invalid("run.max_steps", 0.0, "must be positive"));
    }

    Ok(())
}
