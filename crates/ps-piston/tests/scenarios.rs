//! Integration test: reference actuator scenarios.
//!
//! Geometry for every scenario: 1.25 in bore, 0.25 in rod, 8 in chamber,
//! travel 0.5..7.5 in, 0.1 lbm bore, Cv 0.5.
//!
//! - Dual-action cylinder extends against a light load and stops at full stroke
//! - Its early trace matches reference values step for step
//! - Spring-return cylinder with both ports at atmosphere retracts and stays retracted
//! - Orifice with no pressure differential leaves the chamber untouched
//! - Translator on an incline accelerates the piston by its gravity load

use ps_core::UnitSystem;
use ps_core::units::constants::{ATMOSPHERIC_PSI, G0_MPS2};
use ps_piston::{
    HardStop, LinearTranslator, LoadContext, Piston, PistonParams, SpringReturn, StepInputs,
};

fn params(starting_position: f64) -> PistonParams {
    PistonParams {
        bore_diameter: 1.25,
        rod_diameter: 0.25,
        min_position: 0.5,
        max_position: 7.5,
        bore_mass: 0.1,
        length: 8.0,
        starting_position,
        flow_coefficient: 0.5,
    }
}

fn spring() -> SpringReturn {
    SpringReturn {
        spring_constant: 100.0,
        rest_force: 10.0,
    }
}

#[test]
fn dual_action_extends_to_full_stroke_and_halts() {
    let mut piston = Piston::dual_action(&params(0.5)).unwrap();
    let max = piston.config().max_position();
    let inputs = StepInputs {
        load_force: 0.1,
        load_mass: 3.0,
        ext_port_pressure: 120.0,
        ret_port_pressure: ATMOSPHERIC_PSI,
    };

    let mut previous = piston.state().position;
    let mut first_contact = None;

    for step in 0..1000 {
        let stop = piston.update(0.001, inputs, UnitSystem::Imperial);
        let position = piston.state().position;

        if first_contact.is_none() {
            assert!(
                position >= previous,
                "piston must extend monotonically before reaching the stop (step {step})"
            );
            if stop == Some(HardStop::Extended) {
                first_contact = Some(step);
            }
        }
        previous = position;
    }

    let first_contact = first_contact.expect("piston never reached full stroke");
    assert!(first_contact < 100, "stroke took {first_contact} steps");

    assert_eq!(piston.state().position, max);
    assert_eq!(piston.state().velocity, 0.0);

    // Extension chamber charged toward supply, rod side vented back to atmosphere
    let p = piston.pressures(UnitSystem::Imperial);
    assert!((p.ext - 120.0).abs() < 0.1, "ext pressure {}", p.ext);
    assert!((p.ret - ATMOSPHERIC_PSI).abs() < 0.1, "ret pressure {}", p.ret);
}

#[test]
fn dual_action_trace_matches_reference_values() {
    let mut piston = Piston::dual_action(&params(0.5)).unwrap();
    let inputs = StepInputs {
        load_force: 0.1,
        load_mass: 3.0,
        ext_port_pressure: 120.0,
        ret_port_pressure: ATMOSPHERIC_PSI,
    };
    let close = |actual: f64, expected: f64| (actual - expected).abs() <= 1e-9 * expected.abs();

    // (step count, position in, velocity m/s, ext psi, ret psi)
    let reference = [
        (
            10,
            1.466647107844453,
            4.3208436191494535,
            104.92406620363488,
            16.644863715762163,
        ),
        (
            20,
            3.957531964481356,
            7.8351787515170255,
            94.32998378341233,
            24.782024833557358,
        ),
    ];

    let mut steps = 0;
    for (n, position, velocity, ext, ret) in reference {
        while steps < n {
            piston.update(0.001, inputs, UnitSystem::Imperial);
            steps += 1;
        }
        let p = piston.pressures(UnitSystem::Imperial);
        let x = piston.position(UnitSystem::Imperial);
        let v = piston.velocity(UnitSystem::Si);
        assert!(close(x, position), "step {n}: position {x}");
        assert!(close(v, velocity), "step {n}: velocity {v}");
        assert!(close(p.ext, ext), "step {n}: ext pressure {}", p.ext);
        assert!(close(p.ret, ret), "step {n}: ret pressure {}", p.ret);
    }
}

#[test]
fn single_action_stays_retracted_without_supply() {
    let mut piston = Piston::single_action(&params(0.5), spring()).unwrap();
    let min = piston.config().min_position();
    let inputs = StepInputs {
        load_force: 0.0,
        load_mass: 0.0,
        ext_port_pressure: ATMOSPHERIC_PSI,
        ret_port_pressure: ATMOSPHERIC_PSI,
    };

    for _ in 0..2000 {
        piston.update(0.001, inputs, UnitSystem::Imperial);
        assert_eq!(piston.state().position, min);
        assert_eq!(piston.state().velocity, 0.0);
    }
}

#[test]
fn single_action_spring_returns_from_mid_stroke() {
    let mut piston = Piston::single_action(&params(4.0), spring()).unwrap();
    let min = piston.config().min_position();
    let inputs = StepInputs {
        load_force: 0.0,
        load_mass: 0.0,
        ext_port_pressure: ATMOSPHERIC_PSI,
        ret_port_pressure: ATMOSPHERIC_PSI,
    };

    for _ in 0..3000 {
        piston.update(0.001, inputs, UnitSystem::Imperial);
    }

    assert_eq!(piston.state().position, min);
    assert_eq!(piston.state().velocity, 0.0);
}

#[test]
fn equal_port_and_chamber_pressure_is_a_no_op() {
    let piston = Piston::dual_action(&params(2.0)).unwrap();
    for &(p, volume, dt) in &[
        (101_352.972, 1.0e-6, 1.0e-3),
        (827_371.2, 4.2e-5, 0.5),
        (1.0, 1.0e-12, 1.0e-9),
        (0.0, 7.0, 3.0),
    ] {
        let out = piston.calc_flow(dt, p, volume, p);
        assert_eq!(out.to_bits(), p.to_bits());
    }
}

#[test]
fn translator_gravity_load_drives_acceleration() {
    let mut piston = Piston::dual_action(&params(4.0)).unwrap();
    let bore_mass = piston.config().bore_mass();
    let pressure_force = piston.net_pressure_force();

    let load_mass = 20.0;
    let angle = 30.0_f64.to_radians();
    let load = LoadContext::new(load_mass, angle, UnitSystem::Si).unwrap();

    let mut translator = LinearTranslator::new(&mut piston, load);

    let expected_force = load_mass * angle.sin() * G0_MPS2;
    assert!((translator.load_force() - expected_force).abs() < 1e-9);

    let expected_acceleration = (pressure_force - expected_force) / (bore_mass + load_mass);
    let acceleration = translator.net_acceleration();
    assert!(acceleration < 0.0, "heavy incline load must pull the rod in");
    assert!((acceleration - expected_acceleration).abs() < 1e-9);

    // Ports at atmosphere leave chamber pressures unchanged on the first step
    translator.update(0.001, ATMOSPHERIC_PSI, ATMOSPHERIC_PSI, UnitSystem::Imperial);
    let velocity = translator.piston().state().velocity;
    assert!((velocity - expected_acceleration * 0.001).abs() < 1e-12);
    assert!(translator.position(UnitSystem::Imperial) < 4.0);
}

#[test]
fn translator_flat_mount_only_feels_rod_area_imbalance() {
    let mut piston = Piston::dual_action(&params(4.0)).unwrap();
    let load = LoadContext::new(5.0, 0.0, UnitSystem::Imperial).unwrap();
    let translator = LinearTranslator::new(&mut piston, load);

    assert_eq!(translator.load_force(), 0.0);
    // Atmosphere on the full bore vs the annulus pushes outward
    assert!(translator.net_acceleration() > 0.0);
}
