//! End-to-end checks of statics, envelope and capacity against hand calculations.

use std::path::PathBuf;

use approx::{assert_abs_diff_eq, assert_relative_eq};

use steel_core::analysis::{BeamSolver, Envelope};
use steel_core::config::{ActionsCode, ProjectConfig, SteelDesignCode};
use steel_core::design::{BracingTopology, CheckStatus, Curvature};
use steel_core::file_io::load_job;
use steel_core::loads::{combinations, Combination, DesignMethod, Load, LoadCase};
use steel_core::materials::builtin_common_shapes;
use steel_core::model::{Beam, SupportCondition};
use steel_core::workflow::{run_design, BeamInput, BracingInput, DesignJob};

fn demo(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../demos").join(name)
}

fn dead_only() -> Combination {
    Combination::new("1.0D", "D").with_factor(LoadCase::Dead, 1.0)
}

fn dead_and_live() -> Combination {
    Combination::new("1.0D+1.0L", "D + L")
        .with_factor(LoadCase::Dead, 1.0)
        .with_factor(LoadCase::Live, 1.0)
}

#[test]
fn midspan_point_load_matches_pl_over_4() {
    let beam = Beam::new("P", 6.0, SupportCondition::Simple)
        .unwrap()
        .with_loads([Load::point(LoadCase::Dead, 40.0, 3.0).unwrap()])
        .unwrap();

    let result = BeamSolver::new().with_sample_points(601).analyze(&beam, &dead_only()).unwrap();

    assert_abs_diff_eq!(result.reactions.left, 20.0, epsilon = 1e-9);
    assert_abs_diff_eq!(result.reactions.right, 20.0, epsilon = 1e-9);
    assert_relative_eq!(result.moment_max_abs, 40.0 * 6.0 / 4.0, max_relative = 1e-9);
    assert_relative_eq!(result.shear_max_abs, 20.0, max_relative = 1e-9);
}

#[test]
fn full_uniform_load_matches_wl2_over_8() {
    let beam = Beam::new("W", 8.0, SupportCondition::Simple)
        .unwrap()
        .with_loads([Load::distributed(LoadCase::Dead, 10.0, 0.0, 8.0).unwrap()])
        .unwrap();

    let result = BeamSolver::new().with_sample_points(801).analyze(&beam, &dead_only()).unwrap();

    assert_abs_diff_eq!(result.reactions.left, 40.0, epsilon = 1e-9);
    assert_relative_eq!(result.moment_max_abs, 10.0 * 64.0 / 8.0, max_relative = 1e-9);
    assert_relative_eq!(result.shear_max_abs, 40.0, max_relative = 1e-9);

    // Shear returns to -R2 at the right support
    let (x_end, v_end) = *result.shear_diagram.last().unwrap();
    assert_abs_diff_eq!(x_end, 8.0, epsilon = 1e-12);
    assert_abs_diff_eq!(v_end, -40.0, epsilon = 1e-9);
}

#[test]
fn cantilever_tip_and_uniform_load() {
    let beam = Beam::new("C", 3.0, SupportCondition::Cantilever)
        .unwrap()
        .with_loads([
            Load::point(LoadCase::Dead, 10.0, 3.0).unwrap(),
            Load::distributed(LoadCase::Dead, 4.0, 0.0, 3.0).unwrap(),
        ])
        .unwrap();

    let result = BeamSolver::new().analyze(&beam, &dead_only()).unwrap();

    // R = P + wL, M = -(PL + wL²/2)
    assert_abs_diff_eq!(result.reactions.left, 22.0, epsilon = 1e-9);
    assert_abs_diff_eq!(result.reactions.right, 0.0, epsilon = 1e-12);
    assert_abs_diff_eq!(result.reactions.fixed_moment, -48.0, epsilon = 1e-9);
    assert_relative_eq!(result.moment_max_abs, 48.0, max_relative = 1e-9);
    assert_relative_eq!(result.shear_max_abs, 22.0, max_relative = 1e-9);

    // Free end carries no moment
    let (_, m_tip) = *result.moment_diagram.last().unwrap();
    assert_abs_diff_eq!(m_tip, 0.0, epsilon = 1e-9);
}

#[test]
fn overlapping_partial_loads_superpose() {
    // D = 10 on [0, 4], L = 6 on [2, 8]
    // R1 = 40·6/8 + 36·3/8 = 43.5, R2 = 40·2/8 + 36·5/8 = 32.5
    let beam = Beam::new("O", 8.0, SupportCondition::Simple)
        .unwrap()
        .with_loads([
            Load::distributed(LoadCase::Dead, 10.0, 0.0, 4.0).unwrap(),
            Load::distributed(LoadCase::Live, 6.0, 2.0, 8.0).unwrap(),
        ])
        .unwrap();

    let result = BeamSolver::new().with_sample_points(801).analyze(&beam, &dead_and_live()).unwrap();

    assert_abs_diff_eq!(result.reactions.left, 43.5, epsilon = 1e-9);
    assert_abs_diff_eq!(result.reactions.right, 32.5, epsilon = 1e-9);

    // M(4) = 43.5·4 - 40·2 - 12·1 = 82
    let (x, m) = result.moment_diagram[400];
    assert_abs_diff_eq!(x, 4.0, epsilon = 1e-12);
    assert_abs_diff_eq!(m, 82.0, epsilon = 1e-9);

    // V = 55.5 - 16x vanishes at x = 3.46875, M there = 84.2578125
    assert_relative_eq!(result.moment_max_abs, 84.2578125, max_relative = 1e-4);
    assert_relative_eq!(result.shear_max_abs, 43.5, max_relative = 1e-9);
}

#[test]
fn excluded_cases_do_not_contribute() {
    let dead = Load::distributed(LoadCase::Dead, 5.0, 0.0, 8.0).unwrap();
    let with_live = Beam::new("X", 8.0, SupportCondition::Simple)
        .unwrap()
        .with_loads([dead.clone(), Load::point(LoadCase::Live, 50.0, 2.0).unwrap()])
        .unwrap();
    let without_live = Beam::new("X", 8.0, SupportCondition::Simple)
        .unwrap()
        .with_loads([dead])
        .unwrap();

    let solver = BeamSolver::new();
    let a = solver.analyze(&with_live, &dead_only()).unwrap();
    let b = solver.analyze(&without_live, &dead_only()).unwrap();
    assert_eq!(a, b);
}

#[test]
fn repeated_analysis_is_identical() {
    let beam = Beam::new("R", 7.5, SupportCondition::Simple)
        .unwrap()
        .with_loads([
            Load::point(LoadCase::Dead, 12.0, 1.5).unwrap(),
            Load::distributed(LoadCase::Live, 3.0, 2.0, 6.0).unwrap(),
        ])
        .unwrap();

    let solver = BeamSolver::new();
    let first = solver.analyze(&beam, &dead_and_live()).unwrap();
    let second = solver.analyze(&beam, &dead_and_live()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn envelope_over_ntc_combinations() {
    let beam = Beam::new("N", 6.0, SupportCondition::Simple)
        .unwrap()
        .with_loads([
            Load::distributed(LoadCase::Dead, 4.0, 0.0, 6.0).unwrap(),
            Load::distributed(LoadCase::Live, 2.0, 0.0, 6.0).unwrap(),
        ])
        .unwrap();

    let combos = combinations(ActionsCode::NtcAcciones2023, DesignMethod::Lrfd).unwrap();
    let env = steel_core::analysis::envelope(&BeamSolver::new(), &beam, &combos).unwrap();

    // 1.3·4 + 1.5·2 = 8.2 kN/m
    assert_eq!(env.moment_combination, "NTC-2");
    assert_relative_eq!(env.mu, 8.2 * 36.0 / 8.0, max_relative = 1e-3);
    assert_relative_eq!(env.vu, 8.2 * 3.0, max_relative = 1e-9);
}

#[test]
fn empty_result_set_has_no_envelope() {
    assert!(Envelope::from_results(&[]).is_err());
}

fn simple_job(live: f64) -> DesignJob {
    DesignJob {
        config: ProjectConfig::new("Pipeline", "T-01"),
        beam: BeamInput {
            label: "B-1".to_string(),
            length: 8.0,
            support: SupportCondition::Simple,
            loads: vec![
                Load::distributed(LoadCase::Dead, 5.0, 0.0, 8.0).unwrap(),
                Load::distributed(LoadCase::Live, live, 0.0, 8.0).unwrap(),
                Load::point(LoadCase::Dead, 15.0, 4.0).unwrap(),
            ],
            section: "W18X35".to_string(),
            material: "A992".to_string(),
        },
        bracing: BracingInput {
            unbraced_length: 4.0,
            topology: BracingTopology::Point,
            curvature: Curvature::Single,
        },
        column: None,
    }
}

#[test]
fn heavier_live_load_flips_flexure_to_exceeds() {
    let db = builtin_common_shapes();

    let light = run_design(&simple_job(12.0), &db).unwrap();
    assert_eq!(light.flexure.status, CheckStatus::Ok);

    // wu = 1.2·5 + 1.6·40 = 70, Mu = 70·64/8 + 18·8/4 = 596 kNm > 338.4 kNm
    let heavy = run_design(&simple_job(40.0), &db).unwrap();
    assert_relative_eq!(heavy.envelope.mu, 596.0, max_relative = 1e-3);
    assert_eq!(heavy.flexure.status, CheckStatus::Exceeds);
    assert!(!heavy.passes());
    assert!(heavy.governing_ratio() > 1.0);
}

#[test]
fn unsupported_code_and_method_pairs() {
    let db = builtin_common_shapes();

    let mut job = simple_job(12.0);
    job.config = job
        .config
        .with_codes(ActionsCode::NtcAcciones2023, SteelDesignCode::Aisc360_22)
        .with_method(DesignMethod::Asd);
    let err = run_design(&job, &db).unwrap_err();
    assert!(err.is_configuration());
    assert_eq!(err.error_code(), "UNSUPPORTED_CONFIGURATION");

    let mut job = simple_job(12.0);
    job.config = job.config.with_codes(ActionsCode::Asce7_22, SteelDesignCode::NtcAcero2020);
    assert!(run_design(&job, &db).unwrap_err().is_configuration());

    let mut job = simple_job(12.0);
    job.beam.support = SupportCondition::FixedFixed;
    assert!(run_design(&job, &db).unwrap_err().is_configuration());
}

#[test]
fn warehouse_demo_job() {
    let job = load_job(&demo("warehouse_beam.json")).unwrap();
    let report = run_design(&job, &builtin_common_shapes()).unwrap();

    assert_eq!(report.basis, "ASCE 7-22 / AISC 360-22 LRFD");
    assert_eq!(report.envelope.moment_combination, "LRFD-2");
    assert_relative_eq!(report.envelope.vu, 109.8, max_relative = 1e-9);
    assert_relative_eq!(report.flexure.available, 338.36, max_relative = 1e-3);
    assert!(report.passes());

    let column = report.column_bracing.unwrap();
    assert_relative_eq!(column.strength, 15.0, max_relative = 1e-9);
    assert_relative_eq!(column.stiffness, 4000.0, max_relative = 1e-9);
}

#[test]
fn imperial_cantilever_demo_job() {
    let job = load_job(&demo("canopy_cantilever_asd.json")).unwrap();
    let report = run_design(&job, &builtin_common_shapes()).unwrap();

    // D + S governs: w = 0.75 klf, M = 0.75·100/2 + 1.5·10 = 52.5 kip-ft
    assert_eq!(report.envelope.moment_combination, "ASD-3b");
    assert_relative_eq!(report.envelope.mu, 52.5, max_relative = 1e-9);
    assert_relative_eq!(report.envelope.vu, 9.0, max_relative = 1e-9);

    // W12X26: Mn = 50·37.2/12 = 155 kip-ft, Vn = 0.6·50·12.2·0.23 = 84.18 kips
    assert_relative_eq!(report.flexure.nominal, 155.0, max_relative = 1e-9);
    assert_relative_eq!(report.flexure.available, 155.0 / 1.67, max_relative = 1e-9);
    assert_relative_eq!(report.shear.nominal, 84.18, max_relative = 1e-9);
    assert!(report.passes());
    assert!(report.column_bracing.is_none());
}
