use approx::assert_abs_diff_eq;
use well_trajectory::common::units::radius_of_curvature;
use well_trajectory::common::{Discretization, DomainError, Geometry, GeometryWarning};
use well_trajectory::jtype::{self, JBranch, JParameters};

const EPS: f64 = 1e-6;

fn reference() -> JParameters {
    JParameters {
        bur_deg_100ft: 1.5,
        tvd_ft: 9000.0,
        kop_ft: 2000.0,
        displacement_ft: 3000.0,
    }
}

#[test]
fn reference_well_matches_closed_form_values() {
    let g = jtype::solve(&reference()).expect("solve");

    assert_eq!(g.branch, JBranch::TargetWithinRadius);
    assert_abs_diff_eq!(g.radius_ft, 3819.718_634_205_488, epsilon = EPS);
    assert_abs_diff_eq!(g.hypotenuse_ft, 7047.832_194_317_889, epsilon = EPS);
    assert_abs_diff_eq!(g.theta_deg, 6.679_069_052_775_937, epsilon = EPS);
    assert_abs_diff_eq!(g.beta_deg, 57.182_105_202_518_19, epsilon = EPS);
    assert_abs_diff_eq!(g.alpha_deg, 26.138_825_744_705_86, epsilon = EPS);
    assert_abs_diff_eq!(g.chord_x_ft, 390.645_487_577_894_1, epsilon = EPS);
    assert_abs_diff_eq!(g.chord_y_ft, 1682.767_898_307_478_8, epsilon = EPS);
    assert_abs_diff_eq!(g.eob_remaining_x_ft, 2609.354_512_422_106, epsilon = EPS);
    assert_abs_diff_eq!(g.eob_remaining_y_ft, 5317.232_101_692_522, epsilon = EPS);
    assert_abs_diff_eq!(g.chord_length_ft, 1742.588_382_980_391, epsilon = EPS);
    assert_abs_diff_eq!(g.target_section_ft, 5922.979_671_986_649, epsilon = EPS);
    assert_abs_diff_eq!(g.md_ft, 9665.568_054_967_04, epsilon = EPS);
    assert_abs_diff_eq!(g.max_kop_ft, 8180.281_365_794_512, epsilon = EPS);
    assert!(g.warnings.is_empty(), "{:?}", g.warnings);
}

#[test]
fn long_reach_takes_beyond_radius_branch() {
    let g = jtype::solve(&JParameters {
        bur_deg_100ft: 2.0,
        tvd_ft: 10_000.0,
        kop_ft: 1500.0,
        displacement_ft: 6000.0,
    })
    .expect("solve");

    assert_eq!(g.branch, JBranch::TargetBeyondRadius);
    assert_abs_diff_eq!(g.radius_ft, 2864.788_975_654_116, epsilon = EPS);
    assert_abs_diff_eq!(g.hypotenuse_ft, 9059.776_386_157_66, epsilon = EPS);
    assert_abs_diff_eq!(g.theta_deg, 20.246_413_133_513_88, epsilon = EPS);
    assert_abs_diff_eq!(g.beta_deg, 71.566_143_588_135_94, epsilon = EPS);
    assert_abs_diff_eq!(g.alpha_deg, 38.680_269_545_377_94, epsilon = EPS);
    assert_abs_diff_eq!(g.chord_x_ft, 628.403_864_929_320_7, epsilon = EPS);
    assert_abs_diff_eq!(g.chord_y_ft, 1790.418_250_453_732_5, epsilon = EPS);
    assert_abs_diff_eq!(g.chord_length_ft, 1934.013_477_268_897, epsilon = EPS);
    assert_abs_diff_eq!(g.target_section_ft, 8594.913_163_735_315, epsilon = EPS);
    assert_abs_diff_eq!(g.md_ft, 12_028.926_641_004_211, epsilon = EPS);
    assert_abs_diff_eq!(g.max_kop_ft, 6864.788_975_654_116, epsilon = EPS);
}

#[test]
fn derived_quantities_agree_with_first_principles() {
    let g = jtype::solve(&reference()).expect("solve");
    let alpha = g.alpha_deg.to_radians();

    assert_abs_diff_eq!(g.chord_x_ft, g.radius_ft * (1.0 - alpha.cos()), epsilon = 1e-9);
    assert_abs_diff_eq!(g.chord_y_ft, g.radius_ft * alpha.sin(), epsilon = 1e-9);
    assert_abs_diff_eq!(
        g.chord_x_ft + g.eob_remaining_x_ft,
        g.params.displacement_ft,
        epsilon = 1e-9
    );
    assert_abs_diff_eq!(g.eob_depth_ft, g.params.kop_ft + g.chord_y_ft, epsilon = 1e-9);
    assert_abs_diff_eq!(
        g.md_ft,
        g.params.kop_ft + g.chord_length_ft + g.target_section_ft,
        epsilon = 1e-9
    );
    assert_eq!(g.inclination_deg, g.alpha_deg);
}

#[test]
fn displacement_equal_to_radius_uses_within_branch() {
    let radius = radius_of_curvature(1.5);
    let g = jtype::solve(&JParameters {
        displacement_ft: radius,
        ..reference()
    })
    .expect("solve");

    assert_eq!(g.branch, JBranch::TargetWithinRadius);
    assert_abs_diff_eq!(g.theta_deg, 0.0, epsilon = 1e-12);
    assert_abs_diff_eq!(g.alpha_deg, 90.0 - g.beta_deg, epsilon = 1e-12);
    assert_abs_diff_eq!(g.max_kop_ft, 9000.0, epsilon = 1e-9);
}

#[test]
fn kop_at_or_below_tvd_is_rejected() {
    for kop_ft in [9000.0, 9500.0] {
        let err = jtype::solve(&JParameters {
            kop_ft,
            ..reference()
        })
        .expect_err("kop below tvd");
        assert_eq!(
            err,
            DomainError::InvalidDepthOrdering {
                kop_ft,
                depth_ft: 9000.0
            }
        );
        assert!(err.to_string().contains("lower the KOP"));
    }
}

#[test]
fn non_positive_build_rate_is_rejected() {
    for bur in [0.0, -1.5, f64::NAN] {
        let err = jtype::solve(&JParameters {
            bur_deg_100ft: bur,
            ..reference()
        })
        .expect_err("bad bur");
        assert!(
            matches!(err, DomainError::InvalidParameter { name: "BUR", .. }),
            "{err:?}"
        );
    }
}

#[test]
fn short_hold_clamps_beta_and_warns() {
    let g = jtype::solve(&JParameters {
        kop_ft: 8000.0,
        ..reference()
    })
    .expect("solve");

    assert_eq!(g.beta_deg, 0.0);
    assert_eq!(g.target_section_ft, 0.0);
    assert_eq!(g.warnings.len(), 1);
    assert!(matches!(
        g.warnings[0],
        GeometryWarning::ClampedCosine { ratio, .. } if ratio > 1.0
    ));
    assert!(g.alpha_deg.is_finite());
}

#[test]
fn deep_kop_is_solved_with_a_warning() {
    let g = jtype::solve(&JParameters {
        bur_deg_100ft: 2.0,
        tvd_ft: 10_000.0,
        kop_ft: 8000.0,
        displacement_ft: 6000.0,
    })
    .expect("solve");

    assert!(g.warnings.iter().any(|w| matches!(
        w,
        GeometryWarning::KopAboveMaximum { kop_ft, .. } if *kop_ft == 8000.0
    )));
}

#[test]
fn max_kop_standalone_matches_solver() {
    let value = jtype::max_kop(1.5, 9000.0, 3000.0).expect("max kop");
    assert_abs_diff_eq!(value, 8180.281_365_794_512, epsilon = EPS);

    let floored = jtype::max_kop(1.5, 1000.0, 20_000.0).expect("max kop");
    assert_eq!(floored, 0.0);

    assert!(jtype::max_kop(0.0, 9000.0, 3000.0).is_err());
}

#[test]
fn solving_twice_gives_identical_results() {
    let a = jtype::solve(&reference()).expect("solve");
    let b = jtype::solve(&reference()).expect("solve");
    assert_eq!(a, b);
}

#[test]
fn quantities_are_full_precision_with_display_rounding() {
    let g = jtype::solve(&reference()).expect("solve");
    let radius = g.quantity("radius").expect("radius");
    assert_eq!(radius.value, g.radius_ft);
    assert_eq!(radius.display_value(), 3819.72);
    assert_eq!(g.quantity("md").expect("md").display_value(), 9665.57);
    assert_eq!(g.quantities().len(), 15);
    assert!(g.quantity("unknown").is_none());
}

#[test]
fn survey_runs_from_surface_to_target() {
    let g = jtype::solve(&reference()).expect("solve");
    let survey = jtype::discretize(&g, &Discretization::default());

    let sections = survey.sections();
    let labels: Vec<_> = sections.iter().map(|(l, _)| l.as_str()).collect();
    assert_eq!(labels, ["Vertical", "Incremento", "Tangencial"]);
    assert_eq!(sections[0].1.len(), 2000);
    // 0..=26 whole degrees plus the closing alpha.
    assert_eq!(sections[1].1.len(), 28);
    assert_eq!(sections[2].1.len(), 100);

    let first = &survey.points()[0];
    assert_eq!((first.x, first.z), (0.0, 0.0));
    let last = survey.points().last().expect("last");
    assert_abs_diff_eq!(last.x, 3000.0, epsilon = 1e-9);
    assert_abs_diff_eq!(last.z, -9000.0, epsilon = 1e-9);

    let eob = sections[1].1.last().expect("eob");
    assert_abs_diff_eq!(eob.x, g.chord_x_ft, epsilon = 1e-9);
    assert_abs_diff_eq!(eob.z, -g.eob_depth_ft, epsilon = 1e-9);
    assert!(survey.iter().all(|p| p.y == 0.0));
}

#[test]
fn survey_depth_never_decreases() {
    let g = jtype::solve(&reference()).expect("solve");
    let survey = jtype::discretize(&g, &Discretization::default());
    for pair in survey.points().windows(2) {
        assert!(pair[1].z <= pair[0].z + 1e-9, "{:?}", pair);
    }
}
