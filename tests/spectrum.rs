//! 설계 응답 스펙트럼 형상 테스트.
use seismic_design_toolbox::hazard::HazardCoefficients;
use seismic_design_toolbox::site::{resolve, SiteClass};
use seismic_design_toolbox::spectrum::{
    bridge::{self, BridgeHazard},
    build, SpectrumBuilder, SpectrumRegime,
};
use seismic_design_toolbox::SpectrumError;

fn assert_close(label: &str, actual: f64, expected: f64, tol: f64) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tol,
        "{label} expected {expected:.6} got {actual:.6} (diff {diff:.3e}, tol {tol})"
    );
}

#[test]
fn class_d_reference_spectrum() {
    let f = resolve(1.0, 0.4, SiteClass::D).unwrap();
    let s = build(1.0, 0.4, f.fa, f.fv).unwrap();
    let sds = 2.0 / 3.0 * 1.1 * 1.0;
    let sd1 = 2.0 / 3.0 * 1.6 * 0.4;
    assert_close("SDS", s.sds, sds, 1e-12);
    assert_close("SD1", s.sd1, sd1, 1e-12);
    assert_close("SDS literal", s.sds, 0.733_333, 1e-6);
    assert_close("SD1 literal", s.sd1, 0.426_667, 1e-6);
    assert_close("Ts", s.ts, sd1 / sds, 1e-12);
    assert_close("T0", s.t0, 0.2 * sd1 / sds, 1e-12);
    assert_close("Ts literal", s.ts, 0.581_818, 1e-6);
    assert_close("T0 literal", s.t0, 0.116_364, 1e-6);

    for k in 0..=20 {
        let t = (s.t0 + (s.ts - s.t0) * k as f64 / 20.0).min(s.ts);
        assert_eq!(s.acceleration_at(t).unwrap(), s.sds, "plateau at T={t}");
    }
}

#[test]
fn rising_branch_starts_at_forty_percent() {
    let s = build(1.0, 0.4, 1.1, 1.6).unwrap();
    assert_close("Sa(0)", s.acceleration_at(0.0).unwrap(), 0.4 * s.sds, 1e-12);
    let mid = s.acceleration_at(s.t0 / 2.0).unwrap();
    assert_close("Sa(T0/2)", mid, 0.7 * s.sds, 1e-12);
}

#[test]
fn continuous_at_breakpoints() {
    let s = SpectrumBuilder::new(1.2, 0.5, 1.0, 1.5)
        .long_period_transition(8.0)
        .build()
        .unwrap();
    let eps = 1e-9;
    for (label, t) in [("T0", s.t0), ("Ts", s.ts), ("TL", 8.0)] {
        let left = s.acceleration_at(t - eps).unwrap();
        let at = s.acceleration_at(t).unwrap();
        let right = s.acceleration_at(t + eps).unwrap();
        assert_close(&format!("{label} left"), left, at, 1e-6);
        assert_close(&format!("{label} right"), right, at, 1e-6);
    }
}

#[test]
fn descending_and_long_period_branches() {
    let s = SpectrumBuilder::new(1.0, 0.4, 1.1, 1.6)
        .long_period_transition(4.0)
        .build()
        .unwrap();
    assert_close("Sa(2)", s.acceleration_at(2.0).unwrap(), s.sd1 / 2.0, 1e-12);
    assert_close(
        "Sa(6)",
        s.acceleration_at(6.0).unwrap(),
        s.sd1 * 4.0 / 36.0,
        1e-12,
    );

    let open = build(1.0, 0.4, 1.1, 1.6).unwrap();
    assert_eq!(open.tl, None);
    assert_close("Sa(6) open", open.acceleration_at(6.0).unwrap(), open.sd1 / 6.0, 1e-12);
}

#[test]
fn build_is_deterministic() {
    let a = build(0.9, 0.35, 1.14, 1.73).unwrap();
    let b = build(0.9, 0.35, 1.14, 1.73).unwrap();
    assert_eq!(a, b);
    let pa = a.sample(0.01, 3.0).unwrap();
    let pb = b.sample(0.01, 3.0).unwrap();
    assert_eq!(pa.len(), pb.len());
    for (x, y) in pa.iter().zip(&pb) {
        assert_eq!(x.period.to_bits(), y.period.to_bits());
        assert_eq!(x.acceleration.to_bits(), y.acceleration.to_bits());
    }
}

#[test]
fn non_positive_factors_are_rejected() {
    for (fa, fv) in [(0.0, 1.0), (1.0, 0.0), (-1.0, 1.0), (1.0, -0.5)] {
        let err = build(1.0, 0.4, fa, fv).unwrap_err();
        assert!(matches!(err, SpectrumError::InvalidInput(_)), "{err}");
    }
    let err = build(-1.0, 0.4, 1.0, 1.0).unwrap_err();
    assert!(matches!(err, SpectrumError::InvalidInput(_)), "{err}");
}

#[test]
fn zero_ss_with_positive_s1_is_rejected() {
    let err = build(0.0, 0.4, 1.0, 1.0).unwrap_err();
    assert!(matches!(err, SpectrumError::InvalidInput(_)), "{err}");
}

#[test]
fn zero_s1_with_positive_ss_is_rejected() {
    let f = resolve(1.0, 0.0, SiteClass::D).unwrap();
    let err = build(1.0, 0.0, f.fa, f.fv).unwrap_err();
    assert!(matches!(err, SpectrumError::InvalidInput(_)), "{err}");

    let err = bridge::build(0.4, 1.0, 0.0, 1.0, 1.0, 1.0).unwrap_err();
    assert!(matches!(err, SpectrumError::InvalidInput(_)), "{err}");
}

#[test]
fn zero_hazard_gives_flat_zero_spectrum() {
    let s = build(0.0, 0.0, 1.0, 1.0).unwrap();
    let pts = s.sample(0.5, 2.0).unwrap();
    assert!(pts.iter().all(|p| p.acceleration == 0.0));
    assert_eq!(pts.first().unwrap().period, 0.0);
}

#[test]
fn long_period_transition_must_exceed_ts() {
    let err = SpectrumBuilder::new(1.0, 0.4, 1.1, 1.6)
        .long_period_transition(0.3)
        .build()
        .unwrap_err();
    assert!(matches!(err, SpectrumError::InvalidInput(_)), "{err}");
}

#[test]
fn sampling_includes_breakpoints_exactly() {
    let s = SpectrumBuilder::new(1.0, 0.4, 1.1, 1.6)
        .long_period_transition(2.5)
        .build()
        .unwrap();
    let pts = s.sample(0.1, 3.0).unwrap();
    for t in [0.0, s.t0, s.ts, 2.5, 3.0] {
        assert!(pts.iter().any(|p| p.period == t), "missing T={t}");
    }
    assert!(pts.windows(2).all(|w| w[0].period < w[1].period));
    let plateau: Vec<_> = pts
        .iter()
        .filter(|p| p.period >= s.t0 && p.period <= s.ts)
        .collect();
    assert!(plateau.iter().all(|p| p.acceleration == s.sds));
}

#[test]
fn sampling_rejects_bad_resolution() {
    let s = build(1.0, 0.4, 1.1, 1.6).unwrap();
    assert!(s.sample(0.0, 4.0).is_err());
    assert!(s.sample(0.1, -1.0).is_err());
    assert!(s.sample(1e-9, 4.0).is_err());
    assert!(s.sample_at(&[0.5, -0.1]).is_err());
}

#[test]
fn sample_at_keeps_caller_order() {
    let s = build(1.0, 0.4, 1.1, 1.6).unwrap();
    let pts = s.sample_at(&[1.0, 0.0, 0.3]).unwrap();
    assert_eq!(pts.len(), 3);
    assert_eq!(pts[0].period, 1.0);
    assert_close("Sa(1)", pts[0].acceleration, s.sd1, 1e-12);
    assert_close("Sa(0)", pts[1].acceleration, 0.4 * s.sds, 1e-12);
    assert_eq!(pts[2].acceleration, s.sds);
}

#[test]
fn regimes_describe_closed_form() {
    let s = SpectrumBuilder::new(1.0, 0.4, 1.1, 1.6)
        .long_period_transition(4.0)
        .build()
        .unwrap();
    let regimes = s.regimes();
    assert_eq!(regimes.len(), 4);
    assert!(matches!(regimes[0], SpectrumRegime::Rising { .. }));
    assert!(matches!(regimes[1], SpectrumRegime::Plateau { .. }));
    assert!(matches!(
        regimes[2],
        SpectrumRegime::Descending { end_s: Some(_), .. }
    ));
    assert!(matches!(regimes[3], SpectrumRegime::LongPeriod { .. }));
    assert_eq!(regimes[1].start_s(), s.t0);
    assert!(regimes[3].formula().contains("T^2"));

    let open = build(1.0, 0.4, 1.1, 1.6).unwrap().regimes();
    assert_eq!(open.len(), 3);
}

#[test]
fn for_site_uses_validated_hazard() {
    let hazard = HazardCoefficients::new(1.0, 0.4).unwrap();
    let factors = resolve(hazard.ss(), hazard.s1(), SiteClass::D).unwrap();
    let a = SpectrumBuilder::for_site(hazard, factors).build().unwrap();
    assert_eq!(a, build(1.0, 0.4, 1.1, 1.6).unwrap());
    assert!(HazardCoefficients::new(0.0, 0.4).is_err());
}

#[test]
fn bridge_spectrum_uses_unreduced_design_values() {
    let s = bridge::build(0.4, 1.0, 0.4, 1.0, 1.0, 1.6).unwrap();
    assert_close("As", s.zero_period_acceleration, 0.4, 1e-12);
    assert_close("SDS", s.sds, 1.0, 1e-12);
    assert_close("SD1", s.sd1, 0.64, 1e-12);
    assert_close("Ts", s.ts, 0.64, 1e-12);
    assert_close("T0", s.t0, 0.128, 1e-12);
    assert_eq!(s.tl, None);
    assert_close("Sa(0)", s.acceleration_at(0.0).unwrap(), 0.4, 1e-12);
}

#[test]
fn bridge_spectrum_for_ground_type_three() {
    let r = bridge::for_ground_type(
        BridgeHazard {
            pga: 0.6,
            ss: 1.1,
            s1: 0.4,
        },
        SiteClass::III,
    )
    .unwrap();
    assert_close("Fa", r.factors.fa, 0.86, 1e-12);
    assert_close("Fv", r.factors.fv, 2.4, 1e-12);
    assert_close("SDS", r.spectrum.sds, 0.86 * 1.1, 1e-12);
    assert_close("SD1", r.spectrum.sd1, 0.96, 1e-12);
    assert_close(
        "As",
        r.spectrum.zero_period_acceleration,
        0.6 * r.factors.fpga,
        1e-12,
    );
}
