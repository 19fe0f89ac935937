//! TG = 4·Σ(H/Vs) 기반 지반 종류 판정 테스트.
use seismic_design_toolbox::site::{
    classify_profile, ground_type::classify_period, SiteClass, SoilLayer,
};
use seismic_design_toolbox::SpectrumError;

fn sample_profile() -> Vec<SoilLayer> {
    vec![
        SoilLayer::new(4.0, 281.25),
        SoilLayer::new(2.0, 290.0),
        SoilLayer::new(15.0, 301.0),
        SoilLayer::new(6.0, 291.833_333_3),
        SoilLayer::new(5.0, 311.8),
        SoilLayer::new(19.0, 330.526_315_8),
        SoilLayer::new(4.0, 456.25),
        SoilLayer::new(1.0, 481.0),
        SoilLayer::new(1.0, 740.0),
        SoilLayer::new(1.0, 679.0),
        SoilLayer::new(3.0, 938.666_666_7),
        SoilLayer::new(11.0, 1_705.818_182),
    ]
}

#[test]
fn borehole_profile_is_ground_type_three() {
    let profile = classify_profile(&sample_profile()).expect("profile");
    assert_eq!(profile.rows.len(), 12);
    assert_eq!(profile.ground_type(), SiteClass::III);
    let tg = profile.characteristic_period_s();
    assert!((tg - 0.7534).abs() < 1e-3, "TG={tg}");
}

#[test]
fn cumulative_rows_progress_through_types() {
    let profile = classify_profile(&sample_profile()).unwrap();
    let types: Vec<_> = profile.rows.iter().map(|r| r.ground_type).collect();
    assert_eq!(types[0], SiteClass::I);
    assert_eq!(types[1], SiteClass::I);
    assert_eq!(types[2], SiteClass::II);
    assert_eq!(types[4], SiteClass::II);
    assert_eq!(types[5], SiteClass::III);
    let first = profile.rows[0].travel_time_s.unwrap();
    assert!((first - 4.0 / 281.25).abs() < 1e-12);
    assert!(profile
        .rows
        .windows(2)
        .all(|w| w[0].characteristic_period_s <= w[1].characteristic_period_s));
}

#[test]
fn zero_velocity_layer_is_skipped() {
    let profile = classify_profile(&[
        SoilLayer::new(5.0, 0.0),
        SoilLayer::new(10.0, 200.0),
    ])
    .unwrap();
    assert_eq!(profile.rows[0].travel_time_s, None);
    assert_eq!(profile.rows[0].characteristic_period_s, 0.0);
    assert!((profile.characteristic_period_s() - 0.2).abs() < 1e-12);
}

#[test]
fn class_boundaries() {
    assert_eq!(classify_period(0.199), SiteClass::I);
    assert_eq!(classify_period(0.2), SiteClass::II);
    assert_eq!(classify_period(0.599), SiteClass::II);
    assert_eq!(classify_period(0.6), SiteClass::III);
}

#[test]
fn invalid_profiles_are_rejected() {
    let err = classify_profile(&[]).unwrap_err();
    assert!(matches!(err, SpectrumError::InvalidInput(_)));
    let err = classify_profile(&[SoilLayer::new(-1.0, 200.0)]).unwrap_err();
    assert!(matches!(err, SpectrumError::InvalidInput(_)));
    let err = classify_profile(&[SoilLayer::new(1.0, -200.0)]).unwrap_err();
    assert!(matches!(err, SpectrumError::InvalidInput(_)));
}
