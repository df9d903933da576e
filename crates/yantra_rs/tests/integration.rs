//! Integration tests for the request boundary.

use yantra_rs::*;

#[test]
fn generate_from_raw_request() {
    let spec = generate(&GenerateRequest::new(26.9245, 75.8243, 431.0, "samrat_yantra")).unwrap();
    assert_eq!(spec.kind(), InstrumentKind::Samrat);
    let g = spec.angle("gnomon_angle").unwrap();
    assert!((g - 63.08).abs() < 0.01);
}

#[test]
fn generate_with_named_reference() {
    let mut req = GenerateRequest::new(23.0, 72.6, 53.0, "Samrat");
    req.reference = Some("ujjain".into());
    let spec = generate(&req).unwrap();
    assert_eq!(spec.reference_site(), ReferenceSite::Ujjain);
}

#[test]
fn request_errors_are_typed() {
    let bad_lat = generate(&GenerateRequest::new(91.0, 0.0, 0.0, "samrat")).unwrap_err();
    assert!(matches!(bad_lat, YantraError::Time(TimeError::InvalidCoordinate(_))));

    let bad_lon = generate(&GenerateRequest::new(0.0, -200.0, 0.0, "samrat")).unwrap_err();
    assert!(matches!(bad_lon, YantraError::Time(TimeError::InvalidCoordinate(_))));

    let bad_kind = generate(&GenerateRequest::new(28.6, 77.2, 216.0, "armillary")).unwrap_err();
    assert!(matches!(
        bad_kind,
        YantraError::Geometry(GeometryError::UnsupportedInstrument(_))
    ));

    let pole = generate(&GenerateRequest::new(90.0, 0.0, 0.0, "kapala")).unwrap_err();
    assert!(matches!(
        pole,
        YantraError::Geometry(GeometryError::DegenerateGeometry(_))
    ));

    let mut req = GenerateRequest::new(28.6, 77.2, 216.0, "rama");
    req.scale_factor = 0.0;
    assert!(matches!(
        generate(&req).unwrap_err(),
        YantraError::Geometry(GeometryError::InvalidScale(_))
    ));
}

#[test]
fn delhi_is_a_valid_coordinate() {
    assert!(make_coordinate(28.6139, 77.2090, 216.0).is_ok());
}

#[test]
fn solar_from_iso_string_is_deterministic() {
    let a = solar(28.6139, 77.2090, 216.0, "2024-03-20T12:00:00+05:30").unwrap();
    let b = solar(28.6139, 77.2090, 216.0, "2024-03-20T12:00:00+05:30").unwrap();
    assert_eq!(a.elevation_deg.to_bits(), b.elevation_deg.to_bits());
    assert_eq!(a.azimuth_deg.to_bits(), b.azimuth_deg.to_bits());
    assert!(a.is_above_horizon());
    assert!(matches!(
        solar(28.6, 77.2, 0.0, "yesterday"),
        Err(YantraError::Time(TimeError::Parse(_)))
    ));
}

#[test]
fn session_through_the_boundary() {
    let spec = generate(&GenerateRequest::new(28.6139, 77.2090, 216.0, "samrat")).unwrap();
    let start = instant_at_solar_hour(spec.coordinate(), 2024, 3, 20, 7.0, 330).unwrap();
    let mut session = start_session(AnimationRequest {
        spec,
        compression_factor: rates::HOUR_PER_SEC,
        start,
    })
    .unwrap();
    assert!(session.tick(1.0).is_none());
    session.play();
    session.tick(1.0);
    let cursor = session.cursor().unwrap();
    assert!((cursor.utc_seconds() - start.utc_seconds() - 3600.0).abs() < 1e-6);

    let spec = session.spec().clone();
    let bad = start_session(AnimationRequest {
        spec,
        compression_factor: f64::NAN,
        start,
    });
    assert!(matches!(
        bad,
        Err(YantraError::Shadow(ShadowError::InvalidCompression(_)))
    ));
}

#[test]
fn daylight_and_hour_lines() {
    let d = daylight_on(28.6139, 77.2090, 216.0, 2024, 6, 21).unwrap();
    assert!(d.day_length_hours() > 13.5);
    assert!(matches!(
        daylight_on(28.6, 77.2, 0.0, 2023, 2, 29),
        Err(YantraError::Time(TimeError::InvalidCalendar(_)))
    ));
    let table = hour_lines(28.6139, 77.2090, "chakra").unwrap();
    assert_eq!(table.projection(), HourProjection::Equatorial);
    assert_eq!(table.get(15), Some(45.0));
}
