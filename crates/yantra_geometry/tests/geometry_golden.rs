//! Golden and property tests for instrument generation across latitudes.

use yantra_geometry::{
    ALL_INSTRUMENTS, GeometryError, HourProjection, InstrumentKind, ReferenceSite,
    available_sites, generate, generate_with_reference, verify_spec,
};
use yantra_time::GeoCoordinate;

const LATITUDES: [f64; 9] = [-66.5, -33.8688, -10.0, 0.0, 13.08, 26.9245, 28.6139, 51.4779, 78.2];

fn at(lat: f64) -> GeoCoordinate {
    GeoCoordinate::new(lat, 75.8, 100.0).unwrap()
}

#[test]
fn jaipur_samrat() {
    let coord = GeoCoordinate::new(26.9245, 75.8243, 431.0).unwrap();
    let spec = generate(InstrumentKind::Samrat, &coord, 1.0).unwrap();
    let g = spec.angle("gnomon_angle").unwrap();
    assert!((g - 63.08).abs() < 0.01, "gnomon angle {g}");
    let six = spec.hour_angle(6).unwrap();
    let eighteen = spec.hour_angle(18).unwrap();
    assert!((six + eighteen).abs() < 1e-9);
    assert!(six < 0.0 && eighteen > 0.0);
    assert_eq!(spec.hour_projection(), HourProjection::HorizontalDial);
    assert_eq!(spec.reference_site(), ReferenceSite::Jaipur);
    // Near the reference latitude the dimensions barely change.
    let h = spec.dimension("gnomon_height").unwrap();
    assert!((h - 22.6).abs() < 0.01, "gnomon height {h}");
    assert_eq!(spec.shadow_caster_height(), h);
}

#[test]
fn gnomon_angle_is_colatitude_everywhere() {
    for lat in LATITUDES {
        let spec = generate(InstrumentKind::Samrat, &at(lat), 1.0).unwrap();
        let g = spec.angle("gnomon_angle").unwrap();
        assert!((g - (90.0 - lat.abs())).abs() < 1e-6, "lat {lat}: {g}");
    }
}

#[test]
fn every_instrument_has_symmetric_hour_table() {
    for kind in ALL_INSTRUMENTS {
        for lat in LATITUDES {
            let spec = generate(kind, &at(lat), 1.0).unwrap();
            assert_eq!(spec.hour_angle(12), Some(0.0), "{kind} lat {lat}");
            for k in 1..=6 {
                let am = spec.hour_angle(12 - k).unwrap();
                let pm = spec.hour_angle(12 + k).unwrap();
                assert!((am + pm).abs() < 1e-9, "{kind} lat {lat} k {k}");
            }
        }
    }
}

#[test]
fn every_value_is_finite() {
    for kind in ALL_INSTRUMENTS {
        for lat in LATITUDES {
            let spec = generate(kind, &at(lat), 0.25).unwrap();
            assert!(spec.dimensions().values().all(|v| v.is_finite() && *v >= 0.0));
            assert!(spec.angles().values().all(|v| v.is_finite()));
            assert!(spec.accuracy().values().all(|v| v.is_finite() && *v > 0.0));
            assert!(!spec.notes().is_empty());
            assert!(spec.metric("time_tolerance_minutes").is_some());
            verify_spec(&spec).unwrap();
        }
    }
}

#[test]
fn poles_are_degenerate() {
    for kind in ALL_INSTRUMENTS {
        for lat in [90.0, -90.0] {
            let err = generate(kind, &at(lat), 1.0).unwrap_err();
            assert!(
                matches!(err, GeometryError::DegenerateGeometry(_)),
                "{kind} at {lat}: {err}"
            );
        }
    }
}

#[test]
fn every_listed_reference_generates() {
    let coord = at(20.0);
    for kind in ALL_INSTRUMENTS {
        for site in available_sites(kind) {
            let spec = generate_with_reference(kind, &coord, 1.0, site).unwrap();
            assert_eq!(spec.reference_site(), site);
            assert!(spec.notes()[0].contains(site.landmark()));
        }
    }
}

#[test]
fn delhi_reference_is_smaller_than_jaipur() {
    let coord = at(26.9);
    let jaipur = generate_with_reference(InstrumentKind::Samrat, &coord, 1.0, ReferenceSite::Jaipur)
        .unwrap();
    let delhi = generate_with_reference(InstrumentKind::Samrat, &coord, 1.0, ReferenceSite::Delhi)
        .unwrap();
    assert!(delhi.dimension("base_length").unwrap() < jaipur.dimension("base_length").unwrap());
}

#[test]
fn larger_instruments_read_finer() {
    let small = generate(InstrumentKind::Digamsa, &at(28.6), 0.5).unwrap();
    let large = generate(InstrumentKind::Digamsa, &at(28.6), 2.0).unwrap();
    let t_small = small.metric("time_tolerance_minutes").unwrap();
    let t_large = large.metric("time_tolerance_minutes").unwrap();
    assert!((t_small / t_large - 4.0).abs() < 1e-9);
    let a_small = small.metric("angle_tolerance_degrees").unwrap();
    let a_large = large.metric("angle_tolerance_degrees").unwrap();
    assert!(a_large < a_small);
}

#[test]
fn unnatamsa_seasonal_altitudes() {
    let spec = generate(InstrumentKind::Unnatamsa, &at(28.6139), 1.0).unwrap();
    let june = spec.angle("max_altitude_june_solstice").unwrap();
    let dec = spec.angle("max_altitude_december_solstice").unwrap();
    assert!((june - (90.0 - (28.6139f64 - 23.44).abs())).abs() < 1e-9);
    assert!((dec - (90.0 - (28.6139f64 + 23.44))).abs() < 1e-9);
    assert_eq!(spec.angle("quadrant_bearing"), Some(180.0));
}

#[test]
fn kind_parsing_feeds_generation() {
    let kind: InstrumentKind = "jai_prakash_yantra".parse().unwrap();
    let spec = generate(kind, &at(23.1765), 1.0).unwrap();
    assert!(spec.angle("celestial_equator_angle").is_some());
    assert!(spec.dimension("declination_radius_s24").is_some());
    assert!(matches!(
        "sextant".parse::<InstrumentKind>(),
        Err(GeometryError::UnsupportedInstrument(_))
    ));
}

#[test]
fn near_pole_stays_finite() {
    for lat in [89.9999, -89.9999] {
        let coord = at(lat);
        for kind in ALL_INSTRUMENTS {
            let spec = generate(kind, &coord, 1.0)
                .unwrap_or_else(|e| panic!("{kind:?} at {lat}: {e}"));
            let values = spec
                .dimensions()
                .iter()
                .chain(spec.angles())
                .chain(spec.accuracy());
            for (key, v) in values {
                assert!(v.is_finite(), "{kind:?} at {lat}: {key} = {v}");
            }
            assert!(spec.shadow_caster_height() > 0.0, "{kind:?} at {lat}");
            verify_spec(&spec).unwrap();
        }
    }
}
