//! Geometric self-checks on generated specs, and grading of field readings
//! against the solar model.

use yantra_solar::{declination_deg, normalize_180, solar_position};
use yantra_time::{
    GeoCoordinate, Instant, SolarTimeModel, equation_of_time_minutes, local_solar_time,
    solar_day_of_year,
};

use crate::error::GeometryError;
use crate::hour_table::HourTable;
use crate::spec::GeometrySpec;

/// Tolerance for the gnomon/colatitude check, degrees.
pub const GNOMON_TOLERANCE_DEG: f64 = 1e-6;

/// Tolerance for hour-table symmetry, degrees.
pub const SYMMETRY_TOLERANCE_DEG: f64 = 1e-9;

/// Check the invariants every generated spec must satisfy.
///
/// - every dimension, angle and metric is finite; dimensions are non-negative
/// - `hour_12` is 0 and `hour_(12+k) = −hour_(12−k)` wherever both exist
/// - `gnomon_angle`, when present, equals the colatitude
pub fn verify_spec(spec: &GeometrySpec) -> Result<(), GeometryError> {
    for (key, &v) in spec.dimensions() {
        if !v.is_finite() || v < 0.0 {
            return Err(GeometryError::InconsistentGeometry(format!(
                "dimension {key} = {v}"
            )));
        }
    }
    for (key, &v) in spec.angles().iter().chain(spec.accuracy()) {
        if !v.is_finite() {
            return Err(GeometryError::InconsistentGeometry(format!(
                "{key} is not finite"
            )));
        }
    }
    if spec.shadow_caster_height() <= 0.0 {
        return Err(GeometryError::InconsistentGeometry(
            "shadow caster height must be positive".to_string(),
        ));
    }

    if let Some(noon) = spec.hour_angle(12) {
        if noon.abs() > SYMMETRY_TOLERANCE_DEG {
            return Err(GeometryError::InconsistentGeometry(format!(
                "{} = {noon}, expected 0",
                HourTable::key(12)
            )));
        }
    }
    for k in 1..=12 {
        if let (Some(am), Some(pm)) = (spec.hour_angle(12 - k), spec.hour_angle(12 + k)) {
            if (am + pm).abs() > SYMMETRY_TOLERANCE_DEG {
                return Err(GeometryError::InconsistentGeometry(format!(
                    "hour lines {} and {} are not symmetric: {am} vs {pm}",
                    12 - k,
                    12 + k
                )));
            }
        }
    }

    if let Some(gnomon) = spec.angle("gnomon_angle") {
        let colat = spec.coordinate().colatitude_deg();
        if (gnomon - colat).abs() > GNOMON_TOLERANCE_DEG {
            return Err(GeometryError::InconsistentGeometry(format!(
                "gnomon angle {gnomon} differs from colatitude {colat}"
            )));
        }
    }
    Ok(())
}

/// Readings taken off an instrument at a known instant. Any subset may be
/// supplied.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ObservedReading {
    /// Measured solar elevation, degrees.
    pub elevation_deg: Option<f64>,
    /// Measured compass bearing of the sun, degrees from north through east.
    pub compass_bearing_deg: Option<f64>,
    /// Solar time read off the dial, hours.
    pub solar_hour: Option<f64>,
}

/// Confidence band of an assessment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Grade {
    Poor,
    Fair,
    Good,
    Excellent,
}

impl Grade {
    pub fn from_confidence(confidence: f64) -> Self {
        if confidence > 0.9 {
            Self::Excellent
        } else if confidence > 0.7 {
            Self::Good
        } else if confidence > 0.5 {
            Self::Fair
        } else {
            Self::Poor
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Poor => "Poor",
            Self::Fair => "Fair",
            Self::Good => "Good",
            Self::Excellent => "Excellent",
        }
    }
}

/// Result of comparing a reading with the model.
#[derive(Debug, Clone, PartialEq)]
pub struct ObservationAssessment {
    /// Largest of the elevation and bearing errors, degrees.
    pub position_error_deg: f64,
    /// Error of the dial's time reading, minutes.
    pub time_error_minutes: f64,
    /// Mean of the time and position scores, in [0, 1].
    pub confidence: f64,
    pub grade: Grade,
    pub notes: Vec<String>,
}

/// Time error at which the time score reaches 0.
const TIME_SCORE_SPAN_MINUTES: f64 = 10.0;
/// Position error at which the position score reaches 0.
const POSITION_SCORE_SPAN_DEG: f64 = 5.0;

fn finite(v: Option<f64>, what: &'static str) -> Result<Option<f64>, GeometryError> {
    match v {
        Some(x) if !x.is_finite() => Err(GeometryError::InvalidObservation(what)),
        other => Ok(other),
    }
}

/// Grade a field reading taken at `coordinate` and `instant` (mean solar time).
pub fn assess_observation(
    coordinate: &GeoCoordinate,
    instant: Instant,
    reading: &ObservedReading,
) -> Result<ObservationAssessment, GeometryError> {
    let elevation = finite(reading.elevation_deg, "elevation must be finite")?;
    let bearing = finite(reading.compass_bearing_deg, "bearing must be finite")?;
    let solar_hour = finite(reading.solar_hour, "solar hour must be finite")?;

    let model = solar_position(coordinate, instant);
    let mut notes = Vec::new();

    let mut position_error_deg: f64 = 0.0;
    if let Some(el) = elevation {
        let err = (el - model.elevation_deg).abs();
        position_error_deg = position_error_deg.max(err);
        notes.push(format!("Solar elevation error: {err:.2}°"));
    }
    if let Some(b) = bearing {
        let err = normalize_180(b - model.compass_bearing_deg()).abs();
        position_error_deg = position_error_deg.max(err);
        notes.push(format!("Solar bearing error: {err:.2}°"));
    }

    let time_error_minutes = match solar_hour {
        Some(h) => {
            let lst = local_solar_time(coordinate, instant, SolarTimeModel::Mean);
            // Wrap across midnight so 23.9 vs 0.1 counts as 12 minutes.
            let diff = (h - lst.solar_hour).rem_euclid(24.0);
            let err = diff.min(24.0 - diff) * 60.0;
            notes.push(format!("Solar time error: {err:.1} min"));
            err
        }
        None => {
            notes.push("No time reading provided".to_string());
            0.0
        }
    };
    if elevation.is_none() && bearing.is_none() {
        notes.push("No position reading provided".to_string());
    }

    let time_score = (1.0 - time_error_minutes / TIME_SCORE_SPAN_MINUTES).max(0.0);
    let position_score = (1.0 - position_error_deg / POSITION_SCORE_SPAN_DEG).max(0.0);
    let confidence = (time_score + position_score) / 2.0;
    let grade = Grade::from_confidence(confidence);
    notes.push(format!("{} accuracy", grade.name()));

    Ok(ObservationAssessment {
        position_error_deg,
        time_error_minutes,
        confidence,
        grade,
        notes,
    })
}

/// Corrections an observer applies when reading an instrument.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarCorrections {
    /// Apparent minus mean solar time, minutes.
    pub equation_of_time_minutes: f64,
    /// Solar declination, degrees.
    pub declination_deg: f64,
    /// Lift of the apparent sun over the geometric one, arcminutes.
    /// `None` while the sun is below the horizon.
    pub refraction_arcmin: Option<f64>,
}

/// Atmospheric refraction at a geometric elevation, Bennett's formula:
/// `R = 1.02 / tan(h + 10.3 / (h + 5.11))` arcminutes, `h` in degrees.
pub fn refraction_arcmin(elevation_deg: f64) -> Option<f64> {
    if elevation_deg.is_nan() || elevation_deg <= 0.0 {
        return None;
    }
    let arg = elevation_deg + 10.3 / (elevation_deg + 5.11);
    // Past the zenith the tangent changes sign.
    Some((1.02 / arg.to_radians().tan()).max(0.0))
}

/// Equation of time, declination and refraction for a reading taken at
/// `coordinate` and `instant`. Day-based terms use the local solar date.
pub fn corrections(coordinate: &GeoCoordinate, instant: Instant) -> SolarCorrections {
    let day = solar_day_of_year(coordinate, instant);
    let position = solar_position(coordinate, instant);
    SolarCorrections {
        equation_of_time_minutes: equation_of_time_minutes(day),
        declination_deg: declination_deg(day),
        refraction_arcmin: refraction_arcmin(position.elevation_deg),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yantra_time::CivilTime;

    fn jaipur() -> GeoCoordinate {
        GeoCoordinate::new(26.9124, 75.7873, 431.0).unwrap()
    }

    fn morning() -> Instant {
        Instant::from_civil(&CivilTime::new(2024, 3, 20, 9, 0, 0.0, 330)).unwrap()
    }

    #[test]
    fn perfect_reading_is_excellent() {
        let c = jaipur();
        let t = morning();
        let p = solar_position(&c, t);
        let lst = local_solar_time(&c, t, SolarTimeModel::Mean);
        let reading = ObservedReading {
            elevation_deg: Some(p.elevation_deg),
            compass_bearing_deg: Some(p.compass_bearing_deg()),
            solar_hour: Some(lst.solar_hour),
        };
        let a = assess_observation(&c, t, &reading).unwrap();
        assert!(a.position_error_deg < 1e-9);
        assert!(a.time_error_minutes < 1e-6);
        assert!((a.confidence - 1.0).abs() < 1e-6);
        assert_eq!(a.grade, Grade::Excellent);
    }

    #[test]
    fn large_errors_are_poor() {
        let c = jaipur();
        let t = morning();
        let p = solar_position(&c, t);
        let reading = ObservedReading {
            elevation_deg: Some(p.elevation_deg + 6.0),
            compass_bearing_deg: None,
            solar_hour: Some(local_solar_time(&c, t, SolarTimeModel::Mean).solar_hour + 0.25),
        };
        let a = assess_observation(&c, t, &reading).unwrap();
        assert!((a.position_error_deg - 6.0).abs() < 1e-9);
        assert!((a.time_error_minutes - 15.0).abs() < 1e-6);
        assert_eq!(a.confidence, 0.0);
        assert_eq!(a.grade, Grade::Poor);
    }

    #[test]
    fn empty_reading_scores_full() {
        let a = assess_observation(&jaipur(), morning(), &ObservedReading::default()).unwrap();
        assert_eq!(a.confidence, 1.0);
        assert!(a.notes.iter().any(|n| n.contains("No time reading")));
    }

    #[test]
    fn non_finite_reading_rejected() {
        let reading = ObservedReading {
            elevation_deg: Some(f64::NAN),
            ..Default::default()
        };
        assert!(matches!(
            assess_observation(&jaipur(), morning(), &reading),
            Err(GeometryError::InvalidObservation(_))
        ));
    }

    #[test]
    fn grade_bands() {
        assert_eq!(Grade::from_confidence(0.95), Grade::Excellent);
        assert_eq!(Grade::from_confidence(0.9), Grade::Good);
        assert_eq!(Grade::from_confidence(0.6), Grade::Fair);
        assert_eq!(Grade::from_confidence(0.5), Grade::Poor);
    }

    #[test]
    fn refraction_shrinks_toward_zenith() {
        let horizon = refraction_arcmin(1e-6).unwrap();
        assert!((horizon - 28.98).abs() < 0.1, "{horizon}");
        let mid = refraction_arcmin(45.0).unwrap();
        assert!((mid - 1.01).abs() < 0.02, "{mid}");
        assert!(refraction_arcmin(89.99).unwrap() < 0.01);
        assert!(refraction_arcmin(10.0).unwrap() < horizon);
        assert_eq!(refraction_arcmin(0.0), None);
        assert_eq!(refraction_arcmin(-3.0), None);
        assert_eq!(refraction_arcmin(f64::NAN), None);
    }

    #[test]
    fn corrections_follow_the_solar_model() {
        let c = jaipur();
        let t = morning();
        let k = corrections(&c, t);
        let day = solar_day_of_year(&c, t);
        assert_eq!(day, 80);
        assert_eq!(k.equation_of_time_minutes, equation_of_time_minutes(day));
        assert_eq!(k.declination_deg, solar_position(&c, t).declination_deg);
        let el = solar_position(&c, t).elevation_deg;
        assert_eq!(k.refraction_arcmin, refraction_arcmin(el));
        assert!(k.refraction_arcmin.is_some());
    }

    #[test]
    fn no_refraction_at_night() {
        let midnight = Instant::from_civil(&CivilTime::new(2024, 3, 20, 0, 0, 0.0, 330)).unwrap();
        let k = corrections(&jaipur(), midnight);
        assert_eq!(k.refraction_arcmin, None);
        assert!(k.declination_deg.abs() < 1.0);
    }
}
