//! Solar position from a coordinate and an instant.
//!
//! Low-precision model (about ±1° in declination, worse in hour angle when
//! the equation of time is ignored), adequate for laying out masonry dials:
//!
//! - `δ = 23.44° · sin(360°/365 · (n − 81))`
//! - `H = 15° · (solar_hour − 12)`
//! - `sin a = sin δ sin φ + cos δ cos φ cos H`
//! - `A = atan2(sin H, cos H sin φ − tan δ cos φ)`
//!
//! Every function here is pure: identical inputs give bit-identical outputs.

use yantra_time::{GeoCoordinate, Instant, SolarTimeModel, local_solar_time, solar_day_of_year};

use crate::util::normalize_360;

/// Obliquity used as the declination amplitude, in degrees.
pub const MAX_DECLINATION_DEG: f64 = 23.44;

/// Configuration for [`solar_position_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SolarConfig {
    /// How the solar hour is derived from the clock. Default: mean solar time.
    pub time_model: SolarTimeModel,
}

/// The sun's place in the local sky.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarPosition {
    /// Declination in degrees, within ±23.44.
    pub declination_deg: f64,
    /// Hour angle in degrees, [-180, 180); negative before solar noon.
    pub hour_angle_deg: f64,
    /// Elevation above the horizon in degrees; negative below it.
    pub elevation_deg: f64,
    /// Azimuth in degrees, [0, 360), reckoned from the south point,
    /// positive toward the west.
    pub azimuth_deg: f64,
}

impl SolarPosition {
    /// True when the sun's center is above the geometric horizon.
    pub fn is_above_horizon(&self) -> bool {
        self.elevation_deg > 0.0
    }

    /// Compass bearing in degrees, [0, 360), from north through east.
    pub fn compass_bearing_deg(&self) -> f64 {
        normalize_360(self.azimuth_deg + 180.0)
    }

    /// Zenith distance in degrees.
    pub fn zenith_distance_deg(&self) -> f64 {
        90.0 - self.elevation_deg
    }

    /// Unit vector toward the sun in local East-North-Up coordinates.
    pub fn enu_unit_vector(&self) -> [f64; 3] {
        let el = self.elevation_deg.to_radians();
        let bearing = self.compass_bearing_deg().to_radians();
        [el.cos() * bearing.sin(), el.cos() * bearing.cos(), el.sin()]
    }
}

/// Solar declination in degrees for an ordinal day (1..=366).
pub fn declination_deg(day_of_year: u32) -> f64 {
    let angle = (360.0 / 365.0 * (day_of_year as f64 - 81.0)).to_radians();
    MAX_DECLINATION_DEG * angle.sin()
}

/// Signed azimuth in degrees, (-180, 180], from the south point, west positive.
///
/// This is the raw `atan2` of the azimuth formula. It is exactly odd in the
/// hour angle, which the hour tables rely on.
pub fn signed_azimuth_deg(latitude_deg: f64, declination_deg: f64, hour_angle_deg: f64) -> f64 {
    let phi = latitude_deg.to_radians();
    let dec = declination_deg.to_radians();
    let h = hour_angle_deg.to_radians();
    h.sin()
        .atan2(h.cos() * phi.sin() - dec.tan() * phi.cos())
        .to_degrees()
}

/// Solar elevation in degrees for explicit angles.
pub fn elevation_deg(latitude_deg: f64, declination_deg: f64, hour_angle_deg: f64) -> f64 {
    let phi = latitude_deg.to_radians();
    let dec = declination_deg.to_radians();
    let h = hour_angle_deg.to_radians();
    let sin_el = dec.sin() * phi.sin() + dec.cos() * phi.cos() * h.cos();
    sin_el.clamp(-1.0, 1.0).asin().to_degrees()
}

/// Sun position for explicit latitude, declination and hour angle (degrees).
pub fn position_from_angles(
    latitude_deg: f64,
    declination_deg: f64,
    hour_angle_deg: f64,
) -> SolarPosition {
    SolarPosition {
        declination_deg,
        hour_angle_deg,
        elevation_deg: elevation_deg(latitude_deg, declination_deg, hour_angle_deg),
        azimuth_deg: normalize_360(signed_azimuth_deg(
            latitude_deg,
            declination_deg,
            hour_angle_deg,
        )),
    }
}

/// Noon (meridian) altitude in degrees: `90 − |φ − δ|`.
pub fn meridian_altitude_deg(latitude_deg: f64, declination_deg: f64) -> f64 {
    90.0 - (latitude_deg - declination_deg).abs()
}

/// Sun position at `coordinate` for `instant`, mean solar time.
pub fn solar_position(coordinate: &GeoCoordinate, instant: Instant) -> SolarPosition {
    solar_position_with(coordinate, instant, &SolarConfig::default())
}

/// Sun position at `coordinate` for `instant` with an explicit configuration.
pub fn solar_position_with(
    coordinate: &GeoCoordinate,
    instant: Instant,
    config: &SolarConfig,
) -> SolarPosition {
    let dec = declination_deg(solar_day_of_year(coordinate, instant));
    let lst = local_solar_time(coordinate, instant, config.time_model);
    position_from_angles(coordinate.latitude_deg(), dec, lst.hour_angle_deg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use yantra_time::CivilTime;

    #[test]
    fn declination_at_equinox_day() {
        assert_eq!(declination_deg(81), 0.0);
    }

    #[test]
    fn declination_bounded_all_year() {
        for n in 1..=366 {
            let d = declination_deg(n);
            assert!(d.abs() <= MAX_DECLINATION_DEG, "day {n}: {d}");
        }
    }

    #[test]
    fn declination_solstices() {
        // ~Jun 21 (day 172) near +23.44, ~Dec 21 (day 355) near -23.44
        assert!((declination_deg(172) - 23.44).abs() < 0.05);
        assert!((declination_deg(355) + 23.44).abs() < 0.1);
    }

    #[test]
    fn ujjain_equinox_three_hours_after_noon() {
        let p = position_from_angles(23.1765, 0.0, 45.0);
        assert!((p.elevation_deg - 40.545).abs() < 0.01, "el = {}", p.elevation_deg);
        assert!((p.azimuth_deg - 68.51).abs() < 0.05, "az = {}", p.azimuth_deg);
        assert!((p.compass_bearing_deg() - 248.51).abs() < 0.05);
    }

    #[test]
    fn morning_sun_is_east() {
        let p = position_from_angles(28.6, 0.0, -45.0);
        // From south, westward positive: morning sun has azimuth > 180
        assert!(p.azimuth_deg > 180.0);
        let bearing = p.compass_bearing_deg();
        assert!(bearing > 90.0 && bearing < 180.0, "bearing = {bearing}");
    }

    #[test]
    fn noon_sun_due_south_in_north() {
        let p = position_from_angles(40.0, 10.0, 0.0);
        assert!(p.azimuth_deg.abs() < 1e-12);
        assert!((p.elevation_deg - meridian_altitude_deg(40.0, 10.0)).abs() < 1e-9);
    }

    #[test]
    fn signed_azimuth_is_odd_in_hour_angle() {
        for h in [15.0, 30.0, 45.0, 60.0, 75.0, 90.0] {
            let east = signed_azimuth_deg(26.9, 0.0, -h);
            let west = signed_azimuth_deg(26.9, 0.0, h);
            assert!((east + west).abs() < 1e-12, "{east} vs {west}");
        }
    }

    #[test]
    fn midnight_sun_below_horizon_at_equator() {
        let p = position_from_angles(0.0, 0.0, 180.0);
        assert!(p.elevation_deg < -89.9);
        assert!(!p.is_above_horizon());
    }

    #[test]
    fn enu_vector_is_unit() {
        let p = position_from_angles(26.9, 15.0, -30.0);
        let [e, n, u] = p.enu_unit_vector();
        assert!((e * e + n * n + u * u - 1.0).abs() < 1e-12);
        assert!(e > 0.0, "morning sun has an eastward component");
        assert!(u > 0.0);
    }

    #[test]
    fn instant_based_position_is_deterministic() {
        let c = GeoCoordinate::new(28.6139, 77.209, 216.0).unwrap();
        let t = Instant::from_civil(&CivilTime::new(2024, 3, 20, 12, 0, 0.0, 330)).unwrap();
        let a = solar_position(&c, t);
        let b = solar_position(&c, t);
        assert_eq!(a.elevation_deg.to_bits(), b.elevation_deg.to_bits());
        assert_eq!(a.azimuth_deg.to_bits(), b.azimuth_deg.to_bits());
    }

    #[test]
    fn apparent_config_changes_hour_angle() {
        let c = GeoCoordinate::new(0.0, 0.0, 0.0).unwrap();
        let t = Instant::from_civil(&CivilTime::utc(2023, 11, 3, 12, 0, 0.0)).unwrap();
        let mean = solar_position(&c, t);
        let apparent = solar_position_with(
            &c,
            t,
            &SolarConfig {
                time_model: SolarTimeModel::Apparent,
            },
        );
        assert!(mean.hour_angle_deg.abs() < 1e-9);
        // ~16.4 minutes of time = ~4.1 degrees
        assert!((apparent.hour_angle_deg - 4.1).abs() < 0.1);
    }
}
