//! Jai Prakash: a sunken hemisphere that mirrors the sky. A cross-wire
//! stretched over the rim throws a point shadow onto the inner surface.

use super::{Context, declination_key};
use crate::error::GeometryError;
use crate::spec::SpecBuilder;

pub(super) fn populate(ctx: &Context<'_>, b: &mut SpecBuilder) -> Result<(), GeometryError> {
    let r = ctx.part("hemisphere_radius")?;
    let rim = ctx.part("rim_thickness")?;
    let abs_lat = ctx.abs_latitude_deg();
    let colat = ctx.colatitude_deg();

    b.dimension("equatorial_radius", r * abs_lat.to_radians().cos())
        .dimension("polar_height", r * abs_lat.to_radians().sin())
        .dimension("base_diameter", 2.0 * r + 2.0 * rim)
        .angle("latitude_tilt", abs_lat)
        .angle("celestial_equator_angle", colat);

    // Declination circles: small circles at polar distance 90° − δ.
    for dec in (-24..=24).step_by(6) {
        let d = dec as f64;
        b.dimension(
            declination_key("declination_radius", dec),
            r * d.to_radians().cos(),
        )
        .angle(declination_key("declination_circle", dec), 90.0 - d);
    }

    b.note(format!("Excavate a hemispherical bowl of radius {r:.2} m"))
        .note(format!(
            "Inscribe the celestial equator at {colat:.2}° from the horizontal"
        ))
        .note("Engrave declination circles every 6° for the seasonal sun")
        .note("Engrave hour lines for time measurement")
        .note("Stretch cross-wires over the rim to cast the point shadow")
        .note("Finish the interior smooth, split into two complementary halves for access");
    Ok(())
}
