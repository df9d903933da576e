//! Dhruva-Protha-Chakra: a disk on a polar axis, sighted on the pole star.

use super::{Context, declination_key, format_latitude};
use crate::error::GeometryError;
use crate::spec::SpecBuilder;

pub(super) fn populate(ctx: &Context<'_>, b: &mut SpecBuilder) -> Result<(), GeometryError> {
    let disk = ctx.part("disk_radius")?;
    let hole = ctx.part("central_hole_radius")?;
    let pole_elevation = ctx.abs_latitude_deg();
    let tilt = ctx.colatitude_deg();

    b.dimension("base_diameter", 2.5 * disk)
        .angle("pole_elevation", pole_elevation)
        .angle("disk_tilt_angle", tilt)
        .angle("latitude_setting", ctx.latitude_deg());
    for dec in (-30..=30).step_by(10) {
        b.dimension(
            declination_key("declination_radius", dec),
            disk * (dec as f64).to_radians().cos(),
        );
    }

    let pole = if ctx.latitude_deg() < 0.0 {
        "south celestial pole"
    } else {
        "pole star"
    };
    b.note(format!("Turn a circular disk of radius {disk:.2} m"))
        .note(format!(
            "Tilt the disk {tilt:.2}° from the horizontal so its axis is parallel to the Earth's"
        ))
        .note(format!(
            "Bore a {:.0} mm sighting hole at the center",
            2000.0 * hole
        ))
        .note("Mark 24 hour divisions around the circumference")
        .note("Mount on a bearing so the disk turns freely about its axis")
        .note(format!(
            "The {pole} stands {pole_elevation:.2}° above the horizon at {}",
            format_latitude(ctx.latitude_deg())
        ));
    Ok(())
}
