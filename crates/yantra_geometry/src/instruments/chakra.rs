//! Chakra: nested equatorial, meridian and horizon rings.

use yantra_solar::MAX_DECLINATION_DEG;

use super::Context;
use crate::error::GeometryError;
use crate::spec::SpecBuilder;

pub(super) fn populate(ctx: &Context<'_>, b: &mut SpecBuilder) -> Result<(), GeometryError> {
    let outer = ctx.part("outer_ring_radius")?;
    let colat = ctx.colatitude_deg();

    b.dimension("meridian_ring_radius", 0.9 * outer)
        .dimension("horizon_ring_radius", 0.8 * outer)
        .dimension("central_axis_length", 2.2 * outer)
        // Ring tilts are plane inclinations from the horizontal.
        .angle("equatorial_ring_tilt", colat)
        .angle("meridian_ring_tilt", 90.0)
        .angle("horizon_ring_tilt", 0.0)
        .angle("polar_axis_elevation", ctx.abs_latitude_deg())
        .angle("march_equinox_declination", 0.0)
        .angle("june_solstice_declination", MAX_DECLINATION_DEG)
        .angle("september_equinox_declination", 0.0)
        .angle("december_solstice_declination", -MAX_DECLINATION_DEG);
    for mark in (0..360).step_by(15) {
        b.angle(format!("ring_mark_{mark:03}"), mark as f64);
    }

    b.note(format!("Forge nested rings with outer radius {outer:.2} m"))
        .note(format!(
            "Tilt the equatorial ring {colat:.2}° from the horizontal"
        ))
        .note("Mount the meridian ring vertically in the north-south plane")
        .note("Set the horizon ring level")
        .note("Graduate every ring in 15° hour divisions")
        .note("Let the rings turn independently about the polar axis");
    Ok(())
}
