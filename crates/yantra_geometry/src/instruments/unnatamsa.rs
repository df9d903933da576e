//! Unnatamsa: a vertical quadrant facing the equator for solar altitude.

use yantra_solar::{MAX_DECLINATION_DEG, elevation_deg, meridian_altitude_deg};

use super::Context;
use crate::error::GeometryError;
use crate::hour_table::{HourTable, hour_angle_for_hour};
use crate::spec::SpecBuilder;

pub(super) fn populate(ctx: &Context<'_>, b: &mut SpecBuilder) -> Result<(), GeometryError> {
    let radius = ctx.part("quadrant_radius")?;
    let lat = ctx.latitude_deg();
    let june = meridian_altitude_deg(lat, MAX_DECLINATION_DEG);
    let december = meridian_altitude_deg(lat, -MAX_DECLINATION_DEG);
    // Compass bearing the quadrant faces: toward the noon sun at equinox.
    let facing = if lat < 0.0 { 0.0 } else { 180.0 };

    b.angle("quadrant_bearing", facing)
        .angle("max_altitude_june_solstice", june)
        .angle("max_altitude_equinox", meridian_altitude_deg(lat, 0.0))
        .angle("max_altitude_december_solstice", december)
        .angle("latitude_complement", ctx.colatitude_deg());
    for (hour, _) in ctx.table.iter() {
        let key = HourTable::key(hour).replacen("hour", "equinox_altitude", 1);
        b.angle(key, elevation_deg(lat, 0.0, hour_angle_for_hour(hour)));
    }

    b.note(format!("Construct a quarter-circle arc of radius {radius:.2} m"))
        .note(format!("Mount it vertically facing bearing {facing:.0}°"))
        .note(format!("Noon altitude at the June solstice: {june:.2}°"))
        .note(format!("Noon altitude at the December solstice: {december:.2}°"))
        .note("Fit a sighting arm pivoting at the arc center")
        .note("Mark the altitude scale every 5° on the arc");
    Ok(())
}
