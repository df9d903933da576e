//! Rama: paired open cylinders with a central pillar, read for altitude
//! on the radial walls and for azimuth around the floor.

use super::Context;
use crate::error::GeometryError;
use crate::spec::SpecBuilder;

const NUM_SECTORS: u32 = 12;

pub(super) fn populate(ctx: &Context<'_>, b: &mut SpecBuilder) -> Result<(), GeometryError> {
    let outer = ctx.part("outer_radius")?;
    let inner = ctx.part("inner_radius")?;
    let sector_angle = 360.0 / NUM_SECTORS as f64;

    b.dimension("num_sectors", NUM_SECTORS as f64)
        .angle("sector_angle", sector_angle);
    for az in (0..360).step_by(30) {
        b.angle(format!("azimuth_{az:03}"), az as f64);
    }
    for alt in (0..=90).step_by(10) {
        let r = inner + (outer - inner) * alt as f64 / 90.0;
        b.dimension(format!("altitude_ring_{alt:02}"), r);
    }

    b.note(format!("Build the circular wall with outer radius {outer:.2} m"))
        .note(format!("Leave an inner measuring floor of radius {inner:.2} m"))
        .note(format!(
            "Divide into {NUM_SECTORS} sectors of {sector_angle:.0}° each, alternating between the two cylinders"
        ))
        .note("Mark altitude scales on the radial walls and floor")
        .note("Level the floor precisely and center the sighting pillar");
    Ok(())
}
