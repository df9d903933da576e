//! Digamsa: a pillar ringed by two concentric walls, graduated in azimuth.

use super::Context;
use crate::error::GeometryError;
use crate::spec::SpecBuilder;

const CARDINALS: [(&str, f64); 4] = [
    ("bearing_north", 0.0),
    ("bearing_east", 90.0),
    ("bearing_south", 180.0),
    ("bearing_west", 270.0),
];

pub(super) fn populate(ctx: &Context<'_>, b: &mut SpecBuilder) -> Result<(), GeometryError> {
    let arc_radius = ctx.part("arc_radius")?;
    let base_width = ctx.part("base_width")?;
    let pillar_height = ctx.part("pillar_height")?;

    b.dimension("base_length", base_width)
        .dimension("sighting_rod_length", ctx.allowance(0.5))
        .angle("arc_span", 180.0)
        .angle("latitude_adjustment", ctx.latitude_deg());
    for (key, bearing) in CARDINALS {
        b.angle(key, bearing);
    }
    for az in (0..360).step_by(10) {
        b.angle(format!("azimuth_{az:03}"), az as f64);
    }

    b.note(format!(
        "Raise the central pillar to {pillar_height:.2} m on a {base_width:.2} m square base"
    ))
    .note(format!("Set the graduated arc at radius {arc_radius:.2} m"))
    .note("Orient the base to the cardinal directions from a true-north sighting")
    .note("Engrave azimuth marks every 10° on the wall tops")
    .note("Fit a movable sighting rod for angular readings")
    .note("Level the base precisely before graduating");
    Ok(())
}
