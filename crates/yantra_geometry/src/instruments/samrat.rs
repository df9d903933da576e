//! Samrat: the great equinoctial sundial.
//!
//! A right-triangular gnomon stands in the meridian with its hypotenuse
//! parallel to the Earth's axis, so the edge makes the colatitude with the
//! vertical. Two quadrant scales on either side carry the hour lines.

use yantra_solar::{MAX_DECLINATION_DEG, elevation_deg};

use super::{Context, format_latitude};
use crate::error::GeometryError;
use crate::hour_table::{HourTable, hour_angle_for_hour};
use crate::spec::SpecBuilder;

/// Below this sun altitude the shadow tip leaves the dial.
const MIN_SHADOW_ELEVATION_DEG: f64 = 0.5;

/// Declinations of the seasonal shadow curves, keyed by prefix.
const SEASONS: [(&str, f64); 3] = [
    ("equinox_shadow", 0.0),
    ("june_solstice_shadow", MAX_DECLINATION_DEG),
    ("december_solstice_shadow", -MAX_DECLINATION_DEG),
];

pub(super) fn populate(ctx: &Context<'_>, b: &mut SpecBuilder) -> Result<(), GeometryError> {
    let lat = ctx.latitude_deg();
    let gnomon_angle = ctx.colatitude_deg();
    // The gnomon points at the elevated celestial pole.
    let base_orientation = if lat < 0.0 { 180.0 } else { 0.0 };
    let gnomon_height = ctx.part("gnomon_height")?;
    let base_length = ctx.part("base_length")?;

    b.angle("gnomon_angle", gnomon_angle)
        .angle("hypotenuse_elevation", ctx.abs_latitude_deg())
        .angle("base_orientation", base_orientation);

    // Shadow of the gnomon tip on level ground per hour line, at the
    // equinox and both solstices.
    for (prefix, dec) in SEASONS {
        for (hour, _) in ctx.table.iter() {
            let el = elevation_deg(lat, dec, hour_angle_for_hour(hour));
            if el > MIN_SHADOW_ELEVATION_DEG {
                let key = HourTable::key(hour).replacen("hour", prefix, 1);
                b.dimension(key, gnomon_height / el.to_radians().tan());
            }
        }
    }

    let pole = if lat < 0.0 { "south" } else { "north" };
    b.note(format!(
        "Incline the gnomon hypotenuse at {:.2}° to the horizontal, {gnomon_angle:.2}° from the vertical",
        ctx.abs_latitude_deg()
    ))
    .note(format!(
        "Align the base on the true north-south line with the gnomon rising toward the {pole}"
    ))
    .note(format!(
        "Gnomon height {gnomon_height:.2} m over a {base_length:.2} m base at {}",
        format_latitude(lat)
    ))
    .note("Mark hour lines on both quadrants at the tabulated dial angles")
    .note("Trace the equinox and solstice shadow curves as seasonal guides")
    .note("Add steps along the quadrants for safe access to readings");
    Ok(())
}
