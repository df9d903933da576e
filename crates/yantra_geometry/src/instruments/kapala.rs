//! Kapala: a bowl dial with a polar gnomon and monthly seasonal curves.

use yantra_solar::MAX_DECLINATION_DEG;

use super::Context;
use crate::error::GeometryError;
use crate::spec::SpecBuilder;

pub(super) fn populate(ctx: &Context<'_>, b: &mut SpecBuilder) -> Result<(), GeometryError> {
    let bowl = ctx.part("bowl_radius")?;
    let rim = ctx.part("rim_width")?;
    let abs_lat = ctx.abs_latitude_deg();

    b.dimension("base_platform_radius", bowl + rim + ctx.allowance(0.5))
        .angle("bowl_tilt", abs_lat)
        .angle("polar_axis_elevation", abs_lat);

    // Mid-month declination starting from the March equinox.
    for month in 1..=12u32 {
        let dec = MAX_DECLINATION_DEG * (30.0 * (month as f64 - 3.0)).to_radians().sin();
        b.angle(format!("seasonal_declination_{month:02}"), dec)
            .dimension(
                format!("seasonal_radius_{month:02}"),
                bowl * dec.to_radians().cos(),
            );
    }

    b.note(format!("Excavate a hemispherical bowl of radius {bowl:.2} m"))
        .note(format!(
            "Set the gnomon parallel to the Earth's axis, {abs_lat:.2}° above the horizontal"
        ))
        .note("Mark hour lines on the rim for time reading")
        .note("Engrave a seasonal curve for each month")
        .note("Provide a drainage hole at the lowest point")
        .note("Finish the interior smooth for a sharp shadow");
    Ok(())
}
