//! Per-instrument generators.
//!
//! Every generator starts from the same base: the reference parts rescaled
//! for latitude and caller scale, the hour table, the accuracy metrics and
//! two provenance notes. Each instrument then adds its own angles, derived
//! dimensions and construction notes.

mod chakra;
mod digamsa;
mod dhruva;
mod jai_prakash;
mod kapala;
mod rama;
mod samrat;
mod unnatamsa;

use yantra_time::GeoCoordinate;

use crate::accuracy::accuracy_metrics;
use crate::error::GeometryError;
use crate::hour_table::HourTable;
use crate::kind::InstrumentKind;
use crate::reference::{ReferencePart, ReferenceSite, Scaling};
use crate::spec::{GeometrySpec, SpecBuilder};

/// Inputs shared by all generators.
pub(crate) struct Context<'a> {
    pub kind: InstrumentKind,
    pub coordinate: &'a GeoCoordinate,
    pub scale_factor: f64,
    pub site: ReferenceSite,
    pub latitude_scale: f64,
    pub table: &'a HourTable,
    pub parts: &'static [ReferencePart],
}

impl Context<'_> {
    pub fn latitude_deg(&self) -> f64 {
        self.coordinate.latitude_deg()
    }

    pub fn abs_latitude_deg(&self) -> f64 {
        self.coordinate.latitude_deg().abs()
    }

    pub fn colatitude_deg(&self) -> f64 {
        self.coordinate.colatitude_deg()
    }

    fn apply(&self, part: &ReferencePart) -> f64 {
        match part.scaling {
            Scaling::Latitude => part.meters * self.latitude_scale * self.scale_factor,
            Scaling::Fixed => part.meters * self.scale_factor,
        }
    }

    /// A reference part, rescaled.
    pub fn part(&self, key: &str) -> Result<f64, GeometryError> {
        self.parts
            .iter()
            .find(|p| p.key == key)
            .map(|p| self.apply(p))
            .ok_or_else(|| {
                GeometryError::InconsistentGeometry(format!(
                    "{} reference at {} lacks '{key}'",
                    self.kind, self.site
                ))
            })
    }

    /// A fixed construction allowance in meters, times the caller scale.
    pub fn allowance(&self, meters: f64) -> f64 {
        meters * self.scale_factor
    }
}

/// Latitude as `26.92°N`.
pub(crate) fn format_latitude(lat: f64) -> String {
    let hemisphere = if lat < 0.0 { 'S' } else { 'N' };
    format!("{:.2}°{hemisphere}", lat.abs())
}

/// Key for a declination-indexed value, e.g. `declination_radius_s24`.
pub(crate) fn declination_key(prefix: &str, declination: i32) -> String {
    let sign = if declination < 0 { 's' } else { 'n' };
    format!("{prefix}_{sign}{:02}", declination.unsigned_abs())
}

pub(crate) fn build(ctx: &Context<'_>) -> Result<GeometrySpec, GeometryError> {
    let mut b = SpecBuilder::new(
        ctx.kind,
        *ctx.coordinate,
        ctx.scale_factor,
        ctx.latitude_scale,
        ctx.site,
        ctx.table.projection(),
    );
    for part in ctx.parts {
        b.dimension(part.key, ctx.apply(part));
    }
    b.hour_table(ctx.table);
    for (key, value) in accuracy_metrics(ctx.kind, ctx.scale_factor, ctx.table) {
        b.metric(key, value);
    }
    b.note(format!(
        "Based on the {} at {} ({}, {:.2}°E)",
        ctx.kind,
        ctx.site.landmark(),
        format_latitude(ctx.site.latitude_deg()),
        ctx.site.longitude_deg()
    ));
    b.note(format!(
        "Scaled for latitude {} (latitude scale {:.3}, overall scale {:.2})",
        format_latitude(ctx.latitude_deg()),
        ctx.latitude_scale,
        ctx.scale_factor
    ));

    match ctx.kind {
        InstrumentKind::Samrat => samrat::populate(ctx, &mut b)?,
        InstrumentKind::Rama => rama::populate(ctx, &mut b)?,
        InstrumentKind::JaiPrakash => jai_prakash::populate(ctx, &mut b)?,
        InstrumentKind::Digamsa => digamsa::populate(ctx, &mut b)?,
        InstrumentKind::DhruvaProthaChakra => dhruva::populate(ctx, &mut b)?,
        InstrumentKind::Kapala => kapala::populate(ctx, &mut b)?,
        InstrumentKind::Chakra => chakra::populate(ctx, &mut b)?,
        InstrumentKind::Unnatamsa => unnatamsa::populate(ctx, &mut b)?,
    }

    if !ctx.table.is_reference_fidelity() {
        b.note(
            "Hour lines use the linear 15° per hour approximation, \
             a lower-fidelity fallback to the dial projection",
        );
    }
    b.build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latitude_formatting() {
        assert_eq!(format_latitude(26.9124), "26.91°N");
        assert_eq!(format_latitude(-33.8688), "33.87°S");
    }

    #[test]
    fn declination_keys() {
        assert_eq!(declination_key("declination_radius", -24), "declination_radius_s24");
        assert_eq!(declination_key("declination_radius", 0), "declination_radius_n00");
        assert_eq!(declination_key("declination_circle", 6), "declination_circle_n06");
    }
}
