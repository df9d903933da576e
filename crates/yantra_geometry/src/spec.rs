//! The generated geometry specification.

use std::collections::BTreeMap;

use yantra_time::GeoCoordinate;

use crate::error::GeometryError;
use crate::hour_table::{HourProjection, HourTable};
use crate::kind::InstrumentKind;
use crate::reference::ReferenceSite;

/// Full construction geometry of one instrument at one place.
///
/// Dimensions are meters (counts such as `num_sectors` excepted), angles are
/// degrees. A spec is immutable once generated.
#[derive(Debug, Clone, PartialEq)]
pub struct GeometrySpec {
    kind: InstrumentKind,
    coordinate: GeoCoordinate,
    scale_factor: f64,
    latitude_scale: f64,
    reference_site: ReferenceSite,
    projection: HourProjection,
    shadow_caster_height: f64,
    dimensions: BTreeMap<String, f64>,
    angles: BTreeMap<String, f64>,
    accuracy: BTreeMap<String, f64>,
    notes: Vec<String>,
}

impl GeometrySpec {
    pub fn kind(&self) -> InstrumentKind {
        self.kind
    }

    pub fn coordinate(&self) -> &GeoCoordinate {
        &self.coordinate
    }

    pub fn scale_factor(&self) -> f64 {
        self.scale_factor
    }

    /// Factor applied to latitude-dependent parts.
    pub fn latitude_scale(&self) -> f64 {
        self.latitude_scale
    }

    pub fn reference_site(&self) -> ReferenceSite {
        self.reference_site
    }

    /// Projection used for the `hour_HH` angles.
    pub fn hour_projection(&self) -> HourProjection {
        self.projection
    }

    /// Height of the part whose shadow is animated, in meters.
    pub fn shadow_caster_height(&self) -> f64 {
        self.shadow_caster_height
    }

    pub fn dimensions(&self) -> &BTreeMap<String, f64> {
        &self.dimensions
    }

    pub fn angles(&self) -> &BTreeMap<String, f64> {
        &self.angles
    }

    pub fn accuracy(&self) -> &BTreeMap<String, f64> {
        &self.accuracy
    }

    pub fn notes(&self) -> &[String] {
        &self.notes
    }

    pub fn dimension(&self, key: &str) -> Option<f64> {
        self.dimensions.get(key).copied()
    }

    pub fn angle(&self, key: &str) -> Option<f64> {
        self.angles.get(key).copied()
    }

    pub fn metric(&self, key: &str) -> Option<f64> {
        self.accuracy.get(key).copied()
    }

    /// Dial angle of an hour line, if the hour is in the table.
    pub fn hour_angle(&self, hour: u32) -> Option<f64> {
        self.angle(&HourTable::key(hour))
    }

    /// `(hour, dial_angle_deg)` pairs in hour order.
    pub fn hour_lines(&self) -> Vec<(u32, f64)> {
        (0..24)
            .filter_map(|h| self.hour_angle(h).map(|a| (h, a)))
            .collect()
    }
}

/// Incremental construction of a [`GeometrySpec`].
#[derive(Debug)]
pub(crate) struct SpecBuilder {
    kind: InstrumentKind,
    coordinate: GeoCoordinate,
    scale_factor: f64,
    latitude_scale: f64,
    reference_site: ReferenceSite,
    projection: HourProjection,
    dimensions: BTreeMap<String, f64>,
    angles: BTreeMap<String, f64>,
    accuracy: BTreeMap<String, f64>,
    notes: Vec<String>,
}

impl SpecBuilder {
    pub(crate) fn new(
        kind: InstrumentKind,
        coordinate: GeoCoordinate,
        scale_factor: f64,
        latitude_scale: f64,
        reference_site: ReferenceSite,
        projection: HourProjection,
    ) -> Self {
        Self {
            kind,
            coordinate,
            scale_factor,
            latitude_scale,
            reference_site,
            projection,
            dimensions: BTreeMap::new(),
            angles: BTreeMap::new(),
            accuracy: BTreeMap::new(),
            notes: Vec::new(),
        }
    }

    pub(crate) fn dimension(&mut self, key: impl Into<String>, meters: f64) -> &mut Self {
        self.dimensions.insert(key.into(), meters);
        self
    }

    pub(crate) fn angle(&mut self, key: impl Into<String>, degrees: f64) -> &mut Self {
        self.angles.insert(key.into(), degrees);
        self
    }

    pub(crate) fn metric(&mut self, key: impl Into<String>, value: f64) -> &mut Self {
        self.accuracy.insert(key.into(), value);
        self
    }

    pub(crate) fn note(&mut self, note: impl Into<String>) -> &mut Self {
        self.notes.push(note.into());
        self
    }

    pub(crate) fn hour_table(&mut self, table: &HourTable) -> &mut Self {
        for (hour, angle) in table.iter() {
            self.angles.insert(HourTable::key(hour), angle);
        }
        self
    }

    pub(crate) fn get_dimension(&self, key: &str) -> Option<f64> {
        self.dimensions.get(key).copied()
    }

    pub(crate) fn build(self) -> Result<GeometrySpec, GeometryError> {
        let caster_key = self.kind.shadow_caster_key();
        let shadow_caster_height = self.dimensions.get(caster_key).copied().ok_or_else(|| {
            GeometryError::InconsistentGeometry(format!(
                "{} has no '{caster_key}' dimension",
                self.kind
            ))
        })?;
        Ok(GeometrySpec {
            kind: self.kind,
            coordinate: self.coordinate,
            scale_factor: self.scale_factor,
            latitude_scale: self.latitude_scale,
            reference_site: self.reference_site,
            projection: self.projection,
            shadow_caster_height,
            dimensions: self.dimensions,
            angles: self.angles,
            accuracy: self.accuracy,
            notes: self.notes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn builder(kind: InstrumentKind) -> SpecBuilder {
        SpecBuilder::new(
            kind,
            GeoCoordinate::new(26.9, 75.8, 431.0).unwrap(),
            1.0,
            1.0,
            ReferenceSite::Jaipur,
            HourProjection::HorizontalDial,
        )
    }

    #[test]
    fn build_requires_shadow_caster() {
        let b = builder(InstrumentKind::Samrat);
        assert!(matches!(
            b.build(),
            Err(GeometryError::InconsistentGeometry(_))
        ));
    }

    #[test]
    fn build_keeps_note_order_and_caster() {
        let mut b = builder(InstrumentKind::Samrat);
        b.dimension("gnomon_height", 22.6)
            .note("first")
            .note("second")
            .angle("hour_12", 0.0);
        let spec = b.build().unwrap();
        assert_eq!(spec.shadow_caster_height(), 22.6);
        assert_eq!(spec.notes(), ["first".to_string(), "second".to_string()]);
        assert_eq!(spec.hour_angle(12), Some(0.0));
        assert_eq!(spec.hour_lines(), vec![(12, 0.0)]);
        assert_eq!(spec.dimension("missing"), None);
    }
}
