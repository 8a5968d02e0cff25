//! In-memory vector feature model shared by the readers, the transform
//! pipeline and the clipper.

use ortelius_types::PlanePoint;
use serde::{Deserialize, Serialize};

/// One named attribute of a feature, kept as raw text.
///
/// Format readers surface every column value as a string; nothing in the
/// viewer needs typed attributes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    name: String,
    value: String,
}

impl Field {
    /// Creates a field.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Field name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Raw field value.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Replaces the field value.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }
}

/// A single vector feature: ordered attributes plus an ordered vertex list.
///
/// The point list is one polygon ring, one polyline or a point set; its
/// order is significant and duplicate points are allowed. A record may hold
/// any number of fields and points, including none of either.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeatureRecord {
    fields: Vec<Field>,
    points: Vec<PlanePoint>,
}

impl FeatureRecord {
    /// Creates an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an attribute field.
    pub fn add_field(&mut self, field: Field) {
        self.fields.push(field);
    }

    /// Appends a vertex.
    pub fn add_point(&mut self, point: PlanePoint) {
        self.points.push(point);
    }

    /// Attribute fields in column order.
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Mutable access to the attribute fields.
    pub fn fields_mut(&mut self) -> &mut Vec<Field> {
        &mut self.fields
    }

    /// Vertices in ring/path order.
    pub fn points(&self) -> &[PlanePoint] {
        &self.points
    }

    /// Mutable access to the vertices.
    pub fn points_mut(&mut self) -> &mut Vec<PlanePoint> {
        &mut self.points
    }

    /// Returns true if the record has no attribute fields.
    pub fn is_fields_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Returns true if the record has no vertices.
    pub fn is_points_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Joins all fields as comma separated `name:value` pairs.
    pub fn fields_to_string(&self) -> String {
        self.fields
            .iter()
            .map(|field| format!("{}:{}", field.name, field.value))
            .collect::<Vec<_>>()
            .join(",")
    }

    /// Copies the record's attributes into a new record with no points.
    ///
    /// Used when clipping splits one input polygon into several output
    /// polygons that all share the same attributes.
    pub fn clone_without_points(&self) -> Self {
        Self {
            fields: self.fields.clone(),
            points: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> FeatureRecord {
        let mut record = FeatureRecord::new();
        record.add_field(Field::new("NAME", "Pripyat"));
        record.add_field(Field::new("KIND", "river"));
        record.add_point(PlanePoint::new(1.0, 2.0));
        record.add_point(PlanePoint::new(3.0, 4.0));
        record
    }

    #[test]
    fn fields_to_string_joins_without_trailing_separator() {
        assert_eq!(sample().fields_to_string(), "NAME:Pripyat,KIND:river");
        assert_eq!(FeatureRecord::new().fields_to_string(), "");
    }

    #[test]
    fn clone_without_points_keeps_fields_only() {
        let record = sample();
        let clone = record.clone_without_points();
        assert_eq!(clone.fields(), record.fields());
        assert!(clone.is_points_empty());
        assert!(!record.is_points_empty());
    }

    #[test]
    fn emptiness_checks() {
        let record = FeatureRecord::new();
        assert!(record.is_fields_empty());
        assert!(record.is_points_empty());
        assert!(!sample().is_fields_empty());
    }

    #[test]
    fn field_value_can_be_replaced() {
        let mut field = Field::new("NAME", "old");
        field.set_value("new");
        assert_eq!(field.value(), "new");
        assert_eq!(field.name(), "NAME");
    }
}
