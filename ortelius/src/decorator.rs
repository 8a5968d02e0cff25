//! Reader decorator that re-emits features in display coordinates.

use log::debug;
use ortelius_types::{CoordinateConverter, Rect};

use crate::clip;
use crate::error::Error;
use crate::feature::FeatureRecord;
use crate::reader::FeatureReader;

/// Wraps a [`FeatureReader`] and a [`CoordinateConverter`] and re-emits
/// every feature with converted points.
///
/// The wrapped reader keeps its own untransformed features; the decorator
/// owns the converted copies, the bounding box computed from them, and the
/// clip/restore pair operating on the converted list. Both collaborators
/// are exclusively owned: replacing one drops the previous instance.
pub struct TransformingReader {
    path: String,
    inner: Option<Box<dyn FeatureReader>>,
    converter: Option<Box<dyn CoordinateConverter>>,
    features: Vec<FeatureRecord>,
    backup: Vec<FeatureRecord>,
    bounding_box: Option<Rect>,
}

impl TransformingReader {
    /// Creates an empty decorator. A reader and a converter must be set
    /// before the first read.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the inner reader. Does not trigger a read.
    pub fn set_reader(&mut self, reader: Box<dyn FeatureReader>) {
        self.inner = Some(reader);
    }

    /// Replaces the coordinate converter. Does not trigger a read.
    pub fn set_converter(&mut self, converter: Box<dyn CoordinateConverter>) {
        self.converter = Some(converter);
    }

    /// The wrapped reader, if one is set.
    pub fn inner(&self) -> Option<&dyn FeatureReader> {
        self.inner.as_deref()
    }

    /// The converter, if one is set.
    pub fn converter(&self) -> Option<&dyn CoordinateConverter> {
        self.converter.as_deref()
    }

    /// Replaces the live feature list with its intersection against an
    /// axis-aligned rectangle in display coordinates.
    ///
    /// The pre-clip list is kept aside so [`restore`](Self::restore) can
    /// undo the operation. A feature may clip into zero, one or several
    /// output features.
    pub fn clip(&mut self, rect: Rect) {
        self.backup = std::mem::take(&mut self.features);
        let clip_ring = clip::quantize_rect(&rect);
        for record in &self.backup {
            self.features.extend(clip::clip_record(record, &clip_ring));
        }
        debug!(
            "clipped {} features into {}",
            self.backup.len(),
            self.features.len()
        );
    }

    /// Restores the feature list saved by the last [`clip`](Self::clip).
    ///
    /// A second restore without an intervening clip changes nothing.
    pub fn restore(&mut self) {
        if !self.backup.is_empty() {
            self.features = std::mem::take(&mut self.backup);
        }
    }
}

impl Default for TransformingReader {
    fn default() -> Self {
        Self {
            path: String::new(),
            inner: None,
            converter: None,
            features: Vec::new(),
            backup: Vec::new(),
            bounding_box: None,
        }
    }
}

impl FeatureReader for TransformingReader {
    fn read(&mut self) -> Result<(), Error> {
        let inner = self.inner.as_mut().ok_or(Error::MissingReader)?;
        let converter = self.converter.as_ref().ok_or(Error::MissingConverter)?;

        inner.read()?;

        let mut converted = Vec::with_capacity(inner.features().len());
        for record in inner.features() {
            let mut output = record.clone_without_points();
            for point in record.points() {
                let projected = converter.transform(point).ok_or(Error::Projection)?;
                output.add_point(projected);
            }
            converted.push(output);
        }

        self.bounding_box = Rect::from_points(
            converted
                .iter()
                .flat_map(|record| record.points().iter()),
        );
        self.features = converted;
        self.backup.clear();
        debug!(
            "converted {} features ({} points)",
            self.features.len(),
            self.point_count()
        );
        Ok(())
    }

    fn set_path(&mut self, path: &str) {
        self.path = path.to_string();
        if let Some(inner) = self.inner.as_mut() {
            inner.set_path(path);
        }
    }

    fn path(&self) -> &str {
        &self.path
    }

    fn features(&self) -> &[FeatureRecord] {
        &self.features
    }

    fn features_mut(&mut self) -> &mut Vec<FeatureRecord> {
        &mut self.features
    }

    fn bounding_box(&self) -> Option<Rect> {
        self.bounding_box
    }
}
