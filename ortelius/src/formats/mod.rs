//! Concrete file-format readers.
//!
//! Each reader decodes one on-disk vector format into [`FeatureRecord`]s
//! with geodetic-degree coordinates and string fields. Multi-part shapes
//! become one record per part, every part carrying a copy of the source
//! record's attributes; the feature model holds a single ring or path per
//! record.

pub mod dbf;
pub mod mif;
pub mod shp;

use std::path::Path;

use log::{debug, warn};
use ortelius_types::Rect;

use crate::error::Error;
use crate::feature::{Field, FeatureRecord};
use crate::reader::FeatureReader;

/// Creates a reader for the given path based on its extension.
pub fn reader_for_path(path: &str) -> Result<Box<dyn FeatureReader>, Error> {
    let extension = Path::new(path)
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or_default()
        .to_ascii_lowercase();
    match extension.as_str() {
        "shp" => Ok(Box::new(ShapefileReader::new(path))),
        "mif" | "mid" => Ok(Box::new(MapInfoReader::new(path))),
        other => Err(Error::UnsupportedFormat(other.to_string())),
    }
}

fn assemble(shapes: Vec<shp::ShapeParts>, attributes: Vec<Vec<Field>>) -> Vec<FeatureRecord> {
    let mut features = Vec::new();
    for (index, parts) in shapes.into_iter().enumerate() {
        let fields = attributes.get(index).cloned().unwrap_or_default();
        for points in parts {
            let mut record = FeatureRecord::new();
            for field in &fields {
                record.add_field(field.clone());
            }
            for point in points {
                record.add_point(point);
            }
            features.push(record);
        }
    }
    features
}

fn bounding_box(features: &[FeatureRecord]) -> Option<Rect> {
    Rect::from_points(features.iter().flat_map(|record| record.points().iter()))
}

fn sibling(path: &str, extension: &str) -> std::path::PathBuf {
    Path::new(path).with_extension(extension)
}

/// Reads ESRI shapefiles: geometry from `.shp`, attributes from the sibling
/// `.dbf` table.
pub struct ShapefileReader {
    path: String,
    features: Vec<FeatureRecord>,
    bounding_box: Option<Rect>,
}

impl ShapefileReader {
    /// Creates a reader for the given `.shp` path.
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            features: Vec::new(),
            bounding_box: None,
        }
    }

    fn load(&self) -> Result<Vec<FeatureRecord>, Error> {
        let data = std::fs::read(&self.path)?;
        let shapes = shp::decode(&data)?;

        let attr_path = sibling(&self.path, "dbf");
        let attributes = match std::fs::read(&attr_path) {
            Ok(bytes) => dbf::decode(&bytes)?,
            Err(_) => {
                warn!("no attribute table at {}", attr_path.display());
                Vec::new()
            }
        };

        let features = assemble(shapes, attributes);
        debug!("read {} features from {}", features.len(), self.path);
        Ok(features)
    }
}

impl FeatureReader for ShapefileReader {
    fn read(&mut self) -> Result<(), Error> {
        let features = self.load()?;
        self.bounding_box = bounding_box(&features);
        self.features = features;
        Ok(())
    }

    fn set_path(&mut self, path: &str) {
        self.path = path.to_string();
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

/// Reads MapInfo interchange tables: geometry from `.mif`, attributes from
/// the sibling `.mid` file.
pub struct MapInfoReader {
    path: String,
    features: Vec<FeatureRecord>,
    bounding_box: Option<Rect>,
}

impl MapInfoReader {
    /// Creates a reader for the given `.mif` (or `.mid`) path.
    pub fn new(path: impl Into<String>) -> Self {
        let mut path = path.into();
        let is_mid = Path::new(&path)
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("mid"));
        if is_mid {
            path = sibling(&path, "mif").to_string_lossy().into_owned();
        }
        Self {
            path,
            features: Vec::new(),
            bounding_box: None,
        }
    }

    fn load(&self) -> Result<Vec<FeatureRecord>, Error> {
        let text = std::fs::read_to_string(&self.path)?;
        let content = mif::decode(&text)?;

        let attr_path = sibling(&self.path, "mid");
        let attributes = match std::fs::read_to_string(&attr_path) {
            Ok(rows) => mif::decode_mid(&rows, content.delimiter, &content.columns),
            Err(_) => {
                warn!("no attribute rows at {}", attr_path.display());
                Vec::new()
            }
        };

        let features = assemble(content.shapes, attributes);
        debug!("read {} features from {}", features.len(), self.path);
        Ok(features)
    }
}

impl FeatureReader for MapInfoReader {
    fn read(&mut self) -> Result<(), Error> {
        let features = self.load()?;
        self.bounding_box = bounding_box(&features);
        self.features = features;
        Ok(())
    }

    fn set_path(&mut self, path: &str) {
        self.path = path.to_string();
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
