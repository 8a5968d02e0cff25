//! Source-format boundary of the viewer.

use ortelius_types::Rect;

use crate::error::Error;
use crate::feature::FeatureRecord;

/// A stateful source of vector features read from a file.
///
/// A successful [`read`](FeatureReader::read) replaces the feature list
/// wholesale; there is no incremental update. The bounding box always
/// encloses every point of every record and is `None` exactly when the
/// collection holds no points at all. Records are produced in file order
/// with geodetic-degree coordinates and string-valued fields, and no two
/// records share storage.
pub trait FeatureReader {
    /// Reads the configured file, replacing previously read features.
    ///
    /// On failure the previously read features are left in place.
    fn read(&mut self) -> Result<(), Error>;

    /// Sets the path of the file to read. Does not trigger a read.
    fn set_path(&mut self, path: &str);

    /// Path of the file this reader reads.
    fn path(&self) -> &str;

    /// Features produced by the last successful read.
    fn features(&self) -> &[FeatureRecord];

    /// Mutable access to the feature list.
    fn features_mut(&mut self) -> &mut Vec<FeatureRecord>;

    /// Bounding box of all feature points, if there are any.
    fn bounding_box(&self) -> Option<Rect>;

    /// Total number of points over all features.
    fn point_count(&self) -> usize {
        self.features()
            .iter()
            .map(|record| record.points().len())
            .sum()
    }

    /// Convenience: points the reader at a new file and reads it.
    fn read_from(&mut self, path: &str) -> Result<(), Error> {
        self.set_path(path);
        self.read()
    }
}
