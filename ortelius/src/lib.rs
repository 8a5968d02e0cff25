//! Vector map viewer engine.
//!
//! The engine reads vector GIS files (ESRI shapefiles and MapInfo
//! interchange tables), projects their geodetic coordinates onto the local
//! tangent plane of a configurable map center, and intersects the projected
//! features with a view rectangle. The pieces compose around two seams: the
//! [`FeatureReader`] trait hides the file format, and the
//! [`ortelius_types::CoordinateConverter`] trait hides the projection. The
//! [`TransformingReader`] decorator ties both together and is what a
//! presentation layer talks to.

pub mod error;
pub mod feature;
pub mod formats;
pub mod measure;
pub mod reader;

mod clip;
mod decorator;

pub use decorator::TransformingReader;
pub use error::Error;
pub use feature::{Field, FeatureRecord};
pub use reader::FeatureReader;
