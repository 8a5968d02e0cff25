//! Geometry primitives and the local-plane coordinate transform used by the
//! `ortelius` map viewer.
//!
//! The crate is split between plain planar types ([`PlanePoint`],
//! [`PlaneVector`], [`Rect`]) and the geodetic side: an [`Ellipsoid`]
//! description, the [`GeocentricFrame`] rotation pipeline anchoring a local
//! tangent plane at a reference point, and the [`CoordinateConverter`]
//! capability the feature pipeline consumes.

pub mod angle;
pub mod tolerance;

mod converter;
mod ellipsoid;
mod frame;
mod point;
mod rect;
mod vector;

pub use converter::{CoordinateConverter, GeocentricConverter, IdentityConverter};
pub use ellipsoid::Ellipsoid;
pub use frame::{GeocentricFrame, GeodeticPosition};
pub use point::PlanePoint;
pub use rect::Rect;
pub use vector::PlaneVector;
