//! Immutable 2D point and axis aligned rectangle values with the coordinate
//! transforms layout code needs.

pub mod geometry;

pub use geometry::{ParseGeometryError, Point, Rect};
