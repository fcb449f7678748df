//! Geo Helpers
//!
//! GeoJSON wire types and the projection used by the map views.

pub mod geojson;
pub mod projection;

pub use geojson::{FeatureCollection, RainfallStation};
pub use projection::{Shape, Viewport};
