//! GeoJSON Types
//!
//! Pass-through GeoJSON as served by the dashboard service. Only geometry
//! is typed; properties stay an opaque JSON object.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// `[longitude, latitude, ...]`; extra ordinates (altitude) are ignored
pub type Position = Vec<f64>;

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
pub struct FeatureCollection {
    #[serde(default)]
    pub features: Vec<Feature>,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct Feature {
    #[serde(default)]
    pub geometry: Option<Geometry>,
    #[serde(default)]
    pub properties: Option<Map<String, Value>>,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(tag = "type")]
pub enum Geometry {
    Point { coordinates: Position },
    MultiPoint { coordinates: Vec<Position> },
    LineString { coordinates: Vec<Position> },
    MultiLineString { coordinates: Vec<Vec<Position>> },
    Polygon { coordinates: Vec<Vec<Position>> },
    MultiPolygon { coordinates: Vec<Vec<Vec<Position>>> },
    GeometryCollection { geometries: Vec<Geometry> },
    #[serde(other)]
    Unsupported,
}

/// Split a position into (lon, lat)
pub fn lon_lat(position: &[f64]) -> Option<(f64, f64)> {
    match position {
        [lon, lat, ..] if lon.is_finite() && lat.is_finite() => Some((*lon, *lat)),
        _ => None,
    }
}

impl Feature {
    pub fn property(&self, key: &str) -> Option<&Value> {
        self.properties.as_ref()?.get(key)
    }

    pub fn str_property(&self, key: &str) -> Option<&str> {
        self.property(key)?.as_str()
    }

    /// Numeric property; numeric strings are accepted too
    pub fn f64_property(&self, key: &str) -> Option<f64> {
        match self.property(key)? {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    /// Display name, if the feature carries one
    pub fn name(&self) -> Option<&str> {
        self.str_property("name").or_else(|| self.str_property("Name"))
    }
}

/// A rain gauge reading extracted from a Point feature
#[derive(Clone, Debug, PartialEq)]
pub struct RainfallStation {
    pub name: String,
    pub station_id: String,
    pub rainfall_mm: f64,
    pub lon: f64,
    pub lat: f64,
}

impl RainfallStation {
    pub fn from_feature(feature: &Feature) -> Option<Self> {
        let (lon, lat) = match feature.geometry.as_ref()? {
            Geometry::Point { coordinates } => lon_lat(coordinates)?,
            _ => return None,
        };
        let rainfall_mm = feature.f64_property("rainfall_mm")?;
        let station_id = feature.str_property("stationId").unwrap_or_default().to_string();
        let name = feature
            .name()
            .map(str::to_string)
            .unwrap_or_else(|| station_id.clone());

        Some(Self {
            name,
            station_id,
            rainfall_mm,
            lon,
            lat,
        })
    }

    pub fn is_raining(&self) -> bool {
        self.rainfall_mm > 0.0
    }
}

impl FeatureCollection {
    /// Stations usable as markers; malformed features are skipped
    pub fn rainfall_stations(&self) -> Vec<RainfallStation> {
        self.features
            .iter()
            .filter_map(RainfallStation::from_feature)
            .collect()
    }
}
