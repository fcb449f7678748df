//! Web Mercator Projection
//!
//! Projects lon/lat into the pixel space of a fixed viewport and works out
//! which slippy-map tiles cover it.

use std::f64::consts::PI;

use super::geojson::{lon_lat, Geometry, Position};

pub const TILE_SIZE: f64 = 256.0;

/// Latitude limit of the square Web Mercator world
const MAX_LATITUDE: f64 = 85.051_128_78;

/// World pixel coordinates of a lon/lat at a zoom level
pub fn world_pixel(lon: f64, lat: f64, zoom: u32) -> (f64, f64) {
    let size = TILE_SIZE * f64::from(1u32 << zoom);
    let lat = lat.clamp(-MAX_LATITUDE, MAX_LATITUDE).to_radians();

    let x = (lon + 180.0) / 360.0 * size;
    let y = (1.0 - (lat.tan() + 1.0 / lat.cos()).ln() / PI) / 2.0 * size;
    (x, y)
}

/// A single map tile placed in viewport pixels
#[derive(Clone, Debug, PartialEq)]
pub struct Tile {
    pub x: u32,
    pub y: u32,
    pub z: u32,
    pub left: f64,
    pub top: f64,
}

impl Tile {
    /// Fill a `{z}/{x}/{y}` URL template
    pub fn url(&self, template: &str) -> String {
        template
            .replace("{z}", &self.z.to_string())
            .replace("{x}", &self.x.to_string())
            .replace("{y}", &self.y.to_string())
    }
}

/// Shapes ready to be drawn as SVG
#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    /// Closed area, as an SVG path `d` attribute
    Area(String),
    /// Open line, as an SVG `points` attribute
    Line(String),
    Dot(f64, f64),
}

/// Fixed rectangular view onto the map
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub center_lat: f64,
    pub center_lon: f64,
    pub zoom: u32,
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(center: (f64, f64), zoom: u32, width: f64, height: f64) -> Self {
        Self {
            center_lat: center.0,
            center_lon: center.1,
            zoom,
            width,
            height,
        }
    }

    /// World pixel of the viewport's top-left corner
    fn origin(&self) -> (f64, f64) {
        let (cx, cy) = world_pixel(self.center_lon, self.center_lat, self.zoom);
        (cx - self.width / 2.0, cy - self.height / 2.0)
    }

    /// Viewport pixel of a lon/lat
    pub fn project(&self, lon: f64, lat: f64) -> (f64, f64) {
        let (ox, oy) = self.origin();
        let (x, y) = world_pixel(lon, lat, self.zoom);
        (x - ox, y - oy)
    }

    pub fn contains(&self, x: f64, y: f64) -> bool {
        (0.0..=self.width).contains(&x) && (0.0..=self.height).contains(&y)
    }

    /// Tiles covering the viewport, row by row
    pub fn tiles(&self) -> Vec<Tile> {
        let (ox, oy) = self.origin();
        let count = 1i64 << self.zoom;

        let first_x = (ox / TILE_SIZE).floor() as i64;
        let last_x = ((ox + self.width - 1.0) / TILE_SIZE).floor() as i64;
        let first_y = ((oy / TILE_SIZE).floor() as i64).max(0);
        let last_y = (((oy + self.height - 1.0) / TILE_SIZE).floor() as i64).min(count - 1);

        let mut tiles = Vec::new();
        for ty in first_y..=last_y {
            for tx in first_x..=last_x {
                tiles.push(Tile {
                    // wrap around the antimeridian
                    x: tx.rem_euclid(count) as u32,
                    y: ty as u32,
                    z: self.zoom,
                    left: tx as f64 * TILE_SIZE - ox,
                    top: ty as f64 * TILE_SIZE - oy,
                });
            }
        }
        tiles
    }

    fn project_all(&self, positions: &[Position]) -> Vec<(f64, f64)> {
        positions
            .iter()
            .filter_map(|p| lon_lat(p))
            .map(|(lon, lat)| self.project(lon, lat))
            .collect()
    }

    /// SVG path for a polygon (outer ring plus holes)
    pub fn polygon_path(&self, rings: &[Vec<Position>]) -> Option<String> {
        let mut d = String::new();
        for ring in rings {
            let points = self.project_all(ring);
            if points.len() < 3 {
                continue;
            }
            for (i, (x, y)) in points.iter().enumerate() {
                let cmd = if i == 0 { 'M' } else { 'L' };
                if !d.is_empty() {
                    d.push(' ');
                }
                d.push_str(&format!("{}{:.1} {:.1}", cmd, x, y));
            }
            d.push_str(" Z");
        }
        (!d.is_empty()).then_some(d)
    }

    fn polyline_points(&self, line: &[Position]) -> Option<String> {
        let points = self.project_all(line);
        if points.len() < 2 {
            return None;
        }
        Some(
            points
                .iter()
                .map(|(x, y)| format!("{:.1},{:.1}", x, y))
                .collect::<Vec<_>>()
                .join(" "),
        )
    }

    fn dot(&self, position: &[f64]) -> Option<Shape> {
        let (lon, lat) = lon_lat(position)?;
        let (x, y) = self.project(lon, lat);
        Some(Shape::Dot(x, y))
    }

    /// Drawable shapes for any geometry; unsupported parts are dropped
    pub fn shapes(&self, geometry: &Geometry) -> Vec<Shape> {
        match geometry {
            Geometry::Point { coordinates } => self.dot(coordinates).into_iter().collect(),
            Geometry::MultiPoint { coordinates } => {
                coordinates.iter().filter_map(|p| self.dot(p)).collect()
            }
            Geometry::LineString { coordinates } => self
                .polyline_points(coordinates)
                .map(Shape::Line)
                .into_iter()
                .collect(),
            Geometry::MultiLineString { coordinates } => coordinates
                .iter()
                .filter_map(|line| self.polyline_points(line))
                .map(Shape::Line)
                .collect(),
            Geometry::Polygon { coordinates } => self
                .polygon_path(coordinates)
                .map(Shape::Area)
                .into_iter()
                .collect(),
            Geometry::MultiPolygon { coordinates } => coordinates
                .iter()
                .filter_map(|polygon| self.polygon_path(polygon))
                .map(Shape::Area)
                .collect(),
            Geometry::GeometryCollection { geometries } => {
                geometries.iter().flat_map(|g| self.shapes(g)).collect()
            }
            Geometry::Unsupported => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn singapore() -> Viewport {
        Viewport::new((1.3521, 103.8198), 12, 960.0, 640.0)
    }

    #[test]
    fn test_world_pixel_origin() {
        let (x, y) = world_pixel(0.0, 0.0, 0);
        assert!((x - 128.0).abs() < 1e-9);
        assert!((y - 128.0).abs() < 1e-9);
    }

    #[test]
    fn test_center_projects_to_middle() {
        let vp = singapore();
        let (x, y) = vp.project(103.8198, 1.3521);
        assert!((x - 480.0).abs() < 1e-6);
        assert!((y - 320.0).abs() < 1e-6);
        assert!(vp.contains(x, y));
    }

    #[test]
    fn test_north_is_up_east_is_right() {
        let vp = singapore();
        let (x0, y0) = vp.project(103.8198, 1.3521);
        let (x1, y1) = vp.project(103.9, 1.4);
        assert!(x1 > x0);
        assert!(y1 < y0);
    }

    #[test]
    fn test_tiles_cover_viewport() {
        let vp = singapore();
        let tiles = vp.tiles();
        assert!(!tiles.is_empty());

        let min_left = tiles.iter().map(|t| t.left).fold(f64::INFINITY, f64::min);
        let min_top = tiles.iter().map(|t| t.top).fold(f64::INFINITY, f64::min);
        let max_right = tiles.iter().map(|t| t.left + TILE_SIZE).fold(f64::NEG_INFINITY, f64::max);
        let max_bottom = tiles.iter().map(|t| t.top + TILE_SIZE).fold(f64::NEG_INFINITY, f64::max);

        assert!(min_left <= 0.0 && min_top <= 0.0);
        assert!(max_right >= 960.0 && max_bottom >= 640.0);
        assert!(tiles.iter().all(|t| t.z == 12));
        // 960 px wide needs 4 or 5 columns, 640 px tall needs 3 or 4 rows
        assert!((12..=20).contains(&tiles.len()));
    }

    #[test]
    fn test_tile_url_template() {
        let tile = Tile { x: 3229, y: 2031, z: 12, left: 0.0, top: 0.0 };
        assert_eq!(
            tile.url("https://tile.openstreetmap.org/{z}/{x}/{y}.png"),
            "https://tile.openstreetmap.org/12/3229/2031.png"
        );
    }

    #[test]
    fn test_zoomed_out_tiles_stay_in_range() {
        let vp = Viewport::new((0.0, 179.0), 1, 960.0, 640.0);
        for tile in vp.tiles() {
            assert!(tile.x < 2);
            assert!(tile.y < 2);
        }
    }

    #[test]
    fn test_polygon_shapes() {
        let vp = singapore();
        let geometry = Geometry::Polygon {
            coordinates: vec![vec![
                vec![103.80, 1.30, 0.0],
                vec![103.81, 1.30, 0.0],
                vec![103.81, 1.31, 0.0],
                vec![103.80, 1.30, 0.0],
            ]],
        };
        let shapes = vp.shapes(&geometry);
        assert_eq!(shapes.len(), 1);
        match &shapes[0] {
            Shape::Area(d) => {
                assert!(d.starts_with('M'));
                assert!(d.ends_with('Z'));
                assert_eq!(d.matches('L').count(), 3);
            }
            other => panic!("expected area, got {:?}", other),
        }
    }

    #[test]
    fn test_degenerate_geometry_is_dropped() {
        let vp = singapore();
        let line = Geometry::LineString { coordinates: vec![vec![103.8, 1.3]] };
        assert!(vp.shapes(&line).is_empty());
        assert!(vp.shapes(&Geometry::Unsupported).is_empty());

        let multi = Geometry::MultiPoint {
            coordinates: vec![vec![103.8, 1.3], vec![f64::NAN, 1.3]],
        };
        assert_eq!(vp.shapes(&multi).len(), 1);
    }
}
