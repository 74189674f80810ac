//! Coordinate type definitions

use std::fmt;

use thiserror::Error;

/// Web Mercator valid latitude range
pub const MIN_LAT: f64 = -85.05112878;
pub const MAX_LAT: f64 = 85.05112878;

/// Valid longitude range
pub const MIN_LON: f64 = -180.0;
pub const MAX_LON: f64 = 180.0;

/// A geographic position in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

/// A geographic rectangle in degrees.
///
/// Always normalized: `west <= east` and `south <= north`.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct BoundingBox {
    pub west: f64,
    pub south: f64,
    pub east: f64,
    pub north: f64,
}

impl BoundingBox {
    /// Creates a box from two opposite corners given in any order.
    ///
    /// The arguments follow the `(lon1, lat1, lon2, lat2)` layout; min/max is
    /// taken per axis so callers may pass either diagonal.
    pub fn new(lon1: f64, lat1: f64, lon2: f64, lat2: f64) -> Self {
        Self {
            west: lon1.min(lon2),
            south: lat1.min(lat2),
            east: lon1.max(lon2),
            north: lat1.max(lat2),
        }
    }

    /// Creates a box from an order-agnostic 4-tuple.
    pub fn from_tuple((lon1, lat1, lon2, lat2): (f64, f64, f64, f64)) -> Self {
        Self::new(lon1, lat1, lon2, lat2)
    }

    /// Longitude span in degrees.
    #[inline]
    pub fn width(&self) -> f64 {
        self.east - self.west
    }

    /// Latitude span in degrees.
    #[inline]
    pub fn height(&self) -> f64 {
        self.north - self.south
    }

    /// Returns true if the point lies inside or on the edge of this box.
    pub fn contains(&self, point: GeoPoint) -> bool {
        (self.west..=self.east).contains(&point.lon)
            && (self.south..=self.north).contains(&point.lat)
    }

    /// Returns true if `other` lies entirely within this box.
    pub fn contains_bbox(&self, other: &BoundingBox) -> bool {
        self.west <= other.west
            && self.south <= other.south
            && self.east >= other.east
            && self.north >= other.north
    }

    /// Smallest box enclosing both boxes.
    pub fn union(&self, other: &BoundingBox) -> Self {
        Self {
            west: self.west.min(other.west),
            south: self.south.min(other.south),
            east: self.east.max(other.east),
            north: self.north.max(other.north),
        }
    }

    /// Corner-ordered extent `(xmin, ymax, xmax, ymin)`.
    ///
    /// This is the north-west corner followed by the south-east corner, the
    /// order in which tile-space rows run (north to south).
    pub fn to_nw_se(&self) -> (f64, f64, f64, f64) {
        (self.west, self.north, self.east, self.south)
    }
}

impl fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[W {:.6}, S {:.6}, E {:.6}, N {:.6}]",
            self.west, self.south, self.east, self.north
        )
    }
}

/// One cell of the slippy tile pyramid.
///
/// `x` grows eastward and `y` grows southward. Both are signed so that boxes
/// reaching past the valid world produce representable (out-of-range)
/// indices instead of being clipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize)]
pub struct TileIndex {
    pub x: i64,
    pub y: i64,
    pub zoom: u8,
}

impl TileIndex {
    pub fn new(x: i64, y: i64, zoom: u8) -> Self {
        Self { x, y, zoom }
    }

    /// Number of tiles along one axis at this zoom level.
    ///
    /// Saturates at `i64::MAX` from zoom 63 up, where `2^zoom` no longer
    /// fits an `i64`.
    #[inline]
    pub fn tiles_per_axis(zoom: u8) -> i64 {
        1i64.checked_shl(u32::from(zoom))
            .filter(|n| *n > 0)
            .unwrap_or(i64::MAX)
    }

    /// Returns true if both indices lie within `[0, 2^zoom)`.
    pub fn is_valid(&self) -> bool {
        let n = Self::tiles_per_axis(self.zoom);
        (0..n).contains(&self.x) && (0..n).contains(&self.y)
    }
}

impl fmt::Display for TileIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.zoom, self.x, self.y)
    }
}

/// Errors that can occur during coordinate validation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoordError {
    /// Latitude is outside the Web Mercator range
    #[error("Invalid latitude: {0} (must be between {min} and {max})", min = MIN_LAT, max = MAX_LAT)]
    InvalidLatitude(f64),
    /// Longitude is not a finite number
    #[error("Invalid longitude: {0} (must be a finite number)")]
    InvalidLongitude(f64),
}
