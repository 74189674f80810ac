//! Coordinate conversion module
//!
//! Provides conversions between geographic coordinates (latitude/longitude),
//! Web Mercator meters and slippy-map tile indices.
//!
//! The functions here are pure and unguarded: latitudes at or beyond the poles
//! make the Mercator formulas diverge. Use [`validate_point`] before calling
//! them with untrusted input.

mod types;

pub use types::{BoundingBox, CoordError, GeoPoint, TileIndex, MAX_LAT, MAX_LON, MIN_LAT, MIN_LON};

use std::f64::consts::PI;

/// Equatorial Earth radius used by Web Mercator, in meters.
pub const EARTH_RADIUS_M: f64 = 6_378_137.0;

/// Projects geographic coordinates to Web Mercator meters.
///
/// # Arguments
///
/// * `lat` - Latitude in degrees, strictly between -90 and 90
/// * `lon` - Longitude in degrees
///
/// # Returns
///
/// `(x, y)` in meters from the origin at (0°, 0°).
#[inline]
pub fn project(lat: f64, lon: f64) -> (f64, f64) {
    let lat_rad = lat.to_radians();
    let lon_rad = lon.to_radians();

    let x = EARTH_RADIUS_M * lon_rad;
    let y = EARTH_RADIUS_M * (PI / 4.0 + lat_rad / 2.0).tan().ln();

    (x, y)
}

/// Fractional tile column of a longitude at the given zoom.
#[inline]
pub fn lon_to_tile_fx(lon: f64, zoom: u8) -> f64 {
    let n = 2.0_f64.powi(zoom as i32);
    (lon + 180.0) / 360.0 * n
}

/// Converts a longitude to a tile column at the given zoom.
#[inline]
pub fn lon_to_tile_x(lon: f64, zoom: u8) -> i64 {
    lon_to_tile_fx(lon, zoom).floor() as i64
}

/// Converts a latitude to a tile row at the given zoom.
///
/// Rows increase southward, so the northern edge of a box maps to its
/// smallest row.
#[inline]
pub fn lat_to_tile_y(lat: f64, zoom: u8) -> i64 {
    lat_to_tile_fy(lat, zoom).floor() as i64
}

/// Fractional tile row of a latitude at the given zoom.
#[inline]
pub fn lat_to_tile_fy(lat: f64, zoom: u8) -> f64 {
    let n = 2.0_f64.powi(zoom as i32);
    let lat_rad = lat.to_radians();
    let merc = (lat_rad.tan() + 1.0 / lat_rad.cos()).ln();
    (1.0 - merc / PI) / 2.0 * n
}

/// Returns the geographic rectangle covered by one tile.
pub fn tile_to_bbox(x: i64, y: i64, zoom: u8) -> BoundingBox {
    let n = 2.0_f64.powi(zoom as i32);

    let west = x as f64 / n * 360.0 - 180.0;
    let east = (x + 1) as f64 / n * 360.0 - 180.0;
    let north = row_edge_latitude(y as f64, n);
    let south = row_edge_latitude((y + 1) as f64, n);

    BoundingBox::new(west, south, east, north)
}

/// Inverse Gudermannian of a fractional row position.
#[inline]
fn row_edge_latitude(row: f64, n: f64) -> f64 {
    (PI * (1.0 - 2.0 * row / n)).sinh().atan().to_degrees()
}

/// Converts a geographic point to the tile containing it.
#[inline]
pub fn to_tile_index(point: GeoPoint, zoom: u8) -> TileIndex {
    TileIndex {
        x: lon_to_tile_x(point.lon, zoom),
        y: lat_to_tile_y(point.lat, zoom),
        zoom,
    }
}

/// Converts tile coordinates back to geographic coordinates.
///
/// Returns the latitude/longitude of the tile's northwest corner.
#[inline]
pub fn tile_to_lat_lon(tile: &TileIndex) -> (f64, f64) {
    let bbox = tile_to_bbox(tile.x, tile.y, tile.zoom);
    (bbox.north, bbox.west)
}

/// Checks that a point can be projected without hitting the Mercator
/// singularity.
pub fn validate_point(point: GeoPoint) -> Result<(), CoordError> {
    if !(MIN_LAT..=MAX_LAT).contains(&point.lat) {
        return Err(CoordError::InvalidLatitude(point.lat));
    }
    if !point.lon.is_finite() {
        return Err(CoordError::InvalidLongitude(point.lon));
    }
    Ok(())
}

/// Checks both corners of a bounding box with [`validate_point`].
pub fn validate_bbox(bbox: &BoundingBox) -> Result<(), CoordError> {
    validate_point(GeoPoint::new(bbox.south, bbox.west))?;
    validate_point(GeoPoint::new(bbox.north, bbox.east))
}
