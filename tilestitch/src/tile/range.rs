//! Rectangular tile ranges and bounding-box enumeration.

use std::fmt;

use serde::Serialize;

use crate::coord::{
    lat_to_tile_fy, lat_to_tile_y, lon_to_tile_fx, lon_to_tile_x, BoundingBox, TileIndex,
};

/// Inclusive rectangle of tile indices at a single zoom level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct TileRange {
    pub min_x: i64,
    pub min_y: i64,
    pub max_x: i64,
    pub max_y: i64,
    pub zoom: u8,
}

impl TileRange {
    /// Creates a range from inclusive corner indices, normalizing each axis.
    pub fn new(x1: i64, y1: i64, x2: i64, y2: i64, zoom: u8) -> Self {
        Self {
            min_x: x1.min(x2),
            min_y: y1.min(y2),
            max_x: x1.max(x2),
            max_y: y1.max(y2),
            zoom,
        }
    }

    /// Computes the bounding rectangle of a set of tiles.
    ///
    /// # Panics
    ///
    /// Panics if `tiles` is empty or if the tiles do not all share one zoom
    /// level. Both are caller contract violations.
    pub fn from_tiles(tiles: &[TileIndex]) -> Self {
        let first = tiles
            .first()
            .unwrap_or_else(|| panic!("a tile range needs at least one tile"));
        let zoom = first.zoom;

        let mut range = Self::new(first.x, first.y, first.x, first.y, zoom);
        for tile in &tiles[1..] {
            assert_eq!(
                tile.zoom, zoom,
                "all tiles must share one zoom level: found {} alongside zoom {}",
                tile, zoom
            );
            range.min_x = range.min_x.min(tile.x);
            range.min_y = range.min_y.min(tile.y);
            range.max_x = range.max_x.max(tile.x);
            range.max_y = range.max_y.max(tile.y);
        }
        range
    }

    /// Number of tile columns, saturating at `u64::MAX`.
    #[inline]
    pub fn width(&self) -> u64 {
        span(self.min_x, self.max_x)
    }

    /// Number of tile rows, saturating at `u64::MAX`.
    #[inline]
    pub fn height(&self) -> u64 {
        span(self.min_y, self.max_y)
    }

    /// Total number of tiles in the range, saturating at `u64::MAX`.
    ///
    /// Boxes reaching far past the world produce ranges too large to count;
    /// those report `u64::MAX` so any tile limit rejects them.
    #[inline]
    pub fn len(&self) -> u64 {
        self.width().saturating_mul(self.height())
    }

    /// Always false; a range holds at least one tile.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Returns true if `tile` is at this zoom and inside the rectangle.
    pub fn contains(&self, tile: &TileIndex) -> bool {
        tile.zoom == self.zoom
            && (self.min_x..=self.max_x).contains(&tile.x)
            && (self.min_y..=self.max_y).contains(&tile.y)
    }

    /// Returns true if every tile lies within `[0, 2^zoom)`.
    pub fn is_within_world(&self) -> bool {
        TileIndex::new(self.min_x, self.min_y, self.zoom).is_valid()
            && TileIndex::new(self.max_x, self.max_y, self.zoom).is_valid()
    }

    /// Returns an iterator over every tile in the range.
    ///
    /// Tiles are yielded column by column: all rows of `min_x`, then all rows
    /// of `min_x + 1`, and so on.
    pub fn tiles(&self) -> TileRangeIterator {
        TileRangeIterator {
            range: *self,
            x: self.min_x,
            y: self.min_y,
            done: false,
        }
    }
}

impl IntoIterator for TileRange {
    type Item = TileIndex;
    type IntoIter = TileRangeIterator;

    fn into_iter(self) -> Self::IntoIter {
        self.tiles()
    }
}

impl fmt::Display for TileRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "z{} x[{}..={}] y[{}..={}] ({}×{})",
            self.zoom,
            self.min_x,
            self.max_x,
            self.min_y,
            self.max_y,
            self.width(),
            self.height()
        )
    }
}

/// Iterator over all tiles in a [`TileRange`].
#[derive(Debug, Clone)]
pub struct TileRangeIterator {
    range: TileRange,
    x: i64,
    y: i64,
    done: bool,
}

impl TileRangeIterator {
    fn remaining(&self) -> u64 {
        if self.done {
            return 0;
        }
        let full_columns = span(self.x, self.range.max_x) - 1;
        let current_column = span(self.y, self.range.max_y);
        full_columns
            .saturating_mul(self.range.height())
            .saturating_add(current_column)
    }
}

/// Inclusive count of `min..=max`, saturating at `u64::MAX`.
#[inline]
fn span(min: i64, max: i64) -> u64 {
    let count = i128::from(max) - i128::from(min) + 1;
    u64::try_from(count).unwrap_or(u64::MAX)
}

impl Iterator for TileRangeIterator {
    type Item = TileIndex;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let tile = TileIndex::new(self.x, self.y, self.range.zoom);

        if self.y < self.range.max_y {
            self.y += 1;
        } else if self.x < self.range.max_x {
            self.y = self.range.min_y;
            self.x += 1;
        } else {
            self.done = true;
        }

        Some(tile)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::try_from(self.remaining()).unwrap_or(usize::MAX);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for TileRangeIterator {}

/// Computes the rectangle of tiles covering `bbox` at `zoom`.
///
/// The northern edge maps to the smallest row because rows grow southward.
/// An eastern or southern edge lying exactly on a tile boundary does not pull
/// in the next tile, so the whole world at zoom 0 is the single tile
/// `(0, 0, 0)`. Indices are not clipped to the world: a box reaching past
/// ±180° or the Mercator latitude limit yields out-of-range indices.
pub fn tiles_for_bbox(bbox: &BoundingBox, zoom: u8) -> TileRange {
    let bbox = BoundingBox::new(bbox.west, bbox.south, bbox.east, bbox.north);

    let min_x = lon_to_tile_x(bbox.west, zoom);
    let min_y = lat_to_tile_y(bbox.north, zoom);
    let max_x = last_index(min_x, lon_to_tile_fx(bbox.east, zoom));
    let max_y = last_index(min_y, lat_to_tile_fy(bbox.south, zoom));

    TileRange {
        min_x,
        min_y,
        max_x,
        max_y,
        zoom,
    }
}

/// Index of the last tile touched by a closing edge at fractional position
/// `edge`, treating the edge as exclusive when it falls on a tile boundary.
#[inline]
fn last_index(first: i64, edge: f64) -> i64 {
    let last = edge.floor() as i64;
    if edge == edge.floor() && last > first {
        last - 1
    } else {
        last
    }
}
