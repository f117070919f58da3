use glam::DVec2;

/// Numeric tile id: `0` is walkable floor, `n > 0` is a wall drawn with wall
/// texture `n - 1`.
pub type TileId = u16;

/// Id of an empty, walkable tile.
pub const EMPTY: TileId = 0;

/// Things that make a grid unusable as a map.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum MapError {
    #[error("map has no tiles")]
    Empty,

    #[error("row {row} has {found} tiles, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("border tile ({x}, {y}) is empty - map is not enclosed")]
    Unenclosed { x: usize, y: usize },
}

/// Static 2-D grid of tile ids, row-major (`y` selects the row).
///
/// Immutable after load.  Every lookup is bounds-checked, so a map that was
/// never checked with [`TileMap::check_enclosed`] still cannot be indexed
/// out of range.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TileMap {
    width: usize,
    height: usize,
    tiles: Vec<TileId>,
}

impl TileMap {
    /// Build a map from rows of tile ids.  All rows must have the same length.
    pub fn from_rows<R>(rows: &[R]) -> Result<Self, MapError>
    where
        R: AsRef<[TileId]>,
    {
        let width = rows.first().map(|r| r.as_ref().len()).unwrap_or(0);
        if width == 0 {
            return Err(MapError::Empty);
        }

        let mut tiles = Vec::with_capacity(width * rows.len());
        for (row, r) in rows.iter().enumerate() {
            let r = r.as_ref();
            if r.len() != width {
                return Err(MapError::Ragged {
                    row,
                    expected: width,
                    found: r.len(),
                });
            }
            tiles.extend_from_slice(r);
        }

        Ok(Self {
            width,
            height: rows.len(),
            tiles,
        })
    }

    /// A `width × height` room whose border is `wall` and interior is empty.
    pub fn walled(width: usize, height: usize, wall: TileId) -> Result<Self, MapError> {
        if width == 0 || height == 0 {
            return Err(MapError::Empty);
        }
        let tiles = (0..height)
            .flat_map(|y| {
                (0..width).map(move |x| {
                    if x == 0 || y == 0 || x == width - 1 || y == height - 1 {
                        wall
                    } else {
                        EMPTY
                    }
                })
            })
            .collect();
        Ok(Self {
            width,
            height,
            tiles,
        })
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Tile at integer cell `(x, y)`, `None` outside the grid.
    #[inline]
    pub fn get(&self, x: i64, y: i64) -> Option<TileId> {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return None;
        }
        Some(self.tiles[y as usize * self.width + x as usize])
    }

    /// Tile containing the continuous world point `p` (coordinates floored).
    #[inline]
    pub fn tile_at(&self, p: DVec2) -> Option<TileId> {
        if !p.is_finite() {
            return None;
        }
        self.get(p.x.floor() as i64, p.y.floor() as i64)
    }

    /// `true` only for in-bounds empty tiles.
    #[inline]
    pub fn is_walkable(&self, p: DVec2) -> bool {
        self.tile_at(p) == Some(EMPTY)
    }

    /// Verify that every border tile is a wall so rays and players cannot
    /// leave the grid undetected.
    pub fn check_enclosed(&self) -> Result<(), MapError> {
        let (w, h) = (self.width, self.height);
        let border = (0..w)
            .flat_map(|x| [(x, 0), (x, h - 1)])
            .chain((0..h).flat_map(|y| [(0, y), (w - 1, y)]));

        for (x, y) in border {
            if self.tiles[y * w + x] == EMPTY {
                return Err(MapError::Unenclosed { x, y });
            }
        }
        Ok(())
    }

    /// Largest wall id used anywhere in the map (`0` for an all-empty grid).
    pub fn max_wall_id(&self) -> TileId {
        self.tiles.iter().copied().max().unwrap_or(EMPTY)
    }
}
