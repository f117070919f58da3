//! Plain-text level files.
//!
//! ```text
//! # comment, anywhere on a line
//! player 2.5 2.5 90        # x y heading°
//! 22222
//! 20002                    # one digit per tile, 0 = empty
//! 22222
//! ```
//!
//! Grid rows and the optional `player` line may appear in any order; rows
//! are read top to bottom.

use std::{fs, io, path::Path};

use glam::DVec2;
use log::info;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::world::{MapError, TileId, TileMap};

#[derive(Debug, thiserror::Error)]
pub enum LevelError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("line {line}: cannot parse `{text}`")]
    Syntax { line: usize, text: String },

    #[error("line {line}: second `player` directive")]
    DuplicatePlayer { line: usize },

    #[error(transparent)]
    Map(#[from] MapError),
}

/// A parsed level: the grid plus an optional player start.
#[derive(Clone, Debug, PartialEq)]
pub struct Level {
    pub map: TileMap,
    /// position (tiles) and heading (degrees)
    pub start: Option<(DVec2, f64)>,
}

static PLAYER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^player\s+(-?\d+(?:\.\d+)?)\s+(-?\d+(?:\.\d+)?)\s+(-?\d+(?:\.\d+)?)$")
        .expect("static regex")
});
static ROW_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]+$").expect("static regex"));

impl Level {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, LevelError> {
        let text = fs::read_to_string(path.as_ref())?;
        let level = Self::parse(&text)?;
        info!(
            "loaded level {} ({}x{})",
            path.as_ref().display(),
            level.map.width(),
            level.map.height()
        );
        Ok(level)
    }

    pub fn parse(text: &str) -> Result<Self, LevelError> {
        let mut rows: Vec<Vec<TileId>> = Vec::new();
        let mut start = None;

        for (idx, raw) in text.lines().enumerate() {
            let line = idx + 1;
            let body = raw.split('#').next().unwrap_or("").trim();
            if body.is_empty() {
                continue;
            }

            if let Some(caps) = PLAYER_RE.captures(body) {
                if start.is_some() {
                    return Err(LevelError::DuplicatePlayer { line });
                }
                // the regex only admits valid decimal numbers
                let num = |i: usize| caps[i].parse::<f64>().unwrap_or_default();
                start = Some((DVec2::new(num(1), num(2)), num(3)));
            } else if ROW_RE.is_match(body) {
                rows.push(body.bytes().map(|b| (b - b'0') as TileId).collect());
            } else {
                return Err(LevelError::Syntax {
                    line,
                    text: body.to_owned(),
                });
            }
        }

        Ok(Self {
            map: TileMap::from_rows(&rows)?,
            start,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SMALL: &str = "\
# tiny room
player 1.5 1.5 -90   # facing up
333
303

333
";

    #[test]
    fn parses_grid_and_start() {
        let level = Level::parse(SMALL).unwrap();
        assert_eq!(level.map.width(), 3);
        assert_eq!(level.map.height(), 3);
        assert_eq!(level.map.get(1, 1), Some(0));
        assert_eq!(level.map.get(2, 2), Some(3));
        assert_eq!(level.start, Some((DVec2::new(1.5, 1.5), -90.0)));
    }

    #[test]
    fn start_is_optional() {
        let level = Level::parse("11\n11\n").unwrap();
        assert_eq!(level.start, None);
    }

    #[test]
    fn junk_line_reports_its_number() {
        let err = Level::parse("111\n1x1\n111\n").unwrap_err();
        assert!(matches!(err, LevelError::Syntax { line: 2, .. }), "{err}");
    }

    #[test]
    fn second_player_line_is_rejected() {
        let err = Level::parse("player 1 1 0\nplayer 2 2 0\n1\n").unwrap_err();
        assert!(matches!(err, LevelError::DuplicatePlayer { line: 2 }));
    }

    #[test]
    fn ragged_grid_surfaces_map_error() {
        let err = Level::parse("111\n10\n111\n").unwrap_err();
        assert!(matches!(err, LevelError::Map(MapError::Ragged { row: 1, .. })));
    }

    #[test]
    fn empty_file_has_no_map() {
        let err = Level::parse("# nothing\n\n").unwrap_err();
        assert!(matches!(err, LevelError::Map(MapError::Empty)));
    }

    #[test]
    fn reads_from_disk() {
        let tmp = tempfile::NamedTempFile::new().expect("tempfile");
        std::fs::write(tmp.path(), SMALL).unwrap();
        let level = Level::from_file(tmp.path()).unwrap();
        assert_eq!(level.map.max_wall_id(), 3);
    }
}
