//! Developed rolls, favorites and gallery layout.
//!
//! File enumeration is left to the caller; this module works on names and
//! paths it is given.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Timestamp layout of roll ids, e.g. `20240309_140507`.
pub const ROLL_ID_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Directory holding practice shots, which is never a roll.
pub const COMPOSITION_DIR: &str = "Composition";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid roll id {id:?}: expected YYYYMMDD_HHMMSS")]
pub struct RollIdError {
    pub id: String,
}

/// Identifier of a developed roll: the local time it was developed.
///
/// Ids compare chronologically because the format is fixed-width.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RollId(String);

impl RollId {
    pub fn from_datetime(developed_at: NaiveDateTime) -> Self {
        Self(developed_at.format(ROLL_ID_FORMAT).to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn developed_at(&self) -> Option<NaiveDateTime> {
        NaiveDateTime::parse_from_str(&self.0, ROLL_ID_FORMAT).ok()
    }

    /// Title shown above a roll's gallery and contact sheet.
    pub fn title(&self) -> String {
        format!("Roll #{}", self.0)
    }
}

impl fmt::Display for RollId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for RollId {
    type Err = RollIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Re-format to reject non-canonical spellings chrono would accept.
        match NaiveDateTime::parse_from_str(s, ROLL_ID_FORMAT) {
            Ok(dt) if dt.format(ROLL_ID_FORMAT).to_string() == s => Ok(Self(s.to_string())),
            _ => Err(RollIdError { id: s.to_string() }),
        }
    }
}

impl TryFrom<String> for RollId {
    type Error = RollIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<RollId> for String {
    fn from(value: RollId) -> Self {
        value.0
    }
}

/// Roll ids among directory names, newest first.
///
/// The practice directory and anything that is not a roll id are skipped.
pub fn developed_rolls<'a, I>(dir_names: I) -> Vec<RollId>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut rolls: Vec<RollId> = dir_names
        .into_iter()
        .filter(|name| *name != COMPOSITION_DIR)
        .filter_map(|name| name.parse().ok())
        .collect();
    rolls.sort_unstable_by(|a, b| b.cmp(a));
    rolls
}

/// True for `.jpg` / `.jpeg` file names, any case.
pub fn is_jpeg_name(name: &str) -> bool {
    name.rsplit_once('.').is_some_and(|(stem, ext)| {
        !stem.is_empty() && (ext.eq_ignore_ascii_case("jpg") || ext.eq_ignore_ascii_case("jpeg"))
    })
}

/// Photo paths the user starred.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Favorites {
    paths: BTreeSet<String>,
}

impl Favorites {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, path: &str) -> bool {
        self.paths.contains(path)
    }

    /// Flip the favorite flag. Returns whether `path` is now a favorite.
    pub fn toggle(&mut self, path: &str) -> bool {
        if self.paths.remove(path) {
            false
        } else {
            self.paths.insert(path.to_string());
            true
        }
    }

    /// Drop entries whose file no longer exists.
    pub fn retain_existing<F>(&mut self, mut exists: F)
    where
        F: FnMut(&str) -> bool,
    {
        self.paths.retain(|path| exists(path));
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Paths in portfolio display order. Capture file names embed a
    /// timestamp, so reverse-lexical order puts recent shots first.
    pub fn newest_first(&self) -> impl Iterator<Item = &str> {
        self.paths.iter().rev().map(String::as_str)
    }
}

/// Which grid of thumbnails is being shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GalleryView<'a> {
    /// Practice shots.
    Composition,
    /// Favorites.
    Portfolio,
    /// A developed roll and the format label it was shot in.
    Roll { ratio_label: &'a str },
}

impl GalleryView<'_> {
    /// Thumbnail columns. Wider formats get fewer columns so each
    /// frame stays legible.
    pub fn columns(&self, landscape: bool) -> u32 {
        let (portrait, wide) = match self {
            GalleryView::Composition => (3, 5),
            GalleryView::Portfolio => (2, 4),
            GalleryView::Roll { ratio_label } => match *ratio_label {
                "6x6" => (3, 5),
                "6x7" => (3, 4),
                "6x9" => (2, 3),
                "6x12" => (1, 2),
                _ => (3, 5),
            },
        };
        if landscape {
            wide
        } else {
            portrait
        }
    }
}
