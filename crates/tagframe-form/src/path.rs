//! Field paths for addressing within value trees
//!
//! Provides [`FieldPath`] for hierarchical addressing of fields within
//! a nested form value: object fields by name, list elements by index.
//!
//! # Examples
//! - `["properties", "options", 2, "label"]` → `properties.options.2.label`
//! - `["title"]` → `title`

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// One step of a field path
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Segment {
    /// Object field by name
    Field(String),
    /// List element by index
    Index(usize),
}

impl Display for Segment {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Field(name) => f.write_str(name),
            Self::Index(i) => write!(f, "{i}"),
        }
    }
}

impl From<&str> for Segment {
    fn from(name: &str) -> Self {
        Self::Field(name.to_string())
    }
}

impl From<usize> for Segment {
    fn from(index: usize) -> Self {
        Self::Index(index)
    }
}

/// Path into a nested form value
///
/// Most paths are short; segments live inline up to a depth of four.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct FieldPath(SmallVec<[Segment; 4]>);

impl FieldPath {
    /// Empty path (the form root)
    #[inline]
    #[must_use]
    pub fn root() -> Self {
        Self(SmallVec::new())
    }

    /// Path of a single named field
    #[inline]
    #[must_use]
    pub fn field(name: impl Into<String>) -> Self {
        Self(SmallVec::from_iter([Segment::Field(name.into())]))
    }

    /// Path segments, root first
    #[inline]
    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.0
    }

    /// Number of segments
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether this is the root path
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Parent path, unless at the root
    #[must_use]
    pub fn parent(&self) -> Option<Self> {
        if self.0.is_empty() {
            None
        } else {
            Some(Self(
                self.0[..self.0.len() - 1].iter().cloned().collect(),
            ))
        }
    }

    /// Last segment, unless at the root
    #[inline]
    #[must_use]
    pub fn last(&self) -> Option<&Segment> {
        self.0.last()
    }

    /// Append a named field, returning the new path
    #[must_use]
    pub fn child(&self, name: impl Into<String>) -> Self {
        let mut new = self.clone();
        new.0.push(Segment::Field(name.into()));
        new
    }

    /// Append a list index, returning the new path
    #[must_use]
    pub fn index(&self, index: usize) -> Self {
        let mut new = self.clone();
        new.0.push(Segment::Index(index));
        new
    }

    /// Iterator over segments from root to leaf
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &Segment> {
        self.0.iter()
    }
}

impl Display for FieldPath {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let joined: Vec<String> = self.0.iter().map(ToString::to_string).collect();
        f.write_str(&joined.join("."))
    }
}

impl FromStr for FieldPath {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Ok(Self::root());
        }

        let segments: SmallVec<[Segment; 4]> = s
            .split('.')
            .map(|seg| {
                if seg.is_empty() {
                    Err(PathError::EmptySegment)
                } else if seg.chars().all(|c| c.is_ascii_digit()) {
                    seg.parse::<usize>()
                        .map(Segment::Index)
                        .map_err(|_| PathError::InvalidSegment(seg.to_string()))
                } else if seg
                    .chars()
                    .all(|c| c.is_alphanumeric() || c == '_' || c == '-')
                {
                    Ok(Segment::Field(seg.to_string()))
                } else {
                    Err(PathError::InvalidSegment(seg.to_string()))
                }
            })
            .collect::<Result<_, _>>()?;

        Ok(Self(segments))
    }
}

impl From<Vec<Segment>> for FieldPath {
    fn from(segments: Vec<Segment>) -> Self {
        Self(SmallVec::from_vec(segments))
    }
}

/// Errors related to field paths
#[derive(Debug, thiserror::Error)]
pub enum PathError {
    /// Empty segment in path
    #[error("path contains empty segment")]
    EmptySegment,

    /// Invalid segment characters
    #[error("invalid segment: {0} (must be alphanumeric, underscore, or dash)")]
    InvalidSegment(String),
}
