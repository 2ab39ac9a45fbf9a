//! Hierarchical tree paths.
//!
//! A [`TreePath`] identifies a document or subtree within a document tree.
//! Paths are slash-separated (`/guide/intro.md`), rooted at `/`, and carry
//! no filesystem semantics: output providers decide how a path maps onto a
//! physical location.

use std::fmt;
use thiserror::Error;

/// Error type for path construction.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    #[error("path segment must not be empty")]
    EmptySegment,

    #[error("invalid path segment '{0}'")]
    InvalidSegment(String),
}

/// A slash-separated hierarchical path, unique within its document tree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TreePath {
    segments: Vec<String>,
}

impl TreePath {
    /// The root path `/`.
    pub fn root() -> Self {
        Self::default()
    }

    /// Parses a path from its string form. A leading `/` is optional;
    /// `""` and `"/"` both denote the root.
    pub fn parse(input: &str) -> Result<Self, PathError> {
        let trimmed = input.strip_prefix('/').unwrap_or(input);
        if trimmed.is_empty() {
            return Ok(Self::root());
        }
        let mut path = Self::root();
        for segment in trimmed.split('/') {
            path = path.join(segment)?;
        }
        Ok(path)
    }

    /// Appends one segment, rejecting empty segments and segments that
    /// contain a separator or traverse upwards.
    pub fn join(&self, segment: impl Into<String>) -> Result<Self, PathError> {
        let segment = segment.into();
        if segment.is_empty() {
            return Err(PathError::EmptySegment);
        }
        if segment.contains('/') || segment == "." || segment == ".." {
            return Err(PathError::InvalidSegment(segment));
        }
        let mut segments = self.segments.clone();
        segments.push(segment);
        Ok(Self { segments })
    }

    /// The parent path, or `None` for the root.
    pub fn parent(&self) -> Option<TreePath> {
        if self.segments.is_empty() {
            return None;
        }
        Some(Self { segments: self.segments[..self.segments.len() - 1].to_vec() })
    }

    /// The last segment, or `None` for the root.
    pub fn basename(&self) -> Option<&str> {
        self.segments.last().map(String::as_str)
    }

    /// The last segment without its suffix (`intro.md` -> `intro`).
    pub fn stem(&self) -> Option<&str> {
        self.basename().map(|name| match name.rfind('.') {
            Some(0) | None => name,
            Some(dot) => &name[..dot],
        })
    }

    /// The suffix of the last segment (`intro.md` -> `md`), if any.
    pub fn suffix(&self) -> Option<&str> {
        self.basename().and_then(|name| match name.rfind('.') {
            Some(0) | None => None,
            Some(dot) => Some(&name[dot + 1..]),
        })
    }

    /// Number of segments below the root.
    pub fn depth(&self) -> usize {
        self.segments.len()
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// True when `self` is strictly below `ancestor` (equality excluded).
    pub fn is_strict_descendant_of(&self, ancestor: &TreePath) -> bool {
        self.segments.len() > ancestor.segments.len()
            && self.segments[..ancestor.segments.len()] == ancestor.segments[..]
    }
}

impl fmt::Display for TreePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.segments.is_empty() {
            return write!(f, "/");
        }
        for segment in &self.segments {
            write!(f, "/{}", segment)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_display_round() {
        let path = TreePath::parse("/guide/intro.md").unwrap();
        assert_eq!(path.to_string(), "/guide/intro.md");
        assert_eq!(TreePath::parse("guide").unwrap().to_string(), "/guide");
        assert_eq!(TreePath::parse("/").unwrap(), TreePath::root());
        assert_eq!(TreePath::root().to_string(), "/");
    }

    #[test]
    fn test_join_rejects_bad_segments() {
        assert_eq!(TreePath::root().join(""), Err(PathError::EmptySegment));
        assert!(matches!(TreePath::root().join("a/b"), Err(PathError::InvalidSegment(_))));
        assert!(matches!(TreePath::root().join(".."), Err(PathError::InvalidSegment(_))));
    }

    #[test]
    fn test_stem_and_suffix() {
        let path = TreePath::parse("/guide/intro.md").unwrap();
        assert_eq!(path.stem(), Some("intro"));
        assert_eq!(path.suffix(), Some("md"));

        let bare = TreePath::parse("/README").unwrap();
        assert_eq!(bare.stem(), Some("README"));
        assert_eq!(bare.suffix(), None);

        // A leading dot is part of the name, not a suffix separator.
        let hidden = TreePath::parse("/.config").unwrap();
        assert_eq!(hidden.stem(), Some(".config"));
        assert_eq!(hidden.suffix(), None);
    }

    #[test]
    fn test_strict_descendant() {
        let root = TreePath::root();
        let guide = TreePath::parse("/guide").unwrap();
        let intro = TreePath::parse("/guide/intro.md").unwrap();

        assert!(guide.is_strict_descendant_of(&root));
        assert!(intro.is_strict_descendant_of(&guide));
        assert!(!guide.is_strict_descendant_of(&guide));
        assert!(!guide.is_strict_descendant_of(&intro));
    }

    #[test]
    fn test_parent() {
        let intro = TreePath::parse("/guide/intro.md").unwrap();
        assert_eq!(intro.parent(), Some(TreePath::parse("/guide").unwrap()));
        assert_eq!(TreePath::root().parent(), None);
    }
}
