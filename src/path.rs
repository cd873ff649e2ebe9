// std imports
use std::{fmt, str::FromStr};

// ---

/// Path is a sequence of field names addressing a location in nested objects.
///
/// Segments are separated by `.`, trimmed, and empty segments are dropped,
/// so `" a . b "` and `"a..b"` both address field `b` of object `a`.
#[derive(Debug, Clone, Default, Eq, PartialEq, Hash)]
pub struct Path {
    segments: Vec<String>,
}

impl Path {
    pub fn parse(path: &str) -> Self {
        Self {
            segments: path
                .split('.')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect(),
        }
    }

    #[inline]
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Depth of the object holding the addressed field, `None` for an empty path.
    #[inline]
    pub fn nesting(&self) -> Option<usize> {
        self.segments.len().checked_sub(1)
    }

    /// Returns true if the segment at `level` equals `name`.
    #[inline]
    pub fn matches(&self, name: &str, level: usize) -> bool {
        self.segments.get(level).is_some_and(|s| s == name)
    }
}

impl FromStr for Path {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl From<&str> for Path {
    fn from(s: &str) -> Self {
        Self::parse(s)
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i != 0 {
                f.write_str(".")?;
            }
            f.write_str(segment)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests;
