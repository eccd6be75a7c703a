use pcore_core::PcoreError;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

pub const SEPARATOR: &str = "::";

/// Whether a namespace key takes part in the type namespace: it must start
/// with an ASCII capital letter.
#[inline]
pub fn is_type_segment(key: &str) -> bool {
    key.starts_with(|c: char| c.is_ascii_uppercase())
}

/// Full segment grammar, `[A-Z][A-Za-z0-9_]*`.
pub fn is_valid_segment(segment: &str) -> bool {
    is_type_segment(segment)
        && segment
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// A `::` separated type path such as `Geo::Shapes::Point`.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct QualifiedName(String);

impl QualifiedName {
    pub fn root(segment: impl Into<String>) -> Self {
        QualifiedName(segment.into())
    }

    pub fn child(&self, segment: &str) -> Self {
        QualifiedName(format!("{}{SEPARATOR}{segment}", self.0))
    }

    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split(SEPARATOR)
    }

    pub fn last(&self) -> &str {
        self.0.rsplit(SEPARATOR).next().unwrap_or(&self.0)
    }

    pub fn depth(&self) -> usize {
        self.segments().count()
    }

    pub fn is_valid(&self) -> bool {
        self.segments().all(is_valid_segment)
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for QualifiedName {
    type Err = PcoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.split(SEPARATOR).any(str::is_empty) {
            return Err(PcoreError::InvalidArgument(format!(
                "{s:?} is not a qualified type name"
            )));
        }
        Ok(QualifiedName(s.to_string()))
    }
}

impl Display for QualifiedName {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl PartialEq<str> for QualifiedName {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for QualifiedName {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
