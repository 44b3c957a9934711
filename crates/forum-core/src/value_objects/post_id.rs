//! Post ID - opaque identifier of the forum post a button targets
//!
//! The value travels verbatim from the rendered `data-post-id` attribute
//! into the request path. The client never interprets it beyond requiring
//! it to be non-empty.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Opaque forum post identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PostId(String);

impl PostId {
    /// Get the identifier as a string slice
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume and return the inner string
    #[inline]
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Parse from string representation
    pub fn parse(s: &str) -> Result<Self, PostIdParseError> {
        if s.is_empty() {
            return Err(PostIdParseError::Empty);
        }
        Ok(Self(s.to_owned()))
    }

    /// Derive from a `data-post-id` attribute value.
    ///
    /// An absent or empty attribute yields `None`: the control has no
    /// target and stays inert.
    pub fn from_attribute(value: Option<&str>) -> Option<Self> {
        value.and_then(|v| Self::parse(v).ok())
    }
}

/// Error when parsing a PostId from string
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PostIdParseError {
    #[error("post id must not be empty")]
    Empty,
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for PostId {
    type Err = PostIdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PostId::parse(s)
    }
}

// Serialize as a plain string for JSON and structured logs
impl Serialize for PostId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for PostId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        PostId::parse(&s).map_err(serde::de::Error::custom)
    }
}
