//! Serde adapters for pre-compiled regular expressions.
//!
//! Patterns are stored as their source text and compiled while
//! deserializing, so an invalid pattern is rejected at load time.

use regex::Regex;
use serde::{Deserialize, Deserializer, Serializer, de::Error as _};

pub fn serialize<S>(regex: &Regex, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(regex.as_str())
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<Regex, D::Error>
where
    D: Deserializer<'de>,
{
    let pattern = String::deserialize(deserializer)?;
    Regex::new(&pattern).map_err(D::Error::custom)
}
