//! Product identifiers.
//!
//! Product ids are strings. Seed products use short numeric ids ("1", "2",
//! ...); products created from the admin console get the creation timestamp
//! in milliseconds since the Unix epoch, rendered as decimal.

use core::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A type-safe product identifier.
///
/// # Example
///
/// ```rust
/// use aura_exotixx_core::ProductId;
///
/// let id = ProductId::new("1");
/// assert_eq!(id.as_str(), "1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    /// Create a product id from any string-like value.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Id derived from a creation timestamp (milliseconds since epoch).
    #[must_use]
    pub fn from_timestamp(at: DateTime<Utc>) -> Self {
        Self(at.timestamp_millis().to_string())
    }

    /// Generate a timestamp id that does not collide with any of `existing`.
    ///
    /// Two products created within the same millisecond would otherwise share
    /// an id, so the timestamp is bumped until it is free.
    #[must_use]
    pub fn generate<'a>(
        at: DateTime<Utc>,
        existing: impl IntoIterator<Item = &'a Self> + Clone,
    ) -> Self {
        let mut millis = at.timestamp_millis();
        loop {
            let candidate = Self(millis.to_string());
            if !existing.clone().into_iter().any(|id| *id == candidate) {
                return candidate;
            }
            millis = millis.saturating_add(1);
        }
    }

    /// Get the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ProductId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl From<String> for ProductId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl AsRef<str> for ProductId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_from_timestamp() {
        let at = DateTime::from_timestamp_millis(1_700_000_000_123).unwrap();
        assert_eq!(ProductId::from_timestamp(at).as_str(), "1700000000123");
    }

    #[test]
    fn test_generate_skips_taken_ids() {
        let at = DateTime::from_timestamp_millis(1_700_000_000_000).unwrap();
        let taken = [
            ProductId::new("1700000000000"),
            ProductId::new("1700000000001"),
        ];
        let id = ProductId::generate(at, taken.iter());
        assert_eq!(id.as_str(), "1700000000002");
    }

    #[test]
    fn test_generate_without_collision() {
        let at = DateTime::from_timestamp_millis(42).unwrap();
        let id = ProductId::generate(at, std::iter::empty::<&ProductId>());
        assert_eq!(id.as_str(), "42");
    }

    #[test]
    fn test_serde_transparent() {
        let id = ProductId::new("4");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"4\"");
    }
}
