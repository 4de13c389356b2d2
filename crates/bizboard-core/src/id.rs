//! Backend record identifiers.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Identifier of a backend record.
///
/// The backend is not consistent about id types: some resources use
/// integers, others UUID strings. Both deserialize into a `RecordId`, and
/// the original JSON kind is preserved when serializing back.
///
/// Equality, ordering and hashing look at the textual value only, so `7`
/// from one resource joins with `"7"` from another.
#[derive(Debug, Clone)]
pub struct RecordId {
    value: String,
    numeric: bool,
}

impl RecordId {
    /// Creates a string identifier.
    ///
    /// # Examples
    ///
    /// ```
    /// use bizboard_core::RecordId;
    ///
    /// let id = RecordId::new("c-17");
    /// assert_eq!(id.as_str(), "c-17");
    /// ```
    pub fn new<S: Into<String>>(id: S) -> Self {
        Self {
            value: id.into(),
            numeric: false,
        }
    }

    /// Creates a numeric identifier.
    pub fn from_number(id: i64) -> Self {
        Self {
            value: id.to_string(),
            numeric: true,
        }
    }

    /// Returns the identifier as it appears in request paths.
    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl PartialEq for RecordId {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for RecordId {}

impl Hash for RecordId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl PartialOrd for RecordId {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for RecordId {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl From<&str> for RecordId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for RecordId {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<i64> for RecordId {
    fn from(n: i64) -> Self {
        Self::from_number(n)
    }
}

impl From<i32> for RecordId {
    fn from(n: i32) -> Self {
        Self::from_number(i64::from(n))
    }
}

impl From<u32> for RecordId {
    fn from(n: u32) -> Self {
        Self::from_number(i64::from(n))
    }
}

impl From<&RecordId> for RecordId {
    fn from(id: &RecordId) -> Self {
        id.clone()
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Number(i64),
    Text(String),
}

impl<'de> Deserialize<'de> for RecordId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match RawId::deserialize(deserializer)? {
            RawId::Number(n) => Self::from_number(n),
            RawId::Text(s) => Self::new(s),
        })
    }
}

impl Serialize for RecordId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.numeric {
            if let Ok(n) = self.value.parse::<i64>() {
                return serializer.serialize_i64(n);
            }
        }
        serializer.serialize_str(&self.value)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_numeric_id_roundtrip() {
        let id: RecordId = serde_json::from_value(json!(42)).unwrap();
        assert_eq!(id.as_str(), "42");
        assert_eq!(serde_json::to_value(&id).unwrap(), json!(42));
    }

    #[test]
    fn test_string_id_roundtrip() {
        let id: RecordId = serde_json::from_value(json!("9f1c")).unwrap();
        assert_eq!(id.to_string(), "9f1c");
        assert_eq!(serde_json::to_value(&id).unwrap(), json!("9f1c"));
    }

    #[test]
    fn test_integer_literals_convert() {
        fn take(id: impl Into<RecordId>) -> RecordId {
            id.into()
        }
        assert_eq!(take(7), RecordId::from_number(7));
        assert_eq!(take("7"), RecordId::new("7"));
        assert_ne!(take(7), take("8"));
    }

    #[test]
    fn test_numeric_and_string_ids_join() {
        use std::collections::{BTreeMap, HashSet};

        let numeric: RecordId = serde_json::from_value(json!(7)).unwrap();
        let text: RecordId = serde_json::from_value(json!("7")).unwrap();
        assert_eq!(numeric, text);

        let by_id = BTreeMap::from([(numeric.clone(), "open")]);
        assert_eq!(by_id.get(&text), Some(&"open"));

        let seen: HashSet<_> = [numeric.clone()].into_iter().collect();
        assert!(seen.contains(&text));

        // Kinds still survive serialization
        assert_eq!(serde_json::to_value(&numeric).unwrap(), json!(7));
        assert_eq!(serde_json::to_value(&text).unwrap(), json!("7"));
    }

    #[test]
    fn test_numeric_looking_string_stays_string() {
        let id: RecordId = serde_json::from_value(json!("42")).unwrap();
        assert_eq!(serde_json::to_value(&id).unwrap(), json!("42"));
    }
}
