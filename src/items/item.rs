//! Item definition
//!
//! A single fridge entry: what it is and when it went in. The serde
//! field names double as the column headers of the persisted CSV
//! table, and the timestamp codec below fixes its textual encoding.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// One thing in the fridge
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// User-supplied label, never empty once persisted
    #[serde(rename = "Item")]
    pub name: String,
    /// When the item went in, immutable after creation
    #[serde(rename = "Date Added", with = "date_added")]
    pub added_at: NaiveDateTime,
}

impl Item {
    pub fn new(name: impl Into<String>, added_at: NaiveDateTime) -> Self {
        Self {
            name: name.into(),
            added_at,
        }
    }
}

/// Textual timestamp encoding for the `Date Added` column.
///
/// Written with microsecond precision; rows without a fractional part
/// still parse.
mod date_added {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    const WRITE_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";
    const READ_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.f";

    pub fn serialize<S>(stamp: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&stamp.format(WRITE_FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&text, READ_FORMAT).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_new_keeps_timestamp() {
        let stamp = NaiveDate::from_ymd_opt(2024, 3, 10)
            .unwrap()
            .and_hms_micro_opt(8, 30, 0, 250_000)
            .unwrap();
        let item = Item::new("Milk", stamp);

        assert_eq!(item.name, "Milk");
        assert_eq!(item.added_at, stamp);
    }
}
