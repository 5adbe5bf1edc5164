//! Lenient id decoding for request bodies.
//!
//! Older clients send ids as JSON strings (`"3"`), newer ones as numbers.

use folio_core::types::DbId;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Number(DbId),
    Text(String),
}

/// `#[serde(deserialize_with = "...")]` helper accepting `3` or `"3"`.
pub fn deserialize_id<'de, D>(deserializer: D) -> Result<DbId, D::Error>
where
    D: Deserializer<'de>,
{
    match RawId::deserialize(deserializer)? {
        RawId::Number(id) => Ok(id),
        RawId::Text(text) => text
            .trim()
            .parse()
            .map_err(|_| D::Error::custom(format!("invalid id '{text}', expected an integer"))),
    }
}
