//! Common types used throughout cordrest
//!
//! This module contains the snowflake identifier and the shared
//! type aliases used across multiple modules.

use crate::error::{Error, Result};
use chrono::{DateTime, TimeZone, Utc};
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Type Aliases
// ============================================================================

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

/// JSON object type
pub type JsonObject = serde_json::Map<String, JsonValue>;

// ============================================================================
// Snowflake
// ============================================================================

/// Milliseconds between the Unix epoch and the first second of 2015
pub const DISCORD_EPOCH_MS: u64 = 1_420_070_400_000;

/// A 64-bit, time-ordered identifier
///
/// Transmitted as a decimal string on the wire so that JavaScript clients
/// don't lose precision. Accepts a JSON number when deserializing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Snowflake(u64);

impl Snowflake {
    /// The zero snowflake, used as the "from the beginning" cursor
    pub const ZERO: Snowflake = Snowflake(0);

    /// Create a snowflake from its raw value
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Raw numeric value
    pub const fn as_u64(self) -> u64 {
        self.0
    }

    /// Parse a snowflake from its string form
    pub fn parse(value: &str) -> Result<Self> {
        value
            .trim()
            .parse::<u64>()
            .map(Self)
            .map_err(|_| Error::invalid_snowflake(value))
    }

    /// Smallest snowflake that could have been minted at `time`
    ///
    /// Useful as a `before` cursor meaning "everything older than now".
    pub fn from_timestamp(time: DateTime<Utc>) -> Self {
        let millis = time.timestamp_millis().max(0) as u64;
        Self(millis.saturating_sub(DISCORD_EPOCH_MS) << 22)
    }

    /// Milliseconds since the Unix epoch at which this ID was minted
    pub fn timestamp_millis(self) -> u64 {
        (self.0 >> 22) + DISCORD_EPOCH_MS
    }

    /// Creation time encoded in the high bits
    pub fn timestamp(self) -> DateTime<Utc> {
        Utc.timestamp_millis_opt(self.timestamp_millis() as i64)
            .single()
            .unwrap_or_default()
    }
}

impl From<u64> for Snowflake {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl From<Snowflake> for u64 {
    fn from(id: Snowflake) -> Self {
        id.0
    }
}

impl FromStr for Snowflake {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Snowflake {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for Snowflake {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Snowflake {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct SnowflakeVisitor;

        impl Visitor<'_> for SnowflakeVisitor {
            type Value = Snowflake;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a snowflake as a decimal string or unsigned integer")
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> std::result::Result<Snowflake, E> {
                Ok(Snowflake(v))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> std::result::Result<Snowflake, E> {
                u64::try_from(v)
                    .map(Snowflake)
                    .map_err(|_| E::invalid_value(de::Unexpected::Signed(v), &self))
            }

            fn visit_str<E: de::Error>(self, v: &str) -> std::result::Result<Snowflake, E> {
                v.parse::<u64>()
                    .map(Snowflake)
                    .map_err(|_| E::invalid_value(de::Unexpected::Str(v), &self))
            }
        }

        deserializer.deserialize_any(SnowflakeVisitor)
    }
}
