//! Decoded REST records
//!
//! Only the fields the facade and CLI read are typed; everything else the
//! API sends is kept in `extra` so records round-trip to JSON unchanged.

use crate::pagination::Identified;
use crate::types::{JsonObject, Snowflake};
use serde::{Deserialize, Serialize};

// ============================================================================
// Users
// ============================================================================

/// A user account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserData {
    pub id: Snowflake,
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub global_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(default)]
    pub bot: bool,
    #[serde(flatten)]
    pub extra: JsonObject,
}

/// Fields accepted by "modify current user"
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserModifyRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// Avatar as a data URI
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

// ============================================================================
// Guilds
// ============================================================================

/// Partial guild as listed for the current user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserGuildData {
    pub id: Snowflake,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default)]
    pub owner: bool,
    /// Permission bitset, string-encoded like snowflakes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permissions: Option<String>,
    #[serde(flatten)]
    pub extra: JsonObject,
}

/// A full guild
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuildData {
    pub id: Snowflake,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<Snowflake>,
    #[serde(flatten)]
    pub extra: JsonObject,
}

/// Body for "create guild"
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GuildCreateRequest {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

/// A guild member
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberData {
    pub user: UserData,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nick: Option<String>,
    #[serde(default)]
    pub roles: Vec<Snowflake>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub joined_at: Option<String>,
    #[serde(flatten)]
    pub extra: JsonObject,
}

// ============================================================================
// Channels
// ============================================================================

/// A channel of any type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChannelData {
    pub id: Snowflake,
    #[serde(rename = "type")]
    pub kind: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guild_id: Option<Snowflake>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(flatten)]
    pub extra: JsonObject,
}

/// A message posted in a channel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageData {
    pub id: Snowflake,
    pub channel_id: Snowflake,
    #[serde(default)]
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<UserData>,
    #[serde(flatten)]
    pub extra: JsonObject,
}

// ============================================================================
// Identifiers
// ============================================================================

impl Identified for UserData {
    fn id(&self) -> Snowflake {
        self.id
    }
}

impl Identified for UserGuildData {
    fn id(&self) -> Snowflake {
        self.id
    }
}

impl Identified for GuildData {
    fn id(&self) -> Snowflake {
        self.id
    }
}

/// Members are paged by their user's ID
impl Identified for MemberData {
    fn id(&self) -> Snowflake {
        self.user.id
    }
}

impl Identified for ChannelData {
    fn id(&self) -> Snowflake {
        self.id
    }
}

impl Identified for MessageData {
    fn id(&self) -> Snowflake {
        self.id
    }
}
