//! Entity handles
//!
//! Each handle pairs a [`RestClient`] with the snowflakes that identify one
//! resource. Creating a handle makes no request.

use crate::client::RestClient;
use crate::error::Result;
use crate::model::{ChannelData, GuildData, MemberData, MessageData, UserData};
use crate::pagination::{PageRequest, PageStream, Paginator, DEFAULT_PAGE_SIZE};
use crate::types::Snowflake;
use chrono::Utc;

/// Largest page the member list endpoint accepts
pub const MEMBER_PAGE_SIZE: u32 = 1000;

// ============================================================================
// Guild
// ============================================================================

/// A guild, by ID
#[derive(Debug, Clone)]
pub struct RestGuild {
    client: RestClient,
    id: Snowflake,
}

impl RestGuild {
    pub(crate) fn new(client: RestClient, id: Snowflake) -> Self {
        Self { client, id }
    }

    pub fn id(&self) -> Snowflake {
        self.id
    }

    /// Fetch the guild
    pub async fn data(&self) -> Result<GuildData> {
        self.client.guild_service().guild(self.id).await
    }

    /// Fetch one member
    pub async fn member(&self, user_id: Snowflake) -> Result<MemberData> {
        self.client.guild_service().guild_member(self.id, user_id).await
    }

    /// Every member of the guild, ordered by user ID
    pub fn members(&self) -> Result<PageStream<MemberData>> {
        self.members_with(Paginator::after(MEMBER_PAGE_SIZE))
    }

    /// Members with custom pagination
    pub fn members_with(&self, paginator: Paginator) -> Result<PageStream<MemberData>> {
        let guilds = self.client.guild_service().clone();
        let guild_id = self.id;
        paginator.paginate_identified(move |page: PageRequest| {
            let guilds = guilds.clone();
            async move { guilds.guild_members(guild_id, &page).await }
        })
    }
}

// ============================================================================
// Member
// ============================================================================

/// A user's membership in one guild
#[derive(Debug, Clone)]
pub struct RestMember {
    client: RestClient,
    guild_id: Snowflake,
    user_id: Snowflake,
}

impl RestMember {
    pub(crate) fn new(client: RestClient, guild_id: Snowflake, user_id: Snowflake) -> Self {
        Self {
            client,
            guild_id,
            user_id,
        }
    }

    pub fn guild_id(&self) -> Snowflake {
        self.guild_id
    }

    pub fn user_id(&self) -> Snowflake {
        self.user_id
    }

    /// Fetch the member
    pub async fn data(&self) -> Result<MemberData> {
        self.client
            .guild_service()
            .guild_member(self.guild_id, self.user_id)
            .await
    }

    pub fn guild(&self) -> RestGuild {
        self.client.guild(self.guild_id)
    }

    pub fn user(&self) -> RestUser {
        self.client.user(self.user_id)
    }
}

// ============================================================================
// Channel
// ============================================================================

/// A channel, by ID
#[derive(Debug, Clone)]
pub struct RestChannel {
    client: RestClient,
    id: Snowflake,
}

impl RestChannel {
    pub(crate) fn new(client: RestClient, id: Snowflake) -> Self {
        Self { client, id }
    }

    pub fn id(&self) -> Snowflake {
        self.id
    }

    /// Fetch the channel
    pub async fn data(&self) -> Result<ChannelData> {
        self.client.channel_service().channel(self.id).await
    }

    /// Fetch one message
    pub async fn message(&self, message_id: Snowflake) -> Result<MessageData> {
        self.client.channel_service().message(self.id, message_id).await
    }

    /// Message history from now back to the first message
    pub fn messages(&self) -> Result<PageStream<MessageData>> {
        self.messages_before(Snowflake::from_timestamp(Utc::now()))
    }

    /// Messages older than `start`, newest first
    pub fn messages_before(&self, start: Snowflake) -> Result<PageStream<MessageData>> {
        self.messages_with(Paginator::before(DEFAULT_PAGE_SIZE).start(start))
    }

    /// Messages with custom pagination
    pub fn messages_with(&self, paginator: Paginator) -> Result<PageStream<MessageData>> {
        let channels = self.client.channel_service().clone();
        let channel_id = self.id;
        paginator.paginate_identified(move |page: PageRequest| {
            let channels = channels.clone();
            async move { channels.messages(channel_id, &page).await }
        })
    }
}

// ============================================================================
// Message
// ============================================================================

/// A message, by channel and message ID
#[derive(Debug, Clone)]
pub struct RestMessage {
    client: RestClient,
    channel_id: Snowflake,
    id: Snowflake,
}

impl RestMessage {
    pub(crate) fn new(client: RestClient, channel_id: Snowflake, id: Snowflake) -> Self {
        Self {
            client,
            channel_id,
            id,
        }
    }

    pub fn channel_id(&self) -> Snowflake {
        self.channel_id
    }

    pub fn id(&self) -> Snowflake {
        self.id
    }

    /// Fetch the message
    pub async fn data(&self) -> Result<MessageData> {
        self.client
            .channel_service()
            .message(self.channel_id, self.id)
            .await
    }

    pub fn channel(&self) -> RestChannel {
        self.client.channel(self.channel_id)
    }
}

// ============================================================================
// User
// ============================================================================

/// A user, by ID
#[derive(Debug, Clone)]
pub struct RestUser {
    client: RestClient,
    id: Snowflake,
}

impl RestUser {
    pub(crate) fn new(client: RestClient, id: Snowflake) -> Self {
        Self { client, id }
    }

    pub fn id(&self) -> Snowflake {
        self.id
    }

    /// Fetch the user
    pub async fn data(&self) -> Result<UserData> {
        self.client.user_service().user(self.id).await
    }
}
