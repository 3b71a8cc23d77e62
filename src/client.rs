//! REST client facade
//!
//! Aggregates every service on one shared [`Router`] and hands out
//! identifier-wrapping entity handles.

use crate::config::RestConfig;
use crate::entity::{RestChannel, RestGuild, RestMember, RestMessage, RestUser};
use crate::error::Result;
use crate::http::Router;
use crate::model::{
    ChannelData, GuildCreateRequest, GuildData, MemberData, MessageData, UserData, UserGuildData,
    UserModifyRequest,
};
use crate::pagination::{PageRequest, PageStream, Paginator, DEFAULT_PAGE_SIZE};
use crate::service::{ChannelService, GuildService, UserService};
use crate::types::Snowflake;
use std::sync::Arc;

/// Entry point to the REST API
///
/// Cloning is cheap; clones share the same router.
#[derive(Debug, Clone)]
pub struct RestClient {
    router: Arc<Router>,
    user_service: UserService,
    guild_service: GuildService,
    channel_service: ChannelService,
}

impl RestClient {
    /// Build every service on top of `router`
    pub fn new(router: Router) -> Self {
        Self::from_router(Arc::new(router))
    }

    /// Build every service on top of an already shared router
    pub fn from_router(router: Arc<Router>) -> Self {
        Self {
            user_service: UserService::new(router.clone()),
            guild_service: GuildService::new(router.clone()),
            channel_service: ChannelService::new(router.clone()),
            router,
        }
    }

    /// Build a client from loaded configuration
    pub fn from_config(config: &RestConfig) -> Result<Self> {
        Ok(Self::new(Router::with_config(config.router_config())?))
    }

    // ============================================================================
    // Entity handles
    // ============================================================================

    pub fn guild(&self, guild_id: Snowflake) -> RestGuild {
        RestGuild::new(self.clone(), guild_id)
    }

    pub fn guild_from(&self, data: &GuildData) -> RestGuild {
        self.guild(data.id)
    }

    pub fn channel(&self, channel_id: Snowflake) -> RestChannel {
        RestChannel::new(self.clone(), channel_id)
    }

    pub fn channel_from(&self, data: &ChannelData) -> RestChannel {
        self.channel(data.id)
    }

    pub fn member(&self, guild_id: Snowflake, user_id: Snowflake) -> RestMember {
        RestMember::new(self.clone(), guild_id, user_id)
    }

    /// Member payloads don't carry their guild, so it is passed alongside
    pub fn member_from(&self, guild_id: Snowflake, data: &MemberData) -> RestMember {
        self.member(guild_id, data.user.id)
    }

    pub fn message(&self, channel_id: Snowflake, message_id: Snowflake) -> RestMessage {
        RestMessage::new(self.clone(), channel_id, message_id)
    }

    pub fn message_from(&self, data: &MessageData) -> RestMessage {
        self.message(data.channel_id, data.id)
    }

    pub fn user(&self, user_id: Snowflake) -> RestUser {
        RestUser::new(self.clone(), user_id)
    }

    pub fn user_from(&self, data: &UserData) -> RestUser {
        self.user(data.id)
    }

    // ============================================================================
    // Top-level requests
    // ============================================================================

    /// The user the client is authorized as
    pub async fn self_user(&self) -> Result<UserData> {
        self.user_service.current_user().await
    }

    /// Modify the current user
    pub async fn edit_self(&self, request: &UserModifyRequest) -> Result<UserData> {
        self.user_service.modify_current_user(request).await
    }

    /// Create a new guild owned by the current user
    pub async fn create_guild(&self, request: &GuildCreateRequest) -> Result<GuildData> {
        self.guild_service.create_guild(request).await
    }

    /// Every guild the current user is in, oldest first
    pub fn guilds(&self) -> Result<PageStream<UserGuildData>> {
        self.guilds_with(Paginator::after(DEFAULT_PAGE_SIZE))
    }

    /// Guilds of the current user with custom pagination
    pub fn guilds_with(&self, paginator: Paginator) -> Result<PageStream<UserGuildData>> {
        let users = self.user_service.clone();
        paginator.paginate_identified(move |page: PageRequest| {
            let users = users.clone();
            async move { users.current_user_guilds(&page).await }
        })
    }

    // ============================================================================
    // Services
    // ============================================================================

    pub fn router(&self) -> &Arc<Router> {
        &self.router
    }

    pub fn user_service(&self) -> &UserService {
        &self.user_service
    }

    pub fn guild_service(&self) -> &GuildService {
        &self.guild_service
    }

    pub fn channel_service(&self) -> &ChannelService {
        &self.channel_service
    }
}
