//! Guild endpoints

use crate::error::Result;
use crate::http::Router;
use crate::model::{GuildCreateRequest, GuildData, MemberData};
use crate::pagination::PageRequest;
use crate::types::Snowflake;
use std::collections::HashMap;
use std::sync::Arc;

/// Endpoints under `/guilds`
#[derive(Debug, Clone)]
pub struct GuildService {
    router: Arc<Router>,
}

impl GuildService {
    pub fn new(router: Arc<Router>) -> Self {
        Self { router }
    }

    /// `GET /guilds/{guild.id}`
    pub async fn guild(&self, guild_id: Snowflake) -> Result<GuildData> {
        self.router
            .get_json(&format!("guilds/{guild_id}"), HashMap::new())
            .await
    }

    /// `POST /guilds`
    pub async fn create_guild(&self, request: &GuildCreateRequest) -> Result<GuildData> {
        self.router.post_json("guilds", request).await
    }

    /// `GET /guilds/{guild.id}/members/{user.id}`
    pub async fn guild_member(&self, guild_id: Snowflake, user_id: Snowflake) -> Result<MemberData> {
        self.router
            .get_json(&format!("guilds/{guild_id}/members/{user_id}"), HashMap::new())
            .await
    }

    /// `GET /guilds/{guild.id}/members`, one page
    pub async fn guild_members(
        &self,
        guild_id: Snowflake,
        page: &PageRequest,
    ) -> Result<Vec<MemberData>> {
        self.router
            .get_json(&format!("guilds/{guild_id}/members"), page.params())
            .await
    }
}
