//! User endpoints

use crate::error::Result;
use crate::http::Router;
use crate::model::{UserData, UserGuildData, UserModifyRequest};
use crate::pagination::PageRequest;
use crate::types::Snowflake;
use std::collections::HashMap;
use std::sync::Arc;

/// Endpoints under `/users`
#[derive(Debug, Clone)]
pub struct UserService {
    router: Arc<Router>,
}

impl UserService {
    pub fn new(router: Arc<Router>) -> Self {
        Self { router }
    }

    /// `GET /users/@me`
    pub async fn current_user(&self) -> Result<UserData> {
        self.router.get_json("users/@me", HashMap::new()).await
    }

    /// `GET /users/{user.id}`
    pub async fn user(&self, user_id: Snowflake) -> Result<UserData> {
        self.router
            .get_json(&format!("users/{user_id}"), HashMap::new())
            .await
    }

    /// `PATCH /users/@me`
    pub async fn modify_current_user(&self, request: &UserModifyRequest) -> Result<UserData> {
        self.router.patch_json("users/@me", request).await
    }

    /// `GET /users/@me/guilds`, one page
    pub async fn current_user_guilds(&self, page: &PageRequest) -> Result<Vec<UserGuildData>> {
        self.router.get_json("users/@me/guilds", page.params()).await
    }
}
