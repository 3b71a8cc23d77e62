//! Channel endpoints

use crate::error::Result;
use crate::http::Router;
use crate::model::{ChannelData, MessageData};
use crate::pagination::PageRequest;
use crate::types::Snowflake;
use std::collections::HashMap;
use std::sync::Arc;

/// Endpoints under `/channels`
#[derive(Debug, Clone)]
pub struct ChannelService {
    router: Arc<Router>,
}

impl ChannelService {
    pub fn new(router: Arc<Router>) -> Self {
        Self { router }
    }

    /// `GET /channels/{channel.id}`
    pub async fn channel(&self, channel_id: Snowflake) -> Result<ChannelData> {
        self.router
            .get_json(&format!("channels/{channel_id}"), HashMap::new())
            .await
    }

    /// `GET /channels/{channel.id}/messages/{message.id}`
    pub async fn message(&self, channel_id: Snowflake, message_id: Snowflake) -> Result<MessageData> {
        self.router
            .get_json(
                &format!("channels/{channel_id}/messages/{message_id}"),
                HashMap::new(),
            )
            .await
    }

    /// `GET /channels/{channel.id}/messages`, one page
    ///
    /// Accepts either cursor direction; the server returns newest first.
    pub async fn messages(
        &self,
        channel_id: Snowflake,
        page: &PageRequest,
    ) -> Result<Vec<MessageData>> {
        self.router
            .get_json(&format!("channels/{channel_id}/messages"), page.params())
            .await
    }
}
