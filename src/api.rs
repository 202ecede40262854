//! Slack Web API client

use reqwest::{Client, Proxy};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::Config;
use crate::envelope;
use crate::error::{Error, Result};
use crate::model::{Channel, ChannelDirectory, RawMessage};

/// Maximum number of messages per history request. The pagination engine
/// compares returned page length against the same constant to decide
/// termination, so request and comparison must share this value.
pub const PAGE_SIZE: usize = 1000;

#[derive(Debug, Clone)]
pub struct SlackClient {
    http: Client,
    token: String,
    base_url: String,
}

impl SlackClient {
    /// Create a client from an explicit configuration.
    pub fn new(config: Config) -> Result<Self> {
        if config.token.trim().is_empty() {
            return Err(Error::Config("Slack API token is empty".to_string()));
        }

        let mut builder = Client::builder()
            .user_agent(format!("slack_exporter/{}", env!("CARGO_PKG_VERSION")))
            .timeout(config.timeout);

        if let Some(proxy) = &config.http_proxy {
            builder = builder.proxy(Proxy::http(proxy)?);
        }
        if let Some(proxy) = &config.https_proxy {
            builder = builder.proxy(Proxy::https(proxy)?);
        }

        Ok(Self {
            http: builder.build()?,
            token: config.token,
            base_url: config.base_url,
        })
    }

    /// Create a client against a custom base url (primarily for tests).
    pub fn with_base_url<S1: Into<String>, S2: Into<String>>(
        token: S1,
        base_url: S2,
    ) -> Result<Self> {
        let mut config = Config::with_token(token);
        config.base_url = base_url.into();
        Self::new(config)
    }

    async fn post<B, T>(&self, method: &str, body: &B, title: &str) -> Result<T>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let response = self
            .http
            .post(format!("{}/{}", self.base_url, method))
            .bearer_auth(&self.token)
            .json(body)
            .send()
            .await?;

        envelope::validate(response, title).await
    }

    async fn get<T: DeserializeOwned>(&self, method: &str, title: &str) -> Result<T> {
        let response = self
            .http
            .get(format!("{}/{}", self.base_url, method))
            .bearer_auth(&self.token)
            .send()
            .await?;

        envelope::validate(response, title).await
    }

    /// Connectivity check against `api.test`.
    pub async fn test(&self) -> Result<bool> {
        let body: TestResponse = self
            .post("api.test", &serde_json::json!({}), "Test API")
            .await?;
        Ok(body.ok)
    }

    /// Full user list as raw JSON, for verbatim dumping.
    pub async fn users_list(&self) -> Result<Vec<Value>> {
        let body: UsersListResponse = self.get("users.list", "Get all users list").await?;
        Ok(body.members)
    }

    /// Full channel list as raw JSON, for verbatim dumping.
    pub async fn channels_list(&self) -> Result<Vec<Value>> {
        let body: RawChannelsResponse = self
            .get("conversations.list", "Get all channel list")
            .await?;
        Ok(body.channels)
    }

    /// Typed channel listing keyed by id.
    pub async fn channel_directory(&self) -> Result<ChannelDirectory> {
        let body: ChannelsResponse = self
            .get("conversations.list", "Get all channel list")
            .await?;
        Ok(ChannelDirectory::new(body.channels))
    }

    /// Total message count for a channel, via a channel-scoped search.
    /// The count query takes a display name, not an id. The result is
    /// advisory and only sizes progress output.
    pub async fn message_count(&self, channel_name: &str) -> Result<u64> {
        let request = SearchRequest {
            query: format!("in:{}", channel_name),
            count: 1,
        };
        let title = format!(
            "Get the number of history of channel \"{}\"",
            channel_name
        );

        let body: SearchResponse = self.post("search.messages", &request, &title).await?;
        Ok(body.messages.total)
    }

    /// One bounded page of channel history, newest first as the service
    /// orders it.
    ///
    /// A message exactly at the `latest` timestamp is excluded from the
    /// page; a message exactly at the `oldest` timestamp is included.
    pub async fn history_page(
        &self,
        channel_id: &str,
        count: usize,
        latest: Option<&str>,
        oldest: Option<&str>,
    ) -> Result<Vec<RawMessage>> {
        let request = HistoryRequest {
            channel: channel_id,
            count,
            unreads: "true",
            latest,
            oldest,
        };

        let body: HistoryResponse = self
            .post("channels.history", &request, "Get Channel History")
            .await?;
        Ok(body.messages)
    }
}

#[derive(Debug, Serialize)]
struct SearchRequest {
    query: String,
    count: u32,
}

#[derive(Debug, Serialize)]
struct HistoryRequest<'a> {
    channel: &'a str,
    count: usize,
    unreads: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    latest: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    oldest: Option<&'a str>,
}

#[derive(Debug, Deserialize)]
struct TestResponse {
    ok: bool,
}

#[derive(Debug, Deserialize)]
struct UsersListResponse {
    members: Vec<Value>,
}

#[derive(Debug, Deserialize)]
struct RawChannelsResponse {
    channels: Vec<Value>,
}

#[derive(Debug, Deserialize)]
struct ChannelsResponse {
    channels: Vec<Channel>,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    messages: SearchTotal,
}

#[derive(Debug, Deserialize)]
struct SearchTotal {
    total: u64,
}

#[derive(Debug, Deserialize)]
struct HistoryResponse {
    messages: Vec<RawMessage>,
}
