use async_trait::async_trait;
use lexfetch_config::Config;

use crate::types::ApiReply;

/// The two lookups the resolver needs. Implementations never fail: any
/// transport-level problem is reported as a reply with a non-200 status.
#[async_trait]
pub trait DictionaryApi: Send + Sync {
    /// Full lexical entry for an exact headword
    async fn entries(&self, word: &str) -> ApiReply;

    /// Base (dictionary) form of an inflected word
    async fn lemmas(&self, word: &str) -> ApiReply;
}

/// Client for the Oxford Dictionaries v2 REST API.
#[derive(Clone)]
pub struct OxfordClient {
    base_url: String,
    lang: String,
    app_id: String,
    app_key: String,
    client: reqwest::Client,
}

impl OxfordClient {
    pub fn new(config: &Config) -> Self {
        Self {
            base_url: config.base_url.clone(),
            lang: config.lang.clone(),
            app_id: config.app_id.clone(),
            app_key: config.app_key.clone(),
            client: reqwest::Client::new(),
        }
    }

    async fn get(&self, resource: &str, word: &str) -> ApiReply {
        let url = format!("{}/api/v2/{}/{}/{}", self.base_url, resource, self.lang, word);

        let response = self
            .client
            .get(&url)
            .header("app_id", &self.app_id)
            .header("app_key", &self.app_key)
            .send()
            .await;

        match response {
            Ok(response) => {
                let status = response.status().as_u16();
                match response.text().await {
                    Ok(body) => ApiReply::new(status, body),
                    Err(e) => {
                        tracing::warn!("Failed to read {resource} response body for {word}: {e}");
                        ApiReply::unreachable()
                    }
                }
            }
            Err(e) => {
                tracing::warn!("Request to {resource} endpoint for {word} failed: {e}");
                ApiReply::unreachable()
            }
        }
    }
}

#[async_trait]
impl DictionaryApi for OxfordClient {
    async fn entries(&self, word: &str) -> ApiReply {
        self.get("entries", word).await
    }

    async fn lemmas(&self, word: &str) -> ApiReply {
        self.get("lemmas", word).await
    }
}
