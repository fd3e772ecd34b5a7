use async_trait::async_trait;
use reqwest::{Client, Response, Url};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::{ClientError, ClientResult};
use crate::models::{AnalysisResult, AnalyzeRequest, CreateEntryRequest, JournalEntry};

/// Remote journal backend: persistence plus text analysis.
#[async_trait]
pub trait JournalApi: Send + Sync + 'static {
    async fn list_entries(&self) -> ClientResult<Vec<JournalEntry>>;

    async fn get_entry(&self, id: &str) -> ClientResult<JournalEntry>;

    async fn create_entry(&self, request: CreateEntryRequest) -> ClientResult<JournalEntry>;

    async fn delete_entry(&self, id: &str) -> ClientResult<()>;

    async fn analyze_text(&self, text: &str) -> ClientResult<AnalysisResult>;

    /// Backend greeting served at the root path.
    async fn banner(&self) -> ClientResult<String>;
}

#[derive(Clone)]
pub struct HttpJournalApi {
    client: Client,
    base_url: Url,
}

impl HttpJournalApi {
    pub fn new(base_url: &str) -> ClientResult<Self> {
        let base_url = Url::parse(base_url.trim())
            .map_err(|e| ClientError::Config(format!("invalid backend url '{}': {}", base_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(ClientError::Config(format!("backend url '{}' cannot be a base", base_url)));
        }
        Ok(Self {
            client: Client::new(),
            base_url,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Appends percent-encoded segments to the base path.
    fn endpoint(&self, segments: &[&str]) -> ClientResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ClientError::Config(format!("backend url '{}' cannot be a base", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn entries_endpoint(&self) -> ClientResult<Url> {
        self.endpoint(&["api", "journal", "entries"])
    }

    fn entry_endpoint(&self, id: &str) -> ClientResult<Url> {
        self.endpoint(&["api", "journal", "entries", id])
    }
}

async fn ensure_success(response: Response) -> ClientResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(ClientError::Status { status, body })
}

async fn decode<T: DeserializeOwned>(response: Response) -> ClientResult<T> {
    let response = ensure_success(response).await?;
    let body_text = response.text().await?;
    serde_json::from_str(&body_text).map_err(|e| ClientError::Decode(e.to_string()))
}

#[async_trait]
impl JournalApi for HttpJournalApi {
    async fn list_entries(&self) -> ClientResult<Vec<JournalEntry>> {
        let response = self.client.get(self.entries_endpoint()?).send().await?;
        decode(response).await
    }

    async fn get_entry(&self, id: &str) -> ClientResult<JournalEntry> {
        let response = self.client.get(self.entry_endpoint(id)?).send().await?;
        decode(response).await
    }

    async fn create_entry(&self, request: CreateEntryRequest) -> ClientResult<JournalEntry> {
        let response = self
            .client
            .post(self.entries_endpoint()?)
            .json(&request)
            .send()
            .await?;
        decode(response).await
    }

    async fn delete_entry(&self, id: &str) -> ClientResult<()> {
        let response = self.client.delete(self.entry_endpoint(id)?).send().await?;
        ensure_success(response).await?;
        Ok(())
    }

    async fn analyze_text(&self, text: &str) -> ClientResult<AnalysisResult> {
        let request = AnalyzeRequest { text: text.to_string() };
        let response = self
            .client
            .post(self.endpoint(&["api", "journal", "analyze"])?)
            .json(&request)
            .send()
            .await?;
        decode(response).await
    }

    async fn banner(&self) -> ClientResult<String> {
        #[derive(Deserialize)]
        struct BannerResponse {
            message: String,
        }

        let response = self.client.get(self.base_url.clone()).send().await?;
        let banner: BannerResponse = decode(response).await?;
        Ok(banner.message)
    }
}
