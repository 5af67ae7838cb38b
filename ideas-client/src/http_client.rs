use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

use crate::api::{ideas_endpoint, parse_listing};
use crate::error::{FetchError, FetchResult};
use crate::fetcher::ContentFetcher;
use crate::models::ListingResult;
use crate::query::PageQuery;

#[derive(Debug, Clone, Copy)]
/// Таймауты HTTP-клиента.
pub struct HttpTimeouts {
    /// Таймаут установки соединения.
    pub connect: Duration,
    /// Таймаут всего запроса.
    pub request: Duration,
}

impl Default for HttpTimeouts {
    fn default() -> Self {
        Self {
            connect: Duration::from_secs(5),
            request: Duration::from_secs(15),
        }
    }
}

#[derive(Debug, Clone)]
/// HTTP-клиент content API на `reqwest`.
pub struct HttpFetcher {
    base_url: String,
    client: Client,
}

impl HttpFetcher {
    /// Создаёт клиент с базовым URL API и таймаутами по умолчанию.
    pub fn new(base_url: impl Into<String>) -> FetchResult<Self> {
        Self::with_timeouts(base_url, HttpTimeouts::default())
    }

    /// Создаёт клиент с явными таймаутами.
    pub fn with_timeouts(base_url: impl Into<String>, timeouts: HttpTimeouts) -> FetchResult<Self> {
        let client = Client::builder()
            .connect_timeout(timeouts.connect)
            .timeout(timeouts.request)
            .build()
            .map_err(|err| FetchError::Network(format!("failed to build http client: {err}")))?;

        Ok(Self {
            base_url: base_url.into(),
            client,
        })
    }

    /// Базовый URL API.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl ContentFetcher for HttpFetcher {
    async fn fetch_page(&self, query: &PageQuery) -> FetchResult<ListingResult> {
        let url = ideas_endpoint(&self.base_url, query)?;

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(FetchError::from_reqwest)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.ok();
            return Err(FetchError::from_status(status.as_u16(), body));
        }

        let body = response.text().await.map_err(FetchError::body_read)?;
        parse_listing(&body)
    }
}
