use async_trait::async_trait;

use crate::error::FetchResult;
use crate::models::ListingResult;
use crate::query::PageQuery;

/// Источник страниц списка идей.
#[async_trait]
pub trait ContentFetcher: Send + Sync {
    /// Загружает одну страницу для точной тройки `(page, size, sort)`.
    async fn fetch_page(&self, query: &PageQuery) -> FetchResult<ListingResult>;
}
