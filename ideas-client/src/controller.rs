//! Цикл загрузки страницы списка и защита от устаревших ответов.

use tracing::{debug, error};

use crate::error::{FetchError, FetchResult};
use crate::fetcher::ContentFetcher;
use crate::models::{ListingResult, Post};
use crate::pagination::PagerState;
use crate::query::PageQuery;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Квитанция на запущенную загрузку.
///
/// Результат применяется, только если квитанция всё ещё последняя.
pub struct FetchTicket {
    generation: u64,
    query: PageQuery,
}

impl FetchTicket {
    /// Параметры, для которых была запущена загрузка.
    pub fn query(&self) -> &PageQuery {
        &self.query
    }
}

#[derive(Debug, Clone, Default)]
/// Состояние страницы списка: последние успешно загруженные данные,
/// флаг загрузки и последняя ошибка.
///
/// Во время загрузки прежние посты остаются доступны до прихода новых.
pub struct ListingController {
    listing: ListingResult,
    query: PageQuery,
    generation: u64,
    loading: bool,
    last_error: Option<FetchError>,
}

impl ListingController {
    /// Пустое состояние до первой загрузки.
    pub fn new() -> Self {
        Self::default()
    }

    /// Начинает загрузку для `query`; все ранее выданные квитанции устаревают.
    pub fn begin(&mut self, query: PageQuery) -> FetchTicket {
        self.generation += 1;
        self.query = query;
        self.loading = true;

        debug!(
            generation = self.generation,
            page = query.page,
            size = query.size.get(),
            sort = query.sort.as_str(),
            "fetching ideas page"
        );

        FetchTicket {
            generation: self.generation,
            query,
        }
    }

    /// Применяет результат загрузки. Возвращает `false`, если ответ устарел
    /// и был отброшен.
    pub fn complete(&mut self, ticket: FetchTicket, result: FetchResult<ListingResult>) -> bool {
        if ticket.generation != self.generation {
            debug!(
                stale_generation = ticket.generation,
                current_generation = self.generation,
                page = ticket.query.page,
                "discarding stale ideas response"
            );
            return false;
        }

        self.loading = false;
        match result {
            Ok(listing) => {
                debug!(
                    generation = ticket.generation,
                    items = listing.items.len(),
                    total = listing.total_count,
                    "ideas page loaded"
                );
                self.listing = listing;
                self.last_error = None;
            }
            Err(err) => {
                error!(
                    generation = ticket.generation,
                    page = ticket.query.page,
                    error = %err,
                    "error fetching ideas"
                );
                self.last_error = Some(err);
            }
        }
        true
    }

    /// Загружает страницу через `fetcher` и применяет результат.
    pub async fn refresh<F>(&mut self, fetcher: &F, query: PageQuery) -> bool
    where
        F: ContentFetcher + ?Sized,
    {
        let ticket = self.begin(query);
        let result = fetcher.fetch_page(&query).await;
        self.complete(ticket, result)
    }

    /// Последние успешно загруженные данные.
    pub fn listing(&self) -> &ListingResult {
        &self.listing
    }

    /// Посты последней успешной загрузки.
    pub fn items(&self) -> &[Post] {
        &self.listing.items
    }

    /// Общее количество постов из последней успешной загрузки.
    pub fn total_count(&self) -> u64 {
        self.listing.total_count
    }

    /// Параметры последней запрошенной страницы.
    pub fn query(&self) -> &PageQuery {
        &self.query
    }

    /// Идёт ли сейчас загрузка.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Ошибка последней применённой загрузки.
    pub fn last_error(&self) -> Option<&FetchError> {
        self.last_error.as_ref()
    }

    /// Панель пагинации для запрошенной страницы.
    pub fn pager(&self) -> PagerState {
        PagerState::new(&self.query, self.listing.total_count)
    }
}
