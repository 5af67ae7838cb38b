//! Клиентская библиотека страницы Ideas.
//!
//! Содержит всё, что не зависит от способа отрисовки:
//! - модель постов и разбор ответа content API (`api`);
//! - query-состояние страницы (`page`, `size`, `sort`) и его синхронизацию;
//! - компактную панель пагинации;
//! - контроллер загрузки, который отбрасывает устаревшие ответы;
//! - HTTP-клиент на `reqwest` (фича `http`);
//! - поведение шапки и баннера при прокрутке.
#![warn(missing_docs)]

pub mod api;
mod controller;
mod error;
mod fetcher;
mod format;
#[cfg(feature = "http")]
mod http_client;
mod menu;
mod models;
mod pagination;
mod query;
mod scroll;

pub use api::{DEFAULT_API_BASE_URL, ideas_endpoint, parse_listing};
pub use controller::{FetchTicket, ListingController};
pub use error::{FetchError, FetchResult};
pub use fetcher::ContentFetcher;
pub use format::format_published_date;
#[cfg(feature = "http")]
pub use http_client::{HttpFetcher, HttpTimeouts};
pub use menu::{MENU_ITEMS, MenuItem, NavMenu};
pub use models::{ListingResult, Post};
pub use pagination::{PagerState, PaginationToken, compute_range, total_pages};
pub use query::{
    MemoryQueryStore, PAGE_KEY, PageQuery, PageSize, ParamUpdate, QueryParams, QueryStateStore,
    SIZE_KEY, SORT_KEY, SortOrder, navigate, update_param,
};
pub use scroll::{HeaderVisibility, parallax_offset};
