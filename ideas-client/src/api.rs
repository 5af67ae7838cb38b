//! Формат обмена с content API: адрес запроса и разбор ответа.
//!
//! Общий код для HTTP-клиента на reqwest и для браузерного fetch в wasm.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime};
use serde::Deserialize;
use url::Url;

use crate::error::{FetchError, FetchResult};
use crate::models::{ListingResult, Post};
use crate::query::PageQuery;

/// Базовый адрес content API по умолчанию.
pub const DEFAULT_API_BASE_URL: &str = "https://suitmedia-backend.suitdev.com";

const IDEAS_PATH: &str = "api/ideas";
const APPEND_FIELDS: [&str; 2] = ["small_image", "medium_image"];

#[derive(Debug, Deserialize)]
struct IdeasResponseDto {
    data: Vec<IdeaDto>,
    meta: MetaDto,
}

#[derive(Debug, Deserialize)]
struct MetaDto {
    total: i64,
}

#[derive(Debug, Deserialize)]
struct IdeaDto {
    id: i64,
    title: String,
    #[serde(default)]
    published_at: Option<String>,
    #[serde(default)]
    small_image: Option<ImageField>,
    #[serde(default)]
    medium_image: Option<ImageField>,
}

/// API отдаёт изображение то объектом, то массивом объектов.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ImageField {
    One(ImageDto),
    Many(Vec<ImageDto>),
}

#[derive(Debug, Deserialize)]
struct ImageDto {
    #[serde(default)]
    url: Option<String>,
}

impl ImageField {
    fn into_url(self) -> Option<String> {
        let url = match self {
            Self::One(image) => image.url,
            Self::Many(images) => images.into_iter().find_map(|image| image.url),
        };
        url.filter(|url| !url.trim().is_empty())
    }
}

impl From<IdeaDto> for Post {
    fn from(value: IdeaDto) -> Self {
        Self {
            id: value.id,
            title: value.title,
            published_at: value.published_at.as_deref().and_then(parse_published_at),
            thumbnail_url: value.small_image.and_then(ImageField::into_url),
            medium_image_url: value.medium_image.and_then(ImageField::into_url),
        }
    }
}

impl From<IdeasResponseDto> for ListingResult {
    fn from(value: IdeasResponseDto) -> Self {
        Self {
            items: value.data.into_iter().map(Post::from).collect(),
            total_count: value.meta.total.max(0) as u64,
        }
    }
}

/// Пары query-параметров запроса страницы в порядке, в котором их ждёт API.
pub fn listing_query_pairs(query: &PageQuery) -> Vec<(&'static str, String)> {
    let mut pairs = vec![
        ("page[number]", query.page.to_string()),
        ("page[size]", query.size.get().to_string()),
    ];
    pairs.extend(
        APPEND_FIELDS
            .iter()
            .map(|field| ("append[]", (*field).to_string())),
    );
    pairs.push(("sort", query.sort.as_str().to_string()));
    pairs
}

/// Полный URL запроса страницы идей для заданного базового адреса.
pub fn ideas_endpoint(base_url: &str, query: &PageQuery) -> FetchResult<Url> {
    let raw = format!("{}/{}", base_url.trim().trim_end_matches('/'), IDEAS_PATH);
    let mut url =
        Url::parse(&raw).map_err(|err| FetchError::InvalidEndpoint(format!("{raw}: {err}")))?;

    url.query_pairs_mut()
        .extend_pairs(listing_query_pairs(query));
    Ok(url)
}

/// Разбирает тело ответа `GET /api/ideas`.
pub fn parse_listing(body: &str) -> FetchResult<ListingResult> {
    serde_json::from_str::<IdeasResponseDto>(body)
        .map(ListingResult::from)
        .map_err(|err| FetchError::Decode(err.to_string()))
}

/// Разбирает дату публикации: RFC 3339 или `YYYY-MM-DD HH:MM:SS` (UTC).
///
/// Смещение из RFC 3339 сохраняется, чтобы календарный день совпадал с днём
/// издателя. Нераспознанная дата не считается ошибкой ответа и даёт `None`.
pub fn parse_published_at(raw: &str) -> Option<DateTime<FixedOffset>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed);
    }
    if let Ok(parsed) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
        return Some(parsed.and_utc().fixed_offset());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc().fixed_offset())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::{PageSize, SortOrder};
    use chrono::{Datelike, Timelike};

    fn query(page: u32, size: PageSize, sort: SortOrder) -> PageQuery {
        PageQuery { page, size, sort }
    }

    #[test]
    fn query_pairs_follow_api_format() {
        let pairs = listing_query_pairs(&query(3, PageSize::Twenty, SortOrder::Oldest));
        assert_eq!(
            pairs,
            vec![
                ("page[number]", "3".to_string()),
                ("page[size]", "20".to_string()),
                ("append[]", "small_image".to_string()),
                ("append[]", "medium_image".to_string()),
                ("sort", "published_at".to_string()),
            ]
        );
    }

    #[test]
    fn endpoint_normalizes_slashes_and_encodes_query() {
        let url = ideas_endpoint("https://example.com/", &PageQuery::default())
            .expect("endpoint must build");

        assert_eq!(url.path(), "/api/ideas");
        let pairs: Vec<(String, String)> = url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        assert_eq!(pairs[0], ("page[number]".to_string(), "1".to_string()));
        assert_eq!(pairs[1], ("page[size]".to_string(), "10".to_string()));
        assert_eq!(pairs[4], ("sort".to_string(), "-published_at".to_string()));
    }

    #[test]
    fn endpoint_rejects_garbage_base_url() {
        let result = ideas_endpoint("not a url", &PageQuery::default());
        assert!(matches!(result, Err(FetchError::InvalidEndpoint(_))));
    }

    #[test]
    fn parse_listing_reads_items_and_total() {
        let body = r#"{
            "data": [
                {
                    "id": 7,
                    "title": "Kenali Tingkatan Influencers",
                    "published_at": "2022-09-08 11:36:17",
                    "small_image": [{"id": 1, "url": "https://cdn.example.com/s.jpg"}],
                    "medium_image": {"url": "https://cdn.example.com/m.jpg"}
                },
                {"id": 8, "title": "Second", "published_at": null, "small_image": []}
            ],
            "meta": {"current_page": 1, "total": 245}
        }"#;

        let listing = parse_listing(body).expect("payload must parse");
        assert_eq!(listing.total_count, 245);
        assert_eq!(listing.items.len(), 2);

        let first = &listing.items[0];
        assert_eq!(first.id, 7);
        assert_eq!(first.thumbnail_url.as_deref(), Some("https://cdn.example.com/s.jpg"));
        assert_eq!(first.medium_image_url.as_deref(), Some("https://cdn.example.com/m.jpg"));
        let published = first.published_at.expect("date must parse");
        assert_eq!((published.year(), published.month(), published.day()), (2022, 9, 8));
        assert_eq!(published.hour(), 11);

        let second = &listing.items[1];
        assert!(second.published_at.is_none());
        assert!(second.thumbnail_url.is_none());
        assert!(second.medium_image_url.is_none());
    }

    #[test]
    fn parse_listing_clamps_negative_total() {
        let listing = parse_listing(r#"{"data": [], "meta": {"total": -3}}"#)
            .expect("payload must parse");
        assert_eq!(listing.total_count, 0);
        assert!(listing.items.is_empty());
    }

    #[test]
    fn parse_listing_reports_malformed_payload() {
        let result = parse_listing(r#"{"data": "oops"}"#);
        assert!(matches!(result, Err(FetchError::Decode(_))));
    }

    #[test]
    fn parse_published_at_keeps_rfc3339_offset() {
        let parsed = parse_published_at("2024-06-05T01:00:00+07:00").expect("must parse");
        assert_eq!(parsed.offset().local_minus_utc(), 7 * 3600);
        assert_eq!((parsed.day(), parsed.hour()), (5, 1));
        assert_eq!(parsed.with_timezone(&chrono::Utc).day(), 4);
    }

    #[test]
    fn parse_published_at_reads_naive_values_as_utc() {
        let parsed = parse_published_at("2022-09-08").expect("must parse");
        assert_eq!(parsed.offset().local_minus_utc(), 0);
        assert_eq!((parsed.year(), parsed.month(), parsed.day()), (2022, 9, 8));
    }

    #[test]
    fn parse_published_at_returns_none_for_unknown_format() {
        assert!(parse_published_at("05/06/2024").is_none());
        assert!(parse_published_at("  ").is_none());
    }
}
