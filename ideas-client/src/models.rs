use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// Публичная модель идеи (поста) для карточки в сетке.
pub struct Post {
    /// Идентификатор поста.
    pub id: i64,
    /// Заголовок поста.
    pub title: String,
    /// Дата публикации со смещением издателя, если API её вернул.
    pub published_at: Option<DateTime<FixedOffset>>,
    /// URL маленького изображения, используется как превью карточки.
    pub thumbnail_url: Option<String>,
    /// URL среднего изображения.
    pub medium_image_url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
/// Одна страница списка идей вместе с общим количеством записей.
///
/// Заменяется целиком после каждой успешной загрузки.
pub struct ListingResult {
    /// Посты текущей страницы в порядке ответа API.
    pub items: Vec<Post>,
    /// Общее количество постов по всем страницам.
    pub total_count: u64,
}
