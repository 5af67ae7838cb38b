use chrono::{DateTime, Datelike, FixedOffset};

const MONTHS_ID: [&str; 12] = [
    "Januari",
    "Februari",
    "Maret",
    "April",
    "Mei",
    "Juni",
    "Juli",
    "Agustus",
    "September",
    "Oktober",
    "November",
    "Desember",
];

/// Дата публикации для карточки в индонезийском формате: `5 Juni 2024`.
///
/// День берётся в смещении издателя, без перевода в UTC. Для отсутствующей
/// даты возвращает пустую строку.
pub fn format_published_date(published_at: Option<&DateTime<FixedOffset>>) -> String {
    let Some(date) = published_at else {
        return String::new();
    };

    let month = MONTHS_ID[date.month0() as usize];
    format!("{} {} {}", date.day(), month, date.year())
}
