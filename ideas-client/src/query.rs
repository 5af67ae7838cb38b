//! Состояние query-параметров страницы (`page`, `size`, `sort`) и его синхронизация.

use std::collections::BTreeMap;
use std::fmt;

use url::form_urlencoded;

/// Ключ номера страницы в query-строке.
pub const PAGE_KEY: &str = "page";
/// Ключ размера страницы в query-строке.
pub const SIZE_KEY: &str = "size";
/// Ключ сортировки в query-строке.
pub const SORT_KEY: &str = "sort";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
/// Допустимые размеры страницы.
pub enum PageSize {
    /// 10 постов на странице.
    #[default]
    Ten,
    /// 20 постов на странице.
    Twenty,
    /// 50 постов на странице.
    Fifty,
}

impl PageSize {
    /// Все варианты в порядке отображения в селекторе.
    pub const ALL: [PageSize; 3] = [PageSize::Ten, PageSize::Twenty, PageSize::Fifty];

    /// Числовое значение размера.
    pub fn get(self) -> u32 {
        match self {
            Self::Ten => 10,
            Self::Twenty => 20,
            Self::Fifty => 50,
        }
    }

    /// Значение для query-строки и подписи в селекторе.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ten => "10",
            Self::Twenty => "20",
            Self::Fifty => "50",
        }
    }

    /// Размер по числу; `None`, если число не из допустимого набора.
    pub fn from_value(value: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|size| size.get() == value)
    }

    /// Разбирает строковое значение из query-строки.
    pub fn parse(raw: &str) -> Option<Self> {
        raw.trim().parse::<u32>().ok().and_then(Self::from_value)
    }
}

impl fmt::Display for PageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
/// Порядок сортировки по дате публикации.
pub enum SortOrder {
    /// Сначала новые (`-published_at`).
    #[default]
    Newest,
    /// Сначала старые (`published_at`).
    Oldest,
}

impl SortOrder {
    /// Все варианты в порядке отображения в селекторе.
    pub const ALL: [SortOrder; 2] = [SortOrder::Newest, SortOrder::Oldest];

    /// Значение параметра `sort` для API и query-строки.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Newest => "-published_at",
            Self::Oldest => "published_at",
        }
    }

    /// Подпись для селектора.
    pub fn label(self) -> &'static str {
        match self {
            Self::Newest => "Newest",
            Self::Oldest => "Oldest",
        }
    }

    /// Разбирает значение `sort`. Принимает и подписи (`newest`/`oldest`).
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        Self::ALL.into_iter().find(|sort| {
            sort.as_str() == raw || sort.label().eq_ignore_ascii_case(raw)
        })
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Снимок параметров запроса страницы, выведенный из query-состояния.
pub struct PageQuery {
    /// Номер страницы, начиная с 1.
    pub page: u32,
    /// Размер страницы.
    pub size: PageSize,
    /// Порядок сортировки.
    pub sort: SortOrder,
}

impl Default for PageQuery {
    fn default() -> Self {
        Self {
            page: 1,
            size: PageSize::default(),
            sort: SortOrder::default(),
        }
    }
}

impl PageQuery {
    /// Читает параметры из query-состояния.
    ///
    /// Отсутствующие и нераспознанные значения заменяются значениями по
    /// умолчанию: `page=1`, `size=10`, `sort=-published_at`.
    pub fn from_params(params: &QueryParams) -> Self {
        let page = params
            .get(PAGE_KEY)
            .and_then(|raw| raw.trim().parse::<u32>().ok())
            .filter(|page| *page >= 1)
            .unwrap_or(1);
        let size = params
            .get(SIZE_KEY)
            .and_then(PageSize::parse)
            .unwrap_or_default();
        let sort = params
            .get(SORT_KEY)
            .and_then(SortOrder::parse)
            .unwrap_or_default();

        Self { page, size, sort }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Query-параметры страницы как отображение строка → строка.
pub struct QueryParams(BTreeMap<String, String>);

impl QueryParams {
    /// Пустой набор параметров.
    pub fn new() -> Self {
        Self::default()
    }

    /// Значение по ключу.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Записывает значение, заменяя прежнее.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    /// Итератор по парам в порядке ключей.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Разбирает query-строку (`?page=2&size=20` или без `?`).
    pub fn from_query_string(raw: &str) -> Self {
        let raw = raw.trim().trim_start_matches('?');
        form_urlencoded::parse(raw.as_bytes())
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect()
    }

    /// Собирает query-строку без ведущего `?`.
    pub fn to_query_string(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.iter())
            .finish()
    }
}

impl FromIterator<(String, String)> for QueryParams {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Изменение одного query-параметра.
pub enum ParamUpdate {
    /// Переход на страницу.
    Page(u32),
    /// Смена размера страницы.
    Size(PageSize),
    /// Смена сортировки.
    Sort(SortOrder),
}

impl ParamUpdate {
    /// Строит изменение из пары ключ/значение, как они приходят из UI.
    pub fn parse(key: &str, value: &str) -> Option<Self> {
        match key {
            PAGE_KEY => value
                .trim()
                .parse::<u32>()
                .ok()
                .filter(|page| *page >= 1)
                .map(Self::Page),
            SIZE_KEY => PageSize::parse(value).map(Self::Size),
            SORT_KEY => SortOrder::parse(value).map(Self::Sort),
            _ => None,
        }
    }

    /// Ключ, под которым значение пишется в query-состояние.
    pub fn key(&self) -> &'static str {
        match self {
            Self::Page(_) => PAGE_KEY,
            Self::Size(_) => SIZE_KEY,
            Self::Sort(_) => SORT_KEY,
        }
    }

    /// Строковое значение для query-состояния.
    pub fn value(&self) -> String {
        match self {
            Self::Page(page) => page.to_string(),
            Self::Size(size) => size.get().to_string(),
            Self::Sort(sort) => sort.as_str().to_string(),
        }
    }
}

/// Вливает изменение в query-параметры.
///
/// Остальные ключи сохраняются. Смена размера или сортировки сбрасывает
/// `page` в 1.
pub fn update_param(params: &QueryParams, update: ParamUpdate) -> QueryParams {
    let mut next = params.clone();
    next.insert(update.key(), update.value());
    if update.key() != PAGE_KEY {
        next.insert(PAGE_KEY, "1");
    }
    next
}

/// Хранилище query-состояния (адресная строка, память и т.п.).
pub trait QueryStateStore {
    /// Текущие параметры.
    fn read(&self) -> QueryParams;
    /// Заменяет параметры целиком.
    fn write(&mut self, params: QueryParams);
}

#[derive(Debug, Clone, Default)]
/// Query-состояние в памяти, для CLI и тестов.
pub struct MemoryQueryStore {
    params: QueryParams,
}

impl MemoryQueryStore {
    /// Создаёт хранилище с начальными параметрами.
    pub fn new(params: QueryParams) -> Self {
        Self { params }
    }
}

impl QueryStateStore for MemoryQueryStore {
    fn read(&self) -> QueryParams {
        self.params.clone()
    }

    fn write(&mut self, params: QueryParams) {
        self.params = params;
    }
}

/// Применяет изменение к хранилищу и возвращает новый снимок запроса.
pub fn navigate<S>(store: &mut S, update: ParamUpdate) -> PageQuery
where
    S: QueryStateStore + ?Sized,
{
    let next = update_param(&store.read(), update);
    let query = PageQuery::from_params(&next);
    store.write(next);
    query
}
