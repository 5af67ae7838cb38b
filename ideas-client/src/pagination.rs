//! Компактная панель пагинации: первые пять страниц, текущая, последняя.

use std::fmt;

use crate::query::PageQuery;

/// Сколько первых страниц показывается всегда.
const LEADING_PAGES: u32 = 5;
/// До этого количества страниц выводятся все номера без многоточий.
const COMPACT_LIMIT: u32 = LEADING_PAGES + 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Элемент панели пагинации.
pub enum PaginationToken {
    /// Кнопка с номером страницы.
    Page(u32),
    /// Пропущенный диапазон страниц.
    Ellipsis,
}

impl fmt::Display for PaginationToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Page(page) => write!(f, "{page}"),
            Self::Ellipsis => f.write_str("..."),
        }
    }
}

/// Строит последовательность кнопок для страницы `current` из `total`.
///
/// При `total <= 7` выводятся все страницы. Иначе: страницы 1..=5,
/// многоточие (если `current > 6`), сама `current` (если она за пределами
/// первого блока и не дальше последней страницы), многоточие (если
/// `current < total - 2`) и последняя страница. Номера строго возрастают,
/// элементов не больше девяти.
pub fn compute_range(current: u32, total: u32) -> Vec<PaginationToken> {
    if total <= COMPACT_LIMIT {
        return (1..=total).map(PaginationToken::Page).collect();
    }

    let mut range: Vec<PaginationToken> = (1..=LEADING_PAGES).map(PaginationToken::Page).collect();

    if current > LEADING_PAGES + 1 {
        range.push(PaginationToken::Ellipsis);
    }

    if current > LEADING_PAGES && current <= total {
        range.push(PaginationToken::Page(current));
    }

    if current < total - 2 {
        range.push(PaginationToken::Ellipsis);
    }

    if !range.contains(&PaginationToken::Page(total)) {
        range.push(PaginationToken::Page(total));
    }

    range
}

/// Количество страниц: `ceil(total_count / size)`.
pub fn total_pages(total_count: u64, size: u32) -> u32 {
    if size == 0 {
        return 0;
    }
    let pages = total_count.div_ceil(u64::from(size));
    u32::try_from(pages).unwrap_or(u32::MAX)
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Всё, что нужно для отрисовки панели пагинации и строки «Showing ...».
pub struct PagerState {
    /// Текущая страница (не корректируется, даже если вне диапазона).
    pub page: u32,
    /// `ceil(total_count / size)`, может быть 0.
    pub total_pages: u32,
    /// Количество страниц для отображения, не меньше 1.
    pub display_total_pages: u32,
    /// Кнопки панели.
    pub tokens: Vec<PaginationToken>,
    /// Первый показанный пост (с 1), 0 для пустого списка.
    pub showing_from: u64,
    /// Последний показанный пост, 0 для пустого списка.
    pub showing_to: u64,
    /// Общее количество постов.
    pub total_count: u64,
}

impl PagerState {
    /// Считает состояние панели для запроса и общего количества постов.
    pub fn new(query: &PageQuery, total_count: u64) -> Self {
        let size = query.size.get();
        let total_pages = total_pages(total_count, size);
        let display_total_pages = total_pages.max(1);
        let tokens = compute_range(query.page, display_total_pages);

        let size = u64::from(size);
        let page = u64::from(query.page);
        let (showing_from, showing_to) = if total_count == 0 {
            (0, 0)
        } else {
            (
                page.saturating_sub(1) * size + 1,
                (page * size).min(total_count),
            )
        };

        Self {
            page: query.page,
            total_pages,
            display_total_pages,
            tokens,
            showing_from,
            showing_to,
            total_count,
        }
    }

    /// Можно ли перейти на первую/предыдущую страницу.
    pub fn can_go_back(&self) -> bool {
        self.page > 1
    }

    /// Можно ли перейти на следующую/последнюю страницу.
    pub fn can_go_forward(&self) -> bool {
        self.page < self.display_total_pages
    }

    /// Предыдущая страница, если есть куда идти.
    pub fn prev_page(&self) -> Option<u32> {
        self.can_go_back().then(|| self.page - 1)
    }

    /// Следующая страница, если есть куда идти.
    pub fn next_page(&self) -> Option<u32> {
        self.can_go_forward().then(|| self.page + 1)
    }

    /// Последняя страница для кнопки «»».
    pub fn last_page(&self) -> u32 {
        self.display_total_pages
    }

    /// Является ли `page` текущей страницей.
    pub fn is_current(&self, page: u32) -> bool {
        self.page == page
    }

    /// Текст вида `Showing 11 - 20 of 245`.
    pub fn summary(&self) -> String {
        format!(
            "Showing {} - {} of {}",
            self.showing_from, self.showing_to, self.total_count
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::{PageSize, SortOrder};
    use PaginationToken::{Ellipsis, Page};

    fn pages(numbers: &[u32]) -> Vec<PaginationToken> {
        numbers.iter().copied().map(Page).collect()
    }

    fn query(page: u32, size: PageSize) -> PageQuery {
        PageQuery {
            page,
            size,
            sort: SortOrder::Newest,
        }
    }

    #[test]
    fn small_totals_list_every_page() {
        for total in 1..=7 {
            let expected: Vec<u32> = (1..=total).collect();
            for current in 1..=total {
                assert_eq!(compute_range(current, total), pages(&expected));
            }
        }
    }

    #[test]
    fn zero_total_gives_empty_range() {
        assert!(compute_range(1, 0).is_empty());
    }

    #[test]
    fn single_page() {
        assert_eq!(compute_range(1, 1), vec![Page(1)]);
    }

    #[test]
    fn current_inside_leading_block() {
        assert_eq!(
            compute_range(3, 20),
            vec![Page(1), Page(2), Page(3), Page(4), Page(5), Ellipsis, Page(20)]
        );
    }

    #[test]
    fn current_in_the_middle() {
        assert_eq!(
            compute_range(10, 20),
            vec![
                Page(1),
                Page(2),
                Page(3),
                Page(4),
                Page(5),
                Ellipsis,
                Page(10),
                Ellipsis,
                Page(20)
            ]
        );
    }

    #[test]
    fn current_next_to_last_page() {
        assert_eq!(
            compute_range(19, 20),
            vec![Page(1), Page(2), Page(3), Page(4), Page(5), Ellipsis, Page(19), Page(20)]
        );
    }

    #[test]
    fn current_on_last_page_is_not_duplicated() {
        assert_eq!(
            compute_range(20, 20),
            vec![Page(1), Page(2), Page(3), Page(4), Page(5), Ellipsis, Page(20)]
        );
    }

    #[test]
    fn current_right_after_leading_block_has_no_leading_ellipsis() {
        assert_eq!(
            compute_range(6, 20),
            vec![Page(1), Page(2), Page(3), Page(4), Page(5), Page(6), Ellipsis, Page(20)]
        );
    }

    #[test]
    fn current_two_before_last_has_no_trailing_ellipsis() {
        assert_eq!(
            compute_range(18, 20),
            vec![Page(1), Page(2), Page(3), Page(4), Page(5), Ellipsis, Page(18), Page(20)]
        );
    }

    #[test]
    fn out_of_range_current_is_not_shown() {
        assert_eq!(
            compute_range(42, 20),
            vec![Page(1), Page(2), Page(3), Page(4), Page(5), Ellipsis, Page(20)]
        );
    }

    #[test]
    fn ranges_are_ascending_unique_and_bounded() {
        for total in 0..=60 {
            for current in 1..=total + 3 {
                let range = compute_range(current, total);
                assert!(range.len() <= 9, "too long for ({current}, {total})");

                let numbers: Vec<u32> = range
                    .iter()
                    .filter_map(|token| match token {
                        Page(page) => Some(*page),
                        Ellipsis => None,
                    })
                    .collect();
                assert!(
                    numbers.windows(2).all(|w| w[0] < w[1]),
                    "not strictly ascending for ({current}, {total}): {numbers:?}"
                );
                if total > 0 {
                    assert_eq!(numbers.last(), Some(&total));
                }

                let double_ellipsis = range.windows(2).any(|w| w == [Ellipsis, Ellipsis]);
                assert!(!double_ellipsis, "adjacent ellipses for ({current}, {total})");
            }
        }
    }

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(total_pages(0, 10), 0);
        assert_eq!(total_pages(1, 10), 1);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
        assert_eq!(total_pages(245, 50), 5);
    }

    #[test]
    fn pager_for_empty_listing_shows_one_page() {
        let pager = PagerState::new(&query(1, PageSize::Ten), 0);
        assert_eq!(pager.total_pages, 0);
        assert_eq!(pager.display_total_pages, 1);
        assert_eq!(pager.tokens, vec![Page(1)]);
        assert!(!pager.can_go_back());
        assert!(!pager.can_go_forward());
        assert_eq!(pager.summary(), "Showing 0 - 0 of 0");
    }

    #[test]
    fn pager_summary_clamps_to_total() {
        let pager = PagerState::new(&query(25, PageSize::Ten), 245);
        assert_eq!(pager.total_pages, 25);
        assert_eq!(pager.summary(), "Showing 241 - 245 of 245");
        assert_eq!(pager.prev_page(), Some(24));
        assert_eq!(pager.next_page(), None);
        assert_eq!(pager.last_page(), 25);
    }

    #[test]
    fn pager_first_page_disables_back_controls() {
        let pager = PagerState::new(&query(1, PageSize::Twenty), 245);
        assert_eq!(pager.prev_page(), None);
        assert_eq!(pager.next_page(), Some(2));
        assert!(pager.is_current(1));
        assert_eq!(pager.summary(), "Showing 1 - 20 of 245");
    }

    #[test]
    fn pager_keeps_out_of_range_page() {
        let pager = PagerState::new(&query(40, PageSize::Fifty), 245);
        assert_eq!(pager.page, 40);
        assert!(!pager.can_go_forward());
        assert!(pager.can_go_back());
    }
}
