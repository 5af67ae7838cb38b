//! Реакция шапки и баннера на прокрутку страницы.

/// Ниже этой позиции шапка не прячется.
pub const HEADER_HIDE_THRESHOLD: f64 = 100.0;
/// Доля прокрутки, на которую смещается фон баннера.
pub const PARALLAX_FACTOR: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq)]
/// Видимость фиксированной шапки.
///
/// Шапка прячется при прокрутке вниз ниже порога и возвращается при любой
/// прокрутке вверх.
pub struct HeaderVisibility {
    visible: bool,
    last_scroll_y: f64,
}

impl Default for HeaderVisibility {
    fn default() -> Self {
        Self {
            visible: true,
            last_scroll_y: 0.0,
        }
    }
}

impl HeaderVisibility {
    /// Обрабатывает новую позицию прокрутки и возвращает видимость.
    pub fn on_scroll(&mut self, scroll_y: f64) -> bool {
        self.visible = !(scroll_y > self.last_scroll_y && scroll_y > HEADER_HIDE_THRESHOLD);
        self.last_scroll_y = scroll_y;
        self.visible
    }

    /// Видна ли шапка.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Последняя обработанная позиция прокрутки.
    pub fn last_scroll_y(&self) -> f64 {
        self.last_scroll_y
    }
}

/// Вертикальное смещение фона баннера для позиции прокрутки.
pub fn parallax_offset(scroll_y: f64) -> f64 {
    scroll_y * PARALLAX_FACTOR
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_stays_visible_near_top() {
        let mut header = HeaderVisibility::default();
        assert!(header.on_scroll(40.0));
        assert!(header.on_scroll(100.0));
    }

    #[test]
    fn header_hides_when_scrolling_down_past_threshold() {
        let mut header = HeaderVisibility::default();
        header.on_scroll(90.0);
        assert!(!header.on_scroll(150.0));
        assert!(!header.on_scroll(400.0));
        assert_eq!(header.last_scroll_y(), 400.0);
    }

    #[test]
    fn header_returns_when_scrolling_up() {
        let mut header = HeaderVisibility::default();
        header.on_scroll(500.0);
        assert!(!header.is_visible());
        assert!(header.on_scroll(480.0));
    }

    #[test]
    fn parallax_moves_at_half_speed() {
        assert_eq!(parallax_offset(0.0), 0.0);
        assert_eq!(parallax_offset(300.0), 150.0);
    }
}
