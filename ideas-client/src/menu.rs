#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Пункт навигации в шапке.
pub struct MenuItem {
    /// Подпись.
    pub title: &'static str,
    /// Ссылка (пока пустая у всех пунктов).
    pub href: &'static str,
}

/// Пункты навигации в порядке отображения.
pub const MENU_ITEMS: [MenuItem; 6] = [
    MenuItem { title: "Work", href: "" },
    MenuItem { title: "About", href: "" },
    MenuItem { title: "Services", href: "" },
    MenuItem { title: "Ideas", href: "" },
    MenuItem { title: "Careers", href: "" },
    MenuItem { title: "Contact", href: "" },
];

const DEFAULT_ACTIVE: &str = "Ideas";

#[derive(Debug, Clone, PartialEq, Eq)]
/// Состояние навигации: активный пункт и мобильное меню.
pub struct NavMenu {
    active: &'static str,
    mobile_open: bool,
}

impl Default for NavMenu {
    fn default() -> Self {
        Self {
            active: DEFAULT_ACTIVE,
            mobile_open: false,
        }
    }
}

impl NavMenu {
    /// Делает пункт активным и закрывает мобильное меню.
    pub fn select(&mut self, item: &MenuItem) {
        self.active = item.title;
        self.mobile_open = false;
    }

    /// Открывает или закрывает мобильное меню.
    pub fn toggle_mobile(&mut self) {
        self.mobile_open = !self.mobile_open;
    }

    /// Активен ли пункт.
    pub fn is_active(&self, item: &MenuItem) -> bool {
        self.active == item.title
    }

    /// Открыто ли мобильное меню.
    pub fn is_mobile_open(&self) -> bool {
        self.mobile_open
    }

    /// Подпись активного пункта.
    pub fn active(&self) -> &'static str {
        self.active
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ideas_is_active_by_default() {
        let menu = NavMenu::default();
        assert_eq!(menu.active(), "Ideas");
        assert!(menu.is_active(&MENU_ITEMS[3]));
        assert!(!menu.is_mobile_open());
    }

    #[test]
    fn select_closes_mobile_menu() {
        let mut menu = NavMenu::default();
        menu.toggle_mobile();
        assert!(menu.is_mobile_open());

        menu.select(&MENU_ITEMS[1]);
        assert_eq!(menu.active(), "About");
        assert!(!menu.is_mobile_open());
    }
}
