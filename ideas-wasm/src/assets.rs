//! Статика из `assets/`: trunk копирует каталог целиком (`rel="copy-dir"`).

// На хосте компоненты не собираются, константы нужны только тестам.
#![cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]

/// Логотип в шапке.
pub(crate) const LOGO: &str = "assets/suitmedia-logo.svg";
/// Фон баннера, подключается из `style.css`.
#[cfg(test)]
const BANNER_BACKGROUND: &str = "assets/ideas-bg.svg";

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;

    const INDEX_HTML: &str = include_str!("../index.html");
    const STYLE_CSS: &str = include_str!("../style.css");

    #[test]
    fn index_copies_assets_dir_into_dist() {
        assert!(INDEX_HTML.contains(r#"<link data-trunk rel="copy-dir" href="assets" />"#));
    }

    #[test]
    fn referenced_assets_exist() {
        let root = Path::new(env!("CARGO_MANIFEST_DIR"));
        for asset in [LOGO, BANNER_BACKGROUND] {
            assert!(root.join(asset).is_file(), "missing {asset}");
        }
    }

    #[test]
    fn stylesheet_uses_banner_background() {
        assert!(STYLE_CSS.contains(&format!("url(\"{BANNER_BACKGROUND}\")")));
    }
}
