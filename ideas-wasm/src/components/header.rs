use ideas_client::{HeaderVisibility, MENU_ITEMS, NavMenu};
use leptos::ev;
use leptos::prelude::*;

use crate::assets::LOGO;

fn menu_links(menu: RwSignal<NavMenu>, link_class: &'static str) -> impl IntoView {
    MENU_ITEMS
        .iter()
        .copied()
        .map(|item| {
            view! {
                <a
                    href=item.href
                    class=link_class
                    class:active=move || menu.with(|m| m.is_active(&item))
                    on:click=move |ev: ev::MouseEvent| {
                        ev.prevent_default();
                        menu.update(|m| m.select(&item));
                    }
                >
                    {item.title}
                </a>
            }
        })
        .collect_view()
}

#[component]
pub(crate) fn Header() -> impl IntoView {
    let visibility = RwSignal::new(HeaderVisibility::default());
    let menu = RwSignal::new(NavMenu::default());

    let scroll = window_event_listener(ev::scroll, move |_| {
        let scroll_y = window().scroll_y().unwrap_or(0.0);
        visibility.update(|v| {
            v.on_scroll(scroll_y);
        });
    });
    on_cleanup(move || scroll.remove());

    let header_class = move || {
        if visibility.with(HeaderVisibility::is_visible) {
            "site-header site-header--visible"
        } else {
            "site-header site-header--hidden"
        }
    };

    view! {
        <header class=header_class>
            <div class="site-header__bar">
                <img src=LOGO alt="Suitmedia" class="site-header__logo" />

                <nav class="site-header__nav">{menu_links(menu, "site-header__link")}</nav>

                <button
                    class="site-header__toggle"
                    aria-label="Toggle mobile menu"
                    on:click=move |_| menu.update(NavMenu::toggle_mobile)
                >
                    "☰"
                </button>
            </div>

            <Show when=move || menu.with(NavMenu::is_mobile_open)>
                <div class="site-header__mobile">
                    {menu_links(menu, "site-header__mobile-link")}
                </div>
            </Show>
        </header>
    }
}
