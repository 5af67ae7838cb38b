use ideas_client::parallax_offset;
use leptos::ev;
use leptos::prelude::*;

#[component]
pub(crate) fn Banner() -> impl IntoView {
    let offset = RwSignal::new(0.0_f64);

    let scroll = window_event_listener(ev::scroll, move |_| {
        offset.set(parallax_offset(window().scroll_y().unwrap_or(0.0)));
    });
    on_cleanup(move || scroll.remove());

    view! {
        <section class="banner">
            <div class="banner__clip">
                <div
                    class="banner__image"
                    style:transform=move || format!("translateY({}px)", offset.get())
                ></div>
                <div class="banner__overlay"></div>
            </div>

            <div class="banner__content">
                <h1>"Ideas"</h1>
                <p>"Where all our great things begin"</p>
            </div>
        </section>
    }
}
