use ideas_client::{
    ListingController, PageSize, PagerState, PaginationToken, ParamUpdate, Post, SIZE_KEY,
    SORT_KEY, SortOrder, format_published_date,
};
use leptos::prelude::*;

use crate::state::AppState;

#[component]
fn IdeaCard(post: Post) -> impl IntoView {
    let date = format_published_date(post.published_at.as_ref());
    let thumbnail = post.thumbnail_url.clone().unwrap_or_default();

    view! {
        <article class="idea-card">
            <div class="idea-card__thumb">
                <img src=thumbnail alt=post.title.clone() loading="lazy" />
            </div>
            <div class="idea-card__body">
                <p class="idea-card__date">{date}</p>
                <h3 class="idea-card__title">{post.title}</h3>
            </div>
        </article>
    }
}

#[component]
fn Pager(state: AppState) -> impl IntoView {
    let pager = Memo::new(move |_| state.listing.with(ListingController::pager));

    let go_to = move |page: u32| state.navigate(ParamUpdate::Page(page));

    let tokens = move || {
        pager
            .with(|p| p.tokens.clone())
            .into_iter()
            .map(|token| match token {
                PaginationToken::Ellipsis => {
                    view! { <span class="pager__ellipsis">"..."</span> }.into_any()
                }
                PaginationToken::Page(page) => view! {
                    <button
                        class="pager__page"
                        class:pager__page--current=move || pager.with(|p| p.is_current(page))
                        on:click=move |_| go_to(page)
                    >
                        {page}
                    </button>
                }
                .into_any(),
            })
            .collect_view()
    };

    view! {
        <nav class="pager">
            <button
                class="pager__control"
                disabled=move || !pager.with(PagerState::can_go_back)
                on:click=move |_| go_to(1)
            >
                "«"
            </button>
            <button
                class="pager__control"
                disabled=move || !pager.with(PagerState::can_go_back)
                on:click=move |_| {
                    if let Some(page) = pager.with(PagerState::prev_page) {
                        go_to(page);
                    }
                }
            >
                "‹"
            </button>

            {tokens}

            <button
                class="pager__control"
                disabled=move || !pager.with(PagerState::can_go_forward)
                on:click=move |_| {
                    if let Some(page) = pager.with(PagerState::next_page) {
                        go_to(page);
                    }
                }
            >
                "›"
            </button>
            <button
                class="pager__control"
                disabled=move || !pager.with(PagerState::can_go_forward)
                on:click=move |_| go_to(pager.with(PagerState::last_page))
            >
                "»"
            </button>
        </nav>
    }
}

#[component]
pub(crate) fn IdeasPage(state: AppState) -> impl IntoView {
    let summary = move || state.listing.with(|listing| listing.pager().summary());

    let on_size_change = move |ev: leptos::ev::Event| {
        if let Some(update) = ParamUpdate::parse(SIZE_KEY, &event_target_value(&ev)) {
            state.navigate(update);
        }
    };
    let on_sort_change = move |ev: leptos::ev::Event| {
        if let Some(update) = ParamUpdate::parse(SORT_KEY, &event_target_value(&ev)) {
            state.navigate(update);
        }
    };

    let size_options = PageSize::ALL
        .iter()
        .map(|size| view! { <option value=size.as_str()>{size.as_str()}</option> })
        .collect_view();
    let sort_options = SortOrder::ALL
        .iter()
        .map(|sort| view! { <option value=sort.as_str()>{sort.label()}</option> })
        .collect_view();

    view! {
        <section class="ideas">
            <div class="ideas__controls">
                <div class="ideas__summary">{summary}</div>

                <div class="ideas__selectors">
                    <label class="ideas__selector">
                        <span>"Show per page:"</span>
                        <select
                            prop:value=move || state.page_query().size.as_str()
                            on:change=on_size_change
                        >
                            {size_options}
                        </select>
                    </label>

                    <label class="ideas__selector">
                        <span>"Sort by:"</span>
                        <select
                            prop:value=move || state.page_query().sort.as_str()
                            on:change=on_sort_change
                        >
                            {sort_options}
                        </select>
                    </label>
                </div>
            </div>

            <Show
                when=move || !state.listing.with(ListingController::is_loading)
                fallback=|| {
                    view! {
                        <div class="ideas__loading">
                            <div class="spinner"></div>
                        </div>
                    }
                }
            >
                <div class="ideas__grid">
                    <For
                        each=move || state.listing.with(|listing| listing.items().to_vec())
                        key=|post| post.id
                        children=move |post| view! { <IdeaCard post=post /> }
                    />
                </div>
            </Show>

            <Pager state=state />
        </section>
    }
}
