use ideas_client::{
    ContentFetcher, HttpFetcher, ListingController, MemoryQueryStore, PageQuery, PageSize,
    ParamUpdate, QueryStateStore, SortOrder, navigate,
};

fn api_url() -> String {
    std::env::var("IDEAS_API_URL")
        .unwrap_or_else(|_| ideas_client::DEFAULT_API_BASE_URL.to_string())
}

#[tokio::test]
#[ignore = "requires network access to the content API"]
async fn http_listing_smoke_flow() {
    let fetcher = HttpFetcher::new(api_url()).expect("client must build");

    let first = fetcher
        .fetch_page(&PageQuery::default())
        .await
        .expect("first page must load");
    assert!(first.items.len() <= 10);
    assert!(first.total_count >= first.items.len() as u64);

    let mut store = MemoryQueryStore::default();
    let query = navigate(&mut store, ParamUpdate::Size(PageSize::Twenty));
    let query = if first.total_count > 20 {
        navigate(&mut store, ParamUpdate::Page(2))
    } else {
        query
    };
    assert_eq!(store.read().get("size"), Some("20"));

    let mut controller = ListingController::new();
    assert!(controller.refresh(&fetcher, query).await);
    assert!(controller.last_error().is_none());
    assert!(controller.items().len() <= 20);
    assert_eq!(controller.pager().page, query.page);
}

#[tokio::test]
#[ignore = "requires network access to the content API"]
async fn http_sort_orders_return_pages() {
    let fetcher = HttpFetcher::new(api_url()).expect("client must build");

    for sort in SortOrder::ALL {
        let query = PageQuery {
            page: 1,
            size: PageSize::Ten,
            sort,
        };
        let listing = fetcher
            .fetch_page(&query)
            .await
            .expect("page must load for every sort order");
        assert!(listing.items.len() <= 10);
    }
}
