use gloo_net::http::Request;
use ideas_client::{FetchError, FetchResult, ListingResult, PageQuery, ideas_endpoint, parse_listing};

const API_BASE_URL: &str = match option_env!("WASM_API_BASE_URL") {
    Some(value) => value,
    None => ideas_client::DEFAULT_API_BASE_URL,
};

pub(crate) async fn fetch_ideas(query: &PageQuery) -> FetchResult<ListingResult> {
    let url = ideas_endpoint(API_BASE_URL, query)?;

    let response = Request::get(url.as_str())
        .send()
        .await
        .map_err(|err| FetchError::Network(err.to_string()))?;

    let status = response.status();
    if !response.ok() {
        let body = response.text().await.ok();
        return Err(FetchError::from_status(status, body));
    }

    let body = response.text().await.map_err(FetchError::body_read)?;
    parse_listing(&body)
}
