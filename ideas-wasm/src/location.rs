use ideas_client::{QueryParams, QueryStateStore};
use wasm_bindgen::JsValue;

/// Query-состояние в адресной строке браузера.
///
/// Запись добавляет новую запись в историю, так что «назад» возвращает
/// предыдущую страницу списка.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct LocationQueryStore;

impl QueryStateStore for LocationQueryStore {
    fn read(&self) -> QueryParams {
        read_search().unwrap_or_default()
    }

    fn write(&mut self, params: QueryParams) {
        if let Err(err) = push_search(&params) {
            web_sys::console::warn_1(&JsValue::from_str(&err));
        }
    }
}

fn read_search() -> Option<QueryParams> {
    let window = web_sys::window()?;
    let search = window.location().search().ok()?;
    Some(QueryParams::from_query_string(&search))
}

fn push_search(params: &QueryParams) -> Result<(), String> {
    let window = web_sys::window().ok_or_else(|| "window is not available".to_string())?;
    let pathname = window
        .location()
        .pathname()
        .map_err(|_| "failed to read location".to_string())?;

    window
        .history()
        .map_err(|_| "history is not available".to_string())?
        .push_state_with_url(&JsValue::NULL, "", Some(&location_url(&pathname, params)))
        .map_err(|_| "failed to update history".to_string())
}

fn location_url(pathname: &str, params: &QueryParams) -> String {
    let search = params.to_query_string();
    if search.is_empty() {
        return pathname.to_string();
    }
    format!("{pathname}?{search}")
}
