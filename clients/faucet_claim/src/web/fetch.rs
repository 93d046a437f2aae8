use js_sys::{Promise, Reflect};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

pub(super) fn window() -> Result<web_sys::Window, String> {
    web_sys::window().ok_or_else(|| "no window".to_string())
}

/// Best-effort text of a thrown JS value (Error.message, string, or debug form)
pub(super) fn js_error_text(value: &JsValue) -> String {
    if let Some(message) = Reflect::get(value, &JsValue::from_str("message"))
        .ok()
        .and_then(|m| m.as_string())
    {
        return message;
    }
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

pub(super) fn json_post(url: &str, body: &str) -> Result<Request, String> {
    let init = RequestInit::new();
    init.set_method("POST");
    init.set_body(&JsValue::from_str(body));

    let request = Request::new_with_str_and_init(url, &init).map_err(|e| js_error_text(&e))?;
    request
        .headers()
        .set("Content-Type", "application/json")
        .map_err(|e| js_error_text(&e))?;
    Ok(request)
}

pub(super) fn opaque_get(url: &str) -> Result<Request, String> {
    let init = RequestInit::new();
    init.set_method("GET");
    init.set_mode(RequestMode::NoCors);
    Request::new_with_str_and_init(url, &init).map_err(|e| js_error_text(&e))
}

/// Runs `fetch`; rejects only on network failure, HTTP errors still resolve
pub(super) async fn send(request: &Request) -> Result<Response, String> {
    let window = window()?;
    let value = JsFuture::from(window.fetch_with_request(request))
        .await
        .map_err(|e| js_error_text(&e))?;
    value
        .dyn_into::<Response>()
        .map_err(|_| "fetch did not return a Response".to_string())
}

pub(super) async fn text(response: &Response) -> Result<String, String> {
    let promise = response.text().map_err(|e| js_error_text(&e))?;
    let value = JsFuture::from(promise).await.map_err(|e| js_error_text(&e))?;
    Ok(value.as_string().unwrap_or_default())
}

pub(super) async fn sleep(millis: u32) {
    let promise = Promise::new(&mut |resolve, _reject| {
        if let Some(window) = web_sys::window() {
            let _ = window
                .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, millis as i32);
        }
    });
    let _ = JsFuture::from(promise).await;
}
