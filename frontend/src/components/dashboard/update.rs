//! Update function for the dashboard, Elm style: it receives the current
//! state, the context and a message, mutates the state, and returns whether
//! the view should re-render.
//!
//! Key behaviors
//! - Upload: multipart POST of the selected file; on success the dataset and
//!   summary are replaced wholesale and the history refreshed.
//! - Network failures surface as a single toast and leave whatever is on
//!   screen untouched. No retries; the user triggers the action again.
//! - The upload action is rejected while a request is outstanding.

use gloo_net::http::Request;
use js_sys::Uint8Array;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{FormData, HtmlAnchorElement, HtmlInputElement};
use yew::html::Scope;
use yew::platform::spawn_local;
use yew::prelude::*;

use common::requests::UploadResponse;

use super::fetch_history;
use super::helpers::show_toast;
use super::messages::Msg;
use super::state::DashboardComponent;

/// Central update function for the component.
pub fn update(
    component: &mut DashboardComponent,
    ctx: &Context<DashboardComponent>,
    msg: Msg,
) -> bool {
    match msg {
        Msg::FileSelected(file) => {
            component.file = file;
            false
        }
        Msg::Upload => {
            // Reject a second submit while the first is still in flight.
            if component.loading {
                return false;
            }
            let Some(file) = component.file.clone() else {
                return false;
            };
            component.loading = true;
            start_upload(ctx.link().clone(), file);
            true
        }
        Msg::UploadFinished(response) => {
            component.loading = false;
            component.summary = Some(response.summary);
            component.dataset = Some(response.data);
            component.file = None;
            if let Some(input) = component.file_input_ref.cast::<HtmlInputElement>() {
                input.set_value("");
            }
            fetch_history(ctx.link().clone());
            true
        }
        Msg::UploadFailed(message) => {
            component.loading = false;
            show_toast(&format!("Upload failed: {}", message));
            true
        }
        Msg::HistoryLoaded(entries) => {
            component.history = entries;
            true
        }
        Msg::Clear => {
            let confirmed = web_sys::window()
                .map(|w| {
                    w.confirm_with_message("Are you sure you want to clear all history?")
                        .unwrap_or(false)
                })
                .unwrap_or(false);
            if confirmed {
                start_clear(ctx.link().clone());
            }
            false
        }
        Msg::Cleared => {
            component.history.clear();
            component.summary = None;
            component.dataset = None;
            true
        }
        Msg::DownloadReport => {
            download_report();
            false
        }
    }
}

fn start_upload(link: Scope<DashboardComponent>, file: web_sys::File) {
    spawn_local(async move {
        let form = match FormData::new() {
            Ok(form) => form,
            Err(_) => {
                link.send_message(Msg::UploadFailed("form construction failed".into()));
                return;
            }
        };
        if form.append_with_blob("file", &file).is_err() {
            link.send_message(Msg::UploadFailed("could not attach file".into()));
            return;
        }

        let request = match Request::post("/api/upload").body(form) {
            Ok(request) => request,
            Err(e) => {
                link.send_message(Msg::UploadFailed(e.to_string()));
                return;
            }
        };
        match request.send().await {
            Ok(resp) if resp.ok() => match resp.json::<UploadResponse>().await {
                Ok(body) => link.send_message(Msg::UploadFinished(body)),
                Err(e) => link.send_message(Msg::UploadFailed(e.to_string())),
            },
            Ok(resp) => {
                let status = resp.status();
                let detail = resp.text().await.unwrap_or_default();
                link.send_message(Msg::UploadFailed(error_detail(&detail, status)));
            }
            Err(e) => link.send_message(Msg::UploadFailed(e.to_string())),
        }
    });
}

/// Pulls the `error` field out of a JSON error body, falling back to the
/// HTTP status.
fn error_detail(body: &str, status: u16) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| {
            v.get("error")
                .and_then(|e| e.as_str())
                .map(str::to_string)
        })
        .unwrap_or_else(|| format!("status {}", status))
}

fn start_clear(link: Scope<DashboardComponent>) {
    spawn_local(async move {
        match Request::post("/api/clear").send().await {
            Ok(resp) if resp.ok() => link.send_message(Msg::Cleared),
            _ => show_toast("Failed to clear history"),
        }
    });
}

/// Fetches the PDF report and hands it to the browser as a download.
fn download_report() {
    spawn_local(async move {
        let response = Request::get("/api/report").send().await;
        let bytes = match response {
            Ok(resp) if resp.ok() => resp.binary().await.ok(),
            _ => None,
        };
        let Some(bytes) = bytes else {
            show_toast("Failed to download report");
            return;
        };
        if save_blob(&bytes, "report.pdf").is_err() {
            show_toast("Failed to download report");
        }
    });
}

/// Wraps the bytes in an object URL and clicks a transient anchor.
fn save_blob(bytes: &[u8], filename: &str) -> Result<(), JsValue> {
    let parts = js_sys::Array::new();
    parts.push(&Uint8Array::from(bytes));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type("application/pdf");
    let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options)?;
    let url = web_sys::Url::create_object_url_with_blob(&blob)?;

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let anchor: HtmlAnchorElement = document.create_element("a")?.unchecked_into();
    anchor.set_href(&url);
    anchor.set_download(filename);
    document
        .body()
        .ok_or_else(|| JsValue::from_str("no body"))?
        .append_child(&anchor)?;
    anchor.click();
    anchor.remove();
    let _ = web_sys::Url::revoke_object_url(&url);
    Ok(())
}
