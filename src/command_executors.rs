use crate::components::navigation;
use crate::messages::{Command, Message, Mutation};
use crate::models::{self, EntityKind};
use crate::network::{ApiClient, ApiError};
use crate::state::{dispatch_global_message, APP_STATE};
use crate::{csv_export, debug_log, pages, toast};

/// Run a side effect requested by a reducer. Called only after the state
/// borrow is released, so async callbacks may dispatch freely.
pub fn execute(cmd: Command) {
    match cmd {
        Command::FetchRecords(kind) => {
            wasm_bindgen_futures::spawn_local(async move {
                match ApiClient::list(kind).await {
                    Ok(records) => dispatch_global_message(Message::RecordsLoaded { kind, records }),
                    Err(e) => report_fetch_error(kind, &e),
                }
            });
        }
        Command::FetchLookup(kind) => {
            wasm_bindgen_futures::spawn_local(async move {
                let options = ApiClient::list(kind)
                    .await
                    .and_then(|value| models::lookup_options(kind, value).map_err(|e| ApiError::Decode(e.to_string())));
                match options {
                    Ok(options) => dispatch_global_message(Message::LookupLoaded { kind, options }),
                    Err(e) => report_fetch_error(kind, &e),
                }
            });
        }
        Command::CreateRecord { kind, payload } => {
            wasm_bindgen_futures::spawn_local(async move {
                match ApiClient::create(kind, &payload).await {
                    Ok(record) => dispatch_global_message(Message::RecordCreated { kind, record }),
                    // Created, but the echo is unusable. The page closes its
                    // form and reloads the list when the record fails to decode.
                    Err(ApiError::Decode(e)) => {
                        web_sys::console::warn_1(&format!("Unreadable create response: {}", e).into());
                        dispatch_global_message(Message::RecordCreated {
                            kind,
                            record: serde_json::Value::Null,
                        });
                    }
                    Err(e) => mutation_failed(kind, Mutation::Create, &e),
                }
            });
        }
        Command::UpdateRecord { kind, id, payload } => {
            wasm_bindgen_futures::spawn_local(async move {
                match ApiClient::update(kind, id, &payload).await {
                    Ok(()) => dispatch_global_message(Message::RecordUpdated {
                        kind,
                        id,
                        patch: payload,
                    }),
                    Err(e) => mutation_failed(kind, Mutation::Update, &e),
                }
            });
        }
        Command::DeleteRecord { kind, id } => {
            wasm_bindgen_futures::spawn_local(async move {
                match ApiClient::delete(kind, id).await {
                    Ok(()) => dispatch_global_message(Message::RecordDeleted { kind, id }),
                    Err(e) => mutation_failed(kind, Mutation::Delete, &e),
                }
            });
        }
        Command::Render(scope) => {
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };
            let view = APP_STATE.with(|state| state.borrow().page.view());
            if let Err(e) = pages::list::render_page(&document, &view, scope) {
                web_sys::console::error_1(&format!("Failed to render {}: {:?}", view.title, e).into());
            }
        }
        Command::HighlightNav(kind) => {
            if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                if let Err(e) = navigation::highlight(&document, kind) {
                    web_sys::console::warn_1(&format!("Failed to highlight navigation: {:?}", e).into());
                }
            }
        }
        Command::Alert(msg) => toast::alert(&msg),
        Command::Notify(msg) => toast::success(&msg),
        Command::ReportError(msg) => web_sys::console::error_1(&msg.into()),
        Command::DownloadCsv { filename, content } => {
            if let Err(e) = csv_export::download(&filename, &content) {
                web_sys::console::error_1(&format!("Failed to export {}: {:?}", filename, e).into());
            }
        }
    }
}

fn report_fetch_error(kind: EntityKind, err: &ApiError) {
    web_sys::console::error_1(&format!("Error fetching {}: {}", kind.path(), err).into());
}

/// Rejected writes must be acknowledged; transport failures only get logged.
fn mutation_failed(kind: EntityKind, action: Mutation, err: &ApiError) {
    debug_log!("{:?} {} failed: {}", action, kind.path(), err);
    match err {
        ApiError::Status { .. } => dispatch_global_message(Message::MutationFailed { kind, action }),
        _ => web_sys::console::error_1(&format!("Error saving {}: {}", kind.path(), err).into()),
    }
}
