use crate::models::NoteChange;
use leptos::logging::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{ErrorEvent, MessageEvent, WebSocket};

/// The feed could not be established. The app keeps working without live
/// updates; there is no automatic retry.
#[derive(Clone, Debug)]
pub(crate) struct FeedError {
    pub message: String,
}

impl std::fmt::Display for FeedError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// Live subscription for one signed-in user. Keeps the wasm callbacks
/// alive for exactly as long as the subscription; `unsubscribe` detaches
/// them before they drop, so a stale user's events can never reach the
/// next session's cache.
pub(crate) struct FeedHandle {
    socket: WebSocket,
    _on_message: Closure<dyn FnMut(MessageEvent)>,
    _on_error: Closure<dyn FnMut(ErrorEvent)>,
}

impl FeedHandle {
    pub fn unsubscribe(self) {
        self.socket.set_onmessage(None);
        self.socket.set_onerror(None);
        let _ = self.socket.close();
    }
}

/// Open the per-user change feed: every row-level change to notes owned by
/// `owner_id`, as tagged `{kind, record}` text frames.
///
/// Frames are validated at this boundary; anything malformed is dropped
/// with a warning and never reaches the store. Changing users means
/// unsubscribing and calling this again with the new filter.
pub(crate) fn subscribe(
    ws_base: &str,
    owner_id: &str,
    token: Option<&str>,
    handler: impl Fn(NoteChange) + 'static,
) -> Result<FeedHandle, FeedError> {
    let mut url = format!(
        "{}/feed?owner_id={}",
        ws_base,
        urlencoding::encode(owner_id)
    );
    if let Some(token) = token {
        url.push_str(&format!("&token={}", urlencoding::encode(token)));
    }

    let socket = WebSocket::new(&url).map_err(|e| FeedError {
        message: e
            .as_string()
            .unwrap_or_else(|| "failed to open feed socket".to_string()),
    })?;

    let on_message = Closure::wrap(Box::new(move |ev: MessageEvent| {
        let Some(text) = ev.data().as_string() else {
            return;
        };
        match serde_json::from_str::<NoteChange>(&text) {
            Ok(change) => handler(change),
            Err(e) => warn!("feed: dropping malformed event: {e}"),
        }
    }) as Box<dyn FnMut(MessageEvent)>);
    socket.set_onmessage(Some(on_message.as_ref().unchecked_ref()));

    let on_error = Closure::wrap(Box::new(move |_ev: ErrorEvent| {
        warn!("feed: socket error; live updates may be interrupted");
    }) as Box<dyn FnMut(ErrorEvent)>);
    socket.set_onerror(Some(on_error.as_ref().unchecked_ref()));

    Ok(FeedHandle {
        socket,
        _on_message: on_message,
        _on_error: on_error,
    })
}
