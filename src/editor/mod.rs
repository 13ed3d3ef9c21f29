use crate::components::ui::{Input, Textarea};
use crate::state::AppContext;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

const AUTOSAVE_MS: i32 = 800;

/// Debounce helper: schedule `flush` after AUTOSAVE_MS, replacing any timer
/// already pending in `slot`.
fn schedule_debounced(slot: RwSignal<Option<i32>>, flush: impl FnOnce() + 'static) {
    let Some(win) = web_sys::window() else {
        return;
    };

    if let Some(tid) = slot.get_untracked() {
        let _ = win.clear_timeout_with_handle(tid);
    }

    let cb = wasm_bindgen::closure::Closure::once_into_js(flush);
    let tid = win
        .set_timeout_with_callback_and_timeout_and_arguments_0(
            cb.as_ref().unchecked_ref(),
            AUTOSAVE_MS,
        )
        .unwrap_or(0);
    slot.set(Some(tid));
}

/// Push one field through the gateway and re-merge the returned full
/// record. A vanished target (NotFound) is a no-op; a real failure is
/// surfaced to the editor's status line and the cache is left untouched.
fn save_note_field(
    app_state: AppContext,
    note_id: i64,
    title: Option<String>,
    content: Option<String>,
    error: RwSignal<Option<String>>,
) {
    let api = app_state.0.api_client.get_untracked();
    let store = app_state.0.notes;

    spawn_local(async move {
        match api.update_note(note_id, title, content).await {
            Ok(Some(updated)) => {
                error.set(None);
                store.set(vec![updated]);
            }
            Ok(None) => {}
            Err(e) => error.set(Some(e.to_string())),
        }
    });
}

#[component]
pub fn TitleInput(note_id: i64, #[prop(into)] initial: String) -> impl IntoView {
    let app_state = expect_context::<AppContext>();
    let value = RwSignal::new(initial);
    let save_error: RwSignal<Option<String>> = RwSignal::new(None);
    let timer: RwSignal<Option<i32>> = RwSignal::new(None);

    let on_input = move |_ev: web_sys::Event| {
        let app_state = app_state.clone();
        schedule_debounced(timer, move || {
            let title = value.get_untracked();
            save_note_field(app_state, note_id, Some(title), None, save_error);
        });
    };

    view! {
        <div class="space-y-1">
            <Input
                class="h-12 border-none px-0 text-2xl font-semibold shadow-none focus-visible:ring-0"
                placeholder="Untitled"
                bind_value=value
                on:input=on_input
            />
            <Show when=move || save_error.get().is_some() fallback=|| ().into_view()>
                {move || save_error.get().map(|e| view! {
                    <div class="text-xs text-destructive">{format!("Title not saved: {e}")}</div>
                })}
            </Show>
        </div>
    }
}

/// Minimal document surface: the serialized content blob, edited as-is.
/// The cache (and this component) treat it as opaque text.
#[component]
pub fn ContentEditor(note_id: i64, #[prop(into)] initial: String) -> impl IntoView {
    let app_state = expect_context::<AppContext>();
    let value = RwSignal::new(initial);
    let save_error: RwSignal<Option<String>> = RwSignal::new(None);
    let timer: RwSignal<Option<i32>> = RwSignal::new(None);

    let on_input = move |_ev: web_sys::Event| {
        let app_state = app_state.clone();
        schedule_debounced(timer, move || {
            let content = value.get_untracked();
            save_note_field(app_state, note_id, None, Some(content), save_error);
        });
    };

    view! {
        <div class="space-y-1">
            <Textarea
                class="min-h-[50vh] border-none px-0 shadow-none focus-visible:ring-0"
                placeholder="Start writing…"
                rows=18
                bind_value=value
                on:input=on_input
            />
            <Show when=move || save_error.get().is_some() fallback=|| ().into_view()>
                {move || save_error.get().map(|e| view! {
                    <div class="text-xs text-destructive">{format!("Changes not saved: {e}")}</div>
                })}
            </Show>
        </div>
    }
}
