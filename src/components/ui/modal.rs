use leptos::prelude::*;
use tw_merge::tw_merge;

/// Signal-driven overlay. Clicking the backdrop closes it; the Escape key
/// is handled by the layout's window listener so it works while an input
/// inside the modal has focus.
#[component]
pub fn Modal(
    open: RwSignal<bool>,
    #[prop(optional, into)] class: String,
    children: ChildrenFn,
) -> impl IntoView {
    let merged_class = tw_merge!(
        "fixed top-[18%] left-[50%] z-50 w-full max-w-lg translate-x-[-50%] rounded-xl border bg-background p-4 shadow-lg",
        class
    );

    view! {
        <Show when=move || open.get() fallback=|| ().into_view()>
            <div
                data-name="ModalBackdrop"
                class="fixed inset-0 z-40 bg-black/50"
                on:click=move |_| open.set(false)
            />
            <div data-name="ModalContent" class=merged_class.clone()>
                {children()}
            </div>
        </Show>
    }
}
