use crate::components::ui::{
    Alert, AlertDescription, Button, ButtonSize, ButtonVariant, Card, CardContent,
    CardDescription, CardHeader, CardTitle, Input, Label, Modal, Spinner,
};
use crate::api::ApiErrorKind;
use crate::editor::{ContentEditor, TitleInput};
use crate::models::Note;
use crate::notes::{children_of, delete_cascading, toggle_expand, ExpandedNodes, NoteStore};
use crate::state::AppContext;
use crate::storage::save_user_to_storage;
use crate::util::display_title;
use icons::{ChevronDown, ChevronRight, FileText, Plus, Search, Trash2};
use leptos::ev;
use leptos::logging::warn;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_dom::helpers::window_event_listener;
use leptos_router::hooks::{use_navigate, use_params_map};

#[component]
pub fn LoginPage() -> impl IntoView {
    let email: RwSignal<String> = RwSignal::new(String::new());
    let password: RwSignal<String> = RwSignal::new(String::new());
    let error: RwSignal<Option<String>> = RwSignal::new(None);
    let loading: RwSignal<bool> = RwSignal::new(false);

    let app_state = expect_context::<AppContext>();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let email_val = email.get();
        let password_val = password.get();
        let mut api_client = app_state.0.api_client.get_untracked();
        let app_state = app_state.clone();

        loading.set(true);
        error.set(None);

        spawn_local(async move {
            match api_client.login(&email_val, &password_val).await {
                Ok(response) => {
                    api_client.set_token(response.token);
                    api_client.save_to_storage();
                    save_user_to_storage(&response.account);
                    app_state.0.api_client.set(api_client);
                    app_state.0.current_user.set(Some(response.account));
                    let _ = window().location().set_href("/");
                }
                Err(e) => {
                    error.set(Some(e.to_string()));
                }
            }
            loading.set(false);
        });
    };

    view! {
        <div class="min-h-screen bg-background">
            <div class="mx-auto flex min-h-screen w-full max-w-sm flex-col justify-center px-4 py-10">
                <div class="mb-6 flex items-center justify-center">
                    <a href="/" class="text-sm font-medium text-foreground">"Nestnote"</a>
                </div>

                <Card>
                    <CardHeader>
                        <CardTitle class="text-lg">"Log in"</CardTitle>
                        <CardDescription class="text-xs">"Use your email and password to continue."</CardDescription>
                    </CardHeader>

                    <CardContent>
                        <form class="flex flex-col gap-3" on:submit=on_submit>
                            <div class="flex flex-col gap-1.5">
                                <Label html_for="email" class="text-xs">"Email"</Label>
                                <Input
                                    id="email"
                                    r#type="email"
                                    placeholder="you@example.com"
                                    bind_value=email
                                    required=true
                                    class="h-8 text-sm"
                                />
                            </div>

                            <div class="flex flex-col gap-1.5">
                                <Label html_for="password" class="text-xs">"Password"</Label>
                                <Input
                                    id="password"
                                    r#type="password"
                                    placeholder="••••••••"
                                    bind_value=password
                                    required=true
                                    class="h-8 text-sm"
                                />
                            </div>

                            <Show when=move || error.get().is_some() fallback=|| ().into_view()>
                                {move || {
                                    error.get().map(|e| {
                                        view! {
                                            <Alert class="border-destructive/30">
                                                <AlertDescription class="text-destructive text-xs">
                                                    {e}
                                                </AlertDescription>
                                            </Alert>
                                        }
                                    })
                                }}
                            </Show>

                            <Button
                                class="w-full"
                                size=ButtonSize::Sm
                                attr:disabled=move || loading.get()
                            >
                                <span class="inline-flex items-center gap-2">
                                    <Show when=move || loading.get() fallback=|| ().into_view()>
                                        <Spinner />
                                    </Show>
                                    {move || if loading.get() { "Signing in..." } else { "Continue" }}
                                </span>
                            </Button>

                            <div class="pt-1 text-xs text-muted-foreground">
                                "No account? "
                                <a class="text-primary underline underline-offset-4" href="/signup">"Sign up"</a>
                            </div>
                        </form>
                    </CardContent>
                </Card>
            </div>
        </div>
    }
}

#[component]
pub fn SignupPage() -> impl IntoView {
    let email: RwSignal<String> = RwSignal::new(String::new());
    let username: RwSignal<String> = RwSignal::new(String::new());
    let password: RwSignal<String> = RwSignal::new(String::new());
    let confirm_password: RwSignal<String> = RwSignal::new(String::new());
    let error: RwSignal<Option<String>> = RwSignal::new(None);
    let loading: RwSignal<bool> = RwSignal::new(false);
    let success: RwSignal<bool> = RwSignal::new(false);

    let app_state = expect_context::<AppContext>();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let email_val = email.get();
        let username_val = username.get();
        let password_val = password.get();
        let confirm_password_val = confirm_password.get();
        let api_client = app_state.0.api_client.get_untracked();

        if password_val != confirm_password_val {
            error.set(Some("Passwords do not match".to_string()));
            return;
        }

        if password_val.len() < 6 {
            error.set(Some("Password must be at least 6 characters".to_string()));
            return;
        }

        loading.set(true);
        error.set(None);

        spawn_local(async move {
            match api_client
                .signup(&email_val, &username_val, &password_val)
                .await
            {
                Ok(_response) => {
                    // Backend returns a token on signup; we keep UX simple and ask user to sign in.
                    success.set(true);
                }
                Err(e) => {
                    error.set(Some(e.to_string()));
                }
            }
            loading.set(false);
        });
    };

    view! {
        <div class="min-h-screen bg-background">
            <div class="mx-auto flex min-h-screen w-full max-w-sm flex-col justify-center px-4 py-10">
                <div class="mb-6 flex items-center justify-center">
                    <a href="/" class="text-sm font-medium text-foreground">"Nestnote"</a>
                </div>

                <Card>
                    <CardHeader>
                        <CardTitle class="text-lg">"Create account"</CardTitle>
                        <CardDescription class="text-xs">"Notes, nested the way you think."</CardDescription>
                    </CardHeader>
                    <CardContent>

                    <Show
                        when=move || !success.get()
                        fallback=move || view! {
                            <Alert>
                                <AlertDescription class="text-xs">
                                    "Account created. You can now "
                                    <a class="text-primary underline underline-offset-4" href="/login">"log in"</a>
                                    "."
                                </AlertDescription>
                            </Alert>
                        }
                    >
                        <form class="flex flex-col gap-3" on:submit=on_submit>
                            <div class="flex flex-col gap-1.5">
                                <Label html_for="username" class="text-xs">"Username"</Label>
                                <Input
                                    id="username"
                                    r#type="text"
                                    placeholder="yourname"
                                    bind_value=username
                                    class="h-8 text-sm"
                                />
                            </div>

                            <div class="flex flex-col gap-1.5">
                                <Label html_for="email" class="text-xs">"Email"</Label>
                                <Input
                                    id="email"
                                    r#type="email"
                                    placeholder="you@example.com"
                                    bind_value=email
                                    required=true
                                    class="h-8 text-sm"
                                />
                            </div>

                            <div class="flex flex-col gap-1.5">
                                <Label html_for="password" class="text-xs">"Password"</Label>
                                <Input
                                    id="password"
                                    r#type="password"
                                    placeholder="••••••••"
                                    bind_value=password
                                    required=true
                                    class="h-8 text-sm"
                                />
                            </div>

                            <div class="flex flex-col gap-1.5">
                                <Label html_for="confirm_password" class="text-xs">"Confirm password"</Label>
                                <Input
                                    id="confirm_password"
                                    r#type="password"
                                    placeholder="••••••••"
                                    bind_value=confirm_password
                                    required=true
                                    class="h-8 text-sm"
                                />
                            </div>

                            <Show when=move || error.get().is_some() fallback=|| ().into_view()>
                                {move || {
                                    error.get().map(|e| {
                                        view! {
                                            <Alert class="border-destructive/30">
                                                <AlertDescription class="text-destructive text-xs">
                                                    {e}
                                                </AlertDescription>
                                            </Alert>
                                        }
                                    })
                                }}
                            </Show>

                            <Button
                                class="w-full"
                                size=ButtonSize::Sm
                                attr:disabled=move || loading.get()
                            >
                                <span class="inline-flex items-center gap-2">
                                    <Show when=move || loading.get() fallback=|| ().into_view()>
                                        <Spinner />
                                    </Show>
                                    {move || if loading.get() { "Creating..." } else { "Continue" }}
                                </span>
                            </Button>

                            <div class="pt-1 text-xs text-muted-foreground">
                                "Already have an account? "
                                <a class="text-primary underline underline-offset-4" href="/login">"Log in"</a>
                            </div>
                        </form>
                    </Show>
                    </CardContent>
                </Card>
            </div>
        </div>
    }
}

/// Authed shell: sidebar (tree + actions) on the left, page content on the
/// right, search modal on top. Owns the session bootstrap: root-notes fetch
/// and the feed subscription, re-done whenever the signed-in user changes.
#[component]
pub fn AppShell(children: Children) -> impl IntoView {
    let app_state = expect_context::<AppContext>();
    let search_open = app_state.0.search_open;

    // Unauthenticated visitors go to the login page.
    {
        let app_state = app_state.clone();
        Effect::new(move |_| {
            if app_state.0.current_user.get().is_none() {
                let _ = window().location().set_href("/login");
            }
        });
    }

    // Session bootstrap, once per signed-in user: wipe whatever a previous
    // user left behind, open that user's feed, fetch the root notes.
    {
        let app_state = app_state.clone();
        Effect::new(move |_| {
            let Some(user) = app_state.0.current_user.get() else {
                return;
            };
            if app_state.0.session_owner.get_untracked().as_deref() == Some(user.id.as_str()) {
                return;
            }
            app_state.0.session_owner.set(Some(user.id.clone()));

            app_state.0.notes.clear();
            app_state.0.expanded.clear();
            app_state.0.start_feed();

            let api = app_state.0.api_client.get_untracked();
            let store = app_state.0.notes;
            let owner = user.id.clone();
            let app_state = app_state.clone();
            spawn_local(async move {
                match api.find_notes(&owner, None).await {
                    Ok(roots) => store.set(roots),
                    Err(e) if e.kind == ApiErrorKind::Unauthorized => {
                        // Stale or revoked token: drop the session entirely.
                        app_state.0.sign_out();
                        let _ = window().location().set_href("/login");
                    }
                    // Any other failure degrades to an empty tree, not an
                    // error state.
                    Err(e) => warn!("root notes fetch failed: {e}"),
                }
            });
        });
    }

    // Cmd/Ctrl+K opens search, Escape closes it.
    let _key_handle = window_event_listener(ev::keydown, move |ev: web_sys::KeyboardEvent| {
        let is_meta = ev.meta_key() || ev.ctrl_key();
        let key = ev.key().to_lowercase();

        if is_meta && key == "k" {
            ev.prevent_default();
            search_open.set(true);
            return;
        }

        if key == "escape" {
            search_open.set(false);
        }
    });

    let on_sign_out = {
        let app_state = app_state.clone();
        move |_| {
            app_state.0.sign_out();
            let _ = window().location().set_href("/login");
        }
    };

    let navigate = StoredValue::new(use_navigate());

    let on_create_root = {
        let app_state = app_state.clone();
        move |_| {
            let Some(user) = app_state.0.current_user.get_untracked() else {
                return;
            };
            let api = app_state.0.api_client.get_untracked();
            let store = app_state.0.notes;
            let tree_error = app_state.0.tree_error;

            spawn_local(async move {
                match api.create_note(&user.id, None, None).await {
                    Ok(new_note) => {
                        let id = new_note.id;
                        store.set(vec![new_note]);
                        navigate.with_value(|nav| {
                            nav(&format!("/notes/{id}"), Default::default());
                        });
                    }
                    Err(e) => tree_error.set(Some(format!("Create failed: {e}"))),
                }
            });
        }
    };

    let user_email = {
        let app_state = app_state.clone();
        move || {
            app_state
                .0
                .current_user
                .get()
                .map(|u| u.email)
                .unwrap_or_default()
        }
    };

    let tree_error = app_state.0.tree_error;

    view! {
        <div class="min-h-screen bg-background text-foreground">
            <div class="flex min-h-screen">
                <aside class="flex w-64 shrink-0 flex-col border-r bg-muted/30">
                    <div class="flex items-center justify-between px-3 py-3">
                        <a href="/" class="text-sm font-medium text-foreground">"Nestnote"</a>
                        <Button
                            variant=ButtonVariant::Ghost
                            size=ButtonSize::Sm
                            class="text-xs text-muted-foreground"
                            on:click=on_sign_out
                        >
                            "Sign out"
                        </Button>
                    </div>

                    <div class="truncate px-3 pb-2 text-xs text-muted-foreground">
                        {user_email}
                    </div>

                    <Button
                        variant=ButtonVariant::Ghost
                        size=ButtonSize::Sm
                        class="mx-1 justify-start text-muted-foreground"
                        on:click=move |_| search_open.set(true)
                    >
                        <Search class="size-4" />
                        "Search"
                        <span class="ml-auto rounded-md border border-border px-1.5 py-0.5 font-mono text-[10px]">"⌘K"</span>
                    </Button>

                    <div class="mt-3 min-h-0 flex-1 overflow-y-auto px-1 pb-4">
                        <NoteTree />

                        <Show when=move || tree_error.get().is_some() fallback=|| ().into_view()>
                            {move || tree_error.get().map(|e| view! {
                                <div class="px-2 pt-2 text-[11px] text-destructive">{e}</div>
                            })}
                        </Show>

                        <Button
                            variant=ButtonVariant::Ghost
                            size=ButtonSize::Sm
                            class="mt-1 w-full justify-start text-muted-foreground"
                            on:click=on_create_root
                        >
                            <Plus class="size-4" />
                            "New note"
                        </Button>
                    </div>
                </aside>

                <main class="min-w-0 flex-1 overflow-y-auto">
                    {children()}
                </main>

                <SearchModal />
            </div>
        </div>
    }
}

/// Sidebar tree: a pure recursive projection of the store. Every re-run
/// re-reads the store, so feed pushes and merges show up with no extra
/// bookkeeping or invalidation step.
#[component]
pub fn NoteTree() -> impl IntoView {
    let app_state = expect_context::<AppContext>();
    let store = app_state.0.notes;
    let expanded = app_state.0.expanded;

    view! {
        {move || render_tree_level(store, expanded, None, 0)}
    }
}

/// One level: direct children of `parent_id` (roots for None), recursing
/// into each expanded node at depth + 1. Returns `AnyView` so the
/// recursion has a concrete type to bottom out on.
fn render_tree_level(
    store: NoteStore,
    expanded: ExpandedNodes,
    parent_id: Option<i64>,
    depth: usize,
) -> AnyView {
    let level = children_of(&store.get_all(), parent_id);

    if depth == 0 && level.is_empty() {
        return view! {
            <div class="px-2 py-1 text-xs text-muted-foreground">"No pages yet"</div>
        }
        .into_any();
    }

    level
        .into_iter()
        .map(|note| {
            let id = note.id;
            let subtree = expanded
                .is_expanded(id)
                .then(|| render_tree_level(store, expanded, Some(id), depth + 1));
            view! {
                <NoteTreeItem note=note depth=depth />
                {subtree}
            }
            .into_any()
        })
        .collect_view()
        .into_any()
}

#[component]
fn NoteTreeItem(note: Note, depth: usize) -> impl IntoView {
    let app_state = expect_context::<AppContext>();
    let store = app_state.0.notes;
    let expanded = app_state.0.expanded;
    let tree_error = app_state.0.tree_error;
    let navigate = StoredValue::new(use_navigate());

    let id = note.id;
    let label = display_title(&note);
    let owner_id = note.owner_id.clone();

    let on_toggle = {
        let app_state = app_state.clone();
        let owner_id = owner_id.clone();
        move |ev: web_sys::MouseEvent| {
            ev.stop_propagation();
            let api = app_state.0.api_client.get_untracked();
            toggle_expand(store, expanded, api, owner_id.clone(), id);
        }
    };

    let on_open = move |_ev: web_sys::MouseEvent| {
        navigate.with_value(|nav| {
            nav(&format!("/notes/{id}"), Default::default());
        });
    };

    let on_create_child = {
        let app_state = app_state.clone();
        let owner_id = owner_id.clone();
        move |ev: web_sys::MouseEvent| {
            ev.stop_propagation();
            let api = app_state.0.api_client.get_untracked();
            let owner_id = owner_id.clone();
            spawn_local(async move {
                match api.create_note(&owner_id, None, Some(id)).await {
                    Ok(new_note) => {
                        let new_id = new_note.id;
                        store.set(vec![new_note]);
                        expanded.on_child_created(id);
                        navigate.with_value(|nav| {
                            nav(&format!("/notes/{new_id}"), Default::default());
                        });
                    }
                    Err(e) => tree_error.set(Some(format!("Create failed: {e}"))),
                }
            });
        }
    };

    let on_delete = {
        let app_state = app_state.clone();
        move |ev: web_sys::MouseEvent| {
            ev.stop_propagation();
            let api = app_state.0.api_client.get_untracked();
            spawn_local(async move {
                // The subtree disappears locally right away; the gateway owns
                // the real cascade.
                if let Err(e) = delete_cascading(store, api, id).await {
                    tree_error.set(Some(format!("Delete failed: {e}")));
                }
            });
        }
    };

    view! {
        <div
            class="group flex min-h-[28px] cursor-pointer items-center gap-1 rounded-md pr-1 text-sm text-muted-foreground hover:bg-accent hover:text-accent-foreground"
            style:padding-left=format!("{}px", depth * 12 + 4)
            role="button"
            on:click=on_open
        >
            <button
                class="flex size-5 shrink-0 items-center justify-center rounded-sm hover:bg-border"
                aria-label="Toggle children"
                on:click=on_toggle
            >
                <Show
                    when=move || expanded.is_expanded(id)
                    fallback=|| view! { <ChevronRight class="size-3.5" /> }
                >
                    <ChevronDown class="size-3.5" />
                </Show>
            </button>

            <FileText class="size-4 shrink-0" />
            <span class="min-w-0 flex-1 truncate">{label}</span>

            <div class="hidden shrink-0 items-center gap-0.5 group-hover:flex">
                <button
                    class="flex size-5 items-center justify-center rounded-sm hover:bg-border"
                    aria-label="Delete note"
                    on:click=on_delete
                >
                    <Trash2 class="size-3.5" />
                </button>
                <button
                    class="flex size-5 items-center justify-center rounded-sm hover:bg-border"
                    aria-label="New child note"
                    on:click=on_create_child
                >
                    <Plus class="size-3.5" />
                </button>
            </div>
        </div>
    }
}

/// Keyword search over the gateway. Results are merged into the store (they
/// are just another fetch source) as well as listed here for selection.
#[component]
fn SearchModal() -> impl IntoView {
    let app_state = expect_context::<AppContext>();
    let open = app_state.0.search_open;
    let keyword: RwSignal<String> = RwSignal::new(String::new());
    let results: RwSignal<Vec<Note>> = RwSignal::new(vec![]);
    let searching: RwSignal<bool> = RwSignal::new(false);
    let navigate = StoredValue::new(use_navigate());

    let current_user = app_state.0.current_user;
    let api_client = app_state.0.api_client;
    let store = app_state.0.notes;

    let on_input = move |_ev: web_sys::Event| {
        let q = keyword.get_untracked();
        if q.trim().is_empty() {
            results.set(vec![]);
            return;
        }
        let Some(user) = current_user.get_untracked() else {
            return;
        };
        let api = api_client.get_untracked();

        searching.set(true);
        spawn_local(async move {
            match api.find_notes_by_keyword(&user.id, &q).await {
                Ok(found) => {
                    store.set(found.clone());
                    results.set(found);
                }
                Err(e) => warn!("search for {:?} failed: {e}", q),
            }
            searching.set(false);
        });
    };

    let on_select = move |id: i64| {
        open.set(false);
        keyword.set(String::new());
        results.set(vec![]);
        navigate.with_value(|nav| {
            nav(&format!("/notes/{id}"), Default::default());
        });
    };

    view! {
        <Modal open=open>
            <div class="flex items-center gap-2 border-b pb-2">
                <Search class="size-4 shrink-0 text-muted-foreground" />
                <Input
                    class="h-8 border-none text-sm shadow-none focus-visible:ring-0"
                    placeholder="Search by keyword"
                    bind_value=keyword
                    autofocus=true
                    on:input=on_input
                />
                <Show when=move || searching.get() fallback=|| ().into_view()>
                    <Spinner class="text-muted-foreground" />
                </Show>
            </div>

            <div class="max-h-72 overflow-y-auto pt-2">
                <Show
                    when=move || !results.get().is_empty()
                    fallback=move || view! {
                        <div class="px-2 py-4 text-center text-sm text-muted-foreground">
                            {move || if keyword.get().trim().is_empty() {
                                "Type to search your notes"
                            } else {
                                "No matching notes"
                            }}
                        </div>
                    }
                >
                    {move || {
                        results
                            .get()
                            .into_iter()
                            .map(|note| {
                                let id = note.id;
                                let label = display_title(&note);
                                view! {
                                    <button
                                        class="flex w-full items-center gap-2 rounded-md px-2 py-1.5 text-left text-sm hover:bg-accent hover:text-accent-foreground"
                                        on:click=move |_| on_select(id)
                                    >
                                        <FileText class="size-4 shrink-0 text-muted-foreground" />
                                        <span class="min-w-0 flex-1 truncate">{label}</span>
                                    </button>
                                }
                            })
                            .collect_view()
                    }}
                </Show>
            </div>
        </Modal>
    }
}

/// Note detail: fetch-one on route change, then edit through the gateway.
#[component]
pub fn NotePage() -> impl IntoView {
    let app_state = expect_context::<AppContext>();
    let params = use_params_map();
    let note_id = Memo::new(move |_| {
        params
            .get()
            .get("id")
            .and_then(|s| s.parse::<i64>().ok())
    });
    let loading: RwSignal<bool> = RwSignal::new(false);

    {
        let app_state = app_state.clone();
        Effect::new(move |_| {
            let Some(id) = note_id.get() else {
                return;
            };
            let Some(user) = app_state.0.current_user.get_untracked() else {
                return;
            };
            let api = app_state.0.api_client.get_untracked();
            let store = app_state.0.notes;

            loading.set(true);
            spawn_local(async move {
                match api.find_one_note(&user.id, id).await {
                    Ok(Some(note)) => store.set(vec![note]),
                    // Absent row: the fallback below renders "not found".
                    Ok(None) => {}
                    Err(e) => warn!("note {id} fetch failed: {e}"),
                }
                loading.set(false);
            });
        });
    }

    let store = app_state.0.notes;

    view! {
        <div class="pb-40 pt-16">
            <div class="mx-auto w-full max-w-3xl px-6">
                {move || match note_id.get() {
                    None => view! {
                        <div class="text-sm text-muted-foreground">"Invalid note id"</div>
                    }
                    .into_any(),
                    Some(id) => view! {
                        <Show
                            when=move || store.get_one(id).is_some()
                            fallback=move || view! {
                                <Show
                                    when=move || loading.get()
                                    fallback=|| view! {
                                        <div class="text-sm text-muted-foreground">"Note not found"</div>
                                    }
                                >
                                    <div class="flex items-center gap-2 text-sm text-muted-foreground">
                                        <Spinner />
                                        "Loading…"
                                    </div>
                                </Show>
                            }
                        >
                            <NoteEditorPane id=id />
                        </Show>
                    }
                    .into_any(),
                }}
            </div>
        </div>
    }
}

/// Mounted once per cached note; the editors keep their own buffers, so a
/// feed update to the same note does not clobber in-progress typing.
#[component]
fn NoteEditorPane(id: i64) -> impl IntoView {
    let app_state = expect_context::<AppContext>();
    let initial = app_state.0.notes.get_one_untracked(id);
    let (title, content) = initial
        .map(|n| (n.title.unwrap_or_default(), n.content.unwrap_or_default()))
        .unwrap_or_default();

    view! {
        <div class="space-y-4">
            <TitleInput note_id=id initial=title />
            <ContentEditor note_id=id initial=content />
        </div>
    }
}

#[component]
pub fn HomePane() -> impl IntoView {
    view! {
        <div class="flex h-full min-h-[60vh] items-center justify-center">
            <div class="space-y-1 text-center">
                <div class="text-lg font-medium">"Nestnote"</div>
                <div class="text-sm text-muted-foreground">
                    "Pick a note from the sidebar, or create a new one."
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn RootPage() -> impl IntoView {
    let app_state = expect_context::<AppContext>();
    let is_authenticated = move || app_state.0.api_client.get().is_authenticated();

    view! {
        <Show when=is_authenticated fallback=move || view! { <LoginPage /> }>
            <AppShell>
                <HomePane />
            </AppShell>
        </Show>
    }
}
