use crate::api::{ApiClient, EnvConfig};
use crate::feed::{self, FeedHandle};
use crate::models::UserProfile;
use crate::notes::{ExpandedNodes, NoteStore};
use crate::storage::load_user_from_storage;
use leptos::__reexports::send_wrapper::SendWrapper;
use leptos::logging::warn;
use leptos::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub api_client: RwSignal<ApiClient>,
    pub current_user: RwSignal<Option<UserProfile>>,

    /// The single shared mutable resource; every consumer reads notes
    /// through it and nowhere else.
    pub notes: NoteStore,

    /// Session-scoped tree flags (no note data).
    pub expanded: ExpandedNodes,

    /// Search modal visibility; global so the keyboard shortcut can reach it.
    pub search_open: RwSignal<bool>,

    /// Last failed sidebar action (create/delete), shown under the tree.
    pub tree_error: RwSignal<Option<String>>,

    /// Which user the session (roots fetch + feed) has been bootstrapped
    /// for. The shell re-mounts on every route change; this keeps the
    /// bootstrap at once per signed-in user.
    pub session_owner: RwSignal<Option<String>>,

    /// Live feed subscription for the signed-in user.
    feed: SendWrapper<Rc<RefCell<Option<FeedHandle>>>>,
}

impl AppState {
    pub fn new() -> Self {
        let stored_client = ApiClient::load_from_storage();
        let stored_user = load_user_from_storage();

        Self {
            api_client: RwSignal::new(stored_client),
            current_user: RwSignal::new(stored_user),
            notes: NoteStore::new(),
            expanded: ExpandedNodes::new(),
            search_open: RwSignal::new(false),
            tree_error: RwSignal::new(None),
            session_owner: RwSignal::new(None),
            feed: SendWrapper::new(Rc::new(RefCell::new(None))),
        }
    }

    /// (Re)subscribe the change feed for the signed-in user. One
    /// subscription per session; switching users resubscribes with the new
    /// owner filter rather than patching the old one.
    pub fn start_feed(&self) {
        self.stop_feed();

        let Some(user) = self.current_user.get_untracked() else {
            return;
        };
        let api = self.api_client.get_untracked();
        let store = self.notes;
        let ws_base = EnvConfig::new().ws_url();

        let subscription = feed::subscribe(
            &ws_base,
            &user.id,
            api.get_auth_token().as_deref(),
            move |change| store.apply(change),
        );

        match subscription {
            Ok(handle) => *self.feed.borrow_mut() = Some(handle),
            Err(e) => warn!("live updates unavailable: {e}"),
        }
    }

    pub fn stop_feed(&self) {
        if let Some(handle) = self.feed.borrow_mut().take() {
            handle.unsubscribe();
        }
    }

    /// Sign-out: tear down the feed, wipe the cache and session flags, drop
    /// credentials. In-flight requests are not cancelled; their late
    /// completions have nothing left to be relevant to.
    pub fn sign_out(&self) {
        self.stop_feed();
        self.notes.clear();
        self.expanded.clear();
        self.session_owner.set(None);
        self.tree_error.set(None);

        let mut api_client = self.api_client.get_untracked();
        api_client.logout();
        self.api_client.set(api_client);
        self.current_user.set(None);
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone)]
pub(crate) struct AppContext(pub AppState);
