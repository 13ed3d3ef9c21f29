pub(crate) mod delete;
pub(crate) mod store;
pub(crate) mod tree;

pub(crate) use delete::delete_cascading;
pub(crate) use store::NoteStore;
pub(crate) use tree::{children_of, toggle_expand, ExpandedNodes};
