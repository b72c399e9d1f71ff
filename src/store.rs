//! Global Application State Store
//!
//! Uses Leptos reactive_stores; the catalog is the single owned state.

use crate::catalog::{Catalog, CatalogError};
use crate::models::{CaseDraft, DeleteTarget, Stats, TestCase, TestGroup};
use crate::seed;
use leptos::prelude::*;
use reactive_stores::Store;

/// Global application state
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// The session's case catalog
    pub catalog: Catalog,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            catalog: seed::initial_catalog(),
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Snapshot the group list for rendering (reactive read)
pub fn store_groups(store: &AppStore) -> Vec<TestGroup> {
    store.catalog().read().groups().to_vec()
}

/// Cases of one group, for keyed per-panel rendering (reactive read)
///
/// Empty when the group no longer exists.
pub fn store_group_cases(store: &AppStore, group_id: &str) -> Vec<TestCase> {
    store
        .catalog()
        .read()
        .group(group_id)
        .map(|g| g.cases.clone())
        .unwrap_or_default()
}

/// Derived counters (reactive read)
pub fn store_stats(store: &AppStore) -> Stats {
    store.catalog().read().stats()
}

/// Append a new empty group
pub fn store_add_group(store: &AppStore) {
    store.catalog().write().add_group();
}

/// Create a case from a draft; `dest` of `None` targets the first group
pub fn store_add_case(
    store: &AppStore,
    dest: Option<&str>,
    draft: CaseDraft,
) -> Result<String, CatalogError> {
    store.catalog().write().add_case(dest, draft)
}

/// Rename a group
pub fn store_rename_group(store: &AppStore, group_id: &str, title: &str) {
    store.catalog().write().rename_group(group_id, title);
}

/// Move a case between groups (silent no-op on bad references)
pub fn store_move_case(store: &AppStore, case_id: &str, from_id: &str, to_id: &str) {
    store.catalog().write().move_case(case_id, from_id, to_id);
}

/// Dispatch a confirmed deletion
pub fn store_apply_delete(store: &AppStore, target: &DeleteTarget) {
    store.catalog().write().apply_delete(target);
}
