//! Keyed interaction state for mounted tables.
//!
//! Elements are rebuilt on every frame, so each table's [`TableViewState`]
//! lives here under its component id. The first lookup mounts it with
//! defaults; [`remove_view_state`] unmounts it.

use std::{
    collections::HashMap,
    sync::{LazyLock, Mutex, MutexGuard},
};

use super::table_state::TableViewState;

static VIEW_STATE: LazyLock<Mutex<HashMap<String, TableViewState>>> =
    LazyLock::new(|| Mutex::new(HashMap::new()));

fn lock() -> MutexGuard<'static, HashMap<String, TableViewState>> {
    match VIEW_STATE.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}

/// Snapshot of the state for `id`, mounting it with `default_page_size` when
/// absent.
pub fn view_state(id: &str, default_page_size: usize) -> TableViewState {
    lock()
        .entry(id.to_string())
        .or_insert_with(|| TableViewState::with_page_size(default_page_size))
        .clone()
}

/// Runs a handler against the state for `id`, mounting it first if needed.
pub fn update_view_state<R>(
    id: &str,
    default_page_size: usize,
    update: impl FnOnce(&mut TableViewState) -> R,
) -> R {
    let mut states = lock();
    let state = states
        .entry(id.to_string())
        .or_insert_with(|| TableViewState::with_page_size(default_page_size));
    update(state)
}

pub fn is_mounted(id: &str) -> bool {
    lock().contains_key(id)
}

/// Drops the state for `id`. Returns whether anything was mounted.
pub fn remove_view_state(id: &str) -> bool {
    let removed = lock().remove(id).is_some();
    if removed {
        log::debug!("table {id} unmounted");
    }
    removed
}

pub fn clear_all() {
    lock().clear();
}
