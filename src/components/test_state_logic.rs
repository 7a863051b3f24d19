use std::sync::{LazyLock, Mutex, MutexGuard};

use crate::record::Record;

use super::{control, table_props::TableProps, table_view::TableProjection};

static STATE_TEST_LOCK: LazyLock<Mutex<()>> = LazyLock::new(|| Mutex::new(()));

struct StateTestGuard {
    _lock: MutexGuard<'static, ()>,
}

fn guard() -> StateTestGuard {
    let lock = match STATE_TEST_LOCK.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    };
    control::clear_all();
    StateTestGuard { _lock: lock }
}

impl Drop for StateTestGuard {
    fn drop(&mut self) {
        control::clear_all();
    }
}

fn people_props() -> TableProps<()> {
    TableProps::new().fields(["name", "age"]).records(
        (1..=12).map(|index| Record::new().set("name", format!("user-{index:02}")).set("age", index)),
    )
}

fn render(id: &str, props: &TableProps<()>) -> TableProjection<()> {
    let state = control::view_state(id, props.initial_page_size());
    TableProjection::build(&state, props)
}

#[test]
fn first_lookup_mounts_default_state() {
    let _guard = guard();

    assert!(!control::is_mounted("table-mount"));
    let state = control::view_state("table-mount", 7);
    assert!(control::is_mounted("table-mount"));
    assert_eq!(state.page(), 1);
    assert_eq!(state.page_size(), 7);
    assert_eq!(state.page_size_draft(), "7");
    assert_eq!(state.search_term(), "");
    assert!(state.sort().is_none());
}

#[test]
fn default_page_size_only_applies_on_mount() {
    let _guard = guard();

    control::update_view_state("table-size", 5, |state| state.enter_page_size("9"))
        .unwrap();
    assert_eq!(control::view_state("table-size", 3).page_size(), 9);
}

#[test]
fn handlers_persist_between_renders() {
    let _guard = guard();
    let props = people_props();

    let first = render("table-nav", &props);
    assert_eq!(first.page_count, 3);

    control::update_view_state("table-nav", 5, |state| {
        state.go_to_next_page(first.page_count)
    });
    let second = render("table-nav", &props);
    assert_eq!(second.page, 2);
    assert_eq!(second.body.rows()[0].cells[0].text, "user-06");

    control::update_view_state("table-nav", 5, |state| state.set_search_term("user-1"));
    let third = render("table-nav", &props);
    assert_eq!(third.page, 1);
    assert_eq!(third.total_rows, 3);
    assert_eq!(third.page_count, 1);
}

#[test]
fn tables_do_not_share_state() {
    let _guard = guard();

    control::update_view_state("table-a", 5, |state| {
        state.toggle_sort("age");
    });
    assert!(control::view_state("table-a", 5).sort().is_some());
    assert!(control::view_state("table-b", 5).sort().is_none());
}

#[test]
fn unmount_discards_state() {
    let _guard = guard();

    control::update_view_state("table-unmount", 5, |state| state.set_search_term("x"));
    assert!(control::remove_view_state("table-unmount"));
    assert!(!control::remove_view_state("table-unmount"));
    assert_eq!(control::view_state("table-unmount", 5).search_term(), "");
}

#[test]
fn shrinking_records_leaves_a_stale_page_empty() {
    let _guard = guard();
    let props = people_props();

    let first = render("table-stale", &props);
    control::update_view_state("table-stale", 5, |state| {
        state.go_to_page(3, first.page_count)
    });

    let fewer: TableProps<()> = TableProps::new()
        .fields(["name", "age"])
        .records(props.source_records().iter().take(4).cloned());
    let stale = render("table-stale", &fewer);
    assert_eq!(stale.page, 3);
    assert_eq!(stale.page_count, 1);
    assert!(stale.body.rows().is_empty());

    control::update_view_state("table-stale", 5, |state| state.go_to_previous_page());
    assert_eq!(render("table-stale", &fewer).page, 2);
}
