use super::*;
use kairo_core::timefmt::parse_due;

fn dt(date: &str, time: &str) -> NaiveDateTime {
    parse_due(&format!("{date} {time}")).unwrap()
}

#[test]
fn test_insert_and_list_all() {
    let store = Store::new();
    store
        .insert("Lighting v1", dt("2025-10-12", "14:00"), "c1", Some("ana"))
        .unwrap();
    store
        .insert("Sound pass", dt("2025-10-10", "09:00"), "c1", None)
        .unwrap();

    let all = store.list(Scope::All, dt("2025-10-01", "00:00"));
    assert_eq!(all.len(), 2);
    // Ascending by due, not insertion order.
    assert_eq!(all[0].title, "Sound pass");
    assert_eq!(all[1].title, "Lighting v1");
}

#[test]
fn test_insert_trims_title() {
    let store = Store::new();
    let item = store
        .insert("  Deliver cut  ", dt("2025-11-01", "09:00"), "c1", None)
        .unwrap();
    assert_eq!(item.title, "Deliver cut");
}

#[test]
fn test_insert_rejects_empty_title() {
    let store = Store::new();
    assert!(store.insert("", dt("2025-11-01", "09:00"), "c1", None).is_err());
    assert!(store
        .insert("   \t ", dt("2025-11-01", "09:00"), "c1", None)
        .is_err());
    assert_eq!(store.len(), 0, "rejected inserts must not grow the store");
}

#[test]
fn test_ids_are_unique_and_monotonic() {
    let store = Store::new();
    let mut last = 0;
    for i in 0..100 {
        let item = store
            .insert(&format!("task {i}"), dt("2025-10-12", "14:00"), "c1", None)
            .unwrap();
        assert!(item.id > last, "ids must strictly increase");
        last = item.id;
    }
}

#[test]
fn test_list_today_window() {
    let store = Store::new();
    store
        .insert("before midnight", dt("2025-10-31", "23:59"), "c", None)
        .unwrap();
    store
        .insert("at midnight", dt("2025-11-01", "00:00"), "c", None)
        .unwrap();
    store
        .insert("during day", dt("2025-11-01", "14:00"), "c", None)
        .unwrap();
    store
        .insert("next midnight", dt("2025-11-02", "00:00"), "c", None)
        .unwrap();

    // asOf anywhere within the day selects the same window.
    let today = store.list(Scope::Today, dt("2025-11-01", "17:45"));
    let titles: Vec<&str> = today.iter().map(|it| it.title.as_str()).collect();
    assert_eq!(titles, vec!["at midnight", "during day"]);
}

#[test]
fn test_list_week_window() {
    let store = Store::new();
    store
        .insert("day one", dt("2025-11-01", "08:00"), "c", None)
        .unwrap();
    store
        .insert("day six", dt("2025-11-06", "22:00"), "c", None)
        .unwrap();
    store
        .insert("day seven boundary", dt("2025-11-08", "00:00"), "c", None)
        .unwrap();

    let week = store.list(Scope::Week, dt("2025-11-01", "12:00"));
    let titles: Vec<&str> = week.iter().map(|it| it.title.as_str()).collect();
    assert_eq!(titles, vec!["day one", "day six"]);
}

#[test]
fn test_overdue_items_stay_stored() {
    let store = Store::new();
    store
        .insert("missed deadline", dt("2025-01-01", "09:00"), "c", None)
        .unwrap();

    // Filtered out of the recomputed window, never removed.
    assert!(store.list(Scope::Today, dt("2025-06-01", "10:00")).is_empty());
    assert_eq!(store.list(Scope::All, dt("2025-06-01", "10:00")).len(), 1);
}

#[test]
fn test_list_ties_keep_insertion_order() {
    let store = Store::new();
    let due = dt("2025-11-01", "09:00");
    store.insert("first in", due, "c", None).unwrap();
    store.insert("second in", due, "c", None).unwrap();
    store.insert("third in", due, "c", None).unwrap();

    let all = store.list(Scope::All, dt("2025-11-01", "00:00"));
    let titles: Vec<&str> = all.iter().map(|it| it.title.as_str()).collect();
    assert_eq!(titles, vec!["first in", "second in", "third in"]);
}

#[test]
fn test_list_empty_store() {
    let store = Store::new();
    assert!(store.list(Scope::Today, dt("2025-11-01", "00:00")).is_empty());
    assert!(store.list(Scope::All, dt("2025-11-01", "00:00")).is_empty());
}

#[test]
fn test_clones_share_state() {
    let store = Store::new();
    let handle = store.clone();
    handle
        .insert("shared", dt("2025-11-01", "09:00"), "c", None)
        .unwrap();
    assert_eq!(store.len(), 1);
}

#[test]
fn test_scope_parse() {
    assert_eq!(Scope::parse("today"), Some(Scope::Today));
    assert_eq!(Scope::parse("WEEK"), Some(Scope::Week));
    assert_eq!(Scope::parse(" all "), Some(Scope::All));
    assert_eq!(Scope::parse("yesterday"), None);
    assert_eq!(Scope::parse(""), None);
}

#[test]
fn test_todo_backlog() {
    let store = Store::new();
    store.add_todo("buy tape").unwrap();
    store.add_todo("label reels").unwrap();
    assert!(store.add_todo("  ").is_err());

    let todos = store.todos();
    assert_eq!(todos.len(), 2);
    assert_eq!(todos[0].text, "buy tape");
    assert_eq!(todos[1].text, "label reels");
    // Backlog does not appear in the agenda.
    assert!(store.list(Scope::All, dt("2025-11-01", "00:00")).is_empty());
}
