use std::cell::RefCell;
use std::rc::Rc;
use stressbubble_core::{MutationOutcome, StressData, StressLevel, StressStore, Stressor, StressorPatch};

const D1: &str = "2024-12-07";
const D2: &str = "2024-12-08";

fn stressor(id: &str, name: &str, date: &str) -> Stressor {
    Stressor::with_id(id, name, StressLevel::Three, date, 1_000).with_notes("Test notes")
}

#[test]
fn new_store_is_empty_with_cursor_on_today() {
    let store = StressStore::new();
    assert!(store.stress_data().is_empty());
    assert_eq!(store.current_date(), stressbubble_core::today_key());
    assert!(store.current_stressors().is_empty());
}

#[test]
fn update_and_delete_on_unknown_date_leave_data_unchanged() {
    let store = StressStore::with_date(D1);
    store.add_stressor(D2, stressor("a", "Work", D2));
    let before = store.stress_data();

    let updated = store.update_stressor(D1, "a", &StressorPatch::level(StressLevel::Five));
    let deleted = store.delete_stressor(D1, "a");

    assert_eq!(updated, MutationOutcome::DateNotFound);
    assert_eq!(deleted, MutationOutcome::DateNotFound);
    assert_eq!(store.stress_data(), before);
    assert!(!store.stress_data().contains_key(D1));
}

#[test]
fn add_appends_in_insertion_order() {
    let store = StressStore::with_date(D1);
    let first = stressor("test-1", "Work", D1);
    let second = stressor("test-2", "Second Stressor", D1);

    store.add_stressor(D1, first.clone());
    store.add_stressor(D1, second.clone());

    assert_eq!(store.stress_data()[D1], vec![first, second]);
}

#[test]
fn add_keeps_dates_separate() {
    let store = StressStore::with_date(D1);
    store.add_stressor(D1, stressor("test-1", "Work", D1));
    store.add_stressor(D2, stressor("test-2", "Work", D2));

    let data = store.stress_data();
    assert_eq!(data[D1].len(), 1);
    assert_eq!(data[D2].len(), 1);
}

#[test]
fn update_merges_fields_and_passes_others_through() {
    let store = StressStore::with_date(D1);
    let a = stressor("x", "Work", D1);
    let b = stressor("y", "Family", D1);
    store.add_stressor(D1, a.clone());
    store.add_stressor(D1, b.clone());

    let outcome = store.update_stressor(D1, "x", &StressorPatch::level(StressLevel::Five));

    assert_eq!(outcome, MutationOutcome::Applied { affected: 1 });
    let expected_a = Stressor {
        level: StressLevel::Five,
        ..a
    };
    assert_eq!(store.stress_data()[D1], vec![expected_a, b]);
}

#[test]
fn update_multiple_fields_at_once() {
    let store = StressStore::with_date(D1);
    store.add_stressor(D1, stressor("test-1", "Work", D1));

    let patch = StressorPatch {
        level: Some(StressLevel::Four),
        notes: Some(Some("New notes".to_string())),
        ..StressorPatch::default()
    };
    store.update_stressor(D1, "test-1", &patch);

    let updated = store.stressor(D1, "test-1").unwrap();
    assert_eq!(updated.level, StressLevel::Four);
    assert_eq!(updated.notes.as_deref(), Some("New notes"));
    assert_eq!(updated.name, "Work");
}

#[test]
fn update_unknown_id_is_noop() {
    let store = StressStore::with_date(D1);
    store.add_stressor(D1, stressor("test-1", "Work", D1));
    let before = store.stress_data();

    let outcome = store.update_stressor(D1, "non-existent", &StressorPatch::level(StressLevel::Five));

    assert_eq!(outcome, MutationOutcome::StressorNotFound);
    assert_eq!(store.stress_data(), before);
}

#[test]
fn deleting_last_stressor_removes_date_key() {
    let store = StressStore::with_date(D1);
    store.add_stressor(D1, stressor("test-1", "Work", D1));

    store.delete_stressor(D1, "test-1");

    assert!(!store.stress_data().contains_key(D1));
    assert!(!store.has_data(D1));
}

#[test]
fn delete_leaves_siblings_and_other_dates_untouched() {
    let store = StressStore::with_date(D1);
    let keep = stressor("test-2", "Keep Me", D1);
    let other = stressor("test-3", "Other day", D2);
    store.add_stressor(D1, stressor("test-1", "Work", D1));
    store.add_stressor(D1, keep.clone());
    store.add_stressor(D2, other.clone());

    store.delete_stressor(D1, "test-1");

    let data = store.stress_data();
    assert_eq!(data[D1], vec![keep]);
    assert_eq!(data[D2], vec![other]);
}

#[test]
fn derived_view_tracks_cursor() {
    let store = StressStore::with_date(D1);
    let a = stressor("a", "Work", D1);
    store.add_stressor(D1, a.clone());

    store.set_date(D2);
    assert!(store.current_stressors().is_empty());

    store.set_date(D1);
    assert_eq!(store.current_stressors(), vec![a]);
}

#[test]
fn load_data_replaces_everything_but_cursor() {
    let store = StressStore::with_date(D1);
    store.add_stressor(D1, stressor("a", "Work", D1));
    let b = stressor("b", "Gym", D2);

    let mut replacement = StressData::new();
    replacement.insert(D2.to_string(), vec![b.clone()]);
    store.load_data(replacement.clone());

    let data = store.stress_data();
    assert!(!data.contains_key(D1));
    assert_eq!(data[D2], vec![b]);
    assert_eq!(data, replacement);
    assert_eq!(store.current_date(), D1);
    assert!(store.current_stressors().is_empty());
}

#[test]
fn end_to_end_add_view_delete() {
    let store = StressStore::new();
    store.load_data(StressData::new());

    let work = Stressor::with_id("1", "Work", StressLevel::Three, D1, 1000);
    store.add_stressor(D1, work.clone());
    store.set_date(D1);
    assert_eq!(store.current_stressors(), vec![work]);

    store.delete_stressor(D1, "1");
    assert!(store.current_stressors().is_empty());
    assert!(!store.stress_data().contains_key(D1));
}

#[test]
fn subscribers_fire_once_per_applied_mutation() {
    let store = StressStore::with_date(D1);
    let data_hits = Rc::new(RefCell::new(0));
    let view_log = Rc::new(RefCell::new(Vec::new()));

    let data_counter = Rc::clone(&data_hits);
    let _data_sub = store.subscribe_stress_data(move |_| *data_counter.borrow_mut() += 1);
    let view_sink = Rc::clone(&view_log);
    let _view_sub =
        store.subscribe_current_stressors(move |stressors| view_sink.borrow_mut().push(stressors.len()));

    store.add_stressor(D1, stressor("a", "Work", D1));
    store.add_stressor(D1, stressor("b", "Gym", D1));
    store.delete_stressor(D2, "a");
    store.update_stressor(D1, "missing", &StressorPatch::level(StressLevel::One));
    store.delete_stressor(D1, "a");

    assert_eq!(*data_hits.borrow(), 3);
    assert_eq!(*view_log.borrow(), vec![1, 2, 1]);
}

#[test]
fn data_subscriber_observes_fresh_derived_view() {
    let store = Rc::new(StressStore::with_date(D1));
    let seen = Rc::new(RefCell::new(Vec::new()));

    let reader = Rc::downgrade(&store);
    let sink = Rc::clone(&seen);
    let _sub = store.subscribe_stress_data(move |_| {
        if let Some(store) = reader.upgrade() {
            sink.borrow_mut().push(store.current_stressors().len());
        }
    });

    store.add_stressor(D1, stressor("a", "Work", D1));
    assert_eq!(*seen.borrow(), vec![1]);
}

#[test]
fn cursor_subscription_skips_identical_dates() {
    let store = StressStore::with_date(D1);
    let dates = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&dates);
    let sub = store.subscribe_current_date(move |date| sink.borrow_mut().push(date.clone()));

    store.set_date(D1);
    store.set_date(D2);
    sub.unsubscribe();
    store.set_date(D1);

    assert_eq!(*dates.borrow(), vec![D2.to_string()]);
}

#[test]
fn set_date_accepts_unvalidated_values() {
    let store = StressStore::with_date(D1);
    store.set_date("not a date");
    assert_eq!(store.current_date(), "not a date");
    assert!(store.current_stressors().is_empty());
}

#[test]
fn calendar_queries_report_dates_with_data() {
    let store = StressStore::with_date(D1);
    store.add_stressor("2024-11-30", stressor("a", "Work", "2024-11-30"));
    store.add_stressor(D2, stressor("b", "Work", D2));
    store.add_stressor(D1, stressor("c", "Work", D1));

    assert_eq!(store.dates_with_data(), vec!["2024-11-30", D1, D2]);
    assert_eq!(store.dates_with_data_in_month(2024, 12), vec![D1, D2]);
    assert!(store.has_data(D2));
    assert!(!store.has_data("2024-12-09"));
}

#[test]
fn go_to_today_resets_cursor() {
    let store = StressStore::with_date(D1);
    store.go_to_today();
    assert_eq!(store.current_date(), stressbubble_core::today_key());
}

#[test]
fn load_data_notifies_data_and_view_subscribers_once() {
    let store = StressStore::with_date(D1);
    let data_log = Rc::new(RefCell::new(Vec::new()));
    let view_log = Rc::new(RefCell::new(Vec::new()));

    let data_sink = Rc::clone(&data_log);
    let _data_sub = store.subscribe_stress_data(move |data| data_sink.borrow_mut().push(data.clone()));
    let view_sink = Rc::clone(&view_log);
    let _view_sub =
        store.subscribe_current_stressors(move |stressors| view_sink.borrow_mut().push(stressors.clone()));

    let a = stressor("a", "Work", D1);
    let mut loaded = StressData::new();
    loaded.insert(D1.to_string(), vec![a.clone()]);
    store.load_data(loaded.clone());

    assert_eq!(*data_log.borrow(), vec![loaded]);
    assert_eq!(*view_log.borrow(), vec![vec![a]]);
}

#[test]
fn clear_month_removes_month_in_one_transition() {
    let store = StressStore::with_date(D1);
    store.add_stressor("2024-11-30", stressor("a", "Work", "2024-11-30"));
    store.add_stressor(D1, stressor("b", "Work", D1));
    store.add_stressor(D2, stressor("c", "Work", D2));

    let hits = Rc::new(RefCell::new(0));
    let counter = Rc::clone(&hits);
    let _sub = store.subscribe_stress_data(move |_| *counter.borrow_mut() += 1);

    let outcome = store.clear_month(2024, 12);

    assert_eq!(outcome, MutationOutcome::Applied { affected: 2 });
    assert_eq!(*hits.borrow(), 1);
    assert_eq!(store.dates_with_data(), vec!["2024-11-30"]);
    assert!(store.current_stressors().is_empty());

    assert_eq!(store.clear_month(2024, 12), MutationOutcome::DateNotFound);
    assert_eq!(*hits.borrow(), 1);
}
