use gozlemevi_store::{
    Clock, FileStorage, MemoryStorage, Persisted, SlotStorage, Wish, WishBook, WishDraft,
};
use gozlemevi_tests::{clock_on, wish};
use pretty_assertions::assert_eq;
use tempfile::tempdir;

#[test]
fn submitted_wish_survives_reload() {
    let dir = tempdir().unwrap();
    let storage = FileStorage::open(dir.path()).unwrap();
    let clock = clock_on(2026, 10, 18);

    let mut book = WishBook::open_with_key(storage.clone(), "wishes");
    assert!(book.is_empty());
    book.submit(WishDraft::new("Ela", "Huzur dilerim"), &clock)
        .unwrap();
    assert_eq!(book.len(), 1);
    let newest = book.wishes()[0].clone();
    assert_eq!(newest.name, "Ela");
    assert_eq!(newest.date, clock.today());

    let reloaded = WishBook::open_with_key(storage, "wishes");
    assert_eq!(reloaded.len(), 1);
    assert_eq!(reloaded.wishes()[0], newest);
}

#[test]
fn whitespace_slot_loads_empty_and_is_cleared() {
    let storage = MemoryStorage::new();
    storage.write("wishes", "   ").unwrap();
    let book = WishBook::open_with_key(storage.clone(), "wishes");
    assert!(book.wishes().is_empty());
    assert_eq!(storage.read("wishes").unwrap(), None);
}

#[test]
fn corrupted_file_is_removed_from_disk() {
    let dir = tempdir().unwrap();
    let storage = FileStorage::open(dir.path()).unwrap();
    storage.write("wishes", r#"[{"id":"1","name":"#).unwrap();
    let book = WishBook::open_with_key(storage.clone(), "wishes");
    assert!(book.is_empty());
    assert!(!storage.slot_path("wishes").unwrap().exists());
}

#[test]
fn records_round_trip_in_order_through_a_fresh_store() {
    let storage = MemoryStorage::new();
    let mut records = vec![
        wish("3", "Deniz", "18.10.2026"),
        wish("2", "Can", "17.10.2026"),
        wish("1", "Ayşe", "17.10.2026"),
    ];
    records[1].image = Some("data:image/png;base64,iVBORw==".into());
    records[2].timestamp = 1_792_000_000_000;

    let mut store = Persisted::load(storage.clone(), "wishes", Vec::<Wish>::new());
    store.set(records.clone());
    let fresh = Persisted::load(storage, "wishes", Vec::<Wish>::new());
    assert_eq!(fresh.get(), &records);
}

#[test]
fn archive_groups_five_wishes_into_two_days() {
    let mut book = WishBook::open(MemoryStorage::new());
    for (id, date) in [
        ("1", "16.10.2026"),
        ("2", "16.10.2026"),
        ("3", "18.10.2026"),
        ("4", "16.10.2026"),
        ("5", "18.10.2026"),
    ] {
        book.append(wish(id, "Misafir", date));
    }

    let groups = book.archive();
    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].date, "18.10.2026");
    assert_eq!(groups[1].date, "16.10.2026");
    let ids = |index: usize| -> Vec<&str> {
        groups[index].wishes.iter().map(|w| w.id.as_str()).collect()
    };
    assert_eq!(ids(0), vec!["5", "3"]);
    assert_eq!(ids(1), vec!["4", "2", "1"]);
}

#[test]
fn failed_write_keeps_session_state_but_not_disk_state() {
    let storage = MemoryStorage::with_quota(400);
    let clock = clock_on(2026, 10, 18);
    let mut book = WishBook::open(storage.clone());
    book.submit(WishDraft::new("Ela", "Huzur dilerim"), &clock)
        .unwrap();
    assert!(book.last_write_error().is_none());

    let big = WishDraft::new("Can", "x".repeat(300));
    book.submit(big, &clock).unwrap();
    assert_eq!(book.len(), 2);
    assert!(book.last_write_error().is_some());

    let reopened = WishBook::open(storage);
    assert_eq!(reopened.len(), 1);
    assert_eq!(reopened.wishes()[0].name, "Ela");
}

#[test]
fn stats_and_today_follow_the_collection() {
    let mut book = WishBook::open(MemoryStorage::new());
    let today = clock_on(2026, 10, 18);
    let earlier = clock_on(2026, 10, 1);
    book.submit(WishDraft::new("A", "bir"), &earlier).unwrap();
    book.submit(
        WishDraft::new("B", "iki").with_image("data:image/png;base64,AA=="),
        &today,
    )
    .unwrap();
    book.submit(WishDraft::new("C", "üç"), &today).unwrap();

    let names: Vec<&str> = book.today(&today).iter().map(|w| w.name.as_str()).collect();
    assert_eq!(names, vec!["C", "B"]);
    let stats = book.stats();
    assert_eq!(stats.total, 3);
    assert_eq!(stats.with_image, 1);
    assert_eq!(stats.active_days, 2);
}
