use std::sync::{Arc, Mutex};

use serde_json::Value;
use watchlist::{CatalogEventKind, CatalogStore, DraftField, INCOMPLETE_DRAFT_MESSAGE};

use crate::support::fill_draft;

fn collect(store: &mut CatalogStore, kind: CatalogEventKind) -> (String, Arc<Mutex<Vec<String>>>) {
    let received = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&received);
    let id = store.subscribe(kind, move |data| {
        sink.lock().unwrap().push(data);
    });
    (id, received)
}

#[test]
fn movie_added_carries_the_new_record() {
    let mut store = CatalogStore::default();
    let (_, added) = collect(&mut store, CatalogEventKind::MovieAdded);

    fill_draft(&mut store, " Heat ", "LA crime.", "http://heat");
    store.update_draft_field(DraftField::Rating, 4.0);
    let id = store.commit_draft().unwrap();

    // Listeners have run by the time the commit returns.
    let added = added.lock().unwrap();
    assert_eq!(added.len(), 1);

    let payload: Value = serde_json::from_str(&added[0]).unwrap();
    assert_eq!(payload["id"], id.as_str());
    assert_eq!(payload["title"], "Heat");
    assert_eq!(payload["posterURL"], "http://heat");
    assert_eq!(payload["rating"], 4.0);
}

#[test]
fn rejected_commit_notifies_with_message() {
    let mut store = CatalogStore::default();
    let (_, rejected) = collect(&mut store, CatalogEventKind::DraftRejected);
    let (_, added) = collect(&mut store, CatalogEventKind::MovieAdded);

    store.commit_draft().unwrap_err();

    assert_eq!(
        *rejected.lock().unwrap(),
        vec![INCOMPLETE_DRAFT_MESSAGE.to_string()]
    );
    assert!(added.lock().unwrap().is_empty());
}

#[test]
fn filter_changes_carry_normalized_criteria() {
    let mut store = CatalogStore::default();
    let (_, filters) = collect(&mut store, CatalogEventKind::FiltersChanged);

    store.set_title_filter("arc");
    store.set_rating_filter(42.0);

    let filters = filters.lock().unwrap();
    assert_eq!(filters.len(), 2);

    let last: Value = serde_json::from_str(&filters[1]).unwrap();
    assert_eq!(last["titleQuery"], "arc");
    assert_eq!(last["minRating"], 5.0);
}

#[test]
fn draft_reset_is_announced_after_commit() {
    let mut store = CatalogStore::default();
    fill_draft(&mut store, "Heat", "LA crime.", "http://heat");

    let (_, drafts) = collect(&mut store, CatalogEventKind::DraftChanged);
    store.commit_draft().unwrap();

    let drafts = drafts.lock().unwrap();
    assert_eq!(drafts.len(), 1);
    let draft: Value = serde_json::from_str(&drafts[0]).unwrap();
    assert_eq!(draft["title"], "");
    assert_eq!(draft["rating"], 3.0);
}

#[test]
fn unsubscribed_listener_stops_receiving() {
    let mut store = CatalogStore::default();
    let (id, filters) = collect(&mut store, CatalogEventKind::FiltersChanged);

    store.set_title_filter("a");
    assert!(store.unsubscribe(&id));
    store.set_title_filter("b");

    assert_eq!(filters.lock().unwrap().len(), 1);
}
