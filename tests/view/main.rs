//! Integration tests for the terminal adapter driving a real store.

use watchlist::view::{dispatch, Command, Outcome, EMPTY_STATE};
use watchlist::{CatalogStore, INCOMPLETE_DRAFT_MESSAGE};

fn run(store: &mut CatalogStore, line: &str) -> String {
    let command = Command::parse(line).unwrap();
    match dispatch(store, command) {
        Outcome::Print(text) => text,
        Outcome::Quit => panic!("unexpected quit for {:?}", line),
    }
}

#[test]
fn search_narrows_the_rendered_list() {
    let mut store = CatalogStore::default();

    let out = run(&mut store, "search SPIDER");
    assert!(out.contains("Spider-Man: Across the Spider-Verse"));
    assert!(!out.contains("Arcane"));

    let out = run(&mut store, "search nothing-like-this");
    assert_eq!(out, EMPTY_STATE);

    let out = run(&mut store, "search");
    assert_eq!(out.matches("⭐").count(), 3);
}

#[test]
fn min_rating_input_is_forwarded_for_normalization() {
    let mut store = CatalogStore::default();

    run(&mut store, "min-rating 12");
    assert_eq!(store.filters().min_rating(), 5.0);

    run(&mut store, "min-rating abc");
    assert_eq!(store.filters().min_rating(), 0.0);

    let out = run(&mut store, "min-rating 4.7");
    assert!(out.contains("Dune: Part Two  ⭐ 4.8 / 5"));
    assert!(out.contains("Arcane  ⭐ 4.7 / 5"));
    assert!(!out.contains("Spider-Man"));
}

#[test]
fn incomplete_add_shows_form_error() {
    let mut store = CatalogStore::default();
    run(&mut store, "set title Heat");

    let out = run(&mut store, "add");
    assert!(out.contains("Heat"));
    assert!(out.contains(INCOMPLETE_DRAFT_MESSAGE));
    assert_eq!(store.len(), 3);
}

#[test]
fn full_form_submission_adds_a_card() {
    let mut store = CatalogStore::default();
    run(&mut store, "set title   The Bear  ");
    run(&mut store, "set description Kitchen chaos.");
    run(&mut store, "set posterURL http://bear");
    run(&mut store, "set rating 4");

    let out = run(&mut store, "add");
    assert!(out.starts_with("Added The Bear ("));
    assert!(out.contains("The Bear  ⭐ 4.0 / 5"));
    assert_eq!(store.len(), 4);
    assert_eq!(store.draft().title, "");
    assert_eq!(store.draft().rating, 3.0);

    let draft = run(&mut store, "draft");
    assert!(!draft.contains('!'));
}

#[test]
fn snapshot_prints_json_state() {
    let mut store = CatalogStore::default();
    run(&mut store, "search arcane");

    let out = run(&mut store, "snapshot");
    let json: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(json["movies"].as_array().unwrap().len(), 3);
    assert_eq!(json["visible"].as_array().unwrap().len(), 1);
    assert_eq!(json["filters"]["titleQuery"], "arcane");
    assert!(json["formError"].is_null());
}

#[test]
fn quit_and_help() {
    let mut store = CatalogStore::default();
    assert_eq!(
        dispatch(&mut store, Command::parse("quit").unwrap()),
        Outcome::Quit
    );
    assert!(run(&mut store, "help").contains("min-rating"));
}
