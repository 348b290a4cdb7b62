//! Tests for field search: exact ISBN match, case-insensitive substring
//! matching, and the permissive unknown-field dispatch.

use bibliotree::inventory::{BookInventory, BookRecord, SearchField};
use rstest::rstest;

fn sample_inventory() -> BookInventory {
    let mut inventory = BookInventory::new();
    inventory
        .add_book(BookRecord::new(
            "9780553106633",
            "Wimpy kid",
            "Jeff kinney",
            "Entertainment",
            450.0,
            50,
        ))
        .unwrap();
    inventory
        .add_book(BookRecord::new(
            "9780061120084",
            "Alif",
            "A.Abdaal",
            "Poetry",
            600.0,
            100,
        ))
        .unwrap();
    inventory
        .add_book(BookRecord::new(
            "9781400079179",
            "Art of defending",
            "Alex Ferguson",
            "Fiction",
            1200.0,
            100,
        ))
        .unwrap();
    inventory
}

// =============================================================================
// ISBN Search Tests
// =============================================================================

#[rstest]
fn test_isbn_search_matches_exactly() {
    let inventory = sample_inventory();
    let results = inventory.search("isbn", "9780061120084");

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].title, "Alif");
}

#[rstest]
fn test_isbn_search_does_not_match_substrings() {
    let inventory = sample_inventory();
    assert!(inventory.search("isbn", "9780061").is_empty());
}

// =============================================================================
// Substring Search Tests
// =============================================================================

#[rstest]
#[case("abdaal")]
#[case("ABDAAL")]
#[case("Abdaal")]
fn test_author_search_is_case_insensitive(#[case] value: &str) {
    let inventory = sample_inventory();
    let results = inventory.search("author", value);

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].author, "A.Abdaal");
}

#[rstest]
fn test_title_search_matches_substring() {
    let inventory = sample_inventory();
    let results = inventory.search("title", "art");

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].title, "Art of defending");
}

#[rstest]
fn test_genre_search_can_match_multiple_records() {
    let mut inventory = sample_inventory();
    inventory
        .add_book(BookRecord::new("001", "Other", "Other", "Poetry", 1.0, 1))
        .unwrap();

    let results = inventory.search("genre", "poetry");
    assert_eq!(results.len(), 2);
}

#[rstest]
fn test_search_without_match_returns_empty() {
    let inventory = sample_inventory();
    assert!(inventory.search("author", "George").is_empty());
}

// =============================================================================
// Permissive Dispatch Tests
// =============================================================================

#[rstest]
#[case("publisher")]
#[case("price")]
#[case("")]
#[case("ISBN")]
fn test_unknown_field_name_yields_empty_result(#[case] field_name: &str) {
    let inventory = sample_inventory();
    // Unknown fields are silently mapped to no results, never an error.
    assert!(inventory.search(field_name, "anything").is_empty());
}

#[rstest]
fn test_typed_search_matches_string_dispatch() {
    let inventory = sample_inventory();

    let by_name = inventory.search("author", "abdaal");
    let typed = inventory.search_by(SearchField::Author, "abdaal");
    assert_eq!(by_name, typed);
}

#[rstest]
fn test_search_on_empty_inventory() {
    let inventory = BookInventory::new();
    assert!(inventory.search("title", "anything").is_empty());
}
