//! Tests for the stock operations: order placement with availability
//! checks, unconditional restocking, and their outcome values.

use bibliotree::inventory::{BookInventory, BookRecord, OrderOutcome, RestockOutcome};
use rstest::rstest;

fn inventory_with_stock(quantity: u32) -> BookInventory {
    let mut inventory = BookInventory::new();
    inventory
        .add_book(BookRecord::new(
            "9781400079179",
            "Art of defending",
            "Alex Ferguson",
            "Fiction",
            1200.0,
            quantity,
        ))
        .unwrap();
    inventory
}

// =============================================================================
// Order Tests
// =============================================================================

#[rstest]
fn test_order_decrements_stock() {
    let mut inventory = inventory_with_stock(100);

    let outcome = inventory.order_book("9781400079179", 20);
    assert_eq!(
        outcome,
        OrderOutcome::Placed {
            title: "Art of defending".to_string(),
            quantity: 20,
        }
    );
    assert_eq!(
        inventory.get("9781400079179").map(|book| book.quantity),
        Some(80)
    );
}

#[rstest]
fn test_order_exceeding_stock_is_rejected_without_mutation() {
    let mut inventory = inventory_with_stock(100);
    inventory.order_book("9781400079179", 20);

    let outcome = inventory.order_book("9781400079179", 1000);
    assert_eq!(outcome, OrderOutcome::InsufficientStock);
    assert_eq!(
        inventory.get("9781400079179").map(|book| book.quantity),
        Some(80)
    );
}

#[rstest]
fn test_order_of_entire_stock_is_allowed() {
    let mut inventory = inventory_with_stock(5);

    let outcome = inventory.order_book("9781400079179", 5);
    assert!(matches!(outcome, OrderOutcome::Placed { quantity: 5, .. }));
    assert_eq!(
        inventory.get("9781400079179").map(|book| book.quantity),
        Some(0)
    );
}

#[rstest]
fn test_order_for_unknown_isbn() {
    let mut inventory = inventory_with_stock(100);
    assert_eq!(inventory.order_book("000", 1), OrderOutcome::NotFound);
}

// =============================================================================
// Restock Tests
// =============================================================================

#[rstest]
fn test_restock_increments_stock() {
    let mut inventory = inventory_with_stock(80);

    let outcome = inventory.restock("9781400079179", 47);
    assert_eq!(
        outcome,
        RestockOutcome::Restocked {
            title: "Art of defending".to_string(),
            quantity: 47,
        }
    );
    assert_eq!(
        inventory.get("9781400079179").map(|book| book.quantity),
        Some(127)
    );
}

#[rstest]
fn test_restock_of_zero_copies_is_allowed() {
    let mut inventory = inventory_with_stock(10);

    let outcome = inventory.restock("9781400079179", 0);
    assert!(matches!(outcome, RestockOutcome::Restocked { quantity: 0, .. }));
    assert_eq!(
        inventory.get("9781400079179").map(|book| book.quantity),
        Some(10)
    );
}

#[rstest]
fn test_restock_for_unknown_isbn() {
    let mut inventory = inventory_with_stock(100);
    assert_eq!(inventory.restock("000", 1), RestockOutcome::NotFound);
}

// =============================================================================
// Combined Arithmetic
// =============================================================================

#[rstest]
fn test_order_then_restock_arithmetic() {
    let mut inventory = inventory_with_stock(100);

    inventory.order_book("9781400079179", 20);
    inventory.order_book("9781400079179", 1000);
    inventory.restock("9781400079179", 47);

    assert_eq!(
        inventory.get("9781400079179").map(|book| book.quantity),
        Some(127)
    );
}

#[rstest]
fn test_outcome_messages_render_verbatim() {
    let mut inventory = inventory_with_stock(100);

    assert_eq!(
        format!("{}", inventory.order_book("9781400079179", 20)),
        "Order successfully placed for 20 copies of 'Art of defending'"
    );
    assert_eq!(
        format!("{}", inventory.restock("9781400079179", 47)),
        "Inventory successfully restocked with 47 copies of 'Art of defending'"
    );
    assert_eq!(
        format!("{}", inventory.order_book("000", 1)),
        "Book not found in inventory"
    );
}
