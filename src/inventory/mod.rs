//! The AVL-tree-backed book inventory index.
//!
//! This module provides [`BookInventory`], an ordered map from ISBN to
//! [`BookRecord`] that keeps itself balanced (AVL) under arbitrary
//! insertion and deletion sequences:
//!
//! - O(log N) insert, delete, and lookup by ISBN
//! - O(N) field search (substring matching over title/author/genre)
//! - O(N) ordered iteration, ascending by ISBN
//! - O(1) len and `is_empty`
//!
//! # Error vs. outcome
//!
//! Two distinct result styles are used on purpose:
//!
//! - Structural operations (`add_book`, `remove_book`) return
//!   `Result<_, InventoryError>`: a duplicate or missing ISBN is a caller
//!   programming error and the structure is left untouched.
//! - Stock operations (`order_book`, `restock`) return plain outcome
//!   values ([`OrderOutcome`], [`RestockOutcome`]): an unknown book or
//!   insufficient stock is an expected business condition, not an error.
//!
//! # Examples
//!
//! ```rust
//! use bibliotree::inventory::{BookInventory, BookRecord};
//!
//! let mut inventory = BookInventory::new();
//! inventory
//!     .add_book(BookRecord::new(
//!         "9780553106633",
//!         "Wimpy kid",
//!         "Jeff kinney",
//!         "Entertainment",
//!         450.0,
//!         50,
//!     ))
//!     .unwrap();
//!
//! // Records iterate in ascending ISBN order
//! for book in &inventory {
//!     println!("{book}");
//! }
//! ```

mod error;
mod index;
mod outcome;
mod record;

pub use error::InventoryError;
pub use index::{BookInventory, BookInventoryIterator};
pub use outcome::{OrderOutcome, RestockOutcome};
pub use record::{BookRecord, Isbn, SearchField};
