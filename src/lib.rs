//! # bibliotree
//!
//! An in-memory, key-ordered index over book records, backed by an AVL tree
//! keyed by ISBN.
//!
//! ## Overview
//!
//! The crate provides a single component, [`BookInventory`], an ordered map
//! from ISBN to book record that stays balanced under arbitrary insertion
//! and deletion sequences. On top of the tree it exposes the small set of
//! domain operations a bookstore front end needs:
//!
//! - **Indexing**: insert, delete, point lookup, ordered iteration
//! - **Search**: exact-ISBN or case-insensitive substring matching over
//!   title, author, and genre
//! - **Stock**: order (decrement with an availability check) and restock
//!   (unconditional increment)
//!
//! Structural failures (duplicate ISBN on insert, missing ISBN on delete)
//! are errors; business conditions (ordering an out-of-stock or unknown
//! book) are ordinary outcome values. See [`inventory::InventoryError`],
//! [`inventory::OrderOutcome`] and [`inventory::RestockOutcome`].
//!
//! [`BookInventory`]: inventory::BookInventory
//!
//! ## Feature Flags
//!
//! - `serde`: Serialize/Deserialize support for records and the whole index
//!
//! ## Example
//!
//! ```rust
//! use bibliotree::prelude::*;
//!
//! let mut inventory = BookInventory::new();
//! inventory
//!     .add_book(BookRecord::new(
//!         "9780061120084",
//!         "Alif",
//!         "A.Abdaal",
//!         "Poetry",
//!         600.0,
//!         100,
//!     ))
//!     .unwrap();
//!
//! let outcome = inventory.order_book("9780061120084", 20);
//! assert_eq!(
//!     outcome,
//!     OrderOutcome::Placed { title: "Alif".to_string(), quantity: 20 }
//! );
//! assert_eq!(inventory.get("9780061120084").map(|book| book.quantity), Some(80));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types.
///
/// # Usage
///
/// ```rust
/// use bibliotree::prelude::*;
/// ```
pub mod prelude {
    pub use crate::inventory::{
        BookInventory, BookRecord, InventoryError, Isbn, OrderOutcome, RestockOutcome,
        SearchField,
    };
}

pub mod inventory;
