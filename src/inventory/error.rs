//! Error types for structural index operations.
//!
//! Only the operations that change the shape of the index fail with these
//! errors. Stock adjustments report expected business conditions through
//! [`OrderOutcome`](super::OrderOutcome) and
//! [`RestockOutcome`](super::RestockOutcome) instead.

use super::record::Isbn;

/// Represents a failed structural operation on the inventory index.
///
/// In both variants the index is left exactly as it was before the call:
/// a rejected insert modifies no fields, a rejected delete removes no node.
///
/// # Examples
///
/// ```rust
/// use bibliotree::inventory::{InventoryError, Isbn};
///
/// let error = InventoryError::DuplicateIsbn(Isbn::from("9780061120084"));
/// assert_eq!(
///     format!("{error}"),
///     "ISBN 9780061120084 already exists in the inventory"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InventoryError {
    /// An insert was attempted with an ISBN the index already holds.
    DuplicateIsbn(Isbn),
    /// A delete was attempted with an ISBN the index does not hold.
    BookNotFound(Isbn),
}

impl std::fmt::Display for InventoryError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateIsbn(isbn) => {
                write!(formatter, "ISBN {isbn} already exists in the inventory")
            }
            Self::BookNotFound(isbn) => {
                write!(formatter, "no book with ISBN {isbn} in the inventory")
            }
        }
    }
}

impl std::error::Error for InventoryError {}
