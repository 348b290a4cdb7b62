//! Outcome values for stock operations.
//!
//! Ordering an unknown book or more copies than are in stock is an
//! expected business condition, not a programming error, so the stock
//! operations return these plain values instead of `Result`. The `Display`
//! impls render the caller-facing sentences verbatim; a front end can print
//! them as-is.

use std::fmt;

// =============================================================================
// OrderOutcome Definition
// =============================================================================

/// The result of [`BookInventory::order_book`].
///
/// Exactly one of the three variants applies; the record is modified only
/// in the `Placed` case.
///
/// [`BookInventory::order_book`]: super::BookInventory::order_book
///
/// # Examples
///
/// ```rust
/// use bibliotree::inventory::OrderOutcome;
///
/// let outcome = OrderOutcome::Placed { title: "Alif".to_string(), quantity: 20 };
/// assert_eq!(
///     format!("{outcome}"),
///     "Order successfully placed for 20 copies of 'Alif'"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderOutcome {
    /// The order was placed; stock was decremented by `quantity`.
    Placed {
        /// Title of the ordered book.
        title: String,
        /// Number of copies ordered.
        quantity: u32,
    },
    /// The book exists but fewer copies are in stock than were requested.
    InsufficientStock,
    /// No book with the given ISBN is in the inventory.
    NotFound,
}

impl fmt::Display for OrderOutcome {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Placed { title, quantity } => write!(
                formatter,
                "Order successfully placed for {quantity} copies of '{title}'"
            ),
            Self::InsufficientStock => {
                formatter.write_str("Sorry, insufficient quantity available for this book")
            }
            Self::NotFound => formatter.write_str("Book not found in inventory"),
        }
    }
}

// =============================================================================
// RestockOutcome Definition
// =============================================================================

/// The result of [`BookInventory::restock`].
///
/// [`BookInventory::restock`]: super::BookInventory::restock
///
/// # Examples
///
/// ```rust
/// use bibliotree::inventory::RestockOutcome;
///
/// let outcome = RestockOutcome::Restocked { title: "Alif".to_string(), quantity: 47 };
/// assert_eq!(
///     format!("{outcome}"),
///     "Inventory successfully restocked with 47 copies of 'Alif'"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RestockOutcome {
    /// Stock was incremented by `quantity`.
    Restocked {
        /// Title of the restocked book.
        title: String,
        /// Number of copies added.
        quantity: u32,
    },
    /// No book with the given ISBN is in the inventory.
    NotFound,
}

impl fmt::Display for RestockOutcome {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Restocked { title, quantity } => write!(
                formatter,
                "Inventory successfully restocked with {quantity} copies of '{title}'"
            ),
            Self::NotFound => formatter.write_str("Book not found in inventory"),
        }
    }
}
