//! The balanced index itself: an owned-box AVL tree keyed by ISBN.

use std::cmp::Ordering;
use std::fmt;

use super::error::InventoryError;
use super::outcome::{OrderOutcome, RestockOutcome};
use super::record::{BookRecord, Isbn, SearchField};

// =============================================================================
// Node Definition
// =============================================================================

/// Internal node of the AVL tree.
///
/// Children are exclusively owned; the `height` field caches the height of
/// the subtree rooted here (leaf = 1, absent child = 0) and is recomputed
/// on the return path of every mutating descent.
#[derive(Debug)]
struct Node {
    record: BookRecord,
    left: Option<Box<Node>>,
    right: Option<Box<Node>>,
    height: usize,
}

impl Node {
    /// Creates a new leaf node.
    const fn new(record: BookRecord) -> Self {
        Self {
            record,
            left: None,
            right: None,
            height: 1,
        }
    }

    /// Height of an optional subtree; an absent child has height 0.
    fn height_of(node: Option<&Self>) -> usize {
        node.map_or(0, |node| node.height)
    }

    /// Recomputes the cached height from the children's cached heights.
    fn update_height(&mut self) {
        self.height = 1 + Self::height_of(self.left.as_deref())
            .max(Self::height_of(self.right.as_deref()));
    }

    /// Left height minus right height; an AVL node keeps this in [-1, 1].
    #[allow(clippy::cast_possible_wrap)]
    fn balance_factor(&self) -> isize {
        Self::height_of(self.left.as_deref()) as isize
            - Self::height_of(self.right.as_deref()) as isize
    }
}

// =============================================================================
// BookInventory Definition
// =============================================================================

/// An in-memory, key-ordered index over book records.
///
/// `BookInventory` is an AVL-tree-backed ordered map from ISBN to
/// [`BookRecord`]. The tree rebalances itself on every insert and delete,
/// so lookup, insertion, and deletion stay logarithmic under arbitrary
/// operation sequences.
///
/// # Time Complexity
///
/// | Operation       | Complexity |
/// |-----------------|------------|
/// | `add_book`      | O(log N)   |
/// | `remove_book`   | O(log N)   |
/// | `get`           | O(log N)   |
/// | `order_book`    | O(log N)   |
/// | `restock`       | O(log N)   |
/// | `search`        | O(N)       |
/// | `iter`          | O(N)       |
/// | `len`/`is_empty`| O(1)       |
///
/// # Concurrency
///
/// The index is single-threaded and synchronous. Inserts and deletes
/// mutate an unbounded path of ancestors, so concurrent callers must wrap
/// the whole index in one exclusive lock; partial rotations are not safely
/// interleavable.
///
/// # Examples
///
/// ```rust
/// use bibliotree::inventory::{BookInventory, BookRecord};
///
/// let mut inventory = BookInventory::new();
/// inventory
///     .add_book(BookRecord::new("003", "C", "Carol", "Crime", 3.0, 30))
///     .unwrap();
/// inventory
///     .add_book(BookRecord::new("001", "A", "Alice", "Art", 1.0, 10))
///     .unwrap();
/// inventory
///     .add_book(BookRecord::new("002", "B", "Bob", "Biography", 2.0, 20))
///     .unwrap();
///
/// let isbns: Vec<&str> = inventory.iter().map(|book| book.isbn.as_str()).collect();
/// assert_eq!(isbns, vec!["001", "002", "003"]);
/// ```
#[derive(Default)]
pub struct BookInventory {
    /// Root node of the tree; sole entry point, subtrees owned transitively.
    root: Option<Box<Node>>,
    /// Number of records in the index.
    length: usize,
}

impl BookInventory {
    /// Creates a new empty inventory.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bibliotree::inventory::BookInventory;
    ///
    /// let inventory = BookInventory::new();
    /// assert!(inventory.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            root: None,
            length: 0,
        }
    }

    /// Returns the number of records in the index.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.length
    }

    /// Returns `true` if the index holds no records.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Returns the height of the tree (0 when empty, 1 for a single node).
    ///
    /// For N records an AVL tree guarantees a height of at most about
    /// `1.44 * log2(N + 2)`.
    #[must_use]
    pub fn height(&self) -> usize {
        Node::height_of(self.root.as_deref())
    }

    // =========================================================================
    // Insertion
    // =========================================================================

    /// Inserts a new book record into the index.
    ///
    /// # Errors
    ///
    /// Returns [`InventoryError::DuplicateIsbn`] if a record with the same
    /// ISBN already exists. The existing record is not modified.
    ///
    /// # Complexity
    ///
    /// O(log N)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bibliotree::inventory::{BookInventory, BookRecord, InventoryError, Isbn};
    ///
    /// let mut inventory = BookInventory::new();
    /// let book = BookRecord::new("001", "A", "Alice", "Art", 1.0, 10);
    ///
    /// assert!(inventory.add_book(book.clone()).is_ok());
    /// assert_eq!(
    ///     inventory.add_book(book),
    ///     Err(InventoryError::DuplicateIsbn(Isbn::from("001")))
    /// );
    /// ```
    pub fn add_book(&mut self, record: BookRecord) -> Result<(), InventoryError> {
        let inserted = record.isbn.clone();
        Self::insert_at(&mut self.root, record, &inserted)?;
        self.length += 1;
        Ok(())
    }

    /// Recursive helper for insert.
    ///
    /// Descends to the unique insertion point, then rebalances every slot
    /// on the way back up. `inserted` is the key being added; the rotation
    /// cases for insertion are selected by comparing it against the child's
    /// key.
    fn insert_at(
        slot: &mut Option<Box<Node>>,
        record: BookRecord,
        inserted: &Isbn,
    ) -> Result<(), InventoryError> {
        let Some(node) = slot.as_deref_mut() else {
            *slot = Some(Box::new(Node::new(record)));
            return Ok(());
        };

        match record.isbn.cmp(&node.record.isbn) {
            Ordering::Less => Self::insert_at(&mut node.left, record, inserted)?,
            Ordering::Greater => Self::insert_at(&mut node.right, record, inserted)?,
            Ordering::Equal => return Err(InventoryError::DuplicateIsbn(record.isbn)),
        }

        if let Some(owned) = slot.take() {
            *slot = Some(Self::rebalanced_after_insert(owned, inserted));
        }
        Ok(())
    }

    /// Restores the AVL property at one node after an insertion below it.
    ///
    /// Insertion changes a single root-to-leaf path, so at most one
    /// rotation point (simple or double) is needed globally, but heights
    /// are recomputed at every ancestor as the fix propagates upward.
    fn rebalanced_after_insert(mut node: Box<Node>, inserted: &Isbn) -> Box<Node> {
        node.update_height();
        let balance = node.balance_factor();

        if balance > 1 {
            // Left-Left: the new key went left of the left child.
            if node
                .left
                .as_deref()
                .is_some_and(|left| inserted < &left.record.isbn)
            {
                return Self::rotate_right(node);
            }
            // Left-Right: rotate the left child left first.
            if let Some(left) = node.left.take() {
                node.left = Some(Self::rotate_left(left));
            }
            return Self::rotate_right(node);
        }

        if balance < -1 {
            // Right-Right: the new key went right of the right child.
            if node
                .right
                .as_deref()
                .is_some_and(|right| inserted > &right.record.isbn)
            {
                return Self::rotate_left(node);
            }
            // Right-Left: rotate the right child right first.
            if let Some(right) = node.right.take() {
                node.right = Some(Self::rotate_right(right));
            }
            return Self::rotate_left(node);
        }

        node
    }

    // =========================================================================
    // Deletion
    // =========================================================================

    /// Removes the record with the given ISBN and returns it.
    ///
    /// A node with two children is not unlinked directly: its record is
    /// replaced by a copy of its in-order successor's record, and the
    /// successor node (which has at most one child) is removed from the
    /// right subtree instead.
    ///
    /// # Errors
    ///
    /// Returns [`InventoryError::BookNotFound`] if no record has this ISBN.
    /// The structure is unchanged in that case.
    ///
    /// # Complexity
    ///
    /// O(log N)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bibliotree::inventory::{BookInventory, BookRecord};
    ///
    /// let mut inventory = BookInventory::new();
    /// inventory
    ///     .add_book(BookRecord::new("001", "A", "Alice", "Art", 1.0, 10))
    ///     .unwrap();
    ///
    /// let removed = inventory.remove_book("001").unwrap();
    /// assert_eq!(removed.title, "A");
    /// assert!(inventory.is_empty());
    /// assert!(inventory.remove_book("001").is_err());
    /// ```
    pub fn remove_book(&mut self, isbn: &str) -> Result<BookRecord, InventoryError> {
        let (root, removed) = match self.root.take() {
            Some(node) => Self::remove_node(node, isbn),
            None => (None, None),
        };
        self.root = root;

        match removed {
            Some(record) => {
                self.length -= 1;
                Ok(record)
            }
            None => Err(InventoryError::BookNotFound(Isbn::from(isbn))),
        }
    }

    /// Recursive helper for remove.
    ///
    /// Returns the (possibly rotated) new subtree root and the removed
    /// record, `None` if the key was not present in this subtree.
    fn remove_node(mut node: Box<Node>, isbn: &str) -> (Option<Box<Node>>, Option<BookRecord>) {
        let removed = match isbn.cmp(node.record.isbn.as_str()) {
            Ordering::Less => match node.left.take() {
                Some(left) => {
                    let (subtree, removed) = Self::remove_node(left, isbn);
                    node.left = subtree;
                    removed
                }
                None => return (Some(node), None),
            },
            Ordering::Greater => match node.right.take() {
                Some(right) => {
                    let (subtree, removed) = Self::remove_node(right, isbn);
                    node.right = subtree;
                    removed
                }
                None => return (Some(node), None),
            },
            Ordering::Equal => match (node.left.take(), node.right.take()) {
                (None, None) => return (None, Some(node.record)),
                (Some(child), None) | (None, Some(child)) => {
                    return (Some(child), Some(node.record));
                }
                (Some(left), Some(right)) => {
                    // Two children: take over the in-order successor's
                    // record, then delete the successor from the right
                    // subtree (it has at most one child there).
                    node.left = Some(left);
                    let successor = Self::min_record(&right).clone();
                    let successor_isbn = successor.isbn.clone();
                    let original = std::mem::replace(&mut node.record, successor);
                    let (subtree, _) = Self::remove_node(right, successor_isbn.as_str());
                    node.right = subtree;
                    Some(original)
                }
            },
        };

        if removed.is_some() {
            node = Self::rebalanced_after_remove(node);
        }
        (Some(node), removed)
    }

    /// Restores the AVL property at one node after a removal below it.
    ///
    /// Unlike insertion, removal can require a rotation at every ancestor
    /// on the path, and the rotation cases are selected by the sign of the
    /// taller child's balance factor rather than by key comparison.
    fn rebalanced_after_remove(mut node: Box<Node>) -> Box<Node> {
        node.update_height();
        let balance = node.balance_factor();

        if balance > 1 {
            let left_balance = node.left.as_deref().map_or(0, Node::balance_factor);
            if left_balance >= 0 {
                return Self::rotate_right(node);
            }
            if let Some(left) = node.left.take() {
                node.left = Some(Self::rotate_left(left));
            }
            return Self::rotate_right(node);
        }

        if balance < -1 {
            let right_balance = node.right.as_deref().map_or(0, Node::balance_factor);
            if right_balance <= 0 {
                return Self::rotate_left(node);
            }
            if let Some(right) = node.right.take() {
                node.right = Some(Self::rotate_right(right));
            }
            return Self::rotate_left(node);
        }

        node
    }

    /// Smallest record in a subtree (its in-order first entry).
    fn min_record(node: &Node) -> &BookRecord {
        node.left.as_deref().map_or(&node.record, Self::min_record)
    }

    // =========================================================================
    // Rotations
    // =========================================================================

    /// Rotates the subtree to the right around its root.
    ///
    /// O(1) ownership reassignment: the demoted node's height is
    /// recomputed first, then the promoted node's.
    fn rotate_right(mut z: Box<Node>) -> Box<Node> {
        let Some(mut y) = z.left.take() else {
            return z;
        };
        z.left = y.right.take();
        z.update_height();
        y.right = Some(z);
        y.update_height();
        y
    }

    /// Rotates the subtree to the left around its root.
    fn rotate_left(mut z: Box<Node>) -> Box<Node> {
        let Some(mut y) = z.right.take() else {
            return z;
        };
        z.right = y.left.take();
        z.update_height();
        y.left = Some(z);
        y.update_height();
        y
    }

    // =========================================================================
    // Lookup and Search
    // =========================================================================

    /// Returns the record with the given ISBN, if present.
    ///
    /// # Complexity
    ///
    /// O(log N)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bibliotree::inventory::{BookInventory, BookRecord};
    ///
    /// let mut inventory = BookInventory::new();
    /// inventory
    ///     .add_book(BookRecord::new("001", "A", "Alice", "Art", 1.0, 10))
    ///     .unwrap();
    ///
    /// assert_eq!(inventory.get("001").map(|book| book.title.as_str()), Some("A"));
    /// assert!(inventory.get("002").is_none());
    /// ```
    #[must_use]
    pub fn get(&self, isbn: &str) -> Option<&BookRecord> {
        Self::get_from_node(self.root.as_deref(), isbn)
    }

    /// Returns `true` if a record with the given ISBN is present.
    #[must_use]
    pub fn contains(&self, isbn: &str) -> bool {
        self.get(isbn).is_some()
    }

    /// Recursive helper for get.
    fn get_from_node<'a>(node: Option<&'a Node>, isbn: &str) -> Option<&'a BookRecord> {
        node.and_then(|node| match isbn.cmp(node.record.isbn.as_str()) {
            Ordering::Less => Self::get_from_node(node.left.as_deref(), isbn),
            Ordering::Greater => Self::get_from_node(node.right.as_deref(), isbn),
            Ordering::Equal => Some(&node.record),
        })
    }

    /// Recursive helper for the stock operations; mutable point lookup.
    fn find_mut<'a>(node: Option<&'a mut Node>, isbn: &str) -> Option<&'a mut BookRecord> {
        node.and_then(|node| match isbn.cmp(node.record.isbn.as_str()) {
            Ordering::Less => Self::find_mut(node.left.as_deref_mut(), isbn),
            Ordering::Greater => Self::find_mut(node.right.as_deref_mut(), isbn),
            Ordering::Equal => Some(&mut node.record),
        })
    }

    /// Searches by field name, collecting every matching record.
    ///
    /// `field_name` is one of `"isbn"`, `"title"`, `"author"`, `"genre"`.
    /// Any other name yields an empty `Vec`, not an error; callers that
    /// pass through user input rely on this permissive dispatch. Use
    /// [`search_by`](Self::search_by) when the field is known statically.
    ///
    /// # Complexity
    ///
    /// O(N) full-tree traversal.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bibliotree::inventory::{BookInventory, BookRecord};
    ///
    /// let mut inventory = BookInventory::new();
    /// inventory
    ///     .add_book(BookRecord::new("001", "Alif", "A.Abdaal", "Poetry", 600.0, 100))
    ///     .unwrap();
    ///
    /// assert_eq!(inventory.search("author", "abdaal").len(), 1);
    /// assert!(inventory.search("publisher", "anything").is_empty());
    /// ```
    #[must_use]
    pub fn search(&self, field_name: &str, value: &str) -> Vec<&BookRecord> {
        SearchField::parse(field_name).map_or_else(Vec::new, |field| self.search_by(field, value))
    }

    /// Searches on a typed field, collecting every matching record.
    ///
    /// The result is freshly materialized on each call, in traversal order;
    /// matching is not ordering-sensitive.
    ///
    /// # Complexity
    ///
    /// O(N)
    #[must_use]
    pub fn search_by(&self, field: SearchField, value: &str) -> Vec<&BookRecord> {
        let lowered = value.to_lowercase();
        let mut matches = Vec::new();
        Self::collect_matches(self.root.as_deref(), field, value, &lowered, &mut matches);
        matches
    }

    /// Recursive helper for search.
    fn collect_matches<'a>(
        node: Option<&'a Node>,
        field: SearchField,
        value: &str,
        lowered: &str,
        matches: &mut Vec<&'a BookRecord>,
    ) {
        if let Some(node) = node {
            if field.matches(&node.record, value, lowered) {
                matches.push(&node.record);
            }
            Self::collect_matches(node.left.as_deref(), field, value, lowered, matches);
            Self::collect_matches(node.right.as_deref(), field, value, lowered, matches);
        }
    }

    // =========================================================================
    // Stock Operations
    // =========================================================================

    /// Places an order: decrements stock if enough copies are available.
    ///
    /// The three outcomes are mutually exclusive; the record is modified
    /// only when the order is placed. Unknown ISBN and insufficient stock
    /// are business conditions, not errors.
    ///
    /// # Complexity
    ///
    /// O(log N)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bibliotree::inventory::{BookInventory, BookRecord, OrderOutcome};
    ///
    /// let mut inventory = BookInventory::new();
    /// inventory
    ///     .add_book(BookRecord::new("001", "A", "Alice", "Art", 1.0, 100))
    ///     .unwrap();
    ///
    /// assert!(matches!(inventory.order_book("001", 20), OrderOutcome::Placed { .. }));
    /// assert_eq!(inventory.order_book("001", 1000), OrderOutcome::InsufficientStock);
    /// assert_eq!(inventory.order_book("999", 1), OrderOutcome::NotFound);
    /// ```
    pub fn order_book(&mut self, isbn: &str, quantity: u32) -> OrderOutcome {
        let Some(record) = Self::find_mut(self.root.as_deref_mut(), isbn) else {
            return OrderOutcome::NotFound;
        };
        if record.quantity < quantity {
            return OrderOutcome::InsufficientStock;
        }
        record.quantity -= quantity;
        OrderOutcome::Placed {
            title: record.title.clone(),
            quantity,
        }
    }

    /// Restocks a book: increments stock unconditionally when found.
    ///
    /// No upper bound is enforced on the resulting quantity.
    ///
    /// # Complexity
    ///
    /// O(log N)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bibliotree::inventory::{BookInventory, BookRecord, RestockOutcome};
    ///
    /// let mut inventory = BookInventory::new();
    /// inventory
    ///     .add_book(BookRecord::new("001", "A", "Alice", "Art", 1.0, 80))
    ///     .unwrap();
    ///
    /// assert!(matches!(inventory.restock("001", 47), RestockOutcome::Restocked { .. }));
    /// assert_eq!(inventory.get("001").map(|book| book.quantity), Some(127));
    /// ```
    pub fn restock(&mut self, isbn: &str, quantity: u32) -> RestockOutcome {
        let Some(record) = Self::find_mut(self.root.as_deref_mut(), isbn) else {
            return RestockOutcome::NotFound;
        };
        record.quantity += quantity;
        RestockOutcome::Restocked {
            title: record.title.clone(),
            quantity,
        }
    }

    // =========================================================================
    // Iteration
    // =========================================================================

    /// Returns an iterator over all records in ascending ISBN order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bibliotree::inventory::{BookInventory, BookRecord};
    ///
    /// let mut inventory = BookInventory::new();
    /// for isbn in ["002", "001", "003"] {
    ///     inventory
    ///         .add_book(BookRecord::new(isbn, "T", "A", "G", 1.0, 1))
    ///         .unwrap();
    /// }
    ///
    /// let isbns: Vec<&str> = inventory.iter().map(|book| book.isbn.as_str()).collect();
    /// assert_eq!(isbns, vec!["001", "002", "003"]);
    /// ```
    #[must_use]
    pub fn iter(&self) -> BookInventoryIterator<'_> {
        let mut records = Vec::with_capacity(self.length);
        Self::collect_in_order(self.root.as_deref(), &mut records);
        BookInventoryIterator {
            records,
            current_index: 0,
        }
    }

    /// Collects all records in ascending ISBN order (in-order traversal).
    fn collect_in_order<'a>(node: Option<&'a Node>, records: &mut Vec<&'a BookRecord>) {
        if let Some(node) = node {
            Self::collect_in_order(node.left.as_deref(), records);
            records.push(&node.record);
            Self::collect_in_order(node.right.as_deref(), records);
        }
    }
}

// =============================================================================
// Iterator Types
// =============================================================================

/// Iterator over the records of a [`BookInventory`] in ascending ISBN order.
pub struct BookInventoryIterator<'a> {
    records: Vec<&'a BookRecord>,
    current_index: usize,
}

impl<'a> Iterator for BookInventoryIterator<'a> {
    type Item = &'a BookRecord;

    fn next(&mut self) -> Option<Self::Item> {
        let record = self.records.get(self.current_index).copied()?;
        self.current_index += 1;
        Some(record)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.records.len() - self.current_index;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for BookInventoryIterator<'_> {
    fn len(&self) -> usize {
        self.records.len() - self.current_index
    }
}

impl<'a> IntoIterator for &'a BookInventory {
    type Item = &'a BookRecord;
    type IntoIter = BookInventoryIterator<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

impl PartialEq for BookInventory {
    /// Two inventories are equal when they hold the same records in the
    /// same key order, regardless of tree shape.
    fn eq(&self, other: &Self) -> bool {
        self.length == other.length && self.iter().eq(other.iter())
    }
}

impl fmt::Debug for BookInventory {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl serde::Serialize for BookInventory {
    /// Serializes as a sequence of records in ascending ISBN order.
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;

        let mut sequence = serializer.serialize_seq(Some(self.length))?;
        for record in self {
            sequence.serialize_element(record)?;
        }
        sequence.end()
    }
}

#[cfg(feature = "serde")]
struct BookInventoryVisitor;

#[cfg(feature = "serde")]
impl<'de> serde::de::Visitor<'de> for BookInventoryVisitor {
    type Value = BookInventory;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a sequence of book records")
    }

    fn visit_seq<A>(self, mut sequence: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        let mut inventory = BookInventory::new();
        while let Some(record) = sequence.next_element::<BookRecord>()? {
            inventory
                .add_book(record)
                .map_err(serde::de::Error::custom)?;
        }
        Ok(inventory)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for BookInventory {
    /// Deserializes from a sequence of records; a duplicate ISBN in the
    /// input is a deserialization error.
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(BookInventoryVisitor)
    }
}

// =============================================================================
// Tree-Shape Tests
// =============================================================================
