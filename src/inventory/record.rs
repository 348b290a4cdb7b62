//! Book records and the searchable-field dispatch.

use std::fmt;

// =============================================================================
// Isbn Definition
// =============================================================================

/// The unique identifier of a book record.
///
/// ISBNs are compared lexicographically, which is the ordering the index
/// maintains. The wrapper is transparent: it exists so the key type cannot
/// be confused with the other string fields of a record.
///
/// # Examples
///
/// ```rust
/// use bibliotree::inventory::Isbn;
///
/// let isbn = Isbn::from("9780061120084");
/// assert_eq!(isbn.as_str(), "9780061120084");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Isbn(String);

impl Isbn {
    /// Returns the ISBN as a string slice.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for Isbn {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for Isbn {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl AsRef<str> for Isbn {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Isbn {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.0)
    }
}

// =============================================================================
// BookRecord Definition
// =============================================================================

/// A single book in the inventory.
///
/// The ISBN is the primary key and is unique across the index; the other
/// fields are payload. `quantity` changes only through
/// [`BookInventory::order_book`] and [`BookInventory::restock`].
///
/// [`BookInventory::order_book`]: super::BookInventory::order_book
/// [`BookInventory::restock`]: super::BookInventory::restock
///
/// # Examples
///
/// ```rust
/// use bibliotree::inventory::BookRecord;
///
/// let book = BookRecord::new(
///     "9781400079179",
///     "Art of defending",
///     "Alex Ferguson",
///     "Fiction",
///     1200.0,
///     100,
/// );
/// assert_eq!(book.isbn.as_str(), "9781400079179");
/// assert_eq!(book.quantity, 100);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BookRecord {
    /// Unique identifier; the index key.
    pub isbn: Isbn,
    /// Title of the book.
    pub title: String,
    /// Author of the book.
    pub author: String,
    /// Genre of the book.
    pub genre: String,
    /// Unit price; non-negative by convention.
    pub price: f64,
    /// Copies currently in stock.
    pub quantity: u32,
}

impl BookRecord {
    /// Creates a new book record.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bibliotree::inventory::BookRecord;
    ///
    /// let book = BookRecord::new("001", "Title", "Author", "Genre", 9.99, 3);
    /// assert_eq!(book.title, "Title");
    /// ```
    pub fn new(
        isbn: impl Into<Isbn>,
        title: impl Into<String>,
        author: impl Into<String>,
        genre: impl Into<String>,
        price: f64,
        quantity: u32,
    ) -> Self {
        Self {
            isbn: isbn.into(),
            title: title.into(),
            author: author.into(),
            genre: genre.into(),
            price,
            quantity,
        }
    }
}

impl fmt::Display for BookRecord {
    /// Renders the record as the row tuple a listing front end prints.
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "({}, {}, {}, {}, {}, {})",
            self.isbn, self.title, self.author, self.genre, self.price, self.quantity
        )
    }
}

// =============================================================================
// SearchField Definition
// =============================================================================

/// The fields a linear search can match on.
///
/// `Isbn` matches by exact equality; the three text fields match by
/// case-insensitive substring containment.
///
/// # Examples
///
/// ```rust
/// use bibliotree::inventory::SearchField;
///
/// assert_eq!(SearchField::parse("author"), Some(SearchField::Author));
/// assert_eq!(SearchField::parse("publisher"), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchField {
    /// Exact match on the ISBN.
    Isbn,
    /// Case-insensitive substring match on the title.
    Title,
    /// Case-insensitive substring match on the author.
    Author,
    /// Case-insensitive substring match on the genre.
    Genre,
}

impl SearchField {
    /// Resolves a field name to a search field.
    ///
    /// Unrecognized names yield `None`. This is the documented permissive
    /// default: searching on an unknown field name produces an empty result
    /// set rather than an error.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "isbn" => Some(Self::Isbn),
            "title" => Some(Self::Title),
            "author" => Some(Self::Author),
            "genre" => Some(Self::Genre),
            _ => None,
        }
    }

    /// Checks whether a record matches a search value on this field.
    ///
    /// `lowered` must be the lowercase form of `value`; the caller computes
    /// it once per search rather than once per visited node.
    pub(crate) fn matches(self, record: &BookRecord, value: &str, lowered: &str) -> bool {
        match self {
            Self::Isbn => record.isbn.as_str() == value,
            Self::Title => record.title.to_lowercase().contains(lowered),
            Self::Author => record.author.to_lowercase().contains(lowered),
            Self::Genre => record.genre.to_lowercase().contains(lowered),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_fields() {
        assert_eq!(SearchField::parse("isbn"), Some(SearchField::Isbn));
        assert_eq!(SearchField::parse("title"), Some(SearchField::Title));
        assert_eq!(SearchField::parse("author"), Some(SearchField::Author));
        assert_eq!(SearchField::parse("genre"), Some(SearchField::Genre));
    }

    #[test]
    fn test_parse_is_case_sensitive_and_permissive() {
        assert_eq!(SearchField::parse("Title"), None);
        assert_eq!(SearchField::parse("publisher"), None);
        assert_eq!(SearchField::parse(""), None);
    }

    #[test]
    fn test_isbn_matches_exactly() {
        let record = BookRecord::new("123", "T", "A", "G", 1.0, 1);
        assert!(SearchField::Isbn.matches(&record, "123", "123"));
        assert!(!SearchField::Isbn.matches(&record, "12", "12"));
    }

    #[test]
    fn test_text_fields_match_substring_case_insensitively() {
        let record = BookRecord::new("123", "Alif", "A.Abdaal", "Poetry", 600.0, 100);
        assert!(SearchField::Author.matches(&record, "ABDAAL", "abdaal"));
        assert!(SearchField::Title.matches(&record, "li", "li"));
        assert!(SearchField::Genre.matches(&record, "poet", "poet"));
        assert!(!SearchField::Author.matches(&record, "george", "george"));
    }

    #[test]
    fn test_record_display_renders_row_tuple() {
        let record = BookRecord::new("001", "Title", "Author", "Genre", 9.5, 3);
        assert_eq!(format!("{record}"), "(001, Title, Author, Genre, 9.5, 3)");
    }
}
