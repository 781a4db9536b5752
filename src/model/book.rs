use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Shipping cost charged per unit of weight for physical books.
pub const SHIPPING_RATE_PER_WEIGHT: f64 = 0.5;

/// Type-safe identifier for Books (position in the book arena).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BookId(pub usize);

impl From<usize> for BookId {
    fn from(index: usize) -> Self {
        Self(index)
    }
}

impl From<BookId> for usize {
    fn from(id: BookId) -> Self {
        id.0
    }
}

impl Display for BookId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "book_{}", self.0)
    }
}

/// Shape-specific data carried by a book.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum BookFormat {
    Standard,
    Physical { weight: f64 },
    Digital { file_size: f64 },
}

/// Represents a catalog entry: a priced, stocked book.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](crate::framework::ActorEntity) trait,
/// allowing it to be managed by a [`ResourceActor`](crate::framework::ResourceActor).
/// The book actor's arena is the only owner of `Book` values; every other resource
/// refers to a book through its [`BookId`].
///
/// See [`impl ActorEntity for Book`](#impl-ActorEntity-for-Book) for details on:
/// - Creation parameters ([`BookCreate`])
/// - Custom actions ([`BookAction`](crate::book_actor::BookAction))
#[derive(Debug, Clone, PartialEq)]
pub struct Book {
    pub id: BookId,
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub price: f64,
    pub stock: u32,
    pub format: BookFormat,
}

impl Book {
    /// Creates a new Book instance.
    ///
    /// # Arguments
    /// * `id` - Arena position (set by the actor system)
    /// * `params` - Title, author, ISBN, price, stock and format
    pub fn new(id: BookId, params: BookCreate) -> Self {
        Self {
            id,
            title: params.title,
            author: params.author,
            isbn: params.isbn,
            price: params.price,
            stock: params.stock,
            format: params.format,
        }
    }

    /// Multiplies the price by `1 - pct / 100`.
    ///
    /// Percentages outside `0..=100` are accepted as-is: a negative percentage
    /// raises the price and anything above 100 drives it below zero.
    pub fn apply_discount(&mut self, pct: f64) -> f64 {
        self.price *= 1.0 - pct / 100.0;
        self.price
    }

    /// `"<title> by <author>"`.
    pub fn info(&self) -> String {
        format!("{} by {}", self.title, self.author)
    }

    /// Decrements stock if a copy is available. Returns whether a copy was taken.
    pub fn take_copy(&mut self) -> bool {
        match self.stock.checked_sub(1) {
            Some(remaining) => {
                self.stock = remaining;
                true
            }
            None => false,
        }
    }

    /// Puts one copy back on the shelf and returns the new stock level.
    pub fn return_copy(&mut self) -> u32 {
        self.stock += 1;
        self.stock
    }

    /// Shipping cost for physical books, `None` for every other format.
    pub fn shipping_cost(&self) -> Option<f64> {
        match self.format {
            BookFormat::Physical { weight } => Some(weight * SHIPPING_RATE_PER_WEIGHT),
            _ => None,
        }
    }

    /// Case-insensitive substring match on title or author.
    ///
    /// `needle` must already be lower-cased. An empty needle matches every book.
    pub fn matches(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle) || self.author.to_lowercase().contains(needle)
    }
}

/// Payload for creating a new book.
#[derive(Debug, Clone)]
pub struct BookCreate {
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub price: f64,
    pub stock: u32,
    pub format: BookFormat,
}

impl BookCreate {
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        isbn: impl Into<String>,
        price: f64,
        stock: u32,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            isbn: isbn.into(),
            price,
            stock,
            format: BookFormat::Standard,
        }
    }

    /// A printed book with a shipping weight.
    pub fn physical(
        title: impl Into<String>,
        author: impl Into<String>,
        isbn: impl Into<String>,
        price: f64,
        stock: u32,
        weight: f64,
    ) -> Self {
        Self {
            format: BookFormat::Physical { weight },
            ..Self::new(title, author, isbn, price, stock)
        }
    }

    /// A downloadable book of the given file size.
    pub fn digital(
        title: impl Into<String>,
        author: impl Into<String>,
        isbn: impl Into<String>,
        price: f64,
        stock: u32,
        file_size: f64,
    ) -> Self {
        Self {
            format: BookFormat::Digital { file_size },
            ..Self::new(title, author, isbn, price, stock)
        }
    }
}
