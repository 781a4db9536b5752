//! Custom actions for the Book actor.
//!
//! This module defines the domain-specific operations (Actions) that can be performed
//! on a [`Book`](crate::model::Book) entity, such as discounting it or moving copies in
//! and out of stock. These actions are handled by
//! [`ActorEntity::handle_action`](crate::framework::ActorEntity::handle_action).

/// Custom actions for Book entities.
#[derive(Debug, Clone)]
pub enum BookAction {
    /// Multiplies the price by `1 - pct / 100`. Out-of-range percentages are not rejected.
    ApplyDiscount(f64),
    /// Reads the current stock level without modifying it.
    CheckStock,
    /// Takes one copy out of stock if any is left.
    TakeCopy,
    /// Puts one copy back into stock.
    ReturnCopy,
    /// Shipping cost of a physical book.
    ShippingCost,
    /// Starts a download of a digital book.
    Download,
}

/// Results from BookActions - variants match 1:1 with BookAction
#[derive(Debug, Clone, PartialEq)]
pub enum BookActionResult {
    /// New price after the discount
    ApplyDiscount(f64),
    CheckStock(u32),
    /// `false` when the book was out of stock
    TakeCopy(bool),
    /// Stock level after the copy was returned
    ReturnCopy(u32),
    ShippingCost(f64),
    Download(()),
}
