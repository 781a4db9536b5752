//! # Bookstore
//!
//! > **A small bookstore built from resource-oriented actors on Tokio.**
//!
//! Books, accounts, carts, orders and catalogs each live in their own actor. Every
//! actor owns an append-only arena of entities addressed by typed ids, and processes
//! its requests one at a time, so no entity state is ever shared or locked.
//!
//! ## Core Concepts
//!
//! ### One loop, many resources
//! [`ResourceActor<T>`](framework::ResourceActor) is written once and works for any
//! `T: ActorEntity`. An entity supplies its create parameters, its domain actions and
//! the context (clients of other actors) it needs to run them.
//!
//! ### Stock lives in one place
//! A cart never holds books, only [`BookId`](model::BookId)s. Adding to a cart asks the
//! Book actor to take a copy; that request is an atomic decrement-if-positive, so
//! carts racing for the last copy cannot drive stock below zero.
//!
//! ### Typed errors end to end
//! Each resource has its own `thiserror` enum (`BookError`, `CartError`, ...). Errors
//! raised inside an actor travel back boxed in
//! [`FrameworkError::EntityError`](framework::FrameworkError::EntityError) and are
//! unboxed by the client into the caller's type. Dependent resources wrap upstream
//! errors with `#[from]`.
//!
//! ### Payments
//! [`PaymentProcessor`](payment::PaymentProcessor) runs each transaction on its own task
//! and reports through a [`PaymentHandle`](payment::PaymentHandle): a `watch` channel for
//! the state and a `oneshot` for the final result.
//!
//! ## Module Tour
//!
//! - [`framework`]: the generic actor, client and [`MockClient`](framework::mock::MockClient)
//! - [`model`]: plain data ([`Book`](model::Book), [`Account`](model::Account),
//!   [`Cart`](model::Cart), [`Order`](model::Order), [`Catalog`](model::Catalog))
//! - [`book_actor`], [`account_actor`], [`cart_actor`], [`order_actor`], [`catalog_actor`]:
//!   `ActorEntity` implementations, actions and errors
//! - [`clients`]: typed wrappers such as [`CartClient`](clients::CartClient)
//! - [`payment`]: the simulated payment processor
//! - [`lifecycle`]: [`BookstoreSystem`](lifecycle::BookstoreSystem), the
//!   [`Registry`](lifecycle::Registry), configuration and tracing setup
//!
//! ## Quick Start
//!
//! ```bash
//! # Run the demo with info logs
//! RUST_LOG=info cargo run
//!
//! cargo test
//! ```

pub mod account_actor;
pub mod book_actor;
pub mod cart_actor;
pub mod catalog_actor;
pub mod clients;
pub mod framework;
pub mod lifecycle;
pub mod model;
pub mod order_actor;
pub mod payment;
