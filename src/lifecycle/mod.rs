//! # System Lifecycle & Orchestration
//!
//! This module manages the runtime lifecycle of the bookstore: starting, wiring and
//! shutting down the actors, plus the state that lives outside of them.
//!
//! **Key Responsibilities:**
//! 1. **Actor Creation** - Instantiate all actors and their clients
//! 2. **Dependency Injection** - Wire actors together via context injection
//! 3. **Shared State** - The [`Registry`] and the payment processor
//! 4. **Graceful Shutdown** - Coordinate clean termination of all actors
//! 5. **Observability Setup** - [`setup_tracing`]
//!
//! ## Dependency Injection via Context
//!
//! Actors are created without dependencies and receive them in `run(context)`:
//!
//! ```rust,ignore
//! impl ActorEntity for Book    { type Context = (); }
//! impl ActorEntity for Cart    { type Context = (AccountClient, BookClient); }
//! impl ActorEntity for Order   { type Context = (AccountClient, BookClient); }
//! impl ActorEntity for Catalog { type Context = BookClient; }
//! ```
//!
//! The dependency graph is acyclic (everything points at Book or Account), so
//! shutdown by dropping clients is enough: downstream actors stop first and release
//! the clients they held.

pub mod bookstore_system;
pub mod config;
pub mod registry;
pub mod tracing;

pub use bookstore_system::*;
pub use config::*;
pub use registry::*;
pub use self::tracing::*;
