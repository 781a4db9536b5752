use super::config::SystemConfig;
use super::registry::Registry;
use crate::clients::{AccountClient, BookClient, CartClient, CatalogClient, OrderClient};
use crate::payment::PaymentProcessor;
use tracing::{error, info};

/// The runtime orchestrator for the bookstore.
///
/// `BookstoreSystem` is responsible for:
/// - **Lifecycle Management**: Starting and stopping all actors in the system
/// - **Dependency Wiring**: Handing carts, orders and catalogs the clients they depend on
/// - **Shared State**: Owning the [`Registry`] and the [`PaymentProcessor`]
///
/// # Architecture
///
/// - **Book Actor**: Arena of catalog entries; the only place stock and prices change
/// - **Account Actor**: Customers and administrators
/// - **Cart Actor**: Depends on Account and Book
/// - **Order Actor**: Depends on Account and Book
/// - **Catalog Actor**: Depends on Book
///
/// # Example
///
/// ```ignore
/// let mut system = BookstoreSystem::new();
///
/// let book = system.book_client.create_book(params).await?;
/// let account = system.account_client.create_account(customer).await?;
/// let cart = system.cart_client.create_cart(account).await?;
/// system.cart_client.add_entry(cart, book).await?;
///
/// system.shutdown().await?;
/// ```
pub struct BookstoreSystem {
    pub book_client: BookClient,
    pub account_client: AccountClient,
    pub cart_client: CartClient,
    pub order_client: OrderClient,
    pub catalog_client: CatalogClient,

    /// Known accounts and books, filled in explicitly by the caller.
    pub registry: Registry,

    pub payments: PaymentProcessor,

    /// Task handles for all running actors (used for graceful shutdown)
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl BookstoreSystem {
    /// Starts a system with [`SystemConfig::default`].
    pub fn new() -> Self {
        Self::with_config(SystemConfig::default())
    }

    /// Creates and starts every actor. Must be called from within a Tokio runtime.
    pub fn with_config(config: SystemConfig) -> Self {
        // 1. Create actors (no dependencies)
        let (book_actor, book_client) = crate::book_actor::new(config.buffer_size);
        let (account_actor, account_client) = crate::account_actor::new(config.buffer_size);
        let (cart_actor, cart_client) = crate::cart_actor::new(config.buffer_size);
        let (order_actor, order_client) = crate::order_actor::new(config.buffer_size);
        let (catalog_actor, catalog_client) = crate::catalog_actor::new(config.buffer_size);

        // 2. Start actors with injected context
        let handles = vec![
            tokio::spawn(book_actor.run(())),
            tokio::spawn(account_actor.run(())),
            tokio::spawn(cart_actor.run((account_client.clone(), book_client.clone()))),
            tokio::spawn(order_actor.run((account_client.clone(), book_client.clone()))),
            tokio::spawn(catalog_actor.run(book_client.clone())),
        ];

        info!(buffer_size = config.buffer_size, "Bookstore system started");

        Self {
            book_client,
            account_client,
            cart_client,
            order_client,
            catalog_client,
            registry: Registry::new(),
            payments: PaymentProcessor::new(config.payment),
            handles,
        }
    }

    /// Gracefully shuts down the entire system.
    ///
    /// Dropping the clients closes the Cart, Order and Catalog channels. Those actors
    /// then exit and drop their contexts, which releases the last Book and Account
    /// senders, so the upstream actors exit too. Payments still in flight are not
    /// awaited.
    ///
    /// # Returns
    ///
    /// - `Ok(())` if all actors shut down cleanly
    /// - `Err(String)` if any actor task failed or panicked
    pub async fn shutdown(self) -> Result<(), String> {
        info!(
            accounts = self.registry.accounts().len(),
            books = self.registry.books().len(),
            "Shutting down system..."
        );

        drop(self.cart_client);
        drop(self.order_client);
        drop(self.catalog_client);
        drop(self.book_client);
        drop(self.account_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}

impl Default for BookstoreSystem {
    fn default() -> Self {
        Self::new()
    }
}
