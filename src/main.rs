use bookstore::clients::ActorClient;
use bookstore::lifecycle::{setup_tracing, BookstoreSystem};
use bookstore::model::{AccountCreate, BookCreate, Permission};
use tracing::{error, info, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    info!("Starting bookstore demo");

    let mut system = BookstoreSystem::new();

    // Books
    let span = tracing::info_span!("books");
    let (gatsby, mockingbird) = async {
        let gatsby = system
            .book_client
            .create_book(BookCreate::new(
                "The Great Gatsby",
                "F. Scott Fitzgerald",
                "9780743273565",
                10.99,
                5,
            ))
            .await
            .map_err(|e| e.to_string())?;
        let mockingbird = system
            .book_client
            .create_book(BookCreate::new(
                "To Kill a Mockingbird",
                "Harper Lee",
                "9780061120084",
                12.49,
                3,
            ))
            .await
            .map_err(|e| e.to_string())?;

        let price = system
            .book_client
            .apply_discount(gatsby, 10.0)
            .await
            .map_err(|e| e.to_string())?;
        info!(book_id = %gatsby, price, "Discounted price: ${:.2}", price);

        Ok::<_, String>((gatsby, mockingbird))
    }
    .instrument(span)
    .await?;

    // Accounts
    let customer = system
        .account_client
        .create_account(AccountCreate::customer(
            "John Doe",
            "john@example.com",
            "user123",
        ))
        .await
        .map_err(|e| e.to_string())?;
    let admin = system
        .account_client
        .create_account(AccountCreate::administrator(
            "Jane Smith",
            "jane@example.com",
            "admin456",
            [Permission::AddBook, Permission::RemoveBook],
        ))
        .await
        .map_err(|e| e.to_string())?;
    info!(%customer, %admin, "Accounts created");

    // Cart
    let span = tracing::info_span!("cart", account_id = %customer);
    let (cart, cart_total) = async {
        let cart = system
            .cart_client
            .create_cart(customer)
            .await
            .map_err(|e| e.to_string())?;
        for book in [gatsby, mockingbird] {
            let status = system
                .cart_client
                .add_entry(cart, book)
                .await
                .map_err(|e| e.to_string())?;
            info!(%book, ?status, "Add to cart");
        }
        let status = system
            .cart_client
            .remove_entry(cart, gatsby)
            .await
            .map_err(|e| e.to_string())?;
        info!(book = %gatsby, ?status, "Remove from cart");

        let total = system
            .cart_client
            .total_price(cart)
            .await
            .map_err(|e| e.to_string())?;
        info!(%cart, total, "Cart total: ${:.2}", total);

        Ok::<_, String>((cart, total))
    }
    .instrument(span)
    .await?;

    // Order
    let span = tracing::info_span!("order_processing");
    let order_total = async {
        let entries = system
            .cart_client
            .entries(cart)
            .await
            .map_err(|e| e.to_string())?;
        let order_id = system
            .order_client
            .create_order(customer, entries)
            .await
            .map_err(|e| e.to_string())?;
        let order = system
            .order_client
            .fetch(order_id)
            .await
            .map_err(|e| e.to_string())?;
        info!(%order_id, entries = ?order.entries, total = order.total_price, "Order placed");
        Ok::<_, String>(order.total_price)
    }
    .instrument(span)
    .await?;
    info!(cart_total, order_total, "Checkout");

    // Catalog
    let span = tracing::info_span!("catalog");
    async {
        let catalog = system
            .catalog_client
            .create_catalog("Classics")
            .await
            .map_err(|e| e.to_string())?;
        for book in [gatsby, mockingbird] {
            system
                .catalog_client
                .add_entry(catalog, book)
                .await
                .map_err(|e| e.to_string())?;
        }

        let results = system
            .catalog_client
            .search(catalog, "gatsby")
            .await
            .map_err(|e| e.to_string())?;
        for book in &results {
            info!(book_id = %book.id, "Search result: {}", book.info());
        }

        system
            .account_client
            .manage_books(admin, catalog)
            .await
            .map_err(|e| e.to_string())
    }
    .instrument(span)
    .await?;

    // Registry
    system.registry.register_account(customer);
    system.registry.register_books([gatsby, mockingbird]);
    info!(
        accounts = ?system.registry.accounts(),
        books = ?system.registry.books(),
        "Registry updated"
    );

    // Payment
    let span = tracing::info_span!("checkout", total = order_total);
    let outcome = system
        .payments
        .process_payment(order_total)
        .outcome()
        .instrument(span)
        .await;

    match outcome {
        Ok(message) => info!("{}", message),
        Err(e) => error!(error = %e, "Payment failed"),
    }

    system.shutdown().await?;

    info!("Bookstore demo completed");
    Ok(())
}
