use bookstore::account_actor::AccountError;
use bookstore::book_actor::BookError;
use bookstore::cart_actor::CartError;
use bookstore::clients::ActorClient;
use bookstore::lifecycle::{BookstoreSystem, SystemConfig};
use bookstore::model::{AccountCreate, AccountId, BookCreate, BookId, CartStatus, Permission};
use bookstore::order_actor::OrderError;
use bookstore::payment::{PaymentConfig, PaymentError, PaymentState};

fn gatsby() -> BookCreate {
    BookCreate::new(
        "The Great Gatsby",
        "F. Scott Fitzgerald",
        "9780743273565",
        10.99,
        5,
    )
}

fn mockingbird() -> BookCreate {
    BookCreate::new(
        "To Kill a Mockingbird",
        "Harper Lee",
        "9780061120084",
        12.49,
        3,
    )
}

/// Full end-to-end run of the demo sequence with all real actors.
#[tokio::test]
async fn test_full_bookstore_scenario() {
    let mut system = BookstoreSystem::with_config(SystemConfig::instant(42));

    // Books and discount
    let entry1 = system.book_client.create_book(gatsby()).await.expect("Failed to create book");
    let entry2 = system
        .book_client
        .create_book(mockingbird())
        .await
        .expect("Failed to create book");
    let price = system.book_client.apply_discount(entry1, 10.0).await.unwrap();
    assert!((price - 9.891).abs() < 1e-9);

    // Accounts
    let john = system
        .account_client
        .create_account(AccountCreate::customer("John Doe", "john@example.com", "user123"))
        .await
        .expect("Failed to create account");
    let jane = system
        .account_client
        .create_account(AccountCreate::administrator(
            "Jane Smith",
            "jane@example.com",
            "admin456",
            [Permission::AddBook, Permission::RemoveBook],
        ))
        .await
        .expect("Failed to create administrator");
    let retrieved = system.account_client.fetch(jane).await.unwrap();
    assert_eq!(retrieved.details(), "Jane Smith (jane@example.com)");
    assert!(retrieved.has_permission(Permission::RemoveBook));

    // Cart: add both, remove the first
    let cart = system.cart_client.create_cart(john).await.expect("Failed to create cart");
    assert_eq!(system.cart_client.add_entry(cart, entry1).await.unwrap(), CartStatus::Added);
    assert_eq!(system.cart_client.add_entry(cart, entry2).await.unwrap(), CartStatus::Added);
    assert_eq!(system.book_client.check_stock(entry1).await.unwrap(), 4);
    assert_eq!(system.book_client.check_stock(entry2).await.unwrap(), 2);

    assert_eq!(
        system.cart_client.remove_entry(cart, entry1).await.unwrap(),
        CartStatus::Removed
    );
    assert_eq!(system.book_client.check_stock(entry1).await.unwrap(), 5);
    assert_eq!(system.cart_client.entries(cart).await.unwrap(), vec![entry2]);

    let cart_total = system.cart_client.total_price(cart).await.unwrap();
    assert!((cart_total - 12.49).abs() < 1e-9);

    // Order from the cart's remaining entries
    let entries = system.cart_client.entries(cart).await.unwrap();
    let order_id = system
        .order_client
        .create_order(john, entries)
        .await
        .expect("Failed to create order");
    let order = system.order_client.fetch(order_id).await.unwrap();
    assert_eq!(order.account_id, john);
    assert_eq!(order.entries, vec![entry2]);
    assert!((order.total_price - 12.49).abs() < 1e-9);

    // A later price change does not reach the order
    system.book_client.apply_discount(entry2, 50.0).await.unwrap();
    let order = system.order_client.fetch(order_id).await.unwrap();
    assert!((order.total_price - 12.49).abs() < 1e-9);

    // Catalog search
    let catalog = system.catalog_client.create_catalog("Classics").await.unwrap();
    system.catalog_client.add_entry(catalog, entry1).await.unwrap();
    system.catalog_client.add_entry(catalog, entry2).await.unwrap();

    let lower = system.catalog_client.search(catalog, "gatsby").await.unwrap();
    let upper = system.catalog_client.search(catalog, "GATSBY").await.unwrap();
    assert_eq!(lower.len(), 1);
    assert_eq!(lower[0].id, entry1);
    assert_eq!(lower, upper);

    let everything = system.catalog_client.search(catalog, "").await.unwrap();
    let ids: Vec<BookId> = everything.iter().map(|book| book.id).collect();
    assert_eq!(ids, vec![entry1, entry2]);
    assert!(system.catalog_client.search(catalog, "tolstoy").await.unwrap().is_empty());

    system.account_client.manage_books(jane, catalog).await.unwrap();

    // Registry
    system.registry.register_account(john);
    system.registry.register_books([entry1, entry2]);
    assert_eq!(system.registry.accounts(), &[john]);
    assert_eq!(system.registry.books(), &[entry1, entry2]);

    // Payment resolves to exactly one of the two outcomes
    match system.payments.process_payment(order.total_price).outcome().await {
        Ok(message) => assert_eq!(message, "Payment successful"),
        Err(e) => assert_eq!(e, PaymentError::Declined("Payment failed".to_string())),
    }

    system.shutdown().await.expect("Shutdown failed");
}

#[tokio::test]
async fn test_out_of_stock_leaves_cart_and_stock_unchanged() {
    let system = BookstoreSystem::new();
    let john = system
        .account_client
        .create_account(AccountCreate::customer("John Doe", "john@example.com", "user123"))
        .await
        .unwrap();
    let rare = system
        .book_client
        .create_book(BookCreate::new("Rare Folio", "Anonymous", "0000000000", 99.0, 1))
        .await
        .unwrap();
    let cart = system.cart_client.create_cart(john).await.unwrap();

    assert_eq!(system.cart_client.add_entry(cart, rare).await.unwrap(), CartStatus::Added);
    assert_eq!(system.book_client.check_stock(rare).await.unwrap(), 0);

    assert_eq!(
        system.cart_client.add_entry(cart, rare).await.unwrap(),
        CartStatus::OutOfStock
    );
    assert_eq!(system.cart_client.entries(cart).await.unwrap().len(), 1);
    assert_eq!(system.book_client.check_stock(rare).await.unwrap(), 0);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_remove_absent_entry_and_round_trip() {
    let system = BookstoreSystem::new();
    let john = system
        .account_client
        .create_account(AccountCreate::customer("John Doe", "john@example.com", "user123"))
        .await
        .unwrap();
    let entry1 = system.book_client.create_book(gatsby()).await.unwrap();
    let entry2 = system.book_client.create_book(mockingbird()).await.unwrap();
    let cart = system.cart_client.create_cart(john).await.unwrap();

    system.cart_client.add_entry(cart, entry1).await.unwrap();
    let before = system.cart_client.entries(cart).await.unwrap();

    assert_eq!(
        system.cart_client.remove_entry(cart, entry2).await.unwrap(),
        CartStatus::NotInCart
    );
    assert_eq!(system.cart_client.entries(cart).await.unwrap(), before);
    assert_eq!(system.book_client.check_stock(entry2).await.unwrap(), 3);

    // add-then-remove restores both the sequence and the stock
    system.cart_client.add_entry(cart, entry2).await.unwrap();
    system.cart_client.remove_entry(cart, entry2).await.unwrap();
    assert_eq!(system.cart_client.entries(cart).await.unwrap(), before);
    assert_eq!(system.book_client.check_stock(entry2).await.unwrap(), 3);

    // Duplicates are allowed and removal takes the first occurrence
    system.cart_client.add_entry(cart, entry2).await.unwrap();
    system.cart_client.add_entry(cart, entry1).await.unwrap();
    system.cart_client.remove_entry(cart, entry1).await.unwrap();
    assert_eq!(
        system.cart_client.entries(cart).await.unwrap(),
        vec![entry2, entry1]
    );

    let total = system.cart_client.total_price(cart).await.unwrap();
    assert!((total - (12.49 + 10.99)).abs() < 1e-9);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_only_administrators_manage_books() {
    let system = BookstoreSystem::new();
    let john = system
        .account_client
        .create_account(AccountCreate::customer("John Doe", "john@example.com", "user123"))
        .await
        .unwrap();
    let jane = system
        .account_client
        .create_account(AccountCreate::administrator(
            "Jane Smith",
            "jane@example.com",
            "admin456",
            [Permission::AddBook],
        ))
        .await
        .unwrap();
    let catalog = system.catalog_client.create_catalog("Staff Picks").await.unwrap();

    assert!(system.account_client.manage_books(jane, catalog).await.is_ok());
    assert_eq!(
        system.account_client.manage_books(john, catalog).await,
        Err(AccountError::NotPermitted(john))
    );
    assert_eq!(
        system.account_client.manage_books(AccountId(99), catalog).await,
        Err(AccountError::NotFound(AccountId(99)))
    );

    // Managing is an audit only; the catalog is unchanged
    assert!(system.catalog_client.entries(catalog).await.unwrap().is_empty());

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_unknown_references_are_typed_errors() {
    let system = BookstoreSystem::new();
    let entry1 = system.book_client.create_book(gatsby()).await.unwrap();

    assert_eq!(
        system.cart_client.create_cart(AccountId(5)).await,
        Err(CartError::InvalidAccount(AccountId(5)))
    );
    assert_eq!(
        system.order_client.create_order(AccountId(5), vec![entry1]).await,
        Err(OrderError::InvalidAccount(AccountId(5)))
    );
    assert_eq!(
        system.book_client.check_stock(BookId(8)).await,
        Err(BookError::NotFound(BookId(8)))
    );

    let catalog = system.catalog_client.create_catalog("Empty").await.unwrap();
    assert!(system.catalog_client.add_entry(catalog, BookId(8)).await.is_err());
    assert!(system.catalog_client.entries(catalog).await.unwrap().is_empty());

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_book_formats() {
    let system = BookstoreSystem::new();
    let hardback = system
        .book_client
        .create_book(BookCreate::physical("Dune", "Frank Herbert", "9780441013593", 9.99, 2, 3.0))
        .await
        .unwrap();
    let ebook = system
        .book_client
        .create_book(BookCreate::digital("Neuromancer", "William Gibson", "9780441569595", 4.99, 10, 2.5))
        .await
        .unwrap();

    assert_eq!(system.book_client.shipping_cost(hardback).await.unwrap(), 1.5);
    assert!(system.book_client.download(ebook).await.is_ok());
    assert!(matches!(
        system.book_client.shipping_cost(ebook).await,
        Err(BookError::UnsupportedFormat { .. })
    ));
    assert!(matches!(
        system.book_client.download(hardback).await,
        Err(BookError::UnsupportedFormat { .. })
    ));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_concurrent_carts_never_oversell() {
    let system = BookstoreSystem::new();
    let last_copies = system
        .book_client
        .create_book(BookCreate::new("Limited Run", "Small Press", "1111111111", 20.0, 3))
        .await
        .unwrap();

    let mut tasks = Vec::new();
    for n in 0..10 {
        let account_client = system.account_client.clone();
        let cart_client = system.cart_client.clone();
        tasks.push(tokio::spawn(async move {
            let account = account_client
                .create_account(AccountCreate::customer(
                    format!("Reader {n}"),
                    format!("reader{n}@example.com"),
                    format!("r{n}"),
                ))
                .await
                .unwrap();
            let cart = cart_client.create_cart(account).await.unwrap();
            cart_client.add_entry(cart, last_copies).await.unwrap()
        }));
    }

    let mut added = 0;
    for task in tasks {
        if task.await.unwrap() == CartStatus::Added {
            added += 1;
        }
    }

    assert_eq!(added, 3);
    assert_eq!(system.book_client.check_stock(last_copies).await.unwrap(), 0);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_payment_state_is_observable() {
    let config = SystemConfig::default().with_payment(
        PaymentConfig::default()
            .with_delay(std::time::Duration::from_millis(20))
            .with_success_threshold(1.0),
    );
    let system = BookstoreSystem::with_config(config);

    let mut handle = system.payments.process_payment(12.49);
    let mut state = handle.state();
    while !state.is_terminal() {
        state = handle.changed().await;
    }
    assert_eq!(state, PaymentState::Succeeded("Payment successful".to_string()));
    assert_eq!(handle.outcome().await, Ok("Payment successful".to_string()));

    system.shutdown().await.unwrap();
}
