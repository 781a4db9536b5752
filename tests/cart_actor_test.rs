use bookstore::account_actor::AccountError;
use bookstore::book_actor::{BookActionResult, BookError};
use bookstore::cart_actor::CartError;
use bookstore::clients::{AccountClient, ActorClient, BookClient};
use bookstore::framework::mock::MockClient;
use bookstore::model::{
    Account, AccountCreate, AccountId, Book, BookCreate, BookId, CartStatus,
};
use bookstore::order_actor::OrderError;

fn john() -> Account {
    Account::new(
        AccountId(0),
        AccountCreate::customer("John Doe", "john@example.com", "user123"),
    )
}

fn shelf() -> Vec<Book> {
    vec![
        Book::new(
            BookId(0),
            BookCreate::new("The Great Gatsby", "F. Scott Fitzgerald", "9780743273565", 10.0, 5),
        ),
        Book::new(
            BookId(1),
            BookCreate::new("To Kill a Mockingbird", "Harper Lee", "9780061120084", 12.5, 0),
        ),
    ]
}

/// Real Cart actor with mocked Account and Book actors.
///
/// Pattern 2: Actor + Mocks
/// - Real Cart actor (on_create validation and the Add/Remove bookkeeping)
/// - Mocked dependencies answer with scripted stock decisions
#[tokio::test]
async fn test_cart_actor_with_mocked_dependencies() {
    let mut account_mock = MockClient::<Account>::new();
    let mut book_mock = MockClient::<Book>::new();

    // Cart::on_create looks the account up
    account_mock.expect_get(AccountId(0)).return_ok(Some(john()));

    // Add gatsby (granted), add mockingbird (refused), remove gatsby, re-add gatsby
    book_mock
        .expect_action(BookId(0))
        .return_ok(BookActionResult::TakeCopy(true));
    book_mock
        .expect_action(BookId(1))
        .return_ok(BookActionResult::TakeCopy(false));
    book_mock
        .expect_action(BookId(0))
        .return_ok(BookActionResult::ReturnCopy(5));
    book_mock
        .expect_action(BookId(0))
        .return_ok(BookActionResult::TakeCopy(true));
    // TotalPrice resolves the held entries with one List
    book_mock.expect_list().return_ok(shelf());

    let account_client = AccountClient::new(account_mock.client());
    let book_client = BookClient::new(book_mock.client());

    let (cart_actor, cart_client) = bookstore::cart_actor::new(8);
    let actor_handle = tokio::spawn(cart_actor.run((account_client, book_client)));

    let cart = cart_client.create_cart(AccountId(0)).await.unwrap();

    assert_eq!(cart_client.add_entry(cart, BookId(0)).await.unwrap(), CartStatus::Added);
    assert_eq!(
        cart_client.add_entry(cart, BookId(1)).await.unwrap(),
        CartStatus::OutOfStock
    );
    assert_eq!(cart_client.entries(cart).await.unwrap(), vec![BookId(0)]);

    // Not held: answered without asking the Book actor
    assert_eq!(
        cart_client.remove_entry(cart, BookId(1)).await.unwrap(),
        CartStatus::NotInCart
    );
    assert_eq!(
        cart_client.remove_entry(cart, BookId(0)).await.unwrap(),
        CartStatus::Removed
    );
    assert!(cart_client.entries(cart).await.unwrap().is_empty());

    assert_eq!(cart_client.add_entry(cart, BookId(0)).await.unwrap(), CartStatus::Added);
    assert_eq!(cart_client.total_price(cart).await.unwrap(), 10.0);

    let snapshot = cart_client.fetch(cart).await.unwrap();
    assert_eq!(snapshot.account_id, AccountId(0));
    assert_eq!(snapshot.entries, vec![BookId(0)]);

    account_mock.verify();
    book_mock.verify();

    drop(cart_client);
    actor_handle.await.unwrap();
}

#[tokio::test]
async fn test_cart_for_unknown_account_is_rejected() {
    let mut account_mock = MockClient::<Account>::new();
    let book_mock = MockClient::<Book>::new();
    account_mock.expect_get(AccountId(7)).return_ok(None);

    let (cart_actor, cart_client) = bookstore::cart_actor::new(8);
    let actor_handle = tokio::spawn(cart_actor.run((
        AccountClient::new(account_mock.client()),
        BookClient::new(book_mock.client()),
    )));

    let err = cart_client.create_cart(AccountId(7)).await.unwrap_err();
    assert_eq!(err, CartError::InvalidAccount(AccountId(7)));

    // Nothing was stored
    assert!(cart_client.list().await.unwrap().is_empty());

    account_mock.verify();
    drop(cart_client);
    actor_handle.await.unwrap();
}

#[tokio::test]
async fn test_unknown_book_surfaces_as_book_error() {
    let mut account_mock = MockClient::<Account>::new();
    let mut book_mock = MockClient::<Book>::new();
    account_mock.expect_get(AccountId(0)).return_ok(Some(john()));
    book_mock
        .expect_action(BookId(9))
        .return_err(bookstore::framework::FrameworkError::NotFound("book_9".to_string()));

    let (cart_actor, cart_client) = bookstore::cart_actor::new(8);
    let actor_handle = tokio::spawn(cart_actor.run((
        AccountClient::new(account_mock.client()),
        BookClient::new(book_mock.client()),
    )));

    let cart = cart_client.create_cart(AccountId(0)).await.unwrap();
    let err = cart_client.add_entry(cart, BookId(9)).await.unwrap_err();
    assert_eq!(err, CartError::Book(BookError::NotFound(BookId(9))));
    assert!(cart_client.entries(cart).await.unwrap().is_empty());

    book_mock.verify();
    drop(cart_client);
    actor_handle.await.unwrap();
}

/// Real Order actor with mocked dependencies: the total is computed once, at creation.
#[tokio::test]
async fn test_order_actor_prices_entries_at_creation() {
    let mut account_mock = MockClient::<Account>::new();
    let mut book_mock = MockClient::<Book>::new();
    account_mock.expect_get(AccountId(0)).return_ok(Some(john()));
    book_mock.expect_list().return_ok(shelf());

    let (order_actor, order_client) = bookstore::order_actor::new(8);
    let actor_handle = tokio::spawn(order_actor.run((
        AccountClient::new(account_mock.client()),
        BookClient::new(book_mock.client()),
    )));

    let order_id = order_client
        .create_order(AccountId(0), vec![BookId(1), BookId(0), BookId(1)])
        .await
        .unwrap();
    let order = order_client.fetch(order_id).await.unwrap();
    assert_eq!(order.entries, vec![BookId(1), BookId(0), BookId(1)]);
    assert_eq!(order.total_price, 35.0);

    account_mock.verify();
    book_mock.verify();
    drop(order_client);
    actor_handle.await.unwrap();
}

#[tokio::test]
async fn test_order_with_unknown_book_or_account_fails() {
    let mut account_mock = MockClient::<Account>::new();
    let mut book_mock = MockClient::<Book>::new();
    account_mock.expect_get(AccountId(0)).return_ok(Some(john()));
    book_mock.expect_list().return_ok(shelf());
    account_mock.expect_get(AccountId(3)).return_ok(None);

    let (order_actor, order_client) = bookstore::order_actor::new(8);
    let actor_handle = tokio::spawn(order_actor.run((
        AccountClient::new(account_mock.client()),
        BookClient::new(book_mock.client()),
    )));

    let err = order_client
        .create_order(AccountId(0), vec![BookId(0), BookId(4)])
        .await
        .unwrap_err();
    assert_eq!(err, OrderError::InvalidBook(BookId(4)));

    let err = order_client
        .create_order(AccountId(3), vec![BookId(0)])
        .await
        .unwrap_err();
    assert_eq!(err, OrderError::InvalidAccount(AccountId(3)));

    assert!(order_client.list().await.unwrap().is_empty());

    account_mock.verify();
    book_mock.verify();
    drop(order_client);
    actor_handle.await.unwrap();
}

#[tokio::test]
async fn test_account_actor_failure_is_wrapped() {
    let mut account_mock = MockClient::<Account>::new();
    let book_mock = MockClient::<Book>::new();
    account_mock
        .expect_get(AccountId(0))
        .return_err(bookstore::framework::FrameworkError::ActorClosed);

    let (cart_actor, cart_client) = bookstore::cart_actor::new(8);
    let actor_handle = tokio::spawn(cart_actor.run((
        AccountClient::new(account_mock.client()),
        BookClient::new(book_mock.client()),
    )));

    let err = cart_client.create_cart(AccountId(0)).await.unwrap_err();
    assert!(matches!(
        err,
        CartError::Account(AccountError::ActorCommunicationError(_))
    ));

    drop(cart_client);
    actor_handle.await.unwrap();
}
