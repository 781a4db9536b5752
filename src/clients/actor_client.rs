use crate::framework::{ActorEntity, FrameworkError, ResourceClient};
use async_trait::async_trait;

/// Trait for resource-specific clients to inherit standard read operations.
///
/// This trait reduces boilerplate by providing default implementations for
/// `get`, `fetch` and `list`, and a uniform way to turn a [`FrameworkError`]
/// into the resource's own error type.
#[async_trait]
pub trait ActorClient<T: ActorEntity>: Send + Sync {
    /// The resource-specific error type.
    type Error: From<String> + Send + Sync;

    /// Access the inner generic ResourceClient.
    fn inner(&self) -> &ResourceClient<T>;

    /// Map framework errors to the specific resource error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// The resource's "no such entity" error.
    fn not_found(id: T::Id) -> Self::Error;

    /// Like [`map_error`](Self::map_error), but reports a missing entity as [`not_found`](Self::not_found).
    fn map_error_for(id: T::Id, e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound(_) => Self::not_found(id),
            other => Self::map_error(other),
        }
    }

    /// Fetch an entity by ID.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    /// Fetch an entity by ID, failing if it does not exist.
    #[tracing::instrument(skip(self))]
    async fn fetch(&self, id: T::Id) -> Result<T, Self::Error> {
        tracing::debug!("Sending request");
        self.inner()
            .get(id)
            .await
            .map_err(Self::map_error)?
            .ok_or_else(|| Self::not_found(id))
    }

    /// Every entity in insertion order.
    #[tracing::instrument(skip(self))]
    async fn list(&self) -> Result<Vec<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().list().await.map_err(Self::map_error)
    }
}

/// Turns a [`FrameworkError`] into the resource error `E`.
///
/// Errors raised by the entity itself travel through the actor boxed in
/// [`FrameworkError::EntityError`]; they are unboxed back into `E` when the type
/// matches. Everything else becomes `E::from(message)`.
pub fn recover_error<E>(e: FrameworkError) -> E
where
    E: std::error::Error + From<String> + 'static,
{
    match e {
        FrameworkError::EntityError(inner) => match inner.downcast::<E>() {
            Ok(typed) => *typed,
            Err(other) => E::from(other.to_string()),
        },
        other => E::from(other.to_string()),
    }
}
