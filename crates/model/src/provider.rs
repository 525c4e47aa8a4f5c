use std::error::Error;

use crate::error::ErrorKind;
use crate::request::ChatRequest;
use crate::response::Completion;

/// The error type for a model provider.
pub trait ModelProviderError: Error + Send + Sync + 'static {
    /// Returns the kind of this error.
    fn kind(&self) -> ErrorKind;
}

/// A type that represents a model provider, which is an entry for
/// sending completion requests to an inference service.
///
/// Once the provider is created, it should behave like a stateless
/// object. It can still have internal state, but callers should not
/// rely on it, and the provider should be prepared for being dropped
/// anytime.
pub trait ModelProvider: Send + Sync {
    /// The error type that may be returned by the provider.
    type Error: ModelProviderError;

    /// Sends a request to the model and resolves to the completed
    /// response.
    fn complete(
        &self,
        req: &ChatRequest,
    ) -> impl Future<Output = Result<Completion, Self::Error>> + Send + 'static;
}
