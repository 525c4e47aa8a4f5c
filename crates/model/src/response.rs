use serde::{Deserialize, Serialize};

/// A completed response from the model provider.
///
/// Providers in this workspace make exactly one request/response call
/// per invocation, so the response is a plain value rather than a
/// stream of deltas.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Completion {
    /// The generated text, unmodified.
    pub content: String,
    /// Why the model stopped, when the service reports it.
    pub finish_reason: Option<FinishReason>,
}

/// The reason why a model response has finished.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FinishReason {
    /// The model has finished generating text.
    Stop,
    /// The token limit was reached before the model finished.
    Length,
    /// The service withheld part of the output.
    ContentFilter,
}
