use std::pin::Pin;
use std::sync::Arc;

use talentscout_model::{
    ChatRequest, Completion, ModelProvider, ModelProviderError,
};
use tracing::Instrument;

type CompleteResult = Result<Completion, Box<dyn ModelProviderError>>;
type BoxedCompleteFuture =
    Pin<Box<dyn Future<Output = CompleteResult> + Send>>;
type HandlerFn =
    Arc<dyn Fn(ChatRequest) -> BoxedCompleteFuture + Send + Sync>;

/// A wrapper around a model provider that provides a type-erased
/// interface for the other modules.
#[derive(Clone)]
pub struct ModelClient {
    handler_fn: HandlerFn,
}

impl ModelClient {
    /// Creates a new client backed by the given provider.
    #[inline]
    pub fn new<P: ModelProvider + 'static>(provider: P) -> Self {
        // We have to erase the type `P`, since `ModelClient` doesn't have a
        // generic parameter and we don't want it either.
        let handler_fn: HandlerFn = Arc::new(move |req| {
            let fut = provider.complete(&req);
            Box::pin(
                async move {
                    trace!("got a request: {:?}", req);
                    match fut.await {
                        Ok(completion) => {
                            trace!("finished a request");
                            Ok(completion)
                        }
                        Err(err) => {
                            error!("got an error: {err:?}");
                            Err(Box::new(err) as Box<dyn ModelProviderError>)
                        }
                    }
                }
                .instrument(trace_span!("model client req")),
            )
        });
        Self { handler_fn }
    }

    /// Sends a request and returns the completed response.
    ///
    /// # Cancel safety
    ///
    /// This method is cancel safe. Dropping the returned future simply
    /// abandons the in-flight call.
    #[inline]
    pub async fn complete(&self, req: ChatRequest) -> CompleteResult {
        (self.handler_fn)(req).await
    }
}

#[cfg(test)]
mod tests {
    use talentscout_model::ChatMessage;
    use talentscout_test_model::{PresetReply, TestModelProvider};

    use super::*;

    #[tokio::test]
    async fn test_complete() {
        let mut model_provider = TestModelProvider::default();
        model_provider.add_user_input_step();
        model_provider
            .add_assistant_reply_step(PresetReply::with_content("How are you?"));

        let model_client = ModelClient::new(model_provider);

        for _ in 0..3 {
            let resp = model_client
                .complete(ChatRequest {
                    messages: vec![ChatMessage::User("Hi".to_owned())],
                    temperature: None,
                })
                .await
                .unwrap();
            assert_eq!(resp.content, "How are you?");
        }
    }

    #[tokio::test]
    async fn test_error_handling() {
        let model_provider = TestModelProvider::default();
        let model_client = ModelClient::new(model_provider);
        let resp_or_err = model_client
            .complete(ChatRequest {
                messages: vec![ChatMessage::User("Hi".to_owned())],
                temperature: None,
            })
            .await;
        assert!(matches!(resp_or_err, Err(_)));
    }
}
