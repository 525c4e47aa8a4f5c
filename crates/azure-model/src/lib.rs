//! A model provider for the Azure OpenAI chat-completions API.
//!
//! The provider performs one plain request/response call per
//! invocation. Deployments are addressed through the URL path and the
//! service API version is carried as a query parameter, which is how
//! the Azure flavor of the API differs from the stock OpenAI one.

#[macro_use]
extern crate tracing;

mod config;
mod proto;

use std::error::Error as StdError;
use std::fmt::{self, Display};
use std::sync::Arc;

use mime::Mime;
use reqwest::{Client, StatusCode, header};
use talentscout_model::{
    ChatRequest, Completion, ErrorKind, ModelProvider, ModelProviderError,
};

pub use config::{AzureConfig, AzureConfigBuilder};

/// Error type for [`AzureProvider`].
#[derive(Debug)]
pub struct Error {
    message: String,
    kind: ErrorKind,
}

impl Error {
    fn new(message: impl Into<String>, kind: ErrorKind) -> Self {
        Self {
            message: message.into(),
            kind,
        }
    }

    /// Returns the error message.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl StdError for Error {}

impl ModelProviderError for Error {
    #[inline]
    fn kind(&self) -> ErrorKind {
        self.kind
    }
}

/// Azure OpenAI model provider.
#[derive(Clone, Debug)]
pub struct AzureProvider {
    client: Client,
    config: Arc<AzureConfig>,
}

impl AzureProvider {
    /// Creates a new `AzureProvider` with the given configuration.
    #[inline]
    pub fn new(config: AzureConfig) -> Self {
        Self {
            client: Client::new(),
            config: Arc::new(config),
        }
    }
}

impl ModelProvider for AzureProvider {
    type Error = Error;

    fn complete(
        &self,
        req: &ChatRequest,
    ) -> impl Future<Output = Result<Completion, Self::Error>> + Send + 'static
    {
        let azure_req = proto::create_request(req);
        let resp_fut = self
            .client
            .post(self.config.completions_url())
            .query(&[("api-version", self.config.api_version.as_str())])
            .header("api-key", &self.config.api_key)
            .header(header::CONTENT_TYPE, "application/json")
            .header(header::ACCEPT, "application/json")
            .json(&azure_req)
            .send();

        async move {
            trace!("sending a completion request");
            let resp = match resp_fut.await {
                Ok(resp) => resp,
                Err(err) => {
                    return Err(Error::new(format!("{err}"), ErrorKind::Other));
                }
            };

            if resp.status() == StatusCode::TOO_MANY_REQUESTS {
                return Err(Error::new(
                    "the service is rate limited",
                    ErrorKind::RateLimitExceeded,
                ));
            }
            let resp = match resp.error_for_status() {
                Ok(resp) => resp,
                Err(err) => {
                    return Err(Error::new(format!("{err}"), ErrorKind::Other));
                }
            };

            let content_type = resp
                .headers()
                .get(header::CONTENT_TYPE)
                .and_then(|v| v.to_str().ok());
            let is_valid_content_type = content_type
                .and_then(|v| v.parse().ok())
                .map(|m: Mime| m.subtype() == mime::JSON)
                .unwrap_or(false);
            if !is_valid_content_type {
                return Err(Error::new(
                    format!("Unexpected content type: {content_type:?}"),
                    ErrorKind::Other,
                ));
            }

            // Here we got a successful response.
            let completion: proto::ChatCompletion = match resp.json().await {
                Ok(completion) => completion,
                Err(err) => {
                    return Err(Error::new(format!("{err}"), ErrorKind::Other));
                }
            };
            trace!("received completion: {}", completion.id);

            let Some(choice) = completion.choices.into_iter().next() else {
                return Err(Error::new(
                    "the response contains no choices",
                    ErrorKind::Other,
                ));
            };
            let finish_reason = choice
                .finish_reason
                .as_deref()
                .and_then(proto::parse_finish_reason);
            let Some(content) = choice.message.content else {
                return Err(Error::new(
                    "the response message has no content",
                    ErrorKind::Other,
                ));
            };

            Ok(Completion {
                content,
                finish_reason,
            })
        }
    }
}
