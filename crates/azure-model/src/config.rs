use std::fmt::Debug;

/// Builder for [`AzureConfig`].
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct AzureConfigBuilder {
    api_key: String,
    endpoint: String,
    deployment: Option<String>,
    api_version: Option<String>,
}

impl AzureConfigBuilder {
    /// Creates a builder with the given API key and resource endpoint.
    #[inline]
    pub fn with_api_key<K, E>(api_key: K, endpoint: E) -> Self
    where
        K: Into<String>,
        E: Into<String>,
    {
        Self {
            api_key: api_key.into(),
            endpoint: endpoint.into(),
            deployment: None,
            api_version: None,
        }
    }

    /// Sets the deployment to send requests to.
    #[inline]
    pub fn with_deployment<S: Into<String>>(mut self, deployment: S) -> Self {
        self.deployment = Some(deployment.into());
        self
    }

    /// Sets the service API version.
    #[inline]
    pub fn with_api_version<S: Into<String>>(
        mut self,
        api_version: S,
    ) -> Self {
        self.api_version = Some(api_version.into());
        self
    }

    /// Builds the configuration.
    #[inline]
    pub fn build(self) -> AzureConfig {
        AzureConfig {
            api_key: self.api_key,
            // The endpoint is origin-only, a trailing slash would break
            // the path we join onto it.
            endpoint: self.endpoint.trim_end_matches('/').to_string(),
            deployment: self
                .deployment
                .unwrap_or_else(|| "gpt-4o-mini".to_string()),
            api_version: self
                .api_version
                .unwrap_or_else(|| "2024-06-01".to_string()),
        }
    }
}

impl Debug for AzureConfigBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AzureConfigBuilder")
            .field("api_key", &"<redacted>")
            .field("endpoint", &self.endpoint)
            .field("deployment", &self.deployment)
            .field("api_version", &self.api_version)
            .finish()
    }
}

/// Configuration for the Azure OpenAI provider.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct AzureConfig {
    pub(crate) api_key: String,
    pub(crate) endpoint: String,
    pub(crate) deployment: String,
    pub(crate) api_version: String,
}

impl AzureConfig {
    /// Returns the full chat-completions URL for this configuration,
    /// without the `api-version` query parameter.
    pub(crate) fn completions_url(&self) -> String {
        format!(
            "{}/openai/deployments/{}/chat/completions",
            self.endpoint, self.deployment
        )
    }
}

impl Debug for AzureConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AzureConfig")
            .field("api_key", &"<redacted>")
            .field("endpoint", &self.endpoint)
            .field("deployment", &self.deployment)
            .field("api_version", &self.api_version)
            .finish()
    }
}
