use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;
use genai::Client;
use genai::chat::{ChatMessage, ChatOptions, ChatRequest};
use tracing::{debug, error, instrument};

use super::error::OracleError;
use super::types::OracleRequest;

/// A text-generation service that answers an [`OracleRequest`] with free-form text.
///
/// Implementations make exactly one call per `invoke` and never retry.
#[async_trait]
pub trait Oracle: Send + Sync {
    async fn invoke(&self, request: &OracleRequest) -> Result<String, OracleError>;
}

/// [`Oracle`] backed by a `genai` chat client.
#[derive(Clone)]
pub struct GenaiOracle {
    client: Client,
    model: String,
    timeout: Duration,
}

impl GenaiOracle {
    /// Uses `Client::default()`, which reads provider keys from the environment.
    pub fn new(model: impl Into<String>, timeout: Duration) -> Self {
        Self::with_client(Client::default(), model, timeout)
    }

    pub fn with_client(client: Client, model: impl Into<String>, timeout: Duration) -> Self {
        Self {
            client,
            model: model.into(),
            timeout,
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

#[async_trait]
impl Oracle for GenaiOracle {
    #[instrument(skip(self, request), fields(model = %self.model, max_tokens = request.max_output_tokens))]
    async fn invoke(&self, request: &OracleRequest) -> Result<String, OracleError> {
        let chat_req = ChatRequest::new(vec![ChatMessage::user(request.prompt.clone())])
            .with_system(request.system_instructions.clone());
        let options = ChatOptions::default()
            .with_max_tokens(request.max_output_tokens)
            .with_temperature(request.temperature);

        let response = bounded(
            self.timeout,
            self.client.exec_chat(&self.model, chat_req, Some(&options)),
        )
        .await?
        .map_err(|e| {
            error!("Oracle provider error: {}", e);
            OracleError::CallFailed {
                reason: e.to_string(),
            }
        })?;

        let text = response.first_text().unwrap_or_default().to_string();
        debug!(chars = text.len(), "Oracle responded");
        Ok(text)
    }
}

/// Runs `fut` under a time budget, mapping expiry to [`OracleError::Timeout`].
pub(crate) async fn bounded<F, T>(after: Duration, fut: F) -> Result<T, OracleError>
where
    F: Future<Output = T>,
{
    tokio::time::timeout(after, fut)
        .await
        .map_err(|_| OracleError::Timeout { after })
}
