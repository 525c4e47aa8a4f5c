//! A local fake model for testing purpose.

mod preset;

use std::collections::HashMap;
use std::error::Error as StdError;
use std::fmt::{self, Debug, Display, Formatter};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use talentscout_model::{
    ChatRequest, Completion, ErrorKind, ModelProvider, ModelProviderError,
};
use tokio::time::sleep;

pub use preset::*;

#[derive(Debug)]
pub struct Error {
    #[allow(dead_code)]
    message: &'static str,
    kind: ErrorKind,
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Debug::fmt(self, f)
    }
}

impl StdError for Error {}

impl ModelProviderError for Error {
    #[inline]
    fn kind(&self) -> ErrorKind {
        self.kind
    }
}

#[derive(Clone)]
enum ConversationStep {
    UserInput,
    AssistantReply(PresetReply),
}

/// A local fake model for testing purpose.
///
/// Before sending requests, you need to setup the conversation script,
/// which is how the model should respond to a request. The added steps
/// will be selected according to the history messages in your request.
/// If there are no enough steps in the script, an error will be
/// returned.
///
/// # Note
///
/// This type is not optimized for production use, there are heavy
/// memory copies involved. You should only use it for testing.
#[derive(Clone, Default)]
pub struct TestModelProvider {
    conversation_script: Vec<ConversationStep>,
    attempts: Arc<Mutex<HashMap<usize, u64>>>,
    delay: Option<Duration>,
}

impl TestModelProvider {
    #[inline]
    pub fn add_assistant_reply_step(&mut self, preset: PresetReply) {
        self.conversation_script
            .push(ConversationStep::AssistantReply(preset));
    }

    #[inline]
    pub fn add_user_input_step(&mut self) {
        self.conversation_script.push(ConversationStep::UserInput);
    }

    #[inline]
    pub fn set_delay(&mut self, duration: Duration) {
        self.delay = Some(duration);
    }

    fn resolve_step(&self, step_idx: usize) -> Result<Completion, Error> {
        let Some(step) = self.conversation_script.get(step_idx) else {
            return Err(Error {
                message: "no enough steps",
                kind: ErrorKind::RateLimitExceeded,
            });
        };

        let preset = match step {
            ConversationStep::UserInput => {
                return Err(Error {
                    message: "not an assistant reply step",
                    kind: ErrorKind::ContentFiltered,
                });
            }
            ConversationStep::AssistantReply(preset) => preset,
        };

        if let Some(failures) = preset.failures {
            let mut attempts = self.attempts.lock().unwrap();
            let attempt = attempts.entry(step_idx).or_insert(0);
            *attempt += 1;
            if failures == 0 || *attempt <= failures {
                return Err(Error {
                    message: "scripted failure",
                    kind: ErrorKind::Other,
                });
            }
        }

        Ok(Completion {
            content: preset.content.clone(),
            finish_reason: preset.finish_reason,
        })
    }
}

impl ModelProvider for TestModelProvider {
    type Error = Error;

    fn complete(
        &self,
        req: &ChatRequest,
    ) -> impl Future<Output = Result<Completion, Self::Error>> + Send + 'static
    {
        let this = self.clone();
        let step_idx = req.messages.len();
        async move {
            sleep(this.delay.unwrap_or(Duration::from_millis(1))).await;
            this.resolve_step(step_idx)
        }
    }
}
