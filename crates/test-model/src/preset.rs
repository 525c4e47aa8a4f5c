use serde::{Deserialize, Serialize};
use talentscout_model::FinishReason;

/// The preset reply for an assistant step.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PresetReply {
    /// The text the fake model replies with.
    pub content: String,
    /// The finish reason attached to the reply.
    pub finish_reason: Option<FinishReason>,
    /// If set, the request will fail in the first `failures` attempts.
    /// `Some(0)` means the request will fail infinitely.
    pub failures: Option<u64>,
}

impl PresetReply {
    /// Creates a `PresetReply` with the specified text.
    #[inline]
    pub fn with_content(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            finish_reason: Some(FinishReason::Stop),
            failures: None,
        }
    }

    /// Sets failure times before a successful reply. `0` means the
    /// reply will always be a failure.
    #[inline]
    pub fn with_failures(mut self, failures: u64) -> Self {
        self.failures = Some(failures);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialize_deserialize() {
        let reply =
            PresetReply::with_content("I have left a message for you.")
                .with_failures(2);

        let serialized = serde_json::to_string(&reply).unwrap();
        let deserialized: PresetReply =
            serde_json::from_str(&serialized).unwrap();

        assert_eq!(reply, deserialized);
    }
}
