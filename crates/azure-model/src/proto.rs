use serde::{Deserialize, Serialize};
use talentscout_model::{ChatMessage, ChatRequest, FinishReason};

// ------------------------------
// Types received from the server
// ------------------------------

#[derive(Clone, Debug, PartialEq, Eq, Hash, Deserialize)]
pub struct ChatCompletion {
    pub id: String,
    pub choices: Vec<Choice>,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Deserialize)]
pub struct Choice {
    pub message: ChoiceMessage,
    pub finish_reason: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Deserialize)]
pub struct ChoiceMessage {
    pub content: Option<String>,
}

// ------------------------
// Types sent to the server
// ------------------------

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "role", rename_all = "lowercase")]
pub enum Message {
    System { content: String },
    User { content: String },
    Assistant { content: String },
}

// The deployment is addressed in the URL, so unlike the plain OpenAI
// API there is no `model` field in the body.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ChatCompletionRequest {
    messages: Vec<Message>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
}

// -----------
// Conversions
// -----------

#[inline]
pub fn create_request(req: &ChatRequest) -> ChatCompletionRequest {
    ChatCompletionRequest {
        messages: req.messages.iter().map(create_message).collect(),
        temperature: req.temperature,
    }
}

#[inline]
fn create_message(msg: &ChatMessage) -> Message {
    match msg {
        ChatMessage::System(content) => Message::System {
            content: content.clone(),
        },
        ChatMessage::User(content) => Message::User {
            content: content.clone(),
        },
        ChatMessage::Assistant(content) => Message::Assistant {
            content: content.clone(),
        },
    }
}

#[inline]
pub fn parse_finish_reason(reason: &str) -> Option<FinishReason> {
    match reason {
        "stop" => Some(FinishReason::Stop),
        "length" => Some(FinishReason::Length),
        "content_filter" => Some(FinishReason::ContentFilter),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_create_request() {
        let request = ChatRequest {
            messages: vec![
                ChatMessage::System(
                    "You are a helpful assistant.".to_owned(),
                ),
                ChatMessage::User("Hello".to_owned()),
            ],
            temperature: Some(0.3),
        };
        let expected = ChatCompletionRequest {
            messages: vec![
                Message::System {
                    content: "You are a helpful assistant.".to_owned(),
                },
                Message::User {
                    content: "Hello".to_owned(),
                },
            ],
            temperature: Some(0.3),
        };
        assert_eq!(create_request(&request), expected);
    }

    #[test]
    fn test_serialize_request() {
        let request = ChatRequest {
            messages: vec![ChatMessage::User("Hi".to_owned())],
            temperature: None,
        };
        let value = serde_json::to_value(create_request(&request)).unwrap();
        assert_eq!(
            value,
            json!({
                "messages": [
                    { "role": "user", "content": "Hi" }
                ]
            })
        );
    }

    #[test]
    fn test_deserialize_completion() {
        let completion: ChatCompletion = serde_json::from_value(json!({
            "id": "chatcmpl-1",
            "object": "chat.completion",
            "choices": [
                {
                    "index": 0,
                    "message": {
                        "role": "assistant",
                        "content": "1. What is ownership?"
                    },
                    "finish_reason": "stop"
                }
            ],
            "usage": { "total_tokens": 42 }
        }))
        .unwrap();
        assert_eq!(completion.id, "chatcmpl-1");
        let choice = &completion.choices[0];
        assert_eq!(
            choice.message.content.as_deref(),
            Some("1. What is ownership?")
        );
        assert_eq!(choice.finish_reason.as_deref(), Some("stop"));
    }

    #[test]
    fn test_parse_finish_reason() {
        assert_eq!(parse_finish_reason("stop"), Some(FinishReason::Stop));
        assert_eq!(parse_finish_reason("length"), Some(FinishReason::Length));
        assert_eq!(
            parse_finish_reason("content_filter"),
            Some(FinishReason::ContentFilter)
        );
        assert_eq!(parse_finish_reason("tool_calls"), None);
    }
}
