/// A request to be sent to the model provider.
#[derive(Clone, Debug, PartialEq)]
pub struct ChatRequest {
    /// The input messages.
    pub messages: Vec<ChatMessage>,
    /// Sampling temperature, if the caller wants to override the
    /// service default.
    pub temperature: Option<f32>,
}

/// A complete message.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ChatMessage {
    /// The system instructions.
    System(String),
    /// A user input text.
    User(String),
    /// An assistant text.
    Assistant(String),
}
