use talentscout_model::{ChatMessage, ChatRequest, ModelProviderError};

use crate::model_client::ModelClient;
use crate::prompts;

const TEMPERATURE: f32 = 0.3;

/// Asks the model for technical interview questions matching the given
/// tech stack, returning its output unmodified.
///
/// The model decides how many questions to produce; nothing validates
/// the count or the content.
pub(crate) async fn generate_technical_questions(
    client: &ModelClient,
    tech_stack: &str,
) -> Result<String, Box<dyn ModelProviderError>> {
    let request = ChatRequest {
        messages: vec![
            ChatMessage::System(prompts::SYSTEM_PROMPT.to_owned()),
            ChatMessage::User(prompts::tech_question_prompt(tech_stack)),
        ],
        temperature: Some(TEMPERATURE),
    };
    let completion = client.complete(request).await?;
    Ok(completion.content)
}
