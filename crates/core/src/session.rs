//! The screening conversation state machine.

use talentscout_model::{ModelProvider, ModelProviderError};

use crate::exit::is_exit_message;
use crate::fields::{CandidateRecord, FIELDS, TECH_STACK_FIELD};
use crate::model_client::ModelClient;
use crate::prompts;
use crate::questions;
use crate::transcript::{Speaker, Transcript};

/// The position of a session within the fixed screening flow.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Step {
    /// The session has not greeted the candidate yet.
    #[default]
    Greeting,
    /// The six candidate fields are being collected.
    CollectingFields,
    /// The tech stack is being collected.
    CollectingTechStack,
    /// The conversation has ended.
    Complete,
}

/// A single candidate screening conversation.
///
/// The session owns the transcript, the collected record and the
/// conversation cursor; one value corresponds to one chat surface.
/// Creating a session seeds the transcript with the greeting and the
/// first field prompt, after that the whole flow is driven by
/// [`handle_message`](Self::handle_message).
pub struct ScreeningSession {
    model_client: ModelClient,
    transcript: Transcript,
    record: CandidateRecord,
    step: Step,
    field_index: usize,
}

impl ScreeningSession {
    /// Creates a session with the specified model provider.
    pub fn with_model_provider<P: ModelProvider + 'static>(
        provider: P,
    ) -> Self {
        Self::with_model_client(ModelClient::new(provider))
    }

    /// Creates a session with an existing model client.
    pub fn with_model_client(model_client: ModelClient) -> Self {
        let mut session = Self {
            model_client,
            transcript: Transcript::default(),
            record: CandidateRecord::default(),
            step: Step::Greeting,
            field_index: 0,
        };
        session.reply(prompts::greeting_message());
        session.reply(prompts::field_prompt(FIELDS[0]));
        session.step = Step::CollectingFields;
        session
    }

    /// Returns the transcript so far.
    #[inline]
    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// Returns the values collected so far.
    #[inline]
    pub fn record(&self) -> &CandidateRecord {
        &self.record
    }

    /// Returns the current step.
    #[inline]
    pub fn step(&self) -> Step {
        self.step
    }

    /// Returns whether the conversation has ended.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.step == Step::Complete
    }

    /// Handles one candidate submission.
    ///
    /// Returns the assistant texts appended during this call, so a
    /// front end can render incrementally. The full transcript stays
    /// available through [`transcript`](Self::transcript) for
    /// re-rendering.
    ///
    /// A failure of the remote call is propagated as-is; the session
    /// keeps its step, and the submission that triggered the call is
    /// already part of the transcript and the record.
    pub async fn handle_message(
        &mut self,
        input: &str,
    ) -> Result<Vec<String>, Box<dyn ModelProviderError>> {
        let mark = self.transcript.len();

        if is_exit_message(input) {
            debug!("exit keyword received");
            self.reply(prompts::closing_message());
            self.step = Step::Complete;
            return Ok(self.replies_since(mark));
        }

        match self.step {
            Step::Greeting | Step::CollectingFields => {
                self.collect_field(input);
            }
            Step::CollectingTechStack => {
                self.collect_tech_stack(input).await?;
            }
            Step::Complete => {
                // The conversation is over, later input changes nothing.
            }
        }

        Ok(self.replies_since(mark))
    }

    fn collect_field(&mut self, input: &str) {
        self.transcript.push(Speaker::Candidate, input);
        self.record.insert(FIELDS[self.field_index], input);
        self.field_index += 1;

        if let Some(next_field) = FIELDS.get(self.field_index) {
            self.reply(prompts::field_prompt(next_field));
        } else {
            self.step = Step::CollectingTechStack;
            self.reply(prompts::TECH_STACK_PROMPT);
        }
    }

    async fn collect_tech_stack(
        &mut self,
        input: &str,
    ) -> Result<(), Box<dyn ModelProviderError>> {
        self.transcript.push(Speaker::Candidate, input);
        self.record.insert(TECH_STACK_FIELD, input);
        self.reply(prompts::GENERATING_NOTICE);

        let questions = questions::generate_technical_questions(
            &self.model_client,
            input,
        )
        .await?;

        self.reply(format!(
            "Here are some technical questions:\n\n{questions}"
        ));
        self.reply(prompts::closing_message());
        self.step = Step::Complete;
        Ok(())
    }

    fn reply(&mut self, text: impl Into<String>) {
        self.transcript.push(Speaker::Assistant, text);
    }

    fn replies_since(&self, mark: usize) -> Vec<String> {
        self.transcript.entries()[mark..]
            .iter()
            .filter(|entry| entry.speaker() == Speaker::Assistant)
            .map(|entry| entry.text().to_owned())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use talentscout_test_model::{PresetReply, TestModelProvider};

    use super::*;

    const SAMPLE_FIELD_VALUES: [&str; 6] = [
        "Ada Lovelace",
        "ada@example.com",
        "+44 20 7946 0000",
        "7",
        "Staff Engineer",
        "London",
    ];

    fn scripted_provider(questions: &str) -> TestModelProvider {
        let mut provider = TestModelProvider::default();
        // The question request carries two messages (system + user),
        // so the reply sits at script position 2.
        provider.add_user_input_step();
        provider.add_user_input_step();
        provider.add_assistant_reply_step(PresetReply::with_content(questions));
        provider
    }

    fn new_session() -> ScreeningSession {
        ScreeningSession::with_model_provider(scripted_provider(
            "1. What is ownership?",
        ))
    }

    async fn submit_fields(session: &mut ScreeningSession) {
        for value in SAMPLE_FIELD_VALUES {
            session.handle_message(value).await.unwrap();
        }
    }

    #[test]
    fn test_greeting_seeded() {
        let session = new_session();
        let entries = session.transcript().entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].speaker(), Speaker::Assistant);
        assert_eq!(entries[0].text(), prompts::greeting_message());
        assert_eq!(entries[1].text(), "Please provide your Full Name.");
        assert_eq!(session.step(), Step::CollectingFields);
    }

    #[tokio::test]
    async fn test_field_cursor_advances_per_submission() {
        let mut session = new_session();
        for (i, value) in SAMPLE_FIELD_VALUES.iter().enumerate() {
            assert_eq!(session.field_index, i);
            let replies = session.handle_message(value).await.unwrap();
            assert_eq!(replies.len(), 1);
            assert_eq!(session.field_index, i + 1);
        }
        assert_eq!(session.step(), Step::CollectingTechStack);
        let last = session.transcript().entries().last().unwrap();
        assert_eq!(last.text(), prompts::TECH_STACK_PROMPT);
    }

    #[tokio::test]
    async fn test_record_holds_submitted_values() {
        let mut session = new_session();
        submit_fields(&mut session).await;

        assert_eq!(session.record().len(), FIELDS.len());
        for (field, value) in FIELDS.into_iter().zip(SAMPLE_FIELD_VALUES) {
            assert_eq!(session.record().get(field), Some(value));
        }
    }

    #[tokio::test]
    async fn test_empty_input_stored_verbatim() {
        let mut session = new_session();
        session.handle_message("").await.unwrap();
        assert_eq!(session.record().get("Full Name"), Some(""));
        assert_eq!(session.field_index, 1);
    }

    #[tokio::test]
    async fn test_exit_variants_close_the_session() {
        for input in ["exit", "Exit", " done ", "THANK YOU"] {
            let mut session = new_session();
            let replies = session.handle_message(input).await.unwrap();
            assert_eq!(replies, [prompts::closing_message()]);
            assert!(session.is_complete());
            assert!(session.record().is_empty());
        }
    }

    #[tokio::test]
    async fn test_no_mutation_after_completion() {
        let mut session = new_session();
        session.handle_message("quit").await.unwrap();
        assert!(session.is_complete());

        let len_before = session.transcript().len();
        let replies = session.handle_message("Ada Lovelace").await.unwrap();
        assert!(replies.is_empty());
        assert_eq!(session.transcript().len(), len_before);
        assert!(session.record().is_empty());

        // An exit keyword may still append the closing message.
        let replies = session.handle_message("done").await.unwrap();
        assert_eq!(replies, [prompts::closing_message()]);
    }

    #[tokio::test]
    async fn test_question_generation() {
        let mut session = ScreeningSession::with_model_provider(
            scripted_provider("1. Django ORM?\n2. The GIL?"),
        );
        submit_fields(&mut session).await;

        let replies = session.handle_message("Python, Django").await.unwrap();
        assert_eq!(replies.len(), 3);
        assert_eq!(
            session.record().get(TECH_STACK_FIELD),
            Some("Python, Django")
        );

        let entries = session.transcript().entries();
        let last_but_one = &entries[entries.len() - 2];
        assert_eq!(
            last_but_one.text(),
            "Here are some technical questions:\n\n1. Django ORM?\n2. The GIL?"
        );
        let last = entries.last().unwrap();
        assert_eq!(last.text(), prompts::closing_message());
        assert!(session.is_complete());
    }

    #[tokio::test]
    async fn test_model_failure_propagates() {
        // An empty script makes every completion call fail.
        let mut session =
            ScreeningSession::with_model_provider(TestModelProvider::default());
        submit_fields(&mut session).await;

        let result = session.handle_message("Python, Django").await;
        assert!(result.is_err());
        // The submission itself is recorded, the step is unchanged.
        assert_eq!(session.step(), Step::CollectingTechStack);
        assert_eq!(
            session.record().get(TECH_STACK_FIELD),
            Some("Python, Django")
        );
    }
}
