//! Canned assistant texts and prompt templates.

/// The system instruction sent with every question-generation request.
pub(crate) const SYSTEM_PROMPT: &str = include_str!("./prompts/system.md");

const TECH_QUESTION_PROMPT_TEMPLATE: &str =
    include_str!("./prompts/tech_questions.md");

/// The notice shown while the remote call is in flight.
pub(crate) const GENERATING_NOTICE: &str =
    "Generating technical questions based on your tech stack...";

/// The prompt asking the candidate for their tech stack.
pub(crate) const TECH_STACK_PROMPT: &str =
    "Thank you. Now please list your tech stack \
     (languages, frameworks, tools).";

/// Renders the question-generation prompt for the given tech stack.
pub(crate) fn tech_question_prompt(tech_stack: &str) -> String {
    TECH_QUESTION_PROMPT_TEMPLATE.replace("{{TECH_STACK}}", tech_stack)
}

/// Renders the prompt asking the candidate for one field.
pub(crate) fn field_prompt(field: &str) -> String {
    format!("Please provide your {field}.")
}

/// The assistant's opening message.
pub fn greeting_message() -> &'static str {
    "Hello! 👋 I'm TalentScout, your hiring assistant.\n\n\
     I'll ask you a few questions to understand your background \
     and technical skills. Let's get started!"
}

/// The assistant's closing message.
pub fn closing_message() -> &'static str {
    "Thank you for your time! 🙏\n\n\
     Your information has been recorded. \
     Our recruitment team will review your profile and contact you \
     regarding next steps."
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tech_question_prompt() {
        let prompt = tech_question_prompt("Python, Django");
        assert!(prompt.contains("Python, Django"));
        assert!(!prompt.contains("{{TECH_STACK}}"));
    }

    #[test]
    fn test_field_prompt() {
        assert_eq!(
            field_prompt("Full Name"),
            "Please provide your Full Name."
        );
    }
}
