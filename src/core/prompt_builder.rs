// src/core/prompt_builder.rs
//! Instruction prompt built from the profile and the visitor's question

use crate::core::ProfileStore;

#[derive(Debug, Clone)]
pub struct PromptBuilder {
    owner: String,
    profile_json: String,
}

impl PromptBuilder {
    pub fn new(profile: &ProfileStore) -> Self {
        Self {
            owner: profile.display_name().to_string(),
            profile_json: profile.serialized().to_string(),
        }
    }

    /// Fill the prompt template. `question` is expected trimmed and non-blank.
    ///
    /// No escaping happens here: the prompt is embedded in the provider payload
    /// through serde, which handles quotes, backslashes and newlines.
    pub fn build(&self, question: &str) -> String {
        format!(
            r#"You are {owner}'s personal AI assistant on their portfolio website.
Give concise, well-structured answers that fit a chat interface.

Guidelines:
- Keep answers under 150 words
- Use bullet points or numbered lists when they help
- Be friendly and witty; a little dark humor is fine
- Split long information into digestible chunks
- Use emojis sparingly
- Format the answer so it reads well inside a chat bubble
- If the question is playful, feel free to play along

{owner}'s profile data:
{profile}

User question: "{question}"

Provide a helpful, structured response:"#,
            owner = self.owner,
            profile = self.profile_json,
            question = question,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::gemini_client::build_payload;

    fn store() -> ProfileStore {
        ProfileStore::from_json(
            r#"{"name": "Ada", "skills": ["Java", "Python", "Kubernetes"], "about": "Says \"hello\" a lot"}"#,
        )
        .unwrap()
    }

    #[test]
    fn test_prompt_embeds_profile_and_question() {
        let prompt = PromptBuilder::new(&store()).build("What are your skills?");

        assert!(prompt.starts_with("You are Ada's personal AI assistant"));
        assert!(prompt.contains(r#"["Java","Python","Kubernetes"]"#));
        assert!(prompt.contains(r#"User question: "What are your skills?""#));
        assert!(prompt.contains("Keep answers under 150 words"));
    }

    #[test]
    fn test_prompt_is_deterministic() {
        let builder = PromptBuilder::new(&store());
        assert_eq!(builder.build("hi"), builder.build("hi"));
    }

    #[test]
    fn test_adversarial_question_keeps_payload_valid() {
        let question = "He said \"hi\"\nbye \\ C:\\path\\ \u{0007} </script>";
        let prompt = PromptBuilder::new(&store()).build(question);

        let body = serde_json::to_string(&build_payload(&prompt)).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&body).unwrap();

        let text = parsed["contents"][0]["parts"][0]["text"].as_str().unwrap();
        assert_eq!(text, prompt);
        assert!(text.contains(question));
    }
}
