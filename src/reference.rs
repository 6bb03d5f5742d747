//! Reference answer generation.
//!
//! Given a question (and optionally the slide content it was asked
//! about), ask the model for an exemplar answer to compare the user's
//! answer against.

use crate::error::Result;
use crate::llm::{LlmClient, Prompts};

/// Generates reference answers via the LLM.
pub struct ReferenceGenerator {
    client: LlmClient,
}

impl ReferenceGenerator {
    /// Create a new reference generator.
    pub fn new(client: LlmClient) -> Self {
        Self { client }
    }

    /// Generate a reference answer for a question.
    ///
    /// When `source_content` is present the answer is grounded in it;
    /// otherwise the question itself is the only grounding available.
    /// The response is whitespace-trimmed. Model-call failures
    /// propagate to the caller.
    pub async fn generate(
        &self,
        question: &str,
        source_content: Option<&str>,
    ) -> Result<String> {
        let source = source_content.unwrap_or(question);

        let prompt = Prompts::reference_answer()
            .replace("{source_content}", source)
            .replace("{question}", question);

        let response = self
            .client
            .complete(Some(Prompts::system_evaluator()), &prompt)
            .await?;

        Ok(response.trim().to_string())
    }
}
