//! LLM prompts for answer evaluation.

/// Collection of prompts used for reference generation and comparison.
pub struct Prompts;

impl Prompts {
    /// Prompt to generate a reference answer for a question.
    ///
    /// Placeholders: `{source_content}`, `{question}`. The 3-sentence
    /// limit is an instruction to the model, not an enforced invariant.
    pub fn reference_answer() -> &'static str {
        r#"You are an expert evaluator.
Given the following question, generate a high-quality reference answer that has 3 sentences only, based on the source content.

Source Content: "{source_content}"
Question: "{question}"

Reply with only the reference answer text, nothing else."#
    }

    /// Prompt to compare a user's answer against the reference answer.
    ///
    /// Placeholders: `{question}`, `{user_answer}`, `{reference_answer}`.
    pub fn comparison() -> &'static str {
        r#"You are an evaluator for presentation answers.
Question: "{question}"
User's Answer: "{user_answer}"
Reference Answer: "{reference_answer}"

Tasks:
1. Give a similarity score between the user's answer and the reference answer between 0 to 1.
2. List out the missing sentences/points that could improve the user's answer.

Respond in JSON format:
{
    "similarity": <0.0-1.0>,
    "missing": ["<missing point>", ...]
}

Respond with only the JSON, no other text."#
    }

    /// System prompt for evaluation calls.
    pub fn system_evaluator() -> &'static str {
        "You are an expert evaluator of presentation answers. Always respond with valid JSON when requested."
    }
}
