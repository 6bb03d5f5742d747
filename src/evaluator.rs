//! Comparison of user answers against reference answers.
//!
//! The model is asked to score similarity and list missing points,
//! replying strictly as JSON. Models do not always comply, so the
//! outcome is an explicit tagged result: either the structured
//! verdict, or the raw text when the reply could not be decoded.
//! Malformed model output is never an error here.

use crate::error::Result;
use crate::llm::{LlmClient, Prompts};
use serde::{Deserialize, Serialize};

/// Separator used when joining missing points into one string.
const MISSING_POINT_SEPARATOR: &str = " . ";

/// Outcome of comparing a user's answer against the reference.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Evaluation {
    /// The model replied with well-formed JSON.
    Parsed {
        /// Similarity score in [0, 1], if the model provided one.
        similarity: Option<f64>,
        /// Points present in the reference but absent from the answer.
        missing: Vec<String>,
    },
    /// The model's reply could not be decoded; raw text is preserved.
    Unparsed { raw: String },
}

impl Evaluation {
    /// Similarity score, if one was parsed.
    pub fn similarity(&self) -> Option<f64> {
        match self {
            Evaluation::Parsed { similarity, .. } => *similarity,
            Evaluation::Unparsed { .. } => None,
        }
    }

    /// Missing points rendered as a single string.
    ///
    /// For an undecodable reply, the raw text is the sole entry.
    pub fn missing_points(&self) -> String {
        match self {
            Evaluation::Parsed { missing, .. } => missing.join(MISSING_POINT_SEPARATOR),
            Evaluation::Unparsed { raw } => raw.clone(),
        }
    }
}

/// LLM-backed comparison evaluator.
pub struct ComparisonEvaluator {
    client: LlmClient,
}

impl ComparisonEvaluator {
    /// Create a new evaluator with the given LLM client.
    pub fn new(client: LlmClient) -> Self {
        Self { client }
    }

    /// Compare a user's answer against the reference answer.
    ///
    /// Only the model call itself can fail; a reply that is not valid
    /// JSON is returned as [`Evaluation::Unparsed`]. There is no retry
    /// on a malformed reply.
    pub async fn evaluate(
        &self,
        question: &str,
        user_answer: &str,
        reference_answer: &str,
    ) -> Result<Evaluation> {
        let prompt = Prompts::comparison()
            .replace("{question}", question)
            .replace("{user_answer}", user_answer)
            .replace("{reference_answer}", reference_answer);

        let response = self
            .client
            .complete(Some(Prompts::system_evaluator()), &prompt)
            .await?;

        Ok(Self::parse_response(&response))
    }

    /// Decode the model's reply into an [`Evaluation`].
    fn parse_response(response: &str) -> Evaluation {
        let json_str = Self::extract_json(response);

        #[derive(Deserialize)]
        struct RawEvaluation {
            #[serde(default)]
            similarity: Option<f64>,
            missing: Vec<String>,
        }

        match serde_json::from_str::<RawEvaluation>(&json_str) {
            Ok(raw) => Evaluation::Parsed {
                similarity: raw.similarity.map(|s| s.clamp(0.0, 1.0)),
                missing: raw.missing,
            },
            Err(_) => Evaluation::Unparsed {
                raw: response.to_string(),
            },
        }
    }

    /// Extract JSON from response (strips markdown code fences).
    fn extract_json(response: &str) -> String {
        let response = response.trim();

        if response.starts_with("```json") {
            if let Some(end) = response.rfind("```") {
                let start = "```json".len();
                if end > start {
                    return response[start..end].trim().to_string();
                }
            }
        }

        if response.starts_with("```") {
            if let Some(end) = response.rfind("```") {
                let start = response.find('\n').map(|n| n + 1).unwrap_or(3);
                if end > start {
                    return response[start..end].trim().to_string();
                }
            }
        }

        if let Some(start) = response.find('{') {
            if let Some(end) = response.rfind('}') {
                if end > start {
                    return response[start..=end].to_string();
                }
            }
        }

        response.to_string()
    }
}
