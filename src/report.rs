//! Per-pair orchestration and report assembly.
//!
//! For each question/answer pair, in input order: generate a reference
//! answer, compare the user's answer against it, and append one report
//! row. The two model calls for a pair complete before the next pair
//! begins; there is no fan-out across pairs.

use crate::error::Result;
use crate::evaluator::ComparisonEvaluator;
use crate::llm::LlmClient;
use crate::reference::ReferenceGenerator;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// One question/user-answer unit submitted for evaluation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QaPair {
    /// The question that was asked.
    pub question: String,
    /// The answer the user gave.
    pub user_answer: String,
    /// Slide content the question was asked about, when available.
    /// Used to ground the reference answer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slide_content: Option<String>,
}

/// One row of the evaluation report.
///
/// Field names match the report format consumed downstream.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportRow {
    #[serde(rename = "Question")]
    pub question: String,
    #[serde(rename = "User Answer")]
    pub user_answer: String,
    #[serde(rename = "Reference Answer")]
    pub reference_answer: String,
    /// Null when the comparison reply could not be decoded.
    #[serde(rename = "Similarity Score")]
    pub similarity_score: Option<f64>,
    #[serde(rename = "Missing Points")]
    pub missing_points: String,
}

/// Assembles evaluation reports from question/answer pairs.
pub struct ReportGenerator {
    reference: ReferenceGenerator,
    evaluator: ComparisonEvaluator,
}

impl ReportGenerator {
    /// Create a new report generator backed by the given LLM client.
    pub fn new(client: LlmClient) -> Self {
        Self {
            reference: ReferenceGenerator::new(client.clone()),
            evaluator: ComparisonEvaluator::new(client),
        }
    }

    /// Evaluate all pairs and assemble the report.
    ///
    /// The report has one row per input pair, in input order. The
    /// first model-call failure aborts the whole batch; no partial
    /// report is returned.
    pub async fn generate(&self, pairs: &[QaPair]) -> Result<Vec<ReportRow>> {
        let mut report = Vec::with_capacity(pairs.len());

        for (i, pair) in pairs.iter().enumerate() {
            debug!("Evaluating pair {}/{}", i + 1, pairs.len());

            let reference_answer = self
                .reference
                .generate(&pair.question, pair.slide_content.as_deref())
                .await?;

            let evaluation = self
                .evaluator
                .evaluate(&pair.question, &pair.user_answer, &reference_answer)
                .await?;

            report.push(ReportRow {
                question: pair.question.clone(),
                user_answer: pair.user_answer.clone(),
                reference_answer,
                similarity_score: evaluation.similarity(),
                missing_points: evaluation.missing_points(),
            });
        }

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_qa_pair_deserializes_camel_case() {
        let json = r#"{"question": "What is Rust?", "userAnswer": "A language."}"#;
        let pair: QaPair = serde_json::from_str(json).unwrap();

        assert_eq!(pair.question, "What is Rust?");
        assert_eq!(pair.user_answer, "A language.");
        assert!(pair.slide_content.is_none());
    }

    #[test]
    fn test_qa_pair_accepts_slide_content() {
        let json = r#"{"question": "q", "userAnswer": "a", "slideContent": "slides"}"#;
        let pair: QaPair = serde_json::from_str(json).unwrap();

        assert_eq!(pair.slide_content.as_deref(), Some("slides"));
    }

    #[test]
    fn test_report_row_field_names() {
        let row = ReportRow {
            question: "q".to_string(),
            user_answer: "a".to_string(),
            reference_answer: "ref".to_string(),
            similarity_score: Some(0.9),
            missing_points: "m1 . m2".to_string(),
        };

        let value = serde_json::to_value(&row).unwrap();
        assert_eq!(value["Question"], "q");
        assert_eq!(value["User Answer"], "a");
        assert_eq!(value["Reference Answer"], "ref");
        assert_eq!(value["Similarity Score"], 0.9);
        assert_eq!(value["Missing Points"], "m1 . m2");
    }

    #[test]
    fn test_report_row_null_similarity() {
        let row = ReportRow {
            question: "q".to_string(),
            user_answer: "a".to_string(),
            reference_answer: "ref".to_string(),
            similarity_score: None,
            missing_points: "not json".to_string(),
        };

        let value = serde_json::to_value(&row).unwrap();
        assert!(value["Similarity Score"].is_null());
    }
}
