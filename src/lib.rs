//! Answer Evaluator - an LLM-backed evaluation service for
//! presentation question/answer pairs.
//!
//! For each submitted pair the service asks the model for a reference
//! answer, then asks it to compare the user's answer against that
//! reference, and assembles the results into a per-pair report with a
//! similarity score and the points the answer missed.
//!
//! # Quick Start
//!
//! ```no_run
//! use answer_evaluator::{
//!     config::Config,
//!     llm::LlmClient,
//!     report::{QaPair, ReportGenerator},
//! };
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     // Load configuration
//!     let config = Config::load()?;
//!     config.validate()?;
//!
//!     // Create LLM client and report generator
//!     let client = LlmClient::new(config.llm.clone());
//!     let reporter = ReportGenerator::new(client);
//!
//!     let pairs = vec![QaPair {
//!         question: "What does the borrow checker do?".to_string(),
//!         user_answer: "It checks lifetimes.".to_string(),
//!         slide_content: None,
//!     }];
//!
//!     let report = reporter.generate(&pairs).await?;
//!     for row in report {
//!         println!("{}: {:?}", row.question, row.similarity_score);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! - **LlmClient**: OpenAI-compatible API client for LLM calls
//! - **ReferenceGenerator**: obtains an exemplar answer per question
//! - **ComparisonEvaluator**: scores the user's answer against it
//! - **ReportGenerator**: sequential per-pair orchestration
//! - **server/routes**: the `POST /getAnalysis` HTTP boundary

pub mod config;
pub mod error;
pub mod evaluator;
pub mod llm;
pub mod reference;
pub mod report;
pub mod routes;
pub mod server;

// Re-export commonly used types
pub use config::Config;
pub use error::{EvalError, Result};
pub use evaluator::{ComparisonEvaluator, Evaluation};
pub use llm::LlmClient;
pub use reference::ReferenceGenerator;
pub use report::{QaPair, ReportGenerator, ReportRow};
