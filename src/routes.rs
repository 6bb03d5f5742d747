//! API routes for the evaluation service.

use crate::report::QaPair;
use crate::server::AppState;
use axum::{
    extract::State,
    http::StatusCode,
    routing::post,
    Json, Router,
};
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::{error, info};

type AppStateArc = Arc<AppState>;

pub fn analysis_routes() -> Router<AppStateArc> {
    Router::new().route("/getAnalysis", post(get_analysis))
}

/// Evaluate a batch of question/answer pairs.
///
/// The body must carry `qaPairs` as an array; anything else is
/// rejected with 400 before any model call is made. Processing errors
/// surface as 500 with `success: false`; there is no partial report.
async fn get_analysis(
    State(state): State<AppStateArc>,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    let Some(qa_pairs) = body.get("qaPairs").filter(|v| v.is_array()) else {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "qaPairs must be an array" })),
        );
    };

    let pairs: Vec<QaPair> = match serde_json::from_value(qa_pairs.clone()) {
        Ok(pairs) => pairs,
        Err(e) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": format!("Invalid qaPairs entry: {}", e) })),
            );
        }
    };

    info!("Evaluating {} pair(s)", pairs.len());

    match state.reporter.generate(&pairs).await {
        Ok(report) => (
            StatusCode::OK,
            Json(json!({ "success": true, "report": report })),
        ),
        Err(e) => {
            error!("Report generation failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "success": false, "error": e.to_string() })),
            )
        }
    }
}
