use crate::pipeline::context::EvaluationMetrics;
use crate::pipeline::domain::Evaluation;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Answer to one evaluation request
#[derive(Debug, Clone, Serialize)]
pub struct EvaluationResponse {
    pub request_id: Uuid,
    pub file_name: Option<String>,
    pub received_at: DateTime<Utc>,
    pub evaluation: Evaluation,
    pub metrics: EvaluationMetrics,
}
