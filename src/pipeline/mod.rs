pub mod analysis;
pub mod context;
pub mod domain;
pub mod service;

pub use analysis::{Evaluator, EvaluatorConfig, EvaluatorHandle, Profile};
pub use domain::{Classification, Evaluation, EvaluationResponse, ScoreReport, StatisticsSnapshot};
pub use service::{EvaluationService, EvaluationServiceBuilder};
