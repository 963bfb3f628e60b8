pub mod common;
pub mod config;
pub mod error;
pub mod pipeline;

pub use common::EvaluationRequest;
pub use crate::config::Configuration;
pub use error::{AppError, EvaluationError};

pub use pipeline::{
    Classification, Evaluation, EvaluationResponse, EvaluationService, EvaluationServiceBuilder,
    Evaluator, EvaluatorConfig, EvaluatorHandle, Profile, ScoreReport, StatisticsSnapshot,
};
