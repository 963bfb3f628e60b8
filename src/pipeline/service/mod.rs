pub mod evaluation_service;
pub mod tracing_layer;

pub use evaluation_service::{BoxEvaluationService, EvaluationService, EvaluationServiceBuilder};
pub use tracing_layer::{Traced, TracingLayer};
