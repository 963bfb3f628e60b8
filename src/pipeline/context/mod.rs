pub mod evaluation_context;
pub mod metrics;
pub mod state;

pub use evaluation_context::EvaluationContext;
pub use metrics::EvaluationMetrics;
pub use state::{DecodedState, EvaluatedState, ProcessingState, ReceivedState};
