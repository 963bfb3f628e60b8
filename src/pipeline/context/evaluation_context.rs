use crate::common::EvaluationRequest;
use crate::error::EvaluationError;
use crate::pipeline::analysis::{decode_upload, Evaluator};
use crate::pipeline::context::metrics::EvaluationMetrics;
use crate::pipeline::context::state::{DecodedState, EvaluatedState, ProcessingState, ReceivedState};
use crate::pipeline::domain::{Evaluation, EvaluationResponse};
use image::DynamicImage;
use std::time::{Duration, Instant};

// EvaluationContext with compile-time state tracking: a request can only be
// evaluated once decoded, and only answered once evaluated
pub struct EvaluationContext<S> {
    request: EvaluationRequest,
    metrics: EvaluationMetrics,
    processing_start: Instant,
    state: S,
}

impl<S: ProcessingState> EvaluationContext<S> {
    pub fn request(&self) -> &EvaluationRequest {
        &self.request
    }

    pub fn metrics(&self) -> &EvaluationMetrics {
        &self.metrics
    }

    pub fn elapsed(&self) -> Duration {
        self.processing_start.elapsed()
    }

    pub fn state_name(&self) -> &'static str {
        S::state_name()
    }
}

impl EvaluationContext<ReceivedState> {
    pub fn new(request: EvaluationRequest) -> Self {
        Self {
            request,
            metrics: EvaluationMetrics::new(),
            processing_start: Instant::now(),
            state: ReceivedState,
        }
    }

    pub fn decode(mut self) -> Result<EvaluationContext<DecodedState>, EvaluationError> {
        let image = decode_upload(self.request.bytes())?;
        self.metrics.record_decode_duration(self.elapsed());
        Ok(EvaluationContext::<DecodedState> {
            request: self.request,
            metrics: self.metrics,
            processing_start: self.processing_start,
            state: DecodedState { image },
        })
    }
}

impl EvaluationContext<DecodedState> {
    pub fn image(&self) -> &DynamicImage {
        &self.state.image
    }

    pub fn evaluate(
        mut self,
        evaluator: &Evaluator,
    ) -> Result<EvaluationContext<EvaluatedState>, EvaluationError> {
        let started = Instant::now();
        let evaluation = evaluator.evaluate(&self.state.image)?;
        self.metrics.record_evaluation_duration(started.elapsed());
        Ok(EvaluationContext::<EvaluatedState> {
            request: self.request,
            metrics: self.metrics,
            processing_start: self.processing_start,
            state: EvaluatedState { evaluation },
        })
    }
}

impl EvaluationContext<EvaluatedState> {
    pub fn evaluation(&self) -> &Evaluation {
        &self.state.evaluation
    }

    pub fn into_response(self) -> EvaluationResponse {
        EvaluationResponse {
            request_id: self.request.request_id(),
            file_name: self.request.file_name().map(str::to_string),
            received_at: self.request.received_at(),
            evaluation: self.state.evaluation,
            metrics: self.metrics,
        }
    }
}
