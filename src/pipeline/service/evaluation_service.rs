use std::task::{Context, Poll};
use std::time::Duration;

use crate::common::EvaluationRequest;
use crate::error::EvaluationError;
use crate::pipeline::analysis::EvaluatorHandle;
use crate::pipeline::context::EvaluationContext;
use crate::pipeline::domain::EvaluationResponse;
use crate::pipeline::service::tracing_layer::TracingLayer;
use futures::future::BoxFuture;
use tower::timeout::TimeoutLayer;
use tower::util::BoxService;
use tower::{BoxError, Service, ServiceBuilder};

/// Answers one upload with one evaluation. The evaluator is shared, never
/// rebuilt per request.
#[derive(Clone)]
pub struct EvaluationService {
    evaluator: EvaluatorHandle,
}

impl EvaluationService {
    pub fn new(evaluator: EvaluatorHandle) -> Self {
        Self { evaluator }
    }
}

impl Service<EvaluationRequest> for EvaluationService {
    type Response = EvaluationResponse;
    type Error = EvaluationError;
    type Future = BoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, request: EvaluationRequest) -> Self::Future {
        let evaluator = self.evaluator.clone();

        Box::pin(async move {
            // Decode and pixel walk are CPU bound, run them on the blocking pool
            let task = tokio::task::spawn_blocking(
                move || -> Result<EvaluationResponse, EvaluationError> {
                    let context = EvaluationContext::new(request).decode()?;
                    let context = context.evaluate(&evaluator)?;
                    Ok(context.into_response())
                },
            );

            match task.await {
                Ok(result) => result,
                Err(e) => Err(EvaluationError::TaskFailed(e.to_string())),
            }
        })
    }
}

fn boxed(error: EvaluationError) -> BoxError {
    Box::new(error)
}

pub type BoxEvaluationService = BoxService<EvaluationRequest, EvaluationResponse, BoxError>;

pub struct EvaluationServiceBuilder {
    evaluator: EvaluatorHandle,
    timeout: Option<Duration>,
}

impl EvaluationServiceBuilder {
    pub fn new(evaluator: EvaluatorHandle) -> Self {
        Self {
            evaluator,
            timeout: None,
        }
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn maybe_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn build(self) -> BoxEvaluationService {
        let service = ServiceBuilder::new()
            .layer(TracingLayer::new())
            .option_layer(self.timeout.map(TimeoutLayer::new))
            .map_err(boxed)
            .service(EvaluationService::new(self.evaluator));

        BoxService::new(service)
    }
}
