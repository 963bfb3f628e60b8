use std::fmt::Display;
use std::time::Instant;

use crate::common::EvaluationRequest;
use futures::future::BoxFuture;
use futures::task::{Context, Poll};
use tower::Service;
use tower_layer::Layer;
use tracing::{debug, info_span, Instrument};

/// Opens a span per request and logs how it ended
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLayer;

impl TracingLayer {
    pub fn new() -> Self {
        Self
    }
}

impl<S> Layer<S> for TracingLayer {
    type Service = Traced<S>;

    fn layer(&self, inner: S) -> Self::Service {
        Traced { inner }
    }
}

#[derive(Debug, Clone)]
pub struct Traced<S> {
    inner: S,
}

impl<S> Service<EvaluationRequest> for Traced<S>
where
    S: Service<EvaluationRequest>,
    S::Error: Display + Send + 'static,
    S::Future: Send + 'static,
    S::Response: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = BoxFuture<'static, Result<S::Response, S::Error>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, request: EvaluationRequest) -> Self::Future {
        let span = info_span!(
            "evaluation",
            request_id = %request.request_id(),
            file = request.file_name().unwrap_or("<upload>"),
            bytes = request.bytes().len()
        );
        let future = {
            let _enter = span.enter();
            debug!("Received upload");
            self.inner.call(request)
        };

        Box::pin(
            async move {
                let start = Instant::now();
                let result = future.await;
                let duration_us = start.elapsed().as_micros() as u64;

                match &result {
                    Ok(_) => debug!("Evaluation completed in {}us", duration_us),
                    Err(e) => tracing::error!("Evaluation failed after {}us: {}", duration_us, e),
                }

                result
            }
            .instrument(span),
        )
    }
}
