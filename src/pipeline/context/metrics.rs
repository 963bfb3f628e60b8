use serde::Serialize;
use std::time::Duration;

/// Timings collected while processing one request
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct EvaluationMetrics {
    #[serde(serialize_with = "as_micros")]
    decode_duration: Option<Duration>,
    #[serde(serialize_with = "as_micros")]
    evaluation_duration: Option<Duration>,
}

impl EvaluationMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_decode_duration(&mut self, duration: Duration) {
        self.decode_duration = Some(duration);
    }

    pub fn record_evaluation_duration(&mut self, duration: Duration) {
        self.evaluation_duration = Some(duration);
    }

    pub fn decode_duration(&self) -> Option<Duration> {
        self.decode_duration
    }

    pub fn evaluation_duration(&self) -> Option<Duration> {
        self.evaluation_duration
    }
}

fn as_micros<S: serde::Serializer>(duration: &Option<Duration>, serializer: S) -> Result<S::Ok, S::Error> {
    match duration {
        Some(d) => serializer.serialize_some(&(d.as_micros() as u64)),
        None => serializer.serialize_none(),
    }
}
