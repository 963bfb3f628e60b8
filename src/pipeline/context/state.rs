use crate::pipeline::domain::Evaluation;
use image::DynamicImage;

// Markers to track how far a request has progressed
pub struct ReceivedState;
pub struct DecodedState {
    pub(super) image: DynamicImage,
}
pub struct EvaluatedState {
    pub(super) evaluation: Evaluation,
}

pub trait ProcessingState: 'static {
    fn state_name() -> &'static str;
}

impl ProcessingState for ReceivedState {
    fn state_name() -> &'static str {
        "Received"
    }
}

impl ProcessingState for DecodedState {
    fn state_name() -> &'static str {
        "Decoded"
    }
}

impl ProcessingState for EvaluatedState {
    fn state_name() -> &'static str {
        "Evaluated"
    }
}
