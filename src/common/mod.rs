pub mod request;

pub use request::EvaluationRequest;
