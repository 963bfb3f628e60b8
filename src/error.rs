use thiserror::Error;
use uuid::Uuid;

// Main Application Error Type

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration Error: {0}")]
    Configuration(#[from] config::ConfigError),
    #[error("Failed to read {1}: {0}")]
    ReadError(std::io::Error, String),
    #[error("Evaluation Error: {0}")]
    Evaluation(#[from] EvaluationError),
    #[error("Request {0} failed: {1}")]
    ServiceError(Uuid, String),
    #[error("Failed to render report: {0}")]
    RenderError(#[from] serde_json::Error),
}

// Evaluation Error Type
#[derive(Error, Debug)]
pub enum EvaluationError {
    #[error("Cannot process image: {0}")]
    Decode(#[from] image::ImageError),
    #[error("Unsupported image format {0}, expected JPEG or PNG")]
    UnsupportedFormat(String),
    #[error("The uploaded image is empty.")]
    EmptyImage,
    #[error("Invalid evaluator configuration: {0}")]
    InvalidConfig(String),
    #[error("Evaluation task failed: {0}")]
    TaskFailed(String),
}
