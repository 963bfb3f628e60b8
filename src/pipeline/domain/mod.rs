pub mod classification;
pub mod report;
pub mod response;
pub mod statistics;

pub use classification::{Classification, ClassificationResult};
pub use report::{Evaluation, ScoreReport};
pub use response::EvaluationResponse;
pub use statistics::{StatisticsSnapshot, SubScores};
