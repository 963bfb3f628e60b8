pub mod classifier;
pub mod config;
pub mod constants;
pub mod decoder;
pub mod evaluator;
pub mod feedback;
pub mod scorer;
pub mod statistics_extractor;

pub use classifier::ArtStyleClassifier;
pub use config::{
    BandTable, ClassifierConfig, ClassifierGate, EvaluatorConfig, FeedbackConfig, Metric,
    NormalizationCaps, Profile, ResizeFilter, ScoreWeights, ScoringModel,
};
pub use decoder::decode_upload;
pub use evaluator::{Evaluator, EvaluatorHandle};
pub use feedback::FeedbackComposer;
pub use scorer::{Scorer, Scores};
pub use statistics_extractor::StatisticsExtractor;
