use crate::error::EvaluationError;
use crate::pipeline::analysis::classifier::ArtStyleClassifier;
use crate::pipeline::analysis::config::EvaluatorConfig;
use crate::pipeline::analysis::decoder::decode_upload;
use crate::pipeline::analysis::feedback::FeedbackComposer;
use crate::pipeline::analysis::scorer::Scorer;
use crate::pipeline::analysis::statistics_extractor::StatisticsExtractor;
use crate::pipeline::domain::{ClassificationResult, Evaluation, ScoreReport};
use image::DynamicImage;
use std::sync::Arc;
use tracing::{debug, info};

/// Shared handle to an evaluator built once at startup
pub type EvaluatorHandle = Arc<Evaluator>;

struct Gate {
    classifier: ArtStyleClassifier,
    rejection_message: String,
}

/// Runs the whole evaluation for one configuration: optional drawing gate,
/// statistics, score and feedback
pub struct Evaluator {
    extractor: StatisticsExtractor,
    scorer: Scorer,
    composer: FeedbackComposer,
    gate: Option<Gate>,
    description: Option<String>,
}

impl Evaluator {
    pub fn new(config: EvaluatorConfig) -> Result<Self, EvaluationError> {
        config.validate()?;

        let EvaluatorConfig {
            scoring,
            feedback,
            classifier_gate,
            description,
        } = config;

        Ok(Self {
            extractor: StatisticsExtractor::new(),
            scorer: Scorer::new(scoring),
            composer: FeedbackComposer::new(feedback),
            gate: classifier_gate.map(|gate| Gate {
                classifier: ArtStyleClassifier::new(gate.classifier),
                rejection_message: gate.rejection_message,
            }),
            description,
        })
    }

    pub fn into_handle(self) -> EvaluatorHandle {
        Arc::new(self)
    }

    pub fn has_classifier_gate(&self) -> bool {
        self.gate.is_some()
    }

    /// Runs the classifier when this evaluator has a gate
    pub fn classify(&self, image: &DynamicImage) -> Option<ClassificationResult> {
        self.gate.as_ref().map(|gate| gate.classifier.classify(image))
    }

    pub fn evaluate_bytes(&self, bytes: &[u8]) -> Result<Evaluation, EvaluationError> {
        let image = decode_upload(bytes)?;
        self.evaluate(&image)
    }

    pub fn evaluate(&self, image: &DynamicImage) -> Result<Evaluation, EvaluationError> {
        let rgb = image.to_rgb8();
        if rgb.width() == 0 || rgb.height() == 0 {
            return Err(EvaluationError::EmptyImage);
        }

        let classification = match &self.gate {
            Some(gate) => {
                let result = gate.classifier.classify_rgb(&rgb);
                debug!(
                    "Classified as {} ({} unique colors, threshold {})",
                    result.classification(),
                    result.unique_colors(),
                    result.threshold()
                );
                if !result.is_drawing() {
                    info!("Rejecting image classified as {}", result.classification());
                    return Ok(Evaluation::Rejected {
                        classification: result,
                        message: gate.rejection_message.clone(),
                    });
                }
                Some(result)
            }
            None => None,
        };

        let statistics = self.extractor.extract_rgb(&rgb)?;
        debug!(
            "brightness={:.2} contrast={:.2} hue_diversity={}",
            statistics.brightness(),
            statistics.contrast(),
            statistics.hue_diversity()
        );

        let scores = self.scorer.score(&statistics);
        let feedback = self.composer.compose(&statistics, scores.sub_scores.as_ref());

        Ok(Evaluation::Scored(ScoreReport {
            total_score: scores.total,
            feedback,
            statistics,
            sub_scores: scores.sub_scores,
            description: self.description.clone(),
            classification,
        }))
    }
}
