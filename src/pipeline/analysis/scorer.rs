use crate::pipeline::analysis::config::{NormalizationCaps, ScoreWeights, ScoringModel};
use crate::pipeline::domain::{StatisticsSnapshot, SubScores};

/// Total score plus the sub-scores it was averaged from, when the model has any
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scores {
    pub total: f64,
    pub sub_scores: Option<SubScores>,
}

/// Maps statistics to a 0..=100 score
#[derive(Debug, Clone)]
pub struct Scorer {
    model: ScoringModel,
}

impl Scorer {
    pub fn new(model: ScoringModel) -> Self {
        Self { model }
    }

    pub fn score(&self, stats: &StatisticsSnapshot) -> Scores {
        match &self.model {
            ScoringModel::Weighted { weights, caps } => Scores {
                total: round_one_decimal(weighted_score(stats, weights, caps)),
                sub_scores: None,
            },
            ScoringModel::CharacterArt { caps } => {
                let sub_scores = character_sub_scores(stats, caps);
                Scores {
                    total: round_one_decimal(sub_scores.mean()),
                    sub_scores: Some(sub_scores),
                }
            }
        }
    }
}

/// Fraction of `cap` reached by `value`, clamped to [0, 1]
pub fn normalized(value: f64, cap: f64) -> f64 {
    (value / cap).clamp(0.0, 1.0)
}

fn weighted_score(stats: &StatisticsSnapshot, weights: &ScoreWeights, caps: &NormalizationCaps) -> f64 {
    weights.brightness * normalized(stats.brightness(), caps.brightness)
        + weights.hue_diversity * normalized(stats.hue_diversity() as f64, caps.hue_diversity)
        + weights.contrast * normalized(stats.contrast(), caps.contrast)
}

// The names are aspirational. Each sub-score is a fixed rescaling of one or
// two statistics, not a structural analysis.
fn character_sub_scores(stats: &StatisticsSnapshot, caps: &NormalizationCaps) -> SubScores {
    let hues = stats.hue_diversity() as f64;
    SubScores {
        shape: 100.0 * normalized(stats.contrast(), caps.contrast),
        detail: 100.0 * normalized(stats.brightness(), caps.brightness),
        natural: 100.0 * normalized(hues, caps.hue_diversity),
        color: 100.0 * normalized(hues + stats.contrast(), caps.color_combined),
    }
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
