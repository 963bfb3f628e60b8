use crate::error::EvaluationError;
use crate::pipeline::analysis::constants::{breakpoints, classifier, normalization, weights};
use image::imageops::FilterType;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Configuration for one evaluator: scoring model, feedback tables and the
/// optional drawing/photo gate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluatorConfig {
    pub scoring: ScoringModel,
    pub feedback: FeedbackConfig,
    #[serde(default)]
    pub classifier_gate: Option<ClassifierGate>,
    /// Fixed sentence attached to every scored report
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "model", rename_all = "snake_case")]
pub enum ScoringModel {
    /// Weighted sum of the three normalized statistics
    Weighted {
        weights: ScoreWeights,
        caps: NormalizationCaps,
    },
    /// Unweighted mean of the four proxy sub-scores
    CharacterArt { caps: NormalizationCaps },
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreWeights {
    pub brightness: f64,
    pub hue_diversity: f64,
    pub contrast: f64,
}

impl ScoreWeights {
    pub fn total(&self) -> f64 {
        self.brightness + self.hue_diversity + self.contrast
    }
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            brightness: weights::BRIGHTNESS,
            hue_diversity: weights::HUE_DIVERSITY,
            contrast: weights::CONTRAST,
        }
    }
}

/// Values at which each statistic saturates to a full contribution
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NormalizationCaps {
    pub brightness: f64,
    pub hue_diversity: f64,
    pub contrast: f64,
    pub color_combined: f64,
}

impl Default for NormalizationCaps {
    fn default() -> Self {
        Self {
            brightness: normalization::BRIGHTNESS_CAP,
            hue_diversity: normalization::HUE_DIVERSITY_CAP,
            contrast: normalization::CONTRAST_CAP,
            color_combined: normalization::COLOR_COMBINED_CAP,
        }
    }
}

/// A metric a feedback rule can read. Declaration order is the order
/// feedback lines are emitted in, whatever order the rules were given in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    Brightness,
    HueDiversity,
    Contrast,
    Shape,
    Detail,
    Natural,
    Color,
}

impl Metric {
    /// Sub-score metrics only exist under the character-art model
    pub fn is_sub_score(&self) -> bool {
        matches!(
            self,
            Metric::Shape | Metric::Detail | Metric::Natural | Metric::Color
        )
    }
}

/// Ascending breakpoints splitting the number line into half-open bands,
/// with one optional message per band. An empty message counts as none, for
/// formats without a null value.
///
/// Band `i` covers `[breakpoints[i - 1], breakpoints[i])`; the first band is
/// unbounded below and the last unbounded above.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BandTable {
    pub breakpoints: Vec<f64>,
    pub messages: Vec<Option<String>>,
}

impl BandTable {
    pub fn new(breakpoints: Vec<f64>, messages: Vec<Option<String>>) -> Self {
        Self {
            breakpoints,
            messages,
        }
    }

    /// Index of the band containing `value`
    pub fn band_index(&self, value: f64) -> usize {
        self.breakpoints.iter().take_while(|&&b| value >= b).count()
    }

    pub fn message_for(&self, value: f64) -> Option<&str> {
        self.messages
            .get(self.band_index(value))
            .and_then(|m| m.as_deref())
            .filter(|m| !m.is_empty())
    }

    fn validate(&self, metric: Metric) -> Result<(), String> {
        if self.breakpoints.iter().any(|b| !b.is_finite()) {
            return Err(format!("{:?} breakpoints must be finite", metric));
        }
        if self.breakpoints.windows(2).any(|w| w[0] >= w[1]) {
            return Err(format!("{:?} breakpoints must be strictly ascending", metric));
        }
        if self.messages.len() != self.breakpoints.len() + 1 {
            return Err(format!(
                "{:?} needs {} messages for {} breakpoints, got {}",
                metric,
                self.breakpoints.len() + 1,
                self.breakpoints.len(),
                self.messages.len()
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedbackConfig {
    pub rules: IndexMap<Metric, BandTable>,
    /// Emitted alone when no rule produced a message
    #[serde(default)]
    pub fallback: Option<String>,
}

/// Drawing/photo gate placed in front of the scorer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifierGate {
    pub classifier: ClassifierConfig,
    /// Returned verbatim when the image is classified as a photo
    pub rejection_message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    pub target_size: u32,
    pub unique_color_threshold: usize,
    pub filter: ResizeFilter,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            target_size: classifier::TARGET_SIZE,
            unique_color_threshold: classifier::UNIQUE_COLOR_THRESHOLD,
            filter: ResizeFilter::Nearest,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResizeFilter {
    Nearest,
    Triangle,
    CatmullRom,
    Gaussian,
    Lanczos3,
}

impl From<ResizeFilter> for FilterType {
    fn from(filter: ResizeFilter) -> Self {
        match filter {
            ResizeFilter::Nearest => FilterType::Nearest,
            ResizeFilter::Triangle => FilterType::Triangle,
            ResizeFilter::CatmullRom => FilterType::CatmullRom,
            ResizeFilter::Gaussian => FilterType::Gaussian,
            ResizeFilter::Lanczos3 => FilterType::Lanczos3,
        }
    }
}

/// Built-in configurations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Profile {
    /// Three statistics, one warning band each, fallback praise
    #[default]
    Basic,
    /// Three statistics with two or three bands each
    Detailed,
    /// Drawing gate, four sub-scores and a description sentence
    CharacterArt,
}

impl Profile {
    pub fn config(&self) -> EvaluatorConfig {
        match self {
            Profile::Basic => EvaluatorConfig::basic(),
            Profile::Detailed => EvaluatorConfig::detailed(),
            Profile::CharacterArt => EvaluatorConfig::character_art(),
        }
    }
}

fn msg(text: &str) -> Option<String> {
    Some(text.to_string())
}

impl EvaluatorConfig {
    /// Mirrors the first version of the tool: warnings only, praise otherwise
    pub fn basic() -> Self {
        let mut rules = IndexMap::new();
        rules.insert(
            Metric::Brightness,
            BandTable::new(
                vec![breakpoints::DARK_BRIGHTNESS],
                vec![
                    msg("The artwork is rather dark. Consider adjusting light and shade."),
                    None,
                ],
            ),
        );
        rules.insert(
            Metric::HueDiversity,
            BandTable::new(
                vec![breakpoints::FEW_HUES],
                vec![
                    msg("Only a few colors are used. Try experimenting with a wider palette."),
                    None,
                ],
            ),
        );
        rules.insert(
            Metric::Contrast,
            BandTable::new(
                vec![breakpoints::WEAK_CONTRAST],
                vec![
                    msg("Contrast is weak, so the artwork may feel flat."),
                    None,
                ],
            ),
        );

        Self {
            scoring: ScoringModel::Weighted {
                weights: ScoreWeights::default(),
                caps: NormalizationCaps::default(),
            },
            feedback: FeedbackConfig {
                rules,
                fallback: msg("The visual elements are well balanced. Wonderful work!"),
            },
            classifier_gate: None,
            description: None,
        }
    }

    /// Every statistic gets a message, with a third band for hues and contrast
    pub fn detailed() -> Self {
        Self {
            scoring: ScoringModel::Weighted {
                weights: ScoreWeights::default(),
                caps: NormalizationCaps::default(),
            },
            feedback: FeedbackConfig {
                rules: Self::detailed_statistic_rules(),
                fallback: None,
            },
            classifier_gate: None,
            description: None,
        }
    }

    /// Character drawings only: photos are turned away before scoring
    pub fn character_art() -> Self {
        let mut rules = Self::detailed_statistic_rules();
        let sub_score_bands = |weak: &str, fair: &str, strong: &str| {
            BandTable::new(
                vec![breakpoints::WEAK_SUB_SCORE, breakpoints::STRONG_SUB_SCORE],
                vec![msg(weak), msg(fair), msg(strong)],
            )
        };
        rules.insert(
            Metric::Shape,
            sub_score_bands(
                "Shapes are hard to read. Define the silhouette with clearer outlines.",
                "Shapes read reasonably well.",
                "Shapes are bold and clearly defined.",
            ),
        );
        rules.insert(
            Metric::Detail,
            sub_score_bands(
                "Details get lost in the dark areas.",
                "The level of detail is adequate.",
                "Details come through clearly.",
            ),
        );
        rules.insert(
            Metric::Natural,
            sub_score_bands(
                "Coloring looks limited. More hue variation would feel more natural.",
                "Coloring feels fairly natural.",
                "Coloring feels lively and natural.",
            ),
        );
        rules.insert(
            Metric::Color,
            sub_score_bands(
                "Color use is restrained. Try bolder combinations.",
                "Color use is balanced.",
                "Color use is vivid and expressive.",
            ),
        );

        Self {
            scoring: ScoringModel::CharacterArt {
                caps: NormalizationCaps::default(),
            },
            feedback: FeedbackConfig {
                rules,
                fallback: None,
            },
            classifier_gate: Some(ClassifierGate {
                classifier: ClassifierConfig::default(),
                rejection_message: "This image looks like a photograph. Character evaluation \
                                    only accepts drawings, please upload a drawing."
                    .to_string(),
            }),
            description: Some(
                "This looks like a character drawing. It is evaluated on shape, detail, \
                 natural coloring and color use."
                    .to_string(),
            ),
        }
    }

    fn detailed_statistic_rules() -> IndexMap<Metric, BandTable> {
        let mut rules = IndexMap::new();
        rules.insert(
            Metric::Brightness,
            BandTable::new(
                vec![breakpoints::DARK_BRIGHTNESS],
                vec![
                    msg("The artwork is rather dark. Consider adjusting light and shade."),
                    msg("Brightness is well balanced."),
                ],
            ),
        );
        rules.insert(
            Metric::HueDiversity,
            BandTable::new(
                vec![breakpoints::FEW_HUES, breakpoints::RICH_HUES],
                vec![
                    msg("Only a few colors are used. Try experimenting with a wider palette."),
                    msg("The palette has a moderate range of colors."),
                    msg("Rich color: the palette is wide and varied."),
                ],
            ),
        );
        rules.insert(
            Metric::Contrast,
            BandTable::new(
                vec![breakpoints::WEAK_CONTRAST, breakpoints::STRONG_CONTRAST],
                vec![
                    msg("Contrast is weak, so the artwork may feel flat."),
                    msg("Contrast is moderate. Deeper darks could add depth."),
                    msg("Strong contrast gives the artwork a clear structure."),
                ],
            ),
        );
        rules
    }

    /// Replace the classifier parameters of the gate, if there is one
    pub fn with_classifier(mut self, classifier: ClassifierConfig) -> Self {
        if let Some(gate) = self.classifier_gate.as_mut() {
            gate.classifier = classifier;
        }
        self
    }

    pub fn without_classifier_gate(mut self) -> Self {
        self.classifier_gate = None;
        self
    }

    /// Validate configuration parameters
    pub fn validate(&self) -> Result<(), EvaluationError> {
        self.validate_inner().map_err(EvaluationError::InvalidConfig)
    }

    fn validate_inner(&self) -> Result<(), String> {
        let caps = match &self.scoring {
            ScoringModel::Weighted { weights, caps } => {
                let all = [weights.brightness, weights.hue_diversity, weights.contrast];
                if all.iter().any(|w| !w.is_finite() || *w < 0.0) {
                    return Err("Score weights must be finite and non-negative".to_string());
                }
                if (weights.total() - 100.0).abs() > 1e-9 {
                    return Err(format!(
                        "Score weights must sum to 100, got {}",
                        weights.total()
                    ));
                }
                caps
            }
            ScoringModel::CharacterArt { caps } => caps,
        };

        let all_caps = [
            caps.brightness,
            caps.hue_diversity,
            caps.contrast,
            caps.color_combined,
        ];
        if all_caps.iter().any(|c| !c.is_finite() || *c <= 0.0) {
            return Err("Normalization caps must be finite and positive".to_string());
        }

        let sub_scores_available = matches!(self.scoring, ScoringModel::CharacterArt { .. });
        for (metric, table) in &self.feedback.rules {
            if metric.is_sub_score() && !sub_scores_available {
                return Err(format!(
                    "{:?} feedback requires the character_art scoring model",
                    metric
                ));
            }
            table.validate(*metric)?;
        }

        if let Some(gate) = &self.classifier_gate {
            if gate.classifier.target_size == 0 {
                return Err("Classifier target size must be greater than 0".to_string());
            }
            if gate.classifier.unique_color_threshold == 0 {
                return Err("Unique color threshold must be greater than 0".to_string());
            }
        }

        Ok(())
    }
}

impl Default for EvaluatorConfig {
    fn default() -> Self {
        Self::basic()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn built_in_profiles_are_valid() {
        for profile in [Profile::Basic, Profile::Detailed, Profile::CharacterArt] {
            assert!(profile.config().validate().is_ok(), "{:?}", profile);
        }
    }

    #[test]
    fn band_index_uses_half_open_intervals() {
        let table = BandTable::new(vec![20.0, 50.0], vec![None, None, None]);
        assert_eq!(table.band_index(0.0), 0);
        assert_eq!(table.band_index(19.999), 0);
        assert_eq!(table.band_index(20.0), 1);
        assert_eq!(table.band_index(49.9), 1);
        assert_eq!(table.band_index(50.0), 2);
        assert_eq!(table.band_index(1e9), 2);
    }

    #[test]
    fn rejects_descending_breakpoints() {
        let mut config = EvaluatorConfig::detailed();
        config.feedback.rules.insert(
            Metric::Contrast,
            BandTable::new(vec![60.0, 30.0], vec![None, None, None]),
        );
        assert!(matches!(
            config.validate(),
            Err(EvaluationError::InvalidConfig(_))
        ));
    }

    #[test]
    fn rejects_message_count_mismatch() {
        let mut config = EvaluatorConfig::basic();
        config.feedback.rules.insert(
            Metric::Brightness,
            BandTable::new(vec![80.0], vec![None]),
        );
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_sub_score_rules_without_character_model() {
        let mut config = EvaluatorConfig::basic();
        config
            .feedback
            .rules
            .insert(Metric::Shape, BandTable::new(vec![], vec![None]));
        assert!(config.validate().is_err());
    }

    #[test]
    fn empty_messages_count_as_none() {
        let table = BandTable::new(vec![10.0], vec![Some(String::new()), msg("high")]);
        assert_eq!(table.message_for(5.0), None);
        assert_eq!(table.message_for(15.0), Some("high"));
    }

    #[test]
    fn rejects_weights_not_summing_to_hundred() {
        let mut config = EvaluatorConfig::basic();
        config.scoring = ScoringModel::Weighted {
            weights: ScoreWeights {
                brightness: 50.0,
                hue_diversity: 50.0,
                contrast: 50.0,
            },
            caps: NormalizationCaps::default(),
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn with_classifier_only_touches_gated_profiles() {
        let classifier = ClassifierConfig {
            unique_color_threshold: 42,
            ..ClassifierConfig::default()
        };
        let gated = EvaluatorConfig::character_art().with_classifier(classifier);
        assert_eq!(
            gated.classifier_gate.unwrap().classifier.unique_color_threshold,
            42
        );
        assert!(EvaluatorConfig::basic()
            .with_classifier(classifier)
            .classifier_gate
            .is_none());
    }

    #[test]
    fn config_survives_json() {
        let config = EvaluatorConfig::character_art();
        let json = serde_json::to_string(&config).unwrap();
        let parsed: EvaluatorConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, parsed);
    }
}
