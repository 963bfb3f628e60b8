use crate::pipeline::analysis::config::{FeedbackConfig, Metric};
use crate::pipeline::domain::{StatisticsSnapshot, SubScores};

/// Selects one canned message per metric from its band table.
///
/// Rules are independent: a metric's message never depends on another
/// metric's value.
#[derive(Debug, Clone)]
pub struct FeedbackComposer {
    config: FeedbackConfig,
}

impl FeedbackComposer {
    pub fn new(mut config: FeedbackConfig) -> Self {
        config.rules.sort_keys();
        Self { config }
    }

    pub fn compose(&self, stats: &StatisticsSnapshot, sub_scores: Option<&SubScores>) -> Vec<String> {
        let mut lines: Vec<String> = self
            .config
            .rules
            .iter()
            .filter_map(|(metric, table)| {
                let value = metric_value(*metric, stats, sub_scores)?;
                table.message_for(value).map(str::to_string)
            })
            .collect();

        if lines.is_empty() {
            if let Some(fallback) = &self.config.fallback {
                lines.push(fallback.clone());
            }
        }

        lines
    }
}

/// Reads a metric, or `None` for a sub-score when there are no sub-scores
pub fn metric_value(
    metric: Metric,
    stats: &StatisticsSnapshot,
    sub_scores: Option<&SubScores>,
) -> Option<f64> {
    match metric {
        Metric::Brightness => Some(stats.brightness()),
        Metric::HueDiversity => Some(stats.hue_diversity() as f64),
        Metric::Contrast => Some(stats.contrast()),
        Metric::Shape => sub_scores.map(|s| s.shape),
        Metric::Detail => sub_scores.map(|s| s.detail),
        Metric::Natural => sub_scores.map(|s| s.natural),
        Metric::Color => sub_scores.map(|s| s.color),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::analysis::config::{BandTable, EvaluatorConfig};
    use indexmap::IndexMap;

    fn basic() -> FeedbackComposer {
        FeedbackComposer::new(EvaluatorConfig::basic().feedback)
    }

    #[test]
    fn dark_flat_narrow_image_gets_all_three_warnings() {
        let lines = basic().compose(&StatisticsSnapshot::new(0.0, 0.0, 1), None);
        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("dark"));
        assert!(lines[1].contains("few colors"));
        assert!(lines[2].contains("Contrast is weak"));
    }

    #[test]
    fn balanced_image_gets_fallback_only() {
        let lines = basic().compose(&StatisticsSnapshot::new(120.0, 50.0, 60), None);
        assert_eq!(
            lines,
            vec!["The visual elements are well balanced. Wonderful work!".to_string()]
        );
    }

    #[test]
    fn boundaries_belong_to_upper_band() {
        let lines = basic().compose(&StatisticsSnapshot::new(80.0, 30.0, 20), None);
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("well balanced"));
    }

    #[test]
    fn each_rule_only_reads_its_own_metric() {
        let composer = basic();
        let dark = composer.compose(&StatisticsSnapshot::new(10.0, 90.0, 90), None);
        let dark_flat = composer.compose(&StatisticsSnapshot::new(10.0, 5.0, 90), None);
        assert_eq!(dark[0], dark_flat[0]);
        assert_eq!(dark.len(), 1);
        assert_eq!(dark_flat.len(), 2);
    }

    #[test]
    fn detailed_profile_reports_rich_color_band() {
        let composer = FeedbackComposer::new(EvaluatorConfig::detailed().feedback);
        let lines = composer.compose(&StatisticsSnapshot::new(120.0, 70.0, 200), None);
        assert_eq!(lines.len(), 3);
        assert!(lines[1].starts_with("Rich color"));
        assert!(lines[2].starts_with("Strong contrast"));
    }

    #[test]
    fn sub_score_rules_follow_statistic_rules() {
        let composer = FeedbackComposer::new(EvaluatorConfig::character_art().feedback);
        let sub_scores = SubScores {
            shape: 10.0,
            detail: 50.0,
            natural: 90.0,
            color: 70.0,
        };
        let lines = composer.compose(&StatisticsSnapshot::new(120.0, 70.0, 200), Some(&sub_scores));
        assert_eq!(lines.len(), 7);
        assert!(lines[3].starts_with("Shapes are hard to read"));
        assert_eq!(lines[4], "The level of detail is adequate.");
        assert_eq!(lines[5], "Coloring feels lively and natural.");
        assert_eq!(lines[6], "Color use is vivid and expressive.");
    }

    #[test]
    fn sub_score_rules_are_skipped_without_sub_scores() {
        let composer = FeedbackComposer::new(EvaluatorConfig::character_art().feedback);
        let lines = composer.compose(&StatisticsSnapshot::new(120.0, 70.0, 200), None);
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn rules_are_emitted_in_metric_order() {
        let mut config = EvaluatorConfig::basic().feedback;
        let brightness = config.rules.shift_remove(&Metric::Brightness).unwrap();
        config.rules.insert(Metric::Brightness, brightness);
        assert_eq!(config.rules.keys().last(), Some(&Metric::Brightness));

        let lines = FeedbackComposer::new(config).compose(&StatisticsSnapshot::new(0.0, 0.0, 1), None);
        assert!(lines[0].contains("dark"));
        assert!(lines[2].contains("Contrast is weak"));
    }

    #[test]
    fn empty_rules_without_fallback_produce_nothing() {
        let composer = FeedbackComposer::new(FeedbackConfig {
            rules: IndexMap::from([(Metric::Brightness, BandTable::new(vec![], vec![None]))]),
            fallback: None,
        });
        assert!(composer
            .compose(&StatisticsSnapshot::new(0.0, 0.0, 0), None)
            .is_empty());
    }
}
