use crate::pipeline::domain::classification::ClassificationResult;
use crate::pipeline::domain::statistics::{StatisticsSnapshot, SubScores};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Final score and feedback for one image
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreReport {
    pub total_score: f64,
    pub feedback: Vec<String>,
    pub statistics: StatisticsSnapshot,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_scores: Option<SubScores>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub classification: Option<ClassificationResult>,
}

/// Outcome of one evaluation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Evaluation {
    Scored(ScoreReport),
    /// The classifier gate turned the image away. This is policy, not a fault.
    Rejected {
        classification: ClassificationResult,
        message: String,
    },
}

impl Evaluation {
    pub fn report(&self) -> Option<&ScoreReport> {
        match self {
            Evaluation::Scored(report) => Some(report),
            Evaluation::Rejected { .. } => None,
        }
    }

    pub fn is_rejected(&self) -> bool {
        matches!(self, Evaluation::Rejected { .. })
    }
}

impl fmt::Display for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Evaluation::Scored(report) => {
                if let Some(description) = &report.description {
                    writeln!(f, "{}", description)?;
                }
                writeln!(f, "Total score: {:.1} / 100", report.total_score)?;
                writeln!(f, "---")?;
                writeln!(f, "Feedback:")?;
                for line in &report.feedback {
                    writeln!(f, "- {}", line)?;
                }
                Ok(())
            }
            Evaluation::Rejected { message, .. } => writeln!(f, "{}", message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::domain::classification::Classification;

    fn report() -> ScoreReport {
        ScoreReport {
            total_score: 42.5,
            feedback: vec!["first".to_string(), "second".to_string()],
            statistics: StatisticsSnapshot::new(10.0, 5.0, 3),
            sub_scores: None,
            description: None,
            classification: None,
        }
    }

    #[test]
    fn scored_evaluation_renders_header_and_bullets() {
        let rendered = Evaluation::Scored(report()).to_string();
        assert!(rendered.starts_with("Total score: 42.5 / 100"));
        assert!(rendered.contains("- first\n- second\n"));
    }

    #[test]
    fn rejected_evaluation_renders_message_only() {
        let evaluation = Evaluation::Rejected {
            classification: ClassificationResult::new(Classification::Photo, 20_000, 15_000),
            message: "no photos".to_string(),
        };
        assert_eq!(evaluation.to_string(), "no photos\n");
        assert!(evaluation.report().is_none());
    }

    #[test]
    fn serialized_outcome_is_tagged() {
        let json = serde_json::to_value(Evaluation::Scored(report())).unwrap();
        assert_eq!(json["outcome"], "scored");
        assert!(json.get("sub_scores").is_none());
    }
}
