// metrics.rs
// Purpose: Confusion-matrix evaluation of predicted vs actual churn labels

use serde::{Deserialize, Serialize};

use crate::errors::{ChurnError, ChurnResult};

/// 2x2 tally of (actual, predicted) label pairs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfusionMatrix {
    pub true_positives: usize,
    pub true_negatives: usize,
    pub false_positives: usize,
    pub false_negatives: usize,
}

impl ConfusionMatrix {
    /// Tally parallel label slices. The slices must be equal length and
    /// aligned index-by-index.
    pub fn tally(actual: &[bool], predicted: &[bool]) -> ChurnResult<Self> {
        if actual.len() != predicted.len() {
            return Err(ChurnError::LengthMismatch {
                actual: actual.len(),
                predicted: predicted.len(),
            });
        }

        let mut matrix = ConfusionMatrix::default();
        for (&a, &p) in actual.iter().zip(predicted.iter()) {
            match (a, p) {
                (true, true) => matrix.true_positives += 1,
                (false, false) => matrix.true_negatives += 1,
                (false, true) => matrix.false_positives += 1,
                (true, false) => matrix.false_negatives += 1,
            }
        }
        Ok(matrix)
    }

    pub fn total(&self) -> usize {
        self.true_positives + self.true_negatives + self.false_positives + self.false_negatives
    }
}

/// Aggregate classifier quality over a labeled batch, each value in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelMetrics {
    pub accuracy: f64,
    pub precision: f64,
    pub recall: f64,
    pub f1_score: f64,
}

impl ModelMetrics {
    pub const ZERO: ModelMetrics = ModelMetrics {
        accuracy: 0.0,
        precision: 0.0,
        recall: 0.0,
        f1_score: 0.0,
    };

    /// Derive metrics from a tallied matrix. Every zero denominator maps the
    /// affected metric to 0 rather than NaN.
    pub fn from_confusion(matrix: &ConfusionMatrix) -> Self {
        let accuracy = ratio(matrix.true_positives + matrix.true_negatives, matrix.total());
        let precision = ratio(
            matrix.true_positives,
            matrix.true_positives + matrix.false_positives,
        );
        let recall = ratio(
            matrix.true_positives,
            matrix.true_positives + matrix.false_negatives,
        );
        let f1_score = if precision + recall == 0.0 {
            0.0
        } else {
            2.0 * precision * recall / (precision + recall)
        };

        Self {
            accuracy,
            precision,
            recall,
            f1_score,
        }
    }
}

fn ratio(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}

/// Compute accuracy/precision/recall/F1 for parallel label slices.
pub fn compute_metrics(actual: &[bool], predicted: &[bool]) -> ChurnResult<ModelMetrics> {
    let matrix = ConfusionMatrix::tally(actual, predicted)?;
    Ok(ModelMetrics::from_confusion(&matrix))
}
