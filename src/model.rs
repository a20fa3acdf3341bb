// model.rs
// Purpose: Fixed-weight logistic churn classifier

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::errors::{ChurnError, ChurnResult};
use crate::features::FeatureVector;

/// Weight configuration for the logistic churn model.
///
/// This is a constant lookup table, not a learned artifact: the reference
/// weights below are hand-picked, and "training" elsewhere in the crate only
/// evaluates them against labeled data. The table is keyed by feature name
/// and must stay in lockstep with `features::FEATURE_NAMES`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChurnModel {
    #[serde(default)]
    pub weights: HashMap<String, f64>,
    #[serde(default = "default_bias")]
    pub bias: f64,
}

fn default_bias() -> f64 {
    0.5
}

impl Default for ChurnModel {
    fn default() -> Self {
        let weights = HashMap::from([
            ("age".to_string(), -0.01),
            ("monthlySpend".to_string(), -0.003),
            ("totalSpend".to_string(), -0.0005),
            ("purchaseFrequency".to_string(), -0.08),
            ("avgSessionTime".to_string(), -0.03),
            ("loginFrequency".to_string(), -0.05),
            ("supportTickets".to_string(), 0.15),
            ("daysInactive".to_string(), 0.05),
            ("subscriptionTierValue".to_string(), -0.3),
            ("tenure".to_string(), -0.002),
        ]);

        Self { weights, bias: 0.5 }
    }
}

/// Scoring outcome for one feature vector
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Prediction {
    /// Churn probability, strictly inside (0, 1).
    pub probability: f64,
    /// True when probability exceeds 0.5. Exactly 0.5 predicts negative.
    pub prediction: bool,
}

fn sigmoid(z: f64) -> f64 {
    // f64 saturates to exactly 0 or 1 for large |z|; the probability
    // contract is the open interval (0, 1)
    let probability = 1.0 / (1.0 + (-z).exp());
    probability.clamp(f64::MIN_POSITIVE, 1.0 - f64::EPSILON)
}

impl ChurnModel {
    pub fn new(weights: HashMap<String, f64>, bias: f64) -> Self {
        Self { weights, bias }
    }

    /// Score one feature vector.
    ///
    /// Computes `bias + sum(weight[name] * value)` over the ten features and
    /// squashes through the logistic function. A feature name with no
    /// configured weight is a schema mismatch and fails fast with a
    /// configuration error.
    pub fn score(&self, features: &FeatureVector) -> ChurnResult<Prediction> {
        let mut z = self.bias;

        for (name, value) in features.named_values() {
            let weight = self.weights.get(name).ok_or_else(|| {
                ChurnError::config(format!("no weight configured for feature '{name}'"))
            })?;
            z += weight * value;
        }

        let probability = sigmoid(z);

        Ok(Prediction {
            probability,
            prediction: probability > 0.5,
        })
    }
}
