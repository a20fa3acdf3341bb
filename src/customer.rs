// customer.rs
// Purpose: Customer record data model shared by the scoring core, the mock
// generator and the dataset importer

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One customer as supplied by the surrounding application.
///
/// Identity fields (id, name, email) and the descriptive fields (gender,
/// segment, region, product categories) are inert for scoring; only the
/// behavioral fields feed the feature vector. The scorer treats the record
/// as read-only — `churn_probability` and `predicted_churn` are filled in by
/// `evaluate::apply_predictions`, never by the record's producer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerRecord {
    pub id: String,
    pub name: String,
    pub email: String,
    pub age: f64,
    pub gender: String,
    pub segment: String,
    pub region: String,
    pub join_date: DateTime<Utc>,
    pub subscription_tier: String,
    pub monthly_spend: f64,
    pub total_spend: f64,
    pub last_purchase_date: DateTime<Utc>,
    pub purchase_frequency: f64,
    pub product_categories: Vec<String>,
    pub avg_session_time: f64,
    pub login_frequency: f64,
    pub support_tickets: f64,
    pub days_inactive: f64,
    /// Ground-truth churn label.
    pub churn: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub churn_probability: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub predicted_churn: Option<bool>,
}

/// Cut points separating the three risk bands.
///
/// A probability below `medium` is low risk, below `high` is medium risk,
/// everything else high risk.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RiskBands {
    pub medium: f64,
    pub high: f64,
}

impl Default for RiskBands {
    fn default() -> Self {
        Self {
            medium: 0.3,
            high: 0.7,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RiskBand {
    Low,
    Medium,
    High,
}

impl RiskBand {
    pub fn classify(probability: f64, bands: &RiskBands) -> Self {
        if probability < bands.medium {
            RiskBand::Low
        } else if probability < bands.high {
            RiskBand::Medium
        } else {
            RiskBand::High
        }
    }

    /// Classification with the default 0.3 / 0.7 cut points.
    pub fn from_probability(probability: f64) -> Self {
        Self::classify(probability, &RiskBands::default())
    }
}

impl FromStr for RiskBand {
    type Err = ();

    fn from_str(input: &str) -> Result<RiskBand, Self::Err> {
        match input.to_lowercase().as_str() {
            "low" => Ok(RiskBand::Low),
            "medium" => Ok(RiskBand::Medium),
            "high" => Ok(RiskBand::High),
            _ => Err(()),
        }
    }
}

impl fmt::Display for RiskBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}
