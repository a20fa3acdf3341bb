// features.rs
// Purpose: Fixed-schema feature extraction from a customer record

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::customer::CustomerRecord;

/// Canonical feature order. Weight lookup and the dot product both follow
/// this order; the model's weight table must cover exactly these names.
pub const FEATURE_NAMES: [&str; 10] = [
    "age",
    "monthlySpend",
    "totalSpend",
    "purchaseFrequency",
    "avgSessionTime",
    "loginFrequency",
    "supportTickets",
    "daysInactive",
    "subscriptionTierValue",
    "tenure",
];

/// Numeric encoding of one customer for the classifier
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureVector {
    pub age: f64,
    pub monthly_spend: f64,
    pub total_spend: f64,
    pub purchase_frequency: f64,
    pub avg_session_time: f64,
    pub login_frequency: f64,
    pub support_tickets: f64,
    pub days_inactive: f64,
    pub subscription_tier_value: f64,
    pub tenure: f64,
}

impl FeatureVector {
    /// Feature values in `FEATURE_NAMES` order.
    pub fn to_vector(&self) -> [f64; 10] {
        [
            self.age,
            self.monthly_spend,
            self.total_spend,
            self.purchase_frequency,
            self.avg_session_time,
            self.login_frequency,
            self.support_tickets,
            self.days_inactive,
            self.subscription_tier_value,
            self.tenure,
        ]
    }

    /// (name, value) pairs in `FEATURE_NAMES` order, for weight lookup.
    pub fn named_values(&self) -> [(&'static str, f64); 10] {
        let values = self.to_vector();
        let mut pairs = [("", 0.0); 10];
        for (i, name) in FEATURE_NAMES.into_iter().enumerate() {
            pairs[i] = (name, values[i]);
        }
        pairs
    }
}

/// Ordinal encoding of the subscription tier. Unknown tiers map to 0.
pub fn subscription_tier_value(tier: &str) -> f64 {
    match tier {
        "Free" => 1.0,
        "Basic" => 2.0,
        "Premium" => 3.0,
        "Enterprise" => 4.0,
        _ => 0.0,
    }
}

/// Build the feature vector for one customer relative to `now`.
///
/// Tenure is whole days since the join date, truncated toward zero. A join
/// date in the future yields a negative tenure; records are assumed
/// well-formed and are not validated here.
pub fn extract_features(record: &CustomerRecord, now: DateTime<Utc>) -> FeatureVector {
    let tenure_days = (now - record.join_date).num_days();

    FeatureVector {
        age: record.age,
        monthly_spend: record.monthly_spend,
        total_spend: record.total_spend,
        purchase_frequency: record.purchase_frequency,
        avg_session_time: record.avg_session_time,
        login_frequency: record.login_frequency,
        support_tickets: record.support_tickets,
        days_inactive: record.days_inactive,
        subscription_tier_value: subscription_tier_value(&record.subscription_tier),
        tenure: tenure_days as f64,
    }
}
