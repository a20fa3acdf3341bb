// insights.rs
// Purpose: Pure aggregations over a scored customer batch (risk bands,
// churn-factor comparison, segment breakdown)

use serde::Serialize;
use std::collections::BTreeMap;

use crate::customer::{CustomerRecord, RiskBand, RiskBands};

/// Customer counts per risk band. Unscored records are not counted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RiskDistribution {
    pub low: usize,
    pub medium: usize,
    pub high: usize,
}

pub fn risk_distribution(customers: &[CustomerRecord], bands: &RiskBands) -> RiskDistribution {
    let mut distribution = RiskDistribution::default();
    for customer in customers {
        let Some(probability) = customer.churn_probability else {
            continue;
        };
        match RiskBand::classify(probability, bands) {
            RiskBand::Low => distribution.low += 1,
            RiskBand::Medium => distribution.medium += 1,
            RiskBand::High => distribution.high += 1,
        }
    }
    distribution
}

/// Number of scored customers at or above the high-risk cut point.
pub fn high_risk_count(customers: &[CustomerRecord], bands: &RiskBands) -> usize {
    customers
        .iter()
        .filter(|c| c.churn_probability.is_some_and(|p| p >= bands.high))
        .count()
}

/// Churned-vs-active mean of one behavioral field.
///
/// `difference` is the percent gap oriented so that a churn-driving factor
/// reads positive: ticket counts and inactivity compare churned over active,
/// logins and spend compare active over churned.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FactorComparison {
    pub name: &'static str,
    pub churned: f64,
    pub active: f64,
    pub difference: f64,
}

/// Compare churned and active populations across the four behavioral factors
/// the dashboard highlights. Empty when either population is empty.
pub fn factor_comparison(customers: &[CustomerRecord]) -> Vec<FactorComparison> {
    let churned: Vec<&CustomerRecord> = customers.iter().filter(|c| c.churn).collect();
    let active: Vec<&CustomerRecord> = customers.iter().filter(|c| !c.churn).collect();

    if churned.is_empty() || active.is_empty() {
        return Vec::new();
    }

    let mean = |group: &[&CustomerRecord], field: fn(&CustomerRecord) -> f64| -> f64 {
        group.iter().map(|c| field(c)).sum::<f64>() / group.len() as f64
    };
    let percent_gap = |numerator: f64, denominator: f64| -> f64 {
        if denominator == 0.0 {
            0.0
        } else {
            (numerator / denominator - 1.0) * 100.0
        }
    };

    let factors: [(&'static str, fn(&CustomerRecord) -> f64, bool); 4] = [
        ("Support Tickets", |c| c.support_tickets, true),
        ("Login Frequency", |c| c.login_frequency, false),
        ("Days Inactive", |c| c.days_inactive, true),
        ("Monthly Spend", |c| c.monthly_spend, false),
    ];

    factors
        .iter()
        .map(|&(name, field, churn_driven)| {
            let churned_mean = mean(&churned, field);
            let active_mean = mean(&active, field);
            let difference = if churn_driven {
                percent_gap(churned_mean, active_mean)
            } else {
                percent_gap(active_mean, churned_mean)
            };
            FactorComparison {
                name,
                churned: churned_mean,
                active: active_mean,
                difference,
            }
        })
        .collect()
}

/// Per-segment headcount and observed churn rate
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SegmentBreakdown {
    pub segment: String,
    pub customers: usize,
    /// Share of the segment with a ground-truth churn label, in percent.
    pub churn_rate: f64,
}

pub fn segment_breakdown(customers: &[CustomerRecord]) -> Vec<SegmentBreakdown> {
    let mut segments: BTreeMap<&str, (usize, usize)> = BTreeMap::new();
    for customer in customers {
        let entry = segments.entry(customer.segment.as_str()).or_default();
        entry.0 += 1;
        if customer.churn {
            entry.1 += 1;
        }
    }

    segments
        .into_iter()
        .map(|(segment, (count, churned))| SegmentBreakdown {
            segment: segment.to_string(),
            customers: count,
            churn_rate: churned as f64 / count as f64 * 100.0,
        })
        .collect()
}
