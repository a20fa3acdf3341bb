// dataset.rs
// Purpose: Load customer batches and label pairs from CSV, export scored
// records as JSON

use serde::Deserialize;
use std::fs::File;
use std::path::Path;
use uuid::Uuid;

use crate::customer::CustomerRecord;
use crate::errors::{ChurnError, ChurnResult};

/// Flat CSV row shape for one customer. Product categories are a single
/// `;`-separated cell; a missing id gets a generated one.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CustomerRow {
    #[serde(default)]
    id: Option<String>,
    name: String,
    email: String,
    age: f64,
    #[serde(default)]
    gender: String,
    segment: String,
    #[serde(default)]
    region: String,
    join_date: chrono::DateTime<chrono::Utc>,
    subscription_tier: String,
    monthly_spend: f64,
    total_spend: f64,
    last_purchase_date: chrono::DateTime<chrono::Utc>,
    purchase_frequency: f64,
    #[serde(default)]
    product_categories: String,
    avg_session_time: f64,
    login_frequency: f64,
    support_tickets: f64,
    days_inactive: f64,
    churn: bool,
}

impl CustomerRow {
    fn into_record(self) -> CustomerRecord {
        let product_categories = self
            .product_categories
            .split(';')
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();

        CustomerRecord {
            id: self
                .id
                .unwrap_or_else(|| format!("CUS-{}", Uuid::new_v4())),
            name: self.name,
            email: self.email,
            age: self.age,
            gender: self.gender,
            segment: self.segment,
            region: self.region,
            join_date: self.join_date,
            subscription_tier: self.subscription_tier,
            monthly_spend: self.monthly_spend,
            total_spend: self.total_spend,
            last_purchase_date: self.last_purchase_date,
            purchase_frequency: self.purchase_frequency,
            product_categories,
            avg_session_time: self.avg_session_time,
            login_frequency: self.login_frequency,
            support_tickets: self.support_tickets,
            days_inactive: self.days_inactive,
            churn: self.churn,
            churn_probability: None,
            predicted_churn: None,
        }
    }
}

/// Load customers from a headered CSV file.
pub fn load_customers_csv(path: &Path) -> ChurnResult<Vec<CustomerRecord>> {
    let mut reader = csv::Reader::from_path(path)
        .map_err(|e| ChurnError::csv(format!("opening {}", path.display()), e))?;

    let mut customers = Vec::new();
    for result in reader.deserialize() {
        let row: CustomerRow =
            result.map_err(|e| ChurnError::csv(format!("reading {}", path.display()), e))?;
        customers.push(row.into_record());
    }

    tracing::info!(customers = customers.len(), path = %path.display(), "loaded customer csv");
    Ok(customers)
}

#[derive(Debug, Deserialize)]
struct LabelRow {
    actual: bool,
    predicted: bool,
}

/// Load parallel (actual, predicted) label columns from a headered CSV file.
pub fn load_label_pairs_csv(path: &Path) -> ChurnResult<(Vec<bool>, Vec<bool>)> {
    let mut reader = csv::Reader::from_path(path)
        .map_err(|e| ChurnError::csv(format!("opening {}", path.display()), e))?;

    let mut actual = Vec::new();
    let mut predicted = Vec::new();
    for result in reader.deserialize() {
        let row: LabelRow =
            result.map_err(|e| ChurnError::csv(format!("reading {}", path.display()), e))?;
        actual.push(row.actual);
        predicted.push(row.predicted);
    }
    Ok((actual, predicted))
}

/// Write scored customers to `path` as pretty-printed JSON.
pub fn write_scored_json(path: &Path, customers: &[CustomerRecord]) -> ChurnResult<()> {
    let file = File::create(path)
        .map_err(|e| ChurnError::io(format!("creating {}", path.display()), e))?;
    serde_json::to_writer_pretty(file, customers)
        .map_err(|e| ChurnError::serialization("writing scored customers", e))?;

    tracing::info!(customers = customers.len(), path = %path.display(), "exported scored customers");
    Ok(())
}
