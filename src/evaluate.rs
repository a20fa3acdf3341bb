// evaluate.rs
// Purpose: Batch evaluation pipeline tying feature extraction, scoring and
// metrics together

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::customer::CustomerRecord;
use crate::errors::ChurnResult;
use crate::features::extract_features;
use crate::metrics::{compute_metrics, ModelMetrics};
use crate::model::{ChurnModel, Prediction};

/// Outcome of fitting the model against a labeled batch.
///
/// The weights never change; fitting only measures how the configured model
/// performs against the batch's ground-truth labels.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainingReport {
    pub model: ChurnModel,
    pub metrics: ModelMetrics,
}

/// Extract features for one customer and score them.
pub fn predict_churn(
    model: &ChurnModel,
    customer: &CustomerRecord,
    now: DateTime<Utc>,
) -> ChurnResult<Prediction> {
    let features = extract_features(customer, now);
    model.score(&features)
}

/// Score every customer against its ground-truth churn label and report the
/// model's metrics over the batch.
pub fn fit_model(
    model: &ChurnModel,
    customers: &[CustomerRecord],
    now: DateTime<Utc>,
) -> ChurnResult<TrainingReport> {
    let mut predicted = Vec::with_capacity(customers.len());
    for customer in customers {
        predicted.push(predict_churn(model, customer, now)?.prediction);
    }
    let actual: Vec<bool> = customers.iter().map(|c| c.churn).collect();

    let metrics = compute_metrics(&actual, &predicted)?;
    tracing::info!(
        customers = customers.len(),
        accuracy = metrics.accuracy,
        f1 = metrics.f1_score,
        "evaluated churn model"
    );

    Ok(TrainingReport {
        model: model.clone(),
        metrics,
    })
}

/// Annotate each record with its churn probability and predicted label.
pub fn apply_predictions(
    model: &ChurnModel,
    customers: &mut [CustomerRecord],
    now: DateTime<Utc>,
) -> ChurnResult<()> {
    for customer in customers.iter_mut() {
        let prediction = predict_churn(model, customer, now)?;
        customer.churn_probability = Some(prediction.probability);
        customer.predicted_churn = Some(prediction.prediction);
    }
    tracing::debug!(customers = customers.len(), "applied churn predictions");
    Ok(())
}
