//! Library root for the `churnsight` crate
//!
//! A synchronous churn scoring core: fixed-schema feature extraction from
//! customer records, a constant-weight logistic classifier and
//! confusion-matrix evaluation, plus the mock-data and dataset plumbing the
//! CLI drives it with.

// Core error handling
pub mod errors;

// Customer data model
pub mod customer;

// Scoring core
pub mod features;
pub mod metrics;
pub mod model;

// Evaluation pipeline & batch insights
pub mod evaluate;
pub mod insights;

// Data generation & import/export
pub mod dataset;
pub mod mock_data;

// Configuration & CLI
pub mod cli;
pub mod config_loader;


// Re-export the scorer's entry points
pub use customer::{CustomerRecord, RiskBand, RiskBands};
pub use errors::{ChurnError, ChurnResult};
pub use evaluate::{apply_predictions, fit_model, predict_churn, TrainingReport};
pub use features::{extract_features, FeatureVector, FEATURE_NAMES};
pub use metrics::{compute_metrics, ConfusionMatrix, ModelMetrics};
pub use model::{ChurnModel, Prediction};
