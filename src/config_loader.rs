use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::customer::RiskBands;
use crate::features::FEATURE_NAMES;
use crate::model::ChurnModel;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DataConfig {
    /// Customers generated for the demo run.
    pub customer_count: usize,
    /// Seed for reproducible generation; unset means a fresh batch per run.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            customer_count: 100,
            seed: None,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ChurnsightConfig {
    #[serde(default)]
    pub model: ChurnModel,
    #[serde(default)]
    pub data: DataConfig,
    #[serde(default)]
    pub risk_bands: RiskBands,
}

// Defaults omit the model section so a weight table written in TOML replaces
// the built-in one instead of merging into it.
#[derive(Serialize)]
struct ChurnsightDefaults {
    data: DataConfig,
    risk_bands: RiskBands,
}

/// Load configuration from defaults, `churnsight.toml` (or an explicit path)
/// and `CHURNSIGHT_`-prefixed environment variables, in that precedence order.
pub fn load_config(path: Option<&str>) -> Result<ChurnsightConfig, figment::Error> {
    let figment = Figment::from(Serialized::defaults(ChurnsightDefaults {
        data: DataConfig::default(),
        risk_bands: RiskBands::default(),
    }))
        .merge(Toml::file(path.unwrap_or("churnsight.toml")))
        .merge(Env::prefixed("CHURNSIGHT_"));

    let config: ChurnsightConfig = figment.extract()?;

    for name in FEATURE_NAMES {
        if !config.model.weights.contains_key(name) {
            return Err(figment::Error::from(format!(
                "model.weights is missing feature '{name}'"
            )));
        }
    }

    if !(0.0 < config.risk_bands.medium
        && config.risk_bands.medium < config.risk_bands.high
        && config.risk_bands.high <= 1.0)
    {
        return Err(figment::Error::from(
            "risk_bands cut points must satisfy 0 < medium < high <= 1".to_string(),
        ));
    }

    Ok(config)
}
