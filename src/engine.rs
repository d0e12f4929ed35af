use tracing::debug;

use crate::error::AppError;
use crate::features::Featurizer;
use crate::scorer;
use crate::types::{FeatureRecord, ScoreResult};

/// Ties the featurizer and the rule scorer into the single evaluation
/// entrypoint the handlers call.
pub struct RiskEngine {
    featurizer: Featurizer,
}

impl RiskEngine {
    pub fn new() -> Self {
        Self {
            featurizer: Featurizer::new(),
        }
    }

    pub fn evaluate(&self, raw: &str) -> Result<(FeatureRecord, ScoreResult), AppError> {
        let features = self.featurizer.extract(raw)?;
        let result = scorer::score(&features);
        debug!(
            "scored url as {} ({} points)",
            result.label.as_str(),
            result.score
        );
        Ok((features, result))
    }
}
