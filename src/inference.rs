//! The straight-line prediction pipeline: parse, scale, classify

use std::collections::HashMap;

use crate::artifacts::Artifacts;
use crate::features::parse_form;

/// Display label for the positive class.
pub const LABEL_CHURN: &str = "Churn";
/// Display label for the negative class.
pub const LABEL_NO_CHURN: &str = "No Churn";

/// Outcome of one classification, probabilities rounded for display.
#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    pub label: &'static str,
    pub prob_churn: f64,
    pub prob_no_churn: f64,
}

/// Run the full pipeline over submitted form fields.
///
/// Assembles the feature vector in training order, rescales the fitted
/// numeric columns, and classifies. Any failure along the way is returned
/// to the caller; nothing here panics on bad input.
pub fn predict(
    artifacts: &Artifacts,
    form: &HashMap<String, String>,
) -> crate::Result<Prediction> {
    let mut features = parse_form(form)?;
    tracing::info!("input vector: {:?}", features);

    artifacts.scaler.transform(&mut features);

    let probabilities = artifacts.model.predict_proba(&features);
    let label = if artifacts.model.predict(&features) == 1 {
        LABEL_CHURN
    } else {
        LABEL_NO_CHURN
    };

    Ok(Prediction {
        label,
        prob_no_churn: round2(probabilities[0]),
        prob_churn: round2(probabilities[1]),
    })
}

fn round2(p: f64) -> f64 {
    (p * 100.0).round() / 100.0
}
