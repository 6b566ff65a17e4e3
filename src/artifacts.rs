//! Pre-trained artifacts: scaler and classifier parameter files
//!
//! Both artifacts are produced by the training pipeline and exported as JSON
//! parameter files. They are validated against the declared feature schema
//! when loaded at process startup and shared read-only for the lifetime of
//! the process.

use std::fs::File;
use std::io::BufReader;

use anyhow::{bail, Context};
use ndarray::Array1;
use serde::Deserialize;

use crate::features::{feature_index, FEATURES};

/// Standard-score scaler fitted upstream on a subset of numeric columns.
#[derive(Debug, Clone, Deserialize)]
pub struct StandardScaler {
    /// Names of the columns the scaler was fitted on
    pub columns: Vec<String>,
    /// Per-column mean at fit time
    pub mean: Vec<f64>,
    /// Per-column scale (standard deviation) at fit time
    pub scale: Vec<f64>,
}

impl StandardScaler {
    /// Load and validate a scaler parameter file.
    pub fn load(path: &str) -> crate::Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("failed to open scaler file: {}", path))?;
        let scaler: StandardScaler = serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("failed to parse scaler file: {}", path))?;
        scaler.validate()?;
        Ok(scaler)
    }

    /// Rescale the fitted columns of a feature vector in place.
    ///
    /// Columns the scaler was not fitted on pass through untouched.
    pub fn transform(&self, features: &mut Array1<f64>) {
        for (i, column) in self.columns.iter().enumerate() {
            // Column names were checked against the schema at load time
            if let Some(idx) = feature_index(column) {
                features[idx] = (features[idx] - self.mean[i]) / self.scale[i];
            }
        }
    }

    fn validate(&self) -> crate::Result<()> {
        if self.columns.is_empty() {
            bail!("scaler has no columns");
        }
        if self.mean.len() != self.columns.len() || self.scale.len() != self.columns.len() {
            bail!(
                "scaler dimension mismatch: {} columns, {} means, {} scales",
                self.columns.len(),
                self.mean.len(),
                self.scale.len()
            );
        }
        for column in &self.columns {
            if feature_index(column).is_none() {
                bail!("scaler column is not a declared feature: {}", column);
            }
        }
        for (column, &scale) in self.columns.iter().zip(self.scale.iter()) {
            if scale == 0.0 || !scale.is_finite() {
                bail!("scaler has degenerate scale for column {}: {}", column, scale);
            }
        }
        Ok(())
    }
}

/// Binary logistic classifier exported from the training pipeline.
///
/// Coefficients are positional over the declared feature order.
#[derive(Debug, Clone, Deserialize)]
pub struct ChurnModel {
    /// One weight per feature, in training order
    pub coefficients: Vec<f64>,
    /// Bias term
    pub intercept: f64,
}

impl ChurnModel {
    /// Load and validate a classifier parameter file.
    pub fn load(path: &str) -> crate::Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("failed to open model file: {}", path))?;
        let model: ChurnModel = serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("failed to parse model file: {}", path))?;
        model.validate()?;
        Ok(model)
    }

    /// Class probabilities `[P(no churn), P(churn)]` for one feature vector.
    pub fn predict_proba(&self, features: &Array1<f64>) -> [f64; 2] {
        let z: f64 = self.intercept
            + features
                .iter()
                .zip(self.coefficients.iter())
                .map(|(x, w)| x * w)
                .sum::<f64>();
        let p_churn = sigmoid(z);
        [1.0 - p_churn, p_churn]
    }

    /// Discrete label: 1 = churn, 0 = no churn, thresholded at 0.5.
    pub fn predict(&self, features: &Array1<f64>) -> u8 {
        u8::from(self.predict_proba(features)[1] >= 0.5)
    }

    fn validate(&self) -> crate::Result<()> {
        if self.coefficients.len() != FEATURES.len() {
            bail!(
                "model expects {} coefficients, found {}",
                FEATURES.len(),
                self.coefficients.len()
            );
        }
        Ok(())
    }
}

/// Both artifacts, loaded once at startup and injected read-only into the
/// request-handling path.
#[derive(Debug, Clone)]
pub struct Artifacts {
    pub model: ChurnModel,
    pub scaler: StandardScaler,
}

impl Artifacts {
    /// Load both parameter files. Any failure here is fatal for startup.
    pub fn load(model_path: &str, scaler_path: &str) -> crate::Result<Self> {
        let model = ChurnModel::load(model_path)?;
        let scaler = StandardScaler::load(scaler_path)?;
        Ok(Self { model, scaler })
    }
}

fn sigmoid(z: f64) -> f64 {
    1.0 / (1.0 + (-z).exp())
}
