//! ChurnScope: a Rust web service for customer churn prediction
//!
//! This library implements one inference endpoint: a single-page web form
//! whose submissions are assembled into a fixed 29-column feature vector
//! and classified by pre-trained artifacts (a standard scaler plus a
//! binary logistic model) loaded once at startup.

pub mod artifacts;
pub mod cli;
pub mod features;
pub mod inference;
pub mod server;

// Re-export public items for easier access
pub use artifacts::{Artifacts, ChurnModel, StandardScaler};
pub use cli::Args;
pub use features::{parse_form, FEATURES, SCALED_COLUMNS};
pub use inference::{predict, Prediction, LABEL_CHURN, LABEL_NO_CHURN};

/// Common result type used throughout the application
pub type Result<T> = anyhow::Result<T>;
