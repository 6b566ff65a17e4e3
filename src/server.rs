//! HTTP surface: one route serving the input form and its predictions

use std::collections::HashMap;
use std::sync::Arc;

use askama::Template;
use axum::extract::{Form, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::Router;

use crate::artifacts::Artifacts;
use crate::features::FEATURES;
use crate::inference;

/// Shared read-only state injected into the handler path. The artifacts are
/// loaded once before the server starts and never mutated afterwards.
#[derive(Clone)]
pub struct AppState {
    pub artifacts: Arc<Artifacts>,
}

/// Build the application router.
pub fn app(artifacts: Arc<Artifacts>) -> Router {
    Router::new()
        .route("/", get(show_form).post(predict_form))
        .with_state(AppState { artifacts })
}

#[derive(Template)]
#[template(path = "form.html")]
struct FormTemplate {
    features: &'static [&'static str],
    result: Option<DisplayedPrediction>,
}

/// Prediction formatted for the template: probabilities as fixed two-decimal
/// strings, or "N/A" in the error state.
struct DisplayedPrediction {
    label: String,
    prob_churn: String,
    prob_no_churn: String,
}

/// GET `/`: the empty form listing the required feature names. No artifact
/// access, no inference.
async fn show_form() -> impl IntoResponse {
    HtmlTemplate(FormTemplate {
        features: &FEATURES[..],
        result: None,
    })
}

/// POST `/`: run the pipeline and render the outcome.
///
/// Any failure during parsing, scaling, or inference is recovered here: the
/// cause is logged server-side and the page renders the fixed error state.
/// The handler itself never fails the request.
async fn predict_form(
    State(state): State<AppState>,
    Form(form): Form<HashMap<String, String>>,
) -> impl IntoResponse {
    tracing::info!("received POST request with form data");

    let result = match inference::predict(&state.artifacts, &form) {
        Ok(prediction) => {
            tracing::info!(
                "prediction: {} | churn: {:.2} | no churn: {:.2}",
                prediction.label,
                prediction.prob_churn,
                prediction.prob_no_churn
            );
            DisplayedPrediction {
                label: prediction.label.to_string(),
                prob_churn: format!("{:.2}", prediction.prob_churn),
                prob_no_churn: format!("{:.2}", prediction.prob_no_churn),
            }
        }
        Err(err) => {
            tracing::error!("error during prediction: {:#}", err);
            DisplayedPrediction {
                label: "Error processing input".to_string(),
                prob_churn: "N/A".to_string(),
                prob_no_churn: "N/A".to_string(),
            }
        }
    };

    HtmlTemplate(FormTemplate {
        features: &FEATURES[..],
        result: Some(result),
    })
}

/// Renders an askama template into an HTML response.
struct HtmlTemplate<T>(T);

impl<T: Template> IntoResponse for HtmlTemplate<T> {
    fn into_response(self) -> Response {
        match self.0.render() {
            Ok(html) => Html(html).into_response(),
            Err(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("template error: {}", err),
            )
                .into_response(),
        }
    }
}
