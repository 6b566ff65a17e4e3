//! Feature schema: the fixed column order the classifier was trained on

use std::collections::HashMap;

use anyhow::bail;
use ndarray::Array1;

/// Feature names in training order.
///
/// The classifier's coefficients are positional, so input vectors must be
/// assembled in exactly this order. Categorical and derived columns arrive
/// already one-hot-encoded upstream; this service does not perform that
/// encoding itself.
pub const FEATURES: [&str; 29] = [
    "SeniorCitizen",
    "Partner",
    "Dependents",
    "tenure",
    "PhoneService",
    "PaperlessBilling",
    "MonthlyCharges",
    "TotalCharges",
    "NumServicesUsed",
    "IsFiber_and_TechSupport",
    "gender_Male",
    "MultipleLines_Yes",
    "InternetService_Fiber optic",
    "InternetService_No",
    "OnlineSecurity_Yes",
    "OnlineBackup_Yes",
    "DeviceProtection_Yes",
    "TechSupport_Yes",
    "StreamingTV_Yes",
    "StreamingMovies_Yes",
    "Contract_One year",
    "Contract_Two year",
    "PaymentMethod_Credit card (automatic)",
    "PaymentMethod_Electronic check",
    "PaymentMethod_Mailed check",
    "tenure_group_Mid-Term",
    "tenure_group_New",
    "MonthlyChargeGroup_Low",
    "MonthlyChargeGroup_Medium",
];

/// Columns the standard scaler rescales before inference. All others pass
/// through to the classifier unchanged.
pub const SCALED_COLUMNS: [&str; 4] =
    ["tenure", "MonthlyCharges", "TotalCharges", "NumServicesUsed"];

/// Position of a feature in the training order, if it is a known feature.
pub fn feature_index(name: &str) -> Option<usize> {
    FEATURES.iter().position(|&feature| feature == name)
}

/// Assemble a feature vector from submitted form fields.
///
/// Every feature must be present and numeric; there are no defaults.
/// Extra fields in the submission are ignored.
///
/// # Arguments
/// * `form` - Submitted key-value pairs, keyed by feature name
///
/// # Returns
/// * A feature vector in training order
pub fn parse_form(form: &HashMap<String, String>) -> crate::Result<Array1<f64>> {
    let mut values = Vec::with_capacity(FEATURES.len());

    for &name in FEATURES.iter() {
        let raw = match form.get(name) {
            Some(raw) => raw,
            None => bail!("missing field: {}", name),
        };

        let value: f64 = raw
            .trim()
            .parse()
            .map_err(|_| anyhow::anyhow!("invalid value for {}: {:?}", name, raw))?;
        values.push(value);
    }

    Ok(Array1::from_vec(values))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_form() -> HashMap<String, String> {
        FEATURES
            .iter()
            .map(|&name| (name.to_string(), "1".to_string()))
            .collect()
    }

    #[test]
    fn test_parse_form_complete() {
        let mut form = full_form();
        form.insert("tenure".to_string(), "12.5".to_string());

        let vector = parse_form(&form).unwrap();
        assert_eq!(vector.len(), 29);
        assert_eq!(vector[feature_index("tenure").unwrap()], 12.5);
        assert_eq!(vector[feature_index("SeniorCitizen").unwrap()], 1.0);
    }

    #[test]
    fn test_parse_form_preserves_training_order() {
        let mut form = full_form();
        form.insert("SeniorCitizen".to_string(), "0".to_string());
        form.insert("MonthlyChargeGroup_Medium".to_string(), "3".to_string());

        let vector = parse_form(&form).unwrap();
        // First and last positions match the declared order
        assert_eq!(vector[0], 0.0);
        assert_eq!(vector[28], 3.0);
    }

    #[test]
    fn test_parse_form_missing_field() {
        let mut form = full_form();
        form.remove("TotalCharges");

        let err = parse_form(&form).unwrap_err();
        assert!(err.to_string().contains("missing field: TotalCharges"));
    }

    #[test]
    fn test_parse_form_non_numeric() {
        let mut form = full_form();
        form.insert("MonthlyCharges".to_string(), "abc".to_string());

        let err = parse_form(&form).unwrap_err();
        assert!(err.to_string().contains("MonthlyCharges"));
    }

    #[test]
    fn test_parse_form_ignores_extra_fields() {
        let mut form = full_form();
        form.insert("unexpected".to_string(), "99".to_string());

        let vector = parse_form(&form).unwrap();
        assert_eq!(vector.len(), 29);
    }

    #[test]
    fn test_scaled_columns_are_known_features() {
        for col in SCALED_COLUMNS.iter() {
            assert!(feature_index(col).is_some(), "unknown column: {}", col);
        }
    }
}
