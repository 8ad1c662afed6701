//! Shared traits, limits and field validators for budget records.

use serde_json::{Map, Value};

use crate::errors::{BudgetError, Result};

/// Key/value form of a record as it appears inside a stored document.
pub type RecordMapping = Map<String, Value>;

/// Maximum number of characters allowed in a record name.
pub const MAX_NAME_LEN: usize = 20;

/// Provides access to a human-friendly entity name.
pub trait NamedEntity {
    fn name(&self) -> &str;
}

/// Supplies a common contract for retrieving numeric amounts.
pub trait Amounted {
    fn amount(&self) -> f64;
}

/// Capabilities every stored budget record offers.
pub trait LedgerRecord: NamedEntity + Amounted {
    /// Value written to the `type` field of the stored mapping.
    fn type_tag(&self) -> &'static str;

    fn to_mapping(&self) -> RecordMapping;

    /// Multi-line presentation used by the detail listings.
    fn describe(&self) -> Result<String>;

    fn show(&self) -> String {
        format!("{}: {:.2}", self.name(), self.amount())
    }
}

/// Checks a record name and returns it trimmed.
pub fn validate_name(name: &str) -> Result<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(BudgetError::validation("Name cannot be empty."));
    }
    if trimmed.chars().count() > MAX_NAME_LEN {
        return Err(BudgetError::validation(format!(
            "Name cannot exceed {MAX_NAME_LEN} characters."
        )));
    }
    Ok(trimmed.to_string())
}

/// Rejects non-finite and zero amounts. The sign is left untouched.
pub fn validate_amount(amount: f64) -> Result<f64> {
    if !amount.is_finite() {
        return Err(BudgetError::validation("Amount must be numeric."));
    }
    if amount == 0.0 {
        return Err(BudgetError::validation("Amount cannot be zero."));
    }
    Ok(amount)
}

/// Trims and lowercases a free-text label such as a source or a category.
pub fn normalize_label(field: &str, value: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(BudgetError::validation(format!(
            "{field} must be a non-empty string."
        )));
    }
    Ok(trimmed.to_lowercase())
}

/// Base mapping shared by every record type.
pub(crate) fn base_mapping(tag: &str, name: &str, amount: f64) -> RecordMapping {
    let mut mapping = RecordMapping::new();
    mapping.insert("type".into(), Value::from(tag));
    mapping.insert("name".into(), Value::from(name));
    mapping.insert("amount".into(), Value::from(amount));
    mapping
}

/// Verifies a stored label still satisfies the normalization rules.
pub(crate) fn check_label(field: &str, value: &str) -> Result<()> {
    let normalized = normalize_label(field, value)?;
    if normalized != value {
        return Err(BudgetError::validation(format!(
            "{field} `{value}` is not normalized."
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorKind;

    #[test]
    fn name_is_trimmed() {
        assert_eq!(validate_name("  Rent  ").unwrap(), "Rent");
    }

    #[test]
    fn name_rejects_blank_and_long_values() {
        assert_eq!(validate_name("   ").unwrap_err().kind(), ErrorKind::Validation);
        let long = "x".repeat(MAX_NAME_LEN + 1);
        assert_eq!(validate_name(&long).unwrap_err().kind(), ErrorKind::Validation);
        let exact = "x".repeat(MAX_NAME_LEN);
        assert_eq!(validate_name(&exact).unwrap(), exact);
    }

    #[test]
    fn name_length_counts_characters() {
        let accented = "é".repeat(MAX_NAME_LEN);
        assert!(validate_name(&accented).is_ok());
    }

    #[test]
    fn amount_rejects_zero_and_non_finite() {
        assert!(validate_amount(0.0).is_err());
        assert!(validate_amount(f64::NAN).is_err());
        assert!(validate_amount(f64::INFINITY).is_err());
        assert_eq!(validate_amount(-12.5).unwrap(), -12.5);
    }

    #[test]
    fn labels_are_lowercased() {
        assert_eq!(normalize_label("Source", "  Work ").unwrap(), "work");
        assert!(normalize_label("Source", " ").is_err());
    }
}
