use std::fmt;

use serde_json::Value;

use crate::errors::{BudgetError, Result};

use super::common::*;

/// A single expense entry. The sign of the supplied amount is discarded.
#[derive(Debug, Clone, PartialEq)]
pub struct Expense {
    name: String,
    amount: f64,
    category: String,
}

impl Expense {
    pub const TAG: &'static str = "Expense";

    pub fn new(name: &str, amount: f64, category: &str) -> Result<Self> {
        let build = || -> Result<Self> {
            Ok(Self {
                name: validate_name(name)?,
                amount: validate_amount(amount)?.abs(),
                category: normalize_label("Expense category", category)?,
            })
        };
        build().map_err(|err| err.with_context("Invalid Expense initialization"))
    }

    /// Lowercase key used to group expenses.
    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn set_name(&mut self, name: &str) -> Result<()> {
        self.name = validate_name(name)?;
        Ok(())
    }

    pub fn set_amount(&mut self, amount: f64) -> Result<()> {
        self.amount = validate_amount(amount)?.abs();
        Ok(())
    }

    pub fn set_category(&mut self, category: &str) -> Result<()> {
        self.category = normalize_label("Expense category", category)?;
        Ok(())
    }

    fn check_invariants(&self) -> Result<()> {
        if validate_name(&self.name)? != self.name {
            return Err(BudgetError::validation("Name is not trimmed."));
        }
        if validate_amount(self.amount)? < 0.0 {
            return Err(BudgetError::validation("Expense amount must be positive."));
        }
        check_label("Expense category", &self.category)
    }

    #[cfg(test)]
    pub(crate) fn unchecked(name: &str, amount: f64, category: &str) -> Self {
        Self {
            name: name.to_string(),
            amount,
            category: category.to_string(),
        }
    }
}

impl NamedEntity for Expense {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Amounted for Expense {
    fn amount(&self) -> f64 {
        self.amount
    }
}

impl LedgerRecord for Expense {
    fn type_tag(&self) -> &'static str {
        Self::TAG
    }

    fn to_mapping(&self) -> RecordMapping {
        let mut mapping = base_mapping(Self::TAG, &self.name, self.amount);
        mapping.insert("category".into(), Value::from(self.category.as_str()));
        mapping
    }

    fn describe(&self) -> Result<String> {
        self.check_invariants().map_err(|err| {
            BudgetError::Serialization(format!("Error generating Expense description: {err}"))
        })?;
        Ok(format!(
            "Expense Record\n  Name     : {}\n  Category : {}\n  Amount   : {:.2}\n",
            self.name, self.category, self.amount
        ))
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.show())
    }
}
