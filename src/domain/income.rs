use std::fmt;

use serde_json::Value;

use crate::errors::{BudgetError, Result};

use super::common::*;

/// A single income entry. The amount is always stored positive.
#[derive(Debug, Clone, PartialEq)]
pub struct Income {
    name: String,
    amount: f64,
    source: String,
}

impl Income {
    pub const TAG: &'static str = "Income";

    /// Validates name, then amount, then source.
    pub fn new(name: &str, amount: f64, source: &str) -> Result<Self> {
        let build = || -> Result<Self> {
            Ok(Self {
                name: validate_name(name)?,
                amount: validate_amount(amount)?.abs(),
                source: normalize_label("Income source", source)?,
            })
        };
        build().map_err(|err| err.with_context("Invalid Income initialization"))
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn set_name(&mut self, name: &str) -> Result<()> {
        self.name = validate_name(name)?;
        Ok(())
    }

    pub fn set_amount(&mut self, amount: f64) -> Result<()> {
        self.amount = validate_amount(amount)?.abs();
        Ok(())
    }

    pub fn set_source(&mut self, source: &str) -> Result<()> {
        self.source = normalize_label("Income source", source)
            .map_err(|err| err.with_context("Invalid income source"))?;
        Ok(())
    }

    fn check_invariants(&self) -> Result<()> {
        if validate_name(&self.name)? != self.name {
            return Err(BudgetError::validation("Name is not trimmed."));
        }
        if validate_amount(self.amount)? < 0.0 {
            return Err(BudgetError::validation("Income amount must be positive."));
        }
        check_label("Income source", &self.source)
    }

    #[cfg(test)]
    pub(crate) fn unchecked(name: &str, amount: f64, source: &str) -> Self {
        Self {
            name: name.to_string(),
            amount,
            source: source.to_string(),
        }
    }
}

impl NamedEntity for Income {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Amounted for Income {
    fn amount(&self) -> f64 {
        self.amount
    }
}

impl LedgerRecord for Income {
    fn type_tag(&self) -> &'static str {
        Self::TAG
    }

    fn to_mapping(&self) -> RecordMapping {
        let mut mapping = base_mapping(Self::TAG, &self.name, self.amount);
        mapping.insert("source".into(), Value::from(self.source.as_str()));
        mapping
    }

    fn describe(&self) -> Result<String> {
        self.check_invariants().map_err(|err| {
            BudgetError::Serialization(format!("Error generating Income description: {err}"))
        })?;
        Ok(format!(
            "Income Record\n  Name   : {}\n  Source : {}\n  Amount : {:.2}\n",
            self.name, self.source, self.amount
        ))
    }
}

impl fmt::Display for Income {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.show())
    }
}
