//! Generic ledger lines and the tagged union stored in documents.

use std::fmt;

use crate::errors::{BudgetError, Result};

use super::common::*;
use super::{Expense, Income};

/// Generic ledger line. Only a zero amount is rejected; the sign is kept.
#[derive(Debug, Clone, PartialEq)]
pub struct BaseRecord {
    name: String,
    amount: f64,
}

impl BaseRecord {
    pub const TAG: &'static str = "RecordBase";

    /// The name is trimmed before its length is checked, as for incomes and
    /// expenses, so surrounding whitespace never counts toward the limit.
    pub fn new(name: &str, amount: f64) -> Result<Self> {
        Ok(Self {
            name: validate_name(name)?,
            amount: validate_amount(amount)?,
        })
    }

    pub fn set_name(&mut self, name: &str) -> Result<()> {
        self.name = validate_name(name)?;
        Ok(())
    }

    pub fn set_amount(&mut self, amount: f64) -> Result<()> {
        self.amount = validate_amount(amount)?;
        Ok(())
    }
}

impl NamedEntity for BaseRecord {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Amounted for BaseRecord {
    fn amount(&self) -> f64 {
        self.amount
    }
}

impl LedgerRecord for BaseRecord {
    fn type_tag(&self) -> &'static str {
        Self::TAG
    }

    fn to_mapping(&self) -> RecordMapping {
        base_mapping(Self::TAG, &self.name, self.amount)
    }

    fn describe(&self) -> Result<String> {
        validate_name(&self.name)
            .and_then(|_| validate_amount(self.amount))
            .map_err(|err| {
                BudgetError::Serialization(format!("Error generating record description: {err}"))
            })?;
        Ok(format!(
            "Record\n  Name   : {}\n  Amount : {:.2}\n",
            self.name, self.amount
        ))
    }
}

impl fmt::Display for BaseRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.show())
    }
}

/// Any record a document can hold.
#[derive(Debug, Clone, PartialEq)]
pub enum Record {
    Income(Income),
    Expense(Expense),
    Base(BaseRecord),
}

impl Record {
    fn inner(&self) -> &dyn LedgerRecord {
        match self {
            Record::Income(income) => income,
            Record::Expense(expense) => expense,
            Record::Base(base) => base,
        }
    }

    pub fn as_income(&self) -> Option<&Income> {
        match self {
            Record::Income(income) => Some(income),
            _ => None,
        }
    }

    pub fn as_expense(&self) -> Option<&Expense> {
        match self {
            Record::Expense(expense) => Some(expense),
            _ => None,
        }
    }
}

impl NamedEntity for Record {
    fn name(&self) -> &str {
        self.inner().name()
    }
}

impl Amounted for Record {
    fn amount(&self) -> f64 {
        self.inner().amount()
    }
}

impl LedgerRecord for Record {
    fn type_tag(&self) -> &'static str {
        self.inner().type_tag()
    }

    fn to_mapping(&self) -> RecordMapping {
        self.inner().to_mapping()
    }

    fn describe(&self) -> Result<String> {
        self.inner().describe()
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.show())
    }
}

impl From<Income> for Record {
    fn from(income: Income) -> Self {
        Record::Income(income)
    }
}

impl From<Expense> for Record {
    fn from(expense: Expense) -> Self {
        Record::Expense(expense)
    }
}

impl From<BaseRecord> for Record {
    fn from(base: BaseRecord) -> Self {
        Record::Base(base)
    }
}
