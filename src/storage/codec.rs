//! Conversion between in-memory records and the JSON document layout.

use serde::Serialize;
use serde_json::{ser::PrettyFormatter, Value};

use crate::{
    domain::{BaseRecord, Expense, Income, LedgerRecord, Record, RecordMapping},
    errors::{BudgetError, Result},
};

pub const TYPE_KEY: &str = "type";
pub const NAME_KEY: &str = "name";
pub const AMOUNT_KEY: &str = "amount";
pub const SOURCE_KEY: &str = "source";
pub const CATEGORY_KEY: &str = "category";

/// Source assigned to stored incomes that carry none.
pub const DEFAULT_SOURCE: &str = "unknown";
/// Category assigned to stored expenses that carry none.
pub const DEFAULT_CATEGORY: &str = "unknown";

const INDENT: &[u8] = b"    ";

/// Encodes records into mappings, preserving order.
pub fn encode(records: &[Record]) -> Vec<RecordMapping> {
    records.iter().map(LedgerRecord::to_mapping).collect()
}

/// Rebuilds records from stored mappings. The first invalid entry aborts the decode.
pub fn decode(mappings: &[RecordMapping]) -> Result<Vec<Record>> {
    mappings
        .iter()
        .enumerate()
        .map(|(index, mapping)| {
            decode_entry(mapping).map_err(|err| err.with_context(format!("entry {index}")))
        })
        .collect()
}

/// Dispatches on the `type` tag. Unknown or missing tags produce a [`BaseRecord`].
pub fn decode_entry(mapping: &RecordMapping) -> Result<Record> {
    let name = required_name(mapping)?;
    let amount = required_amount(mapping)?;
    match mapping.get(TYPE_KEY).and_then(Value::as_str) {
        Some(Income::TAG) => {
            let source = optional_label(mapping, SOURCE_KEY, DEFAULT_SOURCE)?;
            Ok(Income::new(name, amount, source)?.into())
        }
        Some(Expense::TAG) => {
            // Hand-edited documents may hold negative expenses; they are flipped, not rejected.
            let category = optional_label(mapping, CATEGORY_KEY, DEFAULT_CATEGORY)?;
            Ok(Expense::new(name, amount.abs(), category)?.into())
        }
        _ => Ok(BaseRecord::new(name, amount)?.into()),
    }
}

/// Renders mappings as a pretty-printed JSON array.
pub fn to_json_string(mappings: &[RecordMapping]) -> Result<String> {
    let mut buffer = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buffer, PrettyFormatter::with_indent(INDENT));
    mappings.serialize(&mut serializer)?;
    String::from_utf8(buffer).map_err(|err| BudgetError::Serialization(err.to_string()))
}

/// Parses a document. Anything other than an array of objects is rejected.
pub fn from_json_str(data: &str) -> Result<Vec<RecordMapping>> {
    match serde_json::from_str::<Value>(data)? {
        Value::Array(items) => items
            .into_iter()
            .enumerate()
            .map(|(index, item)| match item {
                Value::Object(mapping) => Ok(mapping),
                other => Err(BudgetError::Serialization(format!(
                    "entry {index} is not an object: {other}"
                ))),
            })
            .collect(),
        _ => Err(BudgetError::Serialization(
            "document must be a JSON array".into(),
        )),
    }
}

fn required_name(mapping: &RecordMapping) -> Result<&str> {
    match mapping.get(NAME_KEY) {
        Some(Value::String(name)) => Ok(name.as_str()),
        Some(_) => Err(BudgetError::validation("Name must be a string.")),
        None => Err(BudgetError::validation("missing field `name`")),
    }
}

fn required_amount(mapping: &RecordMapping) -> Result<f64> {
    match mapping.get(AMOUNT_KEY) {
        Some(value) => value
            .as_f64()
            .ok_or_else(|| BudgetError::validation("Amount must be numeric.")),
        None => Err(BudgetError::validation("missing field `amount`")),
    }
}

fn optional_label<'a>(mapping: &'a RecordMapping, key: &str, default: &'a str) -> Result<&'a str> {
    match mapping.get(key) {
        None => Ok(default),
        Some(Value::String(label)) => Ok(label.as_str()),
        Some(_) => Err(BudgetError::validation(format!("`{key}` must be a string."))),
    }
}
