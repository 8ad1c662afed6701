use std::collections::{BTreeMap, BTreeSet};

use tracing::info;

use crate::{
    domain::{Expense, Income, LedgerRecord, Record},
    services::{InsightService, SummaryService},
    storage::{RecordStorage, DEFAULT_DOCUMENT},
};

use super::{io::Prompter, menu::MenuChoice, output, CliError, LoopControl};

const CHART_WIDTH: usize = 40;

pub(crate) fn dispatch(
    choice: MenuChoice,
    storage: &dyn RecordStorage,
    prompter: &mut dyn Prompter,
) -> Result<LoopControl, CliError> {
    match choice {
        MenuChoice::AddIncome => add_income(storage, prompter)?,
        MenuChoice::AddExpense => add_expense(storage, prompter)?,
        MenuChoice::ShowSummary => show_summary(storage),
        MenuChoice::ExpenseDetails => show_details(
            "Expense Details",
            InsightService::expense_details(storage),
            "No expense records.",
        ),
        MenuChoice::IncomeDetails => show_details(
            "Income Details",
            InsightService::income_details(storage),
            "No income records.",
        ),
        MenuChoice::BackupRecords => backup_records(storage, prompter)?,
        MenuChoice::ListBackups => list_backups(storage)?,
        MenuChoice::DeleteBackup => delete_backup(storage, prompter)?,
        MenuChoice::ResetRecords => reset_records(storage, prompter)?,
        MenuChoice::ExpenseChart => show_chart(storage),
        MenuChoice::LoadBackup => load_backup(storage, prompter)?,
        MenuChoice::Exit => {
            output::info("Goodbye.");
            return Ok(LoopControl::Exit);
        }
    }
    Ok(LoopControl::Continue)
}

pub fn parse_amount(input: &str) -> Result<f64, CliError> {
    let trimmed = input.trim();
    trimmed
        .parse::<f64>()
        .map_err(|_| CliError::InvalidInput(format!("'{trimmed}' is not a valid amount.")))
}

fn add_income(storage: &dyn RecordStorage, prompter: &mut dyn Prompter) -> Result<(), CliError> {
    let name = prompter.required("Income name")?;
    let amount = parse_amount(&prompter.required("Amount")?)?;
    let source = prompter.required("Source")?;
    let income = Income::new(&name, amount, &source)?;
    let summary = income.to_string();
    storage.append_records(DEFAULT_DOCUMENT, &[Record::from(income)])?;
    output::success(format!("Income added: {summary}"));
    Ok(())
}

fn add_expense(storage: &dyn RecordStorage, prompter: &mut dyn Prompter) -> Result<(), CliError> {
    let name = prompter.required("Expense name")?;
    let amount = parse_amount(&prompter.required("Amount")?)?;
    let category = prompter.required("Category")?;
    let expense = Expense::new(&name, amount, &category)?;
    let summary = expense.to_string();
    storage.append_records(DEFAULT_DOCUMENT, &[Record::from(expense)])?;
    output::success(format!("Expense added: {summary}"));
    Ok(())
}

fn show_summary(storage: &dyn RecordStorage) {
    let summary = SummaryService::summarize(storage);
    output::section("Budget Summary");
    output::line(format!(
        "Total income   : {:.2} ({} records)",
        summary.total_income, summary.income_count
    ));
    output::line(format!(
        "Total expenses : {:.2} ({} records)",
        summary.total_expenses, summary.expense_count
    ));
    output::line(format!("Balance        : {:.2}", summary.balance));
}

fn show_details(title: &str, details: Vec<String>, empty_message: &str) {
    output::section(title);
    if details.is_empty() {
        output::info(empty_message);
        return;
    }
    for text in details {
        output::line(text.trim_end());
    }
}

fn is_reserved(name: &str) -> bool {
    name == DEFAULT_DOCUMENT
}

fn ask_document_name(prompter: &mut dyn Prompter, prompt: &str) -> Result<String, CliError> {
    let name = prompter.required(prompt)?.trim().to_string();
    if name.is_empty() {
        return Err(CliError::InvalidInput("File name cannot be empty.".into()));
    }
    Ok(name)
}

fn backup_records(
    storage: &dyn RecordStorage,
    prompter: &mut dyn Prompter,
) -> Result<(), CliError> {
    let name = ask_document_name(prompter, "Backup file name")?;
    if is_reserved(&name) {
        output::warning(format!("'{name}' is reserved for the current records."));
        return Ok(());
    }
    if storage.document_exists(&name)?
        && !prompter.confirm(&format!("'{name}' already exists. Overwrite?"), false)?
    {
        output::info("Backup cancelled.");
        return Ok(());
    }
    let records = storage.load_records(DEFAULT_DOCUMENT)?;
    storage.save_records(&name, &records)?;
    info!(backup = %name, count = records.len(), "records backed up");
    output::success(format!("Backed up {} records to '{name}'.", records.len()));
    Ok(())
}

/// Every stored document except the default one.
pub fn backup_names(documents: BTreeSet<String>) -> Vec<String> {
    documents
        .into_iter()
        .filter(|name| !is_reserved(name))
        .collect()
}

fn list_backups(storage: &dyn RecordStorage) -> Result<(), CliError> {
    let backups = backup_names(storage.list_documents()?);
    output::section("Backup Files");
    if backups.is_empty() {
        output::info("No backup files found.");
    }
    for name in backups {
        output::line(format!("  - {name}"));
    }
    Ok(())
}

fn delete_backup(storage: &dyn RecordStorage, prompter: &mut dyn Prompter) -> Result<(), CliError> {
    let name = ask_document_name(prompter, "Backup file to delete")?;
    if is_reserved(&name) {
        output::warning(format!("'{name}' holds the current records; use Reset instead."));
        return Ok(());
    }
    if storage.delete_document(&name)? {
        output::success(format!("Deleted '{name}'."));
    } else {
        output::warning(format!("No backup named '{name}'."));
    }
    Ok(())
}

fn reset_records(storage: &dyn RecordStorage, prompter: &mut dyn Prompter) -> Result<(), CliError> {
    if !prompter.confirm("Delete all current records?", false)? {
        output::info("Reset cancelled.");
        return Ok(());
    }
    storage.clear_document(DEFAULT_DOCUMENT)?;
    output::success("All records cleared.");
    Ok(())
}

fn show_chart(storage: &dyn RecordStorage) {
    let totals = InsightService::expense_totals_by_category(storage);
    output::section("Expenses by Category");
    if totals.is_empty() {
        output::info("No expenses to chart.");
        return;
    }
    for row in render_bar_chart(&totals, CHART_WIDTH) {
        output::line(row);
    }
}

/// One row per category, bars scaled so the largest total spans `width`.
pub fn render_bar_chart(totals: &BTreeMap<String, f64>, width: usize) -> Vec<String> {
    let max = totals.values().copied().fold(0.0_f64, f64::max);
    let label_width = totals.keys().map(|key| key.chars().count()).max().unwrap_or(0);
    totals
        .iter()
        .map(|(category, total)| {
            let bar = if max > 0.0 {
                ((total / max) * width as f64).round() as usize
            } else {
                0
            };
            format!(
                "{category:<label_width$} | {} {total:.2}",
                "#".repeat(bar)
            )
        })
        .collect()
}

fn load_backup(storage: &dyn RecordStorage, prompter: &mut dyn Prompter) -> Result<(), CliError> {
    let name = ask_document_name(prompter, "Backup file to load")?;
    if !storage.document_exists(&name)? {
        output::warning(format!("No backup named '{name}'."));
        return Ok(());
    }
    let records = storage.load_records(&name)?;
    output::section(format!("Records in {name}"));
    for record in &records {
        match record.describe() {
            Ok(text) => output::line(text.trim_end()),
            Err(err) => output::error(err),
        }
    }
    let (incomes, expenses) = InsightService::split_records(records);
    output::info(format!(
        "{} incomes, {} expenses.",
        incomes.len(),
        expenses.len()
    ));
    Ok(())
}
