use super::{output, CliError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddIncome,
    AddExpense,
    ShowSummary,
    ExpenseDetails,
    IncomeDetails,
    BackupRecords,
    ListBackups,
    DeleteBackup,
    ResetRecords,
    ExpenseChart,
    LoadBackup,
    Exit,
}

impl MenuChoice {
    /// Menu entries in display order.
    pub const ALL: [MenuChoice; 12] = [
        MenuChoice::AddIncome,
        MenuChoice::AddExpense,
        MenuChoice::ShowSummary,
        MenuChoice::ExpenseDetails,
        MenuChoice::IncomeDetails,
        MenuChoice::BackupRecords,
        MenuChoice::ListBackups,
        MenuChoice::DeleteBackup,
        MenuChoice::ResetRecords,
        MenuChoice::ExpenseChart,
        MenuChoice::LoadBackup,
        MenuChoice::Exit,
    ];

    pub fn number(self) -> u8 {
        match self {
            MenuChoice::AddIncome => 1,
            MenuChoice::AddExpense => 2,
            MenuChoice::ShowSummary => 3,
            MenuChoice::ExpenseDetails => 4,
            MenuChoice::IncomeDetails => 5,
            MenuChoice::BackupRecords => 6,
            MenuChoice::ListBackups => 7,
            MenuChoice::DeleteBackup => 8,
            MenuChoice::ResetRecords => 9,
            MenuChoice::ExpenseChart => 10,
            MenuChoice::LoadBackup => 11,
            MenuChoice::Exit => 0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuChoice::AddIncome => "Add Income",
            MenuChoice::AddExpense => "Add Expense",
            MenuChoice::ShowSummary => "Show Summary",
            MenuChoice::ExpenseDetails => "Show Expense Details",
            MenuChoice::IncomeDetails => "Show Income Details",
            MenuChoice::BackupRecords => "Backup Records",
            MenuChoice::ListBackups => "List Backup Files",
            MenuChoice::DeleteBackup => "Delete Backup File",
            MenuChoice::ResetRecords => "Reset Records",
            MenuChoice::ExpenseChart => "Show Expense Chart",
            MenuChoice::LoadBackup => "Load Backup File",
            MenuChoice::Exit => "Exit",
        }
    }

    pub fn parse(input: &str) -> Result<Self, CliError> {
        let trimmed = input.trim();
        trimmed
            .parse::<u8>()
            .ok()
            .and_then(|number| Self::ALL.into_iter().find(|choice| choice.number() == number))
            .ok_or_else(|| CliError::InvalidInput(format!("Unknown menu option '{trimmed}'.")))
    }
}

pub fn print_menu() {
    output::section("SmartBudget");
    for choice in MenuChoice::ALL {
        output::line(format!("{:>3}. {}", choice.number(), choice.label()));
    }
}
