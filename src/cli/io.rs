use std::io::{self, BufRead};

use dialoguer::{theme::ColorfulTheme, Confirm, Input};

use super::CliError;

/// Source of user answers for the menu loop.
pub trait Prompter {
    /// Returns `None` once the input is exhausted.
    fn text(&mut self, prompt: &str) -> Result<Option<String>, CliError>;

    fn confirm(&mut self, prompt: &str, default: bool) -> Result<bool, CliError>;

    /// Like [`Prompter::text`], but a closed input aborts the current action.
    fn required(&mut self, prompt: &str) -> Result<String, CliError> {
        self.text(prompt)?.ok_or(CliError::InputClosed)
    }
}

/// Terminal prompts rendered with `dialoguer`.
pub struct DialoguerPrompter {
    theme: ColorfulTheme,
}

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Default for DialoguerPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter for DialoguerPrompter {
    fn text(&mut self, prompt: &str) -> Result<Option<String>, CliError> {
        match Input::<String>::with_theme(&self.theme)
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()
        {
            Ok(value) => Ok(Some(value)),
            Err(dialoguer::Error::IO(err)) if err.kind() == io::ErrorKind::UnexpectedEof => {
                Ok(None)
            }
            Err(err) => Err(err.into()),
        }
    }

    fn confirm(&mut self, prompt: &str, default: bool) -> Result<bool, CliError> {
        Confirm::with_theme(&self.theme)
            .with_prompt(prompt)
            .default(default)
            .interact()
            .map_err(CliError::from)
    }
}

/// Reads one answer per line, for non-interactive runs.
pub struct ScriptPrompter<R> {
    reader: R,
}

impl<R: BufRead> ScriptPrompter<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> Prompter for ScriptPrompter<R> {
    fn text(&mut self, _prompt: &str) -> Result<Option<String>, CliError> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(&['\r', '\n'][..]).to_string()))
    }

    fn confirm(&mut self, prompt: &str, default: bool) -> Result<bool, CliError> {
        let answer = self.required(prompt)?;
        match answer.trim().to_ascii_lowercase().as_str() {
            "" => Ok(default),
            "y" | "yes" => Ok(true),
            "n" | "no" => Ok(false),
            other => Err(CliError::InvalidInput(format!(
                "Expected yes or no, got '{other}'."
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn script_prompter_reads_lines_until_eof() {
        let mut prompter = ScriptPrompter::new(Cursor::new("first\r\nsecond\n"));
        assert_eq!(prompter.text("a").unwrap().as_deref(), Some("first"));
        assert_eq!(prompter.text("b").unwrap().as_deref(), Some("second"));
        assert_eq!(prompter.text("c").unwrap(), None);
        assert!(matches!(prompter.required("d"), Err(CliError::InputClosed)));
    }

    #[test]
    fn script_confirm_accepts_yes_no_and_default() {
        let mut prompter = ScriptPrompter::new(Cursor::new("Y\nno\n\nmaybe\n"));
        assert!(prompter.confirm("?", false).unwrap());
        assert!(!prompter.confirm("?", true).unwrap());
        assert!(prompter.confirm("?", true).unwrap());
        assert!(matches!(
            prompter.confirm("?", false),
            Err(CliError::InvalidInput(_))
        ));
    }
}
