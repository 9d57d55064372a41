pub mod json;
pub mod text;

use serde::Serialize;

use crate::error::AppResult;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum OutputMode {
    Text,
    Json,
}

/// Plain text or pretty JSON on stdout, picked by `--json`.
#[derive(Debug, Clone, Copy)]
pub struct Output {
    mode: OutputMode,
}

impl Output {
    pub fn new(json: bool) -> Self {
        let mode = if json {
            OutputMode::Json
        } else {
            OutputMode::Text
        };
        Self { mode }
    }

    pub fn mode(&self) -> OutputMode {
        self.mode
    }

    pub fn render<T: Serialize>(&self, text: &str, json_value: &T) -> AppResult<String> {
        match self.mode {
            OutputMode::Text => Ok(text.to_string()),
            OutputMode::Json => json::render(json_value),
        }
    }

    pub fn emit<T: Serialize>(&self, text: &str, json_value: &T) -> AppResult<()> {
        text::print_line(&self.render(text, json_value)?)
    }
}
