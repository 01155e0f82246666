//! Operator-facing plugin log.
//!
//! The log is returned as a value and composed by the caller, so the
//! selector stays a pure function.

use serde::Serialize;

const SUCCESS_MARK: &str = "☑";
const ERROR_MARK: &str = "☒";

/// Ordered log lines produced while evaluating one file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PluginLog {
    entries: Vec<String>,
}

impl PluginLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a plain entry.
    pub fn add(&mut self, entry: impl Into<String>) {
        self.entries.push(entry.into());
    }

    /// Append an entry marked as a success.
    pub fn add_success(&mut self, entry: impl AsRef<str>) {
        self.entries
            .push(format!("{} {}", SUCCESS_MARK, entry.as_ref()));
    }

    /// Append an entry marked as an error or warning.
    pub fn add_error(&mut self, entry: impl AsRef<str>) {
        self.entries.push(format!("{} {}", ERROR_MARK, entry.as_ref()));
    }

    /// Append every entry of `other`, preserving order.
    pub fn append(&mut self, other: PluginLog) {
        self.entries.extend(other.entries);
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Render the log as newline separated text.
    pub fn render(&self) -> String {
        self.entries.join("\n")
    }
}

impl std::fmt::Display for PluginLog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render())
    }
}
