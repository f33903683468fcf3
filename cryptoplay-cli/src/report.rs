// src/report.rs

//! Panel output: a titled list of labelled values plus step lines.

use crate::errors::Result;
use serde::Serialize;
use std::fmt::{self, Display};

/// One labelled value
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Entry {
    /// Label shown on the left
    pub label: String,
    /// Rendered value
    pub value: String,
}

/// Everything a panel computed
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Report {
    /// Panel title
    pub title: String,
    /// Labelled results, in display order
    pub entries: Vec<Entry>,
    /// Step-by-step walkthrough lines
    pub steps: Vec<String>,
}

impl Report {
    /// Empty report with a title
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    /// Appends a labelled value
    pub fn entry(mut self, label: impl Into<String>, value: impl Display) -> Self {
        self.entries.push(Entry {
            label: label.into(),
            value: value.to_string(),
        });
        self
    }

    /// Appends walkthrough lines
    pub fn steps<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.steps.extend(lines.into_iter().map(Into::into));
        self
    }

    /// Value of the first entry with `label`
    pub fn value(&self, label: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.label == label)
            .map(|e| e.value.as_str())
    }

    /// Pretty-printed JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "== {} ==", self.title)?;
        let width = self.entries.iter().map(|e| e.label.chars().count()).max().unwrap_or(0);
        for e in &self.entries {
            writeln!(f, "{:width$}  {}", e.label, e.value, width = width)?;
        }
        if !self.steps.is_empty() {
            writeln!(f, "Steps:")?;
            for line in &self.steps {
                writeln!(f, "  {}", line)?;
            }
        }
        Ok(())
    }
}
