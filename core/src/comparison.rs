//! Comparison Table
//!
//! Seven fixed criteria rows over the three catalog models. The table is pure
//! presentation: the same rows feed the terminal rendering and the web page.

use std::fmt::Write as _;

use crate::catalog::{ModelProfile, CATALOG};

pub const TABLE_TITLE: &str = "FAKE NEWS DETECTION MODEL COMPARISON";

const RULE_WIDTH: usize = 80;
const LABEL_WIDTH: usize = 20;
const COLUMN_WIDTH: usize = 15;

/// Comparison row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Criterion {
    Accuracy,
    Speed,
    Training,
    Memory,
    Interpretability,
    Hardware,
    Complexity,
}

impl Criterion {
    /// Rows in display order
    pub const ALL: [Criterion; 7] = [
        Criterion::Accuracy,
        Criterion::Speed,
        Criterion::Training,
        Criterion::Memory,
        Criterion::Interpretability,
        Criterion::Hardware,
        Criterion::Complexity,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Criterion::Accuracy => "Accuracy (%)",
            Criterion::Speed => "Speed (ms)",
            Criterion::Training => "Training (min)",
            Criterion::Memory => "Memory (MB)",
            Criterion::Interpretability => "Interpretability",
            Criterion::Hardware => "Hardware",
            Criterion::Complexity => "Complexity",
        }
    }

    /// Cell text for `profile`
    pub fn value(self, profile: &ModelProfile) -> String {
        match self {
            Criterion::Accuracy => profile.accuracy.to_string(),
            Criterion::Speed => profile.speed_ms.to_string(),
            Criterion::Training => profile.training_time_min.to_string(),
            Criterion::Memory => profile.memory_mb.to_string(),
            Criterion::Interpretability => profile.interpretability.to_string(),
            Criterion::Hardware => profile.required_hardware.to_string(),
            Criterion::Complexity => profile.complexity.to_string(),
        }
    }
}

/// One rendered row: label plus one cell per model
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonRow {
    pub label: &'static str,
    pub cells: Vec<String>,
}

/// Column headers in catalog order
pub fn headers() -> Vec<&'static str> {
    CATALOG.iter().map(|p| p.kind.column_label()).collect()
}

/// All criteria rows in display order
pub fn rows() -> Vec<ComparisonRow> {
    Criterion::ALL
        .iter()
        .map(|criterion| ComparisonRow {
            label: criterion.label(),
            cells: CATALOG.iter().map(|p| criterion.value(p)).collect(),
        })
        .collect()
}

/// Render the fixed-width text table
pub fn render_table() -> String {
    let mut out = String::new();
    let heavy = "=".repeat(RULE_WIDTH);

    let _ = writeln!(out);
    let _ = writeln!(out, "{heavy}");
    let _ = writeln!(out, "{:>width$}", TABLE_TITLE, width = LABEL_WIDTH + TABLE_TITLE.len());
    let _ = writeln!(out, "{heavy}");

    push_line(&mut out, "Criteria", headers().iter().copied());
    let _ = writeln!(out, "{}", "-".repeat(RULE_WIDTH));

    for row in rows() {
        push_line(&mut out, row.label, row.cells.iter().map(String::as_str));
    }

    let _ = writeln!(out, "{heavy}");
    out
}

fn push_line<'a>(out: &mut String, label: &str, cells: impl Iterator<Item = &'a str>) {
    let mut line = format!("{:<width$}", label, width = LABEL_WIDTH);
    for cell in cells {
        let _ = write!(line, " {:<width$}", cell, width = COLUMN_WIDTH);
    }
    let _ = writeln!(out, "{line}");
}
