//! Detail view: projects one inventory record into styled text lines.

#[cfg(test)]
#[path = "detail_test.rs"]
mod detail_test;

use std::fmt;

use canvas::doc::InventoryItem;
use serde_json::Value;

/// Width of the rule under the title.
const RULE_WIDTH: usize = 40;

/// Column the value starts at in a label/value line.
const LABEL_WIDTH: usize = 9;

/// One line of the detail view, tagged with its style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    Title(String),
    Subtitle(String),
    Comment(String),
    Field { label: String, value: String },
    Custom { label: String, value: String },
    Blank,
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Title(s) | Self::Subtitle(s) | Self::Comment(s) => f.write_str(s),
            Self::Field { label, value } | Self::Custom { label, value } => {
                write!(f, "{label:<LABEL_WIDTH$} {value}")
            }
            Self::Blank => Ok(()),
        }
    }
}

#[must_use]
pub fn detail_lines(item: &InventoryItem) -> Vec<Line> {
    let name = if item.symbol.is_empty() { "<unnamed>" } else { item.symbol.as_str() };
    let title = if item.symbol_type.is_empty() { name.to_owned() } else { format!("{name} ({})", item.symbol_type) };

    let mut lines = vec![Line::Title(title), Line::Subtitle("─".repeat(RULE_WIDTH)), Line::Blank];

    let src = item.source_file.as_deref().filter(|s| !s.is_empty());
    if let Some(src) = src {
        lines.push(Line::Subtitle(match item.line_number {
            Some(ln) if ln > 0 => format!("src: {src}  (ln {ln})"),
            _ => format!("src: {src}"),
        }));
    }
    let raw = item.raw.as_deref().filter(|s| !s.is_empty());
    if let Some(raw) = raw {
        lines.push(Line::Comment(format!("  {raw}")));
    }
    if src.is_some() || raw.is_some() {
        lines.push(Line::Blank);
    }

    for (label, values) in [
        ("modules", &item.modules),
        ("threads", &item.threads),
        ("callers", &item.callers),
        ("flags", &item.flags),
    ] {
        if !values.is_empty() {
            lines.push(Line::Field { label: format!("{label}:"), value: values.join(", ") });
        }
    }
    for (key, value) in &item.custom {
        let value = match value {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        };
        lines.push(Line::Custom { label: format!("{key}:"), value });
    }
    lines
}

/// Plain-text rendering, one line per entry.
#[must_use]
pub fn render(lines: &[Line]) -> String {
    lines.iter().map(|l| format!("{l}\n")).collect()
}
