//! Text rendering of field rows and the missing-fields notice.

use std::fmt;

use colored::Colorize;
use serde::{Deserialize, Serialize};

use crate::fields::{FieldRegistry, FieldStore};
use crate::gate;

pub const MISSING_NOTICE: &str =
    "If you do not complete the required fields, the Next button will not work.";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputPreferences {
    pub plain_mode: bool,
    pub high_contrast_mode: bool,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Style {
    Header,
    Detail,
    Error,
}

#[derive(Debug, Clone, Default)]
pub struct Formatter {
    prefs: OutputPreferences,
}

impl Formatter {
    pub fn new(prefs: OutputPreferences) -> Self {
        Self { prefs }
    }

    pub fn plain() -> Self {
        Self::new(OutputPreferences {
            plain_mode: true,
            ..OutputPreferences::default()
        })
    }

    pub fn preferences(&self) -> OutputPreferences {
        self.prefs
    }

    pub fn header_text(&self, title: impl fmt::Display) -> String {
        self.colorize(format!("=== {} ===", title), Style::Header)
    }

    pub fn error_text(&self, message: impl fmt::Display) -> String {
        if self.prefs.plain_mode {
            format!("ERROR: {}", message)
        } else {
            self.colorize(format!("✖ {}", message), Style::Error)
        }
    }

    fn colorize(&self, text: String, style: Style) -> String {
        if self.prefs.plain_mode {
            return text;
        }

        if self.prefs.high_contrast_mode {
            return text.bold().to_string();
        }

        match style {
            Style::Header => text.bold().to_string(),
            Style::Detail => text.dimmed().to_string(),
            Style::Error => text.red().to_string(),
        }
    }

    /// One line per registry field, `label (Required): value` or `+ Add`
    /// when unset. Unset required rows are rendered as errors.
    pub fn field_rows(&self, registry: &FieldRegistry, store: &FieldStore) -> Vec<String> {
        registry
            .fields()
            .iter()
            .map(|descriptor| {
                let value = store
                    .get(descriptor.key)
                    .filter(|display| !display.trim().is_empty())
                    .unwrap_or("+ Add");
                let row = format!(
                    "{} {}: {}",
                    descriptor.label,
                    descriptor.requirement_label(),
                    value
                );
                if gate::is_missing(store, descriptor) {
                    self.error_text(row)
                } else if descriptor.required {
                    row
                } else {
                    self.colorize(row, Style::Detail)
                }
            })
            .collect()
    }

    /// Notice shown under a form whose gate is closed. Empty when nothing is
    /// missing.
    pub fn missing_notice(&self, labels: &[&str]) -> Vec<String> {
        if labels.is_empty() {
            return Vec::new();
        }
        let mut lines = vec![
            self.error_text(MISSING_NOTICE),
            "Missing required fields:".to_string(),
        ];
        lines.extend(labels.iter().map(|label| format!("  • {}", label)));
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::condominium_fields;
    use crate::fields::registry::PROPERTY_ADDRESS;

    #[test]
    fn plain_rows_mark_missing_required_fields() {
        let mut store = FieldStore::for_registry(condominium_fields());
        store.set(PROPERTY_ADDRESS, "Maple Court");
        let rows = Formatter::plain().field_rows(condominium_fields(), &store);
        assert_eq!(rows.len(), condominium_fields().len());
        assert_eq!(rows[0], "Property address (Required): Maple Court");
        assert_eq!(rows[1], "Pet fees (Optional): + Add");
        assert_eq!(rows[2], "ERROR: Leasing info (Required): + Add");
    }

    #[test]
    fn notice_is_empty_without_missing_labels() {
        assert!(Formatter::plain().missing_notice(&[]).is_empty());
        let notice = Formatter::plain().missing_notice(&["Charges"]);
        assert_eq!(notice[1], "Missing required fields:");
        assert_eq!(notice[2], "  • Charges");
    }

    #[test]
    fn high_contrast_does_not_change_plain_text() {
        let formatter = Formatter::new(OutputPreferences {
            plain_mode: true,
            high_contrast_mode: true,
        });
        assert_eq!(
            formatter.header_text("Condominiums information"),
            "=== Condominiums information ==="
        );
    }
}
