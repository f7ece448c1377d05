//! Modal field editors.
//!
//! An editor is picked from the field key through the closed [`FieldKind`]
//! mapping, works on a private draft and only hands the draft back on
//! [`FieldEditor::confirm`]. Dropping or cancelling an editor leaves the
//! committed value untouched.

use serde::{Deserialize, Serialize};

use crate::fields::{Amenity, FieldKind, FieldValue};
use crate::media::{AcceptFilter, Attachment};

pub const PARKING_OVERVIEW_LIMIT: usize = 200;

/// Tunables applied by every editor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorSettings {
    pub parking_overview_limit: usize,
    pub document_filter: AcceptFilter,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            parking_overview_limit: PARKING_OVERVIEW_LIMIT,
            document_filter: AcceptFilter::pdf(),
        }
    }
}

/// Result of confirming an editor: the full structured draft plus its
/// reduced display string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorCommit {
    pub key: String,
    pub value: FieldValue,
    pub display: String,
}

#[derive(Debug, Clone)]
pub struct FieldEditor {
    key: String,
    label: String,
    kind: FieldKind,
    draft: FieldValue,
    settings: EditorSettings,
}

impl FieldEditor {
    /// Opens an editor seeded with the committed value, or with the kind's
    /// empty default when nothing of the right shape was committed.
    pub fn open(
        key: impl Into<String>,
        label: impl Into<String>,
        committed: Option<&FieldValue>,
        settings: &EditorSettings,
    ) -> Self {
        let key = key.into();
        let kind = FieldKind::for_key(&key);
        let draft = match committed {
            Some(value) if value.kind() == kind => value.clone(),
            Some(value) => {
                tracing::warn!(
                    key = %key,
                    committed = ?value.kind(),
                    expected = ?kind,
                    "discarding committed value of wrong shape"
                );
                FieldValue::default_for(kind)
            }
            None => FieldValue::default_for(kind),
        };
        tracing::debug!(key = %key, ?kind, "editor opened");
        Self {
            key,
            label: label.into(),
            kind,
            draft,
            settings: settings.clone(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn kind(&self) -> FieldKind {
        self.kind
    }

    pub fn draft(&self) -> &FieldValue {
        &self.draft
    }

    /// Display string the draft would commit to.
    pub fn preview(&self) -> String {
        self.draft.display()
    }

    /// Updates a text or select input by name. The parking overview is cut
    /// to the configured character limit.
    pub fn set_text(&mut self, attr: &str, input: &str) -> bool {
        if self.kind == FieldKind::Parking && attr == "overview" {
            let limited: String = input
                .chars()
                .take(self.settings.parking_overview_limit)
                .collect();
            return self.draft.set_text(attr, &limited);
        }
        self.draft.set_text(attr, input)
    }

    pub fn set_flag(&mut self, attr: &str, checked: bool) -> bool {
        self.draft.set_flag(attr, checked)
    }

    /// Replaces the raw input of a generic text editor.
    pub fn set_input(&mut self, input: &str) -> bool {
        self.draft.set_text("value", input)
    }

    pub fn set_search(&mut self, search: &str) -> bool {
        self.draft.set_text("search", search)
    }

    pub fn toggle_amenity(&mut self, label: &str) -> bool {
        match &mut self.draft {
            FieldValue::CommunityAmenity(amenities) => amenities.toggle(label),
            _ => false,
        }
    }

    /// Amenities matching the draft's search text; empty for other editors.
    pub fn visible_amenities(&self) -> Vec<&'static Amenity> {
        match &self.draft {
            FieldValue::CommunityAmenity(amenities) => amenities.visible(),
            _ => Vec::new(),
        }
    }

    /// Attaches the agreement file. Files outside the document filter are
    /// ignored.
    pub fn attach_file(&mut self, attachment: Attachment) -> bool {
        let FieldValue::ApplicationAgreement(agreement) = &mut self.draft else {
            return false;
        };
        if !self.settings.document_filter.accepts(&attachment) {
            tracing::warn!(
                mime = %attachment.mime,
                "ignoring agreement file rejected by accept filter"
            );
            return false;
        }
        agreement.file = Some(attachment);
        true
    }

    pub fn confirm(self) -> EditorCommit {
        let rendered = self.draft.display();
        tracing::debug!(key = %self.key, display = %rendered, "editor confirmed");
        EditorCommit {
            key: self.key,
            value: self.draft,
            display: rendered,
        }
    }

    pub fn cancel(self) {
        tracing::debug!(key = %self.key, "editor cancelled");
    }
}
