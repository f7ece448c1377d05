//! Condominium information form: thirteen fields edited through modal
//! editors, plus the photo and video gallery.

use std::collections::BTreeMap;

use super::Screen;
use crate::config::Config;
use crate::editor::{EditorSettings, FieldEditor};
use crate::errors::OnboardingError;
use crate::fields::{condominium_fields, FieldRegistry, FieldStore, FieldValue};
use crate::gate::{self, RequiredResource};
use crate::media::MediaGallery;
use crate::navigation::{
    CondominiumSnapshot, Handoff, HandoffPayload, Route, SelectionContext,
};

pub const COVER_PHOTO_LABEL: &str = "Cover photo";

#[derive(Debug)]
pub struct CondominiumInfo {
    registry: &'static FieldRegistry,
    store: FieldStore,
    values: BTreeMap<String, FieldValue>,
    editor: Option<FieldEditor>,
    gallery: MediaGallery,
    selection: Option<SelectionContext>,
    settings: EditorSettings,
}

impl Default for CondominiumInfo {
    fn default() -> Self {
        Self::with_parts(EditorSettings::default(), MediaGallery::default())
    }
}

impl CondominiumInfo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: &Config) -> Self {
        Self::with_parts(
            config.editor.clone(),
            MediaGallery::new(config.media.images.clone(), config.media.video.clone()),
        )
    }

    fn with_parts(settings: EditorSettings, gallery: MediaGallery) -> Self {
        let registry = condominium_fields();
        Self {
            registry,
            store: FieldStore::for_registry(registry),
            values: BTreeMap::new(),
            editor: None,
            gallery,
            selection: None,
            settings,
        }
    }

    pub fn from_handoff(payload: Option<HandoffPayload>) -> Self {
        Self::new().receiving(payload)
    }

    /// Seeds the screen from a handoff payload. A selection context is kept
    /// for the next screen; a condominium snapshot restores its fields.
    pub fn receiving(mut self, payload: Option<HandoffPayload>) -> Self {
        match payload {
            Some(HandoffPayload::Selection(context)) => {
                self.selection = Some(context);
            }
            Some(HandoffPayload::Condominium(snapshot)) => {
                self.store = snapshot.store.conform_to(self.registry);
                self.values = snapshot
                    .values
                    .into_iter()
                    .filter(|(key, _)| self.registry.contains(key))
                    .collect();
                self.selection = snapshot.selection;
            }
            Some(HandoffPayload::Empty) | None => {}
        }
        self
    }

    pub fn registry(&self) -> &'static FieldRegistry {
        self.registry
    }

    pub fn store(&self) -> &FieldStore {
        &self.store
    }

    pub fn value(&self, key: &str) -> Option<&FieldValue> {
        self.values.get(key)
    }

    pub fn selection(&self) -> Option<SelectionContext> {
        self.selection
    }

    /// Opens the editor for `key`, seeded with its committed value. Only one
    /// editor may be open at a time.
    pub fn open_editor(&mut self, key: &str) -> Result<&mut FieldEditor, OnboardingError> {
        let descriptor = self
            .registry
            .get(key)
            .ok_or_else(|| OnboardingError::UnknownField(key.to_string()))?;
        if let Some(open) = &self.editor {
            return Err(OnboardingError::EditorBusy(open.key().to_string()));
        }
        let editor = FieldEditor::open(
            descriptor.key,
            descriptor.label,
            self.values.get(key),
            &self.settings,
        );
        Ok(self.editor.insert(editor))
    }

    pub fn editor(&self) -> Option<&FieldEditor> {
        self.editor.as_ref()
    }

    pub fn editor_mut(&mut self) -> Option<&mut FieldEditor> {
        self.editor.as_mut()
    }

    /// Commits the open editor: stores the structured value and its display
    /// string. Returns the display string.
    pub fn confirm_editor(&mut self) -> Option<String> {
        let commit = self.editor.take()?.confirm();
        self.store.set(&commit.key, commit.display.clone());
        self.values.insert(commit.key, commit.value);
        tracing::debug!(valid = self.is_valid(), "gate re-evaluated");
        Some(commit.display)
    }

    pub fn cancel_editor(&mut self) -> bool {
        match self.editor.take() {
            Some(editor) => {
                editor.cancel();
                true
            }
            None => false,
        }
    }

    pub fn gallery(&self) -> &MediaGallery {
        &self.gallery
    }

    pub fn gallery_mut(&mut self) -> &mut MediaGallery {
        &mut self.gallery
    }

    fn extras(&self) -> [RequiredResource; 1] {
        [RequiredResource::new(COVER_PHOTO_LABEL, self.gallery.has_cover())]
    }

    pub fn missing(&self) -> Vec<&'static str> {
        gate::missing(&self.store, self.registry, &self.extras())
    }

    pub fn snapshot(&self) -> CondominiumSnapshot {
        CondominiumSnapshot {
            store: self.store.clone(),
            values: self.values.clone(),
            selection: self.selection,
        }
    }
}

impl Screen for CondominiumInfo {
    const ROUTE: Route = Route::CondominiumInfo;

    fn is_valid(&self) -> bool {
        gate::is_valid(&self.store, self.registry, &self.extras())
    }

    fn next(&self) -> Option<Handoff> {
        if !self.is_valid() {
            return None;
        }
        Some(Handoff::new(
            Route::CondominiumSummary,
            HandoffPayload::Condominium(self.snapshot()),
        ))
    }
}
