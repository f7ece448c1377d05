//! File attachments referenced by the screens. Nothing is uploaded or copied:
//! an [`Attachment`] only names a picked file, and MIME filtering is advisory.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const MORE_PHOTO_SLOTS: usize = 4;
pub const OPTIONAL_PHOTO_SLOTS: usize = 8;

/// Reference to a file picked by the user.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Attachment {
    pub id: Uuid,
    pub name: String,
    pub mime: String,
    pub size: u64,
}

impl Attachment {
    pub fn new(name: impl Into<String>, mime: impl Into<String>, size: u64) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            mime: mime.into(),
            size,
        }
    }
}

/// MIME allow-list mirroring a file picker's `accept` attribute. An empty
/// list accepts everything; `type/*` patterns match a whole family.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AcceptFilter {
    pub patterns: Vec<String>,
}

impl AcceptFilter {
    pub fn new<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            patterns: patterns.into_iter().map(Into::into).collect(),
        }
    }

    pub fn any() -> Self {
        Self::default()
    }

    pub fn images() -> Self {
        Self::new(["image/png", "image/jpeg"])
    }

    pub fn video() -> Self {
        Self::new(["video/mp4"])
    }

    pub fn pdf() -> Self {
        Self::new(["application/pdf"])
    }

    pub fn accepts(&self, attachment: &Attachment) -> bool {
        self.accepts_mime(&attachment.mime)
    }

    pub fn accepts_mime(&self, mime: &str) -> bool {
        if self.patterns.is_empty() {
            return true;
        }
        let mime = mime.trim().to_ascii_lowercase();
        self.patterns.iter().any(|pattern| {
            let pattern = pattern.trim().to_ascii_lowercase();
            match pattern.strip_suffix("/*") {
                Some(family) => mime
                    .split_once('/')
                    .is_some_and(|(candidate, _)| candidate == family),
                None => pattern == mime,
            }
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaSlot {
    Cover,
    More(usize),
    Optional(usize),
    Video,
}

/// Handle to a rendered preview of the attachment in one slot.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PreviewHandle {
    pub id: Uuid,
    pub slot: MediaSlot,
    pub attachment: Uuid,
}

impl PreviewHandle {
    pub fn url(&self) -> String {
        format!("preview:{}", self.id)
    }
}

/// Live preview handles keyed by slot. A handle stays valid until its slot
/// is emptied or given another file, so the same attachment placed in two
/// slots gets two independent handles.
#[derive(Debug, Default)]
pub struct PreviewRegistry {
    live: HashMap<MediaSlot, PreviewHandle>,
}

impl PreviewRegistry {
    pub fn preview(&mut self, slot: MediaSlot, attachment: &Attachment) -> PreviewHandle {
        if let Some(handle) = self.live.get(&slot) {
            if handle.attachment == attachment.id {
                return handle.clone();
            }
            self.revoke(slot);
        }
        let handle = PreviewHandle {
            id: Uuid::new_v4(),
            slot,
            attachment: attachment.id,
        };
        self.live.insert(slot, handle.clone());
        handle
    }

    pub fn revoke(&mut self, slot: MediaSlot) -> Option<PreviewHandle> {
        let revoked = self.live.remove(&slot);
        if let Some(handle) = &revoked {
            tracing::debug!(preview = %handle.id, ?slot, "preview revoked");
        }
        revoked
    }

    pub fn is_live(&self, handle: &PreviewHandle) -> bool {
        self.live.get(&handle.slot) == Some(handle)
    }

    pub fn live_handles(&self) -> impl Iterator<Item = &PreviewHandle> + '_ {
        self.live.values()
    }

    pub fn live_count(&self) -> usize {
        self.live.len()
    }
}

/// Condominium gallery: one required cover, four featured slots, eight
/// optional slots and one video.
#[derive(Debug)]
pub struct MediaGallery {
    cover: Option<Attachment>,
    more: [Option<Attachment>; MORE_PHOTO_SLOTS],
    optional: [Option<Attachment>; OPTIONAL_PHOTO_SLOTS],
    video: Option<Attachment>,
    image_filter: AcceptFilter,
    video_filter: AcceptFilter,
    previews: PreviewRegistry,
}

impl Default for MediaGallery {
    fn default() -> Self {
        Self::new(AcceptFilter::images(), AcceptFilter::video())
    }
}

impl MediaGallery {
    pub fn new(image_filter: AcceptFilter, video_filter: AcceptFilter) -> Self {
        Self {
            cover: None,
            more: Default::default(),
            optional: Default::default(),
            video: None,
            image_filter,
            video_filter,
            previews: PreviewRegistry::default(),
        }
    }

    fn slot_mut(&mut self, slot: MediaSlot) -> Option<&mut Option<Attachment>> {
        match slot {
            MediaSlot::Cover => Some(&mut self.cover),
            MediaSlot::More(index) => self.more.get_mut(index),
            MediaSlot::Optional(index) => self.optional.get_mut(index),
            MediaSlot::Video => Some(&mut self.video),
        }
    }

    pub fn get(&self, slot: MediaSlot) -> Option<&Attachment> {
        match slot {
            MediaSlot::Cover => self.cover.as_ref(),
            MediaSlot::More(index) => self.more.get(index).and_then(Option::as_ref),
            MediaSlot::Optional(index) => self.optional.get(index).and_then(Option::as_ref),
            MediaSlot::Video => self.video.as_ref(),
        }
    }

    /// Places `attachment` in `slot`. Files rejected by the slot's filter and
    /// out-of-range slots are ignored and reported as `false`.
    pub fn set(&mut self, slot: MediaSlot, attachment: Attachment) -> bool {
        let filter = match slot {
            MediaSlot::Video => &self.video_filter,
            _ => &self.image_filter,
        };
        if !filter.accepts(&attachment) {
            tracing::warn!(?slot, mime = %attachment.mime, "ignoring file rejected by accept filter");
            return false;
        }
        let Some(entry) = self.slot_mut(slot) else {
            tracing::warn!(?slot, "ignoring file for unknown media slot");
            return false;
        };
        if entry.replace(attachment).is_some() {
            self.previews.revoke(slot);
        }
        true
    }

    pub fn remove(&mut self, slot: MediaSlot) -> Option<Attachment> {
        let removed = self.slot_mut(slot).and_then(Option::take);
        if removed.is_some() {
            self.previews.revoke(slot);
        }
        removed
    }

    pub fn set_cover(&mut self, attachment: Attachment) -> bool {
        self.set(MediaSlot::Cover, attachment)
    }

    pub fn remove_cover(&mut self) -> Option<Attachment> {
        self.remove(MediaSlot::Cover)
    }

    pub fn set_more_photo(&mut self, index: usize, attachment: Attachment) -> bool {
        self.set(MediaSlot::More(index), attachment)
    }

    pub fn remove_more_photo(&mut self, index: usize) -> Option<Attachment> {
        self.remove(MediaSlot::More(index))
    }

    pub fn set_optional_photo(&mut self, index: usize, attachment: Attachment) -> bool {
        self.set(MediaSlot::Optional(index), attachment)
    }

    pub fn remove_optional_photo(&mut self, index: usize) -> Option<Attachment> {
        self.remove(MediaSlot::Optional(index))
    }

    pub fn set_video(&mut self, attachment: Attachment) -> bool {
        self.set(MediaSlot::Video, attachment)
    }

    pub fn remove_video(&mut self) -> Option<Attachment> {
        self.remove(MediaSlot::Video)
    }

    pub fn has_cover(&self) -> bool {
        self.cover.is_some()
    }

    /// Preview for the attachment in `slot`, created on first request.
    pub fn preview(&mut self, slot: MediaSlot) -> Option<PreviewHandle> {
        let attachment = self.get(slot)?.clone();
        Some(self.previews.preview(slot, &attachment))
    }

    pub fn previews(&self) -> &PreviewRegistry {
        &self.previews
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn png(name: &str) -> Attachment {
        Attachment::new(name, "image/png", 1024)
    }

    #[test]
    fn filters_match_exact_and_family_patterns() {
        assert!(AcceptFilter::images().accepts_mime("image/jpeg"));
        assert!(AcceptFilter::images().accepts_mime("IMAGE/PNG"));
        assert!(!AcceptFilter::images().accepts_mime("image/gif"));
        assert!(AcceptFilter::new(["image/*"]).accepts_mime("image/gif"));
        assert!(!AcceptFilter::new(["image/*"]).accepts_mime("video/mp4"));
        assert!(AcceptFilter::any().accepts_mime("application/zip"));
    }

    #[test]
    fn rejected_files_are_ignored() {
        let mut gallery = MediaGallery::default();
        assert!(!gallery.set_cover(Attachment::new("clip.mp4", "video/mp4", 5)));
        assert!(!gallery.has_cover());
        assert!(!gallery.set_video(png("still.png")));
        assert!(gallery.get(MediaSlot::Video).is_none());
    }

    #[test]
    fn out_of_range_slots_are_ignored() {
        let mut gallery = MediaGallery::default();
        assert!(!gallery.set_more_photo(MORE_PHOTO_SLOTS, png("extra.png")));
        assert!(!gallery.set_optional_photo(OPTIONAL_PHOTO_SLOTS, png("extra.png")));
        assert!(gallery.set_optional_photo(OPTIONAL_PHOTO_SLOTS - 1, png("last.png")));
    }

    #[test]
    fn replacing_an_attachment_revokes_its_preview() {
        let mut gallery = MediaGallery::default();
        gallery.set_cover(png("first.png"));
        let first = gallery.preview(MediaSlot::Cover).expect("preview");
        assert_eq!(gallery.preview(MediaSlot::Cover), Some(first.clone()));

        gallery.set_cover(png("second.png"));
        assert!(!gallery.previews().is_live(&first));
        let second = gallery.preview(MediaSlot::Cover).expect("preview");
        assert_ne!(first, second);
        assert_eq!(gallery.previews().live_count(), 1);
    }

    #[test]
    fn removing_an_attachment_revokes_its_preview() {
        let mut gallery = MediaGallery::default();
        gallery.set_more_photo(2, png("kitchen.png"));
        let handle = gallery.preview(MediaSlot::More(2)).expect("preview");
        assert!(gallery.previews().is_live(&handle));

        let removed = gallery.remove_more_photo(2).expect("removed");
        assert_eq!(removed.name, "kitchen.png");
        assert!(!gallery.previews().is_live(&handle));
        assert!(gallery.preview(MediaSlot::More(2)).is_none());
    }

    #[test]
    fn shared_attachment_keeps_independent_previews() {
        let mut gallery = MediaGallery::default();
        let photo = png("lobby.png");
        gallery.set_more_photo(0, photo.clone());
        gallery.set_optional_photo(3, photo);
        let featured = gallery.preview(MediaSlot::More(0)).expect("preview");
        let optional = gallery.preview(MediaSlot::Optional(3)).expect("preview");
        assert_ne!(featured, optional);

        gallery.remove_more_photo(0);
        assert!(!gallery.previews().is_live(&featured));
        assert!(gallery.previews().is_live(&optional));
        assert_eq!(gallery.previews().live_count(), 1);
    }
}
