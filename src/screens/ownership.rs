use super::Screen;
use crate::media::{AcceptFilter, Attachment};
use crate::navigation::{Handoff, HandoffPayload, Route};

/// Proof of ownership upload: one PDF plus the terms checkbox.
#[derive(Debug, Clone)]
pub struct ProofOfOwnership {
    document: Option<Attachment>,
    terms_accepted: bool,
    drag_active: bool,
    filter: AcceptFilter,
}

impl Default for ProofOfOwnership {
    fn default() -> Self {
        Self::new(AcceptFilter::pdf())
    }
}

impl ProofOfOwnership {
    pub fn new(filter: AcceptFilter) -> Self {
        Self {
            document: None,
            terms_accepted: false,
            drag_active: false,
            filter,
        }
    }

    pub fn document(&self) -> Option<&Attachment> {
        self.document.as_ref()
    }

    pub fn terms_accepted(&self) -> bool {
        self.terms_accepted
    }

    pub fn drag_active(&self) -> bool {
        self.drag_active
    }

    pub fn select_file(&mut self, attachment: Attachment) -> bool {
        if !self.filter.accepts(&attachment) {
            tracing::warn!(mime = %attachment.mime, "ignoring ownership document");
            return false;
        }
        self.document = Some(attachment);
        true
    }

    /// Drop target. Ends the drag highlight whether or not the file is kept.
    pub fn drop_file(&mut self, attachment: Attachment) -> bool {
        self.drag_active = false;
        self.select_file(attachment)
    }

    pub fn drag_enter(&mut self) {
        self.drag_active = true;
    }

    pub fn drag_leave(&mut self) {
        self.drag_active = false;
    }

    pub fn remove_file(&mut self) -> Option<Attachment> {
        self.document.take()
    }

    pub fn set_terms_accepted(&mut self, accepted: bool) {
        self.terms_accepted = accepted;
    }
}

impl Screen for ProofOfOwnership {
    const ROUTE: Route = Route::ProofOfOwnership;

    fn is_valid(&self) -> bool {
        self.document.is_some() && self.terms_accepted
    }

    fn next(&self) -> Option<Handoff> {
        self.is_valid()
            .then(|| Handoff::new(Route::CondominiumInfo, HandoffPayload::Empty))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_pdf_documents_are_kept() {
        let mut screen = ProofOfOwnership::default();
        assert!(!screen.select_file(Attachment::new("deed.png", "image/png", 10)));
        assert!(screen.document().is_none());
        assert!(screen.select_file(Attachment::new("deed.pdf", "application/pdf", 10)));
        assert_eq!(screen.document().map(|d| d.name.as_str()), Some("deed.pdf"));
    }

    #[test]
    fn drop_clears_drag_state_even_when_rejected() {
        let mut screen = ProofOfOwnership::default();
        screen.drag_enter();
        assert!(screen.drag_active());
        assert!(!screen.drop_file(Attachment::new("deed.txt", "text/plain", 1)));
        assert!(!screen.drag_active());
        screen.drag_enter();
        screen.drag_leave();
        assert!(!screen.drag_active());
    }

    #[test]
    fn next_requires_document_and_terms() {
        let mut screen = ProofOfOwnership::default();
        screen.drop_file(Attachment::new("deed.pdf", "application/pdf", 10));
        assert!(screen.next().is_none());
        screen.set_terms_accepted(true);
        let handoff = screen.next().expect("gate open");
        assert_eq!(handoff.target(), Route::CondominiumInfo);
        screen.remove_file();
        assert!(!screen.is_valid());
    }
}
