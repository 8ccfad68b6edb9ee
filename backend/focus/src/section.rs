use tracing::debug;

use crate::{
    chapters::{Chapter, ShowcaseItem},
    error::FocusError,
    geometry::{Anchor, Threshold, Viewport},
    highlight::CyclicHighlight,
    observer::{FocusChange, ProximityObserver, RevealLatch},
};

/// One chapter of the page with its own focus, reveal and highlight state.
///
/// Nothing is shared between sections; each one measures itself.
pub struct Section {
    id: &'static str,
    anchor: Option<Anchor>,
    observer: Option<ProximityObserver>,
    reveal: RevealLatch,
    highlight: Option<CyclicHighlight<ShowcaseItem>>,
}

impl Section {
    pub fn new(id: &'static str) -> Self {
        Self {
            id,
            anchor: None,
            observer: None,
            reveal: RevealLatch::default(),
            highlight: None,
        }
    }

    pub fn from_chapter(chapter: &Chapter) -> Result<Self, FocusError> {
        let mut section = Self::new(chapter.id);

        if let Some(threshold) = chapter.focus {
            section = section.with_focus(threshold);
        }

        if let Some(showcase) = chapter.showcase {
            section.highlight = Some(CyclicHighlight::new(showcase.items, showcase.period)?);
        }

        Ok(section)
    }

    pub fn with_focus(mut self, threshold: Threshold) -> Self {
        self.observer = Some(ProximityObserver::new(threshold));
        self
    }

    pub fn with_highlight(mut self, highlight: CyclicHighlight<ShowcaseItem>) -> Self {
        self.highlight = Some(highlight);
        self
    }

    pub fn with_anchor(mut self, anchor: Anchor) -> Self {
        self.anchor = Some(anchor);
        self
    }

    pub fn id(&self) -> &'static str {
        self.id
    }

    pub fn anchor(&self) -> Option<Anchor> {
        self.anchor
    }

    pub fn attach(&mut self, anchor: Anchor) {
        self.anchor = Some(anchor);
    }

    pub fn detach(&mut self) {
        self.anchor = None;
    }

    pub fn is_focused(&self) -> bool {
        self.observer
            .as_ref()
            .is_some_and(ProximityObserver::is_focused)
    }

    pub fn is_revealed(&self) -> bool {
        self.reveal.is_revealed()
    }

    pub fn highlight(&self) -> Option<&CyclicHighlight<ShowcaseItem>> {
        self.highlight.as_ref()
    }

    pub(crate) fn update(&mut self, viewport: &Viewport) -> Result<Option<FocusChange>, FocusError> {
        if self.reveal.observe(&self.anchor, viewport) {
            debug!("Section {} revealed", self.id);
        }

        let Some(observer) = self.observer.as_mut() else {
            return Ok(None);
        };

        let Some(change) = observer.evaluate(&self.anchor, viewport) else {
            return Ok(None);
        };

        // focus only flips once the timer agrees, so a failed start is retried next event
        if let Some(highlight) = self.highlight.as_mut() {
            highlight.apply(change)?;
        }

        observer.commit(change);
        debug!("Section {} focus {:?}", self.id, change);

        Ok(Some(change))
    }

    /// Stops the timer and forgets focus and reveal, so a remount starts over.
    pub(crate) fn teardown(&mut self) {
        if let Some(highlight) = self.highlight.as_mut() {
            highlight.stop();
        }

        if let Some(observer) = self.observer.as_mut() {
            observer.reset();
        }

        self.reveal.reset();
    }
}
