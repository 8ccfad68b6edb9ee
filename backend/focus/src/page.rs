use tracing::{debug, warn};

use crate::{
    chapters::{ChapterSpan, STORYBOARD},
    error::FocusError,
    geometry::{Anchor, Viewport},
    observer::FocusChange,
    progress::scroll_progress,
    section::Section,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FocusTransition {
    pub section: &'static str,
    pub change: FocusChange,
}

/// Mounted sections plus the page-wide scroll state.
///
/// Sections only receive events while mounted. Mounting evaluates the new
/// section once against the last known viewport; unmounting stops its timer
/// before returning.
#[derive(Default)]
pub struct Page {
    sections: Vec<Section>,
    viewport: Option<Viewport>,
    progress: f64,
    pending: Option<Viewport>,
}

impl Page {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every storyboard chapter, mounted in order, none laid out yet.
    pub fn storyboard() -> Result<Self, FocusError> {
        let mut page = Self::new();

        for chapter in &STORYBOARD {
            page.mount(Section::from_chapter(chapter)?)?;
        }

        Ok(page)
    }

    pub fn mount(&mut self, mut section: Section) -> Result<Option<FocusTransition>, FocusError> {
        if self.position(section.id()).is_some() {
            return Err(FocusError::DuplicateSection(section.id()));
        }

        let change = match &self.viewport {
            Some(viewport) => section.update(viewport)?,
            None => None,
        };

        debug!("Mounted section {}", section.id());

        let transition = change.map(|change| FocusTransition {
            section: section.id(),
            change,
        });
        self.sections.push(section);

        Ok(transition)
    }

    pub fn unmount(&mut self, id: &'static str) -> Result<Section, FocusError> {
        let index = self.position(id).ok_or(FocusError::UnknownSection(id))?;

        let mut section = self.sections.remove(index);
        section.teardown();

        debug!("Unmounted section {id}");

        Ok(section)
    }

    pub fn attach(&mut self, id: &'static str, anchor: Anchor) -> Result<(), FocusError> {
        let index = self.position(id).ok_or(FocusError::UnknownSection(id))?;
        self.sections[index].attach(anchor);

        Ok(())
    }

    /// Runs one scroll or resize event through every mounted section.
    ///
    /// A section whose highlight cannot start keeps its old focus state and
    /// the first such error is returned once all sections are done.
    pub fn handle(&mut self, viewport: Viewport) -> Result<Vec<FocusTransition>, FocusError> {
        self.viewport = Some(viewport);
        self.progress = scroll_progress(&viewport);

        let mut transitions = Vec::new();
        let mut failure = None;

        // every section sees the event even if an earlier one fails
        for section in &mut self.sections {
            match section.update(&viewport) {
                Ok(Some(change)) => transitions.push(FocusTransition {
                    section: section.id(),
                    change,
                }),
                Ok(None) => {}
                Err(e) => {
                    warn!("Section {} skipped focus change: {e}", section.id());
                    failure.get_or_insert(e);
                }
            }
        }

        match failure {
            Some(e) => Err(e),
            None => Ok(transitions),
        }
    }

    /// Holds an event for the next frame, replacing any event already waiting.
    pub fn queue(&mut self, viewport: Viewport) {
        self.pending = Some(viewport);
    }

    /// Processes the newest queued event, if there is one.
    pub fn flush(&mut self) -> Result<Vec<FocusTransition>, FocusError> {
        match self.pending.take() {
            Some(viewport) => self.handle(viewport),
            None => Ok(Vec::new()),
        }
    }

    pub fn progress(&self) -> f64 {
        self.progress
    }

    pub fn viewport(&self) -> Option<Viewport> {
        self.viewport
    }

    pub fn section(&self, id: &str) -> Option<&Section> {
        self.sections.iter().find(|section| section.id() == id)
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn focused(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.sections
            .iter()
            .filter(|section| section.is_focused())
            .map(Section::id)
    }

    /// Mounted section whose share of the global progress holds the current value.
    pub fn active_chapter(&self) -> Option<&'static str> {
        let count = self.sections.len();

        self.sections
            .iter()
            .enumerate()
            .find(|(index, _)| ChapterSpan::of(*index, count).contains(self.progress))
            .map(|(_, section)| section.id())
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.sections.iter().position(|section| section.id() == id)
    }
}
