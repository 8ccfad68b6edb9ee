use tracing::{debug, trace};

use crate::geometry::{Anchor, Rect, ScrollObservation, Threshold, Viewport};

/// Anything whose on-screen box can be read at a given scroll offset.
pub trait Measurable {
    /// `None` while the element is not laid out yet.
    fn measure(&self, scroll_top: f64) -> Option<Rect>;
}

impl Measurable for Anchor {
    fn measure(&self, scroll_top: f64) -> Option<Rect> {
        Some(self.rect(scroll_top))
    }
}

impl Measurable for Rect {
    fn measure(&self, _scroll_top: f64) -> Option<Rect> {
        Some(*self)
    }
}

impl<M: Measurable> Measurable for Option<M> {
    fn measure(&self, scroll_top: f64) -> Option<Rect> {
        self.as_ref().and_then(|target| target.measure(scroll_top))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusChange {
    Gained,
    Lost,
}

/// Tracks whether one section sits near the viewport center.
///
/// The predicate is recomputed from scratch on every event, the stored flag
/// only exists to report transitions. There is no hysteresis, so a section
/// hovering on the boundary can flip on consecutive events.
#[derive(Debug, Clone)]
pub struct ProximityObserver {
    threshold: Threshold,
    focused: bool,
}

impl ProximityObserver {
    pub fn new(threshold: Threshold) -> Self {
        Self {
            threshold,
            focused: false,
        }
    }

    pub fn threshold(&self) -> Threshold {
        self.threshold
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Re-evaluates focus. Returns the transition, if any.
    ///
    /// An unmeasurable target is skipped and keeps its previous state.
    pub fn observe<M>(&mut self, target: &M, viewport: &Viewport) -> Option<FocusChange>
    where
        M: Measurable + ?Sized,
    {
        let change = self.evaluate(target, viewport)?;
        self.commit(change);

        Some(change)
    }

    /// Like [`observe`](Self::observe) but leaves the stored state alone.
    pub fn evaluate<M>(&self, target: &M, viewport: &Viewport) -> Option<FocusChange>
    where
        M: Measurable + ?Sized,
    {
        let Some(element) = target.measure(viewport.scroll_top) else {
            trace!("Target not measurable, skipping");
            return None;
        };

        let focused = ScrollObservation {
            viewport_height: viewport.height,
            element,
            threshold: self.threshold,
        }
        .is_focused();

        match (self.focused, focused) {
            (false, true) => Some(FocusChange::Gained),
            (true, false) => Some(FocusChange::Lost),
            _ => None,
        }
    }

    pub fn commit(&mut self, change: FocusChange) {
        self.focused = change == FocusChange::Gained;
        debug!("Focus {}", if self.focused { "gained" } else { "lost" });
    }

    /// Back to unfocused, as on a fresh mount.
    pub fn reset(&mut self) {
        self.focused = false;
    }
}

/// One-way switch for entrance animations: flips the first time the target
/// overlaps the viewport shrunk by `margin` on top and bottom, then stays on.
#[derive(Debug, Clone)]
pub struct RevealLatch {
    margin: f64,
    revealed: bool,
}

impl RevealLatch {
    pub const DEFAULT_MARGIN: f64 = 0.2;

    pub fn new(margin: f64) -> Self {
        Self {
            margin: margin.clamp(0.0, 0.5),
            revealed: false,
        }
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    pub fn reset(&mut self) {
        self.revealed = false;
    }

    /// True exactly once, on the event that reveals the target.
    pub fn observe<M>(&mut self, target: &M, viewport: &Viewport) -> bool
    where
        M: Measurable + ?Sized,
    {
        if self.revealed {
            return false;
        }

        let Some(rect) = target.measure(viewport.scroll_top) else {
            return false;
        };

        let top = viewport.height * self.margin;
        let bottom = viewport.height * (1.0 - self.margin);

        self.revealed = rect.top < bottom && rect.bottom() > top;
        self.revealed
    }
}

impl Default for RevealLatch {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MARGIN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(scroll_top: f64) -> Viewport {
        Viewport::new(scroll_top, 1000.0, 10_000.0)
    }

    #[test]
    fn test_transitions() {
        let anchor = Anchor::new(3000.0, 200.0);
        let mut observer = ProximityObserver::new(Threshold::NARROW);

        assert_eq!(observer.observe(&anchor, &at(0.0)), None);
        assert!(!observer.is_focused());

        // center of the anchor lands on the viewport center
        assert_eq!(
            observer.observe(&anchor, &at(2600.0)),
            Some(FocusChange::Gained)
        );
        assert_eq!(observer.observe(&anchor, &at(2650.0)), None);
        assert!(observer.is_focused());

        assert_eq!(
            observer.observe(&anchor, &at(5000.0)),
            Some(FocusChange::Lost)
        );
        assert!(!observer.is_focused());
    }

    #[test]
    fn test_unmeasurable_is_noop() {
        let mut observer = ProximityObserver::new(Threshold::WIDE);
        let detached: Option<Anchor> = None;

        assert_eq!(observer.observe(&detached, &at(0.0)), None);
        assert!(!observer.is_focused());

        let mut observer = ProximityObserver::new(Threshold::WIDE);
        let anchor = Some(Anchor::new(400.0, 200.0));
        assert_eq!(observer.observe(&anchor, &at(0.0)), Some(FocusChange::Gained));

        // losing the element keeps the last known state
        assert_eq!(observer.observe(&detached, &at(9000.0)), None);
        assert!(observer.is_focused());
    }

    #[test]
    fn test_evaluate_does_not_commit() {
        let mut observer = ProximityObserver::new(Threshold::NARROW);
        let centered = Rect::new(400.0, 200.0);

        assert_eq!(observer.evaluate(&centered, &at(0.0)), Some(FocusChange::Gained));
        assert!(!observer.is_focused());

        observer.commit(FocusChange::Gained);
        assert!(observer.is_focused());
        assert_eq!(observer.evaluate(&centered, &at(0.0)), None);

        observer.reset();
        assert!(!observer.is_focused());
        assert_eq!(observer.observe(&centered, &at(0.0)), Some(FocusChange::Gained));
    }

    #[test]
    fn test_flicker_at_boundary() {
        let mut observer = ProximityObserver::new(Threshold::NARROW);

        // distances of 249 and 250 alternate focus with no damping
        let inside = Rect::new(649.0, 200.0);
        let outside = Rect::new(650.0, 200.0);

        assert_eq!(observer.observe(&inside, &at(0.0)), Some(FocusChange::Gained));
        assert_eq!(observer.observe(&outside, &at(0.0)), Some(FocusChange::Lost));
        assert_eq!(observer.observe(&inside, &at(0.0)), Some(FocusChange::Gained));
    }

    #[test]
    fn test_reveal_latch() {
        let anchor = Anchor::new(2000.0, 100.0);
        let mut latch = RevealLatch::default();

        // top edge at 850, below the shrunk viewport bottom of 800
        assert!(!latch.observe(&anchor, &at(1150.0)));
        assert!(!latch.is_revealed());

        assert!(latch.observe(&anchor, &at(1250.0)));
        assert!(latch.is_revealed());

        // stays revealed once scrolled away, reports only once
        assert!(!latch.observe(&anchor, &at(0.0)));
        assert!(latch.is_revealed());
    }

    #[test]
    fn test_reveal_ignores_unmeasurable() {
        let mut latch = RevealLatch::default();

        assert!(!latch.observe(&None::<Anchor>, &at(0.0)));
        assert!(!latch.is_revealed());
    }
}
