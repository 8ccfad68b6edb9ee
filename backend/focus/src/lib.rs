//! # Scroll Focus
//!
//! Scroll-driven state behind the landing page animations.
//!
//!
//!
//! ## Focus
//!
//! A section is focused when its center is close to the viewport center:
//!
//! `|center(section) - center(viewport)| < threshold * viewport height`
//!
//! - Thresholds are 0.25 (narrow) or 0.4 (wide) of the viewport height
//! - Recomputed on every scroll/resize event and once on mount
//! - Pure function of the current geometry, previous state only matters for reporting transitions
//! - Not a visibility test, a tall section can be focused while mostly off screen
//! - No hysteresis, a section sitting on the boundary can flicker
//! - A section not laid out yet is skipped, never an error
//!
//!
//!
//! ## Highlight
//!
//! Some chapters rotate an emphasized item (sample comments, languages).
//!
//! - Timer starts when focus is gained, stops when it is lost or the section unmounts
//! - One step per full period, a partial period is dropped
//! - At most one timer per section
//!
//!
//!
//! ## Progress
//!
//! `clamp(scroll_top / (document height - viewport height), 0, 1)`, owned by
//! [`Page`]. A page shorter than the viewport reports 0. Sections do not take
//! it as input, they measure themselves.
//!
//!
//!
//! ## Lifecycle
//! ```text
//! Unmounted -> Mounted(unfocused) <-> Mounted(focused) -> Unmounted
//! ```

pub mod chapters;
pub mod error;
pub mod geometry;
pub mod highlight;
pub mod observer;
pub mod page;
pub mod progress;
pub mod section;

pub use chapters::{Chapter, ChapterSpan, STORYBOARD, Showcase, ShowcaseItem};
pub use error::FocusError;
pub use geometry::{Anchor, Rect, ScrollObservation, Threshold, Viewport};
pub use highlight::CyclicHighlight;
pub use observer::{FocusChange, Measurable, ProximityObserver, RevealLatch};
pub use page::{FocusTransition, Page};
pub use progress::{Connector, Keyframes, element_progress, scroll_progress};
pub use section::Section;
