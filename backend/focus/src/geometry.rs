use crate::error::FocusError;

/// Vertical extent of an element, relative to the top of the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub top: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    pub fn center(&self) -> f64 {
        self.top + self.height / 2.0
    }
}

/// Vertical extent of an element in document coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Anchor {
    pub top: f64,
    pub height: f64,
}

impl Anchor {
    pub const fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    /// Where the element sits on screen once the page is scrolled by `scroll_top`.
    pub fn rect(&self, scroll_top: f64) -> Rect {
        Rect::new(self.top - scroll_top, self.height)
    }
}

/// Window state carried by every scroll and resize event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub scroll_top: f64,
    pub height: f64,
    pub document_height: f64,
}

impl Viewport {
    pub const fn new(scroll_top: f64, height: f64, document_height: f64) -> Self {
        Self {
            scroll_top,
            height,
            document_height,
        }
    }

    pub fn center(&self) -> f64 {
        self.height / 2.0
    }

    /// Furthest the page can scroll. Zero or negative when the page fits on screen.
    pub fn max_scroll(&self) -> f64 {
        self.document_height - self.height
    }
}

/// Allowed center-to-center distance, as a fraction of the viewport height.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Threshold(f64);

impl Threshold {
    pub const NARROW: Self = Self(0.25);
    pub const WIDE: Self = Self(0.4);

    pub fn new(fraction: f64) -> Result<Self, FocusError> {
        if fraction.is_finite() && fraction > 0.0 {
            Ok(Self(fraction))
        } else {
            Err(FocusError::InvalidThreshold(fraction))
        }
    }

    pub fn fraction(self) -> f64 {
        self.0
    }

    pub fn pixels(self, viewport_height: f64) -> f64 {
        self.0 * viewport_height
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollObservation {
    pub viewport_height: f64,
    pub element: Rect,
    pub threshold: Threshold,
}

impl ScrollObservation {
    pub fn element_center(&self) -> f64 {
        self.element.center()
    }

    pub fn viewport_center(&self) -> f64 {
        self.viewport_height / 2.0
    }

    pub fn distance(&self) -> f64 {
        (self.element_center() - self.viewport_center()).abs()
    }

    /// Proximity, not visibility: a tall element can be focused while mostly off screen.
    pub fn is_focused(&self) -> bool {
        self.distance() < self.threshold.pixels(self.viewport_height)
    }
}
