use crate::geometry::{Rect, Viewport};

/// Page-wide scroll completion in `[0, 1]`.
///
/// A page that fits on screen has nothing to scroll and reports 0.
pub fn scroll_progress(viewport: &Viewport) -> f64 {
    let scrollable = viewport.max_scroll();

    // also catches NaN
    if !(scrollable > 0.0) {
        return 0.0;
    }

    let progress = viewport.scroll_top / scrollable;
    if progress.is_nan() {
        return 0.0;
    }

    progress.clamp(0.0, 1.0)
}

/// Progress of one element through the viewport: 0 when its top edge meets
/// the viewport bottom, 1 when its bottom edge leaves past the viewport top.
pub fn element_progress(rect: &Rect, viewport_height: f64) -> f64 {
    let travel = viewport_height + rect.height;

    if !(travel > 0.0) {
        return 0.0;
    }

    ((viewport_height - rect.top) / travel).clamp(0.0, 1.0)
}

/// Piecewise-linear map from ascending `stops` to `values`, clamped at both ends.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Keyframes<const N: usize> {
    stops: [f64; N],
    values: [f64; N],
}

impl<const N: usize> Keyframes<N> {
    pub const fn new(stops: [f64; N], values: [f64; N]) -> Self {
        Self { stops, values }
    }

    pub fn sample(&self, x: f64) -> f64 {
        let (Some(&first), Some(&last)) = (self.stops.first(), self.stops.last()) else {
            return 0.0;
        };
        let (Some(&start), Some(&end)) = (self.values.first(), self.values.last()) else {
            return 0.0;
        };

        if x.is_nan() || x <= first {
            return start;
        }
        if x >= last {
            return end;
        }

        for (stops, values) in self.stops.windows(2).zip(self.values.windows(2)) {
            if x > stops[1] {
                continue;
            }

            let span = stops[1] - stops[0];
            if span <= 0.0 {
                return values[1];
            }

            let t = (x - stops[0]) / span;
            return values[0] + (values[1] - values[0]) * t;
        }

        end
    }
}

pub const PATH_LENGTH: Keyframes<3> = Keyframes::new([0.0, 0.5, 1.0], [0.0, 1.0, 1.0]);
pub const OPACITY: Keyframes<4> = Keyframes::new([0.0, 0.1, 0.9, 1.0], [0.0, 1.0, 1.0, 0.0]);
pub const GLOW_OFFSET: Keyframes<2> = Keyframes::new([0.0, 1.0], [-0.5, 1.5]);

/// Draw state of the line joining two chapters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Connector {
    /// Drawn fraction of the path.
    pub path_length: f64,
    pub opacity: f64,
    /// Top of the travelling glow, as a fraction of the connector height.
    pub glow_offset: f64,
}

impl Connector {
    pub fn at(progress: f64) -> Self {
        Self {
            path_length: PATH_LENGTH.sample(progress),
            opacity: OPACITY.sample(progress),
            glow_offset: GLOW_OFFSET.sample(progress),
        }
    }

    pub fn measure(rect: &Rect, viewport_height: f64) -> Self {
        Self::at(element_progress(rect, viewport_height))
    }
}
