//! Viewport geometry

/// Element bounding box in viewport coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub top: f64,
    pub left: f64,
    pub bottom: f64,
    pub right: f64,
}

/// Window and document dimensions
///
/// The window's inner size wins; a zero (or NaN) inner dimension falls back
/// to the document element's client size.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    pub inner_width: f64,
    pub inner_height: f64,
    pub client_width: f64,
    pub client_height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            inner_width: width,
            inner_height: height,
            client_width: width,
            client_height: height,
        }
    }

    pub fn width(&self) -> f64 {
        or_fallback(self.inner_width, self.client_width)
    }

    pub fn height(&self) -> f64 {
        or_fallback(self.inner_height, self.client_height)
    }
}

fn or_fallback(primary: f64, fallback: f64) -> f64 {
    if primary == 0.0 || primary.is_nan() {
        fallback
    } else {
        primary
    }
}

/// Whether the element's box lies entirely inside the viewport
///
/// `None` when there is no element to measure.
pub fn is_fully_in_viewport(rect: Option<&Rect>, viewport: &Viewport) -> Option<bool> {
    rect.map(|r| {
        r.top >= 0.0
            && r.left >= 0.0
            && r.bottom <= viewport.height()
            && r.right <= viewport.width()
    })
}
