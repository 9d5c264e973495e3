//! Viewport width tracking

use super::breakpoints::Classification;

/// Current inner width of the browser window, in pixels.
///
/// There is one per page. Derived flags are recomputed from `width` on every
/// read, so they cannot fall out of step with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    width: u32,
}

/// What a single resize changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResizeOutcome {
    pub previous_width: u32,
    pub width: u32,
    pub previous: Classification,
    pub current: Classification,
}

impl ResizeOutcome {
    pub fn width_changed(&self) -> bool {
        self.previous_width != self.width
    }

    pub fn classification_changed(&self) -> bool {
        self.previous != self.current
    }
}

impl Viewport {
    /// Capture the width observed at page construction.
    pub fn initialize(width: u32) -> Self {
        tracing::debug!("viewport initialized at {}px", width);
        Self { width }
    }

    /// Store the width reported by a resize notification.
    ///
    /// Every call overwrites the width; there is no debouncing.
    pub fn on_resize(&mut self, new_width: u32) -> ResizeOutcome {
        let previous_width = self.width;
        let previous = self.classification();
        self.width = new_width;
        let current = self.classification();

        if previous != current {
            tracing::debug!(
                "viewport {}px -> {}px: {:?} -> {:?}",
                previous_width,
                new_width,
                previous.regime(),
                current.regime()
            );
        }

        ResizeOutcome {
            previous_width,
            width: new_width,
            previous,
            current,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn classification(&self) -> Classification {
        Classification::for_width(self.width)
    }

    pub fn is_mobile(&self) -> bool {
        self.classification().mobile
    }

    pub fn show_demo(&self) -> bool {
        self.classification().show_demo
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initialize_classifies_immediately() {
        let vp = Viewport::initialize(1500);
        assert_eq!(vp.width(), 1500);
        assert!(!vp.is_mobile());
        assert!(vp.show_demo());

        let vp = Viewport::initialize(320);
        assert!(vp.is_mobile());
        assert!(!vp.show_demo());
    }

    #[test]
    fn test_resize_overwrites_unconditionally() {
        let mut vp = Viewport::initialize(800);
        let outcome = vp.on_resize(800);
        assert!(!outcome.width_changed());
        assert!(!outcome.classification_changed());

        let outcome = vp.on_resize(801);
        assert!(outcome.width_changed());
        assert!(!outcome.classification_changed());
        assert_eq!(vp.width(), 801);
    }

    #[test]
    fn test_resize_reports_classification_edges() {
        let mut vp = Viewport::initialize(640);
        let outcome = vp.on_resize(639);
        assert!(outcome.classification_changed());
        assert!(!outcome.previous.mobile);
        assert!(outcome.current.mobile);

        let outcome = vp.on_resize(1081);
        assert!(outcome.current.show_demo);
        assert!(!outcome.current.mobile);
    }
}
