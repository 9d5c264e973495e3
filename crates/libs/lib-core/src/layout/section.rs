//! # Section Alternation
//!
//! A section is a content block with a title, a subtitle, and (usually) a
//! media slot. Its orientation comes from a single resolved `swapped` flag:
//! the section itself knows nothing about viewport width. The page decides
//! the flag, typically with [`swap_unless_mobile`] or [`swap_when`], so that
//! narrow viewports always get the plain text-then-media order.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    /// Text first, media second, in source order.
    #[default]
    Normal,
    /// Media first, text second.
    Swapped,
}

impl Orientation {
    pub fn from_swapped(swapped: bool) -> Self {
        if swapped {
            Orientation::Swapped
        } else {
            Orientation::Normal
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionSpec {
    pub title: String,
    pub subtitle: String,
    pub swapped: bool,
    pub no_child: bool,
}

impl SectionSpec {
    pub fn new(title: impl Into<String>, subtitle: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            subtitle: subtitle.into(),
            ..Default::default()
        }
    }

    pub fn swapped(mut self, swapped: bool) -> Self {
        self.swapped = swapped;
        self
    }

    pub fn no_child(mut self, no_child: bool) -> Self {
        self.no_child = no_child;
        self
    }

    pub fn orientation(&self) -> Orientation {
        Orientation::from_swapped(self.swapped)
    }

    /// Whether the media slot should be evaluated at all.
    pub fn renders_media(&self) -> bool {
        !self.no_child
    }

    /// CSS class for the section container.
    ///
    /// `section` lays text out before media; `swapped` reverses the row.
    /// For `no_child` sections the `swapped` class only moves text alignment.
    pub fn class_name(&self) -> &'static str {
        match (self.no_child, self.orientation()) {
            (false, Orientation::Normal) => "section",
            (false, Orientation::Swapped) => "section swapped",
            (true, Orientation::Normal) => "section no-child",
            (true, Orientation::Swapped) => "section no-child swapped",
        }
    }
}

/// `swapped={!mobile}`: alternate on wide viewports, never on mobile.
pub fn swap_unless_mobile(mobile: bool) -> bool {
    !mobile
}

/// `swapped={condition && !mobile}`: an author's swap that mobile overrides.
pub fn swap_when(condition: bool, mobile: bool) -> bool {
    condition && !mobile
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_not_swapped() {
        let spec = SectionSpec::new("Private", "Your data stays with you.");
        assert!(!spec.swapped);
        assert_eq!(spec.orientation(), Orientation::Normal);
        assert_eq!(spec.class_name(), "section");
    }

    #[test]
    fn test_swapped_class() {
        let spec = SectionSpec::new("Native Everywhere", "").swapped(true);
        assert_eq!(spec.class_name(), "section swapped");
    }

    #[test]
    fn test_no_child_never_yields_media() {
        for swapped in [false, true] {
            let spec = SectionSpec::new("Open Source", "").swapped(swapped).no_child(true);
            assert!(!spec.renders_media());
        }
        let spec = SectionSpec::new("Open Source", "").no_child(true).swapped(true);
        assert_eq!(spec.class_name(), "section no-child swapped");
    }

    #[test]
    fn test_page_resolution_follows_mobile_flag() {
        // 1500px: not mobile
        assert!(swap_unless_mobile(false));
        // 320px: mobile
        assert!(!swap_unless_mobile(true));

        assert!(swap_when(true, false));
        assert!(!swap_when(true, true));
        assert!(!swap_when(false, false));
        assert!(!swap_when(false, true));
    }
}
