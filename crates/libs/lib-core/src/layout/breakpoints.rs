//! # Breakpoints
//!
//! The two width thresholds that drive every responsive decision on the page.
//!
//! They are independent and split widths into three regimes:
//!
//! | Width          | `mobile` | `show_demo` | Regime                         |
//! |----------------|----------|-------------|--------------------------------|
//! | `< 640`        | `true`   | `false`     | [`WidthRegime::Compact`]       |
//! | `640..=1080`   | `false`  | `false`     | [`WidthRegime::Standard`]      |
//! | `> 1080`       | `false`  | `true`      | [`WidthRegime::Wide`]          |
//!
//! Both comparisons are strict: exactly 640 is not mobile, exactly 1080 does
//! not show the demo.

/// Widths strictly below this are compact ("mobile").
pub const MOBILE_BREAKPOINT: u32 = 640;

/// Widths strictly above this mount the interactive demo.
pub const DEMO_BREAKPOINT: u32 = 1080;

/// Whether a viewport of `width` pixels is classified as mobile.
pub fn is_mobile(width: u32) -> bool {
    width < MOBILE_BREAKPOINT
}

/// Whether a viewport of `width` pixels is wide enough for the demo.
pub fn shows_demo(width: u32) -> bool {
    width > DEMO_BREAKPOINT
}

/// Named width band produced by the two breakpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WidthRegime {
    /// Mobile, no demo.
    Compact,
    /// Desktop layout, no demo.
    Standard,
    /// Desktop layout with the demo mounted.
    Wide,
}

/// Both derived flags, always computed together from one width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Classification {
    pub mobile: bool,
    pub show_demo: bool,
}

impl Classification {
    pub fn for_width(width: u32) -> Self {
        Self {
            mobile: is_mobile(width),
            show_demo: shows_demo(width),
        }
    }

    pub fn regime(&self) -> WidthRegime {
        match (self.mobile, self.show_demo) {
            (true, _) => WidthRegime::Compact,
            (false, false) => WidthRegime::Standard,
            (false, true) => WidthRegime::Wide,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mobile_boundary() {
        assert!(is_mobile(0));
        assert!(is_mobile(639));
        assert!(!is_mobile(640));
        assert!(!is_mobile(641));
    }

    #[test]
    fn test_demo_boundary() {
        assert!(!shows_demo(1079));
        assert!(!shows_demo(1080));
        assert!(shows_demo(1081));
        assert!(shows_demo(u32::MAX));
    }

    #[test]
    fn test_flags_match_comparisons_across_range() {
        for w in 0..=2000u32 {
            let c = Classification::for_width(w);
            assert_eq!(c.mobile, w < 640, "mobile at {w}");
            assert_eq!(c.show_demo, w > 1080, "show_demo at {w}");
        }
    }

    #[test]
    fn test_regimes() {
        assert_eq!(Classification::for_width(320).regime(), WidthRegime::Compact);
        assert_eq!(Classification::for_width(639).regime(), WidthRegime::Compact);
        assert_eq!(Classification::for_width(640).regime(), WidthRegime::Standard);
        assert_eq!(Classification::for_width(1080).regime(), WidthRegime::Standard);
        assert_eq!(Classification::for_width(1081).regime(), WidthRegime::Wide);
    }

    #[test]
    fn test_mobile_and_demo_never_both_true() {
        for w in [0, 320, 639, 640, 1000, 1080, 1081, 1500, 3840] {
            let c = Classification::for_width(w);
            assert!(!(c.mobile && c.show_demo));
        }
    }
}
