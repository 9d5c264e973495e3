//! # Responsive Layout
//!
//! Everything on the landing page that makes a decision lives here:
//!
//! - [`breakpoints`] - width thresholds and the derived `mobile`/`show_demo` flags
//! - [`viewport`] - the single width value the page reacts to
//! - [`demo_gate`] - mount/unmount state machine for the interactive demo
//! - [`section`] - orientation contract for content sections
//!
//! [`LandingLayout`] ties the viewport and the demo gate together so a
//! resize is applied in one step: store the width, reclassify, sync the gate.

pub mod breakpoints;
pub mod demo_gate;
pub mod section;
pub mod viewport;

pub use breakpoints::{
    is_mobile, shows_demo, Classification, WidthRegime, DEMO_BREAKPOINT, MOBILE_BREAKPOINT,
};
pub use demo_gate::{DemoGate, DemoLifecycle, DemoState, GateTransition};
pub use section::{swap_unless_mobile, swap_when, Orientation, SectionSpec};
pub use viewport::{ResizeOutcome, Viewport};

/// Outcome of applying one resize to the whole layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutUpdate {
    pub resize: ResizeOutcome,
    pub demo: GateTransition,
}

#[derive(Debug)]
pub struct LandingLayout<L: DemoLifecycle> {
    viewport: Viewport,
    demo: DemoGate<L>,
}

impl<L: DemoLifecycle> LandingLayout<L> {
    /// Build the layout for the initial window width, mounting the demo
    /// right away if the page opens wide.
    pub fn initialize(width: u32, lifecycle: L) -> Self {
        let viewport = Viewport::initialize(width);
        let mut demo = DemoGate::new(lifecycle);
        demo.sync(viewport.show_demo());
        Self { viewport, demo }
    }

    pub fn on_resize(&mut self, new_width: u32) -> LayoutUpdate {
        let resize = self.viewport.on_resize(new_width);
        let demo = self.demo.sync(resize.current.show_demo);
        LayoutUpdate { resize, demo }
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn classification(&self) -> Classification {
        self.viewport.classification()
    }

    pub fn demo(&self) -> &DemoGate<L> {
        &self.demo
    }

    /// Resolve a section that alternates on wide viewports.
    pub fn alternating(&self, spec: SectionSpec) -> SectionSpec {
        spec.swapped(swap_unless_mobile(self.viewport.is_mobile()))
    }
}
