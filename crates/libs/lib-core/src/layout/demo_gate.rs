//! # Demo Gate
//!
//! Decides whether the interactive demo exists at all.
//!
//! The demo hosts a heavyweight embedded editor, so it is never built for
//! narrow viewports and is released (not hidden) when the viewport narrows
//! again. The gate is a two-state machine; the host supplies the actual
//! construct/destroy work through [`DemoLifecycle`].
//!
//! ```rust
//! use lib_core::layout::{DemoGate, DemoLifecycle, GateTransition};
//!
//! #[derive(Default)]
//! struct Counter { built: u32, released: u32 }
//!
//! impl DemoLifecycle for Counter {
//!     fn construct(&mut self) { self.built += 1; }
//!     fn destroy(&mut self) { self.released += 1; }
//! }
//!
//! let mut gate = DemoGate::new(Counter::default());
//! assert_eq!(gate.sync(true), GateTransition::Mounted);
//! assert_eq!(gate.sync(true), GateTransition::Unchanged);
//! assert_eq!(gate.sync(false), GateTransition::Unmounted);
//! assert_eq!(gate.lifecycle().built, 1);
//! assert_eq!(gate.lifecycle().released, 1);
//! ```

/// Construct/destroy hooks for the demo subtree.
pub trait DemoLifecycle {
    /// Build the demo. Called only on an `Absent -> Mounted` edge.
    fn construct(&mut self);

    /// Release the demo. Called only on a `Mounted -> Absent` edge.
    fn destroy(&mut self);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DemoState {
    #[default]
    Absent,
    Mounted,
}

/// Result of a [`DemoGate::sync`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateTransition {
    Mounted,
    Unmounted,
    Unchanged,
}

#[derive(Debug)]
pub struct DemoGate<L: DemoLifecycle> {
    state: DemoState,
    lifecycle: L,
}

impl<L: DemoLifecycle> DemoGate<L> {
    /// A gate starts `Absent`; nothing is constructed until the first sync.
    pub fn new(lifecycle: L) -> Self {
        Self {
            state: DemoState::Absent,
            lifecycle,
        }
    }

    /// Drive the gate from the current `show_demo` flag.
    pub fn sync(&mut self, show_demo: bool) -> GateTransition {
        match (self.state, show_demo) {
            (DemoState::Absent, true) => {
                self.lifecycle.construct();
                self.state = DemoState::Mounted;
                tracing::info!("interactive demo mounted");
                GateTransition::Mounted
            }
            (DemoState::Mounted, false) => {
                self.lifecycle.destroy();
                self.state = DemoState::Absent;
                tracing::info!("interactive demo unmounted");
                GateTransition::Unmounted
            }
            _ => GateTransition::Unchanged,
        }
    }

    pub fn state(&self) -> DemoState {
        self.state
    }

    pub fn is_mounted(&self) -> bool {
        self.state == DemoState::Mounted
    }

    pub fn lifecycle(&self) -> &L {
        &self.lifecycle
    }
}

impl<L: DemoLifecycle> Drop for DemoGate<L> {
    fn drop(&mut self) {
        if self.state == DemoState::Mounted {
            self.lifecycle.destroy();
            self.state = DemoState::Absent;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct Counts {
        built: Rc<Cell<u32>>,
        released: Rc<Cell<u32>>,
    }

    impl DemoLifecycle for Counts {
        fn construct(&mut self) {
            self.built.set(self.built.get() + 1);
        }

        fn destroy(&mut self) {
            self.released.set(self.released.get() + 1);
        }
    }

    #[test]
    fn test_starts_absent_without_construction() {
        let counts = Counts::default();
        let gate = DemoGate::new(counts.clone());
        assert_eq!(gate.state(), DemoState::Absent);
        assert_eq!(counts.built.get(), 0);
    }

    #[test]
    fn test_hidden_demo_is_never_constructed() {
        let counts = Counts::default();
        let mut gate = DemoGate::new(counts.clone());
        assert_eq!(gate.sync(false), GateTransition::Unchanged);
        assert_eq!(gate.sync(false), GateTransition::Unchanged);
        assert!(!gate.is_mounted());
        assert_eq!(counts.built.get(), 0);
        assert_eq!(counts.released.get(), 0);
    }

    #[test]
    fn test_repeated_show_constructs_once() {
        let counts = Counts::default();
        let mut gate = DemoGate::new(counts.clone());
        gate.sync(true);
        gate.sync(true);
        gate.sync(true);
        assert_eq!(counts.built.get(), 1);
        assert_eq!(counts.released.get(), 0);
    }

    #[test]
    fn test_remount_is_fresh() {
        let counts = Counts::default();
        let mut gate = DemoGate::new(counts.clone());
        assert_eq!(gate.sync(true), GateTransition::Mounted);
        assert_eq!(gate.sync(false), GateTransition::Unmounted);
        assert_eq!(gate.sync(true), GateTransition::Mounted);
        assert_eq!(counts.built.get(), 2);
        assert_eq!(counts.released.get(), 1);
    }

    #[test]
    fn test_drop_releases_mounted_demo() {
        let counts = Counts::default();
        {
            let mut gate = DemoGate::new(counts.clone());
            gate.sync(true);
        }
        assert_eq!(counts.released.get(), 1);

        {
            let _gate = DemoGate::new(counts.clone());
        }
        assert_eq!(counts.released.get(), 1);
    }
}
