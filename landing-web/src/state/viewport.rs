//! Viewport state management
//!
//! The page's single [`LandingLayout`] lives here, behind Leptos context.
//! Resize events feed it synchronously and the results are mirrored into
//! signals so components can subscribe to `mobile`, `show_demo`, and
//! whether the demo is currently mounted.

use leptos::ev;
use leptos::prelude::*;
use lib_core::layout::{is_mobile, shows_demo, DemoLifecycle, LandingLayout};

use crate::utils::dom;

/// Demo lifecycle that flips a signal; `<Show>` does the actual
/// construction and teardown of the editor subtree.
#[derive(Clone, Copy)]
pub struct SignalLifecycle {
    mounted: RwSignal<bool>,
}

impl DemoLifecycle for SignalLifecycle {
    fn construct(&mut self) {
        self.mounted.set(true);
    }

    fn destroy(&mut self) {
        // May run while the owning scope is being disposed.
        self.mounted.try_set(false);
    }
}

/// Global viewport context
#[derive(Clone, Copy)]
pub struct ViewportContext {
    layout: StoredValue<LandingLayout<SignalLifecycle>>,
    pub width: RwSignal<u32>,
    pub mobile: Memo<bool>,
    pub show_demo: Memo<bool>,
    pub demo_mounted: RwSignal<bool>,
}

impl ViewportContext {
    pub fn new(initial_width: u32) -> Self {
        let demo_mounted = RwSignal::new(false);
        let layout = LandingLayout::initialize(
            initial_width,
            SignalLifecycle {
                mounted: demo_mounted,
            },
        );
        let width = RwSignal::new(initial_width);

        Self {
            layout: StoredValue::new(layout),
            width,
            mobile: Memo::new(move |_| is_mobile(width.get())),
            show_demo: Memo::new(move |_| shows_demo(width.get())),
            demo_mounted,
        }
    }

    /// Apply a resize notification.
    pub fn on_resize(&self, new_width: u32) {
        let Some(update) = self.layout.try_update_value(|layout| layout.on_resize(new_width))
        else {
            return;
        };

        if update.resize.width_changed() {
            self.width.set(new_width);
        }
        if update.resize.classification_changed() {
            log::debug!(
                "viewport {}px: {:?}",
                new_width,
                update.resize.current.regime()
            );
        }
    }
}

/// Create the viewport context from the window's current width and keep it
/// in step with `resize` events for the lifetime of the calling scope.
pub fn provide_viewport_context() -> ViewportContext {
    let context = ViewportContext::new(dom::inner_width());
    provide_context(context);

    let handle = window_event_listener(ev::resize, move |_| {
        context.on_resize(dom::inner_width());
    });
    on_cleanup(move || handle.remove());

    context
}

pub fn use_viewport_context() -> ViewportContext {
    expect_context::<ViewportContext>()
}
