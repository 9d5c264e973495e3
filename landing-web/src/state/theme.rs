//! Dark mode state
//!
//! Starts from the system `prefers-color-scheme` and is never persisted.

use leptos::prelude::*;

use crate::utils::dom;

pub const DARK_CLASS: &str = "dark";

#[derive(Clone, Copy)]
pub struct ThemeContext {
    pub dark: RwSignal<bool>,
}

impl ThemeContext {
    pub fn new(dark: bool) -> Self {
        Self {
            dark: RwSignal::new(dark),
        }
    }

    pub fn is_dark(&self) -> bool {
        self.dark.get()
    }

    pub fn toggle(&self) {
        self.dark.update(|dark| *dark = !*dark);
    }
}

pub fn provide_theme_context() -> ThemeContext {
    let context = ThemeContext::new(dom::prefers_dark());
    provide_context(context);

    // Mirror the flag onto <html class="dark"> for the stylesheet.
    Effect::new(move |_| {
        dom::set_root_class(DARK_CLASS, context.dark.get());
    });

    context
}

pub fn use_theme_context() -> ThemeContext {
    expect_context::<ThemeContext>()
}
