//! Dark mode toggle button

use leptos::prelude::*;

use crate::components::icons::{MoonIcon, SunIcon};
use crate::state::theme::use_theme_context;

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme = use_theme_context();

    view! {
        <button
            class="theme-toggle"
            on:click=move |_| theme.toggle()
            aria-label="Toggle dark mode"
        >
            {move || {
                if theme.is_dark() {
                    view! { <SunIcon/> }.into_any()
                } else {
                    view! { <MoonIcon/> }.into_any()
                }
            }}
        </button>
    }
}
