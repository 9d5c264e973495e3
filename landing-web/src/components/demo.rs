//! Interactive Demo
//!
//! The live editor is expensive to bring up, so it only exists while the
//! viewport context reports the demo as mounted. `<Show>` builds a fresh
//! editor on every mount and drops it on unmount.

use leptos::prelude::*;

use crate::state::viewport::use_viewport_context;
use crate::utils::constants::{DEMO_TEXT, DOCS_URL};

#[component]
pub fn InteractiveDemo() -> impl IntoView {
    let viewport = use_viewport_context();

    view! {
        <Show
            when=move || viewport.demo_mounted.get()
            fallback=|| view! { <DemoPlaceholder/> }
        >
            <DemoEditor/>
        </Show>
    }
}

#[component]
fn DemoEditor() -> impl IntoView {
    log::info!("demo editor constructed");
    on_cleanup(|| log::info!("demo editor released"));

    let text = RwSignal::new(DEMO_TEXT.to_string());
    let word_count = move || text.with(|t| t.split_whitespace().count());

    view! {
        <div class="demo">
            <textarea
                class="demo-editor"
                spellcheck="false"
                rows="8"
                prop:value=move || text.get()
                on:input=move |ev| text.set(event_target_value(&ev))
            ></textarea>
            <p class="demo-status">{word_count} " words"</p>
        </div>
    }
}

#[component]
fn DemoPlaceholder() -> impl IntoView {
    view! {
        <div class="demo-placeholder">
            <p>"Open this page on a wider screen to try Harper live, or install it in your editor."</p>
            <a class="btn" href=DOCS_URL>"Get Started"</a>
        </div>
    }
}
