//! Section Component
//!
//! Content block with a title, a subtitle, and an optional media slot. The
//! section takes an already-resolved `swapped` flag; the page decides it
//! from the viewport (see `lib_core::layout::swap_unless_mobile`).

use leptos::prelude::*;
use lib_core::layout::SectionSpec;

#[component]
pub fn Section(
    #[prop(into)] title: String,
    #[prop(into, optional)] subtitle: String,
    /// Media before text. Omitted means not swapped.
    #[prop(optional)]
    swapped: Option<Signal<bool>>,
    /// Text-only section; `children` is never rendered.
    #[prop(optional)]
    no_child: bool,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    let class = move || {
        SectionSpec::default()
            .swapped(swapped.map(|s| s.get()).unwrap_or(false))
            .no_child(no_child)
            .class_name()
    };

    let media = if SectionSpec::default().no_child(no_child).renders_media() {
        children.map(|children| view! { <div class="section-media">{children()}</div> })
    } else {
        None
    };

    view! {
        <section class=class>
            <div class="section-text">
                <h2 class="section-title">{title}</h2>
                <p class="section-subtitle">{subtitle}</p>
            </div>
            {media}
        </section>
    }
}
