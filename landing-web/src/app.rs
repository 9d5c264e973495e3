//! Harper Landing Page - Leptos Frontend

use leptos::prelude::*;
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};

use crate::components::Navbar;
use crate::pages::{LandingPage, NotFound};
use crate::state::theme::provide_theme_context;
use crate::state::viewport::provide_viewport_context;
use crate::utils::constants::LOADING_ELEMENT_ID;
use crate::utils::dom;

#[component]
pub fn App() -> impl IntoView {
    let viewport = provide_viewport_context();
    provide_theme_context();

    log::info!(
        "landing page mounted at {}px (mobile: {}, demo: {})",
        viewport.width.get_untracked(),
        viewport.mobile.get_untracked(),
        viewport.show_demo.get_untracked()
    );

    // Backup in case main() ran before the loading element was parsed
    Effect::new(move |_| {
        dom::hide_loading_screen(LOADING_ELEMENT_ID);
    });

    view! {
        <Router>
            <div class="app-container">
                <Navbar/>
                <Routes fallback=|| view! { <NotFound/> }>
                    <Route path=path!("/") view=LandingPage/>
                </Routes>
            </div>
        </Router>
    }
}
