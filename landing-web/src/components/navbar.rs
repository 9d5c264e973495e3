//! Navigation Bar Component

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::icons::{GithubIcon, Logo};
use crate::components::ThemeToggle;
use crate::utils::constants::{DOCS_URL, GITHUB_URL, PRODUCT_NAME};

#[component]
pub fn Navbar() -> impl IntoView {
    view! {
        <nav class="navbar">
            <div class="navbar-inner">
                <A href="/" attr:class="nav-link-clean">
                    <span class="nav-title">
                        <Logo/>
                        <span class="nav-name">{PRODUCT_NAME}</span>
                    </span>
                </A>
                <div class="nav-actions">
                    <a class="nav-link" href=DOCS_URL>"Docs"</a>
                    <a class="nav-link" href=GITHUB_URL aria-label="GitHub repository">
                        <GithubIcon/>
                    </a>
                    <ThemeToggle/>
                </div>
            </div>
        </nav>
    }
}
