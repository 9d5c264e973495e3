//! Page footer

use leptos::prelude::*;

use crate::utils::constants::{GITHUB_URL, PRODUCT_NAME};
use crate::utils::dom;

#[component]
pub fn Footer() -> impl IntoView {
    let year = dom::current_year();

    view! {
        <footer class="footer">
            <p>
                {format!("© {} {} contributors. ", year, PRODUCT_NAME)}
                "Licensed under Apache-2.0. "
                <a href=GITHUB_URL>"Source on GitHub"</a>
            </p>
        </footer>
    }
}
