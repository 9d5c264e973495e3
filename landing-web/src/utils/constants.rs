//! Application constants

pub const PRODUCT_NAME: &str = "Harper";

pub const GITHUB_URL: &str = "https://github.com/Automattic/harper";
pub const DOCS_URL: &str = "https://writewithharper.com/docs";

/// Element removed once WASM has started.
pub const LOADING_ELEMENT_ID: &str = "leptos-loading";

/// Text pre-filled into the interactive demo editor.
pub const DEMO_TEXT: &str = "Harper is an grammar checker for developers. \
It runs on you're own machine, so nothing you type ever leaves it. \
Try fixing the the mistakes in this paragraph, or paste in something of your own.";
