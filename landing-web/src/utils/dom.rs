//! Thin wrappers over `web-sys` window and document access.
//!
//! None of these panic: outside a browser they fall back to neutral values
//! and log a warning.

/// Current `window.innerWidth` in whole pixels, or 0 without a window.
pub fn inner_width() -> u32 {
    let width = web_sys::window()
        .and_then(|window| window.inner_width().ok())
        .and_then(|value| value.as_f64());

    match width {
        Some(px) if px.is_finite() && px > 0.0 => px.min(u32::MAX as f64) as u32,
        Some(_) => 0,
        None => {
            log::warn!("window.innerWidth unavailable, assuming 0");
            0
        }
    }
}

/// Whether the user's system asks for a dark color scheme.
pub fn prefers_dark() -> bool {
    web_sys::window()
        .and_then(|window| window.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .map(|query| query.matches())
        .unwrap_or(false)
}

/// Add or remove a class on the document root (`<html>`).
pub fn set_root_class(class: &str, enabled: bool) {
    let Some(root) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.document_element())
    else {
        log::warn!("no document element, cannot set class {}", class);
        return;
    };

    let list = root.class_list();
    let result = if enabled {
        list.add_1(class)
    } else {
        list.remove_1(class)
    };
    if let Err(e) = result {
        log::warn!("failed to update root class {}: {:?}", class, e);
    }
}

/// Hide the static loading screen shipped in `index.html`.
pub fn hide_loading_screen(id: &str) {
    let Some(element) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(id))
    else {
        log::debug!("loading element #{} not found", id);
        return;
    };

    if let Err(e) = element.class_list().add_1("hidden") {
        log::warn!("failed to add 'hidden' class: {:?}", e);
    }
    if let Err(e) = element.set_attribute("style", "display: none !important;") {
        log::warn!("failed to hide loading screen: {:?}", e);
    }
}

/// Current calendar year from the JS clock.
pub fn current_year() -> u32 {
    js_sys::Date::new_0().get_full_year()
}
