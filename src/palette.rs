use crate::core::constants::{THEME_TRANSITION, THEME_TRANSITION_MS};
use crate::core::Theme;
use crate::render;
use crate::timer::Debounce;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Write the theme's palette onto `:root` and play a short global
/// transition. Rapid toggles share one pending clear.
pub fn apply(document: &web::Document, theme: Theme, transition: &Debounce) {
    if let Some(root) = document
        .document_element()
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
    {
        for (var, value) in theme.palette() {
            render::set_style(&root, var, value);
        }
    }
    let Some(body) = document.body() else {
        return;
    };
    render::set_style(&body, "transition", THEME_TRANSITION);
    transition.schedule(THEME_TRANSITION_MS, move || {
        render::clear_style(&body, "transition");
    });
}
