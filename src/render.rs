use crate::core::VisualState;
use web_sys as web;

/// Write a computed visual state onto an element's inline style.
#[inline]
pub fn apply(el: &web::HtmlElement, state: &impl VisualState) {
    let style = el.style();
    for (prop, value) in state.decls() {
        _ = style.set_property(prop, &value);
    }
}

#[inline]
pub fn set_style(el: &web::HtmlElement, prop: &str, value: &str) {
    _ = el.style().set_property(prop, value);
}

#[inline]
pub fn clear_style(el: &web::HtmlElement, prop: &str) {
    _ = el.style().remove_property(prop);
}

#[inline]
pub fn set_class(el: &web::Element, class: &str, on: bool) {
    let cl = el.class_list();
    if on {
        _ = cl.add_1(class);
    } else {
        _ = cl.remove_1(class);
    }
}
