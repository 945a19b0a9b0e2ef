use crate::core::Bounds;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn body() -> Option<web::HtmlElement> {
    window_document().and_then(|d| d.body())
}

/// All elements matching `selector`, as `HtmlElement`s.
pub fn query_all(document: &web::Document, selector: &str) -> Vec<web::HtmlElement> {
    let Ok(list) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|n| n.dyn_into::<web::HtmlElement>().ok())
        .collect()
}

#[inline]
pub fn query_one(document: &web::Document, selector: &str) -> Option<web::HtmlElement> {
    document
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

#[inline]
pub fn by_id(document: &web::Document, id: &str) -> Option<web::HtmlElement> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

#[inline]
pub fn bounds_of(el: &web::Element) -> Bounds {
    let r = el.get_bounding_client_rect();
    Bounds::new(r.left(), r.top(), r.width(), r.height())
}

#[inline]
pub fn scroll_y() -> f64 {
    web::window()
        .and_then(|w| w.page_y_offset().ok())
        .unwrap_or(0.0)
}

#[inline]
pub fn viewport_width() -> f64 {
    web::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}

#[inline]
pub fn viewport_height() -> f64 {
    web::window()
        .and_then(|w| w.inner_height().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}

/// Attach a listener that lives for the rest of the page.
pub fn listen<E, F>(target: &web::EventTarget, event: &str, handler: F)
where
    E: JsCast + 'static,
    F: FnMut(E) + 'static,
{
    let mut handler = handler;
    let closure = Closure::wrap(Box::new(move |ev: web::Event| {
        if let Ok(ev) = ev.dyn_into::<E>() {
            handler(ev);
        }
    }) as Box<dyn FnMut(web::Event)>);
    _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut(web::MouseEvent) + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        listen(&el, "click", move |ev: web::MouseEvent| handler(ev));
    }
}

/// Run `f` once after `delay_ms`. Not cancellable; see `timer::Timeout`
/// for that.
pub fn after(delay_ms: i32, f: impl FnOnce() + 'static) {
    let Some(window) = web::window() else {
        return;
    };
    let cb = Closure::once_into_js(f);
    _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(cb.unchecked_ref(), delay_ms);
}

/// Append a throwaway decorative element and remove it after `lifetime_ms`.
pub fn spawn_transient(parent: &web::Element, css_text: &str, lifetime_ms: i32) {
    let Some(doc) = window_document() else {
        return;
    };
    let Ok(el) = doc.create_element("div") else {
        return;
    };
    _ = el.set_attribute("style", css_text);
    if parent.append_child(&el).is_err() {
        return;
    }
    after(lifetime_ms, move || {
        if el.parent_node().is_some() {
            el.remove();
        }
    });
}

/// Inject a `<style>` block into the document head.
pub fn inject_style(document: &web::Document, css: &str) -> Option<web::Element> {
    let head = document.head()?;
    let style = document.create_element("style").ok()?;
    style.set_text_content(Some(css));
    head.append_child(&style).ok()?;
    Some(style)
}
