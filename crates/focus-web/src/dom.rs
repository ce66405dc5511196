use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub const SVG_NS: &str = "http://www.w3.org/2000/svg";

pub fn required_element(document: &web::Document, id: &str) -> anyhow::Result<web::Element> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow::anyhow!("missing #{id}"))
}

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
        _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    } else {
        log::warn!("[dom] no #{} to attach click listener", element_id);
    }
}

#[inline]
pub fn set_text(document: &web::Document, element_id: &str, text: &str) {
    if let Some(el) = document.get_element_by_id(element_id) {
        el.set_text_content(Some(text));
    }
}

pub fn input(document: &web::Document, element_id: &str) -> Option<web::HtmlInputElement> {
    document
        .get_element_by_id(element_id)
        .and_then(|el| el.dyn_into::<web::HtmlInputElement>().ok())
}

/// Current value of an `<input>` by id, or `None` if it is not on the page.
pub fn input_value(document: &web::Document, element_id: &str) -> Option<String> {
    input(document, element_id).map(|input| input.value())
}

pub fn set_hidden(document: &web::Document, element_id: &str, hidden: bool) {
    if let Some(el) = document.get_element_by_id(element_id) {
        _ = el.class_list().toggle_with_force("hidden", hidden);
    }
}

pub fn focus(document: &web::Document, element_id: &str) {
    if let Some(el) = document
        .get_element_by_id(element_id)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
    {
        _ = el.focus();
    }
}

pub fn create_svg(document: &web::Document, tag: &str) -> anyhow::Result<web::Element> {
    document
        .create_element_ns(Some(SVG_NS), tag)
        .map_err(|e| anyhow::anyhow!("create <{tag}>: {:?}", e))
}

pub fn set_attrs(el: &web::Element, attrs: &[(&str, String)]) {
    for (name, value) in attrs {
        _ = el.set_attribute(name, value);
    }
}

pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
