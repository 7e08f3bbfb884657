use web_sys::{Document, Element, Window};

pub fn html_window() -> Result<Window,String> {
    web_sys::window().ok_or_else(|| "cannot retrieve window object".to_string())
}

pub fn html_document() -> Result<Document,String> {
    html_window()?.document().ok_or_else(|| "cannot retrieve document element".to_string())
}

/* The document's declared base reference, if the page declared one. */
pub fn base_href() -> Result<Option<String>,String> {
    html_document()?.base_uri().map_err(|e| format!("cannot read base reference {:?}",e))
}

pub fn element_by_id(id: &str) -> Result<Element,String> {
    html_document()?.get_element_by_id(id).ok_or_else(|| format!("no element with id '{}'",id))
}

pub fn set_inner_html(el: &Element, html: &str) {
    el.set_inner_html(html);
}

pub fn add_class(el: &Element, class: &str) -> Result<(),String> {
    el.class_list().add_1(class).map_err(|e| format!("cannot add class {:?}",e))
}
