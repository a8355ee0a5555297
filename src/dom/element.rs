// ============================================================================
// ELEMENT HELPERS - Funciones básicas para manipular DOM
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlFormElement, HtmlInputElement, Window};

pub fn window() -> Option<Window> {
    web_sys::window()
}

pub fn document() -> Option<Document> {
    window()?.document()
}

pub fn get_element_by_id(id: &str) -> Option<Element> {
    document()?.get_element_by_id(id)
}

/// Igual que `get_element_by_id`, pero un elemento ausente es un error
pub fn require_element_by_id(id: &str) -> Result<Element, JsValue> {
    get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("No #{} element found", id)))
}

pub fn require_form_by_id(id: &str) -> Result<HtmlFormElement, JsValue> {
    require_element_by_id(id)?
        .dyn_into::<HtmlFormElement>()
        .map_err(|_| JsValue::from_str(&format!("#{} is not a <form>", id)))
}

pub fn create_element(tag: &str) -> Result<Element, JsValue> {
    document()
        .ok_or_else(|| JsValue::from_str("No document"))
        .and_then(|doc| doc.create_element(tag))
}

pub fn set_class_name(element: &Element, class: &str) {
    element.set_class_name(class);
}

pub fn set_text_content(element: &Element, text: &str) {
    element.set_text_content(Some(text));
}

pub fn set_inner_html(element: &Element, html: &str) {
    element.set_inner_html(html);
}

/// Eliminar todos los hijos de `element`
pub fn clear_children(element: &Element) {
    set_inner_html(element, "");
}

pub fn append_child(parent: &Element, child: &Element) -> Result<(), JsValue> {
    parent.append_child(child).map(|_| ())
}

pub fn set_attribute(element: &Element, name: &str, value: &str) -> Result<(), JsValue> {
    element.set_attribute(name, value)
}

pub fn get_attribute(element: &Element, name: &str) -> Option<String> {
    element.get_attribute(name)
}

/// Volver al inicio de la página
pub fn scroll_to_top() {
    if let Some(root) = document().and_then(|doc| doc.document_element()) {
        root.set_scroll_top(0);
    }
}

/// `<input>` con nombre dentro de un formulario
pub fn form_input(form: &HtmlFormElement, name: &str) -> Result<HtmlInputElement, JsValue> {
    form.query_selector(&format!("[name=\"{}\"]", name))?
        .ok_or_else(|| JsValue::from_str(&format!("Form has no \"{}\" field", name)))?
        .dyn_into::<HtmlInputElement>()
        .map_err(|_| JsValue::from_str(&format!("Form field \"{}\" is not an <input>", name)))
}
