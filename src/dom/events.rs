// ============================================================================
// EVENT HANDLING - Sistema de eventos
// ============================================================================
// Los listeners se registran una sola vez por elemento y se mantienen vivos
// con forget(). Los contenedores y el formulario viven toda la página, así que
// nada se acumula: las cards se re-renderizan, pero sus clicks se delegan al
// listener del contenedor en vez de tener closures propios.
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, EventTarget, MouseEvent};

pub fn on_click<F>(element: &Element, handler: F) -> Result<(), JsValue>
where
    F: FnMut(MouseEvent) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(MouseEvent)>);
    element.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

pub fn on_submit<F>(target: &EventTarget, handler: F) -> Result<(), JsValue>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target.add_event_listener_with_callback("submit", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Elemento más cercano (target o ancestro) que tiene `attribute`
pub fn closest_with_attribute(event: &Event, attribute: &str) -> Option<Element> {
    event
        .target()?
        .dyn_into::<Element>()
        .ok()?
        .closest(&format!("[{}]", attribute))
        .ok()
        .flatten()
}
