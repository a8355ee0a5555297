// ============================================================================
// DOM SURFACE - Aplica los ViewNode al documento real
// ============================================================================
// Cada región guarda una tabla de bindings (ver dom::bindings): los elementos
// con acción llevan un índice `data-binding`, y un único listener de click
// delegado en el contenedor resuelve el elemento clicado a su Action.
// Renderizar una región reemplaza sus hijos y su tabla a la vez.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::{Element, HtmlFormElement};

use crate::dom::bindings::{bind_content, resolve_binding};
use crate::dom::{
    clear_children, closest_with_attribute, form_input, get_attribute, on_click,
    require_element_by_id, require_form_by_id, scroll_to_top, append_child, ElementBuilder,
};
use crate::models::NewPlayer;
use crate::utils::constants::{
    BINDING_ATTRIBUTE, DETAIL_CONTAINER_ID, FIELD_BREED, FIELD_IMAGE_URL, FIELD_NAME,
    FORM_FIELDS, NEW_PLAYER_FORM_ID, PLAYERS_CONTAINER_ID,
};
use crate::viewmodels::RosterView;
use crate::views::{Action, ViewNode};

/// Callback que recibe las acciones activadas
pub type Dispatch = Rc<dyn Fn(Action)>;

/// Región de visualización (contenedor + sus bindings)
struct Region {
    name: &'static str,
    container: Element,
    bindings: Rc<RefCell<Vec<Action>>>,
}

impl Region {
    fn new(name: &'static str, container: Element) -> Self {
        Self {
            name,
            container,
            bindings: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Reemplazar el contenido de la región (nunca agregar). Los elementos se
    /// construyen desconectados primero: si algo falla, queda el contenido anterior.
    fn render(&self, nodes: &[ViewNode]) -> Result<(), JsValue> {
        let content = bind_content(nodes);
        let elements = content
            .nodes
            .iter()
            .map(build_element)
            .collect::<Result<Vec<Element>, JsValue>>()?;

        self.clear();
        for element in &elements {
            append_child(&self.container, element)?;
        }
        *self.bindings.borrow_mut() = content.table;
        Ok(())
    }

    fn clear(&self) {
        clear_children(&self.container);
        self.bindings.borrow_mut().clear();
    }

    fn bind(&self, dispatch: Dispatch) -> Result<(), JsValue> {
        let bindings = self.bindings.clone();
        let name = self.name;
        on_click(&self.container, move |e: web_sys::MouseEvent| {
            let Some(bound) = closest_with_attribute(&e, BINDING_ATTRIBUTE) else {
                return;
            };
            let value = get_attribute(&bound, BINDING_ATTRIBUTE);
            let action = resolve_binding(&bindings.borrow(), value.as_deref());

            match action {
                Some(action) => {
                    e.prevent_default();
                    dispatch(action);
                }
                None => log::warn!("⚠️ [DOM] Binding obsoleto clicado en región {}", name),
            }
        })
    }
}

/// Árbol de elementos desconectado para un nodo ya numerado
fn build_element(node: &ViewNode) -> Result<Element, JsValue> {
    let mut builder = ElementBuilder::new(&node.tag)?;

    if let Some(class) = &node.class {
        builder = builder.class(class);
    }
    for (name, value) in &node.attrs {
        builder = builder.attr(name, value)?;
    }
    if let Some(text) = &node.text {
        builder = builder.text(text);
    }
    for child in &node.children {
        builder = builder.child(build_element(child)?)?;
    }

    Ok(builder.build())
}

/// El documento visto por el roster: región lista, región detalle, formulario
pub struct DomSurface {
    list: Region,
    detail: Region,
    form: HtmlFormElement,
}

impl DomSurface {
    /// Buscar los tres elementos del contrato; si falta alguno es error
    pub fn from_document() -> Result<Self, JsValue> {
        Ok(Self {
            list: Region::new("list", require_element_by_id(PLAYERS_CONTAINER_ID)?),
            detail: Region::new("detail", require_element_by_id(DETAIL_CONTAINER_ID)?),
            form: require_form_by_id(NEW_PLAYER_FORM_ID)?,
        })
    }

    /// Instalar un listener de click delegado por región
    pub fn bind_actions(&self, dispatch: Dispatch) -> Result<(), JsValue> {
        self.list.bind(dispatch.clone())?;
        self.detail.bind(dispatch)
    }

    pub fn form(&self) -> &HtmlFormElement {
        &self.form
    }

    /// Valores actuales del formulario de creación
    pub fn read_new_player(&self) -> Result<NewPlayer, JsValue> {
        Ok(NewPlayer::new(
            form_input(&self.form, FIELD_NAME)?.value(),
            form_input(&self.form, FIELD_BREED)?.value(),
            form_input(&self.form, FIELD_IMAGE_URL)?.value(),
        ))
    }
}

impl RosterView for DomSurface {
    fn show_list(&self, content: Vec<ViewNode>) {
        if let Err(e) = self.list.render(&content) {
            log::error!("❌ [DOM] Error renderizando lista de jugadores: {:?}", e);
        }
    }

    fn show_detail(&self, card: ViewNode) {
        if let Err(e) = self.detail.render(std::slice::from_ref(&card)) {
            log::error!("❌ [DOM] Error renderizando detalle del jugador: {:?}", e);
        }
    }

    fn clear_detail(&self) {
        self.detail.clear();
    }

    fn scroll_to_top(&self) {
        scroll_to_top();
    }

    fn clear_form(&self) {
        for field in FORM_FIELDS {
            match form_input(&self.form, field) {
                Ok(input) => input.set_value(""),
                Err(e) => log::warn!("⚠️ [DOM] No se pudo limpiar el campo {}: {:?}", field, e),
            }
        }
    }
}
