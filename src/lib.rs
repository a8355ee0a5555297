// ============================================================================
// PUPPY ROSTER - FRONTEND MVVM (RUST PURO + WASM)
// ============================================================================
// - Models: estructuras compartidas con la API
// - Services: SOLO comunicación HTTP
// - Views: funciones puras jugador -> ViewNode
// - ViewModels: lógica de fetch / render / mutación
// - Dom: aplica los ViewNode al documento, eventos
// ============================================================================

pub mod config;
pub mod models;
pub mod services;
pub mod views;
pub mod viewmodels;
pub mod dom;
pub mod utils;
mod app;

use std::cell::RefCell;
use wasm_bindgen::prelude::*;

use crate::app::App;
use crate::config::CONFIG;

thread_local! {
    static APP: RefCell<Option<App>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    if CONFIG.is_logging_enabled() {
        wasm_logger::init(wasm_logger::Config::new(CONFIG.log_level()));
    }
    log::info!("🐶 Puppy Roster - Rust + WASM");

    let app = App::new().map_err(|e| {
        log::error!("❌ [MAIN] Falta un elemento del roster en la página: {:?}", e);
        e
    })?;
    app.start()?;

    APP.with(|cell| {
        *cell.borrow_mut() = Some(app);
    });

    Ok(())
}

/// Refrescar el roster (llamable desde JavaScript)
#[wasm_bindgen]
pub fn refresh_roster() {
    APP.with(|cell| match cell.borrow().as_ref() {
        Some(app) => app.refresh(),
        None => log::warn!("⚠️ [MAIN] App no está inicializada"),
    });
}
