// ============================================================================
// APP - Aplicación principal (arranque)
// ============================================================================

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::dom::{on_submit, Dispatch, DomSurface};
use crate::services::ApiClient;
use crate::viewmodels::RosterViewModel;
use crate::views::Action;

type Roster = RosterViewModel<ApiClient, DomSurface>;

pub struct App {
    roster: Rc<Roster>,
}

impl App {
    pub fn new() -> Result<Self, JsValue> {
        let surface = DomSurface::from_document()?;
        let api = ApiClient::new();
        log::info!("🔗 [APP] Endpoint de jugadores: {}", api.players_url());

        Ok(Self {
            roster: Rc::new(RosterViewModel::new(api, surface)),
        })
    }

    /// Enlazar regiones, cargar el roster una vez y luego escuchar el
    /// formulario de creación.
    pub fn start(&self) -> Result<(), JsValue> {
        let dispatch: Dispatch = {
            let roster = self.roster.clone();
            Rc::new(move |action: Action| {
                let roster = roster.clone();
                spawn_local(async move {
                    roster.dispatch(action).await;
                });
            })
        };
        self.roster.view().bind_actions(dispatch)?;

        let roster = self.roster.clone();
        spawn_local(async move {
            roster.refresh().await;
            if let Err(e) = listen_for_new_players(roster) {
                log::error!("❌ [APP] No se pudo activar el formulario de nuevo jugador: {:?}", e);
            }
        });

        Ok(())
    }

    /// Volver a pedir y renderizar el roster
    pub fn refresh(&self) {
        let roster = self.roster.clone();
        spawn_local(async move {
            roster.refresh().await;
        });
    }
}

/// Controlador del formulario: bloquea el submit nativo y entrega los valores
fn listen_for_new_players(roster: Rc<Roster>) -> Result<(), JsValue> {
    let form = roster.view().form().clone();
    on_submit(&form, move |e: web_sys::Event| {
        e.prevent_default();
        match roster.view().read_new_player() {
            Ok(player) => {
                let roster = roster.clone();
                spawn_local(async move {
                    roster.submit_new_player(player).await;
                });
            }
            Err(e) => log::error!("❌ [APP] Error leyendo el formulario de nuevo jugador: {:?}", e),
        }
    })?;
    log::info!("📝 [APP] Formulario de nuevo jugador listo");
    Ok(())
}
