// ============================================================================
// ROSTER VIEWMODEL - LÓGICA DEL ROSTER (fetch / render / mutación)
// ============================================================================
// Todo fallo se loguea y se absorbe: la vista anterior sigue en pantalla.
// Las mutaciones siempre terminan con un re-fetch completo del roster,
// sea cual sea el resultado de la mutación.
// ============================================================================

use crate::models::{NewPlayer, PlayerId};
use crate::services::{ApiError, PlayerApi};
use crate::views::{render_player_details, render_player_list, Action, ViewNode};

/// Superficie donde renderiza el viewmodel (el documento en el navegador)
pub trait RosterView {
    /// Reemplazar toda la región lista con `content`
    fn show_list(&self, content: Vec<ViewNode>);
    /// Reemplazar toda la región detalle con `card`
    fn show_detail(&self, card: ViewNode);
    fn clear_detail(&self);
    fn scroll_to_top(&self);
    /// Vaciar los tres inputs del formulario de creación
    fn clear_form(&self);
}

pub struct RosterViewModel<A, V> {
    api: A,
    view: V,
}

impl<A: PlayerApi, V: RosterView> RosterViewModel<A, V> {
    pub fn new(api: A, view: V) -> Self {
        Self { api, view }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    /// Pedir el roster completo y reemplazar la región lista.
    /// La región detalle queda como está.
    pub async fn refresh(&self) {
        match self.api.list().await {
            Ok(players) => {
                log::info!("🔄 [ROSTER] Renderizando {} jugadores", players.len());
                self.view.show_list(render_player_list(&players));
            }
            Err(e) => {
                log::error!("❌ [ROSTER] Error obteniendo jugadores: {}", e);
            }
        }
    }

    /// Pedir un jugador y mostrarlo en la región detalle
    pub async fn show_details(&self, id: PlayerId) {
        match self.api.get_one(id).await {
            Ok(player) => self.view.show_detail(render_player_details(&player)),
            Err(e) => {
                log::error!("❌ [ROSTER] Error obteniendo jugador #{}: {}", id, e);
            }
        }
    }

    pub fn hide_details(&self) {
        self.view.clear_detail();
    }

    /// Crear jugador y refrescar el roster una vez. Se devuelve el resultado
    /// de la creación para que el formulario decida si limpiar sus inputs.
    pub async fn create(&self, player: NewPlayer) -> Result<(), ApiError> {
        let result = self.api.create(&player).await;
        if let Err(e) = &result {
            log::error!("❌ [ROSTER] Error agregando a {}: {}", player.name, e);
        }
        self.refresh().await;
        result
    }

    /// Eliminar jugador y refrescar el roster una vez, falle o no
    pub async fn remove(&self, id: PlayerId) {
        if let Err(e) = self.api.remove(id).await {
            log::error!("❌ [ROSTER] Error eliminando jugador #{} del roster: {}", id, e);
        }
        self.refresh().await;
    }

    /// Submit del formulario: crear, y limpiar los inputs solo si tuvo éxito
    pub async fn submit_new_player(&self, player: NewPlayer) {
        match self.create(player).await {
            Ok(()) => self.view.clear_form(),
            Err(_) => log::warn!("⚠️ [ROSTER] Se conservan los datos del formulario tras el fallo"),
        }
    }

    /// Punto de entrada de los controles enlazados
    pub async fn dispatch(&self, action: Action) {
        log::debug!("👆 [ROSTER] {:?}", action);
        match action {
            Action::ShowDetails(id) => {
                self.view.scroll_to_top();
                self.show_details(id).await;
            }
            Action::Remove(id) => self.remove(id).await,
            Action::Back => self.hide_details(),
        }
    }
}
