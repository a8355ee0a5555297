// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// Sin lógica de negocio: una request por llamada, envelope desempaquetado,
// errores devueltos al llamador. Loguear el fallo le toca al viewmodel.
// ============================================================================

use async_trait::async_trait;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::config::CONFIG;
use crate::models::{NewPlayer, Player, PlayerId};
use crate::services::error::ApiError;

/// Operaciones remotas del roster. Las mutaciones solo reportan que terminaron;
/// el llamador vuelve a pedir la colección en vez de parchear estado local.
#[async_trait(?Send)]
pub trait PlayerApi {
    async fn list(&self) -> Result<Vec<Player>, ApiError>;
    async fn get_one(&self, id: PlayerId) -> Result<Player, ApiError>;
    async fn create(&self, player: &NewPlayer) -> Result<(), ApiError>;
    async fn remove(&self, id: PlayerId) -> Result<(), ApiError>;
}

/// Envelope de respuesta: `{ success, error, data: {...} }`
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub error: Option<serde_json::Value>,
    pub data: Option<T>,
}

impl<T> Envelope<T> {
    /// Desempaquetar `data`; `success: false` se convierte en rechazo
    pub fn into_data(self) -> Result<T, ApiError> {
        if self.success == Some(false) {
            return Err(ApiError::Rejected(describe_server_error(self.error.as_ref())));
        }
        self.data
            .ok_or_else(|| ApiError::Parse("response has no data field".to_string()))
    }
}

fn describe_server_error(error: Option<&serde_json::Value>) -> String {
    match error {
        Some(serde_json::Value::String(message)) => message.clone(),
        Some(value) => value
            .get("message")
            .and_then(|m| m.as_str())
            .map(str::to_string)
            .unwrap_or_else(|| value.to_string()),
        None => "unknown error".to_string(),
    }
}

#[derive(Debug, Deserialize)]
pub struct PlayersData {
    pub players: Vec<Player>,
}

#[derive(Debug, Deserialize)]
pub struct PlayerData {
    pub player: Player,
}

/// Cliente HTTP para el endpoint de jugadores de Puppy Bowl
#[derive(Clone)]
pub struct ApiClient {
    players_url: String,
}

impl ApiClient {
    pub fn new() -> Self {
        Self::with_url(CONFIG.players_url())
    }

    pub fn with_url(players_url: impl Into<String>) -> Self {
        Self {
            players_url: players_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn players_url(&self) -> &str {
        &self.players_url
    }

    pub fn player_url(&self, id: PlayerId) -> String {
        format!("{}/{}", self.players_url, id)
    }

    fn check_status(response: &Response) -> Result<(), ApiError> {
        if response.ok() {
            Ok(())
        } else {
            Err(ApiError::Http {
                status: response.status(),
                status_text: response.status_text(),
            })
        }
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        Self::check_status(&response)?;
        response
            .json::<Envelope<T>>()
            .await
            .map_err(ApiError::parse)?
            .into_data()
    }
}

#[async_trait(?Send)]
impl PlayerApi for ApiClient {
    async fn list(&self) -> Result<Vec<Player>, ApiError> {
        log::debug!("📋 [API] GET {}", self.players_url);
        let response = Request::get(&self.players_url)
            .send()
            .await
            .map_err(ApiError::network)?;
        let data: PlayersData = Self::decode(response).await?;
        log::info!("✅ [API] {} jugadores obtenidos", data.players.len());
        Ok(data.players)
    }

    async fn get_one(&self, id: PlayerId) -> Result<Player, ApiError> {
        let url = self.player_url(id);
        log::debug!("🔍 [API] GET {}", url);
        let response = Request::get(&url)
            .send()
            .await
            .map_err(ApiError::network)?;
        let data: PlayerData = Self::decode(response).await?;
        Ok(data.player)
    }

    async fn create(&self, player: &NewPlayer) -> Result<(), ApiError> {
        log::info!("➕ [API] POST {} ({})", self.players_url, player.name);
        let response = Request::post(&self.players_url)
            .json(player)
            .map_err(|e| ApiError::Serialization(e.to_string()))?
            .send()
            .await
            .map_err(ApiError::network)?;
        Self::check_status(&response)
    }

    async fn remove(&self, id: PlayerId) -> Result<(), ApiError> {
        let url = self.player_url(id);
        log::info!("🗑️ [API] DELETE {}", url);
        let response = Request::delete(&url)
            .send()
            .await
            .map_err(ApiError::network)?;
        Self::check_status(&response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn player_url_appends_identifier() {
        let api = ApiClient::with_url("https://example.test/api/demo/players/");
        assert_eq!(api.players_url(), "https://example.test/api/demo/players");
        assert_eq!(api.player_url(PlayerId(7)), "https://example.test/api/demo/players/7");
    }

    #[test]
    fn list_envelope_unwraps_players() {
        let raw = r#"{
            "success": true,
            "error": null,
            "data": { "players": [
                { "id": 1, "name": "Bo", "breed": "Pug", "imageUrl": "bo.png" },
                { "id": 2, "name": "Rex", "breed": "Lab", "imageUrl": "x.png" }
            ] }
        }"#;
        let envelope: Envelope<PlayersData> = serde_json::from_str(raw).expect("envelope");
        let players = envelope.into_data().expect("data").players;
        assert_eq!(players.len(), 2);
        assert_eq!(players[1].name, "Rex");
    }

    #[test]
    fn detail_envelope_without_success_flag_is_accepted() {
        let raw = r#"{ "data": { "player": { "id": 7, "name": "Rex", "breed": "Lab", "imageUrl": "x.png" } } }"#;
        let envelope: Envelope<PlayerData> = serde_json::from_str(raw).expect("envelope");
        assert_eq!(envelope.into_data().expect("data").player.id, PlayerId(7));
    }

    #[test]
    fn unsuccessful_envelope_is_rejected_with_server_message() {
        let raw = r#"{ "success": false, "error": { "name": "NotFound", "message": "Player #99 not found" }, "data": null }"#;
        let envelope: Envelope<PlayerData> = serde_json::from_str(raw).expect("envelope");
        assert_eq!(
            envelope.into_data().unwrap_err(),
            ApiError::Rejected("Player #99 not found".to_string())
        );
    }

    #[test]
    fn envelope_without_data_is_a_parse_error() {
        let envelope: Envelope<PlayersData> = serde_json::from_str(r#"{ "success": true }"#).expect("envelope");
        assert!(matches!(envelope.into_data(), Err(ApiError::Parse(_))));
    }
}
