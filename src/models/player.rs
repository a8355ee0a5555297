use std::fmt;
use serde::{Deserialize, Deserializer, Serialize};

/// Identificador asignado por el servidor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(pub u64);

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Jugador tal como lo devuelve la API (snapshot de solo lectura)
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub breed: String,
    #[serde(rename = "imageUrl")]
    pub image_url: String,

    // Campos extra de la API real, no usados por la lista
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default, rename = "teamId", deserialize_with = "lenient_team_id")]
    pub team_id: Option<u64>,
}

impl Player {
    pub fn new(id: u64, name: &str, breed: &str, image_url: &str) -> Self {
        Self {
            id: PlayerId(id),
            name: name.to_string(),
            breed: breed.to_string(),
            image_url: image_url.to_string(),
            status: None,
            team_id: None,
        }
    }
}

/// `teamId` es informativo: lo que no sea entero (o string numérico)
/// se decodifica como `None` en vez de romper todo el fetch.
fn lenient_team_id<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::Number(n)) => n.as_u64(),
        Some(serde_json::Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    })
}

/// Body de `POST /players`
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Debug, Default)]
pub struct NewPlayer {
    pub name: String,
    pub breed: String,
    #[serde(rename = "imageUrl")]
    pub image_url: String,
}

impl NewPlayer {
    pub fn new(name: impl Into<String>, breed: impl Into<String>, image_url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            breed: breed.into(),
            image_url: image_url.into(),
        }
    }
}
