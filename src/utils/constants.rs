/// Elementos del documento (se asume que existen, se verifican al arrancar)
pub const PLAYERS_CONTAINER_ID: &str = "players-container";
pub const DETAIL_CONTAINER_ID: &str = "single-player-container";
pub const NEW_PLAYER_FORM_ID: &str = "new-player-form";

/// Inputs del formulario de creación, en el orden de `NewPlayer`
pub const FIELD_NAME: &str = "name";
pub const FIELD_BREED: &str = "breed";
pub const FIELD_IMAGE_URL: &str = "imageUrl";
pub const FORM_FIELDS: [&str; 3] = [FIELD_NAME, FIELD_BREED, FIELD_IMAGE_URL];

pub const EMPTY_ROSTER_MESSAGE: &str = "No players available";

/// Atributo con el que el adaptador DOM liga un elemento a su acción
pub const BINDING_ATTRIBUTE: &str = "data-binding";
