pub const DEFAULT_API_BASE_URL: &str = "https://fsa-puppy-bowl.herokuapp.com/api";
pub const DEFAULT_COHORT_NAME: &str = "2403-ftb-et-web-pt";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_base_url: String,
    pub cohort_name: String,
    pub enable_logging: bool,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            cohort_name: DEFAULT_COHORT_NAME.to_string(),
            enable_logging: true,
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        Self {
            api_base_url: option_env!("API_BASE_URL")
                .unwrap_or(DEFAULT_API_BASE_URL).to_string(),
            cohort_name: option_env!("COHORT_NAME")
                .unwrap_or(DEFAULT_COHORT_NAME).to_string(),
            enable_logging: option_env!("ENABLE_LOGGING")
                .unwrap_or("true").parse().unwrap_or(true),
            log_level: option_env!("LOG_LEVEL")
                .unwrap_or("info").to_string(),
        }
    }

    /// Endpoint de la colección: `{api_base_url}/{cohort_name}/players`
    pub fn players_url(&self) -> String {
        format!(
            "{}/{}/players",
            self.api_base_url.trim_end_matches('/'),
            self.cohort_name.trim_matches('/'),
        )
    }

    pub fn is_logging_enabled(&self) -> bool {
        self.enable_logging
    }

    /// Nivel para wasm_logger; valores desconocidos caen a Info
    pub fn log_level(&self) -> log::Level {
        match self.log_level.to_ascii_lowercase().as_str() {
            "error" => log::Level::Error,
            "warn" | "warning" => log::Level::Warn,
            "debug" => log::Level::Debug,
            "trace" => log::Level::Trace,
            _ => log::Level::Info,
        }
    }
}

lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_players_url_points_at_cohort() {
        assert_eq!(
            AppConfig::default().players_url(),
            "https://fsa-puppy-bowl.herokuapp.com/api/2403-ftb-et-web-pt/players"
        );
    }

    #[test]
    fn players_url_tolerates_stray_slashes() {
        let config = AppConfig {
            api_base_url: "http://localhost:8080/api/".to_string(),
            cohort_name: "/demo/".to_string(),
            ..AppConfig::default()
        };
        assert_eq!(config.players_url(), "http://localhost:8080/api/demo/players");
    }

    #[test]
    fn log_level_parses_known_names_and_falls_back_to_info() {
        let mut config = AppConfig::default();
        config.log_level = "WARN".to_string();
        assert_eq!(config.log_level(), log::Level::Warn);
        config.log_level = "debug".to_string();
        assert_eq!(config.log_level(), log::Level::Debug);
        config.log_level = "loud".to_string();
        assert_eq!(config.log_level(), log::Level::Info);
    }
}
