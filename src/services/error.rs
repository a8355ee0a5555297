use thiserror::Error;

/// Todas las formas en que falla una request del roster. La UI las trata igual:
/// se loguea, se aborta la operación, la vista no cambia.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("HTTP {status}: {status_text}")]
    Http { status: u16, status_text: String },
    #[error("parse error: {0}")]
    Parse(String),
    #[error("serialization error: {0}")]
    Serialization(String),
    #[error("request rejected by server: {0}")]
    Rejected(String),
}

impl ApiError {
    pub fn network(err: impl std::fmt::Display) -> Self {
        Self::Network(err.to_string())
    }

    pub fn parse(err: impl std::fmt::Display) -> Self {
        Self::Parse(err.to_string())
    }
}
