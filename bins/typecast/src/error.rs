#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("config ({context}): {detail}")]
    Config { context: &'static str, detail: String },

    #[error("{0}")]
    Convert(#[from] typecast_engine::ConvertError),

    #[error("registry: {0}")]
    Registry(#[from] typecast_engine::RegistryError),

    #[error("{0}")]
    Server(#[from] typecast_api_server::ApiServerError),

    #[error("marshaling result: {0}")]
    Json(#[from] serde_json::Error),

    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}
