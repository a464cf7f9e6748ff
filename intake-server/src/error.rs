use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Config error: {0}")]
    Config(#[from] intake_config::ConfigError),

    #[error("Logging error: {message}")]
    Logging { message: String },
}

pub type Result<T> = std::result::Result<T, ServerError>;
