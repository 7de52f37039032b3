//! エラー型

use crate::common::config::ConfigError;

#[derive(Debug, thiserror::Error)]
pub enum SpectrumError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Failed to save image: {0}")]
    Image(#[from] image::ImageError),

    #[error("Unknown element: {name} (known: {known})")]
    UnknownElement { name: String, known: String },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Invalid chart settings: {0}")]
    InvalidSettings(String),
}
