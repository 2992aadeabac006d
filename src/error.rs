use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("channel value {value} is out of range [0, 255]")]
    OutOfRange { value: i32 },

    #[error("invalid color literal: {0:?}")]
    ParseColor(String),

    #[error("failed to read image from {source_name}: {source}")]
    Io {
        source_name: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to decode image: {0}")]
    Decode(#[from] image::ImageError),

    #[error("failed to extract palette: {0}")]
    Extraction(String),

    #[error("failed to serialize palette: {0}")]
    Serialize(#[from] serde_json::Error),
}
