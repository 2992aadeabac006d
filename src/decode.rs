use crate::error::{Error, Result};
use image::{GenericImageView, RgbImage};
use std::{
    fmt,
    io::{self, Read},
    path::PathBuf,
};
use tracing::debug;

/// Where the image bytes come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    Stdin,
    File(PathBuf),
}

impl ImageSource {
    pub fn read(&self) -> Result<Vec<u8>> {
        let bytes = match self {
            ImageSource::Stdin => {
                let mut bytes = Vec::new();
                io::stdin().lock().read_to_end(&mut bytes).map(|_| bytes)
            }
            ImageSource::File(path) => std::fs::read(path),
        }
        .map_err(|source| Error::Io {
            source_name: self.to_string(),
            source,
        })?;

        debug!(source = %self, len = bytes.len(), "read image bytes");
        Ok(bytes)
    }
}

impl fmt::Display for ImageSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageSource::Stdin => f.write_str("<stdin>"),
            ImageSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Decode an encoded image of any format the `image` crate recognizes into 8 bit RGB.
pub fn decode(bytes: &[u8]) -> Result<RgbImage> {
    let image = image::load_from_memory(bytes)?;
    debug!(width = image.width(), height = image.height(), color = ?image.color(), "decoded image");

    Ok(image.to_rgb8())
}
