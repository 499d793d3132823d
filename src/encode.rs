use image::{ExtendedColorType, ImageEncoder, codecs::png::PngEncoder};

use crate::{
    error::{CardError, CardResult},
    raster::Pixmap,
};

/// Content type attached to every rendered card.
pub const CONTENT_TYPE: &str = "image/png";

/// A card is immutable for a given snapshot, so downstream caches may hold
/// it for a day.
pub const CACHE_CONTROL: &str = "public, max-age=86400";

/// A finished card: encoded bytes plus the response metadata the HTTP layer
/// forwards verbatim.
#[derive(Clone, Debug)]
pub struct CardResponse {
    pub bytes: Vec<u8>,
    pub content_type: &'static str,
    pub cache_control: &'static str,
}

impl CardResponse {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self {
            bytes,
            content_type: CONTENT_TYPE,
            cache_control: CACHE_CONTROL,
        }
    }
}

/// Encodes the buffer as lossless PNG. Failure is fatal for the request:
/// there is no partial output.
pub fn to_png(pm: &Pixmap) -> CardResult<Vec<u8>> {
    let mut out = Vec::new();
    PngEncoder::new(&mut out)
        .write_image(pm.data(), pm.width(), pm.height(), ExtendedColorType::Rgba8)
        .map_err(|e| CardError::encode(e.to_string()))?;
    Ok(out)
}
