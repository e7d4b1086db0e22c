//! Dimensions and pixel layout using the `image` crate.
//!
//! Only the header is read. Pixels are never decoded.

use std::io::Cursor;

use image::{ColorType, ImageDecoder as _, ImageReader};

use crate::error::MetadataError;

use super::MetadataBuilder;

impl MetadataBuilder {
    /// Applies header data from `image` to `self`.
    #[tracing::instrument(skip_all)]
    pub(super) fn apply_image(&mut self, bytes: &[u8]) -> Result<(), MetadataError> {
        let decoder = ImageReader::new(Cursor::new(bytes))
            .with_guessed_format()?
            .into_decoder()
            .inspect_err(|e| tracing::warn!("Failed to read image header! err: {e}"))?;

        let (width, height) = decoder.dimensions();
        let color = decoder.color_type();
        tracing::debug!("got image header from image crate: {width}x{height}, {color:?}");

        self.metadata.width = Some(width);
        self.metadata.height = Some(height);
        self.metadata.has_alpha = Some(color.has_alpha());
        self.metadata.color_space = color_space(color).map(String::from);

        Ok(())
    }
}

/// Names the way an image's pixels should be interpreted.
fn color_space(color: ColorType) -> Option<&'static str> {
    match color {
        ColorType::L8 | ColorType::La8 => Some("b-w"),
        ColorType::L16 | ColorType::La16 => Some("grey16"),
        ColorType::Rgb8 | ColorType::Rgba8 => Some("srgb"),
        ColorType::Rgb16 | ColorType::Rgba16 => Some("rgb16"),
        ColorType::Rgb32F | ColorType::Rgba32F => Some("scrgb"),
        _ => None,
    }
}
