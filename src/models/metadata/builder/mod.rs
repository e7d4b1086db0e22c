//! # Metadata Builder
//!
//! Describes an image that's already sitting in memory.
//!
//! Each external crate contributes what it's good at:
//!
//! - `infer` sniffs the format from the file signature,
//! - `image` reads the header for dimensions and pixel layout,
//! - `kamadak_exif` finds the pixel density, if the file has EXIF data.
//!
//! Nothing here touches the file system or the network.

pub mod image_crate;
pub mod kamadak;

use crate::{config::MetadataConfig, error::MetadataError};

use super::ImageMetadata;

/// Fills out an [`ImageMetadata`] from raw image bytes.
#[derive(Clone, Debug, PartialEq)]
pub struct MetadataBuilder {
    metadata: ImageMetadata,
    read_exif: bool,
}

impl MetadataBuilder {
    pub fn new(config: &MetadataConfig) -> Self {
        Self {
            metadata: ImageMetadata::default(),
            read_exif: config.read_exif,
        }
    }

    /// Inspects `bytes` and returns everything we could learn about them.
    ///
    /// It has the following pipeline:
    ///
    /// 1. Record the buffer's size.
    /// 2. Sniff the format. Bail if it's unknown or not an image.
    /// 3. Read the image header with the `image` crate. Bail if it can't.
    /// 4. If enabled, look for EXIF density. Missing EXIF is fine.
    #[tracing::instrument(skip_all, fields(len = bytes.len()))]
    pub fn inspect(&self, bytes: &[u8]) -> Result<ImageMetadata, MetadataError> {
        let mut builder = self.clone();
        builder.metadata.size = Some(bytes.len() as u64);

        builder.metadata.format = Some(format(bytes)?);
        builder.apply_image(bytes)?;

        if builder.read_exif {
            _ = builder
                .apply_kamadak_exif(bytes)
                .inspect_err(|e| tracing::debug!("No density from `kamadak_exif`. err: {e}"));
        }

        tracing::debug!("finished inspecting image!");
        Ok(builder.metadata)
    }
}

impl Default for MetadataBuilder {
    fn default() -> Self {
        Self::new(&MetadataConfig::default())
    }
}

/// Grabs the short format name (extension) of the image in `bytes`.
#[tracing::instrument(skip_all)]
fn format(bytes: &[u8]) -> Result<String, MetadataError> {
    let kind = infer::get(bytes)
        .ok_or(MetadataError::UnknownFormat)
        .inspect_err(|e| tracing::warn!("Failed to sniff format! err: {e}"))?;

    if kind.matcher_type() != infer::MatcherType::Image {
        tracing::warn!("Given bytes of type `{}`, not an image.", kind.mime_type());
        return Err(MetadataError::NotAnImage {
            mime: kind.mime_type().to_string(),
        });
    }

    tracing::debug!("got format `{}` from infer!", kind.extension());
    Ok(kind.extension().to_string())
}
