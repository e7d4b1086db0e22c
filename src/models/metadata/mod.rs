//! Descriptive properties of an image.

use std::cmp::Ordering;

use fraction::GenericFraction;

pub mod builder;

/// Optional properties of an image, independent of where it came from.
///
/// Every field may be missing. Use [`builder::MetadataBuilder`] to fill one
/// out from raw image bytes.
#[derive(Clone, Debug, Default, PartialEq, PartialOrd, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageMetadata {
    /// Width in pixels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,

    /// Height in pixels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,

    /// Short format name, like "png" or "jpg".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,

    /// How large the encoded image is, in bytes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_alpha: Option<bool>,

    /// Name of the pixel interpretation, like "srgb" or "b-w".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color_space: Option<String>,

    /// Pixel density in dots per inch.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub density: Option<f64>,
}

impl ImageMetadata {
    /// The image's resolution, if both dimensions are known.
    pub fn resolution(&self) -> Option<Resolution> {
        Some(Resolution::new(self.width?, self.height?))
    }

    pub fn aspect_ratio(&self) -> Option<AspectRatio> {
        self.resolution().map(AspectRatio::from)
    }

    pub fn orientation(&self) -> Option<Orientation> {
        self.resolution().map(Orientation::from)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Eq, Ord, serde::Serialize, serde::Deserialize)]
pub struct Resolution {
    pub width: u32,
    pub height: u32,
}

impl Resolution {
    /// Creates a new resolution.
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// The aspect ratio of an image.
#[derive(Clone, Debug, PartialEq, PartialOrd, Eq, Ord, serde::Serialize, serde::Deserialize)]
pub struct AspectRatio {
    /// This fraction's numerator is the width, denominator is height.
    ///
    /// e.g. (16/9) is 16 wide, 9 tall.
    frac: Option<GenericFraction<u32>>,
}

impl From<Resolution> for AspectRatio {
    fn from(value: Resolution) -> Self {
        AspectRatio::new(value.width, value.height) // these automatically simplify
    }
}

impl AspectRatio {
    /// Creates a new aspect ratio.
    ///
    /// Note that passing either number as zero will result in an expected
    /// 0:0 output.
    pub fn new(width: u32, height: u32) -> Self {
        let frac = if width == 0 || height == 0 {
            None
        } else {
            Some(GenericFraction::new::<u32, u32>(width, height))
        };

        Self { frac }
    }

    /// Grabs the width (e.g. "16" in 16:9).
    pub fn width(&self) -> u32 {
        self.frac.and_then(|f| f.numer().copied()).unwrap_or(0)
    }

    /// Grabs the height (e.g. "9" in 16:9).
    pub fn height(&self) -> u32 {
        self.frac.and_then(|f| f.denom().copied()).unwrap_or(0)
    }
}

/// Which way an image's viewport is stretched.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Eq, Ord, serde::Serialize, serde::Deserialize)]
pub enum Orientation {
    Portrait,
    Landscape,
    Square,
}

impl From<Resolution> for Orientation {
    fn from(value: Resolution) -> Self {
        match value.width.cmp(&value.height) {
            Ordering::Less => Orientation::Portrait, // tall
            Ordering::Equal => Orientation::Square,
            Ordering::Greater => Orientation::Landscape, // wide
        }
    }
}
