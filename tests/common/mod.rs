//! The parent of the other tests.
//!
//! Mostly to import the setup stuff below.

use std::{io::Cursor, str::FromStr as _};

use image::{DynamicImage, GrayImage, ImageFormat, RgbImage, RgbaImage};
use tracing_subscriber::{filter, layer::SubscriberExt as _, util::SubscriberInitExt as _, Layer};

/// call this at the top of any new test func! :)
#[allow(dead_code, reason = "it's used in the other tests")]
pub fn setup() {
    // start logging. other tests in this binary might've beaten us to it,
    // so a failed init is fine
    _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_test_writer()
                .with_filter(filter::EnvFilter::from_str("DEBUG").unwrap()),
        )
        .try_init();
}

/// An encoded RGBA PNG with the given dimensions.
#[allow(dead_code, reason = "it's used in the other tests")]
pub fn rgba_png(width: u32, height: u32) -> Vec<u8> {
    encode(
        DynamicImage::ImageRgba8(RgbaImage::new(width, height)),
        ImageFormat::Png,
    )
}

/// An encoded greyscale PNG with the given dimensions.
#[allow(dead_code, reason = "it's used in the other tests")]
pub fn grey_png(width: u32, height: u32) -> Vec<u8> {
    encode(
        DynamicImage::ImageLuma8(GrayImage::new(width, height)),
        ImageFormat::Png,
    )
}

/// An encoded (RGB) JPEG with the given dimensions.
#[allow(dead_code, reason = "it's used in the other tests")]
pub fn rgb_jpeg(width: u32, height: u32) -> Vec<u8> {
    encode(
        DynamicImage::ImageRgb8(RgbImage::new(width, height)),
        ImageFormat::Jpeg,
    )
}

/// An RGB JPEG carrying an EXIF block with the given `XResolution`
/// (`num / denom`) and `ResolutionUnit`.
#[allow(dead_code, reason = "it's used in the other tests")]
pub fn jpeg_with_exif_resolution(num: u32, denom: u32, unit: u16) -> Vec<u8> {
    // big-endian tiff: header, then IFD0 with two entries, then the rational
    const IFD0_OFFSET: u32 = 8;
    const RATIONAL_OFFSET: u32 = IFD0_OFFSET + 2 + 2 * 12 + 4;

    let mut tiff = Vec::new();
    tiff.extend_from_slice(b"MM\0\x2A");
    tiff.extend_from_slice(&IFD0_OFFSET.to_be_bytes());

    tiff.extend_from_slice(&2_u16.to_be_bytes());

    // XResolution: RATIONAL, pointing at the value below
    tiff.extend_from_slice(&0x011A_u16.to_be_bytes());
    tiff.extend_from_slice(&5_u16.to_be_bytes());
    tiff.extend_from_slice(&1_u32.to_be_bytes());
    tiff.extend_from_slice(&RATIONAL_OFFSET.to_be_bytes());

    // ResolutionUnit: SHORT, stored inline (left-justified)
    tiff.extend_from_slice(&0x0128_u16.to_be_bytes());
    tiff.extend_from_slice(&3_u16.to_be_bytes());
    tiff.extend_from_slice(&1_u32.to_be_bytes());
    tiff.extend_from_slice(&unit.to_be_bytes());
    tiff.extend_from_slice(&[0, 0]);

    // no next ifd
    tiff.extend_from_slice(&0_u32.to_be_bytes());

    tiff.extend_from_slice(&num.to_be_bytes());
    tiff.extend_from_slice(&denom.to_be_bytes());

    let mut app1 = vec![0xFF, 0xE1];
    let len = u16::try_from(2 + 6 + tiff.len()).unwrap();
    app1.extend_from_slice(&len.to_be_bytes());
    app1.extend_from_slice(b"Exif\0\0");
    app1.extend_from_slice(&tiff);

    // splice it in right after SOI
    let jpeg = rgb_jpeg(8, 8);
    let mut out = jpeg[..2].to_vec();
    out.extend_from_slice(&app1);
    out.extend_from_slice(&jpeg[2..]);
    out
}

#[allow(dead_code, reason = "it's used in the other tests")]
fn encode(img: DynamicImage, format: ImageFormat) -> Vec<u8> {
    let mut buf = Vec::new();
    img.write_to(&mut Cursor::new(&mut buf), format)
        .expect("encoding an in-memory image");
    buf
}
