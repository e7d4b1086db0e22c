//! Pixel density from EXIF using `kamadak_exif`.

use std::io::Cursor;

use kamadak_exif::{In, Rational, Tag, Value};

use crate::error::MetadataError;

use super::MetadataBuilder;

/// EXIF `ResolutionUnit` value meaning "centimetres".
const UNIT_CENTIMETRE: u32 = 3;

impl MetadataBuilder {
    /// Applies EXIF data from `kamadak_exif` to `self`.
    #[tracing::instrument(skip_all)]
    pub(super) fn apply_kamadak_exif(&mut self, bytes: &[u8]) -> Result<(), MetadataError> {
        let exif = kamadak_exif::Reader::new().read_from_container(&mut Cursor::new(bytes))?;
        tracing::debug!("got exif data from kamadak-exif!");

        let p = In::PRIMARY;
        let Some(Value::Rational(x_res)) = exif.get_field(Tag::XResolution, p).map(|f| &f.value)
        else {
            tracing::debug!("exif had no x resolution");
            return Ok(());
        };
        let Some(x_res) = x_res.first() else {
            tracing::debug!("exif x resolution was empty");
            return Ok(());
        };

        // inches unless told otherwise
        let unit = exif
            .get_field(Tag::ResolutionUnit, p)
            .and_then(|f| f.value.get_uint(0));

        let Some(dpi) = to_dpi(x_res, unit) else {
            tracing::debug!("exif x resolution `{x_res}` isn't a usable density");
            return Ok(());
        };

        self.metadata.density = Some(dpi);
        tracing::debug!("got density from exif!");

        Ok(())
    }
}

/// Converts an EXIF resolution to dots per inch.
///
/// Zero denominators and non-finite results give `None`.
fn to_dpi(resolution: &Rational, unit: Option<u32>) -> Option<f64> {
    if resolution.denom == 0 {
        return None;
    }

    let dpi = match unit {
        Some(UNIT_CENTIMETRE) => resolution.to_f64() * 2.54,
        _ => resolution.to_f64(),
    };

    dpi.is_finite().then_some(dpi)
}
