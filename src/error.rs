use core::error::Error;
use pisserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// during fs read from disk
    #[error("Failed to read config file at `{path}`. See: `{err}`")]
    ReadFailed { path: String, err: std::io::Error },

    /// parsing
    #[error("Failed to parse config file. See: `{_0}`")]
    ParseFailed(#[from] toml::de::Error),
}

#[derive(Debug, Error)]
pub enum MetadataError {
    #[error("The given bytes don't start with any known file signature.")]
    UnknownFormat,

    #[error("The given bytes look like `{mime}`, which isn't an image.")]
    NotAnImage { mime: String },

    #[error("Failed to read the in-memory image buffer. See: `{_0}`")]
    ReadFailed(#[from] std::io::Error),

    #[error("The `image` crate failed to read the image header. See: `{_0}`")]
    Decode(#[from] image::ImageError),

    // usually just means "no exif here", so callers tend to swallow it
    #[error("(KAMADAK) Failed to read EXIF data. See: `{_0}`")]
    Exif(#[from] kamadak_exif::Error),
}

/// Raised when a serialized image source doesn't carry the payload its
/// `type` promises.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("A `file` image source needs a `path`, `data`, or both, but had neither.")]
    MissingFileContents,

    #[error("A `url` image source was missing its `url`.")]
    MissingUrl,
}
