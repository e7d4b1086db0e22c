//! Where an image's bytes come from.

use camino::{Utf8Path, Utf8PathBuf};

use crate::error::{MetadataError, SourceError};

use super::metadata::{builder::MetadataBuilder, ImageMetadata};

/// What a file-based source actually carries.
///
/// A file source always has a path, its bytes, or both. It can never have
/// neither.
#[derive(Clone, Debug, PartialEq, PartialOrd)]
pub enum FileContents {
    Path(Utf8PathBuf),
    Data(Vec<u8>),
    Both { path: Utf8PathBuf, data: Vec<u8> },
}

impl FileContents {
    pub fn path(&self) -> Option<&Utf8Path> {
        match self {
            FileContents::Path(path) | FileContents::Both { path, .. } => Some(path.as_path()),
            FileContents::Data(_) => None,
        }
    }

    pub fn data(&self) -> Option<&[u8]> {
        match self {
            FileContents::Data(data) | FileContents::Both { data, .. } => Some(data.as_slice()),
            FileContents::Path(_) => None,
        }
    }
}

/// An image's origin: a local file or a remote URL.
#[derive(Clone, Debug, PartialEq, PartialOrd, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "RawImageSource", into = "RawImageSource")]
pub enum ImageSource {
    File {
        contents: FileContents,
        metadata: Option<ImageMetadata>,
    },

    Url {
        url: String,
        metadata: Option<ImageMetadata>,
    },
}

/// The two kinds of [`ImageSource`].
#[derive(
    Clone, Copy, Debug, PartialEq, PartialOrd, Eq, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    File,
    Url,
}

impl std::fmt::Display for SourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceKind::File => write!(f, "file"),
            SourceKind::Url => write!(f, "url"),
        }
    }
}

impl ImageSource {
    /// A file we only know the location of.
    pub fn from_path(path: impl Into<Utf8PathBuf>) -> Self {
        Self::File {
            contents: FileContents::Path(path.into()),
            metadata: None,
        }
    }

    /// A file we only have the bytes of.
    pub fn from_data(data: impl Into<Vec<u8>>) -> Self {
        Self::File {
            contents: FileContents::Data(data.into()),
            metadata: None,
        }
    }

    pub fn from_path_and_data(path: impl Into<Utf8PathBuf>, data: impl Into<Vec<u8>>) -> Self {
        Self::File {
            contents: FileContents::Both {
                path: path.into(),
                data: data.into(),
            },
            metadata: None,
        }
    }

    /// A remote image. The URL isn't checked.
    pub fn from_url(url: impl Into<String>) -> Self {
        Self::Url {
            url: url.into(),
            metadata: None,
        }
    }

    /// Attaches `metadata`, replacing whatever was there.
    pub fn with_metadata(self, metadata: ImageMetadata) -> Self {
        match self {
            Self::File { contents, .. } => Self::File {
                contents,
                metadata: Some(metadata),
            },
            Self::Url { url, .. } => Self::Url {
                url,
                metadata: Some(metadata),
            },
        }
    }

    /// Fills in metadata from the source's inline bytes, if it has any.
    ///
    /// Sources without bytes (a bare path or a URL) come back unchanged.
    #[tracing::instrument(skip_all, fields(kind = %self.kind()))]
    pub fn with_inspected_metadata(self, builder: &MetadataBuilder) -> Result<Self, MetadataError> {
        let Some(data) = self.data() else {
            tracing::debug!("source has no inline bytes. leaving metadata alone.");
            return Ok(self);
        };

        let metadata = builder.inspect(data)?;
        Ok(self.with_metadata(metadata))
    }

    pub fn kind(&self) -> SourceKind {
        match self {
            Self::File { .. } => SourceKind::File,
            Self::Url { .. } => SourceKind::Url,
        }
    }

    pub fn path(&self) -> Option<&Utf8Path> {
        match self {
            Self::File { contents, .. } => contents.path(),
            Self::Url { .. } => None,
        }
    }

    pub fn data(&self) -> Option<&[u8]> {
        match self {
            Self::File { contents, .. } => contents.data(),
            Self::Url { .. } => None,
        }
    }

    pub fn url(&self) -> Option<&str> {
        match self {
            Self::Url { url, .. } => Some(url.as_str()),
            Self::File { .. } => None,
        }
    }

    pub fn metadata(&self) -> Option<&ImageMetadata> {
        match self {
            Self::File { metadata, .. } | Self::Url { metadata, .. } => metadata.as_ref(),
        }
    }
}

/// The flat, loosely-typed shape an [`ImageSource`] takes on the wire.
///
/// Everything is optional here. Conversion into [`ImageSource`] is where a
/// source missing its payload gets caught.
#[derive(serde::Serialize, serde::Deserialize)]
struct RawImageSource {
    #[serde(rename = "type")]
    kind: SourceKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    path: Option<Utf8PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    data: Option<Vec<u8>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    metadata: Option<ImageMetadata>,
}

impl TryFrom<RawImageSource> for ImageSource {
    type Error = SourceError;

    fn try_from(raw: RawImageSource) -> Result<Self, Self::Error> {
        let metadata = raw.metadata;

        match raw.kind {
            SourceKind::File => {
                if raw.url.is_some() {
                    tracing::debug!("dropping `url` from a `file` image source");
                }

                let contents = match (raw.path, raw.data) {
                    (Some(path), Some(data)) => FileContents::Both { path, data },
                    (Some(path), None) => FileContents::Path(path),
                    (None, Some(data)) => FileContents::Data(data),
                    (None, None) => return Err(SourceError::MissingFileContents),
                };

                Ok(Self::File { contents, metadata })
            }

            SourceKind::Url => {
                if raw.path.is_some() || raw.data.is_some() {
                    tracing::debug!("dropping `path`/`data` from a `url` image source");
                }

                let url = raw.url.ok_or(SourceError::MissingUrl)?;
                Ok(Self::Url { url, metadata })
            }
        }
    }
}

impl From<ImageSource> for RawImageSource {
    fn from(source: ImageSource) -> Self {
        let kind = source.kind();

        match source {
            ImageSource::File { contents, metadata } => {
                let (path, data) = match contents {
                    FileContents::Path(path) => (Some(path), None),
                    FileContents::Data(data) => (None, Some(data)),
                    FileContents::Both { path, data } => (Some(path), Some(data)),
                };

                Self {
                    kind,
                    path,
                    data,
                    url: None,
                    metadata,
                }
            }

            ImageSource::Url { url, metadata } => Self {
                kind,
                path: None,
                data: None,
                url: Some(url),
                metadata,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{error::SourceError, models::metadata::ImageMetadata};

    use super::{FileContents, ImageSource, RawImageSource, SourceKind};

    #[test]
    fn accessors_follow_the_variant() {
        let path = ImageSource::from_path("/tmp/a.png");
        assert_eq!(path.kind(), SourceKind::File);
        assert_eq!(path.path().map(|p| p.as_str()), Some("/tmp/a.png"));
        assert_eq!(path.data(), None);
        assert_eq!(path.url(), None);

        let both = ImageSource::from_path_and_data("/tmp/b.png", vec![1, 2, 3]);
        assert_eq!(both.path().map(|p| p.as_str()), Some("/tmp/b.png"));
        assert_eq!(both.data(), Some([1_u8, 2, 3].as_slice()));

        let url = ImageSource::from_url("https://x/y.jpg");
        assert_eq!(url.kind(), SourceKind::Url);
        assert_eq!(url.url(), Some("https://x/y.jpg"));
        assert_eq!(url.path(), None);
        assert_eq!(url.metadata(), None);
    }

    #[test]
    fn metadata_attaches_to_either_variant() {
        let meta = ImageMetadata {
            format: Some("jpg".into()),
            ..Default::default()
        };

        let file = ImageSource::from_data(vec![0xFF]).with_metadata(meta.clone());
        assert_eq!(file.metadata(), Some(&meta));
        assert!(matches!(
            file,
            ImageSource::File {
                contents: FileContents::Data(_),
                ..
            }
        ));

        let url = ImageSource::from_url("https://x/y.jpg").with_metadata(meta.clone());
        assert_eq!(url.metadata(), Some(&meta));
    }

    #[test]
    fn raw_sources_need_their_payload() {
        let empty_file = RawImageSource {
            kind: SourceKind::File,
            path: None,
            data: None,
            url: Some("https://ignored".into()),
            metadata: None,
        };
        assert!(matches!(
            ImageSource::try_from(empty_file),
            Err(SourceError::MissingFileContents)
        ));

        let empty_url = RawImageSource {
            kind: SourceKind::Url,
            path: Some("/tmp/ignored.png".into()),
            data: None,
            url: None,
            metadata: None,
        };
        assert!(matches!(
            ImageSource::try_from(empty_url),
            Err(SourceError::MissingUrl)
        ));
    }

    #[test]
    fn raw_sources_drop_fields_of_the_other_kind() {
        let file = RawImageSource {
            kind: SourceKind::File,
            path: Some("/tmp/a.png".into()),
            data: None,
            url: Some("https://dropped".into()),
            metadata: None,
        };
        assert_eq!(
            ImageSource::try_from(file).unwrap(),
            ImageSource::from_path("/tmp/a.png")
        );

        let url = RawImageSource {
            kind: SourceKind::Url,
            path: Some("/tmp/dropped.png".into()),
            data: Some(vec![1, 2]),
            url: Some("https://x/y.jpg".into()),
            metadata: None,
        };
        assert_eq!(
            ImageSource::try_from(url).unwrap(),
            ImageSource::from_url("https://x/y.jpg")
        );
    }

    #[test]
    fn wire_shape_is_flat_and_tagged() {
        let source = ImageSource::from_path("/tmp/a.png");
        let toml = toml::to_string(&source).unwrap();
        assert!(toml.contains("type = \"file\""));
        assert!(toml.contains("path = \"/tmp/a.png\""));
        assert!(!toml.contains("data"));

        let back: ImageSource = toml::from_str(&toml).unwrap();
        assert_eq!(back, source);

        let bad = toml::from_str::<ImageSource>("type = \"url\"");
        assert!(bad.is_err());
    }
}
