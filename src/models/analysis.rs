//! The result of asking a vision model about an image.

use chrono::{DateTime, Utc};

use crate::ident::{AnalysisId, Clock, IdGenerator, RandomIds, SystemClock};

use super::{metadata::ImageMetadata, source::ImageSource};

/// A model's textual analysis of one image.
///
/// Created once, read many times. Nothing about it can change after
/// construction, so it's fine to share across threads.
#[derive(Clone, Debug, PartialEq, PartialOrd, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageAnalysis {
    /// Unique ID identifying this analysis.
    id: AnalysisId,

    /// Where the analyzed image came from.
    image_source: ImageSource,

    /// Name of the model that produced the analysis.
    model: String,

    /// What the model said about the image.
    analysis: String,

    /// When this analysis was created.
    timestamp: DateTime<Utc>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    metadata: Option<ImageMetadata>,
}

impl ImageAnalysis {
    /// Creates a new analysis with a random ID, timestamped now.
    ///
    /// Nothing is validated: an empty `model` or `analysis` is kept as-is.
    pub fn create(
        image_source: ImageSource,
        model: impl Into<String>,
        analysis: impl Into<String>,
        metadata: Option<ImageMetadata>,
    ) -> Self {
        AnalysisFactory::<RandomIds, SystemClock>::default().create(
            image_source,
            model,
            analysis,
            metadata,
        )
    }

    /// Rebuilds an analysis from values that already exist, like ones
    /// loaded from storage.
    pub fn from_parts(
        id: AnalysisId,
        image_source: ImageSource,
        model: impl Into<String>,
        analysis: impl Into<String>,
        timestamp: DateTime<Utc>,
        metadata: Option<ImageMetadata>,
    ) -> Self {
        Self {
            id,
            image_source,
            model: model.into(),
            analysis: analysis.into(),
            timestamp,
            metadata,
        }
    }

    pub fn id(&self) -> AnalysisId {
        self.id
    }

    pub fn image_source(&self) -> &ImageSource {
        &self.image_source
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn analysis(&self) -> &str {
        &self.analysis
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn metadata(&self) -> Option<&ImageMetadata> {
        self.metadata.as_ref()
    }

    /// Whether the image came from a local file.
    pub fn is_from_file(&self) -> bool {
        matches!(self.image_source, ImageSource::File { .. })
    }

    /// Whether the image came from a URL.
    pub fn is_from_url(&self) -> bool {
        matches!(self.image_source, ImageSource::Url { .. })
    }
}

/// Makes [`ImageAnalysis`] records using the given ID generator and clock.
///
/// [`AnalysisFactory::default`] uses random IDs and the system clock, which
/// is what [`ImageAnalysis::create`] does.
#[derive(Clone, Debug, Default)]
pub struct AnalysisFactory<I = RandomIds, C = SystemClock> {
    ids: I,
    clock: C,
}

impl<I: IdGenerator, C: Clock> AnalysisFactory<I, C> {
    pub fn new(ids: I, clock: C) -> Self {
        Self { ids, clock }
    }

    /// Creates a new analysis with a fresh ID and the clock's current time.
    #[tracing::instrument(skip_all, fields(kind = %image_source.kind()))]
    pub fn create(
        &self,
        image_source: ImageSource,
        model: impl Into<String>,
        analysis: impl Into<String>,
        metadata: Option<ImageMetadata>,
    ) -> ImageAnalysis {
        let id = self.ids.generate();
        let timestamp = self.clock.now();
        tracing::debug!("creating image analysis `{id}` at {timestamp}");

        ImageAnalysis::from_parts(id, image_source, model, analysis, timestamp, metadata)
    }
}
