/*! # `glimpse`

A small library crate describing the result of running a vision model over
an image.

## Purpose

Other parts of the app load image bytes, fetch URLs, and talk to models.
`glimpse` only defines what comes out the other end: an immutable
[`ImageAnalysis`] record that pairs an [`ImageSource`] with the model's
textual answer, a generated identifier, and the moment it was created.

It can also look at image bytes that are already in memory and describe
them as [`ImageMetadata`] (dimensions, format, alpha, colour space, dpi).

## Example

```
use glimpse::{ImageAnalysis, ImageSource};

let analysis = ImageAnalysis::create(
    ImageSource::from_path("/tmp/a.png"),
    "gpt-vision",
    "a red circle",
    None,
);

assert!(analysis.is_from_file());
assert!(!analysis.is_from_url());
```
*/

pub mod config;
pub mod error;
pub mod ident;
pub mod models;

pub use ident::AnalysisId;
pub use models::{
    analysis::{AnalysisFactory, ImageAnalysis},
    metadata::{builder::MetadataBuilder, ImageMetadata},
    source::{FileContents, ImageSource, SourceKind},
};
