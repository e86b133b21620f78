//! Catalog record types shared across the load, check, and report stages.
//!
//! These are plain value containers: construction performs no validation, so
//! a freshly-loaded record may be transiently invalid until it passes through
//! [`crate::validate`]. The catalog stage serializes them into the JSON
//! manifest, which is why they derive `Serialize`.

use serde::Serialize;

/// One displayable image: a resource path plus its accessibility text.
///
/// Constructed once by the loader (or by tests) and owned by the [`Artwork`]
/// that references it, either in `images` or `process`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImageRef {
    /// Path or URL of the image resource (`/images/first-light.jpg`).
    pub src: String,
    /// Accessibility text describing the image.
    pub alt: String,
    /// Optional display caption.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
}

/// One catalog entry — a single piece of creative work.
///
/// One content file produces one `Artwork`. Validity (non-empty title/slug,
/// year range, at least one image, complete image refs) is checked on demand
/// by [`crate::validate::validate`], never at construction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Artwork {
    /// Display name.
    pub title: String,
    /// URL-safe unique identifier.
    pub slug: String,
    /// Year of creation. Valid range is 1900–2100 inclusive.
    pub year: i32,
    /// Medium/material labels in display order. Duplicates permitted.
    pub medium: Vec<String>,
    /// Free-text physical size descriptor (`"10x10 in"`).
    pub dimensions: String,
    /// Optional grouping label.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub series: Option<String>,
    /// Promotional display flag. No validation constraint.
    pub featured: bool,
    /// Sort key among artworks. No range constraint.
    pub order: i32,
    /// Optional classification label.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Primary gallery images. Must be non-empty for the record to be valid.
    pub images: Vec<ImageRef>,
    /// Supplementary making-of images. May be empty.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub process: Vec<ImageRef>,
    /// Optional short summary text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description_short: Option<String>,
}
