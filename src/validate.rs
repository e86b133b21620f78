//! Validation rules for loaded artwork records.
//!
//! Validation is a gate, not a transform: [`validate`] inspects a
//! fully-constructed [`Artwork`] and either accepts it or rejects it with the
//! first rule it violates. It holds no state, touches no files, and never
//! fails for reasons outside its fixed rule set — the same input always
//! produces the same outcome.
//!
//! Callers treat any failure as "do not publish this record". There is no
//! partial validation; fix the source file and re-run.
//!
//! ## Rules
//!
//! 1. `title` non-empty
//! 2. `slug` non-empty
//! 3. `year` within 1900–2100 inclusive
//! 4. `images` non-empty
//! 5. every entry in `images`, then `process`, has non-empty `src` and `alt`

use crate::schema::{Artwork, ImageRef};
use thiserror::Error;

/// Earliest accepted creation year.
pub const YEAR_MIN: i32 = 1900;
/// Latest accepted creation year.
pub const YEAR_MAX: i32 = 2100;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidateError {
    #[error("title is required")]
    MissingTitle,
    #[error("slug is required")]
    MissingSlug,
    #[error("year {0} is out of range ({YEAR_MIN}-{YEAR_MAX})")]
    YearOutOfRange(i32),
    #[error("at least one image is required")]
    NoImages,
    #[error("{collection}[{index}]: image src and alt are required")]
    IncompleteImage {
        /// Which collection the offending entry sits in (`images` or `process`).
        collection: &'static str,
        /// Zero-based position within that collection.
        index: usize,
    },
}

/// Check an artwork against the full rule set.
///
/// Returns the first violated rule. `images` entries are checked before
/// `process` entries; which one is reported only affects the error text,
/// never the pass/fail outcome.
pub fn validate(artwork: &Artwork) -> Result<(), ValidateError> {
    if artwork.title.is_empty() {
        return Err(ValidateError::MissingTitle);
    }
    if artwork.slug.is_empty() {
        return Err(ValidateError::MissingSlug);
    }
    if artwork.year < YEAR_MIN || artwork.year > YEAR_MAX {
        return Err(ValidateError::YearOutOfRange(artwork.year));
    }
    if artwork.images.is_empty() {
        return Err(ValidateError::NoImages);
    }
    check_image_refs("images", &artwork.images)?;
    check_image_refs("process", &artwork.process)?;
    Ok(())
}

fn check_image_refs(collection: &'static str, refs: &[ImageRef]) -> Result<(), ValidateError> {
    for (index, image) in refs.iter().enumerate() {
        if image.src.is_empty() || image.alt.is_empty() {
            return Err(ValidateError::IncompleteImage { collection, index });
        }
    }
    Ok(())
}
