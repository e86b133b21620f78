//! Shared test utilities for the folio-check test suite.
//!
//! Provides a known-valid artwork to mutate field-by-field, an image-ref
//! shorthand, and a content-file writer for loader and catalog tests.

use crate::schema::{Artwork, ImageRef};
use std::path::{Path, PathBuf};

/// An image ref with no caption.
pub fn image(src: &str, alt: &str) -> ImageRef {
    ImageRef {
        src: src.to_string(),
        alt: alt.to_string(),
        caption: None,
    }
}

/// An artwork that passes every validation rule.
///
/// Tests mutate a single field to probe one rule at a time.
pub fn valid_artwork() -> Artwork {
    Artwork {
        title: "First Light".to_string(),
        slug: "first-light".to_string(),
        year: 2024,
        medium: vec!["Ink".to_string(), "Gouache".to_string()],
        dimensions: "10x10 in".to_string(),
        series: Some("Dawn".to_string()),
        featured: true,
        order: 1,
        category: Some("painting".to_string()),
        images: vec![image("/images/first-light.jpg", "First Light, full view")],
        process: vec![image("/images/first-light-wip.jpg", "Underpainting")],
        description_short: Some("Sunrise over the harbor".to_string()),
    }
}

/// Write a content file named `name` under `dir` with the given front matter
/// and a placeholder body. Returns the file's path.
pub fn write_work(dir: &Path, name: &str, front_matter: &str) -> PathBuf {
    let path = dir.join(name);
    let content = format!("---\n{front_matter}---\nBody text.\n");
    std::fs::write(&path, content).unwrap();
    path
}
