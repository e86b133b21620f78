//! Front-matter loading: one content file → one [`Artwork`].
//!
//! A content file opens with a `---`-delimited YAML front-matter block
//! followed by a free-text body. The loader reads the file, splits off the
//! block (the body is not used here), parses it into a typed intermediate
//! ([`FrontMatter`]), and maps that field-by-field onto [`Artwork`], applying
//! defaults for optional keys.
//!
//! The loader never validates. It returns whatever record the front matter
//! describes — callers run [`crate::validate::validate`] separately before
//! trusting the result.
//!
//! ## Error propagation
//!
//! Required keys (`title`, `slug`, `year`) are non-optional fields of the
//! intermediate, so a missing key or a value that doesn't coerce surfaces as
//! the underlying serde_yaml error, propagated unmasked inside
//! [`LoadError::Yaml`]. There is no recovery and no default-substitution
//! beyond the explicit defaults below — a malformed file is a source-file
//! problem, not something to paper over.
//!
//! ## Defaults
//!
//! | Key | Absent value |
//! |-----|--------------|
//! | `medium` | empty list |
//! | `dimensions` | `""` |
//! | `series`, `category`, `descriptionShort` | none |
//! | `featured` | `false` |
//! | `order` | `0` |
//! | `images`, `process` | empty list |

use crate::schema::{Artwork, ImageRef};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{path}: no front-matter block (file must start with ---)")]
    MissingFrontMatter { path: PathBuf },
    #[error("{path}: front-matter block is never closed by ---")]
    UnterminatedFrontMatter { path: PathBuf },
    #[error("{path}: {source}")]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

/// Typed view of the raw front-matter mapping.
///
/// Each recognized key is a named field mapped deliberately onto the target
/// record — no dynamic map access. Unrecognized top-level keys are ignored,
/// matching how site generators treat extra front matter.
#[derive(Debug, Deserialize)]
struct FrontMatter {
    title: String,
    slug: String,
    year: i32,
    #[serde(default)]
    medium: Vec<String>,
    #[serde(default)]
    dimensions: String,
    #[serde(default)]
    series: Option<String>,
    #[serde(default)]
    featured: bool,
    #[serde(default)]
    order: i32,
    #[serde(default)]
    category: Option<String>,
    #[serde(default)]
    images: Vec<RawImageRef>,
    #[serde(default)]
    process: Vec<RawImageRef>,
    /// External convention is camelCase; the record field is snake_case.
    #[serde(default, rename = "descriptionShort")]
    description_short: Option<String>,
}

/// One raw `images:`/`process:` entry.
///
/// Unknown keys are rejected so a typo like `capton:` fails the load instead
/// of silently dropping data; a missing `src` or `alt` fails the same way.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawImageRef {
    src: String,
    alt: String,
    #[serde(default)]
    caption: Option<String>,
}

impl RawImageRef {
    fn into_image_ref(self) -> ImageRef {
        ImageRef {
            src: self.src,
            alt: self.alt,
            caption: self.caption,
        }
    }
}

impl FrontMatter {
    fn into_artwork(self) -> Artwork {
        Artwork {
            title: self.title,
            slug: self.slug,
            year: self.year,
            medium: self.medium,
            dimensions: self.dimensions,
            series: self.series,
            featured: self.featured,
            order: self.order,
            category: self.category,
            images: self
                .images
                .into_iter()
                .map(RawImageRef::into_image_ref)
                .collect(),
            process: self
                .process
                .into_iter()
                .map(RawImageRef::into_image_ref)
                .collect(),
            description_short: self.description_short,
        }
    }
}

/// Load one content file into an unvalidated [`Artwork`].
///
/// Read-only; the file is touched exactly once.
pub fn load(path: &Path) -> Result<Artwork, LoadError> {
    let content = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let block = front_matter_block(&content, path)?;
    let front_matter: FrontMatter =
        serde_yaml::from_str(block).map_err(|source| LoadError::Yaml {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(front_matter.into_artwork())
}

/// Extract the YAML between the opening `---` line and the closing `---` line.
///
/// The opening delimiter must be the first line of the file. Delimiter lines
/// may carry trailing whitespace (`---\r` from CRLF files is accepted).
fn front_matter_block<'a>(content: &'a str, path: &Path) -> Result<&'a str, LoadError> {
    let mut lines = content.split_inclusive('\n');
    let start = match lines.next() {
        Some(first) if first.trim_end() == "---" => first.len(),
        _ => {
            return Err(LoadError::MissingFrontMatter {
                path: path.to_path_buf(),
            });
        }
    };

    let mut offset = start;
    for line in content[start..].split_inclusive('\n') {
        if line.trim_end() == "---" {
            return Ok(&content[start..offset]);
        }
        offset += line.len();
    }
    Err(LoadError::UnterminatedFrontMatter {
        path: path.to_path_buf(),
    })
}
