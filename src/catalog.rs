//! Catalog scanning: walk a content directory and check every work.
//!
//! The batch layer over the single-file pipeline. For each content file it
//! runs load → validate → asset check, collecting problems per file instead
//! of aborting on the first bad one — a QA run over a catalog should name
//! every broken file in one pass. Only I/O failures walking the directory
//! abort the scan.
//!
//! ## Directory structure
//!
//! ```text
//! catalog/                         # Catalog root
//! ├── folio-check.toml             # Checker config (optional)
//! ├── content/works/               # content_dir
//! │   ├── first-light.mdx          # One artwork per file
//! │   └── tide-studies.mdx
//! └── public/                      # assets_root
//!     └── images/
//!         └── first-light.jpg      # Referenced as /images/first-light.jpg
//! ```
//!
//! ## Output
//!
//! Produces a [`Catalog`] report: one [`WorkReport`] per content file, loaded
//! records sorted by their `order` field, and everything wrong with each
//! file as display-ready problem strings. The report serializes to the JSON
//! manifest written by `folio-check scan`.

use crate::assets;
use crate::loader;
use crate::schema::Artwork;
use crate::validate;
use serde::Serialize;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("failed to walk content directory: {0}")]
    Walk(#[from] walkdir::Error),
}

const CONTENT_EXTENSIONS: &[&str] = &["mdx", "md"];

/// Check results for one content file.
#[derive(Debug, Serialize)]
pub struct WorkReport {
    /// Path of the content file, relative to the content directory.
    pub path: String,
    /// The loaded record. `None` when the file failed to load.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artwork: Option<Artwork>,
    /// Everything wrong with this file, display-ready.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub problems: Vec<String>,
}

/// Aggregated check results for a whole content directory.
#[derive(Debug, Serialize)]
pub struct Catalog {
    pub works: Vec<WorkReport>,
}

impl Catalog {
    /// True iff no file produced any problem.
    pub fn is_clean(&self) -> bool {
        self.works.iter().all(|w| w.problems.is_empty())
    }

    /// Total problems across all files.
    pub fn problem_count(&self) -> usize {
        self.works.iter().map(|w| w.problems.len()).sum()
    }
}

/// Scan a content directory, checking every `.mdx`/`.md` file it contains.
///
/// Image `src` paths are resolved against `assets_root` (leading `/` is the
/// site root). Loaded works are sorted by (`order`, path); files that failed
/// to load sort last.
pub fn scan(content_dir: &Path, assets_root: &Path) -> Result<Catalog, CatalogError> {
    let mut files: Vec<PathBuf> = Vec::new();
    for entry in WalkDir::new(content_dir).sort_by_file_name() {
        let entry = entry?;
        if entry.file_type().is_file() && is_content_file(entry.path()) {
            files.push(entry.into_path());
        }
    }

    let mut works: Vec<WorkReport> = files
        .iter()
        .map(|file| check_work(file, content_dir, assets_root))
        .collect();

    works.sort_by_key(|w| {
        (
            w.artwork.as_ref().map(|a| a.order).unwrap_or(i32::MAX),
            w.path.clone(),
        )
    });

    Ok(Catalog { works })
}

fn check_work(file: &Path, content_dir: &Path, assets_root: &Path) -> WorkReport {
    let path = file
        .strip_prefix(content_dir)
        .unwrap_or(file)
        .to_string_lossy()
        .to_string();

    let artwork = match loader::load(file) {
        Ok(artwork) => artwork,
        Err(err) => {
            return WorkReport {
                path,
                artwork: None,
                problems: vec![err.to_string()],
            };
        }
    };

    let mut problems = Vec::new();
    if let Err(err) = validate::validate(&artwork) {
        problems.push(err.to_string());
    }
    for gone in assets::missing(assets_root, &site_relative_srcs(&artwork)) {
        problems.push(format!("missing asset: {}", gone.display()));
    }

    WorkReport {
        path,
        artwork: Some(artwork),
        problems,
    }
}

fn is_content_file(path: &Path) -> bool {
    path.extension()
        .map(|ext| {
            CONTENT_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
        .unwrap_or(false)
}

/// Image refs that point into the site's asset tree.
///
/// A leading `/` means the site root, which maps to the assets root on disk.
/// Refs hosted elsewhere (`http://`, `https://`) are not checked, and empty
/// `src` values are left to the validator to flag.
fn site_relative_srcs(artwork: &Artwork) -> Vec<String> {
    artwork
        .images
        .iter()
        .chain(&artwork.process)
        .map(|img| img.src.as_str())
        .filter(|src| {
            !src.is_empty() && !src.starts_with("http://") && !src.starts_with("https://")
        })
        .map(|src| src.trim_start_matches('/').to_string())
        .collect()
}
