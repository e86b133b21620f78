//! Asset-existence checks for image references.
//!
//! Records reference images by site-relative path (`/images/a.jpg`); these
//! helpers answer whether the referenced files actually exist under the
//! published assets root. Existence only — file contents are never read —
//! and no caching: each call reflects filesystem state at call time.

use std::path::{Path, PathBuf};

/// True iff every relative path exists under `root`.
///
/// An empty path list is trivially satisfied.
pub fn all_exist<P: AsRef<Path>>(root: &Path, paths: &[P]) -> bool {
    paths.iter().all(|p| root.join(p.as_ref()).exists())
}

/// The paths that do not exist under `root`, in input order.
pub fn missing<P: AsRef<Path>>(root: &Path, paths: &[P]) -> Vec<PathBuf> {
    paths
        .iter()
        .map(|p| p.as_ref().to_path_buf())
        .filter(|p| !root.join(p).exists())
        .collect()
}
