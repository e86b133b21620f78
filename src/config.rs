//! Checker configuration.
//!
//! Handles loading `folio-check.toml` from the catalog root. The file points
//! the checker at the content and asset directories:
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! content_dir = "content/works"  # Directory of artwork content files
//! assets_root = "public"         # Directory image src paths resolve against
//! ```
//!
//! Config files are sparse — override just the values you want. Unknown keys
//! are rejected to catch typos early. When the file is absent, stock defaults
//! apply.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Name of the config file within the catalog root.
pub const CONFIG_FILENAME: &str = "folio-check.toml";

/// Checker configuration loaded from `folio-check.toml`.
///
/// All fields have defaults. Unknown keys are rejected.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CheckConfig {
    /// Directory of artwork content files, relative to the catalog root.
    pub content_dir: String,
    /// Directory that image `src` paths resolve against, relative to the
    /// catalog root.
    pub assets_root: String,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            content_dir: "content/works".to_string(),
            assets_root: "public".to_string(),
        }
    }
}

/// Load `folio-check.toml` from the catalog root.
///
/// Returns stock defaults when the file doesn't exist.
pub fn load_config(root: &Path) -> Result<CheckConfig, ConfigError> {
    let path = root.join(CONFIG_FILENAME);
    if !path.exists() {
        return Ok(CheckConfig::default());
    }
    let content = fs::read_to_string(&path)?;
    let config: CheckConfig = toml::from_str(&content)?;
    Ok(config)
}

/// A documented stock config, printed by `folio-check gen-config`.
pub fn stock_config() -> &'static str {
    r#"# folio-check configuration
# All options are optional - defaults shown below.

# Directory of artwork content files, relative to the catalog root.
content_dir = "content/works"

# Directory that image src paths resolve against, relative to the
# catalog root. A record referencing /images/a.jpg is checked as
# <assets_root>/images/a.jpg.
assets_root = "public"
"#
}
