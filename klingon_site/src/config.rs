//! Site configuration.
//!
//! Loads optional `site.toml`. Every key has a default, so an empty or
//! missing file yields the stock Learn Klingon page.
//!
//! ```toml
//! title = "Learn Klingon: Honor Your Words"
//! lang = "en"
//! asset_base = "/assets"
//!
//! [output]
//! path = "dist/index.html"
//! ```

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Document `<title>`
    pub title: String,
    /// `<meta name="description">` content
    pub description: String,
    /// `lang` attribute of the root element
    pub lang: String,
    /// URL prefix prepended to every image file name
    pub asset_base: String,
    /// `[output]` table
    pub output: OutputConfig,
}

/// Where the rendered page is written
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// File the rendered page is written to
    pub path: PathBuf,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Learn Klingon: Honor Your Words".into(),
            description: "A futuristic Klingon language training experience blending culture, honor, and immersive lessons.".into(),
            lang: "en".into(),
            asset_base: "/assets".into(),
            output: OutputConfig::default(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("dist").join("index.html"),
        }
    }
}

/// Failure to load `site.toml`
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file exists but could not be read
    #[error("failed to read {path}")]
    Read {
        /// Config file path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
    /// The file is not valid TOML for [`SiteConfig`]
    #[error("failed to parse {path}")]
    Parse {
        /// Config file path
        path: PathBuf,
        /// Underlying TOML error
        #[source]
        source: toml::de::Error,
    },
}

impl SiteConfig {
    /// Load config from a specific path.
    /// Returns the default config if the file doesn't exist.
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parse config from TOML text.
    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}
