//! Site configuration module.
//!
//! Handles loading and validating `pagewright.toml`. The file is sparse:
//! every key has a stock default and the user's file only needs the keys it
//! wants to change. A `[[assets]]` list in the file replaces the stock list
//! as a whole.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! title = "Posts"            # Site title shown in page headers
//! page_size = 4              # Documents per listing page
//! source_dir = "posts"       # Directory holding the documents
//! output_dir = "dist"        # Where the site is written
//! require_extension = "md"   # Only load files with this extension ("" = all files)
//!
//! # Asset directories mirrored into the output
//! [[assets]]
//! source = "templates"       # Directory to copy from
//! target = ""                # Subdirectory of output_dir ("" = root)
//! recursive = true           # false = direct files only
//! optional = true            # Skip quietly when the directory is absent
//!
//! [[assets]]
//! source = "posts/statics"
//! target = "statics"
//! optional = true
//! ```
//!
//! Relative paths are resolved against the directory holding the config file
//! (see [`crate::context::BuildContext`]).
//!
//! Unknown keys are rejected to catch typos early.

use crate::assets::AssetSource;
use serde::Deserialize;
use std::fs;
use std::path::{Component, Path, PathBuf};
use thiserror::Error;

/// Default config file name, looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "pagewright.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `pagewright.toml`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Site title shown in page headers and `<title>`.
    pub title: String,
    /// Documents per listing page. Must be at least 1.
    pub page_size: usize,
    /// Directory holding the source documents.
    pub source_dir: PathBuf,
    /// Directory the site is written to.
    pub output_dir: PathBuf,
    /// Only files with this extension are loaded. Empty loads every file.
    pub require_extension: String,
    /// Directories mirrored into the output tree.
    pub assets: Vec<AssetSource>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Posts".to_string(),
            page_size: 4,
            source_dir: PathBuf::from("posts"),
            output_dir: PathBuf::from("dist"),
            require_extension: "md".to_string(),
            assets: vec![
                AssetSource {
                    source: PathBuf::from("templates"),
                    target: PathBuf::new(),
                    recursive: true,
                    optional: true,
                },
                AssetSource {
                    source: PathBuf::from("posts/statics"),
                    target: PathBuf::from("statics"),
                    recursive: true,
                    optional: true,
                },
            ],
        }
    }
}

impl SiteConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.page_size == 0 {
            return Err(ConfigError::Validation(
                "page_size must be at least 1".into(),
            ));
        }
        if self.source_dir.as_os_str().is_empty() {
            return Err(ConfigError::Validation(
                "source_dir must not be empty".into(),
            ));
        }
        if self.output_dir.as_os_str().is_empty() {
            return Err(ConfigError::Validation(
                "output_dir must not be empty".into(),
            ));
        }
        if same_dir(&self.source_dir, &self.output_dir) {
            return Err(ConfigError::Validation(
                "source_dir and output_dir must differ".into(),
            ));
        }
        if let Some(asset) = self.assets.iter().find(|a| a.source.as_os_str().is_empty()) {
            return Err(ConfigError::Validation(format!(
                "asset source must not be empty (target {:?})",
                asset.target
            )));
        }
        Ok(())
    }

    /// The extension filter, or `None` when every file is loaded.
    pub fn extension_filter(&self) -> Option<&str> {
        let ext = self.require_extension.trim_start_matches('.');
        (!ext.is_empty()).then_some(ext)
    }
}

/// Path equality that ignores `.` components, so `./posts` matches `posts`.
pub(crate) fn same_dir(a: &Path, b: &Path) -> bool {
    fn normal(p: &Path) -> impl Iterator<Item = Component<'_>> {
        p.components().filter(|c| !matches!(c, Component::CurDir))
    }
    normal(a).eq(normal(b))
}

// =============================================================================
// Config loading and validation
// =============================================================================

/// Parse config text and validate it. Missing keys take their defaults.
pub fn parse_config(content: &str) -> Result<SiteConfig, ConfigError> {
    let config: SiteConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}

/// Load config from `path`, falling back to defaults when it is absent.
pub fn load_config(path: &Path) -> Result<SiteConfig, ConfigError> {
    if !path.exists() {
        return Ok(SiteConfig::default());
    }
    parse_config(&fs::read_to_string(path)?)
}

/// Returns a fully-commented stock `pagewright.toml`.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# pagewright configuration
# ========================
# All settings are optional. Values shown below are the defaults.
# Relative paths are resolved against the directory holding this file.
# Unknown keys will cause an error.

# Site title, shown in page headers and the browser tab.
title = "Posts"

# Number of documents on each listing page. The first page is written to
# index.html, later pages to page/2.html, page/3.html, ...
page_size = 4

# Directory holding the documents. Subdirectories are ignored.
source_dir = "posts"

# Directory the generated site is written to.
output_dir = "dist"

# Only files with this extension are loaded. Set to "" to load every file.
require_extension = "md"

# ---------------------------------------------------------------------------
# Static assets
# ---------------------------------------------------------------------------
# Directories mirrored into the output. Files ending in .html are never
# copied, so templates or stray pages cannot overwrite generated ones.
# Listing [[assets]] here replaces both entries below.

[[assets]]
source = "templates"
target = ""          # subdirectory of output_dir, "" = root
recursive = true     # false = direct files only
optional = true      # skip quietly when the directory is absent

[[assets]]
source = "posts/statics"
target = "statics"
recursive = true
optional = true
"##
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_config_values() {
        let config = SiteConfig::default();
        assert_eq!(config.title, "Posts");
        assert_eq!(config.page_size, 4);
        assert_eq!(config.source_dir, PathBuf::from("posts"));
        assert_eq!(config.output_dir, PathBuf::from("dist"));
        assert_eq!(config.extension_filter(), Some("md"));
        assert_eq!(config.assets.len(), 2);
        assert_eq!(config.assets[0].source, PathBuf::from("templates"));
        assert_eq!(config.assets[1].target, PathBuf::from("statics"));
        assert!(config.assets.iter().all(|a| a.optional));
    }

    #[test]
    fn parse_partial_config() {
        let config: SiteConfig = toml::from_str("page_size = 10").unwrap();
        assert_eq!(config.page_size, 10);
        assert_eq!(config.source_dir, PathBuf::from("posts"));
    }

    #[test]
    fn parse_assets() {
        let config: SiteConfig = toml::from_str(
            r#"
[[assets]]
source = "templates"

[[assets]]
source = "posts/statics"
target = "statics"
recursive = false
"#,
        )
        .unwrap();
        assert_eq!(config.assets.len(), 2);
        assert_eq!(config.assets[0].target, PathBuf::new());
        assert!(config.assets[0].recursive);
        assert_eq!(config.assets[1].target, PathBuf::from("statics"));
        assert!(!config.assets[1].recursive);
    }

    #[test]
    fn empty_extension_disables_filter() {
        let config: SiteConfig = toml::from_str(r#"require_extension = """#).unwrap();
        assert_eq!(config.extension_filter(), None);
    }

    #[test]
    fn dotted_extension_normalized() {
        let config: SiteConfig = toml::from_str(r#"require_extension = ".markdown""#).unwrap();
        assert_eq!(config.extension_filter(), Some("markdown"));
    }

    #[test]
    fn unknown_key_rejected() {
        let result: Result<SiteConfig, _> = toml::from_str("pagesize = 3");
        assert!(result.is_err());
    }

    #[test]
    fn unknown_asset_key_rejected() {
        let result: Result<SiteConfig, _> = toml::from_str(
            r#"
[[assets]]
source = "a"
exclude = ["*.html"]
"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn zero_page_size_fails_validation() {
        let config = SiteConfig {
            page_size: 0,
            ..SiteConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn same_source_and_output_fails_validation() {
        let config = SiteConfig {
            output_dir: PathBuf::from("posts"),
            ..SiteConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn dot_prefixed_output_matching_source_fails_validation() {
        let config = SiteConfig {
            output_dir: PathBuf::from("./posts"),
            ..SiteConfig::default()
        };
        assert!(config.validate().is_err());
        assert!(same_dir(Path::new("a/./b"), Path::new("a/b")));
        assert!(!same_dir(Path::new("posts"), Path::new("dist")));
    }

    #[test]
    fn configured_assets_replace_defaults() {
        let config = parse_config("[[assets]]\nsource = \"static\"\n").unwrap();
        assert_eq!(config.assets.len(), 1);
        assert_eq!(config.assets[0].source, PathBuf::from("static"));
        assert!(!config.assets[0].optional);
    }

    #[test]
    fn validate_default_config_passes() {
        assert!(SiteConfig::default().validate().is_ok());
    }

    #[test]
    fn load_config_returns_default_when_no_file() {
        let tmp = TempDir::new().unwrap();
        let config = load_config(&tmp.path().join(DEFAULT_CONFIG_FILE)).unwrap();
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn load_config_reads_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join(DEFAULT_CONFIG_FILE);
        fs::write(&path, "title = \"Notes\"\npage_size = 3\n").unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.title, "Notes");
        assert_eq!(config.page_size, 3);
        assert_eq!(config.output_dir, PathBuf::from("dist"));
    }

    #[test]
    fn load_config_invalid_toml_is_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join(DEFAULT_CONFIG_FILE);
        fs::write(&path, "page_size = [").unwrap();
        assert!(matches!(load_config(&path), Err(ConfigError::Toml(_))));
    }

    #[test]
    fn load_config_validates_values() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join(DEFAULT_CONFIG_FILE);
        fs::write(&path, "page_size = 0").unwrap();
        assert!(matches!(load_config(&path), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn stock_config_toml_roundtrips_to_defaults() {
        let parsed: SiteConfig = toml::from_str(stock_config_toml()).unwrap();
        assert_eq!(parsed, SiteConfig::default());
    }
}
