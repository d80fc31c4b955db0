//! The explicit inputs of one build.
//!
//! Every pipeline stage takes a [`BuildContext`] (or pieces of it) as an
//! argument. Nothing in the library reads the working directory, environment
//! variables, or global state; the CLI resolves all of that once, here.

use crate::assets::AssetSource;
use crate::config::{ConfigError, SiteConfig, same_dir};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq)]
pub struct BuildContext {
    pub site_title: String,
    pub source_dir: PathBuf,
    pub output_dir: PathBuf,
    pub page_size: usize,
    /// Extension filter for source files; `None` loads every file.
    pub require_extension: Option<String>,
    pub assets: Vec<AssetSource>,
}

/// Command-line values that take precedence over the config file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub source_dir: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
    pub page_size: Option<usize>,
}

impl BuildContext {
    /// Build a context from a validated config.
    ///
    /// Relative config paths are joined onto `base_dir` (the directory the
    /// config file lives in). Override paths are used as given, since they
    /// come from the command line and are relative to the caller. The result
    /// is validated again, since overrides bypass the config file checks.
    pub fn from_config(
        config: &SiteConfig,
        base_dir: &Path,
        overrides: Overrides,
    ) -> Result<Self, ConfigError> {
        let resolve = |p: &Path| {
            if p.is_absolute() {
                p.to_path_buf()
            } else {
                base_dir.join(p)
            }
        };

        let ctx = Self {
            site_title: config.title.clone(),
            source_dir: overrides
                .source_dir
                .unwrap_or_else(|| resolve(&config.source_dir)),
            output_dir: overrides
                .output_dir
                .unwrap_or_else(|| resolve(&config.output_dir)),
            page_size: overrides.page_size.unwrap_or(config.page_size),
            require_extension: config.extension_filter().map(str::to_string),
            assets: config
                .assets
                .iter()
                .map(|a| AssetSource {
                    source: resolve(&a.source),
                    ..a.clone()
                })
                .collect(),
        };
        ctx.validate()?;
        Ok(ctx)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.page_size == 0 {
            return Err(ConfigError::Validation(
                "page_size must be at least 1".into(),
            ));
        }
        if same_dir(&self.source_dir, &self.output_dir) {
            return Err(ConfigError::Validation(format!(
                "output directory {} is the source directory",
                self.output_dir.display()
            )));
        }
        Ok(())
    }

    pub fn extension_filter(&self) -> Option<&str> {
        self.require_extension.as_deref()
    }
}
