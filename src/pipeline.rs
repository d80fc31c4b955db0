//! Build driver.
//!
//! Runs the whole pipeline for one [`BuildContext`]:
//!
//! ```text
//! load ─→ order ─→ paginate ─→ models ─→ render ─→ write ─→ copy assets
//! └──────────────── plan() (no writes) ────────────┘
//! ```
//!
//! [`plan`] does everything up to and including rendering, in memory, and
//! confirms every required asset directory exists. [`build`] runs `plan` to
//! completion before touching the output directory, so a malformed document
//! or a missing asset directory aborts the build with nothing written. After that, the first write or copy failure aborts the
//! rest; a failed build's output directory should be treated as unusable.

use crate::assets::{AssetError, check_sources, copy_assets};
use crate::collection::{LoadError, load_collection};
use crate::context::BuildContext;
use crate::document::{Document, ParseError};
use crate::markup::MarkupRenderer;
use crate::model::{DocumentModel, ListingModel, build_document_models, build_listing_models};
use crate::order::order_by_rank;
use crate::paginate::{PaginateError, paginate};
use crate::render::{STYLESHEET, render_document, render_listing};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

/// Pipeline stage an error came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Load,
    Paginate,
    Render,
    Write,
    Assets,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Load => "load",
            Stage::Paginate => "paginate",
            Stage::Render => "render",
            Stage::Write => "write",
            Stage::Assets => "assets",
        };
        f.write_str(name)
    }
}

#[derive(Error, Debug)]
pub enum BuildError {
    #[error("[{stage}] missing input: {}", .path.display())]
    MissingInput { stage: Stage, path: PathBuf },
    #[error("[load] {0}")]
    MalformedDocument(#[source] LoadError),
    #[error("[{stage}] cannot read {}: {message}", .path.display())]
    ReadFailure {
        stage: Stage,
        path: PathBuf,
        message: String,
    },
    #[error("[{stage}] cannot write {}: {source}", .path.display())]
    WriteFailure {
        stage: Stage,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("[render] {}: {message}", .path.display())]
    RenderFailure { path: PathBuf, message: String },
    #[error("[paginate] {0}")]
    InvalidPageSize(#[from] PaginateError),
}

impl BuildError {
    pub fn stage(&self) -> Stage {
        match self {
            BuildError::MissingInput { stage, .. }
            | BuildError::ReadFailure { stage, .. }
            | BuildError::WriteFailure { stage, .. } => *stage,
            BuildError::MalformedDocument(_) => Stage::Load,
            BuildError::RenderFailure { .. } => Stage::Render,
            BuildError::InvalidPageSize(_) => Stage::Paginate,
        }
    }
}

impl From<LoadError> for BuildError {
    fn from(err: LoadError) -> Self {
        match err {
            LoadError::MissingInput(path) => BuildError::MissingInput {
                stage: Stage::Load,
                path,
            },
            LoadError::Read { path, source } => BuildError::ReadFailure {
                stage: Stage::Load,
                path,
                message: source.to_string(),
            },
            LoadError::Malformed {
                path,
                source: ParseError::Render(render),
            } => BuildError::RenderFailure {
                path,
                message: render.to_string(),
            },
            other => BuildError::MalformedDocument(other),
        }
    }
}

impl From<AssetError> for BuildError {
    fn from(err: AssetError) -> Self {
        match err {
            AssetError::MissingInput(path) => BuildError::MissingInput {
                stage: Stage::Assets,
                path,
            },
            AssetError::Walk { path, source } => BuildError::ReadFailure {
                stage: Stage::Assets,
                path,
                message: source.to_string(),
            },
            AssetError::Copy { to, source, .. } => BuildError::WriteFailure {
                stage: Stage::Assets,
                path: to,
                source,
            },
        }
    }
}

/// A rendered page waiting to be written.
#[derive(Debug, Clone)]
pub struct RenderedPage {
    /// Path relative to the output root.
    pub path: PathBuf,
    pub html: String,
}

/// Everything a build will write, computed without touching the output.
#[derive(Debug)]
pub struct SitePlan {
    /// The ordered collection.
    pub documents: Vec<Document>,
    pub listings: Vec<ListingModel>,
    pub document_models: Vec<DocumentModel>,
    /// Document pages first, then listing pages.
    pub pages: Vec<RenderedPage>,
}

/// Summary of a finished build.
#[derive(Debug, Clone, PartialEq)]
pub struct BuildReport {
    pub output_dir: PathBuf,
    /// `(title, path)` of each document page, in listing order.
    pub documents: Vec<(String, PathBuf)>,
    /// Path of each listing page, in page order.
    pub listings: Vec<PathBuf>,
    pub assets_copied: usize,
}

/// Load, order, paginate, and render the site in memory.
pub fn plan(ctx: &BuildContext, renderer: &dyn MarkupRenderer) -> Result<SitePlan, BuildError> {
    let mut documents = load_collection(&ctx.source_dir, ctx.extension_filter(), renderer)?;
    order_by_rank(&mut documents);

    let paginations = paginate(documents.len(), ctx.page_size)?;
    debug!(
        documents = documents.len(),
        pages = paginations.len(),
        page_size = ctx.page_size,
        "paginated collection"
    );

    let listings = build_listing_models(&documents, &paginations, &ctx.site_title);
    let document_models = build_document_models(&documents, &ctx.site_title);

    let pages = document_models
        .iter()
        .map(|m| RenderedPage {
            path: m.output_path.clone(),
            html: render_document(m, STYLESHEET),
        })
        .chain(listings.iter().map(|m| RenderedPage {
            path: m.output_path.clone(),
            html: render_listing(m, STYLESHEET),
        }))
        .collect();

    check_sources(&ctx.assets)?;

    Ok(SitePlan {
        documents,
        listings,
        document_models,
        pages,
    })
}

fn write_page(output_dir: &Path, page: &RenderedPage) -> Result<(), BuildError> {
    let path = output_dir.join(&page.path);
    let write_err = |source: std::io::Error| BuildError::WriteFailure {
        stage: Stage::Write,
        path: path.clone(),
        source,
    };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(write_err)?;
    }
    fs::write(&path, &page.html).map_err(write_err)?;
    debug!(path = %path.display(), "wrote page");
    Ok(())
}

/// Run the full pipeline and write the site to `ctx.output_dir`.
pub fn build(ctx: &BuildContext, renderer: &dyn MarkupRenderer) -> Result<BuildReport, BuildError> {
    let site = plan(ctx, renderer)?;

    fs::create_dir_all(&ctx.output_dir).map_err(|source| BuildError::WriteFailure {
        stage: Stage::Write,
        path: ctx.output_dir.clone(),
        source,
    })?;
    for page in &site.pages {
        write_page(&ctx.output_dir, page)?;
    }
    info!(
        documents = site.document_models.len(),
        listings = site.listings.len(),
        output = %ctx.output_dir.display(),
        "wrote pages"
    );

    let assets_copied = copy_assets(&ctx.assets, &ctx.output_dir)?;
    if assets_copied > 0 {
        info!(files = assets_copied, "copied static assets");
    }

    Ok(BuildReport {
        output_dir: ctx.output_dir.clone(),
        documents: site
            .document_models
            .iter()
            .map(|m| (m.title.clone(), m.output_path.clone()))
            .collect(),
        listings: site.listings.iter().map(|m| m.output_path.clone()).collect(),
        assets_copied,
    })
}
