//! # Site Generation
//!
//! Thin file-system layer around the compiler: every markdown file under a
//! content directory becomes an HTML page rendered through a [`Template`].

pub mod template;

pub use template::Template;

use relative_path::RelativePath;
use std::path::{Path, PathBuf};

use crate::compile::markdown_to_html;
use crate::error::{HtmlError, TitleError};
use crate::io::{self, IoError};
use crate::title::extract_title;

/// Why a single page could not be rendered.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PageError {
    #[error(transparent)]
    Html(#[from] HtmlError),
    #[error(transparent)]
    Title(#[from] TitleError),
}

#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    #[error("Failed to generate page from {path}: {source}")]
    Page { path: PathBuf, source: PageError },
    #[error(transparent)]
    Io(#[from] IoError),
}

/// Inputs for a full site build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub content_dir: PathBuf,
    pub template_path: PathBuf,
    pub output_dir: PathBuf,
    /// Copied verbatim into the output directory when it exists.
    pub static_dir: Option<PathBuf>,
    pub basepath: String,
}

/// What a build wrote.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildReport {
    pub pages: Vec<PathBuf>,
    pub assets: Vec<PathBuf>,
}

/// Renders one markdown source to a complete page.
pub fn render_page(markdown: &str, template: &Template, basepath: &str) -> Result<String, PageError> {
    let content = markdown_to_html(markdown)?;
    let title = extract_title(markdown)?;
    Ok(template.render(&title, &content, basepath))
}

/// Generates `dest` from the markdown file at `from`.
pub fn generate_page(
    from: &Path,
    template: &Template,
    dest: &Path,
    basepath: &str,
) -> Result<(), SiteError> {
    log::info!("Generating page from {} to {}", from.display(), dest.display());

    let markdown = io::read_file(from)?;
    let page = render_page(&markdown, template, basepath).map_err(|source| SiteError::Page {
        path: from.to_path_buf(),
        source,
    })?;
    io::write_file(dest, &page)?;
    Ok(())
}

/// Generates a page for every `.md` file under `content_dir`.
///
/// `a/b.md` is written to `dest_dir/a/b.html`. Returns the written paths in
/// sorted source order.
pub fn generate_pages_recursive(
    content_dir: &Path,
    template: &Template,
    dest_dir: &Path,
    basepath: &str,
) -> Result<Vec<PathBuf>, SiteError> {
    let mut written = Vec::new();
    for rel in io::scan_markdown_files(content_dir)? {
        let dest = html_path(&rel, dest_dir);
        generate_page(&rel.to_path(content_dir), template, &dest, basepath)?;
        written.push(dest);
    }
    Ok(written)
}

fn html_path(rel: &RelativePath, dest_dir: &Path) -> PathBuf {
    rel.with_extension("html").to_path(dest_dir)
}

/// Full build pipeline: clear output, copy static assets, generate pages.
pub struct Site<'a> {
    config: &'a SiteConfig,
}

impl<'a> Site<'a> {
    pub fn new(config: &'a SiteConfig) -> Self {
        Self { config }
    }

    pub fn build(&self) -> Result<BuildReport, SiteError> {
        let config = self.config;
        let template = Template::new(io::read_file(&config.template_path)?);

        io::clear_directory(&config.output_dir)?;

        let assets = match &config.static_dir {
            Some(dir) if dir.is_dir() => io::copy_directory(dir, &config.output_dir)?,
            Some(dir) => {
                log::warn!("Static directory {} not found, skipping", dir.display());
                Vec::new()
            }
            None => Vec::new(),
        };

        let pages = generate_pages_recursive(
            &config.content_dir,
            &template,
            &config.output_dir,
            &config.basepath,
        )?;

        log::info!(
            "Built {} page(s) and copied {} asset(s) into {}",
            pages.len(),
            assets.len(),
            config.output_dir.display()
        );
        Ok(BuildReport { pages, assets })
    }
}
