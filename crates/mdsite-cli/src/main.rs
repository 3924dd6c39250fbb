use anyhow::{Context, Result};
use clap::Parser;
use mdsite_config::Config;
use mdsite_engine::{Site, SiteConfig};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "mdsite")]
#[command(about = "Build a static HTML site from a folder of Markdown files")]
struct Cli {
    /// URL prefix for root-relative links (defaults to "/")
    basepath: Option<String>,

    /// Config file (defaults to ./mdsite.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory of Markdown sources
    #[arg(long)]
    content: Option<PathBuf>,

    /// HTML template containing {{ Title }} and {{ Content }}
    #[arg(long)]
    template: Option<PathBuf>,

    /// Output directory, cleared before each build
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Directory of static assets copied into the output
    #[arg(long = "static")]
    static_dir: Option<PathBuf>,
}

impl Cli {
    /// Command-line values win over the config file, which wins over defaults.
    fn into_site_config(self, config: Config) -> SiteConfig {
        SiteConfig {
            content_dir: self.content.unwrap_or(config.content_dir),
            template_path: self.template.unwrap_or(config.template_path),
            output_dir: self.output.unwrap_or(config.output_dir),
            static_dir: Some(self.static_dir.unwrap_or(config.static_dir)),
            basepath: self.basepath.unwrap_or(config.basepath),
        }
    }
}

fn load_config(path: Option<&PathBuf>) -> Result<Config> {
    let loaded = match path {
        Some(path) => {
            let config = Config::load_from_path(path)?;
            if config.is_none() {
                anyhow::bail!("Config file not found: {}", path.display());
            }
            config
        }
        None => Config::load()?,
    };

    match loaded {
        Some(config) => Ok(config),
        None => {
            log::info!(
                "No {} found, using defaults",
                Config::config_path().display()
            );
            Ok(Config::default())
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = load_config(cli.config.as_ref())?;
    let site_config = cli.into_site_config(config);
    log::debug!("Site config: {site_config:?}");

    let report = Site::new(&site_config).build().with_context(|| {
        format!(
            "Failed to build site into {}",
            site_config.output_dir.display()
        )
    })?;

    println!(
        "Built {} page(s), copied {} asset(s) into {}",
        report.pages.len(),
        report.assets.len(),
        site_config.output_dir.display()
    );
    Ok(())
}

fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
