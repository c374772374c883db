//! # klingon-site
//!
//! Renders the Learn Klingon landing page to a static HTML file.
//!
//! ## Usage
//!
//! ```bash
//! # Render with site.toml (or defaults) to dist/index.html
//! klingon-site
//!
//! # Custom output, pinned copyright year
//! klingon-site --out public/index.html --year 2025
//!
//! # Only validate the content catalog
//! klingon-site --check
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};

use klingon_site::catalog::validate_catalog;
use klingon_site::clock::FixedClock;
use klingon_site::config::SiteConfig;
use klingon_site::menu::NavigationMenu;
use klingon_site::{render_default, render_page};

#[derive(Parser, Debug)]
#[command(name = "klingon-site")]
#[command(about = "Render the Learn Klingon landing page to static HTML")]
#[command(version)]
struct Args {
    /// Path to the site config (missing file means defaults)
    #[arg(long, default_value = "site.toml")]
    config: PathBuf,

    /// Output file (overrides `[output] path` from the config)
    #[arg(long)]
    out: Option<PathBuf>,

    /// Copyright year to render instead of the current year
    #[arg(long)]
    year: Option<i32>,

    /// Validate the content catalog and exit without rendering
    #[arg(long)]
    check: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn run(args: Args) -> Result<()> {
    validate_catalog().context("content catalog is invalid")?;
    if args.check {
        info!("content catalog OK");
        return Ok(());
    }

    let config = SiteConfig::load_from_path(&args.config)?;
    debug!(?config, "loaded site config");

    let html = match args.year {
        Some(year) => render_page(&config, NavigationMenu::new(), &FixedClock(year)),
        None => render_default(&config),
    };

    let out = args.out.unwrap_or_else(|| config.output.path.clone());
    if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    std::fs::write(&out, &html).with_context(|| format!("failed to write {}", out.display()))?;

    info!(path = %out.display(), bytes = html.len(), "page written");
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();

    // Logs go to stderr so stdout stays clean for piping
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| args.log_level.parse().unwrap_or_default()),
        )
        .init();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("[klingon-site] Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
