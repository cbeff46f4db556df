mod commands;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use station_seo::{HeadSettings, StructuredDataBuilder};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "station-cli")]
#[command(about = "Station2290 structured data and page metadata tools")]
struct Cli {
    /// Site profile YAML; overrides `STATION_SITE_PATH`.
    #[arg(long, global = true)]
    site: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Print the JSON-LD record for a page kind
    Jsonld {
        /// restaurant, local-business, about or menu
        kind: String,
        /// Single-line JSON instead of indented output
        #[arg(long)]
        compact: bool,
        /// Wrap the JSON in a `<script type="application/ld+json">` element
        #[arg(long)]
        script: bool,
        /// Fail on unrecognized kinds instead of emitting the general profile
        #[arg(long)]
        strict: bool,
    },
    /// Print the rendered `<head>` fragment for a page
    Head { slug: String },
    /// List registered pages and their structured-data kinds
    Pages,
    /// Validate the site file and its page-kind wiring
    Check,
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = station_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let site_path = cli.site.unwrap_or_else(|| config.site_path.clone());

    let Some(command) = cli.command else {
        println!("station-cli ready; see --help for commands");
        return Ok(());
    };

    let output = match command {
        Commands::Jsonld {
            kind,
            compact,
            script,
            strict,
        } => commands::render_jsonld(
            &load_builder(&site_path)?,
            &kind,
            commands::JsonldOptions {
                compact,
                script,
                strict,
            },
        )?,
        Commands::Head { slug } => commands::render_head(
            &load_builder(&site_path)?,
            &HeadSettings::from(&config),
            &slug,
        )?,
        Commands::Pages => commands::render_pages(load_builder(&site_path)?.site()),
        Commands::Check => commands::check_site(&site_path)?.to_string(),
    };

    println!("{output}");
    Ok(())
}

fn load_builder(site_path: &Path) -> anyhow::Result<StructuredDataBuilder> {
    let (site, source) = station_core::load_site_or_builtin(site_path)?;
    tracing::debug!(source = %source, "site profile loaded");
    Ok(StructuredDataBuilder::new(site))
}
