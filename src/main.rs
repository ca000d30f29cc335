//! Folio CLI
//!
//! Command-line companion for the portfolio page:
//! - Serve the site directory for local development
//! - Check that the page data loads and renders
//! - Generate a default config file

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::rc::Rc;

use folio::bootstrap::{Bootstrap, BuildReport};
use folio::config::{generate_default_config, Config};
use folio::loader::{DirFetch, Fetch, HttpFetch};
use folio::render::{MemoryDom, Mount};

#[derive(Parser)]
#[command(name = "folio")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Serve and check a personal portfolio page")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: ~/.config/folio/config.toml or ./folio.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Site directory, overriding the configured one
    #[arg(long, global = true)]
    pub site: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Serve the site directory over HTTP
    Serve {
        /// Host to bind to
        #[arg(long)]
        host: Option<String>,
        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Load the page data and render it without a browser
    Check {
        /// Load from a running site instead of the site directory
        #[arg(long)]
        url: Option<String>,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };
    if let Some(site) = &cli.site {
        config.site.root = site.display().to_string();
    }

    folio::logging::init(&config.logging);

    match cli.command {
        Commands::Serve { host, port } => {
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }
            folio::server::serve(PathBuf::from(&config.site.root).as_path(), &config.server)
                .await?;
        }

        Commands::Check { url } => {
            let passed = match url {
                Some(url) => {
                    let fetch = HttpFetch::new(&url).with_context(|| format!("Invalid URL {}", url))?;
                    check(fetch, config).await
                }
                None => check(DirFetch::new(&config.site.root), config).await,
            };
            if !passed {
                std::process::exit(1);
            }
        }

        Commands::Config { output } => {
            let content = generate_default_config();
            match output {
                Some(path) => {
                    std::fs::write(&path, content)
                        .with_context(|| format!("Failed to write {}", path.display()))?;
                    println!("Config written to {}", path.display());
                }
                None => print!("{}", content),
            }
        }
    }

    Ok(())
}

/// Run the page bootstrap against an in-memory document and print a report
async fn check<F: Fetch>(fetch: F, config: Config) -> bool {
    let dom = Rc::new(MemoryDom::portfolio_page());
    let bootstrap = Bootstrap::new(fetch, dom.clone(), config);

    match bootstrap.run().await {
        Ok(report) => {
            print_report(&report, &dom);
            report.is_complete()
        }
        Err(e) => {
            eprintln!("✗ Page data failed to load: {}", e);
            false
        }
    }
}

fn print_report(report: &BuildReport, dom: &MemoryDom) {
    let state = &report.state;

    println!("Biography");
    println!("  headshot: {}", state.biography.headshot);
    println!("  about me: {} characters", state.biography.about_me.chars().count());
    println!();

    println!("Projects ({})", state.projects.len());
    for project in &state.projects {
        let defaults = project.fields_at_default();
        if defaults.is_empty() {
            println!("  {:<20} {}", project.project_id, project.project_name);
        } else {
            println!(
                "  {:<20} {}  (defaults: {})",
                project.project_id,
                project.project_name,
                defaults.join(", ")
            );
        }
    }
    for id in state.projects.duplicate_ids() {
        println!("  ! duplicate project_id {:?}; cards after the first are unreachable", id);
    }
    println!();

    println!("Initial spotlight");
    for node in dom.children(Mount::SpotlightTitles) {
        println!("  {}", node);
    }
    println!();

    match &report.projects {
        Ok(()) => println!("✓ Projects section"),
        Err(e) => println!("✗ {}", e),
    }
    match &report.contact_form {
        Ok(()) => println!("✓ Contact form"),
        Err(e) => println!("✗ Contact form: {}", e),
    }
}
