use clap::{Parser, Subcommand};
use docs_nav::nav::compose_nav;
use docs_nav::top_level::top_level_nav;
use docs_nav::{config, generate, output, scan};
use std::path::{Path, PathBuf};

fn version_string() -> &'static str {
    if env!("DOCS_NAV_ON_RELEASE_TAG") == "true" {
        return env!("CARGO_PKG_VERSION");
    }
    let hash = env!("DOCS_NAV_GIT_HASH");
    if hash.is_empty() {
        "dev@unknown"
    } else {
        // Called once at startup
        Box::leak(format!("dev@{hash}").into_boxed_str())
    }
}

#[derive(Parser)]
#[command(name = "docs-nav")]
#[command(about = "Sidebar navigation and static pages for documentation sites")]
#[command(long_about = "\
Sidebar navigation and static pages for documentation sites

Your filesystem is the data source. Directories become sidebar categories,
markdown files become pages, and numeric prefixes set the order.

Docs structure:

  docs/
  ├── config.toml                  # Site config (optional)
  ├── assets/                      # Ignored by the scanner
  ├── 01-getting-started/          # Category \"Getting Started\"
  │   ├── 01-installation.md       # Page, served at /docs/installation
  │   └── 02-release-notes.md
  └── 02-core-concepts/
      ├── 01-utility-first.md
      └── 02-dark-mode.md          # +++ published = false +++ hides it

Title resolution (first available wins):
  front matter title → first '# ' heading → slug (01-dark-mode → \"Dark Mode\")

Run 'docs-nav gen-config' to generate a documented config.toml.")]
#[command(version = version_string())]
struct Cli {
    /// Docs directory
    #[arg(long, default_value = "docs", global = true)]
    source: PathBuf,

    /// Output directory
    #[arg(long, default_value = "dist", global = true)]
    output: PathBuf,

    /// Directory for intermediate files (manifest)
    #[arg(long, default_value = ".docs-nav-temp", global = true)]
    temp_dir: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Scan the docs directory into a manifest
    Scan,
    /// Produce the HTML site from the manifest
    Generate,
    /// Run the full pipeline: scan → generate
    Build,
    /// Validate the docs directory without building
    Check,
    /// Resolve and print the sidebar for a route
    Nav {
        /// Route to resolve, e.g. /docs/01-getting-started/01-installation
        #[arg(long)]
        route: String,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Scan => {
            let manifest = scan::scan(&cli.source)?;
            write_manifest(&manifest, &cli.temp_dir)?;
            output::print_scan_output(&manifest, &cli.source);
        }
        Command::Generate => {
            let manifest_path = cli.temp_dir.join("manifest.json");
            let report = generate::generate(&manifest_path, &cli.output)?;
            output::print_generate_output(&report);
        }
        Command::Build => {
            println!("==> Stage 1: Scanning {}", cli.source.display());
            let manifest = scan::scan(&cli.source)?;
            write_manifest(&manifest, &cli.temp_dir)?;
            output::print_scan_output(&manifest, &cli.source);

            println!("==> Stage 2: Generating HTML → {}", cli.output.display());
            let report = generate::generate_site(&manifest, &cli.output)?;
            output::print_generate_output(&report);

            println!("==> Build complete: {}", cli.output.display());
        }
        Command::Check => {
            println!("==> Checking {}", cli.source.display());
            let manifest = scan::scan(&cli.source)?;
            output::print_scan_output(&manifest, &cli.source);
            println!("==> Docs are valid");
        }
        Command::Nav { route, json } => {
            let manifest = scan::scan(&cli.source)?;
            let ctx = manifest.config.sidebar_context(manifest.category_map());
            let top_level = top_level_nav(&ctx, &route);
            let groups = compose_nav(&ctx, &route);
            if json {
                let value = serde_json::json!({
                    "route": route,
                    "top_level": top_level,
                    "groups": groups,
                });
                println!("{}", serde_json::to_string_pretty(&value)?);
            } else {
                output::print_nav_output(&route, &top_level, &groups);
            }
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

fn write_manifest(manifest: &scan::Manifest, temp_dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
    std::fs::create_dir_all(temp_dir)?;
    let json = serde_json::to_string_pretty(manifest)?;
    std::fs::write(temp_dir.join("manifest.json"), json)?;
    Ok(())
}
