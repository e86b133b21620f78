use clap::{Parser, Subcommand};
use folio_check::{catalog, config, output};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "folio-check")]
#[command(about = "Front-matter schema checker for artwork portfolio catalogs")]
#[command(long_about = "\
Front-matter schema checker for artwork portfolio catalogs

Each .mdx (or .md) file under the content directory is one artwork: a
YAML front-matter block followed by a free-text body. folio-check loads
every file, validates the record, and verifies that referenced image
assets exist under the assets root.

Catalog structure:

  catalog/
  ├── folio-check.toml             # Checker config (optional)
  ├── content/works/
  │   ├── first-light.mdx          # One artwork per file
  │   └── tide-studies.mdx
  └── public/
      └── images/
          └── first-light.jpg      # Referenced as /images/first-light.jpg

Validation rules:
  title, slug    non-empty
  year           1900-2100 inclusive
  images         at least one entry; every entry needs src and alt
  process        every entry needs src and alt

Run 'folio-check gen-config' to generate a documented folio-check.toml.")]
#[command(version)]
struct Cli {
    /// Catalog root directory
    #[arg(long, default_value = ".", global = true)]
    root: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Load and validate every work in the catalog
    Check,
    /// Check the catalog and write the loaded records as a JSON manifest
    Scan {
        /// Manifest output path
        #[arg(long, default_value = "catalog.json")]
        manifest: PathBuf,
    },
    /// Print a stock folio-check.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Check => {
            let catalog = scan_catalog(&cli.root)?;
            output::print_check_output(&catalog);
            if !catalog.is_clean() {
                std::process::exit(1);
            }
        }
        Command::Scan { manifest } => {
            let catalog = scan_catalog(&cli.root)?;
            let json = serde_json::to_string_pretty(&catalog)?;
            std::fs::write(&manifest, json)?;
            output::print_check_output(&catalog);
            println!("Manifest: {}", manifest.display());
            if !catalog.is_clean() {
                std::process::exit(1);
            }
        }
        Command::GenConfig => {
            print!("{}", config::stock_config());
        }
    }

    Ok(())
}

fn scan_catalog(root: &Path) -> Result<catalog::Catalog, Box<dyn std::error::Error>> {
    let config = config::load_config(root)?;
    let content_dir = root.join(&config.content_dir);
    let assets_root = root.join(&config.assets_root);
    Ok(catalog::scan(&content_dir, &assets_root)?)
}
