use clap::{Parser, Subcommand};
use proof_gal::{config, generate, output};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "proof-gal")]
#[command(about = "Single-page gallery builder for transaction screenshots")]
#[command(long_about = "\
Single-page gallery builder for transaction screenshots

Images are ordered by the number in front of ' TRANS' in their filename.
Descriptions and totals come from optional plain-text files.

Gallery layout:

  ./
  ├── gallery.toml              # Optional config (see gen-config)
  ├── images/
  │   ├── 1 TRANS paypal.png     # Sorted by the leading number
  │   ├── 2 TRANS bank.jpg
  │   └── screenshot.jpg        # No number → left out
  ├── descriptions.txt          # '1 TRANS paypal|Paid via PayPal'
  ├── changes.txt               # 'Total Transactions Done: 42'
  │                             # 'Total Money Sold: $100'
  ├── background.mp4            # Optional background video
  └── index.html                # Generated

Set RUST_LOG=debug to see every skipped file and malformed line.")]
#[command(version)]
struct Cli {
    /// Gallery root directory (holds gallery.toml and the configured paths)
    #[arg(long, default_value = ".", global = true)]
    root: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Scan images and side files, then write the gallery page
    Build,
    /// Show what would be built without writing anything
    Check,
    /// Print the resolved gallery (entries and stats) as JSON
    Scan,
    /// Print a stock gallery.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::Build => {
            let config = config::load_config(&cli.root)?;
            let image_dir = config.paths.resolve(&cli.root).image_dir;
            let report = generate::generate(&cli.root, &config)?;
            output::print_gallery_output(&report.gallery, &image_dir);
            println!();
            output::print_generate_output(&report);
        }
        Command::Check => {
            let config = config::load_config(&cli.root)?;
            let paths = config.paths.resolve(&cli.root);
            let gallery = generate::load_gallery(&paths)?;
            output::print_gallery_output(&gallery, &paths.image_dir);
        }
        Command::Scan => {
            let config = config::load_config(&cli.root)?;
            let gallery = generate::load_gallery(&config.paths.resolve(&cli.root))?;
            println!("{}", serde_json::to_string_pretty(&gallery)?);
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// Diagnostics go to stderr so stdout stays clean for `scan` JSON.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
