use clap::{Parser, Subcommand};
use sitelab::config::SiteConfig;
use sitelab::field::Field;
use sitelab::tier::Tier;
use sitelab::{generate, output, preview, store};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "sitelab")]
#[command(about = "A tiered, single-page website builder for classroom use")]
#[command(long_about = "\
A tiered, single-page website builder for classroom use

Your site is one record of typed fields (colors, sizes, text, image URLs)
saved as a JSON blob. Edit fields one at a time, preview the result at your
difficulty tier, and export a standalone HTML document when you are done.

Tiers gate what the editor exposes:

  basic         titles, text, colors, images
  intermediate  fonts, alignment, borders, font weight
  advanced      layout sizes, spacing, shadows, rotation

The preview simplifies locked styling to a plain baseline; the export always
contains everything you have ever set, whatever the current tier.

Run 'sitelab fields' to see every field, its current value, and the tier
that unlocks it.")]
#[command(version)]
struct Cli {
    /// Path of the saved site record
    #[arg(long, default_value = "site.json", global = true)]
    store: PathBuf,

    /// Difficulty tier for this run (basic, intermediate, advanced); not persisted
    #[arg(long, default_value = "basic", global = true)]
    tier: Tier,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Store a new value for one field
    Set { field: Field, value: String },
    /// Print the stored value of one field
    Get { field: Field },
    /// List every field with its value, tier, and teaching notes
    Fields,
    /// Render the standalone HTML document (full stored configuration)
    Export {
        /// Write here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Render the tier-aware preview document
    Preview {
        /// Write here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Restore every field to its default value
    Reset {
        /// Actually wipe the stored record
        #[arg(long)]
        yes: bool,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Set { field, value } => {
            let config = store::load(&cli.store);
            let config = config.with(field, value.as_str());
            store::save(&cli.store, &config)?;
            output::print_set(field, &value, cli.tier);
        }
        Command::Get { field } => {
            let config = store::load(&cli.store);
            println!("{}", config.get(field));
        }
        Command::Fields => {
            let config = store::load(&cli.store);
            output::print_fields(&config, cli.tier);
        }
        Command::Export { output: target } => {
            let config = store::load(&cli.store);
            let doc = generate::render(&config, cli.tier);
            emit("Export", &doc, target.as_deref())?;
        }
        Command::Preview { output: target } => {
            let config = store::load(&cli.store);
            let doc = preview::document(&config, cli.tier);
            emit("Preview", &doc, target.as_deref())?;
        }
        Command::Reset { yes } => {
            if yes {
                store::save(&cli.store, &SiteConfig::default())?;
                println!("Every field restored to its default value.");
            } else {
                output::print_reset_warning();
            }
        }
    }

    Ok(())
}

/// Write a rendered document to the target file, or print it when no
/// target is given.
fn emit(
    label: &str,
    doc: &str,
    target: Option<&std::path::Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    match target {
        Some(path) => {
            std::fs::write(path, doc)?;
            output::print_written(label, path, doc.len());
        }
        None => println!("{doc}"),
    }
    Ok(())
}
