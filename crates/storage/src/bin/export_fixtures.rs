//! Write the built-in sample catalog as JSON, as a starting point for a
//! custom `--fixtures` file.

use std::path::PathBuf;

use clap::Parser;
use storage::FixtureCatalog;
use storage::json::render_catalog;

#[derive(Debug, Parser)]
#[command(name = "export-fixtures", about = "Export the sample catalog as JSON")]
struct Args {
    /// Output file; prints to stdout when omitted.
    #[arg(long, short)]
    out: Option<PathBuf>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let catalog = FixtureCatalog::build()?;
    let json = render_catalog(&catalog)?;

    match args.out {
        Some(path) => {
            if let Some(parent) = path.parent() {
                tokio::fs::create_dir_all(parent).await?;
            }
            tokio::fs::write(&path, json).await?;
            eprintln!("wrote {}", path.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}
