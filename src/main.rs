//! sectile: flatten markdown sections into records and back.
#![allow(clippy::multiple_crate_versions)]

use clap::{Parser, Subcommand};
use sectile::section::Section;
use sectile::{config, parser, serializer};
use std::ffi::OsStr;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "sectile")]
#[command(about = "Flatten markdown sections into records and back", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Flatten a markdown document into a JSON record list
    Extract {
        /// Markdown document to read
        #[arg(value_name = "PATH")]
        path: PathBuf,

        /// Where to write the record list (defaults to PATH with a .json extension)
        #[arg(long, short)]
        output: Option<PathBuf>,

        /// Deepest heading level treated as structure
        #[arg(long, value_name = "LEVEL")]
        depth: Option<usize>,
    },
    /// Rebuild a markdown document from a JSON record list
    Reconstruct {
        /// Record list to read
        #[arg(value_name = "PATH")]
        path: PathBuf,

        /// Where to write the document (defaults to PATH's stem plus `_reconstructed.md`)
        #[arg(long, short)]
        output: Option<PathBuf>,

        /// Deepest heading level emitted as structure
        #[arg(long, value_name = "LEVEL")]
        depth: Option<usize>,
    },
}

fn main() -> io::Result<()> {
    let args = Args::parse();
    let cfg = config::Config::load();

    match args.command {
        Command::Extract {
            path,
            output,
            depth,
        } => extract(&path, output, depth.unwrap_or(cfg.max_depth), cfg.pretty),
        Command::Reconstruct {
            path,
            output,
            depth,
        } => reconstruct(&path, output, depth.unwrap_or(cfg.max_depth)),
    }
}

/// Read a markdown document and write its record list as JSON.
fn extract(path: &Path, output: Option<PathBuf>, depth: usize, pretty: bool) -> io::Result<()> {
    let text = fs::read_to_string(path)?;
    let records = parser::parse_with_depth(&text, depth);

    let json = if pretty {
        serde_json::to_string_pretty(&records)
    } else {
        serde_json::to_string(&records)
    }
    .map_err(io::Error::other)?;

    let out = output.unwrap_or_else(|| path.with_extension("json"));
    fs::write(&out, json)?;

    println!("Extraction complete. Output saved to {}", out.display());
    Ok(())
}

/// Read a JSON record list and write the rebuilt markdown document.
fn reconstruct(path: &Path, output: Option<PathBuf>, depth: usize) -> io::Result<()> {
    let text = fs::read_to_string(path)?;
    let records: Vec<Section> =
        serde_json::from_str(&text).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

    let doc = serializer::serialize_with_depth(&records, depth);

    let out = output.unwrap_or_else(|| reconstructed_path(path));
    fs::write(&out, doc)?;

    println!("Reconstruction complete. Output saved to {}", out.display());
    Ok(())
}

/// Default destination for a rebuilt document: `<stem>_reconstructed.md`.
fn reconstructed_path(path: &Path) -> PathBuf {
    let stem = path
        .file_stem()
        .map_or_else(|| "output".into(), OsStr::to_string_lossy);
    path.with_file_name(format!("{stem}_reconstructed.md"))
}

#[cfg(test)]
#[path = "tests/main.rs"]
mod tests;
