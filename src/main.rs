//! CLI entry point for gols

use std::path::PathBuf;
use std::process;

use clap::Parser;
use gols::{Format, build_tree};

#[derive(Parser, Debug)]
#[command(name = "gols")]
#[command(about = "List a directory tree as text, JSON, or YAML")]
#[command(version)]
struct Args {
    /// The path to the directory to list
    #[arg(long)]
    path: PathBuf,

    /// List subdirectories recursively
    #[arg(long)]
    recursive: bool,

    /// Output format: text, json, yaml
    #[arg(long, value_name = "FORMAT", default_value = "text")]
    output: String,
}

fn main() {
    let args = Args::parse();

    // Format validation happens before the walk so a bad --output never
    // produces partial tree output.
    let format = match Format::from_name(&args.output) {
        Some(f) => f,
        None => {
            println!("Invalid output format provided.");
            process::exit(1);
        }
    };

    let root = if args.path.is_absolute() {
        args.path.clone()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(&args.path)
    };

    let entries = match build_tree(&root, args.recursive) {
        Ok(entries) => entries,
        Err(e) => {
            eprintln!("gols: {}", e);
            process::exit(1);
        }
    };

    let stdout = std::io::stdout();
    if let Err(e) = format.render(&entries, &root, &mut stdout.lock()) {
        eprintln!("gols: error writing output: {}", e);
        process::exit(1);
    }
}
