//! casebook — render catalogues of language edge-case notes.
//!
//! Two modes:
//!
//! - **stdin mode**: `casebook < cases.md`
//! - **file mode**: `casebook -o docs/out -f html notes/*.md`

use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use casebook::error::NotFoundError;
use casebook::{parser, render, Catalogue};

#[derive(Parser)]
#[command(
    name = "casebook",
    about = "Render language edge-case catalogues from structured markdown"
)]
struct Cli {
    /// Input files (glob patterns supported). If omitted, reads from stdin.
    files: Vec<String>,

    /// Output directory (required when rendering files)
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Output format: markdown (default), html, json
    #[arg(short = 'f', long, default_value = "markdown")]
    format: String,

    /// Render a single entry by exact title
    #[arg(short = 't', long)]
    title: Option<String>,

    /// List entry titles in document order and exit
    #[arg(long)]
    list: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.files.is_empty() {
        return stdin_mode(&cli);
    }

    file_mode(&cli)
}

/// stdin mode: read one catalogue from stdin, write to stdout.
fn stdin_mode(cli: &Cli) -> Result<()> {
    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .context("failed to read stdin")?;

    let catalogue = parser::load(&input).context("failed to parse catalogue")?;

    if cli.list {
        list_titles(&catalogue);
        return Ok(());
    }

    let renderer = render::create_renderer(&cli.format)?;
    match cli.title.as_deref() {
        Some(title) => {
            let entry = catalogue.find_by_title(title)?;
            print!("{}", renderer.render_entry(entry));
        }
        None => print!("{}", renderer.render(&catalogue)),
    }
    Ok(())
}

/// file mode: process multiple catalogues, write one output file each.
fn file_mode(cli: &Cli) -> Result<()> {
    let input_files = expand_globs(&cli.files)?;

    // --list and --title answer on stdout; no output directory involved
    if cli.list || cli.title.is_some() {
        return query_mode(cli, &input_files);
    }

    let output_dir = cli
        .output
        .as_deref()
        .context("--output is required when rendering files")?;

    fs::create_dir_all(output_dir)
        .with_context(|| format!("failed to create output directory: {}", output_dir.display()))?;

    let renderer = render::create_renderer(&cli.format)?;
    let ext = renderer.file_extension();

    for path in &input_files {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let catalogue = match parser::load(&content) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("warning: skipping {}: {}", path.display(), e);
                continue;
            }
        };
        // Skip documents with no entries (e.g. a README with only prose)
        if catalogue.is_empty() {
            continue;
        }

        let name = derive_output_name(&path.to_string_lossy());
        let out_path = output_dir.join(format!("{}.{}", name, ext));
        fs::write(&out_path, renderer.render(&catalogue))
            .with_context(|| format!("failed to write {}", out_path.display()))?;
    }

    Ok(())
}

/// Answer --list / --title queries over file inputs on stdout.
fn query_mode(cli: &Cli, input_files: &[PathBuf]) -> Result<()> {
    let renderer = render::create_renderer(&cli.format)?;

    for path in input_files {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let catalogue = parser::load(&content)
            .with_context(|| format!("failed to parse {}", path.display()))?;

        if cli.list {
            list_titles(&catalogue);
        } else if let Some(title) = cli.title.as_deref() {
            // first file that has the entry wins
            if let Ok(entry) = catalogue.find_by_title(title) {
                print!("{}", renderer.render_entry(entry));
                return Ok(());
            }
        }
    }

    if let Some(title) = cli.title.as_deref() {
        return Err(NotFoundError {
            title: title.to_string(),
        }
        .into());
    }
    Ok(())
}

fn list_titles(catalogue: &Catalogue) {
    for title in catalogue.list_titles() {
        println!("{}", title);
    }
}

/// File extensions recognized as catalogue sources.
const SUPPORTED_EXTENSIONS: &[&str] = &["md", "markdown", "mdx"];

/// Expand glob patterns into a list of real file paths.
/// Also handles bare directory paths by scanning for supported file types.
fn expand_globs(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for pattern in patterns {
        let path = Path::new(pattern);
        if path.is_file() {
            files.push(path.to_path_buf());
            continue;
        }
        // If it's a directory, scan for supported extensions (non-recursive)
        if path.is_dir() {
            let entries = fs::read_dir(path)
                .with_context(|| format!("failed to read directory: {}", path.display()))?;
            for entry in entries.flatten() {
                let p = entry.path();
                if p.is_file() {
                    if let Some(ext) = p.extension().and_then(|e| e.to_str()) {
                        if SUPPORTED_EXTENSIONS.contains(&ext) {
                            files.push(p);
                        }
                    }
                }
            }
            continue;
        }
        // Try as glob
        let matches: Vec<_> = glob::glob(pattern)
            .with_context(|| format!("invalid glob pattern: {}", pattern))?
            .filter_map(|r| r.ok())
            .filter(|p| p.is_file())
            .collect();
        if matches.is_empty() {
            eprintln!("warning: no files matched: {}", pattern);
        }
        files.extend(matches);
    }
    // Sort for deterministic output
    files.sort();
    files.dedup();
    Ok(files)
}

/// Derive the output file name (without extension) from a source path.
/// "notes/coercion.md" → "coercion"
fn derive_output_name(source: &str) -> String {
    let filename = source.rsplit('/').next().unwrap_or(source);
    filename
        .strip_suffix(".md")
        .or_else(|| filename.strip_suffix(".markdown"))
        .or_else(|| filename.strip_suffix(".mdx"))
        .unwrap_or(filename)
        .to_string()
}
