//! pdftoc CLI - derive title and heading outlines from PDF documents

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;

use pdftoc::{
    outline_file_with_options, to_json, HeadingPolicy, JsonFormat, OutlineOptions, ParseOptions,
};

#[derive(Parser)]
#[command(name = "pdftoc")]
#[command(author = "iyulab")]
#[command(version)]
#[command(about = "Derive a title and heading outline from PDF layout", long_about = None)]
struct Cli {
    /// Input PDF file, or a directory of PDFs for batch processing
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Output file (file input) or directory (directory input)
    #[arg(value_name = "OUTPUT")]
    output: Option<PathBuf>,

    /// Heading classification policy
    #[arg(long, value_enum, default_value = "strict")]
    policy: Policy,

    /// Output compact JSON
    #[arg(long)]
    compact: bool,

    /// Skip pages that fail to parse instead of failing the document
    #[arg(long)]
    lenient_parse: bool,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Policy {
    /// Numbering/size-gated rules, levels from numbering or size rank
    Strict,
    /// Coarse word-count/bold rules, for form-like documents
    Lenient,
}

impl From<Policy> for HeadingPolicy {
    fn from(policy: Policy) -> Self {
        match policy {
            Policy::Strict => HeadingPolicy::Strict,
            Policy::Lenient => HeadingPolicy::Lenient,
        }
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let parse_options = if cli.lenient_parse {
        ParseOptions::new().lenient()
    } else {
        ParseOptions::new()
    };
    let outline_options = OutlineOptions::new().with_policy(cli.policy.into());
    let format = if cli.compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };

    let result = if cli.input.is_dir() {
        cmd_batch(
            &cli.input,
            cli.output.as_deref(),
            &parse_options,
            &outline_options,
            format,
        )
    } else {
        cmd_single(
            &cli.input,
            cli.output.as_deref(),
            &parse_options,
            &outline_options,
            format,
        )
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn cmd_single(
    input: &Path,
    output: Option<&Path>,
    parse_options: &ParseOptions,
    outline_options: &OutlineOptions,
    format: JsonFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let outline = outline_file_with_options(input, parse_options.clone(), outline_options)?;
    let json = to_json(&outline, format)?;

    if let Some(path) = output {
        fs::write(path, &json)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", json);
    }

    Ok(())
}

fn cmd_batch(
    input_dir: &Path,
    output: Option<&Path>,
    parse_options: &ParseOptions,
    outline_options: &OutlineOptions,
    format: JsonFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut inputs: Vec<PathBuf> = fs::read_dir(input_dir)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| {
            path.extension()
                .and_then(|e| e.to_str())
                .is_some_and(|e| e.eq_ignore_ascii_case("pdf"))
        })
        .collect();
    inputs.sort();

    if inputs.is_empty() {
        println!("{}", "No PDF files found".yellow());
        return Ok(());
    }

    let output_dir = output
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|| input_dir.join("outline"));
    fs::create_dir_all(&output_dir)?;

    let pb = ProgressBar::new(inputs.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("#>-"),
    );

    // Documents are independent: one worker per document, nothing shared
    let failures: Vec<(PathBuf, String)> = inputs
        .par_iter()
        .filter_map(|path| {
            let result = process_one(path, &output_dir, parse_options, outline_options, format);
            pb.inc(1);
            result.err().map(|e| (path.clone(), e))
        })
        .collect();

    pb.finish_and_clear();

    let processed = inputs.len() - failures.len();
    println!(
        "{} {} of {} documents",
        "Processed".green().bold(),
        processed,
        inputs.len()
    );

    for (path, err) in &failures {
        eprintln!(
            "{} {}: {}",
            "Failed".red().bold(),
            path.display(),
            err
        );
    }

    if processed == 0 {
        return Err("all documents failed".into());
    }

    Ok(())
}

fn process_one(
    input: &Path,
    output_dir: &Path,
    parse_options: &ParseOptions,
    outline_options: &OutlineOptions,
    format: JsonFormat,
) -> Result<(), String> {
    let outline = outline_file_with_options(input, parse_options.clone(), outline_options)
        .map_err(|e| e.to_string())?;
    let json = to_json(&outline, format).map_err(|e| e.to_string())?;

    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string());
    let out_path = output_dir.join(format!("{stem}.json"));

    fs::write(&out_path, &json).map_err(|e| e.to_string())?;
    log::debug!("wrote {}", out_path.display());

    Ok(())
}
