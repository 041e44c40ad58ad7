//! Command-line image re-compressor.
//!
//! Decodes an input image, prints its metadata, and re-encodes it to the
//! output path at the requested quality, with the output format chosen
//! from the output path's extension. PNG output is handed to `optipng`
//! when the executable is available on the path.
//!
//! Exit code 0 on success; 1 on missing arguments, decode failure, or
//! save failure.

use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::error::ErrorKind;
use clap::Parser;
use pixpress_core::{decode_image, save_image, OptiPng, PngPostProcessor};

#[derive(Parser)]
#[command(name = "pixpress")]
#[command(about = "Re-encode an image as JPEG or PNG at a chosen quality")]
#[command(version)]
struct Cli {
    /// Input image file (format detected from content)
    input: PathBuf,

    /// Output image file; format chosen by extension (.jpg, .jpeg, .png)
    output: PathBuf,

    /// JPEG quality, 1-100
    quality: u8,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // --help and --version are not failures
            let code = match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::FAILURE,
            };
            let _ = err.print();
            return code;
        }
    };

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let bytes = fs::read(&cli.input)
        .with_context(|| format!("Failed to read input file: {}", cli.input.display()))?;
    let image = decode_image(&bytes)
        .with_context(|| format!("Failed to load image: {}", cli.input.display()))?;

    println!("Image loaded!");
    println!("Image width: {}", image.width);
    println!("Image height: {}", image.height);
    println!("Image channels: {}", image.layout.channel_count());

    // Probe for the PNG optimizer once; absence degrades to a warning
    let optimizer = OptiPng::detect();
    save_image(
        &cli.output,
        &image,
        cli.quality,
        optimizer.as_ref().map(|o| o as &dyn PngPostProcessor),
    )
    .context("Failed to save compressed image")?;

    println!("Original image extension: {}", raw_extension(&cli.input));
    println!("Original image size: {} KiB", file_size_kib(&cli.input));
    println!("Compressed image size: {} KiB", file_size_kib(&cli.output));

    Ok(())
}

/// Extension of `path` as written, without the dot; empty when absent.
fn raw_extension(path: &Path) -> &str {
    path.extension().and_then(OsStr::to_str).unwrap_or("")
}

/// File size in whole kibibytes, truncating; 0 when the file can't be
/// queried.
fn file_size_kib(path: &Path) -> u64 {
    fs::metadata(path).map(|meta| meta.len() / 1024).unwrap_or(0)
}
