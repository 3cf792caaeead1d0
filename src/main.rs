//! Slide Mockups CLI
//!
//! Usage:
//!   slide-mockups [OPTIONS]
//!
//! Options:
//!   -o, --output <DIR>      Output directory [default: img/svg_mockups]
//!   -p, --palette <FILE>    Palette file overriding the default colors (TOML)
//!       --only <SLIDE>      Write a single slide, by index or label
//!       --stdout            Print the --only slide instead of writing it
//!       --list              Show the slide catalog
//!   -v, --verbose           Log every rendered slide
//!   -h, --help              Print help

use std::path::PathBuf;

use clap::Parser;
use log::debug;
use thiserror::Error;

use slide_mockups::{
    render_slide, GenerateError, Generator, SlideCategory, WrittenSlide, DEFAULT_OUTPUT_DIR,
};

#[derive(Parser)]
#[command(name = "slide-mockups")]
#[command(about = "Generate SVG mockups of keynote-style slide templates")]
struct Cli {
    /// Output directory
    #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
    output: PathBuf,

    /// Palette file overriding the default colors (TOML format)
    #[arg(short, long)]
    palette: Option<PathBuf>,

    /// Write a single slide, given by index (e.g. 9) or label (e.g. timeline)
    #[arg(long, value_name = "SLIDE", allow_hyphen_values = true)]
    only: Option<String>,

    /// Print the selected slide to stdout instead of writing a file
    #[arg(long, requires = "only")]
    stdout: bool,

    /// Show the slide catalog and exit
    #[arg(long)]
    list: bool,

    /// Log every rendered slide
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Error)]
enum CliError {
    #[error("unknown slide '{0}' (expected an index or a label from --list)")]
    UnknownSlide(String),

    #[error(transparent)]
    Generate(#[from] GenerateError),
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    if cli.list {
        print_catalog();
        return Ok(());
    }

    let mut generator = Generator::new(&cli.output);
    if let Some(path) = &cli.palette {
        generator = generator.with_palette_file(path)?;
    }

    if let Some(selector) = &cli.only {
        let index = parse_selector(selector)?;
        if cli.stdout {
            print!("{}", render_slide(index, generator.palette()));
            return Ok(());
        }
        let written = generator.write_one(index)?;
        print_created(&written);
        return Ok(());
    }

    println!(
        "Generating SVG mockups in {}/...",
        generator.output_dir().display()
    );
    let report = generator.run(print_created)?;
    debug!(
        "wrote {} bytes across {} files",
        report.total_bytes(),
        report.count()
    );
    println!();
    println!("✓ Successfully generated {} SVG mockups!", report.count());
    Ok(())
}

/// Resolve `--only`: a number is taken as an index, anything else as a label
fn parse_selector(selector: &str) -> Result<u32, CliError> {
    if let Ok(index) = selector.parse::<u32>() {
        return Ok(index);
    }
    SlideCategory::from_label(selector)
        .map(SlideCategory::index)
        .ok_or_else(|| CliError::UnknownSlide(selector.to_string()))
}

fn print_created(written: &WrittenSlide) {
    println!("  Created: {}", written.filename);
}

fn print_catalog() {
    for category in SlideCategory::ALL {
        println!(
            "{:03}  {:<20}{}",
            category.index(),
            category.label(),
            category.title()
        );
    }
}
