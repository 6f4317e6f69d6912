//! Slice a sprite sheet into individual frame images
//!
//! Usage:
//!   slice-sheet Imagesidescroller/Chatanimation.png output/chat --prefix chat
//!   slice-sheet Imagesidescroller/Chienanimation.png output/dog --prefix chien

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use cat_vs_dogs::slicer::{SliceOptions, slice_sheet};

#[derive(Parser)]
#[command(name = "slice-sheet")]
#[command(about = "Slice sprite sheets into numbered frames")]
struct Cli {
    /// Path to the sprite sheet
    image: PathBuf,
    /// Directory to save frames into (created if missing)
    output: PathBuf,
    /// Prefix for output image names
    #[arg(long, default_value = "frame")]
    prefix: String,
    /// Frame width in pixels
    #[arg(long, default_value_t = 256)]
    frame_width: u32,
    /// Frame height in pixels
    #[arg(long, default_value_t = 256)]
    frame_height: u32,
    /// Columns in the sheet
    #[arg(long, default_value_t = 6)]
    cols: u32,
    /// Rows in the sheet
    #[arg(long, default_value_t = 4)]
    rows: u32,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let options = SliceOptions {
        frame_width: cli.frame_width,
        frame_height: cli.frame_height,
        cols: cli.cols,
        rows: cli.rows,
        prefix: cli.prefix,
    };

    let written = slice_sheet(&cli.image, &cli.output, &options)
        .with_context(|| format!("Failed to slice {}", cli.image.display()))?;

    log::info!(
        "Wrote {} frames to {}",
        written.len(),
        cli.output.display()
    );
    Ok(())
}
