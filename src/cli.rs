//! Command-line argument parsing for the sheet previewer
//!
//! Supports:
//! - Choosing the bound position and the switchable set
//! - Title and footer text
//! - Dumping the composed tree as JSON
//! - Rendering a PNG preview

use clap::Parser;
use std::path::PathBuf;

use crate::config::SheetConfig;
use crate::error::SheetError;
use crate::model::SheetPosition;

/// Preview a bottom sheet layout
#[derive(Parser, Debug)]
#[command(name = "token-sheet", version, about = "Preview a bottom sheet layout")]
pub struct CliArgs {
    /// Bound position: hidden, dynamic, full, <n>px or a fraction like 0.4
    #[arg(short, long, default_value = "0.4")]
    pub position: SheetPosition,

    /// Positions the sheet may switch between, comma separated
    #[arg(long, value_delimiter = ',', default_value = "hidden,0.4,full")]
    pub switchable: Vec<SheetPosition>,

    /// Header title (no header when omitted)
    #[arg(short, long)]
    pub title: Option<String>,

    /// Footer text (no footer when omitted)
    #[arg(long)]
    pub footer: Option<String>,

    /// Viewport width in pixels
    #[arg(long, default_value_t = 480)]
    pub width: u32,

    /// Viewport height in pixels
    #[arg(long, default_value_t = 800)]
    pub height: u32,

    /// Sheet config file (defaults to ~/.config/token-sheet/sheet.yaml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Tap the drag indicator N times before rendering
    #[arg(long, value_name = "N", default_value_t = 0)]
    pub taps: usize,

    /// Print the composed view tree as JSON
    #[arg(long)]
    pub dump_tree: bool,

    /// Write a PNG preview to PATH
    #[arg(short, long, value_name = "PATH")]
    pub out: Option<PathBuf>,
}

impl CliArgs {
    /// Config from `--config`, or the user's config file with defaults
    pub fn load_config(&self) -> Result<SheetConfig, SheetError> {
        match &self.config {
            Some(path) => SheetConfig::load_from(path),
            None => Ok(SheetConfig::load()),
        }
    }
}
