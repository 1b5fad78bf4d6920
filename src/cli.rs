// cli.rs - Command-line interface configuration
use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(name = "grid-layer")]
#[command(about = "Render a demo grid through a render context", long_about = None)]
pub struct Cli {
    /// Renderer config (JSON). Defaults to one 800x600 target.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Grid columns
    #[arg(long, default_value_t = 4)]
    pub cols: u32,

    /// Grid rows
    #[arg(long, default_value_t = 4)]
    pub rows: u32,

    /// Target index to draw into
    #[arg(long, default_value_t = 0)]
    pub idx: u32,

    /// Logical viewport width
    #[arg(long, default_value_t = 800.0)]
    pub width: f32,

    /// Logical viewport height
    #[arg(long, default_value_t = 600.0)]
    pub height: f32,

    /// Submit an unsized, unconfigured context before the real one
    #[arg(long)]
    pub warmup: bool,

    /// Print the frame report as JSON
    #[arg(long)]
    pub report: bool,
}
