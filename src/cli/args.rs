use clap::Parser;
use std::path::PathBuf;

use sheetnorm::ResampleFilter;
use sheetnorm::core::params::{
    DEFAULT_FRAME_SIZE, DEFAULT_GRID_SIZE, DEFAULT_INPUTS, DEFAULT_OUTPUT_DIR,
};

#[derive(Parser, Debug)]
#[command(name = "sheetnorm", version, about = "Resize sprite sheets to a square frame grid")]
pub struct CliArgs {
    /// Sprite sheets to normalize, processed in order
    #[arg(default_values = DEFAULT_INPUTS)]
    pub inputs: Vec<PathBuf>,

    /// Directory receiving the normalized sheets (created if missing)
    #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: PathBuf,

    /// Edge length of one animation frame in pixels
    #[arg(long, default_value_t = DEFAULT_FRAME_SIZE)]
    pub frame_size: u32,

    /// Number of frames per sheet row and column
    #[arg(long, default_value_t = DEFAULT_GRID_SIZE)]
    pub grid_size: u32,

    /// Resampling filter
    #[arg(long, value_enum, default_value_t = ResampleFilter::Lanczos3)]
    pub filter: ResampleFilter,

    /// JSON file with normalization parameters; replaces the flags above
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Enable logging (stderr; filter with RUST_LOG)
    #[arg(long, default_value_t = false)]
    pub log: bool,
}
