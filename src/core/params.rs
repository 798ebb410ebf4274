use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::types::ResampleFilter;

pub const DEFAULT_INPUTS: [&str; 3] = ["assets/bird1.png", "assets/bird2.png", "assets/bird3.png"];
pub const DEFAULT_OUTPUT_DIR: &str = "normalized_sheets";
/// Edge length of one animation frame, in pixels
pub const DEFAULT_FRAME_SIZE: u32 = 40;
/// Frames per row and per column of a sheet
pub const DEFAULT_GRID_SIZE: u32 = 4;

/// Normalization parameters suitable for config files and CLI flags
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizeParams {
    pub inputs: Vec<PathBuf>,
    pub output_dir: PathBuf,
    pub frame_size: u32,
    pub grid_size: u32,
    pub filter: ResampleFilter,
}

impl Default for NormalizeParams {
    fn default() -> Self {
        Self {
            inputs: DEFAULT_INPUTS.iter().map(PathBuf::from).collect(),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            frame_size: DEFAULT_FRAME_SIZE,
            grid_size: DEFAULT_GRID_SIZE,
            filter: ResampleFilter::default(),
        }
    }
}

impl NormalizeParams {
    /// Square output edge: one frame times the grid dimension.
    ///
    /// Saturates on overflow; `validate` rejects such sizes.
    pub fn target_size(&self) -> (u32, u32) {
        let edge = self.frame_size.saturating_mul(self.grid_size);
        (edge, edge)
    }

    pub fn validate(&self) -> Result<()> {
        if self.frame_size == 0 {
            return Err(Error::ZeroSize { arg: "frame_size" });
        }
        if self.grid_size == 0 {
            return Err(Error::ZeroSize { arg: "grid_size" });
        }
        if self.frame_size.checked_mul(self.grid_size).is_none() {
            return Err(Error::InvalidArgument {
                arg: "frame_size*grid_size",
                value: format!("{}*{}", self.frame_size, self.grid_size),
            });
        }
        if self.inputs.is_empty() {
            return Err(Error::MissingArgument {
                arg: "inputs".to_string(),
            });
        }
        Ok(())
    }

    /// Load parameters from a JSON file; absent fields keep their defaults
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let params: NormalizeParams = serde_json::from_str(&text)?;
        Ok(params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_target_160_square() {
        let params = NormalizeParams::default();
        assert_eq!(params.target_size(), (160, 160));
        assert_eq!(params.inputs.len(), 3);
        assert_eq!(params.inputs[0], PathBuf::from("assets/bird1.png"));
        assert_eq!(params.output_dir, PathBuf::from("normalized_sheets"));
        assert!(params.validate().is_ok());
    }

    #[test]
    fn zero_sizes_are_rejected() {
        let params = NormalizeParams {
            frame_size: 0,
            ..NormalizeParams::default()
        };
        assert!(matches!(
            params.validate(),
            Err(Error::ZeroSize { arg: "frame_size" })
        ));

        let params = NormalizeParams {
            grid_size: 0,
            ..NormalizeParams::default()
        };
        assert!(matches!(
            params.validate(),
            Err(Error::ZeroSize { arg: "grid_size" })
        ));
    }

    #[test]
    fn oversized_grid_saturates_and_is_rejected() {
        let params = NormalizeParams {
            frame_size: u32::MAX,
            grid_size: 2,
            ..NormalizeParams::default()
        };
        assert_eq!(params.target_size(), (u32::MAX, u32::MAX));
        assert!(matches!(
            params.validate(),
            Err(Error::InvalidArgument { .. })
        ));
    }

    #[test]
    fn empty_inputs_are_rejected() {
        let params = NormalizeParams {
            inputs: vec![],
            ..NormalizeParams::default()
        };
        assert!(matches!(
            params.validate(),
            Err(Error::MissingArgument { .. })
        ));
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let params: NormalizeParams =
            serde_json::from_str(r#"{ "frame_size": 32, "filter": "mitchell" }"#).unwrap();
        assert_eq!(params.target_size(), (128, 128));
        assert_eq!(params.filter, ResampleFilter::Mitchell);
        assert_eq!(params.output_dir, PathBuf::from(DEFAULT_OUTPUT_DIR));
    }
}
