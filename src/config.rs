//! Parameter bundle for a run.
//!
//! Everything is compiled in; there are no command-line flags. The defaults
//! reproduce the antenna demo:
//! - `sample_count` = 10 reads of the sampler,
//! - `label` = "Example - Antenna Selection",
//! - figures written to the working directory at 640x480.
//!
//! `sample_count` is a tuning knob, not a derived value. Raise it for larger
//! graphs.

use std::path::PathBuf;

use crate::layout::LayoutParams;

pub const ORIGINAL_FILE_NAME: &str = "antenna_plot_original.png";
pub const SOLUTION_FILE_NAME: &str = "antenna_plot_solution.png";

/// All tunable controls for one run.
#[derive(Clone, Debug)]
pub struct Params {
    /// Number of candidate solutions the solver evaluates before returning its best.
    pub sample_count: usize,

    /// Opaque tag handed to the solver for bookkeeping.
    pub label: String,

    /// Directory that receives both figures.
    pub output_dir: PathBuf,

    /// Canvas size in pixels.
    pub width: u32,
    pub height: u32,

    pub layout: LayoutParams,
}

impl Params {
    pub fn original_path(&self) -> PathBuf {
        self.output_dir.join(ORIGINAL_FILE_NAME)
    }

    pub fn solution_path(&self) -> PathBuf {
        self.output_dir.join(SOLUTION_FILE_NAME)
    }
}

impl Default for Params {
    fn default() -> Self {
        Params {
            sample_count: 10,
            label: String::from("Example - Antenna Selection"),
            output_dir: PathBuf::from("."),
            width: 640,
            height: 480,
            layout: LayoutParams::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_params() {
        let p = Params::default();
        assert_eq!(p.sample_count, 10);
        assert_eq!(p.label, "Example - Antenna Selection");
        assert_eq!(p.original_path(), PathBuf::from("./antenna_plot_original.png"));
        assert_eq!(p.solution_path(), PathBuf::from("./antenna_plot_solution.png"));
        assert_eq!((p.width, p.height), (640, 480));
    }
}
