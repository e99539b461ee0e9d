// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! CEM-Lite Sim - Grouped-average simulation over extracted vertex data
//!
//! The simulation is a synchronous file-to-file batch transform: vertex
//! records are extracted from a geometry file, partitioned into consecutive
//! groups of ten, averaged per axis, scaled by a frequency multiplier,
//! truncated to the requested dimensionality and written as CSV.
//!
//! # Example
//!
//! ```no_run
//! use cem_lite_model::Dimension;
//! use cem_lite_sim::{run_simulation, SimulationConfig};
//!
//! let config = SimulationConfig::new(Dimension::Two, "scene/export.obj", "out");
//! match run_simulation(&config)? {
//!     Some(path) => println!("wrote {}", path.display()),
//!     None => println!("source file missing, nothing written"),
//! }
//! # cem_lite_model::Result::Ok(())
//! ```

mod average;
mod writer;

pub use average::{group_averages, AveragedRow, GROUP_SIZE};
pub use writer::{format_row, write_csv, DELIMITER};

use cem_lite_model::{Dimension, Result};
use cem_lite_parser::extract_file;
use std::fs;
use std::path::{Path, PathBuf};

/// Configuration for one simulation run
///
/// Passed by value into [`run_simulation`]; the host-UI layer populates it
/// from user interaction. `frequency` keeps the unset/explicit distinction:
/// `None` resolves to 1.0, while `Some(0.0)` stays zero.
#[derive(Clone, Debug, PartialEq)]
pub struct SimulationConfig {
    /// Number of leading axes retained in the output
    pub dimension: Dimension,
    /// Source geometry file
    pub source: PathBuf,
    /// Directory the output CSV is written into
    pub output_dir: PathBuf,
    /// Sampling-rate multiplier; `None` means unset (defaults to 1.0)
    pub frequency: Option<f64>,
}

impl SimulationConfig {
    /// Create a configuration with an unset frequency
    pub fn new(
        dimension: Dimension,
        source: impl Into<PathBuf>,
        output_dir: impl Into<PathBuf>,
    ) -> Self {
        SimulationConfig {
            dimension,
            source: source.into(),
            output_dir: output_dir.into(),
            frequency: None,
        }
    }

    /// Set an explicit frequency
    pub fn with_frequency(mut self, frequency: f64) -> Self {
        self.frequency = Some(frequency);
        self
    }

    /// Deterministic output path: `<output_dir>/<source file name><N>-dimension.csv`
    ///
    /// The source file name keeps its extension, so `export.obj` at two axes
    /// becomes `export.obj2-dimension.csv`.
    pub fn output_path(&self) -> PathBuf {
        let name = self
            .source
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        self.output_dir
            .join(format!("{name}{}-dimension.csv", self.dimension.axis_count()))
    }
}

/// Run one simulation: extract, average, write
///
/// Returns the written path, or `Ok(None)` without touching the filesystem
/// when the source is not an existing regular file. That silent no-op is the
/// reference behavior; callers wanting a user-visible status must check the
/// `None` themselves. Parse and I/O errors propagate unretried.
pub fn run_simulation(config: &SimulationConfig) -> Result<Option<PathBuf>> {
    let header = config.dimension.header();

    let vertices = match extract_file(&config.source)? {
        Some(vertices) => vertices,
        None => return Ok(None),
    };

    let frequency = config.frequency.unwrap_or(1.0);
    let rows = group_averages(&vertices, config.dimension, frequency)?;

    fs::create_dir_all(&config.output_dir)?;
    let path = config.output_path();
    write_csv(&path, &rows, header)?;

    log::info!(
        "simulated {} vertices into {} rows at {}",
        vertices.len(),
        rows.len(),
        path.display()
    );
    Ok(Some(path))
}
