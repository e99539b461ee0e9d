// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Core types for the CEM-Lite data model
//!
//! This module defines the fundamental types used throughout the pipeline:
//! vertex records, output dimensionality, material parameters, registered
//! scene objects and chart kinds.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// One parsed vertex record from a geometry file's `v` lines
///
/// An ordered sequence of floating-point coordinates. The observed format
/// carries three coordinates per record, but any fixed length >= 1 is
/// tolerated; downstream consumers read only the leading axes they need.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
pub struct Vertex(pub Vec<f64>);

impl Vertex {
    /// Create a vertex from its coordinates
    pub fn new(coords: Vec<f64>) -> Self {
        Vertex(coords)
    }

    /// Coordinate on the given axis, if present
    pub fn coord(&self, axis: usize) -> Option<f64> {
        self.0.get(axis).copied()
    }

    /// Number of coordinates in this record
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the record carries no coordinates
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Coordinates as a slice
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }
}

impl From<[f64; 3]> for Vertex {
    fn from(coords: [f64; 3]) -> Self {
        Vertex(coords.to_vec())
    }
}

/// Number of leading coordinate axes retained in simulation output
///
/// Mirrors the unidimensional/bidimensional/tridimensional selector of the
/// host UI. Values outside {1, 2, 3} are rejected at construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dimension {
    /// One axis (`x`)
    One,
    /// Two axes (`x,y`)
    Two,
    /// Three axes (`x,y,z`)
    Three,
}

impl Dimension {
    /// Number of axes as a count
    pub fn axis_count(&self) -> usize {
        match self {
            Dimension::One => 1,
            Dimension::Two => 2,
            Dimension::Three => 3,
        }
    }

    /// CSV header line for this dimensionality
    pub fn header(&self) -> &'static str {
        match self {
            Dimension::One => "x",
            Dimension::Two => "x,y",
            Dimension::Three => "x,y,z",
        }
    }
}

impl Default for Dimension {
    fn default() -> Self {
        Dimension::One
    }
}

impl TryFrom<u8> for Dimension {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            1 => Ok(Dimension::One),
            2 => Ok(Dimension::Two),
            3 => Ok(Dimension::Three),
            other => Err(Error::UnsupportedDimension(other)),
        }
    }
}

impl FromStr for Dimension {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let value: u8 = s.parse().map_err(|_| Error::UnsupportedDimension(0))?;
        Dimension::try_from(value)
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.axis_count())
    }
}

/// Conductivity-style material parameters attached to a mesh object
///
/// A typed record replacing the original open-ended per-object key-value
/// bag. All three parameters default to 1.0.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MaterialParams {
    /// Electric conductivity
    pub sigma: f64,
    /// Magnetic permeability
    pub mu: f64,
    /// Electric permittivity
    pub epsilon: f64,
}

impl Default for MaterialParams {
    fn default() -> Self {
        MaterialParams {
            sigma: 1.0,
            mu: 1.0,
            epsilon: 1.0,
        }
    }
}

impl MaterialParams {
    /// Create a material record
    pub fn new(sigma: f64, mu: f64, epsilon: f64) -> Self {
        MaterialParams { sigma, mu, epsilon }
    }

    /// Named parameters in their canonical order
    pub fn entries(&self) -> [(&'static str, f64); 3] {
        [
            ("sigma", self.sigma),
            ("mu", self.mu),
            ("epsilon", self.epsilon),
        ]
    }
}

/// A registered scene object: a named surface mesh with material parameters
///
/// The host/scene collaborator supplies already-resolved mesh file paths;
/// this crate never inspects the host's object model.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MeshObject {
    /// Object name, unique within a project
    pub name: String,
    /// Path to the object's exported surface-mesh file
    pub mesh_path: PathBuf,
    /// Material parameters for the companion material file
    #[serde(default)]
    pub material: MaterialParams,
}

impl MeshObject {
    /// Create a mesh object with default material parameters
    pub fn new(name: impl Into<String>, mesh_path: impl Into<PathBuf>) -> Self {
        MeshObject {
            name: name.into(),
            mesh_path: mesh_path.into(),
            material: MaterialParams::default(),
        }
    }
}

/// Supported chart kinds for the visualization step
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Heatmap,
    Scatter,
    Bar,
    Bubble,
    Surface,
}

impl ChartKind {
    /// Chart kind name as a lowercase string
    pub fn name(&self) -> &'static str {
        match self {
            ChartKind::Heatmap => "heatmap",
            ChartKind::Scatter => "scatter",
            ChartKind::Bar => "bar",
            ChartKind::Bubble => "bubble",
            ChartKind::Surface => "surface",
        }
    }
}

impl Default for ChartKind {
    fn default() -> Self {
        ChartKind::Heatmap
    }
}

impl FromStr for ChartKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "heatmap" => Ok(ChartKind::Heatmap),
            "scatter" | "scatterplot" => Ok(ChartKind::Scatter),
            "bar" => Ok(ChartKind::Bar),
            "bubble" | "bubbleplot" => Ok(ChartKind::Bubble),
            "surface" | "surfacechart" => Ok(ChartKind::Surface),
            other => Err(Error::UnknownChart(other.to_string())),
        }
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Smallest accepted voxel edge length
pub const MIN_VOXEL_SIZE: f64 = 0.001;
/// Largest accepted voxel edge length
pub const MAX_VOXEL_SIZE: f64 = 1.0;

/// Project-wide settings populated by the host-UI layer
///
/// `frequency` distinguishes "unset" (`None`) from an explicit value: a
/// stored 0 is honored as zero rather than silently replaced by the default.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GlobalSettings {
    /// Voxel edge length for the voxelization step
    pub voxel_size: f64,
    /// Sampling-rate multiplier applied to every averaged output value
    pub frequency: Option<f64>,
}

impl Default for GlobalSettings {
    fn default() -> Self {
        GlobalSettings {
            voxel_size: 0.1,
            frequency: None,
        }
    }
}

impl GlobalSettings {
    /// Validate the settings against their accepted ranges
    pub fn validate(&self) -> Result<()> {
        if !(MIN_VOXEL_SIZE..=MAX_VOXEL_SIZE).contains(&self.voxel_size) {
            return Err(Error::invalid_setting(
                "voxel_size",
                format!(
                    "{} outside [{}, {}]",
                    self.voxel_size, MIN_VOXEL_SIZE, MAX_VOXEL_SIZE
                ),
            ));
        }
        if let Some(f) = self.frequency {
            if f < 0.0 || !f.is_finite() {
                return Err(Error::invalid_setting(
                    "frequency",
                    format!("{f} is not a non-negative finite number"),
                ));
            }
        }
        Ok(())
    }

    /// Effective frequency: the stored value, or 1.0 when unset
    pub fn effective_frequency(&self) -> f64 {
        self.frequency.unwrap_or(1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimension_headers() {
        assert_eq!(Dimension::One.header(), "x");
        assert_eq!(Dimension::Two.header(), "x,y");
        assert_eq!(Dimension::Three.header(), "x,y,z");
    }

    #[test]
    fn test_dimension_rejects_out_of_range() {
        assert!(Dimension::try_from(0u8).is_err());
        assert!(Dimension::try_from(4u8).is_err());
        assert!(matches!(
            Dimension::try_from(4u8),
            Err(Error::UnsupportedDimension(4))
        ));
    }

    #[test]
    fn test_chart_kind_parse() {
        assert_eq!("heatmap".parse::<ChartKind>().unwrap(), ChartKind::Heatmap);
        assert_eq!(
            "Scatterplot".parse::<ChartKind>().unwrap(),
            ChartKind::Scatter
        );
        assert!("pie".parse::<ChartKind>().is_err());
    }

    #[test]
    fn test_material_defaults() {
        let m = MaterialParams::default();
        assert_eq!(m.entries(), [("sigma", 1.0), ("mu", 1.0), ("epsilon", 1.0)]);
    }

    #[test]
    fn test_settings_validation() {
        assert!(GlobalSettings::default().validate().is_ok());

        let too_small = GlobalSettings {
            voxel_size: 0.0001,
            frequency: None,
        };
        assert!(too_small.validate().is_err());

        let zero_freq = GlobalSettings {
            voxel_size: 0.1,
            frequency: Some(0.0),
        };
        assert!(zero_freq.validate().is_ok());
        // An explicit zero is honored, not treated as unset
        assert_eq!(zero_freq.effective_frequency(), 0.0);
        assert_eq!(GlobalSettings::default().effective_frequency(), 1.0);
    }
}
