// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Collaborator traits for CEM-Lite
//!
//! These traits define the seams between the pipeline and its external
//! collaborators: the voxelization engine and the host scene. The pipeline
//! depends only on these contracts, never on a concrete host or engine.

use crate::{BoxGrid, MeshObject, Result};
use std::path::Path;

/// Voxelization engine interface
///
/// Given a surface-mesh file and a voxel edge length, produces the box-list
/// representation of the occupied grid cells. The grid/occupancy algorithm
/// itself belongs to the implementation; CEM-Lite only assembles file paths
/// around this call and writes the companion material file.
///
/// # Example
///
/// ```
/// use cem_lite_model::{BoxGrid, Box3, Result, VoxelEngine};
/// use std::path::Path;
///
/// struct SingleBoxEngine;
///
/// impl VoxelEngine for SingleBoxEngine {
///     fn voxelize(&self, _mesh: &Path, voxel_size: f64) -> Result<BoxGrid> {
///         let cube = Box3::cube([0.0, 0.0, 0.0], voxel_size);
///         Ok(BoxGrid::new(vec![cube], voxel_size))
///     }
/// }
/// ```
pub trait VoxelEngine: Send + Sync {
    /// Voxelize the mesh at `mesh` into boxes with edge length `voxel_size`
    ///
    /// # Arguments
    /// * `mesh` - Path to an existing surface-mesh file
    /// * `voxel_size` - Voxel edge length
    ///
    /// # Returns
    /// The occupied boxes, or an engine error
    fn voxelize(&self, mesh: &Path, voxel_size: f64) -> Result<BoxGrid>;
}

/// Surface-mesh export interface
///
/// Writes the selected objects' geometry as a surface-mesh file at `dest`.
/// The pipeline only requires that this step complete before voxelization
/// or extraction runs; the export format and mechanism belong to the host.
pub trait MeshExporter {
    /// Export `objects` as one surface-mesh file at `dest`
    fn export(&self, objects: &[MeshObject], dest: &Path) -> Result<()>;
}

/// Host scene interface
///
/// Supplies the set of currently registered mesh objects together with their
/// already-resolved mesh file paths and material parameters. A host plugin
/// implements this against its own object model; the CLI implements it over
/// the on-disk project file.
pub trait SceneSource {
    /// Objects currently selected for conversion, in registration order
    fn selected_objects(&self) -> Vec<MeshObject>;

    /// Look up one object by name
    fn object(&self, name: &str) -> Option<MeshObject> {
        self.selected_objects().into_iter().find(|o| o.name == name)
    }
}
