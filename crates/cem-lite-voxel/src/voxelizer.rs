// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Voxelization orchestration
//!
//! Assembles the file paths around a [`VoxelEngine`] call: the engine turns
//! a surface-mesh file into a box grid, and this module writes the grid as
//! OBJ together with its companion material file under the project's
//! `materials/` directory.

use crate::material::MaterialFile;
use crate::obj::write_box_obj;
use cem_lite_model::{MaterialParams, Result, VoxelEngine};
use std::fs;
use std::path::{Path, PathBuf};

/// Directory under the project root that holds companion material files
pub const MATERIALS_DIR: &str = "materials";

/// Voxelizes a surface-mesh file and exports it as OBJ plus material file
#[derive(Clone, Debug)]
pub struct Voxelizer {
    mesh_file: PathBuf,
    material_name: String,
    project_dir: PathBuf,
    voxel_size: f64,
}

impl Voxelizer {
    /// Create a voxelizer with the default voxel edge length (0.1)
    pub fn new(
        mesh_file: impl Into<PathBuf>,
        material_name: impl Into<String>,
        project_dir: impl Into<PathBuf>,
    ) -> Self {
        Voxelizer {
            mesh_file: mesh_file.into(),
            material_name: material_name.into(),
            project_dir: project_dir.into(),
            voxel_size: 0.1,
        }
    }

    /// Set the voxel edge length
    pub fn with_voxel_size(mut self, voxel_size: f64) -> Self {
        self.voxel_size = voxel_size;
        self
    }

    /// Companion material file path: `<project_dir>/materials/<name>.mtl`
    pub fn mtl_path(&self) -> PathBuf {
        self.project_dir
            .join(MATERIALS_DIR)
            .join(format!("{}.mtl", self.material_name))
    }

    /// Voxelize the mesh and export it as OBJ with its material file
    ///
    /// Drives `engine` over the mesh file, writes the companion `.mtl`
    /// (creating the `materials/` directory if needed), then writes the
    /// OBJ referencing it. Objects without explicit parameters get the
    /// defaults (all parameters 1.0).
    pub fn export_obj(
        &self,
        engine: &dyn VoxelEngine,
        obj_file: &Path,
        material: Option<MaterialParams>,
    ) -> Result<()> {
        let grid = engine.voxelize(&self.mesh_file, self.voxel_size)?;
        log::info!(
            "voxelized {} into {} boxes at edge {}",
            self.mesh_file.display(),
            grid.len(),
            self.voxel_size
        );

        let mtl_path = self.mtl_path();
        if let Some(parent) = mtl_path.parent() {
            fs::create_dir_all(parent)?;
        }
        MaterialFile::new(&self.material_name, material.unwrap_or_default()).write(&mtl_path)?;

        write_box_obj(obj_file, &grid, Some(&mtl_path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cem_lite_model::{Box3, BoxGrid};
    use std::fs;

    /// Engine stand-in returning one cube per call
    struct SingleBoxEngine;

    impl VoxelEngine for SingleBoxEngine {
        fn voxelize(&self, _mesh: &Path, voxel_size: f64) -> Result<BoxGrid> {
            let cube = Box3::cube([0.0, 0.0, 0.0], voxel_size);
            Ok(BoxGrid::new(vec![cube], voxel_size))
        }
    }

    #[test]
    fn test_export_writes_obj_and_mtl() {
        let dir = tempfile::tempdir().unwrap();
        let obj_path = dir.path().join("cube.obj");

        let voxelizer = Voxelizer::new("cube.stl", "cube", dir.path()).with_voxel_size(0.5);
        voxelizer
            .export_obj(&SingleBoxEngine, &obj_path, None)
            .unwrap();

        let mtl_path = dir.path().join("materials").join("cube.mtl");
        assert!(mtl_path.is_file());
        let mtl = fs::read_to_string(&mtl_path).unwrap();
        assert!(mtl.starts_with("newmtl cube\n"));
        assert!(mtl.contains("sigma 1.00000000"));

        let obj = fs::read_to_string(&obj_path).unwrap();
        assert!(obj.starts_with(&format!("mtllib {}\n", mtl_path.display())));
        assert!(obj.contains("usemtl cube\n"));
        assert_eq!(obj.lines().filter(|l| l.starts_with("v ")).count(), 8);
    }

    #[test]
    fn test_export_with_explicit_material() {
        let dir = tempfile::tempdir().unwrap();
        let obj_path = dir.path().join("plate.obj");

        let voxelizer = Voxelizer::new("plate.stl", "plate", dir.path());
        let params = MaterialParams::new(2.0, 0.5, 4.0);
        voxelizer
            .export_obj(&SingleBoxEngine, &obj_path, Some(params))
            .unwrap();

        let mtl = fs::read_to_string(voxelizer.mtl_path()).unwrap();
        assert!(mtl.contains("sigma 2.00000000"));
        assert!(mtl.contains("mu 0.50000000"));
        assert!(mtl.contains("epsilon 4.00000000"));
    }

    #[test]
    fn test_engine_error_writes_nothing() {
        struct FailingEngine;
        impl VoxelEngine for FailingEngine {
            fn voxelize(&self, _mesh: &Path, _voxel_size: f64) -> Result<BoxGrid> {
                Err(cem_lite_model::Error::engine("mesh is not watertight"))
            }
        }

        let dir = tempfile::tempdir().unwrap();
        let obj_path = dir.path().join("cube.obj");
        let voxelizer = Voxelizer::new("cube.stl", "cube", dir.path());

        assert!(voxelizer
            .export_obj(&FailingEngine, &obj_path, None)
            .is_err());
        assert!(!obj_path.exists());
        assert!(!voxelizer.mtl_path().exists());
    }
}
