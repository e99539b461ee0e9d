// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! CEM-Lite Voxel - Voxelization glue
//!
//! The actual grid/occupancy computation belongs to an external engine
//! behind the [`VoxelEngine`](cem_lite_model::VoxelEngine) trait; this crate
//! only assembles file paths around the call, writes the companion material
//! file, and serializes the returned box grid as OBJ.
//!
//! # Example
//!
//! ```no_run
//! use cem_lite_voxel::Voxelizer;
//! use std::path::Path;
//!
//! # fn engine() -> Box<dyn cem_lite_model::VoxelEngine> { unimplemented!() }
//! let engine = engine();
//! let voxelizer = Voxelizer::new("scene/cube.stl", "cube", "scene").with_voxel_size(0.05);
//! voxelizer.export_obj(engine.as_ref(), Path::new("scene/voxels/cube.obj"), None)?;
//! # cem_lite_model::Result::Ok(())
//! ```

mod material;
mod obj;
mod voxelizer;

pub use material::MaterialFile;
pub use obj::write_box_obj;
pub use voxelizer::{Voxelizer, MATERIALS_DIR};
