// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Box-grid OBJ export
//!
//! Serializes a [`BoxGrid`] as Wavefront OBJ text:
//!
//! ```text
//! mtllib <material file>     (when a material is referenced)
//! usemtl <material name>
//! foreach box
//!     v x y z                 - 8 corner lines
//!     f a b c d               - 6 quad lines, 1-based indices
//! end
//! ```

use cem_lite_model::{BoxGrid, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Quad faces of one box, as indices into the corner order of `Box3::corners`
///
/// Wound so that face normals point out of the box.
const BOX_FACES: [[usize; 4]; 6] = [
    [0, 3, 2, 1], // bottom
    [4, 5, 6, 7], // top
    [0, 1, 5, 4], // front
    [1, 2, 6, 5], // right
    [2, 3, 7, 6], // back
    [3, 0, 4, 7], // left
];

/// Write a box grid as an OBJ file
///
/// When `mtl_file` is given, the OBJ references it with `mtllib` and selects
/// the material named after the file stem with `usemtl`. Overwrites any
/// existing file at `path`.
pub fn write_box_obj(path: &Path, grid: &BoxGrid, mtl_file: Option<&Path>) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    if let Some(mtl) = mtl_file {
        writeln!(writer, "mtllib {}", mtl.display())?;
        if let Some(stem) = mtl.file_stem() {
            writeln!(writer, "usemtl {}", stem.to_string_lossy())?;
        }
    }

    for (index, b) in grid.boxes.iter().enumerate() {
        for corner in b.corners() {
            writeln!(writer, "v {} {} {}", corner[0], corner[1], corner[2])?;
        }
        let offset = index * 8 + 1;
        for face in BOX_FACES {
            writeln!(
                writer,
                "f {} {} {} {}",
                offset + face[0],
                offset + face[1],
                offset + face[2],
                offset + face[3]
            )?;
        }
    }
    writer.flush()?;

    log::debug!("wrote {} boxes to {}", grid.len(), path.display());
    Ok(())
}
