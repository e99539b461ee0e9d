// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Companion material file for voxelized geometry
//!
//! The material file is an MTL-style text block: a `newmtl` statement
//! followed by one `<name> <value>` line per conductivity parameter, values
//! in fixed 8-decimal form.

use cem_lite_model::{MaterialParams, Result};
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

/// A named material block ready to be written next to the geometry
#[derive(Clone, Debug, PartialEq)]
pub struct MaterialFile {
    /// Material name, also used in the geometry's `usemtl` statement
    pub name: String,
    /// Conductivity-style parameters
    pub params: MaterialParams,
}

impl MaterialFile {
    /// Create a material block
    pub fn new(name: impl Into<String>, params: MaterialParams) -> Self {
        MaterialFile {
            name: name.into(),
            params,
        }
    }

    /// Render the MTL text block
    pub fn to_mtl(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "newmtl {}", self.name);
        for (key, value) in self.params.entries() {
            let _ = writeln!(out, "{key} {value:.8}");
        }
        out
    }

    /// Write the block to `path`, overwriting any existing file
    pub fn write(&self, path: &Path) -> Result<()> {
        fs::write(path, self.to_mtl())?;
        log::debug!("wrote material {} to {}", self.name, path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mtl_block_shape() {
        let mtl = MaterialFile::new("copper", MaterialParams::new(5.8e7, 1.0, 1.0));
        let text = mtl.to_mtl();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "newmtl copper");
        assert_eq!(lines[1], "sigma 58000000.00000000");
        assert_eq!(lines[2], "mu 1.00000000");
        assert_eq!(lines[3], "epsilon 1.00000000");
        assert_eq!(lines.len(), 4);
    }

    #[test]
    fn test_default_parameters() {
        let mtl = MaterialFile::new("m", MaterialParams::default());
        assert_eq!(
            mtl.to_mtl(),
            "newmtl m\nsigma 1.00000000\nmu 1.00000000\nepsilon 1.00000000\n"
        );
    }

    #[test]
    fn test_write_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("m.mtl");
        std::fs::write(&path, "stale").unwrap();

        let mtl = MaterialFile::new("m", MaterialParams::default());
        mtl.write(&path).unwrap();
        assert!(std::fs::read_to_string(&path)
            .unwrap()
            .starts_with("newmtl m\n"));
    }
}
