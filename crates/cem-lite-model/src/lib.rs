// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! CEM-Lite Model - Shared types and collaborator traits for the CEM-Lite toolkit
//!
//! This crate provides the core abstractions for the CEM-Lite voxelization and
//! simulation workflow. It defines the data model (vertices, material
//! parameters, box grids, chart kinds) and the traits implemented by external
//! collaborators (voxelization engines, scene providers), allowing the
//! pipeline crates to stay independent of any concrete host or engine.
//!
//! # Architecture
//!
//! The crate is organized around a small set of concerns:
//!
//! - [`Vertex`], [`Dimension`] - the simulation pipeline's data model
//! - [`MaterialParams`], [`MeshObject`] - registered scene objects and their
//!   conductivity-style parameters
//! - [`Box3`], [`BoxGrid`] - the box-list mesh representation produced by a
//!   voxelization engine
//! - [`VoxelEngine`], [`SceneSource`] - collaborator seams
//! - [`Error`], [`Result`] - the shared error taxonomy
//!
//! # Example
//!
//! ```
//! use cem_lite_model::{Dimension, Vertex};
//!
//! let dim = Dimension::try_from(2u8).unwrap();
//! assert_eq!(dim.header(), "x,y");
//!
//! let v = Vertex::new(vec![1.0, 2.0, 3.0]);
//! assert_eq!(v.coord(1), Some(2.0));
//! ```

pub mod error;
pub mod geometry;
pub mod traits;
pub mod types;

// Re-export all public types
pub use error::*;
pub use geometry::*;
pub use traits::*;
pub use types::*;
