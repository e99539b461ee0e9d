// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! CEM-Lite Parser - Vertex record extraction from OBJ-style geometry files
//!
//! This crate reads line-oriented text geometry (the `v <x> <y> <z>` record
//! shape of Wavefront OBJ and its relatives) and extracts only the vertex
//! position records. Every other record kind - faces, normals, texture
//! coordinates, comments - is skipped without error.
//!
//! # Features
//!
//! - **Fast line scanning** using `memchr`
//! - **Fast float parsing** using `lexical-core`
//! - Strict numeric parsing: a malformed coordinate on a `v` line is a fatal
//!   error, never silently coerced
//!
//! # Example
//!
//! ```
//! use cem_lite_parser::extract_vertices;
//!
//! let content = "v 1 2 3\nvn 0 0 1\nf 1 2 3\n";
//! let vertices = extract_vertices(content).unwrap();
//! assert_eq!(vertices.len(), 1);
//! assert_eq!(vertices[0].as_slice(), &[1.0, 2.0, 3.0]);
//! ```

mod scanner;

pub use scanner::{count_records, extract_file, extract_vertices, LineScanner};
