// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for CEM-Lite operations

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for CEM-Lite operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur across the CEM-Lite pipeline
#[derive(Error, Debug)]
pub enum Error {
    /// Input path does not reference an existing regular file
    #[error("Source file not found: {0}")]
    MissingSource(PathBuf),

    /// A vertex record line contained a non-numeric coordinate token
    #[error("Malformed vertex on line {line}: {token:?} is not a number")]
    MalformedVertex { line: usize, token: String },

    /// A vertex record is shorter than the requested dimensionality
    #[error("Vertex in group {group} has {len} coordinates, {dimension} requested")]
    ShortVertex {
        group: usize,
        len: usize,
        dimension: usize,
    },

    /// A dimensionality outside {1, 2, 3} was requested
    #[error("Unsupported dimension: {0} (expected 1, 2 or 3)")]
    UnsupportedDimension(u8),

    /// A table data line contained a non-numeric field
    #[error("Malformed value on line {line}: {token:?} is not a number")]
    MalformedField { line: usize, token: String },

    /// A table data line has a different field count than the header
    #[error("Row on line {line} has {found} fields, header has {expected}")]
    RaggedRow {
        line: usize,
        expected: usize,
        found: usize,
    },

    /// Unknown chart kind name
    #[error("Unknown chart kind: {0:?}")]
    UnknownChart(String),

    /// Table shape cannot feed the requested chart kind
    #[error("Cannot build {kind} chart: {reason}")]
    UnsupportedChart { kind: String, reason: String },

    /// Visualization input has a header but no data rows
    #[error("No data rows in table: {0}")]
    EmptyTable(PathBuf),

    /// No voxelization engine is configured
    #[error("No voxelization engine configured")]
    EngineUnavailable,

    /// Voxelization engine failure
    #[error("Voxel engine error: {0}")]
    Engine(String),

    /// Invalid settings value
    #[error("Invalid setting {name}: {message}")]
    InvalidSetting { name: String, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a malformed-vertex error
    pub fn malformed_vertex(line: usize, token: impl Into<String>) -> Self {
        Error::MalformedVertex {
            line,
            token: token.into(),
        }
    }

    /// Create a malformed-field error
    pub fn malformed_field(line: usize, token: impl Into<String>) -> Self {
        Error::MalformedField {
            line,
            token: token.into(),
        }
    }

    /// Create an unsupported-chart error
    pub fn unsupported_chart(kind: impl Into<String>, reason: impl Into<String>) -> Self {
        Error::UnsupportedChart {
            kind: kind.into(),
            reason: reason.into(),
        }
    }

    /// Create an engine error
    pub fn engine(msg: impl Into<String>) -> Self {
        Error::Engine(msg.into())
    }

    /// Create an invalid-setting error
    pub fn invalid_setting(name: impl Into<String>, message: impl Into<String>) -> Self {
        Error::InvalidSetting {
            name: name.into(),
            message: message.into(),
        }
    }
}
