// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Chart specifications
//!
//! The chart family is a tagged variant: a chart kind plus the data shaped
//! for it. Specs are built from tables and handed to a [`PlotRenderer`];
//! rendering itself belongs to the collaborator.

use crate::table::Table;
use cem_lite_model::{ChartKind, Error, Result};
use std::path::Path;

/// A chart kind with its associated data
#[derive(Clone, Debug, PartialEq)]
pub enum ChartSpec {
    /// Cell matrix, rows x columns as in the source table
    Heatmap { matrix: Vec<Vec<f64>> },
    /// 3D point cloud from the first three columns
    Scatter {
        x: Vec<f64>,
        y: Vec<f64>,
        z: Vec<f64>,
    },
    /// Bars at row-index positions from the first column
    Bar {
        positions: Vec<f64>,
        values: Vec<f64>,
    },
    /// 2D points from the first two columns
    Bubble { x: Vec<f64>, y: Vec<f64> },
    /// Triangulated surface from the first three columns
    Surface {
        x: Vec<f64>,
        y: Vec<f64>,
        z: Vec<f64>,
    },
}

impl ChartSpec {
    /// The kind tag of this spec
    pub fn kind(&self) -> ChartKind {
        match self {
            ChartSpec::Heatmap { .. } => ChartKind::Heatmap,
            ChartSpec::Scatter { .. } => ChartKind::Scatter,
            ChartSpec::Bar { .. } => ChartKind::Bar,
            ChartSpec::Bubble { .. } => ChartKind::Bubble,
            ChartSpec::Surface { .. } => ChartKind::Surface,
        }
    }

    /// Shape a table into the requested chart kind
    ///
    /// Column requirements: heatmap and bar accept any table with at least
    /// one column, bubble needs two, scatter and surface need three. A table
    /// without data rows or with too few columns is rejected.
    pub fn from_table(kind: ChartKind, table: &Table) -> Result<ChartSpec> {
        if table.rows.is_empty() {
            return Err(Error::unsupported_chart(kind.name(), "table has no data rows"));
        }
        let columns = table.column_count();
        let require = |needed: usize| -> Result<()> {
            if columns < needed {
                return Err(Error::unsupported_chart(
                    kind.name(),
                    format!("needs {needed} columns, table has {columns}"),
                ));
            }
            Ok(())
        };

        let spec = match kind {
            ChartKind::Heatmap => {
                require(1)?;
                ChartSpec::Heatmap {
                    matrix: table.rows.clone(),
                }
            }
            ChartKind::Scatter => {
                require(3)?;
                ChartSpec::Scatter {
                    x: table.column(0),
                    y: table.column(1),
                    z: table.column(2),
                }
            }
            ChartKind::Bar => {
                require(1)?;
                ChartSpec::Bar {
                    positions: (0..table.rows.len()).map(|i| i as f64).collect(),
                    values: table.column(0),
                }
            }
            ChartKind::Bubble => {
                require(2)?;
                ChartSpec::Bubble {
                    x: table.column(0),
                    y: table.column(1),
                }
            }
            ChartKind::Surface => {
                require(3)?;
                ChartSpec::Surface {
                    x: table.column(0),
                    y: table.column(1),
                    z: table.column(2),
                }
            }
        };
        Ok(spec)
    }
}

/// Optional title and axis labels for a rendered chart
#[derive(Clone, Debug, PartialEq, Default)]
pub struct ChartStyle {
    pub title: Option<String>,
    pub x_label: Option<String>,
    pub y_label: Option<String>,
}

impl ChartStyle {
    /// Style with axis labels taken from the table's leading headers
    pub fn from_headers(table: &Table) -> Self {
        ChartStyle {
            title: None,
            x_label: table.headers.first().cloned(),
            y_label: table.headers.get(1).cloned(),
        }
    }

    /// Set the chart title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}

/// Plot rendering collaborator
///
/// Given a chart spec and style, produces and saves a raster image at
/// `output`. CEM-Lite guarantees only that specs are built from valid
/// tabular data of the required shape; rendering is out of scope.
pub trait PlotRenderer {
    /// Render `spec` to an image file at `output`
    fn render(&self, spec: &ChartSpec, style: &ChartStyle, output: &Path) -> Result<()>;
}
