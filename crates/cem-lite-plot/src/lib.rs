// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! CEM-Lite Plot - Tabular data and chart specifications
//!
//! Reads the CSV/text tables the simulation writer produces and shapes them
//! into chart specifications - a tagged variant of chart kind plus data -
//! which are dispatched to an external [`PlotRenderer`]. The crate validates
//! table shape against the chosen chart kind; it renders nothing itself.
//!
//! # Example
//!
//! ```
//! use cem_lite_model::ChartKind;
//! use cem_lite_plot::{ChartSpec, Table};
//!
//! let table = Table::parse("x,y\n1,2\n3,4\n")?;
//! let spec = ChartSpec::from_table(ChartKind::Bubble, &table)?;
//! assert_eq!(spec.kind(), ChartKind::Bubble);
//! # cem_lite_model::Result::Ok(())
//! ```

mod chart;
mod table;

pub use chart::{ChartSpec, ChartStyle, PlotRenderer};
pub use table::{Table, DELIMITER};
