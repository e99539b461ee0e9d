// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! CSV serialization of averaged rows
//!
//! Output shape: one header line, then one line per row with values in
//! their natural decimal form joined by the delimiter, every line
//! newline-terminated.

use crate::average::AveragedRow;
use cem_lite_model::Result;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Delimiter between header labels and row values
pub const DELIMITER: char = ',';

/// Format one row as a delimiter-joined line (no trailing newline)
pub fn format_row(row: &AveragedRow) -> String {
    row.iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(&DELIMITER.to_string())
}

/// Write rows under a header to `path`
///
/// Opens the destination with a truncating create, silently overwriting any
/// pre-existing file. There is no partial-write recovery: a mid-write
/// failure leaves the file truncated and the error propagates.
pub fn write_csv(path: &Path, rows: &[AveragedRow], header: &str) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    writeln!(writer, "{header}")?;
    for row in rows {
        writeln!(writer, "{}", format_row(row))?;
    }
    writer.flush()?;

    log::debug!("wrote {} rows to {}", rows.len(), path.display());
    Ok(())
}
