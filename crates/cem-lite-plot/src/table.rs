// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Tabular data reading
//!
//! Parses the CSV/text shape produced by the simulation writer: one header
//! line of delimiter-joined labels, then one line of numeric fields per row.

use cem_lite_model::{Error, Result};
use memchr::memchr;
use std::fs;
use std::path::Path;

/// Field delimiter, matching the simulation writer
pub const DELIMITER: char = ',';

/// A parsed table: header labels plus numeric rows
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Table {
    /// Header labels in column order
    pub headers: Vec<String>,
    /// Data rows; every row has exactly one field per header label
    pub rows: Vec<Vec<f64>>,
}

impl Table {
    /// Parse table content
    ///
    /// The first non-blank line is the header; every following non-blank
    /// line must carry one numeric field per header label. A non-numeric
    /// field or a field-count mismatch is fatal.
    pub fn parse(content: &str) -> Result<Table> {
        let mut headers: Vec<String> = Vec::new();
        let mut have_headers = false;
        let mut rows = Vec::new();

        let mut pos = 0;
        let mut line_no = 0;
        let bytes = content.as_bytes();
        while pos < bytes.len() {
            line_no += 1;
            let line = match memchr(b'\n', &bytes[pos..]) {
                Some(nl) => {
                    let line = &content[pos..pos + nl];
                    pos += nl + 1;
                    line
                }
                None => {
                    let line = &content[pos..];
                    pos = bytes.len();
                    line
                }
            };
            let line = line.trim_end_matches('\r');
            if line.trim().is_empty() {
                continue;
            }

            if !have_headers {
                headers = line.split(DELIMITER).map(|h| h.trim().to_string()).collect();
                have_headers = true;
                continue;
            }

            let mut row = Vec::with_capacity(headers.len());
            for token in line.split(DELIMITER) {
                let token = token.trim();
                let value: f64 = lexical_core::parse(token.as_bytes())
                    .map_err(|_| Error::malformed_field(line_no, token))?;
                row.push(value);
            }
            if row.len() != headers.len() {
                return Err(Error::RaggedRow {
                    line: line_no,
                    expected: headers.len(),
                    found: row.len(),
                });
            }
            rows.push(row);
        }

        Ok(Table { headers, rows })
    }

    /// Load and parse a table from a file
    ///
    /// A path that is not an existing regular file is an
    /// [`Error::MissingSource`]; a file with a header but no data rows is an
    /// [`Error::EmptyTable`].
    pub fn load(path: &Path) -> Result<Table> {
        if !path.is_file() {
            return Err(Error::MissingSource(path.to_path_buf()));
        }
        let content = fs::read_to_string(path)?;
        let table = Table::parse(&content)?;
        if table.rows.is_empty() {
            return Err(Error::EmptyTable(path.to_path_buf()));
        }
        log::debug!(
            "loaded {} rows x {} columns from {}",
            table.rows.len(),
            table.column_count(),
            path.display()
        );
        Ok(table)
    }

    /// Number of columns
    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    /// Values of one column, in row order
    pub fn column(&self, index: usize) -> Vec<f64> {
        self.rows.iter().map(|row| row[index]).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_parse_header_and_rows() {
        let table = Table::parse("x,y\n2,3\n0.5,-1.25\n").unwrap();
        assert_eq!(table.headers, vec!["x", "y"]);
        assert_eq!(table.rows, vec![vec![2.0, 3.0], vec![0.5, -1.25]]);
        assert_eq!(table.column(1), vec![3.0, -1.25]);
    }

    #[test]
    fn test_parse_simulation_writer_output() {
        // The exact shape the sim writer emits for 1/3-mean rows
        let value = 1.0 / 3.0;
        let content = format!("x,y,z\n{value},{value},{value}\n");
        let table = Table::parse(&content).unwrap();
        assert_eq!(table.column_count(), 3);
        for axis in 0..3 {
            assert_relative_eq!(table.rows[0][axis], value, epsilon = 1e-15);
        }
    }

    #[test]
    fn test_blank_lines_skipped() {
        let table = Table::parse("\nx\n\n1\n\n2\n").unwrap();
        assert_eq!(table.headers, vec!["x"]);
        assert_eq!(table.rows.len(), 2);
    }

    #[test]
    fn test_malformed_field_is_fatal() {
        let err = Table::parse("x,y\n1,two\n").unwrap_err();
        assert!(matches!(err, Error::MalformedField { line: 2, .. }));
    }

    #[test]
    fn test_ragged_row_is_fatal() {
        let err = Table::parse("x,y\n1\n").unwrap_err();
        assert!(matches!(
            err,
            Error::RaggedRow {
                line: 2,
                expected: 2,
                found: 1
            }
        ));
    }

    #[test]
    fn test_load_rejects_missing_source() {
        let err = Table::load(Path::new("/nonexistent/rows.csv")).unwrap_err();
        assert!(matches!(err, Error::MissingSource(_)));
    }

    #[test]
    fn test_load_rejects_empty_table() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.csv");
        std::fs::write(&path, "x,y\n").unwrap();
        assert!(matches!(
            Table::load(&path).unwrap_err(),
            Error::EmptyTable(_)
        ));
    }
}
