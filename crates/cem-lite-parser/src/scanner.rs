// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Line scanner and vertex record extraction
//!
//! Scans geometry files line by line and extracts `v` records without
//! interpreting any other record kind.

use cem_lite_model::{Error, Result, Vertex};
use memchr::memchr;
use rustc_hash::FxHashMap;
use std::fs;
use std::path::Path;

/// Line-oriented scanner over file content
///
/// Uses memchr to find line boundaries and tracks the 1-based line number
/// for error reporting.
pub struct LineScanner<'a> {
    content: &'a str,
    pos: usize,
    line: usize,
}

impl<'a> LineScanner<'a> {
    /// Create a new scanner for the given content
    pub fn new(content: &'a str) -> Self {
        Self {
            content,
            pos: 0,
            line: 0,
        }
    }

    /// Scan to the next line
    ///
    /// Returns (line_number, line) with the trailing newline stripped.
    /// The final line is returned even without a terminating newline.
    pub fn next_line(&mut self) -> Option<(usize, &'a str)> {
        if self.pos >= self.content.len() {
            return None;
        }
        self.line += 1;

        let bytes = self.content.as_bytes();
        let rest = &bytes[self.pos..];
        let (line, advance) = match memchr(b'\n', rest) {
            Some(nl) => (&self.content[self.pos..self.pos + nl], nl + 1),
            None => (&self.content[self.pos..], rest.len()),
        };
        self.pos += advance;

        // Tolerate CRLF line endings
        Some((self.line, line.strip_suffix('\r').unwrap_or(line)))
    }
}

/// Extract vertex records from geometry file content
///
/// A line whose first whitespace-delimited token is exactly `"v"` yields one
/// [`Vertex`] from the remaining tokens parsed as floats, in file order.
/// Empty lines and lines led by any other token (`f`, `vt`, `vn`, `#`, ...)
/// are skipped. A non-numeric coordinate token on a `v` line is a fatal
/// [`Error::MalformedVertex`].
pub fn extract_vertices(content: &str) -> Result<Vec<Vertex>> {
    let mut vertices = Vec::new();
    let mut scanner = LineScanner::new(content);

    while let Some((line_no, line)) = scanner.next_line() {
        let mut tokens = line.split_whitespace();
        if tokens.next() != Some("v") {
            continue;
        }

        let mut coords = Vec::new();
        for token in tokens {
            let value: f64 = lexical_core::parse(token.as_bytes())
                .map_err(|_| Error::malformed_vertex(line_no, token))?;
            coords.push(value);
        }
        vertices.push(Vertex::new(coords));
    }

    log::debug!("extracted {} vertex records", vertices.len());
    Ok(vertices)
}

/// Extract vertex records from a file
///
/// Returns `Ok(None)` when `path` does not reference an existing regular
/// file; callers must check before proceeding. Read and parse errors
/// propagate.
pub fn extract_file(path: &Path) -> Result<Option<Vec<Vertex>>> {
    if !path.is_file() {
        log::warn!("source is not a regular file: {}", path.display());
        return Ok(None);
    }
    let content = fs::read_to_string(path)?;
    extract_vertices(&content).map(Some)
}

/// Count record lines by their leading token
///
/// Tallies every non-empty line under its first whitespace-delimited token.
/// Useful for describing a selected input file without parsing it.
pub fn count_records(content: &str) -> FxHashMap<String, usize> {
    let mut counts: FxHashMap<String, usize> = FxHashMap::default();
    let mut scanner = LineScanner::new(content);

    while let Some((_, line)) = scanner.next_line() {
        if let Some(token) = line.split_whitespace().next() {
            *counts.entry(token.to_string()).or_insert(0) += 1;
        }
    }

    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_OBJ: &str = "\
# cube fragment
v 1 2 3
v 3 4 5
vt 0.5 0.5
vn 0 0 1
f 1 2 3

v -1.5 0 2.25e1
";

    #[test]
    fn test_extracts_only_v_records() {
        let vertices = extract_vertices(TEST_OBJ).unwrap();
        assert_eq!(vertices.len(), 3);
        assert_eq!(vertices[0].as_slice(), &[1.0, 2.0, 3.0]);
        assert_eq!(vertices[1].as_slice(), &[3.0, 4.0, 5.0]);
        assert_eq!(vertices[2].as_slice(), &[-1.5, 0.0, 22.5]);
    }

    #[test]
    fn test_extract_count_matches_v_lines() {
        let v_lines = TEST_OBJ
            .lines()
            .filter(|l| l.split_whitespace().next() == Some("v"))
            .count();
        assert_eq!(extract_vertices(TEST_OBJ).unwrap().len(), v_lines);
    }

    #[test]
    fn test_empty_content() {
        assert!(extract_vertices("").unwrap().is_empty());
        assert!(extract_vertices("\n\n").unwrap().is_empty());
    }

    #[test]
    fn test_malformed_coordinate_is_fatal() {
        let err = extract_vertices("v 1 2 3\nv 1 abc 3\n").unwrap_err();
        match err {
            Error::MalformedVertex { line, token } => {
                assert_eq!(line, 2);
                assert_eq!(token, "abc");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_vt_prefix_is_not_v() {
        // "vt"/"vn" share the leading byte but are different record kinds
        let vertices = extract_vertices("vt 1 2\nvn 1 2 3\nv 7 8 9\n").unwrap();
        assert_eq!(vertices.len(), 1);
        assert_eq!(vertices[0].as_slice(), &[7.0, 8.0, 9.0]);
    }

    #[test]
    fn test_crlf_and_missing_final_newline() {
        let vertices = extract_vertices("v 1 2 3\r\nv 4 5 6").unwrap();
        assert_eq!(vertices.len(), 2);
        assert_eq!(vertices[1].as_slice(), &[4.0, 5.0, 6.0]);
    }

    #[test]
    fn test_count_records() {
        let counts = count_records(TEST_OBJ);
        assert_eq!(counts.get("v"), Some(&3));
        assert_eq!(counts.get("f"), Some(&1));
        assert_eq!(counts.get("#"), Some(&1));
        assert_eq!(counts.get("vt"), Some(&1));
    }

    #[test]
    fn test_extract_file_missing_source() {
        let result = extract_file(Path::new("/nonexistent/mesh.obj")).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_extract_file_reads_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mesh.obj");
        fs::write(&path, "v 1 2 3\nf 1 2 3\n").unwrap();

        let vertices = extract_file(&path).unwrap().unwrap();
        assert_eq!(vertices.len(), 1);

        // A directory is not a regular file
        assert!(extract_file(dir.path()).unwrap().is_none());
    }
}
