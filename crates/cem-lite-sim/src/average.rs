// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Grouped coordinate averaging
//!
//! Partitions a vertex sequence into consecutive fixed-size groups and
//! computes the per-axis arithmetic mean of each group, scaled by a
//! frequency multiplier.

use cem_lite_model::{Dimension, Error, Result, Vertex};

/// Number of vertex records per averaging group
pub const GROUP_SIZE: usize = 10;

/// One averaged output row: `dimension` values in axis order
pub type AveragedRow = Vec<f64>;

/// Average a vertex sequence in consecutive groups of [`GROUP_SIZE`]
///
/// Groups partition the input exactly, in order; the final group may hold
/// fewer than [`GROUP_SIZE`] records and is divided by its true length.
/// Each output value is `mean(axis) * frequency`. An empty input yields an
/// empty output. A record shorter than `dimension` is a contract violation
/// reported as [`Error::ShortVertex`].
pub fn group_averages(
    vertices: &[Vertex],
    dimension: Dimension,
    frequency: f64,
) -> Result<Vec<AveragedRow>> {
    let axes = dimension.axis_count();
    let mut rows = Vec::with_capacity(vertices.len().div_ceil(GROUP_SIZE));

    for (group_no, group) in vertices.chunks(GROUP_SIZE).enumerate() {
        let mut sums = vec![0.0f64; axes];
        for vertex in group {
            if vertex.len() < axes {
                return Err(Error::ShortVertex {
                    group: group_no,
                    len: vertex.len(),
                    dimension: axes,
                });
            }
            for (axis, sum) in sums.iter_mut().enumerate() {
                *sum += vertex.as_slice()[axis];
            }
        }
        // Divide by the group's actual size, then scale
        let divisor = group.len() as f64;
        rows.push(sums.into_iter().map(|s| s / divisor * frequency).collect());
    }

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn vertex(coords: &[f64]) -> Vertex {
        Vertex::new(coords.to_vec())
    }

    #[test]
    fn test_row_count_is_ceil_of_group_size() {
        for (n, expected) in [(0usize, 0usize), (1, 1), (9, 1), (10, 1), (11, 2), (25, 3)] {
            let vertices: Vec<Vertex> = (0..n).map(|_| vertex(&[0.0, 0.0, 0.0])).collect();
            let rows = group_averages(&vertices, Dimension::Three, 1.0).unwrap();
            assert_eq!(rows.len(), expected, "n = {n}");
        }
    }

    #[test]
    fn test_two_vertex_group_mean() {
        // One group [[1,2,3],[3,4,5]] at dimension 2 -> [2.0, 3.0]
        let vertices = vec![vertex(&[1.0, 2.0, 3.0]), vertex(&[3.0, 4.0, 5.0])];
        let rows = group_averages(&vertices, Dimension::Two, 1.0).unwrap();
        assert_eq!(rows, vec![vec![2.0, 3.0]]);
    }

    #[test]
    fn test_single_vertex_passthrough() {
        let vertices = vec![vertex(&[4.0, 5.0, 6.0])];
        let rows = group_averages(&vertices, Dimension::Two, 1.0).unwrap();
        assert_eq!(rows, vec![vec![4.0, 5.0]]);

        let scaled = group_averages(&vertices, Dimension::Two, 2.5).unwrap();
        assert_eq!(scaled, vec![vec![10.0, 12.5]]);
    }

    #[test]
    fn test_partial_group_uses_true_length() {
        // 11 identical vertices: both groups average to the same row even
        // though the divisors differ (10 vs 1)
        let vertices: Vec<Vertex> = (0..11).map(|_| vertex(&[3.0, 6.0, 9.0])).collect();
        let rows = group_averages(&vertices, Dimension::Three, 1.0).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], rows[1]);
        assert_eq!(rows[0], vec![3.0, 6.0, 9.0]);
    }

    #[test]
    fn test_one_third_means() {
        let vertices = vec![
            vertex(&[1.0, 0.0, 0.0]),
            vertex(&[0.0, 1.0, 0.0]),
            vertex(&[0.0, 0.0, 1.0]),
        ];
        let rows = group_averages(&vertices, Dimension::Three, 1.0).unwrap();
        assert_eq!(rows.len(), 1);
        for value in &rows[0] {
            assert_relative_eq!(*value, 1.0 / 3.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_zero_frequency_zeroes_output() {
        let vertices = vec![vertex(&[7.0, 8.0, 9.0])];
        let rows = group_averages(&vertices, Dimension::Three, 0.0).unwrap();
        assert_eq!(rows, vec![vec![0.0, 0.0, 0.0]]);
    }

    #[test]
    fn test_short_vertex_is_an_error() {
        let vertices = vec![vertex(&[1.0, 2.0, 3.0]), vertex(&[1.0])];
        let err = group_averages(&vertices, Dimension::Two, 1.0).unwrap_err();
        assert!(matches!(
            err,
            Error::ShortVertex {
                group: 0,
                len: 1,
                dimension: 2
            }
        ));
    }

    #[test]
    fn test_empty_input() {
        assert!(group_averages(&[], Dimension::One, 1.0).unwrap().is_empty());
    }
}
