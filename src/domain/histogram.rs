//! Equal-width frequency histogram.
//!
//! Binning follows the usual plotting convention: bins span `[min, max]` of
//! the data, every bin is half-open except the last, which also includes
//! `max`. When all values are equal the range is widened to
//! `[value - 0.5, value + 0.5]` so the bins keep a non-zero width.

use serde::Serialize;

/// One bin of a [`Histogram`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HistogramBin {
    pub lower: f64,
    pub upper: f64,
    pub count: u64,
}

/// Frequency histogram with `edges.len() == counts.len() + 1`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Histogram {
    edges: Vec<f64>,
    counts: Vec<u64>,
}

impl Histogram {
    /// Bin `values` into `bins` equal-width bins.
    ///
    /// Non-finite values are ignored. Returns `None` when `bins` is zero or
    /// no finite value remains.
    #[must_use]
    pub fn from_values(values: &[f64], bins: usize) -> Option<Self> {
        if bins == 0 {
            return None;
        }

        let finite: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
        let (mut lower, mut upper) = finite.iter().fold(None, |range, &v| match range {
            None => Some((v, v)),
            Some((lo, hi)) => Some((f64::min(lo, v), f64::max(hi, v))),
        })?;

        if lower == upper {
            lower -= 0.5;
            upper += 0.5;
        }

        let width = (upper - lower) / bins as f64;
        let mut edges: Vec<f64> = (0..bins).map(|i| lower + width * i as f64).collect();
        edges.push(upper);

        let mut counts = vec![0u64; bins];
        for v in finite {
            counts[bin_index(&edges, v)] += 1;
        }

        Some(Self { edges, counts })
    }

    /// Bin boundaries, one more than the number of bins.
    #[must_use]
    pub fn edges(&self) -> &[f64] {
        &self.edges
    }

    /// Number of values per bin.
    #[must_use]
    pub fn counts(&self) -> &[u64] {
        &self.counts
    }

    /// Total number of binned values.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Largest bin count.
    #[must_use]
    pub fn max_count(&self) -> u64 {
        self.counts.iter().copied().max().unwrap_or(0)
    }

    /// Iterate over bins with their bounds.
    pub fn bins(&self) -> impl Iterator<Item = HistogramBin> + '_ {
        self.counts
            .iter()
            .zip(self.edges.windows(2))
            .map(|(&count, edge)| HistogramBin {
                lower: edge[0],
                upper: edge[1],
                count,
            })
    }
}

fn bin_index(edges: &[f64], value: f64) -> usize {
    let bins = edges.len() - 1;
    let lower = edges[0];
    let width = (edges[bins] - lower) / bins as f64;
    let mut index = (((value - lower) / width).floor() as usize).min(bins - 1);

    // Float rounding can land a value one bin off its edges.
    if index > 0 && value < edges[index] {
        index -= 1;
    } else if index + 1 < bins && value >= edges[index + 1] {
        index += 1;
    }
    index
}
