//! Summary statistics over the category buckets.
//!
//! Each category reports its count. Non-empty numeric categories also get
//! min, max, sum, average and median; non-empty strings get the shortest and
//! longest length. An empty category keeps `summary: None` so nothing is ever
//! computed over an empty slice.
//!
//! The median is the element at index `n / 2` of the sorted values, so an
//! even-length bucket yields the upper of the two middle elements.

use serde::Serialize;

use crate::state::Buckets;

/// Derived figures for the integer bucket.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct IntegerSummary {
    pub min: i64,
    pub max: i64,
    /// Accumulated in `i128` so no `i64` bucket of realistic size overflows
    pub sum: i128,
    /// `sum / count` as a float: `[1, 2]` averages to `1.5`
    pub average: f64,
    pub median: i64,
}

/// Derived figures for the float bucket.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FloatSummary {
    pub min: f64,
    pub max: f64,
    pub sum: f64,
    pub average: f64,
    pub median: f64,
}

/// Length extremes for the string bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StringSummary {
    pub shortest: usize,
    pub longest: usize,
}

/// Count plus optional derived figures for one category.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CategoryStats<S> {
    pub count: usize,
    pub summary: Option<S>,
}

impl<S> Default for CategoryStats<S> {
    fn default() -> Self {
        Self {
            count: 0,
            summary: None,
        }
    }
}

/// Statistics for a whole run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct StatsSnapshot {
    pub integers: CategoryStats<IntegerSummary>,
    pub floats: CategoryStats<FloatSummary>,
    pub strings: CategoryStats<StringSummary>,
}

impl StatsSnapshot {
    /// Compute statistics over all three buckets.
    pub fn compute(buckets: &Buckets) -> Self {
        Self {
            integers: integer_stats(&buckets.integers),
            floats: float_stats(&buckets.floats),
            strings: string_stats(&buckets.string_lengths),
        }
    }
}

/// Compute integer statistics. Empty input yields a zero count.
pub fn integer_stats(values: &[i64]) -> CategoryStats<IntegerSummary> {
    if values.is_empty() {
        return CategoryStats::default();
    }

    let mut sorted = values.to_vec();
    sorted.sort_unstable();

    let sum: i128 = values.iter().map(|&n| i128::from(n)).sum();
    let count = values.len();

    CategoryStats {
        count,
        summary: Some(IntegerSummary {
            min: sorted[0],
            max: sorted[count - 1],
            sum,
            average: sum as f64 / count as f64,
            median: sorted[count / 2],
        }),
    }
}

/// Compute float statistics. Empty input yields a zero count.
pub fn float_stats(values: &[f64]) -> CategoryStats<FloatSummary> {
    if values.is_empty() {
        return CategoryStats::default();
    }

    let mut sorted = values.to_vec();
    // total order: -0.0 sorts below 0.0
    sorted.sort_unstable_by(f64::total_cmp);

    let sum: f64 = values.iter().sum();
    let count = values.len();

    CategoryStats {
        count,
        summary: Some(FloatSummary {
            min: sorted[0],
            max: sorted[count - 1],
            sum,
            average: sum / count as f64,
            median: sorted[count / 2],
        }),
    }
}

/// Compute string length statistics. Empty input yields a zero count.
pub fn string_stats(lengths: &[usize]) -> CategoryStats<StringSummary> {
    match (lengths.iter().min(), lengths.iter().max()) {
        (Some(&shortest), Some(&longest)) => CategoryStats {
            count: lengths.len(),
            summary: Some(StringSummary { shortest, longest }),
        },
        _ => CategoryStats::default(),
    }
}
